//! # keelson-error
//!
//! Semantic error categories for the Keelson federated query engine.
//!
//! Backend drivers raise vendor-specific errors. Source dialects reclassify
//! them into the closed set of categories below so the engine's error
//! handling can branch on meaning instead of vendor codes. Classification
//! is total: anything a dialect does not recognize lands in
//! [`CatalogError::Unclassified`].

use std::fmt;

use thiserror::Error;

/// Boxed source error retained as the cause of a classified error.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// The kind of catalog object an operation failed to resolve.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ObjectKind {
    Table,
    Namespace,
}

impl fmt::Display for ObjectKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ObjectKind::Table => write!(f, "table"),
            ObjectKind::Namespace => write!(f, "namespace"),
        }
    }
}

/// A backend error reclassified into a category the engine understands.
///
/// The display text is the original backend message, verbatim; the category
/// lives in the variant and the vendor error stays reachable through
/// [`std::error::Error::source`].
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The object an operation tried to create is already present.
    #[error("{message}")]
    AlreadyExists {
        message: String,
        #[source]
        source: BoxError,
    },

    /// The object an operation referenced does not exist.
    #[error("{message}")]
    NotFound {
        kind: ObjectKind,
        message: String,
        #[source]
        source: BoxError,
    },

    /// No classification rule matched; the guaranteed floor category.
    #[error("{message}")]
    Unclassified {
        message: String,
        #[source]
        source: BoxError,
    },
}

impl CatalogError {
    pub fn already_exists(message: impl Into<String>, source: BoxError) -> Self {
        Self::AlreadyExists {
            message: message.into(),
            source,
        }
    }

    pub fn not_found(kind: ObjectKind, message: impl Into<String>, source: BoxError) -> Self {
        Self::NotFound {
            kind,
            message: message.into(),
            source,
        }
    }

    /// The fallback classification every unrecognized error resolves to.
    pub fn unclassified(message: impl Into<String>, source: BoxError) -> Self {
        Self::Unclassified {
            message: message.into(),
            source,
        }
    }

    /// The original backend message, verbatim.
    pub fn message(&self) -> &str {
        match self {
            Self::AlreadyExists { message, .. }
            | Self::NotFound { message, .. }
            | Self::Unclassified { message, .. } => message,
        }
    }

    /// The missing object's kind, for [`CatalogError::NotFound`].
    pub fn object_kind(&self) -> Option<ObjectKind> {
        match self {
            Self::NotFound { kind, .. } => Some(*kind),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    fn backend_error() -> BoxError {
        Box::new(std::io::Error::other("vendor failure"))
    }

    #[test]
    fn display_is_the_original_message() {
        let err = CatalogError::already_exists("T exists", backend_error());
        assert_eq!(err.to_string(), "T exists");
        assert_eq!(err.message(), "T exists");
    }

    #[test]
    fn cause_chain_reaches_the_backend_error() {
        let err = CatalogError::not_found(ObjectKind::Table, "missing", backend_error());
        assert_eq!(err.source().expect("cause").to_string(), "vendor failure");
    }

    #[test]
    fn object_kind_is_exposed_for_not_found_only() {
        let not_found = CatalogError::not_found(ObjectKind::Namespace, "m", backend_error());
        assert_eq!(not_found.object_kind(), Some(ObjectKind::Namespace));

        let unclassified = CatalogError::unclassified("m", backend_error());
        assert_eq!(unclassified.object_kind(), None);
    }

    #[test]
    fn object_kind_renders_lowercase() {
        assert_eq!(ObjectKind::Table.to_string(), "table");
        assert_eq!(ObjectKind::Namespace.to_string(), "namespace");
    }
}
