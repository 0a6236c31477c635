//! Connection-string based dialect selection.
//!
//! Sources either pin a dialect explicitly in configuration
//! (`dialect: h2`) or let the engine sniff the connection scheme. Both
//! paths resolve through the same registry; a connection no dialect claims
//! falls back to local execution.

use std::sync::Arc;

use serde::Deserialize;

use crate::dialects::H2Dialect;
use crate::sql_generator::dialect::SourceDialect;

/// Dialects a source configuration can name explicitly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DialectKind {
    H2,
}

impl DialectKind {
    /// The dialect implementation for this kind.
    pub fn dialect(self) -> Arc<dyn SourceDialect> {
        match self {
            DialectKind::H2 => Arc::new(H2Dialect::new()),
        }
    }
}

/// All registered dialects, in match priority order.
fn registry() -> Vec<Arc<dyn SourceDialect>> {
    vec![Arc::new(H2Dialect::new())]
}

/// Resolve a connection string to the dialect that claims it.
///
/// `None` means no pushdown: the engine fetches rows and executes the plan
/// locally.
pub fn resolve_dialect(connection: &str) -> Option<Arc<dyn SourceDialect>> {
    let resolved = registry().into_iter().find(|d| d.can_handle(connection));
    if resolved.is_none() {
        // connection strings can embed credentials, log the scheme only
        let scheme = connection.split(':').next().unwrap_or_default();
        tracing::warn!(
            scheme = %scheme,
            "no dialect claims connection string, falling back to local execution"
        );
    }
    resolved
}
