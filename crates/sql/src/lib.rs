//! SQL dialect translation for Keelson.
//!
//! The engine plans queries over DataFusion logical expressions; pushing a
//! plan fragment down to a remote source means re-expressing it in that
//! source's SQL and type vocabulary. This crate carries:
//!
//! - **`sql_generator`**: the engine-side seam shared by every dialect:
//!   the [`SourceDialect`] contract, the dialect-agnostic type mapping, and
//!   the best-effort renderers dialects delegate to.
//! - **`dialects`**: per-backend implementations (currently H2).
//! - **`dialect_router`**: connection-string based dialect selection.

pub mod dialect_router;
pub mod dialects;
pub mod sql_generator;

pub use dialect_router::{resolve_dialect, DialectKind};
pub use sql_generator::SourceDialect;
