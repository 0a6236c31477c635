//! Per-backend dialect implementations.
//!
//! Each dialect implements [`crate::sql_generator::SourceDialect`] plus
//! DataFusion's unparser `Dialect` so the shared renderer produces
//! backend-flavored SQL.

mod h2;

pub use h2::{H2DatabaseError, H2Dialect};
