//! Engine-side SQL generation seam shared by all dialects.

pub mod aggregate;
pub mod dialect;
pub mod expr;
pub mod types;

pub use aggregate::AggregateCall;
pub use dialect::SourceDialect;
pub use types::NativeType;
