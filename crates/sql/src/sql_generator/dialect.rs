//! The contract between the engine and a source dialect.

use datafusion::arrow::datatypes::DataType;
use datafusion::logical_expr::Expr;
use datafusion::sql::unparser::dialect::DefaultDialect;
use keelson_error::{BoxError, CatalogError};

use super::aggregate::{compile_standard_aggregate, AggregateCall};
use super::expr::render_expression;
use super::types::{common_native_type, NativeType};

/// Backend-specific translation hooks the engine calls during planning.
///
/// Every method has a dialect-agnostic default; a dialect overrides only
/// where its backend deviates. All methods are pure functions over their
/// inputs, so a dialect can be shared behind an `Arc` across worker
/// threads.
pub trait SourceDialect: Send + Sync {
    /// Short name used in routing decisions and diagnostics.
    fn name(&self) -> &'static str;

    /// Whether this dialect claims the given connection string.
    fn can_handle(&self, connection: &str) -> bool;

    /// The backend column type for an engine type, or `None` to keep the
    /// engine's default representation.
    fn native_type(&self, data_type: &DataType) -> Option<NativeType> {
        common_native_type(data_type)
    }

    /// Render an expression in the backend's SQL, or `None` to evaluate it
    /// locally.
    fn compile_expression(&self, expr: &Expr) -> Option<String> {
        render_expression(expr, &DefaultDialect {})
    }

    /// Render an aggregate call in the backend's SQL, or `None` to
    /// evaluate it locally.
    fn compile_aggregate(&self, call: &AggregateCall) -> Option<String> {
        compile_standard_aggregate(call)
    }

    /// Reclassify a backend error into a semantic category.
    ///
    /// Total: errors no dialect rule recognizes land in
    /// [`CatalogError::Unclassified`] with the message and cause preserved.
    fn classify_error(&self, message: &str, error: BoxError) -> CatalogError {
        CatalogError::unclassified(message, error)
    }
}
