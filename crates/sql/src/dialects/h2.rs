//! H2 Dialect
//!
//! Translates engine types and expressions into H2's SQL vocabulary and
//! reclassifies native H2 error codes into engine categories.

use datafusion::arrow::datatypes::DataType;
use datafusion::common::tree_node::{TreeNode, TreeNodeRecursion};
use datafusion::logical_expr::Expr;
use datafusion::sql::unparser::dialect::Dialect;
use keelson_error::{BoxError, CatalogError, ObjectKind};
use thiserror::Error;

use crate::sql_generator::aggregate::{compile_standard_aggregate, render_call, AggregateCall};
use crate::sql_generator::dialect::SourceDialect;
use crate::sql_generator::expr::render_expression;
use crate::sql_generator::types::{common_native_type, type_codes, NativeType};

/// Connection scheme claimed by this dialect.
const SCHEME_PREFIX: &str = "h2:";

/// Engine functions H2 cannot execute. The generic renderer would happily
/// emit syntax for these, so they are rejected before rendering instead of
/// being shipped to a backend that will reject the query.
const UNSUPPORTED_FUNCTIONS: &[&str] = &["width_bucket"];

/// Native H2 error codes this dialect knows how to classify.
mod error_codes {
    pub const TABLE_OR_VIEW_ALREADY_EXISTS: i32 = 42101;
    pub const TABLE_OR_VIEW_NOT_FOUND: i32 = 42102;
    pub const SCHEMA_NOT_FOUND: i32 = 90079;
}

/// An error surfaced by the H2 driver: vendor error code plus message.
#[derive(Debug, Error)]
#[error("[{code}] {message}")]
pub struct H2DatabaseError {
    pub code: i32,
    pub message: String,
}

impl H2DatabaseError {
    pub fn new(code: i32, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }
}

/// Source dialect for the H2 database.
#[derive(Debug, Clone, Copy, Default)]
pub struct H2Dialect;

impl H2Dialect {
    pub fn new() -> Self {
        Self
    }
}

impl Dialect for H2Dialect {
    fn identifier_quote_style(&self, _identifier: &str) -> Option<char> {
        Some('"')
    }

    fn supports_nulls_first_in_sort(&self) -> bool {
        true
    }
}

impl SourceDialect for H2Dialect {
    fn name(&self) -> &'static str {
        "h2"
    }

    fn can_handle(&self, connection: &str) -> bool {
        connection.to_ascii_lowercase().starts_with(SCHEME_PREFIX)
    }

    fn native_type(&self, data_type: &DataType) -> Option<NativeType> {
        match data_type {
            DataType::Utf8 | DataType::LargeUtf8 => {
                Some(NativeType::new("CLOB", type_codes::CLOB))
            }
            DataType::Boolean => Some(NativeType::new("BOOLEAN", type_codes::BOOLEAN)),
            DataType::Int16 | DataType::Int8 => {
                Some(NativeType::new("SMALLINT", type_codes::SMALLINT))
            }
            DataType::Decimal128(precision, scale) => Some(NativeType::new(
                format!("NUMERIC({precision},{scale})"),
                type_codes::NUMERIC,
            )),
            other => common_native_type(other),
        }
    }

    fn compile_expression(&self, expr: &Expr) -> Option<String> {
        if let Some(function) = rejected_function(expr) {
            tracing::warn!(
                function = %function,
                expr = ?expr,
                "function not supported by H2, evaluating locally"
            );
            return None;
        }
        render_expression(expr, self)
    }

    fn compile_aggregate(&self, call: &AggregateCall) -> Option<String> {
        if let Some(sql) = compile_standard_aggregate(call) {
            return Some(sql);
        }
        let name = call.function.to_ascii_uppercase();
        match name.as_str() {
            "VAR_POP" | "VAR_SAMP" | "STDDEV_POP" | "STDDEV_SAMP" => {
                assert_eq!(
                    call.args.len(),
                    1,
                    "{name} takes exactly one argument, got {}",
                    call.args.len()
                );
                Some(render_call(&name, &call.args, call.distinct))
            }
            "COVAR_POP" | "COVAR_SAMP" | "CORR" => {
                assert_eq!(
                    call.args.len(),
                    2,
                    "{name} takes exactly two arguments, got {}",
                    call.args.len()
                );
                Some(render_call(&name, &call.args, call.distinct))
            }
            _ => None,
        }
    }

    fn classify_error(&self, message: &str, error: BoxError) -> CatalogError {
        match error.downcast_ref::<H2DatabaseError>().map(|e| e.code) {
            Some(error_codes::TABLE_OR_VIEW_ALREADY_EXISTS) => {
                CatalogError::already_exists(message, error)
            }
            Some(error_codes::TABLE_OR_VIEW_NOT_FOUND) => {
                CatalogError::not_found(ObjectKind::Table, message, error)
            }
            Some(error_codes::SCHEMA_NOT_FOUND) => {
                CatalogError::not_found(ObjectKind::Namespace, message, error)
            }
            _ => CatalogError::unclassified(message, error),
        }
    }
}

/// First deny-listed scalar function anywhere in the tree, if any.
fn rejected_function(expr: &Expr) -> Option<String> {
    let mut rejected = None;
    // the closure is infallible, so the traversal cannot fail
    let _ = expr.apply(|node| {
        if let Expr::ScalarFunction(func) = node {
            if UNSUPPORTED_FUNCTIONS.contains(&func.name().to_ascii_lowercase().as_str()) {
                rejected = Some(func.name().to_string());
                return Ok(TreeNodeRecursion::Stop);
            }
        }
        Ok(TreeNodeRecursion::Continue)
    });
    rejected
}
