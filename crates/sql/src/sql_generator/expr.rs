//! Best-effort expression rendering over DataFusion's Unparser.

use datafusion::logical_expr::Expr;
use datafusion::sql::unparser::dialect::Dialect;
use datafusion::sql::unparser::Unparser;

/// Render an expression as SQL text for the given unparser dialect.
///
/// Pushdown compilation is best-effort: a rendering failure is logged and
/// reported as `None` so the engine falls back to evaluating the expression
/// locally instead of aborting the whole plan.
pub fn render_expression(expr: &Expr, dialect: &dyn Dialect) -> Option<String> {
    let unparser = Unparser::new(dialect);
    match unparser.expr_to_sql(expr) {
        Ok(sql) => Some(sql.to_string()),
        Err(e) => {
            tracing::warn!(
                expr = ?expr,
                error = %e,
                "expression not renderable for remote source, evaluating locally"
            );
            None
        }
    }
}
