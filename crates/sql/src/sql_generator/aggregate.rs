//! Aggregate-call rendering shared by all dialects.

/// An aggregate invocation as handed over by the engine.
///
/// Argument expressions are rendered to SQL text before the dialect sees
/// them; only the call shape is left to translate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AggregateCall {
    pub function: String,
    pub args: Vec<String>,
    pub distinct: bool,
}

impl AggregateCall {
    pub fn new(function: impl Into<String>, args: Vec<String>, distinct: bool) -> Self {
        Self {
            function: function.into(),
            args,
            distinct,
        }
    }
}

/// The aggregate forms every SQL backend accepts.
const STANDARD_AGGREGATES: &[&str] = &["AVG", "COUNT", "MAX", "MIN", "SUM"];

/// Render a standard aggregate, or decline when the function is outside
/// the portable set so the dialect can try its own extensions.
pub fn compile_standard_aggregate(call: &AggregateCall) -> Option<String> {
    let name = call.function.to_ascii_uppercase();
    if !STANDARD_AGGREGATES.contains(&name.as_str()) {
        return None;
    }
    assert_eq!(
        call.args.len(),
        1,
        "{name} takes exactly one argument, got {}",
        call.args.len()
    );
    Some(render_call(&name, &call.args, call.distinct))
}

/// Render `FUNC([DISTINCT ]arg, ...)` with arguments in call order.
pub(crate) fn render_call(name: &str, args: &[String], distinct: bool) -> String {
    let qualifier = if distinct { "DISTINCT " } else { "" };
    format!("{name}({qualifier}{})", args.join(", "))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_names_render_uppercase() {
        let call = AggregateCall::new("sum", vec!["amount".into()], false);
        assert_eq!(compile_standard_aggregate(&call), Some("SUM(amount)".into()));
    }

    #[test]
    fn distinct_immediately_precedes_the_argument() {
        let call = AggregateCall::new("COUNT", vec!["id".into()], true);
        assert_eq!(
            compile_standard_aggregate(&call),
            Some("COUNT(DISTINCT id)".into())
        );
    }

    #[test]
    fn non_standard_names_decline() {
        let call = AggregateCall::new("median", vec!["x".into()], false);
        assert_eq!(compile_standard_aggregate(&call), None);
    }
}
