use tracing::{debug, trace};

use crate::{Condition, RuleExpression};

/// Fold an ordered list of conditions into one [`RuleExpression`].
///
/// Consumer halves accumulate into `when` and provider halves into `then`,
/// each independently and in input order. Empty halves contribute nothing.
/// Conditions without a `=>` separator are dropped.
pub(crate) fn compile<S: AsRef<str>>(conditions: &[S]) -> RuleExpression {
    let mut expr = RuleExpression::default();

    for (position, raw) in conditions.iter().enumerate() {
        let raw = raw.as_ref();
        let Some(condition) = Condition::parse(raw) else {
            debug!(position, condition = raw, "skipping condition without `=>`");
            expr.skipped += 1;
            continue;
        };

        if !condition.consumer.is_empty() {
            trace!(position, clause = condition.consumer, "when clause");
            expr.when.push(condition.consumer.to_owned());
        }
        if !condition.provider.is_empty() {
            trace!(position, clause = condition.provider, "then clause");
            expr.then.push(condition.provider.to_owned());
        }
    }

    expr
}

#[cfg(test)]
mod tests {
    use super::compile;

    fn compiled(conditions: &[&str]) -> String {
        compile(conditions).to_string()
    }

    #[test]
    fn compile_empty_list() {
        assert_eq!(compiled(&[]), " => ");
    }

    #[test]
    fn compile_single_condition() {
        assert_eq!(compiled(&["a=>b"]), "a => b");
    }

    #[test]
    fn compile_accumulates_both_sides() {
        assert_eq!(compiled(&["a=>b", "c=>d"]), "a & c => b & d");
    }

    #[test]
    fn compile_sides_accumulate_independently() {
        assert_eq!(compiled(&["a=>", "=>b", "c=>d"]), "a & c => b & d");
    }

    #[test]
    fn compile_trims_whitespace() {
        assert_eq!(compiled(&["  a => b  "]), "a => b");
    }

    #[test]
    fn compile_splits_at_first_separator_only() {
        let expr = compile(&["a=>b=>c"]);
        assert_eq!(expr.when(), "a");
        assert_eq!(expr.then(), "b=>c");
        assert_eq!(expr.to_string(), "a => b=>c");
    }

    #[test]
    fn compile_skips_condition_without_separator() {
        let expr = compile(&["novalidtoken"]);
        assert_eq!(expr.to_string(), " => ");
        assert_eq!(expr.skipped(), 1);
    }

    #[test]
    fn compile_one_sided_conditions() {
        assert_eq!(compiled(&["a=>"]), "a => ");
        assert_eq!(compiled(&["=>b"]), " => b");
        assert_eq!(compiled(&["  =>  "]), " => ");
    }

    #[test]
    fn compile_keeps_input_order() {
        assert_eq!(
            compiled(&["z => 3", "skip me", "y => 2", "x => 1"]),
            "z & y & x => 3 & 2 & 1"
        );
    }

    #[test]
    fn compile_accepts_owned_strings() {
        let conditions = vec![String::from("host = a => host = b")];
        assert_eq!(compile(&conditions).to_string(), "host = a => host = b");
    }
}
