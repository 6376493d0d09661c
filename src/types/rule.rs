use std::fmt;

/// Token splitting a condition into its consumer and provider halves.
pub const CONDITION_SEPARATOR: &str = "=>";

/// Joins accumulated clauses on one side of a compiled rule.
pub const CLAUSE_JOINER: &str = " & ";

/// Joins the `when` and `then` sides of a compiled rule.
pub const EXPRESSION_JOINER: &str = " => ";

/// A single condition split at its first `=>`.
///
/// Both halves are trimmed and may be empty. Anything after the first
/// separator, including further `=>` tokens, belongs to the provider half.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Condition<'a> {
    pub consumer: &'a str,
    pub provider: &'a str,
}

impl<'a> Condition<'a> {
    /// Split a raw condition string.
    ///
    /// Returns `None` when the text has no `=>` separator.
    #[must_use]
    pub fn parse(raw: &'a str) -> Option<Self> {
        let (consumer, provider) = raw.trim().split_once(CONDITION_SEPARATOR)?;
        Some(Self {
            consumer: consumer.trim(),
            provider: provider.trim(),
        })
    }
}

/// The canonical `when => then` expression compiled from a list of conditions.
///
/// Produced by [`compile_expression()`](crate::compile_expression). The
/// `Display` impl renders the exact string that ends up, encoded, in a
/// routing descriptor.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[must_use]
pub struct RuleExpression {
    pub(crate) when: Vec<String>,
    pub(crate) then: Vec<String>,
    pub(crate) skipped: usize,
}

impl RuleExpression {
    /// Consumer-side clauses in input order.
    #[must_use]
    pub fn when_clauses(&self) -> &[String] {
        &self.when
    }

    /// Provider-side clauses in input order.
    #[must_use]
    pub fn then_clauses(&self) -> &[String] {
        &self.then
    }

    /// The joined consumer side, empty when no condition contributed one.
    #[must_use]
    pub fn when(&self) -> String {
        self.when.join(CLAUSE_JOINER)
    }

    /// The joined provider side, empty when no condition contributed one.
    #[must_use]
    pub fn then(&self) -> String {
        self.then.join(CLAUSE_JOINER)
    }

    /// Number of input conditions dropped for lacking a `=>` separator.
    #[must_use]
    pub fn skipped(&self) -> usize {
        self.skipped
    }
}

impl fmt::Display for RuleExpression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{EXPRESSION_JOINER}{}", self.when(), self.then())
    }
}
