use std::path::Path;

use crate::{LoadError, RoutingDescriptor, RuleExpression};

/// A condition router rule set as read from a router config file.
///
/// `conditions` is kept in file order; that order decides how clauses are
/// joined in the compiled rule. Instances are immutable once built.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct ConditionRouterConfig {
    priority: i64,
    force: bool,
    conditions: Vec<String>,
}

impl ConditionRouterConfig {
    /// Key prefix under which router settings live in the wider framework config.
    pub const PREFIX: &'static str = "dubbo.router.";

    #[must_use]
    pub fn new<I, S>(priority: i64, force: bool, conditions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            priority,
            force,
            conditions: conditions.into_iter().map(Into::into).collect(),
        }
    }

    /// Parse a router config document.
    ///
    /// # Errors
    ///
    /// Returns [`LoadError::Parse`] if the document is not a valid router config.
    pub fn from_yaml(input: &str) -> Result<Self, LoadError> {
        let parsed = crate::parse::parse(input)?;
        Ok(parsed.into_config())
    }

    /// Read and parse a router config file.
    ///
    /// # Errors
    ///
    /// Returns [`LoadError`] on I/O or parse failure.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, LoadError> {
        let input = std::fs::read_to_string(path)?;
        Self::from_yaml(&input)
    }

    #[must_use]
    pub fn priority(&self) -> i64 {
        self.priority
    }

    #[must_use]
    pub fn force(&self) -> bool {
        self.force
    }

    #[must_use]
    pub fn conditions(&self) -> &[String] {
        &self.conditions
    }

    /// Compile this config's conditions into a rule expression.
    pub fn compile(&self) -> RuleExpression {
        crate::compile::compile(&self.conditions)
    }

    /// Compile and package this config as a routing descriptor.
    pub fn to_descriptor(&self) -> RoutingDescriptor {
        crate::build::build_descriptor(self, &self.compile().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let config = ConditionRouterConfig::default();
        assert_eq!(config.priority(), 0);
        assert!(!config.force());
        assert!(config.conditions().is_empty());
    }

    #[test]
    fn new_keeps_condition_order() {
        let config = ConditionRouterConfig::new(3, true, ["b => 1", "a => 2"]);
        assert_eq!(config.priority(), 3);
        assert!(config.force());
        assert_eq!(config.conditions(), ["b => 1", "a => 2"]);
    }

    #[test]
    fn compile_uses_conditions() {
        let config = ConditionRouterConfig::new(0, false, ["a => b", "c => d"]);
        assert_eq!(config.compile().to_string(), "a & c => b & d");
    }

    #[test]
    fn from_yaml_parses_all_keys() {
        let config = ConditionRouterConfig::from_yaml(
            "priority: 2\nforce: true\nconditions:\n  - a => b\n",
        )
        .unwrap();
        assert_eq!(config, ConditionRouterConfig::new(2, true, ["a => b"]));
    }

    #[test]
    fn from_file_missing_is_io_error() {
        let result = ConditionRouterConfig::from_file("/nonexistent/router.yml");
        assert!(matches!(result, Err(LoadError::Io(_))));
    }
}
