use crate::ConditionRouterConfig;

/// Keys collected from a router config document. Absent keys stay `None`.
#[derive(Debug, Default)]
pub struct ParsedConfig {
    pub priority: Option<i64>,
    pub force: Option<bool>,
    pub conditions: Option<Vec<String>>,
}

impl ParsedConfig {
    /// Fill absent keys with their defaults: priority 0, force off, no conditions.
    pub fn into_config(self) -> ConditionRouterConfig {
        ConditionRouterConfig::new(
            self.priority.unwrap_or_default(),
            self.force.unwrap_or_default(),
            self.conditions.unwrap_or_default(),
        )
    }
}
