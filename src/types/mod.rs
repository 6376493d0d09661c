mod config;
pub(crate) mod descriptor;
mod rule;

pub use config::ConditionRouterConfig;
pub use descriptor::{
    ANY_HOST, CATEGORY_KEY, FORCE_KEY, PRIORITY_KEY, ROUTE_PROTOCOL, ROUTER_KEY,
    ROUTERS_CATEGORY, RULE_KEY, RouterKind, RoutingDescriptor, RuleDecodeError,
};
pub use rule::{CLAUSE_JOINER, CONDITION_SEPARATOR, Condition, EXPRESSION_JOINER, RuleExpression};
