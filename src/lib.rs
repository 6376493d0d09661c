//! Compiles condition-router rules into routing descriptors.
//!
//! A router config holds an ordered list of conditions such as
//! `host = 10.0.0.1 => host = 10.0.0.2`. Consumer halves (left of `=>`) and
//! provider halves are joined with ` & ` into one `when => then` rule, which
//! is then packaged with the config's priority and force flag into a
//! [`RoutingDescriptor`] for a [`Directory`].
//!
//! ```
//! use condroute::{ConditionRouterConfig, build_descriptor, compile_rule};
//!
//! let config = ConditionRouterConfig::new(1, true, ["a => b", "c => d"]);
//! let rule = compile_rule(config.conditions());
//! assert_eq!(rule, "a & c => b & d");
//!
//! let descriptor = build_descriptor(&config, &rule);
//! assert_eq!(descriptor.decoded_rule().unwrap(), rule);
//! ```

mod build;
mod compile;
mod directory;
mod error;
mod init;
mod loader;
pub mod parse;
mod types;

pub use build::build_descriptor;
pub use directory::{Directory, MemoryDirectory};
pub use error::LoadError;
pub use init::{InitState, RouterInitializer};
pub use loader::{ConfigLoader, FileLoader};
pub use parse::ParseError;
pub use types::{
    ANY_HOST, CATEGORY_KEY, CLAUSE_JOINER, CONDITION_SEPARATOR, Condition,
    ConditionRouterConfig, EXPRESSION_JOINER, FORCE_KEY, PRIORITY_KEY, ROUTE_PROTOCOL,
    ROUTER_KEY, ROUTERS_CATEGORY, RULE_KEY, RouterKind, RoutingDescriptor, RuleDecodeError,
    RuleExpression,
};

/// Compile an ordered list of conditions into the canonical `when => then` string.
///
/// Never fails: conditions without `=>` are dropped and empty halves are ignored.
#[must_use]
pub fn compile_rule<S: AsRef<str>>(conditions: &[S]) -> String {
    compile::compile(conditions).to_string()
}

/// Like [`compile_rule()`] but keeps the individual clauses.
pub fn compile_expression<S: AsRef<str>>(conditions: &[S]) -> RuleExpression {
    compile::compile(conditions)
}
