use std::collections::BTreeMap;
use std::fmt;
use std::string::FromUtf8Error;

use base64::Engine as _;
use base64::engine::general_purpose::URL_SAFE;
use thiserror::Error;

/// Protocol marking a descriptor as a routing rule rather than a provider.
pub const ROUTE_PROTOCOL: &str = "route";

/// Host meaning "applies regardless of address".
pub const ANY_HOST: &str = "0.0.0.0";

pub const FORCE_KEY: &str = "force";
pub const PRIORITY_KEY: &str = "priority";
pub const RULE_KEY: &str = "rule";
pub const ROUTER_KEY: &str = "router";
pub const CATEGORY_KEY: &str = "category";

/// Category value shared by all routing-rule descriptors.
pub const ROUTERS_CATEGORY: &str = "routers";

/// The rule engine a descriptor's `rule` parameter is written for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouterKind {
    Condition,
}

impl RouterKind {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            RouterKind::Condition => "condition",
        }
    }
}

impl fmt::Display for RouterKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Errors recovering the rule text from a descriptor.
#[derive(Debug, Error)]
pub enum RuleDecodeError {
    #[error("descriptor has no 'rule' parameter")]
    MissingRule,

    #[error("rule parameter is not valid url-safe base64: {0}")]
    Base64(#[from] base64::DecodeError),

    #[error("decoded rule is not valid UTF-8: {0}")]
    Utf8(#[from] FromUtf8Error),
}

/// A routing rule packaged for the service directory.
///
/// Built by [`build_descriptor()`](crate::build_descriptor). Parameters are
/// kept sorted by key so iteration and the rendered URL are stable.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct RoutingDescriptor {
    pub(crate) protocol: String,
    pub(crate) host: String,
    pub(crate) params: BTreeMap<String, String>,
}

impl RoutingDescriptor {
    #[must_use]
    pub fn protocol(&self) -> &str {
        &self.protocol
    }

    #[must_use]
    pub fn host(&self) -> &str {
        &self.host
    }

    /// Look up a single parameter.
    #[must_use]
    pub fn param(&self, key: &str) -> Option<&str> {
        self.params.get(key).map(String::as_str)
    }

    /// All parameters in key order.
    pub fn params(&self) -> impl Iterator<Item = (&str, &str)> {
        self.params.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    #[must_use]
    pub fn param_count(&self) -> usize {
        self.params.len()
    }

    /// Reverse the transport encoding of the `rule` parameter.
    ///
    /// # Errors
    ///
    /// Returns [`RuleDecodeError`] if the parameter is missing or does not
    /// decode to UTF-8 text.
    pub fn decoded_rule(&self) -> Result<String, RuleDecodeError> {
        let encoded = self.param(RULE_KEY).ok_or(RuleDecodeError::MissingRule)?;
        let bytes = URL_SAFE.decode(encoded)?;
        Ok(String::from_utf8(bytes)?)
    }
}

/// Renders as `protocol://host?k=v&...` with form-urlencoded values.
impl fmt::Display for RoutingDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let query = url::form_urlencoded::Serializer::new(String::new())
            .extend_pairs(&self.params)
            .finish();
        write!(f, "{}://{}?{query}", self.protocol, self.host)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn descriptor(rule: &str) -> RoutingDescriptor {
        let params = [
            (CATEGORY_KEY, ROUTERS_CATEGORY),
            (FORCE_KEY, "false"),
            (PRIORITY_KEY, "0"),
            (ROUTER_KEY, "condition"),
            (RULE_KEY, rule),
        ];
        RoutingDescriptor {
            protocol: ROUTE_PROTOCOL.into(),
            host: ANY_HOST.into(),
            params: params
                .into_iter()
                .map(|(k, v)| (k.to_owned(), v.to_owned()))
                .collect(),
        }
    }

    #[test]
    fn router_kind_literal() {
        assert_eq!(RouterKind::Condition.as_str(), "condition");
        assert_eq!(RouterKind::Condition.to_string(), "condition");
    }

    #[test]
    fn display_renders_sorted_query() {
        let d = descriptor("YSA9PiBi");
        assert_eq!(
            d.to_string(),
            "route://0.0.0.0?category=routers&force=false&priority=0&router=condition&rule=YSA9PiBi"
        );
    }

    #[test]
    fn display_escapes_padding() {
        let d = descriptor("YQ==");
        assert!(d.to_string().ends_with("rule=YQ%3D%3D"));
    }

    #[test]
    fn decoded_rule_round_trip() {
        assert_eq!(descriptor("YSA9PiBi").decoded_rule().unwrap(), "a => b");
    }

    #[test]
    fn decoded_rule_rejects_garbage() {
        assert!(matches!(
            descriptor("not base64!").decoded_rule(),
            Err(RuleDecodeError::Base64(_))
        ));
    }

    #[test]
    fn decoded_rule_missing() {
        let mut d = descriptor("");
        d.params.remove(RULE_KEY);
        assert!(matches!(d.decoded_rule(), Err(RuleDecodeError::MissingRule)));
    }

    #[test]
    fn missing_rule_message() {
        assert_eq!(
            RuleDecodeError::MissingRule.to_string(),
            "descriptor has no 'rule' parameter"
        );
    }
}
