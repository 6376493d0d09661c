use std::collections::BTreeMap;

use base64::Engine as _;
use base64::engine::general_purpose::URL_SAFE;

use crate::types::descriptor::{
    ANY_HOST, CATEGORY_KEY, FORCE_KEY, PRIORITY_KEY, ROUTE_PROTOCOL, ROUTER_KEY,
    ROUTERS_CATEGORY, RULE_KEY,
};
use crate::{ConditionRouterConfig, RouterKind, RoutingDescriptor};

/// Package a compiled rule and its config as a routing descriptor.
///
/// The rule text is not inspected; it is encoded with the padded url-safe
/// base64 alphabet so it survives a key-value transport that reserves
/// `=`, `&` and spaces.
pub fn build_descriptor(config: &ConditionRouterConfig, rule: &str) -> RoutingDescriptor {
    let params = BTreeMap::from([
        (FORCE_KEY.to_owned(), config.force().to_string()),
        (PRIORITY_KEY.to_owned(), config.priority().to_string()),
        (RULE_KEY.to_owned(), URL_SAFE.encode(rule.as_bytes())),
        (ROUTER_KEY.to_owned(), RouterKind::Condition.as_str().to_owned()),
        (CATEGORY_KEY.to_owned(), ROUTERS_CATEGORY.to_owned()),
    ]);

    RoutingDescriptor {
        protocol: ROUTE_PROTOCOL.to_owned(),
        host: ANY_HOST.to_owned(),
        params,
    }
}
