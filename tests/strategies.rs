use condroute::ConditionRouterConfig;
use proptest::prelude::*;

/// A generated condition together with the clauses it should contribute.
#[derive(Debug, Clone)]
pub struct GenCondition {
    pub text: String,
    pub consumer: Option<String>,
    pub provider: Option<String>,
}

/// A single predicate such as `host = 10.0.0`, never containing `=>`.
pub fn arb_clause() -> impl Strategy<Value = String> {
    "[a-z]{1,6} (=|!=) [a-z0-9.*]{1,8}( & [a-z]{1,4} = [a-z0-9]{1,4})?"
}

fn arb_padding() -> impl Strategy<Value = String> {
    prop::sample::select(&["", " ", "  ", " \t"][..]).prop_map(str::to_owned)
}

/// A condition with a separator, optional halves, and random padding.
fn arb_split_condition() -> impl Strategy<Value = GenCondition> {
    (
        prop::option::of(arb_clause()),
        prop::option::of(arb_clause()),
        arb_padding(),
        arb_padding(),
    )
        .prop_map(|(consumer, provider, outer, inner)| {
            let text = format!(
                "{outer}{c}{inner}=>{inner}{p}{outer}",
                c = consumer.as_deref().unwrap_or(""),
                p = provider.as_deref().unwrap_or(""),
            );
            GenCondition {
                text,
                consumer,
                provider,
            }
        })
}

/// A condition lacking `=>`, which the compiler drops.
fn arb_malformed_condition() -> impl Strategy<Value = GenCondition> {
    arb_clause().prop_map(|text| GenCondition {
        text,
        consumer: None,
        provider: None,
    })
}

pub fn arb_condition() -> impl Strategy<Value = GenCondition> {
    prop_oneof![
        4 => arb_split_condition(),
        1 => arb_malformed_condition(),
    ]
}

pub fn arb_conditions() -> impl Strategy<Value = Vec<GenCondition>> {
    prop::collection::vec(arb_condition(), 0..12)
}

pub fn arb_config() -> impl Strategy<Value = ConditionRouterConfig> {
    (any::<i64>(), any::<bool>(), arb_conditions()).prop_map(|(priority, force, conditions)| {
        ConditionRouterConfig::new(priority, force, conditions.into_iter().map(|c| c.text))
    })
}

/// Texts of the generated conditions, in order.
pub fn texts(conditions: &[GenCondition]) -> Vec<String> {
    conditions.iter().map(|c| c.text.clone()).collect()
}
