use serde::{Deserialize, Serialize};

/// The plan a subscription is attached to.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Plan {
    #[serde(rename = "plan_code")]
    pub code: String,
    pub name: String,
}

/// A subscription as it appears in webhook payloads.
///
/// Timestamps are carried verbatim as provider-formatted strings; the
/// consumer forwards them without interpreting them.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Subscription {
    pub plan: Plan,
    pub uuid: String,
    pub state: String,
    pub quantity: u32,
    pub total_amount_in_cents: i64,
    pub activated_at: String,
    pub canceled_at: String,
    pub expires_at: String,
    pub current_period_started_at: String,
    pub current_period_ends_at: String,
}
