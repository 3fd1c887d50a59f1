use serde::{Deserialize, Serialize};

/// An invoice as it appears in webhook payloads.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Invoice {
    pub uuid: String,
    pub state: String,
    pub invoice_number: u32,
    pub subtotal_in_cents: i64,
    pub tax_in_cents: i64,
    pub total_in_cents: i64,
    pub currency: String,
    pub date: String,
}
