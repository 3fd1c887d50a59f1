use serde::{Deserialize, Serialize};

/// A payment transaction as it appears in webhook payloads.
///
/// Webhook payloads label the transaction identifier `<id>` and carry the
/// invoice number as a sibling element. Neither maps onto this record in a
/// plain field-by-field decode: `uuid` has no wire-name match, and
/// `invoice_number` is excluded from deserialization. The webhook parser
/// fills both in a dedicated pass after the primary decode.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Transaction {
    pub uuid: String,
    #[serde(skip_deserializing)]
    pub invoice_number: u32,
    pub action: String,
    pub amount_in_cents: i64,
    pub status: String,
    pub message: String,
    pub reference: String,
    pub source: String,
    pub date: String,
    pub test: bool,
    pub voidable: bool,
    pub refundable: bool,
}
