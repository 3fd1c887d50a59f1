//! Post-decode patch for payment-outcome notifications.
//!
//! The wire payload labels the transaction identifier `<id>` while the
//! transaction record stores it as `uuid`, and carries the invoice number as
//! a sibling the record does not decode. Rather than special-casing the
//! primary mapping, both fields are lifted out of the same buffer in a
//! narrow second decode and copied onto the already-decoded record.

use serde::Deserialize;

use crate::error::Result;
use crate::notification::Notification;

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct TransactionPatch {
    transaction: PatchFields,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct PatchFields {
    id: String,
    invoice_number: u32,
}

/// Copy the patch fields onto the transaction sub-record of payment
/// notifications. Every other variant passes through untouched.
pub(crate) fn apply(notification: &mut Notification, payload: &[u8]) -> Result<()> {
    let transaction = match notification {
        Notification::SuccessfulPayment(n) => &mut n.transaction,
        Notification::FailedPayment(n) => &mut n.transaction,
        _ => return Ok(()),
    };

    let decoded: TransactionPatch = quick_xml::de::from_reader(payload)?;
    transaction.uuid = decoded.transaction.id;
    transaction.invoice_number = decoded.transaction.invoice_number;
    Ok(())
}
