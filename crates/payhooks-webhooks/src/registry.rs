//! Static mapping from kind token to destination shape decoder.

use serde::de::DeserializeOwned;

use crate::error::Result;
use crate::kinds;
use crate::notification::{
    CanceledAccountNotification, CanceledSubscriptionNotification, ClosedInvoiceNotification,
    ExpiredSubscriptionNotification, FailedPaymentNotification, NewAccountNotification,
    NewInvoiceNotification, NewSubscriptionNotification, Notification, PastDueInvoiceNotification,
    ProcessingInvoiceNotification, ReactivatedAccountNotification, RenewedSubscriptionNotification,
    SuccessfulPaymentNotification, UpdatedSubscriptionNotification,
};

/// Decodes a complete payload into the shape registered for one kind.
pub(crate) type DecodeFn = fn(&[u8]) -> Result<Notification>;

/// One decoder per registered kind. Built at compile time; never mutated.
static REGISTRY: [(&str, DecodeFn); 14] = [
    (kinds::NEW_ACCOUNT, decode_into::<NewAccountNotification>),
    (kinds::CANCELED_ACCOUNT, decode_into::<CanceledAccountNotification>),
    (kinds::REACTIVATED_ACCOUNT, decode_into::<ReactivatedAccountNotification>),
    (kinds::NEW_SUBSCRIPTION, decode_into::<NewSubscriptionNotification>),
    (kinds::UPDATED_SUBSCRIPTION, decode_into::<UpdatedSubscriptionNotification>),
    (kinds::CANCELED_SUBSCRIPTION, decode_into::<CanceledSubscriptionNotification>),
    (kinds::EXPIRED_SUBSCRIPTION, decode_into::<ExpiredSubscriptionNotification>),
    (kinds::RENEWED_SUBSCRIPTION, decode_into::<RenewedSubscriptionNotification>),
    (kinds::NEW_INVOICE, decode_into::<NewInvoiceNotification>),
    (kinds::PROCESSING_INVOICE, decode_into::<ProcessingInvoiceNotification>),
    (kinds::CLOSED_INVOICE, decode_into::<ClosedInvoiceNotification>),
    (kinds::PAST_DUE_INVOICE, decode_into::<PastDueInvoiceNotification>),
    (kinds::SUCCESSFUL_PAYMENT, decode_into::<SuccessfulPaymentNotification>),
    (kinds::FAILED_PAYMENT, decode_into::<FailedPaymentNotification>),
];

/// Look up the decoder registered for a root element name.
pub(crate) fn resolve(name: &str) -> Option<DecodeFn> {
    REGISTRY
        .iter()
        .find(|(kind, _)| *kind == name)
        .map(|(_, decode)| *decode)
}

fn decode_into<T>(payload: &[u8]) -> Result<Notification>
where
    T: DeserializeOwned + Into<Notification>,
{
    let shape: T = quick_xml::de::from_reader(payload)?;
    Ok(shape.into())
}
