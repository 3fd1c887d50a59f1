//! Destination shapes for each registered notification kind.
//!
//! One struct per kind, grouped into four families by which sub-records the
//! event carries. A shape is populated once by the parser and handed to the
//! caller; nothing mutates it afterwards.

use payhooks_types::{Account, Invoice, Subscription, Transaction};
use serde::{Deserialize, Serialize};

use crate::kinds;

/// Sent when a new account is created.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NewAccountNotification {
    pub account: Account,
}

/// Sent when an account is closed.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CanceledAccountNotification {
    pub account: Account,
}

/// Sent when an account subscription is reactivated after having been
/// canceled.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReactivatedAccountNotification {
    pub account: Account,
}

/// Sent when a new subscription is created.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NewSubscriptionNotification {
    pub account: Account,
    pub subscription: Subscription,
}

/// Sent when a subscription is upgraded or downgraded.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UpdatedSubscriptionNotification {
    pub account: Account,
    pub subscription: Subscription,
}

/// Sent when a subscription is canceled.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CanceledSubscriptionNotification {
    pub account: Account,
    pub subscription: Subscription,
}

/// Sent when a subscription is no longer valid.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExpiredSubscriptionNotification {
    pub account: Account,
    pub subscription: Subscription,
}

/// Sent whenever a subscription renews.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenewedSubscriptionNotification {
    pub account: Account,
    pub subscription: Subscription,
}

/// Sent when a new invoice is generated.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NewInvoiceNotification {
    pub account: Account,
    pub invoice: Invoice,
}

/// Sent when an invoice enters the processing state.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProcessingInvoiceNotification {
    pub account: Account,
    pub invoice: Invoice,
}

/// Sent when an invoice is closed.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClosedInvoiceNotification {
    pub account: Account,
    pub invoice: Invoice,
}

/// Sent when an invoice goes past due.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PastDueInvoiceNotification {
    pub account: Account,
    pub invoice: Invoice,
}

/// Sent when a payment is successful.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SuccessfulPaymentNotification {
    pub account: Account,
    pub transaction: Transaction,
}

/// Sent when a payment fails.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FailedPaymentNotification {
    pub account: Account,
    pub transaction: Transaction,
}

/// A decoded webhook notification, one variant per registered kind.
///
/// The variant tag is the discriminator — callers match on it instead of
/// re-reading the payload's root name, and the closed set gives them
/// exhaustiveness checking when the provider contract grows.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum Notification {
    NewAccount(NewAccountNotification),
    CanceledAccount(CanceledAccountNotification),
    ReactivatedAccount(ReactivatedAccountNotification),
    NewSubscription(NewSubscriptionNotification),
    UpdatedSubscription(UpdatedSubscriptionNotification),
    CanceledSubscription(CanceledSubscriptionNotification),
    ExpiredSubscription(ExpiredSubscriptionNotification),
    RenewedSubscription(RenewedSubscriptionNotification),
    NewInvoice(NewInvoiceNotification),
    ProcessingInvoice(ProcessingInvoiceNotification),
    ClosedInvoice(ClosedInvoiceNotification),
    PastDueInvoice(PastDueInvoiceNotification),
    SuccessfulPayment(SuccessfulPaymentNotification),
    FailedPayment(FailedPaymentNotification),
}

impl Notification {
    /// The kind token this notification was decoded from.
    pub fn kind(&self) -> &'static str {
        match self {
            Notification::NewAccount(_) => kinds::NEW_ACCOUNT,
            Notification::CanceledAccount(_) => kinds::CANCELED_ACCOUNT,
            Notification::ReactivatedAccount(_) => kinds::REACTIVATED_ACCOUNT,
            Notification::NewSubscription(_) => kinds::NEW_SUBSCRIPTION,
            Notification::UpdatedSubscription(_) => kinds::UPDATED_SUBSCRIPTION,
            Notification::CanceledSubscription(_) => kinds::CANCELED_SUBSCRIPTION,
            Notification::ExpiredSubscription(_) => kinds::EXPIRED_SUBSCRIPTION,
            Notification::RenewedSubscription(_) => kinds::RENEWED_SUBSCRIPTION,
            Notification::NewInvoice(_) => kinds::NEW_INVOICE,
            Notification::ProcessingInvoice(_) => kinds::PROCESSING_INVOICE,
            Notification::ClosedInvoice(_) => kinds::CLOSED_INVOICE,
            Notification::PastDueInvoice(_) => kinds::PAST_DUE_INVOICE,
            Notification::SuccessfulPayment(_) => kinds::SUCCESSFUL_PAYMENT,
            Notification::FailedPayment(_) => kinds::FAILED_PAYMENT,
        }
    }

    /// The account the event concerns. Every kind carries one.
    pub fn account(&self) -> &Account {
        match self {
            Notification::NewAccount(n) => &n.account,
            Notification::CanceledAccount(n) => &n.account,
            Notification::ReactivatedAccount(n) => &n.account,
            Notification::NewSubscription(n) => &n.account,
            Notification::UpdatedSubscription(n) => &n.account,
            Notification::CanceledSubscription(n) => &n.account,
            Notification::ExpiredSubscription(n) => &n.account,
            Notification::RenewedSubscription(n) => &n.account,
            Notification::NewInvoice(n) => &n.account,
            Notification::ProcessingInvoice(n) => &n.account,
            Notification::ClosedInvoice(n) => &n.account,
            Notification::PastDueInvoice(n) => &n.account,
            Notification::SuccessfulPayment(n) => &n.account,
            Notification::FailedPayment(n) => &n.account,
        }
    }

    /// The subscription, for subscription-lifecycle kinds.
    pub fn subscription(&self) -> Option<&Subscription> {
        match self {
            Notification::NewSubscription(n) => Some(&n.subscription),
            Notification::UpdatedSubscription(n) => Some(&n.subscription),
            Notification::CanceledSubscription(n) => Some(&n.subscription),
            Notification::ExpiredSubscription(n) => Some(&n.subscription),
            Notification::RenewedSubscription(n) => Some(&n.subscription),
            _ => None,
        }
    }

    /// The invoice, for invoice-lifecycle kinds.
    pub fn invoice(&self) -> Option<&Invoice> {
        match self {
            Notification::NewInvoice(n) => Some(&n.invoice),
            Notification::ProcessingInvoice(n) => Some(&n.invoice),
            Notification::ClosedInvoice(n) => Some(&n.invoice),
            Notification::PastDueInvoice(n) => Some(&n.invoice),
            _ => None,
        }
    }

    /// The transaction, for payment-outcome kinds.
    pub fn transaction(&self) -> Option<&Transaction> {
        match self {
            Notification::SuccessfulPayment(n) => Some(&n.transaction),
            Notification::FailedPayment(n) => Some(&n.transaction),
            _ => None,
        }
    }
}

impl From<NewAccountNotification> for Notification {
    fn from(n: NewAccountNotification) -> Self {
        Notification::NewAccount(n)
    }
}

impl From<CanceledAccountNotification> for Notification {
    fn from(n: CanceledAccountNotification) -> Self {
        Notification::CanceledAccount(n)
    }
}

impl From<ReactivatedAccountNotification> for Notification {
    fn from(n: ReactivatedAccountNotification) -> Self {
        Notification::ReactivatedAccount(n)
    }
}

impl From<NewSubscriptionNotification> for Notification {
    fn from(n: NewSubscriptionNotification) -> Self {
        Notification::NewSubscription(n)
    }
}

impl From<UpdatedSubscriptionNotification> for Notification {
    fn from(n: UpdatedSubscriptionNotification) -> Self {
        Notification::UpdatedSubscription(n)
    }
}

impl From<CanceledSubscriptionNotification> for Notification {
    fn from(n: CanceledSubscriptionNotification) -> Self {
        Notification::CanceledSubscription(n)
    }
}

impl From<ExpiredSubscriptionNotification> for Notification {
    fn from(n: ExpiredSubscriptionNotification) -> Self {
        Notification::ExpiredSubscription(n)
    }
}

impl From<RenewedSubscriptionNotification> for Notification {
    fn from(n: RenewedSubscriptionNotification) -> Self {
        Notification::RenewedSubscription(n)
    }
}

impl From<NewInvoiceNotification> for Notification {
    fn from(n: NewInvoiceNotification) -> Self {
        Notification::NewInvoice(n)
    }
}

impl From<ProcessingInvoiceNotification> for Notification {
    fn from(n: ProcessingInvoiceNotification) -> Self {
        Notification::ProcessingInvoice(n)
    }
}

impl From<ClosedInvoiceNotification> for Notification {
    fn from(n: ClosedInvoiceNotification) -> Self {
        Notification::ClosedInvoice(n)
    }
}

impl From<PastDueInvoiceNotification> for Notification {
    fn from(n: PastDueInvoiceNotification) -> Self {
        Notification::PastDueInvoice(n)
    }
}

impl From<SuccessfulPaymentNotification> for Notification {
    fn from(n: SuccessfulPaymentNotification) -> Self {
        Notification::SuccessfulPayment(n)
    }
}

impl From<FailedPaymentNotification> for Notification {
    fn from(n: FailedPaymentNotification) -> Self {
        Notification::FailedPayment(n)
    }
}
