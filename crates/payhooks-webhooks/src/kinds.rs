//! Registered webhook notification kinds.
//!
//! The kind token is the local name of the payload's root element. The set
//! is fixed by the provider's wire contract and closed: any root name
//! outside it is rejected during parsing.

/// A new account was created.
pub const NEW_ACCOUNT: &str = "new_account_notification";

/// An account was closed. The wire contract spells this token with a double
/// "l", unlike the subscription counterpart.
pub const CANCELED_ACCOUNT: &str = "cancelled_account_notification";

/// A previously canceled account subscription was reactivated.
pub const REACTIVATED_ACCOUNT: &str = "reactivated_account_notification";

/// A new subscription was created.
pub const NEW_SUBSCRIPTION: &str = "new_subscription_notification";

/// A subscription was upgraded or downgraded.
pub const UPDATED_SUBSCRIPTION: &str = "updated_subscription_notification";

/// A subscription was canceled.
pub const CANCELED_SUBSCRIPTION: &str = "canceled_subscription_notification";

/// A subscription reached its expiration.
pub const EXPIRED_SUBSCRIPTION: &str = "expired_subscription_notification";

/// A subscription renewed for another period.
pub const RENEWED_SUBSCRIPTION: &str = "renewed_subscription_notification";

/// A new invoice was generated.
pub const NEW_INVOICE: &str = "new_invoice_notification";

/// An invoice entered the processing state.
pub const PROCESSING_INVOICE: &str = "processing_invoice_notification";

/// An invoice was closed.
pub const CLOSED_INVOICE: &str = "closed_invoice_notification";

/// An invoice went past due.
pub const PAST_DUE_INVOICE: &str = "past_due_invoice_notification";

/// A payment succeeded.
pub const SUCCESSFUL_PAYMENT: &str = "successful_payment_notification";

/// A payment failed.
pub const FAILED_PAYMENT: &str = "failed_payment_notification";

/// Every registered kind token.
pub const ALL: [&str; 14] = [
    NEW_ACCOUNT,
    CANCELED_ACCOUNT,
    REACTIVATED_ACCOUNT,
    NEW_SUBSCRIPTION,
    UPDATED_SUBSCRIPTION,
    CANCELED_SUBSCRIPTION,
    EXPIRED_SUBSCRIPTION,
    RENEWED_SUBSCRIPTION,
    NEW_INVOICE,
    PROCESSING_INVOICE,
    CLOSED_INVOICE,
    PAST_DUE_INVOICE,
    SUCCESSFUL_PAYMENT,
    FAILED_PAYMENT,
];

/// Returns true if `name` is a registered notification kind.
pub fn is_registered(name: &str) -> bool {
    ALL.contains(&name)
}
