//! Tag-driven decoding of billing webhook payloads.
//!
//! A webhook payload is one XML document whose root element names the event
//! kind. [`parse`] runs two passes over the same buffer: a probe that reads
//! only the root name, then a full decode into the shape registered for that
//! kind. Payment notifications get a third, narrow pass that lifts the two
//! transaction fields the primary mapping cannot place.
//!
//! Unknown root names are reported as
//! [`WebhookError::UnknownNotification`] — providers ship new event kinds
//! ahead of consumers, so callers should treat that variant as a normal
//! branch (log and skip), not a fault.

pub mod error;
pub mod kinds;
pub mod notification;
pub mod parser;
mod patch;
mod registry;

pub use error::{Result, WebhookError};
pub use notification::{
    CanceledAccountNotification, CanceledSubscriptionNotification, ClosedInvoiceNotification,
    ExpiredSubscriptionNotification, FailedPaymentNotification, NewAccountNotification,
    NewInvoiceNotification, NewSubscriptionNotification, Notification, PastDueInvoiceNotification,
    ProcessingInvoiceNotification, ReactivatedAccountNotification, RenewedSubscriptionNotification,
    SuccessfulPaymentNotification, UpdatedSubscriptionNotification,
};
pub use parser::parse;
