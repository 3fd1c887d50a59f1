//! Domain records carried inside billing webhook payloads.
//!
//! These are the structural building blocks every notification shape is
//! composed of: an account, and depending on the event family, a
//! subscription, an invoice, or a transaction. All fields are defaulted —
//! an element the payload omits decodes to its zero value, never an error.

pub mod account;
pub mod invoice;
pub mod subscription;
pub mod transaction;

pub use account::Account;
pub use invoice::Invoice;
pub use subscription::{Plan, Subscription};
pub use transaction::Transaction;
