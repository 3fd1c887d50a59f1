//! Typed decoding for billing-provider webhook payloads.
//!
//! payhooks turns the XML payload of a billing webhook callback into a typed
//! notification record, selected by the payload's root element name. Consumers
//! get a closed enum to match on instead of hand-written per-event parsers.
//!
//! # Crate Structure
//!
//! - [`types`] — Domain records shared by all notification shapes
//! - [`webhooks`] — Kind registry, notification shapes, and the payload parser

/// Re-export domain record types.
pub mod types {
    pub use payhooks_types::*;
}

/// Re-export webhook parsing types.
pub mod webhooks {
    pub use payhooks_webhooks::*;
}
