/// Errors that can occur while decoding a webhook payload.
#[derive(Debug, thiserror::Error)]
pub enum WebhookError {
    /// The payload stream could not be fully read.
    #[error("failed reading webhook payload: {0}")]
    Read(#[from] std::io::Error),

    /// The payload is not well-formed XML at the structure the current
    /// decode stage needs.
    #[error("malformed webhook payload: {0}")]
    Malformed(String),

    /// The root element name is not a registered notification kind.
    ///
    /// Expected operationally: providers introduce event kinds before
    /// consumers learn about them. Callers should branch on this variant
    /// rather than treat it as a fault.
    #[error("unknown notification: {name}")]
    UnknownNotification {
        /// The root element name as it appeared on the wire.
        name: String,
    },
}

impl From<quick_xml::de::DeError> for WebhookError {
    fn from(err: quick_xml::de::DeError) -> Self {
        WebhookError::Malformed(err.to_string())
    }
}

impl From<quick_xml::Error> for WebhookError {
    fn from(err: quick_xml::Error) -> Self {
        WebhookError::Malformed(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, WebhookError>;
