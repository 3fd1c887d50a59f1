use std::fmt;
use std::io;

use payhooks_webhooks::WebhookError;

// Exit codes follow BSD sysexits where one applies.
pub const SUCCESS: i32 = 0;
pub const FAILURE: i32 = 1;
pub const PERMISSION_DENIED: i32 = 50;
pub const DATA_INVALID: i32 = 60;
pub const UNKNOWN_KIND: i32 = 61;
pub const USAGE: i32 = 64;
#[allow(dead_code)]
pub const INTERNAL: i32 = 125;

pub type CliResult<T> = Result<T, CliError>;

#[derive(Debug)]
pub struct CliError {
    pub code: i32,
    pub message: String,
}

impl CliError {
    pub fn new(code: i32, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for CliError {}

pub fn io_error(context: &str, err: io::Error) -> CliError {
    let code = match err.kind() {
        io::ErrorKind::PermissionDenied => PERMISSION_DENIED,
        io::ErrorKind::NotFound => USAGE,
        _ => FAILURE,
    };
    CliError::new(code, format!("{context}: {err}"))
}

pub fn webhook_error(context: &str, err: WebhookError) -> CliError {
    match err {
        WebhookError::Read(source) => io_error(context, source),
        WebhookError::Malformed(_) => CliError::new(DATA_INVALID, format!("{context}: {err}")),
        WebhookError::UnknownNotification { .. } => {
            CliError::new(UNKNOWN_KIND, format!("{context}: {err}"))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn io_error_codes_follow_kind() {
        let err = io_error("open", io::Error::from(io::ErrorKind::PermissionDenied));
        assert_eq!(err.code, PERMISSION_DENIED);

        let err = io_error("open", io::Error::from(io::ErrorKind::NotFound));
        assert_eq!(err.code, USAGE);

        let err = io_error("read", io::Error::other("reset"));
        assert_eq!(err.code, FAILURE);
    }

    #[test]
    fn webhook_errors_map_to_dedicated_codes() {
        let err = webhook_error("parse", WebhookError::Malformed("bad".into()));
        assert_eq!(err.code, DATA_INVALID);

        let err = webhook_error(
            "parse",
            WebhookError::UnknownNotification {
                name: "mystery".into(),
            },
        );
        assert_eq!(err.code, UNKNOWN_KIND);
        assert!(err.message.contains("mystery"));
    }
}
