use std::fs::File;
use std::io;

use payhooks_webhooks::{parse, Notification, Result, WebhookError};

use crate::cmd::ParseArgs;
use crate::exit::{io_error, webhook_error, CliResult, SUCCESS};
use crate::output::{print_notification, OutputFormat};

pub fn run(args: ParseArgs, format: OutputFormat) -> CliResult<i32> {
    let result = match &args.file {
        Some(path) => {
            let file = File::open(path)
                .map_err(|err| io_error(&format!("failed opening {}", path.display()), err))?;
            decode(file)
        }
        None => decode(io::stdin().lock()),
    };

    match result {
        Ok(notification) => {
            print_notification(&notification, format);
            Ok(SUCCESS)
        }
        Err(WebhookError::UnknownNotification { name }) if args.ignore_unknown => {
            tracing::warn!(name = name.as_str(), "skipping unregistered notification kind");
            Ok(SUCCESS)
        }
        Err(err) => Err(webhook_error("failed parsing webhook payload", err)),
    }
}

fn decode<R: io::Read>(reader: R) -> Result<Notification> {
    let notification = parse(reader)?;
    tracing::debug!(
        kind = notification.kind(),
        account = notification.account().code.as_str(),
        "decoded webhook notification"
    );
    Ok(notification)
}
