use std::io::IsTerminal;

use clap::ValueEnum;
use comfy_table::{presets::UTF8_FULL, ContentArrangement, Table};
use payhooks_webhooks::Notification;
use serde::Serialize;

#[derive(Clone, Debug, Copy, ValueEnum)]
pub enum OutputFormat {
    Json,
    Table,
    Pretty,
}

impl OutputFormat {
    pub fn default_for_stdout() -> Self {
        if std::io::stdout().is_terminal() {
            Self::Table
        } else {
            Self::Json
        }
    }
}

#[derive(Serialize)]
struct NotificationOutput<'a> {
    kind: &'a str,
    notification: &'a Notification,
}

pub fn print_notification(notification: &Notification, format: OutputFormat) {
    match format {
        OutputFormat::Json => {
            let out = NotificationOutput {
                kind: notification.kind(),
                notification,
            };
            println!(
                "{}",
                serde_json::to_string(&out).unwrap_or_else(|_| "{}".to_string())
            );
        }
        OutputFormat::Table => {
            let mut table = Table::new();
            table
                .load_preset(UTF8_FULL)
                .set_content_arrangement(ContentArrangement::Dynamic)
                .set_header(vec!["KIND", "ACCOUNT", "DETAIL"])
                .add_row(vec![
                    notification.kind().to_string(),
                    notification.account().code.clone(),
                    detail(notification),
                ]);
            println!("{table}");
        }
        OutputFormat::Pretty => {
            println!(
                "kind={} account={} {}",
                notification.kind(),
                notification.account().code,
                detail(notification)
            );
        }
    }
}

/// One-line summary of the family-specific sub-record.
fn detail(notification: &Notification) -> String {
    if let Some(subscription) = notification.subscription() {
        return format!(
            "plan={} state={}",
            subscription.plan.code, subscription.state
        );
    }
    if let Some(invoice) = notification.invoice() {
        return format!("invoice={} state={}", invoice.invoice_number, invoice.state);
    }
    if let Some(transaction) = notification.transaction() {
        return format!(
            "transaction={} invoice={}",
            transaction.uuid, transaction.invoice_number
        );
    }
    String::new()
}

#[cfg(test)]
mod tests {
    use payhooks_webhooks::{
        FailedPaymentNotification, NewAccountNotification, NewSubscriptionNotification,
    };

    use super::*;

    #[test]
    fn detail_is_empty_for_account_only_kinds() {
        let notification = Notification::NewAccount(NewAccountNotification::default());
        assert_eq!(detail(&notification), "");
    }

    #[test]
    fn detail_summarizes_subscription_and_transaction() {
        let mut shape = NewSubscriptionNotification::default();
        shape.subscription.plan.code = "gold".into();
        shape.subscription.state = "active".into();
        let notification = Notification::NewSubscription(shape);
        assert_eq!(detail(&notification), "plan=gold state=active");

        let mut shape = FailedPaymentNotification::default();
        shape.transaction.uuid = "abc123".into();
        let notification = Notification::FailedPayment(shape);
        assert_eq!(detail(&notification), "transaction=abc123 invoice=0");
    }

    #[test]
    fn json_output_is_serializable() {
        let notification = Notification::NewAccount(NewAccountNotification::default());
        let out = NotificationOutput {
            kind: notification.kind(),
            notification: &notification,
        };
        let json = serde_json::to_value(&out).unwrap();
        assert_eq!(json["kind"], "new_account_notification");
        assert!(json["notification"]["NewAccount"]["account"].is_object());
    }
}
