//! Decode a webhook payload and branch on the notification kind.
//!
//! Run with: cargo run --example decode-webhook

use std::io::Cursor;

use payhooks::webhooks::{parse, Notification, WebhookError};

fn main() {
    let payload = r#"<?xml version="1.0" encoding="UTF-8"?>
<successful_payment_notification>
  <account>
    <account_code>verena</account_code>
    <email>verena@example.com</email>
  </account>
  <transaction>
    <id>a5143c1d3a6f4a8287d0e2cc</id>
    <invoice_number>2059</invoice_number>
    <action>purchase</action>
    <amount_in_cents>1000</amount_in_cents>
    <status>success</status>
  </transaction>
</successful_payment_notification>"#;

    match parse(Cursor::new(payload.as_bytes().to_vec())) {
        Ok(Notification::SuccessfulPayment(n)) => {
            println!(
                "payment {} for account {} settled invoice {}",
                n.transaction.uuid, n.account.code, n.transaction.invoice_number
            );
        }
        Ok(notification) => {
            println!("received {} for {}", notification.kind(), notification.account().code);
        }
        Err(WebhookError::UnknownNotification { name }) => {
            // New provider event kinds are expected; skip them.
            println!("ignoring unregistered notification kind {name}");
        }
        Err(err) => {
            eprintln!("failed decoding webhook: {err}");
            std::process::exit(1);
        }
    }
}
