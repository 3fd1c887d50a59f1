use comfy_table::{presets::UTF8_FULL, ContentArrangement, Table};
use payhooks_webhooks::kinds;
use serde::Serialize;

use crate::cmd::KindsArgs;
use crate::exit::{CliResult, SUCCESS};
use crate::output::OutputFormat;

/// Registered kinds paired with the sub-records their shapes carry.
const LISTING: [(&str, &str); 14] = [
    (kinds::NEW_ACCOUNT, "account"),
    (kinds::CANCELED_ACCOUNT, "account"),
    (kinds::REACTIVATED_ACCOUNT, "account"),
    (kinds::NEW_SUBSCRIPTION, "account, subscription"),
    (kinds::UPDATED_SUBSCRIPTION, "account, subscription"),
    (kinds::CANCELED_SUBSCRIPTION, "account, subscription"),
    (kinds::EXPIRED_SUBSCRIPTION, "account, subscription"),
    (kinds::RENEWED_SUBSCRIPTION, "account, subscription"),
    (kinds::NEW_INVOICE, "account, invoice"),
    (kinds::PROCESSING_INVOICE, "account, invoice"),
    (kinds::CLOSED_INVOICE, "account, invoice"),
    (kinds::PAST_DUE_INVOICE, "account, invoice"),
    (kinds::SUCCESSFUL_PAYMENT, "account, transaction"),
    (kinds::FAILED_PAYMENT, "account, transaction"),
];

#[derive(Serialize)]
struct KindOutput {
    kind: &'static str,
    shape: &'static str,
}

pub fn run(_args: KindsArgs, format: OutputFormat) -> CliResult<i32> {
    match format {
        OutputFormat::Json => {
            let out: Vec<KindOutput> = LISTING
                .iter()
                .map(|(kind, shape)| KindOutput { kind, shape })
                .collect();
            println!(
                "{}",
                serde_json::to_string(&out).unwrap_or_else(|_| "[]".to_string())
            );
        }
        OutputFormat::Table => {
            let mut table = Table::new();
            table
                .load_preset(UTF8_FULL)
                .set_content_arrangement(ContentArrangement::Dynamic)
                .set_header(vec!["KIND", "SHAPE"]);
            for (kind, shape) in LISTING {
                table.add_row(vec![kind, shape]);
            }
            println!("{table}");
        }
        OutputFormat::Pretty => {
            for (kind, shape) in LISTING {
                println!("{kind}: {shape}");
            }
        }
    }

    Ok(SUCCESS)
}
