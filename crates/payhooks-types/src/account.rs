use serde::{Deserialize, Serialize};

/// A customer account as it appears in webhook payloads.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Account {
    /// Merchant-assigned account identifier.
    #[serde(rename = "account_code")]
    pub code: String,
    pub username: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub company_name: String,
    pub phone: String,
}
