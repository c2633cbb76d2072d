use serde::{Deserialize, Serialize};

use super::enums::PlatformStatus;

/// Body of a user enrollment request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserRequest {
    /// Platform the user is enrolled under (path only)
    #[serde(skip)]
    pub platform_token: String,
    /// User name
    pub name: String,
    /// Phone number
    pub phone_number: String,
    /// IBAN of the user's bank account
    pub iban: String,
    /// Label for the bank account
    pub bank_account_label: String,
}

/// A bank account registered for a user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BankAccount {
    /// Token identifying the bank account in later calls
    pub bank_account_token: String,
    /// IBAN
    #[serde(default)]
    pub iban: Option<String>,
    /// Label
    #[serde(default)]
    pub bank_account_label: Option<String>,
}

/// A user as returned by the API
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    /// Token identifying the user in later calls
    pub user_token: String,
    /// User name
    pub name: String,
    /// User status
    pub status: PlatformStatus,
    /// Registered bank accounts
    #[serde(default)]
    pub bank_accounts: Vec<BankAccount>,
}
