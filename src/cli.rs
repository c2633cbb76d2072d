//! Command-line interface

use std::path::PathBuf;

use chrono::{DateTime, Utc};
use clap::{Args, Parser, Subcommand, ValueEnum};

use crate::models::{
    PaymentRequest, PlatformRequest, PlatformUsage, SinglePaymentRequest, UserPaymentRequest,
    UserRequest,
};

/// Tikkie payment request API client
#[derive(Parser, Debug)]
#[command(name = "tikkie")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Path to configuration file (YAML)
    #[arg(short, long, env = "TIKKIE_CONFIG", global = true)]
    pub config: Option<PathBuf>,

    /// API key
    #[arg(long, env = "TIKKIE_API_KEY", global = true, hide_env_values = true)]
    pub api_key: Option<String>,

    /// Path to the PEM-encoded RSA private key
    #[arg(long, env = "TIKKIE_PRIVATE_KEY_PATH", global = true)]
    pub private_key: Option<PathBuf>,

    /// Use the sandbox environment
    #[arg(long, global = true)]
    pub sandbox: bool,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "warn", env = "TIKKIE_LOG_LEVEL", global = true)]
    pub log_level: String,

    /// Log format (text, json)
    #[arg(long, env = "TIKKIE_LOG_FORMAT", global = true)]
    pub log_format: Option<String>,

    /// Operation to perform
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Platform operations
    #[command(subcommand)]
    Platforms(PlatformsCommand),

    /// User operations
    #[command(subcommand)]
    Users(UsersCommand),

    /// Payment request operations
    #[command(subcommand)]
    PaymentRequests(PaymentRequestsCommand),
}

/// Platform subcommands
#[derive(Subcommand, Debug)]
pub enum PlatformsCommand {
    /// List platforms
    List,

    /// Create a platform
    Create(CreatePlatformArgs),
}

/// Arguments of `platforms create`
#[derive(Args, Debug)]
pub struct CreatePlatformArgs {
    /// Platform name
    #[arg(long)]
    pub name: String,

    /// Contact phone number
    #[arg(long)]
    pub phone_number: String,

    /// Contact email address
    #[arg(long)]
    pub email: String,

    /// Callback URL for payment notifications
    #[arg(long)]
    pub notification_url: Option<String>,

    /// Intended usage
    #[arg(long, value_enum, default_value_t = UsageArg::ForMyself)]
    pub usage: UsageArg,
}

/// User subcommands
#[derive(Subcommand, Debug)]
pub enum UsersCommand {
    /// List users of a platform
    List {
        /// Platform token
        #[arg(long)]
        platform_token: String,
    },

    /// Enroll a user under a platform
    Create(CreateUserArgs),
}

/// Arguments of `users create`
#[derive(Args, Debug)]
pub struct CreateUserArgs {
    /// Platform token
    #[arg(long)]
    pub platform_token: String,

    /// User name
    #[arg(long)]
    pub name: String,

    /// Phone number
    #[arg(long)]
    pub phone_number: String,

    /// IBAN of the user's bank account
    #[arg(long)]
    pub iban: String,

    /// Label for the bank account
    #[arg(long)]
    pub bank_account_label: String,
}

/// Payment request subcommands
#[derive(Subcommand, Debug)]
pub enum PaymentRequestsCommand {
    /// List payment requests of a user
    List(ListPaymentRequestsArgs),

    /// Fetch a single payment request
    Get(GetPaymentRequestArgs),

    /// Create a payment request
    Create(CreatePaymentRequestArgs),
}

/// Arguments of `payment-requests list`
#[derive(Args, Debug)]
pub struct ListPaymentRequestsArgs {
    /// Platform token
    #[arg(long)]
    pub platform_token: String,

    /// User token
    #[arg(long)]
    pub user_token: String,

    /// Index of the first result
    #[arg(long, default_value_t = 0)]
    pub offset: u32,

    /// Maximum number of results
    #[arg(long, default_value_t = 10)]
    pub limit: u32,

    /// Only requests created at or after this RFC 3339 instant
    #[arg(long)]
    pub from_date: Option<DateTime<Utc>>,

    /// Only requests created at or before this RFC 3339 instant
    #[arg(long)]
    pub to_date: Option<DateTime<Utc>>,
}

/// Arguments of `payment-requests get`
#[derive(Args, Debug)]
pub struct GetPaymentRequestArgs {
    /// Platform token
    #[arg(long)]
    pub platform_token: String,

    /// User token
    #[arg(long)]
    pub user_token: String,

    /// Payment request token
    #[arg(long)]
    pub payment_request_token: String,
}

/// Arguments of `payment-requests create`
#[derive(Args, Debug)]
pub struct CreatePaymentRequestArgs {
    /// Platform token
    #[arg(long)]
    pub platform_token: String,

    /// User token
    #[arg(long)]
    pub user_token: String,

    /// Bank account token
    #[arg(long)]
    pub bank_account_token: String,

    /// Fixed amount in cents; omit to let the payer choose
    #[arg(long)]
    pub amount_in_cents: Option<u64>,

    /// Currency code
    #[arg(long, default_value = "EUR")]
    pub currency: String,

    /// Description shown to the payer
    #[arg(long)]
    pub description: String,

    /// Caller-side reference
    #[arg(long)]
    pub external_id: Option<String>,
}

/// `--usage` values
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum UsageArg {
    /// Payment requests for the platform owner
    ForMyself,
    /// Payment requests on behalf of enrolled users
    ForOthers,
}

impl From<UsageArg> for PlatformUsage {
    fn from(usage: UsageArg) -> Self {
        match usage {
            UsageArg::ForMyself => Self::PaymentRequestForMyself,
            UsageArg::ForOthers => Self::PaymentRequestForOthers,
        }
    }
}

impl From<CreatePlatformArgs> for PlatformRequest {
    fn from(args: CreatePlatformArgs) -> Self {
        Self {
            name: args.name,
            phone_number: args.phone_number,
            email: args.email,
            notification_url: args.notification_url,
            platform_usage: args.usage.into(),
        }
    }
}

impl From<CreateUserArgs> for UserRequest {
    fn from(args: CreateUserArgs) -> Self {
        Self {
            platform_token: args.platform_token,
            name: args.name,
            phone_number: args.phone_number,
            iban: args.iban,
            bank_account_label: args.bank_account_label,
        }
    }
}

impl From<ListPaymentRequestsArgs> for UserPaymentRequest {
    fn from(args: ListPaymentRequestsArgs) -> Self {
        Self {
            platform_token: args.platform_token,
            user_token: args.user_token,
            offset: args.offset,
            limit: args.limit,
            from_date: args.from_date,
            to_date: args.to_date,
        }
    }
}

impl From<GetPaymentRequestArgs> for SinglePaymentRequest {
    fn from(args: GetPaymentRequestArgs) -> Self {
        Self {
            platform_token: args.platform_token,
            user_token: args.user_token,
            payment_request_token: args.payment_request_token,
        }
    }
}

impl From<CreatePaymentRequestArgs> for PaymentRequest {
    fn from(args: CreatePaymentRequestArgs) -> Self {
        Self {
            platform_token: args.platform_token,
            user_token: args.user_token,
            bank_account_token: args.bank_account_token,
            amount_in_cents: args.amount_in_cents,
            currency: args.currency,
            description: args.description,
            external_id: args.external_id,
        }
    }
}
