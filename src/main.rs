//! Tikkie - command-line client for the Tikkie payment request API

use std::process::ExitCode;

use clap::Parser;
use serde_json::Value;
use tracing::{debug, error};

use tikkie_client::{
    Error, Result, TikkieClient,
    cli::{Cli, Command, PaymentRequestsCommand, PlatformsCommand, UsersCommand},
    config::{ClientSettings, Environment},
    setup_tracing,
};

#[tokio::main]
async fn main() -> ExitCode {
    // A missing .env file is fine
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    if let Err(e) = setup_tracing(&cli.log_level, cli.log_format.as_deref()) {
        eprintln!("Failed to setup tracing: {e}");
        return ExitCode::FAILURE;
    }

    let client = match build_client(&cli) {
        Ok(client) => client,
        Err(e) => {
            error!(error = %e, "Failed to create client");
            report_error(&e);
            return ExitCode::FAILURE;
        }
    };

    match run(&client, cli.command).await {
        Ok(value) => match serde_json::to_string_pretty(&value) {
            Ok(json) => {
                println!("{json}");
                ExitCode::SUCCESS
            }
            Err(e) => {
                eprintln!("Failed to serialize output: {e}");
                ExitCode::FAILURE
            }
        },
        Err(e) => {
            report_error(&e);
            ExitCode::FAILURE
        }
    }
}

/// Merge config file, environment and flags into a client
fn build_client(cli: &Cli) -> Result<TikkieClient> {
    let mut settings = ClientSettings::load(cli.config.as_deref())?;

    if let Some(api_key) = &cli.api_key {
        settings.api_key = Some(api_key.clone());
    }
    if let Some(path) = &cli.private_key {
        settings.private_key_path = Some(path.clone());
    }
    if cli.sandbox {
        settings.environment = Environment::Sandbox;
    }

    debug!(environment = ?settings.environment, "Loaded client settings");

    let timeout = settings.request_timeout();
    TikkieClient::with_timeout(settings.into_configuration()?, timeout)
}

/// Execute a subcommand and return its result as JSON
async fn run(client: &TikkieClient, command: Command) -> Result<Value> {
    let value = match command {
        Command::Platforms(PlatformsCommand::List) => {
            serde_json::to_value(client.get_platforms().await?)?
        }
        Command::Platforms(PlatformsCommand::Create(args)) => {
            serde_json::to_value(client.create_platform(&args.into()).await?)?
        }
        Command::Users(UsersCommand::List { platform_token }) => {
            serde_json::to_value(client.get_users(&platform_token).await?)?
        }
        Command::Users(UsersCommand::Create(args)) => {
            serde_json::to_value(client.create_user(&args.into()).await?)?
        }
        Command::PaymentRequests(PaymentRequestsCommand::List(args)) => {
            serde_json::to_value(client.get_user_payment_requests(&args.into()).await?)?
        }
        Command::PaymentRequests(PaymentRequestsCommand::Get(args)) => {
            serde_json::to_value(client.get_payment_request(&args.into()).await?)?
        }
        Command::PaymentRequests(PaymentRequestsCommand::Create(args)) => {
            serde_json::to_value(client.create_payment_request(&args.into()).await?)?
        }
    };
    Ok(value)
}

/// Print an error and, for upstream failures, every decoded API error
fn report_error(e: &Error) {
    eprintln!("Error: {e}");

    let Some(errors) = e.upstream_errors() else {
        return;
    };
    for (i, err) in errors.iter().enumerate() {
        eprintln!("\nError {}:", i + 1);
        eprintln!("  Code:      {}", field(err.code.as_deref()));
        eprintln!("  Message:   {}", field(err.message.as_deref()));
        eprintln!("  Reference: {}", field(err.reference.as_deref()));
        eprintln!("  Trace ID:  {}", field(err.trace_id.as_deref()));
        eprintln!("  Status:    {}", field(err.status.as_deref()));
        eprintln!("  Category:  {}", field(err.category.as_deref()));
    }
}

fn field(value: Option<&str>) -> &str {
    value.unwrap_or("-")
}
