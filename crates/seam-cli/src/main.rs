//! seam - command-line tool for the Seam smart-access API
//!
//! A thin front end over `seam-client` for everyday device and access code
//! chores.

mod commands;
mod config;
mod output;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use seam_client::{SeamClient, SeamClientOptions, SeamError};
use std::path::PathBuf;
use tracing::debug;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::config::{Config, MergedConfig};
use crate::output::{OutputContext, OutputFormat};

#[derive(Parser)]
#[command(name = "seam")]
#[command(author, version, about = "Seam smart-access CLI")]
#[command(propagate_version = true)]
struct Cli {
    /// API key (falls back to SEAM_API_KEY)
    #[arg(long, env = "SEAM_API_KEY", hide_env_values = true)]
    api_key: Option<String>,

    /// API endpoint
    #[arg(short, long, env = "SEAM_API_URL")]
    endpoint: Option<String>,

    /// Workspace id (client session tokens only)
    #[arg(short, long, env = "SEAM_WORKSPACE_ID")]
    workspace_id: Option<String>,

    /// Configuration file path
    #[arg(short, long, env = "SEAM_CONFIG")]
    config: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum)]
    output: Option<OutputFormat>,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,

    /// Minimal output (for scripting)
    #[arg(short, long)]
    quiet: bool,

    /// Verbose logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List and inspect devices
    Devices {
        #[command(subcommand)]
        command: DevicesCommand,
    },

    /// Manage access codes on a device
    AccessCodes {
        #[command(subcommand)]
        command: AccessCodesCommand,
    },

    /// Connect Webviews for linking device accounts
    Webviews {
        #[command(subcommand)]
        command: WebviewsCommand,
    },

    /// Workspace events
    Events {
        #[command(subcommand)]
        command: EventsCommand,
    },

    /// Exchange a publishable key or API key for a client session token
    SessionToken {
        /// Publishable key (seam_pk...) or API key (seam_...)
        key: String,

        /// End-user identifier the session is scoped to
        #[arg(long)]
        user_identifier_key: Option<String>,
    },
}

#[derive(Subcommand)]
enum DevicesCommand {
    /// List devices
    List {
        /// Only devices of this type, e.g. august_lock
        #[arg(long)]
        device_type: Option<String>,

        /// Only devices of this connected account
        #[arg(long)]
        connected_account_id: Option<String>,

        /// Maximum number of devices to return
        #[arg(long)]
        limit: Option<u32>,
    },

    /// Show device details
    Get {
        /// Device ID
        device_id: String,
    },
}

#[derive(Subcommand)]
enum AccessCodesCommand {
    /// List access codes on a device
    List {
        /// Device ID
        device_id: String,
    },

    /// Create an access code (time-bound when --starts-at and --ends-at are given)
    Create {
        /// Device ID
        device_id: String,

        #[arg(long)]
        name: Option<String>,

        /// Code digits; the platform picks one when omitted
        #[arg(long)]
        code: Option<String>,

        /// Start of the time window (ISO 8601)
        #[arg(long, requires = "ends_at")]
        starts_at: Option<String>,

        /// End of the time window (ISO 8601)
        #[arg(long, requires = "starts_at")]
        ends_at: Option<String>,
    },

    /// Delete an access code
    Delete {
        /// Access code ID
        access_code_id: String,
    },
}

#[derive(Subcommand)]
enum WebviewsCommand {
    /// Create a Connect Webview and print its URL
    Create {
        /// Accepted provider, repeatable
        #[arg(long = "provider")]
        providers: Vec<String>,

        /// Where to send the user after a successful login
        #[arg(long)]
        redirect_url: Option<String>,
    },
}

#[derive(Subcommand)]
enum EventsCommand {
    /// List events
    List {
        /// Only events after this timestamp (ISO 8601)
        #[arg(long)]
        since: Option<String>,

        /// Only events of this device
        #[arg(long)]
        device_id: Option<String>,
    },
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // Set up logging
    let filter = if cli.verbose {
        EnvFilter::new("seam_client=debug,seam=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(filter)
        .init();

    let ctx = OutputContext::new(cli.output.unwrap_or_default(), cli.no_color, cli.quiet);

    if let Err(err) = run(cli).await {
        report(&ctx, &err);
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<()> {
    // Load config file
    let config = if let Some(config_path) = &cli.config {
        Config::load_from(config_path)?
    } else {
        Config::load().unwrap_or_default()
    };

    // Merge CLI args with config
    let merged = config.merge_with_args(
        cli.endpoint.as_deref(),
        cli.workspace_id.as_deref(),
        cli.output,
        cli.no_color,
    );

    let ctx = OutputContext::new(merged.output, merged.no_color, cli.quiet);

    match cli.command {
        Commands::Devices { command } => {
            let client = create_client(cli.api_key, &merged)?;
            match command {
                DevicesCommand::List {
                    device_type,
                    connected_account_id,
                    limit,
                } => {
                    commands::devices::list(&client, device_type, connected_account_id, limit, &ctx)
                        .await?
                }
                DevicesCommand::Get { device_id } => {
                    commands::devices::get(&client, &device_id, &ctx).await?
                }
            }
        }

        Commands::AccessCodes { command } => {
            let client = create_client(cli.api_key, &merged)?;
            match command {
                AccessCodesCommand::List { device_id } => {
                    commands::access_codes::list(&client, &device_id, &ctx).await?
                }
                AccessCodesCommand::Create {
                    device_id,
                    name,
                    code,
                    starts_at,
                    ends_at,
                } => {
                    commands::access_codes::create(
                        &client, &device_id, name, code, starts_at, ends_at, &ctx,
                    )
                    .await?
                }
                AccessCodesCommand::Delete { access_code_id } => {
                    commands::access_codes::delete(&client, &access_code_id, &ctx).await?
                }
            }
        }

        Commands::Webviews { command } => {
            let client = create_client(cli.api_key, &merged)?;
            match command {
                WebviewsCommand::Create {
                    providers,
                    redirect_url,
                } => commands::webviews::create(&client, providers, redirect_url, &ctx).await?,
            }
        }

        Commands::Events { command } => {
            let client = create_client(cli.api_key, &merged)?;
            match command {
                EventsCommand::List { since, device_id } => {
                    commands::events::list(&client, since, device_id, &ctx).await?
                }
            }
        }

        Commands::SessionToken {
            key,
            user_identifier_key,
        } => {
            commands::session_token(&key, user_identifier_key, merged.endpoint.clone(), &ctx)
                .await?
        }
    }

    Ok(())
}

/// Create a Seam client from flags and config, leaving the rest to the
/// `SEAM_*` environment
fn create_client(api_key: Option<String>, merged: &MergedConfig) -> Result<SeamClient> {
    let mut options = SeamClientOptions::new();
    options.api_key = api_key;
    options.endpoint = merged.endpoint.clone();
    options.workspace_id = merged.workspace_id.clone();
    debug!(endpoint = ?options.endpoint, workspace_id = ?options.workspace_id, "Creating client");

    SeamClient::with_options(options).context("Failed to create Seam client")
}

/// Print an error chain, with validation detail for rejected input
fn report(ctx: &OutputContext, err: &anyhow::Error) {
    ctx.error(&format!("Error: {:#}", err));

    if let Some(SeamError::MalformedInput {
        validation_errors, ..
    }) = err.downcast_ref::<SeamError>()
    {
        if !validation_errors.is_null() {
            let detail = serde_json::to_string_pretty(validation_errors)
                .unwrap_or_else(|_| validation_errors.to_string());
            ctx.error(&detail);
        }
    }
    if err
        .downcast_ref::<SeamError>()
        .is_some_and(SeamError::is_unauthorized)
    {
        ctx.warn("Check --api-key or SEAM_API_KEY");
    }
    if let Some(request_id) = err
        .downcast_ref::<SeamError>()
        .and_then(SeamError::request_id)
    {
        ctx.warn(&format!("Request id: {}", request_id));
    }
}
