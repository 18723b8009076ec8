//! `credit-admin`: command-line console for the credit scoring platform.
//!
//! Manages users and roles, reads and generates credit reports, and
//! browses businesses over the platform's REST API.

mod commands;
mod config;

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use commands::Console;
use config::ClientConfig;
use credit_admin::request::ReportLookup;

/// Credit administration console.
#[derive(Parser, Debug)]
#[command(name = "credit-admin", about = "Credit scoring admin console")]
struct Cli {
    /// Path to client config file (default: ~/.credit-admin/config.toml).
    #[arg(long = "config", global = true)]
    config: Option<PathBuf>,

    /// API base URL; overrides the config file.
    #[arg(long, global = true, env = "CREDIT_ADMIN_SERVER")]
    server: Option<String>,

    /// Bearer token; overrides the config file.
    #[arg(long, global = true, env = "CREDIT_ADMIN_TOKEN", hide_env_values = true)]
    token: Option<String>,

    /// Output format.
    #[arg(long = "output", short = 'o', global = true, value_enum, default_value_t = Output::Table)]
    output: Output,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Output {
    Table,
    Json,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// List platform users.
    Users,

    /// Assign a role to a user, then show the refreshed table.
    #[command(name = "assign-role")]
    AssignRole {
        user_id: String,
        /// ADMIN, SME_USER or VIEWER.
        role: String,
        /// Recorded in the role audit log.
        #[arg(long)]
        reason: Option<String>,
    },

    /// Activate or deactivate a user.
    #[command(name = "toggle-status")]
    ToggleStatus {
        user_id: String,
        #[arg(long)]
        reason: Option<String>,
    },

    /// Role change audit log.
    History {
        /// Only changes for this user.
        #[arg(long)]
        user: Option<String>,
    },

    /// Roles available for assignment.
    Roles,

    /// Show one credit report.
    Report {
        /// Report number (e.g. CR-2024-0001), or the report id with --id.
        key: String,
        /// Treat KEY as the report id.
        #[arg(long)]
        id: bool,
        /// Also write the score ring as SVG.
        #[arg(long)]
        svg: Option<PathBuf>,
    },

    /// Reports generated by the current user.
    #[command(name = "my-reports")]
    MyReports {
        /// Page number, starting at 1.
        #[arg(long, default_value_t = 1)]
        page: u32,
    },

    /// Generate a credit report for a business.
    Generate {
        business_id: String,
        #[arg(long)]
        purpose: Option<String>,
        #[arg(long)]
        comments: Option<String>,
    },

    /// Show a business.
    Business {
        id: String,
        /// overview, compliance or credit-history.
        #[arg(long, default_value = "overview")]
        tab: String,
    },

    /// Search businesses by name, GSTIN or PAN.
    Search {
        query: String,
        /// Page number, starting at 1.
        #[arg(long, default_value_t = 1)]
        page: u32,
    },

    /// Client configuration.
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },

    /// Show version.
    Version,
}

#[derive(Subcommand, Debug)]
enum ConfigAction {
    /// Print the stored settings.
    Show,
    /// Update stored settings.
    Set {
        #[arg(long)]
        server: Option<String>,
        #[arg(long)]
        token: Option<String>,
        #[arg(long)]
        page_size: Option<u32>,
        #[arg(long)]
        timeout_secs: Option<u64>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let config_path = cli.config.clone().unwrap_or_else(ClientConfig::default_path);

    // Commands that never touch the API.
    match &cli.command {
        Commands::Version => {
            println!("credit-admin v{}", env!("CARGO_PKG_VERSION"));
            return Ok(());
        }
        Commands::Config { action } => {
            return match action {
                ConfigAction::Show => commands::settings::show(&config_path),
                ConfigAction::Set {
                    server,
                    token,
                    page_size,
                    timeout_secs,
                } => commands::settings::set(
                    &config_path,
                    server.clone(),
                    token.clone(),
                    *page_size,
                    *timeout_secs,
                ),
            };
        }
        _ => {}
    }

    let config = ClientConfig::load(&config_path)?.with_overrides(cli.server, cli.token);
    let console = Console::connect(&config, cli.output == Output::Json)?;

    match cli.command {
        Commands::Users => commands::users::list(&console).await?,
        Commands::AssignRole {
            user_id,
            role,
            reason,
        } => commands::users::assign_role(&console, &user_id, &role, reason).await?,
        Commands::ToggleStatus { user_id, reason } => {
            commands::users::toggle_status(&console, &user_id, reason).await?
        }
        Commands::History { user } => commands::users::history(&console, user).await?,
        Commands::Roles => commands::users::roles(&console).await?,
        Commands::Report { key, id, svg } => {
            let lookup = if id {
                ReportLookup::Id(key)
            } else {
                ReportLookup::Number(key)
            };
            commands::reports::show(&console, lookup, svg.as_deref()).await?
        }
        Commands::MyReports { page } => commands::reports::mine(&console, page).await?,
        Commands::Generate {
            business_id,
            purpose,
            comments,
        } => commands::reports::generate(&console, &business_id, purpose, comments).await?,
        Commands::Business { id, tab } => {
            let tab = commands::business::parse_tab(&tab)?;
            commands::business::show(&console, &id, tab).await?
        }
        Commands::Search { query, page } => commands::business::search(&console, &query, page).await?,
        Commands::Version | Commands::Config { .. } => {}
    }

    Ok(())
}
