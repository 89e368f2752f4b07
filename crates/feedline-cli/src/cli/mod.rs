//! CLI entry and dispatch.

use anyhow::{Context, Result};
use clap::Parser;
use feedline_core::config::Config;
use feedline_tui::Route;

mod commands;

#[derive(Parser)]
#[command(name = "feedline")]
#[command(version)]
#[command(about = "Terminal feed client with a gated session")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Screen to open at startup; unknown names fall back to the login screen
    #[arg(long, value_name = "ROUTE", default_value = "login")]
    open: String,
}

#[derive(clap::Subcommand)]
enum Commands {
    /// Manage the stored session
    Auth {
        #[command(subcommand)]
        command: AuthCommands,
    },
    /// Work with the feed without the TUI
    Feed {
        #[command(subcommand)]
        command: FeedCommands,
    },
    /// Manage the config file
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

#[derive(clap::Subcommand)]
enum AuthCommands {
    /// Log in and persist the session token
    Login {
        /// Account email
        #[arg(long)]
        email: String,
        /// Account password
        #[arg(long)]
        password: String,
    },
    /// Clear the persisted session token
    Logout,
    /// Show whether a session is stored
    Status,
}

#[derive(clap::Subcommand)]
enum FeedCommands {
    /// Fetch the upstream source and print the synthesized feed
    Pull {
        /// Override the configured target count
        #[arg(long, value_name = "N")]
        count: Option<usize>,
        /// Print the full feed as JSON instead of a summary
        #[arg(long)]
        json: bool,
    },
}

#[derive(clap::Subcommand)]
enum ConfigCommands {
    /// Show the path to the config file
    Path,
    /// Initialize a default config file (if not present)
    Init,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    // one tokio runtime for everything
    let rt = tokio::runtime::Runtime::new().context("create tokio runtime")?;

    rt.block_on(async move { dispatch(cli).await })
}

async fn dispatch(cli: Cli) -> Result<()> {
    let config = Config::load().context("load config")?;

    // default to the TUI
    let Some(command) = cli.command else {
        // The TUI owns the terminal, so diagnostics go to the log file.
        let _log_guard = feedline_core::logging::init().ok();
        let route = Route::parse(&cli.open);
        tracing::info!("starting TUI on the {} route", route.label());
        return feedline_tui::run_app(&config, route).await;
    };

    match command {
        Commands::Auth { command } => match command {
            AuthCommands::Login { email, password } => {
                commands::auth::login(&email, &password).await
            }
            AuthCommands::Logout => commands::auth::logout(),
            AuthCommands::Status => commands::auth::status(),
        },
        Commands::Feed { command } => match command {
            FeedCommands::Pull { count, json } => {
                commands::feed::pull(&config, count, json).await
            }
        },
        Commands::Config { command } => match command {
            ConfigCommands::Path => commands::config::path(),
            ConfigCommands::Init => commands::config::init(),
        },
    }
}
