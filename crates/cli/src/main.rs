use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use gotask_core::workspace_manager::{WorkspaceManager, WorkspaceManagerConfig};
use gotask_core::GotaskError;
use tracing_subscriber::EnvFilter;

mod commands;

/// gotask - fmt, vet, lint, test and build for Go modules
#[derive(Parser)]
#[command(name = "gotask")]
#[command(about = "A task runner for Go modules")]
#[command(version)]
struct Cli {
    /// Path to the workspace root (defaults to current directory)
    #[arg(short, long, default_value = ".", global = true)]
    workspace: PathBuf,

    /// Configuration file (defaults to .gotask/workspace.yml in the workspace root)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug); GOTASK_LOG takes precedence
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the available targets
    List {
        /// Print the targets as JSON
        #[arg(long)]
        json: bool,
    },
    /// Show the steps a target would run without running them
    Plan {
        /// Target name: fmt, vet, lint, test, build or all
        target: String,
        /// Print the plan as JSON
        #[arg(long)]
        json: bool,
    },
    /// Run a target
    Run {
        /// Target name: fmt, vet, lint, test, build or all
        target: String,
    },
    /// Print the JSON schema of the workspace configuration file
    Schema,
    /// Rewrite formatting and import order in place
    Fmt,
    /// Run go vet
    Vet,
    /// Run golangci-lint
    Lint,
    /// Run the tests with the race detector and a coverage profile
    Test,
    /// Compile all packages
    Build,
    /// Run fmt, vet, lint, test and build in order
    All,
}

fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_env("GOTASK_LOG").unwrap_or_else(|_| default_level.into()),
        )
        .with_writer(std::io::stderr)
        .init();
}

async fn execute(cli: Cli) -> Result<()> {
    if let Commands::Schema = cli.command {
        return commands::schema::execute();
    }

    let manager = WorkspaceManager::new(WorkspaceManagerConfig {
        workspace_root: cli.workspace,
        config_path: cli.config,
    })
    .context("Failed to initialize workspace")?;
    tracing::debug!(root = %manager.root().display(), "workspace initialized");

    // Execute command (CLI layer only handles presentation)
    match cli.command {
        Commands::List { json } => commands::list::execute(&manager, json),
        Commands::Plan { target, json } => commands::plan::execute(&manager, &target, json),
        Commands::Run { target } => commands::run::execute(&manager, &target).await,
        Commands::Schema => commands::schema::execute(),
        Commands::Fmt => commands::run::execute(&manager, "fmt").await,
        Commands::Vet => commands::run::execute(&manager, "vet").await,
        Commands::Lint => commands::run::execute(&manager, "lint").await,
        Commands::Test => commands::run::execute(&manager, "test").await,
        Commands::Build => commands::run::execute(&manager, "build").await,
        Commands::All => commands::run::execute(&manager, "all").await,
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match execute(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{} {:#}", "✗".red().bold(), err);
            let code = err
                .downcast_ref::<GotaskError>()
                .map(GotaskError::exit_code)
                .unwrap_or(1);
            ExitCode::from(code)
        }
    }
}
