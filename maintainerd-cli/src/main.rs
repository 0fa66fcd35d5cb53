//! Maintainerd CLI - preview and inspect maintainerd pull request checklists

mod commands;

use clap::{Parser, Subcommand};
use maintainerd_core::Config;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use commands::{CheckArgs, LogArgs, RemoteArgs, RenderArgs};

/// maintainerd: pull request checklists for GitHub repositories
#[derive(Parser, Debug)]
#[command(name = "maintainerd")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// GitHub API base URL (overrides config and env)
    #[arg(long, global = true, env = "MAINTAINERD_API_URL")]
    api_url: Option<String>,

    /// User-Agent sent to GitHub (overrides config and env)
    #[arg(long, global = true, env = "MAINTAINERD_USER_AGENT")]
    user_agent: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Show version information
    Version,

    /// Render a pull request body with the checklist appended
    Render(RenderArgs),

    /// Check a pull request body for required items and semver selection
    Check(CheckArgs),

    /// Describe the checkbox toggled between two versions of a body
    Log(LogArgs),

    /// Query GitHub on behalf of an installation
    Remote(RemoteArgs),

    /// Show current configuration
    Config,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    let config = Config::load_with_overrides(cli.api_url.clone(), cli.user_agent.clone())?;

    if cli.verbose {
        tracing::info!(
            api_url = %config.github.api_url,
            user_agent = %config.github.user_agent,
            "Configuration loaded"
        );
    }

    match cli.command {
        Some(Commands::Version) => {
            println!("maintainerd {}", env!("CARGO_PKG_VERSION"));
        }
        Some(Commands::Render(args)) => args.execute()?,
        Some(Commands::Check(args)) => args.execute()?,
        Some(Commands::Log(args)) => args.execute()?,
        Some(Commands::Remote(args)) => args.execute(&config).await?,
        Some(Commands::Config) => {
            println!("maintainerd Configuration");
            println!("=========================");
            println!();
            println!("GitHub Settings:");
            println!("  api_url: {}", config.github.api_url);
            println!("  user_agent: {}", config.github.user_agent);
            println!("  accept: {}", config.github.accept);
            println!();
            if let Some(path) = Config::default_config_path() {
                println!("Config file: {}", path.display());
                if path.exists() {
                    println!("  (exists)");
                } else {
                    println!("  (not found - using defaults)");
                }
            }
        }
        None => {
            println!("maintainerd - pull request checklists for GitHub repositories");
            println!();
            println!("Use --help for usage information");
        }
    }

    Ok(())
}
