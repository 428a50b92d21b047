use clap::{Parser, Subcommand};
use colored::*;
use std::net::IpAddr;
use std::path::PathBuf;
use std::process;

use bikelinks_cli::commands;
use bikelinks_cli::config::Config;
use bikelinks_cli::logging::init_tracing;
use bikelinks_cli::server::run_server;

#[derive(Parser)]
#[command(name = "bikelinks")]
#[command(about = "Bikelinks - staff link directory for bike shops")]
#[command(version)]
struct Cli {
    /// SQLite database file (":memory:" for a throwaway database)
    #[arg(long, global = true)]
    database: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the web server (default)
    Serve {
        /// Address to bind
        #[arg(long)]
        host: Option<IpAddr>,
        /// Port to listen on
        #[arg(long)]
        port: Option<u16>,
    },
    /// Delete all data and restore the seed catalogue
    Reset,
    /// Print counts, sequences, schemas and rows as JSON
    State,
}

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    init_tracing();

    let cli = Cli::parse();

    if let Err(e) = handle_command(cli).await {
        eprintln!("{} {:#}", "Error:".red().bold(), e);
        process::exit(1);
    }
}

async fn handle_command(cli: Cli) -> anyhow::Result<()> {
    let command = cli.command.unwrap_or(Commands::Serve {
        host: None,
        port: None,
    });

    match command {
        Commands::Serve { host, port } => {
            let config = Config::from_env()?.with_overrides(host, port, cli.database)?;
            println!(
                "{} Serving on {}",
                "🚲".bold(),
                format!("http://{}", config.socket_addr()).cyan()
            );
            println!("   Database: {}", config.database_path.display());
            run_server(&config).await
        }
        Commands::Reset => {
            let config = Config::from_env()?.with_overrides(None, None, cli.database)?;
            let counts = commands::reset_database(&config).await?;
            println!(
                "{} Database reset successfully ({} brands, {} categories, {} links)",
                "✓".green().bold(),
                counts.brands,
                counts.categories,
                counts.links
            );
            Ok(())
        }
        Commands::State => {
            let config = Config::from_env()?.with_overrides(None, None, cli.database)?;
            let state = commands::database_state(&config).await?;
            println!("{}", serde_json::to_string_pretty(&state)?);
            Ok(())
        }
    }
}
