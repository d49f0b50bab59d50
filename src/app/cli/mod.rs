//! CLI Adapter.

use clap::{Parser, Subcommand};

use crate::adapters::StaticConfigs;
use crate::app::commands::paths::{self, ShowFormat};
use crate::app::{AppContext, logging};
use crate::domain::AppError;

#[derive(Parser)]
#[command(name = "catalog-path")]
#[command(version)]
#[command(
    about = "Resolve the local connector catalog path",
    long_about = "Resolve the local connector catalog path.\n\n\
                  Set LOCAL_CONNECTOR_CATALOG_PATH to read a custom catalog. \
                  Writes always target the bundled default."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the path the catalog is read from
    #[clap(visible_alias = "r")]
    Read,
    /// Print the path the catalog is written to
    #[clap(visible_alias = "w")]
    Write,
    /// Print both paths and whether an override is active
    #[clap(visible_alias = "s")]
    Show {
        /// Emit single-line JSON
        #[arg(long)]
        json: bool,
    },
}

/// Entry point for the CLI.
pub fn run() {
    logging::init();
    let cli = Cli::parse();

    if let Err(e) = execute(cli.command) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn execute(command: Commands) -> Result<(), AppError> {
    match command {
        Commands::Read => println!("{}", paths::read(&load_context()?)?),
        Commands::Write => println!("{}", paths::write()),
        Commands::Show { json } => {
            let format = if json { ShowFormat::Json } else { ShowFormat::Text };
            println!("{}", paths::show(&load_context()?, format)?);
        }
    }
    Ok(())
}

/// Snapshot the override once; only commands that read it call this.
fn load_context() -> Result<AppContext<StaticConfigs>, AppError> {
    Ok(AppContext::new(StaticConfigs::from_env()?))
}
