//! CLI for the Kaerlin page behavior engine.
//!
//! Every command drives the same demo page the way markup would drive the
//! real one, through the entry points on `App`.

mod commands;
mod demo;


use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::Shell;
use ksite_core::config;

use commands::{run_catalog, run_download, run_preview, run_tour};

/// Top-level CLI for the Kaerlin page behavior engine.
#[derive(Debug, Parser)]
#[command(name = "ksite")]
#[command(about = "Kaerlin theme page: headless behavior driver", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// List the compiled-in downloadable assets.
    Catalog,

    /// Run the download lifecycle for a catalog asset.
    Download {
        /// Catalog name of the asset (see `ksite catalog`).
        name: String,
    },

    /// Open the theme preview modal and print its contents.
    Preview,

    /// Scroll through the demo page, showing reveals and the parallax offset.
    Tour,

    /// Generate shell completions.
    Completions {
        /// Target shell.
        shell: Shell,
    },
}

impl CliCommand {
    pub async fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let cfg = config::load_or_init()?;
        tracing::debug!("loaded config: {:?}", cfg);

        match cli.command {
            CliCommand::Catalog => run_catalog()?,
            CliCommand::Download { name } => run_download(&cfg, &name).await?,
            CliCommand::Preview => run_preview(&cfg)?,
            CliCommand::Tour => run_tour(&cfg)?,
            CliCommand::Completions { shell } => {
                clap_complete::generate(shell, &mut Cli::command(), "ksite", &mut std::io::stdout());
            }
        }
        Ok(())
    }
}
