//! CLI interface for pr-polish.

use anyhow::Result;
use clap::{Parser, Subcommand};

pub mod decorate;

pub use decorate::DecorateCommand;

/// pr-polish: pull request title and body decoration
#[derive(Parser)]
#[command(name = "pr-polish")]
#[command(about = "Normalizes and decorates pull request titles and bodies", long_about = None)]
#[command(version)]
pub struct Cli {
    /// The main command to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Main command categories
#[derive(Subcommand)]
pub enum Commands {
    /// Fetch a pull request, decorate its title and body, and write it back
    Decorate(DecorateCommand),
}

impl Cli {
    /// Execute the CLI command
    pub async fn execute(self) -> Result<()> {
        match self.command {
            Commands::Decorate(decorate_cmd) => decorate_cmd.execute().await,
        }
    }
}
