//! Command-line interface for cinedex.

use clap::{Parser, Subcommand};

/// cinedex - catalog of movies, characters and franchises
#[derive(Parser)]
#[command(name = "cinedex")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Commands {
    /// Run the HTTP API (default)
    Serve,

    /// Write a default config.toml in the working directory
    Init,

    /// Insert the sample catalog into an empty database and exit
    Seed,
}

impl Cli {
    #[must_use]
    pub fn command(&self) -> Commands {
        self.command.unwrap_or(Commands::Serve)
    }
}
