//! CLI for the fmeta metadata bridge.
//!
//! Plays the part of the embedding runtime: bootstraps the module registry
//! once at startup and invokes capabilities by name.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use fmeta_core::bridge::{self, ModuleRegistry};
use fmeta_core::config;

use commands::{run_get, run_mime, run_modules};

/// Top-level CLI for the fmeta metadata bridge.
#[derive(Debug, Parser)]
#[command(name = "fmeta")]
#[command(about = "fmeta: resolve resource references to display name and MIME type", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Resolve a resource reference to its metadata record.
    Get {
        /// Resource reference (e.g. file:///path/to/file or https://host/file.pdf).
        uri: String,

        /// Pretty-print the JSON record.
        #[arg(long)]
        pretty: bool,
    },

    /// List capabilities registered with the bridge.
    Modules,

    /// Look up the MIME type for a file name by its extension.
    Mime {
        /// File name (e.g. track.mp3).
        name: String,
    },
}

impl CliCommand {
    pub async fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let cfg = config::load_or_init()?;
        tracing::debug!("loaded config: {:?}", cfg);

        let mut registry = ModuleRegistry::new();
        bridge::register_builtin_modules(&mut registry, &cfg);

        match cli.command {
            CliCommand::Get { uri, pretty } => run_get(&registry, &uri, pretty).await?,
            CliCommand::Modules => run_modules(&registry),
            CliCommand::Mime { name } => run_mime(&cfg, &name),
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
