//! CLI command definitions.

pub mod render;

use clap::{Parser, Subcommand};

/// CLI client for a Forge rendering server.
#[derive(Debug, Parser)]
#[command(name = "forge-client")]
#[command(about = "CLI client for a Forge rendering server", long_about = None)]
pub struct Cli {
    /// Server base URL.
    #[arg(long, env = "FORGE_URL", default_value = "http://localhost:8080")]
    pub base_url: String,

    /// Suppress non-essential output.
    #[arg(long)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Render a document.
    Render(Box<render::RenderCommand>),
    /// Server health check.
    Health,
}
