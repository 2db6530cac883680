//! forge-client CLI entry point.

use std::io::Write;

use clap::Parser;
use forge_client::cli::{Cli, Commands};
use forge_client::ForgeClient;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let client = ForgeClient::new(&cli.base_url)?;

    match cli.command {
        Commands::Render(cmd) => {
            let request = cmd.to_request()?;
            let bytes = client.render(&request).await?;
            match &cmd.output {
                Some(path) => {
                    tokio::fs::write(path, &bytes).await?;
                    if !cli.quiet {
                        println!("wrote {} bytes to {}", bytes.len(), path.display());
                    }
                }
                None => std::io::stdout().write_all(&bytes)?,
            }
        }
        Commands::Health => {
            let healthy = client.health().await;
            if !cli.quiet {
                println!("{}", if healthy { "healthy" } else { "unhealthy" });
            }
            if !healthy {
                std::process::exit(1);
            }
        }
    }

    Ok(())
}
