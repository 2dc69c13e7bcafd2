//! Showreel CLI - Command-line interface
//!
//! Provides command-line access to the artifact streaming server.

mod commands;

use clap::Parser;

#[derive(Parser)]
#[command(name = "showreel")]
#[command(about = "An artifact streaming server for automation recordings")]
struct Cli {
    #[command(subcommand)]
    command: commands::Commands,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    commands::handle_command(cli.command).await?;

    Ok(())
}
