//! CLI command implementations

use clap::Subcommand;
use showreel_core::config::{ServerConfig, ShowreelConfig};
use showreel_core::tracing_setup::{CliLogLevel, init_tracing};

/// Available CLI commands
#[derive(Subcommand)]
pub enum Commands {
    /// Start the artifact server
    Serve {
        /// Host to bind to
        #[arg(long, default_value = "127.0.0.1")]
        host: String,
        /// Port to bind to
        #[arg(short, long, default_value = "9090")]
        port: u16,
        /// Console log level
        #[arg(long, value_enum, default_value = "info")]
        log_level: CliLogLevel,
    },
}

/// Dispatch a parsed CLI command.
pub async fn handle_command(command: Commands) -> Result<(), Box<dyn std::error::Error>> {
    match command {
        Commands::Serve {
            host,
            port,
            log_level,
        } => {
            init_tracing(log_level.as_tracing_level());

            let config = ShowreelConfig {
                server: ServerConfig { host, port },
                ..ShowreelConfig::default()
            };

            showreel_web::run_server(config).await
        }
    }
}
