use anyhow::Result;
use clap::{Parser, Subcommand};

/// getdev - Get Dev marketing website
#[derive(Parser)]
#[command(name = "getdev")]
#[command(about = "Get Dev marketing website and contact form", long_about = None)]
struct Cli {
    /// Path to configuration file
    #[arg(long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server
    Serve {
        /// Server host address (overrides config file)
        #[arg(long)]
        host: Option<String>,

        /// Server port (overrides config file)
        #[arg(long)]
        port: Option<u16>,

        /// Enable debug logging and unminified HTML
        #[arg(long)]
        debug: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = getdev::Config::load(cli.config)?;

    match cli.command {
        Commands::Serve { host, port, debug } => {
            config.server.debug |= debug;
            config.validate().map_err(anyhow::Error::msg)?;

            getdev::observability::init_observability(
                "getdev",
                config.log_level(),
                &config.observability.log_format,
            )?;

            getdev::cli::serve(config, host, port).await
        }
    }
}
