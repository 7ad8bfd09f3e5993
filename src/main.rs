use anyhow::Result;
use clap::{Parser, Subcommand};

mod cli;

/// postbox - contact form service
#[derive(Parser)]
#[command(name = "postbox")]
#[command(about = "Contact form with validation and pluggable delivery", long_about = None)]
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
    },
    /// Submit one message through the configured gateway
    Submit {
        #[arg(long, default_value = "")]
        name: String,

        #[arg(long, default_value = "")]
        email: String,

        #[arg(long, default_value = "")]
        message: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = postbox::Config::load(cli.config)?;
    config.validate().map_err(|e| anyhow::anyhow!(e))?;

    postbox::observability::init_observability(
        "postbox",
        env!("CARGO_PKG_VERSION"),
        &config.observability.log_level,
        config.observability.json,
    )?;

    match cli.command {
        Commands::Serve { host, port } => cli::server::serve(config, host, port).await,
        Commands::Submit {
            name,
            email,
            message,
        } => {
            let accepted = cli::submit::submit(config, name, email, message).await?;
            if !accepted {
                std::process::exit(1);
            }

            Ok(())
        }
    }
}
