//! CLI entry point for folio-rs

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "folio-rs")]
#[command(version)]
#[command(about = "A small personal blog server with an in-memory content store", long_about = None)]
struct Cli {
    /// Set the base directory (defaults to current directory)
    #[arg(long, global = true)]
    cwd: Option<PathBuf>,

    /// Configuration file (defaults to _config.yml in the base directory)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Enable debug output
    #[arg(short, long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the blog server
    #[command(alias = "s")]
    Server {
        /// Port to listen on (overrides the config file)
        #[arg(short, long)]
        port: Option<u16>,

        /// IP address to bind to (overrides the config file)
        #[arg(short, long)]
        ip: Option<String>,

        /// Start with an empty store instead of the sample posts
        #[arg(long)]
        no_sample_data: bool,
    },

    /// Render a markdown file to HTML on stdout ("-" reads stdin)
    Render {
        file: PathBuf,
    },

    /// List store content
    List {
        /// Type of content to list (post, draft, comment)
        #[arg(default_value = "post")]
        r#type: String,
    },

    /// Display version information
    Version,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.debug {
        "folio_rs=debug,info"
    } else {
        "folio_rs=info"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Determine base directory
    let base_dir = match cli.cwd {
        Some(dir) => dir,
        None => std::env::current_dir()?,
    };

    match cli.command {
        Commands::Server {
            port,
            ip,
            no_sample_data,
        } => {
            let mut config = folio_rs::Folio::load_config(&base_dir, cli.config.as_deref())?;
            if let Some(port) = port {
                config.port = port;
            }
            if let Some(ip) = ip {
                config.ip = ip;
            }
            if no_sample_data {
                config.sample_data = false;
            }

            let folio = folio_rs::Folio::with_config(base_dir, config);
            tracing::info!(
                "Starting server at http://{}:{}",
                folio.config.ip,
                folio.config.port
            );
            folio.serve().await?;
        }

        Commands::Render { file } => {
            folio_rs::commands::render::run(&file)?;
        }

        Commands::List { r#type } => {
            let folio = folio_rs::Folio::new(&base_dir, cli.config.as_deref())?;
            folio_rs::commands::list::run(&folio, &r#type)?;
        }

        Commands::Version => {
            println!("folio-rs version {}", env!("CARGO_PKG_VERSION"));
        }
    }

    Ok(())
}
