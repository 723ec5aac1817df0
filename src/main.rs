use std::path::PathBuf;

use clap::{Parser, Subcommand};

mod commands;
mod config;
mod controllers;
mod error;
mod extract;
mod store;
mod types;

pub(crate) use error::{ApiError, ApiResult};

use config::Config;
use store::PasteStore;

#[derive(Debug, Parser)]
#[command(version, about = "Store and search short text snippets")]
struct Cli {
    /// Path to a TOML config file.
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Port to listen on, overriding the config file.
    #[arg(short, long, env = "PASTEBIN_PORT", global = true)]
    port: Option<u16>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Run the HTTP server.
    Serve,
    /// Print the effective configuration.
    PrintConfig,
}

#[derive(Clone)]
pub struct App {
    pub config: Config,
    pub store: PasteStore,
}

impl App {
    pub fn new(config: Config) -> Self {
        App {
            config,
            store: PasteStore::new(),
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let mut config = Config::load(cli.config.as_deref())?;
    if let Some(port) = cli.port {
        config.port = port;
    }

    let app = App::new(config);

    match cli.command {
        Command::Serve => commands::serve::run(app).await,
        Command::PrintConfig => commands::print_config::run(app),
    }
}
