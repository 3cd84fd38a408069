//! CLI module for the HugeGraph client.
//!
//! Subcommands:
//! - `version`: Print the server version
//! - `init`: Create the demo schema and load sample data
//! - `schema`: Print all schema elements as JSON
//! - `fusiform`: Run a fusiform similarity query

mod fusiform;
pub mod init;
mod schema;
mod version;

use clap::{Parser, Subcommand};
use color_eyre::Result;

pub use fusiform::FusiformCommand;

use crate::config::Config;
use crate::driver::HugeClient;

/// HugeGraph - command line client
#[derive(Parser)]
#[command(name = "hugegraph")]
#[command(about = "Command line client for a HugeGraph server")]
#[command(version)]
pub struct App {
    /// Run in verbose mode
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Server URL, overriding the configured one
    #[arg(long, global = true)]
    pub url: Option<String>,

    /// Graph name, overriding the configured one
    #[arg(long, global = true)]
    pub graph: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Print the server version
    Version,

    /// Create the demo schema and load sample data
    Init,

    /// Print all schema elements as JSON
    Schema,

    /// Run a fusiform similarity query
    Fusiform(FusiformCommand),
}

impl App {
    /// Run the CLI application.
    pub async fn run(self) -> Result<()> {
        match &self.command {
            Command::Version => self.run_version().await,
            Command::Init => self.run_init().await,
            Command::Schema => self.run_schema().await,
            Command::Fusiform(cmd) => cmd.run(&self.client()?).await,
        }
    }

    /// Loads configuration, applies `--url`/`--graph` and builds a client.
    fn client(&self) -> Result<HugeClient> {
        let config = Config::load()?.with_overrides(self.url.as_deref(), self.graph.as_deref());
        tracing::debug!(
            url = %config.server.url,
            graph = %config.server.graph,
            "Loaded configuration"
        );
        Ok(HugeClient::from_config(&config)?)
    }
}
