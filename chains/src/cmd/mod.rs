//! CLI definitions and command implementations.

use std::path::{Path, PathBuf};

use chains::config::{Config, load_config};
use chains::{ChainId, ChainRegistry, Error, ProviderKeys};
use clap::{Args, Parser, Subcommand};

pub mod init;
pub mod show;

/// Config file picked up from the working directory when `--config` is not given.
pub const DEFAULT_CONFIG_FILE: &str = "chains.toml";

/// EVM chain registry: RPC endpoints and wallet add-chain parameters.
#[derive(Debug, Parser)]
#[command(name = "chains")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Options shared by every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

/// Options shared by every subcommand.
#[derive(Debug, Args)]
pub struct GlobalArgs {
    /// Path to the TOML configuration file.
    #[arg(short, long, global = true, env = "CHAINS_CONFIG")]
    pub config: Option<PathBuf>,

    /// Infura project id; overrides the config file.
    #[arg(long, global = true, env = "INFURA_KEY", hide_env_values = true)]
    pub infura_key: Option<String>,

    /// Alchemy API key; overrides the config file.
    #[arg(long, global = true, env = "ALCHEMY_KEY", hide_env_values = true)]
    pub alchemy_key: Option<String>,

    /// Log filter used when `RUST_LOG` is not set.
    #[arg(long, global = true, default_value = "warn")]
    pub log_level: String,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Generate a default TOML configuration file.
    Init {
        /// Output path for the configuration file.
        #[arg(short, long, default_value = DEFAULT_CONFIG_FILE)]
        output: PathBuf,

        /// Overwrite the file if it already exists.
        #[arg(long, default_value_t = false)]
        force: bool,
    },

    /// Print every known chain as JSON.
    List,

    /// Print RPC endpoints of chains that have at least one.
    Urls,

    /// Print `wallet_addEthereumChain` parameters for a chain.
    Params {
        /// Chain id, e.g. `10` or `eip155:10`.
        chain_id: ChainId,
    },
}

impl GlobalArgs {
    /// Loads the configuration and builds the chain registry.
    ///
    /// Without `--config`, `chains.toml` is used if present, and the
    /// built-in chains otherwise.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file cannot be loaded or a configured
    /// chain is invalid.
    pub fn registry(&self) -> Result<ChainRegistry, Error> {
        let config = match &self.config {
            Some(path) => load_config(path)?,
            None if Path::new(DEFAULT_CONFIG_FILE).exists() => {
                load_config(Path::new(DEFAULT_CONFIG_FILE))?
            }
            None => {
                #[cfg(feature = "telemetry")]
                tracing::debug!("no config file, using built-in chains");
                Config::default()
            }
        };
        let overrides = ProviderKeys::new(self.infura_key.clone(), self.alchemy_key.clone());
        config.registry(overrides)
    }
}
