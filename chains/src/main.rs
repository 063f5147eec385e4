//! Chain registry CLI
//!
//! Prints the chain registry, its URL index, and wallet add-chain
//! parameters as JSON.
//!
//! ```sh
//! chains init                 # Generate default chains.toml
//! chains params eip155:10     # wallet_addEthereumChain parameters
//! ```

mod cmd;
#[cfg(feature = "telemetry")]
mod telemetry;

use clap::Parser;
use cmd::{Cli, Commands};

#[allow(clippy::print_stderr)]
fn main() {
    // Load .env variables before clap reads INFURA_KEY / ALCHEMY_KEY
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    #[cfg(feature = "telemetry")]
    telemetry::Telemetry::new()
        .with_log_level(cli.global.log_level.as_str())
        .register();

    let result = match cli.command {
        Commands::Init { output, force } => cmd::init::run(&output, force),
        Commands::List => cli.global.registry().and_then(|r| cmd::show::list(&r)),
        Commands::Urls => cli.global.registry().and_then(|r| cmd::show::urls(&r)),
        Commands::Params { chain_id } => cli
            .global
            .registry()
            .and_then(|r| cmd::show::params(&r, chain_id)),
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
