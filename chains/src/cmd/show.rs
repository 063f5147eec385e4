//! `chains list`, `chains urls` and `chains params` — print registry data as JSON.

use chains::{ChainId, ChainRegistry, Error};
use serde::Serialize;

#[allow(clippy::print_stdout)]
fn print_json<T: Serialize>(value: &T) -> Result<(), Error> {
    let json = serde_json::to_string_pretty(value)?;
    println!("{json}");
    Ok(())
}

/// Execute the `list` command.
///
/// # Errors
///
/// Returns an error if the output cannot be serialised.
pub fn list(registry: &ChainRegistry) -> Result<(), Error> {
    print_json(registry)
}

/// Execute the `urls` command.
///
/// # Errors
///
/// Returns an error if the output cannot be serialised.
pub fn urls(registry: &ChainRegistry) -> Result<(), Error> {
    print_json(registry.url_index())
}

/// Execute the `params` command.
///
/// Unknown chains print the bare id, like basic ones.
///
/// # Errors
///
/// Returns an error if the output cannot be serialised.
pub fn params(registry: &ChainRegistry, chain_id: ChainId) -> Result<(), Error> {
    #[cfg(feature = "telemetry")]
    if !registry.contains(chain_id) {
        tracing::info!(%chain_id, "chain not in registry");
    }
    print_json(&registry.add_chain_parameters(chain_id))
}
