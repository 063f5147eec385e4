//! Configuration loading and default template generation.
//!
//! # Configuration File Format
//!
//! ```toml
//! [keys]
//! infura = "$INFURA_KEY"
//! alchemy = "${ALCHEMY_KEY}"
//!
//! [chains."eip155:100"]
//! name = "Gnosis"
//! rpc = ["https://rpc.gnosischain.com"]
//! native_currency = { name = "xDAI", symbol = "xDAI", decimals = 18 }
//! block_explorer_urls = ["https://gnosisscan.io"]
//! ```

use std::path::Path;

use serde::Deserialize;

use crate::chain::{ChainRegistry, ChainsConfig};
use crate::error::Error;
use crate::keys::ProviderKeys;

/// Top-level configuration file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    keys: ProviderKeys,
    #[serde(default)]
    chains: ChainsConfig,
}

impl Config {
    /// Provider keys with environment references resolved.
    #[must_use]
    pub fn keys(&self) -> ProviderKeys {
        self.keys.clone().resolved()
    }

    /// User-defined chains.
    #[must_use]
    pub const fn chains(&self) -> &ChainsConfig {
        &self.chains
    }

    /// Builds the chain registry. Keys in `overrides` take precedence over
    /// keys from the file.
    ///
    /// # Errors
    ///
    /// Returns an error if a configured chain is invalid.
    pub fn registry(&self, overrides: ProviderKeys) -> Result<ChainRegistry, Error> {
        let keys = self.keys().merge(overrides);
        #[cfg(feature = "telemetry")]
        tracing::debug!(
            infura = keys.infura().is_some(),
            alchemy = keys.alchemy().is_some(),
            "provider keys resolved"
        );
        ChainRegistry::with_chains(&keys, &self.chains)
    }
}

impl std::str::FromStr for Config {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        toml::from_str(s).map_err(|e| Error::config_with("failed to parse TOML config", e))
    }
}

/// Load configuration from a TOML file at the given path.
///
/// # Errors
///
/// Returns an error if the file cannot be resolved, read, or parsed.
pub fn load_config(path: &Path) -> Result<Config, Error> {
    let config_path = path.canonicalize().map_err(|e| {
        Error::config_with(
            format!("failed to resolve config path '{}'", path.display()),
            e,
        )
    })?;
    let content = std::fs::read_to_string(&config_path).map_err(|e| {
        Error::config_with(
            format!("failed to read config file '{}'", config_path.display()),
            e,
        )
    })?;
    let config = toml::from_str(&content).map_err(|e| {
        Error::config_with(
            format!("failed to parse TOML config '{}'", config_path.display()),
            e,
        )
    })?;
    #[cfg(feature = "telemetry")]
    tracing::debug!(path = %config_path.display(), "config loaded");
    Ok(config)
}

/// Generate a default TOML configuration template.
#[must_use]
pub fn generate_default_config() -> String {
    String::from(
        r#"# Chain registry configuration

# ── Provider keys ───────────────────────────────────────────────────
# Interpolated into Infura / Alchemy RPC URLs. Chains whose endpoints
# need a missing key fall back to public endpoints, or are left without
# endpoints. Values support environment variable references: "$VAR" or
# "${VAR}". INFURA_KEY / ALCHEMY_KEY from the environment take precedence.

[keys]
infura = "$INFURA_KEY"
alchemy = "$ALCHEMY_KEY"

# ── Additional chains ───────────────────────────────────────────────
# Key format: "eip155:<chain_id>" or "<chain_id>".
# An entry with the same id as a built-in chain replaces it.
# Chains with a native_currency can be added to wallets.

# [chains."eip155:100"]
# name = "Gnosis"
# rpc = ["https://rpc.gnosischain.com"]
# native_currency = { name = "xDAI", symbol = "xDAI", decimals = 18 }
# block_explorer_urls = ["https://gnosisscan.io"]
"#,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chain::ChainId;

    #[test]
    fn default_template_parses() {
        let config: Config = generate_default_config().parse().unwrap();
        assert!(config.chains().is_empty());
        assert_eq!(config.keys.infura(), Some("$INFURA_KEY"));
    }

    #[test]
    fn empty_file_is_builtin_registry() {
        let config: Config = "".parse().unwrap();
        let registry = config.registry(ProviderKeys::default()).unwrap();
        assert_eq!(registry, ChainRegistry::new(&ProviderKeys::default()));
    }

    #[test]
    fn override_keys_win_over_file() {
        let config: Config = r#"
            [keys]
            infura = "from-file"
        "#
        .parse()
        .unwrap();

        let registry = config.registry(ProviderKeys::default()).unwrap();
        assert_eq!(
            registry.get(ChainId::new(3)).map(|c| c.urls().to_vec()),
            Some(vec!["https://ropsten.infura.io/v3/from-file".to_owned()])
        );

        let registry = config
            .registry(ProviderKeys::new(Some("from-cli".to_owned()), None))
            .unwrap();
        assert_eq!(
            registry.get(ChainId::new(3)).map(|c| c.urls().to_vec()),
            Some(vec!["https://ropsten.infura.io/v3/from-cli".to_owned()])
        );
    }

    #[test]
    fn configured_chain_replaces_builtin() {
        let config: Config = r#"
            [chains."eip155:1"]
            name = "Ethereum"
            rpc = ["https://eth.llamarpc.com"]
            native_currency = { name = "Ether", symbol = "ETH", decimals = 18 }
        "#
        .parse()
        .unwrap();
        let registry = config.registry(ProviderKeys::default()).unwrap();
        let mainnet = registry.get(ChainId::new(1)).unwrap();
        assert_eq!(mainnet.name(), "Ethereum");
        assert!(mainnet.is_extended());
        assert!(registry.add_chain_parameters(ChainId::new(1)).as_add().is_some());
    }

    #[test]
    fn unknown_fields_are_rejected() {
        let err = "[signers]\nevm = \"0x\"\n".parse::<Config>().unwrap_err();
        assert!(matches!(err, Error::Config { .. }));
    }

    #[test]
    fn misspelled_keys_are_rejected() {
        let err = "[keys]\ninfura_key = \"abc\"\n".parse::<Config>().unwrap_err();
        assert!(matches!(err, Error::Config { .. }));

        let err = r#"
            [chains."eip155:100"]
            name = "Gnosis"
            rpc = ["https://rpc.gnosischain.com"]
            nativeCurrency = { name = "xDAI", symbol = "xDAI", decimals = 18 }
        "#
        .parse::<Config>()
        .unwrap_err();
        assert!(matches!(err, Error::Config { .. }));
    }

    #[test]
    fn missing_file_is_config_error() {
        let err = load_config(Path::new("/nonexistent/chains.toml")).unwrap_err();
        assert!(err.to_string().contains("failed to resolve config path"));
    }
}
