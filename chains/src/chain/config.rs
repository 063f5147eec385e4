//! User-defined chain entries and CAIP-2 keyed TOML deserialisation.

use std::ops::Deref;

use serde::{Deserialize, Serialize};
use url::Url;

use super::id::ChainId;
use super::info::{BasicChainInfo, ChainInfo, NativeCurrency};
use crate::error::Error;

/// Configuration for a single chain (matches TOML structure).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ChainEntryInner {
    /// Display name.
    pub name: String,
    /// RPC endpoint URLs in preference order.
    #[serde(default)]
    pub rpc: Vec<String>,
    /// Native currency. Its presence makes the chain eligible for add-chain
    /// requests.
    #[serde(default)]
    pub native_currency: Option<NativeCurrency>,
    /// Block explorer URLs.
    #[serde(default)]
    pub block_explorer_urls: Option<Vec<String>>,
}

/// Full chain entry with its identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChainEntry {
    /// Chain identifier parsed from the table key.
    pub chain_id: ChainId,
    /// TOML-level configuration.
    pub inner: ChainEntryInner,
}

impl ChainEntry {
    /// Converts the entry into a registry record.
    ///
    /// Blank URLs are dropped; anything else must parse as an absolute URL.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Chain`] if an RPC or explorer URL is malformed.
    pub fn to_chain_info(&self) -> Result<ChainInfo, Error> {
        let urls = self.validate_urls(&self.inner.rpc, "RPC")?;
        let block_explorer_urls = self
            .inner
            .block_explorer_urls
            .as_deref()
            .map(|urls| self.validate_urls(urls, "explorer"))
            .transpose()?;
        Ok(ChainInfo::classify(
            BasicChainInfo {
                urls,
                name: self.inner.name.clone(),
            },
            self.inner.native_currency.clone(),
            block_explorer_urls,
        ))
    }

    fn validate_urls(&self, urls: &[String], kind: &str) -> Result<Vec<String>, Error> {
        urls.iter()
            .map(|url| url.trim())
            .filter(|url| !url.is_empty())
            .map(|url| {
                Url::parse(url).map(|_| url.to_owned()).map_err(|e| {
                    Error::chain_with(
                        format!("invalid {kind} URL '{url}' for chain {}", self.chain_id),
                        e,
                    )
                })
            })
            .collect()
    }
}

/// Ordered collection of [`ChainEntry`] values.
///
/// Deserialised from a TOML map keyed by chain identifier, either CAIP-2
/// (`"eip155:100"`) or bare (`"100"`).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChainsConfig(pub Vec<ChainEntry>);

impl Deref for ChainsConfig {
    type Target = Vec<ChainEntry>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<'de> Deserialize<'de> for ChainsConfig {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        use std::fmt;

        use serde::de::{MapAccess, Visitor};

        struct ChainsVisitor;

        impl<'de> Visitor<'de> for ChainsVisitor {
            type Value = ChainsConfig;

            fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
                formatter.write_str("a map of chain identifiers to chain configurations")
            }

            fn visit_map<M>(self, mut access: M) -> Result<Self::Value, M::Error>
            where
                M: MapAccess<'de>,
            {
                let mut chains = Vec::with_capacity(access.size_hint().unwrap_or(0));

                while let Some(key) = access.next_key::<String>()? {
                    let chain_id: ChainId = key
                        .parse()
                        .map_err(|e| serde::de::Error::custom(format!("{e}")))?;
                    if chain_id.get() == 0 {
                        return Err(serde::de::Error::custom(format!(
                            "chain id must be positive, got '{key}'"
                        )));
                    }
                    let inner: ChainEntryInner = access.next_value()?;
                    chains.push(ChainEntry { chain_id, inner });
                }

                Ok(ChainsConfig(chains))
            }
        }

        deserializer.deserialize_map(ChainsVisitor)
    }
}
