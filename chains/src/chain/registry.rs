//! Read-only chain registry and derived URL index.

use std::collections::BTreeMap;
use std::ops::Deref;

use super::config::ChainsConfig;
use super::id::ChainId;
use super::info::ChainInfo;
use super::table::builtin_chains;
use crate::error::Error;
use crate::keys::ProviderKeys;

/// Chains with at least one usable RPC endpoint, keyed by chain id.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize)]
#[serde(transparent)]
pub struct UrlIndex(BTreeMap<ChainId, Vec<String>>);

impl UrlIndex {
    /// Builds the index, skipping chains whose endpoint list is empty.
    pub fn from_chains<'a, I>(chains: I) -> Self
    where
        I: IntoIterator<Item = (&'a ChainId, &'a ChainInfo)>,
    {
        Self(
            chains
                .into_iter()
                .filter(|(_, info)| !info.urls().is_empty())
                .map(|(id, info)| (*id, info.urls().to_vec()))
                .collect(),
        )
    }

    /// Endpoints for `chain_id`, if it has any.
    #[must_use]
    pub fn get(&self, chain_id: ChainId) -> Option<&[String]> {
        self.0.get(&chain_id).map(Vec::as_slice)
    }
}

impl Deref for UrlIndex {
    type Target = BTreeMap<ChainId, Vec<String>>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

/// Immutable mapping from chain id to chain metadata.
///
/// Built once from [`ProviderKeys`] (and optionally user-defined chains);
/// the [`UrlIndex`] is derived at the same time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChainRegistry {
    chains: BTreeMap<ChainId, ChainInfo>,
    urls: UrlIndex,
}

impl ChainRegistry {
    /// Builds the registry from the built-in chain table.
    #[must_use]
    pub fn new(keys: &ProviderKeys) -> Self {
        Self::from_chains(builtin_chains(keys))
    }

    /// Builds the registry from the built-in table, then applies
    /// user-defined chains. A configured chain replaces a built-in one with
    /// the same id.
    ///
    /// # Errors
    ///
    /// Returns an error if a configured chain has a malformed URL.
    pub fn with_chains(keys: &ProviderKeys, configured: &ChainsConfig) -> Result<Self, Error> {
        let mut chains: BTreeMap<ChainId, ChainInfo> = builtin_chains(keys).collect();
        for entry in configured.iter() {
            let info = entry.to_chain_info()?;
            #[cfg(feature = "telemetry")]
            tracing::debug!(
                chain_id = %entry.chain_id,
                name = info.name(),
                extended = info.is_extended(),
                "registering configured chain"
            );
            chains.insert(entry.chain_id, info);
        }
        Ok(Self::from_chains(chains))
    }

    /// Builds a registry from arbitrary records.
    ///
    /// Later duplicates of a chain id replace earlier ones.
    pub fn from_chains<I>(chains: I) -> Self
    where
        I: IntoIterator<Item = (ChainId, ChainInfo)>,
    {
        let chains: BTreeMap<ChainId, ChainInfo> = chains.into_iter().collect();
        let urls = UrlIndex::from_chains(&chains);
        #[cfg(feature = "telemetry")]
        tracing::debug!(
            chains = chains.len(),
            reachable = urls.len(),
            "chain registry built"
        );
        Self { chains, urls }
    }

    /// Looks up a chain. `None` means the chain is unknown.
    #[must_use]
    pub fn get(&self, chain_id: ChainId) -> Option<&ChainInfo> {
        self.chains.get(&chain_id)
    }

    /// Whether `chain_id` is known.
    #[must_use]
    pub fn contains(&self, chain_id: ChainId) -> bool {
        self.chains.contains_key(&chain_id)
    }

    /// Number of known chains.
    #[must_use]
    pub fn len(&self) -> usize {
        self.chains.len()
    }

    /// Whether the registry has no chains.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.chains.is_empty()
    }

    /// Iterates over chains in ascending id order.
    pub fn iter(&self) -> impl Iterator<Item = (ChainId, &ChainInfo)> {
        self.chains.iter().map(|(id, info)| (*id, info))
    }

    /// Chains with at least one RPC endpoint.
    #[must_use]
    pub const fn url_index(&self) -> &UrlIndex {
        &self.urls
    }
}

impl serde::Serialize for ChainRegistry {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serde::Serialize::serialize(&self.chains, serializer)
    }
}
