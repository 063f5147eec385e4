//! Wallet `wallet_addEthereumChain` parameters.
//!
//! [`add_chain_parameters`] turns a chain id into what a browser wallet
//! expects when asked to switch networks: the bare id for chains the wallet
//! is assumed to know, or a full [`AddEthereumChainParameter`] for chains
//! that carry native-currency metadata and may need registering first.

use serde::{Deserialize, Serialize};

use crate::chain::{ChainId, ChainInfo, ChainRegistry, NativeCurrency};

/// EIP-3085 add-chain descriptor. Field names follow the wallet API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddEthereumChainParameter {
    /// Chain to add.
    pub chain_id: ChainId,
    /// Display name.
    pub chain_name: String,
    /// Native currency.
    pub native_currency: NativeCurrency,
    /// RPC endpoints, in preference order.
    pub rpc_urls: Vec<String>,
    /// Block explorer URLs.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub block_explorer_urls: Option<Vec<String>>,
}

/// Result of [`add_chain_parameters`].
///
/// Serialises untagged: either the descriptor object or the bare chain id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AddChainParameters {
    /// Register-then-switch payload.
    Add(AddEthereumChainParameter),
    /// Switch by id only; no registration payload is available.
    Switch(ChainId),
}

impl AddChainParameters {
    /// The chain id this result refers to.
    #[must_use]
    pub const fn chain_id(&self) -> ChainId {
        match self {
            Self::Add(params) => params.chain_id,
            Self::Switch(chain_id) => *chain_id,
        }
    }

    /// The descriptor, if one was produced.
    #[must_use]
    pub const fn as_add(&self) -> Option<&AddEthereumChainParameter> {
        match self {
            Self::Add(params) => Some(params),
            Self::Switch(_) => None,
        }
    }
}

/// Resolves the add-chain parameters for `chain_id`.
///
/// Extended chains yield a full descriptor; basic and unknown chains yield
/// the id unchanged. Never fails.
#[must_use]
pub fn add_chain_parameters(registry: &ChainRegistry, chain_id: ChainId) -> AddChainParameters {
    match registry.get(chain_id) {
        Some(ChainInfo::Extended(info)) => AddChainParameters::Add(AddEthereumChainParameter {
            chain_id,
            chain_name: info.basic.name.clone(),
            native_currency: info.native_currency.clone(),
            rpc_urls: info.basic.urls.clone(),
            block_explorer_urls: info.block_explorer_urls.clone(),
        }),
        Some(ChainInfo::Basic(_)) | None => AddChainParameters::Switch(chain_id),
    }
}

impl ChainRegistry {
    /// See [`add_chain_parameters`].
    #[must_use]
    pub fn add_chain_parameters(&self, chain_id: ChainId) -> AddChainParameters {
        add_chain_parameters(self, chain_id)
    }
}
