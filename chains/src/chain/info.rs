//! Chain metadata records.

use serde::{Deserialize, Serialize};

/// Native currency descriptor, as expected by `wallet_addEthereumChain`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NativeCurrency {
    /// Display name, e.g. `Ether`.
    pub name: String,
    /// Ticker symbol, e.g. `ETH`.
    pub symbol: String,
    /// Number of decimals.
    pub decimals: u8,
}

impl NativeCurrency {
    /// Creates a currency descriptor.
    pub fn new(name: impl Into<String>, symbol: impl Into<String>, decimals: u8) -> Self {
        Self {
            name: name.into(),
            symbol: symbol.into(),
            decimals,
        }
    }

    /// Ether, 18 decimals.
    #[must_use]
    pub fn ether() -> Self {
        Self::new("Ether", "ETH", 18)
    }

    /// Matic, 18 decimals.
    #[must_use]
    pub fn matic() -> Self {
        Self::new("Matic", "MATIC", 18)
    }
}

/// RPC endpoints and display name shared by every chain record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BasicChainInfo {
    /// RPC endpoints in preference order. Never contains empty strings.
    pub urls: Vec<String>,
    /// Display name.
    pub name: String,
}

/// A chain record carrying enough metadata for a wallet to register it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtendedChainInfo {
    /// Endpoints and display name.
    #[serde(flatten)]
    pub basic: BasicChainInfo,
    /// Native currency of the chain.
    pub native_currency: NativeCurrency,
    /// Block explorer URLs, if known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub block_explorer_urls: Option<Vec<String>>,
}

/// A registry entry: either endpoints only, or endpoints plus the metadata
/// needed to build an add-chain request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum ChainInfo {
    /// Chain with native currency and explorer metadata.
    Extended(ExtendedChainInfo),
    /// Chain with endpoints and name only.
    Basic(BasicChainInfo),
}

impl ChainInfo {
    /// Classifies a record: it is extended iff a native currency is given.
    ///
    /// Explorer URLs are only kept for extended records.
    #[must_use]
    pub fn classify(
        basic: BasicChainInfo,
        native_currency: Option<NativeCurrency>,
        block_explorer_urls: Option<Vec<String>>,
    ) -> Self {
        match native_currency {
            Some(native_currency) => Self::Extended(ExtendedChainInfo {
                basic,
                native_currency,
                block_explorer_urls,
            }),
            None => Self::Basic(basic),
        }
    }

    /// Display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.basic().name
    }

    /// RPC endpoints in preference order.
    #[must_use]
    pub fn urls(&self) -> &[String] {
        &self.basic().urls
    }

    /// Native currency, for extended records.
    #[must_use]
    pub const fn native_currency(&self) -> Option<&NativeCurrency> {
        match self {
            Self::Extended(info) => Some(&info.native_currency),
            Self::Basic(_) => None,
        }
    }

    /// Block explorer URLs, for extended records that list them.
    #[must_use]
    pub fn block_explorer_urls(&self) -> Option<&[String]> {
        match self {
            Self::Extended(info) => info.block_explorer_urls.as_deref(),
            Self::Basic(_) => None,
        }
    }

    /// Whether this record carries add-chain metadata.
    #[must_use]
    pub const fn is_extended(&self) -> bool {
        matches!(self, Self::Extended(_))
    }

    const fn basic(&self) -> &BasicChainInfo {
        match self {
            Self::Extended(info) => &info.basic,
            Self::Basic(info) => info,
        }
    }
}
