//! Built-in chain table and endpoint templates.

use super::id::ChainId;
use super::info::{BasicChainInfo, ChainInfo, NativeCurrency};
use crate::keys::ProviderKeys;

use self::Endpoint::{Alchemy, Infura, Public};

/// Candidate RPC endpoint for a built-in chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    /// `https://{network}.infura.io/v3/{key}`, needs an Infura key.
    Infura(&'static str),
    /// `https://{network}.alchemyapi.io/v2/{key}`, needs an Alchemy key.
    Alchemy(&'static str),
    /// Public endpoint, always available.
    Public(&'static str),
}

impl Endpoint {
    /// Builds the URL, or `None` when the required key is absent.
    #[must_use]
    pub fn resolve(self, keys: &ProviderKeys) -> Option<String> {
        match self {
            Self::Infura(network) => keys
                .infura()
                .map(|key| format!("https://{network}.infura.io/v3/{key}")),
            Self::Alchemy(network) => keys
                .alchemy()
                .map(|key| format!("https://{network}.alchemyapi.io/v2/{key}")),
            Self::Public(url) => Some(url.to_owned()),
        }
    }
}

#[derive(Debug, Clone, Copy)]
enum Currency {
    Ether,
    Matic,
}

impl Currency {
    fn descriptor(self) -> NativeCurrency {
        match self {
            Self::Ether => NativeCurrency::ether(),
            Self::Matic => NativeCurrency::matic(),
        }
    }
}

/// Static description of a built-in chain.
#[derive(Debug, Clone, Copy)]
struct ChainTemplate {
    id: u64,
    name: &'static str,
    endpoints: &'static [Endpoint],
    currency: Option<Currency>,
    explorers: &'static [&'static str],
}

const fn basic(id: u64, name: &'static str, endpoints: &'static [Endpoint]) -> ChainTemplate {
    ChainTemplate {
        id,
        name,
        endpoints,
        currency: None,
        explorers: &[],
    }
}

const fn extended(
    id: u64,
    name: &'static str,
    endpoints: &'static [Endpoint],
    currency: Currency,
    explorers: &'static [&'static str],
) -> ChainTemplate {
    ChainTemplate {
        id,
        name,
        endpoints,
        currency: Some(currency),
        explorers,
    }
}

static BUILTIN_CHAINS: &[ChainTemplate] = &[
    basic(
        1,
        "Mainnet",
        &[
            Infura("mainnet"),
            Alchemy("eth-mainnet"),
            Public("https://cloudflare-eth.com"),
        ],
    ),
    basic(3, "Ropsten", &[Infura("ropsten")]),
    basic(4, "Rinkeby", &[Infura("rinkeby")]),
    basic(5, "Görli", &[Infura("goerli")]),
    basic(42, "Kovan", &[Infura("kovan")]),
    // Optimism
    extended(
        10,
        "Optimistic Ethereum",
        &[Infura("optimism-mainnet"), Public("https://mainnet.optimism.io")],
        Currency::Ether,
        &["https://optimistic.etherscan.io"],
    ),
    extended(
        69,
        "Optimistic Kovan",
        &[Infura("optimism-kovan"), Public("https://kovan.optimism.io")],
        Currency::Ether,
        &["https://kovan-optimistic.etherscan.io"],
    ),
    // Arbitrum
    extended(
        42161,
        "Arbitrum One",
        &[Infura("arbitrum-mainnet"), Public("https://arb1.arbitrum.io/rpc")],
        Currency::Ether,
        &["https://arbiscan.io"],
    ),
    extended(
        421_611,
        "Arbitrum Testnet",
        &[Infura("arbitrum-rinkeby"), Public("https://rinkeby.arbitrum.io/rpc")],
        Currency::Ether,
        &["https://testnet.arbiscan.io"],
    ),
    // Polygon
    extended(
        137,
        "Polygon Mainnet",
        &[Infura("polygon-mainnet"), Public("https://polygon-rpc.com")],
        Currency::Matic,
        &["https://polygonscan.com"],
    ),
    extended(
        80001,
        "Polygon Mumbai",
        &[Infura("polygon-mumbai")],
        Currency::Matic,
        &["https://mumbai.polygonscan.com"],
    ),
    // Avalanche
    basic(
        43114,
        "Avalanche Mainnet",
        &[Public("https://api.avax.network/ext/bc/C/rpc")],
    ),
    basic(
        43113,
        "Avalanche Fuji Testnet",
        // explorer: https://testnet.snowtrace.io/ (not kept, no native currency)
        &[Public("https://api.avax-test.network/ext/bc/C/rpc")],
    ),
    // Fantom
    basic(250, "Fantom Opera", &[Public("https://rpc.ftm.tools/")]),
    basic(4002, "Fantom Testnet", &[Public("https://rpc.testnet.fantom.network")]),
    // BNB Smart Chain
    basic(56, "BSC Mainet", &[Public("https://bsc-dataseed.binance.org/")]),
    basic(
        97,
        "BSC Testnet",
        // explorer: https://testnet.bscscan.com/ (not kept, no native currency)
        &[Public("https://data-seed-prebsc-1-s1.binance.org:8545/")],
    ),
];

impl ChainTemplate {
    fn build(&self, keys: &ProviderKeys) -> ChainInfo {
        let urls = self
            .endpoints
            .iter()
            .filter_map(|endpoint| endpoint.resolve(keys))
            .filter(|url| !url.is_empty())
            .collect();
        let explorers = (!self.explorers.is_empty())
            .then(|| self.explorers.iter().map(|&url| url.to_owned()).collect());
        ChainInfo::classify(
            BasicChainInfo {
                urls,
                name: self.name.to_owned(),
            },
            self.currency.map(Currency::descriptor),
            explorers,
        )
    }
}

/// Builds every built-in chain with the given provider keys.
///
/// Endpoints whose key is missing are dropped; the remaining ones keep their
/// order, keyed providers first and public fallbacks last.
pub fn builtin_chains(keys: &ProviderKeys) -> impl Iterator<Item = (ChainId, ChainInfo)> + '_ {
    BUILTIN_CHAINS
        .iter()
        .map(move |template| (ChainId::new(template.id), template.build(keys)))
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn ids_are_unique() {
        let ids: HashSet<u64> = BUILTIN_CHAINS.iter().map(|t| t.id).collect();
        assert_eq!(ids.len(), BUILTIN_CHAINS.len());
    }

    #[test]
    fn keyed_endpoints_need_their_key() {
        let none = ProviderKeys::default();
        assert_eq!(Infura("mainnet").resolve(&none), None);
        assert_eq!(Alchemy("eth-mainnet").resolve(&none), None);
        assert_eq!(
            Public("https://cloudflare-eth.com").resolve(&none).as_deref(),
            Some("https://cloudflare-eth.com")
        );

        let keys = ProviderKeys::new(Some("inf".to_owned()), Some("alc".to_owned()));
        assert_eq!(
            Infura("mainnet").resolve(&keys).as_deref(),
            Some("https://mainnet.infura.io/v3/inf")
        );
        assert_eq!(
            Alchemy("eth-mainnet").resolve(&keys).as_deref(),
            Some("https://eth-mainnet.alchemyapi.io/v2/alc")
        );
    }

    #[test]
    fn public_only_chains_do_not_depend_on_keys() {
        let keys = ProviderKeys::new(Some("inf".to_owned()), None);
        let with: Vec<_> = builtin_chains(&keys).collect();
        let without: Vec<_> = builtin_chains(&ProviderKeys::default()).collect();
        for ((id, a), (_, b)) in with.iter().zip(&without) {
            if [43114, 43113, 250, 4002, 56, 97].contains(&id.get()) {
                assert_eq!(a, b, "chain {id}");
            }
        }
    }
}
