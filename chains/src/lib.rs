//! EVM chain registry for wallet connections.
//!
//! Maps chain ids to RPC endpoints and display metadata, derives an index of
//! reachable chains, and builds `wallet_addEthereumChain` parameters.
//!
//! ```
//! use chains::{AddChainParameters, ChainId, ChainRegistry, ProviderKeys};
//!
//! let registry = ChainRegistry::new(&ProviderKeys::default());
//! assert_eq!(
//!     registry.add_chain_parameters(ChainId::new(1)),
//!     AddChainParameters::Switch(ChainId::new(1)),
//! );
//! assert!(registry.add_chain_parameters(ChainId::new(10)).as_add().is_some());
//! ```

pub mod chain;
pub mod config;
pub mod error;
pub mod keys;
pub mod params;

pub use chain::{ChainId, ChainInfo, ChainRegistry, NativeCurrency, UrlIndex};
pub use error::Error;
pub use keys::ProviderKeys;
pub use params::{AddChainParameters, AddEthereumChainParameter, add_chain_parameters};
