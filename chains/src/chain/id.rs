//! Numeric EIP-155 chain identifiers.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// CAIP-2 namespace for EVM chains.
pub const EIP155_NAMESPACE: &str = "eip155";

/// Numeric chain identifier (EIP-155 chain reference).
///
/// Serialised as a bare number. Parsed from either `"10"` or the CAIP-2
/// form `"eip155:10"`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct ChainId(u64);

impl ChainId {
    /// Wraps a raw chain reference.
    #[must_use]
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    /// Returns the raw chain reference.
    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }

    /// Returns the CAIP-2 form, e.g. `eip155:10`.
    #[must_use]
    pub fn caip2(self) -> String {
        format!("{EIP155_NAMESPACE}:{}", self.0)
    }
}

impl From<u64> for ChainId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

impl From<ChainId> for u64 {
    fn from(id: ChainId) -> Self {
        id.0
    }
}

impl fmt::Display for ChainId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl FromStr for ChainId {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let reference = match s.split_once(':') {
            Some((EIP155_NAMESPACE, reference)) => reference,
            Some((namespace, _)) => {
                return Err(Error::chain(format!(
                    "unexpected namespace '{namespace}' in chain id '{s}'"
                )));
            }
            None => s,
        };
        reference
            .trim()
            .parse::<u64>()
            .map(Self)
            .map_err(|e| Error::chain_with(format!("invalid chain id '{s}'"), e))
    }
}
