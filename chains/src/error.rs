//! Unified error types for the chain registry.

use std::error::Error as StdError;

use thiserror::Error;

type BoxedSource = Box<dyn StdError + Send + Sync + 'static>;

/// Top-level error type for registry construction and the CLI.
///
/// Unknown chain identifiers and missing provider keys never produce one.
#[derive(Debug, Error)]
pub enum Error {
    /// Configuration file could not be resolved, read, parsed, or written.
    #[error("config: {message}")]
    Config {
        /// Human-readable description.
        message: String,
        /// Underlying cause, if any.
        #[source]
        source: Option<BoxedSource>,
    },

    /// A chain entry or chain identifier is invalid.
    #[error("chain: {message}")]
    Chain {
        /// Human-readable description.
        message: String,
        /// Underlying cause, if any.
        #[source]
        source: Option<BoxedSource>,
    },

    /// Command output could not be serialised.
    #[error("output: {0}")]
    Output(#[from] serde_json::Error),
}

impl Error {
    /// Configuration error without an underlying cause.
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
            source: None,
        }
    }

    /// Configuration error wrapping an underlying cause.
    pub fn config_with(
        message: impl Into<String>,
        source: impl StdError + Send + Sync + 'static,
    ) -> Self {
        Self::Config {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Chain error without an underlying cause.
    pub fn chain(message: impl Into<String>) -> Self {
        Self::Chain {
            message: message.into(),
            source: None,
        }
    }

    /// Chain error wrapping an underlying cause.
    pub fn chain_with(
        message: impl Into<String>,
        source: impl StdError + Send + Sync + 'static,
    ) -> Self {
        Self::Chain {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }
}
