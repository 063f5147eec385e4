//! Chain identifiers, metadata records, and the chain registry.
//!
//! - [`config`] — user-defined chain entries and CAIP-2 keyed TOML deserialisation.
//! - [`registry`] — [`ChainRegistry`] construction and the derived [`UrlIndex`].
//! - [`table`] — built-in chains and provider-keyed endpoint templates.

mod config;
mod id;
mod info;
mod registry;
mod table;

pub use self::config::*;
pub use self::id::*;
pub use self::info::*;
pub use self::registry::*;
pub use self::table::{Endpoint, builtin_chains};
