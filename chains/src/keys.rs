//! Optional RPC provider credentials.
//!
//! Keys may be given literally or as environment-variable references
//! (`$VAR` or `${VAR}`). A blank value, or a reference to an unset
//! variable, means "no key": endpoints depending on it are left out of the
//! registry instead of failing construction.

use serde::{Deserialize, Serialize};

/// Credentials interpolated into provider-keyed RPC URL templates.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ProviderKeys {
    /// Infura project id.
    #[serde(default)]
    infura: Option<String>,
    /// Alchemy API key.
    #[serde(default)]
    alchemy: Option<String>,
}

impl ProviderKeys {
    /// Creates a key set, discarding blank values.
    #[must_use]
    pub fn new(infura: Option<String>, alchemy: Option<String>) -> Self {
        Self {
            infura: normalize(infura),
            alchemy: normalize(alchemy),
        }
    }

    /// Infura project id, if configured.
    #[must_use]
    pub fn infura(&self) -> Option<&str> {
        self.infura.as_deref()
    }

    /// Alchemy API key, if configured.
    #[must_use]
    pub fn alchemy(&self) -> Option<&str> {
        self.alchemy.as_deref()
    }

    /// Resolves `$VAR` / `${VAR}` references and drops blank values.
    ///
    /// Keys loaded from a config file go through this before use.
    #[must_use]
    pub fn resolved(self) -> Self {
        Self::new(
            self.infura.as_deref().and_then(resolve_env),
            self.alchemy.as_deref().and_then(resolve_env),
        )
    }

    /// Overlays `other` on top of `self`; keys present in `other` win.
    #[must_use]
    pub fn merge(self, other: Self) -> Self {
        Self::new(other.infura.or(self.infura), other.alchemy.or(self.alchemy))
    }
}

fn normalize(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_owned())
        .filter(|v| !v.is_empty())
}

/// Resolve an environment-variable reference (`$VAR` or `${VAR}`), returning
/// the literal string unchanged if it does not match either pattern.
///
/// Unset variables resolve to `None`.
fn resolve_env(value: &str) -> Option<String> {
    let var_name = if value.starts_with("${") && value.ends_with('}') {
        Some(&value[2..value.len() - 1])
    } else if value.starts_with('$')
        && value.len() > 1
        && value[1..].chars().all(|c| c.is_alphanumeric() || c == '_')
    {
        Some(&value[1..])
    } else {
        None
    };

    let Some(var_name) = var_name else {
        return Some(value.to_owned());
    };
    let resolved = std::env::var(var_name).ok();
    #[cfg(feature = "telemetry")]
    if resolved.is_none() {
        tracing::debug!(var = var_name, "provider key env var not set, skipping");
    }
    resolved
}
