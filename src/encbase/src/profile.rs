use std::{fs, path::Path};

use eyre::Context;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// A reusable alphabet configuration stored as JSON.
///
/// ```json
/// {
///     "symbols": "0123456789ABCDEFGHJKMNPQRSTVWXYZ",
///     "aliases": { "0": ["O"], "1": ["I", "L"] },
///     "separators": "- "
/// }
/// ```
///
/// Exactly one of `name` and `symbols` has to be given.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct Profile {
    /// The name of a standard alphabet.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// The symbols of a custom alphabet, one per character.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub symbols: Option<String>,

    /// Alias groups, keyed by the canonical symbol they decode as.
    #[serde(skip_serializing_if = "IndexMap::is_empty")]
    pub aliases: IndexMap<String, Vec<String>>,

    /// Characters that are skipped when decoding.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub separators: String,
}

impl Profile {
    /// Loads a profile from a JSON file.
    pub fn from_path(path: &Path) -> eyre::Result<Self> {
        let data = fs::read_to_string(path)
            .with_context(|| format!("failed to read profile '{}'", path.display()))?;

        Self::from_json(&data).with_context(|| format!("invalid profile '{}'", path.display()))
    }

    /// Parses a profile from JSON text.
    pub fn from_json(data: &str) -> eyre::Result<Self> {
        let profile: Self = serde_json::from_str(data)?;
        match (&profile.name, &profile.symbols) {
            (Some(_), Some(_)) => eyre::bail!("profile must not set both 'name' and 'symbols'"),
            (None, None) => eyre::bail!("profile must set either 'name' or 'symbols'"),
            _ => Ok(profile),
        }
    }
}
