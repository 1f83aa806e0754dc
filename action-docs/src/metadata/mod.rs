//! Declared inputs, outputs and secrets shared by actions and workflows.
//!
//! Definitions are kept in hash maps exactly as read. Every view that ends up
//! in rendered text goes through [`Definitions::sorted`] (or the usage
//! listing, which sorts its own lines), so output never depends on map
//! iteration order.

mod scalar;

use std::collections::HashMap;
use std::collections::hash_map;

use serde::{Deserialize, Deserializer};

pub(crate) use scalar::{entries, flag, text};

/// One declared parameter of an action or workflow.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Input {
    /// Human-readable explanation.
    #[serde(deserialize_with = "text")]
    pub description: String,
    /// Whether callers must supply the value.
    #[serde(deserialize_with = "flag")]
    pub required: bool,
    /// Declared value type (workflow inputs only).
    #[serde(rename = "type", deserialize_with = "text")]
    pub kind: String,
    /// Value used when the caller supplies none.
    #[serde(deserialize_with = "text")]
    pub default: String,
}

/// One declared result value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Output {
    /// Human-readable explanation.
    #[serde(deserialize_with = "text")]
    pub description: String,
}

/// One declared credential requirement of a reusable workflow.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Secret {
    /// Whether callers must pass the secret.
    #[serde(deserialize_with = "flag")]
    pub required: bool,
}

/// Definitions keyed by their unique name.
///
/// Equality compares key sets and every field, regardless of insertion
/// order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Definitions<T> {
    entries: HashMap<String, T>,
}

/// Inputs keyed by name.
pub type InputMap = Definitions<Input>;
/// Outputs keyed by name.
pub type OutputMap = Definitions<Output>;
/// Secrets keyed by name.
pub type SecretMap = Definitions<Secret>;

impl<T> Default for Definitions<T> {
    fn default() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }
}

impl<T> Definitions<T> {
    /// Creates an empty map.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a definition, returning the one it replaced.
    pub fn insert(&mut self, name: impl Into<String>, definition: T) -> Option<T> {
        self.entries.insert(name.into(), definition)
    }

    /// Looks up a definition by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&T> {
        self.entries.get(name)
    }

    /// Number of definitions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether nothing is declared.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates in unspecified order. Use [`Self::sorted`] for anything that
    /// is displayed.
    pub fn iter(&self) -> hash_map::Iter<'_, String, T> {
        self.entries.iter()
    }

    /// Canonical view ordered by name, compared byte-wise.
    ///
    /// Computed afresh on every call; the map itself is never reordered.
    #[must_use]
    pub fn sorted(&self) -> Vec<(&str, &T)> {
        let mut sorted: Vec<_> = self
            .entries
            .iter()
            .map(|(name, definition)| (name.as_str(), definition))
            .collect();
        sorted.sort_by(|(left, _), (right, _)| left.as_bytes().cmp(right.as_bytes()));
        sorted
    }
}

impl<'a, T> IntoIterator for &'a Definitions<T> {
    type Item = (&'a String, &'a T);
    type IntoIter = hash_map::Iter<'a, String, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

impl<K, T> FromIterator<(K, T)> for Definitions<T>
where
    K: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, T)>>(iter: I) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(name, definition)| (name.into(), definition))
                .collect(),
        }
    }
}

impl<'de, T> Deserialize<'de> for Definitions<T>
where
    T: Deserialize<'de> + Default,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        entries(deserializer).map(|entries| Self { entries })
    }
}

/// What to print after each input name in a usage example.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UsageValues {
    /// The declared default value.
    Defaults,
    /// Nothing; the consumer fills the value in.
    Blank,
}

impl InputMap {
    /// Renders the `with:` block of a usage example.
    ///
    /// Each input becomes `<spacing spaces><name>: <value>\n` and the `with:`
    /// key sits two columns to the left. Lines are sorted by their full
    /// text. An empty map renders as the empty string.
    #[must_use]
    pub fn with_block(&self, spacing: usize, values: UsageValues) -> String {
        if self.is_empty() {
            return String::new();
        }
        let indent = " ".repeat(spacing);
        let mut lines: Vec<String> = self
            .iter()
            .map(|(name, input)| {
                let value = match values {
                    UsageValues::Defaults => input.default.as_str(),
                    UsageValues::Blank => "",
                };
                format!("{indent}{name}: {value}\n")
            })
            .collect();
        lines.sort_unstable();
        format!("{}with:\n{}", " ".repeat(spacing.saturating_sub(2)), lines.concat())
    }

    /// Whether both maps produce the same usage listing (names and defaults).
    #[must_use]
    pub fn same_usage(&self, other: &Self) -> bool {
        self.with_block(2, UsageValues::Defaults) == other.with_block(2, UsageValues::Defaults)
    }
}

#[cfg(test)]
mod tests;
