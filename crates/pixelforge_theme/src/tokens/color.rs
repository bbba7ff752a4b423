//! Color token values

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Value of one color family: a single color or a named group.
///
/// Groups cover both shade scales (`"50"`..`"900"`) and semantic role
/// groups (a group holding a `primary` entry, like `text` or `border`).
/// Projection treats both the same; the distinction is purely about how
/// the design system organizes its data.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ColorValue {
    /// A single CSS color string, e.g. `"#4f46e5"`.
    Value(String),
    /// Named sub-entries, each a CSS color string.
    Group(IndexMap<String, String>),
}

impl ColorValue {
    /// Build a group value from `(name, color)` pairs, preserving order.
    pub fn group<K, V>(entries: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        ColorValue::Group(
            entries
                .into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        )
    }

    /// Number of CSS variables this value projects to.
    pub fn leaf_count(&self) -> usize {
        match self {
            ColorValue::Value(_) => 1,
            ColorValue::Group(entries) => entries.len(),
        }
    }
}

impl From<&str> for ColorValue {
    fn from(value: &str) -> Self {
        ColorValue::Value(value.to_string())
    }
}

impl From<String> for ColorValue {
    fn from(value: String) -> Self {
        ColorValue::Value(value)
    }
}
