//! Typography tokens

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Typography tokens: five independently merged sub-mappings.
///
/// Font weights and line heights are numeric and stringified only at
/// projection time; the other mappings hold CSS strings as-is.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TypographyTokens {
    pub font_family: IndexMap<String, String>,
    pub font_size: IndexMap<String, String>,
    pub font_weight: IndexMap<String, u16>,
    pub line_height: IndexMap<String, f32>,
    pub letter_spacing: IndexMap<String, String>,
}

impl TypographyTokens {
    /// Number of CSS variables this record projects to.
    pub fn leaf_count(&self) -> usize {
        self.font_family.len()
            + self.font_size.len()
            + self.font_weight.len()
            + self.line_height.len()
            + self.letter_spacing.len()
    }

    pub fn is_empty(&self) -> bool {
        self.leaf_count() == 0
    }
}
