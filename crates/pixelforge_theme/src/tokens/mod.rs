//! Design tokens for theming
//!
//! Tokens are the atomic values that make up the design system:
//! - Colors (flat values and shade/role groups)
//! - Spacing
//! - Typography (families, sizes, weights, line heights, letter spacing)
//! - Border radii
//! - Shadows
//! - Motion (durations and easings)
//! - Z-index layers
//!
//! Every mapping preserves insertion order, so the generated CSS is
//! deterministic for a given token set.

mod color;
mod motion;
mod typography;

pub use color::*;
pub use motion::*;
pub use typography::*;

use crate::error::ThemeError;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Complete set of design tokens for one theme variant.
///
/// A complete set carries every category; each leaf value projects to
/// exactly one CSS custom property.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DesignTokens {
    pub colors: IndexMap<String, ColorValue>,
    pub spacing: IndexMap<String, String>,
    pub typography: TypographyTokens,
    pub border_radius: IndexMap<String, String>,
    pub shadows: IndexMap<String, String>,
    pub motion: MotionTokens,
    pub z_index: IndexMap<String, i32>,
}

impl DesignTokens {
    /// Total number of token leaves across all categories.
    pub fn leaf_count(&self) -> usize {
        self.colors
            .values()
            .map(ColorValue::leaf_count)
            .sum::<usize>()
            + self.spacing.len()
            + self.typography.leaf_count()
            + self.border_radius.len()
            + self.shadows.len()
            + self.motion.leaf_count()
            + self.z_index.len()
    }
}

/// Sparse token overrides layered over a complete token set.
///
/// Every category defaults to empty; an empty override merges to an
/// unchanged token set. Overrides use the same value types as
/// [`DesignTokens`], so anything the base can express can be overridden.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TokenOverrides {
    pub colors: IndexMap<String, ColorValue>,
    pub spacing: IndexMap<String, String>,
    pub typography: TypographyTokens,
    pub border_radius: IndexMap<String, String>,
    pub shadows: IndexMap<String, String>,
    pub motion: MotionTokens,
    pub z_index: IndexMap<String, i32>,
}

impl TokenOverrides {
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
            && self.spacing.is_empty()
            && self.typography.is_empty()
            && self.border_radius.is_empty()
            && self.shadows.is_empty()
            && self.motion.is_empty()
            && self.z_index.is_empty()
    }

    /// Parse overrides from a TOML document, the format PixelForge apps
    /// ship custom theme files in.
    ///
    /// ```toml
    /// [colors]
    /// success = "#15803d"
    ///
    /// [colors.primary]
    /// "500" = "#7c3aed"
    ///
    /// [spacing]
    /// md = "1.25rem"
    /// ```
    pub fn from_toml_str(source: &str) -> Result<Self, ThemeError> {
        Ok(toml::from_str(source)?)
    }
}
