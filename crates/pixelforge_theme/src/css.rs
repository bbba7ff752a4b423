//! CSS custom-property projection
//!
//! Flattens a token set into `--pf-*` variables and serializes variable
//! maps into CSS rule blocks. Projection is total: every token leaf yields
//! exactly one variable, and the output order is fixed (colors, spacing,
//! typography, radii, shadows, motion, z-index; insertion order within
//! each category).

use crate::merge::merge;
use crate::presets::{base_tokens, dark_overrides};
use crate::tokens::{ColorValue, DesignTokens, TokenOverrides};
use indexmap::IndexMap;

/// Selector the live controller and the static generator target.
pub const ROOT_SELECTOR: &str = ":root";

/// Selector carrying the dark-variant block in generated style sheets.
pub const DARK_SELECTOR: &str = "[data-theme=\"dark\"]";

/// Flatten `tokens` into an ordered map of CSS variable names to values.
pub fn css_variables(tokens: &DesignTokens) -> IndexMap<String, String> {
    let mut vars = IndexMap::with_capacity(tokens.leaf_count());

    for (family, value) in &tokens.colors {
        match value {
            ColorValue::Value(color) => {
                vars.insert(format!("--pf-color-{family}"), color.clone());
            }
            ColorValue::Group(entries) => {
                for (sub, color) in entries {
                    vars.insert(format!("--pf-color-{family}-{sub}"), color.clone());
                }
            }
        }
    }
    for (key, value) in &tokens.spacing {
        vars.insert(format!("--pf-spacing-{key}"), value.clone());
    }
    for (key, value) in &tokens.typography.font_family {
        vars.insert(format!("--pf-font-family-{key}"), value.clone());
    }
    for (key, value) in &tokens.typography.font_size {
        vars.insert(format!("--pf-font-size-{key}"), value.clone());
    }
    for (key, value) in &tokens.typography.font_weight {
        vars.insert(format!("--pf-font-weight-{key}"), value.to_string());
    }
    for (key, value) in &tokens.typography.line_height {
        vars.insert(format!("--pf-line-height-{key}"), value.to_string());
    }
    for (key, value) in &tokens.typography.letter_spacing {
        vars.insert(format!("--pf-letter-spacing-{key}"), value.clone());
    }
    for (key, value) in &tokens.border_radius {
        vars.insert(format!("--pf-radius-{key}"), value.clone());
    }
    for (key, value) in &tokens.shadows {
        vars.insert(format!("--pf-shadow-{key}"), value.clone());
    }
    for (key, value) in &tokens.motion.duration {
        vars.insert(format!("--pf-duration-{key}"), value.clone());
    }
    for (key, value) in &tokens.motion.easing {
        vars.insert(format!("--pf-easing-{key}"), value.clone());
    }
    for (key, value) in &tokens.z_index {
        vars.insert(format!("--pf-z-index-{key}"), value.to_string());
    }

    vars
}

/// Serialize a variable map into a CSS rule block for `selector`:
/// one `  <name>: <value>;` line per entry, in map order.
pub fn serialize(vars: &IndexMap<String, String>, selector: &str) -> String {
    let mut css = String::with_capacity(selector.len() + vars.len() * 40 + 8);
    css.push_str(selector);
    css.push_str(" {\n");
    for (name, value) in vars {
        css.push_str("  ");
        css.push_str(name);
        css.push_str(": ");
        css.push_str(value);
        css.push_str(";\n");
    }
    css.push('}');
    css
}

/// Build the static style sheet for server-rendered and no-JS contexts:
/// a `:root` block with the light variables followed by a
/// `[data-theme="dark"]` block with the fully merged dark set.
pub fn theme_style_sheet(tokens: &DesignTokens, dark: &TokenOverrides) -> String {
    let light_block = serialize(&css_variables(tokens), ROOT_SELECTOR);
    let dark_block = serialize(&css_variables(&merge(tokens, dark)), DARK_SELECTOR);
    format!("{light_block}\n\n{dark_block}")
}

/// [`theme_style_sheet`] over the built-in token store.
pub fn default_theme_style_sheet() -> String {
    theme_style_sheet(&base_tokens(), &dark_overrides())
}
