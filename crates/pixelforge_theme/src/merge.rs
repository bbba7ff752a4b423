//! Token merging
//!
//! Layering is one level per category: override keys replace same-named
//! base keys, base keys absent from the override are preserved, and keys
//! only present in the override are appended in override order. A color
//! family in the override replaces the whole family in the base; shades
//! are never merged within a family. The `typography` and `motion`
//! sub-mappings each merge independently under the same rule.

use crate::tokens::{DesignTokens, MotionTokens, TokenOverrides, TypographyTokens};
use indexmap::IndexMap;

/// Merge sparse `overrides` over a complete `base` token set.
///
/// Pure: neither input is mutated, and the result is always a complete
/// token set. An empty override returns a copy of `base`.
pub fn merge(base: &DesignTokens, overrides: &TokenOverrides) -> DesignTokens {
    DesignTokens {
        colors: merge_map(&base.colors, &overrides.colors),
        spacing: merge_map(&base.spacing, &overrides.spacing),
        typography: merge_typography(&base.typography, &overrides.typography),
        border_radius: merge_map(&base.border_radius, &overrides.border_radius),
        shadows: merge_map(&base.shadows, &overrides.shadows),
        motion: merge_motion(&base.motion, &overrides.motion),
        z_index: merge_map(&base.z_index, &overrides.z_index),
    }
}

/// Compose two sparse override sets under the same replace-by-key rule.
///
/// `merge(base, &merge_overrides(a, b))` equals
/// `merge(&merge(base, a), b)`, which is what makes repeated
/// `set_tokens` calls cumulative.
pub fn merge_overrides(base: &TokenOverrides, extra: &TokenOverrides) -> TokenOverrides {
    TokenOverrides {
        colors: merge_map(&base.colors, &extra.colors),
        spacing: merge_map(&base.spacing, &extra.spacing),
        typography: merge_typography(&base.typography, &extra.typography),
        border_radius: merge_map(&base.border_radius, &extra.border_radius),
        shadows: merge_map(&base.shadows, &extra.shadows),
        motion: merge_motion(&base.motion, &extra.motion),
        z_index: merge_map(&base.z_index, &extra.z_index),
    }
}

fn merge_typography(base: &TypographyTokens, overrides: &TypographyTokens) -> TypographyTokens {
    TypographyTokens {
        font_family: merge_map(&base.font_family, &overrides.font_family),
        font_size: merge_map(&base.font_size, &overrides.font_size),
        font_weight: merge_map(&base.font_weight, &overrides.font_weight),
        line_height: merge_map(&base.line_height, &overrides.line_height),
        letter_spacing: merge_map(&base.letter_spacing, &overrides.letter_spacing),
    }
}

fn merge_motion(base: &MotionTokens, overrides: &MotionTokens) -> MotionTokens {
    MotionTokens {
        duration: merge_map(&base.duration, &overrides.duration),
        easing: merge_map(&base.easing, &overrides.easing),
    }
}

// IndexMap::insert keeps the original slot for existing keys, so base
// ordering survives overrides and new keys land at the end.
fn merge_map<V: Clone>(
    base: &IndexMap<String, V>,
    overrides: &IndexMap<String, V>,
) -> IndexMap<String, V> {
    let mut merged = base.clone();
    for (key, value) in overrides {
        merged.insert(key.clone(), value.clone());
    }
    merged
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tokens::ColorValue;

    fn base() -> DesignTokens {
        let mut tokens = DesignTokens::default();
        tokens
            .colors
            .insert("primary".to_string(), ColorValue::from("#000"));
        tokens.colors.insert(
            "neutral".to_string(),
            ColorValue::group([("100", "#f1f5f9"), ("900", "#0f172a")]),
        );
        tokens.spacing.insert("sm".to_string(), "0.5rem".to_string());
        tokens.spacing.insert("md".to_string(), "1rem".to_string());
        tokens
            .typography
            .font_weight
            .insert("regular".to_string(), 400);
        tokens
            .typography
            .font_weight
            .insert("bold".to_string(), 700);
        tokens
            .motion
            .duration
            .insert("fast".to_string(), "150ms".to_string());
        tokens.z_index.insert("modal".to_string(), 1400);
        tokens
    }

    #[test]
    fn override_key_wins_and_absent_keys_are_preserved() {
        let mut overrides = TokenOverrides::default();
        overrides
            .spacing
            .insert("md".to_string(), "1.25rem".to_string());

        let merged = merge(&base(), &overrides);
        assert_eq!(merged.spacing.get("md"), Some(&"1.25rem".to_string()));
        assert_eq!(merged.spacing.get("sm"), Some(&"0.5rem".to_string()));
        assert_eq!(merged.z_index.get("modal"), Some(&1400));
    }

    #[test]
    fn color_override_replaces_the_value() {
        let mut overrides = TokenOverrides::default();
        overrides
            .colors
            .insert("primary".to_string(), ColorValue::from("#fff"));

        let merged = merge(&base(), &overrides);
        assert_eq!(merged.colors.get("primary"), Some(&ColorValue::from("#fff")));
    }

    #[test]
    fn color_family_replacement_is_shallow() {
        // Overriding a family drops shades the override does not mention.
        let mut overrides = TokenOverrides::default();
        overrides.colors.insert(
            "neutral".to_string(),
            ColorValue::group([("100", "#fafafa")]),
        );

        let merged = merge(&base(), &overrides);
        let neutral = merged.colors.get("neutral").unwrap();
        assert_eq!(neutral, &ColorValue::group([("100", "#fafafa")]));
        assert_eq!(neutral.leaf_count(), 1);
    }

    #[test]
    fn typography_sub_mappings_merge_independently() {
        let mut overrides = TokenOverrides::default();
        overrides
            .typography
            .font_weight
            .insert("bold".to_string(), 800);
        overrides
            .typography
            .font_size
            .insert("md".to_string(), "1.125rem".to_string());

        let merged = merge(&base(), &overrides);
        assert_eq!(merged.typography.font_weight.get("bold"), Some(&800));
        assert_eq!(merged.typography.font_weight.get("regular"), Some(&400));
        assert_eq!(
            merged.typography.font_size.get("md"),
            Some(&"1.125rem".to_string())
        );
    }

    #[test]
    fn empty_override_is_identity() {
        let tokens = base();
        assert_eq!(merge(&tokens, &TokenOverrides::default()), tokens);
    }

    #[test]
    fn override_only_keys_are_appended_after_base_keys() {
        let mut overrides = TokenOverrides::default();
        overrides
            .spacing
            .insert("xl".to_string(), "2rem".to_string());

        let merged = merge(&base(), &overrides);
        let keys: Vec<&str> = merged.spacing.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["sm", "md", "xl"]);
    }

    #[test]
    fn overridden_keys_keep_their_base_position() {
        let mut overrides = TokenOverrides::default();
        overrides
            .spacing
            .insert("sm".to_string(), "0.625rem".to_string());

        let merged = merge(&base(), &overrides);
        let keys: Vec<&str> = merged.spacing.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["sm", "md"]);
    }

    #[test]
    fn override_composition_equals_sequential_merge() {
        let mut first = TokenOverrides::default();
        first
            .colors
            .insert("primary".to_string(), ColorValue::from("#111"));
        first
            .spacing
            .insert("md".to_string(), "1.25rem".to_string());

        let mut second = TokenOverrides::default();
        second
            .colors
            .insert("primary".to_string(), ColorValue::from("#222"));
        second.z_index.insert("toast".to_string(), 1600);

        let composed = merge(&base(), &merge_overrides(&first, &second));
        let sequential = merge(&merge(&base(), &first), &second);
        assert_eq!(composed, sequential);
        assert_eq!(
            composed.colors.get("primary"),
            Some(&ColorValue::from("#222"))
        );
        assert_eq!(composed.spacing.get("md"), Some(&"1.25rem".to_string()));
        assert_eq!(composed.z_index.get("toast"), Some(&1600));
    }
}
