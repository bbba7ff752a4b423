//! Built-in PixelForge token store
//!
//! [`base_tokens`] is the complete default (light) set; [`dark_overrides`]
//! is the dark variant expressed as a sparse override layered on top of
//! it. The palette follows the PixelForge design system: an indigo primary
//! scale, slate neutrals, and Tailwind-derived semantic colors.

use crate::tokens::{ColorValue, DesignTokens, MotionTokens, TokenOverrides, TypographyTokens};
use indexmap::IndexMap;

fn string_map<const N: usize>(entries: [(&str, &str); N]) -> IndexMap<String, String> {
    entries
        .into_iter()
        .map(|(key, value)| (key.to_string(), value.to_string()))
        .collect()
}

fn value_map<V, const N: usize>(entries: [(&str, V); N]) -> IndexMap<String, V> {
    entries
        .into_iter()
        .map(|(key, value)| (key.to_string(), value))
        .collect()
}

fn color_map<const N: usize>(entries: [(&str, ColorValue); N]) -> IndexMap<String, ColorValue> {
    entries
        .into_iter()
        .map(|(key, value)| (key.to_string(), value))
        .collect()
}

/// The complete default (light) token set.
pub fn base_tokens() -> DesignTokens {
    DesignTokens {
        colors: color_map([
            (
                "primary",
                ColorValue::group([
                    ("50", "#eef2ff"),
                    ("100", "#e0e7ff"),
                    ("200", "#c7d2fe"),
                    ("300", "#a5b4fc"),
                    ("400", "#818cf8"),
                    ("500", "#6366f1"),
                    ("600", "#4f46e5"),
                    ("700", "#4338ca"),
                    ("800", "#3730a3"),
                    ("900", "#312e81"),
                ]),
            ),
            (
                "neutral",
                ColorValue::group([
                    ("50", "#f8fafc"),
                    ("100", "#f1f5f9"),
                    ("200", "#e2e8f0"),
                    ("300", "#cbd5e1"),
                    ("400", "#94a3b8"),
                    ("500", "#64748b"),
                    ("600", "#475569"),
                    ("700", "#334155"),
                    ("800", "#1e293b"),
                    ("900", "#0f172a"),
                ]),
            ),
            ("success", ColorValue::from("#16a34a")),
            ("warning", ColorValue::from("#d97706")),
            ("error", ColorValue::from("#dc2626")),
            ("info", ColorValue::from("#0ea5e9")),
            (
                "background",
                ColorValue::group([
                    ("primary", "#ffffff"),
                    ("secondary", "#f8fafc"),
                    ("elevated", "#ffffff"),
                    ("overlay", "rgba(15, 23, 42, 0.5)"),
                ]),
            ),
            (
                "text",
                ColorValue::group([
                    ("primary", "#0f172a"),
                    ("secondary", "#475569"),
                    ("muted", "#94a3b8"),
                    ("inverse", "#f8fafc"),
                    ("link", "#4f46e5"),
                ]),
            ),
            (
                "border",
                ColorValue::group([
                    ("primary", "#e2e8f0"),
                    ("strong", "#cbd5e1"),
                    ("focus", "#6366f1"),
                    ("error", "#dc2626"),
                ]),
            ),
        ]),
        spacing: string_map([
            ("xs", "0.25rem"),
            ("sm", "0.5rem"),
            ("md", "1rem"),
            ("lg", "1.5rem"),
            ("xl", "2rem"),
            ("2xl", "3rem"),
            ("3xl", "4rem"),
        ]),
        typography: TypographyTokens {
            font_family: string_map([
                (
                    "sans",
                    "'Inter', -apple-system, BlinkMacSystemFont, 'Segoe UI', sans-serif",
                ),
                ("mono", "'JetBrains Mono', 'Fira Code', monospace"),
            ]),
            font_size: string_map([
                ("xs", "0.75rem"),
                ("sm", "0.875rem"),
                ("md", "1rem"),
                ("lg", "1.125rem"),
                ("xl", "1.25rem"),
                ("2xl", "1.5rem"),
                ("3xl", "1.875rem"),
                ("4xl", "2.25rem"),
            ]),
            font_weight: value_map([
                ("regular", 400),
                ("medium", 500),
                ("semibold", 600),
                ("bold", 700),
            ]),
            line_height: value_map([("tight", 1.25), ("normal", 1.5), ("relaxed", 1.75)]),
            letter_spacing: string_map([("tight", "-0.01em"), ("normal", "0"), ("wide", "0.02em")]),
        },
        border_radius: string_map([
            ("none", "0"),
            ("sm", "0.25rem"),
            ("md", "0.5rem"),
            ("lg", "0.75rem"),
            ("xl", "1rem"),
            ("full", "9999px"),
        ]),
        shadows: string_map([
            ("sm", "0 1px 2px 0 rgba(15, 23, 42, 0.05)"),
            ("md", "0 4px 6px -1px rgba(15, 23, 42, 0.1)"),
            ("lg", "0 10px 15px -3px rgba(15, 23, 42, 0.1)"),
            ("xl", "0 20px 25px -5px rgba(15, 23, 42, 0.1)"),
        ]),
        motion: MotionTokens {
            duration: string_map([
                ("instant", "75ms"),
                ("fast", "150ms"),
                ("normal", "250ms"),
                ("slow", "400ms"),
            ]),
            easing: string_map([
                ("standard", "cubic-bezier(0.4, 0, 0.2, 1)"),
                ("decelerate", "cubic-bezier(0, 0, 0.2, 1)"),
                ("accelerate", "cubic-bezier(0.4, 0, 1, 1)"),
                ("spring", "cubic-bezier(0.34, 1.56, 0.64, 1)"),
            ]),
        },
        z_index: value_map([
            ("dropdown", 1000),
            ("sticky", 1100),
            ("overlay", 1300),
            ("modal", 1400),
            ("popover", 1500),
            ("toast", 1600),
            ("tooltip", 1700),
        ]),
    }
}

/// The dark variant as a sparse override over [`base_tokens`].
///
/// Families are replaced wholesale with the same key shapes as the base,
/// so the light and dark variable sets line up one-to-one.
pub fn dark_overrides() -> TokenOverrides {
    TokenOverrides {
        colors: color_map([
            ("success", ColorValue::from("#22c55e")),
            ("warning", ColorValue::from("#f59e0b")),
            ("error", ColorValue::from("#f87171")),
            ("info", ColorValue::from("#38bdf8")),
            (
                "background",
                ColorValue::group([
                    ("primary", "#0f172a"),
                    ("secondary", "#1e293b"),
                    ("elevated", "#1e293b"),
                    ("overlay", "rgba(2, 6, 23, 0.7)"),
                ]),
            ),
            (
                "text",
                ColorValue::group([
                    ("primary", "#f8fafc"),
                    ("secondary", "#cbd5e1"),
                    ("muted", "#64748b"),
                    ("inverse", "#0f172a"),
                    ("link", "#818cf8"),
                ]),
            ),
            (
                "border",
                ColorValue::group([
                    ("primary", "#334155"),
                    ("strong", "#475569"),
                    ("focus", "#818cf8"),
                    ("error", "#f87171"),
                ]),
            ),
        ]),
        shadows: string_map([
            ("sm", "0 1px 2px 0 rgba(0, 0, 0, 0.3)"),
            ("md", "0 4px 6px -1px rgba(0, 0, 0, 0.4)"),
            ("lg", "0 10px 15px -3px rgba(0, 0, 0, 0.4)"),
            ("xl", "0 20px 25px -5px rgba(0, 0, 0, 0.5)"),
        ]),
        ..TokenOverrides::default()
    }
}
