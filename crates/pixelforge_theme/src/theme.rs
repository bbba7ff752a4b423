//! Theme mode and resolved color scheme

use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// The user's declared theme preference.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    Light,
    Dark,
    /// Follow the OS dark-mode preference.
    System,
}

impl ThemeMode {
    /// Stable identifier used for persistence.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
            Self::System => "system",
        }
    }

    /// Parse a persisted identifier. Only the exact literals `light`,
    /// `dark`, and `system` are recognized.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            "system" => Some(Self::System),
            _ => None,
        }
    }
}

impl Display for ThemeMode {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The scheme actually in effect after resolving [`ThemeMode::System`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ColorScheme {
    Light,
    Dark,
}

impl ColorScheme {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    pub fn is_dark(self) -> bool {
        self == Self::Dark
    }

    pub fn toggle(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }
}

impl Display for ColorScheme {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Resolve a declared mode against the sampled system preference.
pub fn resolve(mode: ThemeMode, system_dark: bool) -> ColorScheme {
    match mode {
        ThemeMode::Light => ColorScheme::Light,
        ThemeMode::Dark => ColorScheme::Dark,
        ThemeMode::System => {
            if system_dark {
                ColorScheme::Dark
            } else {
                ColorScheme::Light
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_accepts_exactly_the_three_literals() {
        assert_eq!(ThemeMode::parse("light"), Some(ThemeMode::Light));
        assert_eq!(ThemeMode::parse("dark"), Some(ThemeMode::Dark));
        assert_eq!(ThemeMode::parse("system"), Some(ThemeMode::System));

        assert_eq!(ThemeMode::parse("blue"), None);
        assert_eq!(ThemeMode::parse("Dark"), None);
        assert_eq!(ThemeMode::parse(" dark"), None);
        assert_eq!(ThemeMode::parse(""), None);
    }

    #[test]
    fn parse_round_trips_as_str() {
        for mode in [ThemeMode::Light, ThemeMode::Dark, ThemeMode::System] {
            assert_eq!(ThemeMode::parse(mode.as_str()), Some(mode));
        }
    }

    #[test]
    fn system_resolves_against_the_os_preference() {
        assert_eq!(resolve(ThemeMode::System, true), ColorScheme::Dark);
        assert_eq!(resolve(ThemeMode::System, false), ColorScheme::Light);
    }

    #[test]
    fn explicit_modes_ignore_the_os_preference() {
        assert_eq!(resolve(ThemeMode::Light, true), ColorScheme::Light);
        assert_eq!(resolve(ThemeMode::Dark, false), ColorScheme::Dark);
    }

    #[test]
    fn toggle_flips_the_scheme() {
        assert_eq!(ColorScheme::Light.toggle(), ColorScheme::Dark);
        assert_eq!(ColorScheme::Dark.toggle(), ColorScheme::Light);
    }
}
