//! Light/dark theme flag.
//!
//! The theme is session-long state owned by the app root and shared with
//! every section through context. Toggling flips the flag; nothing is
//! persisted across relaunches.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::content::{HERO_IMAGE_DARK, HERO_IMAGE_LIGHT};

/// Color theme for the whole page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    #[default]
    Dark,
}

impl Theme {
    /// Flip between light and dark.
    pub fn toggle(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    /// CSS class applied to the page root; the stylesheet switches its
    /// custom-property palette on it.
    pub fn class_name(self) -> &'static str {
        match self {
            Theme::Light => "theme-light",
            Theme::Dark => "theme-dark",
        }
    }

    /// Theme-matched hero illustration.
    pub fn hero_image(self) -> &'static str {
        match self {
            Theme::Light => HERO_IMAGE_LIGHT,
            Theme::Dark => HERO_IMAGE_DARK,
        }
    }

    /// Display name for the toggle control's accessible label.
    pub fn label(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Theme {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            other => Err(format!("unknown theme '{other}' (expected light or dark)")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_twice_is_identity() {
        for theme in [Theme::Light, Theme::Dark] {
            assert_eq!(theme.toggle().toggle(), theme);
        }
    }

    #[test]
    fn test_hero_image_matches_theme() {
        assert_eq!(Theme::Light.hero_image(), HERO_IMAGE_LIGHT);
        assert_eq!(Theme::Dark.hero_image(), HERO_IMAGE_DARK);
        assert_ne!(Theme::Light.hero_image(), Theme::Dark.hero_image());
    }

    #[test]
    fn test_from_str() {
        assert_eq!("light".parse::<Theme>(), Ok(Theme::Light));
        assert_eq!(" Dark ".parse::<Theme>(), Ok(Theme::Dark));
        assert!("sepia".parse::<Theme>().is_err());
    }
}
