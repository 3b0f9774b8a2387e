//! Dark / light page theme.

use serde::{Deserialize, Serialize};

/// Color scheme. The page opens dark.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    /// Dark background, light text
    #[default]
    Dark,
    /// Light background, dark text
    Light,
}

impl Theme {
    /// The other theme.
    pub fn toggled(self) -> Self {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }

    /// Whether this is the dark theme.
    pub fn is_dark(self) -> bool {
        self == Theme::Dark
    }

    /// Pick between a dark and a light variant (usually CSS classes).
    pub fn pick<T>(self, dark: T, light: T) -> T {
        match self {
            Theme::Dark => dark,
            Theme::Light => light,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_and_pick() {
        let theme = Theme::default();
        assert!(theme.is_dark());
        assert_eq!(theme.pick("bg-gray-900", "bg-white"), "bg-gray-900");
        assert_eq!(theme.toggled().pick("bg-gray-900", "bg-white"), "bg-white");
        assert_eq!(theme.toggled().toggled(), theme);
    }
}
