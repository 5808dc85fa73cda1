//! Colour theme selection.

/// User-selected theme, cycled by the theme toggle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    /// Follow the operating system preference (default)
    #[default]
    System,
    Light,
    Dark,
}

/// Concrete appearance after resolving [`Theme::System`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Appearance {
    Light,
    Dark,
}

impl Theme {
    /// Next theme in the `System -> Light -> Dark -> System` cycle.
    pub fn next(self) -> Self {
        match self {
            Self::System => Self::Light,
            Self::Light => Self::Dark,
            Self::Dark => Self::System,
        }
    }

    /// Tooltip / ARIA label for the toggle button.
    pub fn label(self) -> &'static str {
        match self {
            Self::System => "System theme",
            Self::Light => "Light theme",
            Self::Dark => "Dark theme",
        }
    }

    pub fn resolve(self, prefers_dark: bool) -> Appearance {
        match self {
            Self::System if prefers_dark => Appearance::Dark,
            Self::System => Appearance::Light,
            Self::Light => Appearance::Light,
            Self::Dark => Appearance::Dark,
        }
    }
}

impl Appearance {
    /// Value written to the `data-theme` attribute.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_system() {
        assert_eq!(Theme::default(), Theme::System);
    }

    #[test]
    fn test_cycle_order() {
        assert_eq!(Theme::System.next(), Theme::Light);
        assert_eq!(Theme::Light.next(), Theme::Dark);
        assert_eq!(Theme::Dark.next(), Theme::System);
    }

    #[test]
    fn test_cycle_period_is_three() {
        for theme in [Theme::System, Theme::Light, Theme::Dark] {
            assert_eq!(theme.next().next().next(), theme);
        }
    }

    #[test]
    fn test_resolve() {
        assert_eq!(Theme::System.resolve(true), Appearance::Dark);
        assert_eq!(Theme::System.resolve(false), Appearance::Light);
        assert_eq!(Theme::Light.resolve(true), Appearance::Light);
        assert_eq!(Theme::Dark.resolve(false), Appearance::Dark);
        assert_eq!(Appearance::Dark.as_str(), "dark");
    }
}
