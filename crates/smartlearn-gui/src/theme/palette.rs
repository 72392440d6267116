//! Scholar color palettes.
//!
//! Two palettes (light/dark) around an indigo accent, integrated with
//! Iced's theme system via the `Palette` type.

use iced::Color;
use iced::theme::Palette;
use serde::{Deserialize, Serialize};

// =============================================================================
// THEME MODE
// =============================================================================

/// Theme mode for light/dark appearance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
    System,
}

impl ThemeMode {
    /// Human-readable label for UI display.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Light => "Light",
            Self::Dark => "Dark",
            Self::System => "System",
        }
    }

    /// The next mode in the cycle used by the dashboard toggle.
    pub fn cycled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::System,
            Self::System => Self::Light,
        }
    }

    /// Check if this mode resolves to dark.
    pub fn is_dark(&self, system_is_dark: bool) -> bool {
        match self {
            Self::Light => false,
            Self::Dark => true,
            Self::System => system_is_dark,
        }
    }
}

impl std::fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

// =============================================================================
// THEME CREATION
// =============================================================================

/// Creates the Scholar theme for the given mode.
pub fn scholar_theme(theme_mode: ThemeMode, system_is_dark: bool) -> iced::Theme {
    let is_dark = theme_mode.is_dark(system_is_dark);
    let palette = if is_dark { dark() } else { light() };
    let name = format!("Scholar {}", if is_dark { "Dark" } else { "Light" });
    iced::Theme::custom(name, palette)
}

/// Scholar light palette.
fn light() -> Palette {
    Palette {
        background: Color::from_rgb(0.97, 0.97, 0.99), // indigo-tinted gray 50
        text: Color::from_rgb(0.10, 0.10, 0.14),       // gray 900
        primary: Color::from_rgb(0.31, 0.34, 0.90),    // indigo 600
        success: Color::from_rgb(0.13, 0.65, 0.37),    // emerald 600
        warning: Color::from_rgb(0.92, 0.60, 0.05),    // amber 500
        danger: Color::from_rgb(0.86, 0.22, 0.27),     // red 600
    }
}

/// Scholar dark palette.
fn dark() -> Palette {
    Palette {
        background: Color::from_rgb(0.09, 0.09, 0.13), // indigo-tinted gray 950
        text: Color::from_rgb(0.92, 0.92, 0.95),       // gray 100
        primary: Color::from_rgb(0.51, 0.55, 0.97),    // indigo 400
        success: Color::from_rgb(0.20, 0.78, 0.48),    // emerald 400
        warning: Color::from_rgb(0.98, 0.75, 0.14),    // amber 400
        danger: Color::from_rgb(0.97, 0.44, 0.44),     // red 400
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn system_mode_follows_the_os() {
        assert!(ThemeMode::System.is_dark(true));
        assert!(!ThemeMode::System.is_dark(false));
        assert!(ThemeMode::Dark.is_dark(false));
    }

    #[test]
    fn cycle_visits_all_modes() {
        let start = ThemeMode::Light;
        let mut mode = start;
        for _ in 0..3 {
            mode = mode.cycled();
        }
        assert_eq!(mode, start);
    }
}
