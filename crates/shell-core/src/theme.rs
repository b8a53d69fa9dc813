//! Theme derivation for the NDN shell
//!
//! A [`Theme`] is an immutable palette snapshot plus a light/dark mode flag.
//! The shell derives exactly one theme per mount from the operating system's
//! color-scheme preference; everything else (CSS variables, navigation
//! styles, content background) is projected from it.
//!
//! # Usage
//!
//! ```rust
//! use shell_core::theme::{derive_theme, ThemeMode};
//!
//! let theme = derive_theme(true);
//! assert_eq!(theme.mode, ThemeMode::Dark);
//! let background = &theme.palette.background.default;
//! assert_eq!(background, "#121212");
//! ```

use serde::{Deserialize, Serialize};

// =============================================================================
// Color Types
// =============================================================================

/// A color represented as an RGB or RGBA hex string (e.g., "#FFFFFF" or "#000000DE")
pub type Color = String;

/// Parse a hex color string to RGB components, ignoring any alpha suffix
pub fn parse_hex_color(hex: &str) -> Option<(u8, u8, u8)> {
    let hex = hex.trim_start_matches('#');
    if hex.len() < 6 {
        return None;
    }
    let r = u8::from_str_radix(hex.get(0..2)?, 16).ok()?;
    let g = u8::from_str_radix(hex.get(2..4)?, 16).ok()?;
    let b = u8::from_str_radix(hex.get(4..6)?, 16).ok()?;
    Some((r, g, b))
}

// =============================================================================
// Theme Mode
// =============================================================================

/// Light or dark palette selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    /// Light palette
    #[default]
    Light,
    /// Dark palette
    Dark,
}

impl ThemeMode {
    /// Mode matching a "prefers dark color scheme" signal
    pub fn from_prefers_dark(prefers_dark: bool) -> Self {
        if prefers_dark {
            ThemeMode::Dark
        } else {
            ThemeMode::Light
        }
    }

    /// Value for the CSS `color-scheme` property
    pub fn color_scheme(&self) -> &'static str {
        match self {
            ThemeMode::Light => "light",
            ThemeMode::Dark => "dark",
        }
    }
}

impl std::fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.color_scheme())
    }
}

impl std::str::FromStr for ThemeMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "light" => Ok(ThemeMode::Light),
            "dark" => Ok(ThemeMode::Dark),
            _ => Err(format!("Unknown theme mode: {}", s)),
        }
    }
}

// =============================================================================
// Palette
// =============================================================================

/// One intention color (primary, secondary, error, ...) with its variants
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaletteColor {
    /// Main shade
    pub main: Color,
    /// Lighter shade (used for containers)
    pub light: Color,
    /// Darker shade
    pub dark: Color,
    /// Text color readable on top of `main`
    pub contrast_text: Color,
}

impl PaletteColor {
    fn new(main: &str, light: &str, dark: &str, contrast_text: &str) -> Self {
        Self {
            main: main.to_string(),
            light: light.to_string(),
            dark: dark.to_string(),
            contrast_text: contrast_text.to_string(),
        }
    }
}

/// Page and surface backgrounds
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BackgroundColors {
    /// Page background
    pub default: Color,
    /// Elevated surface background (drawers, bars, cards)
    pub paper: Color,
}

/// Text colors
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextColors {
    /// Primary text
    pub primary: Color,
    /// Secondary/muted text
    pub secondary: Color,
    /// Disabled text
    pub disabled: Color,
}

/// Neutral grey scale, shared by both modes
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GreyScale {
    /// Grey 50
    pub grey_50: Color,
    /// Grey 100
    pub grey_100: Color,
    /// Grey 200
    pub grey_200: Color,
    /// Grey 300
    pub grey_300: Color,
    /// Grey 400
    pub grey_400: Color,
    /// Grey 500
    pub grey_500: Color,
    /// Grey 600
    pub grey_600: Color,
    /// Grey 700
    pub grey_700: Color,
    /// Grey 800
    pub grey_800: Color,
    /// Grey 900
    pub grey_900: Color,
}

impl GreyScale {
    /// Get a grey by stop (50-900)
    pub fn get(&self, stop: u16) -> Option<&Color> {
        match stop {
            50 => Some(&self.grey_50),
            100 => Some(&self.grey_100),
            200 => Some(&self.grey_200),
            300 => Some(&self.grey_300),
            400 => Some(&self.grey_400),
            500 => Some(&self.grey_500),
            600 => Some(&self.grey_600),
            700 => Some(&self.grey_700),
            800 => Some(&self.grey_800),
            900 => Some(&self.grey_900),
            _ => None,
        }
    }
}

impl Default for GreyScale {
    fn default() -> Self {
        Self {
            grey_50: "#FAFAFA".to_string(),
            grey_100: "#F5F5F5".to_string(),
            grey_200: "#EEEEEE".to_string(),
            grey_300: "#E0E0E0".to_string(),
            grey_400: "#BDBDBD".to_string(),
            grey_500: "#9E9E9E".to_string(),
            grey_600: "#757575".to_string(),
            grey_700: "#616161".to_string(),
            grey_800: "#424242".to_string(),
            grey_900: "#212121".to_string(),
        }
    }
}

/// Complete color palette for a theme
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Palette {
    /// Primary intention
    pub primary: PaletteColor,
    /// Secondary intention
    pub secondary: PaletteColor,
    /// Informational intention, exposed as the tertiary color
    pub info: PaletteColor,
    /// Error intention
    pub error: PaletteColor,
    /// Warning intention
    pub warning: PaletteColor,
    /// Success intention
    pub success: PaletteColor,
    /// Backgrounds
    pub background: BackgroundColors,
    /// Text colors
    pub text: TextColors,
    /// Divider/border color
    pub divider: Color,
    /// Grey scale
    pub grey: GreyScale,
}

// =============================================================================
// Theme Definition
// =============================================================================

/// Complete theme definition
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Theme {
    /// Light or dark
    pub mode: ThemeMode,
    /// Color palette
    pub palette: Palette,
}

impl Theme {
    /// Check if this is a dark theme
    pub fn is_dark(&self) -> bool {
        self.mode == ThemeMode::Dark
    }

    /// Shorthand for the page background
    pub fn background(&self) -> &str {
        &self.palette.background.default
    }

    /// Shorthand for the primary text color
    pub fn text(&self) -> &str {
        &self.palette.text.primary
    }
}

impl Default for Theme {
    fn default() -> Self {
        light_theme()
    }
}

// =============================================================================
// Light Theme
// =============================================================================

/// Create the light theme
pub fn light_theme() -> Theme {
    Theme {
        mode: ThemeMode::Light,
        palette: Palette {
            primary: PaletteColor::new("#1976D2", "#42A5F5", "#1565C0", "#FFFFFF"),
            secondary: PaletteColor::new("#9C27B0", "#BA68C8", "#7B1FA2", "#FFFFFF"),
            info: PaletteColor::new("#0288D1", "#03A9F4", "#01579B", "#FFFFFF"),
            error: PaletteColor::new("#D32F2F", "#EF5350", "#C62828", "#FFFFFF"),
            warning: PaletteColor::new("#ED6C02", "#FF9800", "#E65100", "#FFFFFF"),
            success: PaletteColor::new("#2E7D32", "#4CAF50", "#1B5E20", "#FFFFFF"),
            background: BackgroundColors {
                default: "#FFFFFF".to_string(),
                paper: "#FFFFFF".to_string(),
            },
            text: TextColors {
                primary: "#000000DE".to_string(),   // 87% black
                secondary: "#00000099".to_string(), // 60% black
                disabled: "#00000061".to_string(),  // 38% black
            },
            divider: "#0000001F".to_string(),
            grey: GreyScale::default(),
        },
    }
}

// =============================================================================
// Dark Theme
// =============================================================================

/// Create the dark theme
pub fn dark_theme() -> Theme {
    // Light mains need dark text on top
    let on_light = "#000000DE";

    Theme {
        mode: ThemeMode::Dark,
        palette: Palette {
            primary: PaletteColor::new("#90CAF9", "#E3F2FD", "#42A5F5", on_light),
            secondary: PaletteColor::new("#CE93D8", "#F3E5F5", "#AB47BC", on_light),
            info: PaletteColor::new("#29B6F6", "#4FC3F7", "#0288D1", on_light),
            error: PaletteColor::new("#F44336", "#E57373", "#D32F2F", "#FFFFFF"),
            warning: PaletteColor::new("#FFA726", "#FFB74D", "#F57C00", on_light),
            success: PaletteColor::new("#66BB6A", "#81C784", "#388E3C", on_light),
            background: BackgroundColors {
                default: "#121212".to_string(),
                paper: "#121212".to_string(),
            },
            text: TextColors {
                primary: "#FFFFFF".to_string(),
                secondary: "#FFFFFFB3".to_string(), // 70% white
                disabled: "#FFFFFF80".to_string(),  // 50% white
            },
            divider: "#FFFFFF1F".to_string(),
            grey: GreyScale::default(),
        },
    }
}

// =============================================================================
// Derivation
// =============================================================================

/// Get the theme for a mode
pub fn theme_for_mode(mode: ThemeMode) -> Theme {
    match mode {
        ThemeMode::Light => light_theme(),
        ThemeMode::Dark => dark_theme(),
    }
}

/// Derive the shell theme from the "prefers dark color scheme" signal
///
/// Pure and total: the same input always yields an equal theme.
pub fn derive_theme(prefers_dark: bool) -> Theme {
    theme_for_mode(ThemeMode::from_prefers_dark(prefers_dark))
}

/// Derive the theme from an optional preference
///
/// `None` means the environment cannot report a preference; the light theme
/// is used in that case.
pub fn theme_for_preference(prefers_dark: Option<bool>) -> Theme {
    match prefers_dark {
        Some(prefers_dark) => derive_theme(prefers_dark),
        None => {
            tracing::debug!("Color scheme preference unavailable, deriving light theme");
            light_theme()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ==========================================================================
    // Color Utility Tests
    // ==========================================================================

    #[test]
    fn test_parse_hex_color() {
        assert_eq!(parse_hex_color("#FFFFFF"), Some((255, 255, 255)));
        assert_eq!(parse_hex_color("#1976D2"), Some((25, 118, 210)));
        assert_eq!(parse_hex_color("121212"), Some((18, 18, 18)));
        assert_eq!(parse_hex_color("#000000DE"), Some((0, 0, 0)));
        assert_eq!(parse_hex_color("#FF"), None);
        assert_eq!(parse_hex_color("#GGGGGG"), None);
    }

    // ==========================================================================
    // Theme Mode Tests
    // ==========================================================================

    #[test]
    fn test_theme_mode_display_and_parse() {
        assert_eq!(ThemeMode::Light.to_string(), "light");
        assert_eq!(ThemeMode::Dark.to_string(), "dark");
        assert_eq!("DARK".parse::<ThemeMode>().unwrap(), ThemeMode::Dark);
        assert_eq!(" light ".parse::<ThemeMode>().unwrap(), ThemeMode::Light);
        assert!("dim".parse::<ThemeMode>().is_err());
    }

    #[test]
    fn test_theme_mode_serialization() {
        let json = serde_json::to_string(&ThemeMode::Dark).unwrap();
        assert_eq!(json, "\"dark\"");
        let mode: ThemeMode = serde_json::from_str("\"light\"").unwrap();
        assert_eq!(mode, ThemeMode::Light);
    }

    // ==========================================================================
    // Derivation Tests
    // ==========================================================================

    #[test]
    fn test_derive_theme_mode_follows_preference() {
        for prefers_dark in [true, false] {
            let theme = derive_theme(prefers_dark);
            let expected = if prefers_dark { ThemeMode::Dark } else { ThemeMode::Light };
            assert_eq!(theme.mode, expected);
            assert_eq!(theme.is_dark(), prefers_dark);
        }
    }

    #[test]
    fn test_derive_theme_is_deterministic() {
        assert_eq!(derive_theme(true), derive_theme(true));
        assert_eq!(derive_theme(false), derive_theme(false));
        assert_ne!(derive_theme(true), derive_theme(false));
    }

    #[test]
    fn test_unsupported_preference_defaults_to_light() {
        assert_eq!(theme_for_preference(None), light_theme());
        assert_eq!(theme_for_preference(Some(true)), dark_theme());
        assert_eq!(Theme::default().mode, ThemeMode::Light);
    }

    #[test]
    fn test_dark_theme_backgrounds() {
        let theme = dark_theme();
        assert_eq!(theme.background(), "#121212");
        assert_eq!(theme.text(), "#FFFFFF");
        assert_eq!(theme.palette.primary.main, "#90CAF9");
    }

    #[test]
    fn test_grey_scale_lookup() {
        let grey = GreyScale::default();
        assert_eq!(grey.get(600).map(String::as_str), Some("#757575"));
        assert!(grey.get(650).is_none());
    }

    // ==========================================================================
    // Color Consistency Tests
    // ==========================================================================

    #[test]
    fn test_all_colors_are_valid_hex() {
        for theme in [light_theme(), dark_theme()] {
            let p = &theme.palette;
            for color in [&p.primary, &p.secondary, &p.info, &p.error, &p.warning, &p.success] {
                for value in [&color.main, &color.light, &color.dark, &color.contrast_text] {
                    assert!(
                        parse_hex_color(value).is_some(),
                        "Invalid color {} in {} theme",
                        value,
                        theme.mode
                    );
                }
            }
            assert!(parse_hex_color(&p.background.default).is_some());
            assert!(parse_hex_color(&p.background.paper).is_some());
            assert!(parse_hex_color(&p.text.primary).is_some());
            assert!(parse_hex_color(&p.divider).is_some());
        }
    }

    #[test]
    fn test_text_background_contrast() {
        for theme in [light_theme(), dark_theme()] {
            let bg = parse_hex_color(theme.background()).unwrap();
            let text = parse_hex_color(theme.text()).unwrap();

            let bg_lum = (bg.0 as i32 + bg.1 as i32 + bg.2 as i32) / 3;
            let text_lum = (text.0 as i32 + text.1 as i32 + text.2 as i32) / 3;

            assert!(
                (bg_lum - text_lum).abs() > 100,
                "{} theme has insufficient text contrast",
                theme.mode
            );
        }
    }
}
