//! UI primitives for the NDN shell
//!
//! Components are plain Rust structs with serializable properties that a
//! frontend renders. This module holds the shared pieces the shell surfaces
//! are built from: style props, breakpoint-aware values and icons.

use crate::theme::Color;
use crate::tokens::sizing;
use serde::{Deserialize, Serialize};

// =============================================================================
// Common Types
// =============================================================================

/// Style properties for a layout region
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StyleProps {
    /// Uniform padding in pixels
    #[serde(skip_serializing_if = "Option::is_none")]
    pub padding: Option<f32>,
    /// Minimum height as a CSS length ("100vh")
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_height: Option<String>,
    /// Background color
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background_color: Option<Color>,
    /// Text color
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<Color>,
    /// Flex grow factor
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flex_grow: Option<f32>,
    /// Hide horizontal overflow
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub overflow_x_hidden: bool,
}

/// CSS `display` values used by the shell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Display {
    /// Block box
    #[default]
    Block,
    /// Flex container
    Flex,
    /// Not rendered
    None,
}

impl Display {
    /// Whether the element takes part in rendering
    pub fn is_visible(&self) -> bool {
        !matches!(self, Display::None)
    }
}

/// Viewport edge a surface is anchored to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Anchor {
    /// Left edge
    Left,
    /// Bottom edge
    Bottom,
}

// =============================================================================
// Responsive Values
// =============================================================================

/// A value that switches at a viewport-width threshold
///
/// The styling engine turns this into a media query; the shell only needs to
/// resolve it for a given width. Widths at or above `breakpoint` get
/// `at_or_above`, narrower widths get `below`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Responsive<T> {
    /// Threshold width in pixels
    pub breakpoint: u32,
    /// Value for widths below the threshold
    pub below: T,
    /// Value for widths at or above the threshold
    pub at_or_above: T,
}

impl<T: Clone> Responsive<T> {
    /// Create a responsive value
    pub fn new(breakpoint: u32, below: T, at_or_above: T) -> Self {
        Self {
            breakpoint,
            below,
            at_or_above,
        }
    }

    /// Resolve the value for a viewport width
    pub fn resolve(&self, width: u32) -> T {
        if width >= self.breakpoint {
            self.at_or_above.clone()
        } else {
            self.below.clone()
        }
    }
}

// =============================================================================
// Accessibility
// =============================================================================

/// Accessibility properties
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AccessibilityProps {
    /// Accessible label for screen readers
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    /// ARIA role
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
}

impl AccessibilityProps {
    /// Props with a label and role
    pub fn labelled(label: impl Into<String>, role: impl Into<String>) -> Self {
        Self {
            label: Some(label.into()),
            role: Some(role.into()),
        }
    }
}

// =============================================================================
// Icon Component
// =============================================================================

/// Icon size variants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IconSize {
    /// Small (20px)
    Small,
    /// Medium (24px)
    #[default]
    Medium,
    /// Large (35px)
    Large,
}

impl IconSize {
    /// Get the pixel size
    pub fn pixels(&self) -> f32 {
        match self {
            IconSize::Small => sizing::icon::SM,
            IconSize::Medium => sizing::icon::MD,
            IconSize::Large => sizing::icon::LG,
        }
    }
}

/// Icon component properties
///
/// Only the name is carried; drawing the glyph is up to the frontend's icon
/// set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Icon {
    /// Icon name (from icon set)
    pub name: String,
    /// Icon size
    #[serde(default)]
    pub size: IconSize,
    /// Icon color override
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<Color>,
}

impl Icon {
    /// Create a new icon
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            size: IconSize::Medium,
            color: None,
        }
    }

    /// Set icon size
    pub fn with_size(mut self, size: IconSize) -> Self {
        self.size = size;
        self
    }

    /// Set icon color
    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    /// Get the pixel size
    pub fn pixel_size(&self) -> f32 {
        self.size.pixels()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_responsive_resolve() {
        let display = Responsive::new(600, Display::None, Display::Block);
        assert_eq!(display.resolve(0), Display::None);
        assert_eq!(display.resolve(599), Display::None);
        assert_eq!(display.resolve(600), Display::Block);
        assert_eq!(display.resolve(1024), Display::Block);
    }

    #[test]
    fn test_display_visibility() {
        assert!(Display::Block.is_visible());
        assert!(Display::Flex.is_visible());
        assert!(!Display::None.is_visible());
    }

    #[test]
    fn test_icon_builder() {
        let icon = Icon::new("home").with_size(IconSize::Large).with_color("#FFFFFF");
        assert_eq!(icon.name, "home");
        assert_eq!(icon.pixel_size(), 35.0);
        assert_eq!(icon.color.as_deref(), Some("#FFFFFF"));
    }

    #[test]
    fn test_style_props_serialization_skips_empty() {
        let style = StyleProps {
            flex_grow: Some(1.0),
            ..Default::default()
        };
        let json = serde_json::to_value(&style).unwrap();
        assert_eq!(json, serde_json::json!({ "flexGrow": 1.0 }));
    }

    #[test]
    fn test_responsive_serialization() {
        let display = Responsive::new(600, Display::Flex, Display::None);
        let json = serde_json::to_value(&display).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "breakpoint": 600, "below": "flex", "atOrAbove": "none" })
        );
    }
}
