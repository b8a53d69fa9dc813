//! Shell configuration
//!
//! Recognized options for the shell layout. Every field has a default, so an
//! empty JSON object is a valid configuration.

use crate::tokens::{breakpoints, elevation, sizing, spacing};
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// Errors raised while loading a configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration file could not be read
    #[error("Failed to read config: {0}")]
    Io(#[from] std::io::Error),

    /// The configuration is not valid JSON for [`ShellConfig`]
    #[error("Failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),

    /// A value is out of range
    #[error("Invalid config value for {field}: {reason}")]
    Invalid {
        /// Offending field
        field: &'static str,
        /// Why it was rejected
        reason: String,
    },
}

/// Shell layout configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ShellConfig {
    /// Viewport width at which the wide layout takes over
    pub breakpoint: u32,
    /// Width of the wide-layout navigation drawer in pixels
    pub drawer_width: f32,
    /// Padding of the content region in pixels
    pub content_padding: f32,
    /// Elevation of the narrow-layout bottom bar surface
    pub bottom_bar_elevation: u8,
    /// Re-derive the theme when the OS color scheme changes after mount
    pub follow_system_color_scheme: bool,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            breakpoint: breakpoints::NAV_WIDE,
            drawer_width: sizing::DRAWER_WIDTH,
            content_padding: spacing::units(3),
            bottom_bar_elevation: elevation::BOTTOM_BAR,
            follow_system_color_scheme: false,
        }
    }
}

impl ShellConfig {
    /// Parse and validate a JSON configuration
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: ShellConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a JSON configuration file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let config = Self::from_json(&json)?;
        tracing::debug!(path = %path.display(), ?config, "Loaded shell config");
        Ok(config)
    }

    /// Check value ranges
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.drawer_width.is_finite() || self.drawer_width <= 0.0 {
            return Err(ConfigError::Invalid {
                field: "drawerWidth",
                reason: format!("must be a positive number, got {}", self.drawer_width),
            });
        }
        if !self.content_padding.is_finite() || self.content_padding < 0.0 {
            return Err(ConfigError::Invalid {
                field: "contentPadding",
                reason: format!("must be zero or positive, got {}", self.content_padding),
            });
        }
        Ok(())
    }

    /// Set the breakpoint
    pub fn with_breakpoint(mut self, breakpoint: u32) -> Self {
        self.breakpoint = breakpoint;
        self
    }

    /// Set the drawer width
    pub fn with_drawer_width(mut self, width: f32) -> Self {
        self.drawer_width = width;
        self
    }

    /// Enable or disable following OS color-scheme changes
    pub fn following_system_color_scheme(mut self, follow: bool) -> Self {
        self.follow_system_color_scheme = follow;
        self
    }
}
