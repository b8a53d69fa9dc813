//! Design tokens for the NDN shell
//!
//! Spacing, sizing, breakpoints, elevation and layering values shared by the
//! navigation surfaces and the content host.

use serde::{Deserialize, Serialize};

// =============================================================================
// Spacing Tokens
// =============================================================================

/// Spacing scale in pixels, based on an 8px unit
pub mod spacing {
    /// Base spacing unit (8px)
    pub const UNIT: f32 = 8.0;

    /// Spacing for a number of units (`units(3)` is 24px)
    pub fn units(count: u16) -> f32 {
        UNIT * count as f32
    }
}

// =============================================================================
// Sizing Tokens
// =============================================================================

/// Size tokens for component dimensions
pub mod sizing {
    /// Default width of the wide-layout navigation drawer (200px)
    pub const DRAWER_WIDTH: f32 = 200.0;

    /// Icon sizes
    pub mod icon {
        /// Small icon (20px)
        pub const SM: f32 = 20.0;
        /// Medium icon (24px)
        pub const MD: f32 = 24.0;
        /// Large icon (35px)
        pub const LG: f32 = 35.0;
    }

    /// Navigation surface sizes
    pub mod nav {
        /// Bottom navigation bar height (56px)
        pub const BOTTOM_BAR_HEIGHT: f32 = 56.0;
        /// Minimum width of a bottom navigation action (80px)
        pub const ACTION_MIN_WIDTH: f32 = 80.0;
        /// Maximum width of a bottom navigation action (168px)
        pub const ACTION_MAX_WIDTH: f32 = 168.0;
        /// Width reserved for a list item icon (56px)
        pub const LIST_ICON_MIN_WIDTH: f32 = 56.0;
        /// Drawer list item height (48px)
        pub const LIST_ITEM_HEIGHT: f32 = 48.0;
    }
}

// =============================================================================
// Breakpoint Tokens
// =============================================================================

/// Breakpoint widths
pub mod breakpoints {
    /// Small lower bound (600px)
    pub const SM: u32 = 600;

    /// Default width separating the narrow and wide navigation layouts
    pub const NAV_WIDE: u32 = SM;
}

// =============================================================================
// Elevation Tokens
// =============================================================================

/// Shadow definition
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Shadow {
    /// CSS `box-shadow` value
    pub box_shadow: String,
}

/// Elevation shadows for surfaces
pub mod elevation {
    use super::Shadow;

    /// Elevation used by the bottom navigation surface
    pub const BOTTOM_BAR: u8 = 3;

    /// Shadow for an elevation level (0-4; higher levels clamp to 4)
    pub fn shadow(level: u8) -> Shadow {
        let box_shadow = match level {
            0 => "none",
            1 => "0px 2px 1px -1px rgba(0,0,0,0.2),0px 1px 1px 0px rgba(0,0,0,0.14),0px 1px 3px 0px rgba(0,0,0,0.12)",
            2 => "0px 3px 1px -2px rgba(0,0,0,0.2),0px 2px 2px 0px rgba(0,0,0,0.14),0px 1px 5px 0px rgba(0,0,0,0.12)",
            3 => "0px 3px 3px -2px rgba(0,0,0,0.2),0px 3px 4px 0px rgba(0,0,0,0.14),0px 1px 8px 0px rgba(0,0,0,0.12)",
            _ => "0px 2px 4px -1px rgba(0,0,0,0.2),0px 4px 5px 0px rgba(0,0,0,0.14),0px 1px 10px 0px rgba(0,0,0,0.12)",
        };
        Shadow {
            box_shadow: box_shadow.to_string(),
        }
    }
}

// =============================================================================
// Z-Index Tokens
// =============================================================================

/// Z-index layers
pub mod z_index {
    /// Fixed bars (bottom navigation)
    pub const APP_BAR: i32 = 1100;
    /// Permanent drawer
    pub const DRAWER: i32 = 1200;
}
