//! Content host
//!
//! The region next to (wide layout) or above (narrow layout) the navigation
//! where the routing engine renders the active view. The host has no state of
//! its own beyond theme-derived styles.
//!
//! The narrow-layout bottom bar floats over this region; no space is reserved
//! for it. Views that must not be overlapped add their own bottom padding.

use crate::components::StyleProps;
use crate::navigation::RoutingEngine;
use crate::theme::Theme;
use serde::{Deserialize, Serialize};

/// Mount point for the active routed view
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContentHost {
    /// Padding around the view in pixels
    pub padding: f32,
    /// Style of the `main` region
    pub style: StyleProps,
}

impl ContentHost {
    /// Build the host for a theme
    pub fn new(theme: &Theme, padding: f32) -> Self {
        Self {
            padding,
            style: Self::compute_style(theme, padding),
        }
    }

    fn compute_style(theme: &Theme, padding: f32) -> StyleProps {
        StyleProps {
            padding: Some(padding),
            min_height: Some("100vh".to_string()),
            background_color: Some(theme.palette.background.default.clone()),
            color: Some(theme.palette.text.primary.clone()),
            flex_grow: Some(1.0),
            overflow_x_hidden: true,
            ..Default::default()
        }
    }

    /// Recompute theme-derived styles
    pub fn restyle(&mut self, theme: &Theme) {
        self.style = Self::compute_style(theme, self.padding);
    }

    /// Ask the routing engine for the active view
    pub fn mount(&self, router: &dyn RoutingEngine) -> MountedContent {
        let view = router.active_view();
        if view.is_none() {
            tracing::debug!("Routing engine has no active view");
        }
        MountedContent {
            view,
            style: self.style.clone(),
        }
    }
}

/// The active view placed in the content region
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MountedContent {
    /// Rendered view, if the routing engine matched one
    pub view: Option<String>,
    /// Style of the region
    pub style: StyleProps,
}
