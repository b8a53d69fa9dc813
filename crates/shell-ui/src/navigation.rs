//! Responsive navigation for the NDN shell
//!
//! One [`RouteRegistry`] is presented two ways:
//! - [`NavDrawer`]: a permanent list anchored to the left edge, shown when the
//!   viewport is at least as wide as the breakpoint
//! - [`BottomNavigation`]: a fixed action bar pinned to the bottom edge, shown
//!   on narrower viewports
//!
//! Both presentations are always constructed and share the registry; only
//! their `display` differs by viewport width. Crossing the breakpoint never
//! rebuilds either one, so UI state held by a presentation survives resizes.
//!
//! Navigation itself belongs to the [`RoutingEngine`]; activating an entry
//! just hands its `href` over.

use crate::components::{AccessibilityProps, Anchor, Display, Icon, Responsive};
use crate::config::ShellConfig;
use crate::theme::{Color, Theme};
use crate::tokens::{elevation, sizing, z_index};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

// =============================================================================
// Route Registry
// =============================================================================

/// A navigable destination
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteEntry {
    /// Icon shown next to (drawer) or above (bottom bar) the title
    pub icon: Icon,
    /// Label
    pub title: String,
    /// Destination handed to the routing engine
    pub href: String,
}

impl RouteEntry {
    /// Create a route entry
    pub fn new(icon: Icon, title: impl Into<String>, href: impl Into<String>) -> Self {
        Self {
            icon,
            title: title.into(),
            href: href.into(),
        }
    }
}

/// Ordered navigation entries
///
/// Insertion order is display order in both presentations. Duplicate hrefs
/// are allowed.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RouteRegistry {
    entries: Vec<RouteEntry>,
}

impl RouteRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an entry
    pub fn with_entry(mut self, entry: RouteEntry) -> Self {
        self.entries.push(entry);
        self
    }

    /// Append an entry built from its parts
    pub fn with_route(
        self,
        icon: impl Into<String>,
        title: impl Into<String>,
        href: impl Into<String>,
    ) -> Self {
        self.with_entry(RouteEntry::new(Icon::new(icon), title, href))
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check whether there are no entries
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entry at a display position
    pub fn get(&self, index: usize) -> Option<&RouteEntry> {
        self.entries.get(index)
    }

    /// Entries in display order
    pub fn entries(&self) -> &[RouteEntry] {
        &self.entries
    }

    /// Iterate in display order
    pub fn iter(&self) -> std::slice::Iter<'_, RouteEntry> {
        self.entries.iter()
    }
}

impl From<Vec<RouteEntry>> for RouteRegistry {
    fn from(entries: Vec<RouteEntry>) -> Self {
        Self { entries }
    }
}

impl FromIterator<RouteEntry> for RouteRegistry {
    fn from_iter<I: IntoIterator<Item = RouteEntry>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a RouteRegistry {
    type Item = &'a RouteEntry;
    type IntoIter = std::slice::Iter<'a, RouteEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

// =============================================================================
// Routing Engine
// =============================================================================

/// The external routing engine
///
/// Resolves destinations to views and performs page transitions. The shell
/// only calls into it.
#[cfg_attr(test, mockall::automock)]
pub trait RoutingEngine {
    /// Navigate to a destination
    fn navigate(&self, href: &str);

    /// Rendered output of the view for the current location, if any
    fn active_view(&self) -> Option<String>;
}

// =============================================================================
// Layout Selection
// =============================================================================

/// The two physical navigation presentations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NavLayout {
    /// Permanent side drawer
    Wide,
    /// Bottom action bar
    Narrow,
}

impl NavLayout {
    /// Layout for a viewport width
    ///
    /// Wide at or above the breakpoint, narrow below it.
    pub fn for_width(width: u32, breakpoint: u32) -> Self {
        if width >= breakpoint {
            NavLayout::Wide
        } else {
            NavLayout::Narrow
        }
    }
}

// =============================================================================
// Wide Layout: Drawer
// =============================================================================

/// Computed styles for the navigation drawer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DrawerStyles {
    /// Paper background
    pub background: Color,
    /// Item text color
    pub text_color: Color,
    /// Item icon color
    pub icon_color: Color,
    /// Right border color
    pub border_color: Color,
    /// Paper width
    pub width: f32,
    /// Item height
    pub item_height: f32,
    /// Width reserved for item icons
    pub icon_min_width: f32,
    /// Stacking order
    pub z_index: i32,
}

impl DrawerStyles {
    fn compute(theme: &Theme, width: f32) -> Self {
        Self {
            background: theme.palette.background.paper.clone(),
            text_color: theme.palette.text.primary.clone(),
            icon_color: theme.palette.text.secondary.clone(),
            border_color: theme.palette.divider.clone(),
            width,
            item_height: sizing::nav::LIST_ITEM_HEIGHT,
            icon_min_width: sizing::nav::LIST_ICON_MIN_WIDTH,
            z_index: z_index::DRAWER,
        }
    }
}

/// Permanent navigation drawer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NavDrawer {
    /// Entries, shared with the bottom bar
    pub routes: Arc<RouteRegistry>,
    /// Edge the drawer is anchored to
    pub anchor: Anchor,
    /// Visibility by viewport width
    pub display: Responsive<Display>,
    /// Accessibility props for the surrounding nav landmark
    pub accessibility: AccessibilityProps,
    /// Computed styles
    pub styles: DrawerStyles,
}

impl NavDrawer {
    /// Build the drawer for a registry
    pub fn new(routes: Arc<RouteRegistry>, breakpoint: u32, width: f32, theme: &Theme) -> Self {
        Self {
            routes,
            anchor: Anchor::Left,
            display: Responsive::new(breakpoint, Display::None, Display::Block),
            accessibility: AccessibilityProps::labelled("navibar", "navigation"),
            styles: DrawerStyles::compute(theme, width),
        }
    }

    /// Number of list items
    pub fn entry_count(&self) -> usize {
        self.routes.len()
    }

    /// List items in display order
    pub fn items(&self) -> impl Iterator<Item = &RouteEntry> {
        self.routes.iter()
    }

    /// Whether the drawer shows at a viewport width
    pub fn is_visible(&self, width: u32) -> bool {
        self.display.resolve(width).is_visible()
    }

    fn restyle(&mut self, theme: &Theme) {
        self.styles = DrawerStyles::compute(theme, self.styles.width);
    }
}

// =============================================================================
// Narrow Layout: Bottom Navigation
// =============================================================================

/// Computed styles for the bottom navigation bar
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BottomBarStyles {
    /// Surface background
    pub background: Color,
    /// Surface shadow
    pub box_shadow: String,
    /// Action icon and label color
    pub action_color: Color,
    /// Bar height
    pub height: f32,
    /// Minimum action width
    pub action_min_width: f32,
    /// Maximum action width
    pub action_max_width: f32,
    /// Stacking order
    pub z_index: i32,
}

impl BottomBarStyles {
    fn compute(theme: &Theme, surface_elevation: u8) -> Self {
        Self {
            background: theme.palette.background.paper.clone(),
            box_shadow: elevation::shadow(surface_elevation).box_shadow,
            action_color: theme.palette.text.secondary.clone(),
            height: sizing::nav::BOTTOM_BAR_HEIGHT,
            action_min_width: sizing::nav::ACTION_MIN_WIDTH,
            action_max_width: sizing::nav::ACTION_MAX_WIDTH,
            z_index: z_index::APP_BAR,
        }
    }
}

/// Fixed bottom action bar
///
/// The bar is fixed to the viewport edge in `anchor`. Actions sit in one
/// centered row and share it equally (see [`BottomNavigation::action_share`]).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BottomNavigation {
    /// Entries, shared with the drawer
    pub routes: Arc<RouteRegistry>,
    /// Edge the bar is pinned to
    pub anchor: Anchor,
    /// Elevation of the surface
    pub elevation: u8,
    /// Labels are shown for every action, not only the selected one
    pub show_labels: bool,
    /// Visibility by viewport width
    pub display: Responsive<Display>,
    /// Computed styles
    pub styles: BottomBarStyles,
}

impl BottomNavigation {
    /// Build the bar for a registry
    pub fn new(routes: Arc<RouteRegistry>, breakpoint: u32, surface_elevation: u8, theme: &Theme) -> Self {
        Self {
            routes,
            anchor: Anchor::Bottom,
            elevation: surface_elevation,
            show_labels: true,
            display: Responsive::new(breakpoint, Display::Flex, Display::None),
            styles: BottomBarStyles::compute(theme, surface_elevation),
        }
    }

    /// Number of actions
    pub fn entry_count(&self) -> usize {
        self.routes.len()
    }

    /// Actions in display order
    pub fn actions(&self) -> impl Iterator<Item = &RouteEntry> {
        self.routes.iter()
    }

    /// Share of the row each action gets (0 when there are no actions)
    pub fn action_share(&self) -> f32 {
        match self.routes.len() {
            0 => 0.0,
            count => 1.0 / count as f32,
        }
    }

    /// Whether the bar shows at a viewport width
    pub fn is_visible(&self, width: u32) -> bool {
        self.display.resolve(width).is_visible()
    }

    fn restyle(&mut self, theme: &Theme) {
        self.styles = BottomBarStyles::compute(theme, self.elevation);
    }
}

// =============================================================================
// Navigation View
// =============================================================================

/// Both navigation presentations over one registry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NavigationView {
    /// Wide-layout drawer
    pub drawer: NavDrawer,
    /// Narrow-layout bottom bar
    pub bottom_bar: BottomNavigation,
    /// Width the navigation takes from the content region
    pub reserved_width: Responsive<f32>,
    breakpoint: u32,
}

impl NavigationView {
    /// Build both presentations
    pub fn new(routes: Arc<RouteRegistry>, config: &ShellConfig, theme: &Theme) -> Self {
        let drawer = NavDrawer::new(
            Arc::clone(&routes),
            config.breakpoint,
            config.drawer_width,
            theme,
        );
        let bottom_bar = BottomNavigation::new(
            routes,
            config.breakpoint,
            config.bottom_bar_elevation,
            theme,
        );

        Self {
            drawer,
            bottom_bar,
            reserved_width: Responsive::new(config.breakpoint, 0.0, config.drawer_width),
            breakpoint: config.breakpoint,
        }
    }

    /// Width threshold between the layouts
    pub fn breakpoint(&self) -> u32 {
        self.breakpoint
    }

    /// The shared registry
    pub fn routes(&self) -> &Arc<RouteRegistry> {
        &self.drawer.routes
    }

    /// The layout shown at a viewport width
    pub fn visible_layout(&self, width: u32) -> NavLayout {
        NavLayout::for_width(width, self.breakpoint)
    }

    /// Whether a presentation shows at a viewport width
    pub fn is_visible(&self, layout: NavLayout, width: u32) -> bool {
        match layout {
            NavLayout::Wide => self.drawer.is_visible(width),
            NavLayout::Narrow => self.bottom_bar.is_visible(width),
        }
    }

    /// Number of entries a presentation renders
    pub fn entry_count(&self, layout: NavLayout) -> usize {
        match layout {
            NavLayout::Wide => self.drawer.entry_count(),
            NavLayout::Narrow => self.bottom_bar.entry_count(),
        }
    }

    /// Width taken from the content region at a viewport width
    pub fn reserved_width(&self, width: u32) -> f32 {
        self.reserved_width.resolve(width)
    }

    /// Hand an entry's destination to the routing engine
    ///
    /// Returns the href navigated to, or `None` if `index` is out of range.
    pub fn activate(
        &self,
        layout: NavLayout,
        index: usize,
        router: &dyn RoutingEngine,
    ) -> Option<String> {
        let Some(entry) = self.routes().get(index) else {
            tracing::debug!(?layout, index, "Ignoring activation of missing entry");
            return None;
        };

        tracing::debug!(?layout, href = %entry.href, "Navigation entry activated");
        router.navigate(&entry.href);
        Some(entry.href.clone())
    }

    /// Recompute theme-derived styles for both presentations
    pub fn restyle(&mut self, theme: &Theme) {
        self.drawer.restyle(theme);
        self.bottom_bar.restyle(theme);
    }
}
