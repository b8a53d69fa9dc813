//! User interface for the NDN shell
//!
//! This crate provides the application shell: the root layout that derives
//! a theme from the operating system's color-scheme preference, publishes
//! it, injects it as CSS variables, and frames the routed content with a
//! responsive navigation surface.
//!
//! # Layouts
//!
//! Navigation is presented in one of two layouts, chosen by viewport width:
//! - [`navigation::NavLayout::Wide`] - permanent left drawer with icon and title per entry
//! - [`navigation::NavLayout::Narrow`] - fixed bottom bar with labelled actions
//!
//! Both are always built from the same route registry; the width only
//! decides which one is visible.
//!
//! # Modules
//!
//! - [`theme`] - Theme value and derivation (re-exported from `shell-core`)
//! - [`tokens`] - Design tokens (spacing, sizing, breakpoints, elevation)
//! - [`components`] - Style and layout primitives
//! - [`config`] - Shell configuration
//! - [`css_vars`] - CSS variable projection and style injection
//! - [`navigation`] - Route registry and the two navigation presentations
//! - [`content`] - Content host for the routed view
//! - [`shell`] - Mount and unmount lifecycle
//!
//! # Example
//!
//! ```rust
//! use std::sync::Arc;
//! use shell_platform::{DocumentHead, StaticColorScheme};
//! use shell_state::ThemeChannel;
//! use shell_ui::{NavLayout, RouteRegistry, Shell, ShellConfig, ShellContext};
//!
//! let head = Arc::new(DocumentHead::new());
//! let ctx = ShellContext::new(ThemeChannel::new(), head);
//! let routes = RouteRegistry::new().with_route("home", "Home", "/");
//!
//! let shell = Shell::new(ShellConfig::default(), routes).mount(&ctx, &StaticColorScheme::light());
//! assert_eq!(shell.visible_layout(375), NavLayout::Narrow);
//! assert_eq!(shell.css_variables().get("--md-sys-color-primary"), Some("#1976D2"));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub use shell_core::theme;

pub mod components;
pub mod config;
pub mod content;
pub mod css_vars;
pub mod navigation;
pub mod shell;
pub mod tokens;

// Re-export commonly used types
pub use config::{ConfigError, ShellConfig};
pub use content::{ContentHost, MountedContent};
pub use css_vars::{
    baseline_css, project, theme_css, CssVariable, CssVariableSet, StyleInjection,
};
pub use navigation::{
    BottomNavigation, NavDrawer, NavLayout, NavigationView, RouteEntry, RouteRegistry,
    RoutingEngine,
};
pub use shell::{MountedShell, Shell, ShellContext};
pub use theme::{Theme, ThemeMode};
