//! NDN shell
//!
//! Facade over the shell workspace crates:
//! - [`core`] - theme value and derivation
//! - [`state`] - theme publication channel
//! - [`platform`] - color-scheme sources and the document head
//! - [`ui`] - tokens, navigation, content host and the mount lifecycle

#![warn(missing_docs)]
#![warn(clippy::all)]

pub use shell_core as core;
pub use shell_platform as platform;
pub use shell_state as state;
pub use shell_ui as ui;

pub use shell_core::{Theme, ThemeMode};
pub use shell_platform::{ColorSchemeQuery, DocumentHead, EnvColorScheme, StyleHost};
pub use shell_state::ThemeChannel;
pub use shell_ui::{
    ConfigError, MountedShell, NavLayout, RouteRegistry, RoutingEngine, Shell, ShellConfig,
    ShellContext,
};
