//! Operating system color-scheme preference
//!
//! The shell only needs one signal from the environment: does the user prefer
//! a dark color scheme? [`ColorSchemeQuery`] exposes it as `Option<bool>`,
//! where `None` means the environment cannot tell.
//!
//! Implementations:
//! - [`EnvColorScheme`] reads the process environment
//! - [`StaticColorScheme`] returns a fixed answer (embedding hosts, tests)
//! - [`ColorSchemeWatcher`] holds a value that can change at runtime and
//!   notifies subscribers through a `tokio::sync::watch` channel

use tokio::sync::watch;

/// Environment variable that forces a scheme ("dark" or "light")
pub const COLOR_SCHEME_ENV: &str = "NDN_SHELL_COLOR_SCHEME";

/// GTK theme variable; a `:dark` variant suffix signals a dark preference
pub const GTK_THEME_ENV: &str = "GTK_THEME";

/// Capability answering "prefers dark color scheme"
pub trait ColorSchemeQuery {
    /// `Some(true)` for dark, `Some(false)` for light, `None` if unsupported
    fn prefers_dark(&self) -> Option<bool>;
}

// =============================================================================
// Static
// =============================================================================

/// A fixed preference
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StaticColorScheme(pub Option<bool>);

impl StaticColorScheme {
    /// Always prefers dark
    pub fn dark() -> Self {
        Self(Some(true))
    }

    /// Always prefers light
    pub fn light() -> Self {
        Self(Some(false))
    }

    /// Cannot report a preference
    pub fn unsupported() -> Self {
        Self(None)
    }
}

impl ColorSchemeQuery for StaticColorScheme {
    fn prefers_dark(&self) -> Option<bool> {
        self.0
    }
}

// =============================================================================
// Environment
// =============================================================================

/// Reads the preference from environment variables
///
/// [`COLOR_SCHEME_ENV`] takes precedence; otherwise [`GTK_THEME_ENV`] is
/// inspected for a `:dark` variant. With neither set the preference is
/// unsupported.
#[derive(Debug, Clone, Copy, Default)]
pub struct EnvColorScheme;

impl EnvColorScheme {
    /// Resolve a preference from raw variable values
    pub fn resolve(scheme_override: Option<&str>, gtk_theme: Option<&str>) -> Option<bool> {
        if let Some(value) = scheme_override {
            match value.trim().to_lowercase().as_str() {
                "dark" => return Some(true),
                "light" => return Some(false),
                other => tracing::warn!(
                    value = other,
                    "Ignoring unrecognised {} value",
                    COLOR_SCHEME_ENV
                ),
            }
        }

        gtk_theme
            .filter(|theme| !theme.trim().is_empty())
            .map(|theme| theme.to_lowercase().ends_with(":dark"))
    }
}

impl ColorSchemeQuery for EnvColorScheme {
    fn prefers_dark(&self) -> Option<bool> {
        let scheme_override = std::env::var(COLOR_SCHEME_ENV).ok();
        let gtk_theme = std::env::var(GTK_THEME_ENV).ok();
        Self::resolve(scheme_override.as_deref(), gtk_theme.as_deref())
    }
}

// =============================================================================
// Watcher
// =============================================================================

/// A preference that can change while the application runs
///
/// The host updates it with [`ColorSchemeWatcher::set`] whenever the OS
/// reports a change; subscribers receive the new value.
///
/// # Example
///
/// ```rust
/// use shell_platform::color_scheme::{ColorSchemeQuery, ColorSchemeWatcher};
///
/// let watcher = ColorSchemeWatcher::new(Some(false));
/// let rx = watcher.subscribe();
///
/// assert!(watcher.set(Some(true)));
/// assert_eq!(*rx.borrow(), Some(true));
/// assert_eq!(watcher.prefers_dark(), Some(true));
/// ```
#[derive(Debug)]
pub struct ColorSchemeWatcher {
    tx: watch::Sender<Option<bool>>,
}

impl ColorSchemeWatcher {
    /// Create a watcher with an initial preference
    pub fn new(initial: Option<bool>) -> Self {
        let (tx, _) = watch::channel(initial);
        Self { tx }
    }

    /// Update the preference
    ///
    /// Returns `true` if the value changed. Subscribers are only notified on
    /// change.
    pub fn set(&self, prefers_dark: Option<bool>) -> bool {
        let changed = self.tx.send_if_modified(|current| {
            if *current == prefers_dark {
                false
            } else {
                *current = prefers_dark;
                true
            }
        });

        if changed {
            tracing::debug!(?prefers_dark, "System color scheme changed");
        }
        changed
    }

    /// Subscribe to preference changes
    pub fn subscribe(&self) -> watch::Receiver<Option<bool>> {
        self.tx.subscribe()
    }

    /// Number of live subscribers
    pub fn subscriber_count(&self) -> usize {
        self.tx.receiver_count()
    }
}

impl ColorSchemeQuery for ColorSchemeWatcher {
    fn prefers_dark(&self) -> Option<bool> {
        *self.tx.borrow()
    }
}
