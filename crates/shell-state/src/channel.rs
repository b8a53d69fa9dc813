//! Theme publication channel
//!
//! The shell writes the theme it derived at mount time into a [`ThemeChannel`];
//! any part of the application can read it back without being a descendant of
//! the shell in the component tree.
//!
//! Two forms are available:
//! - An explicit channel created with [`ThemeChannel::new`] and handed to the
//!   shell and its consumers as context. This is the preferred form.
//! - The lazily-initialized process-wide channel returned by
//!   [`ThemeChannel::global`], for consumers that cannot be reached by
//!   passing a handle down.
//!
//! Reading before anything was published is not an error: [`ThemeChannel::current`]
//! returns `None` and [`ThemeChannel::current_or_default`] falls back to the
//! light theme.

use parking_lot::RwLock;
use shell_core::theme::{light_theme, Theme, ThemeMode};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, OnceLock};

/// Process-wide channel instance
static GLOBAL_CHANNEL: OnceLock<ThemeChannel> = OnceLock::new();

#[derive(Debug, Default)]
struct ChannelInner {
    /// The most recently published theme
    slot: RwLock<Option<Arc<Theme>>>,
    /// Number of publishes so far
    generation: AtomicU64,
}

/// Slot holding at most one published theme
///
/// Cloning a channel yields another handle to the same slot.
///
/// # Example
///
/// ```rust
/// use shell_core::theme::{derive_theme, ThemeMode};
/// use shell_state::ThemeChannel;
///
/// let channel = ThemeChannel::new();
/// assert!(channel.current().is_none());
///
/// channel.publish(derive_theme(true));
/// assert_eq!(channel.current_or_default().mode, ThemeMode::Dark);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ThemeChannel {
    inner: Arc<ChannelInner>,
}

impl ThemeChannel {
    /// Create an empty channel
    pub fn new() -> Self {
        Self::default()
    }

    /// Get a handle to the process-wide channel, creating it on first use
    pub fn global() -> ThemeChannel {
        GLOBAL_CHANNEL.get_or_init(ThemeChannel::new).clone()
    }

    /// Publish a theme, replacing any previous one
    ///
    /// Returns the shared handle readers will observe.
    pub fn publish(&self, theme: impl Into<Arc<Theme>>) -> Arc<Theme> {
        let theme = theme.into();
        let mut slot = self.inner.slot.write();
        let previous = slot.replace(Arc::clone(&theme));
        let generation = self.inner.generation.fetch_add(1, Ordering::SeqCst) + 1;
        drop(slot);

        match previous {
            Some(previous) if previous.mode != theme.mode => tracing::info!(
                from = %previous.mode,
                to = %theme.mode,
                generation,
                "Published theme replaced"
            ),
            _ => tracing::debug!(mode = %theme.mode, generation, "Theme published"),
        }

        theme
    }

    /// Get the published theme, if any
    pub fn current(&self) -> Option<Arc<Theme>> {
        self.inner.slot.read().clone()
    }

    /// Get the published theme, or the light theme if nothing was published yet
    pub fn current_or_default(&self) -> Arc<Theme> {
        match self.current() {
            Some(theme) => theme,
            None => {
                tracing::debug!("Theme read before publish, using default light theme");
                Arc::new(light_theme())
            }
        }
    }

    /// Mode of the published theme, if any
    pub fn current_mode(&self) -> Option<ThemeMode> {
        self.inner.slot.read().as_ref().map(|theme| theme.mode)
    }

    /// Check whether a theme has been published
    pub fn is_published(&self) -> bool {
        self.inner.slot.read().is_some()
    }

    /// Number of publishes so far
    ///
    /// Readers can compare generations to detect that the theme changed
    /// since they last looked.
    pub fn generation(&self) -> u64 {
        self.inner.generation.load(Ordering::SeqCst)
    }

    /// Check whether two handles point at the same slot
    pub fn same_channel(&self, other: &ThemeChannel) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }
}
