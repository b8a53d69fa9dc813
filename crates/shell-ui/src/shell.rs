//! Root shell lifecycle
//!
//! The shell has two states, expressed as two types:
//! - [`Shell`]: unmounted; holds configuration and routes
//! - [`MountedShell`]: theme published, theme style block injected, both
//!   navigation presentations and the content host built
//!
//! [`Shell::mount`] performs the single transition into the mounted state.
//! [`MountedShell::unmount`] removes the injected style block before it
//! returns and hands back the unmounted [`Shell`]. Dropping a mounted shell
//! without unmounting removes the block as well.
//!
//! The CSS variables and the document baseline share one block, so a theme
//! change is a single host operation and readers never see a mix of modes.
//!
//! # Example
//!
//! ```rust
//! use std::sync::Arc;
//! use shell_platform::{DocumentHead, StaticColorScheme};
//! use shell_state::ThemeChannel;
//! use shell_ui::navigation::{NavLayout, RouteRegistry};
//! use shell_ui::shell::{Shell, ShellContext};
//! use shell_ui::ShellConfig;
//!
//! let head = Arc::new(DocumentHead::new());
//! let ctx = ShellContext::new(ThemeChannel::new(), head.clone());
//! let routes = RouteRegistry::new()
//!     .with_route("home", "Home", "/")
//!     .with_route("settings", "Settings", "/settings");
//!
//! let mounted = Shell::new(ShellConfig::default(), routes).mount(&ctx, &StaticColorScheme::dark());
//! assert!(mounted.theme().is_dark());
//! assert_eq!(mounted.visible_layout(1024), NavLayout::Wide);
//! assert_eq!(head.len(), 1);
//!
//! mounted.unmount();
//! assert!(head.is_empty());
//! ```

use crate::config::ShellConfig;
use crate::content::{ContentHost, MountedContent};
use crate::css_vars::{project, theme_css, CssVariableSet, StyleInjection, THEME_STYLE_ID};
use crate::navigation::{NavLayout, NavigationView, RouteRegistry, RoutingEngine};
use crate::theme::{theme_for_preference, Theme};
use shell_platform::color_scheme::ColorSchemeQuery;
use shell_platform::document::StyleHost;
use shell_state::ThemeChannel;
use std::sync::Arc;
use tokio::sync::watch;

// =============================================================================
// Context
// =============================================================================

/// Collaborators the shell publishes into
#[derive(Clone)]
pub struct ShellContext {
    /// Where the derived theme is published
    pub channel: ThemeChannel,
    /// Document head receiving the theme style block
    pub style_host: Arc<dyn StyleHost>,
}

impl ShellContext {
    /// Create a context with an explicit channel
    pub fn new(channel: ThemeChannel, style_host: Arc<dyn StyleHost>) -> Self {
        Self {
            channel,
            style_host,
        }
    }

    /// Create a context publishing into the process-wide channel
    pub fn with_global_channel(style_host: Arc<dyn StyleHost>) -> Self {
        Self::new(ThemeChannel::global(), style_host)
    }
}

impl std::fmt::Debug for ShellContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ShellContext")
            .field("channel", &self.channel)
            .finish_non_exhaustive()
    }
}

// =============================================================================
// Unmounted Shell
// =============================================================================

/// The shell before mounting (or after unmounting)
#[derive(Debug, Clone)]
pub struct Shell {
    config: ShellConfig,
    routes: Arc<RouteRegistry>,
}

impl Shell {
    /// Create an unmounted shell
    pub fn new(config: ShellConfig, routes: impl Into<Arc<RouteRegistry>>) -> Self {
        Self {
            config,
            routes: routes.into(),
        }
    }

    /// Layout configuration
    pub fn config(&self) -> &ShellConfig {
        &self.config
    }

    /// Navigation entries
    pub fn routes(&self) -> &Arc<RouteRegistry> {
        &self.routes
    }

    /// Mount the shell
    ///
    /// Reads the color-scheme preference once, derives and publishes the
    /// theme, injects the theme style block, and builds both
    /// navigation presentations and the content host.
    pub fn mount(self, ctx: &ShellContext, color_scheme: &dyn ColorSchemeQuery) -> MountedShell {
        let Shell { config, routes } = self;

        let prefers_dark = color_scheme.prefers_dark();
        if prefers_dark.is_none() {
            tracing::warn!("Color scheme preference not supported, using light theme");
        }

        let theme = ctx.channel.publish(theme_for_preference(prefers_dark));

        let styles = StyleInjection::acquire(
            Arc::clone(&ctx.style_host),
            THEME_STYLE_ID,
            &theme_css(&theme),
        );

        let navigation = NavigationView::new(Arc::clone(&routes), &config, &theme);
        let content = ContentHost::new(&theme, config.content_padding);

        tracing::info!(
            mode = %theme.mode,
            routes = routes.len(),
            breakpoint = config.breakpoint,
            "Shell mounted"
        );

        MountedShell {
            config,
            routes,
            channel: ctx.channel.clone(),
            prefers_dark,
            theme,
            styles,
            navigation,
            content,
        }
    }
}

// =============================================================================
// Mounted Shell
// =============================================================================

/// The shell while mounted
#[derive(Debug)]
pub struct MountedShell {
    config: ShellConfig,
    routes: Arc<RouteRegistry>,
    channel: ThemeChannel,
    prefers_dark: Option<bool>,
    theme: Arc<Theme>,
    styles: StyleInjection,
    navigation: NavigationView,
    content: ContentHost,
}

impl MountedShell {
    /// The theme derived at mount (or at the last followed change)
    pub fn theme(&self) -> &Arc<Theme> {
        &self.theme
    }

    /// Layout configuration
    pub fn config(&self) -> &ShellConfig {
        &self.config
    }

    /// Channel the theme was published into
    pub fn channel(&self) -> &ThemeChannel {
        &self.channel
    }

    /// Both navigation presentations
    pub fn navigation(&self) -> &NavigationView {
        &self.navigation
    }

    /// The content host
    pub fn content(&self) -> &ContentHost {
        &self.content
    }

    /// CSS variables for the current theme
    pub fn css_variables(&self) -> CssVariableSet {
        project(&self.theme)
    }

    /// Element id of the injected theme style block
    pub fn style_id(&self) -> &str {
        self.styles.id()
    }

    /// Navigation layout shown at a viewport width
    pub fn visible_layout(&self, width: u32) -> NavLayout {
        self.navigation.visible_layout(width)
    }

    /// Hand a navigation entry to the routing engine
    pub fn activate(
        &self,
        layout: NavLayout,
        index: usize,
        router: &dyn RoutingEngine,
    ) -> Option<String> {
        self.navigation.activate(layout, index, router)
    }

    /// Render the active view into the content host
    pub fn render_content(&self, router: &dyn RoutingEngine) -> MountedContent {
        self.content.mount(router)
    }

    /// React to an OS color-scheme change
    ///
    /// The preference is always recorded. The theme only follows it when
    /// `follow_system_color_scheme` is enabled: if the derived mode changes,
    /// the new theme is published, the style block is replaced in one host
    /// operation and the presentations are restyled. Returns `true` if the
    /// theme changed.
    pub fn apply_color_scheme(&mut self, prefers_dark: Option<bool>) -> bool {
        self.prefers_dark = prefers_dark;
        if !self.config.follow_system_color_scheme {
            tracing::debug!(?prefers_dark, "Color scheme change ignored, following disabled");
            return false;
        }

        let theme = theme_for_preference(prefers_dark);
        if theme.mode == self.theme.mode {
            return false;
        }

        let theme = self.channel.publish(theme);
        self.styles.replace(&theme_css(&theme));
        self.navigation.restyle(&theme);
        self.content.restyle(&theme);

        tracing::info!(from = %self.theme.mode, to = %theme.mode, "Shell theme updated");
        self.theme = theme;
        true
    }

    /// Apply color-scheme changes until the sender goes away
    pub async fn follow_color_scheme(&mut self, mut changes: watch::Receiver<Option<bool>>) {
        while changes.changed().await.is_ok() {
            let prefers_dark = *changes.borrow_and_update();
            self.apply_color_scheme(prefers_dark);
        }
        tracing::debug!("Color scheme source closed");
    }

    /// Last preference the shell saw
    pub fn prefers_dark(&self) -> Option<bool> {
        self.prefers_dark
    }

    /// Unmount the shell
    ///
    /// The style block is gone from the document when this returns. The
    /// published theme stays in the channel.
    pub fn unmount(self) -> Shell {
        let MountedShell {
            config,
            routes,
            styles,
            ..
        } = self;

        styles.release();
        tracing::info!("Shell unmounted");

        Shell { config, routes }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::navigation::MockRoutingEngine;
    use crate::theme::ThemeMode;
    use mockall::predicate::*;
    use shell_platform::color_scheme::{ColorSchemeWatcher, StaticColorScheme};
    use shell_platform::document::DocumentHead;

    mockall::mock! {
        Host {}
        impl StyleHost for Host {
            fn insert_style(&self, id: &str, css: &str);
            fn replace_style(&self, id: &str, css: &str) -> bool;
            fn remove_style(&self, id: &str) -> bool;
        }
    }

    mockall::mock! {
        Scheme {}
        impl ColorSchemeQuery for Scheme {
            fn prefers_dark(&self) -> Option<bool>;
        }
    }

    fn context() -> (Arc<DocumentHead>, ShellContext) {
        let head = Arc::new(DocumentHead::new());
        let ctx = ShellContext::new(ThemeChannel::new(), head.clone());
        (head, ctx)
    }

    fn routes() -> RouteRegistry {
        RouteRegistry::new()
            .with_route("home", "Home", "/")
            .with_route("settings", "Settings", "/settings")
    }

    #[test]
    fn test_mount_reads_preference_once() {
        let (_head, ctx) = context();
        let mut scheme = MockScheme::new();
        scheme.expect_prefers_dark().times(1).return_const(Some(true));

        let mounted = Shell::new(ShellConfig::default(), routes()).mount(&ctx, &scheme);
        assert_eq!(mounted.theme().mode, ThemeMode::Dark);
        assert_eq!(mounted.prefers_dark(), Some(true));
    }

    #[test]
    fn test_mount_publishes_theme() {
        let (_head, ctx) = context();
        let mounted = Shell::new(ShellConfig::default(), routes()).mount(&ctx, &StaticColorScheme::dark());

        let first = ctx.channel.current().unwrap();
        let second = ctx.channel.current().unwrap();
        assert!(Arc::ptr_eq(&first, &second));
        assert!(Arc::ptr_eq(&first, mounted.theme()));
        assert!(mounted.channel().same_channel(&ctx.channel));
    }

    #[test]
    fn test_mount_injects_variables_and_baseline() {
        let (head, ctx) = context();
        let mounted = Shell::new(ShellConfig::default(), routes()).mount(&ctx, &StaticColorScheme::light());

        assert_eq!(head.len(), 1);
        let css = head.style(mounted.style_id()).unwrap();
        assert!(css.contains("color-scheme: light;"));
        for variable in mounted.css_variables().iter() {
            assert_eq!(head.root_variable(variable.name).as_deref(), Some(variable.value.as_str()));
        }
    }

    #[test]
    fn test_unsupported_preference_mounts_light() {
        let (_head, ctx) = context();
        let mounted =
            Shell::new(ShellConfig::default(), routes()).mount(&ctx, &StaticColorScheme::unsupported());
        assert_eq!(mounted.theme().mode, ThemeMode::Light);
        assert_eq!(ctx.channel.current_mode(), Some(ThemeMode::Light));
    }

    #[test]
    fn test_unmount_removes_styles_and_returns_shell() {
        let (head, ctx) = context();
        let mounted = Shell::new(ShellConfig::default(), routes()).mount(&ctx, &StaticColorScheme::dark());
        assert_eq!(head.len(), 1);

        let shell = mounted.unmount();
        assert!(head.is_empty());
        assert_eq!(shell.routes().len(), 2);
        // The channel keeps the last published theme
        assert_eq!(ctx.channel.current_mode(), Some(ThemeMode::Dark));
    }

    #[test]
    fn test_drop_removes_styles() {
        let (head, ctx) = context();
        {
            let _mounted =
                Shell::new(ShellConfig::default(), routes()).mount(&ctx, &StaticColorScheme::dark());
            assert_eq!(head.len(), 1);
        }
        assert!(head.is_empty());
    }

    #[test]
    fn test_remount_after_unmount() {
        let (head, ctx) = context();
        let shell = Shell::new(ShellConfig::default(), routes())
            .mount(&ctx, &StaticColorScheme::dark())
            .unmount();

        let mounted = shell.mount(&ctx, &StaticColorScheme::light());
        assert_eq!(head.len(), 1);
        assert_eq!(mounted.theme().mode, ThemeMode::Light);
        assert_eq!(ctx.channel.generation(), 2);
    }

    #[test]
    fn test_activate_and_render_content() {
        let (_head, ctx) = context();
        let mounted = Shell::new(ShellConfig::default(), routes()).mount(&ctx, &StaticColorScheme::light());

        let mut router = MockRoutingEngine::new();
        router.expect_navigate().with(eq("/")).times(1).return_const(());
        router
            .expect_active_view()
            .returning(|| Some("home".to_string()));

        assert_eq!(mounted.activate(NavLayout::Wide, 0, &router).as_deref(), Some("/"));
        assert_eq!(mounted.render_content(&router).view.as_deref(), Some("home"));
    }

    // ==========================================================================
    // Color Scheme Following Tests
    // ==========================================================================

    #[test]
    fn test_color_scheme_change_ignored_by_default() {
        let (head, ctx) = context();
        let mut mounted =
            Shell::new(ShellConfig::default(), routes()).mount(&ctx, &StaticColorScheme::light());
        let css = head.style(mounted.style_id());

        assert!(!mounted.apply_color_scheme(Some(true)));
        assert_eq!(mounted.theme().mode, ThemeMode::Light);
        assert_eq!(head.style(mounted.style_id()), css);
        assert_eq!(ctx.channel.generation(), 1);
    }

    #[test]
    fn test_ignored_change_is_still_recorded() {
        let (_head, ctx) = context();
        let mut mounted =
            Shell::new(ShellConfig::default(), routes()).mount(&ctx, &StaticColorScheme::light());
        assert_eq!(mounted.prefers_dark(), Some(false));

        assert!(!mounted.apply_color_scheme(Some(true)));
        assert_eq!(mounted.prefers_dark(), Some(true));
        assert_eq!(mounted.theme().mode, ThemeMode::Light);
    }

    #[test]
    fn test_theme_change_swaps_variables_and_baseline_together() {
        let mut host = MockHost::new();
        host.expect_insert_style()
            .withf(|_, css| css.contains("color-scheme: light;"))
            .times(1)
            .return_const(());
        host.expect_replace_style()
            .withf(|_, css| {
                css.contains("--md-sys-color-background: #121212;")
                    && css.contains("color-scheme: dark;")
            })
            .times(1)
            .return_const(true);
        host.expect_remove_style().times(1).return_const(true);

        let ctx = ShellContext::new(ThemeChannel::new(), Arc::new(host));
        let config = ShellConfig::default().following_system_color_scheme(true);
        let mut mounted = Shell::new(config, routes()).mount(&ctx, &StaticColorScheme::light());

        assert!(mounted.apply_color_scheme(Some(true)));
        mounted.unmount();
    }

    #[test]
    fn test_color_scheme_change_followed_when_enabled() {
        let (head, ctx) = context();
        let config = ShellConfig::default().following_system_color_scheme(true);
        let mut mounted = Shell::new(config, routes()).mount(&ctx, &StaticColorScheme::light());

        assert!(mounted.apply_color_scheme(Some(true)));
        assert_eq!(mounted.theme().mode, ThemeMode::Dark);
        assert_eq!(ctx.channel.current_mode(), Some(ThemeMode::Dark));
        assert_eq!(head.len(), 1);
        assert_eq!(head.root_variable("--md-sys-color-background").as_deref(), Some("#121212"));
        assert_eq!(
            mounted.navigation().drawer.styles.background,
            mounted.theme().palette.background.paper
        );
        assert_eq!(mounted.content().style.background_color.as_deref(), Some("#121212"));

        // Same mode again is a no-op
        assert!(!mounted.apply_color_scheme(Some(true)));
        assert_eq!(ctx.channel.generation(), 2);
    }

    #[tokio::test]
    async fn test_follow_color_scheme_until_closed() {
        let (head, ctx) = context();
        let watcher = ColorSchemeWatcher::new(Some(false));
        let config = ShellConfig::default().following_system_color_scheme(true);
        let mut mounted = Shell::new(config, routes()).mount(&ctx, &watcher);
        let changes = watcher.subscribe();

        watcher.set(Some(true));
        drop(watcher);
        mounted.follow_color_scheme(changes).await;

        assert_eq!(mounted.theme().mode, ThemeMode::Dark);
        assert_eq!(head.root_variable("--md-sys-color-primary").as_deref(), Some("#90CAF9"));
    }
}
