//! CSS variable bridge
//!
//! Elements the shell does not render itself (web components, foreign
//! widgets) still need the theme colors. The bridge projects the theme onto a
//! fixed set of CSS custom properties and injects them into the document's
//! `:root` scope through a [`StyleHost`].
//!
//! Injection is scoped: [`StyleInjection`] owns the style block and removes it
//! when released or dropped.

use crate::theme::Theme;
use shell_platform::document::StyleHost;
use std::fmt::Write;
use std::sync::Arc;
use uuid::Uuid;

/// Element id prefix for the theme style block
pub const THEME_STYLE_ID: &str = "ndn-shell-theme";

type Projection = fn(&Theme) -> String;

/// Variable names and the theme field each one is read from
const PROJECTIONS: [(&str, Projection); 25] = [
    ("--md-sys-color-primary", |t| t.palette.primary.main.clone()),
    ("--md-sys-color-on-primary", |t| t.palette.primary.contrast_text.clone()),
    ("--md-sys-color-primary-container", |t| t.palette.primary.light.clone()),
    ("--md-sys-color-on-primary-container", |t| t.palette.primary.contrast_text.clone()),
    ("--md-sys-color-secondary", |t| t.palette.secondary.main.clone()),
    ("--md-sys-color-on-secondary", |t| t.palette.secondary.contrast_text.clone()),
    ("--md-sys-color-secondary-container", |t| t.palette.secondary.light.clone()),
    ("--md-sys-color-on-secondary-container", |t| t.palette.secondary.contrast_text.clone()),
    ("--md-sys-color-tertiary", |t| t.palette.info.main.clone()),
    ("--md-sys-color-on-tertiary", |t| t.palette.info.contrast_text.clone()),
    ("--md-sys-color-tertiary-container", |t| t.palette.info.light.clone()),
    ("--md-sys-color-on-tertiary-container", |t| t.palette.info.contrast_text.clone()),
    ("--md-sys-color-error", |t| t.palette.error.main.clone()),
    ("--md-sys-color-on-error", |t| t.palette.error.contrast_text.clone()),
    ("--md-sys-color-error-container", |t| t.palette.error.light.clone()),
    ("--md-sys-color-on-error-container", |t| t.palette.error.contrast_text.clone()),
    ("--md-sys-color-background", |t| t.palette.background.default.clone()),
    ("--md-sys-color-on-background", |t| t.palette.text.primary.clone()),
    ("--md-sys-color-surface", |t| t.palette.background.paper.clone()),
    ("--md-sys-color-on-surface", |t| t.palette.text.primary.clone()),
    ("--md-sys-color-shadow", |t| t.palette.primary.main.clone()),
    ("--md-elevation-level", |_| "0".to_string()),
    ("--theme-color-success", |t| t.palette.success.main.clone()),
    ("--theme-color-success-container", |t| t.palette.success.light.clone()),
    ("--theme-color-grey-600", |t| t.palette.grey.grey_600.clone()),
];

/// Names of every variable the bridge defines, in output order
pub fn variable_names() -> impl Iterator<Item = &'static str> {
    PROJECTIONS.iter().map(|(name, _)| *name)
}

// =============================================================================
// Variable Set
// =============================================================================

/// A single custom property
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CssVariable {
    /// Property name, including the leading `--`
    pub name: &'static str,
    /// Property value
    pub value: String,
}

/// Custom properties derived from one theme
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CssVariableSet {
    variables: Vec<CssVariable>,
}

impl CssVariableSet {
    /// Look up a variable value
    pub fn get(&self, name: &str) -> Option<&str> {
        self.variables
            .iter()
            .find(|variable| variable.name == name)
            .map(|variable| variable.value.as_str())
    }

    /// Number of variables
    pub fn len(&self) -> usize {
        self.variables.len()
    }

    /// Check whether the set has no variables
    pub fn is_empty(&self) -> bool {
        self.variables.is_empty()
    }

    /// Iterate in output order
    pub fn iter(&self) -> impl Iterator<Item = &CssVariable> {
        self.variables.iter()
    }

    /// Render as a `:root` rule
    pub fn to_css(&self) -> String {
        let mut css = String::from(":root {\n");
        for variable in &self.variables {
            let _ = writeln!(css, "  {}: {};", variable.name, variable.value);
        }
        css.push_str("}\n");
        css
    }
}

/// Project a theme onto the CSS variable set
///
/// Pure: the result depends only on the theme.
pub fn project(theme: &Theme) -> CssVariableSet {
    CssVariableSet {
        variables: PROJECTIONS
            .iter()
            .map(|&(name, read)| CssVariable {
                name,
                value: read(theme),
            })
            .collect(),
    }
}

/// Baseline document styles for a theme
///
/// Sets the document color scheme, removes the default body margin and paints
/// the page with the theme background.
pub fn baseline_css(theme: &Theme) -> String {
    format!(
        "html {{\n  color-scheme: {scheme};\n  -webkit-font-smoothing: antialiased;\n  box-sizing: border-box;\n}}\n\
         *, *::before, *::after {{\n  box-sizing: inherit;\n}}\n\
         body {{\n  margin: 0;\n  color: {text};\n  background-color: {background};\n}}\n",
        scheme = theme.mode.color_scheme(),
        text = theme.palette.text.primary,
        background = theme.palette.background.default,
    )
}

/// The full theme stylesheet: the variable rule followed by the baseline
///
/// Both parts live in one block so a theme change swaps them together.
pub fn theme_css(theme: &Theme) -> String {
    let mut css = project(theme).to_css();
    css.push_str(&baseline_css(theme));
    css
}

// =============================================================================
// Scoped Injection
// =============================================================================

/// A style block held in the document head
///
/// The block is removed when the injection is released or dropped, including
/// during unwinding.
pub struct StyleInjection {
    host: Arc<dyn StyleHost>,
    id: String,
    released: bool,
}

impl StyleInjection {
    /// Insert a new style block with a unique id derived from `prefix`
    pub fn acquire(host: Arc<dyn StyleHost>, prefix: &str, css: &str) -> Self {
        let id = format!("{}-{}", prefix, Uuid::new_v4());
        host.insert_style(&id, css);
        tracing::debug!(id = %id, "Style block injected");

        Self {
            host,
            id,
            released: false,
        }
    }

    /// Element id of the block
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Swap the block contents in a single host operation
    pub fn replace(&mut self, css: &str) {
        if !self.host.replace_style(&self.id, css) {
            tracing::warn!(id = %self.id, "Style block missing from document, re-inserting");
            self.host.insert_style(&self.id, css);
        }
        tracing::debug!(id = %self.id, "Style block replaced");
    }

    /// Remove the block now
    pub fn release(mut self) {
        self.remove();
    }

    fn remove(&mut self) {
        if self.released {
            return;
        }
        self.released = true;
        if self.host.remove_style(&self.id) {
            tracing::debug!(id = %self.id, "Style block removed");
        } else {
            tracing::warn!(id = %self.id, "Style block already gone on release");
        }
    }
}

impl Drop for StyleInjection {
    fn drop(&mut self) {
        self.remove();
    }
}

impl std::fmt::Debug for StyleInjection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StyleInjection")
            .field("id", &self.id)
            .field("released", &self.released)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::{dark_theme, light_theme};
    use mockall::predicate::*;
    use shell_platform::document::DocumentHead;
    use std::collections::HashSet;

    mockall::mock! {
        Host {}
        impl StyleHost for Host {
            fn insert_style(&self, id: &str, css: &str);
            fn replace_style(&self, id: &str, css: &str) -> bool;
            fn remove_style(&self, id: &str) -> bool;
        }
    }

    // ==========================================================================
    // Projection Tests
    // ==========================================================================

    #[test]
    fn test_project_defines_every_variable_once() {
        let set = project(&light_theme());
        let names: HashSet<_> = set.iter().map(|v| v.name).collect();

        assert_eq!(set.len(), 25);
        assert_eq!(names.len(), set.len());
        assert!(variable_names().all(|name| set.get(name).is_some()));
    }

    #[test]
    fn test_project_reads_theme_fields() {
        let theme = dark_theme();
        let set = project(&theme);

        assert_eq!(set.get("--md-sys-color-primary"), Some("#90CAF9"));
        assert_eq!(set.get("--md-sys-color-tertiary"), Some(theme.palette.info.main.as_str()));
        assert_eq!(set.get("--md-sys-color-background"), Some("#121212"));
        assert_eq!(set.get("--md-sys-color-on-surface"), Some("#FFFFFF"));
        assert_eq!(set.get("--md-elevation-level"), Some("0"));
        assert_eq!(set.get("--theme-color-grey-600"), Some("#757575"));
        assert_eq!(set.get("--unknown"), None);
    }

    #[test]
    fn test_project_is_deterministic() {
        assert_eq!(project(&light_theme()), project(&light_theme()));
        assert_ne!(project(&light_theme()), project(&dark_theme()));
    }

    #[test]
    fn test_to_css_renders_root_rule() {
        let css = project(&light_theme()).to_css();
        assert!(css.starts_with(":root {\n"));
        assert!(css.contains("  --md-sys-color-primary: #1976D2;\n"));
        assert!(css.ends_with("}\n"));
        assert_eq!(css.matches(';').count(), 25);
    }

    #[test]
    fn test_baseline_css() {
        let css = baseline_css(&dark_theme());
        assert!(css.contains("color-scheme: dark;"));
        assert!(css.contains("background-color: #121212;"));
        assert!(css.contains("margin: 0;"));
    }

    #[test]
    fn test_theme_css_holds_variables_and_baseline() {
        let css = theme_css(&dark_theme());
        assert!(css.starts_with(":root {\n"));
        assert!(css.contains("  --md-sys-color-background: #121212;\n"));
        assert!(css.contains("color-scheme: dark;"));
        assert_eq!(css.matches(":root").count(), 1);
    }

    // ==========================================================================
    // Injection Tests
    // ==========================================================================

    #[test]
    fn test_injection_lifecycle() {
        let head = Arc::new(DocumentHead::new());
        let injection =
            StyleInjection::acquire(head.clone(), THEME_STYLE_ID, &project(&light_theme()).to_css());

        assert!(injection.id().starts_with(THEME_STYLE_ID));
        assert!(head.contains(injection.id()));
        assert_eq!(head.root_variable("--md-sys-color-primary").as_deref(), Some("#1976D2"));

        injection.release();
        assert!(head.is_empty());
        assert_eq!(head.root_variable("--md-sys-color-primary"), None);
    }

    #[test]
    fn test_replace_leaves_no_stale_values() {
        let head = Arc::new(DocumentHead::new());
        let light = project(&light_theme());
        let dark = project(&dark_theme());
        let mut injection = StyleInjection::acquire(head.clone(), THEME_STYLE_ID, &light.to_css());

        injection.replace(&dark.to_css());

        assert_eq!(head.len(), 1);
        for variable in dark.iter() {
            assert_eq!(
                head.root_variable(variable.name).as_deref(),
                Some(variable.value.as_str()),
                "{} not updated",
                variable.name
            );
        }
    }

    #[test]
    fn test_drop_removes_block() {
        let head = Arc::new(DocumentHead::new());
        {
            let _injection = StyleInjection::acquire(head.clone(), THEME_STYLE_ID, "body {}");
            assert_eq!(head.len(), 1);
        }
        assert!(head.is_empty());
    }

    #[test]
    fn test_drop_during_unwind_removes_block() {
        let head = Arc::new(DocumentHead::new());
        let host = head.clone();
        let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(move || {
            let _injection = StyleInjection::acquire(host, THEME_STYLE_ID, ":root {}");
            panic!("view construction failed");
        }));

        assert!(result.is_err());
        assert!(head.is_empty());
    }

    #[test]
    fn test_unique_ids_per_injection() {
        let head = Arc::new(DocumentHead::new());
        let a = StyleInjection::acquire(head.clone(), THEME_STYLE_ID, "a");
        let b = StyleInjection::acquire(head.clone(), THEME_STYLE_ID, "b");
        assert_ne!(a.id(), b.id());
        assert_eq!(head.len(), 2);
    }

    #[test]
    fn test_replace_reinserts_when_block_was_removed_externally() {
        let mut host = MockHost::new();
        host.expect_insert_style().times(2).return_const(());
        host.expect_replace_style()
            .with(always(), eq("new"))
            .times(1)
            .return_const(false);
        host.expect_remove_style().times(1).return_const(true);

        let mut injection = StyleInjection::acquire(Arc::new(host), THEME_STYLE_ID, "old");
        injection.replace("new");
    }

    #[test]
    fn test_release_removes_exactly_once() {
        let mut host = MockHost::new();
        host.expect_insert_style().times(1).return_const(());
        host.expect_remove_style().times(1).return_const(true);

        let injection = StyleInjection::acquire(Arc::new(host), THEME_STYLE_ID, "body {}");
        // release consumes the guard; Drop must not remove a second time
        injection.release();
    }
}
