//! Document style host
//!
//! Style blocks injected by the shell live in the document head, outside the
//! component tree the shell renders. [`StyleHost`] is the capability the shell
//! uses to add, swap and remove those blocks; [`DocumentHead`] is an in-memory
//! implementation that frontends can mirror into the real document.

use parking_lot::Mutex;
use serde::{Deserialize, Serialize};

/// Capability for managing global `<style>` blocks
///
/// Every operation is synchronous: when it returns, the document reflects it.
pub trait StyleHost: Send + Sync {
    /// Add a style block, or overwrite it if `id` already exists
    fn insert_style(&self, id: &str, css: &str);

    /// Swap the contents of an existing block in one step
    ///
    /// Returns `false` if no block with `id` exists.
    fn replace_style(&self, id: &str, css: &str) -> bool;

    /// Remove a block
    ///
    /// Returns `false` if no block with `id` exists.
    fn remove_style(&self, id: &str) -> bool;
}

/// A `<style>` element in the document head
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StyleElement {
    /// Element id
    pub id: String,
    /// Stylesheet text
    pub css: String,
}

/// In-memory document head
///
/// Keeps style blocks in insertion order. Reads see either the old or the new
/// contents of a block, never a mix.
#[derive(Debug, Default)]
pub struct DocumentHead {
    elements: Mutex<Vec<StyleElement>>,
}

impl DocumentHead {
    /// Create an empty head
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of all style elements, in document order
    pub fn styles(&self) -> Vec<StyleElement> {
        self.elements.lock().clone()
    }

    /// Contents of one style block
    pub fn style(&self, id: &str) -> Option<String> {
        self.elements
            .lock()
            .iter()
            .find(|element| element.id == id)
            .map(|element| element.css.clone())
    }

    /// Check whether a block exists
    pub fn contains(&self, id: &str) -> bool {
        self.elements.lock().iter().any(|element| element.id == id)
    }

    /// Number of style blocks
    pub fn len(&self) -> usize {
        self.elements.lock().len()
    }

    /// Check whether the head has no style blocks
    pub fn is_empty(&self) -> bool {
        self.elements.lock().is_empty()
    }

    /// Resolve a custom property declared on `:root`
    ///
    /// Later blocks win over earlier ones, like the cascade.
    pub fn root_variable(&self, name: &str) -> Option<String> {
        let elements = self.elements.lock();
        elements
            .iter()
            .rev()
            .find_map(|element| find_root_declaration(&element.css, name))
    }
}

/// Find `name: value;` in the `:root { ... }` rules of a stylesheet
///
/// Every `:root` rule is scanned; the last declaration wins.
fn find_root_declaration(css: &str, name: &str) -> Option<String> {
    let mut found = None;
    let mut rest = css;

    while let Some(start) = rest.find(":root") {
        let after = &rest[start + ":root".len()..];
        let Some(open) = after.find('{') else {
            break;
        };
        let body = &after[open + 1..];
        let Some(close) = body.find('}') else {
            break;
        };

        if let Some(value) = body[..close]
            .split(';')
            .rev()
            .filter_map(|declaration| declaration.split_once(':'))
            .find(|(property, _)| property.trim() == name)
            .map(|(_, value)| value.trim().to_string())
        {
            found = Some(value);
        }
        rest = &body[close + 1..];
    }

    found
}

impl StyleHost for DocumentHead {
    fn insert_style(&self, id: &str, css: &str) {
        let mut elements = self.elements.lock();
        match elements.iter_mut().find(|element| element.id == id) {
            Some(existing) => {
                tracing::warn!(id, "Style block already present, overwriting");
                existing.css = css.to_string();
            }
            None => elements.push(StyleElement {
                id: id.to_string(),
                css: css.to_string(),
            }),
        }
    }

    fn replace_style(&self, id: &str, css: &str) -> bool {
        let mut elements = self.elements.lock();
        match elements.iter_mut().find(|element| element.id == id) {
            Some(existing) => {
                existing.css = css.to_string();
                true
            }
            None => false,
        }
    }

    fn remove_style(&self, id: &str) -> bool {
        let mut elements = self.elements.lock();
        let before = elements.len();
        elements.retain(|element| element.id != id);
        elements.len() != before
    }
}
