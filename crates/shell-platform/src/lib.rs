//! Platform capabilities for the NDN shell
//!
//! This crate covers what the shell needs from its environment: the
//! operating system's color-scheme preference and a document head to inject
//! global styles into.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod color_scheme;
pub mod document;

pub use color_scheme::{ColorSchemeQuery, ColorSchemeWatcher, EnvColorScheme, StaticColorScheme};
pub use document::{DocumentHead, StyleElement, StyleHost};
