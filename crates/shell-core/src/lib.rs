//! Core types for the NDN shell
//!
//! This crate owns the [`theme::Theme`] value and its derivation from the
//! operating system's color-scheme preference. It has no knowledge of the
//! document, the navigation surfaces, or how the theme is published.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod theme;

pub use theme::{
    dark_theme, derive_theme, light_theme, theme_for_mode, theme_for_preference,
    BackgroundColors, Color, GreyScale, Palette, PaletteColor, TextColors, Theme, ThemeMode,
};
