//! Shared state for the NDN shell
//!
//! This crate provides the theme publication channel that lets any part of
//! the application read the theme the shell derived.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod channel;

pub use channel::ThemeChannel;
