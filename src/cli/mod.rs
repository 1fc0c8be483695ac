//! Output formatting for the plugin
//!
//! Renderers build plain `String`s; the router decides which stream they
//! go to.

pub mod output;

pub use output::Palette;
