//! Visual palettes selected by color mode.
//!
//! This module provides:
//!
//! - [`Palette`]: a named collection of styles with fluent builder API
//! - [`AdaptivePalette`]: a light/dark palette pair selected by
//!   [`crate::ColorMode`]
//!
//! Presentational components hold an [`AdaptivePalette`], subscribe to a
//! [`crate::ThemeStore`], and re-select on each notification. Unlike a
//! detector-driven theme, selection takes the mode as an argument, so the
//! store stays the single source of truth.

mod adaptive;
#[allow(clippy::module_inception)]
mod palette;

pub use adaptive::AdaptivePalette;
pub use palette::Palette;
