//! Light/dark palette pairs.

use super::palette::Palette;
use crate::mode::ColorMode;

/// A palette pair selected by the effective color mode.
///
/// Components keep one `AdaptivePalette` and call [`AdaptivePalette::select`]
/// with the mode received from a [`crate::ThemeStore`] subscription.
///
/// # Example
///
/// ```rust
/// use duotone::{AdaptivePalette, ColorMode, ManualScheme, MemoryStorage, ThemeStore};
///
/// let palette = AdaptivePalette::builtin();
/// let store = ThemeStore::initialize(
///     MemoryStorage::new(),
///     ManualScheme::new(ColorMode::Dark),
/// );
///
/// let active = palette.select(store.mode());
/// assert!(active.has("surface"));
/// ```
#[derive(Debug, Clone)]
pub struct AdaptivePalette {
    light: Palette,
    dark: Palette,
}

impl AdaptivePalette {
    /// Creates an adaptive palette with separate light and dark variants.
    pub fn new(light: Palette, dark: Palette) -> Self {
        Self { light, dark }
    }

    /// The built-in light/dark pair.
    pub fn builtin() -> Self {
        Self::new(Palette::light(), Palette::dark())
    }

    /// Selects the palette for `mode`.
    pub fn select(&self, mode: ColorMode) -> &Palette {
        match mode {
            ColorMode::Light => &self.light,
            ColorMode::Dark => &self.dark,
        }
    }
}

impl Default for AdaptivePalette {
    fn default() -> Self {
        Self::builtin()
    }
}
