//! Palette struct for building style collections.

use std::collections::BTreeMap;

use console::Style;

/// A named collection of styles for one color mode.
///
/// # Example
///
/// ```rust
/// use console::Style;
/// use duotone::Palette;
///
/// let palette = Palette::new()
///     .add("surface", Style::new().on_white())
///     .add("text", Style::new().black())
///     .add("accent", Style::new().magenta().bold());
///
/// assert!(palette.has("accent"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct Palette {
    styles: BTreeMap<String, Style>,
}

impl Palette {
    /// Creates an empty palette.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a named style, returning an updated palette for chaining.
    pub fn add(mut self, name: &str, style: Style) -> Self {
        self.styles.insert(name.to_string(), style);
        self
    }

    /// Looks up a style by name.
    pub fn style(&self, name: &str) -> Option<&Style> {
        self.styles.get(name)
    }

    /// Whether a style with this name exists.
    pub fn has(&self, name: &str) -> bool {
        self.styles.contains_key(name)
    }

    /// Whether the palette holds no styles.
    pub fn is_empty(&self) -> bool {
        self.styles.is_empty()
    }

    /// Iterates over the style names in sorted order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.styles.keys().map(String::as_str)
    }

    /// The built-in light palette.
    pub fn light() -> Self {
        Self::new()
            .add("surface", Style::new().on_white())
            .add("text", Style::new().black())
            .add("muted", Style::new().black().dim())
            .add("accent", Style::new().magenta().bold())
            .add("link", Style::new().blue().underlined())
    }

    /// The built-in dark palette.
    pub fn dark() -> Self {
        Self::new()
            .add("surface", Style::new().on_black())
            .add("text", Style::new().white())
            .add("muted", Style::new().white().dim())
            .add("accent", Style::new().magenta().bright().bold())
            .add("link", Style::new().cyan().underlined())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_palette_add_and_lookup() {
        let palette = Palette::new().add("bold", Style::new().bold());
        assert!(palette.has("bold"));
        assert!(palette.style("bold").is_some());
        assert!(palette.style("missing").is_none());
    }

    #[test]
    fn test_palette_default_is_empty() {
        assert!(Palette::default().is_empty());
    }

    #[test]
    fn test_builtin_palettes_share_names() {
        let light = Palette::light();
        let dark = Palette::dark();
        let light_names: Vec<&str> = light.names().collect();
        let dark_names: Vec<&str> = dark.names().collect();
        assert_eq!(light_names, dark_names);
        assert!(light.has("surface"));
        assert!(light.has("accent"));
    }
}
