//! Light/dark theme pairs selected by the active color mode.

use super::theme::Theme;

/// The visual mode the whole document renders in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    Light,
    Dark,
}

impl ColorMode {
    pub fn from_is_dark(is_dark: bool) -> Self {
        if is_dark {
            ColorMode::Dark
        } else {
            ColorMode::Light
        }
    }

    pub fn is_dark(self) -> bool {
        self == ColorMode::Dark
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ColorMode::Light => "light",
            ColorMode::Dark => "dark",
        }
    }
}

impl std::fmt::Display for ColorMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A theme with separate light and dark variants.
///
/// # Example
///
/// ```rust
/// use folio::{AdaptiveTheme, ColorMode, Theme};
/// use console::Style;
///
/// let light = Theme::new().add("tone", Style::new().black());
/// let dark = Theme::new().add("tone", Style::new().white());
/// let adaptive = AdaptiveTheme::new(light, dark);
///
/// assert!(adaptive.resolve(ColorMode::Dark).styles().has("tone"));
/// ```
#[derive(Debug, Clone)]
pub struct AdaptiveTheme {
    light: Theme,
    dark: Theme,
}

impl AdaptiveTheme {
    pub fn new(light: Theme, dark: Theme) -> Self {
        Self { light, dark }
    }

    /// The built-in portfolio palettes.
    pub fn portfolio() -> Self {
        Self::new(Theme::light(), Theme::dark())
    }

    /// Returns the variant for `mode`.
    pub fn resolve(&self, mode: ColorMode) -> &Theme {
        match mode {
            ColorMode::Light => &self.light,
            ColorMode::Dark => &self.dark,
        }
    }
}

impl Default for AdaptiveTheme {
    fn default() -> Self {
        Self::portfolio()
    }
}
