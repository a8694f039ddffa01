//! Theme struct for building style collections.

use console::{Color, Style};

use crate::style::{StyleValidationError, StyleValue, Styles};

/// Semantic style names the portfolio template uses.
pub const PORTFOLIO_STYLE_NAMES: &[&str] = &[
    "name", "title", "link", "bio", "section", "role", "company", "period", "bullet",
    "skill_group", "skill", "project", "description", "url", "toggle",
];

/// A named collection of styles used when rendering templates.
///
/// # Example
///
/// ```rust
/// use folio::Theme;
/// use console::Style;
///
/// let theme = Theme::new()
///     // Visual layer
///     .add("muted", Style::new().dim())
///     .add("accent", Style::new().cyan().bold())
///     // Semantic layer
///     .add("period", "muted")
///     .add("section", "accent");
/// assert!(theme.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
pub struct Theme {
    pub(crate) styles: Styles,
}

impl Theme {
    pub fn new() -> Self {
        Self {
            styles: Styles::new(),
        }
    }

    pub fn from_styles(styles: Styles) -> Self {
        Self { styles }
    }

    /// Adds a concrete style or an alias to another name.
    pub fn add<V: Into<StyleValue>>(mut self, name: &str, value: V) -> Self {
        self.styles = self.styles.add(name, value);
        self
    }

    pub fn styles(&self) -> &Styles {
        &self.styles
    }

    pub fn validate(&self) -> Result<(), StyleValidationError> {
        self.styles.validate()
    }

    /// Like [`validate`](Self::validate), and also requires a style for every
    /// name in [`PORTFOLIO_STYLE_NAMES`].
    pub fn validate_for_page(&self) -> Result<(), StyleValidationError> {
        self.validate()?;
        match PORTFOLIO_STYLE_NAMES.iter().find(|name| !self.styles.has(name)) {
            Some(name) => Err(StyleValidationError::MissingPageStyle {
                element: name.to_string(),
            }),
            None => Ok(()),
        }
    }

    /// Dark text on the terminal's light background.
    pub fn light() -> Self {
        Self::new()
            .add("fg", Style::new().fg(Color::Black))
            .add("strong", Style::new().fg(Color::Black).bold())
            .add("accent", Style::new().fg(Color::Blue))
            .add("muted", Style::new().fg(Color::Color256(243)))
            .add("chip", Style::new().fg(Color::Color256(238)).bg(Color::Color256(254)))
            .with_semantic_layer()
    }

    /// Light text on a dark background.
    pub fn dark() -> Self {
        Self::new()
            .add("fg", Style::new().fg(Color::White))
            .add("strong", Style::new().fg(Color::White).bold())
            .add("accent", Style::new().fg(Color::Cyan))
            .add("muted", Style::new().fg(Color::Color256(246)))
            .add("chip", Style::new().fg(Color::Color256(252)).bg(Color::Color256(238)))
            .with_semantic_layer()
    }

    fn with_semantic_layer(self) -> Self {
        self.add("name", "strong")
            .add("title", "muted")
            .add("link", "accent")
            .add("bio", "muted")
            .add("section", "strong")
            .add("role", "strong")
            .add("company", "muted")
            .add("period", "muted")
            .add("bullet", "muted")
            .add("skill_group", "strong")
            .add("skill", "chip")
            .add("project", "strong")
            .add("description", "muted")
            .add("url", "accent")
            .add("toggle", "accent")
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::new()
    }
}
