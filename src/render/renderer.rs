//! Page renderer.

use minijinja::{context, Environment};
use serde::Serialize;

use super::filters::register_filters;
use super::RenderError;
use crate::content::Portfolio;
use crate::output::OutputMode;
use crate::theme::{AdaptiveTheme, ColorMode, ThemePreference};

/// Template used by [`Renderer::render_portfolio`] unless replaced.
pub const PORTFOLIO_TEMPLATE: &str = include_str!("../../templates/portfolio.jinja");

/// Line width used when none is configured.
pub const DEFAULT_WIDTH: usize = 80;

const MIN_WIDTH: usize = 20;

/// Renders the portfolio with the light or dark palette.
///
/// Both palettes are validated up front, so a broken alias fails at
/// construction rather than half-way through a page. The built-in page also
/// needs a style for each of its elements; a custom template does not.
///
/// # Example
///
/// ```rust
/// use folio::{AdaptiveTheme, OutputMode, Portfolio, PreferenceSource, Renderer, ThemePreference};
///
/// let renderer = Renderer::new(AdaptiveTheme::portfolio(), OutputMode::Text).unwrap();
/// let page = renderer
///     .render_portfolio(
///         &Portfolio::builtin().unwrap(),
///         ThemePreference { is_dark: true, source: PreferenceSource::SystemDefault },
///     )
///     .unwrap();
/// assert!(page.contains("Work Experience"));
/// ```
#[derive(Debug, Clone)]
pub struct Renderer {
    themes: AdaptiveTheme,
    output: OutputMode,
    width: usize,
    custom_template: Option<String>,
}

impl Renderer {
    /// # Errors
    ///
    /// Returns an error if either palette has dangling or cyclic aliases.
    pub fn new(themes: AdaptiveTheme, output: OutputMode) -> Result<Self, RenderError> {
        for mode in [ColorMode::Light, ColorMode::Dark] {
            themes
                .resolve(mode)
                .validate()
                .map_err(|source| RenderError::Theme { mode, source })?;
        }
        Ok(Self {
            themes,
            output,
            width: DEFAULT_WIDTH,
            custom_template: None,
        })
    }

    /// Sets the line width. Values below 20 columns are raised to 20.
    pub fn with_width(mut self, width: usize) -> Self {
        self.width = width.max(MIN_WIDTH);
        self
    }

    /// Replaces the page template.
    pub fn with_template(mut self, source: impl Into<String>) -> Self {
        self.custom_template = Some(source.into());
        self
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn output(&self) -> OutputMode {
        self.output
    }

    /// Renders the page in the mode `preference` selects.
    ///
    /// # Errors
    ///
    /// With the built-in template, fails if the palette for the mode lacks a
    /// style for one of the page elements.
    pub fn render_portfolio(
        &self,
        portfolio: &Portfolio,
        preference: ThemePreference,
    ) -> Result<String, RenderError> {
        let mode = preference.mode();
        let template = match &self.custom_template {
            Some(source) => source.as_str(),
            None => {
                self.themes
                    .resolve(mode)
                    .validate_for_page()
                    .map_err(|source| RenderError::Theme { mode, source })?;
                PORTFOLIO_TEMPLATE
            }
        };
        let data = context! {
            profile => &portfolio.profile,
            experience => &portfolio.experience,
            skills => &portfolio.skills,
            projects => &portfolio.projects,
            mode => mode,
            source => preference.source,
            width => self.width,
        };
        self.render_template(template, &data, mode)
    }

    /// Renders any template with the palette for `mode`.
    pub fn render_template<T: Serialize>(
        &self,
        template: &str,
        data: &T,
        mode: ColorMode,
    ) -> Result<String, RenderError> {
        let mut env = Environment::new();
        env.set_trim_blocks(true);
        env.set_lstrip_blocks(true);
        register_filters(&mut env, self.themes.resolve(mode), self.output, self.width);
        env.add_template_owned("page".to_string(), template.to_string())?;
        let tmpl = env.get_template("page")?;
        Ok(tmpl.render(data)?)
    }
}
