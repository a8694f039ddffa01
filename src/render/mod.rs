//! Rendering the portfolio in the active color mode.
//!
//! - [`Renderer`]: renders the page template with the theme variant picked by
//!   the current [`ThemePreference`](crate::ThemePreference)
//! - [`RenderError`]: template or theme failures

mod filters;
mod renderer;

pub use renderer::{Renderer, DEFAULT_WIDTH, PORTFOLIO_TEMPLATE};

use crate::style::StyleValidationError;

#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    #[error("invalid theme ({mode}): {source}")]
    Theme {
        mode: crate::theme::ColorMode,
        #[source]
        source: StyleValidationError,
    },
    #[error("template error: {0}")]
    Template(#[from] minijinja::Error),
}
