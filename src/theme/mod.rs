//! Themes and the light/dark preference that selects between them.
//!
//! - [`Theme`]: a named collection of styles with a fluent builder API
//! - [`AdaptiveTheme`]: light/dark theme pairs
//! - [`ColorMode`]: light or dark
//! - [`ThemeResolver`]: decides which mode is active and saves user choices
//! - [`SystemTheme`]: the operating system's color-scheme signal

mod adaptive;
mod preference;
mod system;
#[allow(clippy::module_inception)]
mod theme;

pub use adaptive::{AdaptiveTheme, ColorMode};
pub use preference::{PreferenceSource, ThemePreference, ThemeResolver};
pub use system::{ManualSystemTheme, OsSystemTheme, Subscription, SystemTheme, ThemeListener};
pub use theme::{Theme, PORTFOLIO_STYLE_NAMES};
