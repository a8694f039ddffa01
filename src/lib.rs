//! # folio - a resume page for the terminal with a remembered light/dark theme
//!
//! `folio` renders a personal portfolio (profile, work experience, skills,
//! projects) with one of two palettes. Which palette is active is decided by a
//! [`ThemeResolver`]:
//!
//! - on first run it follows the operating system's color scheme
//! - while following the system, system changes are applied as they happen
//! - once the user toggles, the choice is saved and wins from then on
//! - clearing the saved choice goes back to following the system
//!
//! The resolver's two collaborators are traits, so tests and embedders can
//! supply their own: a [`PreferenceStore`] ([`MemoryStore`], [`FileStore`])
//! and a [`SystemTheme`] ([`OsSystemTheme`], [`ManualSystemTheme`]).
//!
//! ## Quick start
//!
//! ```rust
//! use folio::{
//!     AdaptiveTheme, Document, ManualSystemTheme, MemoryStore, OutputMode, Portfolio, Renderer,
//!     ThemeResolver,
//! };
//!
//! let os = ManualSystemTheme::new(true);
//! let resolver = ThemeResolver::initialize(MemoryStore::new(), &os);
//! let mut page = Document::mount(resolver, &os);
//!
//! let renderer = Renderer::new(AdaptiveTheme::portfolio(), OutputMode::Text).unwrap();
//! let portfolio = Portfolio::builtin().unwrap();
//!
//! let dark = page.render(&renderer, &portfolio).unwrap();
//! assert!(dark.contains("☀ light"));
//!
//! page.toggle();
//! let light = page.render(&renderer, &portfolio).unwrap();
//! assert!(light.contains("☾ dark"));
//! ```

pub mod config;
pub mod content;
pub mod document;
pub mod output;
pub mod render;
pub mod store;
pub mod style;
pub mod theme;
mod util;

pub use config::{ConfigError, FolioConfig};
pub use content::{ContentError, Link, Portfolio, Profile, Project, Role, SkillGroup};
pub use document::Document;
pub use output::OutputMode;
pub use render::{RenderError, Renderer};
pub use store::{FileStore, MemoryStore, PreferenceStore, StoreError, DARK_MODE_KEY};
pub use style::{StyleValidationError, StyleValue, Styles};
pub use theme::{
    AdaptiveTheme, ColorMode, ManualSystemTheme, OsSystemTheme, PreferenceSource, Subscription,
    SystemTheme, Theme, ThemePreference, ThemeResolver,
};
pub use util::{gap, truncate_to_width, wrap};
