//! Named styles and aliases.
//!
//! - [`StyleValue`]: a style that is either concrete or an alias
//! - [`Styles`]: a registry of named styles
//! - [`StyleValidationError`]: errors from alias validation
//!
//! Portfolio templates reference semantic names (`heading`, `period`,
//! `skill`) which alias a small set of visual styles, so a palette only has
//! to define the visual layer once.

mod error;
mod registry;
mod value;

pub use error::StyleValidationError;
pub use registry::{Styles, DEFAULT_MISSING_STYLE_INDICATOR};
pub use value::StyleValue;
