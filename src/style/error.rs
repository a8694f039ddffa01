//! Palette validation errors.

/// Why a palette cannot style the page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StyleValidationError {
    /// An alias names a style the palette does not define
    UnresolvedAlias { from: String, to: String },
    /// Aliases loop; `path` starts and ends at the same name
    CycleDetected { path: Vec<String> },
    /// An element of the built-in page has no style in the palette
    MissingPageStyle { element: String },
}

impl std::fmt::Display for StyleValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StyleValidationError::UnresolvedAlias { from, to } => write!(
                f,
                "'{}' points at '{}', which this palette does not define",
                from, to
            ),
            StyleValidationError::CycleDetected { path } => {
                write!(f, "alias loop: {}", path.join(" -> "))
            }
            StyleValidationError::MissingPageStyle { element } => {
                write!(f, "no style for page element '{}'", element)
            }
        }
    }
}

impl std::error::Error for StyleValidationError {}
