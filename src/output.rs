//! Output mode control.

use console::Term;
use serde::{Deserialize, Serialize};

/// Controls how styles are written.
///
/// - `Auto`: ANSI codes when stdout is a color-capable terminal
/// - `Term`: always ANSI codes
/// - `Text`: never ANSI codes
/// - `TermDebug`: `[name]text[/name]` markers, for inspecting templates
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputMode {
    #[default]
    Auto,
    Term,
    Text,
    #[serde(rename = "debug")]
    TermDebug,
}

impl OutputMode {
    pub fn should_use_color(&self) -> bool {
        match self {
            OutputMode::Auto => Term::stdout().features().colors_supported(),
            OutputMode::Term => true,
            OutputMode::Text | OutputMode::TermDebug => false,
        }
    }

    pub fn is_debug(&self) -> bool {
        matches!(self, OutputMode::TermDebug)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_modes() {
        assert!(OutputMode::Term.should_use_color());
        assert!(!OutputMode::Text.should_use_color());
        assert!(!OutputMode::TermDebug.should_use_color());
        assert!(OutputMode::TermDebug.is_debug());
        assert!(!OutputMode::Auto.is_debug());
    }

    #[test]
    fn test_config_names() {
        let mode: OutputMode = serde_yaml::from_str("debug").unwrap();
        assert_eq!(mode, OutputMode::TermDebug);
        let mode: OutputMode = serde_yaml::from_str("text").unwrap();
        assert_eq!(mode, OutputMode::Text);
    }
}
