//! Registry of named styles.

use std::collections::BTreeMap;

use console::Style;

use super::error::StyleValidationError;
use super::value::StyleValue;

/// Prefix written in front of text whose style name is not registered.
pub const DEFAULT_MISSING_STYLE_INDICATOR: &str = "(!?)";

/// A collection of named styles, where entries may alias each other.
///
/// # Example
///
/// ```rust
/// use folio::Styles;
/// use console::Style;
///
/// let styles = Styles::new()
///     .add("accent", Style::new().cyan())
///     .add("heading", "accent");
///
/// assert!(styles.validate().is_ok());
/// assert_eq!(styles.apply_with_mode("heading", "Skills", false), "Skills");
/// ```
#[derive(Debug, Clone)]
pub struct Styles {
    entries: BTreeMap<String, StyleValue>,
    missing_indicator: String,
}

impl Styles {
    pub fn new() -> Self {
        Self {
            entries: BTreeMap::new(),
            missing_indicator: DEFAULT_MISSING_STYLE_INDICATOR.to_string(),
        }
    }

    /// Adds or replaces a named entry.
    pub fn add<V: Into<StyleValue>>(mut self, name: &str, value: V) -> Self {
        self.entries.insert(name.to_string(), value.into());
        self
    }

    /// Sets the prefix used for unknown style names. An empty string disables it.
    pub fn missing_indicator(mut self, indicator: &str) -> Self {
        self.missing_indicator = indicator.to_string();
        self
    }

    pub fn has(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Follows aliases from `name` to a concrete style.
    ///
    /// Returns `None` for unknown names, dangling aliases and cycles.
    pub fn resolve(&self, name: &str) -> Option<&Style> {
        let mut current = name;
        // A chain longer than the registry must revisit some entry.
        for _ in 0..=self.entries.len() {
            match self.entries.get(current)? {
                StyleValue::Concrete(style) => return Some(style),
                StyleValue::Alias(target) => current = target.as_str(),
            }
        }
        None
    }

    /// Checks that every alias reaches a concrete style.
    pub fn validate(&self) -> Result<(), StyleValidationError> {
        for start in self.entries.keys() {
            let mut path = vec![start.clone()];
            let mut current = start;
            while let Some(StyleValue::Alias(target)) = self.entries.get(current) {
                if !self.entries.contains_key(target) {
                    return Err(StyleValidationError::UnresolvedAlias {
                        from: current.clone(),
                        to: target.clone(),
                    });
                }
                if path.contains(target) {
                    path.push(target.clone());
                    return Err(StyleValidationError::CycleDetected { path });
                }
                path.push(target.clone());
                current = target;
            }
        }
        Ok(())
    }

    /// Applies the named style, emitting ANSI codes only when `use_color` is set.
    pub fn apply_with_mode(&self, name: &str, text: &str, use_color: bool) -> String {
        match self.resolve(name) {
            Some(style) => style
                .clone()
                .force_styling(use_color)
                .apply_to(text)
                .to_string(),
            None if self.missing_indicator.is_empty() => text.to_string(),
            None => format!("{} {}", self.missing_indicator, text),
        }
    }

    /// Wraps text in `[name]...[/name]` markers instead of styling it.
    pub fn apply_debug(&self, name: &str, text: &str) -> String {
        if self.resolve(name).is_some() {
            format!("[{}]{}[/{}]", name, text, name)
        } else {
            format!("[{}?]{}[/{}?]", name, text, name)
        }
    }
}

impl Default for Styles {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_follows_alias_chain() {
        let styles = Styles::new()
            .add("visual", Style::new().red())
            .add("presentation", "visual")
            .add("semantic", "presentation");

        assert!(styles.resolve("semantic").is_some());
        assert!(styles.resolve("nope").is_none());
    }

    #[test]
    fn test_resolve_cycle_is_none() {
        let styles = Styles::new().add("a", "b").add("b", "a");
        assert!(styles.resolve("a").is_none());
    }

    #[test]
    fn test_validate_dangling_alias() {
        let styles = Styles::new().add("period", "faint");
        assert_eq!(
            styles.validate(),
            Err(StyleValidationError::UnresolvedAlias {
                from: "period".into(),
                to: "faint".into(),
            })
        );
    }

    #[test]
    fn test_validate_cycle() {
        let styles = Styles::new().add("a", "b").add("b", "a");
        match styles.validate() {
            Err(StyleValidationError::CycleDetected { path }) => {
                assert_eq!(path, vec!["a", "b", "a"]);
            }
            other => panic!("expected cycle, got {:?}", other),
        }
    }

    #[test]
    fn test_apply_plain_without_color() {
        let styles = Styles::new().add("bold", Style::new().bold());
        assert_eq!(styles.apply_with_mode("bold", "hi", false), "hi");
    }

    #[test]
    fn test_apply_with_color_emits_ansi() {
        let styles = Styles::new().add("red", Style::new().red());
        let out = styles.apply_with_mode("red", "hi", true);
        assert!(out.contains("\x1b[31m"));
        assert!(out.contains("hi"));
    }

    #[test]
    fn test_unknown_style_gets_indicator() {
        let styles = Styles::new();
        assert_eq!(styles.apply_with_mode("ghost", "hi", false), "(!?) hi");

        let quiet = Styles::new().missing_indicator("");
        assert_eq!(quiet.apply_with_mode("ghost", "hi", true), "hi");
    }

    #[test]
    fn test_apply_debug_marks_names() {
        let styles = Styles::new().add("title", Style::new().bold());
        assert_eq!(styles.apply_debug("title", "x"), "[title]x[/title]");
        assert_eq!(styles.apply_debug("other", "x"), "[other?]x[/other?]");
    }
}
