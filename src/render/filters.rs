//! MiniJinja filter and function registration.

use minijinja::{Environment, Value};

use crate::output::OutputMode;
use crate::theme::Theme;
use crate::util::{gap, truncate_to_width, wrap};

/// Registers the page filters on `env`, styled with `theme`.
///
/// `width` is the line width used by `gap` and as the default for `chips`.
pub(crate) fn register_filters(
    env: &mut Environment<'static>,
    theme: &Theme,
    mode: OutputMode,
    width: usize,
) {
    let is_debug = mode.is_debug();
    let use_color = mode.should_use_color();

    let styles = theme.styles.clone();
    let paint = move |name: &str, text: &str| -> String {
        if is_debug {
            styles.apply_debug(name, text)
        } else {
            styles.apply_with_mode(name, text, use_color)
        }
    };

    let style = paint.clone();
    env.add_filter("style", move |value: Value, name: String| -> String {
        style(&name, &value.to_string())
    });

    env.add_filter("truncate_at", |value: Value, max: usize| -> String {
        truncate_to_width(&value.to_string(), max)
    });

    // Continuation lines start with `indent`, so bullets hang.
    env.add_filter(
        "wrap",
        |value: Value, width: i64, indent: Option<String>| -> String {
            let width = usize::try_from(width).unwrap_or(0).max(1);
            let joiner = format!("\n{}", indent.unwrap_or_default());
            wrap(&value.to_string(), width).join(&joiner)
        },
    );

    // Lays out labels as styled chips, breaking lines on the plain width.
    let chip = paint;
    env.add_filter(
        "chips",
        move |labels: Vec<String>, line_width: Option<usize>| -> String {
            let line_width = line_width.unwrap_or(width);
            let mut out = String::new();
            let mut used = 0;
            for label in labels {
                let padded = format!(" {} ", label);
                let cells = unicode_width::UnicodeWidthStr::width(padded.as_str());
                if used > 0 && used + 1 + cells > line_width {
                    out.push('\n');
                    used = 0;
                } else if used > 0 {
                    out.push(' ');
                    used += 1;
                }
                out.push_str(&chip("skill", &padded));
                used += cells;
            }
            out
        },
    );

    env.add_function("gap", move |left: String, right: String| -> String {
        gap(&left, &right, width)
    });
}
