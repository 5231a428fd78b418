//! ANSI presentation of styled span sequences.
//!
//! The rendering core emits role-tagged spans only; this module is the
//! terminal presentation surface, mapping each role through the resolved
//! style table to 24-bit SGR escape sequences. A no-color mode passes the
//! text through untouched for piped output.

use std::fmt::Write as _;

use crate::preview::{RenderOutput, StyleMap};

/// Writes span sequences as ANSI-styled text.
pub struct AnsiPresenter<'a> {
    styles: &'a StyleMap,
    use_colors: bool,
}

impl<'a> AnsiPresenter<'a> {
    /// Create a presenter over a resolved style table.
    pub fn new(styles: &'a StyleMap, use_colors: bool) -> Self {
        Self { styles, use_colors }
    }

    /// Concatenate all spans into one displayable string.
    pub fn present(&self, output: &RenderOutput) -> String {
        let mut text = String::new();
        for span in output.spans() {
            let style = self.styles.resolve(span.role);
            if self.use_colors {
                let [r, g, b] = style.fg;
                let _ = write!(text, "\x1b[38;2;{r};{g};{b}m");
                if style.bold {
                    text.push_str("\x1b[1m");
                }
                if style.italic {
                    text.push_str("\x1b[3m");
                }
                text.push_str(&span.text);
                text.push_str("\x1b[0m");
            } else {
                text.push_str(&span.text);
            }
            // Block-trailing spacing is baked into the MarkEnd descriptor.
            if style.trailing_blank {
                text.push('\n');
            }
        }
        text
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::preview::{PreviewRenderer, RenderConfig, Value};

    fn render(json: &str) -> RenderOutput {
        let renderer = PreviewRenderer::new(RenderConfig::default());
        renderer.render(&Value::parse(json).unwrap())
    }

    #[test]
    fn test_plain_mode_passes_text_through() {
        let output = render("42");
        let styles = StyleMap::dark_default();
        let presenter = AnsiPresenter::new(&styles, false);
        assert_eq!(presenter.present(&output), "42\n");
    }

    #[test]
    fn test_colored_mode_wraps_spans_in_sgr() {
        let output = render("42");
        let styles = StyleMap::dark_default();
        let presenter = AnsiPresenter::new(&styles, true);
        let text = presenter.present(&output);
        let [r, g, b] = styles.resolve(crate::preview::Role::Scalar).fg;
        assert_eq!(text, format!("\x1b[38;2;{r};{g};{b}m42\n\x1b[0m"));
    }

    #[test]
    fn test_mark_end_adds_blank_line() {
        let output = render(r#"{"k": 1}"#);
        let styles = StyleMap::dark_default();
        let presenter = AnsiPresenter::new(&styles, false);
        let text = presenter.present(&output);
        // The closing brace line is followed by the block-trailing blank.
        assert!(text.ends_with("}\n\n"));
    }
}
