//! Raw-text fallback rendering for input that fails to parse.

use encoding_rs::Encoding;

use super::renderer::RenderConfig;
use super::types::{RenderOutput, Role};

/// Decorative rule between the error banner and the raw dump: a line of
/// non-breaking space and tab the presentation layer draws struck-through.
const RULE: &str = "\n\u{00A0}\u{0009}\u{00A0}\n\n";

/// Render the "could not parse" report, optionally followed by the raw text.
///
/// Never fails and always yields non-empty output; when the bytes are
/// malformed under the detected encoding the dump is replaced by a message
/// naming that encoding.
pub fn render_fallback(
    raw: &[u8],
    detected: &'static Encoding,
    config: &RenderConfig,
) -> RenderOutput {
    let mut out = RenderOutput::new();
    out.push("Could not render the JSON. ", Role::Key);

    if config.show_raw_on_error {
        out.push("Here is its raw form:", Role::Key);
        out.push(RULE, Role::Special);

        let (text, _, had_errors) = detected.decode(raw);
        if had_errors {
            out.push(
                format!(
                    "Sorry, this JSON file uses an unsupported encoding: {}\n",
                    detected.name()
                ),
                Role::Scalar,
            );
        } else {
            out.push(format!("{text}\n"), Role::Scalar);
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use encoding_rs::UTF_8;

    #[test]
    fn test_banner_only_by_default() {
        let config = RenderConfig::default();
        let out = render_fallback(b"{oops", UTF_8, &config);
        assert_eq!(out.spans().len(), 1);
        assert_eq!(out.spans()[0].role, Role::Key);
        assert!(out.spans()[0].text.starts_with("Could not render"));
    }

    #[test]
    fn test_raw_dump_when_enabled() {
        let mut config = RenderConfig::default();
        config.show_raw_on_error = true;
        let out = render_fallback(b"{oops", UTF_8, &config);
        let roles: Vec<Role> = out.spans().iter().map(|s| s.role).collect();
        assert_eq!(
            roles,
            vec![Role::Key, Role::Key, Role::Special, Role::Scalar]
        );
        assert!(out.plain_text().contains("{oops"));
    }

    #[test]
    fn test_undecodable_bytes_name_the_encoding() {
        let mut config = RenderConfig::default();
        config.show_raw_on_error = true;
        // 0xFF 0xFE alone is a lone BOM; follow with an invalid UTF-8 run
        // and decode as UTF-8 to force a failure report.
        let out = render_fallback(&[0xC3, 0x28, 0xA0, 0xA1], UTF_8, &config);
        let text = out.plain_text();
        assert!(text.contains("unsupported encoding: UTF-8"));
    }

    #[test]
    fn test_never_empty() {
        let config = RenderConfig::default();
        assert!(!render_fallback(b"", UTF_8, &config).is_empty());
    }
}
