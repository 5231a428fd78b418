//! Symbol substitution for boolean and null scalars.
//!
//! Looks up a presentation symbol by `"<name>_<variant>"`; a hit yields a
//! ready-made span, a miss (or thumbnail mode, where symbols are always
//! suppressed to save space) tells the caller to emit the text form.

use super::config_bridge::indent_prefix;
use super::renderer::RenderConfig;
use super::types::{Role, StyledSpan};

/// Outcome of a glyph lookup, resolved once per scalar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum GlyphResult {
    /// The substituted span, spacer prefix and trailing newline included.
    Glyph(StyledSpan),
    /// No symbol available; the caller falls back to text.
    Fallback,
}

/// The symbol table, keyed by canonical name and style-variant suffix.
fn lookup(name_with_variant: &str) -> Option<&'static str> {
    match name_with_variant {
        "true_1" => Some("✔"),
        "false_1" => Some("✖"),
        "null_1" => Some("⦸"),
        "true_2" => Some("✓"),
        "false_2" => Some("✗"),
        "null_2" => Some("∅"),
        _ => None,
    }
}

/// Attempt symbol substitution for the canonical scalar `name`
/// (`"true"`, `"false"`, or `"null"`).
pub(crate) fn try_glyph(indent: usize, name: &str, config: &RenderConfig) -> GlyphResult {
    if config.is_thumbnail {
        return GlyphResult::Fallback;
    }
    let Some(variant) = config.bool_null_style.variant_suffix() else {
        return GlyphResult::Fallback;
    };
    match lookup(&format!("{name}_{variant}")) {
        Some(symbol) => GlyphResult::Glyph(StyledSpan {
            text: format!("{}{symbol}\n", indent_prefix(indent, config.spacer)),
            role: Role::Special,
        }),
        None => GlyphResult::Fallback,
    }
}
