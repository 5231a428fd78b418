//! Translates persisted preferences into a live render configuration.
//!
//! The preference file stores an indent width with a reserved `auto`
//! sentinel; the runtime wants the two orthogonal knobs the renderer
//! actually branches on (furniture on/off, numeric indent unit). Thumbnail
//! requests additionally force a tight fixed indent, plain-text booleans,
//! and the light palette, whatever the preferences say.

use par_jsonview_config::{BoolNullStyle, Config, IndentMode};

use super::renderer::RenderConfig;
use super::style::StyleMap;

/// Default indent unit per nesting level.
pub const JSON_INDENT: usize = 2;

/// Fixed pad between a key and its scalar value, and the shallow indent of
/// furniture opening a keyed container.
pub const BASE_INDENT: usize = 2;

/// Hard cap on spacer prefixes, matching the original renderer's
/// fixed-size space buffer.
pub const MAX_INDENT: usize = 48;

/// Build the spacer prefix for an indent width, clamped to [`MAX_INDENT`].
pub(crate) fn indent_prefix(indent: usize, spacer: char) -> String {
    spacer.to_string().repeat(indent.min(MAX_INDENT))
}

/// Resolve preferences into the configuration for one render request.
pub fn render_config(prefs: &Config, thumbnail: bool) -> RenderConfig {
    let (show_furniture, indent_unit) = match prefs.indent {
        IndentMode::Auto => (false, JSON_INDENT),
        IndentMode::Spaces(n) => (true, n),
    };

    // Thumbnails render dark-on-light at a tiny size: force the compact
    // indent and text booleans, and use the light palette.
    let indent_unit = if thumbnail { JSON_INDENT } else { indent_unit };
    let bool_null_style = if thumbnail {
        BoolNullStyle::Text
    } else {
        prefs.bool_null_style
    };
    let styles = if thumbnail || prefs.use_light_background {
        StyleMap::from_colors(&prefs.light_colors)
    } else {
        StyleMap::from_colors(&prefs.dark_colors)
    };

    RenderConfig {
        indent_unit,
        show_furniture,
        sort_keys: prefs.sort_keys,
        bool_null_style,
        is_thumbnail: thumbnail,
        thumbnail_line_budget: prefs.thumbnail_line_budget,
        spacer: prefs.spacer,
        debug_depth_tags: prefs.debug_depth_tags,
        show_raw_on_error: prefs.show_raw_on_error,
        styles,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_auto_indent_disables_furniture() {
        let mut prefs = Config::default();
        prefs.indent = IndentMode::Auto;
        let config = render_config(&prefs, false);
        assert!(!config.show_furniture);
        assert_eq!(config.indent_unit, JSON_INDENT);
    }

    #[test]
    fn test_numeric_indent_keeps_furniture() {
        let mut prefs = Config::default();
        prefs.indent = IndentMode::Spaces(4);
        let config = render_config(&prefs, false);
        assert!(config.show_furniture);
        assert_eq!(config.indent_unit, 4);
    }

    #[test]
    fn test_thumbnail_overrides() {
        let mut prefs = Config::default();
        prefs.indent = IndentMode::Spaces(8);
        prefs.bool_null_style = BoolNullStyle::Glyph;
        let config = render_config(&prefs, true);
        assert!(config.is_thumbnail);
        assert_eq!(config.indent_unit, JSON_INDENT);
        assert_eq!(config.bool_null_style, BoolNullStyle::Text);
        // Thumbnails always use the light palette.
        assert_eq!(config.styles, StyleMap::from_colors(&prefs.light_colors));
    }

    #[test]
    fn test_indent_prefix_clamps() {
        assert_eq!(indent_prefix(3, ' '), "   ");
        assert_eq!(indent_prefix(500, ' ').len(), MAX_INDENT);
        assert_eq!(indent_prefix(2, '·'), "··");
    }
}
