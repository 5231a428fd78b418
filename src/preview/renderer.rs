//! The recursive span renderer: the core of the preview pipeline.
//!
//! Two passes over the value tree — the column pre-pass, then `prettify`,
//! which emits styled spans while consulting the column table and the
//! thumbnail truncation budget. Every render invocation gets fresh mutable
//! state, so one renderer may serve concurrent previews.

use par_jsonview_config::BoolNullStyle;

use super::columns::build_column_table;
use super::config_bridge::{BASE_INDENT, indent_prefix};
use super::fallback::render_fallback;
use super::glyph::{GlyphResult, try_glyph};
use super::style::StyleMap;
use super::types::{ColumnTable, RenderOutput, RenderState, Role};
use super::value::Value;
use crate::encoding;

/// Sentinel strings older hosts substituted for boolean literals before
/// handing text to a loosely-typed decoder. The value model has a real
/// boolean variant, but inputs carrying the markers still render as booleans.
const SENTINEL_TRUE: &str = "PREVIEW-JSON-TRUE";
const SENTINEL_FALSE: &str = "PREVIEW-JSON-FALSE";

/// Immutable configuration for one render request.
///
/// Bridged from persisted preferences by
/// [`crate::preview::config_bridge::render_config`]; read-only during a
/// render.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderConfig {
    /// Spacer characters per nesting level when furniture is shown.
    pub indent_unit: usize,
    /// Draw `{` `}` `[` `]` marks around containers; when off, scalars are
    /// column-aligned instead.
    pub show_furniture: bool,
    /// Sort object keys case-insensitively instead of document order.
    pub sort_keys: bool,
    /// Boolean/null presentation style.
    pub bool_null_style: BoolNullStyle,
    /// Thumbnail mode: depth-derived indents, suppressed glyphs, and the
    /// hard line budget.
    pub is_thumbnail: bool,
    /// Maximum `prettify` entries before thumbnail output is cut off.
    pub thumbnail_line_budget: usize,
    /// Character used to draw indentation.
    pub spacer: char,
    /// Prefix keys and scalars with their nesting depth (`2-value`).
    pub debug_depth_tags: bool,
    /// Dump the raw text after the error banner when parsing fails.
    pub show_raw_on_error: bool,
    /// Resolved role → presentation attribute table.
    pub styles: StyleMap,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            indent_unit: 2,
            show_furniture: true,
            sort_keys: false,
            bool_null_style: BoolNullStyle::default(),
            is_thumbnail: false,
            thumbnail_line_budget: 38,
            spacer: ' ',
            debug_depth_tags: false,
            show_raw_on_error: false,
            styles: StyleMap::dark_default(),
        }
    }
}

/// Renders parsed JSON values into ordered span sequences.
pub struct PreviewRenderer {
    config: RenderConfig,
}

impl PreviewRenderer {
    /// Create a renderer with the given configuration.
    pub fn new(config: RenderConfig) -> Self {
        Self { config }
    }

    /// The active configuration.
    pub fn config(&self) -> &RenderConfig {
        &self.config
    }

    /// Render a parsed value tree into an ordered span sequence.
    ///
    /// Builds the column table and per-invocation state fresh, so this may
    /// be called concurrently from independent preview requests.
    pub fn render(&self, root: &Value) -> RenderOutput {
        let columns = build_column_table(root);
        let mut state = RenderState::default();
        self.prettify(root, 0, 0, false, &columns, &mut state)
    }

    /// Decode, parse, and render raw bytes.
    ///
    /// Never fails: undecodable or unparseable input degrades into the raw
    /// fallback rendering.
    pub fn render_bytes(&self, raw: &[u8]) -> RenderOutput {
        let detected = encoding::sniff(raw);
        let Ok(text) = encoding::decode(raw, detected) else {
            log::warn!("input is not valid {}, falling back", detected.name());
            return render_fallback(raw, detected, &self.config);
        };

        match Value::parse(&text) {
            Ok(value) => {
                let mut output = self.render(&value);
                // Just in case: an empty render still yields visible output.
                if output.is_empty() {
                    output.push("Could not render the JSON.\n", Role::Key);
                }
                output
            }
            Err(err) => {
                log::warn!("JSON parse failed: {err}");
                render_fallback(raw, detected, &self.config)
            }
        }
    }

    /// Render one unit of JSON.
    ///
    /// `depth` is the nesting level, `indent` the spacer width requested by
    /// the caller (ignored in thumbnail mode), and `parent_is_container`
    /// marks values that sit directly after an object key on the same line.
    fn prettify(
        &self,
        value: &Value,
        depth: usize,
        indent: usize,
        parent_is_container: bool,
        columns: &ColumnTable,
        state: &mut RenderState,
    ) -> RenderOutput {
        let cfg = &self.config;
        let mut out = RenderOutput::new();

        // Hard thumbnail cutoff: once the budget is spent, drop the node
        // entirely. Small fixed-size previews tolerate the truncated tail.
        state.lines_emitted += 1;
        if cfg.is_thumbnail && state.lines_emitted > cfg.thumbnail_line_budget {
            return out;
        }

        // Thumbnails ignore the caller-supplied indent and re-derive it
        // from depth alone.
        let indent = if cfg.is_thumbnail {
            depth * BASE_INDENT
        } else {
            indent
        };

        match value {
            Value::Null => {
                if cfg.bool_null_style != BoolNullStyle::Text {
                    if let GlyphResult::Glyph(span) = try_glyph(indent, "null", cfg) {
                        out.push_span(span);
                        return out;
                    }
                }
                let text = format!("{}\n", self.scalar_text(depth, "NULL"));
                out.push(self.indented(&text, indent), Role::Special);
            }

            Value::Bool(b) => {
                out.append(self.bool_output(*b, depth, indent));
            }

            Value::Number(n) => {
                let text = format!("{}\n", self.scalar_text(depth, &n.to_string()));
                out.push(self.indented(&text, indent), Role::Scalar);
            }

            Value::String(s) => match sentinel_bool(s) {
                // Boolean markers from older hosts render exactly like the
                // native boolean, quotes consumed.
                Some(b) => out.append(self.bool_output(b, depth, indent)),
                None => {
                    let body = self.scalar_text(depth, s);
                    let text = if cfg.show_furniture {
                        format!("\u{201C}{body}\u{201D}\n")
                    } else {
                        format!("{body}\n")
                    };
                    out.push(self.indented(&text, indent), Role::StringValue);
                }
            },

            Value::Object(members) => {
                if cfg.show_furniture {
                    // A keyed object opens right after its key, at a fixed
                    // shallow inset; otherwise at the container indent.
                    let mark_indent = if parent_is_container {
                        BASE_INDENT
                    } else {
                        indent
                    };
                    out.push(self.indented("{\n", mark_indent), Role::MarkStart);
                } else if depth > 0 {
                    out.push("\n", Role::Scalar);
                }

                let mut order: Vec<usize> = (0..members.len()).collect();
                if cfg.sort_keys {
                    order.sort_by(|&a, &b| {
                        members[a].0.to_lowercase().cmp(&members[b].0.to_lowercase())
                    });
                }

                let key_col = columns.width_at(depth);
                for idx in order {
                    let (key, child) = &members[idx];
                    let key_indent = if cfg.show_furniture {
                        indent + cfg.indent_unit
                    } else {
                        indent
                    };
                    out.push(
                        self.indented(&self.scalar_text(depth, key), key_indent),
                        Role::Key,
                    );

                    if child.is_container() {
                        let next_indent = indent
                            + key_col
                            + BASE_INDENT
                            + if cfg.show_furniture { cfg.indent_unit } else { 0 };
                        out.append(self.prettify(child, depth + 1, next_indent, true, columns, state));
                    } else {
                        // Scalars stay on the key's line; in column mode the
                        // pad right-aligns values across siblings using the
                        // shared per-depth key column.
                        let pad = if cfg.show_furniture {
                            BASE_INDENT
                        } else {
                            key_col.saturating_sub(key.chars().count()) + BASE_INDENT
                        };
                        out.append(self.prettify(child, depth, pad, false, columns, state));
                    }
                }

                if cfg.show_furniture {
                    out.push(self.indented("}\n", indent), Role::MarkEnd);
                } else {
                    out.push("\n", Role::Scalar);
                }
            }

            Value::Array(items) => {
                if cfg.show_furniture {
                    let mark_indent = if parent_is_container {
                        BASE_INDENT
                    } else {
                        indent
                    };
                    out.push(self.indented("[\n", mark_indent), Role::MarkStart);
                } else if depth > 0 {
                    out.push("\n", Role::Scalar);
                }

                let last = items.len().saturating_sub(1);
                for (i, item) in items.iter().enumerate() {
                    if item.is_container() {
                        out.append(self.prettify(item, depth + 1, indent, false, columns, state));
                    } else {
                        let elem_indent = if cfg.show_furniture {
                            indent + cfg.indent_unit
                        } else {
                            indent
                        };
                        out.append(self.prettify(item, depth, elem_indent, false, columns, state));
                    }
                    if !cfg.show_furniture && i != last {
                        out.push("\n", Role::Scalar);
                    }
                }

                if cfg.show_furniture {
                    // The closing bracket outdents relative to the nested
                    // column it closes.
                    let close_indent = if depth > 0 {
                        indent.saturating_sub(columns.width_at(depth - 1))
                    } else {
                        indent
                    };
                    out.push(self.indented("]\n", close_indent), Role::MarkEnd);
                } else {
                    out.push("\n", Role::Scalar);
                }
            }
        }

        out
    }

    /// Boolean rendering shared by the native variant and the sentinel path:
    /// glyph when allowed and available, `TRUE`/`FALSE` text otherwise.
    fn bool_output(&self, b: bool, depth: usize, indent: usize) -> RenderOutput {
        let mut out = RenderOutput::new();
        if self.config.bool_null_style != BoolNullStyle::Text {
            let name = if b { "true" } else { "false" };
            if let GlyphResult::Glyph(span) = try_glyph(indent, name, &self.config) {
                out.push_span(span);
                return out;
            }
        }
        let word = if b { "TRUE" } else { "FALSE" };
        let text = format!("{}\n", self.scalar_text(depth, word));
        out.push(self.indented(&text, indent), Role::Special);
        out
    }

    /// Prefix `text` with `indent` spacer characters, trimming incidental
    /// surrounding spaces first (trailing newlines survive).
    fn indented(&self, text: &str, indent: usize) -> String {
        let trimmed = text.trim_matches([' ', '\t']);
        format!("{}{trimmed}", indent_prefix(indent, self.config.spacer))
    }

    /// Scalar text, optionally tagged with its depth for render debugging.
    fn scalar_text(&self, depth: usize, source: &str) -> String {
        if self.config.debug_depth_tags {
            format!("{depth}-{source}")
        } else {
            source.to_string()
        }
    }
}

/// Recognize the reserved boolean marker strings.
fn sentinel_bool(s: &str) -> Option<bool> {
    match s {
        SENTINEL_TRUE => Some(true),
        SENTINEL_FALSE => Some(false),
        _ => None,
    }
}
