//! JSON preview rendering framework.
//!
//! Converts a parsed JSON value tree into an ordered sequence of styled
//! text spans: indentation, column alignment, bracket furniture, symbol
//! substitution, and thumbnail truncation, all driven by a per-render
//! configuration.
//!
//! # Module Structure
//!
//! - [`value`] — canonical JSON value model and the `serde_json` boundary.
//! - [`columns`] — the column-width pre-pass (per-depth max key length).
//! - [`style`] — role-indexed presentation attributes.
//! - [`glyph`] — symbol-for-scalar substitution with text fallback.
//! - [`renderer`] — `PreviewRenderer`: the recursive span emitter.
//! - [`fallback`] — raw-text rendering for input that fails to parse.
//! - [`config_bridge`] — translates persisted preferences into a live
//!   [`renderer::RenderConfig`]; bridges configuration and runtime.
//! - [`types`] — shared data types: `Role`, `StyledSpan`, `RenderOutput`,
//!   `ColumnTable`.

pub mod columns;
pub mod config_bridge;
pub mod fallback;
pub mod glyph;
pub mod renderer;
pub mod style;
pub mod types;
pub mod value;

#[cfg(test)]
mod testing;

pub use columns::build_column_table;
pub use config_bridge::{BASE_INDENT, JSON_INDENT, MAX_INDENT, render_config};
pub use fallback::render_fallback;
pub use renderer::{PreviewRenderer, RenderConfig};
pub use style::{StyleDescriptor, StyleMap};
pub use types::{ColumnTable, RenderOutput, Role, StyledSpan};
pub use value::Value;

/// Errors surfaced at the input boundary of the preview pipeline.
///
/// Nothing in the rendering core itself is fatal; this covers the decoding
/// edge only. Parse failures are not errors at this boundary — they degrade
/// into [`render_fallback`] output.
#[derive(Debug, thiserror::Error)]
pub enum PreviewError {
    /// The input bytes are malformed under the detected encoding.
    #[error("unsupported text encoding: {0}")]
    UnsupportedEncoding(&'static str),
}
