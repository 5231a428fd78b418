//! Shared test helpers for preview renderer tests.
//!
//! Canonical factory functions used across the renderer test modules:
//! value-tree builders and renderer constructors for the two indent modes.

use par_jsonview_config::BoolNullStyle;

use super::renderer::{PreviewRenderer, RenderConfig};
use super::types::{RenderOutput, Role};
use super::value::Value;

/// Builds an object value from `(key, value)` pairs in the given order.
pub fn obj(members: &[(&str, Value)]) -> Value {
    Value::Object(
        members
            .iter()
            .map(|(k, v)| (k.to_string(), v.clone()))
            .collect(),
    )
}

/// Builds an array value.
pub fn arr(items: &[Value]) -> Value {
    Value::Array(items.to_vec())
}

/// String value shorthand.
pub fn s(text: &str) -> Value {
    Value::String(text.to_string())
}

/// Number value shorthand.
pub fn n(number: f64) -> Value {
    Value::Number(number)
}

/// Renderer with furniture shown (the default configuration).
pub fn furniture_renderer() -> PreviewRenderer {
    PreviewRenderer::new(RenderConfig::default())
}

/// Renderer in column-alignment mode (furniture hidden).
pub fn column_renderer() -> PreviewRenderer {
    PreviewRenderer::new(RenderConfig {
        show_furniture: false,
        ..Default::default()
    })
}

/// Renderer with plain-text booleans and nulls.
pub fn text_only_renderer() -> PreviewRenderer {
    PreviewRenderer::new(RenderConfig {
        bool_null_style: BoolNullStyle::Text,
        ..Default::default()
    })
}

/// All span texts in emission order.
pub fn texts(output: &RenderOutput) -> Vec<&str> {
    output.spans().iter().map(|s| s.text.as_str()).collect()
}

/// All span roles in emission order.
pub fn roles(output: &RenderOutput) -> Vec<Role> {
    output.spans().iter().map(|s| s.role).collect()
}
