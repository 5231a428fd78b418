//! Configuration types and enums.

use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

// ---------------------------------------------------------------------------
// Boolean / null presentation
// ---------------------------------------------------------------------------

/// How JSON booleans and nulls are presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BoolNullStyle {
    /// Filled symbol glyphs (`✔` / `✖` / `⦸`).
    #[default]
    Glyph,
    /// Outline symbol glyphs (`✓` / `✗` / `∅`).
    Outline,
    /// Plain text (`TRUE` / `FALSE` / `NULL`).
    Text,
}

impl BoolNullStyle {
    /// The symbol-table variant suffix for this style, or `None` for text.
    pub fn variant_suffix(self) -> Option<&'static str> {
        match self {
            BoolNullStyle::Glyph => Some("1"),
            BoolNullStyle::Outline => Some("2"),
            BoolNullStyle::Text => None,
        }
    }
}

// ---------------------------------------------------------------------------
// Indent preference
// ---------------------------------------------------------------------------

/// Indent width preference.
///
/// Serialized as a plain number, or the reserved string `"auto"` which
/// selects column-aligned scalars with the container furniture hidden.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IndentMode {
    /// Column alignment: scalars are padded to a shared per-depth column
    /// and no brace/bracket furniture is drawn.
    Auto,
    /// Fixed indent of this many spacer characters per level, with furniture.
    Spaces(usize),
}

impl Default for IndentMode {
    fn default() -> Self {
        IndentMode::Spaces(2)
    }
}

impl Serialize for IndentMode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            IndentMode::Auto => serializer.serialize_str("auto"),
            IndentMode::Spaces(n) => serializer.serialize_u64(*n as u64),
        }
    }
}

impl<'de> Deserialize<'de> for IndentMode {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct IndentVisitor;

        impl Visitor<'_> for IndentVisitor {
            type Value = IndentMode;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("an indent width or the string \"auto\"")
            }

            fn visit_u64<E: de::Error>(self, v: u64) -> Result<IndentMode, E> {
                Ok(IndentMode::Spaces(v as usize))
            }

            fn visit_i64<E: de::Error>(self, v: i64) -> Result<IndentMode, E> {
                if v < 0 {
                    return Err(E::custom("indent width cannot be negative"));
                }
                Ok(IndentMode::Spaces(v as usize))
            }

            fn visit_str<E: de::Error>(self, v: &str) -> Result<IndentMode, E> {
                if v.eq_ignore_ascii_case("auto") {
                    Ok(IndentMode::Auto)
                } else {
                    Err(E::custom(format!("unknown indent setting: {v:?}")))
                }
            }
        }

        deserializer.deserialize_any(IndentVisitor)
    }
}

// ---------------------------------------------------------------------------
// Logging
// ---------------------------------------------------------------------------

/// Logging verbosity for the stderr log bridge.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// No logging
    #[default]
    Off,
    /// Errors only
    Error,
    /// Warnings and errors
    Warn,
    /// Informational messages
    Info,
    /// Debug messages
    Debug,
    /// Most verbose
    Trace,
}

impl LogLevel {
    /// Display name for UI and diagnostics.
    pub fn display_name(&self) -> &'static str {
        match self {
            LogLevel::Off => "Off",
            LogLevel::Error => "Error",
            LogLevel::Warn => "Warn",
            LogLevel::Info => "Info",
            LogLevel::Debug => "Debug",
            LogLevel::Trace => "Trace",
        }
    }

    /// Convert to the `log` crate's level filter.
    pub fn to_level_filter(self) -> log::LevelFilter {
        match self {
            LogLevel::Off => log::LevelFilter::Off,
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

impl std::str::FromStr for LogLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "off" => Ok(LogLevel::Off),
            "error" => Ok(LogLevel::Error),
            "warn" | "warning" => Ok(LogLevel::Warn),
            "info" => Ok(LogLevel::Info),
            "debug" => Ok(LogLevel::Debug),
            "trace" => Ok(LogLevel::Trace),
            other => Err(format!("unknown log level: {other:?}")),
        }
    }
}

// ---------------------------------------------------------------------------
// Per-role colors
// ---------------------------------------------------------------------------

/// Per-role foreground colors for one presentation mode, as `[r, g, b]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoleColors {
    /// Object keys and error-banner text.
    pub key: [u8; 3],
    /// Numbers and other plain scalar text.
    pub scalar: [u8; 3],
    /// String values.
    pub string: [u8; 3],
    /// Booleans, nulls, and decorative artifacts.
    pub special: [u8; 3],
    /// Brace/bracket furniture marks.
    pub mark: [u8; 3],
}

impl RoleColors {
    /// Default palette for dark backgrounds.
    pub fn dark_default() -> Self {
        Self {
            key: [148, 226, 213],
            scalar: [205, 214, 244],
            string: [166, 227, 161],
            special: [203, 166, 247],
            mark: [108, 112, 134],
        }
    }

    /// Default palette for light backgrounds (also used for thumbnails,
    /// which render dark-on-light).
    pub fn light_default() -> Self {
        Self {
            key: [70, 5, 16],
            scalar: [40, 40, 40],
            string: [0, 102, 0],
            special: [110, 40, 160],
            mark: [120, 113, 108],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_indent_mode_serde() {
        let spaces: IndentMode = serde_yaml_ng::from_str("4").unwrap();
        assert_eq!(spaces, IndentMode::Spaces(4));

        let auto: IndentMode = serde_yaml_ng::from_str("auto").unwrap();
        assert_eq!(auto, IndentMode::Auto);

        assert_eq!(serde_yaml_ng::to_string(&IndentMode::Spaces(2)).unwrap().trim(), "2");
        assert_eq!(serde_yaml_ng::to_string(&IndentMode::Auto).unwrap().trim(), "auto");
    }

    #[test]
    fn test_indent_mode_rejects_garbage() {
        let result: Result<IndentMode, _> = serde_yaml_ng::from_str("wide");
        assert!(result.is_err());
    }

    #[test]
    fn test_bool_null_style_variant_suffix() {
        assert_eq!(BoolNullStyle::Glyph.variant_suffix(), Some("1"));
        assert_eq!(BoolNullStyle::Outline.variant_suffix(), Some("2"));
        assert_eq!(BoolNullStyle::Text.variant_suffix(), None);
    }

    #[test]
    fn test_log_level_parsing() {
        assert_eq!("info".parse::<LogLevel>().unwrap(), LogLevel::Info);
        assert_eq!("WARN".parse::<LogLevel>().unwrap(), LogLevel::Warn);
        assert!("loud".parse::<LogLevel>().is_err());
        assert_eq!(LogLevel::Debug.to_level_filter(), log::LevelFilter::Debug);
    }
}
