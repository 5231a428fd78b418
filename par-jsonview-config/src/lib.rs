//! Configuration system for the par-jsonview JSON previewer.
//!
//! This crate provides configuration loading, saving, and default values
//! for the preview renderer. It includes:
//!
//! - Rendering preferences (indent mode, key sorting, boolean/null style)
//! - Per-role color overrides for the dark and light presentation modes
//! - XDG-compliant config path helpers and atomic YAML persistence

pub mod config;
pub mod types;

// Re-export main types for convenience
pub use config::Config;
pub use types::{BoolNullStyle, IndentMode, LogLevel, RoleColors};
