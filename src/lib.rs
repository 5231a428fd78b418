// Library exports for testing and use by the CLI binary.

/// Application version (root crate version, for use by sub-crates).
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod ansi;
pub mod cli;
pub mod debug;
pub mod encoding;
pub mod preview;
