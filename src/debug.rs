//! Logging bridge for par-jsonview.
//!
//! Routes all `log::info!()` etc. to stderr with a monotonic timestamp,
//! keeping stdout clean for the rendered preview. The CLI `--log-level`
//! flag takes precedence, then `RUST_LOG`, and the default is off.

use std::sync::OnceLock;
use std::time::{SystemTime, UNIX_EPOCH};

use par_jsonview_config::LogLevel;

struct LogBridge;

impl log::Log for LogBridge {
    fn enabled(&self, metadata: &log::Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &log::Record) {
        if self.enabled(record.metadata()) {
            eprintln!(
                "[{}] [{}] {}: {}",
                timestamp(),
                record.level(),
                record.target(),
                record.args()
            );
        }
    }

    fn flush(&self) {}
}

fn timestamp() -> String {
    let now = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default();
    format!("{}.{:06}", now.as_secs(), now.subsec_micros())
}

static BRIDGE: OnceLock<LogBridge> = OnceLock::new();

/// Install the stderr log bridge.
///
/// Safe to call more than once; later calls only adjust the level filter.
pub fn init_log_bridge(cli_level: Option<LogLevel>) {
    let level = cli_level
        .or_else(|| {
            std::env::var("RUST_LOG")
                .ok()
                .and_then(|value| value.parse().ok())
        })
        .unwrap_or(LogLevel::Off);

    let bridge = BRIDGE.get_or_init(|| LogBridge);
    // set_logger fails when a logger is already installed (e.g. in tests);
    // the level filter still applies either way.
    let _ = log::set_logger(bridge);
    log::set_max_level(level.to_level_filter());
}
