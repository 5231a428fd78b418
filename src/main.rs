use std::io::{self, IsTerminal, Read, Write};
use std::path::Path;

use anyhow::{Context, Result};

use par_jsonview::ansi::AnsiPresenter;
use par_jsonview::cli::{self, CliResult, RuntimeOptions};
use par_jsonview::preview::{PreviewRenderer, render_config};
use par_jsonview_config::Config;

fn main() -> Result<()> {
    // Process CLI arguments first (before logging init for cleaner output)
    let options = match cli::process_cli() {
        CliResult::Exit(code) => {
            if code == 0 {
                return Ok(());
            }
            std::process::exit(code);
        }
        CliResult::Continue(options) => options,
    };

    par_jsonview::debug::init_log_bridge(options.log_level);
    log::info!("Starting par-jsonview {}", par_jsonview::VERSION);

    // A broken config file should degrade to defaults, not block previews.
    let mut prefs = Config::load().unwrap_or_else(|err| {
        log::warn!("config load failed: {err:#}; using defaults");
        Config::default()
    });
    if options.light {
        prefs.use_light_background = true;
    }

    let raw = read_input(&options)?;

    let renderer = PreviewRenderer::new(render_config(&prefs, options.thumbnail));
    let output = renderer.render_bytes(&raw);

    let use_colors = !options.no_color
        && io::stdout().is_terminal()
        && std::env::var_os("NO_COLOR").is_none();
    let text = AnsiPresenter::new(&renderer.config().styles, use_colors).present(&output);

    let mut stdout = io::stdout().lock();
    stdout.write_all(text.as_bytes())?;
    Ok(())
}

fn read_input(options: &RuntimeOptions) -> Result<Vec<u8>> {
    match &options.file {
        Some(path) => read_file(path),
        None => {
            let mut buffer = Vec::new();
            io::stdin()
                .read_to_end(&mut buffer)
                .context("failed to read stdin")?;
            Ok(buffer)
        }
    }
}

fn read_file(path: &Path) -> Result<Vec<u8>> {
    std::fs::read(path).with_context(|| format!("failed to read {}", path.display()))
}
