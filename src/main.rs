use anyhow::Context;
use std::fs::File;
use std::path::Path;

use sk::cli;
use sk::config::SkConfig;
use sk::editor::Editor;
use sk::ui::Theme;
use sk::ui::renderer::{TerminalGuard, TuiRenderer};

/// Load settings, take over the terminal, and run the editing loop until Esc
/// or a fatal input error. The terminal is restored before any error is
/// reported.
fn main() -> anyhow::Result<()> {
    let cli_args = cli::parse_args();
    init_logging(cli_args.log_file.as_deref())?;

    log::info!("Loading settings");
    let mut config = SkConfig::load(cli_args.config.as_deref())?;
    if let Some(separator) = cli_args.line_separator {
        config.line_separator = separator;
    }
    log::debug!("line separator: {}", config.line_separator);

    let use_terminal_palette = cli_args.terminal_palette
        || std::env::var("SK_TERMINAL_PALETTE")
            .map(|v| v == "1" || v.to_lowercase() == "true")
            .unwrap_or(false);
    let theme = if use_terminal_palette {
        Theme::terminal_palette()
    } else {
        Theme::default()
    };

    log::info!("Initializing terminal");
    let guard = TerminalGuard::enter().context("failed to initialize terminal")?;
    let mut renderer = TuiRenderer::new().context("failed to create renderer")?;
    let (width, height) = renderer.size()?;

    let mut editor = Editor::new(&config, &theme, width, height);
    let result = editor.run(
        |root| renderer.draw(root),
        std::iter::repeat_with(crossterm::event::read),
    );

    drop(guard);
    log::logger().flush();
    result?;
    Ok(())
}

/// Info by default (set RUST_LOG to control verbosity). Logs go to
/// `log_file` when given, since the screen belongs to the editor.
fn init_logging(log_file: Option<&Path>) -> anyhow::Result<()> {
    let mut builder = env_logger::Builder::from_default_env();
    builder.filter_level(log::LevelFilter::Info);
    if let Some(path) = log_file {
        let file = File::create(path)
            .with_context(|| format!("failed to open log file {}", path.display()))?;
        builder.target(env_logger::Target::Pipe(Box::new(file)));
    }
    builder.init();
    Ok(())
}
