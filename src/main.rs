use anyhow::{Context, Result};
use std::fs::File;
use tailpad::cli;
use tailpad::config::EditorConfig;
use tailpad::editor::Editor;
use tailpad::input::CrosstermInput;
use tailpad::terminal::{self, TerminalSession};
use tailpad::ui::TuiRenderer;
use tailpad::{app, persistence};

/// Application entry point: parse the optional file argument, load config and the
/// document, then run the editor inside a raw-mode terminal session.
///
/// Startup I/O errors are reported before the terminal is touched. Errors inside the loop
/// (saving included) first drop the session, so the terminal is restored before `main`
/// reports the error and exits non-zero.
fn main() -> Result<()> {
    let cli_args = cli::parse_args();

    init_logging();

    let config = EditorConfig::load()?;
    let document = persistence::open(cli_args.file.as_deref(), &config)?;
    let mut editor = Editor::from_document(document);

    // Enable raw mode and enter alternate screen
    terminal::install_panic_hook();
    let _session = TerminalSession::enter().context("failed to set up terminal")?;
    let mut renderer = TuiRenderer::new().context("failed to create renderer")?;
    let mut input = CrosstermInput;

    app::run(&mut editor, &config, &mut input, &mut renderer)?;
    Ok(())
}

/// Logging is off unless `RUST_LOG` is set; records then go to a file because the
/// terminal is busy showing the editor.
fn init_logging() {
    let mut builder = env_logger::Builder::new();
    builder
        .filter_level(log::LevelFilter::Off)
        .parse_default_env();

    if std::env::var_os("RUST_LOG").is_some() {
        let path = std::env::temp_dir().join("tailpad.log");
        match File::create(&path) {
            Ok(file) => {
                builder.target(env_logger::Target::Pipe(Box::new(file)));
            }
            Err(e) => eprintln!("cannot open log file '{}': {}", path.display(), e),
        }
    }

    builder.init();
}
