use anyhow::{Context, Result};
use clap::Parser;
use ratatui::{backend::TermionBackend, Terminal};
use std::io::{self, IsTerminal, Write};
use std::path::{Path, PathBuf};
use std::time::Duration;
use termion::input::MouseTerminal;
use termion::raw::IntoRawMode;
use termion::screen::IntoAlternateScreen;

use kindleloc::app::App;
use kindleloc::config::Config;
use kindleloc::editor::view::BufferEditor;
use kindleloc::file::loader::{load_text_file, load_text_from_stdin};
use kindleloc::input::InputHandler;
use kindleloc::theme::get_builtin_theme;
use kindleloc::ui::UI;
use kindleloc::workspace::Workspace;

/// kindleloc - read plain text with e-reader style locations
#[derive(Parser)]
#[command(name = "kindleloc")]
#[command(version)]
#[command(about = "A terminal text viewer with e-reader style locations", long_about = None)]
struct Cli {
    /// Text file to open (omit to read from stdin if piped, or start with no document)
    file: Option<String>,

    /// Theme name (overrides the config file)
    #[arg(short, long)]
    theme: Option<String>,

    /// Write diagnostics to this file (overrides the config file)
    #[arg(long)]
    log_file: Option<PathBuf>,
}

/// Set up a panic hook that restores the terminal before displaying panic information.
///
/// This ensures that panics are visible even when the terminal is in raw mode with alternate screen.
fn setup_panic_hook() {
    use std::panic;

    let default_panic = panic::take_hook();

    panic::set_hook(Box::new(move |panic_info| {
        // Use stderr to avoid interfering with stdout pipes
        let _ = write!(io::stderr(), "{}", termion::screen::ToMainScreen);
        let _ = write!(io::stderr(), "{}", termion::cursor::Show);
        let _ = io::stderr().flush();

        default_panic(panic_info);
    }));
}

/// Sends `tracing` output to `path`. The terminal is in raw mode, so
/// diagnostics never go to stdout or stderr.
///
/// The filter comes from `KINDLELOC_LOG` (default `info`).
fn init_logging(path: &Path) -> Result<()> {
    use tracing_subscriber::EnvFilter;

    let file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("Failed to open log file {}", path.display()))?;

    let filter =
        EnvFilter::try_from_env("KINDLELOC_LOG").unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(false)
        .with_writer(std::sync::Mutex::new(file))
        .try_init()
        .map_err(|err| anyhow::anyhow!("Failed to install logger: {}", err))?;

    Ok(())
}

fn main() -> Result<()> {
    setup_panic_hook();

    let cli = Cli::parse();
    let config = Config::load();

    if let Some(path) = cli.log_file.as_ref().or(config.log_file.as_ref()) {
        init_logging(path)?;
    }

    // Load the document BEFORE terminal setup
    // (stdin might carry the text, so we need to read it before taking over the terminal)
    let (document, filename, stdin_was_piped) = if let Some(file_path) = cli.file {
        let buffer = load_text_file(&file_path)
            .with_context(|| format!("Failed to open {}", file_path))?;
        (Some(buffer), Some(file_path), false)
    } else if !io::stdin().is_terminal() {
        (Some(load_text_from_stdin()?), None, true)
    } else {
        (None, None, false)
    };

    // CLI theme overrides config theme
    let theme_name = cli.theme.unwrap_or_else(|| config.theme.clone());
    let theme = get_builtin_theme(&theme_name).unwrap_or_else(|| {
        eprintln!(
            "Warning: Theme '{}' not found, using default-dark",
            theme_name
        );
        tracing::warn!(theme = %theme_name, "unknown theme");
        kindleloc::theme::Theme {
            name: "default-dark".to_string(),
            colors: kindleloc::theme::colors::ThemeColors::default_dark(),
        }
    });

    let ui = UI::new(theme, config.show_line_numbers);
    let mut input_handler = if stdin_was_piped {
        InputHandler::new_with_tty()
            .context("Failed to open /dev/tty for keyboard input when stdin was piped")?
    } else {
        InputHandler::new()
    };

    let mut app = App::new(Workspace::new(config));
    if let Some(buffer) = document {
        app.open_document(BufferEditor::new(buffer), filename);
    }

    // Setup terminal
    let stdout = io::stdout()
        .into_raw_mode()
        .context("Failed to enable raw mode")?;
    let stdout = MouseTerminal::from(stdout);
    let stdout = stdout
        .into_alternate_screen()
        .context("Failed to enter alternate screen")?;

    let backend = TermionBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    let result = run_event_loop(&mut terminal, &ui, &mut input_handler, &mut app);

    app.shutdown();

    // Termion restores the terminal through Drop guards; the cursor still
    // needs to be shown again.
    write!(terminal.backend_mut(), "{}", termion::cursor::Show)?;
    terminal.backend_mut().flush()?;

    result
}

fn run_event_loop<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    ui: &UI,
    input_handler: &mut InputHandler,
    app: &mut App,
) -> Result<()> {
    loop {
        ui.render(terminal, app)?;

        match input_handler.poll_event(Duration::from_millis(100))? {
            Some(event) => {
                if input_handler.handle_event(event, app)? {
                    break;
                }
            }
            // input stream closed
            None => break,
        }
    }

    Ok(())
}
