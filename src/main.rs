use color_eyre::{Result, eyre::WrapErr};
use crossterm::{
    cursor::Show,
    event::{KeyboardEnhancementFlags, PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::{
    fs::OpenOptions,
    io::{self, stdout},
};

use space_invaders::{GameConfig, app::App};

/// The terminal belongs to the game, so diagnostics go to a file instead
const LOG_FILE: &str = "debug.log";

fn main() -> Result<()> {
    color_eyre::install()?;
    init_logging()?;

    let supports_keyboard_enhancement = matches!(
        crossterm::terminal::supports_keyboard_enhancement(),
        Ok(true)
    );
    log::info!("keyboard enhancement supported: {supports_keyboard_enhancement}");

    enable_raw_mode().wrap_err("failed to enable raw mode")?;

    // Teardown runs whatever happened during setup or the game itself
    let result = run_in_terminal(supports_keyboard_enhancement);
    let restored = restore_terminal(supports_keyboard_enhancement)
        .wrap_err("failed to restore the terminal");

    if let Err(err) = &result {
        log::error!("game loop failed: {err:?}");
    }
    result.and(restored)
}

fn run_in_terminal(supports_keyboard_enhancement: bool) -> Result<()> {
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen)?;

    // Enable keyboard enhancement AFTER entering alternate screen
    if supports_keyboard_enhancement {
        execute!(
            stdout,
            PushKeyboardEnhancementFlags(
                KeyboardEnhancementFlags::DISAMBIGUATE_ESCAPE_CODES
                    | KeyboardEnhancementFlags::REPORT_EVENT_TYPES
            )
        )?;
        log::debug!("keyboard enhancement flags pushed");
    }

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    App::new(
        GameConfig::default(),
        supports_keyboard_enhancement,
        GameConfig::seed_from_env(),
    )
    .run(&mut terminal)
}

/// Undo every terminal mode change. Each step runs even if an earlier one
/// failed; the first failure is reported.
fn restore_terminal(supports_keyboard_enhancement: bool) -> io::Result<()> {
    let mut stdout = stdout();
    first_error([
        if supports_keyboard_enhancement {
            execute!(stdout, PopKeyboardEnhancementFlags)
        } else {
            Ok(())
        },
        disable_raw_mode(),
        execute!(stdout, LeaveAlternateScreen, Show),
    ])
}

fn first_error(steps: impl IntoIterator<Item = io::Result<()>>) -> io::Result<()> {
    steps.into_iter().collect()
}

/// Route `log` output to the log file, honoring `RUST_LOG` (default `info`).
fn init_logging() -> Result<()> {
    let log_file = OpenOptions::new()
        .create(true)
        .write(true)
        .truncate(true)
        .open(LOG_FILE)
        .wrap_err_with(|| format!("failed to open {LOG_FILE}"))?;

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Pipe(Box::new(log_file)))
        .init();
    Ok(())
}
