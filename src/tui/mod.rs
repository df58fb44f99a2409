//! Interactive terminal front end with a setup view and a game view.

mod app;
mod input;
mod ui;

pub use app::{App, NameField, Screen};

use anyhow::{Context, Result};
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{self, Stdout};
use tictactoe_core::ResetMode;
use tracing::{debug, info, instrument, warn};

use crate::config::GameConfig;

/// Restores the terminal when dropped, including on early return.
struct TerminalGuard {
    terminal: Terminal<CrosstermBackend<Stdout>>,
}

impl TerminalGuard {
    fn enter() -> Result<Self> {
        enable_raw_mode().context("Failed to enable raw mode")?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)
            .context("Failed to enter alternate screen")?;
        let terminal = Terminal::new(CrosstermBackend::new(stdout))
            .context("Failed to create terminal")?;
        Ok(Self { terminal })
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        debug!("Restoring terminal");
        if let Err(err) = disable_raw_mode() {
            warn!(%err, "Failed to disable raw mode");
        }
        if let Err(err) = execute!(
            self.terminal.backend_mut(),
            LeaveAlternateScreen,
            DisableMouseCapture
        ) {
            warn!(%err, "Failed to leave alternate screen");
        }
        if let Err(err) = self.terminal.show_cursor() {
            warn!(%err, "Failed to show cursor");
        }
    }
}

/// Runs the terminal UI until the user quits.
#[instrument(skip_all)]
pub fn run_tui(config: &GameConfig) -> Result<()> {
    info!("Starting terminal UI");

    let mut app = App::new(
        config.reset_mode_or(ResetMode::ReturnToSetup),
        config.player_one().as_deref(),
        config.player_two().as_deref(),
    );
    let mut guard = TerminalGuard::enter()?;

    while !app.should_quit() {
        guard
            .terminal
            .draw(|f| ui::draw(f, &mut app))
            .context("Failed to draw")?;

        match event::read().context("Failed to read terminal event")? {
            Event::Key(key) if key.kind == KeyEventKind::Press => app.handle_key(key),
            Event::Mouse(mouse) => app.handle_mouse(mouse),
            _ => {}
        }
    }

    info!("Terminal UI closed");
    Ok(())
}
