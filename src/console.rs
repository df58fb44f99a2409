//! Console front end: prints the board and reads one command per line.

use anyhow::{Context, Result};
use std::io::{self, BufRead, Write};
use tictactoe_core::{Announcement, Board, GameController, Position, Presenter, ResetMode};
use tracing::{debug, info, instrument, warn};

use crate::config::GameConfig;

/// Presenter that writes to a text stream.
///
/// [`Presenter`] methods cannot fail, so the first write error is kept and
/// surfaced by [`ConsolePresenter::check`].
#[derive(Debug)]
pub struct ConsolePresenter<W> {
    output: W,
    error: Option<io::Error>,
}

impl<W: Write> ConsolePresenter<W> {
    /// Wraps an output stream.
    pub fn new(output: W) -> Self {
        Self {
            output,
            error: None,
        }
    }

    /// Writes a line that is not a game announcement.
    pub fn note(&mut self, message: &str) {
        self.write(format_args!("{}\n", message));
    }

    /// Writes a prompt without a trailing newline.
    pub fn prompt(&mut self, prompt: &str) {
        self.write(format_args!("{}", prompt));
        if self.error.is_none() {
            self.error = self.output.flush().err();
        }
    }

    /// Returns the first write error since the last check.
    pub fn check(&mut self) -> io::Result<()> {
        match self.error.take() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }

    /// Consumes the presenter and returns the stream.
    pub fn into_inner(self) -> W {
        self.output
    }

    fn write(&mut self, args: std::fmt::Arguments<'_>) {
        if self.error.is_some() {
            return;
        }
        if let Err(err) = self.output.write_fmt(args) {
            warn!(%err, "Console write failed");
            self.error = Some(err);
        }
    }
}

impl<W: Write> Presenter for ConsolePresenter<W> {
    fn render_board(&mut self, board: &Board) {
        self.write(format_args!("\n{}\n\n", board));
    }

    fn announce(&mut self, announcement: &Announcement) {
        self.write(format_args!("{}\n", announcement));
    }
}

/// One line of console input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConsoleCommand {
    /// Play a square.
    Play(Position),
    /// Reset the board.
    Reset,
    /// Leave the game.
    Quit,
    /// Blank line.
    Empty,
    /// Anything else.
    Unknown(String),
}

impl ConsoleCommand {
    /// Parses a line of input.
    #[instrument]
    pub fn parse(line: &str) -> Self {
        let trimmed = line.trim();
        match trimmed.to_ascii_lowercase().as_str() {
            "" => ConsoleCommand::Empty,
            "r" | "reset" => ConsoleCommand::Reset,
            "q" | "quit" | "exit" => ConsoleCommand::Quit,
            _ => match Position::from_input(trimmed) {
                Some(position) => ConsoleCommand::Play(position),
                None => ConsoleCommand::Unknown(trimmed.to_string()),
            },
        }
    }
}

/// Plays games on `input`/`output` until the user quits or input ends.
///
/// A reset keeps both players ([`ResetMode::Rematch`]) unless the config says
/// otherwise; returning to setup asks for names again.
#[instrument(skip_all)]
pub fn run_console<R: BufRead, W: Write>(mut input: R, output: W, config: &GameConfig) -> Result<W> {
    let mode = config.reset_mode_or(ResetMode::Rematch);
    let mut game = GameController::new(ConsolePresenter::new(output), mode);

    game.presenter_mut().note("Tic-tac-toe");
    if !start_from_setup(&mut game, &mut input, config)? {
        return Ok(game.into_presenter().into_inner());
    }

    loop {
        if game.is_over() {
            game.presenter_mut().prompt("Play again? [y/N] ");
            game.presenter_mut().check().context("Failed to write prompt")?;
            match read_line(&mut input)? {
                Some(answer) if answer.trim().eq_ignore_ascii_case("y") => {
                    if !reset(&mut game, &mut input, config)? {
                        break;
                    }
                    continue;
                }
                _ => break,
            }
        }

        game.presenter_mut().prompt("Square (1-9), r to reset, q to quit: ");
        game.presenter_mut().check().context("Failed to write prompt")?;

        let Some(line) = read_line(&mut input)? else {
            debug!("End of input");
            break;
        };

        match ConsoleCommand::parse(&line) {
            ConsoleCommand::Play(position) => {
                if let Err(err) = game.play_round(position.to_index()) {
                    debug!(%err, "Illegal move");
                }
            }
            ConsoleCommand::Reset => {
                if !reset(&mut game, &mut input, config)? {
                    break;
                }
            }
            ConsoleCommand::Quit => break,
            ConsoleCommand::Empty => {}
            ConsoleCommand::Unknown(text) => {
                game.presenter_mut().note(&format!("Unrecognised input: {}", text));
            }
        }
        game.presenter_mut().check().context("Failed to write to console")?;
    }

    info!("Console session finished");
    game.presenter_mut().note("Goodbye!");
    let mut presenter = game.into_presenter();
    presenter.check().context("Failed to write to console")?;
    Ok(presenter.into_inner())
}

/// Resets, and asks for names again if the reset went back to setup.
///
/// Returns `false` if input ended while asking for names.
fn reset<R: BufRead, W: Write>(
    game: &mut GameController<ConsolePresenter<W>>,
    input: &mut R,
    config: &GameConfig,
) -> Result<bool> {
    game.reset_game();
    if game.phase() == tictactoe_core::Phase::NotStarted {
        return start_from_setup(game, input, config);
    }
    Ok(true)
}

/// Collects both names and starts a game. Returns `false` on end of input.
fn start_from_setup<R: BufRead, W: Write>(
    game: &mut GameController<ConsolePresenter<W>>,
    input: &mut R,
    config: &GameConfig,
) -> Result<bool> {
    let Some(one) = player_name(game, input, config.player_one(), "Player 1 name (X): ")? else {
        return Ok(false);
    };
    let Some(two) = player_name(game, input, config.player_two(), "Player 2 name (O): ")? else {
        return Ok(false);
    };
    game.start_game(&one, &two);
    game.presenter_mut().check().context("Failed to write to console")?;
    Ok(true)
}

fn player_name<R: BufRead, W: Write>(
    game: &mut GameController<ConsolePresenter<W>>,
    input: &mut R,
    configured: &Option<String>,
    prompt: &str,
) -> Result<Option<String>> {
    if let Some(name) = configured {
        return Ok(Some(name.clone()));
    }
    game.presenter_mut().prompt(prompt);
    game.presenter_mut().check().context("Failed to write prompt")?;
    read_line(input)
}

fn read_line<R: BufRead>(input: &mut R) -> Result<Option<String>> {
    let mut line = String::new();
    let read = input.read_line(&mut line).context("Failed to read input")?;
    Ok((read > 0).then_some(line))
}
