//! Terminal UI application state.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::{Position as Point, Rect};
use tictactoe_core::{
    Announcement, BOARD_SIZE, Board, GameController, Outcome, Phase, Player, Position, Presenter,
    ResetMode,
};
use tracing::{debug, instrument};

use super::input::move_cursor;

/// Longest name accepted in the setup form.
pub const MAX_NAME_LEN: usize = 24;

/// What the controller last told the screen to show.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Screen {
    board: Board,
    announcement: Option<String>,
    game_view: bool,
    labels: Option<(String, String)>,
}

impl Screen {
    /// The board as last rendered.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The current announcement text.
    pub fn announcement(&self) -> Option<&str> {
        self.announcement.as_deref()
    }

    /// True when the game view is showing, false for the setup view.
    pub fn game_view(&self) -> bool {
        self.game_view
    }

    /// Player labels, once a game has started.
    pub fn labels(&self) -> Option<(&str, &str)> {
        self.labels
            .as_ref()
            .map(|(one, two)| (one.as_str(), two.as_str()))
    }
}

impl Presenter for Screen {
    fn render_board(&mut self, board: &Board) {
        self.board = board.clone();
    }

    fn announce(&mut self, announcement: &Announcement) {
        self.announcement = Some(announcement.to_string());
    }

    fn show_game_view(&mut self, visible: bool) {
        self.game_view = visible;
    }

    fn update_player_names(&mut self, one: &Player, two: &Player) {
        self.labels = Some((one.to_string(), two.to_string()));
    }
}

/// Which setup field receives typed characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NameField {
    /// Player one's name.
    One,
    /// Player two's name.
    Two,
}

impl NameField {
    fn toggle(self) -> Self {
        match self {
            NameField::One => NameField::Two,
            NameField::Two => NameField::One,
        }
    }
}

/// Application state: the controller plus form and cursor state.
#[derive(Debug)]
pub struct App {
    game: GameController<Screen>,
    names: [String; 2],
    focus: NameField,
    cursor: Position,
    cell_areas: [Rect; BOARD_SIZE],
    should_quit: bool,
}

impl App {
    /// Creates the app on the setup view, pre-filling any configured names.
    #[instrument]
    pub fn new(reset_mode: ResetMode, player_one: Option<&str>, player_two: Option<&str>) -> Self {
        Self {
            game: GameController::new(Screen::default(), reset_mode),
            names: [
                player_one.unwrap_or_default().to_string(),
                player_two.unwrap_or_default().to_string(),
            ],
            focus: NameField::One,
            cursor: Position::Center,
            cell_areas: [Rect::default(); BOARD_SIZE],
            should_quit: false,
        }
    }

    /// The controller.
    pub fn game(&self) -> &GameController<Screen> {
        &self.game
    }

    /// What the screen should show.
    pub fn screen(&self) -> &Screen {
        self.game.presenter()
    }

    /// Text in a setup field.
    pub fn name(&self, field: NameField) -> &str {
        match field {
            NameField::One => &self.names[0],
            NameField::Two => &self.names[1],
        }
    }

    /// The focused setup field.
    pub fn focus(&self) -> NameField {
        self.focus
    }

    /// The highlighted square.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// The line to highlight once someone has won.
    pub fn winning_line(&self) -> Option<[usize; 3]> {
        match self.game.phase() {
            Phase::Finished(Outcome::Won { line, .. }) => Some(line),
            _ => None,
        }
    }

    /// True once the user asked to leave.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Records where each square was drawn, for mouse hit-testing.
    pub fn set_cell_area(&mut self, index: usize, area: Rect) {
        if let Some(slot) = self.cell_areas.get_mut(index) {
            *slot = area;
        }
    }

    /// Handles a key press.
    #[instrument(skip(self), fields(game_view = self.screen().game_view()))]
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            self.should_quit = true;
            return;
        }

        if self.screen().game_view() {
            self.handle_game_key(key.code);
        } else {
            self.handle_setup_key(key.code);
        }
    }

    /// Handles a mouse event; a left click on a square plays it.
    #[instrument(skip(self))]
    pub fn handle_mouse(&mut self, mouse: MouseEvent) {
        if !self.screen().game_view() {
            return;
        }
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return;
        }

        let point = Point::new(mouse.column, mouse.row);
        let hit = self
            .cell_areas
            .iter()
            .position(|area| area.contains(point))
            .and_then(Position::from_index);
        if let Some(position) = hit {
            self.play(position);
        }
    }

    fn handle_setup_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Esc => self.should_quit = true,
            KeyCode::Tab | KeyCode::BackTab | KeyCode::Up | KeyCode::Down => {
                self.focus = self.focus.toggle();
            }
            KeyCode::Enter => {
                let [one, two] = &self.names;
                self.game.start_game(one, two);
                self.cursor = Position::Center;
            }
            KeyCode::Backspace => {
                self.focused_name().pop();
            }
            KeyCode::Char(c) => {
                let name = self.focused_name();
                if name.chars().count() < MAX_NAME_LEN {
                    name.push(c);
                }
            }
            _ => {}
        }
    }

    fn handle_game_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Esc | KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Up | KeyCode::Down | KeyCode::Left | KeyCode::Right => {
                self.cursor = move_cursor(self.cursor, code);
            }
            KeyCode::Enter | KeyCode::Char(' ') => self.play(self.cursor),
            KeyCode::Char('r') => self.game.reset_game(),
            KeyCode::Char(c) => {
                if let Some(position) = c
                    .to_digit(10)
                    .and_then(|d| Position::from_input(&d.to_string()))
                {
                    self.play(position);
                }
            }
            _ => {}
        }
    }

    fn play(&mut self, position: Position) {
        self.cursor = position;
        if let Err(err) = self.game.play_round(position.to_index()) {
            debug!(%err, "Illegal move");
        }
    }

    fn focused_name(&mut self) -> &mut String {
        match self.focus {
            NameField::One => &mut self.names[0],
            NameField::Two => &mut self.names[1],
        }
    }
}
