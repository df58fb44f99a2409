//! Setup and game view rendering.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph},
};
use tictactoe_core::{Board, Marker, Square};

use super::app::{App, NameField};

/// Draws whichever view the controller last selected.
pub fn draw(f: &mut Frame, app: &mut App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(13),
            Constraint::Length(3),
            Constraint::Length(1),
        ])
        .split(f.area());

    let title = Paragraph::new("Tic-tac-toe")
        .style(Style::default().add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(title, chunks[0]);

    if app.screen().game_view() {
        render_game(f, chunks[1], app);
    } else {
        render_setup(f, chunks[1], app);
    }

    let announcement = Paragraph::new(app.screen().announcement().unwrap_or_default())
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::Yellow))
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(announcement, chunks[2]);

    let help = if app.screen().game_view() {
        "Arrows: move | Enter/Space/click: play | 1-9: play square | r: reset | q: quit"
    } else {
        "Tab: switch field | Enter: start game | Esc: quit"
    };
    let help = Paragraph::new(help)
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    f.render_widget(help, chunks[3]);
}

fn render_setup(f: &mut Frame, area: Rect, app: &App) {
    let form = center_rect(area, 40, 8);
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
        ])
        .split(form);

    render_name_field(f, rows[0], app, NameField::One, "Player 1 (X)");
    render_name_field(f, rows[2], app, NameField::Two, "Player 2 (O)");
}

fn render_name_field(f: &mut Frame, area: Rect, app: &App, field: NameField, title: &str) {
    let focused = app.focus() == field;
    let border = if focused {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    let text = if focused {
        format!("{}_", app.name(field))
    } else {
        app.name(field).to_string()
    };

    let input = Paragraph::new(text).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(border)
            .title(title.to_string()),
    );
    f.render_widget(input, area);
}

fn render_game(f: &mut Frame, area: Rect, app: &mut App) {
    let sections = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(2), Constraint::Min(11)])
        .split(area);

    if let Some((one, two)) = app.screen().labels() {
        let header = Paragraph::new(Line::from(format!("{}   vs   {}", one, two)))
            .alignment(Alignment::Center);
        f.render_widget(header, sections[0]);
    }

    render_board(f, sections[1], app);
}

/// Renders the tic-tac-toe board.
fn render_board(f: &mut Frame, area: Rect, app: &mut App) {
    let board_area = center_rect(area, 40, 11);
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
        ])
        .split(board_area);

    render_row(f, rows[0], app, 0);
    render_separator(f, rows[1]);
    render_row(f, rows[2], app, 3);
    render_separator(f, rows[3]);
    render_row(f, rows[4], app, 6);
}

fn render_row(f: &mut Frame, area: Rect, app: &mut App, start: usize) {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(33),
            Constraint::Length(1),
            Constraint::Percentage(33),
            Constraint::Length(1),
            Constraint::Percentage(34),
        ])
        .split(area);

    render_square(f, cols[0], app, start);
    render_vertical_sep(f, cols[1]);
    render_square(f, cols[2], app, start + 1);
    render_vertical_sep(f, cols[3]);
    render_square(f, cols[4], app, start + 2);
}

fn render_square(f: &mut Frame, area: Rect, app: &mut App, pos: usize) {
    app.set_cell_area(pos, area);

    let board: &Board = app.screen().board();
    let (text, mut style) = match board.square(pos).unwrap_or_default() {
        Square::Empty => (
            format!("{}", pos + 1),
            Style::default().fg(Color::DarkGray),
        ),
        Square::Occupied(Marker::X) => (
            "X".to_string(),
            Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
        ),
        Square::Occupied(Marker::O) => (
            "O".to_string(),
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ),
    };

    if app.winning_line().is_some_and(|line| line.contains(&pos)) {
        style = style.bg(Color::Green);
    } else if app.cursor().to_index() == pos && !app.game().is_over() {
        style = style.add_modifier(Modifier::REVERSED);
    }

    // Vertically centre the symbol in the 3-line cell.
    let paragraph = Paragraph::new(vec![Line::default(), Line::from(text)])
        .style(style)
        .alignment(Alignment::Center);
    f.render_widget(paragraph, area);
}

fn render_separator(f: &mut Frame, area: Rect) {
    let sep = Paragraph::new("─".repeat(area.width as usize))
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(sep, area);
}

fn render_vertical_sep(f: &mut Frame, area: Rect) {
    let sep = Paragraph::new(vec![Line::from("│"), Line::from("│"), Line::from("│")])
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    f.render_widget(sep, area);
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let horizontal = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length((area.width.saturating_sub(width)) / 2),
            Constraint::Length(width),
            Constraint::Length((area.width.saturating_sub(width)) / 2),
        ])
        .split(area);
    Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length((area.height.saturating_sub(height)) / 2),
            Constraint::Length(height),
            Constraint::Length((area.height.saturating_sub(height)) / 2),
        ])
        .split(horizontal[1])[1]
}
