//! Tests for the game controller lifecycle.

use tictactoe_core::{
    Announcement, Board, GameController, Marker, MoveError, Outcome, Phase, PresenterEvent,
    ResetMode, RoundOutcome, Seat, Square, Transcript,
};

fn new_game(mode: ResetMode) -> GameController<Transcript> {
    let mut game = GameController::new(Transcript::new(), mode);
    game.start_game("", "");
    game
}

fn play_all(game: &mut GameController<Transcript>, moves: &[usize]) -> Vec<RoundOutcome> {
    moves
        .iter()
        .map(|&index| game.play_round(index).expect("Valid move"))
        .collect()
}

#[test]
fn test_start_game_defaults_names() {
    let game = new_game(ResetMode::ReturnToSetup);
    let [one, two] = game.players().expect("Players assigned");

    assert_eq!(one.name(), "Player 1");
    assert_eq!(one.marker(), Marker::X);
    assert_eq!(two.name(), "Player 2");
    assert_eq!(two.marker(), Marker::O);
    assert_eq!(game.phase(), Phase::InProgress);
    assert_eq!(game.active_player(), Some(one));
}

#[test]
fn test_turns_alternate_strictly() {
    let mut game = new_game(ResetMode::ReturnToSetup);

    assert_eq!(game.play_round(4), Ok(RoundOutcome::Continue { next: Seat::Two }));
    assert_eq!(game.state().active(), Seat::Two);
    assert_eq!(
        game.presenter().last_announcement(),
        Some(&Announcement::Turn("Player 2".into()))
    );

    assert_eq!(game.play_round(0), Ok(RoundOutcome::Continue { next: Seat::One }));
    assert_eq!(game.state().active(), Seat::One);
    assert_eq!(game.board().square(4), Some(Square::Occupied(Marker::X)));
    assert_eq!(game.board().square(0), Some(Square::Occupied(Marker::O)));
}

#[test]
fn test_top_row_win() {
    let mut game = GameController::new(Transcript::new(), ResetMode::ReturnToSetup);
    game.start_game("Ada", "Grace");

    let outcomes = play_all(&mut game, &[0, 3, 1, 4, 2]);

    assert_eq!(
        outcomes.last(),
        Some(&RoundOutcome::Won {
            winner: Seat::One,
            line: [0, 1, 2]
        })
    );
    assert_eq!(
        game.phase(),
        Phase::Finished(Outcome::Won {
            seat: Seat::One,
            line: [0, 1, 2]
        })
    );
    assert!(game.is_over());
    assert_eq!(game.active_player().map(|p| p.marker()), Some(Marker::X));
    assert_eq!(
        game.presenter().last_announcement(),
        Some(&Announcement::Winner("Ada".into()))
    );
}

#[test]
fn test_legal_move_renders_then_announces() {
    let mut game = GameController::new(Transcript::new(), ResetMode::ReturnToSetup);
    game.start_game("Ada", "Grace");
    game.presenter_mut().clear();

    game.play_round(0).unwrap();

    let mut expected = Board::new();
    expected.set_move(0, Marker::X).unwrap();
    assert_eq!(
        game.presenter().events(),
        &[
            PresenterEvent::BoardRendered(expected),
            PresenterEvent::Announced(Announcement::Turn("Grace".into())),
        ]
    );
}

#[test]
fn test_winning_move_renders_then_announces_winner() {
    let mut game = GameController::new(Transcript::new(), ResetMode::ReturnToSetup);
    game.start_game("Ada", "Grace");
    play_all(&mut game, &[0, 3, 1, 4]);
    game.presenter_mut().clear();

    game.play_round(2).unwrap();

    assert_eq!(
        game.presenter().events(),
        &[
            PresenterEvent::BoardRendered(game.board().clone()),
            PresenterEvent::Announced(Announcement::Winner("Ada".into())),
        ]
    );
    assert_eq!(game.presenter().last_board(), Some(game.board()));
}

#[test]
fn test_full_board_without_line_is_tie() {
    let mut game = new_game(ResetMode::ReturnToSetup);

    // X@0 O@1 X@2 X@3 O@4 O@5 O@6 X@7 X@8, played in turn order.
    let outcomes = play_all(&mut game, &[0, 1, 2, 4, 3, 5, 7, 6, 8]);

    assert_eq!(outcomes.last(), Some(&RoundOutcome::Tie));
    assert_eq!(game.phase(), Phase::Finished(Outcome::Tie));
    assert_eq!(game.presenter().last_announcement(), Some(&Announcement::Tie));
}

#[test]
fn test_win_on_last_square_beats_tie() {
    let mut game = new_game(ResetMode::ReturnToSetup);

    // X O X / O X O / O X X -> X completes the diagonal on the ninth move.
    let outcomes = play_all(&mut game, &[0, 1, 2, 3, 4, 5, 7, 6, 8]);

    assert!(game.board().is_full());
    assert_eq!(
        outcomes.last(),
        Some(&RoundOutcome::Won {
            winner: Seat::One,
            line: [0, 4, 8]
        })
    );
}

#[test]
fn test_moves_after_finish_only_announce() {
    let mut game = new_game(ResetMode::ReturnToSetup);
    play_all(&mut game, &[0, 3, 1, 4, 2]);

    let board = game.board().clone();
    let state = *game.state();

    for index in 0..9 {
        game.presenter_mut().clear();
        assert_eq!(game.play_round(index), Err(MoveError::GameOver));
        assert_eq!(game.board(), &board);
        assert_eq!(game.state(), &state);
        assert_eq!(
            game.presenter().events(),
            &[PresenterEvent::Announced(Announcement::IllegalMove)]
        );
    }
}

#[test]
fn test_occupied_square_keeps_turn() {
    let mut game = new_game(ResetMode::ReturnToSetup);
    game.play_round(4).unwrap();

    assert_eq!(game.play_round(4), Err(MoveError::SquareOccupied(4)));
    assert_eq!(game.state().active(), Seat::Two);
    assert_eq!(
        game.presenter().last_announcement(),
        Some(&Announcement::IllegalMove)
    );
}

#[test]
fn test_reset_returns_to_setup() {
    let mut game = new_game(ResetMode::ReturnToSetup);
    play_all(&mut game, &[0, 3, 1]);
    game.presenter_mut().clear();

    game.reset_game();

    assert_eq!(game.board(), &Board::new());
    assert_eq!(game.state().active(), Seat::One);
    assert_eq!(game.phase(), Phase::NotStarted);
    assert_eq!(
        game.presenter().events(),
        &[
            PresenterEvent::GameViewShown(false),
            PresenterEvent::BoardRendered(Board::new()),
            PresenterEvent::Announced(Announcement::Reset),
        ]
    );
    assert_eq!(game.play_round(0), Err(MoveError::NotStarted));
}

#[test]
fn test_reset_rematch_keeps_players() {
    let mut game = GameController::new(Transcript::new(), ResetMode::Rematch);
    game.start_game("Ada", "Grace");
    play_all(&mut game, &[0, 3, 1, 4, 2]);

    game.reset_game();

    assert_eq!(game.board(), &Board::new());
    assert_eq!(game.presenter().last_board(), Some(&Board::new()));
    assert_eq!(game.phase(), Phase::InProgress);
    assert_eq!(game.active_player().map(|p| p.name().as_str()), Some("Ada"));
    assert_eq!(
        game.presenter().last_announcement(),
        Some(&Announcement::Turn("Ada".into()))
    );
    assert_eq!(game.play_round(8), Ok(RoundOutcome::Continue { next: Seat::Two }));
}

#[test]
fn test_rematch_reset_before_start_goes_to_setup() {
    let mut game = GameController::new(Transcript::new(), ResetMode::Rematch);

    game.reset_game();

    assert_eq!(game.phase(), Phase::NotStarted);
    assert_eq!(game.presenter().last_announcement(), Some(&Announcement::Reset));
}

#[test]
fn test_restart_after_reset() {
    let mut game = new_game(ResetMode::ReturnToSetup);
    play_all(&mut game, &[0, 3, 1, 4, 2]);
    game.reset_game();

    game.start_game("Lin", "Mo");

    assert_eq!(game.phase(), Phase::InProgress);
    assert_eq!(game.active_player().map(|p| p.name().as_str()), Some("Lin"));
    assert_eq!(game.play_round(2), Ok(RoundOutcome::Continue { next: Seat::Two }));
}

#[test]
fn test_controllers_are_independent() {
    let mut first = new_game(ResetMode::ReturnToSetup);
    let second = new_game(ResetMode::ReturnToSetup);

    first.play_round(4).unwrap();

    assert!(second.board().is_empty(4));
    assert_eq!(second.state().active(), Seat::One);
}
