//! Tests for the game engine: lifecycle, rules, and move validation.

use noughts::{Game, GameStatus, Move, MoveError, Player, Position, check_winner};

#[test]
fn new_game_starts_in_progress_with_x() {
    let game = Game::new();

    assert_eq!(game.status(), GameStatus::InProgress(Player::X));
    assert_eq!(game.next_player(), Player::X);
    assert_eq!(game.current_step(), 0);
    assert_eq!(game.open_cells().len(), 9);
    assert!(game.move_order_ascending());
}

#[test]
fn players_alternate_by_step_parity() {
    let mut game = Game::new();

    assert_eq!(game.next_player(), Player::X);
    assert!(game.play(Position::Center));
    assert_eq!(game.next_player(), Player::O);
    assert!(game.play(Position::TopLeft));
    assert_eq!(game.next_player(), Player::X);
}

#[test]
fn x_wins_top_row_scenario() {
    // Cells 0, 4, 1, 5, 2 alternating X, O, X, O, X.
    let mut game = Game::new();
    for pos in [
        Position::TopLeft,
        Position::Center,
        Position::TopCenter,
        Position::MiddleRight,
        Position::TopRight,
    ] {
        assert!(game.play(pos));
    }

    assert_eq!(game.status(), GameStatus::Won(Player::X));
    let win = game.win().expect("top row is complete");
    assert_eq!(win.player, Player::X);
    assert_eq!(
        win.line,
        [Position::TopLeft, Position::TopCenter, Position::TopRight]
    );
}

#[test]
fn full_board_without_winner_is_a_draw() {
    // X takes 0, 1, 5, 6, 8; O takes 2, 3, 4, 7. No line completes.
    let mut game = Game::new();
    for pos in [
        Position::TopLeft,
        Position::TopRight,
        Position::TopCenter,
        Position::MiddleLeft,
        Position::MiddleRight,
        Position::Center,
        Position::BottomLeft,
        Position::BottomCenter,
        Position::BottomRight,
    ] {
        assert!(game.play(pos));
    }

    assert_eq!(game.current_step(), 9);
    assert_eq!(game.history().len(), 10);
    assert!(check_winner(game.board()).is_none());
    assert_eq!(game.status(), GameStatus::Draw);
}

#[test]
fn click_on_occupied_cell_is_absorbed() {
    let mut game = Game::new();
    assert!(game.play(Position::Center));

    let snapshot = game.clone();
    assert!(!game.play(Position::Center));
    assert_eq!(game, snapshot);
}

#[test]
fn click_after_game_end_is_absorbed() {
    let mut game = Game::new();
    for pos in [
        Position::TopLeft,
        Position::Center,
        Position::TopCenter,
        Position::MiddleLeft,
        Position::TopRight,
    ] {
        assert!(game.play(pos));
    }
    assert_eq!(game.status(), GameStatus::Won(Player::X));

    let snapshot = game.clone();
    assert!(!game.play(Position::BottomRight));
    assert_eq!(game, snapshot);
}

#[test]
fn try_play_reports_rejection_reasons() {
    let mut game = Game::new();
    assert!(game.try_play(Position::Center).is_ok());

    assert!(matches!(
        game.try_play(Position::Center),
        Err(MoveError::CellOccupied(Position::Center))
    ));

    for pos in [
        Position::TopCenter,
        Position::TopLeft,
        Position::TopRight,
        Position::BottomRight,
    ] {
        assert!(game.play(pos));
    }
    // X completed the diagonal (0, 4, 8).
    assert_eq!(game.status(), GameStatus::Won(Player::X));
    assert!(matches!(
        game.try_play(Position::BottomLeft),
        Err(MoveError::GameOver)
    ));
}

#[test]
fn out_of_turn_move_is_rejected() {
    let mut game = Game::new();
    let result = game.try_apply(Move::new(Player::O, Position::Center));
    assert!(matches!(result, Err(MoveError::OutOfTurn(Player::O))));
}

#[test]
fn replay_rebuilds_a_game() {
    let moves = [
        Move::new(Player::X, Position::Center),
        Move::new(Player::O, Position::TopLeft),
        Move::new(Player::X, Position::BottomRight),
    ];

    let game = Game::replay(&moves).expect("valid replay");
    assert_eq!(game.history().len(), 4);
    assert_eq!(game.current_step(), 3);
    assert_eq!(game.next_player(), Player::O);
}

#[test]
fn replay_rejects_invalid_sequences() {
    let moves = [
        Move::new(Player::X, Position::Center),
        Move::new(Player::X, Position::TopLeft),
    ];

    assert!(matches!(
        Game::replay(&moves),
        Err(MoveError::OutOfTurn(Player::X))
    ));
}

#[test]
fn location_maps_corners_and_center() {
    assert_eq!(Position::TopLeft.location(), (1, 1));
    assert_eq!(Position::Center.location(), (2, 2));
    assert_eq!(Position::BottomRight.location(), (3, 3));
}

#[test]
fn index_round_trips_through_position() {
    for (index, pos) in Position::ALL.iter().enumerate() {
        assert_eq!(pos.index(), index);
        assert_eq!(Position::from_index(index), Some(*pos));
    }
    assert_eq!(Position::from_index(9), None);
}

#[test]
fn position_parses_labels_and_indices() {
    assert_eq!(Position::from_label_or_index("4"), Some(Position::Center));
    assert_eq!(
        Position::from_label_or_index("top-left"),
        Some(Position::TopLeft)
    );
    assert_eq!(Position::from_label_or_index("nowhere"), None);
}

#[test]
fn open_cells_shrink_as_marks_land() {
    let mut game = Game::new();
    assert!(game.play(Position::Center));
    assert!(game.play(Position::TopLeft));

    let open = game.open_cells();
    assert_eq!(open.len(), 7);
    assert!(!open.contains(&Position::Center));
    assert!(!open.contains(&Position::TopLeft));
}

#[test]
fn board_displays_as_grid() {
    let mut game = Game::new();
    assert!(game.play(Position::Center));

    assert_eq!(game.board().to_string(), "1|2|3\n-+-+-\n4|X|6\n-+-+-\n7|8|9");
}
