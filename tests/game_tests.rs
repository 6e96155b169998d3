use hotseat_battleship::prelude::*;

fn c(x: i32, y: i32) -> Coordinate {
    Coordinate::new(x, y)
}

/// Player one has a destroyer at A1-A2, player two at J9-J10.
fn two_destroyers() -> Match {
    let mut one = Board::new(10);
    one.place_ship(c(0, 0), c(0, 1)).unwrap();
    let mut two = Board::new(10);
    two.place_ship(c(9, 8), c(9, 9)).unwrap();
    Match::with_boards(one, two)
}

#[test]
fn test_player_one_starts() {
    let game = two_destroyers();
    assert_eq!(game.active_player(), PlayerId::One);
    assert_eq!(game.phase(), Phase::AwaitingShot);
    assert!(!game.is_busy());
    assert_eq!(game.winner(), None);
}

#[test]
fn test_shot_lands_on_opponent_board() {
    let mut game = two_destroyers();
    let outcome = game.fire(c(9, 8)).unwrap();
    assert_eq!(
        outcome,
        FireOutcome::TurnComplete {
            at: c(9, 8),
            result: HitResult::Hit
        }
    );
    assert_eq!(game.board(PlayerId::Two).cell(c(9, 8)), Some(ShotState::Hit));
    assert_eq!(game.board(PlayerId::One).cell(c(9, 8)), Some(ShotState::NotShot));
}

#[test]
fn test_turn_waits_for_swap() {
    let mut game = two_destroyers();
    game.fire(c(9, 8)).unwrap();
    assert_eq!(game.phase(), Phase::TurnComplete);
    assert_eq!(game.active_player(), PlayerId::One);
    assert!(game.is_busy());

    // locked until the swap
    assert_eq!(game.fire(c(9, 9)).unwrap_err(), MatchError::Busy);
    assert_eq!(game.board(PlayerId::Two).cell(c(9, 9)), Some(ShotState::NotShot));

    assert_eq!(game.swap_turn().unwrap(), PlayerId::Two);
    assert_eq!(game.active_player(), PlayerId::Two);
    assert_eq!(game.phase(), Phase::AwaitingShot);
    assert!(!game.is_busy());
}

#[test]
fn test_swap_without_shot() {
    let mut game = two_destroyers();
    assert_eq!(game.swap_turn().unwrap_err(), MatchError::SwapNotReady);
    assert_eq!(game.active_player(), PlayerId::One);
}

#[test]
fn test_invalid_moves_keep_turn() {
    let mut game = two_destroyers();
    assert_eq!(
        game.fire(c(20, 20)).unwrap_err(),
        MatchError::InvalidMove(BoardError::OutOfBounds(c(20, 20)))
    );
    assert_eq!(game.phase(), Phase::AwaitingShot);
    assert!(!game.is_busy());

    game.fire(c(5, 5)).unwrap();
    game.swap_turn().unwrap();
    game.fire(c(5, 5)).unwrap();
    game.swap_turn().unwrap();

    assert_eq!(
        game.fire(c(5, 5)).unwrap_err(),
        MatchError::InvalidMove(BoardError::AlreadyFired(c(5, 5)))
    );
    assert_eq!(game.active_player(), PlayerId::One);
    assert_eq!(game.phase(), Phase::AwaitingShot);

    // still free to pick another cell
    assert!(game.fire(c(5, 6)).is_ok());
}

#[test]
fn test_game_over() {
    let mut game = two_destroyers();
    game.fire(c(9, 8)).unwrap();
    game.swap_turn().unwrap();
    game.fire(c(3, 3)).unwrap();
    game.swap_turn().unwrap();

    let outcome = game.fire(c(9, 9)).unwrap();
    assert_eq!(
        outcome,
        FireOutcome::GameOver {
            at: c(9, 9),
            result: HitResult::Hit,
            winner: PlayerId::One
        }
    );
    assert_eq!(game.phase(), Phase::GameOver);
    assert_eq!(game.winner(), Some(PlayerId::One));
    assert!(!game.is_busy());

    assert_eq!(game.fire(c(0, 0)).unwrap_err(), MatchError::GameOver);
    assert_eq!(game.swap_turn().unwrap_err(), MatchError::GameOver);
}

#[test]
fn test_empty_opponent_board_ends_game() {
    let mut game = Match::new(10);
    let outcome = game.fire(c(0, 0)).unwrap();
    assert!(matches!(
        outcome,
        FireOutcome::GameOver {
            result: HitResult::Miss,
            winner: PlayerId::One,
            ..
        }
    ));
}

#[test]
fn test_fire_at_cell() {
    let mut game = two_destroyers();
    // cell 98 is x = 8, y = 9
    game.fire_at_cell(98).unwrap();
    assert_eq!(game.board(PlayerId::Two).cell(c(8, 9)), Some(ShotState::Miss));
    game.swap_turn().unwrap();

    assert_eq!(
        game.fire_at_cell(100).unwrap_err(),
        MatchError::InvalidMove(BoardError::InvalidCellIndex(100))
    );
    assert_eq!(game.phase(), Phase::AwaitingShot);
    assert_eq!(game.active_player(), PlayerId::Two);
}

#[test]
fn test_view_hides_opponent_ships() {
    let mut game = two_destroyers();
    game.fire(c(9, 8)).unwrap();
    game.swap_turn().unwrap();

    let view = game.view();
    assert_eq!(view.player, PlayerId::Two);
    assert_eq!(view.own_ships, vec![vec![c(9, 8), c(9, 9)]]);
    assert_eq!(view.own_shots[8][9], ShotState::Hit);
    assert!(view
        .foe_shots
        .iter()
        .all(|row| row.iter().all(|s| *s == ShotState::NotShot)));
}

#[test]
fn test_restart() {
    let mut game = two_destroyers();
    game.fire(c(9, 8)).unwrap();
    game.swap_turn().unwrap();
    game.restart();

    assert_eq!(game.active_player(), PlayerId::One);
    assert_eq!(game.phase(), Phase::AwaitingShot);
    assert!(game.board(PlayerId::One).ships().is_empty());
    assert!(game.board(PlayerId::Two).ships().is_empty());
    assert_eq!(game.board(PlayerId::Two).cell(c(9, 8)), Some(ShotState::NotShot));
}

#[test]
fn test_player_ids() {
    assert_eq!(PlayerId::One.opponent(), PlayerId::Two);
    assert_eq!(PlayerId::Two.opponent(), PlayerId::One);
    assert_eq!(PlayerId::Two.number(), 2);
    assert_eq!(PlayerId::One.to_string(), "Player 1");
}

#[test]
fn test_boards_locked_once_shooting_starts() {
    let mut game = Match::new(10);
    game.board_mut(PlayerId::One)
        .unwrap()
        .place_ship(c(0, 0), c(0, 1))
        .unwrap();
    game.board_mut(PlayerId::Two)
        .unwrap()
        .place_ship(c(9, 8), c(9, 9))
        .unwrap();

    // an invalid move does not close placement
    assert!(game.fire(c(-1, 0)).is_err());
    assert!(game.board_mut(PlayerId::Two).is_ok());

    game.fire(c(9, 8)).unwrap();
    assert!(game.is_busy());
    assert_eq!(
        game.board_mut(PlayerId::Two).unwrap_err(),
        MatchError::PlacementClosed
    );
    assert_eq!(game.board_mut(PlayerId::One).unwrap_err(), MatchError::PlacementClosed);
    assert_eq!(game.board(PlayerId::Two).cell(c(9, 9)), Some(ShotState::NotShot));

    // the last cell still has to go through the match to end it
    game.swap_turn().unwrap();
    game.fire(c(5, 5)).unwrap();
    game.swap_turn().unwrap();
    assert!(matches!(
        game.fire(c(9, 9)).unwrap(),
        FireOutcome::GameOver { winner: PlayerId::One, .. }
    ));
    assert_eq!(game.board_mut(PlayerId::One).unwrap_err(), MatchError::PlacementClosed);

    game.restart();
    assert!(game.board_mut(PlayerId::One).is_ok());
}
