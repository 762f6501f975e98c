use hotseat_battleship::{
    Cell, Game, GameError, GameStatus, GuessResult, Placement, PlayerId, BOARD_SIZE, NUM_SHIPS,
};

const P1_SHIPS: [(i64, i64); 5] = [(0, 0), (0, 1), (0, 2), (0, 3), (0, 4)];
const P2_SHIPS: [(i64, i64); 5] = [(1, 1), (1, 2), (1, 3), (1, 4), (2, 0)];

fn place_all(game: &mut Game, ships: &[(i64, i64)]) {
    for &(r, c) in ships {
        game.place_ship(r, c).unwrap();
    }
}

fn battle_ready() -> Game {
    let mut game = Game::new();
    place_all(&mut game, &P1_SHIPS);
    place_all(&mut game, &P2_SHIPS);
    game
}

#[test]
fn test_initial_state() {
    let game = Game::new();
    assert_eq!(game.status(), GameStatus::Placement(PlayerId::One));
    assert_eq!(game.current_player(), Some(PlayerId::One));
    assert_eq!(game.winner(), None);
    assert_eq!(game.ships_remaining(PlayerId::One), NUM_SHIPS);
    assert_eq!(game.ships_remaining(PlayerId::Two), NUM_SHIPS);
}

#[test]
fn test_placement_commits_and_advances() {
    let mut game = Game::new();
    for (i, &(r, c)) in P1_SHIPS.iter().enumerate().take(NUM_SHIPS - 1) {
        assert_eq!(
            game.place_ship(r, c).unwrap(),
            Placement::Staged {
                player: PlayerId::One,
                placed: i + 1
            }
        );
        // nothing is committed until the fleet is complete
        assert_eq!(game.ship_board(PlayerId::One).count(Cell::Ship), 0);
    }
    assert_eq!(game.staging_board().count(Cell::Ship), NUM_SHIPS - 1);

    assert_eq!(
        game.place_ship(0, 4).unwrap(),
        Placement::Committed {
            player: PlayerId::One
        }
    );
    assert_eq!(game.status(), GameStatus::Placement(PlayerId::Two));
    assert_eq!(game.staging_board().count(Cell::Empty), BOARD_SIZE * BOARD_SIZE);
    assert_eq!(game.ships_placed(), 0);

    let board = game.ship_board(PlayerId::One);
    assert_eq!(board.count(Cell::Ship), NUM_SHIPS);
    assert_eq!(board.count(Cell::Empty), BOARD_SIZE * BOARD_SIZE - NUM_SHIPS);

    place_all(&mut game, &P2_SHIPS);
    assert_eq!(game.status(), GameStatus::Battle(PlayerId::One));
    assert_eq!(game.ship_board(PlayerId::Two).count(Cell::Ship), NUM_SHIPS);
    assert_eq!(game.ship_board(PlayerId::Two).get(2, 0).unwrap(), Cell::Ship);
}

#[test]
fn test_placement_rejects_duplicate() {
    let mut game = Game::new();
    game.place_ship(2, 2).unwrap();
    assert_eq!(
        game.place_ship(2, 2).unwrap_err(),
        GameError::AlreadySelected { row: 2, col: 2 }
    );
    assert_eq!(game.ships_placed(), 1);
}

#[test]
fn test_placement_rejects_out_of_bounds() {
    let mut game = Game::new();
    assert_eq!(
        game.place_ship(5, 0).unwrap_err(),
        GameError::InvalidCoordinates { row: 5, col: 0 }
    );
    assert_eq!(
        game.place_ship(0, -1).unwrap_err(),
        GameError::InvalidCoordinates { row: 0, col: -1 }
    );
    assert_eq!(game.ships_placed(), 0);
}

#[test]
fn test_second_player_may_reuse_first_players_cells() {
    let mut game = Game::new();
    place_all(&mut game, &P1_SHIPS);
    place_all(&mut game, &P1_SHIPS);
    assert_eq!(
        game.ship_board(PlayerId::One),
        game.ship_board(PlayerId::Two)
    );
}

#[test]
fn test_fire_during_placement_is_wrong_phase() {
    let mut game = Game::new();
    assert_eq!(
        game.fire(0, 0).unwrap_err(),
        GameError::WrongPhase(GameStatus::Placement(PlayerId::One))
    );
}

#[test]
fn test_hit_resolution() {
    let mut game = battle_ready();
    let shot = game.fire(1, 1).unwrap();
    assert_eq!(shot.result, GuessResult::Hit);
    assert_eq!(shot.attacker, PlayerId::One);
    assert_eq!(shot.defender, PlayerId::Two);
    assert_eq!(shot.winner, None);
    assert_eq!(game.ship_board(PlayerId::Two).get(1, 1).unwrap(), Cell::Hit);
    assert_eq!(game.tracking_board(PlayerId::One).get(1, 1).unwrap(), Cell::Hit);
    assert_eq!(game.ships_remaining(PlayerId::Two), NUM_SHIPS - 1);
    assert_eq!(game.status(), GameStatus::Battle(PlayerId::Two));
}

#[test]
fn test_miss_resolution() {
    let mut game = battle_ready();
    let shot = game.fire(3, 3).unwrap();
    assert_eq!(shot.result, GuessResult::Miss);
    assert_eq!(shot.result.to_string(), "miss");
    assert_eq!(game.ship_board(PlayerId::Two).get(3, 3).unwrap(), Cell::Miss);
    assert_eq!(game.tracking_board(PlayerId::One).get(3, 3).unwrap(), Cell::Miss);
    assert_eq!(game.ships_remaining(PlayerId::Two), NUM_SHIPS);
    assert_eq!(game.status(), GameStatus::Battle(PlayerId::Two));
}

#[test]
fn test_repeat_shot_rejected_same_attacker() {
    let mut game = battle_ready();
    game.fire(3, 3).unwrap();
    game.fire(4, 4).unwrap();

    let tracking_before = *game.tracking_board(PlayerId::One);
    assert_eq!(
        game.fire(3, 3).unwrap_err(),
        GameError::AlreadyFired { row: 3, col: 3 }
    );
    assert_eq!(*game.tracking_board(PlayerId::One), tracking_before);
    assert_eq!(game.status(), GameStatus::Battle(PlayerId::One));

    assert_eq!(
        game.fire(-2, 9).unwrap_err(),
        GameError::InvalidCoordinates { row: -2, col: 9 }
    );
    assert_eq!(game.status(), GameStatus::Battle(PlayerId::One));
}

#[test]
fn test_tracking_boards_are_per_attacker() {
    let mut game = battle_ready();
    game.fire(2, 2).unwrap();
    // player 2 may target the same coordinate on player 1's board
    let shot = game.fire(2, 2).unwrap();
    assert_eq!(shot.attacker, PlayerId::Two);
    assert_eq!(game.tracking_board(PlayerId::Two).get(2, 2).unwrap(), Cell::Miss);
    assert_eq!(game.ship_board(PlayerId::One).get(2, 2).unwrap(), Cell::Miss);
}

#[test]
fn test_game_over_mid_round() {
    let mut game = battle_ready();
    let p2_misses = [(4, 0), (4, 1), (4, 2), (4, 3)];
    for (i, &(r, c)) in P2_SHIPS.iter().enumerate() {
        let shot = game.fire(r, c).unwrap();
        assert_eq!(shot.result, GuessResult::Hit);
        if i < P2_SHIPS.len() - 1 {
            let (mr, mc) = p2_misses[i];
            game.fire(mr, mc).unwrap();
        } else {
            assert_eq!(shot.winner, Some(PlayerId::One));
        }
    }
    assert_eq!(game.ships_remaining(PlayerId::Two), 0);
    assert_eq!(
        game.status(),
        GameStatus::GameOver {
            winner: PlayerId::One
        }
    );
    assert_eq!(game.winner(), Some(PlayerId::One));
    assert_eq!(game.current_player(), None);

    // terminal: player 2 never gets the reply shot
    let over = GameStatus::GameOver {
        winner: PlayerId::One,
    };
    assert_eq!(game.fire(0, 0).unwrap_err(), GameError::WrongPhase(over));
    assert_eq!(game.place_ship(0, 0).unwrap_err(), GameError::WrongPhase(over));
}

#[test]
fn test_player_two_can_win() {
    let mut game = battle_ready();
    let p1_misses = [(4, 0), (4, 1), (4, 2), (4, 3), (4, 4)];
    for (&(mr, mc), &(r, c)) in p1_misses.iter().zip(P1_SHIPS.iter()) {
        game.fire(mr, mc).unwrap();
        game.fire(r, c).unwrap();
    }
    assert_eq!(game.winner(), Some(PlayerId::Two));
    assert_eq!(game.ships_remaining(PlayerId::One), 0);
    assert_eq!(game.ships_remaining(PlayerId::Two), NUM_SHIPS);
}

#[test]
fn test_error_messages() {
    assert_eq!(
        GameError::InvalidCoordinates { row: 9, col: 9 }.to_string(),
        "Invalid coordinates. Choose different coordinates."
    );
    assert_eq!(
        GameError::AlreadySelected { row: 0, col: 0 }.to_string(),
        "You already selected that space. Choose different coordinates."
    );
    assert_eq!(
        GameError::AlreadyFired { row: 0, col: 0 }.to_string(),
        "You already fired on this spot. Choose different coordinates."
    );
}

#[test]
fn test_player_id_helpers() {
    assert_eq!(PlayerId::One.opponent(), PlayerId::Two);
    assert_eq!(PlayerId::Two.opponent(), PlayerId::One);
    assert_eq!(PlayerId::Two.number(), 2);
    assert_eq!(PlayerId::One.to_string(), "1");
}
