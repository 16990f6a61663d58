//! End-to-end game scenarios through the public API.

use rand::SeedableRng;
use rand::rngs::StdRng;
use strictly_territory::{
    Difficulty, Dimension, Game, GameError, GameSetup, GameStatus, Line, Location, Opponent,
    Sign, Strategy, invariants::{GameInvariants, InvariantSet},
};

fn human_game(size: usize, first: Sign) -> Game {
    GameSetup::new(Dimension::square(size), Opponent::Human)
        .expect("valid setup")
        .start_with(first, StdRng::seed_from_u64(0))
}

#[test]
fn test_row_win_stops_game() {
    let mut game = human_game(3, Sign::X);
    let moves = [(0, 0), (1, 0), (0, 1), (1, 1), (0, 2)];
    for (turn, (row, column)) in moves.into_iter().enumerate() {
        let status = game.submit_human_move(Location::new(row, column)).expect("legal move");
        if turn < moves.len() - 1 {
            assert_eq!(status, GameStatus::InProgress);
        }
    }

    assert_eq!(game.status(), GameStatus::Won(Sign::X));
    assert_eq!(game.winner().map(|c| c.sign()), Some(Sign::X));
    assert_eq!(game.winning_line(), Some(Line::Row(0)));

    let before = game.board().clone();
    assert_eq!(
        game.submit_human_move(Location::new(2, 2)),
        Err(GameError::GameOver)
    );
    assert_eq!(game.board(), &before);
}

#[test]
fn test_full_board_without_line_is_draw() {
    let mut game = human_game(3, Sign::O);
    // O X O / O X X / X O O
    let moves = [
        (0, 0),
        (0, 1),
        (0, 2),
        (1, 1),
        (1, 0),
        (2, 0),
        (2, 1),
        (1, 2),
        (2, 2),
    ];
    for (row, column) in moves {
        game.submit_human_move(Location::new(row, column)).expect("legal move");
    }
    assert_eq!(game.status(), GameStatus::Draw);
    assert!(game.is_draw());
    assert!(!game.is_in_progress());
}

#[test]
fn test_out_of_bounds_leaves_game_unchanged() {
    let mut game = human_game(4, Sign::X);
    game.submit_human_move(Location::new(1, 1)).expect("legal move");

    for location in [Location::new(4, 0), Location::new(0, 4), Location::new(10, 10)] {
        let board = game.board().clone();
        let status = game.status();
        let to_move = *game.current_contestant();

        assert_eq!(
            game.submit_human_move(location),
            Err(GameError::OutOfBounds(location))
        );
        assert_eq!(game.board(), &board);
        assert_eq!(game.status(), status);
        assert_eq!(*game.current_contestant(), to_move);
    }
}

#[test]
fn test_diagonal_win_on_large_board() {
    let mut game = human_game(5, Sign::X);
    for step in 0..5 {
        game.submit_human_move(Location::new(step, 4 - step)).expect("X move");
        if step < 4 {
            game.submit_human_move(Location::new(step, 0)).expect("O move");
        }
    }
    assert_eq!(game.status(), GameStatus::Won(Sign::X));
    assert_eq!(game.winning_line(), Some(Line::AntiDiagonal));
}

#[test]
fn test_hard_blocks_threat_every_time() {
    for seed in 0..25 {
        let mut game = GameSetup::new(
            Dimension::square(3),
            Opponent::Automated {
                difficulty: Difficulty::Hard,
            },
        )
        .expect("valid setup")
        .start_with(Sign::X, StdRng::seed_from_u64(seed));

        game.submit_human_move(Location::new(2, 0)).expect("human move");
        let reply = game.play_automated_move().expect("automated move");
        if reply.row() == 2 {
            // Row 2 is already spoiled; no threat to build.
            continue;
        }
        game.submit_human_move(Location::new(2, 1)).expect("human move");

        // O holds a single tile, so it has no win; the threat must be blocked.
        assert_eq!(game.play_automated_move(), Ok(Location::new(2, 2)));
    }
}

#[test]
fn test_medium_fallback_only_picks_free_tiles() {
    for seed in 0..25 {
        let mut game = GameSetup::new(
            Dimension::square(3),
            Opponent::Automated {
                difficulty: Difficulty::Medium,
            },
        )
        .expect("valid setup")
        .start_with(Sign::X, StdRng::seed_from_u64(seed));

        game.submit_human_move(Location::new(1, 1)).expect("human move");
        let before = game.board().clone();
        let reply = game.play_automated_move().expect("automated move");
        assert!(!before.tile_at(reply).expect("on board").is_marked());
        assert_eq!(
            game.board().tile_at(reply).expect("on board").marked_by(),
            Some(Sign::O)
        );
    }
}

#[test]
fn test_automated_games_always_terminate_consistently() {
    for difficulty in [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard] {
        for seed in 0..10 {
            let mut game = GameSetup::new(Dimension::square(4), Opponent::Automated { difficulty })
                .expect("valid setup")
                .start(StdRng::seed_from_u64(seed));
            let mut human_rng = StdRng::seed_from_u64(seed + 1000);

            while game.is_in_progress() {
                if game.is_automated_contestants_turn() {
                    game.play_automated_move().expect("automated move");
                } else {
                    let location = Strategy::Random
                        .select(game.board(), Sign::X, &mut human_rng)
                        .expect("free tile");
                    game.submit_human_move(location).expect("human move");
                }
                assert!(GameInvariants::violations(&game).is_empty());
            }
            assert!(game.status().is_terminal());
        }
    }
}

#[test]
fn test_board_snapshot_serialises_marks() {
    let mut game = human_game(3, Sign::O);
    game.submit_human_move(Location::new(1, 1)).unwrap();

    let json = serde_json::to_value(game.board()).unwrap();
    let restored: strictly_territory::Board = serde_json::from_value(json).unwrap();
    assert_eq!(&restored, game.board());
    assert_eq!(restored.count_marked_by(Sign::O), 1);
}
