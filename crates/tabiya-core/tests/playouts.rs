//! Property-based tests over random legal playouts.

mod common;

use proptest::prelude::*;
use tabiya_core::{Color, Game, Position};

/// Play a random legal game, choosing each move by index.
fn playout(choices: &[prop::sample::Index]) -> Vec<Game> {
    let mut game = Game::new();
    let mut history = vec![game.clone()];
    for choice in choices {
        let moves = game.all_legal_moves(game.turn());
        if moves.is_empty() {
            break;
        }
        let mv = *choice.get(&moves);
        game.make_move(mv).unwrap();
        history.push(game.clone());
    }
    history
}

/// Strategy for up to `max_plies` move choices.
fn move_choices(max_plies: usize) -> impl Strategy<Value = Vec<prop::sample::Index>> {
    prop::collection::vec(any::<prop::sample::Index>(), 0..max_plies)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    /// No legal move ever leaves the mover's own king attacked.
    #[test]
    fn prop_legal_moves_never_self_check(choices in move_choices(40)) {
        for game in playout(&choices) {
            let mover = game.turn();
            for mv in game.all_legal_moves(mover) {
                let mut child = game.clone();
                prop_assert!(child.make_move(mv).is_ok());
                prop_assert!(!child.is_in_check(mover), "{} exposes the king", mv);
            }
        }
    }

    /// Each side always has exactly one king during legal play.
    #[test]
    fn prop_kings_survive(choices in move_choices(60)) {
        for game in playout(&choices) {
            for color in Color::ALL {
                prop_assert!(game.board().king_position(color).is_some());
            }
        }
    }

    /// Status agrees with the individual predicates.
    #[test]
    fn prop_status_matches_predicates(choices in move_choices(60)) {
        let history = playout(&choices);
        let last = history.last().unwrap();
        let turn = last.turn();
        let no_moves = last.all_legal_moves(turn).is_empty();
        prop_assert_eq!(last.is_in_checkmate(turn), last.is_in_check(turn) && no_moves);
        prop_assert_eq!(last.is_in_stalemate(turn), !last.is_in_check(turn) && no_moves);
    }

    /// Every generated move starts on a piece of the side queried and stays on the board.
    #[test]
    fn prop_moves_stay_in_bounds(choices in move_choices(30)) {
        let history = playout(&choices);
        let game = history.last().unwrap();
        for from in Position::all() {
            if let Some(moves) = game.legal_moves(from) {
                for mv in moves {
                    prop_assert_eq!(mv.start(), from);
                    prop_assert!(mv.end().in_bounds());
                }
            }
        }
    }

    /// A serialized game deserializes to an equal game.
    #[test]
    fn prop_json_round_trip(choices in move_choices(40)) {
        let history = playout(&choices);
        let game = history.last().unwrap();
        let json = serde_json::to_string(game).unwrap();
        let restored: Game = serde_json::from_str(&json).unwrap();
        prop_assert_eq!(&restored, game);
    }
}
