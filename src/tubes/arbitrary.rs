use super::PuzzleState;
use crate::generation::{add_locked_balls, create_fallback_puzzle};
use quickcheck::{Arbitrary, Gen};
use rand::prelude::*;

impl Arbitrary for PuzzleState {
    fn arbitrary<G: Gen>(g: &mut G) -> PuzzleState {
        let colors = g.gen_range(1, 7);
        let tubes = colors + g.gen_range(0, 3);

        let mut state = create_fallback_puzzle(colors, tubes, g).unwrap();

        for _ in 0..g.gen_range(0, 30) {
            let moves = state.legal_moves();
            match moves.choose(g) {
                Some(&game_move) => state = state.apply_legal(game_move),
                None => break,
            }
        }

        let locks = g.gen_range(0, 3);
        add_locked_balls(&state, locks, g)
    }
}
