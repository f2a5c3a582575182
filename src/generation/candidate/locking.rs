use crate::tubes::PuzzleState;
use rand::prelude::*;

/// Locks the bottom ball of up to `count` distinct random tubes holding more than one ball.
/// Tubes whose bottom ball is already locked are skipped.
pub fn add_locked_balls<R: Rng + ?Sized>(
    state: &PuzzleState,
    count: usize,
    rng: &mut R,
) -> PuzzleState {
    let mut locked = state.clone();

    let eligible: Vec<usize> = state
        .tubes()
        .iter()
        .enumerate()
        .filter(|(_, tube)| tube.len() > 1 && !tube.balls()[0].locked)
        .map(|(index, _)| index)
        .collect();

    for &index in eligible.choose_multiple(rng, count) {
        if let Ok(tube) = locked.tube_mut(index) {
            tube.lock_bottom();
        }
    }

    locked
}

#[cfg(test)]
mod tests {
    use super::*;

    fn locked_bottoms(state: &PuzzleState) -> Vec<usize> {
        state
            .tubes()
            .iter()
            .enumerate()
            .filter(|(_, tube)| tube.balls().first().map_or(false, |ball| ball.locked))
            .map(|(index, _)| index)
            .collect()
    }

    #[test]
    fn locks_bottoms_of_tall_tubes_only() {
        let state: PuzzleState = "[A B] [C] [] [B A C] [D! D]".parse().unwrap();
        let mut rng = StdRng::seed_from_u64(0);

        let locked = add_locked_balls(&state, 10, &mut rng);

        assert_eq!(locked_bottoms(&locked), vec![0, 3, 4]);
        assert_eq!(locked.to_string(), "[A! B] [C] [] [B! A C] [D! D]");
    }

    #[test]
    fn locks_at_most_count() {
        let state: PuzzleState = "[A A] [B B] [C C] [D D]".parse().unwrap();
        let mut rng = StdRng::seed_from_u64(9);

        let locked = add_locked_balls(&state, 2, &mut rng);

        assert_eq!(locked_bottoms(&locked).len(), 2);
        assert_eq!(locked_bottoms(&state).len(), 0);
    }
}
