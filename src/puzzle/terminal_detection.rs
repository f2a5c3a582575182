use crate::tubes::{PuzzleState, TUBE_CAPACITY};

/// A state is solved when it holds every ball of `num_colors` colours and each non-empty
/// tube is completed.
pub fn is_solved(state: &PuzzleState, num_colors: usize) -> bool {
    state.ball_count() == num_colors * TUBE_CAPACITY
        && state
            .tubes()
            .iter()
            .all(|tube| tube.is_empty() || tube.is_completed())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn locked_full_tube_is_not_solved() {
        let state: PuzzleState = "[A! A A A] []".parse().unwrap();

        assert!(!is_solved(&state, 1));
    }

    #[test]
    fn partial_tubes_are_not_solved() {
        let state: PuzzleState = "[A A] [A A]".parse().unwrap();

        assert!(!is_solved(&state, 1));
    }

    #[test]
    fn sorted_tubes_with_spares() {
        let state: PuzzleState = "[] [B B B B] [A A A A] []".parse().unwrap();

        assert!(is_solved(&state, 2));
    }
}
