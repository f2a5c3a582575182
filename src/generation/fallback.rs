use crate::tubes::{Ball, ColorId, PuzzleState, StateError, Tube, TUBE_CAPACITY};
use rand::prelude::*;

/// Deals a shuffled pool of every ball into the tubes in order, filling each before the next.
/// Nothing guarantees the result is solvable.
pub fn create_fallback_puzzle<R: Rng + ?Sized>(
    num_colors: usize,
    total_tubes: usize,
    rng: &mut R,
) -> Result<PuzzleState, StateError> {
    if total_tubes < num_colors {
        return Err(StateError::NotEnoughTubes {
            colors: num_colors,
            tubes: total_tubes,
        });
    }

    let mut pool = Vec::with_capacity(num_colors * TUBE_CAPACITY);
    for index in 0..num_colors {
        let color = ColorId::new(index)?;
        pool.extend(std::iter::repeat(Ball::new(color)).take(TUBE_CAPACITY));
    }
    pool.shuffle(rng);

    let mut balls = pool.into_iter();
    let tubes = (0..total_tubes)
        .map(|_| Tube::from_balls(balls.by_ref().take(TUBE_CAPACITY)))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(PuzzleState::new(tubes))
}

#[cfg(test)]
mod tests {
    use super::*;
    use quickcheck_macros::quickcheck;

    #[test]
    fn fills_tubes_front_to_back() {
        let mut rng = StdRng::seed_from_u64(0);

        let state = create_fallback_puzzle(4, 6, &mut rng).unwrap();

        let lengths: Vec<usize> = state.tubes().iter().map(Tube::len).collect();
        assert_eq!(lengths, vec![4, 4, 4, 4, 0, 0]);
    }

    #[test]
    fn rejects_too_few_tubes() {
        let mut rng = StdRng::seed_from_u64(0);

        assert!(create_fallback_puzzle(5, 4, &mut rng).is_err());
    }

    #[quickcheck]
    fn every_colour_appears_four_times(seed: u64) {
        let mut rng = StdRng::seed_from_u64(seed);

        let state = create_fallback_puzzle(7, 8, &mut rng).unwrap();

        let mut counts = [0; 7];
        for ball in state.tubes().iter().flat_map(|tube| tube.balls()) {
            assert!(!ball.locked);
            counts[ball.color.index()] += 1;
        }
        assert_eq!(counts, [4; 7]);
    }
}
