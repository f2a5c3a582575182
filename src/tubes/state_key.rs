use super::{Ball, PuzzleState, Tube, TUBE_CAPACITY};
use smallvec::SmallVec;

/// Fingerprint used to deduplicate states during search.
///
/// Balls are sorted inside each tube (colour, then unlocked before locked) and tubes are
/// sorted by length, then content. Tube positions therefore do not matter, and neither does
/// the stacking order inside a tube, so some states that play differently share a key.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct StateKey(Vec<u8>);

impl Tube {
    fn sorted_encoding(&self) -> SmallVec<[u8; TUBE_CAPACITY]> {
        let mut balls: SmallVec<[Ball; TUBE_CAPACITY]> = self.balls.clone();
        balls.sort();

        balls
            .iter()
            .map(|ball| (ball.color.index() as u8) << 1 | ball.locked as u8)
            .collect()
    }
}

impl PuzzleState {
    pub fn canonical_key(&self) -> StateKey {
        let mut tubes: Vec<_> = self.tubes.iter().map(Tube::sorted_encoding).collect();
        tubes.sort_by(|a, b| a.len().cmp(&b.len()).then_with(|| a.cmp(b)));

        let mut bytes = Vec::with_capacity(self.tubes.len() + self.ball_count());
        for tube in tubes {
            // Length prefix keeps tube boundaries unambiguous.
            bytes.push(tube.len() as u8);
            bytes.extend_from_slice(&tube);
        }

        StateKey(bytes)
    }
}
