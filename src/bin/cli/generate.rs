use ball_sort_solver::generation::{
    generate_smart_puzzle_with_rng, GeneratedPuzzle, GeneratorConfig, PuzzleOrigin,
};
use ball_sort_solver::puzzle_file::PuzzleCollection;
use rand::prelude::*;
use std::error::Error;

fn describe(puzzle: &GeneratedPuzzle) -> String {
    match &puzzle.origin {
        PuzzleOrigin::Generated { attempts, solution } => format!(
            "# generated on attempt {}, solvable in {} moves",
            attempts,
            solution.len()
        ),
        PuzzleOrigin::Fallback { attempts } => format!(
            "# random fallback after {} rejected attempts, may be unsolvable",
            attempts
        ),
    }
}

pub fn run(
    level: u32,
    count: u32,
    seed: Option<u64>,
    json: bool,
    config: &GeneratorConfig,
) -> Result<(), Box<dyn Error>> {
    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    for _ in 0..count {
        let puzzle = generate_smart_puzzle_with_rng(level, config, &mut rng)?;

        if json {
            println!("{}", serde_json::to_string(&puzzle)?);
        } else {
            let mut collection = PuzzleCollection::new();
            collection.push(Some(puzzle.level), puzzle.state.clone());

            println!("{}", describe(&puzzle));
            print!("{}", collection.to_text());
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use ball_sort_solver::difficulty::level_difficulty;
    use ball_sort_solver::puzzle::Solution;
    use ball_sort_solver::tubes::Move;
    use insta::assert_snapshot;

    #[test]
    fn describes_the_origin() {
        let state = "[A A A B] [B B B A] []".parse().unwrap();
        let mut puzzle = GeneratedPuzzle {
            level: 1,
            state,
            difficulty: level_difficulty(1),
            origin: PuzzleOrigin::Generated {
                attempts: 4,
                solution: Solution::new(vec![Move::between(0, 2); 21]),
            },
        };

        assert_snapshot!(describe(&puzzle), @"# generated on attempt 4, solvable in 21 moves");

        puzzle.origin = PuzzleOrigin::Fallback { attempts: 200 };

        assert_snapshot!(describe(&puzzle), @"# random fallback after 200 rejected attempts, may be unsolvable");
    }
}
