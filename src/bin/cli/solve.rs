use ball_sort_solver::puzzle::{Profile, Puzzle, Solution, SolverLimits};
use ball_sort_solver::puzzle_file;
use log::info;
use std::error::Error;
use std::fs;
use std::path::Path;

fn format_moves(solution: &Solution) -> String {
    solution
        .moves
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

pub fn run(path: &Path, limits: SolverLimits) -> Result<(), Box<dyn Error>> {
    let collection = puzzle_file::parse(&fs::read_to_string(path)?)?;

    for (number, entry) in collection.entries.iter().enumerate() {
        let num_colors = entry.state.distinct_colors();
        let mut puzzle = Puzzle::<Profile>::with_limits(entry.state.clone(), num_colors, limits);

        let heading = match entry.level {
            Some(level) => format!("puzzle {} (level {})", number + 1, level),
            None => format!("puzzle {}", number + 1),
        };

        match puzzle.solve().first() {
            Some(solution) => {
                println!("{}: {} moves", heading, solution.len());
                println!("  {}", format_moves(solution));
            }
            None if puzzle.budget_exhausted() => {
                println!("{}: no known solution within budget", heading)
            }
            None => println!("{}: no solution found", heading),
        }

        info!("{}\n{}", heading, puzzle.profiler.print());
    }

    Ok(())
}
