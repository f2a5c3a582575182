use ball_sort_solver::difficulty::level_difficulty;
use ball_sort_solver::generation::GeneratorConfig;

fn table(from: u32, to: u32) -> String {
    let config = GeneratorConfig::default();
    let mut table = String::from("level colours spare shuffle locked win modifier\n");

    for level in from..=to {
        let spec = level_difficulty(level);

        table.push_str(&format!(
            "{:>5} {:>7} {:>5} {:>7} {:>6} {:>3} {:>8.1}\n",
            level,
            spec.color_count,
            spec.extra_empty_tubes,
            spec.shuffle_move_count,
            config.locked_balls_for_level(level),
            spec.tubes_required_to_win,
            spec.difficulty_modifier
        ));
    }

    table
}

pub fn run(from: u32, to: u32) {
    print!("{}", table(from, to));
}
