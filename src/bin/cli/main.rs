mod difficulty;
mod generate;
mod logging;
mod solve;

use ball_sort_solver::generation::GeneratorConfig;
use ball_sort_solver::puzzle::SolverLimits;
use clap::{App, AppSettings, Arg, ArgMatches, SubCommand};
use log::LevelFilter;
use std::error::Error;
use std::fs;
use std::path::Path;

fn load_config(path: Option<&str>) -> Result<GeneratorConfig, Box<dyn Error>> {
    match path {
        Some(path) => Ok(serde_json::from_str(&fs::read_to_string(path)?)?),
        None => Ok(GeneratorConfig::default()),
    }
}

fn parse_or<T>(matches: &ArgMatches, name: &str, default: T) -> Result<T, Box<dyn Error>>
where
    T: std::str::FromStr,
    T::Err: Error + 'static,
{
    match matches.value_of(name) {
        Some(value) => Ok(value.parse()?),
        None => Ok(default),
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    let matches = App::new("Ball Sort Solver")
        .arg(
            Arg::with_name("log-level")
                .help("Messages below this level are not shown")
                .long("log-level")
                .possible_values(&["off", "error", "warn", "info", "debug", "trace"])
                .default_value("warn")
                .takes_value(true),
        )
        .subcommand(
            SubCommand::with_name("generate")
                .about("Generate puzzles and print them in puzzle text form")
                .arg(
                    Arg::with_name("level")
                        .help("The level to generate puzzles for")
                        .short("l")
                        .long("level")
                        .required(true)
                        .takes_value(true),
                )
                .arg(
                    Arg::with_name("count")
                        .help("The number of puzzles to generate")
                        .short("n")
                        .long("count")
                        .default_value("1")
                        .takes_value(true),
                )
                .arg(
                    Arg::with_name("seed")
                        .help("Seed for the random number generator")
                        .long("seed")
                        .takes_value(true),
                )
                .arg(
                    Arg::with_name("json")
                        .help("Print one JSON object per puzzle")
                        .long("json"),
                )
                .arg(
                    Arg::with_name("config")
                        .help("A JSON file overriding generator settings")
                        .long("config")
                        .takes_value(true),
                ),
        )
        .subcommand(
            SubCommand::with_name("solve")
                .about("Solve every puzzle in a puzzle text file")
                .arg(
                    Arg::with_name("file")
                        .help("The puzzle file to solve")
                        .required(true)
                        .index(1),
                )
                .arg(
                    Arg::with_name("max-states")
                        .help("Give up on a puzzle after exploring this many states")
                        .long("max-states")
                        .takes_value(true),
                ),
        )
        .subcommand(
            SubCommand::with_name("difficulty")
                .about("Print the difficulty curve")
                .arg(
                    Arg::with_name("from")
                        .help("The first level to print")
                        .long("from")
                        .default_value("1")
                        .takes_value(true),
                )
                .arg(
                    Arg::with_name("to")
                        .help("The last level to print")
                        .long("to")
                        .default_value("50")
                        .takes_value(true),
                ),
        )
        .setting(AppSettings::ArgRequiredElseHelp)
        .get_matches();

    logging::init(parse_or(&matches, "log-level", LevelFilter::Warn)?)?;

    match matches.subcommand() {
        ("generate", Some(matches)) => generate::run(
            parse_or(matches, "level", 1)?,
            parse_or(matches, "count", 1)?,
            match matches.value_of("seed") {
                Some(seed) => Some(seed.parse()?),
                None => None,
            },
            matches.is_present("json"),
            &load_config(matches.value_of("config"))?,
        ),
        ("solve", Some(matches)) => {
            let limits = SolverLimits {
                max_states: parse_or(matches, "max-states", SolverLimits::default().max_states)?,
                ..SolverLimits::default()
            };

            solve::run(Path::new(matches.value_of("file").unwrap_or_default()), limits)
        }
        ("difficulty", Some(matches)) => {
            difficulty::run(parse_or(matches, "from", 1)?, parse_or(matches, "to", 50)?);
            Ok(())
        }
        _ => Ok(()),
    }
}
