use crate::tubes::{Ball, ColorId, PuzzleState, StateError, Tube};
use pest::{iterators::Pair, Parser};
use pest_derive::Parser;
use std::num::ParseIntError;
use thiserror::Error;

#[derive(Parser)]
#[grammar = "puzzle_file/grammar.pest"]
struct PuzzleFileParser;

#[derive(Debug, Error)]
pub enum ParseError {
    #[error("syntax error in puzzle text\n{0}")]
    Syntax(#[from] Box<pest::error::Error<Rule>>),
    #[error("invalid level number: {0}")]
    Level(#[from] ParseIntError),
    #[error(transparent)]
    State(#[from] StateError),
}

impl From<pest::error::Error<Rule>> for ParseError {
    fn from(error: pest::error::Error<Rule>) -> ParseError {
        ParseError::Syntax(Box::new(error))
    }
}

/// One puzzle line of a file, with its optional `level N:` tag.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PuzzleEntry {
    pub level: Option<u32>,
    pub state: PuzzleState,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PuzzleCollection {
    pub entries: Vec<PuzzleEntry>,
}

impl PuzzleCollection {
    pub fn new() -> PuzzleCollection {
        PuzzleCollection::default()
    }

    pub fn push(&mut self, level: Option<u32>, state: PuzzleState) {
        self.entries.push(PuzzleEntry { level, state });
    }

    pub fn append(&mut self, mut other: PuzzleCollection) {
        self.entries.append(&mut other.entries);
    }

    pub fn to_text(&self) -> String {
        let mut text = String::new();

        for entry in &self.entries {
            if let Some(level) = entry.level {
                text.push_str(&format!("level {}: ", level));
            }
            text.push_str(&format!("{}\n", entry.state));
        }

        text
    }
}

fn read_ball(pair: Pair<Rule>) -> Ball {
    let mut chars = pair.as_str().chars();

    // The grammar only admits a capital letter with an optional `!`.
    let color = chars
        .next()
        .and_then(ColorId::from_letter)
        .unwrap_or_else(|| unreachable!("ball rule always starts with a capital letter"));

    Ball {
        color,
        locked: chars.next() == Some('!'),
    }
}

fn read_tube(pair: Pair<Rule>) -> Result<Tube, StateError> {
    Tube::from_balls(pair.into_inner().map(read_ball))
}

fn read_puzzle(pair: Pair<Rule>) -> Result<PuzzleEntry, ParseError> {
    let mut level = None;
    let mut tubes = Vec::new();

    for inner in pair.into_inner() {
        match inner.as_rule() {
            Rule::level_tag => {
                for number in inner.into_inner() {
                    level = Some(number.as_str().parse()?);
                }
            }
            Rule::tube => tubes.push(read_tube(inner)?),
            _ => {}
        }
    }

    Ok(PuzzleEntry {
        level,
        state: PuzzleState::new(tubes),
    })
}

pub fn parse(contents: &str) -> Result<PuzzleCollection, ParseError> {
    let mut collection = PuzzleCollection::new();

    for pair in PuzzleFileParser::parse(Rule::file, contents)? {
        for puzzle in pair
            .into_inner()
            .filter(|inner| inner.as_rule() == Rule::puzzle)
        {
            collection.entries.push(read_puzzle(puzzle)?);
        }
    }

    Ok(collection)
}

/// Parses a single state such as `[A B! C] [] [D]`.
pub fn parse_state(contents: &str) -> Result<PuzzleState, ParseError> {
    let mut tubes = Vec::new();

    for pair in PuzzleFileParser::parse(Rule::state, contents.trim())? {
        for tube in pair
            .into_inner()
            .filter(|inner| inner.as_rule() == Rule::tube)
        {
            tubes.push(read_tube(tube)?);
        }
    }

    Ok(PuzzleState::new(tubes))
}
