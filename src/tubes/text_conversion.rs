use super::{Ball, PuzzleState, Tube};
use crate::puzzle_file::{self, ParseError};
use std::fmt;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

impl Display for Ball {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "{}", self.color)?;

        if self.locked {
            f.write_str("!")?;
        }

        Ok(())
    }
}

impl Display for Tube {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        f.write_str("[")?;

        for (i, ball) in self.balls.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{}", ball)?;
        }

        f.write_str("]")
    }
}

impl Display for PuzzleState {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        for (i, tube) in self.tubes.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{}", tube)?;
        }

        Ok(())
    }
}

impl FromStr for PuzzleState {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<PuzzleState, ParseError> {
        puzzle_file::parse_state(s)
    }
}
