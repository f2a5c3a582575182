use super::StateError;
use serde::{Deserialize, Serialize};
use std::convert::TryFrom;
use std::fmt;
use std::fmt::{Display, Formatter};

/// Reference colours, indexed by `ColorId`.
pub const PALETTE: [&str; 15] = [
    "#FF6B6B", "#FFD93D", "#6BCB77", "#4D96FF", "#A100A1", "#FFB6C1", "#FF885E", "#8A9A5B",
    "#FF4500", "#20B2AA", "#9370DB", "#00CED1", "#F08080", "#32CD32", "#FFC0CB",
];

/// Colour ids are written as the letters `A` to `Z`.
pub const MAX_COLORS: usize = 26;

#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct ColorId(u8);

impl ColorId {
    pub fn new(index: usize) -> Result<ColorId, StateError> {
        if index < MAX_COLORS {
            Ok(ColorId(index as u8))
        } else {
            Err(StateError::ColorOutOfRange(index))
        }
    }

    pub fn index(self) -> usize {
        self.0 as usize
    }

    pub fn from_letter(letter: char) -> Option<ColorId> {
        if letter.is_ascii_uppercase() {
            Some(ColorId(letter as u8 - b'A'))
        } else {
            None
        }
    }

    pub fn letter(self) -> char {
        (b'A' + self.0) as char
    }

    /// The palette colour, if this id falls inside the reference palette.
    pub fn hex(self) -> Option<&'static str> {
        PALETTE.get(self.index()).copied()
    }
}

impl TryFrom<u8> for ColorId {
    type Error = StateError;

    fn try_from(value: u8) -> Result<ColorId, StateError> {
        ColorId::new(value as usize)
    }
}

impl From<ColorId> for u8 {
    fn from(color: ColorId) -> u8 {
        color.0
    }
}

impl Display for ColorId {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}
