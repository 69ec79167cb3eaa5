use std::{fmt, str::FromStr};

use thiserror::Error;

/// One of the six faces of a 3x3x3 cube.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Face {
    U,
    D,
    F,
    B,
    L,
    R,
}

impl Face {
    pub const ALL: [Self; 6] = {
        use Face::*;
        let v = [U, D, F, B, L, R];

        let mut i = 0;
        while i < v.len() {
            assert!(i == v[i] as usize);
            i += 1;
        }

        v
    };

    /// The face order of the canonical facelet string.
    pub const SERIALIZATION_ORDER: [Self; 6] =
        [Face::U, Face::R, Face::F, Face::D, Face::L, Face::B];

    pub fn letter(self) -> char {
        match self {
            Face::U => 'U',
            Face::D => 'D',
            Face::F => 'F',
            Face::B => 'B',
            Face::L => 'L',
            Face::R => 'R',
        }
    }
}

impl fmt::Display for Face {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

/// A face identifier that is not one of U, D, F, B, L, R.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Invalid move: {identifier:?} is not one of U, D, F, B, L, R")]
pub struct InvalidMoveError {
    pub identifier: String,
}

impl InvalidMoveError {
    pub fn new(identifier: impl Into<String>) -> Self {
        Self {
            identifier: identifier.into(),
        }
    }
}

impl FromStr for Face {
    type Err = InvalidMoveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "U" => Ok(Face::U),
            "D" => Ok(Face::D),
            "F" => Ok(Face::F),
            "B" => Ok(Face::B),
            "L" => Ok(Face::L),
            "R" => Ok(Face::R),
            _ => Err(InvalidMoveError::new(s)),
        }
    }
}

impl TryFrom<char> for Face {
    type Error = InvalidMoveError;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        Face::ALL
            .into_iter()
            .find(|face| face.letter() == c)
            .ok_or_else(|| InvalidMoveError::new(c))
    }
}

/// A single sticker. It carries the face whose solved color it shows; rotations
/// only ever move it around.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Facelet(pub Face);

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Direction {
    Clockwise,
    CounterClockwise,
}

/// A quarter-turn of one face.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Move {
    pub face: Face,
    pub direction: Direction,
}

impl Move {
    pub fn clockwise(face: Face) -> Self {
        Move {
            face,
            direction: Direction::Clockwise,
        }
    }

    pub fn counter_clockwise(face: Face) -> Self {
        Move {
            face,
            direction: Direction::CounterClockwise,
        }
    }

    #[must_use]
    pub fn inverse(self) -> Self {
        Move {
            face: self.face,
            direction: match self.direction {
                Direction::Clockwise => Direction::CounterClockwise,
                Direction::CounterClockwise => Direction::Clockwise,
            },
        }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.direction {
            Direction::Clockwise => write!(f, "{}", self.face),
            Direction::CounterClockwise => write!(f, "{}'", self.face),
        }
    }
}

/// Parse a move sequence of face letters. Letters may be separated by
/// whitespace or written back to back, so `"R U F"` and `"RUF"` are the same
/// sequence. The whole sequence is parsed before anything is returned.
///
/// # Errors
///
/// The first character that does not name a face.
pub fn parse_faces(sequence: &str) -> Result<Vec<Face>, InvalidMoveError> {
    sequence
        .chars()
        .filter(|c| !c.is_whitespace())
        .map(Face::try_from)
        .collect()
}
