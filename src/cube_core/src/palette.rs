use std::ops::Index;

use serde::{Deserialize, Serialize};

use crate::face::{Face, Facelet};

/// The symbol each face's color is rendered with.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Palette {
    #[serde(rename = "U")]
    pub up: char,
    #[serde(rename = "D")]
    pub down: char,
    #[serde(rename = "F")]
    pub front: char,
    #[serde(rename = "B")]
    pub back: char,
    #[serde(rename = "L")]
    pub left: char,
    #[serde(rename = "R")]
    pub right: char,
}

impl Default for Palette {
    fn default() -> Self {
        Palette {
            up: 'w',
            down: 'y',
            front: 'g',
            back: 'b',
            left: 'o',
            right: 'r',
        }
    }
}

impl Palette {
    /// Render stickers by face letter, the `UUUUUUUUURRR...` notation.
    pub fn face_letters() -> Self {
        Palette {
            up: 'U',
            down: 'D',
            front: 'F',
            back: 'B',
            left: 'L',
            right: 'R',
        }
    }

    pub fn symbol(&self, facelet: Facelet) -> char {
        self[facelet.0]
    }

    /// The first face whose symbol is already used by an earlier face.
    pub fn duplicate(&self) -> Option<(Face, char)> {
        Face::ALL.iter().enumerate().find_map(|(i, &face)| {
            Face::ALL[..i]
                .iter()
                .any(|&earlier| self[earlier] == self[face])
                .then_some((face, self[face]))
        })
    }
}

impl Index<Face> for Palette {
    type Output = char;

    fn index(&self, face: Face) -> &char {
        match face {
            Face::U => &self.up,
            Face::D => &self.down,
            Face::F => &self.front,
            Face::B => &self.back,
            Face::L => &self.left,
            Face::R => &self.right,
        }
    }
}
