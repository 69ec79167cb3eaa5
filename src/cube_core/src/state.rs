//! The 54-facelet model of the cube and its canonical string encoding.

use std::collections::HashMap;

use itertools::Itertools;

use crate::{
    face::{Face, Facelet},
    palette::Palette,
};

/// The nine stickers of one face in row-major order:
///
/// ```text
/// 0 1 2
/// 3 4 5
/// 6 7 8
/// ```
pub type FaceGrid = [Facelet; 9];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CubeState {
    faces: [FaceGrid; 6],
}

impl Default for CubeState {
    fn default() -> Self {
        CubeState::solved()
    }
}

impl CubeState {
    /// Every face uniformly filled with its own color.
    pub fn solved() -> Self {
        CubeState {
            faces: Face::ALL.map(|face| [Facelet(face); 9]),
        }
    }

    pub fn reset(&mut self) {
        *self = CubeState::solved();
    }

    pub fn get(&self, face: Face) -> &FaceGrid {
        &self.faces[face as usize]
    }

    pub fn set(&mut self, face: Face, grid: FaceGrid) {
        self.faces[face as usize] = grid;
    }

    pub(crate) fn get_mut(&mut self, face: Face) -> &mut FaceGrid {
        &mut self.faces[face as usize]
    }

    pub fn is_solved(&self) -> bool {
        Face::ALL
            .iter()
            .all(|&face| self.get(face).iter().all(|&facelet| facelet == Facelet(face)))
    }

    /// How many stickers of each color are on the cube.
    pub fn facelet_counts(&self) -> HashMap<Facelet, usize> {
        self.faces.iter().flatten().copied().counts()
    }

    /// The 54 symbols of the cube in face order U, R, F, D, L, B, each face
    /// row-major, rendered through `palette`.
    pub fn to_facelet_string(&self, palette: &Palette) -> String {
        Face::SERIALIZATION_ORDER
            .iter()
            .flat_map(|&face| self.get(face).iter())
            .map(|&facelet| palette.symbol(facelet))
            .collect()
    }

    /// An unfolded net of the cube for people to look at.
    ///
    /// ```text
    ///       www
    ///       www
    ///       www
    /// ooo ggg rrr bbb
    /// ...
    /// ```
    pub fn net(&self, palette: &Palette) -> String {
        let row = |face: Face, r: usize| {
            self.get(face)[r * 3..r * 3 + 3]
                .iter()
                .map(|&facelet| palette.symbol(facelet))
                .collect::<String>()
        };

        let mut lines = Vec::with_capacity(9);
        for r in 0..3 {
            lines.push(format!("    {}", row(Face::U, r)));
        }
        for r in 0..3 {
            lines.push(
                [Face::L, Face::F, Face::R, Face::B]
                    .iter()
                    .map(|&face| row(face, r))
                    .join(" "),
            );
        }
        for r in 0..3 {
            lines.push(format!("    {}", row(Face::D, r)));
        }
        lines.join("\n")
    }
}
