//! Quarter-turns of a single face.
//!
//! A turn spins the nine stickers of the turning face in place and cycles one
//! three-sticker strip on each of its four neighbors. The strips of every face
//! are declared once in [`FACE_TURNS`]; both directions of a turn are read off
//! the same table.

use log::trace;

use crate::{
    face::{Direction, Face, Facelet, InvalidMoveError, Move},
    state::{CubeState, FaceGrid},
};

/// `new[i] = old[CLOCKWISE[i]]` for the turning face.
const CLOCKWISE: [usize; 9] = [6, 3, 0, 7, 4, 1, 8, 5, 2];

/// Three stickers of one face, in reading order.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Strip {
    pub face: Face,
    pub indices: [usize; 3],
}

/// `dst` receives the pre-turn contents of `src`, element by element.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct StripAssignment {
    pub dst: Strip,
    pub src: Strip,
}

#[derive(Debug)]
pub struct FaceTurn {
    pub face: Face,
    pub strips: [StripAssignment; 4],
}

const fn strip(face: Face, indices: [usize; 3]) -> Strip {
    Strip { face, indices }
}

const fn assign(dst: Strip, src: Strip) -> StripAssignment {
    StripAssignment { dst, src }
}

/// Clockwise edge-strip cycles, indexed by `Face as usize`.
pub static FACE_TURNS: [FaceTurn; 6] = {
    use Face::*;
    [
        FaceTurn {
            face: U,
            strips: [
                assign(strip(F, [0, 1, 2]), strip(L, [0, 1, 2])),
                assign(strip(L, [0, 1, 2]), strip(B, [0, 1, 2])),
                assign(strip(R, [0, 1, 2]), strip(F, [0, 1, 2])),
                assign(strip(B, [0, 1, 2]), strip(R, [0, 1, 2])),
            ],
        },
        FaceTurn {
            face: D,
            strips: [
                assign(strip(F, [6, 7, 8]), strip(R, [6, 7, 8])),
                assign(strip(L, [6, 7, 8]), strip(F, [6, 7, 8])),
                assign(strip(R, [6, 7, 8]), strip(B, [6, 7, 8])),
                assign(strip(B, [6, 7, 8]), strip(L, [6, 7, 8])),
            ],
        },
        FaceTurn {
            face: F,
            strips: [
                assign(strip(U, [6, 7, 8]), strip(L, [8, 5, 2])),
                assign(strip(D, [0, 1, 2]), strip(R, [0, 3, 6])),
                assign(strip(L, [2, 5, 8]), strip(D, [2, 1, 0])),
                assign(strip(R, [0, 3, 6]), strip(U, [6, 7, 8])),
            ],
        },
        FaceTurn {
            face: B,
            strips: [
                assign(strip(U, [0, 1, 2]), strip(R, [2, 5, 8])),
                assign(strip(D, [6, 7, 8]), strip(L, [6, 3, 0])),
                assign(strip(L, [0, 3, 6]), strip(U, [0, 1, 2])),
                assign(strip(R, [2, 5, 8]), strip(D, [8, 7, 6])),
            ],
        },
        FaceTurn {
            face: L,
            strips: [
                assign(strip(U, [0, 3, 6]), strip(B, [8, 5, 2])),
                assign(strip(D, [0, 3, 6]), strip(F, [0, 3, 6])),
                assign(strip(F, [0, 3, 6]), strip(U, [0, 3, 6])),
                // Reversed: the back face's columns run opposite to the down face's
                assign(strip(B, [2, 5, 8]), strip(D, [6, 3, 0])),
            ],
        },
        FaceTurn {
            face: R,
            strips: [
                assign(strip(U, [2, 5, 8]), strip(F, [2, 5, 8])),
                assign(strip(D, [2, 5, 8]), strip(B, [6, 3, 0])),
                assign(strip(F, [2, 5, 8]), strip(D, [2, 5, 8])),
                // Reversed: the back face's columns run opposite to the up face's
                assign(strip(B, [0, 3, 6]), strip(U, [8, 5, 2])),
            ],
        },
    ]
};

impl FaceTurn {
    pub fn of(face: Face) -> &'static FaceTurn {
        &FACE_TURNS[face as usize]
    }
}

fn read_strip(state: &CubeState, strip: Strip) -> [Facelet; 3] {
    let grid = state.get(strip.face);
    strip.indices.map(|i| grid[i])
}

fn write_strip(state: &mut CubeState, strip: Strip, values: [Facelet; 3]) {
    let grid = state.get_mut(strip.face);
    for (i, value) in strip.indices.into_iter().zip(values) {
        grid[i] = value;
    }
}

/// Cycle the four strips. Every right-hand side is read before any left-hand
/// side is written.
fn cycle_strips(state: &mut CubeState, turn: &FaceTurn, direction: Direction) {
    let pairs = turn.strips.map(|a| match direction {
        Direction::Clockwise => (a.src, a.dst),
        Direction::CounterClockwise => (a.dst, a.src),
    });

    let snapshot = pairs.map(|(read, _)| read_strip(state, read));

    for ((_, write), values) in pairs.into_iter().zip(snapshot) {
        write_strip(state, write, values);
    }
}

fn spin_face(grid: &FaceGrid, direction: Direction) -> FaceGrid {
    let mut spun = *grid;
    for (new, &old) in CLOCKWISE.iter().enumerate() {
        match direction {
            Direction::Clockwise => spun[new] = grid[old],
            Direction::CounterClockwise => spun[old] = grid[new],
        }
    }
    spun
}

/// One clockwise quarter-turn of `face`.
pub fn apply(state: &mut CubeState, face: Face) {
    apply_move(state, Move::clockwise(face));
}

/// One counter-clockwise quarter-turn of `face`; undoes [`apply`] in a single
/// permutation.
pub fn apply_inverse(state: &mut CubeState, face: Face) {
    apply_move(state, Move::clockwise(face).inverse());
}

pub fn apply_move(state: &mut CubeState, move_: Move) {
    trace!("Turning {move_}");

    let turn = FaceTurn::of(move_.face);
    let spun = spin_face(state.get(move_.face), move_.direction);
    state.set(move_.face, spun);
    cycle_strips(state, turn, move_.direction);
}

/// Parse `identifier` as a face and turn it clockwise. Nothing is touched if
/// the identifier is not a face.
///
/// # Errors
///
/// If `identifier` is not one of U, D, F, B, L, R.
pub fn apply_named(state: &mut CubeState, identifier: &str) -> Result<Face, InvalidMoveError> {
    let face = identifier.parse::<Face>()?;
    apply(state, face);
    Ok(face)
}
