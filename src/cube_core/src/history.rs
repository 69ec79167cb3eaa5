use std::{fmt, mem, ops::Index};

use crate::face::Face;

/// Tracked clockwise quarter-turns since the last solve, oldest first.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct MoveHistory {
    moves: Vec<Face>,
}

impl MoveHistory {
    pub fn record(&mut self, face: Face) {
        self.moves.push(face);
    }

    /// Take every recorded move, leaving the history empty.
    pub fn drain(&mut self) -> Vec<Face> {
        mem::take(&mut self.moves)
    }

    pub fn len(&self) -> usize {
        self.moves.len()
    }

    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    pub fn as_slice(&self) -> &[Face] {
        &self.moves
    }
}

/// A status line describing what the session just did.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Step {
    Rotate(Face),
    Undo(Face),
    Solving,
    Solved,
    NothingToSolve,
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Step::Rotate(face) => write!(f, "Rotate {face}"),
            Step::Undo(face) => write!(f, "Undo {face}"),
            Step::Solving => write!(f, "Solving Cube..."),
            Step::Solved => write!(f, "Cube Solved!"),
            Step::NothingToSolve => write!(f, "Nothing to solve."),
        }
    }
}

/// Append-only record of [`Step`]s. It never feeds back into the cube.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct StepLog {
    steps: Vec<Step>,
}

impl StepLog {
    pub fn push(&mut self, step: Step) {
        self.steps.push(step);
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn last(&self) -> Option<Step> {
        self.steps.last().copied()
    }

    pub fn as_slice(&self) -> &[Step] {
        &self.steps
    }

    pub fn iter(&self) -> impl DoubleEndedIterator<Item = Step> + '_ {
        self.steps.iter().copied()
    }

    /// Every entry rendered as its status line.
    pub fn lines(&self) -> Vec<String> {
        self.steps.iter().map(Step::to_string).collect()
    }
}

impl Index<usize> for StepLog {
    type Output = Step;

    fn index(&self, index: usize) -> &Step {
        &self.steps[index]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn drain_empties_in_order() {
        let mut history = MoveHistory::default();
        history.record(Face::R);
        history.record(Face::U);
        history.record(Face::R);
        assert_eq!(history.len(), 3);

        assert_eq!(history.drain(), vec![Face::R, Face::U, Face::R]);
        assert!(history.is_empty());
        assert!(history.drain().is_empty());
    }

    #[test]
    fn step_lines() {
        let mut log = StepLog::default();
        for step in [
            Step::Rotate(Face::F),
            Step::Solving,
            Step::Undo(Face::F),
            Step::Solved,
            Step::NothingToSolve,
        ] {
            log.push(step);
        }

        assert_eq!(
            log.lines(),
            [
                "Rotate F",
                "Solving Cube...",
                "Undo F",
                "Cube Solved!",
                "Nothing to solve."
            ]
        );
        assert_eq!(log[2], Step::Undo(Face::F));
        assert_eq!(log.last(), Some(Step::NothingToSolve));
    }
}
