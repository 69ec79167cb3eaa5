//! A cube session: one cube, the moves made on it, and what was reported
//! about them.

use std::fmt;

use log::{debug, info, warn};

use crate::{
    config::{InverseStrategy, SessionConfig},
    face::{Face, InvalidMoveError, parse_faces},
    history::{MoveHistory, Step, StepLog},
    rotation,
    state::CubeState,
};

/// Receives the session's status lines and serialized cube whenever the cube
/// changes. Nothing is expected back.
pub trait RenderSink {
    fn render(&mut self, steps: &StepLog, cube: &str);
}

/// A sink that drops everything.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullSink;

impl RenderSink for NullSink {
    fn render(&mut self, _steps: &StepLog, _cube: &str) {}
}

impl<F: FnMut(&StepLog, &str)> RenderSink for F {
    fn render(&mut self, steps: &StepLog, cube: &str) {
        self(steps, cube);
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Tracking {
    /// Recorded in the history and reported as a step.
    Tracked,
    Untracked,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum SolveOutcome {
    NothingToSolve,
    Solved { undone: usize },
}

pub struct CubeSession<S: RenderSink = NullSink> {
    state: CubeState,
    history: MoveHistory,
    steps: StepLog,
    config: SessionConfig,
    sink: S,
}

impl Default for CubeSession {
    fn default() -> Self {
        CubeSession::new(SessionConfig::default())
    }
}

impl CubeSession {
    pub fn new(config: SessionConfig) -> Self {
        CubeSession::with_sink(config, NullSink)
    }
}

impl<S: RenderSink> CubeSession<S> {
    /// Start from the solved cube with an empty history.
    pub fn with_sink(config: SessionConfig, sink: S) -> Self {
        CubeSession {
            state: CubeState::solved(),
            history: MoveHistory::default(),
            steps: StepLog::default(),
            config,
            sink,
        }
    }

    pub fn state(&self) -> &CubeState {
        &self.state
    }

    pub fn history(&self) -> &MoveHistory {
        &self.history
    }

    pub fn steps(&self) -> &StepLog {
        &self.steps
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    pub fn into_sink(self) -> S {
        self.sink
    }

    /// The cube serialized through the configured palette.
    pub fn facelet_string(&self) -> String {
        self.state.to_facelet_string(&self.config.palette)
    }

    fn render(&mut self) {
        let cube = self.facelet_string();
        self.sink.render(&self.steps, &cube);
    }

    /// A tracked clockwise quarter-turn.
    pub fn turn(&mut self, face: Face) {
        self.turn_with(face, Tracking::Tracked);
    }

    pub fn turn_with(&mut self, face: Face, tracking: Tracking) {
        rotation::apply(&mut self.state, face);

        if tracking == Tracking::Tracked {
            debug!("Recording {face}");
            self.history.record(face);
            self.steps.push(Step::Rotate(face));
        }

        self.render();
    }

    /// A tracked turn of a face given by name.
    ///
    /// # Errors
    ///
    /// If `identifier` is not a face. The cube, history, and steps are left
    /// exactly as they were.
    pub fn turn_named(&mut self, identifier: &str) -> Result<Face, InvalidMoveError> {
        let face = identifier.parse::<Face>().inspect_err(|e| warn!("{e}"))?;
        self.turn(face);
        Ok(face)
    }

    /// Tracked turns for every face letter in `sequence`, e.g. `"R U F"`.
    /// Returns how many turns were made.
    ///
    /// # Errors
    ///
    /// If any letter is not a face, in which case no turn is made at all.
    pub fn turn_sequence(&mut self, sequence: &str) -> Result<usize, InvalidMoveError> {
        let faces = parse_faces(sequence).inspect_err(|e| warn!("{e}"))?;
        for &face in &faces {
            self.turn(face);
        }
        Ok(faces.len())
    }

    /// Undo one clockwise quarter-turn of `face`. Never recorded in the
    /// history.
    pub fn inverse_turn(&mut self, face: Face) {
        match self.config.inverse_strategy {
            InverseStrategy::Direct => rotation::apply_inverse(&mut self.state, face),
            InverseStrategy::ThreeQuarterTurns => {
                for _ in 0..3 {
                    rotation::apply(&mut self.state, face);
                }
            }
        }

        debug!("Undid {face}");
        self.steps.push(Step::Undo(face));
        self.render();
    }

    /// Undo every recorded move, newest first, and clear the history.
    pub fn solve(&mut self) -> SolveOutcome {
        if self.history.is_empty() {
            info!("Nothing to solve");
            self.steps.push(Step::NothingToSolve);
            self.render();
            return SolveOutcome::NothingToSolve;
        }

        self.steps.push(Step::Solving);

        let moves = self.history.drain();
        info!("Solving by undoing {} moves", moves.len());
        for &face in moves.iter().rev() {
            self.inverse_turn(face);
        }

        self.steps.push(Step::Solved);
        info!("Solved");
        self.render();

        SolveOutcome::Solved {
            undone: moves.len(),
        }
    }

    /// Back to the solved cube with an empty history. The step log is kept.
    pub fn reset(&mut self) {
        self.state.reset();
        self.history.drain();
        self.render();
    }
}

impl<S: RenderSink> fmt::Display for CubeSession<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.facelet_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::palette::Palette;

    #[test]
    fn turn_records_and_reports() {
        let mut session = CubeSession::new(SessionConfig::default());
        session.turn(Face::F);
        session.turn_with(Face::U, Tracking::Untracked);

        assert_eq!(session.history().as_slice(), [Face::F]);
        assert_eq!(session.steps().lines(), ["Rotate F"]);
        assert!(!session.state().is_solved());
    }

    #[test]
    fn empty_solve_is_a_no_op() {
        let mut session = CubeSession::new(SessionConfig::default());
        let before = session.facelet_string();

        assert_eq!(session.solve(), SolveOutcome::NothingToSolve);
        assert_eq!(session.facelet_string(), before);
        assert_eq!(session.steps().lines(), ["Nothing to solve."]);
    }

    #[test]
    fn sink_sees_every_change() {
        let mut renders = Vec::new();
        let mut session =
            CubeSession::with_sink(SessionConfig::default(), |steps: &StepLog, cube: &str| {
                renders.push((steps.len(), cube.to_owned()));
            });
        session.turn(Face::R);
        session.solve();
        drop(session);

        // turn, one undo, solve end
        assert_eq!(renders.len(), 3);
        assert_eq!(renders[0].0, 1);
        assert_ne!(renders[0].1, renders[2].1);
        assert_eq!(renders[2].0, 4);
    }

    #[test]
    fn palette_comes_from_the_config() {
        let config = SessionConfig {
            palette: Palette::face_letters(),
            ..SessionConfig::default()
        };
        let mut lettered = CubeSession::new(config);
        let mut plain = CubeSession::new(SessionConfig::default());
        lettered.turn(Face::F);
        plain.turn(Face::F);

        assert_eq!(lettered.state(), plain.state());
        assert_ne!(lettered.facelet_string(), plain.facelet_string());
        assert_eq!(
            lettered.to_string(),
            lettered.state().to_facelet_string(&Palette::face_letters())
        );
        assert_eq!(&lettered.facelet_string()[..9], "UUUUUULLL");
    }

    #[test]
    fn reset_clears_history_only() {
        let mut session = CubeSession::new(SessionConfig::default());
        session.turn_sequence("RUF").unwrap();
        session.reset();

        assert!(session.state().is_solved());
        assert!(session.history().is_empty());
        assert_eq!(session.steps().len(), 3);
        assert_eq!(session.solve(), SolveOutcome::NothingToSolve);
    }
}
