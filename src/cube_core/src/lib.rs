//! Facelet model of a 3x3x3 cube, quarter-turns on it, and undoing the turns a
//! session recorded.
//!
//! ```
//! use cube_core::{CubeSession, Face, SessionConfig};
//!
//! let mut session = CubeSession::new(SessionConfig::default());
//! let solved = session.facelet_string();
//!
//! session.turn(Face::R);
//! session.turn(Face::U);
//! assert_ne!(session.facelet_string(), solved);
//!
//! session.solve();
//! assert_eq!(session.facelet_string(), solved);
//! ```

pub mod config;
pub mod face;
pub mod history;
pub mod palette;
pub mod rotation;
pub mod session;
pub mod state;

pub use config::{ConfigError, InverseStrategy, SessionConfig};
pub use face::{Direction, Face, Facelet, InvalidMoveError, Move, parse_faces};
pub use history::{MoveHistory, Step, StepLog};
pub use palette::Palette;
pub use session::{CubeSession, NullSink, RenderSink, SolveOutcome, Tracking};
pub use state::{CubeState, FaceGrid};
