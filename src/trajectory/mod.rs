//! Cursor trajectory generation

pub mod cancel;
pub mod generator;

pub use cancel::CancelToken;
pub use generator::{MoveReport, Steps, Trajectory, TrajectoryGenerator, TrajectoryStep};
