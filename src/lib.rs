//! input-sim: synthetic keyboard/mouse input from a small command language
//!
//! Commands of the form `<KeyName> [down|up]` are turned into key and mouse
//! button events, and cursor moves follow eased, slightly curved, paced
//! trajectories instead of jumping.

pub mod backend;
pub mod command;
pub mod config;
pub mod keys;
pub mod script;
pub mod simulator;
pub mod trajectory;

// Re-export commonly used items
pub use backend::{KeyboardBackend, MouseBackend, MouseButton, Point};
pub use command::{Action, CommandError};
pub use config::{Config, ConfigError};
pub use simulator::{SharedSimulator, Simulator};
pub use trajectory::{CancelToken, TrajectoryGenerator};
