//! Command interpreter - turns `<KeyName> [down|up]` strings into input events

pub mod dispatcher;
pub mod modifiers;
pub mod parser;

pub use dispatcher::EventDispatcher;
pub use modifiers::{Modifier, ModifierStateMachine};
pub use parser::{classify, parse, Action, Command, KeyClass, Target};

use crate::backend::BackendError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CommandError {
    #[error("Unknown key: {0}")]
    UnknownKey(String),

    /// Classified as a mouse button but no button matches; the classification
    /// and button tables disagree.
    #[error("Unknown mouse button: {0}")]
    UnknownMouseButton(String),

    #[error(transparent)]
    Backend(#[from] BackendError),
}
