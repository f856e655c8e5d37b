//! Held-modifier bookkeeping.
//!
//! Tracks which modifiers *this process* has pressed and not released.
//! It is not the OS keyboard state and can drift from it if keys are
//! released by other means.

use log::trace;
use std::collections::HashSet;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Modifier {
    Shift,
    Ctrl,
    Alt,
    Win,
}

impl Modifier {
    /// Case-insensitive lookup; only the exact names `Shift`, `Ctrl`, `Alt`, `Win`.
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "shift" => Some(Modifier::Shift),
            "ctrl" => Some(Modifier::Ctrl),
            "alt" => Some(Modifier::Alt),
            "win" => Some(Modifier::Win),
            _ => None,
        }
    }
}

/// Debounces repeated `Down` actions on modifier keys.
#[derive(Debug, Default)]
pub struct ModifierStateMachine {
    held: HashSet<Modifier>,
}

impl ModifierStateMachine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark `modifier` held. Returns `false` if it already was; the caller
    /// only sends a key-down when this returns `true`.
    pub fn try_activate(&mut self, modifier: Modifier) -> bool {
        let activated = self.held.insert(modifier);
        trace!("try_activate {:?} -> {}", modifier, activated);
        activated
    }

    /// Forget `modifier`. Idempotent.
    pub fn release(&mut self, modifier: Modifier) {
        self.held.remove(&modifier);
        trace!("release {:?}", modifier);
    }

    pub fn is_held(&self, modifier: Modifier) -> bool {
        self.held.contains(&modifier)
    }

    pub fn held(&self) -> impl Iterator<Item = Modifier> + '_ {
        self.held.iter().copied()
    }

    pub fn is_empty(&self) -> bool {
        self.held.is_empty()
    }
}
