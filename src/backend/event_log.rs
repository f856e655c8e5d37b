//! Combined, ordered record of keyboard and mouse primitives.
//!
//! Mock backends attached to the same [`EventLog`] append to it in the
//! order the primitives were issued, across both devices.

use super::mock_keyboard::KeyEvent;
use super::mock_mouse::MouseEvent;
use serde::Serialize;
use std::sync::{Arc, Mutex};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum RecordedEvent {
    Key(KeyEvent),
    Mouse(MouseEvent),
}

impl From<KeyEvent> for RecordedEvent {
    fn from(event: KeyEvent) -> Self {
        RecordedEvent::Key(event)
    }
}

impl From<MouseEvent> for RecordedEvent {
    fn from(event: MouseEvent) -> Self {
        RecordedEvent::Mouse(event)
    }
}

/// Clones share the same entries.
#[derive(Clone, Debug, Default)]
pub struct EventLog {
    entries: Arc<Mutex<Vec<RecordedEvent>>>,
}

impl EventLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn push(&self, event: impl Into<RecordedEvent>) {
        if let Ok(mut entries) = self.entries.lock() {
            entries.push(event.into());
        }
    }

    /// Snapshot in issue order.
    pub fn entries(&self) -> Vec<RecordedEvent> {
        self.entries
            .lock()
            .map(|entries| entries.clone())
            .unwrap_or_default()
    }
}
