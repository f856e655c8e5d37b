//! Mock keyboard backend for testing.
//!
//! This backend logs keyboard events instead of actually sending them
//! to the OS, and records them so tests and `--dry-run` can inspect
//! exactly which primitives were issued.

use super::event_log::EventLog;
use super::KeyId;
use log::info;
use serde::Serialize;
use std::sync::{Arc, Mutex};

/// A keyboard primitive recorded by [`MockKeyboardBackend`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "event", content = "key", rename_all = "snake_case")]
pub enum KeyEvent {
    Down(KeyId),
    Up(KeyId),
}

#[derive(Debug, Default)]
struct Shared {
    events: Vec<KeyEvent>,
    failing: Option<KeyId>,
    log: Option<EventLog>,
}

/// Mock keyboard backend that logs and records events instead of sending them.
///
/// Clones share the same event log.
#[derive(Clone, Debug, Default)]
pub struct MockKeyboardBackend {
    shared: Arc<Mutex<Shared>>,
}

impl MockKeyboardBackend {
    /// Create a new mock keyboard backend.
    pub fn new() -> Self {
        Self::default()
    }

    /// Also append every recorded event to `log`.
    pub fn with_log(self, log: EventLog) -> Self {
        if let Ok(mut shared) = self.shared.lock() {
            shared.log = Some(log);
        }
        self
    }

    /// Make every subsequent primitive on `key` fail.
    pub fn fail_on(&self, key: KeyId) {
        if let Ok(mut shared) = self.shared.lock() {
            shared.failing = Some(key);
        }
    }

    /// Press a key (logs to info level).
    pub fn key_down(&self, key: KeyId) -> Result<(), String> {
        info!("[MOCK KEYBOARD] Key DOWN: 0x{:02X}", key);
        self.record(KeyEvent::Down(key))
    }

    /// Release a key (logs to info level).
    pub fn key_up(&self, key: KeyId) -> Result<(), String> {
        info!("[MOCK KEYBOARD] Key UP: 0x{:02X}", key);
        self.record(KeyEvent::Up(key))
    }

    /// Snapshot of every event recorded so far.
    pub fn events(&self) -> Vec<KeyEvent> {
        self.shared
            .lock()
            .map(|shared| shared.events.clone())
            .unwrap_or_default()
    }

    /// Drop all recorded events.
    pub fn clear(&self) {
        if let Ok(mut shared) = self.shared.lock() {
            shared.events.clear();
        }
    }

    fn record(&self, event: KeyEvent) -> Result<(), String> {
        let mut shared = self
            .shared
            .lock()
            .map_err(|_| "mock keyboard log poisoned".to_string())?;
        let key = match event {
            KeyEvent::Down(k) | KeyEvent::Up(k) => k,
        };
        if shared.failing == Some(key) {
            return Err(format!("injected failure for key 0x{:02X}", key));
        }
        shared.events.push(event);
        if let Some(log) = &shared.log {
            log.push(event);
        }
        Ok(())
    }
}
