//! Mock mouse backend for testing.
//!
//! This backend logs mouse events instead of actually sending them
//! to the OS. It keeps a virtual cursor so relative moves and absolute
//! placement can be checked after the fact.

use super::event_log::EventLog;
use super::MouseButton;
use log::info;
use serde::Serialize;
use std::sync::{Arc, Mutex};

/// A mouse primitive recorded by [`MockMouseBackend`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum MouseEvent {
    Button { button: MouseButton, down: bool, extra_data: u32 },
    Move { dx: i32, dy: i32 },
    SetPosition { x: i32, y: i32 },
}

#[derive(Debug, Default)]
struct Shared {
    events: Vec<MouseEvent>,
    cursor: (i32, i32),
    fail_position: bool,
    log: Option<EventLog>,
}

impl Shared {
    fn record(&mut self, event: MouseEvent) {
        self.events.push(event);
        if let Some(log) = &self.log {
            log.push(event);
        }
    }
}

/// Mock mouse backend that logs and records events instead of sending them.
///
/// Clones share the same event log and virtual cursor.
#[derive(Clone, Debug, Default)]
pub struct MockMouseBackend {
    shared: Arc<Mutex<Shared>>,
}

impl MockMouseBackend {
    /// Create a new mock mouse backend with the cursor at (0, 0).
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a mock with the virtual cursor at `(x, y)`.
    pub fn at(x: i32, y: i32) -> Self {
        let mock = Self::new();
        if let Ok(mut shared) = mock.shared.lock() {
            shared.cursor = (x, y);
        }
        mock
    }

    /// Also append every recorded event to `log`.
    pub fn with_log(self, log: EventLog) -> Self {
        if let Ok(mut shared) = self.shared.lock() {
            shared.log = Some(log);
        }
        self
    }

    /// Make cursor-position queries fail (or succeed again).
    pub fn fail_position_queries(&self, fail: bool) {
        if let Ok(mut shared) = self.shared.lock() {
            shared.fail_position = fail;
        }
    }

    /// Press or release a button (logs to info level).
    pub fn button(&self, button: MouseButton, down: bool, extra_data: u32) -> Result<(), String> {
        info!(
            "[MOCK MOUSE] Button {}: {} (data={})",
            if down { "DOWN" } else { "UP" },
            button,
            extra_data
        );
        self.with_shared(|shared| {
            shared.record(MouseEvent::Button { button, down, extra_data });
        })
    }

    /// Move mouse relatively (logs to info level).
    pub fn move_relative(&self, dx: i32, dy: i32) -> Result<(), String> {
        info!("[MOCK MOUSE] Move relative: dx={}, dy={}", dx, dy);
        self.with_shared(|shared| {
            shared.cursor.0 += dx;
            shared.cursor.1 += dy;
            shared.record(MouseEvent::Move { dx, dy });
        })
    }

    /// Place the virtual cursor (logs to info level).
    pub fn set_position(&self, x: i32, y: i32) -> Result<(), String> {
        info!("[MOCK MOUSE] Set position: ({}, {})", x, y);
        self.with_shared(|shared| {
            shared.cursor = (x, y);
            shared.record(MouseEvent::SetPosition { x, y });
        })
    }

    /// Current virtual cursor position.
    pub fn position(&self) -> Result<(i32, i32), String> {
        let shared = self
            .shared
            .lock()
            .map_err(|_| "mock mouse state poisoned".to_string())?;
        if shared.fail_position {
            return Err("injected cursor query failure".to_string());
        }
        Ok(shared.cursor)
    }

    /// Snapshot of every event recorded so far.
    pub fn events(&self) -> Vec<MouseEvent> {
        self.shared
            .lock()
            .map(|shared| shared.events.clone())
            .unwrap_or_default()
    }

    /// Drop all recorded events (the cursor is kept).
    pub fn clear(&self) {
        if let Ok(mut shared) = self.shared.lock() {
            shared.events.clear();
        }
    }

    fn with_shared(&self, f: impl FnOnce(&mut Shared)) -> Result<(), String> {
        let mut shared = self
            .shared
            .lock()
            .map_err(|_| "mock mouse state poisoned".to_string())?;
        f(&mut shared);
        Ok(())
    }
}
