//! Backend abstraction for keyboard and mouse input injection
//!
//! This module provides a unified interface for sending keyboard and mouse
//! events to the operating system and for querying/placing the cursor.

pub mod keyboard_sendinput;
pub mod mouse_sendinput;
pub mod event_log;
pub mod mock_keyboard;
pub mod mock_mouse;

#[cfg(windows)]
pub use keyboard_sendinput::KeyboardSendInputBackend;
#[cfg(windows)]
pub use mouse_sendinput::MouseSendInputBackend;

pub use event_log::{EventLog, RecordedEvent};
pub use mock_keyboard::{KeyEvent, MockKeyboardBackend};
pub use mock_mouse::{MockMouseBackend, MouseEvent};

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Platform key identifier (a Windows virtual-key code).
pub type KeyId = u16;

#[derive(Debug, Error)]
pub enum BackendError {
    #[error("Backend operation failed: {0}")]
    Operation(String),

    #[error("Platform not supported")]
    PlatformNotSupported,
}

/// Absolute screen coordinates.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MouseButton {
    Left,
    Right,
    Middle,
    X1,
    X2,
}

impl MouseButton {
    pub const ALL: [MouseButton; 5] = [
        MouseButton::Left,
        MouseButton::Right,
        MouseButton::Middle,
        MouseButton::X1,
        MouseButton::X2,
    ];

    /// Command-language name of the button.
    pub fn name(self) -> &'static str {
        match self {
            MouseButton::Left => "LButton",
            MouseButton::Right => "RButton",
            MouseButton::Middle => "MButton",
            MouseButton::X1 => "XButton1",
            MouseButton::X2 => "XButton2",
        }
    }

    /// Case-insensitive lookup by command-language name.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|b| b.name().eq_ignore_ascii_case(name))
    }

    /// Extra data carried with the button event: which X button fired, zero otherwise.
    pub fn extra_data(self) -> u32 {
        match self {
            MouseButton::X1 => 1,
            MouseButton::X2 => 2,
            MouseButton::Left | MouseButton::Right | MouseButton::Middle => 0,
        }
    }
}

impl fmt::Display for MouseButton {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Unified backend interface for keyboard operations
pub trait KeyboardBackend {
    /// Press a key (key down event)
    fn key_down(&self, key: KeyId) -> Result<(), BackendError>;

    /// Release a key (key up event)
    fn key_up(&self, key: KeyId) -> Result<(), BackendError>;

    /// Press and release a key (complete key press)
    fn key_press(&self, key: KeyId) -> Result<(), BackendError> {
        self.key_down(key)?;
        self.key_up(key)?;
        Ok(())
    }
}

/// Unified backend interface for mouse operations
pub trait MouseBackend {
    /// Press or release a mouse button
    fn mouse_button(&self, button: MouseButton, down: bool, extra_data: u32) -> Result<(), BackendError>;

    /// Move mouse relatively by (dx, dy) pixels
    fn move_relative(&self, dx: i32, dy: i32) -> Result<(), BackendError>;

    /// Place the cursor at an absolute position
    fn set_position(&self, pos: Point) -> Result<(), BackendError>;

    /// Current absolute cursor position
    fn position(&self) -> Result<Point, BackendError>;
}

impl<T: KeyboardBackend + ?Sized> KeyboardBackend for &T {
    fn key_down(&self, key: KeyId) -> Result<(), BackendError> {
        (**self).key_down(key)
    }

    fn key_up(&self, key: KeyId) -> Result<(), BackendError> {
        (**self).key_up(key)
    }
}

impl<T: MouseBackend + ?Sized> MouseBackend for &T {
    fn mouse_button(&self, button: MouseButton, down: bool, extra_data: u32) -> Result<(), BackendError> {
        (**self).mouse_button(button, down, extra_data)
    }

    fn move_relative(&self, dx: i32, dy: i32) -> Result<(), BackendError> {
        (**self).move_relative(dx, dy)
    }

    fn set_position(&self, pos: Point) -> Result<(), BackendError> {
        (**self).set_position(pos)
    }

    fn position(&self) -> Result<Point, BackendError> {
        (**self).position()
    }
}

// Windows implementations
#[cfg(windows)]
impl KeyboardBackend for KeyboardSendInputBackend {
    fn key_down(&self, key: KeyId) -> Result<(), BackendError> {
        KeyboardSendInputBackend::key_down(key)
            .map_err(BackendError::Operation)
    }

    fn key_up(&self, key: KeyId) -> Result<(), BackendError> {
        KeyboardSendInputBackend::key_up(key)
            .map_err(BackendError::Operation)
    }
}

#[cfg(windows)]
impl MouseBackend for MouseSendInputBackend {
    fn mouse_button(&self, button: MouseButton, down: bool, extra_data: u32) -> Result<(), BackendError> {
        MouseSendInputBackend::button(button, down, extra_data)
            .map_err(BackendError::Operation)
    }

    fn move_relative(&self, dx: i32, dy: i32) -> Result<(), BackendError> {
        MouseSendInputBackend::move_relative(dx, dy)
            .map_err(BackendError::Operation)
    }

    fn set_position(&self, pos: Point) -> Result<(), BackendError> {
        MouseSendInputBackend::set_position(pos.x, pos.y)
            .map_err(BackendError::Operation)
    }

    fn position(&self) -> Result<Point, BackendError> {
        MouseSendInputBackend::position()
            .map(|(x, y)| Point::new(x, y))
            .map_err(BackendError::Operation)
    }
}

// Mock backend implementations
impl KeyboardBackend for MockKeyboardBackend {
    fn key_down(&self, key: KeyId) -> Result<(), BackendError> {
        MockKeyboardBackend::key_down(self, key)
            .map_err(BackendError::Operation)
    }

    fn key_up(&self, key: KeyId) -> Result<(), BackendError> {
        MockKeyboardBackend::key_up(self, key)
            .map_err(BackendError::Operation)
    }
}

impl MouseBackend for MockMouseBackend {
    fn mouse_button(&self, button: MouseButton, down: bool, extra_data: u32) -> Result<(), BackendError> {
        MockMouseBackend::button(self, button, down, extra_data)
            .map_err(BackendError::Operation)
    }

    fn move_relative(&self, dx: i32, dy: i32) -> Result<(), BackendError> {
        MockMouseBackend::move_relative(self, dx, dy)
            .map_err(BackendError::Operation)
    }

    fn set_position(&self, pos: Point) -> Result<(), BackendError> {
        MockMouseBackend::set_position(self, pos.x, pos.y)
            .map_err(BackendError::Operation)
    }

    fn position(&self) -> Result<Point, BackendError> {
        MockMouseBackend::position(self)
            .map(|(x, y)| Point::new(x, y))
            .map_err(BackendError::Operation)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mouse_button_names_are_case_insensitive() {
        assert_eq!(MouseButton::from_name("lbutton"), Some(MouseButton::Left));
        assert_eq!(MouseButton::from_name("RBUTTON"), Some(MouseButton::Right));
        assert_eq!(MouseButton::from_name("MButton"), Some(MouseButton::Middle));
        assert_eq!(MouseButton::from_name("xbutton1"), Some(MouseButton::X1));
        assert_eq!(MouseButton::from_name("XButton2"), Some(MouseButton::X2));
        assert_eq!(MouseButton::from_name("XButton3"), None);
        assert_eq!(MouseButton::from_name("LButtonX"), None);
    }

    #[test]
    fn only_x_buttons_carry_extra_data() {
        assert_eq!(MouseButton::X1.extra_data(), 1);
        assert_eq!(MouseButton::X2.extra_data(), 2);
        assert_eq!(MouseButton::Left.extra_data(), 0);
        assert_eq!(MouseButton::Right.extra_data(), 0);
        assert_eq!(MouseButton::Middle.extra_data(), 0);
    }

    #[test]
    fn default_key_press_is_down_then_up() {
        let kb = MockKeyboardBackend::new();
        kb.key_press(0x41).unwrap();
        assert_eq!(kb.events(), vec![KeyEvent::Down(0x41), KeyEvent::Up(0x41)]);
    }
}
