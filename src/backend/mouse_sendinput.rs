//! Windows SendInput mouse backend.
//!
//! Sends button events and relative motion via Win32 SendInput, and
//! queries/places the cursor with `GetCursorPos`/`SetCursorPos`.
//! Higher-level pacing lives in the trajectory generator.
//!
//! Safety: Same caveats as keyboard backend; wraps SendInput and converts errors to String.

#[cfg(windows)]
use windows::Win32::Foundation::POINT;
#[cfg(windows)]
use windows::Win32::UI::Input::KeyboardAndMouse::{
    SendInput, INPUT, INPUT_0, INPUT_MOUSE, MOUSEINPUT, MOUSE_EVENT_FLAGS,
    MOUSEEVENTF_LEFTDOWN, MOUSEEVENTF_LEFTUP, MOUSEEVENTF_MIDDLEDOWN, MOUSEEVENTF_MIDDLEUP,
    MOUSEEVENTF_MOVE, MOUSEEVENTF_RIGHTDOWN, MOUSEEVENTF_RIGHTUP, MOUSEEVENTF_XDOWN,
    MOUSEEVENTF_XUP,
};
#[cfg(windows)]
use windows::Win32::UI::WindowsAndMessaging::{GetCursorPos, SetCursorPos};

#[cfg(windows)]
use super::MouseButton;

#[cfg(windows)]
#[derive(Clone, Copy, Debug)]
pub struct MouseSendInputBackend;

#[cfg(windows)]
impl MouseSendInputBackend {
    /// Send a single relative mouse movement (dx, dy) in pixels.
    pub fn move_relative(dx: i32, dy: i32) -> Result<(), String> {
        Self::send_mouse_input(dx, dy, 0, MOUSEEVENTF_MOVE)
    }

    /// Press or release a mouse button; `extra_data` selects the X button.
    pub fn button(button: MouseButton, down: bool, extra_data: u32) -> Result<(), String> {
        Self::send_mouse_input(0, 0, extra_data, Self::button_flag(button, down))
    }

    /// Place the cursor at absolute screen coordinates.
    pub fn set_position(x: i32, y: i32) -> Result<(), String> {
        // SAFETY: plain Win32 call with value arguments.
        unsafe { SetCursorPos(x, y) }.map_err(|e| format!("SetCursorPos failed: {e}"))
    }

    /// Current absolute cursor position.
    pub fn position() -> Result<(i32, i32), String> {
        let mut point = POINT::default();
        // SAFETY: `point` is a valid, writable POINT for the duration of the call.
        unsafe { GetCursorPos(&mut point) }.map_err(|e| format!("GetCursorPos failed: {e}"))?;
        Ok((point.x, point.y))
    }

    /// Down/up flag pair for each button.
    fn button_flag(button: MouseButton, down: bool) -> MOUSE_EVENT_FLAGS {
        match (button, down) {
            (MouseButton::Left, true) => MOUSEEVENTF_LEFTDOWN,
            (MouseButton::Left, false) => MOUSEEVENTF_LEFTUP,
            (MouseButton::Right, true) => MOUSEEVENTF_RIGHTDOWN,
            (MouseButton::Right, false) => MOUSEEVENTF_RIGHTUP,
            (MouseButton::Middle, true) => MOUSEEVENTF_MIDDLEDOWN,
            (MouseButton::Middle, false) => MOUSEEVENTF_MIDDLEUP,
            (MouseButton::X1 | MouseButton::X2, true) => MOUSEEVENTF_XDOWN,
            (MouseButton::X1 | MouseButton::X2, false) => MOUSEEVENTF_XUP,
        }
    }

    fn send_mouse_input(dx: i32, dy: i32, data: u32, flags: MOUSE_EVENT_FLAGS) -> Result<(), String> {
        let mi = MOUSEINPUT {
            dx,
            dy,
            mouseData: data,
            dwFlags: flags,
            time: 0,
            dwExtraInfo: 0,
        };

        let input = INPUT {
            r#type: INPUT_MOUSE,
            Anonymous: INPUT_0 { mi },
        };

        // SAFETY: Win32 call; we pass a single INPUT struct slice.
        let sent = unsafe { SendInput(&[input], std::mem::size_of::<INPUT>() as i32) };
        if sent == 0 {
            use windows::Win32::Foundation::GetLastError;
            let err = unsafe { GetLastError() };
            Err(format!("SendInput failed: 0x{:08X}", err.0))
        } else {
            Ok(())
        }
    }
}
