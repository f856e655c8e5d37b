//! Windows SendInput keyboard backend (virtual-key based).
//!
//! This backend injects keyboard events using Win32 `SendInput` with the
//! virtual-key identifiers produced by [`crate::keys::KeyResolver`].
//!
//! # Safety Notes
//! - Calling `SendInput` is inherently unsafe; we wrap it in a small
//!   helper that returns a `windows::core::Result<()>` and surface a
//!   `Result<(), String>` at the public boundary.
//! - If `SendInput` returns 0, the last OS error is converted via
//!   `windows::core::Error::from_hresult()`.
//! - Navigation keys, the Windows keys and numpad divide are sent with
//!   `KEYEVENTF_EXTENDEDKEY` so they are not confused with their numpad twins.

#[cfg(windows)]
use windows::Win32::UI::Input::KeyboardAndMouse::{
    SendInput, INPUT, INPUT_0, INPUT_KEYBOARD, KEYBDINPUT, KEYBD_EVENT_FLAGS,
    KEYEVENTF_EXTENDEDKEY, KEYEVENTF_KEYUP, VIRTUAL_KEY,
};

#[cfg(windows)]
use super::KeyId;

#[cfg(windows)]
/// Backend that uses Win32 SendInput to synthesize keyboard events.
#[derive(Clone, Copy, Debug)]
pub struct KeyboardSendInputBackend;

/// Virtual keys that live in the extended part of the keyboard.
#[cfg_attr(not(windows), allow(dead_code))]
pub(crate) fn is_extended(vk: u16) -> bool {
    matches!(
        vk,
        0x21..=0x28      // PageUp, PageDown, End, Home, arrows
            | 0x2D | 0x2E // Insert, Delete
            | 0x5B..=0x5D // LWin, RWin, Apps
            | 0x6F        // numpad divide
            | 0x90        // NumLock
            | 0xA3 | 0xA5 // right ctrl, right alt
    )
}

#[cfg(windows)]
impl KeyboardSendInputBackend {
    /// Press a key by virtual-key code.
    pub fn key_down(vk: KeyId) -> Result<(), String> {
        // SAFETY: thin wrapper around SendInput with a single well-formed INPUT.
        unsafe { Self::send_vk(vk, KEYBD_EVENT_FLAGS(0)) }.map_err(|e| format!("{e}"))
    }

    /// Release a key by virtual-key code.
    pub fn key_up(vk: KeyId) -> Result<(), String> {
        unsafe { Self::send_vk(vk, KEYEVENTF_KEYUP) }.map_err(|e| format!("{e}"))
    }

    /// Low-level helper to send a single keyboard input for a virtual key.
    unsafe fn send_vk(vk: KeyId, mut flags: KEYBD_EVENT_FLAGS) -> windows::core::Result<()> {
        if is_extended(vk) {
            flags |= KEYEVENTF_EXTENDEDKEY;
        }

        let input = INPUT {
            r#type: INPUT_KEYBOARD,
            Anonymous: INPUT_0 {
                ki: KEYBDINPUT {
                    wVk: VIRTUAL_KEY(vk),
                    wScan: 0,
                    dwFlags: flags,
                    time: 0,
                    dwExtraInfo: 0,
                },
            },
        };

        let sent = unsafe { SendInput(&[input], std::mem::size_of::<INPUT>() as i32) };
        if sent == 0 {
            use windows::Win32::Foundation::GetLastError;
            let err = unsafe { GetLastError() };
            Err(windows::core::Error::from_hresult(err.to_hresult()))
        } else {
            Ok(())
        }
    }
}
