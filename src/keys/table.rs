//! Static key-name table.
//!
//! Maps human-readable names to Windows virtual-key codes. Names are
//! matched case-insensitively. OEM punctuation follows the US layout.
//!
//! # Supported Names
//!
//! - Mouse: `LButton`, `RButton`, `Cancel`, `MButton`, `XButton1`, `XButton2`
//! - Control: `Backspace`, `Tab`, `Clear`, `Enter`, `Shift`, `Ctrl`, `Alt`,
//!   `Pause`, `CapsLock`, `Esc`, `Space`, `PageUp`, `PageDown`, `End`, `Home`,
//!   `Left`, `Up`, `Right`, `Down`, `Select`, `Print`, `Execute`,
//!   `PrintScreen`, `Insert`, `Delete`, `Help`
//! - `0`-`9`, `A`-`Z`
//! - `Win`, `RWin`, `Apps`
//! - `Num0`-`Num9`, `Multiply`, `Add`, `Separator`, `Subtract`, `Decimal`, `Divide`
//! - `F1`-`F24`, `NumLock`, `ScrollLock`
//! - `;`, `=`, `,`, `-`, `.`, `/`, `` ` ``, `[`, `\`, `]`, `'`
//! - Browser, volume, media and launch keys

use crate::backend::KeyId;

/// Look up a key name (case-insensitive).
pub fn lookup(name: &str) -> Option<KeyId> {
    let n = name.to_ascii_lowercase();
    let vk = match n.as_str() {
        // Mouse
        "lbutton" => 0x01,
        "rbutton" => 0x02,
        "cancel" => 0x03,
        "mbutton" => 0x04,
        "xbutton1" => 0x05,
        "xbutton2" => 0x06,

        // Control keys
        "backspace" => 0x08,
        "tab" => 0x09,
        "clear" => 0x0C,
        "enter" => 0x0D,
        "shift" => 0x10,
        "ctrl" => 0x11,
        "alt" => 0x12,
        "pause" => 0x13,
        "capslock" => 0x14,
        "esc" => 0x1B,
        "space" => 0x20,
        "pageup" => 0x21,
        "pagedown" => 0x22,
        "end" => 0x23,
        "home" => 0x24,
        "left" => 0x25,
        "up" => 0x26,
        "right" => 0x27,
        "down" => 0x28,
        "select" => 0x29,
        "print" => 0x2A,
        "execute" => 0x2B,
        "printscreen" => 0x2C,
        "insert" => 0x2D,
        "delete" => 0x2E,
        "help" => 0x2F,

        // Numbers
        "0" => 0x30,
        "1" => 0x31,
        "2" => 0x32,
        "3" => 0x33,
        "4" => 0x34,
        "5" => 0x35,
        "6" => 0x36,
        "7" => 0x37,
        "8" => 0x38,
        "9" => 0x39,

        // Letters
        "a" => 0x41,
        "b" => 0x42,
        "c" => 0x43,
        "d" => 0x44,
        "e" => 0x45,
        "f" => 0x46,
        "g" => 0x47,
        "h" => 0x48,
        "i" => 0x49,
        "j" => 0x4A,
        "k" => 0x4B,
        "l" => 0x4C,
        "m" => 0x4D,
        "n" => 0x4E,
        "o" => 0x4F,
        "p" => 0x50,
        "q" => 0x51,
        "r" => 0x52,
        "s" => 0x53,
        "t" => 0x54,
        "u" => 0x55,
        "v" => 0x56,
        "w" => 0x57,
        "x" => 0x58,
        "y" => 0x59,
        "z" => 0x5A,

        // Windows keys
        "win" => 0x5B,
        "rwin" => 0x5C,
        "apps" => 0x5D,

        // Numpad
        "num0" => 0x60,
        "num1" => 0x61,
        "num2" => 0x62,
        "num3" => 0x63,
        "num4" => 0x64,
        "num5" => 0x65,
        "num6" => 0x66,
        "num7" => 0x67,
        "num8" => 0x68,
        "num9" => 0x69,
        "multiply" => 0x6A,
        "add" => 0x6B,
        "separator" => 0x6C,
        "subtract" => 0x6D,
        "decimal" => 0x6E,
        "divide" => 0x6F,

        // Function keys
        "f1" => 0x70,
        "f2" => 0x71,
        "f3" => 0x72,
        "f4" => 0x73,
        "f5" => 0x74,
        "f6" => 0x75,
        "f7" => 0x76,
        "f8" => 0x77,
        "f9" => 0x78,
        "f10" => 0x79,
        "f11" => 0x7A,
        "f12" => 0x7B,
        "f13" => 0x7C,
        "f14" => 0x7D,
        "f15" => 0x7E,
        "f16" => 0x7F,
        "f17" => 0x80,
        "f18" => 0x81,
        "f19" => 0x82,
        "f20" => 0x83,
        "f21" => 0x84,
        "f22" => 0x85,
        "f23" => 0x86,
        "f24" => 0x87,

        // Lock keys
        "numlock" => 0x90,
        "scrolllock" => 0x91,

        // OEM keys (US layout)
        ";" => 0xBA,
        "=" => 0xBB,
        "," => 0xBC,
        "-" => 0xBD,
        "." => 0xBE,
        "/" => 0xBF,
        "`" => 0xC0,
        "[" => 0xDB,
        "\\" => 0xDC,
        "]" => 0xDD,
        "'" => 0xDE,

        // Browser, volume, media and launch keys
        "browserback" => 0xA6,
        "browserforward" => 0xA7,
        "browserrefresh" => 0xA8,
        "browserstop" => 0xA9,
        "browsersearch" => 0xAA,
        "browserfavorites" => 0xAB,
        "browserhome" => 0xAC,
        "volumemute" => 0xAD,
        "volumedown" => 0xAE,
        "volumeup" => 0xAF,
        "medianext" => 0xB0,
        "mediaprev" => 0xB1,
        "mediastop" => 0xB2,
        "mediaplaypause" => 0xB3,
        "launchmail" => 0xB4,
        "launchmediaselect" => 0xB5,
        "launchapp1" => 0xB6,
        "launchapp2" => 0xB7,

        _ => return None,
    };
    Some(vk)
}

#[cfg(test)]
mod tests {
    use super::lookup;

    #[test]
    fn letters_and_digits() {
        assert_eq!(lookup("a"), Some(0x41));
        assert_eq!(lookup("Z"), Some(0x5A));
        assert_eq!(lookup("0"), Some(0x30));
        assert_eq!(lookup("9"), Some(0x39));
    }

    #[test]
    fn names_are_case_insensitive() {
        assert_eq!(lookup("Shift"), Some(0x10));
        assert_eq!(lookup("SHIFT"), Some(0x10));
        assert_eq!(lookup("pagedown"), Some(0x22));
        assert_eq!(lookup("XBUTTON1"), Some(0x05));
    }

    #[test]
    fn function_and_media_keys() {
        assert_eq!(lookup("F1"), Some(0x70));
        assert_eq!(lookup("f24"), Some(0x87));
        assert_eq!(lookup("MediaPlayPause"), Some(0xB3));
        assert_eq!(lookup("VolumeUp"), Some(0xAF));
    }

    #[test]
    fn oem_punctuation() {
        assert_eq!(lookup(";"), Some(0xBA));
        assert_eq!(lookup("\\"), Some(0xDC));
        assert_eq!(lookup("'"), Some(0xDE));
    }

    #[test]
    fn unknown_names() {
        assert_eq!(lookup("foo"), None);
        assert_eq!(lookup("f25"), None);
        assert_eq!(lookup(""), None);
    }
}
