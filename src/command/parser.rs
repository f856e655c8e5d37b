//! Command parsing and key classification.

use super::modifiers::Modifier;
use super::CommandError;
use crate::backend::{KeyId, MouseButton};
use crate::keys::KeyResolver;
use log::{debug, warn};

/// Key names treated as mouse buttons (case-insensitive).
pub const MOUSE_BUTTON_NAMES: [&str; 5] = ["LButton", "RButton", "MButton", "XButton1", "XButton2"];

/// What to do with the key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Action {
    Down,
    Up,
    /// Down immediately followed by Up.
    #[default]
    Click,
}

impl Action {
    /// Interpret the optional action token; anything but `down`/`up` is a click.
    pub fn from_token(token: Option<&str>) -> Self {
        let Some(token) = token else {
            return Action::Click;
        };
        match token.to_lowercase().as_str() {
            "down" => Action::Down,
            "up" => Action::Up,
            "click" => Action::Click,
            other => {
                warn!("Unknown action '{}', treating as click", other);
                Action::Click
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyClass {
    Mouse,
    Keyboard,
}

/// Classify a key name as mouse- or keyboard-class.
pub fn classify(name: &str) -> KeyClass {
    if MOUSE_BUTTON_NAMES.iter().any(|m| m.eq_ignore_ascii_case(name)) {
        KeyClass::Mouse
    } else {
        KeyClass::Keyboard
    }
}

/// A parsed command: key name plus action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Command {
    pub key: String,
    pub action: Action,
}

/// Parse a command string. Blank input yields `None`; tokens past the second are ignored.
pub fn parse(input: &str) -> Option<Command> {
    let mut tokens = input.split_whitespace();
    let key = tokens.next()?;
    let action = Action::from_token(tokens.next());
    debug!("Parsed command: key='{}' action={:?}", key, action);
    Some(Command { key: key.to_string(), action })
}

/// A resolved, classified key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Target {
    Mouse(MouseButton),
    Key { id: KeyId, modifier: Option<Modifier> },
}

impl Command {
    /// Resolve and classify the key. Fails before any event is produced.
    pub fn target(&self, resolver: &KeyResolver) -> Result<Target, CommandError> {
        let id = resolver.resolve(&self.key)?;
        match classify(&self.key) {
            KeyClass::Mouse => MouseButton::from_name(&self.key)
                .map(Target::Mouse)
                .ok_or_else(|| CommandError::UnknownMouseButton(self.key.clone())),
            KeyClass::Keyboard => Ok(Target::Key {
                id,
                modifier: Modifier::from_name(&self.key),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_input_is_ignored() {
        assert_eq!(parse(""), None);
        assert_eq!(parse("     "), None);
        assert_eq!(parse("\t \n"), None);
    }

    #[test]
    fn key_alone_is_a_click() {
        let cmd = parse("A").unwrap();
        assert_eq!(cmd.key, "A");
        assert_eq!(cmd.action, Action::Click);
    }

    #[test]
    fn action_token_is_case_insensitive() {
        assert_eq!(parse("Shift DOWN").unwrap().action, Action::Down);
        assert_eq!(parse("Shift Up").unwrap().action, Action::Up);
        assert_eq!(parse("Shift sideways").unwrap().action, Action::Click);
    }

    #[test]
    fn whitespace_runs_collapse_and_extra_tokens_are_ignored() {
        let cmd = parse("   ctrl    down   now please ").unwrap();
        assert_eq!(cmd.key, "ctrl");
        assert_eq!(cmd.action, Action::Down);
    }

    #[test]
    fn mouse_classification_is_exact_and_case_insensitive() {
        assert_eq!(classify("lbutton"), KeyClass::Mouse);
        assert_eq!(classify("XBUTTON2"), KeyClass::Mouse);
        assert_eq!(classify("LButtonX"), KeyClass::Keyboard);
        assert_eq!(classify("Cancel"), KeyClass::Keyboard);
        assert_eq!(classify("A"), KeyClass::Keyboard);
    }

    #[test]
    fn every_mouse_name_has_a_button() {
        for name in MOUSE_BUTTON_NAMES {
            assert!(MouseButton::from_name(name).is_some(), "{name}");
        }
    }

    #[test]
    fn targets_carry_modifier_and_button_info() {
        let resolver = KeyResolver::new();
        assert_eq!(
            parse("shift").unwrap().target(&resolver).unwrap(),
            Target::Key { id: 0x10, modifier: Some(Modifier::Shift) }
        );
        assert_eq!(
            parse("a down").unwrap().target(&resolver).unwrap(),
            Target::Key { id: 0x41, modifier: None }
        );
        assert_eq!(
            parse("XButton1 down").unwrap().target(&resolver).unwrap(),
            Target::Mouse(MouseButton::X1)
        );
    }

    #[test]
    fn unresolvable_key_fails_target() {
        let resolver = KeyResolver::new();
        let err = parse("Foo").unwrap().target(&resolver).unwrap_err();
        assert!(matches!(err, CommandError::UnknownKey(ref k) if k == "Foo"));
    }
}
