//! Event dispatcher - issues backend primitives for a resolved key and action
//!
//! Mouse buttons go straight to the mouse backend. Modifier keys consult the
//! [`ModifierStateMachine`] on `Down`/`Up` only; `Click` never touches it.

use super::modifiers::{Modifier, ModifierStateMachine};
use super::parser::{Action, Target};
use super::CommandError;
use crate::backend::{KeyId, KeyboardBackend, MouseBackend, MouseButton};
use log::{debug, trace};

pub struct EventDispatcher<K, M>
where
    K: KeyboardBackend,
    M: MouseBackend,
{
    keyboard: K,
    mouse: M,
    modifiers: ModifierStateMachine,
}

impl<K, M> EventDispatcher<K, M>
where
    K: KeyboardBackend,
    M: MouseBackend,
{
    pub fn new(keyboard: K, mouse: M) -> Self {
        Self {
            keyboard,
            mouse,
            modifiers: ModifierStateMachine::new(),
        }
    }

    pub fn keyboard(&self) -> &K {
        &self.keyboard
    }

    pub fn mouse(&self) -> &M {
        &self.mouse
    }

    pub fn modifiers(&self) -> &ModifierStateMachine {
        &self.modifiers
    }

    /// Issue the primitives for `action` on `target`. Backend failures
    /// propagate; primitives already sent are not undone.
    pub fn dispatch(&mut self, target: Target, action: Action) -> Result<(), CommandError> {
        match target {
            Target::Mouse(button) => self.dispatch_mouse(button, action),
            Target::Key { id, modifier: Some(modifier) } => self.dispatch_modifier(id, modifier, action),
            Target::Key { id, modifier: None } => self.dispatch_key(id, action),
        }
    }

    fn dispatch_mouse(&mut self, button: MouseButton, action: Action) -> Result<(), CommandError> {
        let data = button.extra_data();
        match action {
            Action::Down => self.mouse.mouse_button(button, true, data)?,
            Action::Up => self.mouse.mouse_button(button, false, data)?,
            Action::Click => {
                self.mouse.mouse_button(button, true, data)?;
                self.mouse.mouse_button(button, false, data)?;
            }
        }
        trace!("mouse {} {:?}", button, action);
        Ok(())
    }

    fn dispatch_modifier(&mut self, id: KeyId, modifier: Modifier, action: Action) -> Result<(), CommandError> {
        match action {
            Action::Down => {
                if !self.modifiers.try_activate(modifier) {
                    debug!("{:?} already held, skipping key down", modifier);
                    return Ok(());
                }
                if let Err(e) = self.keyboard.key_down(id) {
                    // Only successful downs count as held
                    self.modifiers.release(modifier);
                    return Err(e.into());
                }
            }
            Action::Up => {
                self.modifiers.release(modifier);
                self.keyboard.key_up(id)?;
            }
            Action::Click => self.keyboard.key_press(id)?,
        }
        trace!("modifier {:?} {:?}", modifier, action);
        Ok(())
    }

    fn dispatch_key(&mut self, id: KeyId, action: Action) -> Result<(), CommandError> {
        match action {
            Action::Down => self.keyboard.key_down(id)?,
            Action::Up => self.keyboard.key_up(id)?,
            Action::Click => self.keyboard.key_press(id)?,
        }
        trace!("key 0x{:02X} {:?}", id, action);
        Ok(())
    }
}
