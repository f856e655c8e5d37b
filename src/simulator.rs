//! High-level input simulator
//!
//! Ties key resolution, command dispatch and trajectory generation to one
//! pair of backends. The simulator owns its modifier state, so all mutation
//! goes through `&mut self`; share it across threads via [`SharedSimulator`].

use crate::backend::{BackendError, KeyboardBackend, MouseBackend, Point};
use crate::command::{parse, CommandError, EventDispatcher, ModifierStateMachine};
use crate::config::Config;
use crate::keys::KeyResolver;
use crate::trajectory::{CancelToken, MoveReport, TrajectoryGenerator};
use log::{debug, info};
use std::sync::{Arc, Mutex};

/// Simulator behind a lock, for callers on several threads.
pub type SharedSimulator<K, M> = Arc<Mutex<Simulator<K, M>>>;

pub struct Simulator<K, M>
where
    K: KeyboardBackend,
    M: MouseBackend,
{
    resolver: KeyResolver,
    dispatcher: EventDispatcher<K, M>,
    trajectory: TrajectoryGenerator,
    default_speed: f64,
    cancel: CancelToken,
}

impl<K, M> Simulator<K, M>
where
    K: KeyboardBackend,
    M: MouseBackend,
{
    /// Create a simulator with the given configuration and backends
    pub fn new(config: &Config, keyboard: K, mouse: M) -> Self {
        let trajectory = match config.settings.seed {
            Some(seed) => {
                info!("Using fixed trajectory seed {}", seed);
                TrajectoryGenerator::seeded(seed)
            }
            None => TrajectoryGenerator::new(),
        };

        Self {
            resolver: KeyResolver::with_aliases(config.keys.iter().map(|(k, v)| (k, *v))),
            dispatcher: EventDispatcher::new(keyboard, mouse),
            trajectory,
            default_speed: config.settings.default_speed,
            cancel: CancelToken::new(),
        }
    }

    /// Replace the trajectory randomness with a fixed seed
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.trajectory = TrajectoryGenerator::seeded(seed);
        self
    }

    /// Wrap in `Arc<Mutex<_>>`
    pub fn shared(self) -> SharedSimulator<K, M> {
        Arc::new(Mutex::new(self))
    }

    /// Run one `<KeyName> [down|up]` command. Blank input does nothing.
    pub fn send(&mut self, input: &str) -> Result<(), CommandError> {
        let Some(command) = parse(input) else {
            return Ok(());
        };
        let target = command.target(&self.resolver)?;
        debug!("Dispatching {:?} {:?}", target, command.action);
        self.dispatcher.dispatch(target, command.action)
    }

    /// Move the cursor to `(x, y)` along a paced, curved path.
    ///
    /// Blocks until the move finishes or [`Self::cancel_token`] is signalled;
    /// the token is re-armed afterwards.
    pub fn move_to(&mut self, x: i32, y: i32, speed: Option<f64>) -> Result<MoveReport, BackendError> {
        let speed = speed.unwrap_or(self.default_speed);
        let result = self
            .trajectory
            .move_to(self.dispatcher.mouse(), Point::new(x, y), speed, &self.cancel);
        self.cancel.reset();
        result
    }

    /// Place the cursor at `(x, y)` immediately, without smoothing.
    pub fn set_position(&self, x: i32, y: i32) -> Result<(), BackendError> {
        debug!("Setting cursor position to ({}, {})", x, y);
        self.dispatcher.mouse().set_position(Point::new(x, y))
    }

    /// Token that stops an in-flight [`Self::move_to`]; clone it before the move starts.
    pub fn cancel_token(&self) -> CancelToken {
        self.cancel.clone()
    }

    pub fn modifiers(&self) -> &ModifierStateMachine {
        self.dispatcher.modifiers()
    }

    pub fn keyboard(&self) -> &K {
        self.dispatcher.keyboard()
    }

    pub fn mouse(&self) -> &M {
        self.dispatcher.mouse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::{KeyEvent, MockKeyboardBackend, MockMouseBackend, MouseEvent};

    fn simulator() -> Simulator<MockKeyboardBackend, MockMouseBackend> {
        Simulator::new(&Config::default(), MockKeyboardBackend::new(), MockMouseBackend::new()).with_seed(5)
    }

    #[test]
    fn unknown_key_sends_nothing() {
        let mut sim = simulator();
        assert!(matches!(sim.send("Foo"), Err(CommandError::UnknownKey(_))));
        assert!(sim.keyboard().events().is_empty());
        assert!(sim.mouse().events().is_empty());
    }

    #[test]
    fn config_aliases_resolve() {
        let config = Config::from_toml("[keys]\nFire = 0x20\n").unwrap();
        let mut sim = Simulator::new(&config, MockKeyboardBackend::new(), MockMouseBackend::new());
        sim.send("fire down").unwrap();
        assert_eq!(sim.keyboard().events(), vec![KeyEvent::Down(0x20)]);
    }

    #[test]
    fn set_position_is_a_single_primitive() {
        let sim = simulator();
        sim.set_position(800, 600).unwrap();
        assert_eq!(sim.mouse().events(), vec![MouseEvent::SetPosition { x: 800, y: 600 }]);
    }

    #[test]
    fn pre_cancelled_move_sends_nothing_and_rearms() {
        let mut sim = simulator();
        sim.cancel_token().cancel();
        let report = sim.move_to(50, 50, Some(50.0)).unwrap();
        assert!(report.cancelled);
        assert_eq!(report.steps_run, 0);
        assert!(sim.mouse().events().is_empty());

        let report = sim.move_to(50, 50, Some(50.0)).unwrap();
        assert!(!report.cancelled);
        assert_eq!(sim.mouse().position().unwrap(), (50, 50));
    }
}
