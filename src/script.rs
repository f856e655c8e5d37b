//! Line-oriented scripts
//!
//! Each line is one of:
//! - `move X Y [SPEED]` - smoothed cursor move
//! - `setpos X Y` - instant cursor placement
//! - `sleep MS` - pause
//! - anything else - a key command, `<KeyName> [down|up]`
//!
//! Blank lines and lines starting with `#` are ignored.

use crate::backend::{BackendError, KeyboardBackend, MouseBackend};
use crate::command::CommandError;
use crate::simulator::Simulator;
use log::debug;
use std::str::FromStr;
use std::thread;
use std::time::Duration;
use thiserror::Error;

/// Words reserved for script directives; never valid key aliases.
pub const DIRECTIVES: [&str; 3] = ["move", "setpos", "sleep"];

#[derive(Debug, Error)]
pub enum ScriptError {
    #[error("Invalid '{directive}' line: {message}")]
    Invalid { directive: &'static str, message: String },

    #[error(transparent)]
    Command(#[from] CommandError),

    #[error(transparent)]
    Backend(#[from] BackendError),
}

#[derive(Debug, Clone, PartialEq)]
pub enum Instruction {
    Move { x: i32, y: i32, speed: Option<f64> },
    SetPos { x: i32, y: i32 },
    Sleep(Duration),
    Key(String),
}

/// Parse one script line. `Ok(None)` for blanks and comments.
pub fn parse_line(line: &str) -> Result<Option<Instruction>, ScriptError> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return Ok(None);
    }

    let tokens: Vec<&str> = line.split_whitespace().collect();
    let instruction = match tokens[0].to_ascii_lowercase().as_str() {
        "move" => {
            expect_args("move", &tokens, 2, 3)?;
            Instruction::Move {
                x: arg("move", tokens[1])?,
                y: arg("move", tokens[2])?,
                speed: tokens.get(3).map(|s| arg("move", s)).transpose()?,
            }
        }
        "setpos" => {
            expect_args("setpos", &tokens, 2, 2)?;
            Instruction::SetPos {
                x: arg("setpos", tokens[1])?,
                y: arg("setpos", tokens[2])?,
            }
        }
        "sleep" => {
            expect_args("sleep", &tokens, 1, 1)?;
            Instruction::Sleep(Duration::from_millis(arg("sleep", tokens[1])?))
        }
        _ => Instruction::Key(line.to_string()),
    };
    Ok(Some(instruction))
}

fn expect_args(directive: &'static str, tokens: &[&str], min: usize, max: usize) -> Result<(), ScriptError> {
    let n = tokens.len() - 1;
    if n < min || n > max {
        return Err(ScriptError::Invalid {
            directive,
            message: format!("expected {}..={} arguments, got {}", min, max, n),
        });
    }
    Ok(())
}

fn arg<T: FromStr>(directive: &'static str, token: &str) -> Result<T, ScriptError> {
    token.parse().map_err(|_| ScriptError::Invalid {
        directive,
        message: format!("cannot parse '{}'", token),
    })
}

/// Execute one instruction against a simulator.
pub fn execute<K, M>(sim: &mut Simulator<K, M>, instruction: &Instruction) -> Result<(), ScriptError>
where
    K: KeyboardBackend,
    M: MouseBackend,
{
    debug!("Executing {:?}", instruction);
    match instruction {
        Instruction::Move { x, y, speed } => {
            sim.move_to(*x, *y, *speed)?;
        }
        Instruction::SetPos { x, y } => sim.set_position(*x, *y)?,
        Instruction::Sleep(duration) => thread::sleep(*duration),
        Instruction::Key(command) => sim.send(command)?,
    }
    Ok(())
}
