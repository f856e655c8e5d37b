//! input-sim - command-line front end
//!
//! Sends key commands, smoothed cursor moves and scripts to the OS.
//!
//! ⚠️  WARNING: Without `--dry-run` this sends REAL keyboard and mouse input!

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use crossbeam_channel::bounded;
use input_sim::backend::{EventLog, KeyboardBackend, MockKeyboardBackend, MockMouseBackend, MouseBackend};
use input_sim::script;
use input_sim::{Config, Simulator};
use log::{error, info};
use std::io::BufRead;
use std::path::PathBuf;
use std::thread;

#[derive(Parser, Debug)]
#[command(name = "input-sim", version, about = "Synthetic keyboard and mouse input")]
struct Cli {
    /// Configuration file (defaults to configs/default.toml when present)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Record events with mock backends and print them as JSON instead of sending them
    #[arg(long, global = true)]
    dry_run: bool,

    /// Seed for trajectory randomness
    #[arg(long, global = true)]
    seed: Option<u64>,

    #[command(subcommand)]
    command: Cmd,
}

#[derive(Subcommand, Debug)]
enum Cmd {
    /// Send one key command, e.g. `send Shift down`
    Send {
        #[arg(required = true, num_args = 1..)]
        command: Vec<String>,
    },
    /// Move the cursor along a smoothed path
    #[command(allow_negative_numbers = true)]
    Move {
        x: i32,
        y: i32,
        #[arg(long)]
        speed: Option<f64>,
    },
    /// Place the cursor instantly
    #[command(allow_negative_numbers = true)]
    SetPos { x: i32, y: i32 },
    /// Read script lines from stdin
    Run,
}

fn main() -> Result<()> {
    // Initialize logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => Config::load(path)
            .with_context(|| format!("loading configuration from {}", path.display()))?,
        None => Config::load_default_or_builtin().context("loading default configuration")?,
    };
    if let Some(seed) = cli.seed {
        config.settings.seed = Some(seed);
    }

    if cli.dry_run {
        let log = EventLog::new();
        let keyboard = MockKeyboardBackend::new().with_log(log.clone());
        let mouse = MockMouseBackend::new().with_log(log.clone());
        let mut sim = Simulator::new(&config, keyboard, mouse);
        let result = execute(&cli.command, &mut sim);

        for event in log.entries() {
            println!("{}", serde_json::to_string(&event)?);
        }
        return result;
    }

    run_native(&cli.command, &config)
}

#[cfg(windows)]
fn run_native(command: &Cmd, config: &Config) -> Result<()> {
    use input_sim::backend::{KeyboardSendInputBackend, MouseSendInputBackend};

    let mut sim = Simulator::new(config, KeyboardSendInputBackend, MouseSendInputBackend);
    execute(command, &mut sim)
}

#[cfg(not(windows))]
fn run_native(_command: &Cmd, _config: &Config) -> Result<()> {
    use input_sim::backend::BackendError;

    Err(BackendError::PlatformNotSupported).context("real input injection needs Windows; try --dry-run")
}

fn execute<K, M>(command: &Cmd, sim: &mut Simulator<K, M>) -> Result<()>
where
    K: KeyboardBackend,
    M: MouseBackend,
{
    match command {
        Cmd::Send { command } => {
            sim.send(&command.join(" "))?;
        }
        Cmd::Move { x, y, speed } => {
            let report = sim.move_to(*x, *y, *speed)?;
            info!("Moved in {} steps ({} moves)", report.steps_run, report.moves_emitted);
        }
        Cmd::SetPos { x, y } => sim.set_position(*x, *y)?,
        Cmd::Run => run_script(sim)?,
    }
    Ok(())
}

/// Reader thread feeds stdin lines to this loop, which owns the simulator.
fn run_script<K, M>(sim: &mut Simulator<K, M>) -> Result<()>
where
    K: KeyboardBackend,
    M: MouseBackend,
{
    let (sender, receiver) = bounded::<(usize, String)>(100);

    let reader = thread::spawn(move || -> std::io::Result<()> {
        let stdin = std::io::stdin();
        for (index, line) in stdin.lock().lines().enumerate() {
            if sender.send((index + 1, line?)).is_err() {
                break;
            }
        }
        Ok(())
    });

    let mut failures = 0usize;
    for (line_no, line) in receiver {
        let result = script::parse_line(&line).and_then(|instruction| match instruction {
            Some(instruction) => script::execute(sim, &instruction),
            None => Ok(()),
        });
        if let Err(e) = result {
            error!("line {}: {}", line_no, e);
            failures += 1;
        }
    }

    match reader.join() {
        Ok(read_result) => read_result.context("reading script from stdin")?,
        Err(_) => anyhow::bail!("stdin reader thread panicked"),
    }

    if failures > 0 {
        anyhow::bail!("{} script line(s) failed", failures);
    }
    Ok(())
}
