//! Human-like cursor trajectories.
//!
//! A move is planned as a sequence of relative deltas along a smoothstep-eased
//! path with one arch of lateral deviation, then emitted with per-step pacing.
//!
//! Each emitted delta is the rounded gap between the ideal cumulative offset
//! and the sum of deltas already emitted, so rounding error never accumulates
//! and the final step lands on the target.

use super::cancel::CancelToken;
use crate::backend::{BackendError, MouseBackend, Point};
use log::{debug, trace};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::f64::consts::PI;
use std::thread;
use std::time::Duration;

/// Minimum number of intervals in a trajectory.
pub const MIN_STEPS: u64 = 10;
/// Milliseconds of travel per pixel at speed 1.0.
const MS_PER_PIXEL: f64 = 0.8;
/// Base pacing per step at speed 1.0.
const STEP_MS: f64 = 10.0;
/// Peak lateral deviation in pixels at full curve strength.
const CURVE_X: f64 = 10.0;
const CURVE_Y: f64 = 5.0;

/// Non-positive (or NaN) speeds fall back to 1.0.
pub fn normalize_speed(speed: f64) -> f64 {
    if speed > 0.0 && speed.is_finite() {
        speed
    } else {
        1.0
    }
}

/// Smoothstep easing: zero velocity at both ends.
pub fn smoothstep(t: f64) -> f64 {
    t * t * (3.0 - 2.0 * t)
}

/// One relative move plus the pause that follows it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrajectoryStep {
    pub dx: i32,
    pub dy: i32,
    pub delay: Duration,
}

impl TrajectoryStep {
    /// Zero deltas are paced but not sent.
    pub fn is_move(&self) -> bool {
        self.dx != 0 || self.dy != 0
    }
}

/// A planned trajectory.
///
/// Steps are produced on demand by [`Trajectory::steps`], so a long, slow
/// move costs no memory up front. Iterating twice yields the same steps.
#[derive(Debug, Clone)]
pub struct Trajectory {
    pub start: Point,
    pub target: Point,
    pub speed: f64,
    pub curve_strength: f64,
    /// Number of intervals; the trajectory has `intervals + 1` steps.
    pub intervals: u64,
    base_delay_ms: u64,
    jitter_seed: u64,
}

impl Trajectory {
    /// Number of steps, including the initial zero step.
    pub fn step_count(&self) -> u64 {
        self.intervals.saturating_add(1)
    }

    pub fn steps(&self) -> Steps {
        Steps {
            total_dx: (self.target.x as i64 - self.start.x as i64) as f64,
            total_dy: (self.target.y as i64 - self.start.y as i64) as f64,
            curve_strength: self.curve_strength,
            intervals: self.intervals,
            base_delay_ms: self.base_delay_ms,
            jitter: StdRng::seed_from_u64(self.jitter_seed),
            index: 0,
            done: false,
            emitted_x: 0.0,
            emitted_y: 0.0,
        }
    }

    /// Sum of all planned deltas.
    pub fn total_delta(&self) -> (i64, i64) {
        self.steps().fold((0, 0), |(x, y), s| (x + s.dx as i64, y + s.dy as i64))
    }
}

/// Lazy step sequence of a [`Trajectory`].
#[derive(Debug, Clone)]
pub struct Steps {
    total_dx: f64,
    total_dy: f64,
    curve_strength: f64,
    intervals: u64,
    base_delay_ms: u64,
    jitter: StdRng,
    index: u64,
    done: bool,
    emitted_x: f64,
    emitted_y: f64,
}

impl Iterator for Steps {
    type Item = TrajectoryStep;

    fn next(&mut self) -> Option<TrajectoryStep> {
        if self.done {
            return None;
        }

        let t = self.index as f64 / self.intervals as f64;
        let ease = smoothstep(t);
        let curve = (ease * PI).sin() * self.curve_strength;

        let x = self.total_dx * ease + curve * CURVE_X;
        let y = self.total_dy * ease + curve * CURVE_Y;

        let dx = (x - self.emitted_x).round_ties_even();
        let dy = (y - self.emitted_y).round_ties_even();
        self.emitted_x += dx;
        self.emitted_y += dy;

        let jitter = self.jitter.gen_range(0..3);
        let delay = Duration::from_millis(self.base_delay_ms.saturating_add(jitter));

        if self.index == self.intervals {
            self.done = true;
        } else {
            self.index += 1;
        }
        Some(TrajectoryStep { dx: dx as i32, dy: dy as i32, delay })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.done {
            return (0, Some(0));
        }
        let remaining = self.intervals - self.index + 1;
        match usize::try_from(remaining) {
            Ok(n) => (n, Some(n)),
            Err(_) => (usize::MAX, None),
        }
    }
}

/// Outcome of [`TrajectoryGenerator::move_to`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MoveReport {
    /// Steps executed (including paced zero-delta steps).
    pub steps_run: usize,
    /// Relative moves actually sent to the backend.
    pub moves_emitted: usize,
    pub cancelled: bool,
}

pub struct TrajectoryGenerator<R: Rng = StdRng> {
    rng: R,
}

impl TrajectoryGenerator<StdRng> {
    /// Generator seeded from OS entropy.
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_entropy())
    }

    /// Reproducible generator.
    pub fn seeded(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }
}

impl Default for TrajectoryGenerator<StdRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> TrajectoryGenerator<R> {
    pub fn with_rng(rng: R) -> Self {
        Self { rng }
    }

    /// Plan a trajectory from `start` to `target` without touching any backend.
    pub fn plan(&mut self, start: Point, target: Point, speed: f64) -> Trajectory {
        let speed = normalize_speed(speed);

        let total_dx = (target.x as i64 - start.x as i64) as f64;
        let total_dy = (target.y as i64 - start.y as i64) as f64;
        let distance = (total_dx * total_dx + total_dy * total_dy).sqrt();

        // Float to int casts saturate, so tiny speeds give huge but finite counts
        let duration_ms = (distance * MS_PER_PIXEL / speed) as u64;
        let intervals = (duration_ms / 10).max(MIN_STEPS);

        // One draw per trajectory
        let curve_strength = self.rng.gen_range(0.5..=1.0);
        let jitter_seed = self.rng.gen();
        let base_delay_ms = (STEP_MS / speed) as u64;

        debug!(
            "Planned trajectory {} -> {}: distance={:.1} steps={} speed={} curve={:.3}",
            start, target, distance, intervals, speed, curve_strength
        );

        Trajectory {
            start,
            target,
            speed,
            curve_strength,
            intervals,
            base_delay_ms,
            jitter_seed,
        }
    }

    /// Move the cursor to `target`, blocking for the paced duration.
    ///
    /// The start position is queried from the backend first; if that fails
    /// nothing is sent. `cancel` is checked before every step.
    pub fn move_to<M: MouseBackend>(
        &mut self,
        mouse: &M,
        target: Point,
        speed: f64,
        cancel: &CancelToken,
    ) -> Result<MoveReport, BackendError> {
        let start = mouse.position()?;
        let trajectory = self.plan(start, target, speed);
        run(mouse, &trajectory, cancel)
    }
}

/// Emit a planned trajectory step by step.
pub fn run<M: MouseBackend>(
    mouse: &M,
    trajectory: &Trajectory,
    cancel: &CancelToken,
) -> Result<MoveReport, BackendError> {
    let mut report = MoveReport::default();

    for step in trajectory.steps() {
        if cancel.is_cancelled() {
            debug!("Trajectory cancelled after {} steps", report.steps_run);
            report.cancelled = true;
            break;
        }
        if step.is_move() {
            mouse.move_relative(step.dx, step.dy)?;
            report.moves_emitted += 1;
        }
        trace!("step {}: ({}, {}) then {:?}", report.steps_run, step.dx, step.dy, step.delay);
        thread::sleep(step.delay);
        report.steps_run += 1;
    }

    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn speed_normalisation() {
        assert_eq!(normalize_speed(2.5), 2.5);
        assert_eq!(normalize_speed(0.0), 1.0);
        assert_eq!(normalize_speed(-3.0), 1.0);
        assert_eq!(normalize_speed(f64::NAN), 1.0);
    }

    #[test]
    fn smoothstep_endpoints() {
        assert_eq!(smoothstep(0.0), 0.0);
        assert_eq!(smoothstep(1.0), 1.0);
        assert_eq!(smoothstep(0.5), 0.5);
    }

    #[test]
    fn zero_distance_uses_step_floor() {
        let mut generator = TrajectoryGenerator::seeded(7);
        let p = Point::new(300, 200);
        let plan = generator.plan(p, p, 1.0);
        assert_eq!(plan.step_count(), MIN_STEPS + 1);
        assert_eq!(plan.steps().count(), 11);
        let (sx, sy) = plan.total_delta();
        assert!(sx.abs() <= 1 && sy.abs() <= 1, "drift {sx},{sy}");
    }

    #[test]
    fn step_count_follows_duration() {
        // 1000px at speed 1 -> 800ms -> 80 intervals
        let mut generator = TrajectoryGenerator::seeded(1);
        let plan = generator.plan(Point::new(0, 0), Point::new(1000, 0), 1.0);
        assert_eq!(plan.step_count(), 81);

        // Same distance at speed 4 -> 200ms -> 20 intervals
        let plan = generator.plan(Point::new(0, 0), Point::new(1000, 0), 4.0);
        assert_eq!(plan.step_count(), 21);
    }

    #[test]
    fn deltas_sum_to_the_total_offset() {
        let mut generator = TrajectoryGenerator::seeded(42);
        let start = Point::new(-120, 45);
        let target = Point::new(733, -291);
        let plan = generator.plan(start, target, 1.3);
        let (sx, sy) = plan.total_delta();
        assert!((sx - 853).abs() <= 1, "x sum {sx}");
        assert!((sy + 336).abs() <= 1, "y sum {sy}");
    }

    #[test]
    fn first_step_is_empty_and_path_bulges() {
        let mut generator = TrajectoryGenerator::seeded(3);
        let plan = generator.plan(Point::new(0, 0), Point::new(0, 400), 1.0);
        assert!(!plan.steps().next().unwrap().is_move());

        // Straight vertical move still drifts sideways in x mid-path
        let mut x = 0i64;
        let mut max_x = 0i64;
        for s in plan.steps() {
            x += s.dx as i64;
            max_x = max_x.max(x);
        }
        assert!(max_x >= 5, "expected lateral bulge, got {max_x}");
        assert!((0.5..=1.0).contains(&plan.curve_strength));
    }

    #[test]
    fn non_positive_speed_matches_unit_speed() {
        let start = Point::new(10, 10);
        let target = Point::new(410, 310);
        let a = TrajectoryGenerator::seeded(9).plan(start, target, 0.0);
        let b = TrajectoryGenerator::seeded(9).plan(start, target, 1.0);
        assert!(a.steps().eq(b.steps()));
        assert_eq!(a.speed, 1.0);
    }

    #[test]
    fn delays_scale_with_speed() {
        let mut generator = TrajectoryGenerator::seeded(11);
        let plan = generator.plan(Point::new(0, 0), Point::new(50, 50), 1.0);
        for s in plan.steps() {
            assert!((10..13).contains(&(s.delay.as_millis() as u64)));
        }
        let plan = generator.plan(Point::new(0, 0), Point::new(50, 50), 5.0);
        for s in plan.steps() {
            assert!((2..5).contains(&(s.delay.as_millis() as u64)));
        }
    }

    #[test]
    fn replaying_steps_is_deterministic() {
        let plan = TrajectoryGenerator::seeded(5).plan(Point::new(0, 0), Point::new(90, 40), 2.0);
        assert!(plan.steps().eq(plan.steps()));
        assert_eq!(plan.steps().size_hint(), (11, Some(11)));
    }

    #[test]
    fn tiny_speed_plans_without_allocating_or_overflowing() {
        let mut generator = TrajectoryGenerator::seeded(13);

        let p = Point::new(40, 40);
        let plan = generator.plan(p, p, 1e-300);
        assert_eq!(plan.step_count(), MIN_STEPS + 1);
        for s in plan.steps() {
            assert_eq!(s.delay, Duration::from_millis(u64::MAX));
        }

        let plan = generator.plan(Point::new(0, 0), Point::new(1000, 0), 1e-9);
        assert!(plan.step_count() > 79_000_000_000);
        let first: Vec<_> = plan.steps().take(3).collect();
        assert_eq!(first.len(), 3);
        assert!(first.iter().all(|s| s.delay >= Duration::from_millis(9_000_000_000)));
    }

    #[test]
    fn cancelled_token_skips_slow_trajectory() {
        let mut generator = TrajectoryGenerator::seeded(13);
        let plan = generator.plan(Point::new(0, 0), Point::new(1000, 0), 1e-9);
        let mouse = crate::backend::MockMouseBackend::new();
        let token = CancelToken::new();
        token.cancel();

        let report = run(&mouse, &plan, &token).unwrap();
        assert!(report.cancelled);
        assert_eq!(report.steps_run, 0);
        assert!(mouse.events().is_empty());
    }
}
