//! Trajectory tests against the mock mouse

use input_sim::backend::{BackendError, MockKeyboardBackend, MockMouseBackend, MouseBackend, MouseEvent, Point};
use input_sim::trajectory::generator::run;
use input_sim::{CancelToken, Config, Simulator, TrajectoryGenerator};
use std::thread;
use std::time::Duration;

fn moves(mouse: &MockMouseBackend) -> Vec<(i32, i32)> {
    mouse
        .events()
        .into_iter()
        .filter_map(|e| match e {
            MouseEvent::Move { dx, dy } => Some((dx, dy)),
            _ => None,
        })
        .collect()
}

#[test]
fn test_move_lands_on_target() {
    let _ = env_logger::builder().is_test(true).try_init();

    let mouse = MockMouseBackend::at(100, 100);
    let mut generator = TrajectoryGenerator::seeded(17);
    let report = generator
        .move_to(&mouse, Point::new(260, 40), 20.0, &CancelToken::new())
        .unwrap();

    assert!(!report.cancelled);
    assert_eq!(report.steps_run, 11);
    assert_eq!(report.moves_emitted, moves(&mouse).len());
    assert_eq!(MouseBackend::position(&mouse).unwrap(), Point::new(260, 40));
}

#[test]
fn test_move_to_current_position_is_net_zero() {
    let mouse = MockMouseBackend::at(500, 500);
    let mut generator = TrajectoryGenerator::seeded(2);
    let report = generator
        .move_to(&mouse, Point::new(500, 500), 1.0, &CancelToken::new())
        .unwrap();

    assert_eq!(report.steps_run, 11);
    let (sx, sy) = moves(&mouse).iter().fold((0, 0), |(x, y), (dx, dy)| (x + dx, y + dy));
    assert!(sx.abs() <= 1 && sy.abs() <= 1);
    // The arch still produces some sideways motion
    assert!(report.moves_emitted > 0);
}

#[test]
fn test_zero_deltas_are_not_sent() {
    let mouse = MockMouseBackend::new();
    let mut generator = TrajectoryGenerator::seeded(8);
    generator
        .move_to(&mouse, Point::new(3, 0), 50.0, &CancelToken::new())
        .unwrap();
    assert!(moves(&mouse).iter().all(|&(dx, dy)| dx != 0 || dy != 0));
}

#[test]
fn test_failed_position_query_sends_nothing() {
    let mouse = MockMouseBackend::new();
    mouse.fail_position_queries(true);
    let mut generator = TrajectoryGenerator::seeded(1);
    let result = generator.move_to(&mouse, Point::new(10, 10), 1.0, &CancelToken::new());
    assert!(matches!(result, Err(BackendError::Operation(_))));
    assert!(mouse.events().is_empty());
}

#[test]
fn test_cancel_stops_remaining_steps() {
    let mouse = MockMouseBackend::new();
    let mut generator = TrajectoryGenerator::seeded(4);
    // 2000px at speed 1 -> 160 steps of ~10ms each
    let trajectory = generator.plan(Point::new(0, 0), Point::new(2000, 0), 1.0);
    assert_eq!(trajectory.step_count(), 161);

    let token = CancelToken::new();
    let canceller = {
        let token = token.clone();
        thread::spawn(move || {
            thread::sleep(Duration::from_millis(100));
            token.cancel();
        })
    };

    let report = run(&mouse, &trajectory, &token).unwrap();
    canceller.join().unwrap();

    assert!(report.cancelled);
    assert!((report.steps_run as u64) < trajectory.step_count());
    assert!(MouseBackend::position(&mouse).unwrap().x < 2000);
}

#[test]
fn test_simulator_uses_default_speed_and_seed() {
    let config = Config::from_toml("[settings]\ndefault_speed = 40.0\nseed = 99\n").unwrap();
    let a = MockMouseBackend::new();
    let b = MockMouseBackend::new();

    Simulator::new(&config, MockKeyboardBackend::new(), a.clone())
        .move_to(300, 120, None)
        .unwrap();
    Simulator::new(&config, MockKeyboardBackend::new(), b.clone())
        .move_to(300, 120, None)
        .unwrap();

    // Same seed, same path
    assert_eq!(moves(&a), moves(&b));
    assert_eq!(MouseBackend::position(&a).unwrap(), Point::new(300, 120));
}
