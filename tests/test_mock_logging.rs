//! Test to verify mock backends log output correctly

use input_sim::backend::{KeyboardBackend, MockKeyboardBackend, MockMouseBackend, MouseBackend, MouseButton};

#[test]
fn test_mock_keyboard_logs() {
    // Initialize a simple logger for testing
    let _ = env_logger::builder()
        .is_test(true)
        .filter_level(log::LevelFilter::Info)
        .try_init();

    let backend = MockKeyboardBackend::new();

    // These should log at info level (visible with RUST_LOG=info)
    assert!(KeyboardBackend::key_down(&backend, 0x57).is_ok());
    assert!(KeyboardBackend::key_up(&backend, 0x57).is_ok());
    assert!(backend.key_press(0x20).is_ok());
}

#[test]
fn test_mock_mouse_logs() {
    let _ = env_logger::builder()
        .is_test(true)
        .filter_level(log::LevelFilter::Info)
        .try_init();

    let backend = MockMouseBackend::new();

    assert!(MouseBackend::move_relative(&backend, 10, -5).is_ok());
    assert!(backend.mouse_button(MouseButton::X1, true, 1).is_ok());
    assert!(backend.mouse_button(MouseButton::X1, false, 1).is_ok());
}
