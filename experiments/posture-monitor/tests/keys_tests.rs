mod keys {
    include!("../src/keys.rs");
}

use keys::{Controls, KeyAction};
use minifb::Key;
use posture_core::ResizeBounds;

fn controls() -> Controls {
    Controls::new(640, 480, ResizeBounds::default())
}

#[test]
fn test_quit_keys() {
    let mut c = controls();
    assert_eq!(c.handle(Key::Q), KeyAction::Quit);
    assert_eq!(c.handle(Key::Escape), KeyAction::Quit);
}

#[test]
fn test_arrows_ignored_outside_resize_mode() {
    let mut c = controls();
    assert_eq!(c.handle(Key::Right), KeyAction::None);
    assert_eq!(c.handle(Key::W), KeyAction::None);
    assert_eq!(c.size(), (640, 480));
}

#[test]
fn test_toggle_resize_mode() {
    let mut c = controls();
    assert_eq!(c.handle(Key::R), KeyAction::ToggleResize);
    assert!(c.resize_mode());
    assert_eq!(c.handle(Key::R), KeyAction::ToggleResize);
    assert!(!c.resize_mode());
}

#[test]
fn test_toggle_fullscreen_in_any_mode() {
    let mut c = controls();
    assert_eq!(c.handle(Key::F), KeyAction::ToggleFullscreen);
    assert!(c.fullscreen());

    c.handle(Key::R);
    assert_eq!(c.handle(Key::F), KeyAction::ToggleFullscreen);
    assert!(!c.fullscreen());
    assert_eq!(c.size(), (640, 480));

    c.set_fullscreen(true);
    assert_eq!(c.handle(Key::F), KeyAction::ToggleFullscreen);
    assert!(!c.fullscreen());
}

#[test]
fn test_resize_steps() {
    let mut c = controls();
    c.handle(Key::R);

    assert_eq!(c.handle(Key::Right), KeyAction::Resize { width: 672, height: 480 });
    assert_eq!(c.handle(Key::A), KeyAction::Resize { width: 640, height: 480 });
    assert_eq!(c.handle(Key::Up), KeyAction::Resize { width: 640, height: 512 });
    assert_eq!(c.handle(Key::S), KeyAction::Resize { width: 640, height: 480 });
    assert_eq!(c.handle(Key::Space), KeyAction::None);
}

#[test]
fn test_resize_clamps_to_bounds() {
    let mut c = Controls::new(176, 1070, ResizeBounds::default());
    c.handle(Key::R);

    assert_eq!(c.handle(Key::Left), KeyAction::Resize { width: 160, height: 1070 });
    assert_eq!(c.handle(Key::Left), KeyAction::None);
    assert_eq!(c.handle(Key::Up), KeyAction::Resize { width: 160, height: 1080 });
    assert_eq!(c.handle(Key::W), KeyAction::None);
    assert_eq!(c.size(), (160, 1080));
}

#[test]
fn test_adopt_negotiated_size() {
    let mut c = controls();
    c.handle(Key::R);
    c.handle(Key::Right);
    c.adopt(800, 600);
    assert_eq!(c.size(), (800, 600));
    assert_eq!(c.handle(Key::D), KeyAction::Resize { width: 832, height: 600 });
}
