mod draw {
    include!("../src/draw.rs");
}

mod overlay {
    include!("../src/overlay.rs");
}

use overlay::{View, render};
use posture_core::{Landmark, LandmarkId, Landmarks, Monitor, Settings};
use std::time::{Duration, Instant};

const W: usize = 320;
const H: usize = 240;

fn view() -> View {
    View {
        resize_mode: false,
        frame_size: (W as u32, H as u32),
        min_visibility: 0.5,
    }
}

fn pixel(buf: &[u8], x: usize, y: usize) -> [u8; 3] {
    let idx = (y * W + x) * 3;
    [buf[idx], buf[idx + 1], buf[idx + 2]]
}

fn count(buf: &[u8], color: [u8; 3]) -> usize {
    buf.chunks_exact(3).filter(|px| *px == color).count()
}

fn slouching() -> Landmarks {
    [
        (LandmarkId::LeftHip, Landmark::new(150.0, 200.0, 0.9)),
        (LandmarkId::LeftShoulder, Landmark::new(170.0, 110.0, 0.9)),
        (LandmarkId::LeftEar, Landmark::new(210.0, 70.0, 0.9)),
    ]
    .into_iter()
    .collect()
}

#[test]
fn test_no_pose_overlay() {
    let mut monitor = Monitor::new(&Settings::default());
    let landmarks = Landmarks::new();
    let report = monitor.process(&landmarks, Instant::now());

    let mut buf = vec![0u8; W * H * 3];
    render(&mut buf, W, H, &landmarks, &report, &view());

    assert!(count(&buf, draw::RED) > 50, "red 'No pose detected' text");
    assert_eq!(count(&buf, draw::GREEN), 0);
}

#[test]
fn test_poor_posture_overlay() {
    let mut monitor = Monitor::new(&Settings::default());
    let landmarks = slouching();
    let t0 = Instant::now();
    monitor.process(&landmarks, t0);
    let report = monitor.process(&landmarks, t0 + Duration::from_secs(1));
    assert!(report.guidance.is_some());

    let mut buf = vec![0u8; W * H * 3];
    render(&mut buf, W, H, &landmarks, &report, &view());

    // the shoulder joint is marked in the verdict color
    assert_eq!(pixel(&buf, 170, 110), draw::RED);
    // guidance text in yellow above the status bar
    assert!(count(&buf, draw::YELLOW) > 50);
}

#[test]
fn test_good_posture_overlay() {
    let mut monitor = Monitor::new(&Settings::default());
    let landmarks: Landmarks = [
        (LandmarkId::RightHip, Landmark::new(160.0, 220.0, 0.9)),
        (LandmarkId::RightShoulder, Landmark::new(160.0, 130.0, 0.9)),
        (LandmarkId::RightEar, Landmark::new(165.0, 90.0, 0.9)),
    ]
    .into_iter()
    .collect();
    let report = monitor.process(&landmarks, Instant::now());
    assert!(report.guidance.is_none());

    let mut buf = vec![0u8; W * H * 3];
    render(&mut buf, W, H, &landmarks, &report, &view());

    assert_eq!(pixel(&buf, 160, 130), draw::GREEN);
    assert_eq!(count(&buf, draw::YELLOW), 0);
}

#[test]
fn test_status_bar_darkens_bottom_rows() {
    let mut monitor = Monitor::new(&Settings::default());
    let landmarks = Landmarks::new();
    let report = monitor.process(&landmarks, Instant::now());

    let mut buf = vec![200u8; W * H * 3];
    render(&mut buf, W, H, &landmarks, &report, &view());

    let [r, _, _] = pixel(&buf, W / 2, H - 1);
    assert!(r < 200);
    assert_eq!(pixel(&buf, W / 2, H / 2), [200, 200, 200]);
}

#[test]
fn test_tiny_frame_does_not_panic() {
    let mut monitor = Monitor::new(&Settings::default());
    let landmarks = slouching();
    let report = monitor.process(&landmarks, Instant::now());

    let mut buf = vec![0u8; 16 * 12 * 3];
    let view = View {
        resize_mode: true,
        frame_size: (16, 12),
        min_visibility: 0.5,
    };
    render(&mut buf, 16, 12, &landmarks, &report, &view);
}
