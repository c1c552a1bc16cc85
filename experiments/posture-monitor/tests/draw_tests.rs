mod draw {
    include!("../src/draw.rs");
}

use draw::*;

fn pixel(buf: &[u8], width: usize, x: usize, y: usize) -> [u8; 3] {
    let idx = (y * width + x) * 3;
    [buf[idx], buf[idx + 1], buf[idx + 2]]
}

#[test]
fn test_draw_line_horizontal() {
    let mut buf = vec![0u8; 10 * 5 * 3];
    draw_line(&mut buf, 10, 5, 1, 2, 8, 2, WHITE);

    for x in 1..=8 {
        assert_eq!(pixel(&buf, 10, x, 2), WHITE, "pixel ({x}, 2)");
    }
    assert_eq!(pixel(&buf, 10, 0, 0), BLACK);
}

#[test]
fn test_draw_line_clips_to_bounds() {
    let mut buf = vec![0u8; 10 * 10 * 3];
    draw_line(&mut buf, 10, 10, -5, 5, 15, 5, RED);

    for x in 0..10 {
        assert_eq!(pixel(&buf, 10, x, 5), RED, "pixel ({x}, 5)");
    }
}

#[test]
fn test_draw_line_fully_outside() {
    let mut buf = vec![0u8; 10 * 10 * 3];
    draw_line(&mut buf, 10, 10, -5, -5, -1, -8, RED);
    assert!(buf.iter().all(|&b| b == 0));
}

#[test]
fn test_thick_line_covers_neighbours() {
    let mut buf = vec![0u8; 20 * 20 * 3];
    draw_thick_line(&mut buf, 20, 20, (10, 2), (10, 17), 3, GREEN);

    for x in 9..=11 {
        assert_eq!(pixel(&buf, 20, x, 10), GREEN);
    }
    assert_eq!(pixel(&buf, 20, 8, 10), BLACK);
    assert_eq!(pixel(&buf, 20, 12, 10), BLACK);
}

#[test]
fn test_dashed_vline_has_gaps() {
    let mut buf = vec![0u8; 5 * 30 * 3];
    draw_dashed_vline(&mut buf, 5, 30, 2, 0, 29, GRAY);

    assert_eq!(pixel(&buf, 5, 2, 0), GRAY);
    assert_eq!(pixel(&buf, 5, 2, 5), GRAY);
    assert_eq!(pixel(&buf, 5, 2, 6), BLACK);
    assert_eq!(pixel(&buf, 5, 2, 12), GRAY);
}

#[test]
fn test_filled_circle_clipped() {
    let mut buf = vec![0u8; 10 * 10 * 3];
    draw_filled_circle(&mut buf, 10, 10, 0, 0, 3, YELLOW);

    assert_eq!(pixel(&buf, 10, 0, 0), YELLOW);
    assert_eq!(pixel(&buf, 10, 3, 0), YELLOW);
    assert_eq!(pixel(&buf, 10, 3, 3), BLACK);
}

#[test]
fn test_heading() {
    assert!(heading(0.0, -1.0).abs() < 1e-5);
    assert!((heading(1.0, 0.0) - 90.0).abs() < 1e-5);
    assert!((heading(-1.0, 0.0) + 90.0).abs() < 1e-5);
}

#[test]
fn test_arc_from_up_to_right() {
    let mut buf = vec![0u8; 40 * 40 * 3];
    draw_arc(&mut buf, 40, 40, (20, 20), 10, 0.0, 90.0, WHITE);

    // endpoints straight up and straight right of the centre
    assert_eq!(pixel(&buf, 40, 20, 10), WHITE);
    assert_eq!(pixel(&buf, 40, 30, 20), WHITE);
    // the left half stays empty
    assert_eq!(pixel(&buf, 40, 10, 20), BLACK);
}

#[test]
fn test_blend_rect() {
    let mut buf = vec![100u8; 4 * 4 * 3];
    blend_rect(&mut buf, 4, 4, 1, 1, 10, 10, [200, 0, 100], 0.5);

    assert_eq!(pixel(&buf, 4, 0, 0), [100, 100, 100]);
    assert_eq!(pixel(&buf, 4, 1, 1), [150, 50, 100]);
    assert_eq!(pixel(&buf, 4, 3, 3), [150, 50, 100]);
}

#[test]
fn test_text() {
    assert_eq!(text_width("Sit up", 2), 6 * 8 * 2);

    let mut buf = vec![0u8; 20 * 10 * 3];
    draw_text(&mut buf, 20, 10, 0, 0, " ", 1, WHITE);
    assert!(buf.iter().all(|&b| b == 0));

    draw_text(&mut buf, 20, 10, 0, 0, "H", 1, WHITE);
    let lit = buf.chunks_exact(3).filter(|px| *px == WHITE).count();
    assert!(lit > 10);
    // nothing beyond the first glyph cell
    for y in 0..10 {
        for x in 8..20 {
            assert_eq!(pixel(&buf, 20, x, y), BLACK);
        }
    }
}

#[test]
fn test_text_clipped_at_edge() {
    let mut buf = vec![0u8; 6 * 6 * 3];
    draw_text(&mut buf, 6, 6, -4, -4, "POOR", 2, RED);
}

#[test]
fn test_rgb_to_argb() {
    let buf = vec![255, 0, 0, 0, 255, 0, 0, 0, 255, 1, 2, 3];
    assert_eq!(
        rgb_to_argb(&buf, 2, 2),
        vec![0x00FF0000, 0x0000FF00, 0x000000FF, 0x00010203]
    );
}
