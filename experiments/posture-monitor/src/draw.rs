use font8x8::{BASIC_FONTS, UnicodeFonts};

pub type Color = [u8; 3];

pub const GREEN: Color = [40, 200, 80];
pub const RED: Color = [230, 50, 50];
pub const WHITE: Color = [255, 255, 255];
pub const YELLOW: Color = [255, 220, 0];
pub const GRAY: Color = [160, 160, 160];
pub const BLACK: Color = [0, 0, 0];

/// Glyph cell size of the bitmap font before scaling.
pub const GLYPH: usize = 8;

/// Draw a line using Bresenham's algorithm, clipped to the buffer.
pub fn draw_line(
    buf: &mut [u8],
    width: usize,
    height: usize,
    mut x0: i32,
    mut y0: i32,
    mut x1: i32,
    mut y1: i32,
    color: Color,
) {
    // Cohen-Sutherland
    loop {
        let outcode0 = compute_outcode(x0, y0, width as i32, height as i32);
        let outcode1 = compute_outcode(x1, y1, width as i32, height as i32);

        if (outcode0 | outcode1) == 0 {
            break;
        } else if (outcode0 & outcode1) != 0 {
            return;
        }
        let outcode = if outcode0 != 0 { outcode0 } else { outcode1 };
        let (x, y) = clip_point(x0, y0, x1, y1, outcode, width as i32, height as i32);
        if outcode == outcode0 {
            x0 = x;
            y0 = y;
        } else {
            x1 = x;
            y1 = y;
        }
    }

    let dx = (x1 - x0).abs();
    let dy = (y1 - y0).abs();
    let sx = if x0 < x1 { 1 } else { -1 };
    let sy = if y0 < y1 { 1 } else { -1 };
    let mut err = dx - dy;

    loop {
        set_pixel(buf, width, x0 as usize, y0 as usize, color);
        if x0 == x1 && y0 == y1 {
            break;
        }
        let e2 = 2 * err;
        if e2 > -dy {
            err -= dy;
            x0 += sx;
        }
        if e2 < dx {
            err += dx;
            y0 += sy;
        }
    }
}

/// A line `thickness` pixels wide, widened across its minor axis.
pub fn draw_thick_line(
    buf: &mut [u8],
    width: usize,
    height: usize,
    (x0, y0): (i32, i32),
    (x1, y1): (i32, i32),
    thickness: i32,
    color: Color,
) {
    let steep = (y1 - y0).abs() > (x1 - x0).abs();
    let half = thickness.max(1) / 2;
    for offset in -half..=(thickness.max(1) - 1 - half) {
        let (ox, oy) = if steep { (offset, 0) } else { (0, offset) };
        draw_line(buf, width, height, x0 + ox, y0 + oy, x1 + ox, y1 + oy, color);
    }
}

/// Dashed vertical line from `(x, y0)` to `(x, y1)`.
pub fn draw_dashed_vline(
    buf: &mut [u8],
    width: usize,
    height: usize,
    x: i32,
    y0: i32,
    y1: i32,
    color: Color,
) {
    const DASH: i32 = 6;
    let (top, bottom) = if y0 < y1 { (y0, y1) } else { (y1, y0) };
    let mut y = top;
    while y <= bottom {
        let end = (y + DASH - 1).min(bottom);
        draw_line(buf, width, height, x, y, x, end, color);
        y += DASH * 2;
    }
}

pub fn draw_filled_circle(
    buf: &mut [u8],
    width: usize,
    height: usize,
    cx: i32,
    cy: i32,
    radius: i32,
    color: Color,
) {
    let r2 = radius * radius;
    for dy in -radius..=radius {
        for dx in -radius..=radius {
            if dx * dx + dy * dy <= r2 {
                let x = cx + dx;
                let y = cy + dy;
                if x >= 0 && x < width as i32 && y >= 0 && y < height as i32 {
                    set_pixel(buf, width, x as usize, y as usize, color);
                }
            }
        }
    }
}

/// Arc around `(cx, cy)` between two headings.
///
/// Headings are degrees clockwise from straight up, so 0 points to the top
/// of the image and 90 to the right.
pub fn draw_arc(
    buf: &mut [u8],
    width: usize,
    height: usize,
    (cx, cy): (i32, i32),
    radius: i32,
    from_deg: f32,
    to_deg: f32,
    color: Color,
) {
    if radius <= 0 || !from_deg.is_finite() || !to_deg.is_finite() {
        return;
    }
    let span = to_deg - from_deg;
    let steps = (span.abs().ceil() as i32).max(1);
    let point = |deg: f32| {
        let rad = deg.to_radians();
        (
            cx + (radius as f32 * rad.sin()).round() as i32,
            cy - (radius as f32 * rad.cos()).round() as i32,
        )
    };

    let mut prev = point(from_deg);
    for step in 1..=steps {
        let next = point(from_deg + span * step as f32 / steps as f32);
        draw_line(buf, width, height, prev.0, prev.1, next.0, next.1, color);
        prev = next;
    }
}

/// Heading of the vector `(dx, dy)` in degrees clockwise from straight up.
pub fn heading(dx: f32, dy: f32) -> f32 {
    dx.atan2(-dy).to_degrees()
}

/// Blend `color` over a rectangle with `alpha` in [0, 1].
pub fn blend_rect(
    buf: &mut [u8],
    width: usize,
    height: usize,
    x: i32,
    y: i32,
    w: i32,
    h: i32,
    color: Color,
    alpha: f32,
) {
    let alpha = alpha.clamp(0.0, 1.0);
    let x_start = x.max(0) as usize;
    let y_start = y.max(0) as usize;
    let x_end = (x + w).clamp(0, width as i32) as usize;
    let y_end = (y + h).clamp(0, height as i32) as usize;

    for py in y_start..y_end {
        for px in x_start..x_end {
            let idx = (py * width + px) * 3;
            for ch in 0..3 {
                let under = buf[idx + ch] as f32;
                buf[idx + ch] = (under + (color[ch] as f32 - under) * alpha).round() as u8;
            }
        }
    }
}

/// Rendered width of `text` in pixels.
pub fn text_width(text: &str, scale: usize) -> usize {
    text.chars().count() * GLYPH * scale
}

/// Draw `text` with its top-left corner at `(x, y)`.
///
/// Characters outside basic Latin are drawn as blanks.
pub fn draw_text(
    buf: &mut [u8],
    width: usize,
    height: usize,
    x: i32,
    y: i32,
    text: &str,
    scale: usize,
    color: Color,
) {
    let scale = scale.max(1) as i32;
    for (i, ch) in text.chars().enumerate() {
        let Some(glyph) = BASIC_FONTS.get(ch) else {
            continue;
        };
        let origin_x = x + i as i32 * GLYPH as i32 * scale;
        for (row, bits) in glyph.iter().enumerate() {
            for col in 0..GLYPH {
                if bits & (1 << col) == 0 {
                    continue;
                }
                for sy in 0..scale {
                    for sx in 0..scale {
                        let px = origin_x + col as i32 * scale + sx;
                        let py = y + row as i32 * scale + sy;
                        if px >= 0 && px < width as i32 && py >= 0 && py < height as i32 {
                            set_pixel(buf, width, px as usize, py as usize, color);
                        }
                    }
                }
            }
        }
    }
}

/// Convert HWC RGB buffer to packed 0RGB u32 for minifb.
pub fn rgb_to_argb(buf: &[u8], width: usize, height: usize) -> Vec<u32> {
    buf[..width * height * 3]
        .chunks_exact(3)
        .map(|px| ((px[0] as u32) << 16) | ((px[1] as u32) << 8) | px[2] as u32)
        .collect()
}

fn set_pixel(buf: &mut [u8], width: usize, x: usize, y: usize, color: Color) {
    let idx = (y * width + x) * 3;
    buf[idx..idx + 3].copy_from_slice(&color);
}

const INSIDE: u8 = 0;
const LEFT: u8 = 1;
const RIGHT: u8 = 2;
const BOTTOM: u8 = 4;
const TOP: u8 = 8;

fn compute_outcode(x: i32, y: i32, width: i32, height: i32) -> u8 {
    let mut code = INSIDE;
    if x < 0 {
        code |= LEFT;
    } else if x >= width {
        code |= RIGHT;
    }
    if y < 0 {
        code |= TOP;
    } else if y >= height {
        code |= BOTTOM;
    }
    code
}

fn clip_point(
    x0: i32,
    y0: i32,
    x1: i32,
    y1: i32,
    outcode: u8,
    width: i32,
    height: i32,
) -> (i32, i32) {
    let dx = x1 - x0;
    let dy = y1 - y0;

    if outcode & TOP != 0 {
        (x0 + dx * -y0 / dy, 0)
    } else if outcode & BOTTOM != 0 {
        (x0 + dx * (height - 1 - y0) / dy, height - 1)
    } else if outcode & LEFT != 0 {
        (0, y0 + dy * -x0 / dx)
    } else {
        (width - 1, y0 + dy * (width - 1 - x0) / dx)
    }
}
