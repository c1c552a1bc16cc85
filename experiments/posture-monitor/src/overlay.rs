use crate::draw::{
    BLACK, Color, GLYPH, GRAY, GREEN, RED, WHITE, YELLOW, blend_rect, draw_arc, draw_dashed_vline,
    draw_filled_circle, draw_text, draw_thick_line, heading, text_width,
};
use posture_base::Vec2;
use posture_core::{FrameReport, Landmarks, Verdict};

const MARGIN: i32 = 10;
const STATUS_BAR_HEIGHT: i32 = 22;

/// UI state shown alongside the analysis.
#[derive(Debug, Clone, Copy)]
pub struct View {
    pub resize_mode: bool,
    pub frame_size: (u32, u32),
    pub min_visibility: f32,
}

/// Frame buffer being annotated, HWC RGB.
struct Frame<'a> {
    buf: &'a mut [u8],
    width: usize,
    height: usize,
}

impl Frame<'_> {
    fn text(&mut self, x: i32, y: i32, text: &str, scale: usize, color: Color) {
        draw_text(self.buf, self.width, self.height, x, y, text, scale, color);
    }

    fn panel(&mut self, x: i32, y: i32, w: i32, h: i32, color: Color, alpha: f32) {
        blend_rect(self.buf, self.width, self.height, x, y, w, h, color, alpha);
    }
}

fn verdict_color(verdict: Verdict) -> Color {
    match verdict {
        Verdict::Good => GREEN,
        Verdict::Poor => RED,
    }
}

/// Draw the posture analysis of one frame onto it.
pub fn render(
    buf: &mut [u8],
    width: usize,
    height: usize,
    landmarks: &Landmarks,
    report: &FrameReport,
    view: &View,
) {
    let mut frame = Frame { buf, width, height };

    for (_, landmark) in landmarks.visible(view.min_visibility) {
        let p = landmark.position;
        draw_filled_circle(frame.buf, width, height, p.x as i32, p.y as i32, 4, YELLOW);
    }

    match &report.angles {
        Ok(angles) => {
            let color = verdict_color(report.state.verdict());
            let [shoulder, ear, hip] = angles
                .side
                .landmarks()
                .map(|id| landmarks.get(id).map(|l| l.position));
            if let (Some(shoulder), Some(ear), Some(hip)) = (shoulder, ear, hip) {
                draw_posture_lines(&mut frame, (shoulder, ear, hip), color);
            }

            let readout = format!(
                "Neck: {:.0} deg  Torso: {:.0} deg",
                angles.neck, angles.torso
            );
            frame.panel(0, 0, text_width(&readout, 2) as i32 + 2 * MARGIN, 36, BLACK, 0.4);
            frame.text(MARGIN, MARGIN, &readout, 2, color);
            draw_badge(&mut frame, report.state.verdict());
        }
        Err(_) => {
            let text = "No pose detected";
            frame.panel(0, 0, text_width(text, 2) as i32 + 2 * MARGIN, 36, BLACK, 0.4);
            frame.text(MARGIN, MARGIN, text, 2, RED);
        }
    }

    if let Some(message) = report.guidance {
        draw_guidance(&mut frame, message.text());
    }

    draw_status_bar(&mut frame, report, view);
}

fn draw_posture_lines(
    frame: &mut Frame<'_>,
    (shoulder, ear, hip): (Vec2<f32>, Vec2<f32>, Vec2<f32>),
    color: Color,
) {
    let (w, h) = (frame.width, frame.height);
    let pt = |v: Vec2<f32>| (v.x as i32, v.y as i32);
    let neck = ear - shoulder;
    let torso = shoulder - hip;

    // vertical references as long as the segments they are compared with
    draw_dashed_vline(
        frame.buf,
        w,
        h,
        shoulder.x as i32,
        shoulder.y as i32,
        (shoulder.y - neck.length()) as i32,
        GRAY,
    );
    draw_dashed_vline(
        frame.buf,
        w,
        h,
        hip.x as i32,
        hip.y as i32,
        (hip.y - torso.length()) as i32,
        GRAY,
    );

    draw_thick_line(frame.buf, w, h, pt(shoulder), pt(ear), 3, color);
    draw_thick_line(frame.buf, w, h, pt(hip), pt(shoulder), 3, color);

    draw_arc(frame.buf, w, h, pt(shoulder), 25, 0.0, heading(neck.x, neck.y), color);
    draw_arc(frame.buf, w, h, pt(hip), 35, 0.0, heading(torso.x, torso.y), color);

    for p in [shoulder, ear, hip] {
        draw_filled_circle(frame.buf, w, h, p.x as i32, p.y as i32, 6, color);
    }
}

fn draw_badge(frame: &mut Frame<'_>, verdict: Verdict) {
    let label = verdict.to_string();
    let text_w = text_width(&label, 3) as i32;
    let x = frame.width as i32 - text_w - 3 * MARGIN;
    let badge_h = 3 * GLYPH as i32 + 14;
    frame.panel(x, MARGIN, text_w + 2 * MARGIN, badge_h, verdict_color(verdict), 0.85);
    frame.text(x + MARGIN, MARGIN + 7, &label, 3, WHITE);
}

fn draw_guidance(frame: &mut Frame<'_>, text: &str) {
    let scale = if text_width(text, 2) + 4 * MARGIN as usize <= frame.width {
        2
    } else {
        1
    };
    let text_w = text_width(text, scale) as i32;
    let text_h = (GLYPH * scale) as i32;
    let panel_w = text_w + 2 * MARGIN;
    let panel_h = text_h + 2 * MARGIN;
    let x = (frame.width as i32 - panel_w) / 2;
    let y = frame.height as i32 - STATUS_BAR_HEIGHT - panel_h - MARGIN;

    frame.panel(x, y, panel_w, panel_h, BLACK, 0.6);
    frame.text(x + MARGIN, y + MARGIN, text, scale, YELLOW);
}

fn draw_status_bar(frame: &mut Frame<'_>, report: &FrameReport, view: &View) {
    let y = frame.height as i32 - STATUS_BAR_HEIGHT;
    frame.panel(0, y, frame.width as i32, STATUS_BAR_HEIGHT, BLACK, 0.6);

    let (status, color) = match report.poor_elapsed {
        Some(elapsed) => (
            format!("Poor posture for {:.1}s", elapsed.as_secs_f32()),
            RED,
        ),
        None if report.angles.is_ok() => ("Posture OK".to_string(), GREEN),
        None => ("Waiting for pose".to_string(), GRAY),
    };
    let text_y = y + (STATUS_BAR_HEIGHT - GLYPH as i32) / 2;
    frame.text(MARGIN, text_y, &status, 1, color);

    let hint = if view.resize_mode {
        let (w, h) = view.frame_size;
        format!("Resize {w}x{h}  arrows/WASD, r to finish")
    } else {
        "q quit  r resize".to_string()
    };
    let x = frame.width as i32 - text_width(&hint, 1) as i32 - MARGIN;
    frame.text(x, text_y, &hint, 1, WHITE);
}
