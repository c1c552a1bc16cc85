use minifb::{Scale, ScaleMode, Window, WindowOptions};

pub const WINDOW_TITLE: &str = "Posture Monitor - q to quit, r to resize, f for fullscreen";
const TARGET_FPS: usize = 30;

/// Options for a normal resizable window, or a borderless one scaled to fill the screen.
pub fn window_options(fullscreen: bool) -> WindowOptions {
    if fullscreen {
        WindowOptions {
            borderless: true,
            topmost: true,
            resize: true,
            scale: Scale::FitScreen,
            scale_mode: ScaleMode::AspectRatioStretch,
            ..WindowOptions::default()
        }
    } else {
        WindowOptions {
            resize: true,
            ..WindowOptions::default()
        }
    }
}

/// Open the display window for a `width` x `height` frame.
pub fn open_window(
    width: usize,
    height: usize,
    fullscreen: bool,
) -> Result<Window, minifb::Error> {
    let mut window = Window::new(WINDOW_TITLE, width, height, window_options(fullscreen))?;
    if fullscreen {
        window.set_position(0, 0);
    }
    window.set_target_fps(TARGET_FPS);
    Ok(window)
}
