use minifb::Key;
use posture_core::ResizeBounds;

/// What a key press asks the capture loop to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    None,
    Quit,
    ToggleResize,
    ToggleFullscreen,
    Resize { width: u32, height: u32 },
}

/// Owns the frame size and the resize and fullscreen toggles.
#[derive(Debug, Clone)]
pub struct Controls {
    resize_mode: bool,
    fullscreen: bool,
    width: u32,
    height: u32,
    bounds: ResizeBounds,
}

impl Controls {
    pub fn new(width: u32, height: u32, bounds: ResizeBounds) -> Self {
        Self {
            resize_mode: false,
            fullscreen: false,
            width,
            height,
            bounds,
        }
    }

    pub fn resize_mode(&self) -> bool {
        self.resize_mode
    }

    pub fn fullscreen(&self) -> bool {
        self.fullscreen
    }

    pub fn set_fullscreen(&mut self, fullscreen: bool) {
        self.fullscreen = fullscreen;
    }

    pub fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Take over the size the camera actually delivered.
    pub fn adopt(&mut self, width: u32, height: u32) {
        self.width = width;
        self.height = height;
    }

    pub fn handle(&mut self, key: Key) -> KeyAction {
        match key {
            Key::Q | Key::Escape => return KeyAction::Quit,
            Key::R => {
                self.resize_mode = !self.resize_mode;
                return KeyAction::ToggleResize;
            }
            Key::F => {
                self.fullscreen = !self.fullscreen;
                return KeyAction::ToggleFullscreen;
            }
            _ => {}
        }
        if !self.resize_mode {
            return KeyAction::None;
        }

        let step = self.bounds.step as i64;
        let (dw, dh) = match key {
            Key::Left | Key::A => (-step, 0),
            Key::Right | Key::D => (step, 0),
            Key::Up | Key::W => (0, step),
            Key::Down | Key::S => (0, -step),
            _ => return KeyAction::None,
        };
        let (width, height) = self
            .bounds
            .clamp(self.width as i64 + dw, self.height as i64 + dh);
        if (width, height) == (self.width, self.height) {
            return KeyAction::None;
        }
        self.width = width;
        self.height = height;
        KeyAction::Resize { width, height }
    }
}
