// Window + input polling.
// Visual effects provided here:
// 1) A resizable window that shows the software frame buffer 1:1.
// 2) Raw mouse/keyboard state turned into discrete Input events in device
//    coordinates (origin bottom-left), one list per poll.

use crate::error::Error;
use crate::input::{Input, Key};
use crate::types::{FrameBuffer, Point};
use minifb::{KeyRepeat, MouseButton, MouseMode, ScaleMode, Window, WindowOptions};

pub struct Drawer {
    window: Window,          // the on-screen window you see
    left_was_down: bool,     // for click edges
    last_mouse: Option<Point>,
}

impl Drawer {
    /// Create a resizable window of the requested size.
    /// Visual: a new black window appears with your chosen title.
    pub fn new(title: &str, width: usize, height: usize, fps: usize) -> Result<Self, Error> {
        let options = WindowOptions {
            resize: true,
            scale_mode: ScaleMode::UpperLeft,
            ..WindowOptions::default()
        };
        let mut window = Window::new(title, width, height, options)
            .map_err(|e| Error::WindowInit(e.to_string()))?;
        window.set_target_fps(fps);
        Ok(Self { window, left_was_down: false, last_mouse: None })
    }

    /// Push the pixels for this frame to the screen.
    /// Visual: the window immediately displays the redrawn scene.
    pub fn present(&mut self, framebuffer: &FrameBuffer) -> Result<(), Error> {
        self.window
            .update_with_buffer(&framebuffer.pixels, framebuffer.width, framebuffer.height)
            .map_err(|e| Error::WindowUpdate(e.to_string()))?;
        Ok(())
    }

    /// Pump window events without touching the displayed image.
    pub fn idle(&mut self) {
        self.window.update();
    }

    /// Returns false when the user closes the window (so we can stop the loop).
    pub fn is_open(&self) -> bool {
        self.window.is_open()
    }

    /// Current inner size of the window in pixels.
    pub fn size(&self) -> (usize, usize) {
        self.window.get_size()
    }

    /// Everything that happened since the last poll, oldest first.
    /// `height` is the frame buffer height used to flip mouse y.
    pub fn poll_inputs(&mut self, height: usize) -> Vec<Input> {
        let mut inputs: Vec<Input> = self
            .window
            .get_keys_pressed(KeyRepeat::Yes)
            .into_iter()
            .filter_map(map_key)
            .map(Input::Key)
            .collect();

        let mouse = self
            .window
            .get_mouse_pos(MouseMode::Discard)
            .map(|(x, y)| to_device(x, y, height));
        let left_down = self.window.get_mouse_down(MouseButton::Left);

        if let Some(p) = mouse {
            if left_down && !self.left_was_down {
                inputs.push(Input::Click(p));
            } else if left_down && self.last_mouse != Some(p) {
                inputs.push(Input::Drag(p));
            }
        }

        self.left_was_down = left_down;
        self.last_mouse = mouse;
        inputs
    }
}

/// Window-space mouse position (origin top-left) to device pixel (origin bottom-left).
pub fn to_device(x: f32, y: f32, height: usize) -> Point {
    let row = y.max(0.0) as i32;
    Point::new(x.max(0.0) as i32, height as i32 - 1 - row)
}

/// Keys we react to; everything else is dropped here.
pub fn map_key(key: minifb::Key) -> Option<Key> {
    use minifb::Key as K;
    let mapped = match key {
        K::Equal | K::NumPadPlus => Key::Plus,
        K::Minus | K::NumPadMinus => Key::Minus,
        K::LeftBracket => Key::LeftBracket,
        K::RightBracket => Key::RightBracket,
        K::Up => Key::Up,
        K::Down => Key::Down,
        K::Left => Key::Left,
        K::Right => Key::Right,
        K::C => Key::C,
        K::R => Key::R,
        K::Escape => Key::Escape,
        _ => return None,
    };
    Some(mapped)
}
