// Window + input plumbing around minifb.
// Everything the app needs from the window per frame is gathered into a
// `FrameInput`, so the app itself never touches minifb state.

use std::cell::RefCell;
use std::rc::Rc;

use minifb::{InputCallback, Key, KeyRepeat, MouseButton, MouseMode, Scale, Window, WindowOptions};

use crate::error::Error;
use crate::types::{FrameBuffer, Point};

/// One frame of user input.
#[derive(Debug, Default, Clone)]
pub struct FrameInput {
    pub pointer_down: bool,
    /// Pointer in buffer pixels; None outside the window.
    pub pointer: Option<Point>,
    pub focused: bool,
    /// Keys that went down this frame (Backspace and arrows also on auto-repeat).
    pub pressed: Vec<Key>,
    /// Characters typed this frame.
    pub typed: Vec<char>,
}

/// Collects typed characters from minifb's callback until the next frame drains them.
struct TypedChars(Rc<RefCell<Vec<char>>>);

impl InputCallback for TypedChars {
    fn add_char(&mut self, uni_char: u32) {
        if let Some(ch) = char::from_u32(uni_char) {
            self.0.borrow_mut().push(ch);
        }
    }
}

const REPEATING_KEYS: [Key; 3] = [Key::Backspace, Key::Up, Key::Down];

pub struct Drawer {
    window: Window,
    typed: Rc<RefCell<Vec<char>>>,
}

impl Drawer {
    pub fn new(title: &str, width: usize, height: usize, scale: Scale, fps: usize) -> Result<Self, Error> {
        let options = WindowOptions { scale, ..WindowOptions::default() };
        let mut window = Window::new(title, width, height, options)
            .map_err(|e| Error::WindowInit(e.to_string()))?;
        window.set_target_fps(fps);

        let typed = Rc::new(RefCell::new(Vec::new()));
        window.set_input_callback(Box::new(TypedChars(Rc::clone(&typed))));
        Ok(Self { window, typed })
    }

    /// Push the pixels for this frame to the screen.
    pub fn present(&mut self, framebuffer: &FrameBuffer) -> Result<(), Error> {
        self.window
            .update_with_buffer(&framebuffer.pixels, framebuffer.width, framebuffer.height)
            .map_err(|e| Error::WindowUpdate(e.to_string()))?;
        Ok(())
    }

    /// Returns false when the user closes the window.
    pub fn is_open(&self) -> bool {
        self.window.is_open()
    }

    pub fn frame_input(&mut self) -> FrameInput {
        let mut pressed = self.window.get_keys_pressed(KeyRepeat::No);
        for key in REPEATING_KEYS {
            if !pressed.contains(&key) && self.window.is_key_pressed(key, KeyRepeat::Yes) {
                pressed.push(key);
            }
        }

        FrameInput {
            pointer_down: self.window.get_mouse_down(MouseButton::Left),
            pointer: self
                .window
                .get_mouse_pos(MouseMode::Pass)
                .map(|(x, y)| Point::new(x, y)),
            focused: self.window.is_active(),
            pressed,
            typed: std::mem::take(&mut *self.typed.borrow_mut()),
        }
    }
}
