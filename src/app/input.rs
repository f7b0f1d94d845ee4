use std::collections::HashSet;

use glam::Vec2;
use winit::event::{ElementState, KeyEvent};
use winit::keyboard::{KeyCode, PhysicalKey};

/// Keyboard and cursor state sampled once per frame by the controllers.
#[derive(Default, Debug, Clone)]
pub struct Input {
    /// Cursor position inside the window
    pub cursor_position: Vec2,
    /// Cursor movement since the previous frame (dx, dy)
    pub cursor_delta: Vec2,
    /// Window size
    pub screen_size: Vec2,
    /// Keys currently held down
    pub keys: HashSet<KeyCode>,
    /// Keys that went down during this frame (ignores key repeat)
    pub keys_pressed: HashSet<KeyCode>,
    cursor_seen: bool,
}

impl Input {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Clears per-frame deltas and edges.
    pub fn end_frame(&mut self) {
        self.cursor_delta = Vec2::ZERO;
        self.keys_pressed.clear();
    }

    pub fn handle_resize(&mut self, width: u32, height: u32) {
        self.screen_size = Vec2::new(width as f32, height as f32);
    }

    pub fn handle_cursor_move(&mut self, x: f64, y: f64) {
        let new_pos = Vec2::new(x as f32, y as f32);
        // The first event only anchors the cursor.
        if self.cursor_seen {
            self.cursor_delta += new_pos - self.cursor_position;
        }
        self.cursor_seen = true;
        self.cursor_position = new_pos;
    }

    pub fn handle_key(&mut self, state: ElementState, key: KeyCode) {
        match state {
            ElementState::Pressed => {
                if self.keys.insert(key) {
                    self.keys_pressed.insert(key);
                }
            }
            ElementState::Released => {
                self.keys.remove(&key);
            }
        }
    }

    pub fn handle_keyboard_event(&mut self, event: &KeyEvent) {
        if let PhysicalKey::Code(code) = event.physical_key {
            self.handle_key(event.state, code);
        }
    }

    #[must_use]
    pub fn is_key_down(&self, key: KeyCode) -> bool {
        self.keys.contains(&key)
    }

    #[must_use]
    pub fn was_key_pressed(&self, key: KeyCode) -> bool {
        self.keys_pressed.contains(&key)
    }
}
