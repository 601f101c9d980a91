//! Keycode-to-action translation.
//!
//! WASD pans, R/F zooms, T/G adjusts iteration depth, Q or Escape quits.
//! The core only ever sees the resulting [`InputSnapshot`].

use crate::core::navigation::InputSnapshot;
use winit::event::ElementState;
use winit::keyboard::KeyCode;

#[derive(Debug, Default)]
pub struct Keymap {
    snapshot: InputSnapshot,
}

impl Keymap {
    pub fn handle_key_event(&mut self, key_code: KeyCode, state: ElementState) {
        let pressed = state == ElementState::Pressed;

        match key_code {
            KeyCode::KeyW => self.snapshot.pan_up = pressed,
            KeyCode::KeyS => self.snapshot.pan_down = pressed,
            KeyCode::KeyA => self.snapshot.pan_left = pressed,
            KeyCode::KeyD => self.snapshot.pan_right = pressed,
            KeyCode::KeyR => self.snapshot.zoom_in = pressed,
            KeyCode::KeyF => self.snapshot.zoom_out = pressed,
            KeyCode::KeyT => self.snapshot.iters_up = pressed,
            KeyCode::KeyG => self.snapshot.iters_down = pressed,
            // quit latches; there is no way back once requested
            KeyCode::KeyQ | KeyCode::Escape if pressed => self.snapshot.quit = true,
            _ => {}
        }
    }

    #[must_use]
    pub fn snapshot(&self) -> InputSnapshot {
        self.snapshot
    }
}
