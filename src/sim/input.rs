//! Keyboard input
//!
//! Input is polled: the host feeds key events into a [`KeyboardState`] as they
//! arrive and the rocket queries it once per frame.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

/// Keys the game can bind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Key {
    A,
    C,
    D,
    E,
    L,
    Q,
    S,
    W,
    Space,
    Left,
    Right,
    Up,
}

/// Queryable keyboard state
pub trait InputSource {
    /// Key is currently down
    fn is_held(&self, key: Key) -> bool;
    /// Key went down during this frame
    fn is_pressed_this_frame(&self, key: Key) -> bool;
}

/// Held keys plus the keys that went down since the last `end_frame`
#[derive(Debug, Clone, Default)]
pub struct KeyboardState {
    held: HashSet<Key>,
    pressed: HashSet<Key>,
}

impl KeyboardState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Key down event. OS auto-repeat does not count as a new press.
    pub fn press(&mut self, key: Key) {
        if self.held.insert(key) {
            self.pressed.insert(key);
        }
    }

    /// Key up event
    pub fn release(&mut self, key: Key) {
        self.held.remove(&key);
    }

    /// Release everything (focus loss)
    pub fn clear(&mut self) {
        self.held.clear();
        self.pressed.clear();
    }

    /// Forget this frame's edges. Call after the frame has been processed.
    pub fn end_frame(&mut self) {
        self.pressed.clear();
    }
}

impl InputSource for KeyboardState {
    fn is_held(&self, key: Key) -> bool {
        self.held.contains(&key)
    }

    fn is_pressed_this_frame(&self, key: Key) -> bool {
        self.pressed.contains(&key)
    }
}
