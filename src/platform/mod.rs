//! Platform abstraction layer
//!
//! The host engine owns the window, event loop and presentation. The game
//! only needs to poll keys and ask to quit; `Host` is that boundary.

use std::collections::HashSet;

/// Keys the game polls each frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Left,
    Right,
    Up,
    Fire,
    Escape,
}

/// Engine services available to the game
pub trait Host {
    /// Is `key` held down this frame?
    fn is_key_pressed(&self, key: Key) -> bool;

    /// Quit after the current frame
    fn schedule_quit(&mut self);
}

/// In-memory host: keys are set by the caller
#[derive(Debug, Clone, Default)]
pub struct ScriptedHost {
    pressed: HashSet<Key>,
    quit_requested: bool,
}

impl ScriptedHost {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn press(&mut self, key: Key) {
        self.pressed.insert(key);
    }

    pub fn release(&mut self, key: Key) {
        self.pressed.remove(&key);
    }

    pub fn release_all(&mut self) {
        self.pressed.clear();
    }

    pub fn quit_requested(&self) -> bool {
        self.quit_requested
    }
}

impl Host for ScriptedHost {
    fn is_key_pressed(&self, key: Key) -> bool {
        self.pressed.contains(&key)
    }

    fn schedule_quit(&mut self) {
        self.quit_requested = true;
    }
}
