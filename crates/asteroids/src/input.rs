//! Device-input collaborator
//!
//! The platform layer reports raw key and pointer state into [`DeviceState`]
//! between ticks. The input system reads it once per tick and then latches
//! it, so "just pressed" is true only on the tick a button goes down.

use std::collections::HashSet;

/// Keys the game responds to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    /// Left arrow
    Left,
    /// Right arrow
    Right,
    /// Up arrow
    Up,
    /// Down arrow
    Down,
    /// Letter A
    A,
    /// Letter D
    D,
    /// Letter S
    S,
    /// Letter W
    W,
    /// Space bar
    Space,
    /// Enter / return
    Enter,
    /// Escape
    Escape,
}

/// Primary pointer (mouse button or first touch)
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PointerState {
    /// Horizontal screen coordinate
    pub x: f32,

    /// Vertical screen coordinate
    pub y: f32,

    /// Whether the pointer is held down
    pub down: bool,
}

/// Raw device state for the current tick
#[derive(Debug, Clone, Default)]
pub struct DeviceState {
    pressed: HashSet<Key>,
    previous: HashSet<Key>,
    pointer: PointerState,
    pointer_was_down: bool,
}

impl DeviceState {
    /// Empty device state: nothing held
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a key going down
    pub fn press(&mut self, key: Key) {
        self.pressed.insert(key);
    }

    /// Record a key going up
    pub fn release(&mut self, key: Key) {
        self.pressed.remove(&key);
    }

    /// Record the pointer position and button state
    pub fn set_pointer(&mut self, x: f32, y: f32, down: bool) {
        self.pointer = PointerState { x, y, down };
    }

    /// Record the pointer button going up at its last position
    pub fn release_pointer(&mut self) {
        self.pointer.down = false;
    }

    /// Whether the key is held
    pub fn is_pressed(&self, key: Key) -> bool {
        self.pressed.contains(&key)
    }

    /// Whether the key went down since the last latch
    pub fn is_just_pressed(&self, key: Key) -> bool {
        self.pressed.contains(&key) && !self.previous.contains(&key)
    }

    /// Whether any key is held
    pub fn any_pressed(&self) -> bool {
        !self.pressed.is_empty()
    }

    /// Current pointer state
    pub const fn pointer(&self) -> PointerState {
        self.pointer
    }

    /// Whether the pointer went down since the last latch
    pub const fn pointer_just_pressed(&self) -> bool {
        self.pointer.down && !self.pointer_was_down
    }

    /// Make the current state the baseline for the next tick's edge checks
    pub fn latch(&mut self) {
        self.previous.clone_from(&self.pressed);
        self.pointer_was_down = self.pointer.down;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_just_pressed_is_edge_triggered() {
        let mut device = DeviceState::new();
        device.press(Key::Space);
        assert!(device.is_just_pressed(Key::Space));

        device.latch();
        assert!(device.is_pressed(Key::Space));
        assert!(!device.is_just_pressed(Key::Space));

        device.release(Key::Space);
        device.latch();
        device.press(Key::Space);
        assert!(device.is_just_pressed(Key::Space));
    }

    #[test]
    fn test_pointer_edge() {
        let mut device = DeviceState::new();
        device.set_pointer(10.0, 20.0, true);
        assert!(device.pointer_just_pressed());
        device.latch();
        assert!(!device.pointer_just_pressed());
        assert!(device.pointer().down);
        device.release_pointer();
        assert!(!device.pointer().down);
        assert_eq!(device.pointer().x, 10.0);
    }
}
