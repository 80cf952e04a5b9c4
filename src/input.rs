//! Input state shared between the host and the simulation
//!
//! The host writes key and pointer events between ticks; the simulation
//! reads the state once per tick. Key identifiers are stored lowercase.

use std::collections::HashSet;

use glam::Vec2;

/// Input events the host delivers, already in simulation space
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    KeyDown(String),
    KeyUp(String),
    PointerMove { x: f32, y: f32 },
    PointerDown,
    PointerUp,
}

/// Currently held keys and pointer state
#[derive(Debug, Clone, Default)]
pub struct InputState {
    keys: HashSet<String>,
    /// Pointer position in simulation coordinates
    pub pointer: Vec2,
    /// Primary pointer button held
    pub pointer_down: bool,
}

impl InputState {
    /// Create input state with the pointer resting at `pointer`
    pub fn new(pointer: Vec2) -> Self {
        Self {
            keys: HashSet::new(),
            pointer,
            pointer_down: false,
        }
    }

    pub fn key_down(&mut self, key: &str) {
        self.keys.insert(key.to_lowercase());
    }

    pub fn key_up(&mut self, key: &str) {
        self.keys.remove(&key.to_lowercase());
    }

    pub fn is_held(&self, key: &str) -> bool {
        self.keys.contains(key)
    }

    fn any_held(&self, keys: &[&str]) -> bool {
        keys.iter().any(|k| self.is_held(k))
    }

    /// Apply a host event
    pub fn apply(&mut self, event: &InputEvent) {
        match event {
            InputEvent::KeyDown(key) => self.key_down(key),
            InputEvent::KeyUp(key) => self.key_up(key),
            InputEvent::PointerMove { x, y } => self.pointer = Vec2::new(*x, *y),
            InputEvent::PointerDown => self.pointer_down = true,
            InputEvent::PointerUp => self.pointer_down = false,
        }
    }

    /// Release every key and the pointer button
    pub fn release_all(&mut self) {
        self.keys.clear();
        self.pointer_down = false;
    }

    /// Raw movement intent from opposing key pairs, each axis in {-1, 0, 1}
    ///
    /// +y points down the screen.
    pub fn move_axis(&self) -> Vec2 {
        Vec2::new(
            self.axis(&["d", "arrowright"], &["a", "arrowleft"]),
            self.axis(&["s", "arrowdown"], &["w", "arrowup"]),
        )
    }

    fn axis(&self, pos: &[&str], neg: &[&str]) -> f32 {
        (self.any_held(pos) as i8 - self.any_held(neg) as i8) as f32
    }
}

/// Map a pointer position from display space (relative to the element's
/// top-left corner, in CSS pixels) into simulation space.
pub fn display_to_field(local: Vec2, display_size: Vec2, field_size: Vec2) -> Vec2 {
    let scale = Vec2::new(
        if display_size.x > 0.0 { field_size.x / display_size.x } else { 1.0 },
        if display_size.y > 0.0 { field_size.y / display_size.y } else { 1.0 },
    );
    local * scale
}
