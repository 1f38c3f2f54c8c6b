//! # Drag Session
//!
//! The baseline captured when a drag gesture starts, and the press event it
//! is captured from.

/// Mouse button that started a press
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PointerButton {
    #[default]
    Primary,
    Secondary,
    Middle,
    Back,
    Forward,
    Other(u16),
}

/// A pointer press on the handle, in window coordinates (px)
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PointerPress {
    pub x: f32,
    pub y: f32,
    pub button: PointerButton,
}

impl PointerPress {
    /// Primary-button press at `(x, y)`
    pub fn at(x: f32, y: f32) -> Self {
        PointerPress {
            x,
            y,
            button: PointerButton::Primary,
        }
    }
}

/// Pointer position and panel size at the moment a drag started.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragSession {
    pub start_x: f32,
    pub start_size: f32,
}

impl DragSession {
    pub fn new(start_x: f32, start_size: f32) -> Self {
        DragSession { start_x, start_size }
    }

    /// Panel width for a pointer now at `x`.
    ///
    /// The handle sits on the left edge of the panel it resizes, so moving
    /// right shrinks the panel. The result is not clamped.
    pub fn width_at(&self, x: f32) -> f32 {
        let delta = x - self.start_x;
        self.start_size - delta
    }
}
