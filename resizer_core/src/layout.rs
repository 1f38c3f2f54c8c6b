//! # Panel Layout
//!
//! The caller-owned side of a resize: the stored sidebar width and the bounds
//! it is kept within. [`crate::handle::ResizeHandle`] reports raw widths;
//! this type decides what is actually stored.
//!
//! ## Example
//!
//! ```rust
//! use resizer_core::layout::PanelLayout;
//!
//! let mut layout = PanelLayout::new(300.0, 200.0, 600.0)?;
//! assert_eq!(layout.set_sidebar_width(1_000.0), 600.0);
//! assert_eq!(layout.set_sidebar_width(120.0), 200.0);
//! # Ok::<(), resizer_core::errors::ResizeError>(())
//! ```

use serde::{Deserialize, Serialize};

use crate::errors::{ResizeError, ResizeResult};

pub const DEFAULT_SIDEBAR_WIDTH: f32 = 360.0;
pub const DEFAULT_MIN_WIDTH: f32 = 200.0;
pub const DEFAULT_MAX_WIDTH: f32 = 800.0;

/// Width of the resizable sidebar and its allowed range, in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PanelLayout {
    pub sidebar_width: f32,
    pub min_width: f32,
    pub max_width: f32,
}

impl Default for PanelLayout {
    fn default() -> Self {
        PanelLayout {
            sidebar_width: DEFAULT_SIDEBAR_WIDTH,
            min_width: DEFAULT_MIN_WIDTH,
            max_width: DEFAULT_MAX_WIDTH,
        }
    }
}

impl PanelLayout {
    /// Create a layout, clamping `sidebar_width` into `[min_width, max_width]`.
    ///
    /// # Errors
    ///
    /// `InvalidInput` when a value is not finite, the minimum is negative, or
    /// the minimum exceeds the maximum.
    pub fn new(sidebar_width: f32, min_width: f32, max_width: f32) -> ResizeResult<Self> {
        for (field, value) in [
            ("sidebar_width", sidebar_width),
            ("min_width", min_width),
            ("max_width", max_width),
        ] {
            if !value.is_finite() {
                return Err(ResizeError::invalid_input(field, value.to_string(), "Must be a finite number"));
            }
        }
        if min_width < 0.0 {
            return Err(ResizeError::invalid_input(
                "min_width",
                min_width.to_string(),
                "Minimum width cannot be negative",
            ));
        }
        if min_width > max_width {
            return Err(ResizeError::invalid_input(
                "min_width",
                min_width.to_string(),
                format!("Minimum width exceeds maximum width {}", max_width),
            ));
        }

        let mut layout = PanelLayout {
            sidebar_width,
            min_width,
            max_width,
        };
        layout.sidebar_width = layout.clamp(sidebar_width);
        Ok(layout)
    }

    /// Clamp a width into the layout's bounds. NaN maps to the minimum.
    pub fn clamp(&self, width: f32) -> f32 {
        if width.is_nan() {
            return self.min_width;
        }
        width.clamp(self.min_width, self.max_width)
    }

    /// Store a new width and return the value actually stored.
    pub fn set_sidebar_width(&mut self, width: f32) -> f32 {
        self.sidebar_width = self.clamp(width);
        self.sidebar_width
    }

    /// Repair a layout read from disk.
    ///
    /// Invalid bounds fall back to the defaults; the width is re-clamped.
    pub fn sanitize(&mut self) {
        let bounds_ok = self.min_width.is_finite()
            && self.max_width.is_finite()
            && self.min_width >= 0.0
            && self.min_width <= self.max_width;
        if !bounds_ok {
            self.min_width = DEFAULT_MIN_WIDTH;
            self.max_width = DEFAULT_MAX_WIDTH;
        }
        if !self.sidebar_width.is_finite() {
            self.sidebar_width = DEFAULT_SIDEBAR_WIDTH;
        }
        self.sidebar_width = self.clamp(self.sidebar_width);
    }
}
