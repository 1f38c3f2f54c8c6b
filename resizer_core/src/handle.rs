//! # Resize Handle
//!
//! Turns horizontal pointer movement during a drag into panel-width updates.
//!
//! ```text
//!            press                 release / cancel
//!   Idle ─────────────▶ Dragging ─────────────────▶ Idle
//!                        │    ▲
//!                        └────┘ pointer_moved → on_resize(start_size - delta)
//! ```
//!
//! On press the handle records the pointer x and the current panel size, and
//! registers a pointer-move and a pointer-release listener on the event
//! target. Every move reports `start_size - (x - start_x)` to the callback.
//! Release removes both listeners. Moves and releases with no active session
//! do nothing.
//!
//! The handle never clamps. Bounds are the caller's job (see
//! [`crate::layout::PanelLayout`]).
//!
//! ## Example
//!
//! ```rust
//! use std::cell::RefCell;
//! use std::rc::Rc;
//! use resizer_core::handle::ResizeHandle;
//! use resizer_core::listeners::WindowListeners;
//! use resizer_core::session::PointerPress;
//!
//! let widths = Rc::new(RefCell::new(Vec::new()));
//! let sink = Rc::clone(&widths);
//! let mut handle = ResizeHandle::new(WindowListeners::default(), 300.0, move |w| {
//!     sink.borrow_mut().push(w)
//! });
//!
//! let _ = handle.press(PointerPress::at(100.0, 10.0));
//! handle.pointer_moved(80.0);
//! handle.release();
//! handle.pointer_moved(200.0);
//!
//! assert_eq!(*widths.borrow(), vec![320.0]);
//! ```

use std::fmt;

use tracing::{debug, trace};

use crate::listeners::{DragSubscription, EventTarget};
use crate::session::{DragSession, PointerPress};

/// Whether a drag gesture is in progress
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragState {
    Idle,
    Dragging,
}

/// What the host should do with the press event after the handle saw it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[must_use]
pub enum PressOutcome {
    /// Suppress the host's default press behavior (text selection, native drag)
    PreventDefault,
}

impl PressOutcome {
    pub fn prevents_default(self) -> bool {
        matches!(self, PressOutcome::PreventDefault)
    }
}

/// Outcome of every [`ResizeHandle::press`].
///
/// Hosts that decide what to do with a press while dispatching it, before the
/// handle has run (an iced widget publishing a message), read this instead.
pub const PRESS_OUTCOME: PressOutcome = PressOutcome::PreventDefault;

struct ActiveDrag {
    session: DragSession,
    subscription: DragSubscription,
}

/// A draggable divider on the left edge of a resizable panel.
pub struct ResizeHandle<T: EventTarget, F: FnMut(f32)> {
    target: T,
    initial_size: f32,
    on_resize: F,
    active: Option<ActiveDrag>,
}

impl<T: EventTarget, F: FnMut(f32)> ResizeHandle<T, F> {
    /// Create an idle handle.
    ///
    /// * `target` - window-wide listener registry
    /// * `initial_size` - panel width the next drag starts from
    /// * `on_resize` - receives every new width during a drag
    pub fn new(target: T, initial_size: f32, on_resize: F) -> Self {
        ResizeHandle {
            target,
            initial_size,
            on_resize,
            active: None,
        }
    }

    /// Update the width the next press captures.
    ///
    /// Has no effect on a drag already in progress.
    pub fn set_initial_size(&mut self, size: f32) {
        self.initial_size = size;
    }

    pub fn initial_size(&self) -> f32 {
        self.initial_size
    }

    pub fn state(&self) -> DragState {
        if self.active.is_some() {
            DragState::Dragging
        } else {
            DragState::Idle
        }
    }

    pub fn is_dragging(&self) -> bool {
        self.active.is_some()
    }

    /// Baseline of the current gesture, if any
    pub fn session(&self) -> Option<&DragSession> {
        self.active.as_ref().map(|a| &a.session)
    }

    pub fn target(&self) -> &T {
        &self.target
    }

    /// Start a drag gesture.
    ///
    /// A press during a drag restarts the baseline and keeps the listeners
    /// already registered.
    pub fn press(&mut self, press: PointerPress) -> PressOutcome {
        let session = DragSession::new(press.x, self.initial_size);
        match self.active.as_mut() {
            Some(active) => {
                debug!(start_x = press.x, start_size = self.initial_size, "drag restarted");
                active.session = session;
            }
            None => {
                debug!(start_x = press.x, start_size = self.initial_size, "drag started");
                let subscription = DragSubscription::open(&mut self.target);
                self.active = Some(ActiveDrag {
                    session,
                    subscription,
                });
            }
        }
        PRESS_OUTCOME
    }

    /// Report the pointer's current x coordinate.
    ///
    /// Returns the width passed to the callback, or `None` when idle.
    pub fn pointer_moved(&mut self, x: f32) -> Option<f32> {
        let session = self.active.as_ref()?.session;
        let width = session.width_at(x);
        trace!(x, width, "drag moved");
        (self.on_resize)(width);
        Some(width)
    }

    /// End the gesture and remove its listeners.
    pub fn release(&mut self) {
        if self.end_drag() {
            debug!("drag released");
        }
    }

    /// End the gesture without a release event (focus lost, host cancel).
    pub fn cancel(&mut self) {
        if self.end_drag() {
            debug!("drag cancelled");
        }
    }

    fn end_drag(&mut self) -> bool {
        match self.active.take() {
            Some(active) => {
                active.subscription.close(&mut self.target);
                true
            }
            None => false,
        }
    }
}

impl<T: EventTarget, F: FnMut(f32)> Drop for ResizeHandle<T, F> {
    fn drop(&mut self) {
        self.end_drag();
    }
}

impl<T: EventTarget + fmt::Debug, F: FnMut(f32)> fmt::Debug for ResizeHandle<T, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResizeHandle")
            .field("target", &self.target)
            .field("initial_size", &self.initial_size)
            .field("session", &self.session())
            .finish_non_exhaustive()
    }
}
