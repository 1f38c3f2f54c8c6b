//! # resizer_core - Drag-to-Resize Panel Divider
//!
//! `resizer_core` holds everything about a draggable panel divider that does
//! not depend on a GUI toolkit: the drag gesture state machine, the
//! window-wide listener registration it performs, and the caller-owned
//! layout that stores and bounds the resulting width.
//!
//! ## Quick Start
//!
//! ```rust
//! use resizer_core::handle::ResizeHandle;
//! use resizer_core::listeners::WindowListeners;
//! use resizer_core::session::PointerPress;
//!
//! let mut last_width = None;
//! {
//!     let mut handle = ResizeHandle::new(WindowListeners::default(), 300.0, |w| last_width = Some(w));
//!     let _ = handle.press(PointerPress::at(100.0, 0.0));
//!     handle.pointer_moved(130.0);
//!     handle.release();
//! }
//! assert_eq!(last_width, Some(270.0));
//! ```
//!
//! ## Modules
//!
//! - [`handle`] - The resize handle and its Idle/Dragging state machine
//! - [`session`] - Drag baseline and pointer press events
//! - [`listeners`] - Window-wide listener registry and the per-gesture subscription
//! - [`layout`] - Sidebar width and bounds, owned by the caller
//! - [`file_io`] - Atomic layout persistence
//! - [`errors`] - Structured error types

pub mod errors;
pub mod file_io;
pub mod handle;
pub mod layout;
pub mod listeners;
pub mod session;

pub use errors::{ResizeError, ResizeResult};
pub use file_io::{load_layout, save_layout};
pub use handle::{DragState, PressOutcome, ResizeHandle, PRESS_OUTCOME};
pub use layout::PanelLayout;
pub use listeners::{DragSubscription, EventTarget, ListenerId, ListenerKind, WindowListeners};
pub use session::{DragSession, PointerButton, PointerPress};
