//! UI module for the Sidebar Resizer demo
//!
//! # Panel Structure
//! - `content_panel` - Left: main content area, takes the remaining width
//! - `shared/divider` - Draggable bar between content and sidebar
//! - `sidebar` - Right: the resizable panel
//! - `status_bar` - Bottom status messages

pub mod content_panel;
pub mod sidebar;
pub mod status_bar;

pub mod shared;
