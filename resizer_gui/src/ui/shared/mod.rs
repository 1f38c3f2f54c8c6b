//! Shared UI components
//!
//! Contains:
//! - `divider` - Draggable vertical bar that resizes the sidebar

pub mod divider;
