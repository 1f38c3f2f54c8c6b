//! Status Bar (Bottom)
//!
//! Displays:
//! - Settings file path
//! - Drag state indicator
//! - Status messages

use std::path::Path;

use iced::widget::{row, text, Space};
use iced::{Element, Length, Padding};

use resizer_core::handle::DragState;

use crate::Message;

/// Render the status bar
pub fn view_status_bar<'a>(settings_path: &'a Path, state: DragState, status: &'a str) -> Element<'a, Message> {
    let state_label = match state {
        DragState::Idle => "",
        DragState::Dragging => " [Resizing]",
    };

    row![
        text(settings_path.display().to_string()).size(10),
        text(state_label).size(10).color([0.6, 0.3, 0.0]),
        Space::new().width(Length::Fill),
        text(status).size(10),
    ]
    .padding(Padding::from([4, 0]))
    .into()
}
