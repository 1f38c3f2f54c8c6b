//! Content Panel (Left)
//!
//! Fills whatever width the sidebar leaves free.

use iced::widget::{column, container, text};
use iced::{Element, Length};

use crate::Message;

/// Render the main content area
pub fn view_content_panel() -> Element<'static, Message> {
    let body = column![
        text("Content").size(16),
        text("Drag the bar on the right to resize the sidebar.").size(12),
        text("Dragging left grows the sidebar, dragging right shrinks it.")
            .size(12)
            .color([0.5, 0.5, 0.5]),
    ]
    .spacing(6)
    .padding(8);

    container(body)
        .width(Length::Fill)
        .height(Length::Fill)
        .style(container::bordered_box)
        .padding(5)
        .into()
}
