//! Sidebar (Right)
//!
//! The resizable panel. Its width comes from the app's `PanelLayout`.

use iced::widget::{column, container, rule, text, Column};
use iced::{Element, Length};

use resizer_core::layout::PanelLayout;
use resizer_core::session::DragSession;

use crate::Message;

/// Render the sidebar at the layout's current width
pub fn view_sidebar(layout: PanelLayout, session: Option<DragSession>) -> Element<'static, Message> {
    let mut body: Column<'static, Message> = column![
        text("Sidebar").size(16),
        text(format!("Width: {:.0}px", layout.sidebar_width)).size(12),
        text(format!("Bounds: {:.0}px to {:.0}px", layout.min_width, layout.max_width))
            .size(10)
            .color([0.5, 0.5, 0.5]),
    ]
    .spacing(6)
    .padding(8);

    if let Some(session) = session {
        body = body.push(rule::horizontal(1)).push(
            text(format!(
                "Dragging from x={:.0}, started at {:.0}px",
                session.start_x, session.start_size
            ))
            .size(10),
        );
    }

    container(body)
        .width(Length::Fixed(layout.sidebar_width))
        .height(Length::Fill)
        .style(container::bordered_box)
        .padding(5)
        .into()
}
