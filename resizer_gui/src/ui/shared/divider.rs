//! Resizable Panel Divider
//!
//! A draggable vertical bar on the left edge of the sidebar. The bar only
//! reports where it was pressed; moves and releases after that are picked
//! up by the app's window-wide subscription, so the drag keeps working once
//! the pointer leaves the bar.

use iced::advanced::renderer::{self, Quad};
use iced::advanced::widget::Tree;
use iced::advanced::{Clipboard, Layout, Renderer as _, Shell, Widget, layout, mouse};
use iced::{Background, Color, Element, Event, Length, Point, Rectangle, Renderer, Size, Theme};

use resizer_core::handle::PRESS_OUTCOME;
use resizer_core::session::{PointerButton, PointerPress};

use crate::Message;

/// Total width of the bar, including the grab area around the line
pub const DIVIDER_WIDTH: f32 = 7.0;
const LINE_WIDTH: f32 = 1.0;

/// Narrow strip that publishes a message when pressed.
pub struct ResizerBar<'a, Message> {
    is_dragging: bool,
    capture_press: bool,
    on_press: Box<dyn Fn(PointerPress) -> Message + 'a>,
}

impl<'a, Message> ResizerBar<'a, Message> {
    pub fn new(on_press: impl Fn(PointerPress) -> Message + 'a) -> Self {
        ResizerBar {
            is_dragging: false,
            capture_press: true,
            on_press: Box::new(on_press),
        }
    }

    /// Whether a press on the bar is hidden from the widgets underneath
    pub fn capture_press(mut self, capture: bool) -> Self {
        self.capture_press = capture;
        self
    }

    /// Highlight the bar while a drag is in progress
    pub fn dragging(mut self, is_dragging: bool) -> Self {
        self.is_dragging = is_dragging;
        self
    }
}

impl<Message> Widget<Message, Theme, Renderer> for ResizerBar<'_, Message> {
    fn size(&self) -> Size<Length> {
        Size::new(Length::Fixed(DIVIDER_WIDTH), Length::Fill)
    }

    fn layout(&mut self, _: &mut Tree, _: &Renderer, limits: &layout::Limits) -> layout::Node {
        layout::Node::new(limits.resolve(Length::Fixed(DIVIDER_WIDTH), Length::Fill, Size::ZERO))
    }

    fn update(
        &mut self,
        _: &mut Tree,
        event: &Event,
        layout: Layout<'_>,
        cursor: mouse::Cursor,
        _: &Renderer,
        _: &mut dyn Clipboard,
        shell: &mut Shell<'_, Message>,
        _: &Rectangle,
    ) {
        let Event::Mouse(mouse::Event::ButtonPressed(button)) = event else {
            return;
        };
        if let Some(position) = cursor.position_over(layout.bounds()) {
            shell.publish((self.on_press)(press_at(position, *button)));
            if self.capture_press {
                shell.capture_event();
            }
        }
    }

    fn draw(
        &self,
        _: &Tree,
        renderer: &mut Renderer,
        theme: &Theme,
        _: &renderer::Style,
        layout: Layout<'_>,
        cursor: mouse::Cursor,
        _: &Rectangle,
    ) {
        let bounds = layout.bounds();
        let palette = theme.extended_palette();

        let background = if self.is_dragging {
            Some(palette.primary.weak.color)
        } else if cursor.is_over(bounds) {
            Some(Color::from_rgba(0.5, 0.5, 0.5, 0.1))
        } else {
            None
        };
        if let Some(color) = background {
            renderer.fill_quad(
                Quad {
                    bounds,
                    ..Default::default()
                },
                Background::Color(color),
            );
        }

        let line = Rectangle::new(
            Point::new(bounds.center_x() - LINE_WIDTH / 2.0, bounds.y),
            Size::new(LINE_WIDTH, bounds.height),
        );
        renderer.fill_quad(
            Quad {
                bounds: line,
                snap: true,
                ..Default::default()
            },
            Background::Color(palette.background.strong.color),
        );
    }

    fn mouse_interaction(
        &self,
        _: &Tree,
        layout: Layout<'_>,
        cursor: mouse::Cursor,
        _: &Rectangle,
        _: &Renderer,
    ) -> mouse::Interaction {
        if self.is_dragging || cursor.is_over(layout.bounds()) {
            mouse::Interaction::ResizingHorizontally
        } else {
            mouse::Interaction::default()
        }
    }
}

impl<'a, Message: 'a> From<ResizerBar<'a, Message>> for Element<'a, Message> {
    fn from(bar: ResizerBar<'a, Message>) -> Self {
        Element::new(bar)
    }
}

fn press_at(position: Point, button: mouse::Button) -> PointerPress {
    let button = match button {
        mouse::Button::Left => PointerButton::Primary,
        mouse::Button::Right => PointerButton::Secondary,
        mouse::Button::Middle => PointerButton::Middle,
        mouse::Button::Back => PointerButton::Back,
        mouse::Button::Forward => PointerButton::Forward,
        mouse::Button::Other(code) => PointerButton::Other(code),
    };
    PointerPress {
        x: position.x,
        y: position.y,
        button,
    }
}

/// Create the draggable divider between the content panel and the sidebar
pub fn view_divider(is_dragging: bool) -> Element<'static, Message> {
    // The message reaches the handle after dispatch, so the capture decision
    // is taken from the outcome every press returns.
    ResizerBar::new(Message::DividerPressed)
        .capture_press(PRESS_OUTCOME.prevents_default())
        .dragging(is_dragging)
        .into()
}
