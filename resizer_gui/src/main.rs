//! # Sidebar Resizer
//!
//! Two-pane window with a sidebar on the right that the user resizes by
//! dragging the bar on its left edge.
//!
//! The drag itself is handled by [`resizer_core::handle::ResizeHandle`].
//! The window-wide pointer subscription below exists only while the handle
//! has listeners registered, so iced stops delivering cursor events as soon
//! as the drag ends.

mod settings;
mod ui;

use std::cell::RefCell;
use std::rc::Rc;

use iced::widget::{column, row};
use iced::{event, mouse, window, Element, Event, Length, Size, Subscription, Task};
use tracing::warn;
use tracing_subscriber::EnvFilter;

use resizer_core::errors::ResizeResult;
use resizer_core::handle::{ResizeHandle, PRESS_OUTCOME};
use resizer_core::layout::PanelLayout;
use resizer_core::listeners::{ListenerKind, WindowListeners};
use resizer_core::session::PointerPress;

use settings::SettingsStore;

type SidebarHandle = ResizeHandle<WindowListeners, Box<dyn FnMut(f32)>>;

#[derive(Debug, Clone)]
pub enum Message {
    DividerPressed(PointerPress),
    PointerMoved(f32),
    PointerReleased,
    DragCancelled,
    LayoutSaved(ResizeResult<()>),
}

pub struct App {
    layout: Rc<RefCell<PanelLayout>>,
    handle: SidebarHandle,
    settings: SettingsStore,
    status: String,
}

impl App {
    fn boot() -> (Self, Task<Message>) {
        (Self::with_settings(SettingsStore::from_env()), Task::none())
    }

    fn with_settings(settings: SettingsStore) -> Self {
        let layout = Rc::new(RefCell::new(settings.load_or_default()));
        let initial_size = layout.borrow().sidebar_width;

        // The layout clamps; the handle reports raw widths.
        let sink = Rc::clone(&layout);
        let on_resize: Box<dyn FnMut(f32)> = Box::new(move |width| {
            sink.borrow_mut().set_sidebar_width(width);
        });

        App {
            layout,
            handle: ResizeHandle::new(WindowListeners::default(), initial_size, on_resize),
            settings,
            status: String::from("Ready"),
        }
    }

    fn sidebar_width(&self) -> f32 {
        self.layout.borrow().sidebar_width
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::DividerPressed(press) => {
                self.handle.set_initial_size(self.sidebar_width());
                // The divider already acted on PRESS_OUTCOME while dispatching.
                let outcome = self.handle.press(press);
                debug_assert_eq!(outcome, PRESS_OUTCOME);
                self.status = String::from("Resizing sidebar");
                Task::none()
            }
            Message::PointerMoved(x) => {
                self.handle.pointer_moved(x);
                Task::none()
            }
            Message::PointerReleased => {
                if !self.handle.is_dragging() {
                    return Task::none();
                }
                self.handle.release();
                self.persist_layout()
            }
            Message::DragCancelled => {
                if !self.handle.is_dragging() {
                    return Task::none();
                }
                self.handle.cancel();
                self.persist_layout()
            }
            Message::LayoutSaved(result) => {
                self.status = match result {
                    Ok(()) => format!("Sidebar width {:.0}px saved", self.sidebar_width()),
                    Err(e) => {
                        warn!("[settings] failed to save layout: {}", e);
                        format!("Could not save layout: {}", e.error_code())
                    }
                };
                Task::none()
            }
        }
    }

    /// Write the layout off the UI thread
    fn persist_layout(&mut self) -> Task<Message> {
        let layout = *self.layout.borrow();
        let settings = self.settings.clone();
        self.status = String::from("Saving layout");
        Task::perform(async move { settings.save(&layout) }, Message::LayoutSaved)
    }

    fn view(&self) -> Element<'_, Message> {
        let layout = *self.layout.borrow();

        let panes = row![
            ui::content_panel::view_content_panel(),
            ui::shared::divider::view_divider(self.handle.is_dragging()),
            ui::sidebar::view_sidebar(layout, self.handle.session().copied()),
        ]
        .height(Length::Fill);

        column![
            panes,
            ui::status_bar::view_status_bar(self.settings.path(), self.handle.state(), &self.status),
        ]
        .padding(10)
        .into()
    }

    fn subscription(&self) -> Subscription<Message> {
        Subscription::batch(
            window_listener_kinds(self.handle.target())
                .into_iter()
                .map(|kind| match kind {
                    ListenerKind::PointerMove => event::listen_with(pointer_move_event),
                    ListenerKind::PointerRelease => event::listen_with(pointer_release_event),
                }),
        )
    }
}

/// Window events to subscribe to; empty while no drag holds listeners
fn window_listener_kinds(listeners: &WindowListeners) -> Vec<ListenerKind> {
    [ListenerKind::PointerMove, ListenerKind::PointerRelease]
        .into_iter()
        .filter(|kind| listeners.is_listening(*kind))
        .collect()
}

fn pointer_move_event(event: Event, _status: event::Status, _window: window::Id) -> Option<Message> {
    match event {
        Event::Mouse(mouse::Event::CursorMoved { position }) => Some(Message::PointerMoved(position.x)),
        _ => None,
    }
}

fn pointer_release_event(event: Event, _status: event::Status, _window: window::Id) -> Option<Message> {
    match event {
        Event::Mouse(mouse::Event::ButtonReleased(_)) => Some(Message::PointerReleased),
        Event::Window(window::Event::Unfocused) => Some(Message::DragCancelled),
        _ => None,
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

fn main() -> iced::Result {
    init_tracing();

    iced::application(App::boot, App::update, App::view)
        .title("Sidebar Resizer")
        .subscription(App::subscription)
        .window_size(Size::new(1000.0, 640.0))
        .run()
}

#[cfg(test)]
mod tests {
    use super::*;
    use iced::Point;
    use resizer_core::errors::ResizeError;
    use resizer_core::handle::DragState;

    fn test_app(dir: &tempfile::TempDir) -> App {
        App::with_settings(SettingsStore::new(dir.path().join("layout.json")))
    }

    #[test]
    fn drag_updates_and_persists_width() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = test_app(&dir);
        assert_eq!(app.sidebar_width(), 360.0);

        let _ = app.update(Message::DividerPressed(PointerPress::at(600.0, 20.0)));
        assert_eq!(app.handle.state(), DragState::Dragging);

        let _ = app.update(Message::PointerMoved(560.0));
        assert_eq!(app.sidebar_width(), 400.0);

        let _ = app.update(Message::PointerReleased);
        assert_eq!(app.handle.state(), DragState::Idle);
        assert_eq!(app.handle.target().active_count(), 0);
        // The write itself runs in the returned task, not in update.
        assert_eq!(app.status, "Saving layout");
        assert!(!app.settings.path().exists());

        let _ = app.update(Message::PointerMoved(100.0));
        assert_eq!(app.sidebar_width(), 400.0);

        let saved = app.settings.save(&app.layout.borrow());
        let _ = app.update(Message::LayoutSaved(saved));
        assert_eq!(app.status, "Sidebar width 400px saved");

        let reloaded = test_app(&dir);
        assert_eq!(reloaded.sidebar_width(), 400.0);
    }

    #[test]
    fn failed_save_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = test_app(&dir);

        let error = ResizeError::file_error("rename to final", "layout.json", "read-only");
        let _ = app.update(Message::LayoutSaved(Err(error)));
        assert_eq!(app.status, "Could not save layout: FILE_ERROR");
    }

    #[test]
    fn window_events_only_while_dragging() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = test_app(&dir);
        assert!(window_listener_kinds(app.handle.target()).is_empty());

        let _ = app.update(Message::DividerPressed(PointerPress::at(600.0, 0.0)));
        assert_eq!(
            window_listener_kinds(app.handle.target()),
            vec![ListenerKind::PointerMove, ListenerKind::PointerRelease]
        );

        let _ = app.update(Message::PointerReleased);
        assert!(window_listener_kinds(app.handle.target()).is_empty());

        let _ = app.update(Message::DividerPressed(PointerPress::at(600.0, 0.0)));
        let _ = app.update(Message::DragCancelled);
        assert!(window_listener_kinds(app.handle.target()).is_empty());
    }

    #[test]
    fn layout_clamps_reported_width() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = test_app(&dir);

        let _ = app.update(Message::DividerPressed(PointerPress::at(600.0, 0.0)));
        let _ = app.update(Message::PointerMoved(-2_000.0));
        assert_eq!(app.sidebar_width(), 800.0);

        let _ = app.update(Message::PointerMoved(2_000.0));
        assert_eq!(app.sidebar_width(), 200.0);
    }

    #[test]
    fn second_drag_starts_from_current_width() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = test_app(&dir);

        let _ = app.update(Message::DividerPressed(PointerPress::at(600.0, 0.0)));
        let _ = app.update(Message::PointerMoved(2_000.0));
        let _ = app.update(Message::PointerReleased);
        assert_eq!(app.sidebar_width(), 200.0);

        let _ = app.update(Message::DividerPressed(PointerPress::at(300.0, 0.0)));
        let _ = app.update(Message::PointerMoved(250.0));
        assert_eq!(app.sidebar_width(), 250.0);
    }

    #[test]
    fn release_without_drag_does_not_touch_settings() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = test_app(&dir);

        let _ = app.update(Message::PointerReleased);
        let _ = app.update(Message::DragCancelled);

        assert!(!app.settings.path().exists());
        assert_eq!(app.status, "Ready");
    }

    #[test]
    fn cancel_keeps_last_width() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = test_app(&dir);

        let _ = app.update(Message::DividerPressed(PointerPress::at(600.0, 0.0)));
        let _ = app.update(Message::PointerMoved(590.0));
        let _ = app.update(Message::DragCancelled);

        assert_eq!(app.sidebar_width(), 370.0);
        assert_eq!(app.handle.target().active_count(), 0);
        assert_eq!(app.status, "Saving layout");
    }

    #[test]
    fn window_events_map_to_messages() {
        let id = window::Id::unique();
        let moved = Event::Mouse(mouse::Event::CursorMoved {
            position: Point::new(42.0, 7.0),
        });
        assert!(matches!(
            pointer_move_event(moved, event::Status::Ignored, id),
            Some(Message::PointerMoved(x)) if x == 42.0
        ));

        let released = Event::Mouse(mouse::Event::ButtonReleased(mouse::Button::Left));
        assert!(matches!(
            pointer_release_event(released, event::Status::Captured, id),
            Some(Message::PointerReleased)
        ));

        let unfocused = Event::Window(window::Event::Unfocused);
        assert!(matches!(
            pointer_release_event(unfocused, event::Status::Ignored, id),
            Some(Message::DragCancelled)
        ));
        assert!(pointer_move_event(Event::Window(window::Event::Focused), event::Status::Ignored, id).is_none());
    }
}
