//! # Global Listener Registry
//!
//! A drag gesture listens for pointer movement and pointer release on the
//! whole window, not just on the handle, so the pointer can leave the narrow
//! strip mid-drag without losing the gesture. [`EventTarget`] models that
//! window-wide registry; [`DragSubscription`] is the pair of listeners one
//! gesture holds.
//!
//! ## Example
//!
//! ```rust
//! use resizer_core::listeners::{DragSubscription, ListenerKind, WindowListeners};
//!
//! let mut window = WindowListeners::default();
//! let subscription = DragSubscription::open(&mut window);
//! assert!(window.is_listening(ListenerKind::PointerMove));
//!
//! subscription.close(&mut window);
//! assert_eq!(window.active_count(), 0);
//! ```

/// Kind of window-wide listener a drag gesture registers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ListenerKind {
    PointerMove,
    PointerRelease,
}

/// Opaque registration token handed out by an [`EventTarget`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

impl ListenerId {
    pub fn new(raw: u64) -> Self {
        ListenerId(raw)
    }

    pub fn raw(self) -> u64 {
        self.0
    }
}

/// The host's global event-listener registry.
pub trait EventTarget {
    /// Register a listener of the given kind and return its token.
    fn add_listener(&mut self, kind: ListenerKind) -> ListenerId;

    /// Remove a previously registered listener.
    ///
    /// Returns `false` when the id was not registered.
    fn remove_listener(&mut self, id: ListenerId) -> bool;
}

impl<T: EventTarget + ?Sized> EventTarget for &mut T {
    fn add_listener(&mut self, kind: ListenerKind) -> ListenerId {
        (**self).add_listener(kind)
    }

    fn remove_listener(&mut self, id: ListenerId) -> bool {
        (**self).remove_listener(id)
    }
}

/// In-memory listener registry.
///
/// The GUI derives its window event subscription from this registry, and
/// tests use it to observe registration and removal.
#[derive(Debug, Default, Clone)]
pub struct WindowListeners {
    next_id: u64,
    active: Vec<(ListenerId, ListenerKind)>,
}

impl WindowListeners {
    /// Whether at least one listener of `kind` is registered
    pub fn is_listening(&self, kind: ListenerKind) -> bool {
        self.active.iter().any(|(_, k)| *k == kind)
    }

    /// Number of registered listeners of any kind
    pub fn active_count(&self) -> usize {
        self.active.len()
    }
}

impl EventTarget for WindowListeners {
    fn add_listener(&mut self, kind: ListenerKind) -> ListenerId {
        let id = ListenerId(self.next_id);
        self.next_id += 1;
        self.active.push((id, kind));
        id
    }

    fn remove_listener(&mut self, id: ListenerId) -> bool {
        let before = self.active.len();
        self.active.retain(|(existing, _)| *existing != id);
        self.active.len() != before
    }
}

/// The two listeners held for the duration of one drag gesture.
///
/// `close` takes the subscription by value, so it can run at most once.
#[derive(Debug)]
#[must_use = "an open subscription must be closed to remove its listeners"]
pub struct DragSubscription {
    pointer_move: ListenerId,
    pointer_release: ListenerId,
}

impl DragSubscription {
    /// Register the pointer-move and pointer-release listeners.
    pub fn open<T: EventTarget + ?Sized>(target: &mut T) -> Self {
        DragSubscription {
            pointer_move: target.add_listener(ListenerKind::PointerMove),
            pointer_release: target.add_listener(ListenerKind::PointerRelease),
        }
    }

    /// Remove exactly the listeners registered by [`DragSubscription::open`].
    pub fn close<T: EventTarget + ?Sized>(self, target: &mut T) {
        let moved = target.remove_listener(self.pointer_move);
        let released = target.remove_listener(self.pointer_release);
        if !(moved && released) {
            tracing::warn!(
                pointer_move = self.pointer_move.raw(),
                pointer_release = self.pointer_release.raw(),
                "drag listeners were already removed from the event target"
            );
        }
    }

    pub fn listener_ids(&self) -> [ListenerId; 2] {
        [self.pointer_move, self.pointer_release]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_registers_both_kinds() {
        let mut window = WindowListeners::default();
        let sub = DragSubscription::open(&mut window);

        assert_eq!(window.active_count(), 2);
        assert!(window.is_listening(ListenerKind::PointerMove));
        assert!(window.is_listening(ListenerKind::PointerRelease));

        let [a, b] = sub.listener_ids();
        assert_ne!(a, b);
        sub.close(&mut window);
    }

    #[test]
    fn test_close_removes_only_its_own_listeners() {
        let mut window = WindowListeners::default();
        let unrelated = window.add_listener(ListenerKind::PointerMove);

        let sub = DragSubscription::open(&mut window);
        sub.close(&mut window);

        assert_eq!(window.active_count(), 1);
        assert!(window.is_listening(ListenerKind::PointerMove));
        assert!(!window.is_listening(ListenerKind::PointerRelease));
        assert!(window.remove_listener(unrelated));
    }

    #[test]
    fn test_remove_unknown_listener() {
        let mut window = WindowListeners::default();
        assert!(!window.remove_listener(ListenerId::new(42)));
    }

    #[test]
    fn test_ids_are_not_reused() {
        let mut window = WindowListeners::default();
        let first = DragSubscription::open(&mut window);
        let first_ids = first.listener_ids();
        first.close(&mut window);

        let second = DragSubscription::open(&mut window);
        for id in second.listener_ids() {
            assert!(!first_ids.contains(&id));
        }
        second.close(&mut window);
    }
}
