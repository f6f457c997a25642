use std::cell::RefCell;
use std::rc::{Rc, Weak};

use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyEventKind};

/// Callback invoked for every key dispatched on the bus
pub type KeyListener = Rc<dyn Fn(&KeyEvent)>;

#[derive(Default)]
struct Registry {
    next_id: u64,
    listeners: Vec<(u64, KeyListener)>,
}

impl Registry {
    fn contains(&self, id: u64) -> bool {
        self.listeners.iter().any(|(listener_id, _)| *listener_id == id)
    }
}

/// Single-threaded broadcast of key events to registered listeners
///
/// Cloning a `KeyBus` yields another handle to the same registry.
#[derive(Clone, Default)]
pub struct KeyBus {
    registry: Rc<RefCell<Registry>>,
}

impl KeyBus {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `listener` until the returned guard is dropped
    #[must_use = "dropping the Subscription deregisters the listener immediately"]
    pub fn subscribe(&self, listener: KeyListener) -> Subscription {
        let mut registry = self.registry.borrow_mut();
        let id = registry.next_id;
        registry.next_id += 1;
        registry.listeners.push((id, listener));

        #[cfg(debug_assertions)]
        log::debug!(
            "key listener {} registered ({} active)",
            id,
            registry.listeners.len()
        );

        Subscription {
            id,
            registry: Rc::downgrade(&self.registry),
        }
    }

    /// Deliver `key` to every listener, in registration order
    ///
    /// Listeners registered during dispatch are not called for this key.
    /// Listeners deregistered during dispatch are skipped if not yet called.
    pub fn dispatch(&self, key: &KeyEvent) {
        let snapshot: Vec<(u64, KeyListener)> = self.registry.borrow().listeners.clone();

        for (id, listener) in snapshot {
            if !self.registry.borrow().contains(id) {
                continue;
            }
            listener(key);
        }
    }

    pub fn listener_count(&self) -> usize {
        self.registry.borrow().listeners.len()
    }
}

/// Guard for a [`KeyBus`] registration
pub struct Subscription {
    id: u64,
    registry: Weak<RefCell<Registry>>,
}

impl Subscription {
    /// Whether the listener is still registered on a live bus
    pub fn is_active(&self) -> bool {
        self.registry
            .upgrade()
            .is_some_and(|registry| registry.borrow().contains(self.id))
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        let Some(registry) = self.registry.upgrade() else {
            return;
        };

        // Released after the borrow ends: the listener may own guards of its own.
        let _removed = {
            let mut inner = registry.borrow_mut();
            let removed = inner
                .listeners
                .iter()
                .position(|(id, _)| *id == self.id)
                .map(|index| inner.listeners.remove(index));

            #[cfg(debug_assertions)]
            log::debug!(
                "key listener {} deregistered ({} active)",
                self.id,
                inner.listeners.len()
            );

            removed
        };
    }
}

impl std::fmt::Debug for Subscription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Subscription")
            .field("id", &self.id)
            .field("active", &self.is_active())
            .finish()
    }
}

/// True when `key` is a press (or repeat) of `code`
pub fn is_key_pressed(key: &KeyEvent, code: KeyCode) -> bool {
    key.kind != KeyEventKind::Release && key.code == code
}
