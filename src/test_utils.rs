//! Shared test utilities for threadpeek
//!
//! This module provides common test fixtures and helper functions
//! used across multiple test modules.

#[cfg(test)]
pub mod test_helpers {
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;

    use crate::app::App;
    use crate::banner::BannerCallbacks;
    use crate::config::Config;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    /// Helper to create App with default config and `replies` replies
    pub fn test_app(replies: usize) -> App {
        App::new(&Config::default(), replies)
    }

    /// Helper to create a KeyEvent without modifiers
    pub fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::empty())
    }

    /// Helper to create a KeyEvent with specific modifiers
    pub fn key_with_mods(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent::new(code, modifiers)
    }

    /// Banner callbacks that count activations and dismissals and record
    /// every reported status
    #[derive(Clone, Default)]
    pub struct CallbackRecorder {
        activations: Rc<Cell<usize>>,
        dismissals: Rc<Cell<usize>>,
        statuses: Rc<RefCell<Vec<bool>>>,
    }

    impl CallbackRecorder {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn callbacks(&self) -> BannerCallbacks {
            let activations = Rc::clone(&self.activations);
            let dismissals = Rc::clone(&self.dismissals);
            let statuses = Rc::clone(&self.statuses);
            BannerCallbacks {
                on_activate: Rc::new(move || activations.set(activations.get() + 1)),
                on_dismiss: Rc::new(move || dismissals.set(dismissals.get() + 1)),
                report_status: Rc::new(move |status| statuses.borrow_mut().push(status)),
            }
        }

        pub fn activate_count(&self) -> usize {
            self.activations.get()
        }

        pub fn dismiss_count(&self) -> usize {
            self.dismissals.get()
        }

        pub fn statuses(&self) -> Vec<bool> {
            self.statuses.borrow().clone()
        }
    }
}
