//! Global keystroke stream
//!
//! Components that need to observe keys regardless of focus subscribe to a
//! [`KeyBus`]. A subscription lasts exactly as long as its [`Subscription`]
//! guard.

mod key_bus;

pub use key_bus::{KeyBus, KeyListener, Subscription, is_key_pressed};

#[cfg(test)]
#[path = "keyboard/key_bus_tests.rs"]
mod key_bus_tests;
