//! New-replies banner for the thread panel
//!
//! Shows a toast when the caller reports new replies, forwards the visibility
//! to a status sink and listens for Esc on the global [`KeyBus`] while mounted.
//!
//! [`KeyBus`]: crate::keyboard::KeyBus

mod banner_render;
mod banner_state;

pub use banner_state::{BannerCallbacks, BannerProps, BannerStyle, NewRepliesBanner};

#[cfg(test)]
#[path = "banner/banner_state_tests.rs"]
mod banner_state_tests;
