//! threadpeek library - thread panel components for terminal chat clients
//!
//! Provides the new-replies banner, the panel header and the key bus they
//! listen on. The binary hosts them in a small demo panel.

pub mod app;
pub mod banner;
pub mod config;
pub mod error;
pub mod header;
pub mod i18n;
pub mod keyboard;
pub mod layout;
pub mod scroll;
pub mod theme;
pub mod toast;
pub mod widgets;

#[cfg(test)]
pub mod test_utils;

// Re-export commonly used types for convenience
pub use app::{App, ThreadAction};
pub use banner::{BannerCallbacks, BannerProps, NewRepliesBanner};
pub use config::Config;
pub use keyboard::{KeyBus, Subscription};
