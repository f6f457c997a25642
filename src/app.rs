//! Demo host for the thread panel
//!
//! Owns the key bus, the mounted banner and header, and the thread pane
//! state. Component callbacks queue [`ThreadAction`]s which the host applies
//! after every event.

mod app_events;
mod app_render;
mod app_state;

pub use app_state::{App, StatusWarning, ThreadAction, WARNING_DURATION};
