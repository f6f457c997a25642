//! Toast presentation primitive
//!
//! A toast is a bordered one-line overlay with a message, an optional action
//! and a dismiss affordance. Its owner keeps one `Toast` for as long as it
//! lives and toggles `show` instead of recreating it.

mod toast_render;
mod toast_state;

pub use toast_state::{OverlayPlacement, Toast, ToastHit, ToastProps};
