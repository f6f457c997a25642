//! Thread panel (RHS) header
//!
//! Title line with a back control, an expand/collapse toggle and a close
//! control. Which controls appear depends on how the panel was reached.

mod header_render;
mod header_state;

pub use header_state::{
    HeaderActions, HeaderControl, HeaderControlKind, HeaderProps, ResultsHeader, RhsState,
};
