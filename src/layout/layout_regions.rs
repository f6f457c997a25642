//! Layout regions tracking for UI components

use ratatui::layout::Rect;

/// Identifies a UI component region
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Region {
    Header,
    ThreadPane,
    HelpLine,
    /// Only present while the toast is drawn
    Banner,
}

/// Tracks rendered areas of UI components
///
/// Updated during each render pass. Regions are `None` when the component is not visible.
#[derive(Default, Clone, Debug)]
pub struct LayoutRegions {
    pub header: Option<Rect>,
    pub thread_pane: Option<Rect>,
    pub help_line: Option<Rect>,
    pub banner: Option<Rect>,
}

impl LayoutRegions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Clear all regions before a new render pass
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}
