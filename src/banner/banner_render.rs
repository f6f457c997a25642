//! Banner rendering

use ratatui::{Frame, layout::Rect};

use super::banner_state::NewRepliesBanner;
use crate::widgets::popup;

const BANNER_HEIGHT: u16 = 3;

impl NewRepliesBanner {
    /// Render inside the thread pane `anchor`
    ///
    /// The banner area is laid out even while hidden; the toast decides
    /// whether anything is drawn.
    pub fn render(&mut self, frame: &mut Frame, anchor: Rect) {
        let area = popup::placed_popup(
            anchor,
            self.style.width,
            BANNER_HEIGHT,
            self.toast.props().placement,
        );
        self.area = Some(area);
        self.toast.render(frame, area);
    }
}
