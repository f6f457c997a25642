use ratatui::{Frame, layout::Rect, widgets::Clear};

use crate::toast::OverlayPlacement;

/// Area of `width` x `height` centered horizontally in `anchor`, pinned to
/// its top or bottom edge
///
/// The result never extends past `anchor`.
pub fn placed_popup(anchor: Rect, width: u16, height: u16, placement: OverlayPlacement) -> Rect {
    let popup_width = width.min(anchor.width);
    let popup_height = height.min(anchor.height);

    let popup_x = anchor.x + (anchor.width - popup_width) / 2;
    let popup_y = match placement {
        OverlayPlacement::Top => anchor.y,
        OverlayPlacement::Bottom => anchor.y + (anchor.height - popup_height),
    };

    Rect {
        x: popup_x,
        y: popup_y,
        width: popup_width,
        height: popup_height,
    }
}

pub fn clear_area(frame: &mut Frame, area: Rect) {
    frame.render_widget(Clear, area);
}

#[cfg(test)]
#[path = "popup_tests.rs"]
mod popup_tests;
