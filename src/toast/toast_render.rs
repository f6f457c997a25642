//! Toast rendering

use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};
use unicode_width::UnicodeWidthStr;

use super::toast_state::{Toast, ToastRegions};
use crate::theme;
use crate::widgets::popup;

const TOAST_HEIGHT: u16 = 3; // 1 line content + 2 borders
const MIN_TOAST_WIDTH: u16 = 5;
const DISMISS_SYMBOL: &str = "✕";
const GAP: &str = "  ";

impl Toast {
    /// Draw the toast inside `anchor` and record its clickable regions
    ///
    /// Draws nothing when hidden or when `anchor` is too small to hold it.
    pub fn render(&mut self, frame: &mut Frame, anchor: Rect) {
        self.regions = ToastRegions::default();

        if !self.props.show {
            return;
        }

        let area = popup::placed_popup(anchor, self.props.width, TOAST_HEIGHT, self.props.placement);
        if area.width < MIN_TOAST_WIDTH || area.height < TOAST_HEIGHT {
            return;
        }

        popup::clear_area(frame, area);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(theme::toast::BORDER))
            .style(Style::default().bg(theme::toast::BACKGROUND));
        let inner = block.inner(area);

        let mut spans = vec![
            Span::raw(" "),
            Span::styled(self.props.message.as_str(), theme::toast::MESSAGE),
        ];

        if self.props.show_actions {
            let gap = GAP.len() as u16;
            let action_width = cell_width(&self.props.on_click_message);
            let action_x = (inner.x + 1)
                .saturating_add(cell_width(&self.props.message))
                .saturating_add(gap);
            let dismiss_x = action_x.saturating_add(action_width).saturating_add(gap);

            spans.push(Span::raw(GAP));
            spans.push(Span::styled(
                self.props.on_click_message.as_str(),
                theme::toast::ACTION,
            ));
            spans.push(Span::raw(GAP));
            spans.push(Span::styled(
                DISMISS_SYMBOL,
                Style::default().fg(theme::toast::DISMISS),
            ));

            self.regions.action = clip(Rect::new(action_x, inner.y, action_width, 1), inner);
            self.regions.dismiss = clip(Rect::new(dismiss_x, inner.y, 1, 1), inner);
        }
        spans.push(Span::raw(" "));

        frame.render_widget(Paragraph::new(Line::from(spans)).block(block), area);
        self.regions.toast = Some(area);
    }
}

fn cell_width(text: &str) -> u16 {
    text.width().min(u16::MAX as usize) as u16
}

/// Part of `region` visible inside `bounds`, if any
fn clip(region: Rect, bounds: Rect) -> Option<Rect> {
    let visible = region.intersection(bounds);
    (!visible.is_empty()).then_some(visible)
}
