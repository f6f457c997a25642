//! Header rendering

use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Paragraph},
};

use super::header_state::{HeaderControlKind, ResultsHeader};
use crate::theme;

const CONTROL_WIDTH: u16 = 3;

impl ResultsHeader {
    /// Render the header on the first row of `area` and record control regions
    pub fn render(&mut self, frame: &mut Frame, area: Rect) {
        self.regions.clear();
        if area.width == 0 || area.height == 0 {
            return;
        }

        let line_area = Rect { height: 1, ..area };
        frame.render_widget(
            Block::default().style(Style::default().bg(theme::header::BACKGROUND)),
            line_area,
        );

        let (leading, trailing): (Vec<_>, Vec<_>) = self
            .controls()
            .into_iter()
            .partition(|c| c.kind == HeaderControlKind::GoBack);

        let mut title_x = line_area.x;
        for control in &leading {
            let rect = Rect::new(title_x, line_area.y, CONTROL_WIDTH, 1).intersection(line_area);
            self.render_control(frame, control.kind, rect);
            title_x = rect.right();
        }

        let trailing_width = CONTROL_WIDTH * trailing.len() as u16;
        let trailing_x = line_area
            .right()
            .saturating_sub(trailing_width)
            .max(title_x);

        let title_area = Rect::new(title_x, line_area.y, trailing_x - title_x, 1);
        let title = Paragraph::new(Line::from(Span::styled(
            format!(" {}", self.props.title),
            theme::header::TITLE,
        )));
        frame.render_widget(title, title_area);

        for (i, control) in trailing.iter().enumerate() {
            let x = trailing_x.saturating_add(CONTROL_WIDTH * i as u16);
            let rect = Rect::new(x, line_area.y, CONTROL_WIDTH, 1).intersection(line_area);
            self.render_control(frame, control.kind, rect);
        }
    }

    fn render_control(&mut self, frame: &mut Frame, kind: HeaderControlKind, rect: Rect) {
        if rect.is_empty() {
            return;
        }

        let color = match kind {
            HeaderControlKind::Close => theme::header::CLOSE,
            _ => theme::header::CONTROL,
        };
        let text = Span::styled(format!(" {} ", kind.symbol()), Style::default().fg(color));
        frame.render_widget(Paragraph::new(Line::from(text)), rect);
        self.regions.push((kind, rect));
    }
}
