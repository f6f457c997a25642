use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};

use super::app_state::App;
use crate::theme;
use crate::widgets::scrollbar::render_vertical_scrollbar;

macro_rules! hints {
    ($($key:literal => $desc:literal),+ $(,)?) => {
        vec![$(($key, $desc)),+]
    };
}

impl App {
    pub fn render(&mut self, frame: &mut Frame) {
        self.layout_regions.clear();

        let [header_area, thread_area, help_area] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Min(3),
            Constraint::Length(1),
        ])
        .areas(frame.area());

        self.header.render(frame, header_area);
        self.layout_regions.header = Some(header_area);

        let inner = self.render_thread_pane(frame, thread_area);
        self.layout_regions.thread_pane = Some(thread_area);

        // Drawn last so the toast overlays the replies
        self.banner.render(frame, inner);
        self.layout_regions.banner = self.banner.toast().area();

        self.render_help_line(frame, help_area);
        self.layout_regions.help_line = Some(help_area);
    }

    /// Returns the inner area the banner anchors to
    fn render_thread_pane(&mut self, frame: &mut Frame, area: Rect) -> Rect {
        let border_color = if self.is_expanded {
            theme::thread::BORDER_EXPANDED
        } else {
            theme::thread::BORDER
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .title(" Thread ")
            .border_style(Style::default().fg(border_color))
            .style(Style::default().bg(theme::thread::BACKGROUND));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        self.set_viewport_height(inner.height);

        let lines: Vec<Line> = self
            .replies
            .iter()
            .enumerate()
            .map(|(i, reply)| {
                if i == 0 {
                    Line::from(Span::styled(reply.as_str(), theme::thread::ROOT_POST))
                } else {
                    Line::from(Span::styled(
                        reply.as_str(),
                        Style::default().fg(theme::thread::REPLY),
                    ))
                }
            })
            .collect();

        let replies = Paragraph::new(lines).scroll((self.scroll.offset, 0));
        frame.render_widget(replies, inner);

        render_vertical_scrollbar(
            frame,
            area,
            self.replies.len(),
            inner.height as usize,
            self.scroll.offset as usize,
            border_color,
        );

        inner
    }

    fn render_help_line(&mut self, frame: &mut Frame, area: Rect) {
        self.clear_expired_warning();

        let mut spans = if let Some(warning) = &self.status_warning {
            vec![Span::styled(
                format!(" {}", warning.message),
                Style::default().fg(theme::help_line::WARNING),
            )]
        } else if self.thread_toast_status {
            build_styled_spans(&hints!["Esc" => "Dismiss", "G" => "Latest", "q" => "Quit"])
        } else {
            build_styled_spans(&hints![
                "n" => "Reply", "j/k" => "Scroll", "b" => "Back", "e" => "Expand", "q" => "Quit"
            ])
        };

        // The marker tracks the status sink, whatever else the line shows
        if self.thread_toast_status {
            spans.push(Span::styled(
                "  \u{25cf} new replies",
                Style::default().fg(theme::palette::PINK),
            ));
        } else if self.status_warning.is_none()
            && let Some(previous) = self.rhs_history.last()
        {
            spans.push(Span::styled(
                format!("  \u{2190} {}", previous.title()),
                Style::default().fg(theme::palette::TEXT_MUTED),
            ));
        }
        frame.render_widget(Paragraph::new(Line::from(spans)), area);
    }
}

fn build_styled_spans(hints: &[(&'static str, &'static str)]) -> Vec<Span<'static>> {
    let key_style = Style::default().fg(theme::help_line::KEY);
    let desc_style = Style::default().fg(theme::help_line::DESCRIPTION);
    let sep_style = Style::default().fg(theme::help_line::SEPARATOR);

    let mut spans = Vec::with_capacity(hints.len() * 4 + 2);
    spans.push(Span::raw(" "));

    for (i, (key, desc)) in hints.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" \u{2022} ", sep_style));
        }
        spans.push(Span::styled(*key, key_style));
        spans.push(Span::raw(" "));
        spans.push(Span::styled(*desc, desc_style));
    }

    spans
}

#[cfg(test)]
#[path = "app_render_tests.rs"]
mod app_render_tests;
