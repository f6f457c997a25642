use ratatui::crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent,
    MouseEventKind,
};
use std::io;
use std::time::Duration;

use super::app_state::App;
use crate::layout::{Region, region_at};

const EVENT_POLL_TIMEOUT: Duration = Duration::from_millis(100);
const SCROLL_LINES: u16 = 3;

impl App {
    pub fn handle_events(&mut self) -> io::Result<()> {
        if event::poll(EVENT_POLL_TIMEOUT)? {
            match event::read()? {
                Event::Key(key_event) if key_event.kind == KeyEventKind::Press => {
                    self.handle_key_event(key_event);
                }
                Event::Mouse(mouse_event) => {
                    self.handle_mouse_event(mouse_event);
                }
                _ => {}
            }
        }
        Ok(())
    }

    /// Global listeners see every key first, then the thread pane bindings run
    pub fn handle_key_event(&mut self, key: KeyEvent) {
        self.key_bus.dispatch(&key);
        self.settle();

        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }

        match key.code {
            KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Char('n') => self.receive_reply(),
            KeyCode::Char('j') | KeyCode::Down => self.scroll_down(1),
            KeyCode::Char('k') | KeyCode::Up => self.scroll_up(1),
            KeyCode::PageDown => self.page_down(),
            KeyCode::PageUp => self.page_up(),
            KeyCode::Char('g') | KeyCode::Home => self.jump_to_top(),
            KeyCode::Char('G') | KeyCode::End => self.jump_to_latest(),
            KeyCode::Char('b') => self.go_back(),
            KeyCode::Char('e') => self.toggle_expanded(),
            _ => {}
        }

        self.settle();
    }

    pub fn handle_mouse_event(&mut self, mouse: MouseEvent) {
        let region = region_at(&self.layout_regions, mouse.column, mouse.row);

        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => match region {
                Some(Region::Banner) => {
                    self.banner.handle_click(mouse.column, mouse.row);
                }
                Some(Region::Header) => {
                    self.header.handle_click(mouse.column, mouse.row);
                }
                _ => {}
            },
            MouseEventKind::ScrollDown if over_thread_pane(region) => {
                self.scroll_down(SCROLL_LINES);
            }
            MouseEventKind::ScrollUp if over_thread_pane(region) => {
                self.scroll_up(SCROLL_LINES);
            }
            _ => {}
        }

        self.settle();
    }
}

/// The toast overlays the pane, so wheel events over it still scroll the replies
fn over_thread_pane(region: Option<Region>) -> bool {
    matches!(region, Some(Region::ThreadPane | Region::Banner))
}

#[cfg(test)]
#[path = "app_events_tests.rs"]
mod app_events_tests;
