use std::rc::Rc;
use std::sync::mpsc::{Receiver, Sender, channel};
use std::time::{Duration, Instant};

use crate::banner::{BannerCallbacks, BannerProps, NewRepliesBanner};
use crate::config::Config;
use crate::header::{HeaderActions, HeaderProps, ResultsHeader, RhsState};
use crate::i18n::MessageCatalog;
use crate::keyboard::KeyBus;
use crate::layout::LayoutRegions;
use crate::scroll::ScrollState;

const THREAD_TITLE: &str = "Thread";

/// How long a warning stays in the help line
pub const WARNING_DURATION: Duration = Duration::from_secs(10);

/// Transient warning shown in the help line, e.g. an invalid config file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusWarning {
    pub message: String,
    expires_at: Instant,
}

impl StatusWarning {
    pub fn new(message: &str) -> Self {
        Self::expiring_at(message, Instant::now() + WARNING_DURATION)
    }

    pub fn expiring_at(message: &str, expires_at: Instant) -> Self {
        Self {
            message: message.to_string(),
            expires_at,
        }
    }

    pub fn is_expired(&self) -> bool {
        self.is_expired_at(Instant::now())
    }

    pub fn is_expired_at(&self, now: Instant) -> bool {
        now >= self.expires_at
    }
}

/// Requests sent by component callbacks, applied by the host after each event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThreadAction {
    JumpToLatest,
    DismissNewReplies,
    ThreadToastStatus(bool),
    GoBack,
    ToggleExpanded,
    Close,
}

pub struct App {
    pub replies: Vec<String>,
    pub scroll: ScrollState,
    /// Keep the newest reply in view as replies arrive
    pub follow_latest: bool,
    pub has_new_replies: bool,
    /// Last value received by the banner's status sink
    pub thread_toast_status: bool,
    pub banner_width: u16,
    pub is_expanded: bool,
    pub rhs_history: Vec<RhsState>,
    pub should_quit: bool,
    pub status_warning: Option<StatusWarning>,
    pub key_bus: KeyBus,
    pub banner: NewRepliesBanner,
    pub header: ResultsHeader,
    pub layout_regions: LayoutRegions,
    actions_rx: Receiver<ThreadAction>,
}

impl App {
    pub fn new(config: &Config, initial_replies: usize) -> Self {
        let (actions_tx, actions_rx) = channel();
        let messages = MessageCatalog::new(config.messages.clone());
        let key_bus = KeyBus::new();

        let banner = NewRepliesBanner::mount(
            &key_bus,
            BannerProps {
                visible: false,
                width: config.banner.width,
            },
            banner_callbacks(&actions_tx),
            &messages,
            &config.banner,
        );

        let rhs_history = vec![RhsState::Search];
        let header = ResultsHeader::new(
            header_props(&rhs_history, false),
            header_actions(&actions_tx),
            &messages,
        );

        let mut app = Self {
            replies: (1..=initial_replies).map(reply_text).collect(),
            scroll: ScrollState::new(),
            follow_latest: true,
            has_new_replies: false,
            thread_toast_status: false,
            banner_width: config.banner.width,
            is_expanded: false,
            rhs_history,
            should_quit: false,
            status_warning: None,
            key_bus,
            banner,
            header,
            layout_regions: LayoutRegions::new(),
            actions_rx,
        };
        app.settle();
        app
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Append an incoming reply
    ///
    /// Raises the new-replies flag unless the pane is following the thread.
    pub fn receive_reply(&mut self) {
        let text = reply_text(self.replies.len() + 1);
        self.replies.push(text);

        if !self.follow_latest {
            self.has_new_replies = true;
        }

        #[cfg(debug_assertions)]
        log::debug!(
            "reply {} received (following: {})",
            self.replies.len(),
            self.follow_latest
        );

        self.settle();
    }

    /// Recompute scroll bounds for a pane showing `viewport_height` lines
    pub fn set_viewport_height(&mut self, viewport_height: u16) {
        self.scroll
            .update_bounds(self.replies.len() as u32, viewport_height);
        if self.follow_latest {
            self.scroll.jump_to_bottom();
        }
    }

    pub fn scroll_up(&mut self, lines: u16) {
        self.scroll.scroll_up(lines);
        self.after_scroll();
    }

    pub fn scroll_down(&mut self, lines: u16) {
        self.scroll.scroll_down(lines);
        self.after_scroll();
    }

    pub fn page_up(&mut self) {
        self.scroll.page_up();
        self.after_scroll();
    }

    pub fn page_down(&mut self) {
        self.scroll.page_down();
        self.after_scroll();
    }

    pub fn jump_to_top(&mut self) {
        self.scroll.jump_to_top();
        self.after_scroll();
    }

    pub fn jump_to_latest(&mut self) {
        self.follow_latest = true;
        self.has_new_replies = false;
        self.scroll.jump_to_bottom();
    }

    /// Show `message` in the help line for [`WARNING_DURATION`]
    pub fn show_warning(&mut self, message: &str) {
        self.status_warning = Some(StatusWarning::new(message));
    }

    /// Drop the warning once its time is up
    pub fn clear_expired_warning(&mut self) {
        if self
            .status_warning
            .as_ref()
            .is_some_and(StatusWarning::is_expired)
        {
            self.status_warning = None;
        }
    }

    pub fn go_back(&mut self) {
        self.rhs_history.pop();
    }

    pub fn toggle_expanded(&mut self) {
        self.is_expanded = !self.is_expanded;
    }

    fn after_scroll(&mut self) {
        self.follow_latest = self.scroll.is_at_bottom();
        if self.follow_latest {
            self.has_new_replies = false;
        }
    }

    /// Apply queued actions and push the resulting props to the components
    /// until nothing changes
    pub fn settle(&mut self) {
        loop {
            self.sync_components();
            if !self.apply_actions() {
                break;
            }
        }
    }

    /// Returns true if any action was applied
    fn apply_actions(&mut self) -> bool {
        let mut applied = false;
        while let Ok(action) = self.actions_rx.try_recv() {
            applied = true;

            #[cfg(debug_assertions)]
            log::debug!("applying {:?}", action);

            match action {
                ThreadAction::JumpToLatest => self.jump_to_latest(),
                ThreadAction::DismissNewReplies => self.has_new_replies = false,
                ThreadAction::ThreadToastStatus(status) => self.thread_toast_status = status,
                ThreadAction::GoBack => self.go_back(),
                ThreadAction::ToggleExpanded => self.toggle_expanded(),
                ThreadAction::Close => self.should_quit = true,
            }
        }
        applied
    }

    fn sync_components(&mut self) {
        self.banner.update(BannerProps {
            visible: self.has_new_replies,
            width: self.banner_width,
        });
        self.header
            .set_props(header_props(&self.rhs_history, self.is_expanded));
    }
}

fn reply_text(number: usize) -> String {
    format!("Reply #{}", number)
}

fn header_props(rhs_history: &[RhsState], is_expanded: bool) -> HeaderProps {
    HeaderProps {
        title: THREAD_TITLE.to_string(),
        previous_rhs_state: rhs_history.last().copied(),
        can_go_back: !rhs_history.is_empty(),
        is_expanded,
    }
}

fn send(actions_tx: &Sender<ThreadAction>, action: ThreadAction) -> Rc<dyn Fn()> {
    let actions_tx = actions_tx.clone();
    Rc::new(move || {
        // Receiver lives in App; a failed send means the app is gone
        let _ = actions_tx.send(action);
    })
}

fn banner_callbacks(actions_tx: &Sender<ThreadAction>) -> BannerCallbacks {
    let status_tx = actions_tx.clone();
    BannerCallbacks {
        on_activate: send(actions_tx, ThreadAction::JumpToLatest),
        on_dismiss: send(actions_tx, ThreadAction::DismissNewReplies),
        report_status: Rc::new(move |status| {
            let _ = status_tx.send(ThreadAction::ThreadToastStatus(status));
        }),
    }
}

fn header_actions(actions_tx: &Sender<ThreadAction>) -> HeaderActions {
    HeaderActions {
        close_right_hand_side: send(actions_tx, ThreadAction::Close),
        toggle_rhs_expanded: send(actions_tx, ThreadAction::ToggleExpanded),
        go_back: send(actions_tx, ThreadAction::GoBack),
    }
}

#[cfg(test)]
#[path = "app_state_tests.rs"]
mod app_state_tests;
