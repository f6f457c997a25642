use std::rc::Rc;

use ratatui::layout::{Position, Rect};

use crate::i18n::{MessageCatalog, ids};

/// What the RHS was showing before the current view
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RhsState {
    Mention,
    Search,
    Flag,
    Pin,
    ChannelFiles,
    ChannelInfo,
    ChannelMembers,
    EditHistory,
}

impl RhsState {
    pub fn title(self) -> &'static str {
        match self {
            RhsState::Mention => "Recent Mentions",
            RhsState::Search => "Search Results",
            RhsState::Flag => "Saved messages",
            RhsState::Pin => "Pinned messages",
            RhsState::ChannelFiles => "Channel Files",
            RhsState::ChannelInfo => "Info",
            RhsState::ChannelMembers => "Members",
            RhsState::EditHistory => "Edit History",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderProps {
    pub title: String,
    pub previous_rhs_state: Option<RhsState>,
    pub can_go_back: bool,
    pub is_expanded: bool,
}

#[derive(Clone)]
pub struct HeaderActions {
    pub close_right_hand_side: Rc<dyn Fn()>,
    pub toggle_rhs_expanded: Rc<dyn Fn()>,
    pub go_back: Rc<dyn Fn()>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderControlKind {
    GoBack,
    Expand,
    Collapse,
    Close,
}

impl HeaderControlKind {
    pub fn symbol(self) -> &'static str {
        match self {
            HeaderControlKind::GoBack => "←",
            HeaderControlKind::Expand => "⤢",
            HeaderControlKind::Collapse => "⤡",
            HeaderControlKind::Close => "✕",
        }
    }
}

/// A visible header control and its accessible label
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderControl {
    pub kind: HeaderControlKind,
    pub label: String,
}

pub struct ResultsHeader {
    pub(super) props: HeaderProps,
    actions: HeaderActions,
    messages: MessageCatalog,
    pub(super) regions: Vec<(HeaderControlKind, Rect)>,
}

impl ResultsHeader {
    pub fn new(props: HeaderProps, actions: HeaderActions, messages: &MessageCatalog) -> Self {
        Self {
            props,
            actions,
            messages: messages.clone(),
            regions: Vec::new(),
        }
    }

    pub fn props(&self) -> &HeaderProps {
        &self.props
    }

    pub fn set_props(&mut self, props: HeaderProps) {
        self.props = props;
    }

    /// Visible controls, left to right
    pub fn controls(&self) -> Vec<HeaderControl> {
        let mut controls = Vec::with_capacity(3);

        if self.props.can_go_back {
            controls.push(self.control(HeaderControlKind::GoBack));
        }

        // The channel info view has its own layout and can't be expanded
        if self.props.previous_rhs_state != Some(RhsState::ChannelInfo) {
            let kind = if self.props.is_expanded {
                HeaderControlKind::Collapse
            } else {
                HeaderControlKind::Expand
            };
            controls.push(self.control(kind));
        }

        controls.push(self.control(HeaderControlKind::Close));
        controls
    }

    pub fn find_by_label(&self, label: &str) -> Option<HeaderControl> {
        self.controls().into_iter().find(|c| c.label == label)
    }

    /// Route a left click to the control under it
    pub fn handle_click(&self, column: u16, row: u16) -> bool {
        let position = Position::new(column, row);
        let Some((kind, _)) = self
            .regions
            .iter()
            .find(|(_, rect)| rect.contains(position))
        else {
            return false;
        };

        #[cfg(debug_assertions)]
        log::debug!("header control clicked: {:?}", kind);

        match kind {
            HeaderControlKind::GoBack => (self.actions.go_back)(),
            HeaderControlKind::Expand | HeaderControlKind::Collapse => {
                (self.actions.toggle_rhs_expanded)()
            }
            HeaderControlKind::Close => (self.actions.close_right_hand_side)(),
        }
        true
    }

    fn control(&self, kind: HeaderControlKind) -> HeaderControl {
        let message = match kind {
            HeaderControlKind::GoBack => ids::GO_BACK,
            HeaderControlKind::Expand => ids::EXPAND_SIDEBAR,
            HeaderControlKind::Collapse => ids::COLLAPSE_SIDEBAR,
            HeaderControlKind::Close => ids::CLOSE_SIDEBAR,
        };
        HeaderControl {
            kind,
            label: self.messages.text(message),
        }
    }
}
