//! Toast props and hit regions

use ratatui::layout::{Position, Rect};
use serde::Deserialize;

/// Which edge of the anchor area the toast is pinned to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum OverlayPlacement {
    #[default]
    Top,
    Bottom,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToastProps {
    pub show: bool,
    pub show_actions: bool,
    pub message: String,
    pub on_click_message: String,
    pub placement: OverlayPlacement,
    pub width: u16,
}

/// Clickable part of a rendered toast
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastHit {
    Action,
    Dismiss,
}

/// Areas recorded by the last render pass
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(super) struct ToastRegions {
    pub(super) toast: Option<Rect>,
    pub(super) action: Option<Rect>,
    pub(super) dismiss: Option<Rect>,
}

#[derive(Debug)]
pub struct Toast {
    pub(super) props: ToastProps,
    pub(super) regions: ToastRegions,
}

impl Toast {
    pub fn new(props: ToastProps) -> Self {
        Self {
            props,
            regions: ToastRegions::default(),
        }
    }

    pub fn props(&self) -> &ToastProps {
        &self.props
    }

    pub fn is_shown(&self) -> bool {
        self.props.show
    }

    /// Toggle visibility; hiding forgets the hit regions immediately
    pub fn set_show(&mut self, show: bool) {
        self.props.show = show;
        if !show {
            self.regions = ToastRegions::default();
        }
    }

    /// Area covered by the toast in the last render, if it was drawn
    pub fn area(&self) -> Option<Rect> {
        self.regions.toast
    }

    /// Which clickable part, if any, lies under the given cell
    pub fn hit_test(&self, column: u16, row: u16) -> Option<ToastHit> {
        if !self.props.show {
            return None;
        }

        let position = Position::new(column, row);
        let inside = |rect: Option<Rect>| rect.is_some_and(|r| r.contains(position));

        if inside(self.regions.dismiss) {
            return Some(ToastHit::Dismiss);
        }
        if inside(self.regions.action) {
            return Some(ToastHit::Action);
        }
        None
    }
}
