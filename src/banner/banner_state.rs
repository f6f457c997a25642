//! Banner lifecycle: props, effects and the Esc subscription

use std::rc::Rc;

use ratatui::crossterm::event::{KeyCode, KeyEvent};
use ratatui::layout::Rect;

use crate::config::BannerConfig;
use crate::i18n::{MessageCatalog, ids};
use crate::keyboard::{KeyBus, Subscription, is_key_pressed};
use crate::toast::{Toast, ToastHit, ToastProps};

/// Caller-owned inputs, resupplied on every update
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BannerProps {
    pub visible: bool,
    pub width: u16,
}

/// Caller callbacks, all invoked synchronously
///
/// `on_activate` and `on_dismiss` can be replaced after mount; `report_status`
/// is fixed for the banner's lifetime.
#[derive(Clone)]
pub struct BannerCallbacks {
    pub on_activate: Rc<dyn Fn()>,
    pub on_dismiss: Rc<dyn Fn()>,
    pub report_status: Rc<dyn Fn(bool)>,
}

/// Layout style derived from the width prop
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BannerStyle {
    pub width: u16,
}

impl BannerStyle {
    fn from_width(width: u16) -> Self {
        Self { width }
    }
}

pub struct NewRepliesBanner {
    bus: KeyBus,
    pub(super) props: BannerProps,
    callbacks: BannerCallbacks,
    pub(super) style: BannerStyle,
    pub(super) toast: Toast,
    shortcut: Option<Subscription>,
    pub(super) area: Option<Rect>,
}

impl NewRepliesBanner {
    /// Mount the banner: report the initial visibility and start listening for Esc
    pub fn mount(
        bus: &KeyBus,
        props: BannerProps,
        callbacks: BannerCallbacks,
        messages: &MessageCatalog,
        config: &BannerConfig,
    ) -> Self {
        let toast = Toast::new(ToastProps {
            show: props.visible,
            show_actions: true,
            message: messages.text(ids::NEW_REPLIES),
            on_click_message: messages.text(ids::SCROLL_TO_LATEST),
            placement: config.placement,
            width: config.toast_width,
        });

        let mut banner = Self {
            bus: bus.clone(),
            props,
            callbacks,
            style: BannerStyle::from_width(props.width),
            toast,
            shortcut: None,
            area: None,
        };

        banner.report_status();
        banner.subscribe_shortcut();
        banner
    }

    /// Commit new props and run the effects of whatever changed
    pub fn update(&mut self, props: BannerProps) {
        let previous = std::mem::replace(&mut self.props, props);

        if previous.width != props.width {
            self.style = BannerStyle::from_width(props.width);
        }

        if previous.visible != props.visible {
            self.toast.set_show(props.visible);
            self.report_status();
            self.subscribe_shortcut();
        }
    }

    /// Replace the dismiss callback
    ///
    /// The Esc listener captures the callback, so a different one re-registers it.
    pub fn set_on_dismiss(&mut self, on_dismiss: Rc<dyn Fn()>) {
        if Rc::ptr_eq(&self.callbacks.on_dismiss, &on_dismiss) {
            return;
        }
        self.callbacks.on_dismiss = on_dismiss;
        self.subscribe_shortcut();
    }

    /// Replace the activate callback
    ///
    /// Only clicks read it, so no listener needs re-registering.
    pub fn set_on_activate(&mut self, on_activate: Rc<dyn Fn()>) {
        self.callbacks.on_activate = on_activate;
    }

    /// Route a left click; returns true when the click landed on the toast
    pub fn handle_click(&self, column: u16, row: u16) -> bool {
        match self.toast.hit_test(column, row) {
            Some(ToastHit::Action) => (self.callbacks.on_activate)(),
            Some(ToastHit::Dismiss) => (self.callbacks.on_dismiss)(),
            None => {
                return self
                    .toast
                    .area()
                    .is_some_and(|area| area.contains((column, row).into()));
            }
        }
        true
    }

    /// Unmount the banner, releasing the Esc listener
    pub fn unmount(self) {
        #[cfg(debug_assertions)]
        log::debug!("new replies banner unmounted");
    }

    pub fn is_visible(&self) -> bool {
        self.props.visible
    }

    pub fn props(&self) -> BannerProps {
        self.props
    }

    pub fn style(&self) -> BannerStyle {
        self.style
    }

    pub fn toast(&self) -> &Toast {
        &self.toast
    }

    /// Outer banner area from the last render
    pub fn area(&self) -> Option<Rect> {
        self.area
    }

    pub fn is_subscribed(&self) -> bool {
        self.shortcut.as_ref().is_some_and(Subscription::is_active)
    }

    fn report_status(&self) {
        #[cfg(debug_assertions)]
        log::debug!("thread toast status: {}", self.props.visible);

        (self.callbacks.report_status)(self.props.visible);
    }

    fn subscribe_shortcut(&mut self) {
        // Deregister before registering the replacement
        self.shortcut = None;

        let visible = self.props.visible;
        let on_dismiss = Rc::clone(&self.callbacks.on_dismiss);
        let listener = move |key: &KeyEvent| {
            if is_key_pressed(key, KeyCode::Esc) && visible {
                on_dismiss();
            }
        };
        self.shortcut = Some(self.bus.subscribe(Rc::new(listener)));
    }
}
