//! Tests for banner_state

use super::*;
use crate::config::BannerConfig;
use crate::i18n::MessageCatalog;
use crate::keyboard::KeyBus;
use crate::test_utils::test_helpers::{CallbackRecorder, key};
use proptest::prelude::*;
use ratatui::crossterm::event::KeyCode;
use std::rc::Rc;

fn mount(bus: &KeyBus, recorder: &CallbackRecorder, visible: bool) -> NewRepliesBanner {
    NewRepliesBanner::mount(
        bus,
        BannerProps { visible, width: 40 },
        recorder.callbacks(),
        &MessageCatalog::default(),
        &BannerConfig::default(),
    )
}

fn press_esc(bus: &KeyBus) {
    bus.dispatch(&key(KeyCode::Esc));
}

#[test]
fn test_mount_reports_initial_status() {
    let bus = KeyBus::new();
    let recorder = CallbackRecorder::new();

    let banner = mount(&bus, &recorder, false);

    assert_eq!(recorder.statuses(), vec![false]);
    assert!(!banner.is_visible());
    assert!(banner.is_subscribed());
}

#[test]
fn test_show_then_hide_reports_each_transition() {
    let bus = KeyBus::new();
    let recorder = CallbackRecorder::new();
    let mut banner = mount(&bus, &recorder, false);

    banner.update(BannerProps { visible: true, width: 40 });
    assert_eq!(recorder.statuses(), vec![false, true]);
    assert!(banner.toast().is_shown());

    banner.update(BannerProps { visible: false, width: 40 });
    assert_eq!(recorder.statuses(), vec![false, true, false]);
    assert!(!banner.toast().is_shown());
}

#[test]
fn test_unchanged_props_report_nothing() {
    let bus = KeyBus::new();
    let recorder = CallbackRecorder::new();
    let mut banner = mount(&bus, &recorder, true);

    banner.update(BannerProps { visible: true, width: 40 });
    banner.update(BannerProps { visible: true, width: 40 });

    assert_eq!(recorder.statuses(), vec![true]);
}

#[test]
fn test_esc_while_hidden_does_not_dismiss() {
    let bus = KeyBus::new();
    let recorder = CallbackRecorder::new();
    let _banner = mount(&bus, &recorder, false);

    press_esc(&bus);

    assert_eq!(recorder.dismiss_count(), 0);
}

#[test]
fn test_esc_while_visible_dismisses_once_per_press() {
    let bus = KeyBus::new();
    let recorder = CallbackRecorder::new();
    let _banner = mount(&bus, &recorder, true);

    press_esc(&bus);
    assert_eq!(recorder.dismiss_count(), 1);

    press_esc(&bus);
    press_esc(&bus);
    assert_eq!(recorder.dismiss_count(), 3);
}

#[test]
fn test_other_keys_do_not_dismiss() {
    let bus = KeyBus::new();
    let recorder = CallbackRecorder::new();
    let _banner = mount(&bus, &recorder, true);

    bus.dispatch(&key(KeyCode::Enter));
    bus.dispatch(&key(KeyCode::Char('q')));

    assert_eq!(recorder.dismiss_count(), 0);
}

#[test]
fn test_esc_follows_latest_visibility() {
    let bus = KeyBus::new();
    let recorder = CallbackRecorder::new();
    let mut banner = mount(&bus, &recorder, false);

    banner.update(BannerProps { visible: true, width: 40 });
    press_esc(&bus);
    assert_eq!(recorder.dismiss_count(), 1);

    banner.update(BannerProps { visible: false, width: 40 });
    press_esc(&bus);
    assert_eq!(recorder.dismiss_count(), 1);
}

#[test]
fn test_single_listener_across_toggles() {
    let bus = KeyBus::new();
    let recorder = CallbackRecorder::new();
    let mut banner = mount(&bus, &recorder, false);

    for visible in [true, false, true, true, false, true] {
        banner.update(BannerProps { visible, width: 40 });
        assert_eq!(bus.listener_count(), 1);
    }

    press_esc(&bus);
    assert_eq!(recorder.dismiss_count(), 1);
}

#[test]
fn test_unmount_while_visible_releases_listener() {
    let bus = KeyBus::new();
    let recorder = CallbackRecorder::new();
    let banner = mount(&bus, &recorder, true);
    assert_eq!(bus.listener_count(), 1);

    banner.unmount();

    assert_eq!(bus.listener_count(), 0);
    press_esc(&bus);
    assert_eq!(recorder.dismiss_count(), 0);
}

#[test]
fn test_drop_releases_listener() {
    let bus = KeyBus::new();
    let recorder = CallbackRecorder::new();
    {
        let _banner = mount(&bus, &recorder, true);
        assert_eq!(bus.listener_count(), 1);
    }

    assert_eq!(bus.listener_count(), 0);
}

#[test]
fn test_width_change_updates_style_without_callbacks() {
    let bus = KeyBus::new();
    let recorder = CallbackRecorder::new();
    let mut banner = mount(&bus, &recorder, true);
    assert_eq!(banner.style(), BannerStyle { width: 40 });

    banner.update(BannerProps { visible: true, width: 64 });

    assert_eq!(banner.style(), BannerStyle { width: 64 });
    assert_eq!(recorder.statuses(), vec![true]);
    assert_eq!(recorder.dismiss_count(), 0);
    assert_eq!(recorder.activate_count(), 0);
}

#[test]
fn test_toast_width_independent_of_layout_width() {
    let bus = KeyBus::new();
    let recorder = CallbackRecorder::new();
    let mut banner = mount(&bus, &recorder, true);

    banner.update(BannerProps { visible: true, width: 12 });

    assert_eq!(banner.toast().props().width, 156);
    assert_eq!(banner.style().width, 12);
}

#[test]
fn test_toast_text_comes_from_catalog() {
    let bus = KeyBus::new();
    let recorder = CallbackRecorder::new();
    let banner = mount(&bus, &recorder, true);

    assert_eq!(banner.toast().props().message, "New Replies");
    assert_eq!(banner.toast().props().on_click_message, "Jump to new messages");
    assert!(banner.toast().props().show_actions);
}

#[test]
fn test_set_on_dismiss_rebinds_listener() {
    let bus = KeyBus::new();
    let recorder = CallbackRecorder::new();
    let replacement = CallbackRecorder::new();
    let mut banner = mount(&bus, &recorder, true);

    banner.set_on_dismiss(replacement.callbacks().on_dismiss);
    press_esc(&bus);

    assert_eq!(recorder.dismiss_count(), 0);
    assert_eq!(replacement.dismiss_count(), 1);
    assert_eq!(bus.listener_count(), 1);
}

#[test]
fn test_set_same_on_dismiss_is_noop() {
    let bus = KeyBus::new();
    let recorder = CallbackRecorder::new();
    let callbacks = recorder.callbacks();
    let mut banner = NewRepliesBanner::mount(
        &bus,
        BannerProps {
            visible: true,
            width: 40,
        },
        callbacks.clone(),
        &MessageCatalog::default(),
        &BannerConfig::default(),
    );

    banner.set_on_dismiss(Rc::clone(&callbacks.on_dismiss));
    press_esc(&bus);

    assert_eq!(recorder.dismiss_count(), 1);
}

#[test]
fn test_banners_on_same_bus_are_independent() {
    let bus = KeyBus::new();
    let shown = CallbackRecorder::new();
    let hidden = CallbackRecorder::new();
    let _a = mount(&bus, &shown, true);
    let _b = mount(&bus, &hidden, false);

    press_esc(&bus);

    assert_eq!(shown.dismiss_count(), 1);
    assert_eq!(hidden.dismiss_count(), 0);
}

/// Expected status reports: the mount value, then one per actual change
fn expected_reports(initial: bool, updates: &[bool]) -> Vec<bool> {
    let mut reports = vec![initial];
    let mut current = initial;
    for &visible in updates {
        if visible != current {
            reports.push(visible);
            current = visible;
        }
    }
    reports
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    #[test]
    fn prop_status_reported_once_per_transition(
        initial in any::<bool>(),
        updates in prop::collection::vec(any::<bool>(), 0..30),
    ) {
        let bus = KeyBus::new();
        let recorder = CallbackRecorder::new();
        let mut banner = mount(&bus, &recorder, initial);

        for &visible in &updates {
            banner.update(BannerProps { visible, width: 40 });
        }

        prop_assert_eq!(recorder.statuses(), expected_reports(initial, &updates));
        prop_assert_eq!(bus.listener_count(), 1);
    }

    #[test]
    fn prop_esc_dismisses_only_when_visible(
        steps in prop::collection::vec((any::<bool>(), 0usize..3), 1..20),
    ) {
        let bus = KeyBus::new();
        let recorder = CallbackRecorder::new();
        let mut banner = mount(&bus, &recorder, false);
        let mut expected = 0;

        for (visible, presses) in steps {
            banner.update(BannerProps { visible, width: 40 });
            for _ in 0..presses {
                press_esc(&bus);
            }
            if visible {
                expected += presses;
            }
        }

        prop_assert_eq!(recorder.dismiss_count(), expected);
    }
}
