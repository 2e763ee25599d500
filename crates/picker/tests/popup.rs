use std::rc::Rc;
use std::time::Duration;

use calpick_calendar::CalendarDate;
use calpick_picker::{
    DatePicker, DetachedHost, FixedClock, PickerConfig, PickerEvent, PickerValue, SelectionMode,
};

fn date(y: i32, m: u32, d: u32) -> CalendarDate {
    CalendarDate::new(y, m, d).unwrap()
}

fn picker(config: PickerConfig) -> (Rc<DetachedHost>, DatePicker) {
    let host = Rc::new(DetachedHost::default());
    let picker = DatePicker::new(config, None)
        .unwrap()
        .with_clock(FixedClock(date(2024, 3, 5)))
        .with_listener_host(host.clone());
    (host, picker)
}

#[test]
fn listener_lives_exactly_while_open() {
    let (host, mut p) = picker(PickerConfig::new());
    assert_eq!(host.live_listeners(), 0);
    assert_eq!(p.click_input(), vec![PickerEvent::Opened]);
    assert!(p.focus_input().is_empty());
    assert_eq!(host.live_listeners(), 1);

    assert!(p.click_outside(true).is_empty());
    assert!(p.is_open());
    assert_eq!(p.click_outside(false), vec![PickerEvent::Closed]);
    assert_eq!(host.live_listeners(), 0);
    assert!(p.close().is_empty());
}

#[test]
fn explicit_close_releases_listener() {
    let (host, mut p) = picker(PickerConfig::new());
    p.focus_input();
    assert_eq!(p.close(), vec![PickerEvent::Closed]);
    assert_eq!(host.live_listeners(), 0);
}

#[test]
fn drop_while_open_releases_listener() {
    let (host, mut p) = picker(PickerConfig::new());
    p.click_input();
    drop(p);
    assert_eq!(host.live_listeners(), 0);
}

#[test]
fn auto_close_after_delay() {
    let (host, mut p) = picker(PickerConfig::new());
    p.click_input();
    let events = p.select_date(date(2024, 3, 8));
    assert_eq!(events, vec![PickerEvent::Changed(Some(PickerValue::Single(date(2024, 3, 8))))]);
    assert_eq!(p.pending_close(), Some(Duration::from_millis(150)));
    assert!(p.advance(Duration::from_millis(100)).is_empty());
    assert!(p.is_open());
    assert_eq!(p.advance(Duration::from_millis(50)), vec![PickerEvent::Closed]);
    assert_eq!(host.live_listeners(), 0);
}

#[test]
fn zero_delay_closes_with_the_change() {
    let (_host, mut p) = picker(PickerConfig::new().with_auto_close_delay(Duration::ZERO));
    p.click_input();
    let events = p.select_date(date(2024, 3, 8));
    assert_eq!(
        events,
        vec![
            PickerEvent::Changed(Some(PickerValue::Single(date(2024, 3, 8)))),
            PickerEvent::Closed,
        ]
    );
}

#[test]
fn range_closes_only_when_complete() {
    let (_host, mut p) = picker(PickerConfig::new().with_mode(SelectionMode::Range));
    p.click_input();
    p.select_date(date(2024, 3, 8));
    assert_eq!(p.pending_close(), None);
    p.select_date(date(2024, 3, 12));
    assert!(p.pending_close().is_some());
}

#[test]
fn refocus_cancels_pending_close() {
    let (_host, mut p) = picker(PickerConfig::new());
    p.click_input();
    p.select_date(date(2024, 3, 8));
    p.focus_input();
    assert_eq!(p.pending_close(), None);
    assert!(p.advance(Duration::from_secs(1)).is_empty());
    assert!(p.is_open());
}

#[test]
fn auto_close_can_be_disabled() {
    let (_host, mut p) = picker(PickerConfig::new().with_auto_close(false));
    p.click_input();
    p.select_date(date(2024, 3, 8));
    assert_eq!(p.pending_close(), None);
    assert!(p.is_open());
}

#[test]
fn rejected_pick_keeps_popup_open() {
    let (_host, mut p) =
        picker(PickerConfig::new().with_disabled_dates(vec![date(2024, 3, 15)]));
    p.click_input();
    p.select_date(date(2024, 3, 15));
    assert_eq!(p.pending_close(), None);
    assert!(p.is_open());
}

#[test]
fn disabled_picker_never_opens() {
    let (host, mut p) = picker(PickerConfig::new().with_disabled(true));
    assert!(p.click_input().is_empty());
    assert!(p.focus_input().is_empty());
    assert!(!p.is_open());
    assert_eq!(host.live_listeners(), 0);
}
