//! Integration tests for the host screen.
//!
//! These drive a full screen through the test harness: layout, paint and
//! touch gestures, then check frames, widget state and toasts together.

use slideswitch::{state_toast, HostScreen, ToastLog};
use slideswitch_core::{Event, Widget};
use slideswitch_test::{GestureStep, Harness};
use slideswitch_widgets::{DragSession, ToggleChanged};

const LAYOUT: &str = r##"
resources:
  switch_background: { width: 120, height: 40, color: "#9e9e9e" }
  slide_button: { width: 40, height: 40, color: "#ffffff" }
toggle:
  id: tv_toggle
  toggle_background: switch_background
  toggle_slide: slide_button
  toggle_state: false
"##;

const TRAVEL: f32 = 80.0;

fn screen() -> Harness<HostScreen<ToastLog>> {
    Harness::new(HostScreen::from_yaml(LAYOUT, ToastLog::new()).expect("valid layout"))
}

// =============================================================================
// Measurement and first frame
// =============================================================================

#[test]
fn test_first_frame_is_closed() {
    let harness = screen();
    harness
        .assert_frame_count(1)
        .assert_drawn_at("switch_background", 0.0)
        .assert_drawn_at("slide_button", 0.0);
    assert_eq!(harness.widget().bounds().width, 120.0);
    assert_eq!(harness.widget().bounds().height, 40.0);
    assert_eq!(harness.widget().toggle().travel_range(), TRAVEL);
}

#[test]
fn test_initial_state_from_layout() {
    let yaml = LAYOUT.replace("toggle_state: false", "toggle_state: true");
    let harness = Harness::new(HostScreen::from_yaml(&yaml, ToastLog::new()).expect("valid"));
    harness.assert_drawn_at("slide_button", TRAVEL);
    assert!(harness.widget().notifier().toasts().is_empty());
}

// =============================================================================
// Gestures
// =============================================================================

#[test]
fn test_swipe_open_then_closed() {
    let mut harness = screen();

    harness.swipe(0.0, 120.0);
    assert!(harness.widget().toggle().is_open());
    harness.assert_drawn_at("slide_button", TRAVEL);

    harness.swipe(120.0, 0.0);
    assert!(!harness.widget().toggle().is_open());
    harness.assert_drawn_at("slide_button", 0.0);

    assert_eq!(
        harness.widget().notifier().toasts(),
        &[state_toast(true), state_toast(false)]
    );
    let messages: Vec<bool> = harness
        .messages_of::<ToggleChanged>()
        .iter()
        .map(|m| m.open)
        .collect();
    assert_eq!(messages, vec![true, false]);
}

#[test]
fn test_every_step_repaints() {
    let mut harness = screen();
    harness.press(10.0).move_to(50.0).move_to(90.0).release(90.0);
    // first frame + four events
    harness.assert_frame_count(5);
    assert!(harness.last_consumed());
}

#[test]
fn test_drag_frames_track_pointer() {
    let mut harness = screen();
    harness.press(30.0);
    harness.assert_drawn_at("slide_button", 10.0);
    harness.move_to(75.0);
    harness.assert_drawn_at("slide_button", 55.0);
    harness.move_to(500.0);
    harness.assert_drawn_at("slide_button", TRAVEL);
    assert_eq!(
        harness.widget().toggle().drag_session(),
        DragSession::Dragging { x: 500.0 }
    );
}

#[test]
fn test_repeated_open_release_notifies_once() {
    let mut harness = screen();
    harness.tap(110.0).tap(110.0).tap(100.0);
    assert_eq!(harness.widget().notifier().toasts(), &[state_toast(true)]);
}

#[test]
fn test_script_with_cancel() {
    let mut harness = screen();
    let steps = GestureStep::parse_script("down:0,move:120,cancel,up").expect("valid script");
    harness.run(&steps);
    assert!(!harness.widget().toggle().is_open());
    assert!(harness.widget().notifier().toasts().is_empty());
    harness.assert_drawn_at("slide_button", 0.0);
}

#[test]
fn test_offset_screen() {
    let mut harness = screen().origin(300.0, 100.0);
    harness.assert_drawn_at("switch_background", 300.0);
    harness.swipe(0.0, 120.0);
    harness.assert_drawn_at("slide_button", 300.0 + TRAVEL);
    assert_eq!(harness.widget().notifier().toasts().len(), 1);
}

#[test]
fn test_tap_outside_toggle_is_ignored() {
    let mut harness = screen();
    harness
        .dispatch(Event::touch_start(1000.0, 20.0))
        .dispatch(Event::touch_end(1000.0, 20.0));

    assert!(!harness.last_consumed());
    assert!(!harness.widget().toggle().is_open());
    assert!(harness.widget().notifier().toasts().is_empty());
    harness.assert_frame_count(1);
}

#[test]
fn test_stray_moves_do_not_repaint() {
    let mut harness = screen();
    harness.move_to(60.0).move_to(110.0);
    assert!(!harness.last_consumed());
    harness.assert_frame_count(1);
}

#[test]
fn test_programmatic_state_repaints_without_toast() {
    let mut harness = screen();
    harness.widget_mut().toggle_mut().set_toggle_state(true);
    harness.pump();
    harness.assert_frame_count(2).assert_drawn_at("slide_button", TRAVEL);
    assert!(harness.widget().notifier().toasts().is_empty());
}

#[test]
fn test_swapping_slide_relayouts() {
    let yaml = LAYOUT.replace(
        "  slide_button: { width: 40, height: 40, color: \"#ffffff\" }",
        "  slide_button: { width: 40, height: 40, color: \"#ffffff\" }\n  narrow_button: { width: 20, height: 40 }",
    );
    let mut harness = Harness::new(HostScreen::from_yaml(&yaml, ToastLog::new()).expect("valid"));
    harness.widget_mut().toggle_mut().set_toggle_state(true);
    harness
        .widget_mut()
        .toggle_mut()
        .set_slide_asset("narrow_button")
        .expect("declared resource");
    harness.pump();

    assert_eq!(harness.layout_passes(), 2);
    assert_eq!(harness.widget().toggle().travel_range(), 100.0);
    harness.assert_drawn_at("narrow_button", 100.0);
}
