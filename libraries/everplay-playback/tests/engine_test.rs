//! Integration tests for the player engine
//!
//! Each test drives a real engine through a host-shaped workflow and
//! verifies the observable outcome: output state, events, persistence.

mod common;

use common::{engine_with_handles, TWO_TRACKS};
use everplay_playback::{PlayerEvent, TransportState, STATE_KEY};
use std::time::Duration;

// ===== Transport Workflows =====

#[test]
fn play_pause_resume_workflow() {
    let (mut engine, output, _store) = engine_with_handles(TWO_TRACKS);
    assert_eq!(engine.transport(), TransportState::Stopped);

    engine.play();
    assert_eq!(engine.transport(), TransportState::Playing);
    assert!(output.0.borrow().playing);

    engine.pause();
    assert_eq!(engine.transport(), TransportState::Paused);
    assert!(!output.0.borrow().playing);

    engine.toggle_play();
    assert_eq!(engine.transport(), TransportState::Playing);
    engine.toggle_play();
    assert_eq!(engine.transport(), TransportState::Paused);
}

#[test]
fn blocked_autoplay_keeps_prior_state() {
    let (mut engine, output, _store) = engine_with_handles(TWO_TRACKS);
    output.0.borrow_mut().block_play = true;
    engine.take_events();

    engine.play();
    assert_eq!(engine.transport(), TransportState::Stopped);
    assert!(!output.0.borrow().playing);
    // No state change was announced to the UI
    assert!(!engine
        .take_events()
        .iter()
        .any(|e| matches!(e, PlayerEvent::StateChanged { .. })));

    // A later user-triggered attempt succeeds
    output.0.borrow_mut().block_play = false;
    engine.play();
    assert_eq!(engine.transport(), TransportState::Playing);
}

#[test]
fn next_resumes_only_when_playing() {
    let (mut engine, output, _store) = engine_with_handles(TWO_TRACKS);

    // Paused engine: advancing loads but does not play
    engine.next();
    assert_eq!(engine.current_index(), 1);
    assert_eq!(output.src().as_deref(), Some("b.mp3"));
    assert!(!output.0.borrow().playing);

    // Playing engine: advancing resumes on the new track
    engine.play();
    engine.next();
    assert_eq!(engine.current_index(), 0);
    assert_eq!(output.src().as_deref(), Some("a.mp3"));
    assert!(output.0.borrow().playing);
}

#[test]
fn wraparound_both_directions() {
    let (mut engine, _output, _store) = engine_with_handles(TWO_TRACKS);

    engine.previous();
    assert_eq!(engine.current_index(), 1, "prev from 0 wraps to last");
    engine.next();
    assert_eq!(engine.current_index(), 0, "next from last wraps to 0");
}

#[test]
fn track_ended_advances_like_next() {
    let (mut engine, output, _store) = engine_with_handles(TWO_TRACKS);
    engine.play();

    engine.handle_track_ended();
    assert_eq!(engine.current_index(), 1);
    assert!(output.0.borrow().playing, "playback continues on next track");
}

#[test]
fn play_track_selects_and_starts() {
    let (mut engine, output, _store) = engine_with_handles(TWO_TRACKS);

    engine.play_track(1);
    assert_eq!(engine.current_index(), 1);
    assert!(output.0.borrow().playing);

    // Out of range is a complete no-op
    engine.play_track(7);
    assert_eq!(engine.current_index(), 1);
}

// ===== Display Metadata =====

#[test]
fn track_changed_carries_display_fallbacks() {
    let (mut engine, _output, _store) = engine_with_handles(TWO_TRACKS);
    engine.take_events();

    engine.play_track(1);
    let events = engine.take_events();
    let changed = events
        .iter()
        .find_map(|e| match e {
            PlayerEvent::TrackChanged {
                index,
                title,
                artist,
            } => Some((*index, title.clone(), artist.clone())),
            _ => None,
        })
        .expect("TrackChanged emitted");

    assert_eq!(changed.0, 1);
    assert_eq!(changed.1, "Unknown Track");
    assert_eq!(changed.2, "Unknown Artist");
}

#[test]
fn two_track_scenario() {
    // playTrack(1) shows the unknown-artist label; next() wraps to 0
    let (mut engine, _output, _store) = engine_with_handles(TWO_TRACKS);

    engine.play_track(1);
    assert_eq!(engine.current_track().display_artist(), "Unknown Artist");

    engine.next();
    assert_eq!(engine.current_index(), 0);
    assert_eq!(engine.current_track().display_title(), "A");
}

// ===== Seek =====

#[test]
fn seek_fraction_of_known_duration() {
    let (mut engine, output, _store) = engine_with_handles(TWO_TRACKS);
    output.announce_duration(Duration::from_secs(200));

    engine.seek(0.5);
    assert_eq!(output.0.borrow().position, Duration::from_secs(100));

    // Clamped at both ends
    engine.seek(2.0);
    assert_eq!(output.0.borrow().position, Duration::from_secs(200));
    engine.seek(-1.0);
    assert_eq!(output.0.borrow().position, Duration::ZERO);
}

#[test]
fn seek_with_unknown_duration_is_noop() {
    let (mut engine, output, _store) = engine_with_handles(TWO_TRACKS);
    output.0.borrow_mut().position = Duration::from_secs(7);

    engine.seek(0.5);
    assert_eq!(output.0.borrow().position, Duration::from_secs(7));
}

// ===== Volume & Mute =====

#[test]
fn set_volume_applies_linear_gain() {
    let (mut engine, output, _store) = engine_with_handles(TWO_TRACKS);

    engine.set_volume(60);
    assert_eq!(engine.volume_level(), 60);
    assert!((output.0.borrow().gain - 0.6).abs() < f32::EPSILON);

    engine.set_volume(200);
    assert_eq!(engine.volume_level(), 100, "clamped to 100");
}

#[test]
fn mute_restores_last_nonzero_volume() {
    let (mut engine, output, _store) = engine_with_handles(TWO_TRACKS);

    engine.set_volume(55);
    engine.set_volume(0);
    assert!(engine.is_muted());
    assert_eq!(output.0.borrow().gain, 0.0);

    engine.toggle_mute();
    assert!(!engine.is_muted());
    assert_eq!(engine.volume_level(), 55, "restores 55, not a default");
}

#[test]
fn toggle_mute_round_trip() {
    let (mut engine, _output, _store) = engine_with_handles(TWO_TRACKS);

    engine.set_volume(42);
    engine.toggle_mute();
    assert!(engine.is_muted());
    assert_eq!(engine.volume_level(), 0);

    engine.toggle_mute();
    assert_eq!(engine.volume_level(), 42);
}

#[test]
fn volume_events_reach_the_host() {
    let (mut engine, _output, _store) = engine_with_handles(TWO_TRACKS);
    engine.take_events();

    engine.set_volume(0);
    let events = engine.take_events();
    assert!(events
        .iter()
        .any(|e| matches!(e, PlayerEvent::VolumeChanged { level: 0, muted: true })));
}

// ===== Panel =====

#[test]
fn panel_toggle_and_outside_click() {
    let (mut engine, _output, _store) = engine_with_handles(TWO_TRACKS);
    engine.take_events();

    engine.toggle_panel();
    assert!(engine.panel_visible());

    // Click inside the player leaves it open
    engine.handle_document_click(true);
    assert!(engine.panel_visible());

    // Click outside closes it and tells the host
    engine.handle_document_click(false);
    assert!(!engine.panel_visible());
    assert!(engine
        .take_events()
        .iter()
        .any(|e| matches!(e, PlayerEvent::PanelVisibility { visible: false })));
}

#[test]
fn panel_rows_follow_the_cursor() {
    let (mut engine, _output, _store) = engine_with_handles(TWO_TRACKS);

    let rows = engine.panel_rows();
    assert_eq!(rows.len(), 2);
    assert!(rows[0].active);

    engine.play_track(1);
    let rows = engine.panel_rows();
    assert!(!rows[0].active);
    assert!(rows[1].active);
}

// ===== Persistence Side Effects =====

#[test]
fn state_changes_persist_snapshots() {
    let (mut engine, _output, store) = engine_with_handles(TWO_TRACKS);
    assert_eq!(store.value(STATE_KEY), None, "init does not clobber");

    engine.set_volume(70);
    let raw = store.value(STATE_KEY).expect("snapshot written");
    let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(value["volume"], 70);
    assert_eq!(value["playing"], false);

    engine.play();
    let raw = store.value(STATE_KEY).unwrap();
    let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(value["playing"], true);
}

#[test]
fn failing_store_never_disturbs_playback() {
    let (mut engine, _output, store) = engine_with_handles(TWO_TRACKS);
    store.fail_writes(true);

    engine.play();
    engine.set_volume(30);
    engine.next();

    assert_eq!(engine.transport(), TransportState::Playing);
    assert_eq!(engine.volume_level(), 30);
    assert_eq!(engine.current_index(), 1);
}
