use super::*;
use crate::channel::Notification;
use crate::player::Track;

fn sample_track() -> Track {
    Track::new("La Mer", "Sarah Brightman", "Dive", 214_000)
}

#[test]
fn format_mmss_renders_minutes_unbounded_seconds_padded() {
    assert_eq!(format_mmss(0), "0:00");
    assert_eq!(format_mmss(999), "0:00");
    assert_eq!(format_mmss(61_000), "1:01");
    assert_eq!(format_mmss(3_600_000), "60:00");
}

#[test]
fn song_changed_sets_track_and_resets_elapsed() {
    let mut view = ViewState::new();
    view.elapsed_ms = 5_000;

    view.apply(&Notification::SongChanged(sample_track()));

    assert_eq!(view.elapsed_ms, 0);
    assert_eq!(view.duration_ms(), 214_000);
    assert_eq!(view.track.as_ref().unwrap().title, "La Mer");
}

#[test]
fn playing_flag_follows_play_or_pause_changed_only() {
    let mut view = ViewState::new();
    assert!(!view.playing);

    view.apply(&Notification::PlayOrPauseChanged(true));
    assert!(view.playing);

    // Progress reports and track changes must not touch the flag.
    view.apply(&Notification::ProgressReport(1_000));
    assert!(view.playing);
    view.apply(&Notification::SongChanged(sample_track()));
    assert!(view.playing);

    view.apply(&Notification::PlayOrPauseChanged(false));
    assert!(!view.playing);
}

#[test]
fn progress_report_updates_elapsed_and_remaining() {
    let mut view = ViewState::new();
    view.apply(&Notification::SongChanged(sample_track()));
    view.apply(&Notification::ProgressReport(14_000));

    assert_eq!(view.elapsed_ms, 14_000);
    assert_eq!(view.remaining_ms(), 200_000);
}

#[test]
fn remaining_never_underflows_past_the_end() {
    let mut view = ViewState::new();
    view.apply(&Notification::SongChanged(sample_track()));
    view.apply(&Notification::ProgressReport(214_500));

    assert_eq!(view.remaining_ms(), 0);
}
