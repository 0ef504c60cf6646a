use super::*;

fn sample_track(duration_ms: u64) -> Track {
    Track::new("La Mer", "Sarah Brightman", "Dive", duration_ms)
}

fn controller(duration_ms: u64) -> (PlayerController, ManualClock) {
    let clock = ManualClock::new(0);
    let c = PlayerController::new(sample_track(duration_ms), Box::new(clock.clone()));
    (c, clock)
}

#[test]
fn starts_paused_at_zero() {
    let (mut c, _clock) = controller(10_000);
    assert!(!c.is_playing());
    assert_eq!(c.progress(), 0);
}

#[test]
fn elapsed_advances_with_the_clock_while_playing() {
    let (mut c, clock) = controller(10_000);
    assert!(c.play());
    clock.advance(1_234);
    assert_eq!(c.progress(), 1_234);
    clock.advance(766);
    assert_eq!(c.progress(), 2_000);
}

#[test]
fn elapsed_is_frozen_while_paused() {
    let (mut c, clock) = controller(10_000);
    c.play();
    clock.advance(3_000);
    assert!(!c.pause());
    assert_eq!(c.progress(), 3_000);
    clock.advance(5_000);
    assert_eq!(c.progress(), 3_000);
}

#[test]
fn play_resumes_from_the_frozen_value() {
    let (mut c, clock) = controller(10_000);
    c.play();
    clock.advance(2_000);
    c.pause();
    clock.advance(9_999);
    c.play();
    clock.advance(500);
    assert_eq!(c.progress(), 2_500);
}

#[test]
fn play_while_playing_keeps_elapsed_continuous() {
    let (mut c, clock) = controller(10_000);
    c.play();
    clock.advance(4_000);
    assert!(c.play());
    assert!(c.is_playing());
    assert_eq!(c.progress(), 4_000);
    clock.advance(1_000);
    assert_eq!(c.progress(), 5_000);
}

#[test]
fn toggle_is_an_involution_on_the_playing_flag() {
    let (mut c, clock) = controller(60_000);
    c.play();
    clock.advance(1_000);

    assert!(!c.toggle());
    clock.advance(250);
    assert!(c.toggle());
    assert!(c.is_playing());

    // Elapsed stays consistent with the time actually spent playing.
    clock.advance(1_000);
    assert_eq!(c.progress(), 2_000);
}

#[test]
fn seek_then_progress_returns_the_target_exactly() {
    let (mut c, clock) = controller(10_000);
    c.play();
    clock.advance(4_000);

    c.seek(1_500);
    assert_eq!(c.progress(), 1_500);
    assert!(c.is_playing());

    clock.advance(100);
    assert_eq!(c.progress(), 1_600);
}

#[test]
fn seek_while_paused_stays_paused_and_frozen_at_target() {
    let (mut c, clock) = controller(10_000);
    c.play();
    clock.advance(2_000);
    c.pause();

    c.seek(7_000);
    assert!(!c.is_playing());
    assert_eq!(c.progress(), 7_000);
    clock.advance(3_000);
    assert_eq!(c.progress(), 7_000);
}

#[test]
fn seek_clamps_targets_beyond_the_track_length() {
    let (mut c, clock) = controller(10_000);
    c.seek(25_000);
    assert_eq!(c.progress(), 10_000);

    // Clamped while playing too; the very next reading auto-pauses.
    c.play();
    c.seek(99_999);
    clock.advance(1);
    let p = c.progress();
    assert!(p >= 10_000);
    assert!(!c.is_playing());
}

#[test]
fn progress_auto_pauses_at_end_of_track() {
    let (mut c, clock) = controller(1_000);
    c.play();

    clock.advance(900);
    assert_eq!(c.progress(), 900);
    assert!(c.is_playing());

    clock.advance(150);
    let at_end = c.progress();
    assert!(at_end >= 1_000);
    assert!(!c.is_playing());

    // Every later reading returns the value frozen at auto-pause.
    clock.advance(10_000);
    assert_eq!(c.progress(), at_end);
    assert!(!c.is_playing());
}

#[test]
fn zero_length_track_pauses_on_first_query() {
    let (mut c, _clock) = controller(0);
    c.play();
    assert_eq!(c.progress(), 0);
    assert!(!c.is_playing());
}
