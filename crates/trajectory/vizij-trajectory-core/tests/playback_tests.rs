use vizij_trajectory_core::{BoundaryEvent, PlaybackState};

fn approx(a: f32, b: f32, eps: f32) {
    assert!((a - b).abs() <= eps, "left={a} right={b} eps={eps}");
}

#[test]
fn looping_wraps_overshoot_instead_of_clamping() {
    let mut s = PlaybackState::new(2.0).with_looping(true);
    s.set_time(1.9);

    let out = s.tick(0.3);

    assert!(out.boundary_hit());
    assert_eq!(out.event, Some(BoundaryEvent::Looped));
    approx(s.elapsed(), 0.2, 1e-5);
    assert!(s.is_playing());
    assert!(!s.has_completed());
}

#[test]
fn once_clamps_stops_and_pulses_completion() {
    let mut s = PlaybackState::new(1.0);
    s.set_time(0.95);

    let out = s.tick(0.1);
    assert_eq!(s.elapsed(), 1.0);
    assert!(!s.is_playing());
    assert!(s.has_completed());
    assert!(out.boundary_hit());
    assert_eq!(out.event, Some(BoundaryEvent::Completed));
    assert_eq!(out.normalized_time, 1.0);

    // Already stopped: no-op, no event.
    let next = s.tick(0.1);
    assert!(!next.boundary_hit());
    assert_eq!(s.elapsed(), 1.0);
    assert!(!s.has_completed());
}

#[test]
fn reverse_once_completes_at_start() {
    let mut s = PlaybackState::new(1.0);
    s.set_time(0.1);
    s.reverse();

    let out = s.tick(0.3);
    assert_eq!(out.event, Some(BoundaryEvent::Completed));
    assert_eq!(s.elapsed(), 0.0);
    assert!(!s.is_playing());
}

#[test]
fn reverse_looping_wraps_to_the_end() {
    let mut s = PlaybackState::new(2.0).with_looping(true).with_speed(-1.0);
    s.set_time(0.1);

    let out = s.tick(0.3);
    assert_eq!(out.event, Some(BoundaryEvent::Looped));
    approx(s.elapsed(), 1.8, 1e-5);

    // Landing exactly on 0 while travelling backward wraps to the end.
    s.set_time(0.5);
    s.tick(0.5);
    assert_eq!(s.elapsed(), 2.0);
}

#[test]
fn negative_delta_with_positive_speed_moves_backward() {
    let mut s = PlaybackState::new(1.0);
    s.set_time(0.5);
    let out = s.tick(-0.2);
    assert!(!out.boundary_hit());
    approx(s.elapsed(), 0.3, 1e-6);
}

#[test]
fn ping_pong_bounces_the_read_out() {
    let mut s = PlaybackState::new(2.0).with_ping_pong(true);

    assert_eq!(s.normalized_progress(), 0.0);
    s.set_time(0.5);
    approx(s.normalized_progress(), 0.5, 1e-6);
    s.set_time(1.0);
    assert_eq!(s.normalized_progress(), 1.0);
    s.set_time(1.5);
    approx(s.normalized_progress(), 0.5, 1e-6);
    s.set_time(2.0);
    assert_eq!(s.normalized_progress(), 0.0);

    // Raw read-out is not mirrored.
    assert_eq!(s.normalized_time(), 1.0);
}

#[test]
fn ping_pong_keeps_playing_across_the_boundary() {
    let mut s = PlaybackState::new(1.0).with_ping_pong(true);
    s.set_time(0.9);

    let before = s.normalized_progress();
    let out = s.tick(0.2);

    assert_eq!(out.event, Some(BoundaryEvent::Bounced));
    assert!(s.is_playing());
    assert!(!s.has_completed());
    assert_eq!(s.speed(), 1.0);
    approx(s.elapsed(), 0.1, 1e-5);
    // Progress stays near the low end on both sides of the wrap.
    assert!(before < 0.25);
    approx(s.normalized_progress(), 0.2, 1e-5);
}

#[test]
fn ping_pong_progress_is_continuous_over_a_cycle() {
    let mut s = PlaybackState::new(1.0).with_ping_pong(true);
    let mut prev = s.normalized_progress();
    for _ in 0..250 {
        s.tick(0.01);
        let p = s.normalized_progress();
        assert!((p - prev).abs() <= 0.0201, "jump from {prev} to {p}");
        assert!((0.0..=1.0).contains(&p));
        prev = p;
    }
}

#[test]
fn looping_takes_precedence_over_ping_pong_for_the_event() {
    let mut s = PlaybackState::new(1.0)
        .with_looping(true)
        .with_ping_pong(true);
    s.set_time(0.95);
    let out = s.tick(0.1);
    assert_eq!(out.event, Some(BoundaryEvent::Looped));
}

#[test]
fn paused_tick_is_a_no_op() {
    let mut s = PlaybackState::new(1.0);
    s.set_time(0.4);
    s.pause();
    s.pause();

    let out = s.tick(0.5);
    assert!(!out.boundary_hit());
    assert_eq!(s.elapsed(), 0.4);
    approx(out.normalized_time, 0.4, 1e-6);

    s.play();
    s.play();
    s.tick(0.1);
    approx(s.elapsed(), 0.5, 1e-6);
}

#[test]
fn stop_resets_time_and_progress() {
    let mut s = PlaybackState::new(3.0).with_ping_pong(true);
    s.tick(1.2);
    s.stop();
    assert!(!s.is_playing());
    assert_eq!(s.elapsed(), 0.0);
    assert_eq!(s.normalized_progress(), 0.0);
}

#[test]
fn rewind_keeps_playing_flag() {
    let mut s = PlaybackState::new(3.0);
    s.tick(1.0);
    s.rewind();
    assert!(s.is_playing());
    assert_eq!(s.elapsed(), 0.0);

    s.pause();
    s.set_time(2.0);
    s.rewind();
    assert!(!s.is_playing());
    assert_eq!(s.elapsed(), 0.0);
}

#[test]
fn set_time_clamps_without_events() {
    let mut s = PlaybackState::new(2.0);
    s.set_time(5.0);
    assert_eq!(s.elapsed(), 2.0);
    assert!(s.is_playing());
    assert!(!s.has_completed());
    s.set_time(-1.0);
    assert_eq!(s.elapsed(), 0.0);
}

#[test]
fn speed_controls() {
    let mut s = PlaybackState::new(1.0);
    s.slow_mo();
    assert_eq!(s.speed(), 0.5);
    s.fast_forward();
    assert_eq!(s.speed(), 2.0);
    s.reverse();
    assert_eq!(s.speed(), -2.0);
    s.reverse();
    assert_eq!(s.speed(), -2.0);
    assert!(s.is_reversed());
    s.normal_speed();
    assert_eq!(s.speed(), 1.0);
    s.set_time_scale(-0.25);
    assert_eq!(s.speed(), -0.25);
}

#[test]
fn speed_scales_the_advance() {
    let mut s = PlaybackState::new(4.0).with_speed(2.0);
    s.tick(0.5);
    approx(s.elapsed(), 1.0, 1e-6);
    approx(s.remaining(), 3.0, 1e-6);
}

#[test]
fn zero_duration_is_an_immediate_boundary() {
    let mut s = PlaybackState::new(0.0);
    assert_eq!(s.normalized_progress(), 0.0);

    let out = s.tick(0.016);
    assert_eq!(out.event, Some(BoundaryEvent::Completed));
    assert_eq!(out.normalized_time, 1.0);
    assert_eq!(s.normalized_progress(), 1.0);
    assert_eq!(s.elapsed(), 0.0);

    s.stop();
    assert_eq!(s.normalized_progress(), 0.0);
}

#[test]
fn zero_duration_looping_keeps_playing() {
    let mut s = PlaybackState::new(0.0).with_looping(true);
    for _ in 0..3 {
        let out = s.tick(0.016);
        assert_eq!(out.event, Some(BoundaryEvent::Looped));
        assert!(out.normalized_time.is_finite());
    }
    assert!(s.is_playing());
    assert_eq!(s.elapsed(), 0.0);
}

#[test]
fn start_and_end_checks_are_tolerant() {
    let mut s = PlaybackState::new(1.0);
    assert!(s.is_at_start());
    assert!(!s.is_at_end());

    s.set_time(1.0 - 5e-5);
    assert!(s.is_at_end());
    assert!(!s.is_at_start());
    assert!(!s.is_at_end_within(1e-6));

    s.set_time(0.01);
    assert!(s.is_at_start_within(0.02));
}

#[test]
fn progress_read_is_idempotent() {
    let mut s = PlaybackState::new(1.5).with_ping_pong(true);
    s.tick(0.4);
    let a = s.normalized_progress();
    let b = s.normalized_progress();
    assert_eq!(a, b);
}

#[test]
fn elapsed_stays_in_range_under_random_ticks() {
    let mut s = PlaybackState::new(1.3).with_looping(true);
    let deltas = [0.7, -2.9, 0.05, 3.3, -0.4, 1.31, -1.3, 0.0, 12.0];
    for (i, dt) in deltas.iter().enumerate() {
        if i % 3 == 0 {
            s.reverse();
        } else {
            s.normal_speed();
        }
        s.tick(*dt);
        assert!(
            (0.0..=s.duration()).contains(&s.elapsed()),
            "elapsed {} out of range",
            s.elapsed()
        );
    }
}

#[test]
fn state_round_trips_through_json() {
    let mut s = PlaybackState::new(2.0)
        .with_ping_pong(true)
        .with_speed(-0.5);
    s.set_time(1.25);
    let json = serde_json::to_string(&s).expect("serialize");
    let back: PlaybackState = serde_json::from_str(&json).expect("deserialize");
    assert_eq!(back, s);
}

#[test]
fn non_finite_delta_is_a_zero_advance() {
    let mut s = PlaybackState::new(2.0).with_looping(true);
    s.set_time(1.0);

    let out = s.tick(f32::NAN);
    assert!(!out.boundary_hit());
    assert_eq!(s.elapsed(), 1.0);

    for _ in 0..5 {
        s.tick(0.1);
    }
    approx(s.elapsed(), 1.5, 1e-5);
    approx(s.normalized_progress(), 0.75, 1e-5);

    for dt in [f32::INFINITY, f32::NEG_INFINITY] {
        s.tick(dt);
        assert!(s.elapsed().is_finite());
        assert!((0.0..=s.duration()).contains(&s.elapsed()));
    }
    approx(s.elapsed(), 1.5, 1e-5);
}

#[test]
fn non_finite_speed_does_not_poison_time() {
    let mut s = PlaybackState::new(1.0).with_speed(f32::INFINITY);
    s.set_time(0.5);
    // 0 * inf is NaN; both must leave the timer where it was.
    s.tick(0.0);
    s.tick(0.1);
    assert_eq!(s.elapsed(), 0.5);
    assert!(s.is_playing());
}

#[test]
fn non_finite_seek_is_ignored() {
    let mut s = PlaybackState::new(2.0);
    s.set_time(0.75);
    s.set_time(f32::NAN);
    assert_eq!(s.elapsed(), 0.75);
    s.set_time(f32::INFINITY);
    assert_eq!(s.elapsed(), 0.75);
}
