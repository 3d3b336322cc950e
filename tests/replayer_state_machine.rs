// Integration tests for the replayer state machine and the session on top of it

use std::time::{Duration, Instant};

use stepviz::algorithm::Algorithm;
use stepviz::input::AlgorithmInput;
use stepviz::recorder::record;
use stepviz::replay::{PlaybackState, Replayer, Speed, TickOutcome};
use stepviz::session::Session;
use stepviz::step::StepSequence;

fn sequence(algorithm: Algorithm) -> StepSequence {
    record(algorithm, &AlgorithmInput::sample(algorithm)).unwrap()
}

fn bubble() -> Replayer {
    Replayer::new(sequence(Algorithm::Bubble), Speed::default())
}

/// Drive auto-play to completion by firing each pending tick when due.
fn autoplay(replayer: &mut Replayer, start: Instant) -> Instant {
    let mut now = start;
    replayer.play(now);
    while let Some(tick) = replayer.pending() {
        now = tick.due;
        let outcome = replayer.fire(tick, now);
        assert_ne!(outcome, TickOutcome::Stale);
    }
    now
}

#[test]
fn test_reset_then_restart_drops_old_tick() {
    let mut r = bubble();
    let now = Instant::now();

    r.play(now);
    let old = r.pending().unwrap();
    r.reset();
    r.play(now);
    let fresh = r.pending().unwrap();

    assert_ne!(old.generation, fresh.generation);
    assert_eq!(r.fire(old, now), TickOutcome::Stale);
    assert_eq!(r.cursor(), None);
    assert_eq!(r.fire(fresh, now), TickOutcome::Applied);
    assert_eq!(r.cursor(), Some(0));
}

#[test]
fn test_stale_tick_after_manual_step() {
    let mut r = bubble();
    let now = Instant::now();
    r.play(now);
    let tick = r.pending().unwrap();
    r.step_forward().unwrap();

    assert_eq!(r.state(), PlaybackState::Paused);
    assert_eq!(r.fire(tick, now), TickOutcome::Stale);
    assert_eq!(r.cursor(), Some(0));
}

#[test]
fn test_speed_change_reschedules() {
    let mut r = bubble();
    let now = Instant::now();
    r.play(now);
    let old = r.pending().unwrap();

    let later = now + Duration::from_millis(10);
    r.set_speed(Speed::from_millis(400), later);
    let tick = r.pending().unwrap();
    assert_eq!(tick.due, later + Duration::from_millis(400));
    assert_eq!(r.fire(old, later), TickOutcome::Stale);
    assert_eq!(r.state(), PlaybackState::Playing);
}

#[test]
fn test_speed_change_while_paused_schedules_nothing() {
    let mut r = bubble();
    r.step_forward().unwrap();
    r.set_speed(Speed::from_millis(200), Instant::now());
    assert!(r.pending().is_none());
    assert_eq!(r.state(), PlaybackState::Paused);
}

#[test]
fn test_load_invalidates_and_returns_to_idle() {
    let mut r = bubble();
    let now = Instant::now();
    r.play(now);
    let tick = r.pending().unwrap();
    r.load(sequence(Algorithm::Linear));

    assert_eq!(r.state(), PlaybackState::Idle);
    assert!(r.pending().is_none());
    assert_eq!(r.fire(tick, now), TickOutcome::Stale);
    assert_eq!(r.sequence().algorithm(), Algorithm::Linear);
}

fn untouched(_: &mut Replayer) {}

fn stepped_twice(r: &mut Replayer) {
    r.step_forward().unwrap();
    r.step_forward().unwrap();
}

fn played_then_paused(r: &mut Replayer) {
    let now = Instant::now();
    r.play(now);
    r.poll(now);
    r.pause();
}

fn jumped_to_end(r: &mut Replayer) {
    r.jump_to_end();
}

fn played_to_completion(r: &mut Replayer) {
    autoplay(r, Instant::now());
}

#[test]
fn test_reset_is_idempotent() {
    let fresh = bubble().display();
    let histories: [fn(&mut Replayer); 5] = [
        untouched,
        stepped_twice,
        played_then_paused,
        jumped_to_end,
        played_to_completion,
    ];

    for history in histories {
        let mut r = bubble();
        history(&mut r);
        r.reset();
        assert_eq!(r.display(), fresh);
        r.reset();
        assert_eq!(r.display(), fresh);
    }
}

#[test]
fn test_manual_stepping_matches_autoplay() {
    for alg in Algorithm::ALL {
        let mut manual = Replayer::new(sequence(alg), Speed::default());
        while manual.step_forward().is_ok() {}

        let mut auto = Replayer::new(sequence(alg), Speed::default());
        autoplay(&mut auto, Instant::now());

        assert_eq!(manual.display(), auto.display(), "{}", alg);
        assert_eq!(auto.state(), PlaybackState::Completed);
        assert!(auto.display().is_finished());
    }
}

#[test]
fn test_autoplay_visits_every_step_in_order() {
    let mut r = bubble();
    let total = r.sequence().len();
    let mut now = Instant::now();
    r.play(now);

    let mut seen = Vec::new();
    while let Some(tick) = r.pending() {
        now = tick.due;
        r.fire(tick, now);
        seen.push(r.cursor().unwrap());
    }
    assert_eq!(seen, (0..total).collect::<Vec<_>>());
}

#[test]
fn test_pause_resume_continues_from_cursor() {
    let mut r = bubble();
    let now = Instant::now();
    r.play(now);
    r.poll(now);
    r.pause();
    assert_eq!(r.cursor(), Some(0));

    r.toggle(now);
    assert_eq!(r.state(), PlaybackState::Playing);
    r.poll(now);
    assert_eq!(r.cursor(), Some(1));
}

#[test]
fn test_idle_display_shows_initial_array() {
    let r = bubble();
    let display = r.display();
    assert_eq!(display.position, 0);
    assert_eq!(display.array, vec![5, 3, 4, 1, 2]);
    assert!(display.kind.is_none());
    assert_eq!(display.state, PlaybackState::Idle);
}

#[test]
fn test_session_change_discards_running_playback() {
    let mut session = Session::with_sample(Algorithm::Bubble).unwrap();
    let now = Instant::now();
    session.start(now);
    assert_eq!(session.tick(now), Some(TickOutcome::Applied));

    session.next_algorithm().unwrap();
    assert_eq!(session.algorithm(), Algorithm::OptimizedBubble);
    assert_eq!(session.tick(now + Duration::from_secs(10)), None);
    assert_eq!(session.replayer().cursor(), None);
    assert_eq!(session.replayer().state(), PlaybackState::Idle);
}

#[test]
fn test_session_randomize_is_reproducible() {
    let mut a = Session::with_sample(Algorithm::Counting).unwrap();
    let mut b = Session::with_sample(Algorithm::Counting).unwrap();
    a.randomize().unwrap();
    b.randomize().unwrap();
    assert_eq!(a.input(), b.input());
    assert_eq!(a.input().values.len(), a.size());
}

#[test]
fn test_session_cycles_through_every_algorithm() {
    let mut session = Session::with_sample(Algorithm::Bubble).unwrap();
    for _ in 0..Algorithm::ALL.len() * 2 {
        session.next_algorithm().unwrap();
        let alg = session.algorithm();
        assert!(session.input().validate_for(alg).is_ok(), "{}", alg);
        assert!(!session.replayer().sequence().is_empty());
    }
    for _ in 0..Algorithm::ALL.len() {
        session.prev_algorithm().unwrap();
    }
    assert_eq!(session.algorithm(), Algorithm::Bubble);
}

#[test]
fn test_session_target_is_clamped() {
    let mut session = Session::with_sample(Algorithm::Linear).unwrap();
    session.set_target(500).unwrap();
    assert_eq!(session.input().target, 99);
    session.set_target(-3).unwrap();
    assert_eq!(session.input().target, 0);
}
