use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::time::{Duration, Instant};

use likeburst::constants::{COLOR_GRAY, COLOR_RED, GROUP_DISTR_R};
use likeburst::prelude::*;

fn ms(n: u64) -> Duration {
    Duration::from_millis(n)
}

fn activate(initial_liked: bool) -> LikeAnimation {
    LikeButton::new()
        .initial_liked(initial_liked)
        .activate()
        .expect("standard curves are valid")
}

#[test]
fn test_like_from_idle() {
    let t0 = Instant::now();
    let mut like = activate(false);
    assert_eq!(like.phase_at(t0), Phase::IdleUnliked);
    assert_eq!(like.frame_at(t0).icon.color, COLOR_GRAY);

    assert!(like.toggle_at(t0));
    let state = like.state_at(t0);
    assert!(state.is_liking);
    assert!(state.show_particles);
    assert_eq!(state.target, 1.0);

    let end = t0 + ms(1000);
    assert_eq!(like.state_at(end).value, 1.0);
    assert_eq!(like.phase_at(end), Phase::IdleLiked);
    let frame = like.frame_at(end);
    assert_eq!(frame.icon.color, COLOR_RED);
    assert_eq!(frame.icon.style, PaintStyle::Fill);
}

#[test]
fn test_unlike_hides_particles_immediately() {
    let t0 = Instant::now();
    let mut like = activate(false);
    like.toggle_at(t0);

    // Mid-burst: some particles are visible
    let mid = t0 + ms(150);
    assert!(like.frame_at(mid).particles.iter().any(|p| p.opacity > 0.0));

    like.toggle_at(mid);
    assert!(!like.state_at(mid).show_particles);
    let frame = like.frame_at(mid);
    assert!(frame.particles.iter().all(|p| p.opacity == 0.0));
    assert_eq!(frame.ring.scale, 0.0);
}

#[test]
fn test_double_toggle_continues_from_in_flight_value() {
    let t0 = Instant::now();
    let mut like = activate(false);
    like.toggle_at(t0);

    let t1 = t0 + ms(120);
    let before = like.state_at(t1).value;
    assert!(before > 0.0 && before < 1.0);

    like.toggle_at(t1);
    let state = like.state_at(t1);
    assert_eq!(state.target, 0.0);
    assert_eq!(state.value, before);

    // Backward tween is monotonic towards zero
    let mut prev = before;
    for step in (20..=200).step_by(20) {
        let v = like.state_at(t1 + ms(step)).value;
        assert!(v <= prev + 1e-6, "progress rose from {} to {}", prev, v);
        prev = v;
    }
    assert_eq!(prev, 0.0);
}

#[test]
fn test_progress_stays_in_unit_range() {
    let t0 = Instant::now();
    let mut like = activate(false);
    like.toggle_at(t0);
    like.toggle_at(t0 + ms(80));
    like.toggle_at(t0 + ms(90));
    for step in 0..=150 {
        let v = like.state_at(t0 + ms(90 + step * 10)).value;
        assert!((0.0..=1.0).contains(&v), "progress {} out of range", v);
    }
}

#[test]
fn test_initially_liked_rests_without_particles() {
    let now = Instant::now();
    let mut like = activate(true);
    assert!(like.is_liked());
    let frame = like.frame_at(now);
    assert_eq!(frame.icon.color, COLOR_RED);
    assert_eq!(frame.icon.scale, 1.0);
    assert!(frame.particles.iter().all(|p| p.opacity == 0.0));
}

#[test]
fn test_debug_mode_ignores_press() {
    let now = Instant::now();
    let mut like = LikeButton::new().debug_mode(true).activate().unwrap();
    assert!(!like.press_at(now));
    assert!(!like.is_liked());

    // Programmatic toggles still work
    assert!(like.toggle_at(now));
}

#[test]
fn test_press_toggles_outside_debug_mode() {
    let mut like = activate(false);
    assert!(like.press_at(Instant::now()));
    assert!(like.is_liked());
}

#[test]
fn test_haptics_and_callback_wiring() {
    let impacts = Rc::new(Cell::new(0u32));
    let seen = impacts.clone();
    let toggles = Rc::new(RefCell::new(Vec::new()));
    let sink = toggles.clone();

    let mut like = LikeButton::new()
        .haptics(move |style: ImpactStyle| {
            assert_eq!(style, ImpactStyle::Medium);
            seen.set(seen.get() + 1);
        })
        .on_toggle(move |liked| {
            sink.borrow_mut().push(liked);
            Err("offline".into())
        })
        .activate()
        .unwrap();

    let t0 = Instant::now();
    like.toggle_at(t0);
    like.toggle_at(t0 + ms(500));
    like.toggle_at(t0 + ms(900));

    assert_eq!(impacts.get(), 2);
    assert_eq!(*toggles.borrow(), vec![true, false, true]);
    assert!(like.is_liked());
}

#[test]
fn test_particles_burst_outwards() {
    let t0 = Instant::now();
    let mut like = activate(false);
    like.toggle_at(t0);

    let (cx, cy) = Geometry::default().center();
    let mut prev = 0.0;
    for step in (0..=1000).step_by(50) {
        let frame = like.frame_at(t0 + ms(step));
        let p = frame.particles[0];
        let dist = (p.x - cx).hypot(p.y - cy);
        assert!(dist + 1e-4 >= prev, "particle moved inwards at {}ms", step);
        prev = dist;
    }
    // Ends beyond the resting ring
    assert!(prev > GROUP_DISTR_R);
}

#[test]
fn test_unchanged_time_reuses_frame() {
    let t0 = Instant::now();
    let mut like = activate(false);
    like.frame_at(t0);
    like.frame_at(t0);
    assert!(like.pipeline().last_recomputed().is_empty());
    assert!(like.pipeline().last_changes().is_empty());
}
