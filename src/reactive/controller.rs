//! Toggle state machine driving the root progress value.
//!
//! The controller is the single owner of progress, target and the two step
//! flags. A toggle commits the new logical state synchronously, fires side
//! effects, and restarts the tween from wherever progress currently is.

use std::panic::{self, AssertUnwindSafe};
use std::time::Instant;

use super::state::{Phase, ProgressState, LIKED, UNLIKED};
use crate::animation::{AnimationConfig, Tween};
use crate::haptics::{Haptics, ImpactStyle, NoHaptics};

/// Error type a toggle callback may return
pub type CallbackError = Box<dyn std::error::Error + Send + Sync>;

/// Notified with the new liked state after every toggle
pub type ToggleCallback = Box<dyn FnMut(bool) -> Result<(), CallbackError>>;

struct ActiveTween {
    tween: Tween<f32>,
    started_at: Instant,
}

pub struct ProgressController {
    target: f32,
    is_liking: bool,
    show_particles: bool,
    /// Progress while no tween is in flight
    resting_value: f32,
    tween: Option<ActiveTween>,
    config: AnimationConfig,
    haptics: Box<dyn Haptics>,
    on_toggle: Option<ToggleCallback>,
}

impl ProgressController {
    pub fn new(initial_liked: bool, config: AnimationConfig) -> Self {
        let value = if initial_liked { LIKED } else { UNLIKED };
        Self {
            target: value,
            is_liking: initial_liked,
            // Particles only ever appear after a like gesture
            show_particles: false,
            resting_value: value,
            tween: None,
            config,
            haptics: Box::new(NoHaptics),
            on_toggle: None,
        }
    }

    pub fn set_haptics(&mut self, haptics: Box<dyn Haptics>) {
        self.haptics = haptics;
    }

    pub fn set_on_toggle(&mut self, callback: Option<ToggleCallback>) {
        self.on_toggle = callback;
    }

    pub fn is_liked(&self) -> bool {
        self.target == LIKED
    }

    pub fn is_liking(&self) -> bool {
        self.is_liking
    }

    pub fn show_particles(&self) -> bool {
        self.show_particles
    }

    pub fn target(&self) -> f32 {
        self.target
    }

    /// Progress sampled at `now`
    pub fn progress_at(&self, now: Instant) -> f32 {
        match &self.tween {
            Some(active) => active
                .tween
                .sample(now.saturating_duration_since(active.started_at))
                .clamp(UNLIKED, LIKED),
            None => self.resting_value,
        }
    }

    pub fn state_at(&self, now: Instant) -> ProgressState {
        ProgressState {
            value: self.progress_at(now),
            target: self.target,
            is_liking: self.is_liking,
            show_particles: self.show_particles,
        }
    }

    pub fn phase_at(&self, now: Instant) -> Phase {
        let in_flight = self
            .tween
            .as_ref()
            .is_some_and(|a| !a.tween.is_finished(now.saturating_duration_since(a.started_at)));
        match (self.is_liked(), in_flight) {
            (true, true) => Phase::Liking,
            (true, false) => Phase::IdleLiked,
            (false, true) => Phase::Unliking,
            (false, false) => Phase::IdleUnliked,
        }
    }

    /// Flip the logical state at `now` and return the new liked state.
    ///
    /// Any tween in flight is replaced; the new one starts from the
    /// progress sampled at `now`.
    pub fn toggle_at(&mut self, now: Instant) -> bool {
        let from = self.progress_at(now);
        let liked = !self.is_liked();

        let transition = if liked {
            self.target = LIKED;
            self.is_liking = true;
            self.show_particles = true;
            self.haptics.impact(ImpactStyle::Medium);
            self.config.forward.clone()
        } else {
            self.target = UNLIKED;
            self.is_liking = false;
            self.show_particles = false;
            self.config.backward.clone()
        };

        log::debug!(
            "toggle -> {} (progress {:.3} -> {}, {}ms {:?})",
            if liked { "liked" } else { "unliked" },
            from,
            self.target,
            transition.duration_ms,
            transition.timing
        );

        self.resting_value = self.target;
        self.tween = Some(ActiveTween {
            tween: Tween::new(from, self.target, transition),
            started_at: now,
        });

        self.notify(liked);
        liked
    }

    pub fn toggle(&mut self) -> bool {
        self.toggle_at(Instant::now())
    }

    /// Run the user callback; failures are logged and never undo the toggle
    fn notify(&mut self, liked: bool) {
        let Some(callback) = self.on_toggle.as_mut() else {
            return;
        };
        match panic::catch_unwind(AssertUnwindSafe(|| callback(liked))) {
            Ok(Ok(())) => {}
            Ok(Err(err)) => log::error!("Error in on_toggle callback: {}", err),
            Err(_) => log::error!("on_toggle callback panicked (liked = {})", liked),
        }
    }
}

impl std::fmt::Debug for ProgressController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProgressController")
            .field("target", &self.target)
            .field("is_liking", &self.is_liking)
            .field("show_particles", &self.show_particles)
            .field("in_flight", &self.tween.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;
    use std::time::Duration;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    #[test]
    fn test_initial_states() {
        let now = Instant::now();
        let unliked = ProgressController::new(false, AnimationConfig::default());
        assert_eq!(unliked.progress_at(now), 0.0);
        assert_eq!(unliked.phase_at(now), Phase::IdleUnliked);
        assert!(!unliked.is_liking());

        let liked = ProgressController::new(true, AnimationConfig::default());
        assert_eq!(liked.progress_at(now), 1.0);
        assert_eq!(liked.phase_at(now), Phase::IdleLiked);
        assert!(liked.is_liking());
        assert!(!liked.show_particles());
    }

    #[test]
    fn test_like_sets_flags_synchronously() {
        let t0 = Instant::now();
        let mut ctrl = ProgressController::new(false, AnimationConfig::default());
        assert!(ctrl.toggle_at(t0));
        assert!(ctrl.is_liking());
        assert!(ctrl.show_particles());
        assert_eq!(ctrl.target(), 1.0);
        assert_eq!(ctrl.progress_at(t0), 0.0);
        assert_eq!(ctrl.phase_at(t0 + ms(500)), Phase::Liking);
    }

    #[test]
    fn test_like_reaches_one_after_forward_duration() {
        let t0 = Instant::now();
        let mut ctrl = ProgressController::new(false, AnimationConfig::default());
        ctrl.toggle_at(t0);
        let mid = ctrl.progress_at(t0 + ms(500));
        assert!(mid > 0.0 && mid < 1.0, "mid progress {}", mid);
        assert_eq!(ctrl.progress_at(t0 + ms(1000)), 1.0);
        assert_eq!(ctrl.phase_at(t0 + ms(1000)), Phase::IdleLiked);
    }

    #[test]
    fn test_unlike_clears_flags_immediately() {
        let t0 = Instant::now();
        let mut ctrl = ProgressController::new(true, AnimationConfig::default());
        assert!(!ctrl.toggle_at(t0));
        assert!(!ctrl.is_liking());
        assert!(!ctrl.show_particles());
        assert_eq!(ctrl.progress_at(t0), 1.0);
        assert_eq!(ctrl.phase_at(t0 + ms(100)), Phase::Unliking);
        assert_eq!(ctrl.progress_at(t0 + ms(200)), 0.0);
        assert_eq!(ctrl.phase_at(t0 + ms(200)), Phase::IdleUnliked);
    }

    #[test]
    fn test_interrupt_restarts_from_in_flight_value() {
        let t0 = Instant::now();
        let mut ctrl = ProgressController::new(false, AnimationConfig::default());
        ctrl.toggle_at(t0);
        let t1 = t0 + ms(300);
        let in_flight = ctrl.progress_at(t1);

        ctrl.toggle_at(t1);
        assert_eq!(ctrl.target(), 0.0);
        assert_eq!(ctrl.progress_at(t1), in_flight);
        let later = ctrl.progress_at(t1 + ms(100));
        assert!(later < in_flight, "{} should fall below {}", later, in_flight);
        assert_eq!(ctrl.progress_at(t1 + ms(200)), 0.0);
    }

    #[test]
    fn test_haptics_only_on_like() {
        let count = Rc::new(Cell::new(0));
        let seen = count.clone();
        let t0 = Instant::now();
        let mut ctrl = ProgressController::new(false, AnimationConfig::default());
        ctrl.set_haptics(Box::new(move |style: ImpactStyle| {
            assert_eq!(style, ImpactStyle::Medium);
            seen.set(seen.get() + 1);
        }));

        ctrl.toggle_at(t0);
        assert_eq!(count.get(), 1);
        ctrl.toggle_at(t0 + ms(50));
        assert_eq!(count.get(), 1);
        ctrl.toggle_at(t0 + ms(100));
        assert_eq!(count.get(), 2);
    }

    #[test]
    fn test_callback_receives_new_state() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let sink = log.clone();
        let mut ctrl = ProgressController::new(false, AnimationConfig::default());
        ctrl.set_on_toggle(Some(Box::new(move |liked: bool| -> Result<(), CallbackError> {
            sink.borrow_mut().push(liked);
            Ok(())
        })));

        let t0 = Instant::now();
        ctrl.toggle_at(t0);
        ctrl.toggle_at(t0 + ms(10));
        assert_eq!(*log.borrow(), vec![true, false]);
    }

    #[test]
    fn test_failing_callback_keeps_state() {
        let mut ctrl = ProgressController::new(false, AnimationConfig::default());
        ctrl.set_on_toggle(Some(Box::new(|_: bool| -> Result<(), CallbackError> {
            Err("backend unavailable".into())
        })));
        assert!(ctrl.toggle_at(Instant::now()));
        assert!(ctrl.is_liked());
        assert!(ctrl.show_particles());
    }

    #[test]
    fn test_panicking_callback_keeps_state() {
        let mut ctrl = ProgressController::new(true, AnimationConfig::default());
        ctrl.set_on_toggle(Some(Box::new(|_: bool| -> Result<(), CallbackError> {
            panic!("callback blew up")
        })));
        assert!(!ctrl.toggle_at(Instant::now()));
        assert!(!ctrl.is_liked());
        assert!(!ctrl.is_liking());
    }
}
