mod animatable;
mod keyframes;
mod timing;
mod tween;

pub use animatable::Animatable;
pub use keyframes::{interpolate, KeyframeError, Keyframes};
pub use timing::TimingFunction;
pub use tween::Tween;

/// Configuration for how progress should animate towards a target
#[derive(Clone, Debug)]
pub struct Transition {
    /// Duration of the animation in milliseconds
    pub duration_ms: f32,
    /// Timing function controlling the animation curve
    pub timing: TimingFunction,
}

impl Transition {
    /// Create a new transition with the given duration and timing function
    pub fn new(duration_ms: f32, timing: TimingFunction) -> Self {
        Self {
            duration_ms,
            timing,
        }
    }

    /// Set the duration of the animation
    pub fn duration(mut self, duration_ms: f32) -> Self {
        self.duration_ms = duration_ms;
        self
    }

    /// Set the timing function
    pub fn timing(mut self, timing: TimingFunction) -> Self {
        self.timing = timing;
        self
    }
}

/// The pair of transitions used by a like toggle
#[derive(Clone, Debug)]
pub struct AnimationConfig {
    /// Unliked -> liked
    pub forward: Transition,
    /// Liked -> unliked
    pub backward: Transition,
}

impl AnimationConfig {
    pub const FORWARD_DURATION_MS: f32 = 1000.0;
    pub const BACKWARD_DURATION_MS: f32 = 200.0;

    pub fn forward(mut self, transition: Transition) -> Self {
        self.forward = transition;
        self
    }

    pub fn backward(mut self, transition: Transition) -> Self {
        self.backward = transition;
        self
    }
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            forward: Transition::new(
                Self::FORWARD_DURATION_MS,
                TimingFunction::CubicBezier(0.21, 0.61, 0.35, 1.0),
            ),
            backward: Transition::new(Self::BACKWARD_DURATION_MS, TimingFunction::Ease),
        }
    }
}
