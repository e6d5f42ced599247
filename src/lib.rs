pub mod animation;
pub mod color;
pub mod constants;
pub mod error;
pub mod geometry;
pub mod haptics;
pub mod particles;
pub mod pipeline;
pub mod reactive;

use std::time::Instant;

use animation::AnimationConfig;
use error::AnimationError;
use geometry::Geometry;
use haptics::{Haptics, NoHaptics};
use particles::ParticleField;
use pipeline::{DerivedValuePipeline, Frame};
use reactive::{CallbackError, Phase, ProgressController, ProgressState, ToggleCallback};

pub mod prelude {
    pub use crate::animation::{
        interpolate, AnimationConfig, Animatable, KeyframeError, Keyframes, TimingFunction,
        Transition, Tween,
    };
    pub use crate::color::Color;
    pub use crate::error::AnimationError;
    pub use crate::geometry::Geometry;
    pub use crate::haptics::{Haptics, ImpactStyle, NoHaptics};
    pub use crate::particles::{Particle, ParticleField, ProgressSource, StaggerScheduler};
    pub use crate::pipeline::{
        FillRule, Frame, IconFrame, PaintStyle, ParticleFrame, ParticleTimeline, RingFrame,
    };
    pub use crate::reactive::{ChangeFlags, Phase, ProgressState};
    pub use crate::{LikeAnimation, LikeButton, LikeConfig};
}

#[derive(Clone, Debug, Default)]
pub struct LikeConfig {
    pub initial_liked: bool,
    /// Ignore presses so a frozen visual state can be inspected
    pub debug_mode: bool,
    pub animation: AnimationConfig,
    pub geometry: Geometry,
}

/// Builder for an animated like button.
///
/// # Example
/// ```
/// use likeburst::LikeButton;
///
/// let mut like = LikeButton::new()
///     .on_toggle(|liked| {
///         println!("liked: {}", liked);
///         Ok(())
///     })
///     .activate()
///     .expect("built-in curves are valid");
///
/// like.toggle();
/// assert!(like.is_liked());
/// ```
pub struct LikeButton {
    config: LikeConfig,
    on_toggle: Option<ToggleCallback>,
    haptics: Box<dyn Haptics>,
}

impl LikeButton {
    pub fn new() -> Self {
        Self::with_config(LikeConfig::default())
    }

    pub fn with_config(config: LikeConfig) -> Self {
        Self {
            config,
            on_toggle: None,
            haptics: Box::new(NoHaptics),
        }
    }

    pub fn initial_liked(mut self, liked: bool) -> Self {
        self.config.initial_liked = liked;
        self
    }

    pub fn debug_mode(mut self, debug: bool) -> Self {
        self.config.debug_mode = debug;
        self
    }

    pub fn animation(mut self, animation: AnimationConfig) -> Self {
        self.config.animation = animation;
        self
    }

    pub fn geometry(mut self, geometry: Geometry) -> Self {
        self.config.geometry = geometry;
        self
    }

    /// Called with the new liked state after each toggle.
    /// Errors and panics are logged and never undo the toggle.
    pub fn on_toggle<F>(mut self, callback: F) -> Self
    where
        F: FnMut(bool) -> Result<(), CallbackError> + 'static,
    {
        self.on_toggle = Some(Box::new(callback));
        self
    }

    pub fn haptics<H: Haptics + 'static>(mut self, haptics: H) -> Self {
        self.haptics = Box::new(haptics);
        self
    }

    /// Generate the particle field, validate all curves and create the
    /// root state
    pub fn activate(self) -> Result<LikeAnimation, AnimationError> {
        let LikeButton {
            config,
            on_toggle,
            haptics,
        } = self;

        let pipeline = DerivedValuePipeline::new(ParticleField::generate(), config.geometry)?;
        let mut controller = ProgressController::new(config.initial_liked, config.animation);
        controller.set_haptics(haptics);
        controller.set_on_toggle(on_toggle);

        log::info!(
            "like button activated (liked = {}, debug = {})",
            config.initial_liked,
            config.debug_mode
        );

        Ok(LikeAnimation {
            controller,
            pipeline,
            debug_mode: config.debug_mode,
        })
    }
}

impl Default for LikeButton {
    fn default() -> Self {
        Self::new()
    }
}

/// An activated like button: root state plus its derived-value pipeline
pub struct LikeAnimation {
    controller: ProgressController,
    pipeline: DerivedValuePipeline,
    debug_mode: bool,
}

impl LikeAnimation {
    pub fn toggle_at(&mut self, now: Instant) -> bool {
        self.controller.toggle_at(now)
    }

    pub fn toggle(&mut self) -> bool {
        self.toggle_at(Instant::now())
    }

    /// Press handler; inert in debug mode. Returns whether it toggled.
    pub fn press_at(&mut self, now: Instant) -> bool {
        if self.debug_mode {
            log::debug!("press ignored in debug mode");
            return false;
        }
        self.toggle_at(now);
        true
    }

    pub fn press(&mut self) -> bool {
        self.press_at(Instant::now())
    }

    pub fn is_liked(&self) -> bool {
        self.controller.is_liked()
    }

    pub fn state_at(&self, now: Instant) -> ProgressState {
        self.controller.state_at(now)
    }

    pub fn phase_at(&self, now: Instant) -> Phase {
        self.controller.phase_at(now)
    }

    /// Sample root state at `now` and derive the frame for it
    pub fn frame_at(&mut self, now: Instant) -> &Frame {
        let inputs = self.controller.state_at(now).root_inputs();
        self.pipeline.sample(inputs)
    }

    pub fn frame(&mut self) -> &Frame {
        self.frame_at(Instant::now())
    }

    pub fn controller(&self) -> &ProgressController {
        &self.controller
    }

    pub fn pipeline(&self) -> &DerivedValuePipeline {
        &self.pipeline
    }
}
