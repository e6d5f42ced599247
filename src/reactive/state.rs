use super::invalidation::RootInputs;

/// Progress value for the unliked end of the timeline
pub const UNLIKED: f32 = 0.0;
/// Progress value for the liked end of the timeline
pub const LIKED: f32 = 1.0;

/// Snapshot of the root animation state at one instant
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ProgressState {
    /// Continuous progress in `[0, 1]`
    pub value: f32,
    /// Either [`UNLIKED`] or [`LIKED`]
    pub target: f32,
    pub is_liking: bool,
    pub show_particles: bool,
}

impl ProgressState {
    pub fn is_liked(&self) -> bool {
        self.target == LIKED
    }

    pub fn root_inputs(&self) -> RootInputs {
        RootInputs {
            progress: self.value,
            is_liking: self.is_liking,
            show_particles: self.show_particles,
        }
    }
}

/// Logical phase of the toggle state machine
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    IdleUnliked,
    Liking,
    IdleLiked,
    Unliking,
}

impl Phase {
    pub fn is_transitioning(self) -> bool {
        matches!(self, Phase::Liking | Phase::Unliking)
    }
}
