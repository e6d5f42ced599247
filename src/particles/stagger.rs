use crate::constants::STAGGER_DELAY;

/// Which progress value drives a particle output
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ProgressSource {
    /// Root progress, shared by every particle
    Raw,
    /// Root progress shifted back by the particle's stagger offset
    Staggered,
}

/// Per-particle time offsets derived from pair index
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StaggerScheduler {
    delay: f32,
}

impl StaggerScheduler {
    pub fn new(delay: f32) -> Self {
        Self { delay }
    }

    pub fn offset(&self, pair_index: usize) -> f32 {
        pair_index as f32 * self.delay
    }

    /// Progress as seen by a particle; may drop below zero
    pub fn adjusted(&self, progress: f32, pair_index: usize) -> f32 {
        progress - self.offset(pair_index)
    }

    pub fn resolve(&self, source: ProgressSource, progress: f32, pair_index: usize) -> f32 {
        match source {
            ProgressSource::Raw => progress,
            ProgressSource::Staggered => self.adjusted(progress, pair_index),
        }
    }
}

impl Default for StaggerScheduler {
    fn default() -> Self {
        Self::new(STAGGER_DELAY)
    }
}
