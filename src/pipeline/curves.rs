//! Keyframe curves for every progress-driven output.

use crate::animation::{KeyframeError, Keyframes};
use crate::color::Color;
use crate::constants::{
    COLOR_GRAY, COLOR_LAVENDER, COLOR_PINK, COLOR_PURPLE, COLOR_RED, GROUP_DISTR_R,
};

/// Progress below which the icon is drawn as an outline
pub const OUTLINE_THRESHOLD: f32 = 0.03;

/// Raw-progress window the particle color sweep spans
pub const PARTICLE_COLOR_WINDOW: [f32; 2] = [0.20, 1.0];

#[derive(Clone, Debug)]
pub struct Curves {
    /// Shrink to zero, overshoot, settle
    pub icon_scale: Keyframes<f32>,
    pub icon_color: Keyframes<Color>,
    pub ring_scale: Keyframes<f32>,
    pub ring_inner_radius: Keyframes<f32>,
    pub ring_opacity: Keyframes<f32>,
    pub ring_color: Keyframes<Color>,
    /// Distance of a particle from the center, in staggered progress
    pub particle_radius: Keyframes<f32>,
    pub particle_size: Keyframes<f32>,
    pub particle_opacity: Keyframes<f32>,
}

impl Curves {
    pub fn standard() -> Result<Self, KeyframeError> {
        Ok(Self {
            icon_scale: Keyframes::new(&[0.0, 0.5, 0.75, 0.9, 1.0], &[0.0, 1.15, 1.0, 1.15, 1.0])?,
            icon_color: Keyframes::new(
                &[0.0, OUTLINE_THRESHOLD, 0.20, 0.30, 1.0],
                &[COLOR_GRAY, COLOR_GRAY, COLOR_RED, COLOR_RED, COLOR_RED],
            )?,
            ring_scale: Keyframes::new(&[0.0, 0.3, 1.0], &[0.0, 1.0, 1.0])?,
            ring_inner_radius: Keyframes::new(
                &[0.0, 0.3, 0.5, 0.7, 1.0],
                &[0.0, 0.0, 5.0, 12.0, 16.0],
            )?,
            ring_opacity: Keyframes::new(
                &[0.0, 0.1, 0.3, 0.5, 0.8, 1.0],
                &[0.0, 0.8, 0.9, 0.7, 0.3, 0.0],
            )?,
            ring_color: Keyframes::new(
                &[0.0, 0.2, 0.4, 0.6, 1.0],
                &[
                    COLOR_PINK,
                    COLOR_PINK,
                    COLOR_PURPLE,
                    COLOR_LAVENDER,
                    COLOR_LAVENDER,
                ],
            )?,
            particle_radius: Keyframes::new(
                &[0.20, 0.25, 1.0],
                &[0.0, GROUP_DISTR_R, GROUP_DISTR_R * 1.25],
            )?,
            particle_size: Keyframes::new(
                &[0.20, 0.25, 0.60, 0.85, 1.0],
                &[0.0, 1.2, 1.4, 0.8, 0.0],
            )?,
            particle_opacity: Keyframes::new(&[0.20, 0.25, 0.60, 1.0], &[0.0, 1.0, 1.0, 0.0])?,
        })
    }

    /// Two-point color sweep for one particle gradient
    pub fn particle_color(start: Color, end: Color) -> Result<Keyframes<Color>, KeyframeError> {
        Keyframes::new(&PARTICLE_COLOR_WINDOW, &[start, end])
    }
}
