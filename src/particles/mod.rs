//! Static particle layout for the burst.
//!
//! Seven groups sit evenly on a circle of radius [`GROUP_DISTR_R`], starting
//! at the top and proceeding clockwise (canvas y grows downwards). Each group
//! holds two particles on opposite sides of the group center.

mod stagger;

pub use stagger::{ProgressSource, StaggerScheduler};

use std::f32::consts::{PI, TAU};

use crate::color::Color;
use crate::constants::{
    GROUP_DISTR_R, N_GROUPS, N_PARTICLES, N_PARTICLES_PER_GROUP, PARTICLE_COLORS, PARTICLE_D,
    PARTICLE_OFF_ANGLE_DEG,
};

/// One particle's immutable descriptor
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Particle {
    /// Resting offset from the canvas center
    pub anchor_x: f32,
    pub anchor_y: f32,
    pub start_color: Color,
    pub end_color: Color,
    /// Group in `0..7`
    pub group_index: usize,
    /// Position within the group, `0` or `1`
    pub pair_index: usize,
}

/// The full, fixed set of particles for one activation
#[derive(Clone, Debug, PartialEq)]
pub struct ParticleField {
    particles: [Particle; N_PARTICLES],
}

impl ParticleField {
    pub fn generate() -> Self {
        let group_base_angle = TAU / N_GROUPS as f32;
        let particle_base_angle = TAU / N_PARTICLES_PER_GROUP as f32;
        let offset_angle = PARTICLE_OFF_ANGLE_DEG.to_radians();

        let particles = std::array::from_fn(|index| {
            let group_index = index / N_PARTICLES_PER_GROUP;
            let pair_index = index % N_PARTICLES_PER_GROUP;

            let group_angle = group_index as f32 * group_base_angle - PI / 2.0;
            let (xg, yg) = (
                GROUP_DISTR_R * group_angle.cos(),
                GROUP_DISTR_R * group_angle.sin(),
            );

            let particle_angle = group_angle + offset_angle + pair_index as f32 * particle_base_angle;
            let palette = &PARTICLE_COLORS[group_index];
            let gradient = if pair_index == 0 {
                palette.first
            } else {
                palette.second
            };

            Particle {
                anchor_x: xg + PARTICLE_D * particle_angle.cos(),
                anchor_y: yg + PARTICLE_D * particle_angle.sin(),
                start_color: gradient.start,
                end_color: gradient.end,
                group_index,
                pair_index,
            }
        });

        Self { particles }
    }

    pub fn particles(&self) -> &[Particle; N_PARTICLES] {
        &self.particles
    }

    pub fn iter(&self) -> impl Iterator<Item = &Particle> {
        self.particles.iter()
    }
}
