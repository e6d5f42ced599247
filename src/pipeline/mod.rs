//! Derived visual values.
//!
//! Every output is a pure function of the root inputs (progress and the two
//! flags) plus, for particles, a static descriptor. [`DerivedValuePipeline`]
//! caches the last frame and only recomputes the output groups whose root
//! dependencies changed since the previous sample.

mod curves;
mod frame;

pub use curves::{Curves, OUTLINE_THRESHOLD, PARTICLE_COLOR_WINDOW};
pub use frame::{
    FillRule, Frame, IconFrame, IconPlacement, PaintStyle, ParticleFrame, RingFrame,
};

use bitflags::bitflags;

use crate::animation::{KeyframeError, Keyframes};
use crate::color::Color;
use crate::constants::{GROUP_DISTR_R, ICON_STROKE_WIDTH, RING_OUTER_RADIUS};
use crate::geometry::Geometry;
use crate::particles::{Particle, ParticleField, ProgressSource, StaggerScheduler};
use crate::reactive::{ChangeFlags, RootInputs};

bitflags! {
    /// Output groups of a frame
    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    pub struct OutputGroups: u8 {
        const ICON      = 0b001;
        const RING      = 0b010;
        const PARTICLES = 0b100;
    }
}

impl OutputGroups {
    /// Groups that depend on any of `changes`
    pub fn affected_by(changes: ChangeFlags) -> Self {
        let mut groups = OutputGroups::empty();
        if changes.contains(ChangeFlags::PROGRESS) {
            groups = OutputGroups::all();
        }
        if changes.contains(ChangeFlags::LIKING) {
            groups |= OutputGroups::RING;
        }
        if changes.contains(ChangeFlags::SHOW_PARTICLES) {
            groups |= OutputGroups::PARTICLES;
        }
        groups
    }
}

/// Which progress each particle output reads.
///
/// Geometry follows the staggered sub-timeline while color sweeps on raw
/// progress, so the two halves of a pair share colors but not positions.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ParticleTimeline {
    pub geometry: ProgressSource,
    pub color: ProgressSource,
}

impl Default for ParticleTimeline {
    fn default() -> Self {
        Self {
            geometry: ProgressSource::Staggered,
            color: ProgressSource::Raw,
        }
    }
}

pub fn derive_icon(curves: &Curves, geometry: &Geometry, progress: f32) -> IconFrame {
    let scale = if progress == 0.0 {
        1.0
    } else {
        curves.icon_scale.sample(progress)
    };
    let (style, stroke_width) = if progress < OUTLINE_THRESHOLD {
        (PaintStyle::Stroke, ICON_STROKE_WIDTH)
    } else {
        (PaintStyle::Fill, 0.0)
    };

    IconFrame {
        scale,
        color: curves.icon_color.sample(progress),
        style,
        stroke_width,
        placement: IconPlacement {
            center: geometry.center(),
            scale: geometry.glyph_scale() * scale,
            glyph_origin: geometry.glyph_origin(),
        },
    }
}

pub fn derive_ring(curves: &Curves, inputs: &RootInputs) -> RingFrame {
    let progress = inputs.progress;
    let scale = if inputs.is_liking {
        curves.ring_scale.sample(progress)
    } else {
        0.0
    };
    let inner = curves.ring_inner_radius.sample(progress);

    RingFrame {
        scale,
        outer_radius: RING_OUTER_RADIUS,
        inner_radius: (inner > 0.0).then_some(inner),
        fill_rule: FillRule::EvenOdd,
        opacity: curves.ring_opacity.sample(progress),
        color: curves.ring_color.sample(progress),
    }
}

/// Stateless derivation for a single particle
pub fn derive_particle(
    particle: &Particle,
    color: &Keyframes<Color>,
    curves: &Curves,
    stagger: &StaggerScheduler,
    timeline: ParticleTimeline,
    geometry: &Geometry,
    inputs: &RootInputs,
) -> ParticleFrame {
    let local = stagger.resolve(timeline.geometry, inputs.progress, particle.pair_index);
    let travel_radius = curves.particle_radius.sample(local);
    let radial_scale = travel_radius / GROUP_DISTR_R;
    let (cx, cy) = geometry.center();

    let opacity = if inputs.show_particles {
        curves.particle_opacity.sample(local)
    } else {
        0.0
    };

    ParticleFrame {
        x: cx + particle.anchor_x * radial_scale,
        y: cy + particle.anchor_y * radial_scale,
        travel_radius,
        size: curves.particle_size.sample(local),
        opacity,
        color: color.sample(stagger.resolve(timeline.color, inputs.progress, particle.pair_index)),
    }
}

pub struct DerivedValuePipeline {
    curves: Curves,
    particle_colors: Vec<Keyframes<Color>>,
    field: ParticleField,
    stagger: StaggerScheduler,
    timeline: ParticleTimeline,
    geometry: Geometry,
    frame: Frame,
    last_changes: ChangeFlags,
    last_recomputed: OutputGroups,
}

impl DerivedValuePipeline {
    pub fn new(field: ParticleField, geometry: Geometry) -> Result<Self, KeyframeError> {
        let particle_colors = field
            .iter()
            .map(|p| Curves::particle_color(p.start_color, p.end_color))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            curves: Curves::standard()?,
            particle_colors,
            field,
            stagger: StaggerScheduler::default(),
            timeline: ParticleTimeline::default(),
            geometry,
            frame: Frame::default(),
            last_changes: ChangeFlags::empty(),
            last_recomputed: OutputGroups::empty(),
        })
    }

    pub fn with_timeline(mut self, timeline: ParticleTimeline) -> Self {
        self.timeline = timeline;
        self.frame.inputs = None;
        self
    }

    /// Pull a frame for `inputs`, recomputing only what changed
    pub fn sample(&mut self, inputs: RootInputs) -> &Frame {
        let changes = inputs.changes_since(self.frame.inputs.as_ref());
        let groups = OutputGroups::affected_by(changes);

        if groups.contains(OutputGroups::ICON) {
            self.frame.icon = derive_icon(&self.curves, &self.geometry, inputs.progress);
        }
        if groups.contains(OutputGroups::RING) {
            self.frame.ring = derive_ring(&self.curves, &inputs);
        }
        if groups.contains(OutputGroups::PARTICLES) {
            for ((out, particle), color) in self
                .frame
                .particles
                .iter_mut()
                .zip(self.field.iter())
                .zip(&self.particle_colors)
            {
                *out = derive_particle(
                    particle,
                    color,
                    &self.curves,
                    &self.stagger,
                    self.timeline,
                    &self.geometry,
                    &inputs,
                );
            }
        }

        if !groups.is_empty() {
            log::trace!("frame recompute {:?} for {:?}", groups, changes);
        }
        self.frame.inputs = Some(inputs);
        self.last_changes = changes;
        self.last_recomputed = groups;
        &self.frame
    }

    pub fn frame(&self) -> &Frame {
        &self.frame
    }

    pub fn last_changes(&self) -> ChangeFlags {
        self.last_changes
    }

    pub fn last_recomputed(&self) -> OutputGroups {
        self.last_recomputed
    }

    pub fn field(&self) -> &ParticleField {
        &self.field
    }

    pub fn curves(&self) -> &Curves {
        &self.curves
    }
}
