//! Palette and geometry shared by the like animation.

use crate::color::Color;

/// Outline color of the unliked icon
pub const COLOR_GRAY: Color = Color::from_hex(0xAAB8C2);
/// Fill color of the liked icon
pub const COLOR_RED: Color = Color::from_hex(0xE2264D);

// Ring ramp
pub const COLOR_PINK: Color = Color::from_hex(0xDD4789);
pub const COLOR_PURPLE: Color = Color::from_hex(0xD46ABF);
pub const COLOR_LAVENDER: Color = Color::from_hex(0xCC8FF5);

/// Canvas edge length in logical units
pub const CANVAS_SIZE: f32 = 58.0;
/// Rendered icon edge length
pub const ICON_SIZE: f32 = 26.0;
/// Edge length of the grid the icon glyph is authored on
pub const ICON_GLYPH_GRID: f32 = 24.0;

pub const RING_OUTER_RADIUS: f32 = 16.0;
/// Icon stroke width while drawn as an outline
pub const ICON_STROKE_WIDTH: f32 = 2.0;

pub const N_GROUPS: usize = 7;
pub const N_PARTICLES_PER_GROUP: usize = 2;
pub const N_PARTICLES: usize = N_GROUPS * N_PARTICLES_PER_GROUP;
/// Radius of the circle the particle groups sit on
pub const GROUP_DISTR_R: f32 = 20.0;
/// Distance of each particle from its group center
pub const PARTICLE_D: f32 = 2.0;
/// Angular offset of a group's first particle, in degrees
pub const PARTICLE_OFF_ANGLE_DEG: f32 = 40.0;

/// Progress offset between consecutive pair indices
pub const STAGGER_DELAY: f32 = 0.08;

/// Start and end of one particle's color sweep
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Gradient {
    pub start: Color,
    pub end: Color,
}

const fn gradient(start: u32, end: u32) -> Gradient {
    Gradient {
        start: Color::from_hex(start),
        end: Color::from_hex(end),
    }
}

/// Per-group gradients for the first and second particle
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GroupPalette {
    pub first: Gradient,
    pub second: Gradient,
}

pub const PARTICLE_COLORS: [GroupPalette; N_GROUPS] = [
    GroupPalette {
        first: gradient(0x8CE8C3, 0xA068CE),
        second: gradient(0x8BE7C2, 0xB752E1),
    },
    GroupPalette {
        first: gradient(0x90D2FA, 0x99E9C8),
        second: gradient(0x91D1F9, 0xBAE3D7),
    },
    GroupPalette {
        first: gradient(0xCC8EF5, 0xD3F491),
        second: gradient(0xCB8DF4, 0xDCE483),
    },
    GroupPalette {
        first: gradient(0x8CE8C3, 0x59C392),
        second: gradient(0x8CE8C3, 0x67CD9F),
    },
    GroupPalette {
        first: gradient(0xF58EA7, 0xCAADC7),
        second: gradient(0xF48DA6, 0x959FF3),
    },
    GroupPalette {
        first: gradient(0x91D2FA, 0xCA5ED8),
        second: gradient(0x91D2FA, 0xA975D1),
    },
    GroupPalette {
        first: gradient(0x92D3FC, 0xC35DD1),
        second: gradient(0xCB8DF4, 0x90E0BE),
    },
];
