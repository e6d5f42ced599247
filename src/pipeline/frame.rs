use crate::color::Color;
use crate::constants::N_PARTICLES;
use crate::reactive::RootInputs;

/// How the icon glyph is painted
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PaintStyle {
    /// Outline only
    #[default]
    Stroke,
    Fill,
}

/// Fill rule for combining the ring's two discs
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FillRule {
    NonZero,
    #[default]
    EvenOdd,
}

/// Affine placement of the icon glyph on the canvas
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct IconPlacement {
    pub center: (f32, f32),
    /// Glyph-to-canvas scale combined with the animated icon scale
    pub scale: f32,
    /// Glyph-space point that lands on `center`
    pub glyph_origin: f32,
}

impl IconPlacement {
    /// Map a point in glyph units to canvas coordinates
    pub fn map(&self, x: f32, y: f32) -> (f32, f32) {
        (
            self.center.0 + (x - self.glyph_origin) * self.scale,
            self.center.1 + (y - self.glyph_origin) * self.scale,
        )
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct IconFrame {
    pub scale: f32,
    pub color: Color,
    pub style: PaintStyle,
    pub stroke_width: f32,
    pub placement: IconPlacement,
}

/// The pulsing ring: an annulus scaled about the canvas center
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct RingFrame {
    pub scale: f32,
    pub outer_radius: f32,
    /// Hole radius; `None` while the ring is a solid disc
    pub inner_radius: Option<f32>,
    pub fill_rule: FillRule,
    pub opacity: f32,
    pub color: Color,
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ParticleFrame {
    /// Canvas position
    pub x: f32,
    pub y: f32,
    /// Distance travelled outwards from the center
    pub travel_radius: f32,
    /// Circle radius
    pub size: f32,
    pub opacity: f32,
    pub color: Color,
}

/// Every output the renderer consumes for one frame
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Frame {
    pub inputs: Option<RootInputs>,
    pub icon: IconFrame,
    pub ring: RingFrame,
    pub particles: [ParticleFrame; N_PARTICLES],
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_icon_placement_maps_glyph_center_to_canvas_center() {
        let placement = IconPlacement {
            center: (29.0, 29.0),
            scale: 26.0 / 24.0,
            glyph_origin: 12.0,
        };
        assert_eq!(placement.map(12.0, 12.0), (29.0, 29.0));
        let (x, _) = placement.map(24.0, 12.0);
        assert!((x - 42.0).abs() < 1e-4);
    }
}
