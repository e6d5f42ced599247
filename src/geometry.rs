use crate::constants::{CANVAS_SIZE, ICON_GLYPH_GRID, ICON_SIZE};

/// Canvas layout the derived positions are expressed in
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Geometry {
    pub canvas_size: f32,
    pub icon_size: f32,
    /// Edge length of the grid the icon glyph is authored on
    pub glyph_grid: f32,
}

impl Geometry {
    /// Canvas center; ring, icon and particle burst all share it
    pub fn center(&self) -> (f32, f32) {
        (self.canvas_size / 2.0, self.canvas_size / 2.0)
    }

    /// Scale from glyph units to canvas units at rest
    pub fn glyph_scale(&self) -> f32 {
        self.icon_size / self.glyph_grid
    }

    /// Glyph-space point mapped onto the glyph's own center
    pub fn glyph_origin(&self) -> f32 {
        self.glyph_grid / 2.0
    }
}

impl Default for Geometry {
    fn default() -> Self {
        Self {
            canvas_size: CANVAS_SIZE,
            icon_size: ICON_SIZE,
            glyph_grid: ICON_GLYPH_GRID,
        }
    }
}
