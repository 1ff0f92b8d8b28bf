use super::vec2::Vec2;

/// Axis-aligned bounding box expressed as bottom-left and top-right corners.
///
/// Always centered on the owning body's position; the detector derives half
/// sizes from the corners, the grounded query reads the edges directly.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Aabb {
    pub bottom_left: Vec2,
    pub top_right: Vec2,
}

impl Aabb {
    pub fn new(bottom_left: Vec2, top_right: Vec2) -> Self {
        Self { bottom_left, top_right }
    }

    pub fn from_center(center: Vec2, half_extents: Vec2) -> Self {
        Self {
            bottom_left: center - half_extents,
            top_right: center + half_extents,
        }
    }

    /// Half the box extent on each axis
    pub fn half_size(&self) -> Vec2 {
        (self.top_right - self.bottom_left) * 0.5
    }

    /// Do the two boxes overlap when projected onto the x-axis?
    pub fn overlaps_horizontally(&self, other: &Aabb) -> bool {
        self.bottom_left.x < other.top_right.x && self.top_right.x > other.bottom_left.x
    }
}
