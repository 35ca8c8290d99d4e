use super::vector::PhysVector2;

/// Axis-aligned box stored as its minimum and maximum corners.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PhysAABB {
    pub min: PhysVector2,
    pub max: PhysVector2,
}

impl PhysAABB {
    pub fn new(min: PhysVector2, max: PhysVector2) -> Self {
        Self { min, max }
    }

    /// Box of a rectangle whose `origin` is its minimum corner.
    pub fn from_origin(origin: &PhysVector2, width: f32, height: f32) -> Self {
        Self {
            min: *origin,
            max: PhysVector2 { x: origin.x + width, y: origin.y + height },
        }
    }

    /// Inclusive interval test on both axes; shared edges count.
    pub fn overlaps(&self, other: &PhysAABB) -> bool {
        self.min.x <= other.max.x
            && other.min.x <= self.max.x
            && self.min.y <= other.max.y
            && other.min.y <= self.max.y
    }

    pub fn contains(&self, other: &PhysAABB) -> bool {
        self.min.x <= other.min.x
            && self.max.x >= other.max.x
            && self.min.y <= other.min.y
            && self.max.y >= other.max.y
    }

    pub fn contains_point(&self, point: &PhysVector2) -> bool {
        (self.min.x <= point.x && point.x <= self.max.x)
            && (self.min.y <= point.y && point.y <= self.max.y)
    }

    /// Nearest point inside or on the box.
    pub fn clamp_point(&self, point: &PhysVector2) -> PhysVector2 {
        PhysVector2 {
            x: point.x.min(self.max.x).max(self.min.x),
            y: point.y.min(self.max.y).max(self.min.y),
        }
    }

    pub fn translated(&self, offset: &PhysVector2) -> Self {
        Self { min: self.min.add(offset), max: self.max.add(offset) }
    }
}
