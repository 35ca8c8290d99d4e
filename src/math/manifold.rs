use super::vector::PhysVector2;

/// Separation applied to the first body of a resolved pair.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Penetration {
    /// Unit vector the first body was pushed along.
    pub normal: PhysVector2,
    /// Interpenetration before correction, always positive.
    pub depth: f32,
}

/// Index of a body within one of a scene's two collections.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BodyHandle {
    Static(usize),
    Kinematic(usize),
}

/// A contact resolved during one sweep. `a_index` is the active body.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PhysManifold {
    pub a_index: usize,
    pub other: BodyHandle,
    pub normal: PhysVector2,
    pub depth: f32,
}

impl PhysManifold {
    pub fn new(a_index: usize, other: BodyHandle, penetration: Penetration) -> Self {
        Self { a_index, other, normal: penetration.normal, depth: penetration.depth }
    }
}
