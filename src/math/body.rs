use core::fmt;

use super::{aabb::PhysAABB, vector::{PhysVector2, ZERO_VECTOR2}};

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum BodyShape {
    Circle { radius: f32 },
    /// Axis-aligned. The body's origin is the minimum corner.
    Rect { width: f32, height: f32 },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mobility {
    Kinematic,
    Static,
}

impl fmt::Display for BodyShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            &Self::Circle { radius } => write!(f, "Circle[r:{}]", radius),
            &Self::Rect { width, height } => write!(f, "Rect[w:{} h:{}]", width, height),
        }
    }
}

/// A circle or axis-aligned rectangle taking part in collision.
///
/// Shape is fixed at creation; `origin` and `velocity` are mutated in place
/// by resolution and by [`RigidBody::update`].
#[derive(Clone, Debug, PartialEq)]
pub struct RigidBody {
    shape: BodyShape,
    mobility: Mobility,
    pub origin: PhysVector2,
    pub velocity: PhysVector2,
}

impl RigidBody {
    pub fn new(shape: BodyShape, origin: PhysVector2, velocity: PhysVector2, mobility: Mobility) -> Self {
        let negative = match shape {
            BodyShape::Circle { radius } => radius < 0.0,
            BodyShape::Rect { width, height } => width < 0.0 || height < 0.0,
        };
        if negative {
            tracing::warn!("creating body with negative dimensions: {}", shape);
        }

        // Static bodies never move.
        let velocity = match mobility {
            Mobility::Kinematic => velocity,
            Mobility::Static => ZERO_VECTOR2,
        };

        Self { shape, mobility, origin, velocity }
    }

    pub fn shape(&self) -> BodyShape {
        self.shape
    }

    pub fn mobility(&self) -> Mobility {
        self.mobility
    }

    pub fn is_static(&self) -> bool {
        self.mobility == Mobility::Static
    }

    /// Kinematic and moving this step.
    pub fn is_active(&self) -> bool {
        self.mobility == Mobility::Kinematic && !self.velocity.is_zero()
    }

    pub fn move_body(&mut self, amount: &PhysVector2) {
        self.origin = self.origin.add(amount);
    }

    /// Bounding box of the body at its current origin.
    pub fn get_aabb(&self) -> PhysAABB {
        match self.shape {
            BodyShape::Circle { radius } => PhysAABB::new(
                PhysVector2 { x: self.origin.x - radius, y: self.origin.y - radius },
                PhysVector2 { x: self.origin.x + radius, y: self.origin.y + radius },
            ),
            BodyShape::Rect { width, height } => PhysAABB::from_origin(&self.origin, width, height),
        }
    }

    /// Center of the shape; for rectangles this is not the origin.
    pub fn center(&self) -> PhysVector2 {
        match self.shape {
            BodyShape::Circle { .. } => self.origin,
            BodyShape::Rect { width, height } => PhysVector2 {
                x: self.origin.x + width / 2.0,
                y: self.origin.y + height / 2.0,
            },
        }
    }

    /// Advances a kinematic body by one step: damp, snap to rest, move.
    pub fn update(&mut self, friction: f32, rest_epsilon: f32) {
        if self.is_static() {
            return;
        }

        self.velocity = self.velocity.mul(friction);

        if self.velocity.x.abs() < rest_epsilon {
            self.velocity.x = 0.0;
        }
        if self.velocity.y.abs() < rest_epsilon {
            self.velocity.y = 0.0;
        }

        self.origin = self.origin.add(&self.velocity);
    }
}

pub fn create_kinematic_circle(origin: PhysVector2, radius: f32, velocity: PhysVector2) -> RigidBody {
    RigidBody::new(BodyShape::Circle { radius }, origin, velocity, Mobility::Kinematic)
}

pub fn create_kinematic_rect(origin: PhysVector2, width: f32, height: f32, velocity: PhysVector2) -> RigidBody {
    RigidBody::new(BodyShape::Rect { width, height }, origin, velocity, Mobility::Kinematic)
}

pub fn create_static_circle(origin: PhysVector2, radius: f32) -> RigidBody {
    RigidBody::new(BodyShape::Circle { radius }, origin, ZERO_VECTOR2, Mobility::Static)
}

pub fn create_static_rect(origin: PhysVector2, width: f32, height: f32) -> RigidBody {
    RigidBody::new(BodyShape::Rect { width, height }, origin, ZERO_VECTOR2, Mobility::Static)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn update_snaps_small_velocity_per_axis() {
        let mut body = create_kinematic_circle(ZERO_VECTOR2, 1.0, PhysVector2::new(0.005, 2.0));
        body.update(1.0, 0.01);

        assert_eq!(body.velocity.x, 0.0);
        assert_relative_eq!(body.velocity.y, 2.0);
        assert_relative_eq!(body.origin.x, 0.0);
        assert_relative_eq!(body.origin.y, 2.0);
    }

    #[test]
    fn friction_eventually_brings_body_to_rest() {
        let mut body = create_kinematic_rect(ZERO_VECTOR2, 2.0, 2.0, PhysVector2::new(1.0, -1.0));
        for _ in 0..100 {
            body.update(0.9, 0.01);
        }
        assert!(body.velocity.is_zero());
        assert!(!body.is_active());
    }

    #[test]
    fn static_bodies_never_move() {
        let mut body = RigidBody::new(
            BodyShape::Rect { width: 4.0, height: 4.0 },
            PhysVector2::new(1.0, 1.0),
            PhysVector2::new(3.0, 0.0),
            Mobility::Static,
        );
        assert!(body.velocity.is_zero());
        body.update(1.0, 0.01);
        assert_eq!(body.origin, PhysVector2::new(1.0, 1.0));
        assert!(!body.is_active());
    }

    #[test]
    fn rect_bounds_start_at_origin() {
        let body = create_static_rect(PhysVector2::new(2.0, 3.0), 4.0, 6.0);
        let aabb = body.get_aabb();
        assert_eq!(aabb.min, PhysVector2::new(2.0, 3.0));
        assert_eq!(aabb.max, PhysVector2::new(6.0, 9.0));
        assert_eq!(body.center(), PhysVector2::new(4.0, 6.0));
    }
}
