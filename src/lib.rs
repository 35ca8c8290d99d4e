//! Collision detection and resolution for axis-aligned circles and
//! rectangles, with kinematic bodies pushed out of static ones and out of
//! each other.
//!
//! A host keeps a [`PhysManager`] per scene and calls [`PhysManager::step`]
//! once per frame, or drives [`active_bodies`] and
//! [`process_kinematic_bodies`] directly over its own collections.

pub mod manager;
pub mod math;

pub use manager::{active_bodies, process_kinematic_bodies, set_active_bodies, PhysManager};
pub use math::{
    body::{create_kinematic_circle, create_kinematic_rect, create_static_circle, create_static_rect, BodyShape, Mobility, RigidBody},
    manifold::{BodyHandle, Penetration, PhysManifold},
    vector::{PhysVector2, ZERO_VECTOR2},
    world::StepSettings,
};
