//! Position correction and velocity response for overlapping pairs.
//!
//! Every resolver returns the [`Penetration`] it corrected, or `None` when
//! the pair does not interpenetrate or the contact normal is undefined
//! (coincident circle centers, a circle center inside a rectangle).
//! Bodies that merely touch are left alone.

use super::{
    aabb::PhysAABB,
    body::{BodyShape, Mobility, RigidBody},
    manifold::Penetration,
    vector::{PhysVector2, ZERO_VECTOR2},
    vector_length, vector_normalize,
};

/// Splits the correction evenly between two kinematic bodies and removes
/// their relative velocity along `normal`. `normal` points toward `a`.
fn push_apart(a: &mut RigidBody, b: &mut RigidBody, normal: &PhysVector2, depth: f32) {
    let half = normal.mul(depth / 2.0);
    a.move_body(&half);
    b.move_body(&half.neg());

    let relative_velocity = a.velocity.sub(&b.velocity);
    let correction = normal.mul(relative_velocity.dot(normal) / 2.0);
    a.velocity = a.velocity.sub(&correction);
    b.velocity = b.velocity.add(&correction);
}

/// Moves a body off a static obstacle and drops its velocity along `normal`.
///
/// `probe` is the offset the overlap was measured at. A non-zero probe
/// already holds this step's motion, so the body is placed where the
/// corrected velocity carries it to exactly touching.
fn push_out(body: &mut RigidBody, normal: &PhysVector2, depth: f32, probe: &PhysVector2) {
    let correction = normal.mul(body.velocity.dot(normal));
    body.velocity = body.velocity.sub(&correction);

    body.move_body(&normal.mul(depth + probe.dot(normal)));
}

/// Normal and depth for two circles; the normal points from `b` to `a`.
fn circle_penetration(center_a: &PhysVector2, radius_a: f32, center_b: &PhysVector2, radius_b: f32) -> Option<Penetration> {
    let offset = center_a.sub(center_b);
    let distance = vector_length(&offset);
    let radii = radius_a + radius_b;

    if distance >= radii {
        return None;
    }

    let normal = vector_normalize(&offset)?;
    Some(Penetration { normal, depth: radii - distance })
}

/// Normal and depth for a circle against a rectangle, pointing from the
/// rectangle's nearest point toward the circle.
fn circle_rect_penetration(center: &PhysVector2, radius: f32, rect: &PhysAABB) -> Option<Penetration> {
    let nearest = rect.clamp_point(center);
    let offset = center.sub(&nearest);
    let distance = vector_length(&offset);

    if distance >= radius {
        return None;
    }

    let normal = vector_normalize(&offset)?;
    Some(Penetration { normal, depth: radius - distance })
}

/// Minimum translation for `a` out of `b`, along the axis with the smaller
/// overlap. Equal overlaps separate along y.
fn rect_penetration(a: &PhysAABB, b: &PhysAABB) -> Option<Penetration> {
    if !(a.min.x < b.max.x && b.min.x < a.max.x && a.min.y < b.max.y && b.min.y < a.max.y) {
        return None;
    }

    let push_left = a.max.x - b.min.x;
    let push_right = b.max.x - a.min.x;
    let overlap_x = if push_left < push_right { -push_left } else { push_right };

    let push_down = a.max.y - b.min.y;
    let push_up = b.max.y - a.min.y;
    let overlap_y = if push_down < push_up { -push_down } else { push_up };

    let penetration = if overlap_x.abs() < overlap_y.abs() {
        Penetration { normal: PhysVector2::new(overlap_x.signum(), 0.0), depth: overlap_x.abs() }
    }
    else {
        Penetration { normal: PhysVector2::new(0.0, overlap_y.signum()), depth: overlap_y.abs() }
    };

    Some(penetration)
}

pub fn resolve_circles(a: &mut RigidBody, radius_a: f32, b: &mut RigidBody, radius_b: f32) -> Option<Penetration> {
    let penetration = circle_penetration(&a.origin, radius_a, &b.origin, radius_b)?;
    push_apart(a, b, &penetration.normal, penetration.depth);
    Some(penetration)
}

pub fn resolve_rects(a: &mut RigidBody, b: &mut RigidBody) -> Option<Penetration> {
    let penetration = rect_penetration(&a.get_aabb(), &b.get_aabb())?;
    push_apart(a, b, &penetration.normal, penetration.depth);
    Some(penetration)
}

/// `circle` must be a circle body and `rect` a rectangle body.
pub fn resolve_circle_rect(circle: &mut RigidBody, radius: f32, rect: &mut RigidBody) -> Option<Penetration> {
    let penetration = circle_rect_penetration(&circle.origin, radius, &rect.get_aabb())?;
    push_apart(circle, rect, &penetration.normal, penetration.depth);
    Some(penetration)
}

pub fn resolve_circle_on_static_circle(circle: &mut RigidBody, radius: f32, fixed: &RigidBody, fixed_radius: f32, probe: &PhysVector2) -> Option<Penetration> {
    let center = circle.origin.add(probe);
    let penetration = circle_penetration(&center, radius, &fixed.origin, fixed_radius)?;
    push_out(circle, &penetration.normal, penetration.depth, probe);
    Some(penetration)
}

pub fn resolve_circle_on_static_rect(circle: &mut RigidBody, radius: f32, fixed: &RigidBody, probe: &PhysVector2) -> Option<Penetration> {
    let center = circle.origin.add(probe);
    let penetration = circle_rect_penetration(&center, radius, &fixed.get_aabb())?;
    push_out(circle, &penetration.normal, penetration.depth, probe);
    Some(penetration)
}

pub fn resolve_rect_on_static_circle(rect: &mut RigidBody, fixed: &RigidBody, fixed_radius: f32, probe: &PhysVector2) -> Option<Penetration> {
    let bounds = rect.get_aabb().translated(probe);
    let penetration = circle_rect_penetration(&fixed.origin, fixed_radius, &bounds)?;
    // Measured from the circle's side; the rectangle moves the other way.
    let penetration = Penetration { normal: penetration.normal.neg(), depth: penetration.depth };
    push_out(rect, &penetration.normal, penetration.depth, probe);
    Some(penetration)
}

pub fn resolve_rect_on_static_rect(rect: &mut RigidBody, fixed: &RigidBody, probe: &PhysVector2) -> Option<Penetration> {
    let bounds = rect.get_aabb().translated(probe);
    let penetration = rect_penetration(&bounds, &fixed.get_aabb())?;
    push_out(rect, &penetration.normal, penetration.depth, probe);
    Some(penetration)
}

/// Resolves two kinematic bodies against each other, picking the resolver
/// by shape. The returned normal is the direction `a` was pushed.
pub fn resolve_kinematic_pair(a: &mut RigidBody, b: &mut RigidBody) -> Option<Penetration> {
    match (a.shape(), b.shape()) {
        (BodyShape::Circle { radius: radius_a }, BodyShape::Circle { radius: radius_b }) => {
            resolve_circles(a, radius_a, b, radius_b)
        },
        (BodyShape::Rect { .. }, BodyShape::Rect { .. }) => resolve_rects(a, b),
        (BodyShape::Circle { radius }, BodyShape::Rect { .. }) => resolve_circle_rect(a, radius, b),
        (BodyShape::Rect { .. }, BodyShape::Circle { radius }) => {
            resolve_circle_rect(b, radius, a).map(flip)
        },
    }
}

/// Resolves a kinematic body against an immovable one. `fixed` is never
/// modified. With `predictive` set, overlap is tested one velocity step
/// ahead of the body's current origin.
pub fn resolve_static_pair(body: &mut RigidBody, fixed: &RigidBody, predictive: bool) -> Option<Penetration> {
    let probe = if predictive { body.velocity } else { ZERO_VECTOR2 };

    match (body.shape(), fixed.shape()) {
        (BodyShape::Circle { radius }, BodyShape::Circle { radius: fixed_radius }) => {
            resolve_circle_on_static_circle(body, radius, fixed, fixed_radius, &probe)
        },
        (BodyShape::Circle { radius }, BodyShape::Rect { .. }) => {
            resolve_circle_on_static_rect(body, radius, fixed, &probe)
        },
        (BodyShape::Rect { .. }, BodyShape::Circle { radius: fixed_radius }) => {
            resolve_rect_on_static_circle(body, fixed, fixed_radius, &probe)
        },
        (BodyShape::Rect { .. }, BodyShape::Rect { .. }) => {
            resolve_rect_on_static_rect(body, fixed, &probe)
        },
    }
}

/// Resolves any two bodies according to their mobility. Two static bodies
/// are never resolved.
pub fn resolve_pair(a: &mut RigidBody, b: &mut RigidBody) -> Option<Penetration> {
    match (a.mobility(), b.mobility()) {
        (Mobility::Kinematic, Mobility::Kinematic) => resolve_kinematic_pair(a, b),
        (Mobility::Kinematic, Mobility::Static) => resolve_static_pair(a, b, false),
        (Mobility::Static, Mobility::Kinematic) => resolve_static_pair(b, a, false).map(flip),
        (Mobility::Static, Mobility::Static) => None,
    }
}

fn flip(penetration: Penetration) -> Penetration {
    Penetration { normal: penetration.normal.neg(), depth: penetration.depth }
}
