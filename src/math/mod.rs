pub mod vector;
pub mod aabb;
pub mod body;
pub mod manifold;
pub mod resolve;
pub mod world;

use vector::PhysVector2;

use self::{aabb::PhysAABB, body::{BodyShape, RigidBody}};

pub fn vector_length(a: &PhysVector2) -> f32 {
    f32::sqrt(a.x*a.x + a.y*a.y)
}

pub fn vector_distance(a: &PhysVector2, b: &PhysVector2) -> f32 {
    let dx = a.x - b.x;
    let dy = a.y - b.y;
    f32::sqrt(dx*dx + dy*dy)
}

pub fn vector_distance_squared(a: &PhysVector2, b: &PhysVector2) -> f32 {
    let dx = a.x - b.x;
    let dy = a.y - b.y;
    dx*dx + dy*dy
}

/// `None` for the zero vector, which has no direction.
pub fn vector_normalize(a: &PhysVector2) -> Option<PhysVector2> {
    let len = vector_length(a);
    if len > 0.0 {
        Some(PhysVector2 { x: a.x/len, y: a.y/len })
    }
    else {
        None
    }
}

pub fn intersect_circles(center_a: &PhysVector2, radius_a: f32, center_b: &PhysVector2, radius_b: f32) -> bool {
    vector_distance(center_a, center_b) <= radius_a + radius_b
}

pub fn intersect_rects(a: &PhysAABB, b: &PhysAABB) -> bool {
    a.overlaps(b)
}

/// Compares against the point of the rectangle nearest the circle's center.
pub fn intersect_circle_rect(center: &PhysVector2, radius: f32, rect: &PhysAABB) -> bool {
    let nearest = rect.clamp_point(center);
    vector_distance_squared(center, &nearest) <= radius*radius
}

pub fn circle_contains_circle(outer_center: &PhysVector2, outer_radius: f32, inner_center: &PhysVector2, inner_radius: f32) -> bool {
    vector_distance(outer_center, inner_center) + inner_radius <= outer_radius
}

pub fn rect_contains_rect(outer: &PhysAABB, inner: &PhysAABB) -> bool {
    outer.contains(inner)
}

/// All four corners of the rectangle lie within the circle.
pub fn circle_contains_rect(center: &PhysVector2, radius: f32, rect: &PhysAABB) -> bool {
    let radius_sq = radius*radius;
    let corners = [
        rect.min,
        PhysVector2 { x: rect.max.x, y: rect.min.y },
        PhysVector2 { x: rect.min.x, y: rect.max.y },
        rect.max,
    ];

    corners.iter().all(|corner| vector_distance_squared(center, corner) <= radius_sq)
}

pub fn rect_contains_circle(rect: &PhysAABB, center: &PhysVector2, radius: f32) -> bool {
    let circle_box = PhysAABB::new(
        PhysVector2 { x: center.x - radius, y: center.y - radius },
        PhysVector2 { x: center.x + radius, y: center.y + radius },
    );
    rect.contains(&circle_box)
}

/// Overlap test between any two bodies, dispatched on their shapes.
pub fn bodies_overlap(a: &RigidBody, b: &RigidBody) -> bool {
    match (a.shape(), b.shape()) {
        (BodyShape::Circle { radius: radius_a }, BodyShape::Circle { radius: radius_b }) => {
            intersect_circles(&a.origin, radius_a, &b.origin, radius_b)
        },
        (BodyShape::Rect { .. }, BodyShape::Rect { .. }) => {
            intersect_rects(&a.get_aabb(), &b.get_aabb())
        },
        (BodyShape::Circle { radius }, BodyShape::Rect { .. }) => {
            intersect_circle_rect(&a.origin, radius, &b.get_aabb())
        },
        (BodyShape::Rect { .. }, BodyShape::Circle { radius }) => {
            intersect_circle_rect(&b.origin, radius, &a.get_aabb())
        },
    }
}

/// Whether `inner` lies entirely within `outer`.
pub fn body_contains(outer: &RigidBody, inner: &RigidBody) -> bool {
    match (outer.shape(), inner.shape()) {
        (BodyShape::Circle { radius: outer_radius }, BodyShape::Circle { radius: inner_radius }) => {
            circle_contains_circle(&outer.origin, outer_radius, &inner.origin, inner_radius)
        },
        (BodyShape::Rect { .. }, BodyShape::Rect { .. }) => {
            rect_contains_rect(&outer.get_aabb(), &inner.get_aabb())
        },
        (BodyShape::Circle { radius }, BodyShape::Rect { .. }) => {
            circle_contains_rect(&outer.origin, radius, &inner.get_aabb())
        },
        (BodyShape::Rect { .. }, BodyShape::Circle { radius }) => {
            rect_contains_circle(&outer.get_aabb(), &inner.origin, radius)
        },
    }
}

pub fn point_in_body(point: &PhysVector2, body: &RigidBody) -> bool {
    match body.shape() {
        BodyShape::Circle { radius } => vector_distance(&body.origin, point) <= radius,
        BodyShape::Rect { .. } => body.get_aabb().contains_point(point),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use super::body::{create_kinematic_circle, create_kinematic_rect, create_static_circle, create_static_rect};
    use super::vector::ZERO_VECTOR2;

    fn v(x: f32, y: f32) -> PhysVector2 {
        PhysVector2::new(x, y)
    }

    #[test]
    fn circles_overlap_inclusive() {
        assert!(intersect_circles(&v(0.0, 0.0), 1.0, &v(1.0, 0.0), 1.0));
        assert!(intersect_circles(&v(0.0, 0.0), 1.0, &v(2.0, 0.0), 1.0));
        assert!(!intersect_circles(&v(0.0, 0.0), 1.0, &v(2.5, 0.0), 1.0));
        // Coincident centers still overlap.
        assert!(intersect_circles(&v(3.0, 3.0), 0.0, &v(3.0, 3.0), 0.0));
    }

    #[test]
    fn rects_overlap_on_both_axes() {
        let a = create_static_rect(v(0.0, 0.0), 10.0, 10.0);
        let b = create_kinematic_rect(v(5.0, 5.0), 10.0, 10.0, v(1.0, 0.0));
        let c = create_kinematic_rect(v(5.0, 11.0), 10.0, 10.0, ZERO_VECTOR2);
        let touching = create_kinematic_rect(v(10.0, 0.0), 1.0, 1.0, ZERO_VECTOR2);

        assert!(bodies_overlap(&a, &b));
        assert!(!bodies_overlap(&a, &c));
        assert!(bodies_overlap(&a, &touching));
    }

    #[test]
    fn circle_rect_uses_nearest_point() {
        let rect = PhysAABB::from_origin(&v(0.0, 0.0), 10.0, 10.0);
        assert!(intersect_circle_rect(&v(12.0, 5.0), 3.0, &rect));
        // Tangent counts as overlap, like the other pairs.
        assert!(intersect_circle_rect(&v(12.0, 5.0), 2.0, &rect));
        // Corner region: distance to (10, 10) is sqrt(8).
        assert!(!intersect_circle_rect(&v(12.0, 12.0), 2.5, &rect));
        assert!(intersect_circle_rect(&v(12.0, 12.0), 3.0, &rect));
        // Center inside.
        assert!(intersect_circle_rect(&v(5.0, 5.0), 0.5, &rect));
    }

    #[test]
    fn overlap_dispatch_is_symmetric() {
        let circle = create_kinematic_circle(v(12.0, 5.0), 3.0, ZERO_VECTOR2);
        let rect = create_static_rect(v(0.0, 0.0), 10.0, 10.0);
        assert!(bodies_overlap(&circle, &rect));
        assert!(bodies_overlap(&rect, &circle));
    }

    #[test]
    fn circle_contains_circle_until_inner_escapes() {
        let outer = create_static_circle(v(0.0, 0.0), 10.0);
        let mut inner = create_kinematic_circle(v(0.0, 0.0), 5.0, ZERO_VECTOR2);
        assert!(body_contains(&outer, &inner));

        inner.origin = v(5.0, 0.0);
        assert!(body_contains(&outer, &inner));

        inner.origin = v(5.1, 0.0);
        assert!(!body_contains(&outer, &inner));
        assert!(!body_contains(&inner, &outer));
    }

    #[test]
    fn rect_containment() {
        let outer = PhysAABB::from_origin(&v(0.0, 0.0), 10.0, 10.0);
        let inner = PhysAABB::from_origin(&v(2.0, 2.0), 8.0, 3.0);
        let poking = PhysAABB::from_origin(&v(2.0, 2.0), 8.5, 3.0);
        assert!(rect_contains_rect(&outer, &inner));
        assert!(rect_contains_rect(&outer, &outer));
        assert!(!rect_contains_rect(&outer, &poking));
    }

    #[test]
    fn circle_rect_containment() {
        let rect = PhysAABB::from_origin(&v(-3.0, -4.0), 6.0, 8.0);
        // Corners sit exactly at distance 5.
        assert!(circle_contains_rect(&v(0.0, 0.0), 5.0, &rect));
        assert!(!circle_contains_rect(&v(0.0, 0.0), 4.9, &rect));

        assert!(rect_contains_circle(&rect, &v(0.0, 0.0), 3.0));
        assert!(!rect_contains_circle(&rect, &v(0.0, 0.0), 3.5));

        let circle = create_static_circle(v(0.0, 0.0), 3.0);
        let rect_body = create_static_rect(v(-3.0, -4.0), 6.0, 8.0);
        assert!(body_contains(&rect_body, &circle));
        assert!(!body_contains(&circle, &rect_body));
    }

    #[test]
    fn point_queries() {
        let circle = create_static_circle(v(0.0, 0.0), 2.0);
        let rect = create_static_rect(v(1.0, 1.0), 2.0, 2.0);
        assert!(point_in_body(&v(2.0, 0.0), &circle));
        assert!(!point_in_body(&v(2.0, 0.1), &circle));
        assert!(point_in_body(&v(3.0, 3.0), &rect));
        assert!(!point_in_body(&v(0.5, 2.0), &rect));
    }

    #[test]
    fn normalize_zero_has_no_direction() {
        assert!(vector_normalize(&ZERO_VECTOR2).is_none());
        assert_eq!(vector_normalize(&v(0.0, -3.0)), Some(v(0.0, -1.0)));
    }
}
