use approx::assert_relative_eq;
use kinephys::{
    create_kinematic_circle, create_kinematic_rect, create_static_rect, math::bodies_overlap, BodyHandle,
    PhysManager, PhysVector2, StepSettings, ZERO_VECTOR2,
};

fn v(x: f32, y: f32) -> PhysVector2 {
    PhysVector2::new(x, y)
}

fn roll_into_wall(settings: StepSettings) -> (PhysManager, Vec<usize>) {
    let mut manager = PhysManager::new(settings);
    manager.add_body(create_static_rect(v(5.0, -5.0), 2.0, 10.0));
    let ball = manager.add_body(create_kinematic_circle(v(0.0, 0.0), 1.0, v(0.75, 0.0)));
    assert_eq!(ball, BodyHandle::Kinematic(0));

    let mut contact_steps = vec![];
    for step in 0..10 {
        if !manager.step().is_empty() {
            contact_steps.push(step);
        }
    }

    (manager, contact_steps)
}

#[test]
fn ball_comes_to_rest_against_wall() {
    let (manager, contact_steps) = roll_into_wall(StepSettings::default());
    let ball = manager.get_body(BodyHandle::Kinematic(0)).unwrap();

    assert_eq!(contact_steps, vec![6]);
    assert_eq!(ball.origin, v(4.0, 0.0));
    assert!(ball.velocity.is_zero());
    assert!(manager.active().is_empty());
}

#[test]
fn predictive_static_check_stops_a_step_earlier() {
    let (manager, contact_steps) = roll_into_wall(StepSettings::default().with_predictive_static(true));
    let ball = manager.get_body(BodyHandle::Kinematic(0)).unwrap();

    assert_eq!(contact_steps, vec![5]);
    assert_eq!(ball.origin, v(4.0, 0.0));
    assert!(ball.velocity.is_zero());
}

#[test]
fn moving_ball_shares_momentum_with_resting_ball() {
    let mut manager = PhysManager::default();
    manager.add_body(create_kinematic_circle(v(0.0, 0.0), 1.0, v(1.5, 0.0)));
    manager.add_body(create_kinematic_circle(v(3.0, 0.0), 1.0, ZERO_VECTOR2));

    assert!(manager.step().is_empty());
    assert_eq!(manager.active(), &[0]);

    let contacts = manager.step().to_vec();
    assert_eq!(contacts.len(), 1);
    assert_eq!(contacts[0].a_index, 0);
    assert_eq!(contacts[0].other, BodyHandle::Kinematic(1));
    assert_relative_eq!(contacts[0].depth, 0.5);

    let (a, b) = (&manager.kinematic_bodies()[0], &manager.kinematic_bodies()[1]);
    assert_relative_eq!(a.velocity.x, 0.75);
    assert_relative_eq!(b.velocity.x, 0.75);
    assert_relative_eq!(a.origin.x, 2.0);
    assert_relative_eq!(b.origin.x, 4.0);

    // Both move together from here on, exactly touching.
    assert!(manager.step().is_empty());
    assert_eq!(manager.active(), &[0, 1]);
    let (a, b) = (&manager.kinematic_bodies()[0], &manager.kinematic_bodies()[1]);
    assert_relative_eq!(b.origin.x - a.origin.x, 2.0);
}

#[test]
fn friction_slows_box_sliding_over_floor() {
    let mut manager = PhysManager::new(StepSettings::default().with_friction(0.5));
    manager.add_body(create_static_rect(v(-100.0, 0.0), 200.0, 10.0));
    let crate_handle = manager.add_body(create_kinematic_rect(v(0.0, 10.0), 4.0, 4.0, v(4.0, 0.0)));

    for _ in 0..20 {
        manager.step();
    }

    let body = manager.get_body(crate_handle).unwrap();
    assert!(body.velocity.is_zero());
    // 2 + 1 + 0.5 + ... stops short of 4.
    assert!(body.origin.x < 4.0);
    assert_eq!(body.origin.y, 10.0);

    let floor = &manager.static_bodies()[0];
    assert!(bodies_overlap(body, floor));
}
