use bevy::prelude::*;
use bevy_prototype_lyon::{shapes, prelude::{ShapeBundle, GeometryBuilder, Fill, Stroke}};
use once_cell::sync::Lazy;

use kinephys::{BodyHandle, BodyShape, PhysVector2, RigidBody};

pub static DEFAULT_Z_VALUE: f32 = 1.0;
pub static DEFAULT_STROKE_WIDTH: f32 = 2.5;
pub static KINEMATIC_FILL_COLOR: Lazy<Color> = Lazy::new(|| {
    Color::rgba_u8(64, 64, 255, 128)
});
pub static STATIC_FILL_COLOR: Lazy<Color> = Lazy::new(|| {
    Color::rgba_u8(255, 0, 128, 128)
});
pub static DEFAULT_STROKE_COLOR: Lazy<Color> = Lazy::new(|| {
    Color::rgba_u8(20, 24, 32, 255)
});
pub static SELECTED_STROKE_COLOR: Lazy<Color> = Lazy::new(|| {
    Color::rgba_u8(136, 156, 194, 255)
});

#[derive(Debug)]
pub struct SpawnError;

/// Ties a drawn entity to the body it mirrors.
#[derive(Component, Clone, Copy)]
pub struct BodyLink {
    pub handle: BodyHandle,
}

pub struct SpawnArgs {
    pub z_value: f32,
    pub fill_color: Color,
    pub stroke_color: Color,
    pub stroke_width: f32,
}

impl Default for SpawnArgs {
    fn default() -> Self {
        Self { z_value: DEFAULT_Z_VALUE, fill_color: *KINEMATIC_FILL_COLOR, stroke_color: *DEFAULT_STROKE_COLOR, stroke_width: DEFAULT_STROKE_WIDTH }
    }
}

impl SpawnArgs {
    pub fn for_body(body: &RigidBody) -> Self {
        let mut args = Self::default();
        if body.is_static() {
            args.fill_color = *STATIC_FILL_COLOR;
            args.stroke_width = 4.0;
        }
        args
    }
}

pub fn vec2_to_vector(a: &Vec2) -> PhysVector2 {
    PhysVector2 { x: a.x, y: a.y }
}

pub fn spawn_circle(commands: &mut Commands, handle: BodyHandle, position: &PhysVector2, radius: f32, args: SpawnArgs) -> Result<Entity, SpawnError> {
    if !(radius > 0.0) {
        return Err(SpawnError);
    }

    let mut shape = shapes::Circle::default();
    shape.center = Vec2::ZERO;
    shape.radius = radius;

    let entity = commands.spawn((
        ShapeBundle {
            path: GeometryBuilder::build_as(&shape),
            transform: Transform::from_xyz(position.x, position.y, args.z_value),
            ..default()
        },
        Fill::color(args.fill_color),
        Stroke::new(args.stroke_color, args.stroke_width),
        BodyLink { handle },
    )).id();

    Ok(entity)
}

/// Rectangles are anchored at their minimum corner, like the bodies.
pub fn spawn_rect(commands: &mut Commands, handle: BodyHandle, position: &PhysVector2, width: f32, height: f32, args: SpawnArgs) -> Result<Entity, SpawnError> {
    if !(width > 0.0 && height > 0.0) {
        return Err(SpawnError);
    }

    let mut shape = shapes::Rectangle::default();
    shape.origin = shapes::RectangleOrigin::BottomLeft;
    shape.extents = Vec2 { x: width, y: height };

    let entity = commands.spawn((
        ShapeBundle {
            path: GeometryBuilder::build_as(&shape),
            transform: Transform::from_xyz(position.x, position.y, args.z_value),
            ..default()
        },
        Fill::color(args.fill_color),
        Stroke::new(args.stroke_color, args.stroke_width),
        BodyLink { handle },
    )).id();

    Ok(entity)
}

pub fn spawn_body(commands: &mut Commands, handle: BodyHandle, body: &RigidBody) -> Result<Entity, SpawnError> {
    let args = SpawnArgs::for_body(body);
    match body.shape() {
        BodyShape::Circle { radius } => spawn_circle(commands, handle, &body.origin, radius, args),
        BodyShape::Rect { width, height } => spawn_rect(commands, handle, &body.origin, width, height, args),
    }
}
