use rand::Rng;

use bevy::{prelude::*, app::AppExit};
use bevy_prototype_lyon::prelude::*;
use bevy::diagnostic::{FrameTimeDiagnosticsPlugin, LogDiagnosticsPlugin};

mod spawner;
use kinephys::{
    create_kinematic_circle, create_kinematic_rect, create_static_circle, create_static_rect, BodyHandle,
    PhysManager, PhysVector2, RigidBody, StepSettings,
};
use spawner::{spawn_body, vec2_to_vector, BodyLink, SpawnError, DEFAULT_STROKE_COLOR, SELECTED_STROKE_COLOR};

/// Half extents of the walled arena.
const ARENA_HALF_WIDTH: f32 = 560.0;
const ARENA_HALF_HEIGHT: f32 = 320.0;
const WALL_THICKNESS: f32 = 40.0;

/// Per-step velocity multiplier for the viewer scene.
const FRICTION: f32 = 0.99;
/// Scales the cursor drag into a fling velocity.
const FLING_SCALE: f32 = 0.2;

#[derive(Resource)]
pub struct PhysScene {
    manager: PhysManager,
    selected: Option<BodyHandle>,
}

impl Default for PhysScene {
    fn default() -> Self {
        Self { manager: PhysManager::new(StepSettings::default().with_friction(FRICTION)), selected: None }
    }
}

impl PhysScene {
    fn add_body(&mut self, commands: &mut Commands, body: RigidBody) -> Result<BodyHandle, SpawnError> {
        let handle = self.manager.add_body(body);
        let body = self.manager.get_body(handle).ok_or(SpawnError)?;
        spawn_body(commands, handle, body)?;
        Ok(handle)
    }
}

fn main() {
    App::new()
        .insert_resource(Msaa::Sample4)
        .insert_resource(PhysScene::default())
        .insert_resource(ClearColor(Color::rgba_u8(40, 44, 52, 255)))
        .add_plugins(DefaultPlugins)
        .add_plugins(ShapePlugin)
        .add_plugins(LogDiagnosticsPlugin::default())
        .add_plugins(FrameTimeDiagnosticsPlugin::default())
        .add_systems(Startup, setup)
        .add_systems(Update, (handle_keyboard, handle_mouse, handle_update, sync_transforms).chain())
        .run();
}

fn arena_bodies() -> Vec<RigidBody> {
    let (w, h, t) = (ARENA_HALF_WIDTH, ARENA_HALF_HEIGHT, WALL_THICKNESS);
    vec![
        create_static_rect(PhysVector2::new(-w - t, -h - t), 2.0 * (w + t), t),
        create_static_rect(PhysVector2::new(-w - t, h), 2.0 * (w + t), t),
        create_static_rect(PhysVector2::new(-w - t, -h), t, 2.0 * h),
        create_static_rect(PhysVector2::new(w, -h), t, 2.0 * h),
        create_static_circle(PhysVector2::new(-200.0, 0.0), 50.0),
        create_static_circle(PhysVector2::new(200.0, 0.0), 50.0),
        create_static_rect(PhysVector2::new(-40.0, -160.0), 80.0, 80.0),
    ]
}

fn random_velocity(rng: &mut impl Rng) -> PhysVector2 {
    PhysVector2::new(rng.gen_range(-6.0..6.0), rng.gen_range(-6.0..6.0))
}

fn random_body(rng: &mut impl Rng, at: PhysVector2, circle: bool) -> RigidBody {
    if circle {
        let radius = rng.gen_range(15..30) as f32;
        create_kinematic_circle(at, radius, random_velocity(rng))
    }
    else {
        let (w, h) = (rng.gen_range(30..60) as f32, rng.gen_range(30..60) as f32);
        create_kinematic_rect(at, w, h, random_velocity(rng))
    }
}

fn setup(
    mut commands: Commands,
    mut scene: ResMut<PhysScene>,
) {
    commands.spawn(Camera2dBundle::default());

    for body in arena_bodies() {
        if let Err(err) = scene.add_body(&mut commands, body) {
            error!("failed to spawn arena body: {:?}", err);
        }
    }

    let mut rng = rand::thread_rng();
    for i in 0..12 {
        let at = PhysVector2::new(-450.0 + 80.0 * i as f32, 200.0);
        let body = random_body(&mut rng, at, i % 2 == 0);
        if let Err(err) = scene.add_body(&mut commands, body) {
            error!("failed to spawn body: {:?}", err);
        }
    }

    info!("press T for a circle, E for a box, P to toggle predictive static checks");
}

fn cursor_point(windows: &Query<&Window>) -> Option<PhysVector2> {
    let window = windows.get_single().ok()?;
    let pos = window.cursor_position()?;

    let mut point = vec2_to_vector(&pos);
    point.x -= window.width() / 2.0;
    point.y = (point.y - window.height() / 2.0) * -1.0;
    Some(point)
}

fn handle_update(mut scene: ResMut<PhysScene>) {
    let contacts = scene.manager.step().len();
    if contacts > 0 {
        trace!("{} contacts this frame", contacts);
    }
}

fn sync_transforms(
    scene: Res<PhysScene>,
    mut entity_q: Query<(&BodyLink, &mut Transform, &mut Stroke)>,
) {
    for (link, mut transform, mut stroke) in entity_q.iter_mut() {
        if let Some(body) = scene.manager.get_body(link.handle) {
            transform.translation.x = body.origin.x;
            transform.translation.y = body.origin.y;
        }

        stroke.color = if scene.selected == Some(link.handle) { *SELECTED_STROKE_COLOR } else { *DEFAULT_STROKE_COLOR };
    }
}

fn handle_keyboard(
    input: Res<Input<KeyCode>>,
    windows: Query<&Window>,
    mut commands: Commands,
    mut scene: ResMut<PhysScene>,
    mut app_exit_events: ResMut<Events<AppExit>>,
) {
    if input.pressed(KeyCode::Escape) {
        app_exit_events.send(AppExit);
        return;
    }

    if input.just_pressed(KeyCode::P) {
        let settings = scene.manager.settings_mut();
        settings.predictive_static = !settings.predictive_static;
        info!("predictive static checks: {}", settings.predictive_static);
    }

    let Some(point) = cursor_point(&windows) else { return };
    let mut rng = rand::thread_rng();

    let body = if input.just_pressed(KeyCode::E) {
        random_body(&mut rng, point, false)
    }
    else if input.just_pressed(KeyCode::T) {
        random_body(&mut rng, point, true)
    }
    else {
        return;
    };

    match scene.add_body(&mut commands, body) {
        Ok(handle) => debug!("spawned {:?}", handle),
        Err(err) => error!("failed to spawn body: {:?}", err),
    }
}

fn handle_mouse(
    windows: Query<&Window>,
    input: Res<Input<MouseButton>>,
    mut scene: ResMut<PhysScene>,
) {
    let Some(point) = cursor_point(&windows) else { return };

    if input.just_pressed(MouseButton::Left) {
        scene.selected = match scene.manager.body_at_point(&point) {
            Some(handle @ BodyHandle::Kinematic(_)) => Some(handle),
            _ => None,
        };
    }

    if input.just_released(MouseButton::Left) {
        if let Some(handle) = scene.selected.take() {
            if let Some(body) = scene.manager.get_body_mut(handle) {
                // Fling away from the cursor, like pulling a slingshot.
                body.velocity = body.center().sub(&point).mul(FLING_SCALE);
            }
        }
    }
}
