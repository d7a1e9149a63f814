use std::time::Duration;

use bevy::log::{Level, LogPlugin};
use bevy::prelude::*;
use bevy::sprite::{MaterialMesh2dBundle, Mesh2dHandle};
use bevy::math::primitives::Circle;
use bevy::utils::Instant;

use crate::simulation::scenario::Scenario;
use crate::simulation::view::{FrameView, Presenter};
use crate::visualization::projection::{label_font_size, ScreenProjection};

#[derive(Component)]
struct BodyIndex(pub usize);

#[derive(Component)]
struct BodyLabel(pub usize);

const OVERLAY_FONT_SIZE: f32 = 25.0;
const BODY_Z: f32 = 1.0;
const LABEL_Z: f32 = 2.0;

/// Latest snapshot handed over by the physics step, read by the draw systems
#[derive(Resource, Default)]
pub struct LatestFrame(pub FrameView);

impl Presenter for LatestFrame {
    fn present(&mut self, frame: &FrameView) {
        self.0.clone_from(frame);
    }
}

#[derive(Resource, Clone, Copy)]
struct ScreenScale(ScreenProjection);

/// Systems that read the snapshot run after this set
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub struct FrameStep;

/// Advances the `Scenario` resource exactly once per `Update`, whatever the
/// wall-clock time between frames, and publishes the snapshot in `LatestFrame`
pub struct FrameStepPlugin;

impl Plugin for FrameStepPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<LatestFrame>()
            .add_systems(Update, physics_step_system.in_set(FrameStep));
    }
}

/// Caps the frame rate by sleeping out the rest of each frame
#[derive(Resource)]
struct FrameLimiter {
    period: Duration,
    last: Instant,
}

pub fn run_2d(scenario: Scenario) {
    let display = scenario.display.clone();
    let projection = ScreenProjection::from_display(&display);

    App::new()
        .add_plugins(
            DefaultPlugins
                .set(WindowPlugin {
                    primary_window: Some(Window {
                        title: "Celestial Bodies Simulation".into(),
                        resolution: (display.width, display.height).into(),
                        ..Default::default()
                    }),
                    ..Default::default()
                })
                .set(LogPlugin {
                    level: Level::INFO,
                    filter: "wgpu=error,naga=warn".into(),
                    ..Default::default()
                }),
        )
        .insert_resource(ClearColor(Color::BLACK))
        .insert_resource(ScreenScale(projection))
        .insert_resource(FrameLimiter {
            period: Duration::from_secs_f64(1.0 / display.fps),
            last: Instant::now(),
        })
        .insert_resource(scenario)
        .add_plugins(FrameStepPlugin)
        .add_systems(Startup, setup_bodies_system)
        .add_systems(Update, (sync_transforms_system, sync_labels_system, draw_trails_system).after(FrameStep))
        .add_systems(Last, frame_limiter_system)
        .run();
}

fn body_color(rgb: [u8; 3]) -> Color {
    Color::srgb_u8(rgb[0], rgb[1], rgb[2])
}

fn setup_bodies_system(mut commands: Commands, scenario: Res<Scenario>, projection: Res<ScreenScale>, mut meshes: ResMut<Assets<Mesh>>, mut materials: ResMut<Assets<ColorMaterial>>) {
    let first = scenario.frame_view();
    info!("run_2d: starting Bevy 2D viewer with {} bodies", first.bodies.len());

    // 2D camera
    commands.spawn(Camera2dBundle::default());

    let label_style = TextStyle {
        font_size: label_font_size(scenario.display.scaling_factor),
        color: Color::WHITE,
        ..Default::default()
    };

    for (i, body) in first.bodies.iter().enumerate() {
        let pos = projection.0.to_screen(&body.x);

        commands.spawn((
            MaterialMesh2dBundle {
                mesh: Mesh2dHandle(meshes.add(Circle::new(body.radius as f32))),
                material: materials.add(ColorMaterial::from(body_color(body.color))),
                transform: Transform::from_xyz(pos.x, pos.y, BODY_Z),
                ..Default::default()
            },
            BodyIndex(i),
        ));

        if let Some(label) = &body.label {
            commands.spawn((
                Text2dBundle {
                    text: Text::from_section(label.clone(), label_style.clone()),
                    transform: Transform::from_xyz(pos.x, pos.y, LABEL_Z),
                    ..Default::default()
                },
                BodyLabel(i),
            ));
        }
    }

    // Scaling factor overlay, screen space
    commands.spawn(
        TextBundle::from_section(
            first.overlay.clone(),
            TextStyle {
                font_size: OVERLAY_FONT_SIZE,
                color: Color::WHITE,
                ..Default::default()
            },
        )
        .with_style(Style {
            position_type: PositionType::Absolute,
            left: Val::Px(80.0),
            top: Val::Px(50.0),
            ..Default::default()
        }),
    );
}

fn physics_step_system(mut scenario: ResMut<Scenario>, mut latest: ResMut<LatestFrame>) {
    scenario.advance();
    latest.present(&scenario.frame_view());
}

fn frame_limiter_system(mut limiter: ResMut<FrameLimiter>) {
    let elapsed = limiter.last.elapsed();
    if elapsed < limiter.period {
        std::thread::sleep(limiter.period - elapsed);
    }
    limiter.last = Instant::now();
}

fn sync_transforms_system(latest: Res<LatestFrame>, projection: Res<ScreenScale>, mut query: Query<(&BodyIndex, &mut Transform)>) {
    for (BodyIndex(i), mut transform) in &mut query {
        if let Some(b) = latest.0.bodies.get(*i) {
            let pos = projection.0.to_screen(&b.x);
            transform.translation.x = pos.x;
            transform.translation.y = pos.y;
        }
    }
}

fn sync_labels_system(latest: Res<LatestFrame>, projection: Res<ScreenScale>, mut query: Query<(&BodyLabel, &mut Text, &mut Transform)>) {
    for (BodyLabel(i), mut text, mut transform) in &mut query {
        let Some(b) = latest.0.bodies.get(*i) else { continue };
        let Some(label) = &b.label else { continue };

        let pos = projection.0.to_screen(&b.x);
        transform.translation.x = pos.x;
        transform.translation.y = pos.y;

        if let Some(section) = text.sections.first_mut() {
            if &section.value != label {
                section.value.clone_from(label);
            }
        }
    }
}

fn draw_trails_system(latest: Res<LatestFrame>, projection: Res<ScreenScale>, mut gizmos: Gizmos) {
    for b in &latest.0.bodies {
        // need a few points before a line reads as an orbit
        if b.trail.len() <= 2 {
            continue;
        }
        let points = b.trail.iter().map(|p| projection.0.to_screen(p));
        gizmos.linestrip_2d(points, body_color(b.color));
    }
}
