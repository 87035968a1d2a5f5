use bevy::log::LogPlugin;
use bevy::math::primitives::Circle;
use bevy::prelude::*;
use bevy::sprite::{MaterialMesh2dBundle, Mesh2dHandle};
use bevy::window::WindowResolution;

use crate::simulation::scenario::Scenario;
use crate::simulation::snapshot::Disc;

#[derive(Component)]
struct ParticleIndex(pub usize);

/// Frames between progress lines in the debug log
const REPORT_EVERY: u64 = 60;

pub fn run_2d(scenario: Scenario) {
    log::info!("run_2d: starting Bevy 2D viewer with {} particles", scenario.system.len());

    let [width, height] = scenario.window;

    App::new()
        .insert_resource(ClearColor(Color::BLACK))
        .add_plugins(
            DefaultPlugins
                .set(WindowPlugin {
                    primary_window: Some(Window {
                        title: "attractor".into(),
                        resolution: WindowResolution::new(width as f32, height as f32),
                        resizable: false,
                        ..Default::default()
                    }),
                    ..Default::default()
                })
                // env_logger owns the `log` backend
                .disable::<LogPlugin>(),
        )
        .insert_resource(scenario)
        .add_systems(Startup, setup_particles_system)
        .add_systems(Update, (physics_step_system, sync_transforms_system).chain())
        .run();
}

fn setup_particles_system(mut commands: Commands, scenario: Res<Scenario>, mut meshes: ResMut<Assets<Mesh>>, mut materials: ResMut<Assets<ColorMaterial>>) {
    // 2D camera, one world unit per pixel, origin at the window center
    commands.spawn(Camera2dBundle::default());

    for (i, disc) in scenario.system.snapshot().iter().enumerate() {
        let [r, g, b] = disc.color;

        commands.spawn((
            MaterialMesh2dBundle {
                mesh: Mesh2dHandle(meshes.add(Circle::new(disc.radius as f32))),
                material: materials.add(ColorMaterial::from(Color::srgb_u8(r, g, b))),
                transform: Transform::from_translation(to_world(disc, scenario.window)),
                ..Default::default()
            },
            ParticleIndex(i),
        ));
    }
}

fn physics_step_system(mut scenario: ResMut<Scenario>) {
    scenario.advance_frame();

    let steps = scenario.system.step_count();
    let frame = steps / scenario.parameters.steps_per_frame.max(1) as u64;
    if frame % REPORT_EVERY == 0 {
        log::debug!("frame {frame}: {steps} steps");
    }
}

fn sync_transforms_system(scenario: Res<Scenario>, mut query: Query<(&ParticleIndex, &mut Transform)>) {
    let discs = scenario.system.snapshot();
    for (ParticleIndex(i), mut transform) in &mut query {
        if let Some(disc) = discs.get(*i) {
            transform.translation = to_world(disc, scenario.window);
        }
    }
}

/// Screen space (origin top-left, y down) to Bevy world space (origin
/// center, y up), at the disc's center
fn to_world(disc: &Disc, window: [f64; 2]) -> Vec3 {
    let center = disc.center();
    Vec3::new(
        (center.x - window[0] / 2.0) as f32,
        (window[1] / 2.0 - center.y) as f32,
        0.0,
    )
}
