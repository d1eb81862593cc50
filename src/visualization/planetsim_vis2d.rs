use bevy::log::LogPlugin;
use bevy::math::primitives::Circle;
use bevy::prelude::*;
use bevy::sprite::{MaterialMesh2dBundle, Mesh2dHandle};

use crate::simulation::params::Parameters;
use crate::simulation::scenario::Scenario;
use crate::simulation::states::NVec2;

/// Component tagging each circle mesh with its body index into Scenario.system.bodies
#[derive(Component)]
struct BodyIndex(pub usize);

/// Component tagging each name label with its body index
#[derive(Component)]
struct NameLabel(pub usize);

/// Component tagging each anchor-distance readout with its body index
#[derive(Component)]
struct DistanceLabel(pub usize);

/// Screen pixels per `au` of simulation space
const PIXELS_PER_AU: f64 = 250.0;

const LABEL_FONT_SIZE: f32 = 16.0;
const LABEL_OFFSET: f32 = 14.0;

pub fn run_2d(scenario: Scenario) {
    log::info!(
        "run_2d: starting viewer with {} bodies",
        scenario.system.bodies.len()
    );

    App::new()
        .insert_resource(scenario)
        .insert_resource(ClearColor(Color::BLACK))
        .add_plugins(
            DefaultPlugins
                .set(WindowPlugin {
                    primary_window: Some(Window {
                        title: "Planet Simulation".into(),
                        ..Default::default()
                    }),
                    ..Default::default()
                })
                // env_logger owns the log output; keep Bevy's subscriber out
                .disable::<LogPlugin>(),
        )
        .add_systems(Startup, setup_bodies_system)
        .add_systems(
            Update,
            (
                physics_step_system,
                sync_transforms_system,
                sync_labels_system,
                draw_trails_system,
            )
                .chain(),
        )
        .run();
}

/// World-space meters -> screen-space pixels
fn view_scale(params: &Parameters) -> f32 {
    (PIXELS_PER_AU / params.au) as f32
}

fn to_screen(p: NVec2, scale: f32) -> Vec2 {
    Vec2::new(p.x as f32 * scale, p.y as f32 * scale)
}

fn body_color(rgb: [u8; 3]) -> Color {
    Color::srgb_u8(rgb[0], rgb[1], rgb[2])
}

fn setup_bodies_system(
    mut commands: Commands,
    scenario: Res<Scenario>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<ColorMaterial>>,
) {
    // 2D camera
    commands.spawn(Camera2dBundle::default());

    let scale = view_scale(&scenario.parameters);
    let text_style = TextStyle {
        font_size: LABEL_FONT_SIZE,
        color: Color::WHITE,
        ..Default::default()
    };

    for i in 0..scenario.system.bodies.len() {
        let Some(state) = scenario.system.draw_state(i) else {
            continue;
        };
        let pos = to_screen(state.position, scale);
        let radius_screen = (state.radius as f32).max(1.0);

        commands.spawn((
            MaterialMesh2dBundle {
                mesh: Mesh2dHandle(meshes.add(Circle::new(radius_screen))),
                material: materials.add(ColorMaterial::from(body_color(state.color))),
                transform: Transform::from_xyz(pos.x, pos.y, 0.0),
                ..Default::default()
            },
            BodyIndex(i),
        ));

        // Name under the body
        commands.spawn((
            Text2dBundle {
                text: Text::from_section(state.label.to_owned(), text_style.clone()),
                transform: Transform::from_xyz(pos.x, pos.y - radius_screen - LABEL_OFFSET, 1.0),
                ..Default::default()
            },
            NameLabel(i),
        ));

        // Distance readout above the body, only meaningful off the anchor
        if !state.is_anchor {
            commands.spawn((
                Text2dBundle {
                    text: Text::from_section(String::new(), text_style.clone()),
                    transform: Transform::from_xyz(
                        pos.x,
                        pos.y + radius_screen + LABEL_OFFSET,
                        1.0,
                    ),
                    ..Default::default()
                },
                DistanceLabel(i),
            ));
        }
    }
}

fn physics_step_system(mut scenario: ResMut<Scenario>) {
    // One fixed timestep per frame; the frame clock only decides how often
    // this runs, never how far the model advances
    scenario.step();
}

fn sync_transforms_system(
    scenario: Res<Scenario>,
    mut query: Query<(&BodyIndex, &mut Transform)>,
) {
    let scale = view_scale(&scenario.parameters);
    for (BodyIndex(i), mut transform) in &mut query {
        if let Some(state) = scenario.system.draw_state(*i) {
            let pos = to_screen(state.position, scale);
            transform.translation.x = pos.x;
            transform.translation.y = pos.y;
        }
    }
}

fn sync_labels_system(
    scenario: Res<Scenario>,
    mut names: Query<(&NameLabel, &mut Transform), Without<DistanceLabel>>,
    mut distances: Query<(&DistanceLabel, &mut Text, &mut Transform), Without<NameLabel>>,
) {
    let scale = view_scale(&scenario.parameters);

    for (NameLabel(i), mut transform) in &mut names {
        if let Some(state) = scenario.system.draw_state(*i) {
            let pos = to_screen(state.position, scale);
            transform.translation.x = pos.x;
            transform.translation.y = pos.y - (state.radius as f32).max(1.0) - LABEL_OFFSET;
        }
    }

    for (DistanceLabel(i), mut text, mut transform) in &mut distances {
        if let Some(state) = scenario.system.draw_state(*i) {
            let pos = to_screen(state.position, scale);
            transform.translation.x = pos.x;
            transform.translation.y = pos.y + (state.radius as f32).max(1.0) + LABEL_OFFSET;
            // millions of kilometers, one decimal
            text.sections[0].value = format!("{:.1}M km", state.distance_to_anchor / 1.0e9);
        }
    }
}

fn draw_trails_system(scenario: Res<Scenario>, mut gizmos: Gizmos) {
    let scale = view_scale(&scenario.parameters);
    for i in 0..scenario.system.bodies.len() {
        let Some(state) = scenario.system.draw_state(i) else {
            continue;
        };
        // a line needs some history before it reads as an orbit
        if state.trail.len() < 3 {
            continue;
        }
        gizmos.linestrip_2d(
            state.trail.iter().map(|p| to_screen(*p, scale)),
            body_color(state.color),
        );
    }
}
