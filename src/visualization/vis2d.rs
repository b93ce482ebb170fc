use bevy::prelude::*;
use bevy::sprite::{Anchor, MaterialMesh2dBundle, Mesh2dHandle};
use bevy::math::primitives::Circle;
use bevy::window::PrimaryWindow;

use crate::simulation::scenario::Scenario;
use crate::simulation::states::{NVec2, Rgb};

#[derive(Component)]
struct BodyIndex(pub usize);

/// The single floating label shown next to a hovered planet
#[derive(Component)]
struct HoverLabel;

const HOVER_MARGIN: f32 = 10.0; // px around a body that still counts as hovering
const LABEL_GAP: f32 = 4.0; // px between a body and its name
const LABEL_SIZE: f32 = 14.0;

pub fn run_2d(scenario: Scenario) {
    info!("run_2d: starting Bevy 2D viewer with {} bodies", scenario.system.len());

    App::new()
        .insert_resource(ClearColor(Color::BLACK))
        .insert_resource(scenario)
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "orbitsim".into(),
                ..Default::default()
            }),
            ..Default::default()
        }))
        .add_systems(Startup, setup_bodies_system)
        .add_systems(Update, (physics_step_system, sync_transforms_system, draw_trails_system, hover_label_system).chain())
        .run();
}

/// World metres -> screen pixels. y is flipped so positive world y points down,
/// which keeps the planets orbiting counter-clockwise on screen
fn to_screen(p: &NVec2, scale: f64) -> Vec2 {
    Vec2::new((p.x * scale) as f32, (-p.y * scale) as f32)
}

fn color_of(c: Rgb) -> Color {
    Color::srgb_u8(c[0], c[1], c[2])
}

fn label_style() -> TextStyle {
    TextStyle {
        font_size: LABEL_SIZE,
        color: Color::WHITE,
        ..Default::default()
    }
}

fn setup_bodies_system(mut commands: Commands, scenario: Res<Scenario>, mut meshes: ResMut<Assets<Mesh>>, mut materials: ResMut<Assets<ColorMaterial>>) {
    // 2D camera
    commands.spawn(Camera2dBundle::default());

    let scale = scenario.engine.pixels_per_metre;

    for (i, body) in scenario.system.bodies().iter().enumerate() {
        let radius = body.draw_radius as f32;
        let pos = to_screen(&body.position(), scale);

        // index 0 (the sun) sits underneath everything else
        let z = if i == 0 { 0.0 } else { 1.0 };

        let mut entity = commands.spawn((
            MaterialMesh2dBundle {
                mesh: Mesh2dHandle(meshes.add(Circle::new(radius))),
                material: materials.add(ColorMaterial::from(color_of(body.color))),
                transform: Transform::from_xyz(pos.x, pos.y, z),
                ..Default::default()
            },
            BodyIndex(i),
        ));

        // The sun is always labelled, planets only on hover
        if i == 0 {
            let name = body.name.clone();
            entity.with_children(|parent| {
                parent.spawn(Text2dBundle {
                    text: Text::from_section(name, label_style()),
                    text_anchor: Anchor::BottomCenter,
                    transform: Transform::from_xyz(0.0, radius + LABEL_GAP, 2.0),
                    ..Default::default()
                });
            });
        }
    }

    commands.spawn((
        Text2dBundle {
            text: Text::from_section("", label_style()),
            text_anchor: Anchor::BottomCenter,
            visibility: Visibility::Hidden,
            ..Default::default()
        },
        HoverLabel,
    ));
}

fn physics_step_system(mut scenario: ResMut<Scenario>) {
    scenario.step();
}

fn sync_transforms_system(scenario: Res<Scenario>, mut query: Query<(&BodyIndex, &mut Transform)>) {
    let scale = scenario.engine.pixels_per_metre;
    for (BodyIndex(i), mut transform) in &mut query {
        if let Some(b) = scenario.system.body(*i) {
            let pos = to_screen(&b.position(), scale);
            transform.translation.x = pos.x;
            transform.translation.y = pos.y;
        }
    }
}

fn draw_trails_system(scenario: Res<Scenario>, mut gizmos: Gizmos) {
    let scale = scenario.engine.pixels_per_metre;

    // The sun's trail would only be a smudge at the origin
    for body in scenario.system.bodies().iter().skip(1) {
        if body.trail().len() < 2 {
            continue;
        }
        gizmos.linestrip_2d(body.trail().iter().map(|p| to_screen(p, scale)), color_of(body.color));
    }
}

fn hover_label_system(
    scenario: Res<Scenario>,
    windows: Query<&Window, With<PrimaryWindow>>,
    cameras: Query<(&Camera, &GlobalTransform)>,
    mut labels: Query<(&mut Text, &mut Transform, &mut Visibility), With<HoverLabel>>,
) {
    let Ok((mut text, mut transform, mut visibility)) = labels.get_single_mut() else {
        return;
    };
    *visibility = Visibility::Hidden;

    let Ok(window) = windows.get_single() else {
        return;
    };
    let Ok((camera, camera_transform)) = cameras.get_single() else {
        return;
    };
    let Some(cursor) = window
        .cursor_position()
        .and_then(|c| camera.viewport_to_world_2d(camera_transform, c))
    else {
        return;
    };

    let scale = scenario.engine.pixels_per_metre;
    let hovered = scenario
        .system
        .bodies()
        .iter()
        .skip(1)
        .find(|b| to_screen(&b.position(), scale).distance(cursor) < b.draw_radius as f32 + HOVER_MARGIN);

    if let Some(body) = hovered {
        let pos = to_screen(&body.position(), scale);
        text.sections[0].value.clone_from(&body.name);
        transform.translation = Vec3::new(pos.x, pos.y + body.draw_radius as f32 + LABEL_GAP, 10.0);
        *visibility = Visibility::Visible;
    }
}
