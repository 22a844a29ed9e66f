use std::f32::consts::FRAC_PI_2;

use bevy::asset::RenderAssetUsages;
use bevy::mesh::Indices;
use bevy::prelude::*;
use bevy::render::render_resource::PrimitiveTopology;

use super::WorkstationConfig;
use super::crt_material::CrtMaterial;
use super::entities::{CrtScreen, Workstation};
use crate::math;

/// Builds the curved CRT glass: a tessellated plane bulged toward the viewer.
///
/// Vertices are displaced by `-crt_bulge` (the camera sits on -Z) and carry
/// analytic paraboloid normals, so the glass catches the key light smoothly.
fn build_screen_mesh(size: Vec2, curvature: f32, segments: u32) -> Mesh {
    let n = segments;
    let vert_count = ((n + 1) * (n + 1)) as usize;
    let mut positions: Vec<[f32; 3]> = Vec::with_capacity(vert_count);
    let mut normals: Vec<[f32; 3]> = Vec::with_capacity(vert_count);
    let mut uvs: Vec<[f32; 2]> = Vec::with_capacity(vert_count);

    for row in 0..=n {
        let v = row as f32 / n as f32;
        let y = (v - 0.5) * size.y;
        for col in 0..=n {
            let u = col as f32 / n as f32;
            let x = (u - 0.5) * size.x;
            positions.push([x, y, -math::crt_bulge(x, y, curvature)]);
            let normal = Vec3::new(-2.0 * curvature * x, -2.0 * curvature * y, -1.0).normalize();
            normals.push(normal.to_array());
            uvs.push([u, 1.0 - v]);
        }
    }

    let mut indices: Vec<u32> = Vec::with_capacity((n * n * 6) as usize);
    for row in 0..n {
        for col in 0..n {
            let a = row * (n + 1) + col;
            let b = a + 1;
            let c = a + (n + 1);
            let d = c + 1;
            // Wound so front faces look down -Z, toward the camera.
            indices.extend_from_slice(&[a, d, b, a, c, d]);
        }
    }

    Mesh::new(
        PrimitiveTopology::TriangleList,
        RenderAssetUsages::RENDER_WORLD,
    )
    .with_inserted_attribute(Mesh::ATTRIBUTE_POSITION, positions)
    .with_inserted_attribute(Mesh::ATTRIBUTE_NORMAL, normals)
    .with_inserted_attribute(Mesh::ATTRIBUTE_UV_0, uvs)
    .with_inserted_indices(Indices::U32(indices))
}

/// Extrudes a convex CCW outline along +Z with flat-shaded caps and sides.
fn extruded_polygon_mesh(outline: &[Vec2], depth: f32) -> Mesh {
    let n = outline.len() as u32;
    let mut positions: Vec<[f32; 3]> = Vec::new();
    let mut normals: Vec<[f32; 3]> = Vec::new();
    let mut uvs: Vec<[f32; 2]> = Vec::new();
    let mut indices: Vec<u32> = Vec::new();

    // Front cap (z = 0) faces -Z.
    let front = positions.len() as u32;
    for p in outline {
        positions.push([p.x, p.y, 0.0]);
        normals.push([0.0, 0.0, -1.0]);
        uvs.push([p.x, p.y]);
    }
    for i in 1..n - 1 {
        indices.extend_from_slice(&[front, front + i + 1, front + i]);
    }

    // Back cap (z = depth) faces +Z.
    let back = positions.len() as u32;
    for p in outline {
        positions.push([p.x, p.y, depth]);
        normals.push([0.0, 0.0, 1.0]);
        uvs.push([p.x, p.y]);
    }
    for i in 1..n - 1 {
        indices.extend_from_slice(&[back, back + i, back + i + 1]);
    }

    // One flat-shaded quad per outline edge.
    for i in 0..outline.len() {
        let a = outline[i];
        let b = outline[(i + 1) % outline.len()];
        let a0 = Vec3::new(a.x, a.y, 0.0);
        let b0 = Vec3::new(b.x, b.y, 0.0);
        let b1 = Vec3::new(b.x, b.y, depth);
        let a1 = Vec3::new(a.x, a.y, depth);
        let normal = math::compute_normal(a0, b0, b1).to_array();
        let side = positions.len() as u32;
        for v in [a0, b0, b1, a1] {
            positions.push(v.to_array());
            normals.push(normal);
            uvs.push([0.0, 0.0]);
        }
        indices.extend_from_slice(&[side, side + 1, side + 2, side, side + 2, side + 3]);
    }

    Mesh::new(
        PrimitiveTopology::TriangleList,
        RenderAssetUsages::RENDER_WORLD,
    )
    .with_inserted_attribute(Mesh::ATTRIBUTE_POSITION, positions)
    .with_inserted_attribute(Mesh::ATTRIBUTE_NORMAL, normals)
    .with_inserted_attribute(Mesh::ATTRIBUTE_UV_0, uvs)
    .with_inserted_indices(Indices::U32(indices))
}

/// Spawns the computer model: bezel bars, CRT glass, case body, and lights.
pub fn spawn_workstation(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    mut crt_materials: ResMut<Assets<CrtMaterial>>,
    cfg: Res<WorkstationConfig>,
) {
    let shell_material = materials.add(StandardMaterial {
        base_color: cfg.case_color,
        metallic: 0.1,
        perceptual_roughness: 0.7,
        ..default()
    });

    let root = commands
        .spawn((
            Name::new("Workstation"),
            Workstation,
            Transform::default(),
            Visibility::default(),
        ))
        .id();

    // Bezel: four bars around the screen opening.
    let bar_w = (cfg.bezel_size.x - cfg.screen_size.x) / 2.0;
    let bar_h = (cfg.bezel_size.y - cfg.screen_size.y) / 2.0;
    let horizontal = meshes.add(Cuboid::new(cfg.bezel_size.x, bar_h, cfg.bezel_depth));
    let vertical = meshes.add(Cuboid::new(bar_w, cfg.screen_size.y, cfg.bezel_depth));
    let z_mid = cfg.bezel_depth / 2.0;
    let bars = [
        (
            "BezelTop",
            horizontal.clone(),
            Vec3::new(0.0, (cfg.screen_size.y + bar_h) / 2.0, z_mid),
        ),
        (
            "BezelBottom",
            horizontal,
            Vec3::new(0.0, -(cfg.screen_size.y + bar_h) / 2.0, z_mid),
        ),
        (
            "BezelLeft",
            vertical.clone(),
            Vec3::new(-(cfg.screen_size.x + bar_w) / 2.0, 0.0, z_mid),
        ),
        (
            "BezelRight",
            vertical,
            Vec3::new((cfg.screen_size.x + bar_w) / 2.0, 0.0, z_mid),
        ),
    ];
    for (label, mesh, pos) in bars {
        let bar = commands
            .spawn((
                Name::new(label),
                Mesh3d(mesh),
                MeshMaterial3d(shell_material.clone()),
                Transform::from_translation(pos),
            ))
            .id();
        commands.entity(root).add_child(bar);
    }

    // Curved glass just behind the opening.
    let screen = commands
        .spawn((
            Name::new("CrtScreen"),
            CrtScreen,
            Mesh3d(meshes.add(build_screen_mesh(
                cfg.screen_size,
                cfg.screen_curvature,
                cfg.screen_segments,
            ))),
            MeshMaterial3d(crt_materials.add(CrtMaterial::default())),
            Transform::from_xyz(0.0, 0.0, 0.02),
        ))
        .id();
    commands.entity(root).add_child(screen);

    // Sloped case body behind the bezel: a tall wedge with a shallower
    // pedestal below, both extruded trapezoids laid over on their backs.
    let body_outline = [
        Vec2::new(-0.9, -1.0),
        Vec2::new(0.9, -1.0),
        Vec2::new(0.6, 0.2),
        Vec2::new(-0.6, 0.2),
    ];
    let pedestal_outline = [
        Vec2::new(-0.9, -1.0),
        Vec2::new(0.9, -1.0),
        Vec2::new(0.6, -0.05),
        Vec2::new(-0.6, -0.05),
    ];
    let lay_flat = Quat::from_rotation_x(FRAC_PI_2);
    let body = commands
        .spawn((
            Name::new("CaseBody"),
            Mesh3d(meshes.add(extruded_polygon_mesh(&body_outline, 1.1))),
            MeshMaterial3d(shell_material.clone()),
            Transform::from_xyz(0.0, 0.65, 1.2).with_rotation(lay_flat),
        ))
        .id();
    commands.entity(root).add_child(body);
    let pedestal = commands
        .spawn((
            Name::new("CasePedestal"),
            Mesh3d(meshes.add(extruded_polygon_mesh(&pedestal_outline, 0.4))),
            MeshMaterial3d(shell_material),
            Transform::from_xyz(0.0, -0.45, 1.2).with_rotation(lay_flat),
        ))
        .id();
    commands.entity(root).add_child(pedestal);

    // Key spot from the front-top, plus a dim fill.
    commands.spawn((
        Name::new("KeySpot"),
        SpotLight {
            color: cfg.spot_color,
            intensity: cfg.spot_intensity,
            range: 40.0,
            inner_angle: 0.4,
            outer_angle: 0.9,
            shadows_enabled: true,
            ..default()
        },
        Transform::from_xyz(0.0, 2.5, -3.5).looking_at(Vec3::ZERO, Vec3::Y),
    ));
    commands.spawn((
        Name::new("FillLight"),
        PointLight {
            intensity: cfg.fill_intensity,
            range: 25.0,
            shadows_enabled: false,
            ..default()
        },
        Transform::from_xyz(-2.5, 1.0, -2.0),
    ));
}

/// Advances the CRT shader clock every frame.
pub fn animate_crt(time: Res<Time>, mut crt_materials: ResMut<Assets<CrtMaterial>>) {
    for (_, material) in crt_materials.iter_mut() {
        material.set_time(time.elapsed_secs());
    }
}
