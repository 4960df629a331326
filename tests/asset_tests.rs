use glam::{Mat4, Quat, Vec3};
use hero_core::asset::{smooth_normals, MeshData, MeshPrimitive, NodeData};
use hero_core::clip::{Channel, ChannelValues, Clip, ClipPlayer, Interpolation, NodeOverride, PoseOverrides};
use hero_core::model::{fit_scale, Bounds, ModelGroup};
use hero_core::{AssetError, ModelAsset};

const TRIANGLE: [[f32; 3]; 3] = [[0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [0.0, 1.0, 0.0]];

fn triangle_mesh() -> MeshData {
    MeshData {
        primitives: vec![MeshPrimitive {
            positions: TRIANGLE.to_vec(),
            normals: vec![[0.0, 0.0, 1.0]; 3],
            uvs: vec![[0.0, 0.0]; 3],
            indices: vec![0, 1, 2],
            base_color: [1.0; 4],
            base_color_image: None,
        }],
    }
}

/// Root at (0, 1, 0) with a child scaled by 2 that carries the triangle.
fn two_level_asset() -> ModelAsset {
    let mut root = NodeData::leaf(None);
    root.translation = Vec3::new(0.0, 1.0, 0.0);
    root.children = vec![1];
    let mut child = NodeData::leaf(Some(0));
    child.scale = Vec3::splat(2.0);
    ModelAsset::new(vec![root, child], vec![0], vec![triangle_mesh()], vec![], vec![])
}

#[test]
fn rest_bounds_follow_hierarchy() {
    let asset = two_level_asset();
    assert_eq!(asset.bounds.min, Vec3::new(0.0, 1.0, 0.0));
    assert_eq!(asset.bounds.max, Vec3::new(2.0, 3.0, 0.0));
    assert_eq!(asset.bounds.center(), Vec3::new(1.0, 2.0, 0.0));
    assert_eq!(asset.bounds.max_dimension(), 2.0);
    assert!(!asset.has_clips());
}

#[test]
fn pose_overrides_replace_rest_values() {
    let asset = two_level_asset();
    let mut pose = PoseOverrides::default();
    pose.insert(
        0,
        NodeOverride {
            translation: Some(Vec3::new(5.0, 0.0, 0.0)),
            ..Default::default()
        },
    );
    let world = asset.world_transforms(&pose);
    let child = world[1].unwrap();
    assert_eq!(child.transform_point3(Vec3::X), Vec3::new(7.0, 0.0, 0.0));
    // rest bounds are not affected by later poses
    assert_eq!(asset.bounds.min, Vec3::new(0.0, 1.0, 0.0));
}

#[test]
fn unreachable_and_cyclic_nodes_are_handled() {
    let mut a = NodeData::leaf(Some(0));
    a.children = vec![1];
    let mut b = NodeData::leaf(None);
    b.children = vec![0];
    let orphan = NodeData::leaf(Some(0));
    let asset = ModelAsset::new(vec![a, b, orphan], vec![0], vec![triangle_mesh()], vec![], vec![]);
    let world = asset.world_transforms(&PoseOverrides::default());
    assert_eq!(world[0], Some(Mat4::IDENTITY));
    assert_eq!(world[1], Some(Mat4::IDENTITY));
    assert_eq!(world[2], None);
    assert_eq!(asset.bounds.max, Vec3::new(1.0, 1.0, 0.0));
}

#[test]
fn degenerate_bounds_scale_safely() {
    assert_eq!(Bounds::EMPTY.max_dimension(), 1.0);
    let flat = Bounds::from_points([Vec3::ZERO, Vec3::ZERO]);
    assert_eq!(flat.max_dimension(), 1.0);
    assert_eq!(fit_scale(6.6, &flat), 6.6);
    let tall = Bounds::from_points([Vec3::ZERO, Vec3::new(1.0, 4.0, 2.0)]);
    assert_eq!(fit_scale(6.6, &tall), 1.65);
}

#[test]
fn group_moves_asset_centre_to_its_origin() {
    let asset = two_level_asset();
    let mut group = ModelGroup::centered_on(&asset.bounds);
    group.position = Vec3::new(3.0, 0.0, 0.0);
    group.scale = Vec3::splat(2.0);
    let centre = group.matrix().transform_point3(asset.bounds.center());
    assert!((centre - Vec3::new(3.0, 0.0, 0.0)).length() < 1e-6);
}

#[test]
fn generated_normals_face_the_winding() {
    let normals = smooth_normals(&TRIANGLE, &[0, 1, 2]);
    assert_eq!(normals, vec![[0.0, 0.0, 1.0]; 3]);
    // out-of-range indices are skipped
    let normals = smooth_normals(&TRIANGLE, &[0, 1, 9]);
    assert_eq!(normals[0], [0.0, 1.0, 0.0]);
}

fn translation_clip(interpolation: Interpolation, values: Vec<Vec3>) -> Clip {
    Clip::new(
        Some("fly".into()),
        vec![Channel {
            node: 0,
            interpolation,
            times: vec![0.0, 1.0],
            values: ChannelValues::Translation(values),
        }],
    )
}

#[test]
fn clip_sampling_modes() {
    let ends = vec![Vec3::ZERO, Vec3::new(2.0, 0.0, 0.0)];
    let linear = translation_clip(Interpolation::Linear, ends.clone());
    assert_eq!(linear.duration, 1.0);
    assert_eq!(linear.sample(0.5)[&0].translation, Some(Vec3::new(1.0, 0.0, 0.0)));
    assert_eq!(linear.sample(5.0)[&0].translation, Some(Vec3::new(2.0, 0.0, 0.0)));

    let step = translation_clip(Interpolation::Step, ends);
    assert_eq!(step.sample(0.99)[&0].translation, Some(Vec3::ZERO));

    // (in-tangent, value, out-tangent) per key, flat tangents
    let cubic = translation_clip(
        Interpolation::CubicSpline,
        vec![
            Vec3::ZERO,
            Vec3::ZERO,
            Vec3::ZERO,
            Vec3::ZERO,
            Vec3::new(2.0, 0.0, 0.0),
            Vec3::ZERO,
        ],
    );
    let mid = cubic.sample(0.5)[&0].translation.unwrap();
    assert!((mid - Vec3::new(1.0, 0.0, 0.0)).length() < 1e-6);
}

#[test]
fn rotation_channels_slerp() {
    let quarter = Quat::from_rotation_y(std::f32::consts::FRAC_PI_2);
    let clip = Clip::new(
        None,
        vec![Channel {
            node: 3,
            interpolation: Interpolation::Linear,
            times: vec![0.0, 2.0],
            values: ChannelValues::Rotation(vec![Quat::IDENTITY, quarter]),
        }],
    );
    let q = clip.sample(1.0)[&3].rotation.unwrap();
    assert!(q.angle_between(Quat::from_rotation_y(std::f32::consts::FRAC_PI_4)) < 1e-4);
}

#[test]
fn clip_player_loops_with_time_scale() {
    let mut player = ClipPlayer::new(0, 2.0, 0.5);
    player.advance(3.0);
    assert!((player.time() - 1.5).abs() < 1e-6);
    player.advance(2.0);
    assert!((player.time() - 0.5).abs() < 1e-6);

    let mut still = ClipPlayer::new(0, 0.0, 1.0);
    still.advance(1.0);
    assert_eq!(still.time(), 0.0);
}

fn glb(json: &str, bin: &[u8]) -> Vec<u8> {
    let mut json = json.as_bytes().to_vec();
    while json.len() % 4 != 0 {
        json.push(b' ');
    }
    let mut bin = bin.to_vec();
    while bin.len() % 4 != 0 {
        bin.push(0);
    }
    let total = 12 + 8 + json.len() + 8 + bin.len();
    let mut out = Vec::with_capacity(total);
    out.extend_from_slice(b"glTF");
    out.extend_from_slice(&2u32.to_le_bytes());
    out.extend_from_slice(&(total as u32).to_le_bytes());
    out.extend_from_slice(&(json.len() as u32).to_le_bytes());
    out.extend_from_slice(b"JSON");
    out.extend_from_slice(&json);
    out.extend_from_slice(&(bin.len() as u32).to_le_bytes());
    out.extend_from_slice(b"BIN\0");
    out.extend_from_slice(&bin);
    out
}

fn floats(values: &[f32]) -> Vec<u8> {
    values.iter().flat_map(|v| v.to_le_bytes()).collect()
}

const ANIMATED_TRIANGLE: &str = r#"{
  "asset": {"version": "2.0"},
  "scene": 0,
  "scenes": [{"nodes": [0]}],
  "nodes": [{"mesh": 0, "translation": [1.0, 0.0, 0.0]}],
  "meshes": [{"primitives": [{"attributes": {"POSITION": 0}}]}],
  "accessors": [
    {"bufferView": 0, "componentType": 5126, "count": 3, "type": "VEC3",
     "min": [0.0, 0.0, 0.0], "max": [1.0, 1.0, 0.0]},
    {"bufferView": 1, "componentType": 5126, "count": 2, "type": "SCALAR",
     "min": [0.0], "max": [1.0]},
    {"bufferView": 2, "componentType": 5126, "count": 2, "type": "VEC3"}
  ],
  "bufferViews": [
    {"buffer": 0, "byteOffset": 0, "byteLength": 36},
    {"buffer": 0, "byteOffset": 36, "byteLength": 8},
    {"buffer": 0, "byteOffset": 44, "byteLength": 24}
  ],
  "buffers": [{"byteLength": 68}],
  "animations": [{
    "name": "fly",
    "channels": [{"sampler": 0, "target": {"node": 0, "path": "translation"}}],
    "samplers": [{"input": 1, "output": 2, "interpolation": "LINEAR"}]
  }]
}"#;

#[test]
fn loads_binary_gltf() {
    let mut bin = floats(&[0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0, 0.0]);
    bin.extend(floats(&[0.0, 1.0]));
    bin.extend(floats(&[0.0, 0.0, 0.0, 0.0, 2.0, 0.0]));
    let asset = ModelAsset::from_glb(&glb(ANIMATED_TRIANGLE, &bin)).unwrap();

    assert_eq!(asset.roots, vec![0]);
    assert_eq!(asset.meshes[0].primitives[0].indices, vec![0, 1, 2]);
    // normals were generated from the winding
    assert_eq!(asset.meshes[0].primitives[0].normals[0], [0.0, 0.0, 1.0]);
    assert_eq!(asset.bounds.min, Vec3::new(1.0, 0.0, 0.0));
    assert_eq!(asset.bounds.max, Vec3::new(2.0, 1.0, 0.0));

    assert!(asset.has_clips());
    let clip = &asset.clips[0];
    assert_eq!(clip.name.as_deref(), Some("fly"));
    assert_eq!(clip.duration, 1.0);
    assert_eq!(clip.sample(0.5)[&0].translation, Some(Vec3::new(0.0, 1.0, 0.0)));
}

#[test]
fn rejects_garbage() {
    assert!(matches!(
        ModelAsset::from_glb(b"definitely not a model"),
        Err(AssetError::Gltf(_))
    ));
}
