//! Binary glTF extraction into plain, GPU-agnostic data.
//!
//! Only what the hero scene needs is kept: triangle geometry with normals
//! and UVs, base colour (factor and texture), the node hierarchy of the
//! default scene, and TRS animation channels.

use crate::clip::{Channel, ChannelValues, Clip, Interpolation, PoseOverrides};
use crate::model::Bounds;
use glam::{Mat4, Quat, Vec3};
use gltf::animation::util::ReadOutputs;

#[derive(Debug, thiserror::Error)]
pub enum AssetError {
    #[error("glTF parse error: {0}")]
    Gltf(#[from] gltf::Error),
    #[error("asset has no scene")]
    NoScene,
    #[error("asset has no triangle geometry")]
    NoGeometry,
}

#[derive(Clone, Debug, PartialEq)]
pub struct MeshPrimitive {
    pub positions: Vec<[f32; 3]>,
    pub normals: Vec<[f32; 3]>,
    pub uvs: Vec<[f32; 2]>,
    pub indices: Vec<u32>,
    pub base_color: [f32; 4],
    pub base_color_image: Option<usize>,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct MeshData {
    pub primitives: Vec<MeshPrimitive>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct NodeData {
    pub translation: Vec3,
    pub rotation: Quat,
    pub scale: Vec3,
    pub mesh: Option<usize>,
    pub children: Vec<usize>,
}

impl NodeData {
    pub fn leaf(mesh: Option<usize>) -> Self {
        Self {
            translation: Vec3::ZERO,
            rotation: Quat::IDENTITY,
            scale: Vec3::ONE,
            mesh,
            children: Vec::new(),
        }
    }
}

/// Tightly packed RGBA8 pixels.
#[derive(Clone, Debug, PartialEq)]
pub struct ImageData {
    pub width: u32,
    pub height: u32,
    pub rgba: Vec<u8>,
}

impl ImageData {
    pub fn white() -> Self {
        Self {
            width: 1,
            height: 1,
            rgba: vec![255; 4],
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ModelAsset {
    pub nodes: Vec<NodeData>,
    pub roots: Vec<usize>,
    pub meshes: Vec<MeshData>,
    pub images: Vec<ImageData>,
    pub clips: Vec<Clip>,
    /// Rest-pose bounds of all geometry, computed once at load.
    pub bounds: Bounds,
}

impl ModelAsset {
    /// Assemble an asset and compute its rest-pose bounds.
    pub fn new(
        nodes: Vec<NodeData>,
        roots: Vec<usize>,
        meshes: Vec<MeshData>,
        images: Vec<ImageData>,
        clips: Vec<Clip>,
    ) -> Self {
        let mut asset = Self {
            nodes,
            roots,
            meshes,
            images,
            clips,
            bounds: Bounds::EMPTY,
        };
        asset.bounds = asset.compute_bounds(&PoseOverrides::default());
        asset
    }

    pub fn from_glb(bytes: &[u8]) -> Result<Self, AssetError> {
        let (document, buffers, images) = gltf::import_slice(bytes)?;
        let scene = document
            .default_scene()
            .or_else(|| document.scenes().next())
            .ok_or(AssetError::NoScene)?;

        let meshes: Vec<MeshData> = document
            .meshes()
            .map(|mesh| read_mesh(&mesh, &buffers))
            .collect();
        if meshes.iter().all(|m| m.primitives.is_empty()) {
            return Err(AssetError::NoGeometry);
        }

        let nodes = document
            .nodes()
            .map(|node| {
                let (t, r, s) = node.transform().decomposed();
                NodeData {
                    translation: Vec3::from(t),
                    rotation: Quat::from_array(r),
                    scale: Vec3::from(s),
                    mesh: node.mesh().map(|m| m.index()),
                    children: node.children().map(|c| c.index()).collect(),
                }
            })
            .collect();
        let roots = scene.nodes().map(|n| n.index()).collect();
        let images = images.into_iter().map(convert_image).collect();
        let clips = document
            .animations()
            .map(|anim| read_clip(&anim, &buffers))
            .collect();

        Ok(Self::new(nodes, roots, meshes, images, clips))
    }

    pub fn has_clips(&self) -> bool {
        !self.clips.is_empty()
    }

    /// World matrix of every node, with animated channels applied on top of
    /// the rest pose. Nodes not reachable from the scene roots are `None`.
    pub fn world_transforms(&self, pose: &PoseOverrides) -> Vec<Option<Mat4>> {
        let mut world = vec![None; self.nodes.len()];
        let mut stack: Vec<(usize, Mat4)> =
            self.roots.iter().rev().map(|&r| (r, Mat4::IDENTITY)).collect();
        while let Some((index, parent)) = stack.pop() {
            let Some(node) = self.nodes.get(index) else {
                continue;
            };
            if world[index].is_some() {
                // malformed hierarchy (shared child or cycle)
                continue;
            }
            let anim = pose.get(&index).copied().unwrap_or_default();
            let local = Mat4::from_scale_rotation_translation(
                anim.scale.unwrap_or(node.scale),
                anim.rotation.unwrap_or(node.rotation),
                anim.translation.unwrap_or(node.translation),
            );
            let m = parent * local;
            world[index] = Some(m);
            stack.extend(node.children.iter().rev().map(|&c| (c, m)));
        }
        world
    }

    pub fn compute_bounds(&self, pose: &PoseOverrides) -> Bounds {
        let world = self.world_transforms(pose);
        let mut bounds = Bounds::EMPTY;
        for (index, node) in self.nodes.iter().enumerate() {
            let (Some(m), Some(mesh)) = (world[index], node.mesh.and_then(|m| self.meshes.get(m)))
            else {
                continue;
            };
            for prim in &mesh.primitives {
                for p in &prim.positions {
                    bounds.include(m.transform_point3(Vec3::from(*p)));
                }
            }
        }
        bounds
    }
}

fn read_mesh(mesh: &gltf::Mesh, buffers: &[gltf::buffer::Data]) -> MeshData {
    let mut primitives = Vec::new();
    for primitive in mesh.primitives() {
        if primitive.mode() != gltf::mesh::Mode::Triangles {
            log::warn!(
                "[asset] skipping {:?} primitive in mesh {}",
                primitive.mode(),
                mesh.index()
            );
            continue;
        }
        let reader = primitive.reader(|buffer| Some(&buffers[buffer.index()]));
        let Some(positions) = reader.read_positions() else {
            continue;
        };
        let positions: Vec<[f32; 3]> = positions.collect();
        let indices: Vec<u32> = match reader.read_indices() {
            Some(ix) => ix.into_u32().collect(),
            None => (0..positions.len() as u32).collect(),
        };
        let normals = match reader.read_normals() {
            Some(n) => n.collect(),
            None => smooth_normals(&positions, &indices),
        };
        let uvs = match reader.read_tex_coords(0) {
            Some(tc) => tc.into_f32().collect(),
            None => vec![[0.0, 0.0]; positions.len()],
        };
        let pbr = primitive.material().pbr_metallic_roughness();
        primitives.push(MeshPrimitive {
            positions,
            normals,
            uvs,
            indices,
            base_color: pbr.base_color_factor(),
            base_color_image: pbr
                .base_color_texture()
                .map(|info| info.texture().source().index()),
        });
    }
    MeshData { primitives }
}

/// Area-weighted vertex normals for geometry that ships without them.
pub fn smooth_normals(positions: &[[f32; 3]], indices: &[u32]) -> Vec<[f32; 3]> {
    let mut acc = vec![Vec3::ZERO; positions.len()];
    for tri in indices.chunks_exact(3) {
        let [a, b, c] = [tri[0] as usize, tri[1] as usize, tri[2] as usize];
        if a >= positions.len() || b >= positions.len() || c >= positions.len() {
            continue;
        }
        let pa = Vec3::from(positions[a]);
        let n = (Vec3::from(positions[b]) - pa).cross(Vec3::from(positions[c]) - pa);
        acc[a] += n;
        acc[b] += n;
        acc[c] += n;
    }
    acc.into_iter()
        .map(|n| n.try_normalize().unwrap_or(Vec3::Y).to_array())
        .collect()
}

fn read_clip(anim: &gltf::Animation, buffers: &[gltf::buffer::Data]) -> Clip {
    let mut channels = Vec::new();
    for channel in anim.channels() {
        let reader = channel.reader(|buffer| Some(&buffers[buffer.index()]));
        let Some(inputs) = reader.read_inputs() else {
            continue;
        };
        let values = match reader.read_outputs() {
            Some(ReadOutputs::Translations(it)) => {
                ChannelValues::Translation(it.map(Vec3::from).collect())
            }
            Some(ReadOutputs::Rotations(r)) => {
                ChannelValues::Rotation(r.into_f32().map(Quat::from_array).collect())
            }
            Some(ReadOutputs::Scales(it)) => ChannelValues::Scale(it.map(Vec3::from).collect()),
            // morph target weights are not rendered
            _ => continue,
        };
        let interpolation = match channel.sampler().interpolation() {
            gltf::animation::Interpolation::Linear => Interpolation::Linear,
            gltf::animation::Interpolation::Step => Interpolation::Step,
            gltf::animation::Interpolation::CubicSpline => Interpolation::CubicSpline,
        };
        channels.push(Channel {
            node: channel.target().node().index(),
            interpolation,
            times: inputs.collect(),
            values,
        });
    }
    Clip::new(anim.name().map(str::to_owned), channels)
}

fn convert_image(image: gltf::image::Data) -> ImageData {
    use gltf::image::Format;
    let pixels = image.pixels;
    let rgba = match image.format {
        Format::R8G8B8A8 => pixels,
        Format::R8G8B8 => pixels
            .chunks_exact(3)
            .flat_map(|p| [p[0], p[1], p[2], 255])
            .collect(),
        Format::R8G8 => pixels
            .chunks_exact(2)
            .flat_map(|p| [p[0], p[0], p[0], p[1]])
            .collect(),
        Format::R8 => pixels.iter().flat_map(|&v| [v, v, v, 255]).collect(),
        other => {
            log::warn!("[asset] unsupported image format {:?}, using white", other);
            return ImageData::white();
        }
    };
    ImageData {
        width: image.width,
        height: image.height,
        rgba,
    }
}
