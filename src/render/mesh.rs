use super::helpers;
use glam::Mat4;
use hero_core::ModelAsset;
use wgpu;
use wgpu::util::DeviceExt;

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub(crate) struct Vertex {
    pub(crate) position: [f32; 3],
    pub(crate) normal: [f32; 3],
    pub(crate) uv: [f32; 2],
}

impl Vertex {
    const ATTRIBS: [wgpu::VertexAttribute; 3] =
        wgpu::vertex_attr_array![0 => Float32x3, 1 => Float32x3, 2 => Float32x2];

    pub(crate) fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<Vertex>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &Self::ATTRIBS,
        }
    }
}

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub(crate) struct ObjectUniforms {
    pub(crate) model: [[f32; 4]; 4],
    pub(crate) normal: [[f32; 4]; 4],
}

impl ObjectUniforms {
    pub(crate) fn from_model(model: Mat4) -> Self {
        Self {
            model: model.to_cols_array_2d(),
            normal: model.inverse().transpose().to_cols_array_2d(),
        }
    }
}

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub(crate) struct MaterialUniforms {
    pub(crate) base_color: [f32; 4],
}

pub(crate) struct GpuPrimitive {
    pub(crate) vertex_buffer: wgpu::Buffer,
    pub(crate) index_buffer: wgpu::Buffer,
    pub(crate) index_count: u32,
    pub(crate) material: wgpu::BindGroup,
}

/// One scene node that carries a mesh, with its own transform uniform.
pub(crate) struct GpuDraw {
    pub(crate) node: usize,
    pub(crate) mesh: usize,
    pub(crate) uniform_buffer: wgpu::Buffer,
    pub(crate) bind_group: wgpu::BindGroup,
}

pub(crate) struct GpuModel {
    pub(crate) meshes: Vec<Vec<GpuPrimitive>>,
    pub(crate) draws: Vec<GpuDraw>,
    // keep textures alive for the bind groups that view them
    _textures: Vec<wgpu::Texture>,
}

pub(crate) struct MaterialContext<'a> {
    pub(crate) layout: &'a wgpu::BindGroupLayout,
    pub(crate) sampler: &'a wgpu::Sampler,
    pub(crate) fallback: &'a wgpu::TextureView,
}

pub(crate) fn upload_model(
    device: &wgpu::Device,
    queue: &wgpu::Queue,
    asset: &ModelAsset,
    object_layout: &wgpu::BindGroupLayout,
    materials: MaterialContext<'_>,
) -> GpuModel {
    let mut textures = Vec::with_capacity(asset.images.len());
    let mut views = Vec::with_capacity(asset.images.len());
    for (i, image) in asset.images.iter().enumerate() {
        let (tex, view) = helpers::create_rgba_texture(
            device,
            queue,
            &format!("base_color_{i}"),
            image.width,
            image.height,
            &image.rgba,
        );
        textures.push(tex);
        views.push(view);
    }

    let meshes = asset
        .meshes
        .iter()
        .map(|mesh| {
            mesh.primitives
                .iter()
                .filter(|prim| !prim.indices.is_empty())
                .map(|prim| {
                    let vertices: Vec<Vertex> = prim
                        .positions
                        .iter()
                        .enumerate()
                        .map(|(i, p)| Vertex {
                            position: *p,
                            normal: prim.normals.get(i).copied().unwrap_or([0.0, 1.0, 0.0]),
                            uv: prim.uvs.get(i).copied().unwrap_or([0.0, 0.0]),
                        })
                        .collect();
                    let vertex_buffer =
                        device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
                            label: Some("hero_vertices"),
                            contents: bytemuck::cast_slice(&vertices),
                            usage: wgpu::BufferUsages::VERTEX,
                        });
                    let index_buffer =
                        device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
                            label: Some("hero_indices"),
                            contents: bytemuck::cast_slice(&prim.indices),
                            usage: wgpu::BufferUsages::INDEX,
                        });
                    let texture_view = prim
                        .base_color_image
                        .and_then(|i| views.get(i))
                        .unwrap_or(materials.fallback);
                    let material =
                        create_material_bind_group(device, &materials, prim.base_color, texture_view);
                    GpuPrimitive {
                        vertex_buffer,
                        index_buffer,
                        index_count: prim.indices.len() as u32,
                        material,
                    }
                })
                .collect()
        })
        .collect();

    let draws = asset
        .nodes
        .iter()
        .enumerate()
        .filter_map(|(node, data)| data.mesh.map(|mesh| (node, mesh)))
        .filter(|(_, mesh)| *mesh < asset.meshes.len())
        .map(|(node, mesh)| {
            let uniform_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
                label: Some("hero_object"),
                contents: bytemuck::bytes_of(&ObjectUniforms::from_model(Mat4::IDENTITY)),
                usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            });
            let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
                label: Some("hero_object_bg"),
                layout: object_layout,
                entries: &[wgpu::BindGroupEntry {
                    binding: 0,
                    resource: uniform_buffer.as_entire_binding(),
                }],
            });
            GpuDraw {
                node,
                mesh,
                uniform_buffer,
                bind_group,
            }
        })
        .collect::<Vec<_>>();

    log::info!(
        "[render] uploaded {} meshes, {} draws, {} textures",
        asset.meshes.len(),
        draws.len(),
        textures.len()
    );

    GpuModel {
        meshes,
        draws,
        _textures: textures,
    }
}

fn create_material_bind_group(
    device: &wgpu::Device,
    materials: &MaterialContext<'_>,
    base_color: [f32; 4],
    view: &wgpu::TextureView,
) -> wgpu::BindGroup {
    let uniforms = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
        label: Some("hero_material"),
        contents: bytemuck::bytes_of(&MaterialUniforms { base_color }),
        usage: wgpu::BufferUsages::UNIFORM,
    });
    device.create_bind_group(&wgpu::BindGroupDescriptor {
        label: Some("hero_material_bg"),
        layout: materials.layout,
        entries: &[
            wgpu::BindGroupEntry {
                binding: 0,
                resource: uniforms.as_entire_binding(),
            },
            wgpu::BindGroupEntry {
                binding: 1,
                resource: wgpu::BindingResource::TextureView(view),
            },
            wgpu::BindGroupEntry {
                binding: 2,
                resource: wgpu::BindingResource::Sampler(materials.sampler),
            },
        ],
    })
}
