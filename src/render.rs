use crate::constants::{CLEAR_RGBA, LIGHT_RGB};
use glam::{Mat4, Vec3};
use hero_core::breakpoint::LightingParams;
use hero_core::clip::PoseOverrides;
use hero_core::constants::LIGHT_POSITION;
use hero_core::ModelAsset;
use web_sys as web;

mod helpers;
mod mesh;

use mesh::{GpuModel, MaterialContext, ObjectUniforms};

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub(crate) struct GlobalUniforms {
    view_proj: [[f32; 4]; 4],
    light_dir: [f32; 4],
    light_color: [f32; 4],
    ambient: [f32; 4],
}

impl GlobalUniforms {
    fn new(view_proj: Mat4, lighting: LightingParams) -> Self {
        let dir = Vec3::from(LIGHT_POSITION).normalize_or_zero();
        let [r, g, b] = LIGHT_RGB;
        let d = lighting.directional_intensity;
        let a = lighting.ambient_intensity;
        Self {
            view_proj: view_proj.to_cols_array_2d(),
            light_dir: [dir.x, dir.y, dir.z, 0.0],
            light_color: [r * d, g * d, b * d, 1.0],
            ambient: [r * a, g * a, b * a, 1.0],
        }
    }
}

/// Everything the renderer needs for one frame, borrowed from the scene.
pub struct FrameInput<'a> {
    pub view_proj: Mat4,
    pub lighting: LightingParams,
    /// Pivot group transform; `None` until a model is attached.
    pub group: Option<Mat4>,
    pub asset: Option<&'a ModelAsset>,
    pub pose: &'a PoseOverrides,
}

pub struct GpuState {
    surface: wgpu::Surface<'static>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,
    pipeline: wgpu::RenderPipeline,
    globals_buffer: wgpu::Buffer,
    globals_bind_group: wgpu::BindGroup,
    object_layout: wgpu::BindGroupLayout,
    material_layout: wgpu::BindGroupLayout,
    sampler: wgpu::Sampler,
    _white_tex: wgpu::Texture,
    white_view: wgpu::TextureView,
    _depth_tex: wgpu::Texture,
    depth_view: wgpu::TextureView,
    model: Option<GpuModel>,
    width: u32,
    height: u32,
    clear_color: wgpu::Color,
}

impl GpuState {
    pub async fn new(canvas: &web::HtmlCanvasElement) -> anyhow::Result<Self> {
        let width = canvas.width().max(1);
        let height = canvas.height().max(1);

        let instance = wgpu::Instance::default();
        let surface = instance.create_surface(wgpu::SurfaceTarget::Canvas(canvas.clone()))?;
        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::HighPerformance,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .ok_or_else(|| anyhow::anyhow!("No WebGPU adapter"))?;
        let (device, queue) = adapter
            .request_device(
                &wgpu::DeviceDescriptor {
                    required_features: wgpu::Features::empty(),
                    required_limits: wgpu::Limits::default(),
                    memory_hints: wgpu::MemoryHints::Performance,
                    label: None,
                },
                None,
            )
            .await
            .map_err(|e| anyhow::anyhow!(format!("request_device error: {:?}", e)))?;
        let caps = surface.get_capabilities(&adapter);
        let format = caps
            .formats
            .iter()
            .copied()
            .find(|f| {
                matches!(
                    f,
                    wgpu::TextureFormat::Bgra8UnormSrgb | wgpu::TextureFormat::Rgba8UnormSrgb
                )
            })
            .or_else(|| caps.formats.first().copied())
            .ok_or_else(|| anyhow::anyhow!("surface reports no formats"))?;
        // transparent canvas needs premultiplied compositing
        let alpha_mode = if caps
            .alpha_modes
            .contains(&wgpu::CompositeAlphaMode::PreMultiplied)
        {
            wgpu::CompositeAlphaMode::PreMultiplied
        } else {
            caps.alpha_modes
                .first()
                .copied()
                .unwrap_or(wgpu::CompositeAlphaMode::Auto)
        };
        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format,
            width,
            height,
            present_mode: wgpu::PresentMode::Fifo,
            alpha_mode,
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &config);
        log::info!(
            "[render] surface {}x{} format={:?} alpha={:?}",
            width,
            height,
            format,
            alpha_mode
        );

        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("hero_shader"),
            source: wgpu::ShaderSource::Wgsl(hero_core::HERO_WGSL.into()),
        });

        let globals_layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("globals_bgl"),
            entries: &[helpers::uniform_layout_entry(
                0,
                wgpu::ShaderStages::VERTEX_FRAGMENT,
            )],
        });
        let object_layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("object_bgl"),
            entries: &[helpers::uniform_layout_entry(0, wgpu::ShaderStages::VERTEX)],
        });
        let material_layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("material_bgl"),
            entries: &[
                helpers::uniform_layout_entry(0, wgpu::ShaderStages::FRAGMENT),
                wgpu::BindGroupLayoutEntry {
                    binding: 1,
                    visibility: wgpu::ShaderStages::FRAGMENT,
                    ty: wgpu::BindingType::Texture {
                        sample_type: wgpu::TextureSampleType::Float { filterable: true },
                        view_dimension: wgpu::TextureViewDimension::D2,
                        multisampled: false,
                    },
                    count: None,
                },
                wgpu::BindGroupLayoutEntry {
                    binding: 2,
                    visibility: wgpu::ShaderStages::FRAGMENT,
                    ty: wgpu::BindingType::Sampler(wgpu::SamplerBindingType::Filtering),
                    count: None,
                },
            ],
        });
        let pl = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("hero_pl"),
            bind_group_layouts: &[&globals_layout, &object_layout, &material_layout],
            push_constant_ranges: &[],
        });
        let pipeline =
            helpers::make_mesh_pipeline(&device, &pl, &shader, mesh::Vertex::layout(), format);

        let globals_buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("globals"),
            size: std::mem::size_of::<GlobalUniforms>() as u64,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });
        let globals_bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("globals_bg"),
            layout: &globals_layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: globals_buffer.as_entire_binding(),
            }],
        });

        let sampler = device.create_sampler(&wgpu::SamplerDescriptor {
            label: Some("base_color_sampler"),
            address_mode_u: wgpu::AddressMode::Repeat,
            address_mode_v: wgpu::AddressMode::Repeat,
            address_mode_w: wgpu::AddressMode::Repeat,
            mag_filter: wgpu::FilterMode::Linear,
            min_filter: wgpu::FilterMode::Linear,
            mipmap_filter: wgpu::FilterMode::Nearest,
            ..Default::default()
        });
        let (white_tex, white_view) =
            helpers::create_rgba_texture(&device, &queue, "white_1x1", 1, 1, &[255; 4]);
        let (depth_tex, depth_view) = helpers::create_depth_texture(&device, width, height);

        let [r, g, b, a] = CLEAR_RGBA;
        Ok(Self {
            surface,
            device,
            queue,
            config,
            pipeline,
            globals_buffer,
            globals_bind_group,
            object_layout,
            material_layout,
            sampler,
            _white_tex: white_tex,
            white_view,
            _depth_tex: depth_tex,
            depth_view,
            model: None,
            width,
            height,
            clear_color: wgpu::Color { r, g, b, a },
        })
    }

    pub fn upload_model(&mut self, asset: &ModelAsset) {
        self.model = Some(mesh::upload_model(
            &self.device,
            &self.queue,
            asset,
            &self.object_layout,
            MaterialContext {
                layout: &self.material_layout,
                sampler: &self.sampler,
                fallback: &self.white_view,
            },
        ));
    }

    pub fn reconfigure(&mut self) {
        self.surface.configure(&self.device, &self.config);
    }

    pub fn resize_if_needed(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }
        if width != self.width || height != self.height {
            self.width = width;
            self.height = height;
            self.config.width = width;
            self.config.height = height;
            self.surface.configure(&self.device, &self.config);
            let (tex, view) = helpers::create_depth_texture(&self.device, width, height);
            self._depth_tex = tex;
            self.depth_view = view;
        }
    }

    pub fn render(&mut self, input: &FrameInput<'_>) -> Result<(), wgpu::SurfaceError> {
        self.queue.write_buffer(
            &self.globals_buffer,
            0,
            bytemuck::bytes_of(&GlobalUniforms::new(input.view_proj, input.lighting)),
        );

        let mut world = Vec::new();
        let draw_model = match (&self.model, input.asset, input.group) {
            (Some(model), Some(asset), Some(group)) => {
                world = asset.world_transforms(input.pose);
                for draw in &model.draws {
                    let Some(node) = world.get(draw.node).copied().flatten() else {
                        continue;
                    };
                    self.queue.write_buffer(
                        &draw.uniform_buffer,
                        0,
                        bytemuck::bytes_of(&ObjectUniforms::from_model(group * node)),
                    );
                }
                Some(model)
            }
            _ => None,
        };

        let frame = self.surface.get_current_texture()?;
        let view = frame
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());
        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("encoder"),
            });
        {
            let mut rpass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("hero_pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(self.clear_color),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: Some(wgpu::RenderPassDepthStencilAttachment {
                    view: &self.depth_view,
                    depth_ops: Some(wgpu::Operations {
                        load: wgpu::LoadOp::Clear(1.0),
                        store: wgpu::StoreOp::Discard,
                    }),
                    stencil_ops: None,
                }),
                timestamp_writes: None,
                occlusion_query_set: None,
            });
            if let Some(model) = draw_model {
                rpass.set_pipeline(&self.pipeline);
                rpass.set_bind_group(0, &self.globals_bind_group, &[]);
                for draw in &model.draws {
                    // nodes outside the scene hierarchy are not drawn
                    if !matches!(world.get(draw.node), Some(Some(_))) {
                        continue;
                    }
                    let Some(prims) = model.meshes.get(draw.mesh) else {
                        continue;
                    };
                    rpass.set_bind_group(1, &draw.bind_group, &[]);
                    for prim in prims {
                        rpass.set_bind_group(2, &prim.material, &[]);
                        rpass.set_vertex_buffer(0, prim.vertex_buffer.slice(..));
                        rpass.set_index_buffer(prim.index_buffer.slice(..), wgpu::IndexFormat::Uint32);
                        rpass.draw_indexed(0..prim.index_count, 0, 0..1);
                    }
                }
            }
        }

        self.queue.submit(Some(encoder.finish()));
        frame.present();
        Ok(())
    }
}
