//! The mounted hero scene: controller, canvas, GPU state and loaded asset.

use crate::dom;
use crate::frame;
use crate::render::{FrameInput, GpuState};
use hero_core::clip::PoseOverrides;
use hero_core::constants::MAX_PIXEL_RATIO;
use hero_core::{HeroController, ModelAsset, ResizeOutcome, ViewportSize};
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct Scene {
    pub controller: HeroController,
    canvas: web::HtmlCanvasElement,
    gpu: Option<GpuState>,
    asset: Option<ModelAsset>,
}

impl Scene {
    /// Create the canvas inside `container`, size it to the viewport and
    /// bring up the renderer. A missing WebGPU adapter is not fatal: the
    /// scene keeps running without drawing.
    pub async fn mount(
        window: &web::Window,
        document: &web::Document,
        container: &web::Element,
    ) -> anyhow::Result<Self> {
        let canvas: web::HtmlCanvasElement = document
            .create_element("canvas")
            .map_err(|e| anyhow::anyhow!("{:?}", e))?
            .dyn_into::<web::HtmlCanvasElement>()
            .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;
        container
            .append_child(&canvas)
            .map_err(|e| anyhow::anyhow!("{:?}", e))?;

        let (w, h) = dom::viewport_size(window);
        let size = ViewportSize::new(w, h);
        dom::sync_canvas_size(&canvas, size.width, size.height, MAX_PIXEL_RATIO);

        let controller = HeroController::new(size);
        let gpu = frame::init_gpu(&canvas).await;
        Ok(Self {
            controller,
            canvas,
            gpu,
            asset: None,
        })
    }

    pub fn has_renderer(&self) -> bool {
        self.gpu.is_some()
    }

    pub fn attach(&mut self, asset: ModelAsset) {
        if let Some(gpu) = &mut self.gpu {
            gpu.upload_model(&asset);
        }
        self.controller.attach_asset(&asset);
        self.asset = Some(asset);
    }

    pub fn apply_resize(&mut self, outcome: ResizeOutcome) {
        let ResizeOutcome::Applied { size, .. } = outcome else {
            return;
        };
        let (w, h) = dom::sync_canvas_size(&self.canvas, size.width, size.height, MAX_PIXEL_RATIO);
        if let Some(gpu) = &mut self.gpu {
            gpu.resize_if_needed(w, h);
        }
    }

    pub fn frame(&mut self, now_ms: f64) {
        if self.controller.tick(now_ms).is_none() {
            return;
        }
        let Some(gpu) = &mut self.gpu else {
            return;
        };

        let pose = match (&self.asset, self.controller.clip_player()) {
            (Some(asset), Some(player)) => asset
                .clips
                .get(player.clip)
                .map(|clip| clip.sample(player.time()))
                .unwrap_or_default(),
            _ => PoseOverrides::default(),
        };
        let input = FrameInput {
            view_proj: self.controller.camera().view_projection(),
            lighting: self.controller.lighting(),
            group: self.controller.model().map(|m| m.matrix()),
            asset: self.asset.as_ref(),
            pose: &pose,
        };
        match gpu.render(&input) {
            Ok(()) => {}
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => gpu.reconfigure(),
            Err(e) => log::error!("render error: {:?}", e),
        }
    }
}
