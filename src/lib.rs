#![cfg(target_arch = "wasm32")]
use hero_core::SiteConfig;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod constants;
mod dom;
mod events;
mod frame;
mod loader;
mod render;
mod scene;
mod widgets;

use constants::{CONTAINER_ID, MODELS_ATTR};

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("hero-web starting");

    let document = dom::window_document().ok_or_else(|| JsValue::from_str("no document"))?;
    dom::when_ready(&document, || {
        spawn_local(async move {
            if let Err(e) = init().await {
                log::error!("init error: {:?}", e);
            }
        });
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let container = document.get_element_by_id(CONTAINER_ID);
    let models_attr = container.as_ref().and_then(|c| c.get_attribute(MODELS_ATTR));
    let config = SiteConfig::default().with_model_override(models_attr.as_deref());

    widgets::init_all(&document, &config);

    let Some(container) = container else {
        log::warn!("[scene] no #{} on this page, hero disabled", CONTAINER_ID);
        return Ok(());
    };

    let scene = Rc::new(RefCell::new(
        scene::Scene::mount(&window, &document, &container).await?,
    ));
    events::wire_scroll(&window, scene.clone());
    events::wire_resize(&window, &document, scene.clone());
    frame::start_loop(scene.clone());

    if !scene.borrow().has_renderer() {
        log::warn!("[scene] no renderer, skipping model load");
        return Ok(());
    }
    if let Some(loaded) = loader::load_model(&config.model_candidates).await {
        log::info!(
            "[scene] using {} (candidate {})",
            loaded.location,
            loaded.index
        );
        scene.borrow_mut().attach(loaded.value);
    }
    Ok(())
}
