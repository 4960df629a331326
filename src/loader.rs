use hero_core::{load_first, Loaded, ModelAsset};
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys as web;

async fn fetch_bytes(url: &str) -> anyhow::Result<Vec<u8>> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let response = JsFuture::from(window.fetch_with_str(url))
        .await
        .map_err(|e| anyhow::anyhow!("fetch failed: {:?}", e))?
        .dyn_into::<web::Response>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;
    if !response.ok() {
        anyhow::bail!("HTTP {}", response.status());
    }
    let buffer = JsFuture::from(
        response
            .array_buffer()
            .map_err(|e| anyhow::anyhow!("{:?}", e))?,
    )
    .await
    .map_err(|e| anyhow::anyhow!("read failed: {:?}", e))?;
    Ok(js_sys::Uint8Array::new(&buffer).to_vec())
}

async fn fetch_model(url: String) -> anyhow::Result<ModelAsset> {
    let bytes = fetch_bytes(&url).await?;
    log::info!("[loader] {} bytes from {}", bytes.len(), url);
    Ok(ModelAsset::from_glb(&bytes)?)
}

/// Fetch and parse the first candidate that works. Exhaustion is logged and
/// leaves the hero empty.
pub async fn load_model(candidates: &[String]) -> Option<Loaded<ModelAsset>> {
    match load_first(candidates, fetch_model).await {
        Ok(loaded) => Some(loaded),
        Err(e) => {
            log::warn!("[loader] {}", e);
            None
        }
    }
}
