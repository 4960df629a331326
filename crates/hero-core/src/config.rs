//! Page-level configuration: which assets to try and which sliders to wire.

use crate::slider::{SliderAxis, SliderConfig};

pub const DEFAULT_MODEL_CANDIDATES: &[&str] = &["img/stylized_ww1_plane.glb"];

#[derive(Clone, Debug, PartialEq)]
pub struct SiteConfig {
    /// Tried in order until one loads.
    pub model_candidates: Vec<String>,
    pub sliders: Vec<SliderConfig>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            model_candidates: DEFAULT_MODEL_CANDIDATES
                .iter()
                .map(|s| s.to_string())
                .collect(),
            sliders: vec![
                SliderConfig {
                    container_selector: ".slider-container",
                    track_selector: ".slider",
                    slide_selector: ".service-slide",
                    dots_selector: ".dots-container",
                    dot_class: "dot",
                    autoplay_ms_mobile: 3000,
                    autoplay_ms_desktop: 2000,
                    axis: SliderAxis::Vertical,
                },
                SliderConfig {
                    container_selector: ".what-we-do-container",
                    track_selector: "#wwdSlider",
                    slide_selector: ".wwd-slide",
                    dots_selector: ".wwd-dots-container",
                    dot_class: "wwd-dot",
                    autoplay_ms_mobile: 3500,
                    autoplay_ms_desktop: 2000,
                    axis: SliderAxis::Vertical,
                },
            ],
        }
    }
}

impl SiteConfig {
    /// Replace the candidate list from a comma separated attribute value.
    /// Blank entries are dropped; an override with no usable entry is ignored.
    pub fn with_model_override(mut self, raw: Option<&str>) -> Self {
        if let Some(list) = raw.map(parse_candidates).filter(|l| !l.is_empty()) {
            log::info!("[config] model candidates overridden: {:?}", list);
            self.model_candidates = list;
        }
        self
    }
}

pub fn parse_candidates(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_owned)
        .collect()
}
