//! Presentational page widgets. Each initializer looks up its elements and
//! quietly does nothing when they are absent.

pub mod contact;
pub mod nav;
pub mod slider;
pub mod ticker;

use hero_core::SiteConfig;
use web_sys as web;

pub fn init_all(document: &web::Document, config: &SiteConfig) {
    ticker::init(document);
    nav::init(document);
    contact::init(document);
    for slider_config in &config.sliders {
        if slider::init(document, slider_config).is_none() {
            log::info!("[slider] {} not on this page", slider_config.container_selector);
        }
    }
}
