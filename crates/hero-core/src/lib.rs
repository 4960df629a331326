//! Platform-free core of the hero front-end: responsive parameters, tweens,
//! scroll/resize reconciliation, glTF extraction, clip playback, slider state
//! and the controller tying them together.

pub mod asset;
pub mod breakpoint;
pub mod camera;
pub mod clip;
pub mod config;
pub mod constants;
pub mod controller;
pub mod easing;
pub mod frame;
pub mod loader;
pub mod model;
pub mod scroll;
pub mod slider;
pub mod tween;
pub mod viewport;

pub static HERO_WGSL: &str = include_str!("../shaders/hero.wgsl");

pub use asset::{AssetError, ModelAsset};
pub use breakpoint::{resolve_breakpoint, Breakpoint, BreakpointProfile};
pub use camera::Camera;
pub use config::SiteConfig;
pub use controller::{HeroController, ResizeOutcome, Stage};
pub use loader::{load_first, LoadError, Loaded};
pub use scroll::ScrollMetrics;
pub use slider::{SliderConfig, SliderRequest, SliderState};
pub use viewport::ViewportSize;
