// Page hooks and renderer tuning for the web front-end.
// Kept free of web-sys/wgpu types so host tests can include this file.

// Hero mount point and its optional asset override attribute
pub const CONTAINER_ID: &str = "container3D";
pub const MODELS_ATTR: &str = "data-models";

// Logo marquee
pub const LOGOS_TRACK_ID: &str = "logosTrack";

// Mobile navigation
pub const MENU_TOGGLE_SELECTOR: &str = ".menu-toggle";
pub const NAV_SELECTOR: &str = "header nav";
pub const NAV_LINK_SELECTOR: &str = "header nav a";
pub const NAV_OPEN_CLASS: &str = "show";

// Contact form
pub const CONTACT_FORM_SELECTOR: &str = ".contact-form";
pub const SUBMIT_SELECTOR: &str = "button[type=\"submit\"]";
pub const FORM_FIELD_SELECTOR: &str = "input, textarea";
pub const SENDING_LABEL: &str = "Sending...";

// Slider dots
pub const ACTIVE_CLASS: &str = "active";

// Canvas is cleared fully transparent so the page background shows through
pub const CLEAR_RGBA: [f64; 4] = [0.0, 0.0, 0.0, 0.0];

// Light colour (white); intensities come from the breakpoint profile
pub const LIGHT_RGB: [f32; 3] = [1.0, 1.0, 1.0];

/// Backing-store pixels for a CSS length at the given device pixel ratio,
/// with the ratio capped at `max_ratio`.
#[inline]
pub fn backing_pixels(css: f64, device_ratio: f64, max_ratio: f64) -> u32 {
    let ratio = if device_ratio.is_finite() && device_ratio > 0.0 {
        device_ratio.min(max_ratio)
    } else {
        1.0
    };
    ((css * ratio).round() as u32).max(1)
}
