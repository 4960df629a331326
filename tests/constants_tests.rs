// Host-side tests for web constants and core tuning values.
// The main crate is wasm-only, so we include the pure-Rust module directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}

use constants::*;
use hero_core::constants::*;

#[test]
fn backing_pixels_caps_device_ratio() {
    assert_eq!(backing_pixels(100.0, 1.0, MAX_PIXEL_RATIO), 100);
    assert_eq!(backing_pixels(100.0, 1.5, MAX_PIXEL_RATIO), 150);
    assert_eq!(backing_pixels(100.0, 3.0, MAX_PIXEL_RATIO), 200);
}

#[test]
fn backing_pixels_never_zero_and_ignores_bad_ratio() {
    assert_eq!(backing_pixels(0.0, 2.0, MAX_PIXEL_RATIO), 1);
    assert_eq!(backing_pixels(320.0, f64::NAN, MAX_PIXEL_RATIO), 320);
    assert_eq!(backing_pixels(320.0, 0.0, MAX_PIXEL_RATIO), 320);
}

#[test]
fn clear_color_is_fully_transparent() {
    assert_eq!(CLEAR_RGBA[3], 0.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn tuning_constants_are_consistent() {
    assert!(MOBILE_MAX_WIDTH < TABLET_MAX_WIDTH);
    assert!(RESIZE_MIN_WIDTH_DELTA > 0.0 && RESIZE_MIN_HEIGHT_DELTA > 0.0);
    assert!(SLIDER_TRANSITION_MS > 0.0);
    assert!(TWEEN_LAG_STEP_SEC < TWEEN_LAG_THRESHOLD_SEC);
    assert_eq!(ENTRY_ROTATION[1], std::f32::consts::FRAC_PI_2);
}

#[test]
fn selectors_are_non_empty() {
    for s in [
        CONTAINER_ID,
        MODELS_ATTR,
        LOGOS_TRACK_ID,
        MENU_TOGGLE_SELECTOR,
        NAV_SELECTOR,
        NAV_LINK_SELECTOR,
        CONTACT_FORM_SELECTOR,
        SUBMIT_SELECTOR,
        FORM_FIELD_SELECTOR,
    ] {
        assert!(!s.trim().is_empty());
    }
}
