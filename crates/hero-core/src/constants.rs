// Shared tuning constants for the hero scene and page widgets.

// Breakpoint thresholds (CSS pixels, inclusive upper bounds)
pub const MOBILE_MAX_WIDTH: f64 = 768.0;
pub const TABLET_MAX_WIDTH: f64 = 1024.0;

// Resize debounce: changes smaller than both deltas are treated as browser chrome
pub const RESIZE_MIN_WIDTH_DELTA: f64 = 60.0;
pub const RESIZE_MIN_HEIGHT_DELTA: f64 = 80.0;

// Breakpoint-change adjustments
pub const RESIZE_TWEEN_SEC: f32 = 0.5;

// Entry pose of the model group before the glide-in
pub const ENTRY_ROTATION: [f32; 3] = [0.05, std::f32::consts::FRAC_PI_2, 0.05];
// Resting rotation reached by the entry tween
pub const REST_ROTATION: [f32; 3] = [0.02, 0.0, -0.02];

// Scroll rotation is offset from the resting tilt
pub const SCROLL_ROTATION_BASE: f32 = 0.02;
// Number of equal progress segments in the zigzag scroll path
pub const SCROLL_SEGMENTS: usize = 6;

// Slider behaviour
pub const SLIDER_TRANSITION_MS: f64 = 700.0; // navigation lock after each move
pub const SWIPE_MIN_DISTANCE_PX: f64 = 50.0;

// Contact form feedback
pub const FORM_RESET_MS: i32 = 3000;
pub const FOCUS_SCROLL_DELAY_MS: i32 = 300;

// Renderer surface
pub const MAX_PIXEL_RATIO: f64 = 2.0;
pub const LIGHT_POSITION: [f32; 3] = [300.0, 400.0, 200.0];

// Tween clock: a gap longer than the threshold (tab in background) advances
// tweens by a single small step instead of jumping to the end
pub const TWEEN_LAG_THRESHOLD_SEC: f32 = 0.5;
pub const TWEEN_LAG_STEP_SEC: f32 = 0.033;
