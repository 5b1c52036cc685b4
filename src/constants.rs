// Page wiring and rendering constants for the web front-end.
//
// Kept free of web-sys/wgpu types so host tests can include this file.
// DOM hooks
pub const CANVAS_ID: &str = "three-canvas";
pub const LOADING_SCREEN_ID: &str = "loading-screen";
pub const NAV_LINK_SELECTOR: &str = "[data-section]";
pub const NAV_SECTION_ATTR: &str = "data-section";
pub const SECTION_SELECTOR: &str = ".section";
pub const PROJECT_CARD_SELECTOR: &str = ".project-card";
pub const CONTACT_FORM_SELECTOR: &str = ".contact-form";
pub const SUBMIT_BUTTON_SELECTOR: &str = ".btn";
pub const ACTIVE_CLASS: &str = "active";
pub const HIDDEN_CLASS: &str = "hidden";

// Canvas backing store
pub const MAX_PIXEL_RATIO: f64 = 2.0;

// Tween ticker
pub const TICKER_INTERVAL_MS: i32 = 16;
pub const MAX_TICK_DT_SEC: f32 = 0.1; // per-step cap for throttled background tabs

// Rendering
pub const UNIFORM_ALIGN: u64 = 256; // minUniformBufferOffsetAlignment guaranteed by WebGPU
pub const MAX_SHAPES: usize = 8;
pub const SHININESS: f32 = 30.0; // Phong specular exponent
pub const SPECULAR: f32 = 0.067; // 0x111111
