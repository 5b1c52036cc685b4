// Host-side tests for the web front-end constants.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}

use constants::*;

#[test]
#[allow(clippy::assertions_on_constants)]
fn rendering_constants_are_within_reasonable_bounds() {
    // Dynamic offsets need a power-of-two alignment
    assert!(UNIFORM_ALIGN.is_power_of_two());
    assert!(UNIFORM_ALIGN >= 256);

    // The default scene has five shapes
    assert!(MAX_SHAPES >= 5);

    assert!(SHININESS > 0.0);
    assert!(SPECULAR > 0.0 && SPECULAR < 1.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn ticker_runs_near_display_rate() {
    assert!(TICKER_INTERVAL_MS > 0 && TICKER_INTERVAL_MS <= 33);
    // A single catch-up step never exceeds a handful of frames
    assert!(MAX_TICK_DT_SEC > TICKER_INTERVAL_MS as f32 / 1000.0);
    assert!(MAX_TICK_DT_SEC <= 0.25);
}

#[test]
fn pixel_ratio_cap_is_retina() {
    assert_eq!(MAX_PIXEL_RATIO, 2.0);
}

#[test]
fn dom_hooks_match_page_markup() {
    assert_eq!(CANVAS_ID, "three-canvas");
    assert_eq!(LOADING_SCREEN_ID, "loading-screen");
    assert_eq!(NAV_LINK_SELECTOR, format!("[{NAV_SECTION_ATTR}]"));
    for selector in [
        SECTION_SELECTOR,
        PROJECT_CARD_SELECTOR,
        CONTACT_FORM_SELECTOR,
        SUBMIT_BUTTON_SELECTOR,
    ] {
        assert!(selector.starts_with('.'), "{selector} should be a class");
    }
    assert_ne!(ACTIVE_CLASS, HIDDEN_CLASS);
}
