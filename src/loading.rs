use crate::constants::{HIDDEN_CLASS, LOADING_SCREEN_ID};
use portfolio_core::loading::{LoadingFade, LoadingPhase};
use wasm_bindgen::JsCast;
use web_sys as web;

/// Drives the `#loading-screen` fade from the tween ticker.
pub struct LoadingScreen {
    el: Option<web::HtmlElement>,
    fade: LoadingFade,
    last: Option<LoadingPhase>,
}

impl LoadingScreen {
    pub fn new(document: &web::Document) -> Self {
        let el = document
            .get_element_by_id(LOADING_SCREEN_ID)
            .and_then(|el| el.dyn_into::<web::HtmlElement>().ok());
        if el.is_none() {
            log::warn!("[loading] #{LOADING_SCREEN_ID} not found");
        }
        Self {
            el,
            fade: LoadingFade::default(),
            last: None,
        }
    }

    pub fn is_done(&self) -> bool {
        self.el.is_none() || self.last == Some(LoadingPhase::Hidden)
    }

    pub fn update(&mut self, elapsed: f32) {
        let Some(el) = &self.el else {
            return;
        };
        let phase = self.fade.phase(elapsed);
        if self.last == Some(phase) {
            return;
        }
        match phase {
            LoadingPhase::Visible => {}
            LoadingPhase::Fading(opacity) => {
                _ = el.style().set_property("opacity", &opacity.to_string());
            }
            LoadingPhase::Hidden => hide(el),
        }
        self.last = Some(phase);
    }
}

#[inline]
fn hide(el: &web::HtmlElement) {
    _ = el.class_list().add_1(HIDDEN_CLASS);
    // fallback for pages without the class
    let style = el.style();
    _ = style.set_property("opacity", "0");
    _ = style.set_property("display", "none");
    log::info!("[loading] hidden");
}
