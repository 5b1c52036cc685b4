use crate::constants::{CONTACT_FORM_SELECTOR, SUBMIT_BUTTON_SELECTOR};
use crate::dom;
use portfolio_core::form::{submission_steps, SubmitStep};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Contact form submit: prevent navigation and play the button feedback.
pub fn wire_contact_form(document: &web::Document) {
    let Some(form) = document
        .query_selector(CONTACT_FORM_SELECTOR)
        .ok()
        .flatten()
        .and_then(|el| el.dyn_into::<web::HtmlFormElement>().ok())
    else {
        log::warn!("[form] {CONTACT_FORM_SELECTOR} not found");
        return;
    };
    let form_for_submit = form.clone();
    let closure = Closure::wrap(Box::new(move |ev: web::Event| {
        ev.prevent_default();
        let Some(button) = form_for_submit
            .query_selector(SUBMIT_BUTTON_SELECTOR)
            .ok()
            .flatten()
            .and_then(|el| el.dyn_into::<web::HtmlButtonElement>().ok())
        else {
            return;
        };
        if button.disabled() {
            return;
        }
        let original = button.text_content().unwrap_or_default();
        log::info!("[form] submit");
        let mut at_ms = 0u32;
        for step in submission_steps(&original) {
            at_ms = at_ms.saturating_add(step.delay_ms);
            if at_ms == 0 {
                apply_step(&form_for_submit, &button, &step);
                continue;
            }
            let form = form_for_submit.clone();
            let button = button.clone();
            dom::set_timeout(at_ms, move || apply_step(&form, &button, &step));
        }
    }) as Box<dyn FnMut(_)>);
    _ = form.add_event_listener_with_callback("submit", closure.as_ref().unchecked_ref());
    closure.forget();
}

fn apply_step(form: &web::HtmlFormElement, button: &web::HtmlButtonElement, step: &SubmitStep) {
    button.set_text_content(Some(&step.button.label));
    button.set_disabled(step.button.disabled);
    if step.reset_form {
        form.reset();
    }
    log::debug!("[form] {:?}", step.phase);
}
