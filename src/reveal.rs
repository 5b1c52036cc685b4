use crate::constants::{CONTACT_FORM_SELECTOR, PROJECT_CARD_SELECTOR};
use crate::dom;
use portfolio_core::reveal::{Entrance, EntranceStyle};
use wasm_bindgen::JsCast;
use web_sys as web;

struct RevealItem {
    el: web::HtmlElement,
    entrance: Entrance,
}

/// Scroll-triggered entrances for the project cards and the contact form.
pub struct RevealSet {
    items: Vec<RevealItem>,
}

impl RevealSet {
    pub fn collect(document: &web::Document) -> Self {
        let mut items = Vec::new();
        let cards = dom::query_all(document, PROJECT_CARD_SELECTOR);
        for (i, el) in cards.into_iter().enumerate() {
            if let Ok(el) = el.dyn_into::<web::HtmlElement>() {
                items.push(RevealItem {
                    el,
                    entrance: Entrance::card(i),
                });
            }
        }
        if let Some(el) = document
            .query_selector(CONTACT_FORM_SELECTOR)
            .ok()
            .flatten()
            .and_then(|el| el.dyn_into::<web::HtmlElement>().ok())
        {
            items.push(RevealItem {
                el,
                entrance: Entrance::form(),
            });
        }
        log::info!("[reveal] {} elements", items.len());
        let set = Self { items };
        for item in &set.items {
            apply(&item.el, item.entrance.style());
        }
        set
    }

    /// Re-evaluate every trigger against the current scroll position.
    pub fn on_scroll(&mut self, viewport_h: f32) {
        for item in &mut self.items {
            let rect = item.el.get_bounding_client_rect();
            if let Some(action) =
                item.entrance
                    .on_scroll(rect.top() as f32, rect.bottom() as f32, viewport_h)
            {
                log::debug!("[reveal] {:?}", action);
            }
        }
    }

    pub fn advance(&mut self, dt: f32) {
        for item in &mut self.items {
            if item.entrance.advance(dt) {
                apply(&item.el, item.entrance.style());
            }
        }
    }
}

#[inline]
fn apply(el: &web::HtmlElement, style: EntranceStyle) {
    let css = el.style();
    _ = css.set_property("transform", &style.css_transform());
    _ = css.set_property("opacity", &style.opacity.to_string());
}
