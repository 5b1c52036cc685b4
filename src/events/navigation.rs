use crate::constants::{ACTIVE_CLASS, NAV_LINK_SELECTOR, NAV_SECTION_ATTR, SECTION_SELECTOR};
use crate::dom;
use portfolio_core::navigation::{NavState, SectionVisibility, VISIBILITY_THRESHOLD};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

/// Click on a nav link smooth-scrolls to its section, when it exists.
pub fn wire_nav_clicks(document: &web::Document) {
    for link in dom::query_all(document, NAV_LINK_SELECTOR) {
        let doc = document.clone();
        let closure = Closure::wrap(Box::new(move |ev: web::Event| {
            ev.prevent_default();
            let Some(target) = ev
                .current_target()
                .and_then(|t| t.dyn_into::<web::Element>().ok())
            else {
                return;
            };
            let Some(id) = target.get_attribute(NAV_SECTION_ATTR) else {
                return;
            };
            match doc.get_element_by_id(&id) {
                Some(section) => {
                    let opts = web::ScrollIntoViewOptions::new();
                    opts.set_behavior(web::ScrollBehavior::Smooth);
                    section.scroll_into_view_with_scroll_into_view_options(&opts);
                }
                None => log::warn!("[nav] no section #{id}"),
            }
        }) as Box<dyn FnMut(_)>);
        _ = link.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}

/// Highlight the link of whichever section most recently became half
/// visible.
pub fn wire_section_observer(document: &web::Document) -> anyhow::Result<()> {
    let links = dom::query_all(document, NAV_LINK_SELECTOR);
    let sections = dom::query_all(document, SECTION_SELECTOR);
    if sections.is_empty() {
        log::warn!("[nav] no sections to observe");
        return Ok(());
    }
    let nav = Rc::new(RefCell::new(NavState::new()));
    let closure = Closure::wrap(Box::new(
        move |entries: js_sys::Array, _observer: web::IntersectionObserver| {
            let batch: Vec<SectionVisibility> = entries
                .iter()
                .filter_map(|e| e.dyn_into::<web::IntersectionObserverEntry>().ok())
                .map(|e| SectionVisibility::new(e.target().id(), e.is_intersecting()))
                .collect();
            let mut nav = nav.borrow_mut();
            if nav.observe(&batch) {
                sync_active_links(&links, &nav);
            }
        },
    ) as Box<dyn FnMut(js_sys::Array, web::IntersectionObserver)>);

    let init = web::IntersectionObserverInit::new();
    init.set_threshold(&JsValue::from_f64(VISIBILITY_THRESHOLD));
    let observer =
        web::IntersectionObserver::new_with_options(closure.as_ref().unchecked_ref(), &init)
            .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    for section in &sections {
        observer.observe(section);
    }
    closure.forget();
    log::info!("[nav] observing {} sections", sections.len());
    Ok(())
}

fn sync_active_links(links: &[web::Element], nav: &NavState) {
    for link in links {
        let cl = link.class_list();
        let on = link
            .get_attribute(NAV_SECTION_ATTR)
            .is_some_and(|id| nav.is_active(&id));
        if on {
            _ = cl.add_1(ACTIVE_CLASS);
        } else {
            _ = cl.remove_1(ACTIVE_CLASS);
        }
    }
}
