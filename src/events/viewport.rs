use crate::dom;
use crate::reveal::RevealSet;
use portfolio_core::Experience;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Global `resize`: canvas backing store and camera aspect.
pub fn wire_resize(canvas: web::HtmlCanvasElement, experience: Rc<RefCell<Experience>>) {
    let Some(window) = web::window() else {
        return;
    };
    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move || {
        let (w, h) = dom::sync_canvas_backing_size(&canvas);
        if experience.borrow_mut().on_resize(w, h) {
            log::info!("[resize] {}x{}", w, h);
        }
    }) as Box<dyn FnMut()>);
    _ = window.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref());
    closure.forget();
}

/// Global `scroll` (and `resize`): re-evaluate the entrance triggers.
pub fn wire_scroll(reveals: Rc<RefCell<RevealSet>>) {
    let Some(window) = web::window() else {
        return;
    };
    let wnd = window.clone();
    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move || {
        let (_, vh) = dom::viewport_size(&wnd);
        reveals.borrow_mut().on_scroll(vh);
    }) as Box<dyn FnMut()>);
    for event in ["scroll", "resize"] {
        _ = window.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
    }
    closure.forget();
}
