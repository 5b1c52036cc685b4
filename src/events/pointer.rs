use crate::dom;
use portfolio_core::Experience;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Global `mousemove`: normalized pointer for the camera parallax.
pub fn wire_pointer_move(experience: Rc<RefCell<Experience>>) {
    let Some(window) = web::window() else {
        return;
    };
    let wnd = window.clone();
    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::MouseEvent| {
        let (vw, vh) = dom::viewport_size(&wnd);
        experience
            .borrow_mut()
            .on_pointer_move(ev.client_x() as f32, ev.client_y() as f32, vw, vh);
    }) as Box<dyn FnMut(_)>);
    _ = window.add_event_listener_with_callback("mousemove", closure.as_ref().unchecked_ref());
    closure.forget();
}
