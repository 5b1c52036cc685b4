#![cfg(target_arch = "wasm32")]
use instant::Instant;
use portfolio_core::{Experience, ExperienceConfig};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod constants;
mod dom;
mod events;
mod frame;
mod loading;
mod render;
mod reveal;

use constants::CANVAS_ID;

/// Stop both tasks when the page is torn down. A page entering the
/// back/forward cache keeps running state and resumes on `pageshow`.
fn wire_dispose(experience: Rc<RefCell<Experience>>) {
    let Some(window) = web::window() else {
        return;
    };
    let closure = Closure::wrap(Box::new(move |ev: web::PageTransitionEvent| {
        if experience.borrow_mut().on_page_hide(ev.persisted()) {
            log::info!("[page] disposed");
        }
    }) as Box<dyn FnMut(_)>);
    _ = window.add_event_listener_with_callback("pagehide", closure.as_ref().unchecked_ref());
    closure.forget();
}

/// Page behavior that works with or without the 3D layer.
fn wire_page(document: &web::Document) -> Rc<RefCell<reveal::RevealSet>> {
    events::wire_nav_clicks(document);
    if let Err(e) = events::wire_section_observer(document) {
        log::error!("[nav] observer setup failed: {:?}", e);
    }
    events::wire_contact_form(document);

    let reveals = Rc::new(RefCell::new(reveal::RevealSet::collect(document)));
    events::wire_scroll(reveals.clone());
    if let Some(window) = web::window() {
        let (_, vh) = dom::viewport_size(&window);
        reveals.borrow_mut().on_scroll(vh);
    }
    reveals
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("portfolio-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let reveals = wire_page(&document);
    let loading = loading::LoadingScreen::new(&document);

    let canvas = document
        .get_element_by_id(CANVAS_ID)
        .and_then(|el| el.dyn_into::<web::HtmlCanvasElement>().ok());
    let (w, h) = match &canvas {
        Some(c) => dom::sync_canvas_backing_size(c),
        None => {
            log::warn!("[init] missing #{}", CANVAS_ID);
            let (vw, vh) = dom::viewport_size(&window);
            (vw as u32, vh as u32)
        }
    };

    let experience = Experience::init(ExperienceConfig::default(), w, h)?;
    let experience = Rc::new(RefCell::new(experience));

    events::wire_pointer_move(experience.clone());
    wire_dispose(experience.clone());

    frame::start_ticker(frame::TickerContext {
        experience: experience.clone(),
        reveals,
        loading,
        last_instant: Instant::now(),
    });

    let Some(canvas) = canvas else {
        return Ok(());
    };
    events::wire_resize(canvas.clone(), experience.clone());
    match frame::init_gpu(&canvas).await {
        Some(gpu) => {
            let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
                experience,
                gpu,
                canvas,
            }));
            frame::start_loop(frame_ctx);
            log::info!("[frame] loop started");
        }
        None => log::warn!("[gpu] 3D layer unavailable; page continues without it"),
    }
    Ok(())
}
