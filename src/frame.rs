use crate::constants::{MAX_TICK_DT_SEC, TICKER_INTERVAL_MS};
use crate::dom;
use crate::loading::LoadingScreen;
use crate::render;
use crate::reveal::RevealSet;
use instant::Instant;
use portfolio_core::Experience;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// State owned by the animation-frame task.
pub struct FrameContext<'a> {
    pub experience: Rc<RefCell<Experience>>,
    pub gpu: render::GpuState<'a>,
    pub canvas: web::HtmlCanvasElement,
}

impl<'a> FrameContext<'a> {
    /// Returns `false` once the experience has been disposed.
    pub fn frame(&mut self) -> bool {
        let mut exp = self.experience.borrow_mut();
        if !exp.is_running() {
            return false;
        }
        let (w, h) = dom::sync_canvas_backing_size(&self.canvas);
        exp.on_resize(w, h);
        exp.tick_frame(&mut self.gpu);
        true
    }
}

pub async fn init_gpu(canvas: &web::HtmlCanvasElement) -> Option<render::GpuState<'static>> {
    // leak a canvas clone to satisfy 'static lifetime for surface
    let leaked_canvas = Box::leak(Box::new(canvas.clone()));
    match render::GpuState::new(leaked_canvas).await {
        Ok(g) => Some(g),
        Err(e) => {
            log::error!("WebGPU init error: {:?}", e);
            None
        }
    }
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext<'static>>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    let frame_ctx_tick = frame_ctx.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        if !frame_ctx_tick.borrow_mut().frame() {
            log::info!("[frame] loop stopped");
            return;
        }
        request_frame(&tick_clone);
    }) as Box<dyn FnMut()>));
    request_frame(&tick);
}

#[inline]
fn request_frame(tick: &Rc<RefCell<Option<Closure<dyn FnMut()>>>>) {
    let Some(w) = web::window() else {
        return;
    };
    if let Some(cb) = tick.borrow().as_ref() {
        _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}

/// State owned by the interval task: color cycle, entrance tweens and the
/// loading fade.
pub struct TickerContext {
    pub experience: Rc<RefCell<Experience>>,
    pub reveals: Rc<RefCell<RevealSet>>,
    pub loading: LoadingScreen,
    pub last_instant: Instant,
}

impl TickerContext {
    pub fn tick(&mut self) -> bool {
        let now = Instant::now();
        let dt = (now - self.last_instant).as_secs_f32().min(MAX_TICK_DT_SEC);
        self.last_instant = now;

        let elapsed = {
            let mut exp = self.experience.borrow_mut();
            if exp.tick_colors().is_none() {
                return false;
            }
            exp.elapsed()
        };
        self.reveals.borrow_mut().advance(dt);
        if !self.loading.is_done() {
            self.loading.update(elapsed);
        }
        true
    }
}

pub fn start_ticker(ticker: TickerContext) {
    let Some(window) = web::window() else {
        return;
    };
    let ticker = Rc::new(RefCell::new(ticker));
    let handle: Rc<RefCell<Option<i32>>> = Rc::new(RefCell::new(None));
    let handle_tick = handle.clone();
    let wnd = window.clone();
    let closure = Closure::wrap(Box::new(move || {
        if !ticker.borrow_mut().tick() {
            if let Some(id) = handle_tick.borrow_mut().take() {
                wnd.clear_interval_with_handle(id);
                log::info!("[ticker] stopped");
            }
        }
    }) as Box<dyn FnMut()>);
    match window.set_interval_with_callback_and_timeout_and_arguments_0(
        closure.as_ref().unchecked_ref(),
        TICKER_INTERVAL_MS,
    ) {
        Ok(id) => *handle.borrow_mut() = Some(id),
        Err(e) => log::error!("[ticker] setInterval failed: {:?}", e),
    }
    closure.forget();
}
