//! The context object tying clock, input, scene and animation together.
//!
//! The web front-end owns one [`Experience`] behind an `Rc<RefCell<_>>` and
//! drives it from two tasks: the animation frame loop calls
//! [`Experience::tick_frame`], an interval timer calls
//! [`Experience::tick_colors`]. Neither relies on the other having run first.

use crate::camera::CameraState;
use crate::clock::Clock;
use crate::color_cycle::{AmbientColors, ColorCycle, CycleSample};
use crate::config::ExperienceConfig;
use crate::error::CoreError;
use crate::frame::{DrawTarget, FrameLoop};
use crate::pointer::{PointerState, PointerTracker};
use crate::scene::SceneObjects;
use crate::state::StateReader;

pub struct Experience {
    config: ExperienceConfig,
    clock: Clock,
    pointer: PointerTracker,
    camera: CameraState,
    scene: Option<SceneObjects>,
    color_cycle: ColorCycle,
    frame_loop: FrameLoop,
    running: bool,
}

impl Experience {
    /// Validate `config`, build the scene and size the camera for a
    /// `width` x `height` viewport.
    pub fn init(config: ExperienceConfig, width: u32, height: u32) -> Result<Self, CoreError> {
        config.validate()?;
        let color_cycle = ColorCycle::new(&config.color_cycle)?;
        let pointer = PointerTracker::new(&config.pointer);
        let frame_loop = FrameLoop::new(
            pointer.reader(),
            color_cycle.ambient_reader(),
            &config.camera,
            &config.motion,
        );
        let camera = CameraState::new(&config.camera, width, height);
        let scene = SceneObjects::build(&config);
        log::debug!("[experience] init {width}x{height}");
        Ok(Self {
            config,
            clock: Clock::new(),
            pointer,
            camera,
            scene: Some(scene),
            color_cycle,
            frame_loop,
            running: true,
        })
    }

    pub fn config(&self) -> &ExperienceConfig {
        &self.config
    }

    pub fn elapsed(&self) -> f32 {
        self.clock.elapsed()
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn camera(&self) -> &CameraState {
        &self.camera
    }

    pub fn scene(&self) -> Option<&SceneObjects> {
        self.scene.as_ref()
    }

    /// Remove the scene; later ticks skip the object updates.
    pub fn take_scene(&mut self) -> Option<SceneObjects> {
        self.scene.take()
    }

    pub fn color_cycle(&self) -> &ColorCycle {
        &self.color_cycle
    }

    pub fn pointer(&self) -> PointerState {
        self.pointer.state()
    }

    pub fn pointer_reader(&self) -> StateReader<PointerState> {
        self.pointer.reader()
    }

    pub fn ambient(&self) -> AmbientColors {
        self.color_cycle.ambient()
    }

    pub fn frames(&self) -> u64 {
        self.frame_loop.ticks()
    }

    pub fn on_pointer_move(&mut self, raw_x: f32, raw_y: f32, viewport_w: f32, viewport_h: f32) {
        self.pointer.on_move(raw_x, raw_y, viewport_w, viewport_h);
    }

    /// Returns `true` when the camera aspect changed and the surface needs
    /// reconfiguring.
    pub fn on_resize(&mut self, width: u32, height: u32) -> bool {
        let changed = self.camera.set_viewport(width, height);
        if changed {
            log::debug!("[experience] resize {width}x{height}");
        }
        changed
    }

    pub fn tick_frame<D: DrawTarget + ?Sized>(&mut self, target: &mut D) {
        let elapsed = self.clock.elapsed();
        self.tick_frame_at(elapsed, target);
    }

    /// One frame at an explicit time. Does nothing once disposed.
    pub fn tick_frame_at<D: DrawTarget + ?Sized>(&mut self, elapsed: f32, target: &mut D) {
        if !self.running {
            return;
        }
        self.frame_loop
            .tick(elapsed, &mut self.camera, self.scene.as_mut(), target);
    }

    pub fn tick_colors(&mut self) -> Option<CycleSample> {
        let elapsed = self.clock.elapsed();
        self.tick_colors_at(elapsed)
    }

    /// Advance the color cycle and recolor particles at an explicit time.
    pub fn tick_colors_at(&mut self, elapsed: f32) -> Option<CycleSample> {
        if !self.running {
            return None;
        }
        let particles = self.scene.as_mut().map(|s| &mut s.particles);
        Some(self.color_cycle.propagate(elapsed, particles))
    }

    /// Page is going away. A page kept in the back/forward cache
    /// (`persisted`) stays live so both tasks resume when it is shown again.
    /// Returns `true` when this call disposed the experience.
    pub fn on_page_hide(&mut self, persisted: bool) -> bool {
        if persisted {
            log::debug!("[experience] page cached, keeping state");
            return false;
        }
        let was_running = self.running;
        self.dispose();
        was_running
    }

    /// Stop both tasks and release the scene.
    pub fn dispose(&mut self) {
        if !self.running {
            return;
        }
        self.running = false;
        self.scene = None;
        log::debug!("[experience] disposed after {} frames", self.frame_loop.ticks());
    }
}
