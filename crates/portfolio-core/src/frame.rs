//! The per-tick update: particle rotation, camera parallax, shape motion and
//! exactly one draw.

use crate::camera::CameraState;
use crate::color::{Hsl, Rgb};
use crate::color_cycle::AmbientColors;
use crate::config::{CameraConfig, MotionConfig};
use crate::constants::*;
use crate::pointer::PointerState;
use crate::scene::{SceneObjects, Shape};
use crate::state::StateReader;
use glam::{Vec2, Vec3};
use std::f32::consts::TAU;

/// Everything a renderer needs for one frame.
pub struct FrameView<'a> {
    pub elapsed: f32,
    pub camera: &'a CameraState,
    pub scene: Option<&'a SceneObjects>,
    pub ambient: AmbientColors,
}

/// Receives the single draw call issued per tick.
pub trait DrawTarget {
    fn draw(&mut self, frame: &FrameView<'_>);
}

pub struct FrameLoop {
    pointer: StateReader<PointerState>,
    ambient: StateReader<AmbientColors>,
    parallax_range: f32,
    ease_factor: f32,
    drift_limit: Option<f32>,
    ticks: u64,
}

impl FrameLoop {
    pub fn new(
        pointer: StateReader<PointerState>,
        ambient: StateReader<AmbientColors>,
        camera: &CameraConfig,
        motion: &MotionConfig,
    ) -> Self {
        Self {
            pointer,
            ambient,
            parallax_range: camera.parallax_range,
            ease_factor: camera.ease_factor,
            drift_limit: motion.drift_limit,
            ticks: 0,
        }
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// Run one tick at `elapsed` seconds. A missing scene skips the object
    /// updates; the camera still eases and the frame is still drawn.
    pub fn tick<D: DrawTarget + ?Sized>(
        &mut self,
        elapsed: f32,
        camera: &mut CameraState,
        mut scene: Option<&mut SceneObjects>,
        target: &mut D,
    ) {
        if let Some(scene) = scene.as_deref_mut() {
            scene.particles.rotation = particle_rotation(elapsed);
        }

        camera.ease_toward_pointer(self.pointer.get(), self.parallax_range, self.ease_factor);

        if let Some(scene) = scene.as_deref_mut() {
            for (i, shape) in scene.shapes.iter_mut().enumerate() {
                animate_shape(shape, i, elapsed, self.drift_limit);
            }
        }

        self.ticks += 1;
        target.draw(&FrameView {
            elapsed,
            camera,
            scene: scene.as_deref(),
            ambient: self.ambient.get(),
        });
    }
}

/// Particle cloud orientation as a pure function of elapsed time.
#[inline]
pub fn particle_rotation(elapsed: f32) -> Vec3 {
    Vec3::new(
        (elapsed * PARTICLE_PITCH_FREQ).sin() * PARTICLE_PITCH_AMPLITUDE,
        elapsed * PARTICLE_YAW_RATE,
        0.0,
    )
}

/// Per-tick position increment for shape `index`.
#[inline]
pub fn drift_step(elapsed: f32, index: usize) -> Vec2 {
    let phase = elapsed + index as f32;
    Vec2::new(phase.cos() * SHAPE_DRIFT_X, phase.sin() * SHAPE_DRIFT_Y)
}

#[inline]
pub fn shape_hue(elapsed: f32, index: usize) -> f32 {
    (elapsed * SHAPE_HUE_RATE + index as f32 * SHAPE_HUE_STEP).rem_euclid(1.0)
}

/// Linear spin from `initial` to a full turn over `period`, then repeat.
#[inline]
pub fn spin_angle(initial: f32, elapsed: f32, period: f32) -> f32 {
    if period <= 0.0 {
        return initial;
    }
    let p = (elapsed / period).rem_euclid(1.0);
    initial + (TAU - initial) * p
}

fn animate_shape(shape: &mut Shape, index: usize, elapsed: f32, drift_limit: Option<f32>) {
    let step = drift_step(elapsed, index);
    shape.position.y += step.y;
    shape.position.x += step.x;
    if let Some(limit) = drift_limit {
        let offset = shape.position - shape.home;
        if offset.length() > limit {
            shape.position = shape.home + offset.clamp_length_max(limit);
        }
    }
    shape.color = Rgb::from_hsl(Hsl::new(
        shape_hue(elapsed, index),
        SHAPE_SATURATION,
        SHAPE_LIGHTNESS,
    ));
    shape.rotation.x = spin_angle(shape.initial_rotation.x, elapsed, shape.spin_period);
    shape.rotation.y = spin_angle(shape.initial_rotation.y, elapsed, shape.spin_period);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spin_starts_at_initial_and_approaches_full_turn() {
        assert_eq!(spin_angle(1.0, 0.0, 10.0), 1.0);
        let near_end = spin_angle(1.0, 9.999, 10.0);
        assert!(near_end < TAU && near_end > TAU - 0.01);
        assert_eq!(spin_angle(1.0, 10.0, 10.0), 1.0);
    }

    #[test]
    fn hue_wraps_into_unit_range() {
        for i in 0..5 {
            for s in 0..200 {
                let h = shape_hue(s as f32 * 0.37, i);
                assert!((0.0..1.0).contains(&h));
            }
        }
    }
}
