//! Perspective camera with pointer parallax.

use crate::config::CameraConfig;
use crate::pointer::PointerState;
use glam::{Mat4, Vec2, Vec3};

/// Right-handed perspective camera that always looks at its `target`.
#[derive(Clone, Debug, PartialEq)]
pub struct CameraState {
    pub position: Vec3,
    pub target: Vec3,
    pub up: Vec3,
    pub aspect: f32,
    pub fovy_radians: f32,
    pub znear: f32,
    pub zfar: f32,
    width: u32,
    height: u32,
}

impl CameraState {
    pub fn new(config: &CameraConfig, width: u32, height: u32) -> Self {
        let mut cam = Self {
            position: Vec3::new(0.0, 0.0, config.distance),
            target: Vec3::ZERO,
            up: Vec3::Y,
            aspect: 1.0,
            fovy_radians: config.fov_degrees.to_radians(),
            znear: config.near,
            zfar: config.far,
            width: 0,
            height: 0,
        };
        cam.set_viewport(width, height);
        cam
    }

    /// Update the aspect ratio for a new surface size. Returns `true` when
    /// anything changed; zero dimensions and repeated sizes are no-ops.
    pub fn set_viewport(&mut self, width: u32, height: u32) -> bool {
        if width == 0 || height == 0 {
            return false;
        }
        if width == self.width && height == self.height {
            return false;
        }
        self.width = width;
        self.height = height;
        self.aspect = width as f32 / height as f32;
        true
    }

    pub fn viewport(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// One step of the exponential ease toward the pointer-derived target,
    /// then re-aim at the scene origin.
    pub fn ease_toward_pointer(&mut self, pointer: PointerState, range: f32, factor: f32) {
        let goal = parallax_target(pointer, range);
        self.position.x += (goal.x - self.position.x) * factor;
        self.position.y += (goal.y - self.position.y) * factor;
        self.target = Vec3::ZERO;
    }

    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fovy_radians, self.aspect, self.znear, self.zfar)
    }

    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.position, self.target, self.up)
    }

    pub fn view_proj(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }
}

/// Where the camera settles for a held pointer position. Screen-up pointer
/// motion moves the camera down so the scene appears to tilt toward it.
#[inline]
pub fn parallax_target(pointer: PointerState, range: f32) -> Vec2 {
    Vec2::new(pointer.x * range, -pointer.y * range)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_on_axis_looking_at_origin() {
        let cam = CameraState::new(&CameraConfig::default(), 1600, 900);
        assert_eq!(cam.position, Vec3::new(0.0, 0.0, 30.0));
        assert_eq!(cam.target, Vec3::ZERO);
        assert!((cam.aspect - 16.0 / 9.0).abs() < 1e-6);
    }

    #[test]
    fn zero_viewport_keeps_aspect() {
        let mut cam = CameraState::new(&CameraConfig::default(), 800, 400);
        assert!(!cam.set_viewport(0, 400));
        assert_eq!(cam.aspect, 2.0);
    }
}
