//! Runtime configuration for an [`Experience`](crate::Experience).
//!
//! Defaults reproduce the shipped page; tests shrink them (fewer particles,
//! shorter segments) to keep assertions cheap.

use crate::color::Rgb;
use crate::constants::*;
use crate::error::CoreError;
use crate::tween::Ease;

#[derive(Clone, Debug, PartialEq)]
pub struct ColorCycleConfig {
    pub palette: Vec<Rgb>,
    pub segment_secs: f32,
    pub ease: Ease,
}

impl Default for ColorCycleConfig {
    fn default() -> Self {
        Self {
            palette: REFERENCE_PALETTE.iter().copied().map(Rgb::from_array).collect(),
            segment_secs: CYCLE_SEGMENT_SEC,
            ease: Ease::Power2InOut,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CameraConfig {
    pub fov_degrees: f32,
    pub near: f32,
    pub far: f32,
    pub distance: f32,
    pub parallax_range: f32,
    pub ease_factor: f32,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            fov_degrees: CAMERA_FOV_DEG,
            near: CAMERA_NEAR,
            far: CAMERA_FAR,
            distance: CAMERA_DISTANCE,
            parallax_range: PARALLAX_RANGE,
            ease_factor: CAMERA_EASE,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ParticleConfig {
    pub count: usize,
    pub spread: f32,
    pub size: f32,
    pub opacity: f32,
}

impl Default for ParticleConfig {
    fn default() -> Self {
        Self {
            count: PARTICLE_COUNT,
            spread: PARTICLE_SPREAD,
            size: PARTICLE_SIZE,
            opacity: PARTICLE_OPACITY,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PointerConfig {
    /// Clamp normalized pointer coordinates to \[-1, 1\]. Off by default so
    /// positions outside the viewport keep extrapolating.
    pub clamp: bool,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MotionConfig {
    /// Maximum distance a shape may drift from its home position. `None`
    /// lets the per-tick drift accumulate without bound.
    pub drift_limit: Option<f32>,
}

impl Default for MotionConfig {
    fn default() -> Self {
        Self {
            drift_limit: Some(SHAPE_DRIFT_LIMIT),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ExperienceConfig {
    pub seed: u64,
    pub particles: ParticleConfig,
    pub camera: CameraConfig,
    pub color_cycle: ColorCycleConfig,
    pub pointer: PointerConfig,
    pub motion: MotionConfig,
}

impl Default for ExperienceConfig {
    fn default() -> Self {
        Self {
            seed: DEFAULT_SEED,
            particles: ParticleConfig::default(),
            camera: CameraConfig::default(),
            color_cycle: ColorCycleConfig::default(),
            pointer: PointerConfig::default(),
            motion: MotionConfig::default(),
        }
    }
}

impl ExperienceConfig {
    /// Checks the scene settings. The color cycle settings are checked by
    /// [`ColorCycle::new`](crate::ColorCycle::new).
    pub fn validate(&self) -> Result<(), CoreError> {
        let s = self.particles.spread;
        if !s.is_finite() || s <= 0.0 {
            return Err(CoreError::InvalidParticleSpread(s));
        }
        Ok(())
    }
}
