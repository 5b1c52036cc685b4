//! Scene objects: the particle cloud, the geometric shapes and the lights.
//!
//! Everything here is created once by [`SceneObjects::build`]; afterwards only
//! transforms and colors change.

use crate::color::{Hsl, Rgb};
use crate::config::{ExperienceConfig, ParticleConfig};
use crate::constants::*;
use glam::{EulerRot, Mat4, Vec3};
use rand::prelude::*;
use smallvec::SmallVec;
use std::f32::consts::PI;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ShapeKind {
    Box,
    Sphere,
    Cone,
    Torus,
    Octahedron,
}

impl ShapeKind {
    pub const ALL: [ShapeKind; 5] = [
        ShapeKind::Box,
        ShapeKind::Sphere,
        ShapeKind::Cone,
        ShapeKind::Torus,
        ShapeKind::Octahedron,
    ];
}

/// Shape kinds and their home positions, in draw order.
pub const SHAPE_LAYOUT: [(ShapeKind, [f32; 3]); 5] = [
    (ShapeKind::Box, [-20.0, 10.0, -10.0]),
    (ShapeKind::Sphere, [15.0, -8.0, -15.0]),
    (ShapeKind::Cone, [-10.0, -15.0, -5.0]),
    (ShapeKind::Torus, [20.0, 5.0, -20.0]),
    (ShapeKind::Octahedron, [0.0, 20.0, -25.0]),
];

#[derive(Clone, Debug, PartialEq)]
pub struct Shape {
    pub kind: ShapeKind,
    pub home: Vec3,
    pub position: Vec3,
    pub initial_rotation: Vec3,
    pub rotation: Vec3,
    pub color: Rgb,
    pub opacity: f32,
    pub wireframe: bool,
    /// Seconds for one spin from the initial angle to a full turn.
    pub spin_period: f32,
}

impl Shape {
    pub fn model_matrix(&self) -> Mat4 {
        Mat4::from_translation(self.position)
            * Mat4::from_euler(
                EulerRot::XYZ,
                self.rotation.x,
                self.rotation.y,
                self.rotation.z,
            )
    }

    pub fn drift_offset(&self) -> Vec3 {
        self.position - self.home
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ParticleCloud {
    pub positions: Vec<Vec3>,
    pub colors: Vec<Rgb>,
    pub rotation: Vec3,
    pub size: f32,
    pub opacity: f32,
}

impl ParticleCloud {
    /// Scatter `config.count` particles uniformly in a cube centred on the
    /// origin, each with a random cyan-to-violet starting color.
    pub fn generate<R: Rng>(config: &ParticleConfig, rng: &mut R) -> Self {
        let mut positions = Vec::with_capacity(config.count);
        let mut colors = Vec::with_capacity(config.count);
        for _ in 0..config.count {
            positions.push(Vec3::new(
                (rng.gen::<f32>() - 0.5) * config.spread,
                (rng.gen::<f32>() - 0.5) * config.spread,
                (rng.gen::<f32>() - 0.5) * config.spread,
            ));
            let hue = rng.gen::<f32>() * PARTICLE_INITIAL_HUE_SPAN + PARTICLE_INITIAL_HUE_BASE;
            colors.push(Rgb::from_hsl(Hsl::new(hue, 0.7, 0.5)));
        }
        Self {
            positions,
            colors,
            rotation: Vec3::ZERO,
            size: config.size,
            opacity: config.opacity,
        }
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    pub fn model_matrix(&self) -> Mat4 {
        Mat4::from_euler(
            EulerRot::XYZ,
            self.rotation.x,
            self.rotation.y,
            self.rotation.z,
        )
    }
}

/// Fixed lights. Colors are pre-multiplied by intensity.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Lighting {
    pub ambient: Rgb,
    pub key_color: Rgb,
    /// Direction the key light travels, i.e. from its position toward the
    /// origin.
    pub key_direction: Vec3,
    pub fill_color: Rgb,
    pub fill_position: Vec3,
    pub fill_range: f32,
}

impl Default for Lighting {
    fn default() -> Self {
        Self {
            ambient: Rgb::from_hex(AMBIENT_LIGHT_HEX).scale(AMBIENT_LIGHT_INTENSITY),
            key_color: Rgb::from_hex(KEY_LIGHT_HEX).scale(KEY_LIGHT_INTENSITY),
            key_direction: -Vec3::from_array(KEY_LIGHT_POSITION).normalize(),
            fill_color: Rgb::from_hex(FILL_LIGHT_HEX).scale(FILL_LIGHT_INTENSITY),
            fill_position: Vec3::from_array(FILL_LIGHT_POSITION),
            fill_range: FILL_LIGHT_RANGE,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct SceneObjects {
    pub particles: ParticleCloud,
    pub shapes: SmallVec<[Shape; 8]>,
    pub lighting: Lighting,
}

impl SceneObjects {
    pub fn build(config: &ExperienceConfig) -> Self {
        let mut rng = StdRng::seed_from_u64(config.seed);
        let particles = ParticleCloud::generate(&config.particles, &mut rng);
        let shapes = SHAPE_LAYOUT
            .iter()
            .enumerate()
            .map(|(i, (kind, pos))| {
                let initial_rotation = Vec3::new(
                    rng.gen::<f32>() * PI,
                    rng.gen::<f32>() * PI,
                    rng.gen::<f32>() * PI,
                );
                let home = Vec3::from_array(*pos);
                Shape {
                    kind: *kind,
                    home,
                    position: home,
                    initial_rotation,
                    rotation: initial_rotation,
                    color: Rgb::from_hsl(Hsl::new(
                        (i as f32 * SHAPE_HUE_STEP).rem_euclid(1.0),
                        SHAPE_SATURATION,
                        SHAPE_LIGHTNESS,
                    )),
                    opacity: SHAPE_OPACITY,
                    wireframe: rng.gen_bool(SHAPE_WIREFRAME_PROBABILITY),
                    spin_period: SHAPE_SPIN_BASE_SEC + SHAPE_SPIN_STEP_SEC * i as f32,
                }
            })
            .collect();
        log::debug!(
            "[scene] built {} particles and {} shapes (seed {})",
            particles.len(),
            SHAPE_LAYOUT.len(),
            config.seed
        );
        Self {
            particles,
            shapes,
            lighting: Lighting::default(),
        }
    }
}
