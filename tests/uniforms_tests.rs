// Host-side tests for GPU data layouts.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod uniforms {
    include!("../src/render/uniforms.rs");
}

use portfolio_core::constants::{FOG_FAR, FOG_NEAR, SHAPE_OPACITY};
use portfolio_core::{
    AmbientColors, CameraState, ExperienceConfig, FrameView, Rgb, SceneObjects,
};
use uniforms::*;

fn ambient() -> AmbientColors {
    AmbientColors {
        clear: Rgb::from_hex(0x0a0a0a),
        fog: Rgb::from_hex(0x0a0a0a),
    }
}

#[test]
fn pod_layouts_are_16_byte_aligned() {
    assert_eq!(std::mem::size_of::<FrameUniforms>(), 288);
    assert_eq!(std::mem::size_of::<ShapeUniforms>(), 80);
    assert_eq!(std::mem::size_of::<ParticleInstance>(), 32);
    for size in [
        std::mem::size_of::<FrameUniforms>(),
        std::mem::size_of::<ShapeUniforms>(),
        std::mem::size_of::<ParticleInstance>(),
    ] {
        assert_eq!(size % 16, 0);
    }
}

#[test]
fn align_to_rounds_up_to_power_of_two() {
    assert_eq!(align_to(0, 256), 0);
    assert_eq!(align_to(1, 256), 256);
    assert_eq!(align_to(80, 256), 256);
    assert_eq!(align_to(256, 256), 256);
    assert_eq!(align_to(257, 256), 512);
}

#[test]
fn frame_uniforms_carry_fog_and_viewport() {
    let config = ExperienceConfig::default();
    let camera = CameraState::new(&config.camera, 800, 600);
    let scene = SceneObjects::build(&config);
    let view = FrameView {
        elapsed: 1.5,
        camera: &camera,
        scene: Some(&scene),
        ambient: ambient(),
    };
    let u = frame_uniforms(&view, 30.0, 0.067);
    assert_eq!(u.fog_particles[0], FOG_NEAR);
    assert_eq!(u.fog_particles[1], FOG_FAR);
    assert_eq!(u.fog_particles[2], scene.particles.size);
    assert_eq!(u.fog_particles[3], scene.particles.opacity);
    assert_eq!(u.viewport[0], 800.0);
    assert_eq!(u.viewport[1], 600.0);
    assert_eq!(u.viewport[3], 1.5);
    assert_eq!(u.material[0], 30.0);
}

#[test]
fn frame_uniforms_without_scene_hide_particles() {
    let config = ExperienceConfig::default();
    let camera = CameraState::new(&config.camera, 640, 480);
    let view = FrameView {
        elapsed: 0.0,
        camera: &camera,
        scene: None,
        ambient: ambient(),
    };
    let u = frame_uniforms(&view, 30.0, 0.067);
    assert_eq!(u.fog_particles[2], 0.0);
    assert_eq!(u.fog_particles[3], 0.0);
}

#[test]
fn shape_uniforms_keep_translucency() {
    let scene = SceneObjects::build(&ExperienceConfig::default());
    for shape in &scene.shapes {
        let u = shape_uniforms(shape);
        assert_eq!(u.color[3], SHAPE_OPACITY);
        // translation lives in the last column
        assert_eq!(u.model[3][0], shape.position.x);
        assert_eq!(u.model[3][1], shape.position.y);
        assert_eq!(u.model[3][2], shape.position.z);
    }
}

#[test]
fn particle_instances_reuse_the_buffer() {
    let scene = SceneObjects::build(&ExperienceConfig::default());
    let mut out = Vec::new();
    particle_instances(&scene.particles, &mut out);
    assert_eq!(out.len(), scene.particles.len());
    let cap = out.capacity();
    particle_instances(&scene.particles, &mut out);
    assert_eq!(out.len(), scene.particles.len());
    assert_eq!(out.capacity(), cap);
    assert!(out.iter().all(|p| p.position[3] == 1.0 && p.color[3] == 1.0));
}
