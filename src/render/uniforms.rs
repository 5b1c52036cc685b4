// GPU-side data layouts. Everything here is plain data so it can be checked
// on the host.

use portfolio_core::constants::{FOG_FAR, FOG_NEAR};
use portfolio_core::{FrameView, ParticleCloud, Rgb, Shape};

#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct FrameUniforms {
    pub view_proj: [[f32; 4]; 4],
    pub particle_model: [[f32; 4]; 4],
    pub camera_pos: [f32; 4],
    /// rgb fog color, a unused
    pub fog_color: [f32; 4],
    /// near, far, particle size, particle opacity
    pub fog_particles: [f32; 4],
    /// width, height, aspect, elapsed
    pub viewport: [f32; 4],
    pub ambient: [f32; 4],
    pub key_color: [f32; 4],
    pub key_dir: [f32; 4],
    pub fill_color: [f32; 4],
    /// xyz position, w range
    pub fill_pos_range: [f32; 4],
    /// shininess, specular, 0, 0
    pub material: [f32; 4],
}

#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct ShapeUniforms {
    pub model: [[f32; 4]; 4],
    /// linear rgb, opacity
    pub color: [f32; 4],
}

#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct ParticleInstance {
    pub position: [f32; 4],
    pub color: [f32; 4],
}

#[inline]
fn rgba(c: Rgb, a: f32) -> [f32; 4] {
    c.to_linear().with_alpha(a)
}

/// Round `size` up to the next multiple of `align` (a power of two).
#[inline]
pub fn align_to(size: u64, align: u64) -> u64 {
    (size + align - 1) & !(align - 1)
}

/// Per-frame uniforms. Surface dimensions are physical pixels.
pub fn frame_uniforms(frame: &FrameView<'_>, shininess: f32, specular: f32) -> FrameUniforms {
    let cam = frame.camera;
    let (w, h) = cam.viewport();
    let (particle_model, size, opacity, lighting) = match frame.scene {
        Some(scene) => (
            scene.particles.model_matrix(),
            scene.particles.size,
            scene.particles.opacity,
            scene.lighting,
        ),
        None => (glam::Mat4::IDENTITY, 0.0, 0.0, Default::default()),
    };
    FrameUniforms {
        view_proj: cam.view_proj().to_cols_array_2d(),
        particle_model: particle_model.to_cols_array_2d(),
        camera_pos: cam.position.extend(1.0).to_array(),
        fog_color: rgba(frame.ambient.fog, 1.0),
        fog_particles: [FOG_NEAR, FOG_FAR, size, opacity],
        viewport: [w as f32, h as f32, cam.aspect, frame.elapsed],
        ambient: rgba(lighting.ambient, 1.0),
        key_color: rgba(lighting.key_color, 1.0),
        key_dir: lighting.key_direction.extend(0.0).to_array(),
        fill_color: rgba(lighting.fill_color, 1.0),
        fill_pos_range: lighting.fill_position.extend(lighting.fill_range).to_array(),
        material: [shininess, specular, 0.0, 0.0],
    }
}

pub fn shape_uniforms(shape: &Shape) -> ShapeUniforms {
    ShapeUniforms {
        model: shape.model_matrix().to_cols_array_2d(),
        color: rgba(shape.color, shape.opacity),
    }
}

/// Refill `out` with one instance per particle, reusing its allocation.
pub fn particle_instances(cloud: &ParticleCloud, out: &mut Vec<ParticleInstance>) {
    out.clear();
    out.extend(
        cloud
            .positions
            .iter()
            .zip(&cloud.colors)
            .map(|(p, c)| ParticleInstance {
                position: p.extend(1.0).to_array(),
                color: rgba(*c, 1.0),
            }),
    );
}
