use crate::constants::{MAX_SHAPES, SHININESS, SPECULAR, UNIFORM_ALIGN};
use portfolio_core::{DrawTarget, FrameView};
use web_sys as web;

mod helpers;
mod meshes;
mod targets;
pub mod uniforms;

use meshes::{ShapeMeshes, MESH_VERTEX_LAYOUT};
use targets::RenderTargets;
use uniforms::{FrameUniforms, ParticleInstance, ShapeUniforms};

static SCENE_WGSL: &str = include_str!("../shaders/scene.wgsl");
static PARTICLES_WGSL: &str = include_str!("../shaders/particles.wgsl");

const PARTICLE_INSTANCE_LAYOUT: wgpu::VertexBufferLayout<'static> = wgpu::VertexBufferLayout {
    array_stride: std::mem::size_of::<ParticleInstance>() as wgpu::BufferAddress,
    step_mode: wgpu::VertexStepMode::Instance,
    attributes: &[
        wgpu::VertexAttribute {
            offset: 0,
            shader_location: 0,
            format: wgpu::VertexFormat::Float32x4,
        },
        wgpu::VertexAttribute {
            offset: 16,
            shader_location: 1,
            format: wgpu::VertexFormat::Float32x4,
        },
    ],
};

pub struct GpuState<'a> {
    surface: wgpu::Surface<'a>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,
    targets: RenderTargets,

    frame_uniform_buffer: wgpu::Buffer,
    frame_bind_group: wgpu::BindGroup,
    shape_uniform_buffer: wgpu::Buffer,
    shape_bind_group: wgpu::BindGroup,
    shape_stride: u64,
    solid_pipeline: wgpu::RenderPipeline,
    wire_pipeline: wgpu::RenderPipeline,
    meshes: ShapeMeshes,

    particle_pipeline: wgpu::RenderPipeline,
    particle_buffer: Option<wgpu::Buffer>,
    particle_capacity: usize,
    particle_scratch: Vec<ParticleInstance>,
    shape_scratch: Vec<u8>,

    width: u32,
    height: u32,
}

impl<'a> GpuState<'a> {
    pub async fn new(canvas: &'a web::HtmlCanvasElement) -> anyhow::Result<Self> {
        let width = canvas.width().max(1);
        let height = canvas.height().max(1);

        let instance = wgpu::Instance::default();
        let surface = instance.create_surface(wgpu::SurfaceTarget::Canvas(canvas.clone()))?;
        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::HighPerformance,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .ok_or_else(|| anyhow::anyhow!("No WebGPU adapter"))?;
        let (device, queue) = adapter
            .request_device(
                &wgpu::DeviceDescriptor {
                    required_features: wgpu::Features::empty(),
                    required_limits: wgpu::Limits::default(),
                    memory_hints: wgpu::MemoryHints::Performance,
                    label: None,
                },
                None,
            )
            .await
            .map_err(|e| anyhow::anyhow!(format!("request_device error: {:?}", e)))?;
        let caps = surface.get_capabilities(&adapter);
        let format = caps
            .formats
            .iter()
            .copied()
            .find(|f| {
                matches!(
                    f,
                    wgpu::TextureFormat::Bgra8UnormSrgb | wgpu::TextureFormat::Rgba8UnormSrgb
                )
            })
            .or_else(|| caps.formats.first().copied())
            .ok_or_else(|| anyhow::anyhow!("surface reports no formats"))?;
        let alpha_mode = caps
            .alpha_modes
            .first()
            .copied()
            .unwrap_or(wgpu::CompositeAlphaMode::Auto);
        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format,
            width,
            height,
            present_mode: wgpu::PresentMode::Fifo,
            alpha_mode,
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &config);
        log::info!("[gpu] surface {}x{} {:?}", width, height, format);

        let targets = RenderTargets::new(&device, width, height);

        // group 0: per-frame camera, fog and lights
        let frame_bgl = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("frame_bgl"),
            entries: &[helpers::uniform_entry(0, false)],
        });
        let frame_uniform_buffer = helpers::create_uniform_buffer(
            &device,
            "frame_uniforms",
            std::mem::size_of::<FrameUniforms>() as u64,
        );
        let frame_bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("frame_bg"),
            layout: &frame_bgl,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: frame_uniform_buffer.as_entire_binding(),
            }],
        });

        // group 1: per-shape transform and color, one aligned slot per shape
        let shape_stride =
            uniforms::align_to(std::mem::size_of::<ShapeUniforms>() as u64, UNIFORM_ALIGN);
        let shape_bgl = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("shape_bgl"),
            entries: &[helpers::uniform_entry(0, true)],
        });
        let shape_uniform_buffer = helpers::create_uniform_buffer(
            &device,
            "shape_uniforms",
            shape_stride * MAX_SHAPES as u64,
        );
        let shape_bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("shape_bg"),
            layout: &shape_bgl,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: wgpu::BindingResource::Buffer(wgpu::BufferBinding {
                    buffer: &shape_uniform_buffer,
                    offset: 0,
                    size: wgpu::BufferSize::new(std::mem::size_of::<ShapeUniforms>() as u64),
                }),
            }],
        });

        let scene_shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("scene_shader"),
            source: wgpu::ShaderSource::Wgsl(SCENE_WGSL.into()),
        });
        let scene_pl = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("scene_pl"),
            bind_group_layouts: &[&frame_bgl, &shape_bgl],
            push_constant_ranges: &[],
        });
        let solid_pipeline = helpers::make_pipeline(
            &device,
            &helpers::PipelineDesc {
                label: "solid_pipeline",
                layout: &scene_pl,
                shader: &scene_shader,
                buffers: &[MESH_VERTEX_LAYOUT],
                topology: wgpu::PrimitiveTopology::TriangleList,
                color_format: format,
                blend: wgpu::BlendState::ALPHA_BLENDING,
                depth_write: true,
            },
        );
        let wire_pipeline = helpers::make_pipeline(
            &device,
            &helpers::PipelineDesc {
                label: "wire_pipeline",
                layout: &scene_pl,
                shader: &scene_shader,
                buffers: &[MESH_VERTEX_LAYOUT],
                topology: wgpu::PrimitiveTopology::LineList,
                color_format: format,
                blend: wgpu::BlendState::ALPHA_BLENDING,
                depth_write: true,
            },
        );

        let particle_shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("particle_shader"),
            source: wgpu::ShaderSource::Wgsl(PARTICLES_WGSL.into()),
        });
        let particle_pl = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("particle_pl"),
            bind_group_layouts: &[&frame_bgl],
            push_constant_ranges: &[],
        });
        let particle_pipeline = helpers::make_pipeline(
            &device,
            &helpers::PipelineDesc {
                label: "particle_pipeline",
                layout: &particle_pl,
                shader: &particle_shader,
                buffers: &[PARTICLE_INSTANCE_LAYOUT],
                topology: wgpu::PrimitiveTopology::TriangleList,
                color_format: format,
                blend: helpers::ADDITIVE_BLENDING,
                depth_write: false,
            },
        );

        let meshes = ShapeMeshes::upload(&device);

        Ok(Self {
            surface,
            device,
            queue,
            config,
            targets,
            frame_uniform_buffer,
            frame_bind_group,
            shape_uniform_buffer,
            shape_bind_group,
            shape_stride,
            solid_pipeline,
            wire_pipeline,
            meshes,
            particle_pipeline,
            particle_buffer: None,
            particle_capacity: 0,
            particle_scratch: Vec::new(),
            shape_scratch: Vec::new(),
            width,
            height,
        })
    }

    /// Reconfigure the surface and depth target. Equal or zero sizes are
    /// no-ops.
    pub fn resize_if_needed(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }
        if width != self.width || height != self.height {
            self.width = width;
            self.height = height;
            self.config.width = width;
            self.config.height = height;
            self.surface.configure(&self.device, &self.config);
            self.targets.recreate(&self.device, width, height);
            log::debug!("[gpu] resized to {}x{}", width, height);
        }
    }

    fn ensure_particle_capacity(&mut self, count: usize) {
        if count <= self.particle_capacity && self.particle_buffer.is_some() {
            return;
        }
        let capacity = count.max(1).next_power_of_two();
        self.particle_buffer = Some(self.device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("particle_instances"),
            size: (capacity * std::mem::size_of::<ParticleInstance>()) as u64,
            usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        }));
        self.particle_capacity = capacity;
    }

    pub fn render(&mut self, frame: &FrameView<'_>) -> Result<(), wgpu::SurfaceError> {
        let (w, h) = frame.camera.viewport();
        self.resize_if_needed(w, h);

        let fu = uniforms::frame_uniforms(frame, SHININESS, SPECULAR);
        self.queue
            .write_buffer(&self.frame_uniform_buffer, 0, bytemuck::bytes_of(&fu));

        let shapes = frame
            .scene
            .map(|s| &s.shapes[..s.shapes.len().min(MAX_SHAPES)])
            .unwrap_or(&[]);
        if !shapes.is_empty() {
            let stride = self.shape_stride as usize;
            self.shape_scratch.clear();
            self.shape_scratch.resize(stride * shapes.len(), 0);
            for (i, shape) in shapes.iter().enumerate() {
                let su = uniforms::shape_uniforms(shape);
                let bytes = bytemuck::bytes_of(&su);
                self.shape_scratch[i * stride..i * stride + bytes.len()].copy_from_slice(bytes);
            }
            self.queue
                .write_buffer(&self.shape_uniform_buffer, 0, &self.shape_scratch);
        }

        let particle_count = match frame.scene {
            Some(scene) if !scene.particles.is_empty() => {
                let mut scratch = std::mem::take(&mut self.particle_scratch);
                uniforms::particle_instances(&scene.particles, &mut scratch);
                self.ensure_particle_capacity(scratch.len());
                if let Some(buf) = &self.particle_buffer {
                    self.queue
                        .write_buffer(buf, 0, bytemuck::cast_slice(&scratch));
                }
                let n = scratch.len() as u32;
                self.particle_scratch = scratch;
                n
            }
            _ => 0,
        };

        let clear = frame.ambient.clear.to_linear();
        let clear_color = wgpu::Color {
            r: clear.r as f64,
            g: clear.g as f64,
            b: clear.b as f64,
            a: 1.0,
        };

        let output = self.surface.get_current_texture()?;
        let view = output
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());
        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("encoder"),
            });
        {
            let mut rpass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("scene_pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(clear_color),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: Some(wgpu::RenderPassDepthStencilAttachment {
                    view: &self.targets.depth_view,
                    depth_ops: Some(wgpu::Operations {
                        load: wgpu::LoadOp::Clear(1.0),
                        store: wgpu::StoreOp::Store,
                    }),
                    stencil_ops: None,
                }),
                timestamp_writes: None,
                occlusion_query_set: None,
            });
            rpass.set_bind_group(0, &self.frame_bind_group, &[]);

            for (i, shape) in shapes.iter().enumerate() {
                let Some(mesh) = self.meshes.get(shape.kind) else {
                    continue;
                };
                let offset = (i as u64 * self.shape_stride) as u32;
                rpass.set_bind_group(1, &self.shape_bind_group, &[offset]);
                rpass.set_vertex_buffer(0, mesh.vertex_buffer.slice(..));
                if shape.wireframe {
                    rpass.set_pipeline(&self.wire_pipeline);
                    rpass.set_index_buffer(mesh.line_buffer.slice(..), wgpu::IndexFormat::Uint32);
                    rpass.draw_indexed(0..mesh.line_count, 0, 0..1);
                } else {
                    rpass.set_pipeline(&self.solid_pipeline);
                    rpass.set_index_buffer(mesh.index_buffer.slice(..), wgpu::IndexFormat::Uint32);
                    rpass.draw_indexed(0..mesh.index_count, 0, 0..1);
                }
            }

            if let (Some(buf), true) = (&self.particle_buffer, particle_count > 0) {
                rpass.set_pipeline(&self.particle_pipeline);
                rpass.set_vertex_buffer(0, buf.slice(..));
                rpass.draw(0..6, 0..particle_count);
            }
        }
        self.queue.submit(Some(encoder.finish()));
        output.present();
        Ok(())
    }
}

impl DrawTarget for GpuState<'_> {
    fn draw(&mut self, frame: &FrameView<'_>) {
        match self.render(frame) {
            Ok(()) => {}
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                self.surface.configure(&self.device, &self.config);
                log::warn!("[gpu] surface lost, reconfigured");
            }
            Err(e) => log::error!("[gpu] render error: {:?}", e),
        }
    }
}
