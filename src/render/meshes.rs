use super::helpers;
use fnv::FnvHashMap;
use portfolio_core::{build_mesh, MeshVertex, ShapeKind};

pub(crate) struct MeshBuffers {
    pub(crate) vertex_buffer: wgpu::Buffer,
    pub(crate) index_buffer: wgpu::Buffer,
    pub(crate) index_count: u32,
    pub(crate) line_buffer: wgpu::Buffer,
    pub(crate) line_count: u32,
}

/// One uploaded mesh per shape kind, with both triangle and edge indices.
pub(crate) struct ShapeMeshes {
    meshes: FnvHashMap<ShapeKind, MeshBuffers>,
}

impl ShapeMeshes {
    pub(crate) fn upload(device: &wgpu::Device) -> Self {
        let mut meshes = FnvHashMap::default();
        for kind in ShapeKind::ALL {
            let mesh = build_mesh(kind);
            let lines = mesh.wireframe_indices();
            let label = format!("{kind:?}");
            meshes.insert(
                kind,
                MeshBuffers {
                    vertex_buffer: helpers::create_init_buffer(
                        device,
                        &format!("{label}_vertices"),
                        bytemuck::cast_slice(&mesh.vertices),
                        wgpu::BufferUsages::VERTEX,
                    ),
                    index_buffer: helpers::create_init_buffer(
                        device,
                        &format!("{label}_indices"),
                        bytemuck::cast_slice(&mesh.indices),
                        wgpu::BufferUsages::INDEX,
                    ),
                    index_count: mesh.indices.len() as u32,
                    line_buffer: helpers::create_init_buffer(
                        device,
                        &format!("{label}_lines"),
                        bytemuck::cast_slice(&lines),
                        wgpu::BufferUsages::INDEX,
                    ),
                    line_count: lines.len() as u32,
                },
            );
        }
        log::info!("[gpu] uploaded {} shape meshes", meshes.len());
        Self { meshes }
    }

    pub(crate) fn get(&self, kind: ShapeKind) -> Option<&MeshBuffers> {
        self.meshes.get(&kind)
    }
}

pub(crate) const MESH_VERTEX_LAYOUT: wgpu::VertexBufferLayout<'static> = wgpu::VertexBufferLayout {
    array_stride: std::mem::size_of::<MeshVertex>() as wgpu::BufferAddress,
    step_mode: wgpu::VertexStepMode::Vertex,
    attributes: &[
        wgpu::VertexAttribute {
            offset: 0,
            shader_location: 0,
            format: wgpu::VertexFormat::Float32x3,
        },
        wgpu::VertexAttribute {
            offset: 12,
            shader_location: 1,
            format: wgpu::VertexFormat::Float32x3,
        },
    ],
};
