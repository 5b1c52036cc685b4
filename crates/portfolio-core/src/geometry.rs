//! Triangle meshes for the five shape kinds.

use crate::scene::ShapeKind;
use fnv::FnvHashSet;
use glam::Vec3;
use std::f32::consts::{PI, TAU};

// Shape dimensions (world units)
pub const BOX_SIZE: f32 = 2.0;
pub const SPHERE_RADIUS: f32 = 1.5;
pub const SPHERE_SEGMENTS: u32 = 32;
pub const CONE_RADIUS: f32 = 1.0;
pub const CONE_HEIGHT: f32 = 3.0;
pub const CONE_SEGMENTS: u32 = 8;
pub const TORUS_RADIUS: f32 = 1.5;
pub const TORUS_TUBE: f32 = 0.5;
pub const TORUS_RADIAL_SEGMENTS: u32 = 16;
pub const TORUS_TUBULAR_SEGMENTS: u32 = 100;
pub const OCTAHEDRON_RADIUS: f32 = 2.0;

#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct MeshVertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
}

impl MeshVertex {
    fn new(position: Vec3, normal: Vec3) -> Self {
        Self {
            position: position.to_array(),
            normal: normal.normalize_or_zero().to_array(),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct MeshData {
    pub vertices: Vec<MeshVertex>,
    /// Triangle list.
    pub indices: Vec<u32>,
}

impl MeshData {
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Line-list indices covering every distinct triangle edge once.
    pub fn wireframe_indices(&self) -> Vec<u32> {
        let mut seen: FnvHashSet<(u32, u32)> = FnvHashSet::default();
        let mut lines = Vec::with_capacity(self.indices.len() * 2);
        for tri in self.indices.chunks_exact(3) {
            for (a, b) in [(tri[0], tri[1]), (tri[1], tri[2]), (tri[2], tri[0])] {
                let key = (a.min(b), a.max(b));
                if seen.insert(key) {
                    lines.push(key.0);
                    lines.push(key.1);
                }
            }
        }
        lines
    }

    fn push(&mut self, v: MeshVertex) -> u32 {
        self.vertices.push(v);
        (self.vertices.len() - 1) as u32
    }
}

pub fn build_mesh(kind: ShapeKind) -> MeshData {
    match kind {
        ShapeKind::Box => box_mesh(BOX_SIZE),
        ShapeKind::Sphere => sphere_mesh(SPHERE_RADIUS, SPHERE_SEGMENTS, SPHERE_SEGMENTS),
        ShapeKind::Cone => cone_mesh(CONE_RADIUS, CONE_HEIGHT, CONE_SEGMENTS),
        ShapeKind::Torus => torus_mesh(
            TORUS_RADIUS,
            TORUS_TUBE,
            TORUS_RADIAL_SEGMENTS,
            TORUS_TUBULAR_SEGMENTS,
        ),
        ShapeKind::Octahedron => octahedron_mesh(OCTAHEDRON_RADIUS),
    }
}

fn box_mesh(size: f32) -> MeshData {
    let h = size / 2.0;
    let mut mesh = MeshData::default();
    // (normal, u axis, v axis); u x v == normal keeps faces counter-clockwise
    let faces = [
        (Vec3::X, Vec3::NEG_Z, Vec3::Y),
        (Vec3::NEG_X, Vec3::Z, Vec3::Y),
        (Vec3::Y, Vec3::X, Vec3::NEG_Z),
        (Vec3::NEG_Y, Vec3::X, Vec3::Z),
        (Vec3::Z, Vec3::X, Vec3::Y),
        (Vec3::NEG_Z, Vec3::NEG_X, Vec3::Y),
    ];
    for (n, u, v) in faces {
        let c = n * h;
        let corners = [
            c - u * h - v * h,
            c + u * h - v * h,
            c + u * h + v * h,
            c - u * h + v * h,
        ];
        let base = mesh.vertices.len() as u32;
        for p in corners {
            mesh.push(MeshVertex::new(p, n));
        }
        mesh.indices
            .extend_from_slice(&[base, base + 1, base + 2, base, base + 2, base + 3]);
    }
    mesh
}

fn sphere_mesh(radius: f32, width_segments: u32, height_segments: u32) -> MeshData {
    let mut mesh = MeshData::default();
    for iy in 0..=height_segments {
        let v = iy as f32 / height_segments as f32;
        let theta = v * PI;
        for ix in 0..=width_segments {
            let u = ix as f32 / width_segments as f32;
            let phi = u * TAU;
            let n = Vec3::new(
                -phi.cos() * theta.sin(),
                theta.cos(),
                phi.sin() * theta.sin(),
            );
            mesh.push(MeshVertex::new(n * radius, n));
        }
    }
    let row = width_segments + 1;
    for iy in 0..height_segments {
        for ix in 0..width_segments {
            let a = iy * row + ix + 1;
            let b = iy * row + ix;
            let c = (iy + 1) * row + ix;
            let d = (iy + 1) * row + ix + 1;
            // the pole rows collapse to a point; skip their degenerate halves
            if iy != 0 {
                mesh.indices.extend_from_slice(&[a, b, d]);
            }
            if iy != height_segments - 1 {
                mesh.indices.extend_from_slice(&[b, c, d]);
            }
        }
    }
    mesh
}

fn cone_mesh(radius: f32, height: f32, radial_segments: u32) -> MeshData {
    let mut mesh = MeshData::default();
    let half = height / 2.0;
    let apex = Vec3::new(0.0, half, 0.0);
    let ring = |i: u32| {
        let a = i as f32 / radial_segments as f32 * TAU;
        (a.sin(), a.cos())
    };
    for i in 0..radial_segments {
        let (s0, c0) = ring(i);
        let (s1, c1) = ring(i + 1);
        let p0 = Vec3::new(radius * s0, -half, radius * c0);
        let p1 = Vec3::new(radius * s1, -half, radius * c1);
        let n0 = Vec3::new(s0 * height, radius, c0 * height);
        let n1 = Vec3::new(s1 * height, radius, c1 * height);
        let na = (n0 + n1) * 0.5;
        let ia = mesh.push(MeshVertex::new(apex, na));
        let i0 = mesh.push(MeshVertex::new(p0, n0));
        let i1 = mesh.push(MeshVertex::new(p1, n1));
        mesh.indices.extend_from_slice(&[ia, i0, i1]);
    }
    let center = mesh.push(MeshVertex::new(Vec3::new(0.0, -half, 0.0), Vec3::NEG_Y));
    let first = mesh.vertices.len() as u32;
    for i in 0..=radial_segments {
        let (s, c) = ring(i);
        mesh.push(MeshVertex::new(
            Vec3::new(radius * s, -half, radius * c),
            Vec3::NEG_Y,
        ));
    }
    for i in 0..radial_segments {
        mesh.indices
            .extend_from_slice(&[center, first + i + 1, first + i]);
    }
    mesh
}

fn torus_mesh(radius: f32, tube: f32, radial_segments: u32, tubular_segments: u32) -> MeshData {
    let mut mesh = MeshData::default();
    for j in 0..=radial_segments {
        let v = j as f32 / radial_segments as f32 * TAU;
        for i in 0..=tubular_segments {
            let u = i as f32 / tubular_segments as f32 * TAU;
            let p = Vec3::new(
                (radius + tube * v.cos()) * u.cos(),
                (radius + tube * v.cos()) * u.sin(),
                tube * v.sin(),
            );
            let center = Vec3::new(radius * u.cos(), radius * u.sin(), 0.0);
            mesh.push(MeshVertex::new(p, p - center));
        }
    }
    let row = tubular_segments + 1;
    for j in 1..=radial_segments {
        for i in 1..=tubular_segments {
            let a = row * j + i - 1;
            let b = row * (j - 1) + i - 1;
            let c = row * (j - 1) + i;
            let d = row * j + i;
            mesh.indices.extend_from_slice(&[a, b, d, b, c, d]);
        }
    }
    mesh
}

fn octahedron_mesh(radius: f32) -> MeshData {
    let mut mesh = MeshData::default();
    let px = Vec3::X * radius;
    let nx = Vec3::NEG_X * radius;
    let py = Vec3::Y * radius;
    let ny = Vec3::NEG_Y * radius;
    let pz = Vec3::Z * radius;
    let nz = Vec3::NEG_Z * radius;
    let faces = [
        (px, py, pz),
        (pz, py, nx),
        (nx, py, nz),
        (nz, py, px),
        (px, pz, ny),
        (pz, nx, ny),
        (nx, nz, ny),
        (nz, px, ny),
    ];
    for (a, b, c) in faces {
        // flat shading: one normal per face
        let n = (b - a).cross(c - a);
        let ia = mesh.push(MeshVertex::new(a, n));
        let ib = mesh.push(MeshVertex::new(b, n));
        let ic = mesh.push(MeshVertex::new(c, n));
        mesh.indices.extend_from_slice(&[ia, ib, ic]);
    }
    mesh
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_kind_produces_valid_indices_and_unit_normals() {
        for kind in ShapeKind::ALL {
            let mesh = build_mesh(kind);
            assert!(mesh.triangle_count() > 0, "{kind:?} has no triangles");
            let n = mesh.vertices.len() as u32;
            assert!(mesh.indices.iter().all(|&i| i < n), "{kind:?} index out of range");
            for v in &mesh.vertices {
                let len = Vec3::from_array(v.normal).length();
                assert!((len - 1.0).abs() < 1e-4, "{kind:?} normal length {len}");
            }
        }
    }

    #[test]
    fn closed_solids_have_expected_triangle_counts() {
        assert_eq!(build_mesh(ShapeKind::Box).triangle_count(), 12);
        assert_eq!(build_mesh(ShapeKind::Octahedron).triangle_count(), 8);
        assert_eq!(build_mesh(ShapeKind::Cone).triangle_count(), 16);
    }

    #[test]
    fn wireframe_lists_each_edge_once() {
        let mesh = build_mesh(ShapeKind::Octahedron);
        let lines = mesh.wireframe_indices();
        assert_eq!(lines.len() % 2, 0);
        // 8 faces * 3 edges, vertices are not shared between faces
        assert_eq!(lines.len() / 2, 24);
    }

    #[test]
    fn box_normals_point_outward() {
        let mesh = build_mesh(ShapeKind::Box);
        for v in &mesh.vertices {
            let p = Vec3::from_array(v.position);
            let n = Vec3::from_array(v.normal);
            assert!(p.dot(n) > 0.0);
        }
    }
}
