//! CPU-side mesh generation.
//!
//! The renderer draws real meshes instead of camera-facing point sprites:
//! spheres for orbs, cubes for the gems, octahedra for the star and a unit
//! quad for every textured plane. Vertices carry position, normal and UV.

use bytemuck::{Pod, Zeroable};
use std::f32::consts::{PI, TAU};

#[repr(C)]
#[derive(Copy, Clone, Debug, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
    pub uv: [f32; 2],
}

/// An indexed triangle mesh.
pub struct Mesh {
    pub vertices: Vec<Vertex>,
    pub indices: Vec<u16>,
}

impl Mesh {
    /// UV sphere of given radius.
    pub fn uv_sphere(radius: f32, sectors: u32, stacks: u32) -> Self {
        let mut vertices = Vec::new();
        let mut indices = Vec::new();

        for stack in 0..=stacks {
            let phi = PI * stack as f32 / stacks as f32;
            for sector in 0..=sectors {
                let theta = TAU * sector as f32 / sectors as f32;
                let normal = [
                    phi.sin() * theta.cos(),
                    phi.cos(),
                    phi.sin() * theta.sin(),
                ];
                vertices.push(Vertex {
                    position: [normal[0] * radius, normal[1] * radius, normal[2] * radius],
                    normal,
                    uv: [
                        sector as f32 / sectors as f32,
                        stack as f32 / stacks as f32,
                    ],
                });
            }
        }

        for stack in 0..stacks {
            for sector in 0..sectors {
                let k1 = (stack * (sectors + 1) + sector) as u16;
                let k2 = k1 + (sectors + 1) as u16;
                if stack != 0 {
                    indices.extend_from_slice(&[k1, k2, k1 + 1]);
                }
                if stack != stacks - 1 {
                    indices.extend_from_slice(&[k1 + 1, k2, k2 + 1]);
                }
            }
        }

        Self { vertices, indices }
    }

    /// Axis-aligned cube with the given half-extent, flat-shaded.
    pub fn cube(half: f32) -> Self {
        // One normal per face, four vertices each.
        const FACES: [([f32; 3], [f32; 3], [f32; 3]); 6] = [
            ([1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]),
            ([-1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, -1.0]),
            ([0.0, 1.0, 0.0], [0.0, 0.0, 1.0], [1.0, 0.0, 0.0]),
            ([0.0, -1.0, 0.0], [0.0, 0.0, -1.0], [1.0, 0.0, 0.0]),
            ([0.0, 0.0, 1.0], [0.0, 1.0, 0.0], [-1.0, 0.0, 0.0]),
            ([0.0, 0.0, -1.0], [0.0, 1.0, 0.0], [1.0, 0.0, 0.0]),
        ];

        let mut vertices = Vec::with_capacity(24);
        let mut indices = Vec::with_capacity(36);
        for (f, (normal, up, right)) in FACES.iter().enumerate() {
            let base = (f * 4) as u16;
            for (u, v) in [(-1.0f32, -1.0f32), (1.0, -1.0), (1.0, 1.0), (-1.0, 1.0)] {
                let position = [
                    (normal[0] + right[0] * u + up[0] * v) * half,
                    (normal[1] + right[1] * u + up[1] * v) * half,
                    (normal[2] + right[2] * u + up[2] * v) * half,
                ];
                vertices.push(Vertex {
                    position,
                    normal: *normal,
                    uv: [(u + 1.0) / 2.0, (v + 1.0) / 2.0],
                });
            }
            indices.extend_from_slice(&[base, base + 1, base + 2, base, base + 2, base + 3]);
        }

        Self { vertices, indices }
    }

    /// Octahedron with the given circumradius, flat-shaded.
    pub fn octahedron(radius: f32) -> Self {
        let apex = [
            [0.0, radius, 0.0],
            [0.0, -radius, 0.0],
        ];
        let ring = [
            [radius, 0.0, 0.0],
            [0.0, 0.0, radius],
            [-radius, 0.0, 0.0],
            [0.0, 0.0, -radius],
        ];

        let mut vertices = Vec::with_capacity(24);
        let mut indices = Vec::with_capacity(24);
        for (apex_idx, apex_pos) in apex.iter().enumerate() {
            for i in 0..4 {
                // Wind the lower faces the other way so they face outward.
                let (a, b) = if apex_idx == 0 {
                    (ring[(i + 1) % 4], ring[i])
                } else {
                    (ring[i], ring[(i + 1) % 4])
                };
                let normal = face_normal(*apex_pos, a, b);
                let base = vertices.len() as u16;
                for position in [*apex_pos, a, b] {
                    vertices.push(Vertex {
                        position,
                        normal,
                        uv: [0.5, 0.5],
                    });
                }
                indices.extend_from_slice(&[base, base + 1, base + 2]);
            }
        }

        Self { vertices, indices }
    }

    /// Quad in the XY plane, normal +Z, UV origin at the top-left so images
    /// read upright.
    pub fn quad(width: f32, height: f32) -> Self {
        let (hw, hh) = (width / 2.0, height / 2.0);
        let vertices = vec![
            Vertex { position: [-hw, -hh, 0.0], normal: [0.0, 0.0, 1.0], uv: [0.0, 1.0] },
            Vertex { position: [hw, -hh, 0.0], normal: [0.0, 0.0, 1.0], uv: [1.0, 1.0] },
            Vertex { position: [hw, hh, 0.0], normal: [0.0, 0.0, 1.0], uv: [1.0, 0.0] },
            Vertex { position: [-hw, hh, 0.0], normal: [0.0, 0.0, 1.0], uv: [0.0, 0.0] },
        ];
        let indices = vec![0, 1, 2, 0, 2, 3];
        Self { vertices, indices }
    }
}

fn face_normal(a: [f32; 3], b: [f32; 3], c: [f32; 3]) -> [f32; 3] {
    let u = [b[0] - a[0], b[1] - a[1], b[2] - a[2]];
    let v = [c[0] - a[0], c[1] - a[1], c[2] - a[2]];
    let n = [
        u[1] * v[2] - u[2] * v[1],
        u[2] * v[0] - u[0] * v[2],
        u[0] * v[1] - u[1] * v[0],
    ];
    let len = (n[0] * n[0] + n[1] * n[1] + n[2] * n[2]).sqrt().max(1e-6);
    [n[0] / len, n[1] / len, n[2] / len]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sphere_counts() {
        let mesh = Mesh::uv_sphere(1.0, 16, 16);
        assert_eq!(mesh.vertices.len(), 17 * 17);
        // Top and bottom stacks contribute one triangle per sector.
        assert_eq!(mesh.indices.len() as u32, (16 * 16 * 2 - 16 * 2) * 3);
    }

    #[test]
    fn test_sphere_on_surface() {
        let mesh = Mesh::uv_sphere(2.0, 8, 8);
        for v in &mesh.vertices {
            let r = (v.position[0].powi(2) + v.position[1].powi(2) + v.position[2].powi(2)).sqrt();
            assert!((r - 2.0).abs() < 1e-4);
        }
    }

    #[test]
    fn test_cube_counts() {
        let mesh = Mesh::cube(0.5);
        assert_eq!(mesh.vertices.len(), 24);
        assert_eq!(mesh.indices.len(), 36);
        for v in &mesh.vertices {
            for c in v.position {
                assert!((c.abs() - 0.5).abs() < 1e-6);
            }
        }
    }

    #[test]
    fn test_octahedron_normals_outward() {
        let mesh = Mesh::octahedron(1.0);
        assert_eq!(mesh.indices.len(), 24);
        for tri in mesh.indices.chunks(3) {
            let v = &mesh.vertices[tri[0] as usize];
            // Face centroid and normal point the same way.
            let centroid: Vec<f32> = (0..3)
                .map(|axis| tri.iter().map(|&i| mesh.vertices[i as usize].position[axis]).sum::<f32>() / 3.0)
                .collect();
            let dot = centroid[0] * v.normal[0] + centroid[1] * v.normal[1] + centroid[2] * v.normal[2];
            assert!(dot > 0.0, "inward-facing octahedron face");
        }
    }

    #[test]
    fn test_quad_dimensions() {
        let mesh = Mesh::quad(0.8, 1.0);
        assert_eq!(mesh.vertices.len(), 4);
        assert_eq!(mesh.indices.len(), 6);
        assert!((mesh.vertices[1].position[0] - 0.4).abs() < 1e-6);
        assert!((mesh.vertices[2].position[1] - 0.5).abs() < 1e-6);
    }
}
