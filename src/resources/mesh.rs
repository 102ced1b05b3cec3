//! Mesh data structures and generation

use bytemuck::{Pod, Zeroable};
use glam::{Vec2, Vec3, Vec4};

/// Standard vertex format: position, normal, uv, tangent.
///
/// The tangent w component stores handedness for reconstructing the
/// bitangent in the shader.
#[repr(C)]
#[derive(Debug, Copy, Clone, Pod, Zeroable)]
pub struct Vertex {
    pub position: Vec3,
    pub normal: Vec3,
    pub uv: Vec2,
    pub tangent: Vec4,
}

impl Vertex {
    const ATTRIBUTES: [wgpu::VertexAttribute; 4] = [
        wgpu::VertexAttribute {
            format: wgpu::VertexFormat::Float32x3,
            offset: 0,
            shader_location: 0,
        },
        wgpu::VertexAttribute {
            format: wgpu::VertexFormat::Float32x3,
            offset: 12,
            shader_location: 1,
        },
        wgpu::VertexAttribute {
            format: wgpu::VertexFormat::Float32x2,
            offset: 24,
            shader_location: 2,
        },
        wgpu::VertexAttribute {
            format: wgpu::VertexFormat::Float32x4,
            offset: 32,
            shader_location: 3,
        },
    ];

    pub fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<Vertex>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &Self::ATTRIBUTES,
        }
    }
}

/// A mesh with vertex and index data
#[derive(Debug, Clone)]
pub struct Mesh {
    pub vertices: Vec<Vertex>,
    pub indices: Vec<u32>,
    pub name: String,
}

impl Mesh {
    pub fn new(name: &str) -> Self {
        Self {
            vertices: Vec::new(),
            indices: Vec::new(),
            name: name.to_string(),
        }
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn index_count(&self) -> usize {
        self.indices.len()
    }

    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Get vertex data as bytes
    pub fn vertex_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.vertices)
    }

    /// Get index data as bytes
    pub fn index_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.indices)
    }

    /// Create a torus in the XY plane.
    ///
    /// `radius` is the distance from the torus center to the middle of the
    /// tube, `tube_radius` the radius of the tube itself. `radial_segments`
    /// subdivide the tube cross-section, `tubular_segments` the main ring.
    pub fn torus(radius: f32, tube_radius: f32, radial_segments: u32, tubular_segments: u32) -> Self {
        let mut mesh = Mesh::new("torus");

        let ring_step = 2.0 * std::f32::consts::PI / radial_segments as f32;
        let tube_step = 2.0 * std::f32::consts::PI / tubular_segments as f32;

        for ring in 0..=radial_segments {
            let v = ring as f32 * ring_step;
            let (sin_v, cos_v) = v.sin_cos();

            for segment in 0..=tubular_segments {
                let u = segment as f32 * tube_step;
                let (sin_u, cos_u) = u.sin_cos();

                // Tube cross-section center, then offset outward by the tube
                let center = Vec3::new(radius * cos_u, radius * sin_u, 0.0);
                let position = Vec3::new(
                    (radius + tube_radius * cos_v) * cos_u,
                    (radius + tube_radius * cos_v) * sin_u,
                    tube_radius * sin_v,
                );
                let normal = (position - center).normalize();

                let uv = Vec2::new(
                    segment as f32 / tubular_segments as f32,
                    ring as f32 / radial_segments as f32,
                );

                // Tangent along the direction of travel around the main ring
                let tangent = Vec3::new(-sin_u, cos_u, 0.0);

                mesh.vertices.push(Vertex {
                    position,
                    normal,
                    uv,
                    tangent: tangent.extend(1.0),
                });
            }
        }

        for ring in 0..radial_segments {
            for segment in 0..tubular_segments {
                let current = ring * (tubular_segments + 1) + segment;
                let next = current + tubular_segments + 1;

                mesh.indices.extend_from_slice(&[
                    current,
                    current + 1,
                    next,
                    current + 1,
                    next + 1,
                    next,
                ]);
            }
        }

        mesh
    }

    /// Create a UV sphere
    pub fn sphere(radius: f32, segments: u32, rings: u32) -> Self {
        let mut mesh = Mesh::new("sphere");

        let segment_angle = 2.0 * std::f32::consts::PI / segments as f32;
        let ring_angle = std::f32::consts::PI / rings as f32;

        for ring in 0..=rings {
            let phi = ring as f32 * ring_angle;
            let y = phi.cos();
            let ring_radius = phi.sin();

            for segment in 0..=segments {
                let theta = segment as f32 * segment_angle;
                let x = ring_radius * theta.cos();
                let z = ring_radius * theta.sin();

                let normal = Vec3::new(x, y, z);
                let uv = Vec2::new(
                    segment as f32 / segments as f32,
                    ring as f32 / rings as f32,
                );

                // Tangent along the theta direction
                let tangent = Vec3::new(-theta.sin(), 0.0, theta.cos());

                mesh.vertices.push(Vertex {
                    position: normal * radius,
                    normal,
                    uv,
                    tangent: tangent.extend(1.0),
                });
            }
        }

        for ring in 0..rings {
            for segment in 0..segments {
                let current = ring * (segments + 1) + segment;
                let next = current + segments + 1;

                mesh.indices.extend_from_slice(&[
                    current,
                    current + 1,
                    next,
                    current + 1,
                    next + 1,
                    next,
                ]);
            }
        }

        mesh
    }

    /// Create an axis-aligned cube centered at the origin
    pub fn cube(size: f32) -> Self {
        let mut mesh = Mesh::new("cube");
        let h = size / 2.0;

        let faces = [
            // Front face
            (Vec3::new(-h, -h, h), Vec3::Z, Vec2::new(0.0, 1.0)),
            (Vec3::new(h, -h, h), Vec3::Z, Vec2::new(1.0, 1.0)),
            (Vec3::new(h, h, h), Vec3::Z, Vec2::new(1.0, 0.0)),
            (Vec3::new(-h, h, h), Vec3::Z, Vec2::new(0.0, 0.0)),
            // Back face
            (Vec3::new(h, -h, -h), -Vec3::Z, Vec2::new(0.0, 1.0)),
            (Vec3::new(-h, -h, -h), -Vec3::Z, Vec2::new(1.0, 1.0)),
            (Vec3::new(-h, h, -h), -Vec3::Z, Vec2::new(1.0, 0.0)),
            (Vec3::new(h, h, -h), -Vec3::Z, Vec2::new(0.0, 0.0)),
            // Right face
            (Vec3::new(h, -h, h), Vec3::X, Vec2::new(0.0, 1.0)),
            (Vec3::new(h, -h, -h), Vec3::X, Vec2::new(1.0, 1.0)),
            (Vec3::new(h, h, -h), Vec3::X, Vec2::new(1.0, 0.0)),
            (Vec3::new(h, h, h), Vec3::X, Vec2::new(0.0, 0.0)),
            // Left face
            (Vec3::new(-h, -h, -h), -Vec3::X, Vec2::new(0.0, 1.0)),
            (Vec3::new(-h, -h, h), -Vec3::X, Vec2::new(1.0, 1.0)),
            (Vec3::new(-h, h, h), -Vec3::X, Vec2::new(1.0, 0.0)),
            (Vec3::new(-h, h, -h), -Vec3::X, Vec2::new(0.0, 0.0)),
            // Top face
            (Vec3::new(-h, h, h), Vec3::Y, Vec2::new(0.0, 1.0)),
            (Vec3::new(h, h, h), Vec3::Y, Vec2::new(1.0, 1.0)),
            (Vec3::new(h, h, -h), Vec3::Y, Vec2::new(1.0, 0.0)),
            (Vec3::new(-h, h, -h), Vec3::Y, Vec2::new(0.0, 0.0)),
            // Bottom face
            (Vec3::new(-h, -h, -h), -Vec3::Y, Vec2::new(0.0, 1.0)),
            (Vec3::new(h, -h, -h), -Vec3::Y, Vec2::new(1.0, 1.0)),
            (Vec3::new(h, -h, h), -Vec3::Y, Vec2::new(1.0, 0.0)),
            (Vec3::new(-h, -h, h), -Vec3::Y, Vec2::new(0.0, 0.0)),
        ];

        for (position, normal, uv) in faces {
            // Tangent points along the U direction of the face
            let tangent = if normal.abs().y > 0.9 {
                Vec4::new(1.0, 0.0, 0.0, 1.0)
            } else {
                let right = Vec3::Y.cross(normal).normalize();
                right.extend(1.0)
            };

            mesh.vertices.push(Vertex {
                position,
                normal,
                uv,
                tangent,
            });
        }

        for face in 0..6 {
            let base = face * 4;
            mesh.indices.extend_from_slice(&[
                base,
                base + 1,
                base + 2,
                base,
                base + 2,
                base + 3,
            ]);
        }

        mesh
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_torus_counts() {
        let mesh = Mesh::torus(10.0, 3.0, 16, 100);
        // (radial+1) * (tubular+1) = 17 * 101
        assert_eq!(mesh.vertex_count(), 17 * 101);
        // radial * tubular * 6
        assert_eq!(mesh.index_count(), 16 * 100 * 6);
        assert_eq!(mesh.triangle_count(), 16 * 100 * 2);
    }

    #[test]
    fn test_torus_normals_unit_length() {
        let mesh = Mesh::torus(10.0, 3.0, 8, 12);
        for vertex in &mesh.vertices {
            assert!((vertex.normal.length() - 1.0).abs() < 1e-5);
        }
    }

    #[test]
    fn test_torus_positions_within_bounds() {
        let mesh = Mesh::torus(10.0, 3.0, 16, 100);
        for vertex in &mesh.vertices {
            let planar = (vertex.position.x * vertex.position.x
                + vertex.position.y * vertex.position.y)
                .sqrt();
            assert!(planar <= 13.0 + 1e-4);
            assert!(planar >= 7.0 - 1e-4);
            assert!(vertex.position.z.abs() <= 3.0 + 1e-4);
        }
    }

    #[test]
    fn test_sphere_counts() {
        let mesh = Mesh::sphere(0.25, 24, 24);
        assert_eq!(mesh.vertex_count(), 25 * 25);
        assert_eq!(mesh.index_count(), 24 * 24 * 6);
    }

    #[test]
    fn test_sphere_radius() {
        let mesh = Mesh::sphere(3.0, 32, 32);
        for vertex in &mesh.vertices {
            assert!((vertex.position.length() - 3.0).abs() < 1e-4);
        }
    }

    #[test]
    fn test_cube_counts() {
        let mesh = Mesh::cube(3.0);
        assert_eq!(mesh.vertex_count(), 24);
        assert_eq!(mesh.index_count(), 36);
        for vertex in &mesh.vertices {
            assert_eq!(vertex.position.abs().max_element(), 1.5);
        }
    }

    #[test]
    fn test_vertex_layout_stride() {
        let layout = Vertex::layout();
        assert_eq!(layout.array_stride, 48);
        assert_eq!(layout.attributes.len(), 4);
    }
}
