//! Visual debug helpers rendered as line lists

use bytemuck::{Pod, Zeroable};
use glam::{Vec3, Vec4};

const CIRCLE_SEGMENTS: usize = 32;

/// Vertex format for helper lines
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
pub struct LineVertex {
    pub position: [f32; 3],
    pub color: [f32; 4],
}

impl LineVertex {
    const ATTRIBUTES: [wgpu::VertexAttribute; 2] = [
        wgpu::VertexAttribute {
            format: wgpu::VertexFormat::Float32x3,
            offset: 0,
            shader_location: 0,
        },
        wgpu::VertexAttribute {
            format: wgpu::VertexFormat::Float32x4,
            offset: 12,
            shader_location: 1,
        },
    ];

    pub fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<LineVertex>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &Self::ATTRIBUTES,
        }
    }
}

/// A retained set of colored line segments (two vertices per segment)
#[derive(Debug, Clone)]
pub struct Helper {
    pub name: String,
    vertices: Vec<LineVertex>,
}

impl Helper {
    fn empty(name: &str) -> Self {
        Self {
            name: name.to_string(),
            vertices: Vec::new(),
        }
    }

    /// Square grid on the XZ plane, `size` units across with `divisions`
    /// cells per side. The two lines crossing the origin use `center_color`
    /// so the axes stay readable.
    pub fn grid(size: f32, divisions: u32, color: Vec4, center_color: Vec4) -> Self {
        let mut helper = Self::empty("grid");
        let half = size * 0.5;
        let step = size / divisions as f32;

        for k in 0..=divisions {
            let offset = -half + k as f32 * step;
            let line_color = if 2 * k == divisions {
                center_color
            } else {
                color
            };
            // Line along X
            helper.push_line(
                Vec3::new(-half, 0.0, offset),
                Vec3::new(half, 0.0, offset),
                line_color,
            );
            // Line along Z
            helper.push_line(
                Vec3::new(offset, 0.0, -half),
                Vec3::new(offset, 0.0, half),
                line_color,
            );
        }
        helper
    }

    /// Wireframe marker for a point light: three great circles (XY, XZ, YZ
    /// planes) around the light's position.
    pub fn light_gizmo(center: Vec3, radius: f32, color: Vec4) -> Self {
        let mut helper = Self::empty("light gizmo");
        helper.push_circle(center, radius, Vec3::X, Vec3::Y, color);
        helper.push_circle(center, radius, Vec3::X, Vec3::Z, color);
        helper.push_circle(center, radius, Vec3::Y, Vec3::Z, color);
        helper
    }

    fn push_line(&mut self, start: Vec3, end: Vec3, color: Vec4) {
        self.vertices.push(LineVertex {
            position: start.to_array(),
            color: color.to_array(),
        });
        self.vertices.push(LineVertex {
            position: end.to_array(),
            color: color.to_array(),
        });
    }

    fn push_circle(&mut self, center: Vec3, radius: f32, axis_a: Vec3, axis_b: Vec3, color: Vec4) {
        let mut prev = center + axis_a * radius;
        for i in 1..=CIRCLE_SEGMENTS {
            let angle = (i as f32) * std::f32::consts::TAU / CIRCLE_SEGMENTS as f32;
            let (sin, cos) = angle.sin_cos();
            let point = center + (axis_a * cos + axis_b * sin) * radius;
            self.push_line(prev, point, color);
            prev = point;
        }
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn vertices(&self) -> &[LineVertex] {
        &self.vertices
    }

    pub fn vertex_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.vertices)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_vertex_count() {
        let grid = Helper::grid(200.0, 50, Vec4::splat(0.5), Vec4::ONE);
        // 51 lines per axis * 2 axes * 2 vertices = 204
        assert_eq!(grid.vertex_count(), 204);
    }

    #[test]
    fn test_grid_in_plane_and_extent() {
        let grid = Helper::grid(200.0, 50, Vec4::splat(0.5), Vec4::ONE);
        for vertex in grid.vertices() {
            assert_eq!(vertex.position[1], 0.0);
            assert!(vertex.position[0].abs() <= 100.0);
            assert!(vertex.position[2].abs() <= 100.0);
        }
    }

    #[test]
    fn test_grid_center_color() {
        let center_color = Vec4::new(1.0, 0.0, 0.0, 1.0);
        let grid = Helper::grid(200.0, 50, Vec4::splat(0.5), center_color);
        let center_vertices = grid
            .vertices()
            .iter()
            .filter(|v| v.color == center_color.to_array())
            .count();
        // One line per axis crosses the origin: 2 lines * 2 vertices = 4
        assert_eq!(center_vertices, 4);
    }

    #[test]
    fn test_light_gizmo_vertex_count() {
        let gizmo = Helper::light_gizmo(Vec3::ZERO, 1.0, Vec4::ONE);
        // 3 circles * 32 segments * 2 vertices = 192
        assert_eq!(gizmo.vertex_count(), 192);
    }

    #[test]
    fn test_light_gizmo_on_sphere() {
        let center = Vec3::new(5.0, 5.0, 5.0);
        let gizmo = Helper::light_gizmo(center, 2.0, Vec4::ONE);
        for vertex in gizmo.vertices() {
            let distance = (Vec3::from_array(vertex.position) - center).length();
            assert!((distance - 2.0).abs() < 1e-4);
        }
    }

    #[test]
    fn test_line_vertex_layout() {
        let layout = LineVertex::layout();
        assert_eq!(layout.array_stride, 28);
        assert_eq!(layout.attributes.len(), 2);
    }
}
