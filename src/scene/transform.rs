//! Object transforms

use bytemuck::{Pod, Zeroable};
use glam::{Mat4, Quat, Vec3};

/// Position, rotation, and scale of a scene object.
///
/// Rotation is stored as Euler angles (radians, XYZ order) because the
/// animation model advances individual axes by fixed increments each
/// frame; keeping the angles directly makes those increments exact.
#[derive(Debug, Clone, Copy)]
pub struct Transform {
    pub position: Vec3,
    pub rotation: Vec3,
    pub scale: Vec3,
}

impl Default for Transform {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            rotation: Vec3::ZERO,
            scale: Vec3::ONE,
        }
    }
}

impl Transform {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_position(position: Vec3) -> Self {
        Self {
            position,
            ..Default::default()
        }
    }

    /// Rotate by euler angles (radians), accumulating per axis
    pub fn rotate_euler(&mut self, delta: Vec3) {
        self.rotation += delta;
    }

    /// Get the model matrix for this transform
    pub fn matrix(&self) -> Mat4 {
        let rotation = Quat::from_euler(
            glam::EulerRot::XYZ,
            self.rotation.x,
            self.rotation.y,
            self.rotation.z,
        );
        Mat4::from_scale_rotation_translation(self.scale, rotation, self.position)
    }

    /// Get the normal matrix (inverse transpose of model matrix)
    pub fn normal_matrix(&self) -> Mat4 {
        self.matrix().inverse().transpose()
    }

    /// Build uniform data for shaders
    pub fn uniform_data(&self) -> TransformUniformData {
        let model = self.matrix();
        TransformUniformData {
            model,
            normal_matrix: model.inverse().transpose(),
        }
    }
}

/// Transform uniform data for GPU
#[repr(C)]
#[derive(Debug, Clone, Copy, Pod, Zeroable)]
pub struct TransformUniformData {
    pub model: Mat4,
    pub normal_matrix: Mat4,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rotation_accumulates_per_axis() {
        let mut transform = Transform::new();
        let delta = Vec3::new(0.025, 0.005, 0.001);
        let mut expected = Vec3::ZERO;
        for _ in 0..100 {
            transform.rotate_euler(delta);
            expected += delta;
        }
        // Bit-exact: rotate_euler is plain per-axis accumulation
        assert_eq!(transform.rotation, expected);
        assert!((transform.rotation - delta * 100.0).length() < 1e-4);
    }

    #[test]
    fn test_default_matrix_is_identity() {
        let transform = Transform::new();
        assert!(transform.matrix().abs_diff_eq(Mat4::IDENTITY, 1e-6));
    }

    #[test]
    fn test_matrix_applies_translation() {
        let transform = Transform::from_position(Vec3::new(2.0, 0.0, -5.0));
        let matrix = transform.matrix();
        let origin = matrix.transform_point3(Vec3::ZERO);
        assert!((origin - Vec3::new(2.0, 0.0, -5.0)).length() < 1e-6);
    }
}
