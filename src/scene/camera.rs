//! Camera system

use bytemuck::{Pod, Zeroable};
use glam::{Mat4, Quat, Vec3, Vec4};

/// Perspective projection parameters
#[derive(Debug, Clone, Copy)]
pub struct Projection {
    pub fov_y: f32,
    pub aspect: f32,
    pub near: f32,
    pub far: f32,
}

impl Projection {
    pub fn perspective(fov_y_degrees: f32, aspect: f32, near: f32, far: f32) -> Self {
        Self {
            fov_y: fov_y_degrees.to_radians(),
            aspect,
            near,
            far,
        }
    }

    pub fn matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fov_y, self.aspect, self.near, self.far)
    }

    pub fn set_aspect(&mut self, aspect: f32) {
        self.aspect = aspect;
    }
}

/// Camera for viewing the scene.
///
/// Unlike a look-at camera, position and orientation are independent:
/// the scroll path translates the camera without reorienting it, while
/// orbiting uses [`Camera::look_at`] to point it back at its target.
/// Rotation is Euler angles in radians (x=pitch, y=yaw, z=roll).
#[derive(Debug, Clone)]
pub struct Camera {
    pub position: Vec3,
    pub rotation: Vec3,
    pub projection: Projection,
}

impl Camera {
    pub fn new(position: Vec3, projection: Projection) -> Self {
        Self {
            position,
            rotation: Vec3::ZERO,
            projection,
        }
    }

    /// Point the camera at a target position (roll stays zero)
    pub fn look_at(&mut self, target: Vec3) {
        let dir = (target - self.position).normalize_or_zero();
        if dir == Vec3::ZERO {
            return;
        }
        self.rotation.x = dir.y.clamp(-1.0, 1.0).asin();
        self.rotation.y = (-dir.x).atan2(-dir.z);
        self.rotation.z = 0.0;
    }

    fn rotation_quat(&self) -> Quat {
        // Yaw first, then pitch, then roll: the standard no-roll camera order
        Quat::from_euler(
            glam::EulerRot::YXZ,
            self.rotation.y,
            self.rotation.x,
            self.rotation.z,
        )
    }

    /// World-space forward direction (local -Z)
    pub fn forward(&self) -> Vec3 {
        self.rotation_quat() * -Vec3::Z
    }

    /// Get the view matrix
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::from_rotation_translation(self.rotation_quat(), self.position).inverse()
    }

    /// Get the projection matrix
    pub fn projection_matrix(&self) -> Mat4 {
        self.projection.matrix()
    }

    /// Get combined view-projection matrix
    pub fn view_projection_matrix(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }

    /// Build camera uniform data for shaders
    pub fn uniform_data(&self) -> CameraUniformData {
        CameraUniformData {
            view_proj: self.view_projection_matrix(),
            position: self.position.extend(1.0),
        }
    }

    /// Update aspect ratio for the projection
    pub fn set_aspect(&mut self, width: f32, height: f32) {
        self.projection.set_aspect(width / height.max(1.0));
    }
}

/// Camera uniform data for GPU
#[repr(C)]
#[derive(Debug, Clone, Copy, Pod, Zeroable)]
pub struct CameraUniformData {
    pub view_proj: Mat4,
    pub position: Vec4,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_camera() -> Camera {
        Camera::new(
            Vec3::new(0.0, 0.0, 30.0),
            Projection::perspective(75.0, 16.0 / 9.0, 0.1, 1000.0),
        )
    }

    #[test]
    fn test_default_orientation_looks_down_negative_z() {
        let camera = test_camera();
        assert!((camera.forward() - Vec3::NEG_Z).length() < 1e-6);
    }

    #[test]
    fn test_look_at_origin_from_positive_z_is_identity() {
        let mut camera = test_camera();
        camera.look_at(Vec3::ZERO);
        assert!(camera.rotation.length() < 1e-6);
    }

    #[test]
    fn test_look_at_points_forward_at_target() {
        let mut camera = test_camera();
        camera.position = Vec3::new(10.0, 5.0, -20.0);
        camera.look_at(Vec3::ZERO);
        let expected = (Vec3::ZERO - camera.position).normalize();
        assert!((camera.forward() - expected).length() < 1e-5);
    }

    #[test]
    fn test_view_matrix_moves_world_opposite_to_camera() {
        let camera = test_camera();
        let eye_space = camera.view_matrix().transform_point3(Vec3::ZERO);
        assert!((eye_space - Vec3::new(0.0, 0.0, -30.0)).length() < 1e-5);
    }

    #[test]
    fn test_set_aspect() {
        let mut camera = test_camera();
        camera.set_aspect(1920.0, 1080.0);
        assert!((camera.projection.aspect - 1920.0 / 1080.0).abs() < 1e-6);
    }
}
