//! Light types for the scene

use bytemuck::{Pod, Zeroable};
use glam::{Vec3, Vec4};

/// A light source in the scene
#[derive(Debug, Clone)]
pub enum Light {
    /// Radiates from a point in all directions
    Point {
        position: Vec3,
        color: Vec3,
        intensity: f32,
    },
    /// Uniform fill with no position or direction
    Ambient { color: Vec3, intensity: f32 },
}

impl Light {
    pub fn point(position: Vec3, color: Vec3, intensity: f32) -> Self {
        Self::Point {
            position,
            color,
            intensity,
        }
    }

    pub fn ambient(color: Vec3, intensity: f32) -> Self {
        Self::Ambient { color, intensity }
    }

    pub fn color(&self) -> Vec3 {
        match self {
            Self::Point { color, .. } => *color,
            Self::Ambient { color, .. } => *color,
        }
    }

    /// World position, for lights that have one
    pub fn position(&self) -> Option<Vec3> {
        match self {
            Self::Point { position, .. } => Some(*position),
            Self::Ambient { .. } => None,
        }
    }
}

/// GPU-friendly lighting block with one point slot and one ambient slot
#[repr(C)]
#[derive(Debug, Clone, Copy, Pod, Zeroable)]
pub struct LightsUniformData {
    /// xyz = point light position, w = unused
    pub point_position: Vec4,
    /// xyz = point light color, w = intensity
    pub point_color: Vec4,
    /// xyz = ambient color, w = intensity
    pub ambient_color: Vec4,
}

impl LightsUniformData {
    /// Pack the scene's lights. The last light of each kind wins its slot;
    /// absent kinds stay zeroed, which the shader reads as "off".
    pub fn pack(lights: &[Light]) -> Self {
        let mut data = Self::zeroed();
        for light in lights {
            match light {
                Light::Point {
                    position,
                    color,
                    intensity,
                } => {
                    data.point_position = position.extend(0.0);
                    data.point_color = color.extend(*intensity);
                }
                Light::Ambient { color, intensity } => {
                    data.ambient_color = color.extend(*intensity);
                }
            }
        }
        data
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pack_point_and_ambient() {
        let lights = [
            Light::point(Vec3::new(5.0, 5.0, 5.0), Vec3::ONE, 1.0),
            Light::ambient(Vec3::ONE, 0.4),
        ];

        let data = LightsUniformData::pack(&lights);
        assert_eq!(data.point_position, Vec4::new(5.0, 5.0, 5.0, 0.0));
        assert_eq!(data.point_color, Vec4::new(1.0, 1.0, 1.0, 1.0));
        assert_eq!(data.ambient_color, Vec4::new(1.0, 1.0, 1.0, 0.4));
    }

    #[test]
    fn test_pack_empty_is_dark() {
        let data = LightsUniformData::pack(&[]);
        assert_eq!(data.point_color, Vec4::ZERO);
        assert_eq!(data.ambient_color, Vec4::ZERO);
    }

    #[test]
    fn test_only_point_lights_have_position() {
        let point = Light::point(Vec3::X, Vec3::ONE, 1.0);
        let ambient = Light::ambient(Vec3::ONE, 1.0);

        assert_eq!(point.position(), Some(Vec3::X));
        assert_eq!(ambient.position(), None);
    }
}
