//! Material definitions

use bytemuck::{Pod, Zeroable};
use glam::Vec4;

/// Surface appearance: a base color plus optional textures.
#[derive(Debug, Clone)]
pub struct Material {
    pub name: String,
    pub base_color: Vec4,
    pub metallic: f32,
    pub roughness: f32,

    /// Texture IDs (None means use default)
    pub base_color_texture: Option<usize>,
    pub normal_texture: Option<usize>,
}

impl Default for Material {
    fn default() -> Self {
        Self {
            name: "default".to_string(),
            base_color: Vec4::new(1.0, 1.0, 1.0, 1.0),
            metallic: 0.0,
            roughness: 1.0,
            base_color_texture: None,
            normal_texture: None,
        }
    }
}

impl Material {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            ..Default::default()
        }
    }

    pub fn with_base_color(mut self, color: Vec4) -> Self {
        self.base_color = color;
        self
    }

    pub fn with_metallic(mut self, metallic: f32) -> Self {
        self.metallic = metallic;
        self
    }

    pub fn with_roughness(mut self, roughness: f32) -> Self {
        self.roughness = roughness;
        self
    }

    pub fn with_base_color_texture(mut self, texture: usize) -> Self {
        self.base_color_texture = Some(texture);
        self
    }

    pub fn with_normal_texture(mut self, texture: usize) -> Self {
        self.normal_texture = Some(texture);
        self
    }

    /// Create a uniform data struct for GPU
    pub fn uniform_data(&self) -> MaterialUniformData {
        MaterialUniformData {
            base_color: self.base_color,
            metallic_roughness: [self.metallic, self.roughness, 0.0, 0.0],
        }
    }
}

/// Material uniform data for GPU
#[repr(C)]
#[derive(Debug, Clone, Copy, Pod, Zeroable)]
pub struct MaterialUniformData {
    pub base_color: Vec4,
    pub metallic_roughness: [f32; 4], // x=metallic, y=roughness, zw=padding
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_sets_texture_slots() {
        let material = Material::new("moon")
            .with_base_color_texture(3)
            .with_normal_texture(4);
        assert_eq!(material.base_color_texture, Some(3));
        assert_eq!(material.normal_texture, Some(4));
    }

    #[test]
    fn test_uniform_data_packs_params() {
        let material = Material::new("torus")
            .with_base_color(Vec4::new(1.0, 0.388, 0.278, 1.0))
            .with_metallic(0.25)
            .with_roughness(0.75);
        let data = material.uniform_data();
        assert_eq!(data.base_color.x, 1.0);
        assert_eq!(data.metallic_roughness[0], 0.25);
        assert_eq!(data.metallic_roughness[1], 0.75);
    }
}
