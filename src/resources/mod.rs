//! Resource management
//!
//! CPU-side meshes, materials, and textures, registered once at startup
//! and referenced by index from scene objects.

mod material;
mod mesh;
mod texture;

pub use material::*;
pub use mesh::*;
pub use texture::*;

/// All CPU-side resources for one scene. Scene objects refer to entries
/// by the index returned from the add_* methods; the renderer uploads
/// them to the GPU as-is.
#[derive(Default)]
pub struct Assets {
    pub meshes: Vec<Mesh>,
    pub materials: Vec<Material>,
    pub textures: Vec<TextureData>,
}

impl Assets {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a mesh, returning its ID
    pub fn add_mesh(&mut self, mesh: Mesh) -> usize {
        self.meshes.push(mesh);
        self.meshes.len() - 1
    }

    /// Register a material, returning its ID
    pub fn add_material(&mut self, material: Material) -> usize {
        self.materials.push(material);
        self.materials.len() - 1
    }

    /// Register a texture, returning its ID
    pub fn add_texture(&mut self, texture: TextureData) -> usize {
        self.textures.push(texture);
        self.textures.len() - 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_are_sequential() {
        let mut assets = Assets::new();
        assert_eq!(assets.add_mesh(Mesh::cube(1.0)), 0);
        assert_eq!(assets.add_mesh(Mesh::sphere(1.0, 8, 4)), 1);
        assert_eq!(assets.add_texture(TextureData::white()), 0);
        assert_eq!(assets.add_material(Material::new("a")), 0);
        assert_eq!(assets.add_material(Material::new("b")), 1);
    }
}
