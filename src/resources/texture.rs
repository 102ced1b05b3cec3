//! Texture loading and procedural fallbacks

use image::{DynamicImage, GenericImageView};
use std::path::Path;

/// Loaded texture data, ready for GPU upload.
pub struct TextureData {
    pub width: u32,
    pub height: u32,
    pub format: wgpu::TextureFormat,
    pub data: Vec<u8>,
    pub name: String,
}

impl TextureData {
    /// Load texture from file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, String> {
        let path = path.as_ref();
        let name = path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("unknown")
            .to_string();

        let img = image::open(path).map_err(|e| e.to_string())?;
        Ok(Self::from_image(img, &name))
    }

    /// Load texture from bytes
    pub fn from_bytes(bytes: &[u8], name: &str) -> Result<Self, String> {
        let img = image::load_from_memory(bytes).map_err(|e| e.to_string())?;
        Ok(Self::from_image(img, name))
    }

    /// Load texture from file, or fall back to a generated texture.
    pub fn load_or(path: &str, fallback: TextureData) -> Self {
        match Self::from_file(path) {
            Ok(texture) => texture,
            Err(e) => {
                log::warn!("failed to load {path}: {e}; using {}", fallback.name);
                fallback
            }
        }
    }

    fn from_image(img: DynamicImage, name: &str) -> Self {
        let (width, height) = img.dimensions();
        let rgba = img.to_rgba8();

        Self {
            width,
            height,
            format: wgpu::TextureFormat::Rgba8UnormSrgb,
            data: rgba.into_raw(),
            name: name.to_string(),
        }
    }

    /// Create a solid color texture
    pub fn solid_color(color: [u8; 4], name: &str) -> Self {
        Self {
            width: 1,
            height: 1,
            format: wgpu::TextureFormat::Rgba8UnormSrgb,
            data: color.to_vec(),
            name: name.to_string(),
        }
    }

    /// Create a default white texture
    pub fn white() -> Self {
        Self::solid_color([255, 255, 255, 255], "white")
    }

    /// Create a default normal map (pointing up)
    pub fn default_normal() -> Self {
        // Normal pointing up: (0, 0, 1) in tangent space
        // Encoded as RGB: (0.5, 0.5, 1.0) * 255 = (128, 128, 255)
        // Normal maps hold vectors, not color, so the format stays linear.
        Self {
            width: 1,
            height: 1,
            format: wgpu::TextureFormat::Rgba8Unorm,
            data: vec![128, 128, 255, 255],
            name: "default_normal".to_string(),
        }
    }

    /// Create a checkerboard texture
    pub fn checkerboard(size: u32, color1: [u8; 4], color2: [u8; 4]) -> Self {
        let mut data = Vec::with_capacity((size * size * 4) as usize);

        for y in 0..size {
            for x in 0..size {
                let is_even = ((x / 8) + (y / 8)) % 2 == 0;
                let color = if is_even { color1 } else { color2 };
                data.extend_from_slice(&color);
            }
        }

        Self {
            width: size,
            height: size,
            format: wgpu::TextureFormat::Rgba8UnormSrgb,
            data,
            name: "checkerboard".to_string(),
        }
    }

    /// Create a night-sky texture: a near-black field with scattered
    /// white speckles. Deterministic for a given seed.
    pub fn star_speckle(size: u32, star_count: u32, seed: u64) -> Self {
        let mut data = vec![0u8; (size * size * 4) as usize];
        for pixel in data.chunks_exact_mut(4) {
            pixel.copy_from_slice(&[4, 5, 12, 255]);
        }

        let mut rng = seed;
        let mut rand = move || {
            rng = rng
                .wrapping_mul(6364136223846793005)
                .wrapping_add(1442695040888963407);
            (rng >> 32) as f32 / u32::MAX as f32
        };

        for _ in 0..star_count {
            let x = (rand() * size as f32) as u32 % size;
            let y = (rand() * size as f32) as u32 % size;
            let brightness = 140 + (rand() * 115.0) as u8;
            let offset = ((y * size + x) * 4) as usize;
            data[offset..offset + 4].copy_from_slice(&[brightness, brightness, brightness, 255]);
        }

        Self {
            width: size,
            height: size,
            format: wgpu::TextureFormat::Rgba8UnormSrgb,
            data,
            name: "star_speckle".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_star_speckle_deterministic() {
        let a = TextureData::star_speckle(64, 100, 7);
        let b = TextureData::star_speckle(64, 100, 7);
        assert_eq!(a.data, b.data);
        assert_eq!(a.data.len(), 64 * 64 * 4);
    }

    #[test]
    fn test_default_normal_is_linear() {
        let normal = TextureData::default_normal();
        assert_eq!(normal.format, wgpu::TextureFormat::Rgba8Unorm);
        assert_eq!(normal.data, vec![128, 128, 255, 255]);
    }
}
