//! A single-scene 3D portfolio renderer: a spinning hero torus, a moon, an
//! avatar cube, and a field of stars over a space backdrop, drawn with wgpu
//! and driven by scroll and orbit camera controls.
//!
//! # Features
//! - Procedural torus, sphere, and cube meshes with tangent frames
//! - Blinn-Phong shading with a point light, an ambient term, and
//!   tangent-space normal mapping
//! - Scroll-driven camera dolly with a click-drag orbit mode
//! - Grid and light gizmo line helpers
//! - Textures loaded from disk, with procedural stand-ins when missing

pub mod engine;
pub mod portfolio;
pub mod resources;
pub mod scene;

pub use engine::{Engine, RenderError, RenderResult};

/// Configuration for the renderer window
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Window title
    pub title: String,
    /// Initial window width
    pub width: u32,
    /// Initial window height
    pub height: u32,
    /// Enable vsync
    pub vsync: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            title: "Space Portfolio".to_string(),
            width: 1280,
            height: 720,
            vsync: true,
        }
    }
}
