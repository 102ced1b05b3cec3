//! Scene management

mod camera;
mod camera_controller;
mod helpers;
mod light;
pub mod starfield;
mod transform;

pub use camera::*;
pub use camera_controller::*;
pub use helpers::*;
pub use light::*;
pub use transform::*;

use glam::Vec3;

/// A renderable object in the scene
///
/// Meshes and materials are referenced by id into the [`Assets`] store they
/// were built from, so the scene itself stays cheap to clone and inspect.
///
/// [`Assets`]: crate::resources::Assets
#[derive(Debug, Clone)]
pub struct SceneObject {
    pub mesh_id: usize,
    pub material_id: usize,
    pub transform: Transform,
    /// Euler deltas applied every animation tick
    pub spin: Option<Vec3>,
    /// Euler deltas applied once per scroll event, independent of how far
    /// the scroll moved
    pub scroll_spin: Option<Vec3>,
}

impl SceneObject {
    pub fn new(mesh_id: usize, material_id: usize) -> Self {
        Self {
            mesh_id,
            material_id,
            transform: Transform::default(),
            spin: None,
            scroll_spin: None,
        }
    }

    pub fn with_position(mut self, position: Vec3) -> Self {
        self.transform.position = position;
        self
    }

    pub fn with_spin(mut self, spin: Vec3) -> Self {
        self.spin = Some(spin);
        self
    }

    pub fn with_scroll_spin(mut self, scroll_spin: Vec3) -> Self {
        self.scroll_spin = Some(scroll_spin);
        self
    }
}

/// The scene containing all renderable content
pub struct Scene {
    pub camera: Camera,
    pub objects: Vec<SceneObject>,
    pub helpers: Vec<Helper>,
    pub lights: Vec<Light>,
    /// Texture id of the image stretched behind everything else
    pub background: Option<usize>,
}

impl Scene {
    pub fn new(camera: Camera) -> Self {
        Self {
            camera,
            objects: Vec::new(),
            helpers: Vec::new(),
            lights: Vec::new(),
            background: None,
        }
    }

    /// Add a render object to the scene
    pub fn add_object(&mut self, object: SceneObject) -> usize {
        let id = self.objects.len();
        self.objects.push(object);
        id
    }

    /// Add a line helper to the scene
    pub fn add_helper(&mut self, helper: Helper) {
        self.helpers.push(helper);
    }

    /// Add a light to the scene
    pub fn add_light(&mut self, light: Light) {
        self.lights.push(light);
    }

    pub fn set_background(&mut self, texture_id: usize) {
        self.background = Some(texture_id);
    }

    /// Advance one animation tick: every spinning object accumulates its
    /// per-frame Euler deltas.
    pub fn animate(&mut self) {
        for object in &mut self.objects {
            if let Some(spin) = object.spin {
                object.transform.rotate_euler(spin);
            }
        }
    }

    /// React to one scroll event: every scroll-sensitive object accumulates
    /// its kick, no matter how far the scroll moved.
    pub fn on_scroll_event(&mut self) {
        for object in &mut self.objects {
            if let Some(kick) = object.scroll_spin {
                object.transform.rotate_euler(kick);
            }
        }
    }

    /// Number of renderable and light entities (the camera is not counted)
    pub fn entity_count(&self) -> usize {
        self.objects.len() + self.helpers.len() + self.lights.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec4;

    fn test_scene() -> Scene {
        Scene::new(Camera::new(
            Vec3::new(0.0, 0.0, 30.0),
            Projection::perspective(75.0, 16.0 / 9.0, 0.1, 1000.0),
        ))
    }

    #[test]
    fn test_animate_accumulates_spin() {
        let mut scene = test_scene();
        let spin = Vec3::new(0.025, 0.005, 0.001);
        scene.add_object(SceneObject::new(0, 0).with_spin(spin));

        let mut expected = Vec3::ZERO;
        for _ in 0..3 {
            scene.animate();
            expected += spin;
        }

        assert_eq!(scene.objects[0].transform.rotation, expected);
    }

    #[test]
    fn test_static_objects_stay_still() {
        let mut scene = test_scene();
        scene.add_object(SceneObject::new(0, 0));

        scene.animate();
        scene.on_scroll_event();

        assert_eq!(scene.objects[0].transform.rotation, Vec3::ZERO);
    }

    #[test]
    fn test_scroll_kicks_marked_objects() {
        let mut scene = test_scene();
        let kick = Vec3::new(0.05, 0.075, 0.05);
        scene.add_object(SceneObject::new(0, 0).with_scroll_spin(kick));
        scene.add_object(SceneObject::new(1, 0).with_spin(Vec3::new(0.025, 0.005, 0.001)));

        scene.on_scroll_event();
        scene.on_scroll_event();

        let mut expected = Vec3::ZERO;
        expected += kick;
        expected += kick;
        assert_eq!(scene.objects[0].transform.rotation, expected);
        assert_eq!(scene.objects[1].transform.rotation, Vec3::ZERO);
    }

    #[test]
    fn test_entity_count_sums_parts() {
        let mut scene = test_scene();
        scene.add_object(SceneObject::new(0, 0));
        scene.add_object(SceneObject::new(1, 1));
        scene.add_helper(Helper::grid(200.0, 50, Vec4::splat(0.5), Vec4::ONE));
        scene.add_light(Light::ambient(Vec3::ONE, 1.0));

        assert_eq!(scene.entity_count(), 4);
    }
}
