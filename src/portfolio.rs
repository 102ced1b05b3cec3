//! The portfolio scene: a spinning torus over a grid, a moon and an avatar
//! cube waiting further down the scroll, and two hundred scattered stars.

use glam::{Vec3, Vec4};

use crate::resources::{Assets, Material, Mesh, TextureData};
use crate::scene::{starfield, Camera, Helper, Light, Projection, Scene, SceneObject};

const CAMERA_FOV_DEGREES: f32 = 75.0;
const CAMERA_NEAR: f32 = 0.1;
const CAMERA_FAR: f32 = 1000.0;
const CAMERA_START: Vec3 = Vec3::new(0.0, 0.0, 30.0);

/// Tomato (0xFF6347)
const TORUS_COLOR: Vec4 = Vec4::new(1.0, 0.39, 0.28, 1.0);
const TORUS_SPIN: Vec3 = Vec3::new(0.025, 0.005, 0.001);

const MOON_POSITION: Vec3 = Vec3::new(-10.0, 0.0, 30.0);
const MOON_SPIN: Vec3 = Vec3::new(0.005, 0.0, 0.0);
const MOON_SCROLL_KICK: Vec3 = Vec3::new(0.05, 0.075, 0.05);

const AVATAR_POSITION: Vec3 = Vec3::new(2.0, 0.0, -5.0);
const AVATAR_SPIN: Vec3 = Vec3::new(0.0, 0.005, 0.0);
const AVATAR_SCROLL_KICK: Vec3 = Vec3::new(0.0, 0.01, 0.01);

const STAR_COUNT: usize = 200;
const STAR_SPREAD: f32 = 100.0;
const STAR_SEED: u64 = 42;

const LIGHT_POSITION: Vec3 = Vec3::new(5.0, 5.0, 5.0);
const LIGHT_GIZMO_RADIUS: f32 = 1.0;

const GRID_SIZE: f32 = 200.0;
const GRID_DIVISIONS: u32 = 50;
const GRID_COLOR: Vec4 = Vec4::new(0.53, 0.53, 0.53, 1.0);
const GRID_CENTER_COLOR: Vec4 = Vec4::new(0.27, 0.27, 0.27, 1.0);

const SPACE_TEXTURE_PATH: &str = "assets/space.jpg";
const AVATAR_TEXTURE_PATH: &str = "assets/avatar.png";
const MOON_TEXTURE_PATH: &str = "assets/moon.jpg";
const MOON_NORMAL_PATH: &str = "assets/normal.jpg";

/// Build the complete portfolio scene, registering its meshes, materials,
/// and textures into `assets`. Missing texture files fall back to
/// procedural stand-ins so the scene always comes up.
pub fn build(assets: &mut Assets, aspect: f32) -> Scene {
    let camera = Camera::new(
        CAMERA_START,
        Projection::perspective(CAMERA_FOV_DEGREES, aspect, CAMERA_NEAR, CAMERA_FAR),
    );
    let mut scene = Scene::new(camera);

    // Textures
    let space_tex = assets.add_texture(TextureData::load_or(
        SPACE_TEXTURE_PATH,
        TextureData::star_speckle(512, 600, 7),
    ));
    let avatar_tex = assets.add_texture(TextureData::load_or(
        AVATAR_TEXTURE_PATH,
        TextureData::checkerboard(64, [230, 180, 120, 255], [60, 60, 70, 255]),
    ));
    let moon_tex = assets.add_texture(TextureData::load_or(
        MOON_TEXTURE_PATH,
        TextureData::solid_color([160, 160, 160, 255], "moon_gray"),
    ));
    let moon_normal_tex = assets.add_texture(TextureData::load_or(
        MOON_NORMAL_PATH,
        TextureData::default_normal(),
    ));

    // Meshes
    let torus_id = assets.add_mesh(Mesh::torus(10.0, 3.0, 16, 100));
    let moon_id = assets.add_mesh(Mesh::sphere(3.0, 32, 32));
    let avatar_id = assets.add_mesh(Mesh::cube(3.0));
    let star_id = assets.add_mesh(Mesh::sphere(0.25, 24, 24));

    // Materials
    let torus_mat = assets.add_material(Material::new("torus").with_base_color(TORUS_COLOR));
    let moon_mat = assets.add_material(
        Material::new("moon")
            .with_base_color_texture(moon_tex)
            .with_normal_texture(moon_normal_tex),
    );
    let avatar_mat = assets.add_material(Material::new("avatar").with_base_color_texture(avatar_tex));
    let star_mat = assets.add_material(Material::new("star"));

    // Hero torus at the origin
    scene.add_object(SceneObject::new(torus_id, torus_mat).with_spin(TORUS_SPIN));

    // Avatar cube
    // TODO: the avatar cube is easy to lose from the start pose; confirm the
    // intended placement before moving it.
    scene.add_object(
        SceneObject::new(avatar_id, avatar_mat)
            .with_position(AVATAR_POSITION)
            .with_spin(AVATAR_SPIN)
            .with_scroll_spin(AVATAR_SCROLL_KICK),
    );

    // Moon
    scene.add_object(
        SceneObject::new(moon_id, moon_mat)
            .with_position(MOON_POSITION)
            .with_spin(MOON_SPIN)
            .with_scroll_spin(MOON_SCROLL_KICK),
    );

    // Star field
    for position in starfield::scatter(STAR_COUNT, STAR_SPREAD, STAR_SEED) {
        scene.add_object(SceneObject::new(star_id, star_mat).with_position(position));
    }

    // Lights, with a gizmo marking where the point light sits
    let key_light = Light::point(LIGHT_POSITION, Vec3::ONE, 1.0);
    if let Some(position) = key_light.position() {
        scene.add_helper(Helper::light_gizmo(
            position,
            LIGHT_GIZMO_RADIUS,
            key_light.color().extend(1.0),
        ));
    }
    scene.add_light(key_light);
    scene.add_light(Light::ambient(Vec3::ONE, 1.0));

    // Ground grid
    scene.add_helper(Helper::grid(
        GRID_SIZE,
        GRID_DIVISIONS,
        GRID_COLOR,
        GRID_CENTER_COLOR,
    ));

    scene.set_background(space_tex);
    scene
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::LightsUniformData;

    fn built() -> (Assets, Scene) {
        let mut assets = Assets::new();
        let scene = build(&mut assets, 16.0 / 9.0);
        (assets, scene)
    }

    #[test]
    fn test_entity_count() {
        let (_, scene) = built();
        // 3 feature meshes + 200 stars + 2 lights + 2 helpers
        assert_eq!(scene.entity_count(), 207);
        assert_eq!(scene.objects.len(), 203);
        assert_eq!(scene.lights.len(), 2);
        assert_eq!(scene.helpers.len(), 2);
    }

    #[test]
    fn test_stars_share_resources() {
        let (assets, _) = built();
        assert_eq!(assets.meshes.len(), 4);
        assert_eq!(assets.materials.len(), 4);
        assert_eq!(assets.textures.len(), 4);
    }

    #[test]
    fn test_stars_within_spread() {
        let (_, scene) = built();
        let stars = &scene.objects[3..];
        assert_eq!(stars.len(), 200);
        for star in stars {
            let p = star.transform.position;
            assert!(p.x.abs() <= STAR_SPREAD / 2.0);
            assert!(p.y.abs() <= STAR_SPREAD / 2.0);
            assert!(p.z.abs() <= STAR_SPREAD / 2.0);
        }
    }

    #[test]
    fn test_torus_spins_without_scroll_kick() {
        let (_, scene) = built();
        assert_eq!(scene.objects[0].spin, Some(TORUS_SPIN));
        assert_eq!(scene.objects[0].scroll_spin, None);
    }

    #[test]
    fn test_two_scroll_kicked_objects() {
        let (_, scene) = built();
        let kicked = scene
            .objects
            .iter()
            .filter(|o| o.scroll_spin.is_some())
            .count();
        assert_eq!(kicked, 2);
    }

    #[test]
    fn test_camera_start_position() {
        let (_, scene) = built();
        assert_eq!(scene.camera.position, CAMERA_START);
    }

    #[test]
    fn test_background_wired() {
        let (assets, scene) = built();
        let id = scene.background.unwrap();
        assert!(id < assets.textures.len());
    }

    #[test]
    fn test_render_data_reads_are_idempotent() {
        let (_, scene) = built();

        let camera_first = bytemuck::bytes_of(&scene.camera.uniform_data()).to_vec();
        let camera_second = bytemuck::bytes_of(&scene.camera.uniform_data()).to_vec();
        assert_eq!(camera_first, camera_second);

        let lights_first = bytemuck::bytes_of(&LightsUniformData::pack(&scene.lights)).to_vec();
        let lights_second = bytemuck::bytes_of(&LightsUniformData::pack(&scene.lights)).to_vec();
        assert_eq!(lights_first, lights_second);

        for object in &scene.objects {
            let first = object.transform.uniform_data();
            let second = object.transform.uniform_data();
            assert_eq!(bytemuck::bytes_of(&first), bytemuck::bytes_of(&second));
        }
    }
}
