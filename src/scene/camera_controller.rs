//! Camera controller system
//!
//! Provides abstract camera control with implementations for:
//! - Scroll: place the camera as a linear function of the page scroll offset
//! - Orbit: rotate around a target point

use glam::{Vec2, Vec3};

use super::Camera;

/// Input state for camera controllers
#[derive(Debug, Clone, Default)]
pub struct CameraInput {
    /// Mouse delta since last frame (in pixels)
    pub mouse_delta: Vec2,

    /// Scroll delta in offset units (negative = scrolled further down)
    pub scroll_delta: f32,

    /// Whether orbiting is active (e.g., left mouse button held)
    pub orbit_active: bool,
}

impl CameraInput {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reset per-frame deltas (call after update)
    pub fn reset_deltas(&mut self) {
        self.mouse_delta = Vec2::ZERO;
        self.scroll_delta = 0.0;
    }
}

/// Abstract camera controller trait
pub trait CameraController {
    /// Update the camera based on input and delta time
    fn update(&mut self, camera: &mut Camera, input: &CameraInput, dt: f32);

    /// Get the controller name for debugging
    fn name(&self) -> &'static str;

    /// Reset the controller to default state
    fn reset(&mut self);
}

/// Scroll-follow camera controller
///
/// Mirrors a web page scroll: an accumulated offset `t` (zero at the top,
/// negative further down) maps straight to camera position:
/// - z = t * z_factor
/// - x = y = t * xy_factor
///
/// The write is absolute, so replaying the same offset always lands the
/// camera in the same place. Until the first scroll arrives the controller
/// leaves the camera where the scene placed it.
pub struct ScrollController {
    /// Accumulated scroll offset, clamped to <= 0
    pub offset: f32,
    /// Offset-to-z factor
    pub z_factor: f32,
    /// Offset-to-x and offset-to-y factor
    pub xy_factor: f32,
    has_scrolled: bool,
}

impl Default for ScrollController {
    fn default() -> Self {
        Self {
            offset: 0.0,
            z_factor: -0.01,
            xy_factor: -0.0002,
            has_scrolled: false,
        }
    }
}

impl ScrollController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Accumulate a scroll delta. The offset saturates at zero, the way a
    /// page cannot scroll above its own top.
    pub fn add_scroll(&mut self, delta: f32) {
        self.offset = (self.offset + delta).min(0.0);
        self.has_scrolled = true;
    }

    /// Camera position for the current offset
    fn target_position(&self) -> Vec3 {
        Vec3::new(
            self.offset * self.xy_factor,
            self.offset * self.xy_factor,
            self.offset * self.z_factor,
        )
    }
}

impl CameraController for ScrollController {
    fn update(&mut self, camera: &mut Camera, input: &CameraInput, _dt: f32) {
        if input.scroll_delta != 0.0 {
            self.add_scroll(input.scroll_delta);
        }

        if self.has_scrolled {
            camera.position = self.target_position();
        }
    }

    fn name(&self) -> &'static str {
        "Scroll"
    }

    fn reset(&mut self) {
        self.offset = 0.0;
        self.has_scrolled = false;
    }
}

/// Orbit camera controller
///
/// Rotates around a target point at a fixed distance.
/// - Mouse drag: orbit around target
pub struct OrbitController {
    /// Target point to orbit around
    pub target: Vec3,
    /// Distance from target
    pub distance: f32,
    /// Current azimuth angle (horizontal) in radians
    pub azimuth: f32,
    /// Current elevation angle (vertical) in radians
    pub elevation: f32,
    /// Minimum elevation (prevent flipping under the bottom pole)
    pub min_elevation: f32,
    /// Maximum elevation (prevent flipping over the top pole)
    pub max_elevation: f32,
    /// Orbit sensitivity (radians per pixel)
    pub orbit_sensitivity: f32,
}

impl Default for OrbitController {
    fn default() -> Self {
        Self {
            target: Vec3::ZERO,
            distance: 30.0,
            azimuth: std::f32::consts::FRAC_PI_2,
            elevation: 0.0,
            min_elevation: -std::f32::consts::FRAC_PI_2 + 0.05,
            max_elevation: std::f32::consts::FRAC_PI_2 - 0.05,
            orbit_sensitivity: 0.005,
        }
    }
}

impl OrbitController {
    pub fn new(target: Vec3, distance: f32) -> Self {
        Self {
            target,
            distance,
            ..Default::default()
        }
    }

    /// Initialize orbit parameters from the camera's current position so
    /// that taking over control does not move the camera.
    pub fn sync_with_camera(&mut self, camera: &Camera) {
        let offset = camera.position - self.target;
        let distance = offset.length();
        if distance > 1e-4 {
            self.distance = distance;
            self.elevation = (offset.y / distance).clamp(-1.0, 1.0).asin();
            self.azimuth = offset.z.atan2(offset.x);
        }
    }

    /// Calculate camera position from orbit parameters
    fn calculate_position(&self) -> Vec3 {
        let x = self.distance * self.elevation.cos() * self.azimuth.cos();
        let y = self.distance * self.elevation.sin();
        let z = self.distance * self.elevation.cos() * self.azimuth.sin();
        self.target + Vec3::new(x, y, z)
    }
}

impl CameraController for OrbitController {
    fn update(&mut self, camera: &mut Camera, input: &CameraInput, _dt: f32) {
        if input.orbit_active && input.mouse_delta != Vec2::ZERO {
            self.azimuth += input.mouse_delta.x * self.orbit_sensitivity;
            self.elevation += input.mouse_delta.y * self.orbit_sensitivity;

            self.elevation = self.elevation.clamp(self.min_elevation, self.max_elevation);
            self.azimuth %= 2.0 * std::f32::consts::PI;
        }

        camera.position = self.calculate_position();
        camera.look_at(self.target);
    }

    fn name(&self) -> &'static str {
        "Orbit"
    }

    fn reset(&mut self) {
        self.azimuth = std::f32::consts::FRAC_PI_2;
        self.elevation = 0.0;
    }
}

/// Which controller currently owns the camera
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CameraMode {
    /// The camera follows the accumulated scroll offset
    FollowingScroll,
    /// The camera orbits the scene origin under pointer drag
    ManualOrbit,
}

/// Switches the camera between scroll-follow and manual orbit.
///
/// Exactly one controller writes the camera per frame: scrolling hands
/// control to the scroll path, grabbing the scene hands it to the orbit
/// path. Entering orbit syncs its spherical parameters from the camera so
/// the handover is seamless; returning to scroll snaps the camera back to
/// the position the offset dictates.
pub struct CameraRig {
    mode: CameraMode,
    pub scroll: ScrollController,
    pub orbit: OrbitController,
}

impl Default for CameraRig {
    fn default() -> Self {
        Self::new()
    }
}

impl CameraRig {
    pub fn new() -> Self {
        Self {
            mode: CameraMode::FollowingScroll,
            scroll: ScrollController::new(),
            orbit: OrbitController::new(Vec3::ZERO, 30.0),
        }
    }

    pub fn mode(&self) -> CameraMode {
        self.mode
    }

    /// Hand the camera to the scroll path
    pub fn follow_scroll(&mut self) {
        self.mode = CameraMode::FollowingScroll;
    }

    /// Hand the camera to the orbit path, picking up from wherever the
    /// camera currently stands
    pub fn manual_orbit(&mut self, camera: &Camera) {
        if self.mode != CameraMode::ManualOrbit {
            self.orbit.sync_with_camera(camera);
            self.mode = CameraMode::ManualOrbit;
        }
    }
}

impl CameraController for CameraRig {
    fn update(&mut self, camera: &mut Camera, input: &CameraInput, dt: f32) {
        match self.mode {
            CameraMode::FollowingScroll => self.scroll.update(camera, input, dt),
            CameraMode::ManualOrbit => self.orbit.update(camera, input, dt),
        }
    }

    fn name(&self) -> &'static str {
        match self.mode {
            CameraMode::FollowingScroll => self.scroll.name(),
            CameraMode::ManualOrbit => self.orbit.name(),
        }
    }

    fn reset(&mut self) {
        self.mode = CameraMode::FollowingScroll;
        self.scroll.reset();
        self.orbit.reset();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::Projection;

    fn test_camera() -> Camera {
        Camera::new(
            Vec3::new(0.0, 0.0, 30.0),
            Projection::perspective(75.0, 16.0 / 9.0, 0.1, 1000.0),
        )
    }

    fn scroll_input(delta: f32) -> CameraInput {
        CameraInput {
            scroll_delta: delta,
            ..Default::default()
        }
    }

    fn drag_input(dx: f32, dy: f32) -> CameraInput {
        CameraInput {
            mouse_delta: Vec2::new(dx, dy),
            orbit_active: true,
            ..Default::default()
        }
    }

    #[test]
    fn test_scroll_position_linear() {
        let mut camera = test_camera();
        let mut controller = ScrollController::new();

        controller.update(&mut camera, &scroll_input(-3000.0), 1.0 / 60.0);

        assert_eq!(camera.position.z, -3000.0 * -0.01);
        assert_eq!(camera.position.x, -3000.0 * -0.0002);
        assert_eq!(camera.position.y, -3000.0 * -0.0002);
    }

    #[test]
    fn test_scroll_accumulates() {
        let mut camera = test_camera();
        let mut controller = ScrollController::new();

        controller.update(&mut camera, &scroll_input(-100.0), 1.0 / 60.0);
        controller.update(&mut camera, &scroll_input(-50.0), 1.0 / 60.0);

        assert_eq!(controller.offset, -150.0);
        assert_eq!(camera.position.z, -150.0 * -0.01);
    }

    #[test]
    fn test_scroll_clamps_at_top() {
        let mut camera = test_camera();
        let mut controller = ScrollController::new();

        controller.update(&mut camera, &scroll_input(500.0), 1.0 / 60.0);

        assert_eq!(controller.offset, 0.0);
        assert_eq!(camera.position, Vec3::ZERO);
    }

    #[test]
    fn test_camera_untouched_before_first_scroll() {
        let mut camera = test_camera();
        let mut controller = ScrollController::new();

        controller.update(&mut camera, &CameraInput::new(), 1.0 / 60.0);

        assert_eq!(camera.position, Vec3::new(0.0, 0.0, 30.0));
    }

    #[test]
    fn test_orbit_sync_recovers_position() {
        let camera = test_camera();
        let mut orbit = OrbitController::new(Vec3::ZERO, 10.0);
        orbit.sync_with_camera(&camera);

        assert!((orbit.distance - 30.0).abs() < 1e-5);
        assert!(orbit.elevation.abs() < 1e-5);

        let restored = orbit.calculate_position();
        assert!((restored - camera.position).length() < 1e-4);
    }

    #[test]
    fn test_drag_moves_on_sphere() {
        let mut camera = test_camera();
        let mut orbit = OrbitController::new(Vec3::ZERO, 30.0);
        orbit.sync_with_camera(&camera);

        // Half a turn of azimuth at default sensitivity.
        let pixels = std::f32::consts::PI / orbit.orbit_sensitivity;
        orbit.update(&mut camera, &drag_input(pixels, 0.0), 1.0 / 60.0);

        assert!((camera.position.length() - 30.0).abs() < 1e-3);
        assert!((camera.position - Vec3::new(0.0, 0.0, -30.0)).length() < 1e-2);
    }

    #[test]
    fn test_orbit_looks_at_target() {
        let mut camera = test_camera();
        let mut orbit = OrbitController::new(Vec3::ZERO, 30.0);
        orbit.sync_with_camera(&camera);

        orbit.update(&mut camera, &drag_input(200.0, -120.0), 1.0 / 60.0);

        let to_target = (orbit.target - camera.position).normalize();
        assert!((camera.forward() - to_target).length() < 1e-4);
    }

    #[test]
    fn test_orbit_ignores_unheld_drag() {
        let mut camera = test_camera();
        let mut orbit = OrbitController::new(Vec3::ZERO, 30.0);
        orbit.sync_with_camera(&camera);
        let azimuth_before = orbit.azimuth;

        let input = CameraInput {
            mouse_delta: Vec2::new(300.0, 300.0),
            orbit_active: false,
            ..Default::default()
        };
        orbit.update(&mut camera, &input, 1.0 / 60.0);

        assert_eq!(orbit.azimuth, azimuth_before);
        assert!((camera.position - Vec3::new(0.0, 0.0, 30.0)).length() < 1e-4);
    }

    #[test]
    fn test_rig_single_writer() {
        let mut camera = test_camera();
        let mut rig = CameraRig::new();
        assert_eq!(rig.mode(), CameraMode::FollowingScroll);

        rig.update(&mut camera, &scroll_input(-1000.0), 1.0 / 60.0);
        assert_eq!(camera.position.z, -1000.0 * -0.01);

        // Grabbing the scene hands control to the orbit path without a jump.
        rig.manual_orbit(&camera);
        assert_eq!(rig.mode(), CameraMode::ManualOrbit);
        let before = camera.position;
        rig.update(&mut camera, &CameraInput::new(), 1.0 / 60.0);
        assert!((camera.position - before).length() < 1e-4);

        rig.update(&mut camera, &drag_input(400.0, 0.0), 1.0 / 60.0);
        assert!((camera.position - before).length() > 1.0);

        // Scrolling again snaps the camera back to the offset's position.
        rig.follow_scroll();
        rig.update(&mut camera, &CameraInput::new(), 1.0 / 60.0);
        assert_eq!(camera.position.z, -1000.0 * -0.01);
    }

    #[test]
    fn test_orbit_reentry_does_not_resync() {
        let mut camera = test_camera();
        let mut rig = CameraRig::new();

        rig.manual_orbit(&camera);
        rig.update(&mut camera, &drag_input(400.0, 0.0), 1.0 / 60.0);
        let azimuth = rig.orbit.azimuth;

        rig.manual_orbit(&camera);
        assert_eq!(rig.orbit.azimuth, azimuth);
    }
}
