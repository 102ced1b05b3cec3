//! Portfolio scene viewer
//!
//! Run with:
//!   cargo run
//!   cargo run -- --width 1920 --height 1080 --no-vsync
//!
//! Controls:
//!   Scroll     - Fly the camera along the page
//!   Left Mouse - Orbit around the origin (hold and drag)
//!   Escape     - Exit

use std::sync::Arc;
use std::time::Instant;

use space_portfolio::portfolio;
use space_portfolio::resources::Assets;
use space_portfolio::scene::{CameraController, CameraInput, CameraMode, CameraRig, Scene};
use space_portfolio::{AppConfig, Engine, RenderError};
use winit::{
    dpi::PhysicalSize,
    event::{DeviceEvent, ElementState, Event, MouseButton, MouseScrollDelta, WindowEvent},
    event_loop::{ControlFlow, EventLoop, EventLoopWindowTarget},
    keyboard::{KeyCode, PhysicalKey},
    window::WindowBuilder,
};

/// How many page pixels one scroll wheel line stands for
const SCROLL_LINE_PIXELS: f32 = 40.0;

/// Application state for input handling
struct AppState {
    input: CameraInput,
    rig: CameraRig,
    last_frame: Instant,
}

impl AppState {
    fn new() -> Self {
        Self {
            input: CameraInput::new(),
            rig: CameraRig::new(),
            last_frame: Instant::now(),
        }
    }
}

fn main() {
    env_logger::init();

    // Parse command line args for window overrides
    let args: Vec<String> = std::env::args().collect();
    let mut config = AppConfig::default();
    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--width" if i + 1 < args.len() => {
                if let Ok(width) = args[i + 1].parse() {
                    config.width = width;
                }
                i += 1;
            }
            "--height" if i + 1 < args.len() => {
                if let Ok(height) = args[i + 1].parse() {
                    config.height = height;
                }
                i += 1;
            }
            "--no-vsync" => config.vsync = false,
            _ => {}
        }
        i += 1;
    }

    println!("Space Portfolio");
    println!();
    println!("Controls:");
    println!("  Scroll     - Fly the camera along the page");
    println!("  Left Mouse - Orbit around the origin (hold and drag)");
    println!("  Escape     - Exit");
    println!();

    let event_loop = EventLoop::new().expect("Failed to create event loop");

    let window = Arc::new(
        WindowBuilder::new()
            .with_title(&config.title)
            .with_inner_size(PhysicalSize::new(config.width, config.height))
            .build(&event_loop)
            .expect("Failed to create window"),
    );

    let mut engine = match Engine::new(Arc::clone(&window), &config) {
        Ok(e) => e,
        Err(e) => {
            eprintln!("Failed to create renderer: {:?}", e);
            return;
        }
    };

    // Build the scene and push it to the GPU
    let size = window.inner_size();
    let mut assets = Assets::new();
    let mut scene = portfolio::build(&mut assets, size.width as f32 / size.height.max(1) as f32);
    engine.upload(&assets, &scene);

    let mut state = AppState::new();

    let triangle_count: usize = assets.meshes.iter().map(|m| m.triangle_count()).sum();
    println!("Scene setup complete:");
    println!("  Entities: {}", scene.entity_count());
    println!("  Objects: {}", scene.objects.len());
    println!("  Lights: {}", scene.lights.len());
    println!(
        "  Unique meshes: {} ({} triangles)",
        assets.meshes.len(),
        triangle_count
    );
    println!("  Camera mode: {}", state.rig.name());
    println!();

    let window_clone = Arc::clone(&window);
    event_loop
        .run(move |event, elwt: &EventLoopWindowTarget<()>| {
            elwt.set_control_flow(ControlFlow::Poll);

            match event {
                Event::WindowEvent { event, .. } => {
                    handle_window_event(&event, &mut state, &mut scene, &mut engine, elwt);
                }
                Event::DeviceEvent { event, .. } => {
                    handle_device_event(&event, &mut state);
                }
                Event::AboutToWait => {
                    let now = Instant::now();
                    let dt = (now - state.last_frame).as_secs_f32();
                    state.last_frame = now;

                    scene.animate();
                    state.rig.update(&mut scene.camera, &state.input, dt);
                    state.input.reset_deltas();

                    window_clone.request_redraw();
                }
                _ => {}
            }
        })
        .expect("Event loop failed");
}

fn handle_window_event(
    event: &WindowEvent,
    state: &mut AppState,
    scene: &mut Scene,
    engine: &mut Engine,
    elwt: &EventLoopWindowTarget<()>,
) {
    match event {
        WindowEvent::CloseRequested => {
            println!("Close requested, shutting down...");
            elwt.exit();
        }
        WindowEvent::Resized(size) => {
            engine.resize(size.width, size.height);
            let (width, height) = engine.surface_size();
            scene.camera.set_aspect(width as f32, height as f32);
        }
        WindowEvent::RedrawRequested => match engine.render(scene) {
            Ok(()) => {}
            Err(RenderError::SurfaceLost) => {
                log::warn!("Surface lost, reconfiguring");
                let (width, height) = engine.surface_size();
                engine.resize(width, height);
            }
            Err(RenderError::OutOfMemory) => {
                log::error!("Render error: out of memory, shutting down");
                elwt.exit();
            }
            Err(e) => log::error!("Render error: {:?}", e),
        },
        WindowEvent::KeyboardInput { event, .. } => {
            let pressed = event.state == ElementState::Pressed;
            if pressed {
                if let PhysicalKey::Code(KeyCode::Escape) = event.physical_key {
                    elwt.exit();
                }
            }
        }
        WindowEvent::MouseInput {
            state: btn_state,
            button,
            ..
        } => {
            if *button == MouseButton::Left {
                let pressed = *btn_state == ElementState::Pressed;
                state.input.orbit_active = pressed;
                if pressed && state.rig.mode() != CameraMode::ManualOrbit {
                    state.rig.manual_orbit(&scene.camera);
                    println!("Camera mode: {}", state.rig.name());
                }
            }
        }
        WindowEvent::MouseWheel { delta, .. } => {
            let scroll = match delta {
                MouseScrollDelta::LineDelta(_, y) => *y * SCROLL_LINE_PIXELS,
                MouseScrollDelta::PixelDelta(pos) => pos.y as f32,
            };
            state.input.scroll_delta += scroll;

            // Each wheel event counts as one page scroll: the decorative
            // meshes get their kick and the wheel reclaims the camera.
            scene.on_scroll_event();
            if state.rig.mode() != CameraMode::FollowingScroll {
                state.rig.follow_scroll();
                println!("Camera mode: {}", state.rig.name());
            }
        }
        WindowEvent::Focused(false) => {
            // Release the orbit drag when the window loses focus
            state.input = CameraInput::new();
        }
        _ => {}
    }
}

fn handle_device_event(event: &DeviceEvent, state: &mut AppState) {
    if let DeviceEvent::MouseMotion { delta } = event {
        if state.input.orbit_active {
            state.input.mouse_delta.x += delta.0 as f32;
            state.input.mouse_delta.y += delta.1 as f32;
        }
    }
}
