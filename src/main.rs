//! craftview - a minimal real-time 3D viewer
//!
//! Projects a small world-space triangle scene through a free-fly camera on
//! the CPU every frame and hands the 2D result to a wgpu fill pass.

use std::sync::Arc;
use winit::{
    application::ApplicationHandler,
    event::{DeviceEvent, DeviceId, ElementState, MouseButton, WindowEvent},
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    keyboard::{KeyCode, PhysicalKey},
    window::{CursorGrabMode, Fullscreen, Window, WindowId},
};

use craftview::config::AppConfig;
use craftview_input::PlayerController;
use craftview_math::Vec4;
use craftview_render::{project_triangles, Camera, RenderContext, TrianglePipeline, Viewport};
use craftview_scene::{demo_scene, Triangle};

/// Main application state
struct App {
    /// Application configuration
    config: AppConfig,
    window: Option<Arc<Window>>,
    render_context: Option<RenderContext>,
    pipeline: Option<TrianglePipeline>,
    /// Static world geometry, borrowed by the projection pipeline each frame
    scene: Vec<Triangle>,
    viewport: Viewport,
    camera: Camera,
    controller: PlayerController,
    last_frame: std::time::Instant,
    cursor_captured: bool,
}

impl App {
    fn new() -> Self {
        let config = AppConfig::load().unwrap_or_else(|e| {
            log::warn!("Failed to load config: {}. Using defaults.", e);
            AppConfig::default()
        });

        let scene = demo_scene();
        log::info!("Loaded demo scene with {} triangles", scene.len());

        let viewport = Viewport::new(config.window.width, config.window.height, config.camera.fov);
        let camera = Camera::new(Self::start_position(&config));

        let controller = PlayerController::new()
            .with_move_speed(config.input.move_speed)
            .with_mouse_sensitivity(config.input.mouse_sensitivity);

        Self {
            config,
            window: None,
            render_context: None,
            pipeline: None,
            scene,
            viewport,
            camera,
            controller,
            last_frame: std::time::Instant::now(),
            cursor_captured: false,
        }
    }

    fn start_position(config: &AppConfig) -> Vec4 {
        let [x, y, z] = config.camera.start_position;
        Vec4::new(x, y, z, 0.0)
    }

    /// Capture cursor for FPS-style controls
    fn capture_cursor(&mut self) {
        if let Some(window) = &self.window {
            // Try Locked mode first (best for FPS), fall back to Confined
            let grab_result = window
                .set_cursor_grab(CursorGrabMode::Locked)
                .or_else(|_| window.set_cursor_grab(CursorGrabMode::Confined));

            if grab_result.is_ok() {
                window.set_cursor_visible(false);
                self.cursor_captured = true;
                log::info!("Cursor captured - Escape to release");
            } else {
                log::warn!("Failed to capture cursor");
            }
        }
    }

    /// Release cursor
    fn release_cursor(&mut self) {
        if let Some(window) = &self.window {
            let _ = window.set_cursor_grab(CursorGrabMode::None);
            window.set_cursor_visible(true);
            self.cursor_captured = false;
            log::info!("Cursor released - click to capture");
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_none() {
            let window_attributes = Window::default_attributes()
                .with_title(&self.config.window.title)
                .with_inner_size(winit::dpi::LogicalSize::new(
                    self.config.window.width,
                    self.config.window.height,
                ));

            let window = Arc::new(
                event_loop
                    .create_window(window_attributes)
                    .expect("Failed to create window"),
            );

            let render_context = pollster::block_on(RenderContext::new(
                window.clone(),
                self.config.window.vsync,
            ));

            let pipeline = TrianglePipeline::new(
                &render_context.device,
                render_context.config.format,
                self.config.rendering.max_triangles,
            );

            self.window = Some(window);
            self.render_context = Some(render_context);
            self.pipeline = Some(pipeline);
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        match event {
            WindowEvent::CloseRequested => {
                event_loop.exit();
            }

            WindowEvent::Resized(physical_size) => {
                if let Some(ctx) = &mut self.render_context {
                    ctx.resize(physical_size);
                }
                self.viewport.width = physical_size.width.max(1);
                self.viewport.height = physical_size.height.max(1);
            }

            WindowEvent::KeyboardInput { event, .. } => {
                if let PhysicalKey::Code(key) = event.physical_key {
                    if event.state == ElementState::Pressed {
                        match key {
                            KeyCode::Escape => {
                                // Escape releases cursor first, then exits if pressed again
                                if self.cursor_captured {
                                    self.release_cursor();
                                } else {
                                    event_loop.exit();
                                }
                                return;
                            }
                            KeyCode::KeyR => {
                                self.camera = Camera::new(Self::start_position(&self.config));
                                log::info!("Camera reset to starting position");
                            }
                            KeyCode::KeyF => {
                                if let Some(window) = &self.window {
                                    let new_fullscreen = if window.fullscreen().is_some() {
                                        None
                                    } else {
                                        Some(Fullscreen::Borderless(None))
                                    };
                                    window.set_fullscreen(new_fullscreen);
                                }
                            }
                            _ => {}
                        }
                    }
                    // Pass to controller for movement keys
                    self.controller.process_keyboard(key, event.state);
                }
            }

            WindowEvent::MouseInput { state, button, .. } => {
                // Click to capture cursor (FPS style)
                if state == ElementState::Pressed
                    && button == MouseButton::Left
                    && !self.cursor_captured
                {
                    self.capture_cursor();
                }
            }

            WindowEvent::RedrawRequested => {
                // Explicit frame clock: dt is computed here and threaded into
                // the controller, capped so a stall does not teleport the
                // player on the next frame.
                let now = std::time::Instant::now();
                let dt = (now - self.last_frame).as_secs_f32().min(1.0 / 30.0);
                self.last_frame = now;

                self.controller
                    .update(&mut self.camera, dt, self.cursor_captured);

                // Project the scene through the camera snapshot
                let vertices = project_triangles(&self.camera, &self.scene, &self.viewport);

                if let Some(window) = &self.window {
                    let pos = self.camera.position;
                    let hint = if self.cursor_captured {
                        "Esc to release"
                    } else {
                        "Click to capture"
                    };
                    window.set_title(&format!(
                        "{} - ({:.1}, {:.1}, {:.1}) yaw {:.0} pitch {:.0} [{}]",
                        self.config.window.title, pos.x, pos.y, pos.z,
                        self.camera.yaw, self.camera.pitch, hint,
                    ));
                }

                if let (Some(ctx), Some(pipeline)) =
                    (&mut self.render_context, &mut self.pipeline)
                {
                    let output = match ctx.surface.get_current_texture() {
                        Ok(output) => output,
                        Err(wgpu::SurfaceError::Lost) => {
                            ctx.resize(ctx.size);
                            if let Some(window) = &self.window {
                                window.request_redraw();
                            }
                            return;
                        }
                        Err(wgpu::SurfaceError::OutOfMemory) => {
                            event_loop.exit();
                            return;
                        }
                        Err(e) => {
                            log::warn!("Surface error: {:?}", e);
                            return;
                        }
                    };

                    let view = output
                        .texture
                        .create_view(&wgpu::TextureViewDescriptor::default());

                    pipeline.upload(
                        &ctx.queue,
                        &vertices,
                        (self.viewport.width, self.viewport.height),
                    );

                    let mut encoder =
                        ctx.device
                            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                                label: Some("Frame Encoder"),
                            });

                    let bg = &self.config.rendering.background_color;
                    pipeline.render(
                        &mut encoder,
                        &view,
                        wgpu::Color {
                            r: bg[0] as f64,
                            g: bg[1] as f64,
                            b: bg[2] as f64,
                            a: bg[3] as f64,
                        },
                    );

                    ctx.queue.submit(std::iter::once(encoder.finish()));
                    output.present();
                }

                // Request next frame
                if let Some(window) = &self.window {
                    window.request_redraw();
                }
            }

            _ => {}
        }
    }

    fn device_event(
        &mut self,
        _event_loop: &ActiveEventLoop,
        _device_id: DeviceId,
        event: DeviceEvent,
    ) {
        if let DeviceEvent::MouseMotion { delta } = event {
            self.controller.process_mouse_motion(delta.0, delta.1);
        }
    }
}

fn main() {
    env_logger::init();
    log::info!("Starting craftview");

    let event_loop = EventLoop::new().expect("Failed to create event loop");
    event_loop.set_control_flow(ControlFlow::Poll);

    let mut app = App::new();
    event_loop.run_app(&mut app).expect("Event loop error");
}
