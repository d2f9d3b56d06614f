//! Random walk - walker particle simulation
//!
//! Walkers take unit steps on a grid, optionally confined to the window and
//! kept apart by collision detection.

use winit::{
    application::ApplicationHandler,
    event::WindowEvent,
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    keyboard::PhysicalKey,
    window::WindowId,
};

use randwalk::config::AppConfig;
use randwalk::input::{InputAction, InputMapper};
use randwalk::systems::{RenderError, RenderSystem, SimulationSystem, WindowSystem};
use randwalk_core::Vec2;

/// Main application state
struct App {
    /// Application configuration
    config: AppConfig,
    window_system: Option<WindowSystem>,
    render_system: Option<RenderSystem>,
    simulation: Option<SimulationSystem>,
    /// Last cursor position in physical pixels
    cursor: Vec2,
}

impl App {
    fn new(config: AppConfig) -> Self {
        Self {
            config,
            window_system: None,
            render_system: None,
            simulation: None,
            cursor: Vec2::ZERO,
        }
    }

    /// Create the window, renderer and simulation
    fn initialize(&mut self, event_loop: &ActiveEventLoop) -> Result<(), Box<dyn std::error::Error>> {
        let window_system = WindowSystem::create(event_loop, &self.config.window)?;
        let render_system = RenderSystem::new(
            window_system.window().clone(),
            self.config.rendering.clone(),
            self.config.window.vsync,
        )?;

        let (width, height) = render_system.size();
        let (width, height) = (width.max(1), height.max(1));
        let simulation = SimulationSystem::new(&self.config, width as f32, height as f32)?;
        log::info!(
            "Surface {}x{}, walker size {:.2}",
            width,
            height,
            simulation.walker_size()
        );

        window_system.update_title(&simulation.status_line());
        self.window_system = Some(window_system);
        self.render_system = Some(render_system);
        self.simulation = Some(simulation);
        Ok(())
    }

    fn handle_action(&mut self, action: InputAction, event_loop: &ActiveEventLoop) {
        if action == InputAction::Exit {
            event_loop.exit();
            return;
        }
        if action == InputAction::ToggleFullscreen {
            if let Some(window_system) = &self.window_system {
                window_system.toggle_fullscreen();
            }
            return;
        }

        let Some(simulation) = &mut self.simulation else {
            return;
        };
        match action {
            InputAction::ToggleRunning => {
                simulation.toggle_running();
            }
            InputAction::StepOnce => {
                simulation.step_once();
            }
            InputAction::ToggleBorders => {
                simulation.toggle_borders();
            }
            InputAction::ToggleCollisions => {
                simulation.toggle_collisions();
            }
            InputAction::Respawn => simulation.respawn(),
            InputAction::Clear => simulation.clear(),
            InputAction::SpawnAtCursor => {
                simulation.spawn_at(self.cursor);
            }
            InputAction::Exit | InputAction::ToggleFullscreen => {}
        }

        if let Some(window_system) = &self.window_system {
            window_system.update_title(&simulation.status_line());
        }
    }

    fn redraw(&mut self, event_loop: &ActiveEventLoop) {
        let (Some(window_system), Some(render_system), Some(simulation)) = (
            &self.window_system,
            &mut self.render_system,
            &mut self.simulation,
        ) else {
            return;
        };

        if simulation.update() > 0 {
            window_system.update_title(&simulation.status_line());
        }

        let walker_size = simulation.walker_size();
        let collisions = simulation.collection().collisions_enabled();
        match render_system.render_frame(simulation.canvas_mut(), walker_size, collisions) {
            Ok(()) => {}
            Err(RenderError::SurfaceLost) => {
                render_system.recover_surface();
                window_system.request_redraw();
            }
            Err(RenderError::OutOfMemory) => {
                log::error!("GPU out of memory");
                event_loop.exit();
            }
            Err(e) => log::warn!("{}", e),
        }
    }

    /// Write the graph series if an output path is configured
    fn export_graph(&self) {
        let (Some(path), Some(simulation)) = (&self.config.graph.output_path, &self.simulation) else {
            return;
        };
        if let Err(e) = simulation.save_graph(path) {
            log::warn!("Failed to save graph to {}: {}", path, e);
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window_system.is_some() {
            return;
        }
        if let Err(e) = self.initialize(event_loop) {
            log::error!("Startup failed: {}", e);
            event_loop.exit();
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        match event {
            WindowEvent::CloseRequested => {
                event_loop.exit();
            }

            WindowEvent::Resized(physical_size) => {
                if let Some(render_system) = &mut self.render_system {
                    render_system.resize(physical_size.width, physical_size.height);
                }
                if let Some(simulation) = &mut self.simulation {
                    if physical_size.width > 0 && physical_size.height > 0 {
                        simulation.resize(physical_size.width as f32, physical_size.height as f32);
                    }
                }
            }

            WindowEvent::KeyboardInput { event, .. } => {
                if let PhysicalKey::Code(key) = event.physical_key {
                    if event.repeat {
                        return;
                    }
                    if let Some(action) = InputMapper::map_keyboard(key, event.state) {
                        self.handle_action(action, event_loop);
                    }
                }
            }

            WindowEvent::CursorMoved { position, .. } => {
                self.cursor = Vec2::new(position.x as f32, position.y as f32);
            }

            WindowEvent::MouseInput { state, button, .. } => {
                if let Some(action) = InputMapper::map_mouse_button(button, state) {
                    self.handle_action(action, event_loop);
                }
            }

            WindowEvent::RedrawRequested => self.redraw(event_loop),

            _ => {}
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(window_system) = &self.window_system {
            window_system.request_redraw();
        }
    }

    fn exiting(&mut self, _event_loop: &ActiveEventLoop) {
        self.export_graph();
        log::info!("Shutting down");
    }
}

fn main() {
    // Configuration is read before logging so its log level can seed the filter
    let loaded = AppConfig::load();
    let config = loaded.as_ref().cloned().unwrap_or_default();

    // RUST_LOG still takes precedence
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(config.debug.log_level.as_str()),
    )
    .init();

    if let Err(e) = &loaded {
        log::warn!("Failed to load config: {}. Using defaults.", e);
    }
    log::info!("Starting random walk");

    let event_loop = match EventLoop::new() {
        Ok(event_loop) => event_loop,
        Err(e) => {
            log::error!("Failed to create event loop: {}", e);
            return;
        }
    };
    event_loop.set_control_flow(ControlFlow::Poll);

    let mut app = App::new(config);
    if let Err(e) = event_loop.run_app(&mut app) {
        log::error!("Event loop error: {}", e);
    }
}
