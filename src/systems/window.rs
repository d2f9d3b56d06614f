//! The simulation window
//!
//! The window's title doubles as the status bar: walker count, pass count,
//! the accumulator and both mode toggles are shown after the configured base
//! title.

use std::sync::Arc;
use winit::{
    dpi::LogicalSize,
    event_loop::ActiveEventLoop,
    window::{Fullscreen, Window, WindowAttributes},
};
use crate::config::WindowConfig;

/// The window walkers are drawn into
pub struct WindowSystem {
    window: Arc<Window>,
    base_title: String,
}

impl WindowSystem {
    pub fn create(
        event_loop: &ActiveEventLoop,
        config: &WindowConfig,
    ) -> Result<Self, WindowError> {
        let window = event_loop
            .create_window(window_attributes(config))
            .map_err(|e| WindowError::CreationFailed(e.to_string()))?;

        Ok(Self {
            window: Arc::new(window),
            base_title: config.title.clone(),
        })
    }

    /// Shared handle, also owned by the render surface
    pub fn window(&self) -> &Arc<Window> {
        &self.window
    }

    /// Switch between windowed and borderless fullscreen
    ///
    /// The surface resize that follows reaches the simulation through
    /// `WindowEvent::Resized`.
    pub fn toggle_fullscreen(&self) {
        let fullscreen = match self.window.fullscreen() {
            Some(_) => None,
            None => Some(Fullscreen::Borderless(None)),
        };
        self.window.set_fullscreen(fullscreen);
    }

    /// Show a simulation status line after the base title
    pub fn update_title(&self, status: &str) {
        self.window.set_title(&format_title(&self.base_title, status));
    }

    /// Ask for another frame
    pub fn request_redraw(&self) {
        self.window.request_redraw();
    }
}

/// Initial window attributes for a config
fn window_attributes(config: &WindowConfig) -> WindowAttributes {
    let attrs = Window::default_attributes()
        .with_title(&config.title)
        .with_inner_size(LogicalSize::new(config.width, config.height));

    if config.fullscreen {
        attrs.with_fullscreen(Some(Fullscreen::Borderless(None)))
    } else {
        attrs
    }
}

fn format_title(base: &str, status: &str) -> String {
    format!("{} - {}", base, status)
}

/// Errors opening the simulation window
#[derive(Debug)]
pub enum WindowError {
    CreationFailed(String),
}

impl std::fmt::Display for WindowError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            WindowError::CreationFailed(msg) => write!(f, "Window creation failed: {}", msg),
        }
    }
}

impl std::error::Error for WindowError {}
