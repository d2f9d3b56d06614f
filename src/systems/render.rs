//! GPU rendering system
//!
//! Manages GPU rendering including:
//! - Render context and surface
//! - Walker pipeline and instance uploads
//! - Frame rendering

use std::sync::Arc;
use winit::window::Window;
use randwalk_render::{CanvasContainer, CanvasUniforms, ContextError, RenderContext, WalkerPipeline};
use crate::config::RenderingConfig;

/// Render error types
#[derive(Debug)]
pub enum RenderError {
    /// The GPU context could not be created
    Context(ContextError),
    /// Surface was lost (window resized, minimized, etc.)
    SurfaceLost,
    /// GPU out of memory
    OutOfMemory,
    /// Other surface error
    Other(String),
}

impl std::fmt::Display for RenderError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RenderError::Context(e) => write!(f, "Render context error: {}", e),
            RenderError::SurfaceLost => write!(f, "Surface lost"),
            RenderError::OutOfMemory => write!(f, "Out of memory"),
            RenderError::Other(msg) => write!(f, "Render error: {}", msg),
        }
    }
}

impl std::error::Error for RenderError {}

impl From<ContextError> for RenderError {
    fn from(e: ContextError) -> Self {
        RenderError::Context(e)
    }
}

/// Manages GPU rendering
pub struct RenderSystem {
    context: RenderContext,
    pipeline: WalkerPipeline,
    render_config: RenderingConfig,
    /// Collision mode the current instances were coloured for
    uploaded_collision_mode: Option<bool>,
}

impl RenderSystem {
    /// Create render system from window and config
    pub fn new(
        window: Arc<Window>,
        render_config: RenderingConfig,
        vsync: bool,
    ) -> Result<Self, RenderError> {
        let context = pollster::block_on(RenderContext::with_vsync(window, vsync))?;
        let pipeline = WalkerPipeline::new(&context.device, context.config.format);
        pipeline.update_uniforms(
            &context.queue,
            &CanvasUniforms::new(context.size.width as f32, context.size.height as f32),
        );

        Ok(Self {
            context,
            pipeline,
            render_config,
            uploaded_collision_mode: None,
        })
    }

    /// Handle window resize
    pub fn resize(&mut self, width: u32, height: u32) {
        self.context
            .resize(winit::dpi::PhysicalSize::new(width, height));
        self.pipeline.update_uniforms(
            &self.context.queue,
            &CanvasUniforms::new(self.context.size.width as f32, self.context.size.height as f32),
        );
    }

    /// Render a single frame
    ///
    /// Walker instances are re-uploaded only when the canvas changed or the
    /// collision mode (and with it the walker colour) flipped.
    pub fn render_frame(
        &mut self,
        canvas: &mut CanvasContainer,
        walker_size: f32,
        collisions_enabled: bool,
    ) -> Result<(), RenderError> {
        let mode_changed = self.uploaded_collision_mode != Some(collisions_enabled);
        if canvas.take_dirty() || mode_changed {
            let color = walker_color(&self.render_config, collisions_enabled);
            let instances = canvas.instances(walker_size, color);
            self.pipeline
                .upload_instances(&self.context.device, &self.context.queue, &instances);
            self.uploaded_collision_mode = Some(collisions_enabled);
        }

        // Get surface texture
        let output = match self.context.surface.get_current_texture() {
            Ok(output) => output,
            Err(wgpu::SurfaceError::Lost) => return Err(RenderError::SurfaceLost),
            Err(wgpu::SurfaceError::OutOfMemory) => return Err(RenderError::OutOfMemory),
            Err(e) => return Err(RenderError::Other(format!("{:?}", e))),
        };

        let view = output
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        // Create command encoder
        let mut encoder = self
            .context
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("Render Encoder"),
            });

        let bg = &self.render_config.background_color;
        self.pipeline.render(
            &mut encoder,
            &view,
            wgpu::Color {
                r: bg[0] as f64,
                g: bg[1] as f64,
                b: bg[2] as f64,
                a: bg[3] as f64,
            },
        );

        // Submit
        self.context.queue.submit(std::iter::once(encoder.finish()));
        output.present();

        Ok(())
    }

    /// Reconfigure the surface at its current size
    pub fn recover_surface(&mut self) {
        let size = self.context.size;
        self.context.resize(size);
    }

    /// Get current surface size
    pub fn size(&self) -> (u32, u32) {
        (self.context.size.width, self.context.size.height)
    }
}

/// Walker colour for the current collision mode
fn walker_color(config: &RenderingConfig, collisions_enabled: bool) -> [f32; 4] {
    if collisions_enabled {
        config.collision_color
    } else {
        config.walker_color
    }
}
