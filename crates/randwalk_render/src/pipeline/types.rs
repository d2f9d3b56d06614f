//! GPU-compatible data types for the walker pipeline
//!
//! These types are designed to match the shader layouts exactly.
//! All types derive Pod and Zeroable for safe GPU buffer operations.

use bytemuck::{Pod, Zeroable};

/// One walker quad, drawn once per instance
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Pod, Zeroable)]
pub struct WalkerInstance {
    /// Top-left corner in surface pixels
    pub position: [f32; 2],
    /// Side length in surface pixels
    pub size: f32,
    /// Padding to align color to 16 bytes
    pub _padding: f32,
    /// RGBA color
    pub color: [f32; 4],
}

impl WalkerInstance {
    /// Create a walker instance
    pub fn new(position: [f32; 2], size: f32, color: [f32; 4]) -> Self {
        Self {
            position,
            size,
            _padding: 0.0,
            color,
        }
    }
}

/// Canvas uniforms shared by every instance
/// Layout: 16 bytes total (must match walkers.wgsl CanvasUniforms)
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Pod, Zeroable)]
pub struct CanvasUniforms {
    /// Surface size in pixels
    pub viewport_size: [f32; 2],
    pub _padding: [f32; 2],
}

impl CanvasUniforms {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            viewport_size: [width, height],
            _padding: [0.0; 2],
        }
    }
}

impl Default for CanvasUniforms {
    fn default() -> Self {
        Self::new(1.0, 1.0)
    }
}

/// Vertices per walker quad (two triangles)
pub const QUAD_VERTEX_COUNT: u32 = 6;

/// Instances the pipeline allocates room for up front
pub const INITIAL_INSTANCE_CAPACITY: usize = 256;

#[cfg(test)]
mod tests {
    use super::*;
    use std::mem::size_of;

    #[test]
    fn test_walker_instance_size() {
        // 2 floats position + 1 size + 1 padding + 4 floats color = 32 bytes
        assert_eq!(size_of::<WalkerInstance>(), 32);
    }

    #[test]
    fn test_canvas_uniforms_size() {
        assert_eq!(size_of::<CanvasUniforms>(), 16);
    }

    #[test]
    fn test_alignment() {
        assert_eq!(std::mem::align_of::<WalkerInstance>(), 4);
        assert_eq!(std::mem::align_of::<CanvasUniforms>(), 4);
    }

    #[test]
    fn test_instance_bytes() {
        let instance = WalkerInstance::new([1.0, 2.0], 8.0, [1.0, 0.5, 0.0, 1.0]);
        let bytes = bytemuck::bytes_of(&instance);
        assert_eq!(bytes.len(), 32);
        let floats: &[f32] = bytemuck::cast_slice(bytes);
        assert_eq!(floats[..3], [1.0, 2.0, 8.0]);
        assert_eq!(floats[4..], [1.0, 0.5, 0.0, 1.0]);
    }
}
