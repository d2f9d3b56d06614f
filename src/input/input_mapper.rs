//! Input mapping from raw events to semantic actions
//!
//! Maps keyboard and mouse input to high-level actions like ToggleRunning, Exit, etc.

use winit::event::{ElementState, MouseButton};
use winit::keyboard::KeyCode;

/// Actions the application reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputAction {
    /// Exit application (Escape)
    Exit,
    /// Start or pause the animation (Space)
    ToggleRunning,
    /// Advance a single pass (N key)
    StepOnce,
    /// Toggle border confinement (B key)
    ToggleBorders,
    /// Toggle collision detection (C key)
    ToggleCollisions,
    /// Clear, respawn and reset the accumulator (R key)
    Respawn,
    /// Remove every walker (X or Backspace)
    Clear,
    /// Toggle fullscreen mode (F key)
    ToggleFullscreen,
    /// Spawn one walker under the cursor (left click)
    SpawnAtCursor,
}

/// Maps raw input events to semantic actions
pub struct InputMapper;

impl InputMapper {
    /// Map keyboard input to an action
    ///
    /// Returns `None` for releases and unbound keys
    pub fn map_keyboard(key: KeyCode, state: ElementState) -> Option<InputAction> {
        // Only handle key presses, not releases
        if state != ElementState::Pressed {
            return None;
        }

        match key {
            KeyCode::Escape => Some(InputAction::Exit),
            KeyCode::Space => Some(InputAction::ToggleRunning),
            KeyCode::KeyN => Some(InputAction::StepOnce),
            KeyCode::KeyB => Some(InputAction::ToggleBorders),
            KeyCode::KeyC => Some(InputAction::ToggleCollisions),
            KeyCode::KeyR => Some(InputAction::Respawn),
            KeyCode::KeyX | KeyCode::Backspace => Some(InputAction::Clear),
            KeyCode::KeyF => Some(InputAction::ToggleFullscreen),
            _ => None,
        }
    }

    /// Map mouse button to an action
    pub fn map_mouse_button(button: MouseButton, state: ElementState) -> Option<InputAction> {
        if button == MouseButton::Left && state == ElementState::Pressed {
            Some(InputAction::SpawnAtCursor)
        } else {
            None
        }
    }
}
