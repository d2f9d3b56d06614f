//! Application configuration
//!
//! Configuration is loaded from multiple sources with the following priority (lowest to highest):
//! 1. `config/default.toml` (version controlled)
//! 2. `config/user.toml` (gitignored, user overrides)
//! 3. Environment variables (`RW_SECTION__KEY`)

use figment::{Figment, providers::{Format, Toml, Env}};
use randwalk_core::{WalkConfig, DEFAULT_MAX_COLLISION_RETRIES};
use serde::{Serialize, Deserialize};
use std::path::Path;

/// Main application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Window configuration
    #[serde(default)]
    pub window: WindowConfig,
    /// Simulation configuration
    #[serde(default)]
    pub walk: WalkSection,
    /// Rendering configuration
    #[serde(default)]
    pub rendering: RenderingConfig,
    /// Graph data configuration
    #[serde(default)]
    pub graph: GraphConfig,
    /// Debug configuration
    #[serde(default)]
    pub debug: DebugConfig,
}

impl AppConfig {
    /// Load configuration from default locations
    ///
    /// Priority (lowest to highest):
    /// 1. `config/default.toml`
    /// 2. `config/user.toml`
    /// 3. Environment variables (`RW_*`)
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from("config")
    }

    /// Load configuration from a specific config directory
    pub fn load_from<P: AsRef<Path>>(config_dir: P) -> Result<Self, ConfigError> {
        let config_dir = config_dir.as_ref();
        let default_path = config_dir.join("default.toml");
        let user_path = config_dir.join("user.toml");

        let mut figment = Figment::new();

        if default_path.exists() {
            figment = figment.merge(Toml::file(&default_path));
        }

        if user_path.exists() {
            figment = figment.merge(Toml::file(&user_path));
        }

        // Environment variables override everything
        // RW_WALK__NUMBER_OF_WALKERS=50 -> walk.number_of_walkers = 50
        figment = figment.merge(Env::prefixed("RW_").split("__"));

        figment.extract().map_err(ConfigError::from)
    }

    /// Simulation parameters for a surface of `width` x `height` pixels
    ///
    /// The surface is both the spawn reference container and the viewport
    /// whose height sets the step size.
    pub fn walk_config(&self, width: f32, height: f32) -> WalkConfig {
        WalkConfig {
            number_of_walkers: self.walk.number_of_walkers,
            x_coord_upper_corner: self.walk.x_coord_upper_corner,
            y_coord_upper_corner: self.walk.y_coord_upper_corner,
            container_height: height,
            container_width: width,
            parts_of_screen_used: self.walk.parts_of_screen_used,
            window_height: height,
            number_of_steps: self.walk.number_of_steps,
            toggle_borders: self.walk.toggle_borders,
            toggle_collisions: self.walk.toggle_collisions,
            max_collision_retries: self.walk.max_collision_retries,
        }
    }
}

/// Window configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    /// Window title
    pub title: String,
    /// Window width in pixels
    pub width: u32,
    /// Window height in pixels
    pub height: u32,
    /// Start in fullscreen mode
    pub fullscreen: bool,
    /// Enable VSync
    pub vsync: bool,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "Random Walk".to_string(),
            width: 1280,
            height: 720,
            fullscreen: false,
            vsync: true,
        }
    }
}

/// Simulation configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WalkSection {
    /// Walkers spawned at startup and on respawn
    pub number_of_walkers: u32,
    /// Horizontal offset of the spawn region
    pub x_coord_upper_corner: f32,
    /// Vertical offset of the spawn region
    pub y_coord_upper_corner: f32,
    /// Fraction of the surface the spawn region covers, in (0, 1]
    pub parts_of_screen_used: f32,
    /// Passes in one animation run
    pub number_of_steps: u32,
    /// Start with border confinement on
    pub toggle_borders: bool,
    /// Start with collision detection on
    pub toggle_collisions: bool,
    /// Collision retries per walker per pass
    pub max_collision_retries: u32,
    /// Full passes per rendered frame while running
    pub passes_per_frame: u32,
    /// Fixed RNG seed (random when absent)
    pub seed: Option<u64>,
}

impl Default for WalkSection {
    fn default() -> Self {
        Self {
            number_of_walkers: 100,
            x_coord_upper_corner: 0.0,
            y_coord_upper_corner: 0.0,
            parts_of_screen_used: 1.0,
            number_of_steps: 1000,
            toggle_borders: true,
            toggle_collisions: false,
            max_collision_retries: DEFAULT_MAX_COLLISION_RETRIES,
            passes_per_frame: 1,
            seed: None,
        }
    }
}

/// Rendering configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderingConfig {
    /// Background color [r, g, b, a]
    pub background_color: [f32; 4],
    /// Walker color [r, g, b, a]
    pub walker_color: [f32; 4],
    /// Walker color while collision detection is on [r, g, b, a]
    pub collision_color: [f32; 4],
}

impl Default for RenderingConfig {
    fn default() -> Self {
        Self {
            background_color: [0.02, 0.02, 0.08, 1.0],
            walker_color: [0.3, 0.8, 1.0, 1.0],
            collision_color: [1.0, 0.55, 0.2, 1.0],
        }
    }
}

/// Graph data configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GraphConfig {
    /// Samples kept in memory (0 = unbounded)
    pub capacity: usize,
    /// RON file the series is written to on exit
    pub output_path: Option<String>,
}

impl Default for GraphConfig {
    fn default() -> Self {
        Self {
            capacity: 10_000,
            output_path: None,
        }
    }
}

/// Debug configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DebugConfig {
    /// Log level (error, warn, info, debug, trace)
    pub log_level: String,
}

impl Default for DebugConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}

/// Configuration error
#[derive(Debug)]
pub struct ConfigError {
    message: String,
}

impl From<figment::Error> for ConfigError {
    fn from(e: figment::Error) -> Self {
        ConfigError {
            message: e.to_string(),
        }
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Configuration error: {}", self.message)
    }
}

impl std::error::Error for ConfigError {}

#[cfg(test)]
mod tests {
    use super::*;
    use randwalk_core::WalkValidator;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.window.width, 1280);
        assert_eq!(config.walk.number_of_walkers, 100);
        assert!(config.walk.toggle_borders);
        assert!(config.graph.output_path.is_none());
    }

    #[test]
    fn test_config_serialization() {
        let config = AppConfig::default();
        let toml = toml::to_string(&config).unwrap();
        assert!(toml.contains("title"));
        assert!(toml.contains("number_of_walkers"));
        assert!(toml.contains("walker_color"));
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let config: AppConfig = toml::from_str(
            r#"
            [walk]
            number_of_walkers = 7
            toggle_collisions = true
            "#,
        )
        .unwrap();
        assert_eq!(config.walk.number_of_walkers, 7);
        assert!(config.walk.toggle_collisions);
        assert_eq!(config.walk.number_of_steps, 1000);
        assert_eq!(config.walk.seed, None);
        assert_eq!(config.window.height, 720);
    }

    #[test]
    fn test_walk_config_from_surface() {
        let config = AppConfig::default();
        let walk = config.walk_config(800.0, 600.0);
        assert_eq!(walk.container_width, 800.0);
        assert_eq!(walk.container_height, 600.0);
        assert_eq!(walk.window_height, 600.0);
        assert_eq!(walk.unit(), 6.0);
        assert_eq!(walk.number_of_walkers, 100);
        assert!(WalkValidator::validate(&walk).is_empty());
    }

    #[test]
    fn test_load_from_missing_dir_uses_defaults() {
        let config = AppConfig::load_from("/definitely/not/a/config/dir").unwrap();
        assert_eq!(config.walk.number_of_steps, 1000);
    }
}
