//! Engine configuration resource.
//!
//! Settings loaded from an INI file, with safe defaults so the engine runs
//! without one. Missing keys keep their defaults; an unreadable file is a
//! load error for the caller to surface.
//!
//! # Configuration File Format
//!
//! ```ini
//! [physics]
//! gravity_x = 0.0
//! gravity_y = 800.0
//!
//! [debug]
//! draw_colliders = false
//! ```

use std::path::PathBuf;

use configparser::ini::Ini;
use log::info;

use crate::error::EngineError;
use crate::math::{Vec2, vec2};

const DEFAULT_GRAVITY_X: f32 = 0.0;
const DEFAULT_GRAVITY_Y: f32 = 800.0;
const DEFAULT_DRAW_COLLIDERS: bool = false;
const DEFAULT_CONFIG_PATH: &str = "./engine.ini";

#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// World-units-per-second-squared applied to every dynamic body.
    pub gravity: Vec2,
    /// Draw collider outlines on top of sprites.
    pub draw_colliders: bool,
    pub config_path: PathBuf,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl EngineConfig {
    pub fn new() -> Self {
        Self {
            gravity: vec2(DEFAULT_GRAVITY_X, DEFAULT_GRAVITY_Y),
            draw_colliders: DEFAULT_DRAW_COLLIDERS,
            config_path: PathBuf::from(DEFAULT_CONFIG_PATH),
        }
    }

    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            config_path: path.into(),
            ..Self::new()
        }
    }

    /// Load settings from the INI file. Missing keys retain their current
    /// values.
    pub fn load_from_file(&mut self) -> Result<(), EngineError> {
        let mut config = Ini::new();
        config
            .load(&self.config_path)
            .map_err(|err| EngineError::LoadFailed {
                what: format!("config file {}", self.config_path.display()),
                reason: err,
            })?;

        if let Some(x) = config.getfloat("physics", "gravity_x").ok().flatten() {
            self.gravity.x = x as f32;
        }
        if let Some(y) = config.getfloat("physics", "gravity_y").ok().flatten() {
            self.gravity.y = y as f32;
        }
        if let Some(draw) = config.getbool("debug", "draw_colliders").ok().flatten() {
            self.draw_colliders = draw;
        }

        info!(
            "Loaded config: gravity=({}, {}), draw_colliders={}",
            self.gravity.x, self.gravity.y, self.draw_colliders
        );
        Ok(())
    }
}
