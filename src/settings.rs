//! Editor Settings
//!
//! Startup configuration for the editor core. Every field has a default, so a
//! settings file only needs to name what it overrides.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use keyframe_studio::{Engine, EditorSettings};
//!
//! // Defaults: 5 s looping timeline, one starter cube
//! let engine = Engine::new(EditorSettings::default());
//!
//! // Deterministic spawning for tests and demos
//! let settings = EditorSettings {
//!     seed: Some(7),
//!     with_starter_cube: false,
//!     ..Default::default()
//! };
//!
//! // Or from JSON
//! let settings = EditorSettings::from_json_str(r#"{ "default_duration": 10.0 }"#)?;
//! ```

use serde::{Deserialize, Serialize};

use crate::errors::{EditorError, Result};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorSettings {
    /// Timeline length in seconds the clock starts with.
    pub default_duration: f32,
    /// Whether playback wraps around at the end of the timeline.
    pub default_looping: bool,
    /// Side length of the square (centered on the origin, in the XZ plane)
    /// new objects are scattered over.
    pub spawn_extent: f32,
    /// Height new objects are placed at.
    pub spawn_height: f32,
    /// Seed for spawn positions and colors. `None` seeds from a fresh UUID.
    pub seed: Option<u64>,
    /// Start with a single cube in the scene.
    pub with_starter_cube: bool,
}

impl Default for EditorSettings {
    fn default() -> Self {
        Self {
            default_duration: 5.0,
            default_looping: true,
            spawn_extent: 4.0,
            spawn_height: 1.0,
            seed: None,
            with_starter_cube: true,
        }
    }
}

impl EditorSettings {
    /// Parses and validates settings from a JSON document.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let settings: Self = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn validate(&self) -> Result<()> {
        if !self.default_duration.is_finite() || self.default_duration < 0.0 {
            return Err(EditorError::InvalidSettings(format!(
                "default_duration must be a finite, non-negative number of seconds (got {})",
                self.default_duration
            )));
        }
        if !self.spawn_extent.is_finite() || self.spawn_extent < 0.0 {
            return Err(EditorError::InvalidSettings(format!(
                "spawn_extent must be finite and non-negative (got {})",
                self.spawn_extent
            )));
        }
        if !self.spawn_height.is_finite() {
            return Err(EditorError::InvalidSettings(format!(
                "spawn_height must be finite (got {})",
                self.spawn_height
            )));
        }
        Ok(())
    }
}
