//! Lander configuration
//!
//! One parameterized core covers both game variants: canvas size, pad span,
//! landing thresholds, trigger rule and the optional start screen all live here
//! instead of being hardcoded in the simulation.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::*;

/// Errors raised while loading or validating a configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid config field `{field}`: {reason}")]
    Invalid { field: &'static str, reason: String },
}

/// Built-in game variants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Variant {
    /// 650x700 canvas with a start screen and forgiving landing speed
    #[default]
    Mission,
    /// 700x700 canvas, straight into flight, tighter landing speed
    Arcade,
}

impl Variant {
    pub fn as_str(&self) -> &'static str {
        match self {
            Variant::Mission => "mission",
            Variant::Arcade => "arcade",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "mission" | "classic" => Some(Variant::Mission),
            "arcade" => Some(Variant::Arcade),
            _ => None,
        }
    }

    pub fn config(&self) -> LanderConfig {
        match self {
            Variant::Mission => LanderConfig::mission(),
            Variant::Arcade => LanderConfig::arcade(),
        }
    }
}

/// Where landing/crash evaluation kicks in
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "rule", rename_all = "snake_case")]
pub enum TriggerRule {
    /// Trigger when `y > height - offset`
    CanvasOffset { offset: f32 },
    /// Trigger when the fin tips (`y + fin_height`) pass `height - ground_offset`
    FinRelative { ground_offset: f32, fin_height: f32 },
}

impl TriggerRule {
    /// Vertical position the rocket must exceed to trigger evaluation
    pub fn trigger_y(&self, canvas_height: f32) -> f32 {
        match *self {
            TriggerRule::CanvasOffset { offset } => canvas_height - offset,
            TriggerRule::FinRelative {
                ground_offset,
                fin_height,
            } => canvas_height - ground_offset - fin_height,
        }
    }
}

/// Horizontal extent of the landing pad
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PadSpan {
    pub x_min: f32,
    pub x_max: f32,
    /// Pad surface sits this far above the canvas bottom
    pub surface_offset: f32,
}

impl PadSpan {
    /// Inclusive on both edges
    #[inline]
    pub fn contains(&self, x: f32) -> bool {
        x >= self.x_min && x <= self.x_max
    }

    #[inline]
    pub fn center_x(&self) -> f32 {
        (self.x_min + self.x_max) / 2.0
    }

    #[inline]
    pub fn width(&self) -> f32 {
        self.x_max - self.x_min
    }
}

/// Complete tuning record for one session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LanderConfig {
    // === Canvas ===
    pub canvas_width: f32,
    pub canvas_height: f32,
    /// Show the start screen before the first flight
    pub start_screen: bool,

    // === Physics ===
    pub gravity: f32,
    pub thrust: f32,
    pub fuel_capacity: f32,
    pub fuel_per_intent: f32,
    pub start_y: f32,

    // === Landing ===
    pub pad: PadSpan,
    /// |vx| and |vy| must both be strictly below this to land
    pub safe_landing_speed: f32,
    pub trigger: TriggerRule,

    // === Effects ===
    /// Ground smoke forms once `y > height - smoke_band`
    pub smoke_band: f32,
    pub smoke_max_vy: f32,
    pub explosion_count: usize,
    pub star_count: usize,

    /// RNG seed for particles and stars
    pub seed: u64,
}

impl Default for LanderConfig {
    fn default() -> Self {
        Self::mission()
    }
}

impl LanderConfig {
    /// Canonical variant: 650x700 with start screen
    pub fn mission() -> Self {
        Self {
            canvas_width: 650.0,
            canvas_height: 700.0,
            start_screen: true,

            gravity: GRAVITY,
            thrust: THRUST,
            fuel_capacity: FUEL_CAPACITY,
            fuel_per_intent: FUEL_PER_INTENT,
            start_y: START_Y,

            pad: PadSpan {
                x_min: 300.0,
                x_max: 400.0,
                surface_offset: 50.0,
            },
            safe_landing_speed: 2.0,
            trigger: TriggerRule::CanvasOffset { offset: 90.0 },

            smoke_band: 130.0,
            smoke_max_vy: SMOKE_MAX_VY,
            explosion_count: EXPLOSION_COUNT,
            star_count: STAR_COUNT,

            seed: 2024,
        }
    }

    /// 700x700 variant without a start screen
    pub fn arcade() -> Self {
        Self {
            canvas_width: 700.0,
            canvas_height: 700.0,
            start_screen: false,
            pad: PadSpan {
                x_min: 300.0,
                x_max: 400.0,
                surface_offset: 50.0,
            },
            safe_landing_speed: 1.0,
            trigger: TriggerRule::FinRelative {
                ground_offset: 50.0,
                fin_height: FIN_HEIGHT,
            },
            ..Self::mission()
        }
    }

    /// Rocket spawn point (canvas-center-top)
    pub fn start_position(&self) -> glam::Vec2 {
        glam::Vec2::new(self.canvas_width / 2.0, self.start_y)
    }

    /// Vertical position past which the landing judge runs
    pub fn trigger_y(&self) -> f32 {
        self.trigger.trigger_y(self.canvas_height)
    }

    /// Vertical position past which ground smoke may form
    pub fn smoke_y(&self) -> f32 {
        self.canvas_height - self.smoke_band
    }

    /// Parse a JSON config; missing fields fall back to the mission preset
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: LanderConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a JSON config file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_json(&json)?;
        log::info!("Loaded config from {}", path.display());
        Ok(config)
    }

    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Check that geometry and physics constants make sense together
    pub fn validate(&self) -> Result<(), ConfigError> {
        fn positive(field: &'static str, value: f32) -> Result<(), ConfigError> {
            if value.is_finite() && value > 0.0 {
                Ok(())
            } else {
                Err(ConfigError::Invalid {
                    field,
                    reason: format!("must be positive, got {value}"),
                })
            }
        }

        positive("canvas_width", self.canvas_width)?;
        positive("canvas_height", self.canvas_height)?;
        positive("gravity", self.gravity)?;
        positive("thrust", self.thrust)?;
        positive("fuel_capacity", self.fuel_capacity)?;
        positive("fuel_per_intent", self.fuel_per_intent)?;
        positive("safe_landing_speed", self.safe_landing_speed)?;

        if self.pad.x_min > self.pad.x_max {
            return Err(ConfigError::Invalid {
                field: "pad",
                reason: format!("x_min {} exceeds x_max {}", self.pad.x_min, self.pad.x_max),
            });
        }
        if self.pad.x_min < 0.0 || self.pad.x_max > self.canvas_width {
            return Err(ConfigError::Invalid {
                field: "pad",
                reason: format!(
                    "span {}..{} lies outside canvas width {}",
                    self.pad.x_min, self.pad.x_max, self.canvas_width
                ),
            });
        }

        let trigger_y = self.trigger_y();
        if !(trigger_y > self.start_y && trigger_y < self.canvas_height) {
            return Err(ConfigError::Invalid {
                field: "trigger",
                reason: format!(
                    "trigger line {trigger_y} must lie between start_y {} and canvas bottom {}",
                    self.start_y, self.canvas_height
                ),
            });
        }

        Ok(())
    }
}
