//! Lunar Lander - A 2D rocket landing arcade simulation
//!
//! Core modules:
//! - `sim`: Deterministic simulation (rocket physics, landing judge, particles, session)
//! - `config`: Data-driven canvas, pad and physics tuning
//! - `input`: Keyboard/mouse bookkeeping into per-tick intents
//! - `ui`: Start/restart button layout and hit-testing

pub mod config;
pub mod input;
pub mod sim;
pub mod ui;

pub use config::{ConfigError, LanderConfig, PadSpan, TriggerRule, Variant};
pub use input::{InputState, Key};
pub use sim::{GameState, SessionPhase, Snapshot, TickInput, tick};

/// Game configuration constants
pub mod consts {
    /// Nominal frame rate the tick is tuned for (units are per tick, not per second)
    pub const TICKS_PER_SECOND: u32 = 60;

    /// Physics defaults (canvas units per tick²)
    pub const GRAVITY: f32 = 0.01;
    pub const THRUST: f32 = 0.1;

    /// Fuel defaults
    pub const FUEL_CAPACITY: f32 = 100.0;
    pub const FUEL_PER_INTENT: f32 = 0.5;

    /// Rocket spawns at canvas-center-top
    pub const START_Y: f32 = 50.0;

    /// Fin height; the rocket origin is the fin base
    pub const FIN_HEIGHT: f32 = 30.0;
    /// Exhaust emitters sit this far below the rocket origin
    pub const EXHAUST_OFFSET_Y: f32 = 45.0;
    /// Side thrusters are offset horizontally by this much
    pub const SIDE_EXHAUST_OFFSET_X: f32 = 10.0;
    /// Outer flame tip length when thrusting
    pub const FLAME_LENGTH: f32 = 35.0;

    /// Ground smoke sits this far above the canvas bottom
    pub const GROUND_SMOKE_OFFSET: f32 = 60.0;
    /// Smoke only forms when descending slower than this
    pub const SMOKE_MAX_VY: f32 = 1.5;

    /// Debris count for the one-shot crash explosion
    pub const EXPLOSION_COUNT: usize = 100;

    /// Background star field
    pub const STAR_COUNT: usize = 500;
}
