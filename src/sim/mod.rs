//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One tick per frame, all rates in units per tick
//! - Seeded RNG only
//! - No rendering or platform dependencies

pub mod judge;
pub mod particles;
pub mod rocket;
pub mod snapshot;
pub mod state;
pub mod tick;

pub use judge::{LandingJudge, Outcome};
pub use particles::{Drift, EmitterParams, Particle, ParticleKind, ParticleSystem, ParticleView};
pub use rocket::{RocketBody, ThrustIntents};
pub use snapshot::{Hud, RocketView, Snapshot};
pub use state::{GameState, Scenery, SessionPhase, Star};
pub use tick::{TickInput, tick};
