//! Session state and scenery
//!
//! One `GameState` owns everything a flight touches: the rocket, the three
//! particle collections, the lifecycle phase and the seeded RNG.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::judge::LandingJudge;
use super::particles::{EmitterParams, ParticleKind, ParticleSystem};
use super::rocket::{RocketBody, ThrustIntents};
use crate::config::{LanderConfig, PadSpan};

/// Lifecycle of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionPhase {
    /// Waiting for the start button
    StartScreen,
    /// Rocket under player control
    Flying,
    /// Touched down safely (terminal until restart)
    Landed,
    /// Hit too hard or missed the pad (terminal until restart)
    Crashed,
}

impl SessionPhase {
    #[inline]
    pub fn is_ended(&self) -> bool {
        matches!(self, SessionPhase::Landed | SessionPhase::Crashed)
    }
}

/// A background star
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Star {
    pub pos: Vec2,
    pub size: f32,
}

/// Terrain ridge as (x, height above canvas bottom) on a 650-wide canvas
const TERRAIN_PROFILE: [(f32, f32); 11] = [
    (0.0, 100.0),
    (60.0, 80.0),
    (50.0, 70.0),
    (250.0, 90.0),
    (350.0, 80.0),
    (400.0, 100.0),
    (450.0, 80.0),
    (500.0, 90.0),
    (550.0, 100.0),
    (600.0, 90.0),
    (650.0, 90.0),
];
const TERRAIN_PROFILE_WIDTH: f32 = 650.0;

/// Static backdrop generated once per session
#[derive(Debug, Clone, Serialize)]
pub struct Scenery {
    pub stars: Vec<Star>,
    /// Closed polygon, starting and ending on the canvas bottom
    pub terrain: Vec<Vec2>,
    pub pad: PadSpan,
    /// Canvas y of the pad surface
    pub pad_y: f32,
}

impl Scenery {
    pub fn generate<R: Rng>(config: &LanderConfig, rng: &mut R) -> Self {
        let (w, h) = (config.canvas_width, config.canvas_height);

        // Stars live in the upper half of the sky
        let stars = (0..config.star_count)
            .map(|_| Star {
                pos: Vec2::new(rng.random_range(0.0..w), rng.random_range(0.0..h / 2.0)),
                size: rng.random_range(1.0..3.0),
            })
            .collect();

        let scale = w / TERRAIN_PROFILE_WIDTH;
        let mut terrain = Vec::with_capacity(TERRAIN_PROFILE.len() + 2);
        terrain.push(Vec2::new(0.0, h));
        terrain.extend(
            TERRAIN_PROFILE
                .iter()
                .map(|&(x, rise)| Vec2::new(x * scale, h - rise)),
        );
        terrain.push(Vec2::new(w, h));

        Self {
            stars,
            terrain,
            pad: config.pad,
            pad_y: h - config.pad.surface_offset,
        }
    }
}

/// Complete session state
#[derive(Debug, Clone)]
pub struct GameState {
    pub config: LanderConfig,
    pub phase: SessionPhase,
    pub rocket: RocketBody,
    pub judge: LandingJudge,
    pub exhaust: ParticleSystem,
    pub ground_smoke: ParticleSystem,
    pub explosion: ParticleSystem,
    /// Intents that were funded on the latest flying tick
    pub last_fired: ThrustIntents,
    /// Simulation tick counter (all phases)
    pub time_ticks: u64,
    /// Ticks spent in the current flight
    pub flight_ticks: u64,
    /// Number of flights started, including the current one
    pub attempts: u32,
    scenery: Scenery,
    pub(super) rng: Pcg32,
}

impl GameState {
    /// Create a session from an already validated config
    pub fn new(config: LanderConfig) -> Self {
        let mut rng = Pcg32::seed_from_u64(config.seed);
        let scenery = Scenery::generate(&config, &mut rng);

        // Smoke forms anywhere across the pad
        let smoke_params = EmitterParams {
            jitter: Vec2::new(config.pad.width() / 2.0, 0.0),
            ..ParticleKind::GroundSmoke.params()
        };

        let phase = if config.start_screen {
            SessionPhase::StartScreen
        } else {
            SessionPhase::Flying
        };

        Self {
            rocket: RocketBody::from_config(&config),
            judge: LandingJudge::from_config(&config),
            exhaust: ParticleSystem::new(ParticleKind::Exhaust),
            ground_smoke: ParticleSystem::with_params(ParticleKind::GroundSmoke, smoke_params),
            explosion: ParticleSystem::new(ParticleKind::Explosion),
            last_fired: ThrustIntents::NONE,
            time_ticks: 0,
            flight_ticks: 0,
            attempts: u32::from(phase == SessionPhase::Flying),
            scenery,
            rng,
            phase,
            config,
        }
    }

    pub fn scenery(&self) -> &Scenery {
        &self.scenery
    }

    /// Leave the start screen
    pub fn start(&mut self) {
        if self.phase == SessionPhase::StartScreen {
            self.phase = SessionPhase::Flying;
            self.attempts += 1;
            log::info!("Flight {} started", self.attempts);
        }
    }

    /// Back to a fresh rocket with every particle collection emptied
    pub fn restart(&mut self) {
        self.rocket = RocketBody::from_config(&self.config);
        self.exhaust.clear();
        self.ground_smoke.clear();
        self.explosion.clear();
        self.last_fired = ThrustIntents::NONE;
        self.flight_ticks = 0;
        self.phase = SessionPhase::Flying;
        self.attempts += 1;
        log::info!("Flight {} started (restart)", self.attempts);
    }

    /// Centre of the band where ground smoke forms
    pub fn smoke_anchor(&self) -> Vec2 {
        Vec2::new(
            self.config.pad.center_x(),
            self.config.canvas_height - crate::consts::GROUND_SMOKE_OFFSET,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_mission_starts_on_start_screen() {
        let state = GameState::new(LanderConfig::mission());
        assert_eq!(state.phase, SessionPhase::StartScreen);
        assert_eq!(state.attempts, 0);
        assert_eq!(state.rocket.pos, Vec2::new(325.0, 50.0));
        assert_eq!(state.rocket.fuel, 100.0);
        assert!(state.exhaust.is_empty());
    }

    #[test]
    fn test_new_arcade_starts_flying() {
        let state = GameState::new(LanderConfig::arcade());
        assert_eq!(state.phase, SessionPhase::Flying);
        assert_eq!(state.attempts, 1);
        assert_eq!(state.rocket.pos, Vec2::new(350.0, 50.0));
    }

    #[test]
    fn test_start_only_from_start_screen() {
        let mut state = GameState::new(LanderConfig::mission());
        state.start();
        assert_eq!(state.phase, SessionPhase::Flying);
        state.start();
        assert_eq!(state.attempts, 1);
    }

    #[test]
    fn test_scenery_generation() {
        let config = LanderConfig::mission();
        let state = GameState::new(config.clone());
        let scenery = state.scenery();

        assert_eq!(scenery.stars.len(), 500);
        for star in &scenery.stars {
            assert!((0.0..650.0).contains(&star.pos.x));
            assert!((0.0..350.0).contains(&star.pos.y));
            assert!((1.0..3.0).contains(&star.size));
        }

        assert_eq!(scenery.terrain.first(), Some(&Vec2::new(0.0, 700.0)));
        assert_eq!(scenery.terrain.last(), Some(&Vec2::new(650.0, 700.0)));
        assert_eq!(scenery.terrain[1], Vec2::new(0.0, 600.0));
        assert_eq!(scenery.pad_y, 650.0);
    }

    #[test]
    fn test_scenery_is_seeded() {
        let a = GameState::new(LanderConfig::mission());
        let b = GameState::new(LanderConfig::mission());
        assert_eq!(a.scenery().stars, b.scenery().stars);

        let mut other = LanderConfig::mission();
        other.seed = 99;
        let c = GameState::new(other);
        assert_ne!(a.scenery().stars, c.scenery().stars);
    }

    #[test]
    fn test_terrain_scales_with_canvas() {
        let state = GameState::new(LanderConfig::arcade());
        let ridge_end = state.scenery().terrain[TERRAIN_PROFILE.len()];
        assert!((ridge_end.x - 700.0).abs() < 1e-3);
    }

    #[test]
    fn test_smoke_anchor_over_pad() {
        let state = GameState::new(LanderConfig::mission());
        assert_eq!(state.smoke_anchor(), Vec2::new(350.0, 640.0));
        assert_eq!(state.ground_smoke.params().jitter, Vec2::new(50.0, 0.0));
    }
}
