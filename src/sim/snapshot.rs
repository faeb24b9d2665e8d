//! Read-only projection of the session for renderers and the HUD
//!
//! Everything a frame needs is copied out here, including derived values such
//! as particle opacity and flame length, so drawing code never reaches into
//! the simulation.

use std::fmt;

use glam::Vec2;
use serde::Serialize;

use super::particles::ParticleView;
use super::state::{GameState, SessionPhase};
use crate::consts::FLAME_LENGTH;

/// Rocket as the renderer sees it
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RocketView {
    pub pos: Vec2,
    pub vel: Vec2,
    pub fuel: f32,
    /// At least one funded thruster fired this tick
    pub thrusting: bool,
    /// Outer flame tip distance below the fins (0 when not thrusting)
    pub flame_length: f32,
}

/// Telemetry readout
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Hud {
    pub fuel: f32,
    /// Canvas height minus rocket y
    pub altitude: f32,
    /// Vertical velocity (positive is falling)
    pub velocity: f32,
}

impl Hud {
    /// Display lines, one decimal place each
    pub fn lines(&self) -> [String; 3] {
        [
            format!("Fuel: {:.1}", self.fuel),
            format!("Altitude: {:.1}", self.altitude),
            format!("Velocity: {:.1}", self.velocity),
        ]
    }
}

impl fmt::Display for Hud {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [fuel, altitude, velocity] = self.lines();
        write!(f, "{fuel} | {altitude} | {velocity}")
    }
}

/// One frame worth of render data
#[derive(Debug, Clone, Serialize)]
pub struct Snapshot {
    pub tick: u64,
    pub phase: SessionPhase,
    pub rocket: RocketView,
    pub hud: Hud,
    pub exhaust: Vec<ParticleView>,
    pub ground_smoke: Vec<ParticleView>,
    pub explosion: Vec<ParticleView>,
    pub show_start_button: bool,
    pub show_restart_button: bool,
    pub end_message: Option<&'static str>,
}

impl GameState {
    pub fn hud(&self) -> Hud {
        Hud {
            fuel: self.rocket.fuel,
            altitude: self.rocket.altitude(self.config.canvas_height),
            velocity: self.rocket.vel.y,
        }
    }

    pub fn snapshot(&self) -> Snapshot {
        let thrusting = self.phase == SessionPhase::Flying && self.last_fired.any();

        Snapshot {
            tick: self.time_ticks,
            phase: self.phase,
            rocket: RocketView {
                pos: self.rocket.pos,
                vel: self.rocket.vel,
                fuel: self.rocket.fuel,
                thrusting,
                flame_length: if thrusting { FLAME_LENGTH } else { 0.0 },
            },
            hud: self.hud(),
            exhaust: self.exhaust.views(),
            ground_smoke: self.ground_smoke.views(),
            explosion: self.explosion.views(),
            show_start_button: self.phase == SessionPhase::StartScreen,
            show_restart_button: self.phase.is_ended(),
            end_message: match self.phase {
                SessionPhase::Landed => Some("Landing Successful!"),
                SessionPhase::Crashed => Some("Rocket Crashed!"),
                _ => None,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::LanderConfig;

    #[test]
    fn test_hud_formatting() {
        let hud = Hud {
            fuel: 99.0,
            altitude: 649.99,
            velocity: 0.04,
        };
        assert_eq!(
            hud.lines(),
            [
                "Fuel: 99.0".to_string(),
                "Altitude: 650.0".to_string(),
                "Velocity: 0.0".to_string()
            ]
        );
        assert_eq!(hud.to_string(), "Fuel: 99.0 | Altitude: 650.0 | Velocity: 0.0");
    }

    #[test]
    fn test_start_screen_snapshot() {
        let state = GameState::new(LanderConfig::mission());
        let snap = state.snapshot();
        assert_eq!(snap.phase, SessionPhase::StartScreen);
        assert!(snap.show_start_button);
        assert!(!snap.show_restart_button);
        assert_eq!(snap.end_message, None);
        assert!(!snap.rocket.thrusting);
        assert_eq!(snap.rocket.flame_length, 0.0);
        assert_eq!(snap.hud.altitude, 650.0);
    }

    #[test]
    fn test_snapshot_serializes() {
        let state = GameState::new(LanderConfig::arcade());
        let json = serde_json::to_string(&state.snapshot()).expect("snapshot serializes");
        assert!(json.contains("\"phase\":\"Flying\""));
        assert!(json.contains("\"end_message\":null"));
    }
}
