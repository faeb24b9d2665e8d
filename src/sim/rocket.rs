//! Rocket kinematics and fuel
//!
//! Explicit Euler step in canvas units (y grows downward): acceleration is
//! rebuilt from gravity and thrust, then velocity, then position.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::config::LanderConfig;

/// Directional thrust the player wants this tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThrustIntents {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
}

impl ThrustIntents {
    pub const NONE: Self = Self {
        up: false,
        down: false,
        left: false,
        right: false,
    };

    #[inline]
    pub fn any(&self) -> bool {
        self.up || self.down || self.left || self.right
    }

    #[inline]
    pub fn count(&self) -> usize {
        [self.up, self.down, self.left, self.right]
            .iter()
            .filter(|&&on| on)
            .count()
    }
}

/// Kinematic state and fuel of the rocket
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RocketBody {
    /// Fin base position
    pub pos: Vec2,
    pub vel: Vec2,
    pub acc: Vec2,
    /// Remaining fuel, always in `[0, capacity]`
    pub fuel: f32,
}

impl RocketBody {
    pub fn new(pos: Vec2, fuel: f32) -> Self {
        Self {
            pos,
            vel: Vec2::ZERO,
            acc: Vec2::ZERO,
            fuel,
        }
    }

    /// Fresh rocket at the configured spawn point with a full tank
    pub fn from_config(config: &LanderConfig) -> Self {
        Self::new(config.start_position(), config.fuel_capacity)
    }

    #[inline]
    pub fn has_fuel(&self) -> bool {
        self.fuel > 0.0
    }

    /// Height above the canvas bottom
    #[inline]
    pub fn altitude(&self, canvas_height: f32) -> f32 {
        canvas_height - self.pos.y
    }

    /// Apply one tick of gravity and thrust.
    ///
    /// Intents are funded in order up, down, left, right, each checking the
    /// tank before it burns. Horizontal thrust overwrites rather than adds, so
    /// left+right leaves the rocket pushing right while burning fuel for both.
    /// Returns the intents that actually fired.
    pub fn integrate(&mut self, intents: &ThrustIntents, config: &LanderConfig) -> ThrustIntents {
        let mut fired = ThrustIntents::NONE;
        let had_fuel = self.has_fuel();

        self.acc.y = config.gravity;

        if intents.up && self.has_fuel() {
            self.acc.y -= config.thrust;
            self.fuel -= config.fuel_per_intent;
            fired.up = true;
        }
        if intents.down && self.has_fuel() {
            self.acc.y += config.thrust;
            self.fuel -= config.fuel_per_intent;
            fired.down = true;
        }
        if intents.left && self.has_fuel() {
            self.acc.x = -config.thrust;
            self.fuel -= config.fuel_per_intent;
            fired.left = true;
        }
        if intents.right && self.has_fuel() {
            self.acc.x = config.thrust;
            self.fuel -= config.fuel_per_intent;
            fired.right = true;
        }

        // Last burn may overshoot the tank
        self.fuel = self.fuel.max(0.0);
        if had_fuel && !self.has_fuel() {
            log::debug!("Fuel exhausted at y={:.1}", self.pos.y);
        }

        self.vel += self.acc;
        self.pos += self.vel;

        self.acc.x = 0.0;

        fired
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const EPS: f32 = 1e-4;

    fn rocket() -> (RocketBody, LanderConfig) {
        let config = LanderConfig::mission();
        (RocketBody::from_config(&config), config)
    }

    #[test]
    fn test_initial_state() {
        let (rocket, _) = rocket();
        assert_eq!(rocket.pos, Vec2::new(325.0, 50.0));
        assert_eq!(rocket.vel, Vec2::ZERO);
        assert_eq!(rocket.acc, Vec2::ZERO);
        assert_eq!(rocket.fuel, 100.0);
        assert_eq!(rocket.altitude(700.0), 650.0);
    }

    #[test]
    fn test_free_fall_euler_step() {
        let (mut rocket, config) = rocket();

        let fired = rocket.integrate(&ThrustIntents::NONE, &config);
        assert!(!fired.any());
        assert_eq!(rocket.acc, Vec2::new(0.0, 0.01));
        assert!((rocket.vel.y - 0.01).abs() < EPS);
        assert!((rocket.pos.y - 50.01).abs() < EPS);
        assert_eq!(rocket.vel.x, 0.0);
        assert_eq!(rocket.fuel, 100.0);
    }

    #[test]
    fn test_ten_ticks_of_gravity() {
        let (mut rocket, config) = rocket();

        let mut expected_y = 50.0_f32;
        let mut expected_vy = 0.0_f32;
        for _ in 0..10 {
            rocket.integrate(&ThrustIntents::NONE, &config);
            expected_vy += 0.01;
            expected_y += expected_vy;
        }

        assert!((rocket.vel.y - 0.10).abs() < EPS);
        assert!((rocket.pos.y - 50.55).abs() < EPS);
        assert!((rocket.pos.y - expected_y).abs() < 1e-6);
        assert_eq!(rocket.pos.x, 325.0);
    }

    #[test]
    fn test_up_thrust() {
        let (mut rocket, config) = rocket();
        let intents = ThrustIntents {
            up: true,
            ..Default::default()
        };

        let fired = rocket.integrate(&intents, &config);
        assert!(fired.up);
        assert!((rocket.acc.y - (0.01 - 0.1)).abs() < EPS);
        assert!(rocket.vel.y < 0.0);
        assert_eq!(rocket.fuel, 99.5);
    }

    #[test]
    fn test_fuel_per_funded_intent() {
        let (mut rocket, config) = rocket();
        let intents = ThrustIntents {
            up: true,
            left: true,
            ..Default::default()
        };

        let fired = rocket.integrate(&intents, &config);
        assert_eq!(fired.count(), 2);
        assert_eq!(rocket.fuel, 99.0);
        assert!((rocket.vel.x + 0.1).abs() < EPS);
        assert_eq!(rocket.acc.x, 0.0, "horizontal acceleration resets each tick");
    }

    #[test]
    fn test_left_and_right_last_write_wins() {
        let (mut rocket, config) = rocket();
        let intents = ThrustIntents {
            left: true,
            right: true,
            ..Default::default()
        };

        rocket.integrate(&intents, &config);
        assert!((rocket.vel.x - 0.1).abs() < EPS);
        assert_eq!(rocket.fuel, 99.0);
    }

    #[test]
    fn test_up_and_down_cancel() {
        let (mut rocket, config) = rocket();
        let intents = ThrustIntents {
            up: true,
            down: true,
            ..Default::default()
        };

        rocket.integrate(&intents, &config);
        assert!((rocket.acc.y - 0.01).abs() < EPS);
        assert_eq!(rocket.fuel, 99.0);
    }

    #[test]
    fn test_no_thrust_without_fuel() {
        let (mut rocket, config) = rocket();
        rocket.fuel = 0.0;
        let all = ThrustIntents {
            up: true,
            down: true,
            left: true,
            right: true,
        };

        let fired = rocket.integrate(&all, &config);
        assert!(!fired.any());
        assert_eq!(rocket.acc, Vec2::new(0.0, 0.01));
        assert_eq!(rocket.vel, Vec2::new(0.0, 0.01));
        assert_eq!(rocket.fuel, 0.0);
    }

    #[test]
    fn test_residue_is_clamped() {
        let (mut rocket, config) = rocket();
        rocket.fuel = 0.3;
        let intents = ThrustIntents {
            up: true,
            left: true,
            ..Default::default()
        };

        let fired = rocket.integrate(&intents, &config);
        assert!(fired.up);
        assert!(!fired.left, "tank ran dry before the left thruster");
        assert_eq!(rocket.fuel, 0.0);
        assert_eq!(rocket.vel.x, 0.0);
    }

    proptest! {
        #[test]
        fn prop_fuel_monotone_and_bounded(
            intents in prop::collection::vec(
                (any::<bool>(), any::<bool>(), any::<bool>(), any::<bool>()),
                1..400,
            )
        ) {
            let (mut rocket, config) = rocket();
            for (up, down, left, right) in intents {
                let before = rocket.fuel;
                let fired = rocket.integrate(
                    &ThrustIntents { up, down, left, right },
                    &config,
                );
                prop_assert!(rocket.fuel <= before);
                prop_assert!(rocket.fuel >= 0.0 && rocket.fuel <= config.fuel_capacity);
                if before >= 2.0 {
                    let spent = before - rocket.fuel;
                    prop_assert!((spent - 0.5 * fired.count() as f32).abs() < EPS);
                    prop_assert_eq!(fired, ThrustIntents { up, down, left, right });
                }
                if before <= 0.0 {
                    prop_assert!(!fired.any());
                }
                prop_assert_eq!(rocket.acc.x, 0.0);
            }
        }
    }
}
