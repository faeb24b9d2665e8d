//! Landing / crash classification
//!
//! Pure function of rocket position, velocity and pad geometry.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::config::{LanderConfig, PadSpan};

/// Result of judging the rocket for one tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    /// Still above the trigger line
    Flying,
    Landed,
    Crashed,
}

/// Geometry and limits the rocket is judged against
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LandingJudge {
    /// Evaluation happens once `y` exceeds this
    pub trigger_y: f32,
    pub pad: PadSpan,
    /// Strict upper bound on |vx| and |vy|
    pub safe_speed: f32,
}

impl LandingJudge {
    pub fn from_config(config: &LanderConfig) -> Self {
        Self {
            trigger_y: config.trigger_y(),
            pad: config.pad,
            safe_speed: config.safe_landing_speed,
        }
    }

    #[inline]
    pub fn triggered(&self, pos: Vec2) -> bool {
        pos.y > self.trigger_y
    }

    /// On the pad and slow on both axes
    pub fn is_safe(&self, pos: Vec2, vel: Vec2) -> bool {
        self.pad.contains(pos.x) && vel.x.abs() < self.safe_speed && vel.y.abs() < self.safe_speed
    }

    pub fn evaluate(&self, pos: Vec2, vel: Vec2) -> Outcome {
        if !self.triggered(pos) {
            Outcome::Flying
        } else if self.is_safe(pos, vel) {
            Outcome::Landed
        } else {
            Outcome::Crashed
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn judge() -> LandingJudge {
        LandingJudge::from_config(&LanderConfig::mission())
    }

    #[test]
    fn test_above_trigger_is_flying() {
        let judge = judge();
        // Even a fatal velocity is fine until the trigger line
        assert_eq!(
            judge.evaluate(Vec2::new(350.0, 610.0), Vec2::new(5.0, 9.0)),
            Outcome::Flying
        );
        assert_eq!(
            judge.evaluate(Vec2::new(10.0, 100.0), Vec2::ZERO),
            Outcome::Flying
        );
    }

    #[test]
    fn test_soft_touchdown_on_pad_lands() {
        let judge = judge();
        assert_eq!(
            judge.evaluate(Vec2::new(350.0, 611.0), Vec2::new(0.0, 0.5)),
            Outcome::Landed
        );
        assert_eq!(
            judge.evaluate(Vec2::new(300.0, 611.0), Vec2::new(-1.9, 1.9)),
            Outcome::Landed
        );
    }

    #[test]
    fn test_fast_descent_crashes() {
        let judge = judge();
        assert_eq!(
            judge.evaluate(Vec2::new(350.0, 615.0), Vec2::new(0.0, 3.0)),
            Outcome::Crashed
        );
    }

    #[test]
    fn test_sideways_drift_crashes() {
        let judge = judge();
        assert_eq!(
            judge.evaluate(Vec2::new(350.0, 615.0), Vec2::new(-2.5, 0.5)),
            Outcome::Crashed
        );
    }

    #[test]
    fn test_missing_the_pad_crashes() {
        let judge = judge();
        assert_eq!(
            judge.evaluate(Vec2::new(299.0, 615.0), Vec2::new(0.0, 0.5)),
            Outcome::Crashed
        );
        assert_eq!(
            judge.evaluate(Vec2::new(401.0, 615.0), Vec2::new(0.0, 0.5)),
            Outcome::Crashed
        );
    }

    #[test]
    fn test_threshold_is_strict() {
        let judge = judge();
        assert_eq!(
            judge.evaluate(Vec2::new(350.0, 615.0), Vec2::new(0.0, 2.0)),
            Outcome::Crashed
        );
        assert_eq!(
            judge.evaluate(Vec2::new(350.0, 615.0), Vec2::new(2.0, 0.0)),
            Outcome::Crashed
        );
    }

    #[test]
    fn test_arcade_limits() {
        let judge = LandingJudge::from_config(&LanderConfig::arcade());
        assert_eq!(judge.trigger_y, 620.0);
        assert_eq!(
            judge.evaluate(Vec2::new(350.0, 615.0), Vec2::new(0.0, 1.5)),
            Outcome::Flying
        );
        assert_eq!(
            judge.evaluate(Vec2::new(350.0, 621.0), Vec2::new(0.0, 1.5)),
            Outcome::Crashed
        );
        assert_eq!(
            judge.evaluate(Vec2::new(350.0, 621.0), Vec2::new(0.0, 0.9)),
            Outcome::Landed
        );
    }
}
