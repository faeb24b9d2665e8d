//! Button layout and hit-testing
//!
//! The renderer draws the buttons; this module only knows where they are and
//! which one a click lands on.

use glam::Vec2;
use serde::Serialize;

use crate::config::LanderConfig;
use crate::sim::SessionPhase;

/// Axis-aligned rectangle in canvas units
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Rect {
    pub min: Vec2,
    pub size: Vec2,
}

impl Rect {
    pub fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self {
            min: Vec2::new(x, y),
            size: Vec2::new(w, h),
        }
    }

    #[inline]
    pub fn max(&self) -> Vec2 {
        self.min + self.size
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        self.min + self.size / 2.0
    }

    /// Edges are exclusive
    pub fn contains(&self, point: Vec2) -> bool {
        let max = self.max();
        point.x > self.min.x && point.x < max.x && point.y > self.min.y && point.y < max.y
    }
}

/// What a click asks the session to do
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiAction {
    Start,
    Restart,
}

/// Where the interactive buttons sit for a given canvas
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct UiLayout {
    pub start_button: Rect,
    pub restart_button: Rect,
}

impl UiLayout {
    pub fn from_config(config: &LanderConfig) -> Self {
        let (cx, cy) = (config.canvas_width / 2.0, config.canvas_height / 2.0);
        Self {
            start_button: Rect::new(cx - 100.0, cy, 200.0, 50.0),
            restart_button: Rect::new(cx - 50.0, cy + 40.0, 100.0, 40.0),
        }
    }

    /// Resolve a click; buttons only respond while they are shown
    pub fn hit(&self, point: Vec2, phase: SessionPhase) -> Option<UiAction> {
        match phase {
            SessionPhase::StartScreen if self.start_button.contains(point) => Some(UiAction::Start),
            SessionPhase::Landed | SessionPhase::Crashed if self.restart_button.contains(point) => {
                Some(UiAction::Restart)
            }
            _ => None,
        }
    }
}
