//! Keyboard and mouse bookkeeping
//!
//! Events may arrive at any time between frames; the simulation only ever sees
//! the per-tick copy produced by [`InputState::take`].

use glam::Vec2;

use crate::sim::{SessionPhase, ThrustIntents, TickInput};
use crate::ui::{UiAction, UiLayout};

/// Logical thrust keys
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Up,
    Down,
    Left,
    Right,
}

impl Key {
    /// Map a DOM-style key name to a thrust key
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "ArrowUp" | "Up" => Some(Key::Up),
            "ArrowDown" | "Down" => Some(Key::Down),
            "ArrowLeft" | "Left" => Some(Key::Left),
            "ArrowRight" | "Right" => Some(Key::Right),
            _ => None,
        }
    }
}

/// Accumulated input between two ticks
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InputState {
    held: ThrustIntents,
    activate_start: bool,
    restart: bool,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn key_down(&mut self, key: Key) {
        self.set(key, true);
    }

    pub fn key_up(&mut self, key: Key) {
        self.set(key, false);
    }

    fn set(&mut self, key: Key, pressed: bool) {
        match key {
            Key::Up => self.held.up = pressed,
            Key::Down => self.held.down = pressed,
            Key::Left => self.held.left = pressed,
            Key::Right => self.held.right = pressed,
        }
    }

    /// Release every held key (e.g. on focus loss)
    pub fn release_all(&mut self) {
        self.held = ThrustIntents::NONE;
    }

    pub fn held(&self) -> ThrustIntents {
        self.held
    }

    /// Queue the button under `point`, if it is currently shown
    pub fn click(&mut self, point: Vec2, phase: SessionPhase, layout: &UiLayout) -> Option<UiAction> {
        let action = layout.hit(point, phase);
        match action {
            Some(UiAction::Start) => self.activate_start = true,
            Some(UiAction::Restart) => self.restart = true,
            None => {}
        }
        action
    }

    /// Copy out this tick's input and clear the one-shot events
    pub fn take(&mut self) -> TickInput {
        let input = TickInput {
            intents: self.held,
            activate_start: self.activate_start,
            restart: self.restart,
        };
        self.activate_start = false;
        self.restart = false;
        input
    }
}
