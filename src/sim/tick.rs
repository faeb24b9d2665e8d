//! Per-frame simulation tick
//!
//! Order within a flying tick: integrate the rocket, emit exhaust and ground
//! smoke, advance the particle collections, then judge the outcome. Once the
//! outcome is in, the rocket freezes until a restart.

use glam::Vec2;

use super::judge::Outcome;
use super::rocket::ThrustIntents;
use super::snapshot::Snapshot;
use super::state::{GameState, SessionPhase};
use crate::consts::{EXHAUST_OFFSET_Y, SIDE_EXHAUST_OFFSET_X};

/// Input commands for a single tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickInput {
    /// Held thrust directions
    pub intents: ThrustIntents,
    /// Start button clicked (start screen only)
    pub activate_start: bool,
    /// Restart button clicked (after landing or crashing only)
    pub restart: bool,
}

/// Advance the session by one frame and return what to draw
pub fn tick(state: &mut GameState, input: &TickInput) -> Snapshot {
    state.time_ticks += 1;

    match state.phase {
        SessionPhase::StartScreen => {
            if input.activate_start {
                state.start();
            }
        }

        SessionPhase::Flying => fly(state, &input.intents),

        SessionPhase::Landed | SessionPhase::Crashed => {
            if input.restart {
                state.restart();
            } else {
                // Rocket and exhaust stay frozen; smoke and debris play out
                state.ground_smoke.tick(&mut state.rng);
                state.explosion.tick(&mut state.rng);
            }
        }
    }

    state.snapshot()
}

fn fly(state: &mut GameState, intents: &ThrustIntents) {
    state.flight_ticks += 1;

    let fired = state.rocket.integrate(intents, &state.config);
    state.last_fired = fired;

    emit_exhaust(state, fired);

    let rocket = state.rocket;
    if rocket.pos.y > state.config.smoke_y() && rocket.vel.y.abs() < state.config.smoke_max_vy {
        let anchor = state.smoke_anchor();
        state.ground_smoke.spawn(anchor, &mut state.rng);
    }

    state.exhaust.tick(&mut state.rng);
    state.ground_smoke.tick(&mut state.rng);
    state.explosion.tick(&mut state.rng);

    let outcome = state.judge.evaluate(rocket.pos, rocket.vel);
    if outcome == Outcome::Flying {
        return;
    }

    state.rocket.vel = Vec2::ZERO;
    let hud = state.hud();

    if outcome == Outcome::Crashed {
        state.phase = SessionPhase::Crashed;
        let count = state.config.explosion_count;
        state.explosion.spawn_burst(rocket.pos, count, &mut state.rng);
        log::info!(
            "Crashed after {} ticks at x={:.1} (vx={:.2}, vy={:.2}) | {}",
            state.flight_ticks,
            rocket.pos.x,
            rocket.vel.x,
            rocket.vel.y,
            hud
        );
    } else {
        state.phase = SessionPhase::Landed;
        log::info!(
            "Landed after {} ticks at x={:.1} (vx={:.2}, vy={:.2}) | {}",
            state.flight_ticks,
            rocket.pos.x,
            rocket.vel.x,
            rocket.vel.y,
            hud
        );
    }
}

/// Main engine fires from under the fins; side thrusters exhaust opposite
/// to the push
fn emit_exhaust(state: &mut GameState, fired: ThrustIntents) {
    let base = state.rocket.pos + Vec2::new(0.0, EXHAUST_OFFSET_Y);

    if fired.up {
        state.exhaust.spawn(base, &mut state.rng);
    }
    if fired.left {
        let anchor = base + Vec2::new(SIDE_EXHAUST_OFFSET_X, 0.0);
        state.exhaust.spawn(anchor, &mut state.rng);
    }
    if fired.right {
        let anchor = base - Vec2::new(SIDE_EXHAUST_OFFSET_X, 0.0);
        state.exhaust.spawn(anchor, &mut state.rng);
    }
}
