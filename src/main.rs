//! Lunar Lander headless runner
//!
//! Flies one session with a simple descent autopilot, logging the HUD once
//! per second of game time, then prints the final snapshot as JSON.
//!
//! Usage: `lunar-lander [mission | arcade | path/to/config.json]`

use lunar_lander::consts::TICKS_PER_SECOND;
use lunar_lander::sim::{GameState, SessionPhase, ThrustIntents, tick};
use lunar_lander::ui::UiLayout;
use lunar_lander::{InputState, Key, LanderConfig, Variant};

/// Ticks to let debris and smoke settle after the outcome
const SETTLE_TICKS: u32 = 60;
/// Give up on flights that never reach the ground
const MAX_FLIGHT_TICKS: u64 = 20_000;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let config = match std::env::args().nth(1) {
        Some(arg) => match Variant::from_str(&arg) {
            Some(variant) => variant.config(),
            None => LanderConfig::load(&arg)?,
        },
        None => LanderConfig::default(),
    };
    config.validate()?;
    log::info!(
        "Lunar Lander (headless) starting: {}x{} canvas, pad {}..{}",
        config.canvas_width,
        config.canvas_height,
        config.pad.x_min,
        config.pad.x_max
    );

    let layout = UiLayout::from_config(&config);
    let mut state = GameState::new(config);
    let mut input = InputState::new();

    if state.phase == SessionPhase::StartScreen {
        input.click(layout.start_button.center(), state.phase, &layout);
    }

    let mut snapshot = tick(&mut state, &input.take());
    while !state.phase.is_ended() && state.flight_ticks < MAX_FLIGHT_TICKS {
        apply_autopilot(&state, &mut input);
        snapshot = tick(&mut state, &input.take());

        if state.flight_ticks % u64::from(TICKS_PER_SECOND) == 0 {
            log::info!("t={}s | {}", state.flight_ticks / u64::from(TICKS_PER_SECOND), snapshot.hud);
        }
    }

    if !state.phase.is_ended() {
        log::warn!("Flight did not finish within {MAX_FLIGHT_TICKS} ticks");
    }

    input.release_all();
    for _ in 0..SETTLE_TICKS {
        snapshot = tick(&mut state, &input.take());
    }

    println!("{}", serde_json::to_string_pretty(&snapshot)?);
    Ok(())
}

/// Press and release thrust keys to follow a gentle glide path onto the pad
fn apply_autopilot(state: &GameState, input: &mut InputState) {
    let wanted = autopilot(state);
    for (key, pressed) in [
        (Key::Up, wanted.up),
        (Key::Down, wanted.down),
        (Key::Left, wanted.left),
        (Key::Right, wanted.right),
    ] {
        if pressed {
            input.key_down(key);
        } else {
            input.key_up(key);
        }
    }
}

fn autopilot(state: &GameState) -> ThrustIntents {
    let rocket = &state.rocket;

    // Sink up to 1.5 units/tick, easing to 0.5 over the last 100 units
    let distance = state.judge.trigger_y - rocket.pos.y;
    let target_vy = (distance / 100.0).clamp(0.5, 1.5);

    let dx = state.config.pad.center_x() - rocket.pos.x;
    let target_vx = (dx / 60.0).clamp(-1.0, 1.0);

    ThrustIntents {
        up: rocket.vel.y > target_vy,
        down: false,
        left: rocket.vel.x > target_vx + 0.05,
        right: rocket.vel.x < target_vx - 0.05,
    }
}
