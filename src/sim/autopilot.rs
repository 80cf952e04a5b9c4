//! Idle/demo mode - a simple bot that plays the game
//!
//! Aims at the nearest enemy and keeps the attack button held. Backs away
//! when something gets closer than the swing can comfortably handle and
//! drifts back toward the centre when idle.

use glam::Vec2;

use super::state::GameState;
use crate::consts::SWING_RANGE;
use crate::input::InputState;

/// Keys the bot presses; released before each decision
const MOVE_KEYS: [&str; 4] = ["w", "a", "s", "d"];

/// Closer than this (centre to centre) and the bot retreats
const PANIC_DISTANCE: f32 = SWING_RANGE * 0.6;
/// Dead zone around the centre when drifting home
const HOME_SLACK: f32 = 40.0;

/// Overwrite `input` with the bot's choice for the next tick
pub fn drive(state: &GameState, input: &mut InputState) {
    for key in MOVE_KEYS {
        input.key_up(key);
    }

    let player = state.player.pos;
    let nearest = state
        .enemies
        .iter()
        .filter(|e| !e.is_dead())
        .min_by(|a, b| {
            a.pos
                .distance_squared(player)
                .partial_cmp(&b.pos.distance_squared(player))
                .unwrap_or(std::cmp::Ordering::Equal)
        });

    let heading = match nearest {
        Some(enemy) => {
            input.pointer = enemy.pos;
            input.pointer_down = true;
            if enemy.pos.distance(player) < PANIC_DISTANCE + enemy.radius() {
                player - enemy.pos
            } else {
                Vec2::ZERO
            }
        }
        None => {
            input.pointer_down = false;
            let home = state.field.center() - player;
            if home.length() > HOME_SLACK { home } else { Vec2::ZERO }
        }
    };

    press_toward(input, heading);
}

/// Hold the movement keys that best approximate `heading`
fn press_toward(input: &mut InputState, heading: Vec2) {
    let dir = heading.normalize_or_zero();
    // ~22.5° either side of an axis still counts as that axis
    const AXIS_THRESHOLD: f32 = 0.38;
    if dir.x > AXIS_THRESHOLD {
        input.key_down("d");
    } else if dir.x < -AXIS_THRESHOLD {
        input.key_down("a");
    }
    if dir.y > AXIS_THRESHOLD {
        input.key_down("s");
    } else if dir.y < -AXIS_THRESHOLD {
        input.key_down("w");
    }
}
