//! Simulation tick
//!
//! Advances the game state by an elapsed time delta. Order within a tick:
//! waves and spawning, player movement, melee swing, enemy movement and
//! contact, cleanup, death check.

use super::combat::{Swing, in_contact, resolve_swing};
use super::spawner::SpawnRequest;
use super::state::{GameEvent, GamePhase, GameState};
use crate::consts::*;
use crate::input::InputState;

/// Advance the game state by `dt` seconds
pub fn tick(state: &mut GameState, input: &InputState, dt: f32) {
    // Frozen until reset
    if state.phase == GamePhase::GameOver {
        return;
    }
    state.elapsed += dt;

    // Waves: advance once everything is spawned and dead, otherwise keep spawning
    if state.spawner.exhausted() && state.enemies.is_empty() {
        advance_wave(state);
    } else if let Some(request) = state.spawner.try_spawn(dt, &mut state.rng, &state.field) {
        spawn_enemy(state, request);
    }

    state.player.update(dt, input, &state.field);

    if input.pointer_down && state.player.attempt_swing() {
        let swing = Swing::toward(state.player.pos, input.pointer);
        let outcome = resolve_swing(&swing, &mut state.enemies);
        state.score += outcome.score;
        for hit in outcome.hits {
            if hit.killed {
                state.events.push(GameEvent::EnemyKilled {
                    id: hit.id,
                    kind: hit.kind,
                    score: hit.kind.stats().kill_score,
                });
            } else {
                state.events.push(GameEvent::EnemyHit {
                    id: hit.id,
                    kind: hit.kind,
                    health: hit.health,
                });
            }
        }
    }

    // Newest first; the first contact in a window is the one that lands
    let player_pos = state.player.pos;
    let player_radius = state.player.radius;
    for enemy in state.enemies.iter_mut().rev() {
        enemy.update(dt, player_pos);
        if in_contact(player_pos, player_radius, enemy) {
            let damage = enemy.kind.stats().contact_damage;
            if state.player.take_contact(damage) {
                state.events.push(GameEvent::PlayerHurt {
                    damage,
                    health: state.player.health,
                });
            }
        }
    }
    state.enemies.retain(|e| !e.is_dead());

    if state.player.is_dead() {
        state.player.health = 0.0;
        state.phase = GamePhase::GameOver;
        state.events.push(GameEvent::GameOver {
            score: state.score,
            wave: state.wave,
        });
    } else {
        let regen = state.player.health + PLAYER_REGEN_PER_SEC * dt;
        state.player.health = regen.clamp(0.0, PLAYER_MAX_HEALTH);
    }
}

/// Move on to the next wave and pay the clear bonus
fn advance_wave(state: &mut GameState) {
    let cleared = state.wave;
    state.wave += 1;
    state.spawner.begin_wave(state.wave);
    state.score += WAVE_CLEAR_BONUS;
    state.events.push(GameEvent::WaveCleared {
        wave: cleared,
        bonus: WAVE_CLEAR_BONUS,
    });
}

fn spawn_enemy(state: &mut GameState, request: SpawnRequest) {
    let id = state.add_enemy(request.kind, request.pos);
    state.events.push(GameEvent::EnemySpawned {
        id,
        kind: request.kind,
    });
}
