//! Melee swing and contact resolution
//!
//! A swing covers a circular sector around the player: everything whose
//! centre lies within `range + enemy radius` and whose bearing is within half
//! the arc of the aim direction gets hit.

use glam::Vec2;

use super::enemy::{Enemy, EnemyKind};
use crate::consts::*;
use crate::{angle_diff, angle_to};

/// A melee swing in flight
#[derive(Debug, Clone, Copy)]
pub struct Swing {
    pub origin: Vec2,
    /// Aim direction (radians)
    pub aim: f32,
    pub range: f32,
    /// Total angular width (radians)
    pub arc: f32,
}

impl Swing {
    /// Swing from `origin` toward `target` with default reach
    pub fn toward(origin: Vec2, target: Vec2) -> Self {
        Self::new(origin, angle_to(origin, target))
    }

    pub fn new(origin: Vec2, aim: f32) -> Self {
        Self {
            origin,
            aim,
            range: SWING_RANGE,
            arc: SWING_ARC,
        }
    }

    /// Whether a circle at `pos` with `radius` is caught by the swing
    pub fn covers(&self, pos: Vec2, radius: f32) -> bool {
        if self.origin.distance(pos) > self.range + radius {
            return false;
        }
        let bearing = angle_to(self.origin, pos);
        angle_diff(bearing, self.aim).abs() <= self.arc / 2.0
    }
}

/// One enemy struck by a swing
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SwingHit {
    pub id: u32,
    pub kind: EnemyKind,
    /// Health left after the hit (may be negative)
    pub health: f32,
    pub killed: bool,
}

/// Result of resolving a swing
#[derive(Debug, Clone, Default)]
pub struct SwingOutcome {
    pub hits: Vec<SwingHit>,
    /// Score earned from killing blows
    pub score: u64,
}

/// Apply a swing to every enemy it covers: damage, knockback, kill score.
///
/// Enemies already at zero health are skipped.
pub fn resolve_swing(swing: &Swing, enemies: &mut [Enemy]) -> SwingOutcome {
    let mut outcome = SwingOutcome::default();

    for enemy in enemies.iter_mut().filter(|e| !e.is_dead()) {
        if !swing.covers(enemy.pos, enemy.radius()) {
            continue;
        }
        let stats = enemy.kind.stats();
        let bearing = angle_to(swing.origin, enemy.pos);

        enemy.health -= stats.hit_damage;
        enemy.pos += Vec2::new(bearing.cos(), bearing.sin()) * SWING_KNOCKBACK;

        let killed = enemy.is_dead();
        if killed {
            outcome.score += stats.kill_score;
        }
        outcome.hits.push(SwingHit {
            id: enemy.id,
            kind: enemy.kind,
            health: enemy.health,
            killed,
        });
    }

    outcome
}

/// Whether an enemy is close enough to hurt the player
pub fn in_contact(player_pos: Vec2, player_radius: f32, enemy: &Enemy) -> bool {
    player_pos.distance(enemy.pos) < enemy.radius() + player_radius - CONTACT_TOLERANCE
}
