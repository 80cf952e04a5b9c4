//! Enemies and their per-type stats

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Enemy types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum EnemyKind {
    /// Small and quick
    #[default]
    Grunt,
    /// Big, slow and tough
    Brute,
}

/// Fixed stats for an enemy type
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EnemyStats {
    pub radius: f32,
    pub speed: f32,
    pub health: f32,
    /// Health lost per melee hit
    pub hit_damage: f32,
    /// Damage dealt to the player on contact
    pub contact_damage: f32,
    /// Score awarded for the killing blow
    pub kill_score: u64,
}

const GRUNT: EnemyStats = EnemyStats {
    radius: 14.0,
    speed: 80.0,
    health: 20.0,
    hit_damage: 30.0,
    contact_damage: 8.0,
    kill_score: 10,
};

const BRUTE: EnemyStats = EnemyStats {
    radius: 22.0,
    speed: 50.0,
    health: 60.0,
    hit_damage: 18.0,
    contact_damage: 14.0,
    kill_score: 30,
};

impl EnemyKind {
    pub fn stats(&self) -> &'static EnemyStats {
        match self {
            EnemyKind::Grunt => &GRUNT,
            EnemyKind::Brute => &BRUTE,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            EnemyKind::Grunt => "grunt",
            EnemyKind::Brute => "brute",
        }
    }
}

/// A live enemy
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Enemy {
    pub id: u32,
    pub kind: EnemyKind,
    pub pos: Vec2,
    pub health: f32,
}

impl Enemy {
    pub fn new(id: u32, kind: EnemyKind, pos: Vec2) -> Self {
        Self {
            id,
            kind,
            pos,
            health: kind.stats().health,
        }
    }

    #[inline]
    pub fn radius(&self) -> f32 {
        self.kind.stats().radius
    }

    #[inline]
    pub fn speed(&self) -> f32 {
        self.kind.stats().speed
    }

    pub fn is_dead(&self) -> bool {
        self.health <= 0.0
    }

    /// Home in on the target in a straight line
    pub fn update(&mut self, dt: f32, target: Vec2) {
        let delta = target - self.pos;
        let len = delta.length();
        let len = if len > 0.0 { len } else { 1.0 };
        self.pos += delta / len * self.speed() * dt;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stats_table() {
        let grunt = Enemy::new(1, EnemyKind::Grunt, Vec2::ZERO);
        assert_eq!(grunt.radius(), 14.0);
        assert_eq!(grunt.speed(), 80.0);
        assert_eq!(grunt.health, 20.0);

        let brute = Enemy::new(2, EnemyKind::Brute, Vec2::ZERO);
        assert_eq!(brute.radius(), 22.0);
        assert_eq!(brute.speed(), 50.0);
        assert_eq!(brute.health, 60.0);
    }

    #[test]
    fn test_homes_toward_target() {
        let mut enemy = Enemy::new(1, EnemyKind::Grunt, Vec2::new(0.0, 0.0));
        enemy.update(0.5, Vec2::new(100.0, 0.0));
        assert!((enemy.pos.x - 40.0).abs() < 1e-4);
        assert_eq!(enemy.pos.y, 0.0);
    }

    #[test]
    fn test_on_target_does_not_move() {
        let target = Vec2::new(50.0, 50.0);
        let mut enemy = Enemy::new(1, EnemyKind::Brute, target);
        enemy.update(0.1, target);
        assert_eq!(enemy.pos, target);
        assert!(enemy.pos.is_finite());
    }
}
