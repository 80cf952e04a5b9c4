//! The player avatar

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::state::Playfield;
use crate::consts::*;
use crate::input::InputState;

/// The player-controlled avatar
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    pub pos: Vec2,
    pub radius: f32,
    /// Movement speed (units/sec)
    pub speed: f32,
    /// Health in [0, PLAYER_MAX_HEALTH]
    pub health: f32,
    /// Seconds of contact immunity left
    pub invulnerable: f32,
    /// Seconds until the next swing is allowed
    pub cooldown: f32,
}

impl Player {
    pub fn new(pos: Vec2) -> Self {
        Self {
            pos,
            radius: PLAYER_RADIUS,
            speed: PLAYER_SPEED,
            health: PLAYER_MAX_HEALTH,
            invulnerable: 0.0,
            cooldown: 0.0,
        }
    }

    /// Spawn in the centre of the playfield
    pub fn spawn(field: &Playfield) -> Self {
        Self::new(field.center())
    }

    /// Move from held keys and count down timers
    pub fn update(&mut self, dt: f32, input: &InputState, field: &Playfield) {
        let dir = input.move_axis().normalize_or_zero();
        let next = self.pos + dir * self.speed * dt;
        self.pos = field.clamp_inset(next, self.radius);

        self.invulnerable = (self.invulnerable - dt).max(0.0);
        self.cooldown = (self.cooldown - dt).max(0.0);
    }

    /// Start a swing if the previous one has fully recovered
    pub fn attempt_swing(&mut self) -> bool {
        if self.cooldown == 0.0 {
            self.cooldown = SWING_COOLDOWN;
            true
        } else {
            false
        }
    }

    /// Take contact damage unless still immune. Returns true if damage landed.
    pub fn take_contact(&mut self, damage: f32) -> bool {
        if self.invulnerable > 0.0 {
            return false;
        }
        self.health -= damage;
        self.invulnerable = PLAYER_INVULNERABILITY;
        true
    }

    pub fn is_dead(&self) -> bool {
        self.health <= 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn field() -> Playfield {
        Playfield::new(800.0, 600.0)
    }

    #[test]
    fn test_diagonal_movement_is_normalized() {
        let mut player = Player::new(Vec2::new(400.0, 300.0));
        let mut input = InputState::default();
        input.key_down("d");
        input.key_down("s");

        player.update(0.1, &input, &field());
        let moved = player.pos - Vec2::new(400.0, 300.0);
        assert!((moved.length() - PLAYER_SPEED * 0.1).abs() < 1e-3);
        assert!(moved.x > 0.0 && moved.y > 0.0);
    }

    #[test]
    fn test_no_keys_no_movement() {
        let mut player = Player::new(Vec2::new(400.0, 300.0));
        player.update(0.5, &InputState::default(), &field());
        assert_eq!(player.pos, Vec2::new(400.0, 300.0));
    }

    #[test]
    fn test_timers_never_negative() {
        let mut player = Player::new(Vec2::new(400.0, 300.0));
        player.invulnerable = 0.1;
        player.cooldown = 0.2;
        player.update(1.0, &InputState::default(), &field());
        assert_eq!(player.invulnerable, 0.0);
        assert_eq!(player.cooldown, 0.0);
    }

    #[test]
    fn test_swing_gated_by_cooldown() {
        let mut player = Player::new(Vec2::new(400.0, 300.0));
        assert!(player.attempt_swing());
        assert!(!player.attempt_swing());
        assert_eq!(player.cooldown, SWING_COOLDOWN);

        // Partially recovered is still not enough
        player.update(0.2, &InputState::default(), &field());
        assert!(!player.attempt_swing());

        player.update(0.2, &InputState::default(), &field());
        assert!(player.attempt_swing());
    }

    #[test]
    fn test_contact_respects_invulnerability() {
        let mut player = Player::new(Vec2::new(400.0, 300.0));
        assert!(player.take_contact(8.0));
        assert!(!player.take_contact(14.0));
        assert_eq!(player.health, 92.0);
        assert_eq!(player.invulnerable, PLAYER_INVULNERABILITY);
    }

    proptest! {
        #[test]
        fn player_stays_inside_inset_field(
            x in -500.0f32..1500.0,
            y in -500.0f32..1500.0,
            dt in 0.0f32..10.0,
            keys in proptest::sample::subsequence(
                vec!["w", "a", "s", "d", "arrowup", "arrowleft", "arrowdown", "arrowright"],
                0..=4,
            ),
        ) {
            let field = field();
            let mut player = Player::new(Vec2::new(x, y));
            let mut input = InputState::default();
            for k in keys {
                input.key_down(k);
            }
            player.update(dt, &input, &field);
            prop_assert!(player.pos.x >= player.radius && player.pos.x <= field.width - player.radius);
            prop_assert!(player.pos.y >= player.radius && player.pos.y <= field.height - player.radius);
        }
    }
}
