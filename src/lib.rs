//! Hack & Slash - A top-down wave survival arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (entities, melee, spawning, game state)
//! - `game`: Simulation manager wiring the sim to storage and the HUD
//! - `input`: Held keys and pointer state written by the host
//! - `render`: Draw-list scene and canvas backend
//! - `platform`: Browser host and frame clock
//! - `persistence`: Best score key/value storage
//! - `settings`: Player preferences

pub mod game;
pub mod input;
pub mod persistence;
pub mod platform;
pub mod render;
pub mod settings;
pub mod sim;
pub mod ui;

pub use game::Game;
pub use input::InputState;
pub use settings::Settings;

use glam::Vec2;
use rand::Rng;

/// Game configuration constants
pub mod consts {
    /// Upper bound on a single tick's elapsed time (seconds)
    pub const MAX_FRAME_DT: f32 = 0.06;

    /// Default playfield size when no rendering surface dictates one
    pub const DEFAULT_FIELD_WIDTH: f32 = 960.0;
    pub const DEFAULT_FIELD_HEIGHT: f32 = 600.0;

    /// Player defaults
    pub const PLAYER_RADIUS: f32 = 18.0;
    pub const PLAYER_SPEED: f32 = 220.0;
    pub const PLAYER_MAX_HEALTH: f32 = 100.0;
    /// Health regained per second (zero: health only ever drops)
    pub const PLAYER_REGEN_PER_SEC: f32 = 0.0;
    /// Invulnerability granted after taking contact damage
    pub const PLAYER_INVULNERABILITY: f32 = 0.9;
    /// Contact triggers when centres are closer than the radii sum minus this
    pub const CONTACT_TOLERANCE: f32 = 2.0;

    /// Melee swing
    pub const SWING_COOLDOWN: f32 = 0.35;
    pub const SWING_RANGE: f32 = 56.0;
    pub const SWING_ARC: f32 = std::f32::consts::PI * 0.9;
    pub const SWING_KNOCKBACK: f32 = 18.0;

    /// Spawning
    pub const WAVE_BASE_SPAWNS: u32 = 3;
    pub const WAVE_SPAWNS_PER_WAVE: f32 = 1.5;
    pub const WAVE_FIRST_SPAWN_DELAY: f32 = 0.4;
    pub const SPAWN_INTERVAL_MIN: f32 = 0.35;
    pub const SPAWN_INTERVAL_MAX: f32 = 0.9;
    /// Inset from the playfield corners for the along-edge coordinate
    pub const SPAWN_EDGE_MARGIN: f32 = 40.0;
    /// How far outside the playfield enemies appear
    pub const SPAWN_OFFSCREEN: f32 = 30.0;
    pub const GRUNT_CHANCE: f64 = 0.85;

    /// Score awarded for clearing a wave
    pub const WAVE_CLEAR_BONUS: u64 = 50;
}

/// Normalize an angle to (-π, π]
#[inline]
pub fn normalize_angle(mut angle: f32) -> f32 {
    use std::f32::consts::{PI, TAU};
    while angle > PI {
        angle -= TAU;
    }
    while angle <= -PI {
        angle += TAU;
    }
    angle
}

/// Signed angular difference `a - b`, normalized to (-π, π]
#[inline]
pub fn angle_diff(a: f32, b: f32) -> f32 {
    normalize_angle(a - b)
}

/// Angle of the vector pointing from `from` to `to`
#[inline]
pub fn angle_to(from: Vec2, to: Vec2) -> f32 {
    let d = to - from;
    d.y.atan2(d.x)
}

/// Uniform random value in `[min, max)`; returns `min` for an empty range
#[inline]
pub fn random_in_range<R: Rng + ?Sized>(rng: &mut R, min: f32, max: f32) -> f32 {
    if max <= min {
        return min;
    }
    rng.random_range(min..max)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;
    use std::f32::consts::PI;

    #[test]
    fn test_normalize_angle_half_open() {
        assert!((normalize_angle(PI) - PI).abs() < 1e-5);
        assert!((normalize_angle(-PI) - PI).abs() < 1e-5);
        assert!((normalize_angle(3.0 * PI / 2.0) + PI / 2.0).abs() < 1e-5);
        assert!(normalize_angle(0.0).abs() < 1e-6);
    }

    #[test]
    fn test_angle_diff_behind() {
        let diff = angle_diff(PI, 0.0);
        assert!((diff.abs() - PI).abs() < 1e-5);
    }

    #[test]
    fn test_random_in_range_degenerate() {
        let mut rng = Pcg32::seed_from_u64(1);
        assert_eq!(random_in_range(&mut rng, 5.0, 5.0), 5.0);
        for _ in 0..100 {
            let v = random_in_range(&mut rng, 0.35, 0.9);
            assert!((0.35..0.9).contains(&v));
        }
    }

    proptest! {
        #[test]
        fn normalized_angle_stays_in_range(angle in -100.0f32..100.0) {
            let n = normalize_angle(angle);
            prop_assert!(n > -PI - 1e-5 && n <= PI + 1e-5);
            // Same direction as the input
            prop_assert!((n.cos() - angle.cos()).abs() < 1e-3);
            prop_assert!((n.sin() - angle.sin()).abs() < 1e-3);
        }
    }
}
