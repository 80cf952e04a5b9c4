//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Behaviour depends only on the elapsed time passed in, never wall-clock
//! - Seeded RNG only
//! - Stable iteration order (spawn order)
//! - No rendering or platform dependencies

pub mod autopilot;
pub mod combat;
pub mod enemy;
pub mod player;
pub mod spawner;
pub mod state;
pub mod tick;

pub use combat::{Swing, SwingHit, SwingOutcome, in_contact, resolve_swing};
pub use enemy::{Enemy, EnemyKind, EnemyStats};
pub use player::Player;
pub use spawner::{SpawnRequest, SpawnScheduler, wave_size};
pub use state::{GameEvent, GamePhase, GameState, Playfield};
pub use tick::tick;
