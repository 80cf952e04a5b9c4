//! Game state and core simulation types

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::enemy::{Enemy, EnemyKind};
use super::player::Player;
use super::spawner::SpawnScheduler;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Active gameplay
    Active,
    /// Player died; frozen until reset
    GameOver,
}

/// Things that happened during a tick, drained by the game manager
#[derive(Debug, Clone, PartialEq)]
pub enum GameEvent {
    EnemySpawned { id: u32, kind: EnemyKind },
    EnemyHit { id: u32, kind: EnemyKind, health: f32 },
    EnemyKilled { id: u32, kind: EnemyKind, score: u64 },
    PlayerHurt { damage: f32, health: f32 },
    WaveCleared { wave: u32, bonus: u64 },
    GameOver { score: u64, wave: u32 },
}

/// Playfield bounds, fixed for the session
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Playfield {
    pub width: f32,
    pub height: f32,
}

impl Playfield {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width / 2.0, self.height / 2.0)
    }

    pub fn size(&self) -> Vec2 {
        Vec2::new(self.width, self.height)
    }

    /// Clamp a point so a circle of `inset` radius stays fully inside
    pub fn clamp_inset(&self, p: Vec2, inset: f32) -> Vec2 {
        Vec2::new(
            p.x.clamp(inset, (self.width - inset).max(inset)),
            p.y.clamp(inset, (self.height - inset).max(inset)),
        )
    }
}

impl Default for Playfield {
    fn default() -> Self {
        use crate::consts::{DEFAULT_FIELD_HEIGHT, DEFAULT_FIELD_WIDTH};
        Self::new(DEFAULT_FIELD_WIDTH, DEFAULT_FIELD_HEIGHT)
    }
}

/// Complete simulation state
#[derive(Debug, Clone)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    /// Random stream for spawning
    pub rng: Pcg32,
    pub field: Playfield,
    /// Current wave number (1-based)
    pub wave: u32,
    pub score: u64,
    /// Highest score seen, including previous sessions
    pub best: u64,
    pub phase: GamePhase,
    pub player: Player,
    /// Live enemies (spawn order)
    pub enemies: Vec<Enemy>,
    pub spawner: SpawnScheduler,
    /// Events recorded since the last drain
    pub events: Vec<GameEvent>,
    /// Simulated seconds since the last reset
    pub elapsed: f32,
    next_id: u32,
}

impl GameState {
    /// Create a new game state with the given seed and playfield
    pub fn new(seed: u64, field: Playfield) -> Self {
        let mut state = Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            field,
            wave: 1,
            score: 0,
            best: 0,
            phase: GamePhase::Active,
            player: Player::spawn(&field),
            enemies: Vec::new(),
            spawner: SpawnScheduler::default(),
            events: Vec::new(),
            elapsed: 0.0,
            next_id: 1,
        };
        state.spawner.begin_wave(state.wave);
        state
    }

    /// Start over in place. Best score and the random stream carry on.
    pub fn reset(&mut self) {
        self.player = Player::spawn(&self.field);
        self.enemies.clear();
        self.score = 0;
        self.wave = 1;
        self.spawner.begin_wave(self.wave);
        self.phase = GamePhase::Active;
        self.events.clear();
        self.elapsed = 0.0;
    }

    /// Allocate a new entity ID
    pub fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Insert an enemy directly (used by spawning and tests)
    pub fn add_enemy(&mut self, kind: EnemyKind, pos: Vec2) -> u32 {
        let id = self.next_entity_id();
        self.enemies.push(Enemy::new(id, kind, pos));
        id
    }

    pub fn is_game_over(&self) -> bool {
        self.phase == GamePhase::GameOver
    }

    /// Take all events recorded so far
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_state_starts_wave_one() {
        let state = GameState::new(7, Playfield::new(800.0, 600.0));
        assert_eq!(state.wave, 1);
        assert_eq!(state.spawner.remaining, 4);
        assert_eq!(state.player.pos, Vec2::new(400.0, 300.0));
        assert_eq!(state.phase, GamePhase::Active);
    }

    #[test]
    fn test_reset_keeps_best() {
        let mut state = GameState::new(7, Playfield::new(800.0, 600.0));
        state.add_enemy(EnemyKind::Brute, Vec2::new(10.0, 10.0));
        state.score = 120;
        state.best = 300;
        state.wave = 4;
        state.phase = GamePhase::GameOver;
        state.player.health = 0.0;

        state.reset();
        assert_eq!(state.score, 0);
        assert_eq!(state.best, 300);
        assert_eq!(state.wave, 1);
        assert!(state.enemies.is_empty());
        assert_eq!(state.player.health, 100.0);
        assert_eq!(state.phase, GamePhase::Active);
        assert_eq!(state.spawner.remaining, 4);
    }

    #[test]
    fn test_clamp_inset() {
        let field = Playfield::new(100.0, 50.0);
        assert_eq!(field.clamp_inset(Vec2::new(-5.0, 80.0), 10.0), Vec2::new(10.0, 40.0));
    }
}
