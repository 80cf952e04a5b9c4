//! Simulation manager
//!
//! Owns the game state and the two injected collaborators: score storage and
//! the HUD. Hosts call `update` once per frame and `reset` on restart.

use crate::consts::MAX_FRAME_DT;
use crate::input::InputState;
use crate::persistence::{Storage, load_best, store_best};
use crate::sim::{GameEvent, GameState, Playfield, tick};
use crate::ui::{Hud, HudValues};

/// A running game wired to its storage and HUD
pub struct Game<S: Storage, H: Hud> {
    state: GameState,
    storage: S,
    hud: H,
    best_key: String,
    /// Events from the most recent update
    events: Vec<GameEvent>,
}

impl<S: Storage, H: Hud> Game<S, H> {
    /// Start a new game, reading the best score from `storage` under `best_key`
    pub fn new(seed: u64, field: Playfield, storage: S, hud: H, best_key: &str) -> Self {
        let mut state = GameState::new(seed, field);
        state.best = load_best(&storage, best_key);
        log::info!(
            "Game started: seed={} field={}x{} best={}",
            seed,
            field.width,
            field.height,
            state.best
        );

        let mut game = Self {
            state,
            storage,
            hud,
            best_key: best_key.to_string(),
            events: Vec::new(),
        };
        game.refresh_hud();
        game
    }

    /// Advance the game by `dt` seconds (clamped to `MAX_FRAME_DT`)
    pub fn update(&mut self, input: &InputState, dt: f32) {
        self.events.clear();
        if self.state.is_game_over() {
            return;
        }

        let dt = dt.clamp(0.0, MAX_FRAME_DT);
        tick(&mut self.state, input, dt);

        self.events = self.state.drain_events();
        for event in &self.events {
            log_event(event);
        }

        if self.state.score > self.state.best {
            self.state.best = self.state.score;
            store_best(&mut self.storage, &self.best_key, self.state.best);
        }

        self.refresh_hud();
    }

    /// Start a fresh run. The best score is kept.
    pub fn reset(&mut self) {
        self.state.reset();
        self.events.clear();
        log::info!("Game reset (best {})", self.state.best);
        self.refresh_hud();
    }

    /// Push current values to the HUD
    pub fn refresh_hud(&mut self) {
        self.hud.show(&HudValues::from_state(&self.state));
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Mutable access for hosts and tests that stage scenarios
    pub fn state_mut(&mut self) -> &mut GameState {
        &mut self.state
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn hud(&self) -> &H {
        &self.hud
    }

    pub fn events(&self) -> &[GameEvent] {
        &self.events
    }

    pub fn is_game_over(&self) -> bool {
        self.state.is_game_over()
    }
}

fn log_event(event: &GameEvent) {
    match event {
        GameEvent::EnemySpawned { id, kind } => {
            log::debug!("Spawned {} #{}", kind.as_str(), id);
        }
        GameEvent::EnemyHit { id, kind, health } => {
            log::debug!("Hit {} #{} ({} hp left)", kind.as_str(), id, health);
        }
        GameEvent::EnemyKilled { id, kind, score } => {
            log::debug!("Killed {} #{} (+{})", kind.as_str(), id, score);
        }
        GameEvent::PlayerHurt { damage, health } => {
            log::debug!("Player took {} damage ({} hp)", damage, health);
        }
        GameEvent::WaveCleared { wave, bonus } => {
            log::info!("Wave {} cleared (+{})", wave, bonus);
        }
        GameEvent::GameOver { score, wave } => {
            log::info!("Game over: score {} on wave {}", score, wave);
        }
    }
}
