//! HUD display
//!
//! The game pushes score, health, best and wave to a `Hud` after every tick.
//! Implementations must tolerate missing display targets.

use crate::sim::GameState;

/// Values shown on the HUD, already rounded for display
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct HudValues {
    pub score: u64,
    /// Whole health points, never negative
    pub health: u32,
    pub best: u64,
    pub wave: u32,
}

impl HudValues {
    pub fn from_state(state: &GameState) -> Self {
        Self {
            score: state.score,
            health: state.player.health.max(0.0).floor() as u32,
            best: state.best,
            wave: state.wave,
        }
    }
}

/// Something that can display HUD values
pub trait Hud {
    fn show(&mut self, values: &HudValues);
}

impl<H: Hud + ?Sized> Hud for Box<H> {
    fn show(&mut self, values: &HudValues) {
        (**self).show(values)
    }
}

/// Displays nothing
#[derive(Debug, Clone, Copy, Default)]
pub struct NullHud;

impl Hud for NullHud {
    fn show(&mut self, _values: &HudValues) {}
}

/// Logs HUD values when they change (headless runs)
#[derive(Debug, Clone, Default)]
pub struct LogHud {
    last: Option<HudValues>,
}

impl LogHud {
    pub fn new() -> Self {
        Self::default()
    }

    /// Most recently displayed values
    pub fn current(&self) -> Option<HudValues> {
        self.last
    }
}

impl Hud for LogHud {
    fn show(&mut self, values: &HudValues) {
        if self.last.as_ref() != Some(values) {
            log::debug!(
                "HUD score={} health={} best={} wave={}",
                values.score,
                values.health,
                values.best,
                values.wave
            );
            self.last = Some(*values);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::Playfield;

    #[test]
    fn test_health_rounds_down_and_never_negative() {
        let mut state = GameState::new(1, Playfield::default());
        state.player.health = 57.9;
        assert_eq!(HudValues::from_state(&state).health, 57);
        state.player.health = -4.0;
        assert_eq!(HudValues::from_state(&state).health, 0);
    }

    #[test]
    fn test_log_hud_idempotent() {
        let state = GameState::new(1, Playfield::default());
        let values = HudValues::from_state(&state);
        let mut hud = LogHud::new();
        hud.show(&values);
        let first = hud.current();
        hud.show(&HudValues::from_state(&state));
        assert_eq!(first, hud.current());
        assert_eq!(hud.current(), Some(values));
    }
}
