//! Wave and spawn scheduling

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::enemy::EnemyKind;
use super::state::Playfield;
use crate::consts::*;
use crate::random_in_range;

/// Which playfield edge an enemy enters from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Edge {
    Top,
    Right,
    Bottom,
    Left,
}

impl Edge {
    const ALL: [Edge; 4] = [Edge::Top, Edge::Right, Edge::Bottom, Edge::Left];
}

/// What the scheduler wants spawned this tick
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpawnRequest {
    pub kind: EnemyKind,
    pub pos: Vec2,
}

/// Staggers the enemies of the current wave
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SpawnScheduler {
    /// Enemies still to spawn this wave
    pub remaining: u32,
    /// Seconds until the next spawn
    pub timer: f32,
}

/// Number of enemies in a wave
pub fn wave_size(wave: u32) -> u32 {
    WAVE_BASE_SPAWNS + (wave as f32 * WAVE_SPAWNS_PER_WAVE).floor() as u32
}

impl SpawnScheduler {
    pub fn begin_wave(&mut self, wave: u32) {
        self.remaining = wave_size(wave);
        self.timer = WAVE_FIRST_SPAWN_DELAY;
    }

    /// All of this wave's enemies have been emitted
    pub fn exhausted(&self) -> bool {
        self.remaining == 0
    }

    /// Count down and emit at most one spawn
    pub fn try_spawn<R: Rng + ?Sized>(
        &mut self,
        dt: f32,
        rng: &mut R,
        field: &Playfield,
    ) -> Option<SpawnRequest> {
        if self.exhausted() {
            return None;
        }
        self.timer -= dt;
        if self.timer > 0.0 {
            return None;
        }

        let request = SpawnRequest {
            pos: spawn_position(rng, field),
            kind: pick_kind(rng),
        };
        self.remaining -= 1;
        self.timer = random_in_range(rng, SPAWN_INTERVAL_MIN, SPAWN_INTERVAL_MAX);
        Some(request)
    }
}

/// Random point just outside a random edge
pub fn spawn_position<R: Rng + ?Sized>(rng: &mut R, field: &Playfield) -> Vec2 {
    let edge = Edge::ALL[rng.random_range(0..Edge::ALL.len())];
    edge_position(rng, field, edge)
}

fn edge_position<R: Rng + ?Sized>(rng: &mut R, field: &Playfield, edge: Edge) -> Vec2 {
    let (w, h) = (field.width, field.height);
    let along_x = |rng: &mut R| random_in_range(rng, SPAWN_EDGE_MARGIN, w - SPAWN_EDGE_MARGIN);
    let along_y = |rng: &mut R| random_in_range(rng, SPAWN_EDGE_MARGIN, h - SPAWN_EDGE_MARGIN);
    match edge {
        Edge::Top => Vec2::new(along_x(rng), -SPAWN_OFFSCREEN),
        Edge::Right => Vec2::new(w + SPAWN_OFFSCREEN, along_y(rng)),
        Edge::Bottom => Vec2::new(along_x(rng), h + SPAWN_OFFSCREEN),
        Edge::Left => Vec2::new(-SPAWN_OFFSCREEN, along_y(rng)),
    }
}

/// Weighted pick: mostly grunts
pub fn pick_kind<R: Rng + ?Sized>(rng: &mut R) -> EnemyKind {
    if rng.random_bool(GRUNT_CHANCE) {
        EnemyKind::Grunt
    } else {
        EnemyKind::Brute
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    fn field() -> Playfield {
        Playfield::new(800.0, 600.0)
    }

    #[test]
    fn test_wave_size() {
        assert_eq!(wave_size(1), 4);
        assert_eq!(wave_size(2), 6);
        assert_eq!(wave_size(3), 7);
        assert_eq!(wave_size(10), 18);
    }

    #[test]
    fn test_first_spawn_after_delay() {
        let mut rng = Pcg32::seed_from_u64(3);
        let mut sched = SpawnScheduler::default();
        sched.begin_wave(1);

        assert!(sched.try_spawn(0.3, &mut rng, &field()).is_none());
        assert_eq!(sched.remaining, 4);

        let spawned = sched.try_spawn(0.2, &mut rng, &field());
        assert!(spawned.is_some());
        assert_eq!(sched.remaining, 3);
        assert!(sched.timer >= SPAWN_INTERVAL_MIN && sched.timer < SPAWN_INTERVAL_MAX);
    }

    #[test]
    fn test_at_most_one_spawn_per_tick() {
        let mut rng = Pcg32::seed_from_u64(3);
        let mut sched = SpawnScheduler::default();
        sched.begin_wave(5);
        // A huge step still only yields one enemy
        assert!(sched.try_spawn(100.0, &mut rng, &field()).is_some());
        assert_eq!(sched.remaining, wave_size(5) - 1);
    }

    #[test]
    fn test_exhausted_never_spawns() {
        let mut rng = Pcg32::seed_from_u64(3);
        let mut sched = SpawnScheduler::default();
        assert!(sched.exhausted());
        assert!(sched.try_spawn(1.0, &mut rng, &field()).is_none());
    }

    #[test]
    fn test_spawn_positions_are_offscreen() {
        let mut rng = Pcg32::seed_from_u64(11);
        let field = field();
        for _ in 0..500 {
            let p = spawn_position(&mut rng, &field);
            let off_x = p.x == -SPAWN_OFFSCREEN || p.x == field.width + SPAWN_OFFSCREEN;
            let off_y = p.y == -SPAWN_OFFSCREEN || p.y == field.height + SPAWN_OFFSCREEN;
            assert!(off_x ^ off_y, "exactly one axis off-screen: {p:?}");
            if off_x {
                assert!(p.y >= SPAWN_EDGE_MARGIN && p.y <= field.height - SPAWN_EDGE_MARGIN);
            } else {
                assert!(p.x >= SPAWN_EDGE_MARGIN && p.x <= field.width - SPAWN_EDGE_MARGIN);
            }
        }
    }

    #[test]
    fn test_kind_mix_mostly_grunts() {
        let mut rng = Pcg32::seed_from_u64(99);
        let grunts = (0..2000)
            .filter(|_| pick_kind(&mut rng) == EnemyKind::Grunt)
            .count();
        // 85% expected; generous bounds
        assert!((1550..1850).contains(&grunts), "grunts = {grunts}");
    }
}
