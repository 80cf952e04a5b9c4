//! Scene building: turns game state into a flat list of 2D draw commands
//!
//! Pure and platform-free so it can be tested natively; the canvas backend
//! just replays the commands.

use glam::Vec2;

use crate::angle_to;
use crate::consts::{SWING_ARC, SWING_COOLDOWN, SWING_RANGE};
use crate::settings::Settings;
use crate::sim::{Enemy, EnemyKind, GameState, Player};

/// Grid spacing (simulation units)
const GRID_SPACING: f32 = 40.0;
/// The swing sector stays visible for this long after a swing starts
const SWING_FLASH: f32 = 0.1;
/// Distance of the aim dot from the player's centre
const AIM_DOT_OFFSET: f32 = 6.0;

/// sRGB colour with straight alpha
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f32,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: f32) -> Self {
        Self { r, g, b, a }
    }

    pub const fn with_alpha(self, a: f32) -> Self {
        Self { a, ..self }
    }

    /// CSS colour string
    pub fn to_css(&self) -> String {
        format!("rgba({},{},{},{})", self.r, self.g, self.b, self.a)
    }
}

/// Palette
pub mod palette {
    use super::Color;

    pub const GRID: Color = Color::rgba(255, 255, 255, 0.06);
    pub const SHADOW: Color = Color::rgba(0, 0, 0, 0.25);
    pub const PLAYER: Color = Color::rgb(0xa6, 0xe3, 0xa1);
    pub const PLAYER_AIM: Color = Color::rgb(0x00, 0x55, 0x22);
    pub const GRUNT: Color = Color::rgb(0xff, 0x8b, 0x8b);
    pub const BRUTE: Color = Color::rgb(0xff, 0xb8, 0x6b);
    pub const EYES: Color = Color::rgb(0x22, 0x00, 0x11);
    pub const SWING: Color = Color::rgba(0xff, 0xd1, 0x9a, 0.25);
    pub const OVERLAY: Color = Color::rgba(0, 0, 0, 0.6);
    pub const TEXT: Color = Color::rgb(255, 255, 255);
}

/// Horizontal text anchor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextAlign {
    Left,
    Center,
}

/// A single 2D drawing operation
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCmd {
    /// Clear the whole surface
    Clear,
    Line { from: Vec2, to: Vec2, width: f32, color: Color },
    Circle { center: Vec2, radius: f32, color: Color },
    Ellipse { center: Vec2, radii: Vec2, color: Color },
    /// Filled pie slice from `start` to `end` (radians)
    Sector { center: Vec2, radius: f32, start: f32, end: f32, color: Color },
    Rect { min: Vec2, size: Vec2, color: Color },
    Text { pos: Vec2, text: String, size_px: f32, align: TextAlign, color: Color },
}

/// Build the draw list for one frame
pub fn build_scene(state: &GameState, pointer: Vec2, settings: &Settings) -> Vec<DrawCmd> {
    let mut cmds = Vec::with_capacity(64 + state.enemies.len() * 3);
    let size = state.field.size();

    cmds.push(DrawCmd::Clear);
    if settings.show_grid {
        grid(&mut cmds, size);
    }

    for enemy in &state.enemies {
        enemy_shapes(&mut cmds, enemy);
    }

    let aim = angle_to(state.player.pos, pointer);
    player_shapes(&mut cmds, &state.player, aim);

    if settings.show_swing_arc && swing_visible(&state.player) {
        cmds.push(DrawCmd::Sector {
            center: state.player.pos,
            radius: SWING_RANGE,
            start: aim - SWING_ARC / 2.0,
            end: aim + SWING_ARC / 2.0,
            color: palette::SWING,
        });
    }

    if state.is_game_over() {
        game_over_overlay(&mut cmds, size, &settings.restart_key);
    }

    cmds
}

/// Whether the swing sector should be drawn this frame
pub fn swing_visible(player: &Player) -> bool {
    player.cooldown > SWING_COOLDOWN - SWING_FLASH
}

fn grid(cmds: &mut Vec<DrawCmd>, size: Vec2) {
    let line = |from, to| DrawCmd::Line {
        from,
        to,
        width: 1.0,
        color: palette::GRID,
    };
    let mut x = 0.0;
    while x < size.x {
        cmds.push(line(Vec2::new(x, 0.0), Vec2::new(x, size.y)));
        x += GRID_SPACING;
    }
    let mut y = 0.0;
    while y < size.y {
        cmds.push(line(Vec2::new(0.0, y), Vec2::new(size.x, y)));
        y += GRID_SPACING;
    }
}

fn enemy_shapes(cmds: &mut Vec<DrawCmd>, enemy: &Enemy) {
    let r = enemy.radius();
    let color = match enemy.kind {
        EnemyKind::Grunt => palette::GRUNT,
        EnemyKind::Brute => palette::BRUTE,
    };
    cmds.push(DrawCmd::Circle {
        center: enemy.pos,
        radius: r,
        color,
    });
    for eye in [Vec2::new(-r / 3.0, -3.0), Vec2::new(r / 4.0, -3.0)] {
        cmds.push(DrawCmd::Circle {
            center: enemy.pos + eye,
            radius: 3.0,
            color: palette::EYES,
        });
    }
}

fn player_shapes(cmds: &mut Vec<DrawCmd>, player: &Player, aim: f32) {
    cmds.push(DrawCmd::Ellipse {
        center: player.pos + Vec2::new(0.0, 15.0),
        radii: Vec2::new(20.0, 8.0),
        color: palette::SHADOW,
    });
    cmds.push(DrawCmd::Circle {
        center: player.pos,
        radius: player.radius,
        color: palette::PLAYER,
    });
    cmds.push(DrawCmd::Circle {
        center: player.pos + Vec2::new(aim.cos(), aim.sin()) * AIM_DOT_OFFSET,
        radius: 4.0,
        color: palette::PLAYER_AIM,
    });
}

fn game_over_overlay(cmds: &mut Vec<DrawCmd>, size: Vec2, restart_key: &str) {
    let center = size / 2.0;
    cmds.push(DrawCmd::Rect {
        min: Vec2::ZERO,
        size,
        color: palette::OVERLAY,
    });
    cmds.push(DrawCmd::Text {
        pos: center + Vec2::new(0.0, -10.0),
        text: "GAME OVER".to_string(),
        size_px: 36.0,
        align: TextAlign::Center,
        color: palette::TEXT,
    });
    cmds.push(DrawCmd::Text {
        pos: center + Vec2::new(0.0, 26.0),
        text: format!("Press {} or Restart", restart_key.to_uppercase()),
        size_px: 16.0,
        align: TextAlign::Center,
        color: palette::TEXT,
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::{GamePhase, Playfield};

    fn state() -> GameState {
        GameState::new(1, Playfield::new(800.0, 600.0))
    }

    fn count(cmds: &[DrawCmd], pred: impl Fn(&DrawCmd) -> bool) -> usize {
        cmds.iter().filter(|c| pred(*c)).count()
    }

    #[test]
    fn test_grid_lines() {
        let cmds = build_scene(&state(), Vec2::ZERO, &Settings::default());
        assert_eq!(cmds[0], DrawCmd::Clear);
        assert_eq!(count(&cmds, |c| matches!(c, DrawCmd::Line { .. })), 20 + 15);

        let settings = Settings {
            show_grid: false,
            ..Settings::default()
        };
        let cmds = build_scene(&state(), Vec2::ZERO, &settings);
        assert_eq!(count(&cmds, |c| matches!(c, DrawCmd::Line { .. })), 0);
    }

    #[test]
    fn test_enemies_drawn_under_player() {
        let mut state = state();
        state.add_enemy(EnemyKind::Brute, Vec2::new(100.0, 100.0));
        let cmds = build_scene(&state, Vec2::ZERO, &Settings::default());

        let brute = cmds
            .iter()
            .position(|c| matches!(c, DrawCmd::Circle { color, .. } if *color == palette::BRUTE))
            .unwrap();
        let player = cmds
            .iter()
            .position(|c| matches!(c, DrawCmd::Circle { color, .. } if *color == palette::PLAYER))
            .unwrap();
        assert!(brute < player);
    }

    #[test]
    fn test_aim_dot_points_at_pointer() {
        let state = state();
        let pointer = state.player.pos + Vec2::new(0.0, 100.0);
        let cmds = build_scene(&state, pointer, &Settings::default());
        let dot = cmds
            .iter()
            .find_map(|c| match c {
                DrawCmd::Circle { center, color, .. } if *color == palette::PLAYER_AIM => {
                    Some(*center)
                }
                _ => None,
            })
            .unwrap();
        assert!((dot - (state.player.pos + Vec2::new(0.0, 6.0))).length() < 1e-4);
    }

    #[test]
    fn test_swing_sector_only_right_after_swing() {
        let mut state = state();
        let is_sector = |c: &DrawCmd| matches!(c, DrawCmd::Sector { .. });

        let cmds = build_scene(&state, Vec2::ZERO, &Settings::default());
        assert_eq!(count(&cmds, is_sector), 0);

        assert!(state.player.attempt_swing());
        let cmds = build_scene(&state, Vec2::ZERO, &Settings::default());
        assert_eq!(count(&cmds, is_sector), 1);

        state.player.cooldown = 0.2;
        let cmds = build_scene(&state, Vec2::ZERO, &Settings::default());
        assert_eq!(count(&cmds, is_sector), 0);
    }

    #[test]
    fn test_game_over_overlay() {
        let mut state = state();
        state.phase = GamePhase::GameOver;
        let cmds = build_scene(&state, Vec2::ZERO, &Settings::default());
        assert!(
            cmds.iter()
                .any(|c| matches!(c, DrawCmd::Text { text, .. } if text == "GAME OVER"))
        );
        assert!(matches!(cmds.last(), Some(DrawCmd::Text { text, .. }) if text.contains('R')));
    }

    #[test]
    fn test_color_css() {
        assert_eq!(palette::SWING.to_css(), "rgba(255,209,154,0.25)");
        assert_eq!(Color::rgb(1, 2, 3).with_alpha(0.5).to_css(), "rgba(1,2,3,0.5)");
    }
}
