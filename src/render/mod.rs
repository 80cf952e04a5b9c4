//! 2D rendering
//!
//! `scene` builds a draw list from game state; `canvas` replays it onto an
//! HTML canvas 2D context (web only).

pub mod scene;

#[cfg(target_arch = "wasm32")]
pub mod canvas;

pub use scene::{Color, DrawCmd, TextAlign, build_scene, palette};

#[cfg(target_arch = "wasm32")]
pub use canvas::CanvasRenderer;
