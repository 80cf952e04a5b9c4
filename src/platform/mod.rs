//! Platform abstraction layer
//!
//! - Frame timing (`clock`)
//! - Browser host: canvas, DOM HUD, LocalStorage and input events (`web`)

pub mod clock;

#[cfg(target_arch = "wasm32")]
pub mod web;

pub use clock::FrameClock;
