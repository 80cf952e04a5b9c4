//! Hack & Slash entry point
//!
//! On the web the game runs in the page's canvas. Natively there is no window:
//! the binary plays a headless demo with the autopilot and records the best
//! score to disk.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() -> Result<(), JsValue> {
    hack_slash::platform::web::run()
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

/// Fixed step for the headless demo (60 Hz)
#[cfg(not(target_arch = "wasm32"))]
const DEMO_DT: f32 = 1.0 / 60.0;

/// Where the native build keeps the best score
#[cfg(not(target_arch = "wasm32"))]
const SCORES_FILE: &str = "hack_slash_scores.json";

#[cfg(not(target_arch = "wasm32"))]
fn main() -> anyhow::Result<()> {
    use anyhow::Context;
    use hack_slash::persistence::FileStorage;
    use hack_slash::sim::{Playfield, autopilot};
    use hack_slash::ui::LogHud;
    use hack_slash::{Game, InputState, Settings};

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    log::info!("Hack & Slash (native) starting...");
    log::info!("Native mode plays a headless autopilot demo - run with `trunk serve` for the web version");

    let settings = Settings::load();
    let seed = settings.seed.unwrap_or_else(clock_seed);
    let field = Playfield::default();
    let storage = FileStorage::open(SCORES_FILE)
        .with_context(|| format!("opening score file {SCORES_FILE}"))?;

    let mut game = Game::new(seed, field, storage, LogHud::new(), &settings.best_score_key);
    let mut input = InputState::new(field.center());

    let steps = (settings.demo_seconds.max(0.0) / DEMO_DT).ceil() as u32;
    for _ in 0..steps {
        autopilot::drive(game.state(), &mut input);
        game.update(&input, DEMO_DT);
        if game.is_game_over() {
            break;
        }
    }

    let state = game.state();
    log::info!(
        "Demo finished after {:.1}s: score {} wave {} health {} best {}",
        state.elapsed,
        state.score,
        state.wave,
        state.player.health.floor(),
        state.best
    );
    println!(
        "score={} wave={} best={} ({})",
        state.score,
        state.wave,
        state.best,
        if game.is_game_over() { "game over" } else { "survived" }
    );
    Ok(())
}

#[cfg(not(target_arch = "wasm32"))]
fn clock_seed() -> u64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}
