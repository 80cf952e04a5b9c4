//! Browser host
//!
//! Wires the game to the page: canvas rendering, DOM HUD, LocalStorage for the
//! best score, keyboard/mouse events and the `requestAnimationFrame` loop.

use std::cell::RefCell;
use std::rc::Rc;

use glam::Vec2;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, HtmlCanvasElement, KeyboardEvent, MouseEvent, Window};

use super::clock::FrameClock;
use crate::game::Game;
use crate::input::{InputEvent, InputState, display_to_field};
use crate::persistence::Storage;
use crate::render::{CanvasRenderer, build_scene};
use crate::settings::Settings;
use crate::sim::{Playfield, autopilot};
use crate::ui::{Hud, HudValues};

/// Element IDs the page is expected to provide
const CANVAS_ID: &str = "gameCanvas";
const RESTART_BUTTON_ID: &str = "btnRestart";

/// Best score storage backed by `window.localStorage`
pub struct LocalStorage {
    storage: Option<web_sys::Storage>,
}

impl LocalStorage {
    pub fn new(window: &Window) -> Self {
        let storage = window.local_storage().ok().flatten();
        if storage.is_none() {
            log::warn!("LocalStorage unavailable - best score will not persist");
        }
        Self { storage }
    }
}

impl Storage for LocalStorage {
    fn get(&self, key: &str) -> Option<f64> {
        let raw = self.storage.as_ref()?.get_item(key).ok()??;
        raw.trim().parse().ok()
    }

    fn set(&mut self, key: &str, value: f64) {
        if let Some(storage) = &self.storage {
            if storage.set_item(key, &value.to_string()).is_err() {
                log::warn!("Failed to store {}", key);
            }
        }
    }
}

/// HUD written into DOM elements; absent elements are skipped
pub struct DomHud {
    score: Option<Element>,
    health: Option<Element>,
    best: Option<Element>,
    wave: Option<Element>,
}

impl DomHud {
    pub fn new(document: &Document) -> Self {
        Self {
            score: document.get_element_by_id("score"),
            health: document.get_element_by_id("hp"),
            best: document.get_element_by_id("best"),
            wave: document.get_element_by_id("wave"),
        }
    }
}

impl Hud for DomHud {
    fn show(&mut self, values: &HudValues) {
        let set = |el: &Option<Element>, text: String| {
            if let Some(el) = el {
                el.set_text_content(Some(&text));
            }
        };
        set(&self.score, values.score.to_string());
        set(&self.health, values.health.to_string());
        set(&self.best, values.best.to_string());
        set(&self.wave, values.wave.to_string());
    }
}

/// Everything the page callbacks share
struct App {
    game: Game<LocalStorage, DomHud>,
    input: InputState,
    renderer: CanvasRenderer,
    clock: FrameClock,
    settings: Settings,
    canvas: HtmlCanvasElement,
    autopilot: bool,
}

impl App {
    fn frame(&mut self, time: f64) {
        let dt = self.clock.tick(time);
        if self.autopilot {
            autopilot::drive(self.game.state(), &mut self.input);
        }
        self.game.update(&self.input, dt);

        let cmds = build_scene(self.game.state(), self.input.pointer, &self.settings);
        self.renderer.draw(&cmds);
    }

    fn restart(&mut self) {
        self.game.reset();
        log::info!("Restarted");
    }

    fn toggle_autopilot(&mut self) {
        self.autopilot = !self.autopilot;
        self.input.release_all();
        log::info!("Autopilot: {}", self.autopilot);
    }

    /// Pointer position from a mouse event, in simulation space
    fn pointer_from(&self, event: &MouseEvent) -> Vec2 {
        let rect = self.canvas.get_bounding_client_rect();
        let local = Vec2::new(
            (event.client_x() as f64 - rect.left()) as f32,
            (event.client_y() as f64 - rect.top()) as f32,
        );
        let display = Vec2::new(rect.width() as f32, rect.height() as f32);
        display_to_field(local, display, self.game.state().field.size())
    }
}

/// Start the game on the current page
pub fn run() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    if let Err(e) = console_log::init_with_level(log::Level::Info) {
        web_sys::console::warn_1(&format!("Logger init failed: {e}").into());
    }

    log::info!("Hack & Slash starting...");

    let window = web_sys::window().ok_or("no window")?;
    let document = window.document().ok_or("no document")?;

    let Some(canvas) = document.get_element_by_id(CANVAS_ID) else {
        log::error!(
            "Canvas not found. Check that index.html has <canvas id=\"{}\">",
            CANVAS_ID
        );
        return Err(JsValue::from_str("canvas not found"));
    };
    let canvas: HtmlCanvasElement = canvas.dyn_into()?;

    let settings = Settings::load();
    let field = Playfield::new(canvas.width() as f32, canvas.height() as f32);
    let renderer = CanvasRenderer::new(&canvas)?;
    let seed = settings.seed.unwrap_or_else(|| js_sys::Date::now() as u64);

    let game = Game::new(
        seed,
        field,
        LocalStorage::new(&window),
        DomHud::new(&document),
        &settings.best_score_key,
    );

    let app = Rc::new(RefCell::new(App {
        game,
        input: InputState::new(field.center()),
        renderer,
        clock: FrameClock::new(),
        settings,
        canvas: canvas.clone(),
        autopilot: false,
    }));

    setup_input_handlers(&window, &canvas, app.clone());
    setup_restart_button(&document, app.clone());

    request_animation_frame(app);

    log::info!("Hack & Slash running!");
    Ok(())
}

fn setup_input_handlers(window: &Window, canvas: &HtmlCanvasElement, app: Rc<RefCell<App>>) {
    // Key down
    {
        let app = app.clone();
        let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
            let mut a = app.borrow_mut();
            let key = event.key();
            if a.settings.is_autopilot_key(&key) {
                a.toggle_autopilot();
                return;
            }
            let restart = a.settings.is_restart_key(&key);
            a.input.apply(&InputEvent::KeyDown(key));
            if restart {
                a.restart();
            }
        });
        let _ = window.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    // Key up
    {
        let app = app.clone();
        let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
            app.borrow_mut().input.apply(&InputEvent::KeyUp(event.key()));
        });
        let _ = window.add_event_listener_with_callback("keyup", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    // Mouse move - remap from display to canvas resolution
    {
        let app = app.clone();
        let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
            let mut a = app.borrow_mut();
            let p = a.pointer_from(&event);
            a.input.apply(&InputEvent::PointerMove { x: p.x, y: p.y });
        });
        let _ = canvas.add_event_listener_with_callback("mousemove", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    // Mouse down / up
    {
        let app = app.clone();
        let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
            app.borrow_mut().input.apply(&InputEvent::PointerDown);
        });
        let _ = canvas.add_event_listener_with_callback("mousedown", closure.as_ref().unchecked_ref());
        closure.forget();
    }
    {
        let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
            app.borrow_mut().input.apply(&InputEvent::PointerUp);
        });
        let _ = canvas.add_event_listener_with_callback("mouseup", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}

fn setup_restart_button(document: &Document, app: Rc<RefCell<App>>) {
    let Some(btn) = document.get_element_by_id(RESTART_BUTTON_ID) else {
        log::warn!("No #{} element - restart with the keyboard only", RESTART_BUTTON_ID);
        return;
    };
    let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
        app.borrow_mut().restart();
    });
    let _ = btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
    closure.forget();
}

fn request_animation_frame(app: Rc<RefCell<App>>) {
    let Some(window) = web_sys::window() else {
        log::error!("Window gone - stopping game loop");
        return;
    };
    let closure = Closure::once(move |time: f64| {
        game_loop(app, time);
    });
    let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
    closure.forget();
}

fn game_loop(app: Rc<RefCell<App>>, time: f64) {
    app.borrow_mut().frame(time);
    request_animation_frame(app);
}
