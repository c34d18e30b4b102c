//! WebGPU browser host for the Pong core
//!
//! Provides the primitives `game_core` polls every frame: held keys from
//! document keyboard events, frame deltas from `performance.now()`, and a
//! wgpu renderer that draws every requested rectangle in one instanced
//! pass. `requestAnimationFrame` is the scheduler; the loop lives as long
//! as the page keeps calling back.

#![cfg(target_arch = "wasm32")]

mod camera;
mod clock;
mod input;
mod mesh;
mod renderer;

use std::cell::RefCell;
use std::rc::Rc;

use clock::FrameClock;
use game_core::{Canvas, Clock, Config, FrameDriver, Keyboard};
use input::BrowserInput;
use log::{error, info, warn};
use renderer::Renderer;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::HtmlCanvasElement;

/// LocalStorage key holding an optional JSON config override
const CONFIG_STORAGE_KEY: &str = "pong_config";

/// The host side of a frame
struct BrowserHost {
    input: BrowserInput,
    clock: FrameClock,
    renderer: Renderer,
}

impl Clock for BrowserHost {
    fn get_delta(&mut self) -> f32 {
        self.clock.get_delta()
    }
}

impl Keyboard for BrowserHost {
    fn key_down(&self, name: &str) -> bool {
        self.input.key_down(name)
    }
}

impl Canvas for BrowserHost {
    fn clear(&mut self) {
        self.renderer.clear();
    }

    fn draw_rectangle(&mut self, x: f32, y: f32, w: f32, h: f32) {
        self.renderer.draw_rectangle(x, y, w, h);
    }
}

struct App {
    driver: FrameDriver,
    host: BrowserHost,
}

/// Start the game on `canvas`. Resolves once the first frame is scheduled.
#[wasm_bindgen]
pub fn start(canvas: HtmlCanvasElement) -> js_sys::Promise {
    wasm_bindgen_futures::future_to_promise(async move {
        console_error_panic_hook::set_once();
        // Fails only if a logger is already installed
        let _ = console_log::init_with_level(log::Level::Info);

        info!("Pong starting...");

        let driver = FrameDriver::new(load_config())
            .map_err(|e| JsValue::from_str(&e.to_string()))?;
        let renderer = Renderer::new(canvas, driver.config())
            .await
            .map_err(|e| JsValue::from_str(&format!("Failed to initialize renderer: {}", e)))?;

        let document = web_sys::window()
            .and_then(|w| w.document())
            .ok_or_else(|| JsValue::from_str("No document"))?;
        let input = BrowserInput::attach(&document)?;
        let clock = FrameClock::new()?;

        let app = Rc::new(RefCell::new(App {
            driver,
            host: BrowserHost {
                input,
                clock,
                renderer,
            },
        }));
        request_frame(app);

        Ok(JsValue::UNDEFINED)
    })
}

/// Default config, overridden by LocalStorage when a valid one is stored
fn load_config() -> Config {
    let stored = web_sys::window()
        .and_then(|w| w.local_storage().ok().flatten())
        .and_then(|storage| storage.get_item(CONFIG_STORAGE_KEY).ok().flatten());

    let Some(json) = stored else {
        return Config::default();
    };

    match Config::from_json(&json) {
        Ok(config) => {
            info!("Loaded config override from LocalStorage");
            config
        }
        Err(e) => {
            warn!("{}. Using defaults.", e);
            Config::default()
        }
    }
}

fn request_frame(app: Rc<RefCell<App>>) {
    let Some(window) = web_sys::window() else {
        error!("No window; game loop stopped");
        return;
    };
    let closure = Closure::once(move |_time: f64| {
        run_frame(app);
    });
    if let Err(e) = window.request_animation_frame(closure.as_ref().unchecked_ref()) {
        error!("requestAnimationFrame failed: {:?}", e);
    }
    closure.forget();
}

fn run_frame(app: Rc<RefCell<App>>) {
    {
        let mut app = app.borrow_mut();
        let App { driver, host } = &mut *app;

        driver.tick(host);
        if let Err(e) = host.renderer.present() {
            warn!("Render error: {}", e);
        }
    }

    request_frame(app);
}
