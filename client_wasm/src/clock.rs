//! Frame timing from `performance.now()`

use game_core::Clock;
use wasm_bindgen::JsValue;
use web_sys::Performance;

pub struct FrameClock {
    performance: Performance,
    last_ms: Option<f64>,
}

impl FrameClock {
    pub fn new() -> Result<Self, JsValue> {
        let performance = web_sys::window()
            .and_then(|w| w.performance())
            .ok_or_else(|| JsValue::from_str("Performance API unavailable"))?;

        Ok(Self {
            performance,
            last_ms: None,
        })
    }
}

impl Clock for FrameClock {
    /// Zero on the first frame, never negative afterwards
    fn get_delta(&mut self) -> f32 {
        let now = self.performance.now();
        let dt = self
            .last_ms
            .map_or(0.0, |last| ((now - last) / 1000.0).max(0.0));
        self.last_ms = Some(now);
        dt as f32
    }
}
