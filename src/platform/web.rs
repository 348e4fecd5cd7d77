//! Browser host bindings
//!
//! The page owns the canvas, keyboard listeners and the animation-frame loop.
//! Each frame it calls `tick` with the current key state and draws from
//! `snapshot_json`.

use wasm_bindgen::prelude::*;

use crate::Settings;
use crate::sim::{InputState, SimulationState, tick};

#[wasm_bindgen(start)]
pub fn wasm_main() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Info).is_err() {
        // Logger already installed by an earlier module instance
        return;
    }
    log::info!("Sprawl Drive module loaded");
}

/// A simulation session driven from JavaScript
#[wasm_bindgen]
pub struct WebSession {
    state: SimulationState,
}

#[wasm_bindgen]
impl WebSession {
    /// Build an idle session. An empty string means default settings.
    #[wasm_bindgen(constructor)]
    pub fn new(settings_json: &str) -> Result<WebSession, JsValue> {
        let settings = if settings_json.trim().is_empty() {
            Settings::default()
        } else {
            Settings::from_json(settings_json).map_err(|e| JsValue::from_str(&e.to_string()))?
        };
        Ok(Self {
            state: SimulationState::new(settings),
        })
    }

    /// Populate the world and start running
    pub fn start_session(&mut self, npc_count: u32) {
        self.state.start_session(npc_count);
    }

    #[wasm_bindgen(getter)]
    pub fn running(&self) -> bool {
        self.state.is_running()
    }

    /// Advance one tick with the current key state
    pub fn tick(
        &mut self,
        up: bool,
        down: bool,
        left: bool,
        right: bool,
        interact: bool,
        restart: bool,
    ) {
        let input = InputState {
            up,
            down,
            left,
            right,
            interact,
            restart,
        };
        tick(&mut self.state, &input);
    }

    /// Current world state as JSON
    pub fn snapshot_json(&self) -> Result<String, JsValue> {
        serde_json::to_string(&self.state.snapshot()).map_err(|e| JsValue::from_str(&e.to_string()))
    }
}
