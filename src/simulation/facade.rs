use wasm_bindgen::prelude::*;

use crate::rigid_body::RigidBody;

use super::perf_stats::PerfStats;
use super::settings::WorldConfig;
use super::WorldCore;

/// JS-facing wrapper around `WorldCore`.
///
/// Pure delegation with scalar-friendly signatures; all simulation logic
/// lives in the core so native tests never touch wasm-bindgen.
#[wasm_bindgen]
pub struct World {
    core: WorldCore,
}

#[wasm_bindgen]
impl World {
    /// Create a world with default settings (gravity (0, -9.81), 60 Hz tick)
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self { core: WorldCore::new() }
    }

    /// Create a world from a JSON config blob
    #[wasm_bindgen(js_name = withConfig)]
    pub fn with_config(json: String) -> Result<World, JsValue> {
        let config: WorldConfig =
            serde_json::from_str(&json).map_err(|e| JsValue::from_str(&e.to_string()))?;
        Ok(Self { core: WorldCore::with_config(&config) })
    }

    /// Spawn a dynamic body centered at (x, y) with a w x h bounding box.
    /// Returns the body ID.
    pub fn spawn_body(&mut self, x: f32, y: f32, w: f32, h: f32, mass: f32, bounciness: f32) -> u32 {
        let mut body = RigidBody::new(x, y, w, h, mass);
        body.set_bounciness(bounciness);
        self.core.add_body(body)
    }

    /// Spawn a static (infinite-mass) body centered at (x, y).
    /// Returns the body ID.
    pub fn spawn_static_body(&mut self, x: f32, y: f32, w: f32, h: f32) -> u32 {
        self.core.add_body(RigidBody::new(x, y, w, h, 0.0))
    }

    /// Step the simulation forward by one fixed tick
    pub fn step(&mut self) {
        self.core.step();
    }

    /// Is the body resting on another body beneath it?
    pub fn is_grounded(&self, id: u32) -> bool {
        self.core.is_grounded(id)
    }

    #[wasm_bindgen(getter)]
    pub fn body_count(&self) -> usize {
        self.core.body_count()
    }

    #[wasm_bindgen(getter)]
    pub fn collision_count(&self) -> usize {
        self.core.collision_count()
    }

    #[wasm_bindgen(getter)]
    pub fn frame(&self) -> u64 {
        self.core.frame()
    }

    pub fn set_gravity(&mut self, x: f32, y: f32) {
        self.core.set_gravity(x, y);
    }

    pub fn set_fixed_timestep(&mut self, dt: f32) {
        self.core.set_fixed_timestep(dt);
    }

    pub fn set_grounded_tolerance(&mut self, tolerance: f32) {
        self.core.set_grounded_tolerance(tolerance);
    }

    pub fn load_config(&mut self, json: String) -> Result<(), JsValue> {
        self.core
            .load_config_json(&json)
            .map_err(|e| JsValue::from_str(&e))?;
        Ok(())
    }

    pub fn get_config_json(&self) -> String {
        self.core.config_json()
    }

    // === BODY ACCESS API ===

    pub fn body_x(&self, id: u32) -> Option<f32> {
        self.core.body_position(id).map(|(x, _)| x)
    }

    pub fn body_y(&self, id: u32) -> Option<f32> {
        self.core.body_position(id).map(|(_, y)| y)
    }

    pub fn body_vx(&self, id: u32) -> Option<f32> {
        self.core.body_velocity(id).map(|(vx, _)| vx)
    }

    pub fn body_vy(&self, id: u32) -> Option<f32> {
        self.core.body_velocity(id).map(|(_, vy)| vy)
    }

    /// Overwrite a body's velocity. Returns false for unknown ids.
    pub fn set_body_velocity(&mut self, id: u32, vx: f32, vy: f32) -> bool {
        self.core.set_body_velocity(id, vx, vy)
    }

    /// Accumulate an external force consumed by the next step.
    /// Returns false for unknown ids.
    pub fn apply_force(&mut self, id: u32, fx: f32, fy: f32) -> bool {
        self.core.apply_force(id, fx, fy)
    }

    // === PERF API ===

    /// Enable or disable per-step perf metrics (adds timing overhead when enabled)
    pub fn enable_perf_metrics(&mut self, enabled: bool) {
        self.core.enable_perf_metrics(enabled);
    }

    /// Get last step perf snapshot (zeros when perf disabled)
    pub fn get_perf_stats(&self) -> PerfStats {
        self.core.get_perf_stats()
    }
}

impl Default for World {
    fn default() -> Self {
        Self::new()
    }
}
