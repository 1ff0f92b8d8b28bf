use wasm_bindgen::prelude::*;

/// Snapshot of the last step's timings and counters.
///
/// All zeros while perf metrics are disabled.
#[wasm_bindgen]
#[derive(Clone, Default)]
pub struct PerfStats {
    pub(super) step_ms: f64,
    pub(super) detect_ms: f64,
    pub(super) resolve_ms: f64,
    pub(super) integrate_ms: f64,
    pub(super) body_count: u32,
    pub(super) pairs_tested: u32,
    pub(super) active_collisions: u32,
    pub(super) impulses_applied: u32,
    pub(super) corrections_applied: u32,
}

impl PerfStats {
    pub(crate) fn reset(&mut self) {
        *self = PerfStats::default();
    }
}

#[wasm_bindgen]
impl PerfStats {
    #[wasm_bindgen(getter)]
    pub fn step_ms(&self) -> f64 { self.step_ms }
    #[wasm_bindgen(getter)]
    pub fn detect_ms(&self) -> f64 { self.detect_ms }
    #[wasm_bindgen(getter)]
    pub fn resolve_ms(&self) -> f64 { self.resolve_ms }
    #[wasm_bindgen(getter)]
    pub fn integrate_ms(&self) -> f64 { self.integrate_ms }
    #[wasm_bindgen(getter)]
    pub fn body_count(&self) -> u32 { self.body_count }
    #[wasm_bindgen(getter)]
    pub fn pairs_tested(&self) -> u32 { self.pairs_tested }
    #[wasm_bindgen(getter)]
    pub fn active_collisions(&self) -> u32 { self.active_collisions }
    #[wasm_bindgen(getter)]
    pub fn impulses_applied(&self) -> u32 { self.impulses_applied }
    #[wasm_bindgen(getter)]
    pub fn corrections_applied(&self) -> u32 { self.corrections_applied }
}
