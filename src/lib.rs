//! Impulse Engine - 2D rigid body physics in WASM
//!
//! One fixed tick = detect -> resolve -> integrate:
//! - SAT collision detection on AABBs feeds a persistent pair registry
//! - impulse-based velocity resolution with restitution + positional correction
//! - semi-implicit Euler integration of every registered body
//!
//! Architecture (SOLID):
//! - systems/      - Physics systems (rigid bodies, collision)
//! - simulation/   - Orchestration and the public World API

pub mod simulation;
pub mod systems;

pub mod world {
    pub use crate::simulation::*;
}

// Compatibility re-exports (keeps internal/external paths short)
pub use systems::collision;
pub use systems::rigid_body;

use wasm_bindgen::prelude::*;

#[cfg(feature = "wee_alloc")]
#[global_allocator]
static ALLOC: wee_alloc::WeeAlloc = wee_alloc::WeeAlloc::INIT;

// Better error messages in debug mode
#[cfg(feature = "console_error_panic_hook")]
pub fn set_panic_hook() {
    console_error_panic_hook::set_once();
}

/// Initialize the engine
#[wasm_bindgen]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    set_panic_hook();

    web_sys::console::log_1(&"🦀 Impulse WASM Engine initialized!".into());
}

/// Get engine version
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

// Re-export main types
pub use simulation::{PerfStats, World, WorldConfig};
pub use systems::collision::{CollisionInfo, CollisionPair, CollisionRegistry};
pub use systems::rigid_body::{Aabb, RigidBody, Vec2};
