//! World - 2D impulse physics simulation
//!
//! Refactored for SOLID principles:
//! - Single Responsibility: World only orchestrates; detection, resolution,
//!   grounding and integration live in the systems modules
//! - Open/Closed: the detector can grow a broad-phase index without touching
//!   this file
//!
//! Collision detection and response are in systems/collision
//! Body state and integration are in systems/rigid_body

use crate::collision::CollisionRegistry;
use crate::rigid_body::{RigidBody, Vec2};

#[path = "perf/perf_timer.rs"]
mod perf_timer;
#[path = "perf/perf_stats.rs"]
mod perf_stats;
#[path = "step/step.rs"]
mod step;
#[path = "commands/commands.rs"]
mod commands;
#[path = "init/init.rs"]
mod init;
#[path = "init/settings.rs"]
mod settings;
mod facade;

pub use facade::World;
pub use perf_stats::PerfStats;
pub use settings::WorldConfig;

use perf_timer::PerfTimer;

/// The simulation world
pub struct WorldCore {
    bodies: Vec<RigidBody>,
    collisions: CollisionRegistry,
    next_body_id: u32,

    // Settings
    gravity: Vec2,
    fixed_dt: f32,
    grounded_tol: f32,

    // State
    frame: u64,

    // Perf metrics
    perf_enabled: bool,
    perf_stats: PerfStats,
}

impl WorldCore {
    /// Create a world with default settings
    pub fn new() -> Self {
        init::create_world_core()
    }

    /// Create a world from an explicit config
    pub fn with_config(config: &WorldConfig) -> Self {
        init::create_world_core_with_config(config)
    }

    /// Register a body for simulation; returns the assigned body id.
    ///
    /// No removal operation exists - see `commands::add_body`.
    pub fn add_body(&mut self, body: RigidBody) -> u32 {
        commands::add_body(self, body)
    }

    pub fn body_count(&self) -> usize {
        self.bodies.len()
    }

    /// Number of currently-overlapping pairs in the registry
    pub fn collision_count(&self) -> usize {
        self.collisions.len()
    }

    pub fn frame(&self) -> u64 {
        self.frame
    }

    /// Step the simulation forward by one fixed tick:
    /// detect -> resolve -> integrate
    pub fn step(&mut self) {
        step::step(self);
    }

    /// Is the body resting on another body beneath it?
    pub fn is_grounded(&self, id: u32) -> bool {
        commands::is_body_grounded(self, id)
    }

    pub fn body_position(&self, id: u32) -> Option<(f32, f32)> {
        commands::body_position(self, id)
    }

    pub fn body_velocity(&self, id: u32) -> Option<(f32, f32)> {
        commands::body_velocity(self, id)
    }

    /// Overwrite a body's velocity. Returns false for unknown ids.
    pub fn set_body_velocity(&mut self, id: u32, vx: f32, vy: f32) -> bool {
        commands::set_body_velocity(self, id, vx, vy)
    }

    /// Accumulate an external force on a body, consumed by the next step.
    /// Returns false for unknown ids.
    pub fn apply_force(&mut self, id: u32, fx: f32, fy: f32) -> bool {
        commands::apply_force(self, id, fx, fy)
    }

    pub fn set_gravity(&mut self, x: f32, y: f32) {
        settings::set_gravity(self, x, y);
    }

    /// Set the fixed timestep in seconds (non-positive values are ignored)
    pub fn set_fixed_timestep(&mut self, dt: f32) {
        settings::set_fixed_timestep(self, dt);
    }

    pub fn fixed_timestep(&self) -> f32 {
        settings::fixed_timestep(self)
    }

    pub fn set_grounded_tolerance(&mut self, tolerance: f32) {
        settings::set_grounded_tolerance(self, tolerance);
    }

    /// Load settings from a JSON config blob
    pub fn load_config_json(&mut self, json: &str) -> Result<(), String> {
        settings::load_config_json(self, json)
    }

    /// Current settings as a JSON blob
    pub fn config_json(&self) -> String {
        settings::config_json(self)
    }

    /// Enable or disable per-step perf metrics (adds timing overhead when enabled)
    pub fn enable_perf_metrics(&mut self, enabled: bool) {
        settings::enable_perf_metrics(self, enabled);
    }

    /// Get last step perf snapshot (zeros when perf disabled)
    pub fn get_perf_stats(&self) -> PerfStats {
        settings::get_perf_stats(self)
    }
}

impl Default for WorldCore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "tests/tests.rs"]
mod tests;
