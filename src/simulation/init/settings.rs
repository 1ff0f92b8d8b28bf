use serde::{Deserialize, Serialize};

use super::perf_stats::PerfStats;
use super::WorldCore;

/// Tunable simulation parameters, loadable from a JSON config blob.
///
/// Missing fields fall back to the defaults, so hosts can ship partial
/// overrides.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct WorldConfig {
    pub gravity_x: f32,
    pub gravity_y: f32,
    /// Fixed timestep in seconds consumed by every `step`
    pub fixed_timestep: f32,
    /// Tolerance for the grounded resting query
    pub grounded_tolerance: f32,
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            gravity_x: 0.0,
            gravity_y: -9.81,
            fixed_timestep: 1.0 / 60.0,
            grounded_tolerance: 0.1,
        }
    }
}

pub(super) fn enable_perf_metrics(world: &mut WorldCore, enabled: bool) {
    world.perf_enabled = enabled;
}

pub(super) fn get_perf_stats(world: &WorldCore) -> PerfStats {
    world.perf_stats.clone()
}

pub(super) fn set_gravity(world: &mut WorldCore, x: f32, y: f32) {
    world.gravity.x = x;
    world.gravity.y = y;
}

pub(super) fn set_fixed_timestep(world: &mut WorldCore, dt: f32) {
    // Non-positive timesteps would break the impulse/force coupling; keep the
    // previous value.
    if dt > 0.0 {
        world.fixed_dt = dt;
    }
}

pub(super) fn fixed_timestep(world: &WorldCore) -> f32 {
    world.fixed_dt
}

pub(super) fn set_grounded_tolerance(world: &mut WorldCore, tolerance: f32) {
    world.grounded_tol = tolerance.max(0.0);
}

pub(super) fn load_config_json(world: &mut WorldCore, json: &str) -> Result<(), String> {
    let config: WorldConfig = serde_json::from_str(json).map_err(|e| e.to_string())?;
    if config.fixed_timestep <= 0.0 {
        return Err("fixed_timestep must be positive".to_string());
    }
    world.gravity.x = config.gravity_x;
    world.gravity.y = config.gravity_y;
    world.fixed_dt = config.fixed_timestep;
    world.grounded_tol = config.grounded_tolerance.max(0.0);
    Ok(())
}

pub(super) fn config_json(world: &WorldCore) -> String {
    let config = WorldConfig {
        gravity_x: world.gravity.x,
        gravity_y: world.gravity.y,
        fixed_timestep: world.fixed_dt,
        grounded_tolerance: world.grounded_tol,
    };
    serde_json::to_string(&config).unwrap_or_default()
}
