use crate::collision::CollisionRegistry;
use crate::rigid_body::Vec2;

use super::perf_stats::PerfStats;
use super::settings::WorldConfig;
use super::WorldCore;

pub(super) fn create_world_core() -> WorldCore {
    create_world_core_with_config(&WorldConfig::default())
}

pub(super) fn create_world_core_with_config(config: &WorldConfig) -> WorldCore {
    WorldCore {
        bodies: Vec::new(),
        collisions: CollisionRegistry::new(),
        next_body_id: 1,
        gravity: Vec2::new(config.gravity_x, config.gravity_y),
        fixed_dt: if config.fixed_timestep > 0.0 {
            config.fixed_timestep
        } else {
            WorldConfig::default().fixed_timestep
        },
        grounded_tol: config.grounded_tolerance,
        frame: 0,
        perf_enabled: false,
        perf_stats: PerfStats::default(),
    }
}
