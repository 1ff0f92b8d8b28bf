use crate::collision::{detect_collisions, resolve_collisions};

use super::{PerfTimer, WorldCore};

/// One fixed tick: detect, resolve, integrate - in that order.
///
/// The order is load-bearing. Resolution reads the registry the detector just
/// refreshed, and integration consumes the impulse forces resolution just
/// applied; interleaving any two phases breaks both contracts.
pub(super) fn step(world: &mut WorldCore) {
    let perf_on = world.perf_enabled;
    if perf_on {
        world.perf_stats.reset();
        world.perf_stats.body_count = world.bodies.len() as u32;
    }
    let step_start = if perf_on { Some(PerfTimer::start()) } else { None };

    // === DETECT ===
    // The registry is mutated here and only here.
    if perf_on {
        let t0 = PerfTimer::start();
        let tested = detect_collisions(&world.bodies, &mut world.collisions);
        world.perf_stats.detect_ms = t0.elapsed_ms();
        world.perf_stats.pairs_tested = tested;
        world.perf_stats.active_collisions = world.collisions.len() as u32;
    } else {
        detect_collisions(&world.bodies, &mut world.collisions);
    }

    // === RESOLVE ===
    // Runs only after detection has fully completed for this tick.
    if perf_on {
        let t0 = PerfTimer::start();
        let outcome = resolve_collisions(&mut world.bodies, &world.collisions, world.fixed_dt);
        world.perf_stats.resolve_ms = t0.elapsed_ms();
        world.perf_stats.impulses_applied = outcome.impulses;
        world.perf_stats.corrections_applied = outcome.corrections;
    } else {
        resolve_collisions(&mut world.bodies, &world.collisions, world.fixed_dt);
    }

    // === INTEGRATE ===
    // Advance every body AFTER resolution so the corrective impulses land on
    // the velocity this integration consumes.
    if perf_on {
        let t0 = PerfTimer::start();
        integrate_bodies(world);
        world.perf_stats.integrate_ms = t0.elapsed_ms();
    } else {
        integrate_bodies(world);
    }

    if let Some(start) = step_start {
        world.perf_stats.step_ms = start.elapsed_ms();
    }

    world.frame += 1;
}

/// Apply gravity and advance every registered body by the fixed timestep.
///
/// Gravity goes through the force accumulator so it is consumed by the same
/// `integrate` call as the resolver's impulses. `gravity * mass` is zero for
/// static bodies, so they are never accelerated.
fn integrate_bodies(world: &mut WorldCore) {
    let dt = world.fixed_dt;
    let gravity = world.gravity;
    for body in world.bodies.iter_mut() {
        body.add_force(gravity * body.mass);
        body.integrate(dt);
    }
}
