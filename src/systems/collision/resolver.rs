use crate::rigid_body::RigidBody;

use super::pair::CollisionInfo;
use super::registry::CollisionRegistry;

/// Penetrations at or below this depth are left to the impulse solve alone;
/// deeper overlap also gets a positional correction.
pub const PENETRATION_THRESHOLD: f32 = 0.01;

/// Fraction of the remaining penetration removed per tick. A full one-shot
/// snap would fight the velocity solve and jitter.
const CORRECTION_PERCENT: f32 = 0.2;

/// Counters reported back to the perf stats
#[derive(Clone, Copy, Debug, Default)]
pub struct ResolveOutcome {
    pub impulses: u32,
    pub corrections: u32,
}

/// Resolve every active collision into an impulse on both bodies, plus a
/// positional correction for deep penetrations.
///
/// The impulse is handed to each body as a force of `impulse / dt` through
/// `add_force`. That only yields the intended velocity change because
/// `RigidBody::integrate` consumes the accumulator exactly once over exactly
/// one `dt` - the resolver and the integrator share that contract.
pub fn resolve_collisions(
    bodies: &mut [RigidBody],
    registry: &CollisionRegistry,
    dt: f32,
) -> ResolveOutcome {
    let mut outcome = ResolveOutcome::default();

    for (pair, info) in registry.iter() {
        let Some((ia, ib)) = find_pair_indices(bodies, pair.first(), pair.second()) else {
            continue;
        };
        let (a, b) = two_bodies_mut(bodies, ia, ib);

        let rel = b.velocity - a.velocity;
        let vel_along_normal = rel.dot(info.normal);

        // Already separating along the normal: adding an impulse would inject
        // energy instead of removing it.
        if vel_along_normal > 0.0 {
            continue;
        }

        let inv_a = a.inv_mass();
        let inv_b = b.inv_mass();
        let inv_sum = inv_a + inv_b;

        // Two static/kinematic bodies never push each other.
        if inv_sum == 0.0 {
            continue;
        }

        let bounce = a.bounciness.min(b.bounciness);
        let j = -(1.0 + bounce) * vel_along_normal / inv_sum;
        let impulse = info.normal * j;

        a.add_force(-impulse * (1.0 / dt));
        b.add_force(impulse * (1.0 / dt));
        outcome.impulses += 1;

        if info.penetration.abs() > PENETRATION_THRESHOLD {
            positional_correction(a, b, info);
            outcome.corrections += 1;
        }
    }

    outcome
}

/// Move the bodies apart by a fraction of the penetration, split by inverse
/// mass. Velocity resolution alone never removes existing overlap; without
/// this, fast bodies visibly sink into each other across ticks.
fn positional_correction(a: &mut RigidBody, b: &mut RigidBody, info: &CollisionInfo) {
    let inv_a = a.inv_mass();
    let inv_b = b.inv_mass();
    // Caller already rejected inv_sum == 0 pairs.
    let inv_sum = inv_a + inv_b;

    let correction = -info.normal * ((info.penetration / inv_sum) * CORRECTION_PERCENT);
    a.pos = a.pos - correction * inv_a;
    b.pos = b.pos + correction * inv_b;
}

fn find_pair_indices(bodies: &[RigidBody], first: u32, second: u32) -> Option<(usize, usize)> {
    let ia = bodies.iter().position(|b| b.id == first)?;
    let ib = bodies.iter().position(|b| b.id == second)?;
    if ia == ib {
        return None;
    }
    Some((ia, ib))
}

/// Two disjoint mutable borrows out of the body list
fn two_bodies_mut(bodies: &mut [RigidBody], ia: usize, ib: usize) -> (&mut RigidBody, &mut RigidBody) {
    if ia < ib {
        let (left, right) = bodies.split_at_mut(ib);
        (&mut left[ia], &mut right[0])
    } else {
        let (left, right) = bodies.split_at_mut(ia);
        (&mut right[0], &mut left[ib])
    }
}
