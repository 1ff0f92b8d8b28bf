use crate::rigid_body::{RigidBody, Vec2};

use super::pair::{CollisionInfo, CollisionPair};
use super::registry::CollisionRegistry;

/// Scan every unordered body pair once and refresh the registry.
///
/// Overlapping pairs get a fresh entry (replacing any previous one), pairs
/// that stopped overlapping get their entry removed. Returns the number of
/// pairs tested for the perf counters.
///
/// Brute-force O(n²) enumeration; a broad-phase index could replace it behind
/// the same registry contract.
pub fn detect_collisions(bodies: &[RigidBody], registry: &mut CollisionRegistry) -> u32 {
    let mut pairs_tested: u32 = 0;

    for i in 0..bodies.len() {
        for k in (i + 1)..bodies.len() {
            pairs_tested = pairs_tested.saturating_add(1);

            // Evaluate in canonical pair order so the stored normal always
            // points first -> second regardless of enumeration order.
            let (a, b) = if bodies[i].id <= bodies[k].id {
                (&bodies[i], &bodies[k])
            } else {
                (&bodies[k], &bodies[i])
            };
            let pair = CollisionPair::new(a.id, b.id);

            match sat_test(a, b) {
                Some(info) => registry.upsert(pair, info),
                None => registry.remove(&pair),
            }
        }
    }

    pairs_tested
}

/// Separating Axis Theorem test on two AABBs.
///
/// `gap = |posB - posA| - (halfA + halfB)` per axis; overlap holds iff both
/// components are negative. On overlap the axis with the larger (less
/// negative) gap carries the contact: it has the shallower penetration. Exact
/// ties take the y-axis, the common resting-stack case.
fn sat_test(a: &RigidBody, b: &RigidBody) -> Option<CollisionInfo> {
    let distance = b.pos - a.pos;
    let half = a.aabb().half_size() + b.aabb().half_size();
    let gap = distance.abs() - half;

    if gap.x >= 0.0 || gap.y >= 0.0 {
        return None;
    }

    let info = if gap.x > gap.y {
        CollisionInfo {
            normal: Vec2::new(if distance.x > 0.0 { 1.0 } else { -1.0 }, 0.0),
            penetration: gap.x,
        }
    } else {
        CollisionInfo {
            normal: Vec2::new(0.0, if distance.y > 0.0 { 1.0 } else { -1.0 }),
            penetration: gap.y,
        }
    };

    Some(info)
}
