use crate::collision::is_grounded;
use crate::rigid_body::{RigidBody, Vec2};

use super::WorldCore;

/// Register a body for simulation and return its assigned id.
///
/// The body list is a flat, insertion-ordered sequence with no duplicate
/// detection; callers must not register the same body twice. There is no
/// removal operation: ids stay valid for the lifetime of the world, which is
/// what keeps registry entries from ever referencing a missing body.
pub(super) fn add_body(world: &mut WorldCore, mut body: RigidBody) -> u32 {
    let id = world.next_body_id;
    world.next_body_id = world.next_body_id.saturating_add(1);
    body.id = id;
    world.bodies.push(body);
    id
}

pub(super) fn is_body_grounded(world: &WorldCore, id: u32) -> bool {
    is_grounded(&world.bodies, id, world.grounded_tol)
}

pub(super) fn body_position(world: &WorldCore, id: u32) -> Option<(f32, f32)> {
    find(world, id).map(|b| (b.pos.x, b.pos.y))
}

pub(super) fn body_velocity(world: &WorldCore, id: u32) -> Option<(f32, f32)> {
    find(world, id).map(|b| (b.velocity.x, b.velocity.y))
}

pub(super) fn set_body_velocity(world: &mut WorldCore, id: u32, vx: f32, vy: f32) -> bool {
    match find_mut(world, id) {
        Some(body) => {
            body.velocity = Vec2::new(vx, vy);
            true
        }
        None => false,
    }
}

/// Accumulate an external force on a body, consumed by the next step's
/// integration
pub(super) fn apply_force(world: &mut WorldCore, id: u32, fx: f32, fy: f32) -> bool {
    match find_mut(world, id) {
        Some(body) => {
            body.add_force(Vec2::new(fx, fy));
            true
        }
        None => false,
    }
}

fn find(world: &WorldCore, id: u32) -> Option<&RigidBody> {
    world.bodies.iter().find(|b| b.id == id)
}

fn find_mut(world: &mut WorldCore, id: u32) -> Option<&mut RigidBody> {
    world.bodies.iter_mut().find(|b| b.id == id)
}
