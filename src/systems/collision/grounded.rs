use crate::rigid_body::RigidBody;

/// Is `body_id` resting on another registered body?
///
/// True iff some other body's AABB horizontally overlaps the query body's,
/// that body's top edge lies within `tolerance` of the query body's bottom
/// edge, and the query body's vertical speed is below `tolerance`.
///
/// Pure O(n) query over the body list. Deliberately independent of the
/// collision registry: a cleanly resting contact has no overlap and therefore
/// no registry entry.
pub fn is_grounded(bodies: &[RigidBody], body_id: u32, tolerance: f32) -> bool {
    let Some(body) = bodies.iter().find(|b| b.id == body_id) else {
        return false;
    };

    if body.velocity.y.abs() >= tolerance {
        return false;
    }

    let query = body.aabb();
    bodies.iter().any(|other| {
        other.id != body_id
            && query.overlaps_horizontally(&other.aabb())
            && (query.bottom_left.y - other.aabb().top_right.y).abs() <= tolerance
    })
}
