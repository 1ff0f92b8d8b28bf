//! RigidBody - A solid body that moves as a unit
//!
//! The body is a pure state container: position, velocity, mass, bounciness
//! and an axis-aligned bounding box centered on the position. Motion state
//! advances through `integrate`, which consumes the force accumulator exactly
//! once per call. Collision detection and response live in the collision
//! system; the body knows nothing about other bodies.

mod aabb;
mod body;
mod vec2;

pub use aabb::Aabb;
pub use body::RigidBody;
pub use vec2::Vec2;
