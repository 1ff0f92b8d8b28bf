//! Collision System - SAT detection, persistent pairs, impulse resolution
//!
//! Three cooperating pieces, invoked in strict order by the simulation step:
//!
//! - `detector` scans all unordered body pairs with a per-axis SAT test on
//!   AABBs and keeps the `CollisionRegistry` in sync (insert on new overlap,
//!   refresh while it persists, remove on separation).
//! - `registry` maps unordered `CollisionPair` keys to contact geometry
//!   (`CollisionInfo`: axis normal + signed penetration). Only the detector
//!   writes it.
//! - `resolver` turns every registry entry into an equal-and-opposite impulse
//!   (restitution = min of both bouncinesses) plus a fractional positional
//!   correction for deep penetrations.
//!
//! `grounded` is a separate resting query that reads the body list directly.

mod detector;
mod grounded;
mod pair;
mod registry;
mod resolver;

pub use detector::detect_collisions;
pub use grounded::is_grounded;
pub use pair::{CollisionInfo, CollisionPair};
pub use registry::CollisionRegistry;
pub use resolver::{resolve_collisions, ResolveOutcome, PENETRATION_THRESHOLD};
