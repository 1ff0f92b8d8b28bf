use super::aabb::Aabb;
use super::vec2::Vec2;

/// Rigid Body - moves as a single unit
pub struct RigidBody {
    // === Physics State ===
    /// World position (center of the AABB)
    pub pos: Vec2,
    /// Velocity vector (units per second)
    pub velocity: Vec2,
    /// Total mass. 0 means static/kinematic: treated as infinite mass,
    /// never accelerated by forces or impulses.
    pub mass: f32,
    /// Unique ID for this body
    pub id: u32,

    // === Bounding Box (AABB) ===
    /// Half extents around `pos` on each axis
    pub half_extents: Vec2,

    // === Material properties ===
    /// Bounciness (0.0 = no bounce, 1.0 = full elastic)
    pub bounciness: f32,

    /// Force accumulated since the last integration.
    /// Consumed and cleared exactly once per `integrate` call; the collision
    /// resolver feeds impulses through here as `impulse / dt` and depends on
    /// that once-per-tick consumption.
    force: Vec2,
}

impl RigidBody {
    /// Create a body centered at (x, y) with a w x h bounding box.
    ///
    /// Mass 0 creates a static/kinematic body.
    pub fn new(x: f32, y: f32, w: f32, h: f32, mass: f32) -> Self {
        Self {
            pos: Vec2::new(x, y),
            velocity: Vec2::zero(),
            mass: mass.max(0.0),
            id: 0,
            half_extents: Vec2::new(w.abs() * 0.5, h.abs() * 0.5),
            bounciness: 0.3, // Default: slight bounce like stone
            force: Vec2::zero(),
        }
    }

    /// Set bounciness (clamped to [0, 1])
    pub fn set_bounciness(&mut self, b: f32) {
        self.bounciness = b.clamp(0.0, 1.0);
    }

    /// Inverse mass: 1/mass, or 0 for static bodies
    #[inline]
    pub fn inv_mass(&self) -> f32 {
        if self.mass == 0.0 {
            0.0
        } else {
            1.0 / self.mass
        }
    }

    /// World-space bounding box derived from the current position
    #[inline]
    pub fn aabb(&self) -> Aabb {
        Aabb::from_center(self.pos, self.half_extents)
    }

    /// Accumulate a force contribution consumed on the next `integrate` call
    pub fn add_force(&mut self, force: Vec2) {
        self.force = self.force + force;
    }

    /// Advance position/velocity by `dt` using semi-implicit Euler.
    ///
    /// Velocity is updated from the accumulated force first, then position is
    /// advanced with the new velocity. The accumulator is cleared afterwards,
    /// so each force contribution acts for exactly one timestep.
    pub fn integrate(&mut self, dt: f32) {
        self.velocity = self.velocity + self.force * (self.inv_mass() * dt);
        self.pos = self.pos + self.velocity * dt;
        self.force = Vec2::zero();
    }
}
