use super::{collision, damping, Aabb, ContactParams};
use crate::math::Vec2;

/// A body is something that moves and collides, like a paddle, a ball or a wall.
///
/// This just bundles the things a game keeps per object.
/// Bodies aren't stored anywhere by the library; the game owns them and
/// moves them around with [`integrate`][Self::integrate] and [`collide`][Self::collide].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Body {
    pub rect: Aabb,
    pub velocity: Vec2,
    /// Share of collision response this body takes. Zero means immovable.
    pub mass: f64,
}

impl Body {
    /// Dynamic bodies get pushed around by collisions.
    pub fn new_dynamic(rect: Aabb, mass: f64) -> Self {
        Self {
            rect,
            velocity: Vec2::zero(),
            mass,
        }
    }

    /// Static bodies are not affected by collisions.
    pub fn new_static(rect: Aabb) -> Self {
        Self::new_dynamic(rect, 0.0)
    }

    /// Set the velocity of the body in a builder-like chain.
    pub fn with_velocity(mut self, vel: impl Into<Vec2>) -> Self {
        self.velocity = vel.into();
        self
    }

    #[inline]
    pub fn is_static(&self) -> bool {
        self.mass == 0.0
    }

    /// Move the body by its velocity over a timestep.
    ///
    /// Static bodies move too if they have a velocity,
    /// which is handy for things like moving platforms.
    #[inline]
    pub fn integrate(&mut self, dt: f64) {
        self.rect.center += self.velocity * dt;
    }

    /// Slow the body down, see [`damping`][damping::damping].
    #[inline]
    pub fn apply_damping(&mut self, damp: f64, dt: f64) {
        self.velocity = damping::damping(self.velocity, damp, dt);
    }

    /// Separate this body from another one if they overlap.
    /// Returns whether there was a collision.
    pub fn collide(&mut self, other: &mut Body, bounce: f64) -> bool {
        let params = ContactParams {
            mass_a: self.mass,
            mass_b: other.mass,
            bounce,
        };
        collision::solve_rect_overlap(
            &mut self.rect,
            &mut other.rect,
            &mut self.velocity,
            &mut other.velocity,
            &params,
        )
    }
}
