use crate::math::Vec2;

/// Fraction of velocity kept after one full second of [`damping`].
pub const DEFAULT_DAMPING: f64 = 0.1;

/// Exponentially decay a velocity over one timestep.
///
/// `damp` is the fraction of the velocity that remains after one time unit,
/// so the result is `velocity * damp^dt`. The decay only stays frame-rate independent
/// if `dt` is the same every tick, which is the case with the fixed-timestep
/// [`Game`][crate::Game] loop.
#[inline]
pub fn damping(velocity: Vec2, damp: f64, dt: f64) -> Vec2 {
    velocity * damp.powf(dt)
}
