//! Overlap detection and response between two axis-aligned rectangles.
//!
//! For a pair of boxes the only candidate separating axes are x and y,
//! so picking the axis with the smaller penetration gives the exact
//! minimum translation with no false positives.

use super::Aabb;
use crate::math::{self as m, Unit, Vec2};

/// Penetration of one box into another along the axis of least overlap.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Overlap {
    /// Axis-aligned unit normal, facing away from `b` towards `a`.
    pub normal: Unit<Vec2>,
    /// How far the boxes need to move apart along `normal` to separate.
    /// Negative when there's a gap on at least one axis.
    pub depth: f64,
}

impl Overlap {
    /// True if the boxes intersect or touch.
    #[inline]
    pub fn is_overlapping(&self) -> bool {
        self.depth >= 0.0
    }
}

/// Compute the minimum translation normal and penetration depth of `a` into `b`.
///
/// The normal is on the x axis only if the x overlap is strictly smaller in magnitude,
/// so exact ties resolve along y.
pub fn overlap_data(a: &Aabb, b: &Aabb) -> Overlap {
    let delta = a.center - b.center;
    let span = Vec2::new((a.width + b.width) * 0.5, (a.height + b.height) * 0.5);
    let overlap = span - m::abs(delta);
    let depth = overlap.x.min(overlap.y);

    let normal = if overlap.x.abs() < overlap.y.abs() {
        Vec2::new(m::axis_sign(delta.x), 0.0)
    } else {
        Vec2::new(0.0, m::axis_sign(delta.y))
    };

    Overlap {
        normal: Unit::new_unchecked(normal),
        depth,
    }
}

/// Masses and restitution used when resolving a contact.
///
/// A mass of zero makes the body immovable.
/// Each body is corrected by its own share of the total mass,
/// so the heavier side of a pair yields more.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ContactParams {
    pub mass_a: f64,
    pub mass_b: f64,
    /// Restitution, 0 for fully inelastic and 1 for fully elastic contacts.
    pub bounce: f64,
}

impl Default for ContactParams {
    fn default() -> Self {
        ContactParams {
            mass_a: 1.0,
            mass_b: 1.0,
            bounce: 0.0,
        }
    }
}

impl ContactParams {
    #[inline]
    pub fn with_masses(mut self, mass_a: f64, mass_b: f64) -> Self {
        self.mass_a = mass_a;
        self.mass_b = mass_b;
        self
    }

    #[inline]
    pub fn with_bounce(mut self, bounce: f64) -> Self {
        self.bounce = bounce;
        self
    }

    #[inline]
    fn total_mass(&self) -> f64 {
        self.mass_a + self.mass_b
    }
}

/// Push two overlapping boxes apart and correct their velocities in place.
///
/// Returns whether the boxes were overlapping. If they weren't, nothing is modified.
///
/// Positions are corrected along the overlap normal even if the bodies are already
/// moving apart; velocities only change when the bodies approach each other.
/// When both masses are zero nothing moves and this is a plain intersection test.
pub fn solve_rect_overlap(
    a: &mut Aabb,
    b: &mut Aabb,
    velocity_a: &mut Vec2,
    velocity_b: &mut Vec2,
    params: &ContactParams,
) -> bool {
    let overlap = overlap_data(a, b);
    if !overlap.is_overlapping() {
        return false;
    }
    let Overlap { normal, depth } = overlap;

    let total_mass = params.total_mass();
    if total_mass > 0.0 {
        let effect_a = params.mass_a / total_mass;
        let effect_b = params.mass_b / total_mass;
        a.center += *normal * (depth * effect_a);
        b.center -= *normal * (depth * effect_b);

        let relative_v =
            (1.0 + params.bounce) * (velocity_a.dot(*normal) - velocity_b.dot(*normal));
        if relative_v < 0.0 {
            *velocity_a += *normal * (-relative_v * params.mass_a / total_mass);
            *velocity_b += *normal * (relative_v * params.mass_b / total_mass);
        }
    }

    true
}

/// The outcome of [`resolve`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Resolution {
    pub a: Aabb,
    pub b: Aabb,
    pub velocity_a: Vec2,
    pub velocity_b: Vec2,
    pub collided: bool,
}

/// By-value version of [`solve_rect_overlap`] for callers that don't keep
/// their boxes and velocities in mutable storage.
pub fn resolve(
    mut a: Aabb,
    mut b: Aabb,
    mut velocity_a: Vec2,
    mut velocity_b: Vec2,
    params: &ContactParams,
) -> Resolution {
    let collided = solve_rect_overlap(&mut a, &mut b, &mut velocity_a, &mut velocity_b, params);
    Resolution {
        a,
        b,
        velocity_a,
        velocity_b,
        collided,
    }
}
