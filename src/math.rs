//! Types, aliases and helper operations for doing math with `ultraviolet`.
pub use ultraviolet as uv;

pub type Vec2 = uv::DVec2;

/// A wrapper type to indicate a vector should always be normalized.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Unit<T>(T);

impl Unit<Vec2> {
    pub const fn new_unchecked(v: Vec2) -> Self {
        Unit(v)
    }
}

impl<T> std::ops::Deref for Unit<T> {
    type Target = T;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<T> std::ops::Neg for Unit<T>
where
    T: std::ops::Neg,
{
    type Output = Unit<<T as std::ops::Neg>::Output>;

    fn neg(self) -> Self::Output {
        Unit(-self.0)
    }
}

// scalar utils

/// Direction of a value along an axis: `1.0` if strictly positive, `-1.0` otherwise.
///
/// Unlike `f64::signum`, zero maps to `-1.0`.
#[inline]
pub fn axis_sign(v: f64) -> f64 {
    if v > 0.0 {
        1.0
    } else {
        -1.0
    }
}

// Vec2 utils

/// Componentwise absolute value.
#[inline]
pub fn abs(v: Vec2) -> Vec2 {
    Vec2::new(v.x.abs(), v.y.abs())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn axis_sign_maps_zero_to_negative() {
        assert_eq!(axis_sign(3.5), 1.0);
        assert_eq!(axis_sign(-0.1), -1.0);
        assert_eq!(axis_sign(0.0), -1.0);
    }

    #[test]
    fn unit_negation_and_abs() {
        let n = -Unit::new_unchecked(Vec2::unit_x());
        assert_eq!(*n, Vec2::new(-1.0, 0.0));
        assert_eq!(n.dot(Vec2::unit_x()), -1.0);
        assert_eq!(abs(Vec2::new(-2.0, 3.0)), Vec2::new(2.0, 3.0));
    }
}
