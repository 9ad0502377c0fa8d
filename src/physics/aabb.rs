use crate::math::Vec2;

/// An axis-aligned rectangle described by its center and full size.
///
/// Extents are always derived from the current `width` and `height`,
/// so resizing a box between frames needs no extra bookkeeping.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde-types", derive(serde::Serialize, serde::Deserialize))]
pub struct Aabb {
    pub center: Vec2,
    pub width: f64,
    pub height: f64,
}

impl Aabb {
    pub fn new(center: impl Into<Vec2>, width: f64, height: f64) -> Self {
        Aabb {
            center: center.into(),
            width,
            height,
        }
    }

    /// A square box with side length `size`.
    pub fn square(center: impl Into<Vec2>, size: f64) -> Self {
        Self::new(center, size, size)
    }

    #[inline]
    pub fn half_extents(&self) -> Vec2 {
        Vec2::new(self.width * 0.5, self.height * 0.5)
    }

    /// The corner with the smallest coordinates.
    #[inline]
    pub fn min(&self) -> Vec2 {
        self.center - self.half_extents()
    }

    /// The corner with the largest coordinates.
    #[inline]
    pub fn max(&self) -> Vec2 {
        self.center + self.half_extents()
    }

    /// Quick boolean overlap test. Touching edges count as overlapping,
    /// matching the zero-depth contacts the resolver reports.
    pub fn overlaps(&self, other: &Aabb) -> bool {
        let (min1, max1) = (self.min(), self.max());
        let (min2, max2) = (other.min(), other.max());
        min1.x <= max2.x && min2.x <= max1.x && min1.y <= max2.y && min2.y <= max1.y
    }

    /// Check whether a point is inside or on the edge of the box.
    pub fn contains_point(&self, p: Vec2) -> bool {
        let (min, max) = (self.min(), self.max());
        p.x >= min.x && p.x <= max.x && p.y >= min.y && p.y <= max.y
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn corners_from_center_and_size() {
        let a = Aabb::new([1.0, 0.0], 4.0, 2.0);
        assert_eq!(a.min(), Vec2::new(-1.0, -1.0));
        assert_eq!(a.max(), Vec2::new(3.0, 1.0));
    }

    #[test]
    fn extents_follow_resizing() {
        let mut a = Aabb::square([0.0, 0.0], 4.0);
        assert_eq!(a.half_extents(), Vec2::new(2.0, 2.0));
        a.width = 1.0;
        assert_eq!(a.half_extents(), Vec2::new(0.5, 2.0));
        assert!(!a.contains_point(Vec2::new(1.0, 0.0)));
        assert!(a.contains_point(Vec2::new(0.5, -2.0)));
    }

    #[test]
    fn overlap_includes_touching() {
        let a = Aabb::square([0.0, 0.0], 2.0);
        assert!(a.overlaps(&Aabb::square([2.0, 0.0], 2.0)));
        assert!(a.overlaps(&Aabb::square([1.0, 1.0], 2.0)));
        assert!(!a.overlaps(&Aabb::square([2.5, 0.0], 2.0)));
        assert!(!a.overlaps(&Aabb::square([0.0, -3.0], 2.0)));
    }
}
