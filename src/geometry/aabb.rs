use crate::math::{Point2, TOLERANCE};

/// An axis-aligned bounding box in the plane.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb2 {
    /// Minimum corner of the bounding box.
    pub min: Point2,
    /// Maximum corner of the bounding box.
    pub max: Point2,
}

impl Aabb2 {
    /// Computes the bounding box of a non-empty point set.
    ///
    /// Returns `None` for an empty slice.
    #[must_use]
    pub fn from_points(points: &[Point2]) -> Option<Self> {
        let first = points.first()?;
        let mut min = *first;
        let mut max = *first;
        for p in &points[1..] {
            min.x = min.x.min(p.x);
            min.y = min.y.min(p.y);
            max.x = max.x.max(p.x);
            max.y = max.y.max(p.y);
        }
        Some(Self { min, max })
    }

    /// Returns `true` if the bounding box of segment `a`–`b` overlaps this box.
    ///
    /// A `false` answer proves the segment cannot touch anything inside the box.
    #[must_use]
    pub fn overlaps_segment(&self, a: &Point2, b: &Point2) -> bool {
        a.x.max(b.x) >= self.min.x - TOLERANCE
            && a.x.min(b.x) <= self.max.x + TOLERANCE
            && a.y.max(b.y) >= self.min.y - TOLERANCE
            && a.y.min(b.y) <= self.max.y + TOLERANCE
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_points_and_overlap() {
        let bbox = Aabb2::from_points(&[
            Point2::new(1.0, 1.0),
            Point2::new(3.0, 0.0),
            Point2::new(2.0, 4.0),
        ]);
        let Some(bbox) = bbox else {
            panic!("bounding box of non-empty set");
        };
        assert_eq!(bbox.min, Point2::new(1.0, 0.0));
        assert_eq!(bbox.max, Point2::new(3.0, 4.0));

        assert!(bbox.overlaps_segment(&Point2::new(0.0, 2.0), &Point2::new(5.0, 2.0)));
        assert!(!bbox.overlaps_segment(&Point2::new(4.0, 0.0), &Point2::new(5.0, 5.0)));
        assert!(!bbox.overlaps_segment(&Point2::new(0.0, 5.0), &Point2::new(5.0, 6.0)));
    }

    #[test]
    fn empty_has_no_box() {
        assert!(Aabb2::from_points(&[]).is_none());
    }
}
