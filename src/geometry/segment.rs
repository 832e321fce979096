use crate::math::Point2;

/// An undirected visibility edge between two points.
///
/// The weight is the Euclidean length. Equality ignores endpoint order.
#[derive(Debug, Clone, Copy)]
pub struct Segment {
    a: Point2,
    b: Point2,
    weight: f64,
}

impl Segment {
    /// Creates a segment and computes its Euclidean weight.
    #[must_use]
    pub fn new(a: Point2, b: Point2) -> Self {
        Self {
            a,
            b,
            weight: nalgebra::distance(&a, &b),
        }
    }

    /// First endpoint, in construction order.
    #[must_use]
    pub fn a(&self) -> Point2 {
        self.a
    }

    /// Second endpoint, in construction order.
    #[must_use]
    pub fn b(&self) -> Point2 {
        self.b
    }

    /// Euclidean length of the segment.
    #[must_use]
    pub fn weight(&self) -> f64 {
        self.weight
    }

    /// Returns the same segment with its endpoints swapped.
    #[must_use]
    pub fn reversed(&self) -> Self {
        Self {
            a: self.b,
            b: self.a,
            weight: self.weight,
        }
    }

    /// Returns `true` if `p` is one of the two endpoints.
    #[must_use]
    pub fn has_endpoint(&self, p: &Point2) -> bool {
        self.a == *p || self.b == *p
    }

    /// Given one endpoint, returns the other.
    #[must_use]
    pub fn other(&self, p: &Point2) -> Option<Point2> {
        if self.a == *p {
            Some(self.b)
        } else if self.b == *p {
            Some(self.a)
        } else {
            None
        }
    }
}

impl PartialEq for Segment {
    fn eq(&self, other: &Self) -> bool {
        (self.a == other.a && self.b == other.b) || (self.a == other.b && self.b == other.a)
    }
}
