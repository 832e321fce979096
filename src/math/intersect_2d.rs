use super::{Point2, TOLERANCE};

/// Orientation of an ordered point triple.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    CounterClockwise,
    Clockwise,
    Collinear,
}

/// Z component of `(a - o) × (b - o)`.
///
/// Positive when `o → a → b` turns left.
#[must_use]
pub fn cross_2d(o: &Point2, a: &Point2, b: &Point2) -> f64 {
    (a.x - o.x) * (b.y - o.y) - (a.y - o.y) * (b.x - o.x)
}

/// Classifies the turn `a → b → c` using [`TOLERANCE`] as the collinearity band.
#[must_use]
pub fn orientation(a: &Point2, b: &Point2, c: &Point2) -> Orientation {
    let cross = cross_2d(a, b, c);
    if cross > TOLERANCE {
        Orientation::CounterClockwise
    } else if cross < -TOLERANCE {
        Orientation::Clockwise
    } else {
        Orientation::Collinear
    }
}

/// Returns `true` if `q`, known to be collinear with `p`–`r`, lies within
/// the bounding box of that segment.
fn within_segment_box(p: &Point2, q: &Point2, r: &Point2) -> bool {
    q.x <= p.x.max(r.x) + TOLERANCE
        && q.x >= p.x.min(r.x) - TOLERANCE
        && q.y <= p.y.max(r.y) + TOLERANCE
        && q.y >= p.y.min(r.y) - TOLERANCE
}

/// Returns `true` if `p` lies on the closed segment `a`–`b`.
#[must_use]
pub fn point_on_segment_2d(p: &Point2, a: &Point2, b: &Point2) -> bool {
    orientation(a, b, p) == Orientation::Collinear && within_segment_box(a, p, b)
}

/// Closed segment-segment intersection test in 2D.
///
/// Touching endpoints, T-junctions and collinear overlaps all count as
/// intersecting.
#[must_use]
pub fn segments_intersect_2d(a0: &Point2, a1: &Point2, b0: &Point2, b1: &Point2) -> bool {
    let o1 = orientation(a0, a1, b0);
    let o2 = orientation(a0, a1, b1);
    let o3 = orientation(b0, b1, a0);
    let o4 = orientation(b0, b1, a1);

    if o1 != o2 && o3 != o4 {
        return true;
    }

    (o1 == Orientation::Collinear && within_segment_box(a0, b0, a1))
        || (o2 == Orientation::Collinear && within_segment_box(a0, b1, a1))
        || (o3 == Orientation::Collinear && within_segment_box(b0, a0, b1))
        || (o4 == Orientation::Collinear && within_segment_box(b0, a1, b1))
}
