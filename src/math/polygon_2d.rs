use super::intersect_2d::{point_on_segment_2d, segments_intersect_2d};
use super::{Point2, TOLERANCE};

/// Computes the signed area of a closed polygon (shoelace formula).
///
/// Positive for counter-clockwise, negative for clockwise.
#[must_use]
pub fn signed_area(points: &[Point2]) -> f64 {
    let n = points.len();
    if n < 3 {
        return 0.0;
    }
    let mut sum = 0.0;
    for i in 0..n {
        let j = (i + 1) % n;
        sum += points[i].x * points[j].y - points[j].x * points[i].y;
    }
    sum * 0.5
}

/// Area below which a polygon spanning `points` counts as degenerate.
///
/// Relative to the squared bounding-box extent, so tiny but well-formed
/// polygons are not mistaken for slivers.
#[must_use]
pub fn area_tolerance(points: &[Point2]) -> f64 {
    let Some(first) = points.first() else {
        return 0.0;
    };
    let (mut min, mut max) = (*first, *first);
    for p in points {
        min = Point2::new(min.x.min(p.x), min.y.min(p.y));
        max = Point2::new(max.x.max(p.x), max.y.max(p.y));
    }
    let extent = (max.x - min.x).max(max.y - min.y);
    TOLERANCE * extent * extent
}

/// Computes the area centroid of a closed polygon.
///
/// Returns `None` when the polygon has (near) zero area.
#[must_use]
pub fn centroid(points: &[Point2]) -> Option<Point2> {
    let area = signed_area(points);
    if area.abs() <= area_tolerance(points) {
        return None;
    }
    let n = points.len();
    let (mut cx, mut cy) = (0.0, 0.0);
    for i in 0..n {
        let j = (i + 1) % n;
        let cross = points[i].x * points[j].y - points[j].x * points[i].y;
        cx += (points[i].x + points[j].x) * cross;
        cy += (points[i].y + points[j].y) * cross;
    }
    let k = 1.0 / (6.0 * area);
    Some(Point2::new(cx * k, cy * k))
}

/// Scales every point toward (`factor < 1`) or away from `center`.
#[must_use]
pub fn scale_about(points: &[Point2], center: &Point2, factor: f64) -> Vec<Point2> {
    points
        .iter()
        .map(|p| *center + (*p - *center) * factor)
        .collect()
}

/// Moves every point toward `center` by `fraction` of its distance, but never
/// by more than `max_distance`.
#[must_use]
pub fn inset_toward(
    points: &[Point2],
    center: &Point2,
    fraction: f64,
    max_distance: f64,
) -> Vec<Point2> {
    points
        .iter()
        .map(|p| {
            let to_center = *center - *p;
            let distance = to_center.norm();
            if distance <= 0.0 {
                return *p;
            }
            let step = (fraction * distance).min(max_distance);
            *p + to_center * (step / distance)
        })
        .collect()
}

/// Returns `true` if two non-adjacent edges of the closed ring touch or
/// cross.
#[must_use]
pub fn has_crossing_edges(points: &[Point2]) -> bool {
    let n = points.len();
    if n < 4 {
        return false;
    }
    for i in 0..n {
        for j in (i + 2)..n {
            if i == 0 && j == n - 1 {
                continue;
            }
            let (a0, a1) = (&points[i], &points[(i + 1) % n]);
            let (b0, b1) = (&points[j], &points[(j + 1) % n]);
            if segments_intersect_2d(a0, a1, b0, b1) {
                return true;
            }
        }
    }
    false
}

/// Returns `true` if `p` lies inside the closed polygon or on its boundary.
#[must_use]
pub fn point_in_polygon(p: &Point2, polygon: &[Point2]) -> bool {
    let n = polygon.len();
    if n < 3 {
        return false;
    }

    let mut inside = false;
    for i in 0..n {
        let a = &polygon[i];
        let b = &polygon[(i + 1) % n];
        if point_on_segment_2d(p, a, b) {
            return true;
        }
        // Half-open rule on y so a ray through a vertex counts once.
        if (a.y > p.y) != (b.y > p.y) {
            let x_cross = a.x + (p.y - a.y) * (b.x - a.x) / (b.y - a.y);
            if p.x < x_cross {
                inside = !inside;
            }
        }
    }
    inside
}

/// Returns `true` if the closed segment `a`–`b` shares any point with the
/// closed polygon region (interior or boundary).
#[must_use]
pub fn segment_intersects_polygon(a: &Point2, b: &Point2, polygon: &[Point2]) -> bool {
    if point_in_polygon(a, polygon) || point_in_polygon(b, polygon) {
        return true;
    }
    let n = polygon.len();
    (0..n).any(|i| segments_intersect_2d(a, b, &polygon[i], &polygon[(i + 1) % n]))
}
