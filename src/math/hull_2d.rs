use super::intersect_2d::cross_2d;
use super::{Point2, TOLERANCE};

/// Computes the convex hull of a point cloud (Andrew's monotone chain).
///
/// The hull is returned counter-clockwise, starting at the lowest-leftmost
/// point, without repeating the first vertex. Collinear boundary points and
/// duplicates are dropped. Clouds with fewer than 3 distinct points, or whose
/// points are all collinear, return the distinct extreme points only.
#[must_use]
pub fn convex_hull(points: &[Point2]) -> Vec<Point2> {
    let mut sorted: Vec<Point2> = points.to_vec();
    sorted.sort_by(|a, b| a.x.total_cmp(&b.x).then(a.y.total_cmp(&b.y)));
    sorted.dedup();

    if sorted.len() < 3 {
        return sorted;
    }

    let mut lower: Vec<Point2> = Vec::with_capacity(sorted.len());
    for p in &sorted {
        push_turning_left(&mut lower, *p);
    }

    let mut upper: Vec<Point2> = Vec::with_capacity(sorted.len());
    for p in sorted.iter().rev() {
        push_turning_left(&mut upper, *p);
    }

    // The last point of each chain is the first point of the other.
    lower.pop();
    upper.pop();
    lower.extend(upper);
    lower
}

fn push_turning_left(chain: &mut Vec<Point2>, p: Point2) {
    while chain.len() >= 2 {
        let n = chain.len();
        if cross_2d(&chain[n - 2], &chain[n - 1], &p) > TOLERANCE {
            break;
        }
        chain.pop();
    }
    chain.push(p);
}
