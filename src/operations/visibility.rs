use std::collections::{HashMap, HashSet};

use tracing::debug;

use crate::error::{GeometryError, OperationError, Result};
use crate::geometry::{Aabb2, Polygon, Segment};
use crate::math::{vertex_key, Point2};

/// Fraction by which obstacles are shrunk toward their centroid before
/// visibility testing.
pub const DEFAULT_SHRINK_FACTOR: f64 = 0.01;

/// Upper bound on how far any obstacle vertex moves while shrinking.
pub const MAX_SHRINK_DISTANCE: f64 = 1e-6;

/// A shrunk obstacle prepared for segment tests.
#[derive(Debug)]
struct Blocker {
    bbox: Aabb2,
    polygon: Polygon,
}

impl Blocker {
    fn blocks(&self, a: &Point2, b: &Point2) -> bool {
        self.bbox.overlaps_segment(a, b) && self.polygon.intersects_segment(a, b)
    }
}

/// Builds the visibility edges between obstacle vertices (and, for a query
/// pass, the source and destination).
///
/// # Algorithm
///
/// 1. Collect every obstacle vertex plus the query points, deduplicated by
///    exact coordinates.
/// 2. Accept every obstacle's own boundary edges.
/// 3. Test every other vertex pair against all obstacles shrunk toward their
///    centroids; a pair is accepted iff its closed segment touches none of
///    them.
///
/// Each vertex moves inward by the shrink factor times its distance to the
/// centroid, capped at [`MAX_SHRINK_DISTANCE`]. Segments that run along or
/// end on an obstacle boundary then clear the shrunk copy, while anything
/// cutting through the interior still hits it, however elongated the
/// obstacle.
#[derive(Debug)]
pub struct BuildVisibilityGraph<'a> {
    obstacles: &'a [Polygon],
    query: Option<(Point2, Point2)>,
    shrink_factor: f64,
}

impl<'a> BuildVisibilityGraph<'a> {
    /// Creates an obstacle-only visibility pass.
    #[must_use]
    pub fn new(obstacles: &'a [Polygon]) -> Self {
        Self {
            obstacles,
            query: None,
            shrink_factor: DEFAULT_SHRINK_FACTOR,
        }
    }

    /// Adds the source and destination of a query as extra vertices.
    #[must_use]
    pub fn with_query(mut self, source: Point2, destination: Point2) -> Self {
        self.query = Some((source, destination));
        self
    }

    /// Overrides the shrink factor, in `[0, 1)`.
    #[must_use]
    pub fn with_shrink_factor(mut self, shrink_factor: f64) -> Self {
        self.shrink_factor = shrink_factor;
        self
    }

    /// Executes the build, returning every accepted segment exactly once.
    ///
    /// # Errors
    ///
    /// - `OperationError::InvalidInput` if there are no obstacles or a query
    ///   point is not finite
    /// - `GeometryError::ParameterOutOfRange` if the shrink factor is outside
    ///   `[0, 1)`
    pub fn execute(&self) -> Result<Vec<Segment>> {
        if self.obstacles.is_empty() {
            return Err(OperationError::InvalidInput(
                "at least one obstacle is required for a visibility graph".to_owned(),
            )
            .into());
        }

        if !(0.0..1.0).contains(&self.shrink_factor) {
            return Err(GeometryError::ParameterOutOfRange {
                parameter: "shrink_factor",
                value: self.shrink_factor,
                min: 0.0,
                max: 1.0,
            }
            .into());
        }

        if let Some((source, destination)) = self.query {
            for p in [source, destination] {
                if !p.x.is_finite() || !p.y.is_finite() {
                    return Err(OperationError::InvalidInput(format!(
                        "query point ({}, {}) is not finite",
                        p.x, p.y
                    ))
                    .into());
                }
            }
        }

        // Step 1: Vertex set.
        let (vertices, lookup) = self.collect_vertices();

        // Step 2: Boundary edges.
        let mut seen: HashSet<(usize, usize)> = HashSet::new();
        let mut accepted = Vec::new();
        for obstacle in self.obstacles {
            for (a, b) in obstacle.edges() {
                let (ia, ib) = (lookup[&vertex_key(&a)], lookup[&vertex_key(&b)]);
                if ia != ib && seen.insert(pair_key(ia, ib)) {
                    accepted.push(Segment::new(a, b));
                }
            }
        }
        let boundary_count = accepted.len();

        // Step 3: Remaining candidate pairs.
        let n = vertices.len();
        let candidates: Vec<(usize, usize)> = (0..n)
            .flat_map(|i| ((i + 1)..n).map(move |j| (i, j)))
            .filter(|pair| !seen.contains(pair))
            .collect();

        let blockers: Vec<Blocker> = self
            .obstacles
            .iter()
            .map(|o| {
                let polygon = o.shrunk(self.shrink_factor, MAX_SHRINK_DISTANCE);
                Blocker {
                    bbox: polygon.bounding_box(),
                    polygon,
                }
            })
            .collect();

        let visible = filter_visible(&candidates, &vertices, &blockers);

        debug!(
            vertices = n,
            candidates = candidates.len(),
            boundary = boundary_count,
            visible = visible.len(),
            query = self.query.is_some(),
            "visibility graph built"
        );

        accepted.extend(visible);
        Ok(accepted)
    }

    /// Collects obstacle vertices, then query points, in first-seen order.
    fn collect_vertices(&self) -> (Vec<Point2>, HashMap<(u64, u64), usize>) {
        let mut vertices = Vec::new();
        let mut lookup = HashMap::new();

        let query_points = self.query.iter().flat_map(|&(s, d)| [s, d]);
        let all = self
            .obstacles
            .iter()
            .flat_map(|o| o.vertices().iter().copied())
            .chain(query_points);

        for p in all {
            lookup.entry(vertex_key(&p)).or_insert_with(|| {
                vertices.push(p);
                vertices.len() - 1
            });
        }
        (vertices, lookup)
    }
}

fn pair_key(i: usize, j: usize) -> (usize, usize) {
    (i.min(j), i.max(j))
}

fn is_visible(a: &Point2, b: &Point2, blockers: &[Blocker]) -> bool {
    !blockers.iter().any(|blocker| blocker.blocks(a, b))
}

#[cfg(not(feature = "rayon"))]
fn filter_visible(
    candidates: &[(usize, usize)],
    vertices: &[Point2],
    blockers: &[Blocker],
) -> Vec<Segment> {
    candidates
        .iter()
        .filter(|&&(i, j)| is_visible(&vertices[i], &vertices[j], blockers))
        .map(|&(i, j)| Segment::new(vertices[i], vertices[j]))
        .collect()
}

// Each candidate test only reads the shared vertex and blocker slices.
#[cfg(feature = "rayon")]
fn filter_visible(
    candidates: &[(usize, usize)],
    vertices: &[Point2],
    blockers: &[Blocker],
) -> Vec<Segment> {
    use rayon::prelude::*;

    candidates
        .par_iter()
        .filter(|&&(i, j)| is_visible(&vertices[i], &vertices[j], blockers))
        .map(|&(i, j)| Segment::new(vertices[i], vertices[j]))
        .collect()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::operations::InflatePolygon;

    fn p(x: f64, y: f64) -> Point2 {
        Point2::new(x, y)
    }

    fn square(x0: f64, y0: f64, size: f64) -> Polygon {
        Polygon::from_coords(&[
            (x0, y0),
            (x0 + size, y0),
            (x0 + size, y0 + size),
            (x0, y0 + size),
        ])
        .unwrap()
    }

    fn has_edge(edges: &[Segment], a: Point2, b: Point2) -> bool {
        edges.contains(&Segment::new(a, b))
    }

    #[test]
    fn single_square_has_boundary_but_no_diagonals() {
        let obstacles = vec![square(0.0, 0.0, 2.0)];
        let edges = BuildVisibilityGraph::new(&obstacles).execute().unwrap();
        assert_eq!(edges.len(), 4);
        assert!(has_edge(&edges, p(0.0, 0.0), p(2.0, 0.0)));
        assert!(has_edge(&edges, p(0.0, 2.0), p(0.0, 0.0)));
        assert!(!has_edge(&edges, p(0.0, 0.0), p(2.0, 2.0)));
        assert!(!has_edge(&edges, p(2.0, 0.0), p(0.0, 2.0)));
    }

    #[test]
    fn boundary_edges_always_included() {
        let obstacles = vec![
            square(0.0, 0.0, 2.0),
            square(5.0, 0.0, 2.0),
            Polygon::from_coords(&[(2.0, 5.0), (4.0, 4.0), (3.0, 7.0)]).unwrap(),
        ];
        let edges = BuildVisibilityGraph::new(&obstacles).execute().unwrap();
        for obstacle in &obstacles {
            for (a, b) in obstacle.edges() {
                assert!(has_edge(&edges, a, b), "missing boundary edge {a:?} - {b:?}");
            }
        }
    }

    #[test]
    fn no_duplicate_segments() {
        let obstacles = vec![square(0.0, 0.0, 2.0), square(4.0, 0.0, 2.0)];
        let edges = BuildVisibilityGraph::new(&obstacles)
            .with_query(p(-1.0, 1.0), p(7.0, 1.0))
            .execute()
            .unwrap();
        for (i, e) in edges.iter().enumerate() {
            assert!(
                !edges[i + 1..].contains(e),
                "duplicate segment {:?} - {:?}",
                e.a(),
                e.b()
            );
        }
    }

    #[test]
    fn accepted_edges_avoid_shrunk_obstacles() {
        let obstacles = vec![
            square(0.0, 0.0, 2.0),
            square(3.0, 3.0, 2.0),
            square(6.0, -1.0, 1.5),
        ];
        let edges = BuildVisibilityGraph::new(&obstacles)
            .with_query(p(-2.0, -2.0), p(9.0, 6.0))
            .execute()
            .unwrap();
        let boundary: Vec<Segment> = obstacles
            .iter()
            .flat_map(|o| o.edges().map(|(a, b)| Segment::new(a, b)))
            .collect();
        for e in edges.iter().filter(|e| !boundary.contains(e)) {
            for o in &obstacles {
                let shrunk = o.shrunk(DEFAULT_SHRINK_FACTOR, MAX_SHRINK_DISTANCE);
                assert!(
                    !shrunk.intersects_segment(&e.a(), &e.b()),
                    "{:?} - {:?} crosses an obstacle",
                    e.a(),
                    e.b()
                );
            }
        }
    }

    #[test]
    fn blocked_pair_is_rejected_and_clear_pair_accepted() {
        let obstacles = vec![square(0.0, 0.0, 2.0)];
        let edges = BuildVisibilityGraph::new(&obstacles)
            .with_query(p(-1.0, 1.0), p(3.0, 1.0))
            .execute()
            .unwrap();
        // Straight through the square.
        assert!(!has_edge(&edges, p(-1.0, 1.0), p(3.0, 1.0)));
        // Around a corner.
        assert!(has_edge(&edges, p(-1.0, 1.0), p(0.0, 2.0)));
        assert!(has_edge(&edges, p(0.0, 2.0), p(2.0, 2.0)));
        assert!(has_edge(&edges, p(2.0, 2.0), p(3.0, 1.0)));
    }

    #[test]
    fn collinear_edge_along_boundary_is_accepted() {
        // The query points extend the square's bottom edge in both directions.
        let obstacles = vec![square(0.0, 0.0, 2.0)];
        let edges = BuildVisibilityGraph::new(&obstacles)
            .with_query(p(-1.0, 0.0), p(3.0, 0.0))
            .execute()
            .unwrap();
        assert!(has_edge(&edges, p(-1.0, 0.0), p(0.0, 0.0)));
        assert!(has_edge(&edges, p(-1.0, 0.0), p(2.0, 0.0)));
        assert!(has_edge(&edges, p(-1.0, 0.0), p(3.0, 0.0)));
    }

    #[test]
    fn elongated_obstacle_blocks_near_its_ends() {
        let wall = vec![
            Polygon::from_coords(&[(0.0, 0.0), (100.0, 0.0), (100.0, 1.0), (0.0, 1.0)]).unwrap(),
        ];
        let edges = BuildVisibilityGraph::new(&wall)
            .with_query(p(0.25, -5.0), p(0.25, 6.0))
            .execute()
            .unwrap();
        assert!(!has_edge(&edges, p(0.25, -5.0), p(0.25, 6.0)));
        // Same near the far end and along the length.
        let edges = BuildVisibilityGraph::new(&wall)
            .with_query(p(99.9, -5.0), p(50.0, 6.0))
            .execute()
            .unwrap();
        assert!(!has_edge(&edges, p(99.9, -5.0), p(50.0, 6.0)));
        // The long diagonal crosses the interior.
        assert!(!has_edge(&edges, p(0.0, 0.0), p(100.0, 1.0)));
        // Tangent to a corner is still fine.
        assert!(has_edge(&edges, p(0.25, 6.0), p(0.0, 1.0)));
    }

    #[test]
    fn query_inside_obstacle_has_no_edges() {
        let obstacles = vec![square(0.0, 0.0, 4.0)];
        let inside = p(2.0, 2.0);
        let edges = BuildVisibilityGraph::new(&obstacles)
            .with_query(p(-3.0, 2.0), inside)
            .execute()
            .unwrap();
        assert!(edges.iter().all(|e| !e.has_endpoint(&inside)));
    }

    #[test]
    fn works_on_inflated_obstacles() {
        let workspace = [square(0.0, 0.0, 4.0)];
        let inflated: Vec<Polygon> = workspace
            .iter()
            .map(|o| InflatePolygon::new(o, 1.0).execute().unwrap())
            .collect();
        let edges = BuildVisibilityGraph::new(&inflated)
            .with_query(p(-2.0, 2.0), p(6.0, 2.0))
            .execute()
            .unwrap();
        assert!(has_edge(&edges, p(-2.0, 2.0), p(-1.0, 4.0)));
        assert!(has_edge(&edges, p(-2.0, 2.0), p(-1.0, 0.0)));
        assert!(!has_edge(&edges, p(-2.0, 2.0), p(6.0, 2.0)));
        assert!(!has_edge(&edges, p(-2.0, 2.0), p(0.0, 5.0)));
    }

    #[test]
    fn rejects_empty_obstacles_and_bad_shrink() {
        let err = BuildVisibilityGraph::new(&[]).execute().unwrap_err();
        assert!(err.is_invalid_input());

        let obstacles = vec![square(0.0, 0.0, 1.0)];
        assert!(BuildVisibilityGraph::new(&obstacles)
            .with_shrink_factor(1.0)
            .execute()
            .is_err());
        assert!(BuildVisibilityGraph::new(&obstacles)
            .with_query(p(f64::NAN, 0.0), p(3.0, 3.0))
            .execute()
            .is_err());
    }
}
