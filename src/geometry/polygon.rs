use crate::error::{GeometryError, Result};
use crate::math::intersect_2d::{orientation, Orientation};
use crate::math::polygon_2d::{
    area_tolerance, centroid, has_crossing_edges, inset_toward, point_in_polygon, scale_about,
    segment_intersects_polygon, signed_area,
};
use crate::math::Point2;

use super::Aabb2;

/// A simple closed polygon in the plane.
///
/// Holds at least 3 distinct vertices with non-zero area and no crossing
/// edges. The boundary is implicitly closed: the last vertex connects back
/// to the first. Vertex order is kept as given.
#[derive(Debug, Clone, PartialEq)]
pub struct Polygon {
    vertices: Vec<Point2>,
}

impl Polygon {
    /// Creates a polygon from its boundary vertices.
    ///
    /// Consecutive repeated vertices are collapsed, and a trailing vertex
    /// equal to the first one is treated as an explicit closing point and
    /// dropped.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::Degenerate` if a coordinate is not finite, if
    /// fewer than 3 distinct vertices are given, if two non-adjacent edges
    /// touch or cross, or if the area is zero relative to the polygon's
    /// extent.
    pub fn new(mut vertices: Vec<Point2>) -> Result<Self> {
        vertices.dedup();
        if vertices.len() > 1 && vertices.first() == vertices.last() {
            vertices.pop();
        }

        if let Some(bad) = vertices
            .iter()
            .find(|p| !p.x.is_finite() || !p.y.is_finite())
        {
            return Err(GeometryError::Degenerate(format!(
                "non-finite polygon vertex ({}, {})",
                bad.x, bad.y
            ))
            .into());
        }

        let mut distinct: Vec<Point2> = Vec::with_capacity(vertices.len());
        for v in &vertices {
            if !distinct.contains(v) {
                distinct.push(*v);
            }
        }
        if distinct.len() < 3 {
            return Err(GeometryError::Degenerate(format!(
                "polygon needs at least 3 distinct vertices, got {}",
                distinct.len()
            ))
            .into());
        }

        if has_crossing_edges(&vertices) {
            return Err(
                GeometryError::Degenerate("polygon boundary intersects itself".to_owned()).into(),
            );
        }

        if signed_area(&vertices).abs() <= area_tolerance(&vertices) {
            return Err(GeometryError::Degenerate("polygon has zero area".to_owned()).into());
        }

        Ok(Self { vertices })
    }

    /// Creates a polygon from `(x, y)` coordinate pairs.
    ///
    /// # Errors
    ///
    /// See [`Polygon::new`].
    pub fn from_coords(coords: &[(f64, f64)]) -> Result<Self> {
        Self::new(coords.iter().map(|&(x, y)| Point2::new(x, y)).collect())
    }

    /// Boundary vertices in order.
    #[must_use]
    pub fn vertices(&self) -> &[Point2] {
        &self.vertices
    }

    /// Number of boundary vertices.
    #[must_use]
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    /// Always `false`; a valid polygon has at least 3 vertices.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Iterates over boundary edges as consecutive vertex pairs, including
    /// the closing edge from the last vertex to the first.
    pub fn edges(&self) -> impl Iterator<Item = (Point2, Point2)> + '_ {
        let n = self.vertices.len();
        (0..n).map(move |i| (self.vertices[i], self.vertices[(i + 1) % n]))
    }

    /// Signed area: positive for counter-clockwise winding.
    #[must_use]
    pub fn signed_area(&self) -> f64 {
        signed_area(&self.vertices)
    }

    /// Absolute enclosed area.
    #[must_use]
    pub fn area(&self) -> f64 {
        self.signed_area().abs()
    }

    /// Area centroid.
    #[must_use]
    pub fn centroid(&self) -> Point2 {
        // Non-zero area is a construction invariant.
        centroid(&self.vertices).unwrap_or(self.vertices[0])
    }

    /// Returns a copy scaled about the centroid by `factor`.
    ///
    /// `factor < 1` shrinks the polygon toward its centroid.
    #[must_use]
    pub fn scaled(&self, factor: f64) -> Self {
        Self {
            vertices: scale_about(&self.vertices, &self.centroid(), factor),
        }
    }

    /// Returns a copy with every vertex moved toward the centroid by
    /// `fraction` of its distance, capped at `max_distance`.
    ///
    /// Unlike [`Polygon::scaled`], the inward move stays bounded for
    /// elongated polygons.
    #[must_use]
    pub fn shrunk(&self, fraction: f64, max_distance: f64) -> Self {
        Self {
            vertices: inset_toward(&self.vertices, &self.centroid(), fraction, max_distance),
        }
    }

    /// Axis-aligned bounding box.
    #[must_use]
    pub fn bounding_box(&self) -> Aabb2 {
        Aabb2::from_points(&self.vertices).unwrap_or(Aabb2 {
            min: self.vertices[0],
            max: self.vertices[0],
        })
    }

    /// Returns `true` if `p` is inside or on the boundary.
    #[must_use]
    pub fn contains_point(&self, p: &Point2) -> bool {
        point_in_polygon(p, &self.vertices)
    }

    /// Returns `true` if every vertex of `other` is inside or on this polygon.
    ///
    /// Exact region containment when `self` is convex.
    #[must_use]
    pub fn contains_polygon(&self, other: &Polygon) -> bool {
        other.vertices.iter().all(|v| self.contains_point(v))
    }

    /// Returns `true` if the closed segment `a`–`b` touches the closed region.
    #[must_use]
    pub fn intersects_segment(&self, a: &Point2, b: &Point2) -> bool {
        segment_intersects_polygon(a, b, &self.vertices)
    }

    /// Returns `true` if every turn along the boundary has the same sense.
    #[must_use]
    pub fn is_convex(&self) -> bool {
        let n = self.vertices.len();
        let mut sense = Orientation::Collinear;
        for i in 0..n {
            let turn = orientation(
                &self.vertices[i],
                &self.vertices[(i + 1) % n],
                &self.vertices[(i + 2) % n],
            );
            if turn == Orientation::Collinear {
                continue;
            }
            if sense == Orientation::Collinear {
                sense = turn;
            } else if turn != sense {
                return false;
            }
        }
        true
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::math::TOLERANCE;

    fn square(size: f64) -> Polygon {
        Polygon::from_coords(&[(0.0, 0.0), (size, 0.0), (size, size), (0.0, size)]).unwrap()
    }

    #[test]
    fn rejects_too_few_vertices() {
        let err = Polygon::from_coords(&[(0.0, 0.0), (1.0, 0.0), (1.0, 0.0)]).unwrap_err();
        assert!(err.is_invalid_input());
        assert!(Polygon::new(Vec::new()).is_err());
    }

    #[test]
    fn rejects_zero_area() {
        let err = Polygon::from_coords(&[(0.0, 0.0), (1.0, 1.0), (2.0, 2.0)]).unwrap_err();
        assert!(err.to_string().contains("zero area"), "{err}");
    }

    #[test]
    fn rejects_self_intersection() {
        let err = Polygon::from_coords(&[(0.0, 0.0), (3.0, 2.0), (3.0, 0.0), (0.0, 1.0)])
            .unwrap_err();
        assert!(err.is_invalid_input());
        assert!(err.to_string().contains("intersects itself"), "{err}");

        // Symmetric bowtie: zero net area, reported as a crossing.
        let err = Polygon::from_coords(&[(0.0, 0.0), (2.0, 2.0), (2.0, 0.0), (0.0, 2.0)])
            .unwrap_err();
        assert!(err.to_string().contains("intersects itself"), "{err}");
    }

    #[test]
    fn accepts_tiny_triangle() {
        let tiny = Polygon::from_coords(&[(0.0, 0.0), (1e-5, 0.0), (0.0, 1e-5)]).unwrap();
        assert!((tiny.area() - 5e-11).abs() < 1e-20);
        let c = tiny.centroid();
        assert!(c.x > 0.0 && c.y > 0.0);
    }

    #[test]
    fn collapses_repeated_vertices() {
        let p = Polygon::from_coords(&[(0.0, 0.0), (2.0, 0.0), (2.0, 0.0), (2.0, 2.0)]).unwrap();
        assert_eq!(p.len(), 3);
    }

    #[test]
    fn rejects_non_finite() {
        assert!(Polygon::from_coords(&[(0.0, 0.0), (f64::NAN, 0.0), (1.0, 1.0)]).is_err());
    }

    #[test]
    fn drops_explicit_closing_vertex() {
        let p = Polygon::from_coords(&[(0.0, 0.0), (4.0, 0.0), (4.0, 4.0), (0.0, 0.0)]).unwrap();
        assert_eq!(p.len(), 3);
    }

    #[test]
    fn edges_close_the_ring() {
        let p = square(4.0);
        let edges: Vec<_> = p.edges().collect();
        assert_eq!(edges.len(), 4);
        assert_eq!(edges[3], (Point2::new(0.0, 4.0), Point2::new(0.0, 0.0)));
    }

    #[test]
    fn centroid_and_scaling() {
        let p = square(4.0);
        let c = p.centroid();
        assert!((c.x - 2.0).abs() < TOLERANCE && (c.y - 2.0).abs() < TOLERANCE);

        let shrunk = p.scaled(0.5);
        assert!((shrunk.area() - 4.0).abs() < TOLERANCE);
        assert!(p.contains_polygon(&shrunk));
        assert!(!shrunk.contains_polygon(&p));
    }

    #[test]
    fn shrink_is_bounded_for_long_polygons() {
        let long = Polygon::from_coords(&[(0.0, 0.0), (100.0, 0.0), (100.0, 1.0), (0.0, 1.0)])
            .unwrap();
        let shrunk = long.shrunk(0.01, 1e-6);
        assert!(long.contains_polygon(&shrunk));
        for (before, after) in long.vertices().iter().zip(shrunk.vertices()) {
            assert!((*after - *before).norm() <= 1e-6 + 1e-12);
        }
        // The end caps stay put, so a crossing near an end still hits.
        assert!(shrunk.intersects_segment(&Point2::new(0.25, -5.0), &Point2::new(0.25, 6.0)));
        assert!(!long
            .scaled(0.99)
            .intersects_segment(&Point2::new(0.25, -5.0), &Point2::new(0.25, 6.0)));
    }

    #[test]
    fn bounding_box_of_square() {
        let bbox = square(3.0).bounding_box();
        assert_eq!(bbox.min, Point2::new(0.0, 0.0));
        assert_eq!(bbox.max, Point2::new(3.0, 3.0));
    }

    #[test]
    fn convexity() {
        assert!(square(1.0).is_convex());
        let l_shape = Polygon::from_coords(&[
            (0.0, 0.0),
            (2.0, 0.0),
            (2.0, 1.0),
            (1.0, 1.0),
            (1.0, 2.0),
            (0.0, 2.0),
        ])
        .unwrap();
        assert!(!l_shape.is_convex());
    }

    #[test]
    fn segment_queries() {
        let p = square(2.0);
        assert!(p.intersects_segment(&Point2::new(-1.0, 1.0), &Point2::new(3.0, 1.0)));
        assert!(!p.intersects_segment(&Point2::new(-1.0, 3.0), &Point2::new(3.0, 3.0)));
        assert!(p.contains_point(&Point2::new(1.0, 1.0)));
    }
}
