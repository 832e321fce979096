pub mod hull_2d;
pub mod intersect_2d;
pub mod polygon_2d;

/// 2D point type.
pub type Point2 = nalgebra::Point2<f64>;

/// 2D vector type.
pub type Vector2 = nalgebra::Vector2<f64>;

/// Global geometric tolerance for floating-point comparisons.
pub const TOLERANCE: f64 = 1e-9;

/// Hashable identity of a point under exact coordinate equality.
///
/// `-0.0` and `0.0` map to the same key, matching `f64` equality.
#[must_use]
pub(crate) fn vertex_key(p: &Point2) -> (u64, u64) {
    ((p.x + 0.0).to_bits(), (p.y + 0.0).to_bits())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vertex_key_merges_signed_zero() {
        assert_eq!(
            vertex_key(&Point2::new(-0.0, 1.0)),
            vertex_key(&Point2::new(0.0, 1.0))
        );
        assert_ne!(
            vertex_key(&Point2::new(0.0, 1.0)),
            vertex_key(&Point2::new(0.0, 1.0 + 1e-12))
        );
    }
}
