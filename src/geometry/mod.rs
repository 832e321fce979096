pub mod aabb;
pub mod polygon;
pub mod segment;

pub use aabb::Aabb2;
pub use polygon::Polygon;
pub use segment::Segment;
