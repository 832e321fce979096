mod inflate;
mod shortest_path;
mod visibility;

pub use inflate::{Footprint, InflatePolygon};
pub use shortest_path::{PlannedPath, ShortestPath};
pub use visibility::{BuildVisibilityGraph, DEFAULT_SHRINK_FACTOR, MAX_SHRINK_DISTANCE};
