use tracing::{debug, info, info_span};

use crate::config::PlannerConfig;
use crate::error::Result;
use crate::geometry::{Polygon, Segment};
use crate::graph::VisibilityGraph;
use crate::math::Point2;
use crate::operations::{BuildVisibilityGraph, InflatePolygon, PlannedPath, ShortestPath};

/// Output of the obstacle-only pass.
#[derive(Debug, Clone)]
pub struct Preview {
    /// Configuration-space obstacles, one per workspace obstacle.
    pub inflated: Vec<Polygon>,
    /// Visibility edges between inflated obstacle vertices.
    pub edges: Vec<Segment>,
}

/// Output of a full planning query.
#[derive(Debug, Clone)]
pub struct PlanResult {
    /// Configuration-space obstacles, one per workspace obstacle.
    pub inflated: Vec<Polygon>,
    /// Visibility edges including the source and destination.
    pub edges: Vec<Segment>,
    /// Shortest path from source to destination.
    pub path: PlannedPath,
}

/// Runs the inflate → visibility → shortest-path pipeline.
#[derive(Debug, Clone, Default)]
pub struct Planner {
    config: PlannerConfig,
}

impl Planner {
    /// Creates a planner with the given configuration.
    #[must_use]
    pub fn new(config: PlannerConfig) -> Self {
        Self { config }
    }

    /// The active configuration.
    #[must_use]
    pub fn config(&self) -> &PlannerConfig {
        &self.config
    }

    /// Inflates every workspace obstacle by `radius`.
    ///
    /// # Errors
    ///
    /// Propagates the first inflation error.
    pub fn inflate(&self, obstacles: &[Polygon], radius: f64) -> Result<Vec<Polygon>> {
        let inflated = obstacles
            .iter()
            .map(|o| {
                InflatePolygon::new(o, radius)
                    .with_footprint(self.config.footprint)
                    .execute()
            })
            .collect::<Result<Vec<_>>>()?;
        debug!(count = inflated.len(), radius, "obstacles inflated");
        Ok(inflated)
    }

    /// Obstacle-only pass: inflation plus visibility edges without a query.
    ///
    /// # Errors
    ///
    /// Propagates inflation and visibility errors.
    pub fn preview(&self, obstacles: &[Polygon], radius: f64) -> Result<Preview> {
        let _span = info_span!("preview", obstacles = obstacles.len()).entered();
        let inflated = self.inflate(obstacles, radius)?;
        let edges = BuildVisibilityGraph::new(&inflated)
            .with_shrink_factor(self.config.shrink_factor)
            .execute()?;
        Ok(Preview { inflated, edges })
    }

    /// Plans a shortest collision-free path for a robot of `radius` from
    /// `source` to `destination`.
    ///
    /// # Errors
    ///
    /// - invalid-input errors for degenerate obstacles, a negative radius or
    ///   an empty obstacle set
    /// - `OperationError::Unreachable` if no path exists
    pub fn plan(
        &self,
        obstacles: &[Polygon],
        source: Point2,
        radius: f64,
        destination: Point2,
    ) -> Result<PlanResult> {
        let _span = info_span!("plan", obstacles = obstacles.len()).entered();

        let inflated = self.inflate(obstacles, radius)?;
        let edges = BuildVisibilityGraph::new(&inflated)
            .with_query(source, destination)
            .with_shrink_factor(self.config.shrink_factor)
            .execute()?;

        // Query points without any visible neighbor still become vertices, so
        // an enclosed destination reports as unreachable.
        let mut graph = VisibilityGraph::from_segments(&edges);
        graph.add_vertex(source);
        graph.add_vertex(destination);
        let path = ShortestPath::new(&graph, source, destination).execute()?;

        info!(points = path.len(), cost = path.cost, "path planned");
        Ok(PlanResult {
            inflated,
            edges,
            path,
        })
    }
}
