use std::cmp::Ordering;
use std::collections::BinaryHeap;

use petgraph::graph::NodeIndex;
use petgraph::visit::EdgeRef;
use tracing::{debug, warn};

use crate::error::{ClearpathError, OperationError, Result};
use crate::geometry::Segment;
use crate::graph::VisibilityGraph;
use crate::math::Point2;

/// A path through the visibility graph together with its total cost.
#[derive(Debug, Clone, PartialEq)]
pub struct PlannedPath {
    /// Points from source to destination.
    pub points: Vec<Point2>,
    /// Sum of the edge weights along the path.
    pub cost: f64,
}

impl PlannedPath {
    /// Number of points on the path.
    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Returns `true` if the path has no points.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// The consecutive steps of the path.
    pub fn segments(&self) -> impl Iterator<Item = Segment> + '_ {
        self.points.windows(2).map(|w| Segment::new(w[0], w[1]))
    }
}

/// Entry in the Dijkstra frontier.
#[derive(Debug, Clone, Copy)]
struct Frontier {
    cost: f64,
    node: NodeIndex,
}

impl Eq for Frontier {}

impl PartialEq for Frontier {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Ord for Frontier {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reversed for min-heap behavior; ties go to the earlier vertex.
        other
            .cost
            .total_cmp(&self.cost)
            .then_with(|| other.node.index().cmp(&self.node.index()))
    }
}

impl PartialOrd for Frontier {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Finds the minimum-cost path between two vertices of a visibility graph
/// (Dijkstra).
///
/// The search stops as soon as the destination is settled. Ties between
/// equally distant vertices are broken by vertex insertion order, so a
/// given graph always yields the same path.
#[derive(Debug)]
pub struct ShortestPath<'a> {
    graph: &'a VisibilityGraph,
    source: Point2,
    destination: Point2,
}

impl<'a> ShortestPath<'a> {
    /// Creates a new shortest-path query.
    #[must_use]
    pub fn new(graph: &'a VisibilityGraph, source: Point2, destination: Point2) -> Self {
        Self {
            graph,
            source,
            destination,
        }
    }

    /// Executes the search.
    ///
    /// # Errors
    ///
    /// - `OperationError::InvalidInput` if source or destination is not a
    ///   vertex of the graph
    /// - `OperationError::Unreachable` if no path connects them
    pub fn execute(&self) -> Result<PlannedPath> {
        let src = self.vertex(&self.source, "source")?;
        let dst = self.vertex(&self.destination, "destination")?;

        if src == dst {
            return Ok(PlannedPath {
                points: vec![self.source],
                cost: 0.0,
            });
        }

        let graph = self.graph.inner();
        let n = graph.node_count();
        let mut dist = vec![f64::INFINITY; n];
        let mut prev: Vec<Option<NodeIndex>> = vec![None; n];
        let mut settled = vec![false; n];
        let mut heap = BinaryHeap::new();

        dist[src.index()] = 0.0;
        heap.push(Frontier {
            cost: 0.0,
            node: src,
        });

        while let Some(Frontier { cost, node }) = heap.pop() {
            if settled[node.index()] {
                continue;
            }
            settled[node.index()] = true;
            if node == dst {
                break;
            }

            for edge in graph.edges(node) {
                let next = if edge.source() == node {
                    edge.target()
                } else {
                    edge.source()
                };
                if settled[next.index()] {
                    continue;
                }
                let candidate = cost + *edge.weight();
                if candidate < dist[next.index()] {
                    dist[next.index()] = candidate;
                    prev[next.index()] = Some(node);
                    heap.push(Frontier {
                        cost: candidate,
                        node: next,
                    });
                }
            }
        }

        if !settled[dst.index()] {
            warn!(
                source = ?self.source,
                destination = ?self.destination,
                "destination not reachable"
            );
            return Err(self.unreachable());
        }

        // Walk predecessors back to the source; a chain never exceeds n nodes.
        let mut chain = vec![dst];
        let mut current = dst;
        while current != src {
            match prev[current.index()] {
                Some(p) if chain.len() <= n => {
                    chain.push(p);
                    current = p;
                }
                _ => return Err(self.unreachable()),
            }
        }
        chain.reverse();

        let path = PlannedPath {
            points: chain.iter().map(|&i| graph[i]).collect(),
            cost: dist[dst.index()],
        };
        debug!(points = path.len(), cost = path.cost, "shortest path found");
        Ok(path)
    }

    fn vertex(&self, p: &Point2, role: &str) -> Result<NodeIndex> {
        self.graph.node(p).ok_or_else(|| {
            OperationError::InvalidInput(format!(
                "{role} ({}, {}) is not a vertex of the visibility graph",
                p.x, p.y
            ))
            .into()
        })
    }

    fn unreachable(&self) -> ClearpathError {
        OperationError::Unreachable {
            from: self.source,
            to: self.destination,
        }
        .into()
    }
}
