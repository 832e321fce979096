use std::collections::HashMap;

use petgraph::graph::{NodeIndex, UnGraph};
use petgraph::visit::EdgeRef;

use crate::geometry::Segment;
use crate::math::{vertex_key, Point2};

/// Undirected, weighted visibility graph.
///
/// Vertices are points identified by exact coordinates; every segment is
/// stored once and traversable in both directions. Vertex indices follow
/// insertion order, so traversals are deterministic for a given input.
#[derive(Debug, Clone, Default)]
pub struct VisibilityGraph {
    graph: UnGraph<Point2, f64>,
    index: HashMap<(u64, u64), NodeIndex>,
}

impl VisibilityGraph {
    /// Creates an empty graph.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a graph from a list of accepted segments.
    ///
    /// Repeated segments (in either direction) are stored once.
    #[must_use]
    pub fn from_segments(segments: &[Segment]) -> Self {
        let mut graph = Self::new();
        for s in segments {
            graph.add_segment(s);
        }
        graph
    }

    /// Inserts `p` if missing and returns its index.
    pub fn add_vertex(&mut self, p: Point2) -> NodeIndex {
        *self
            .index
            .entry(vertex_key(&p))
            .or_insert_with(|| self.graph.add_node(p))
    }

    /// Inserts a segment, adding its endpoints as needed.
    ///
    /// Returns `false` if the same unordered pair was already present.
    pub fn add_segment(&mut self, segment: &Segment) -> bool {
        let a = self.add_vertex(segment.a());
        let b = self.add_vertex(segment.b());
        if self.graph.find_edge(a, b).is_some() {
            return false;
        }
        self.graph.add_edge(a, b, segment.weight());
        true
    }

    /// Number of vertices.
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.graph.node_count()
    }

    /// Number of undirected edges.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Returns `true` if `p` is a vertex.
    #[must_use]
    pub fn contains(&self, p: &Point2) -> bool {
        self.index.contains_key(&vertex_key(p))
    }

    /// All vertices in insertion order.
    pub fn vertices(&self) -> impl Iterator<Item = Point2> + '_ {
        self.graph.node_weights().copied()
    }

    /// Neighbors of `p` with edge weights. Empty if `p` is not a vertex.
    #[must_use]
    pub fn neighbors(&self, p: &Point2) -> Vec<(Point2, f64)> {
        let Some(node) = self.node(p) else {
            return Vec::new();
        };
        self.graph
            .edges(node)
            .map(|e| {
                let other = if e.source() == node { e.target() } else { e.source() };
                (self.graph[other], *e.weight())
            })
            .collect()
    }

    /// Weight of the edge between `a` and `b`, if they are adjacent.
    #[must_use]
    pub fn weight(&self, a: &Point2, b: &Point2) -> Option<f64> {
        let (a, b) = (self.node(a)?, self.node(b)?);
        self.graph
            .find_edge(a, b)
            .and_then(|e| self.graph.edge_weight(e))
            .copied()
    }

    pub(crate) fn node(&self, p: &Point2) -> Option<NodeIndex> {
        self.index.get(&vertex_key(p)).copied()
    }

    pub(crate) fn inner(&self) -> &UnGraph<Point2, f64> {
        &self.graph
    }
}
