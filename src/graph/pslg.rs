//! The undirected planar straight-line graph: the raw input shape this
//! crate's pipeline consumes before orienting it (spec §4.B).

use std::collections::HashSet;
use std::hash::{Hash, Hasher};

use crate::error::{Error, Result};
use crate::geom::{by_y_then_x, Point};
use crate::graph::edge::{sort_ascending_polar, sort_descending_polar, EdgeLike};

/// An undirected edge between two points. Equality is *unordered*
/// (either endpoint assignment matches); hash mixes both endpoints
/// symmetrically plus the weight (spec §3) — name is neither compared
/// nor hashed, matching its role as a display label only.
#[derive(Debug, Clone)]
pub struct PslgEdge {
    first: Point,
    second: Point,
    weight: f64,
    name: Option<String>,
}

impl PslgEdge {
    pub fn new(first: Point, second: Point) -> Self {
        PslgEdge { first, second, weight: 0.0, name: None }
    }

    pub fn with_weight(first: Point, second: Point, weight: f64) -> Self {
        PslgEdge { first, second, weight, name: None }
    }

    pub fn named(first: Point, second: Point, name: impl Into<String>) -> Self {
        PslgEdge { first, second, weight: 0.0, name: Some(name.into()) }
    }

    pub fn weight(&self) -> f64 {
        self.weight
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn reversed(&self) -> Self {
        PslgEdge { first: self.second.clone(), second: self.first.clone(), weight: self.weight, name: self.name.clone() }
    }
}

impl EdgeLike for PslgEdge {
    fn first(&self) -> &Point {
        &self.first
    }
    fn second(&self) -> &Point {
        &self.second
    }
}

impl PartialEq for PslgEdge {
    fn eq(&self, other: &Self) -> bool {
        (self.first == other.first && self.second == other.second)
            || (self.first == other.second && self.second == other.first)
    }
}
impl Eq for PslgEdge {}

impl Hash for PslgEdge {
    fn hash<H: Hasher>(&self, state: &mut H) {
        // XOR of the two directions' hashes makes the combination
        // order-independent, matching the unordered equality above.
        let mut ha = std::collections::hash_map::DefaultHasher::new();
        self.first.hash(&mut ha);
        self.second.hash(&mut ha);
        let forward = ha.finish();

        let mut hb = std::collections::hash_map::DefaultHasher::new();
        self.second.hash(&mut hb);
        self.first.hash(&mut hb);
        let backward = hb.finish();

        (forward ^ backward).hash(state);
        self.weight.to_bits().hash(state);
    }
}

/// An undirected planar straight-line graph: a node set plus an edge
/// set, with the invariant that every edge's endpoints are members of
/// the node set (adding an edge through [`add_edge`](Self::add_edge)
/// maintains this automatically by inserting endpoints; constructing
/// directly from mismatched sets is a [`Error::Validation`]).
#[derive(Debug, Clone, Default)]
pub struct PlanarStraightLineGraph {
    nodes: HashSet<Point>,
    edges: HashSet<PslgEdge>,
}

impl PlanarStraightLineGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a graph from explicit node and edge sets, failing if any
    /// edge references a node absent from `nodes`.
    pub fn from_nodes_edges(nodes: HashSet<Point>, edges: HashSet<PslgEdge>) -> Result<Self> {
        for edge in &edges {
            if !nodes.contains(&edge.first) || !nodes.contains(&edge.second) {
                return Err(Error::validation_failure("edge references a node absent from the node set"));
            }
        }
        Ok(PlanarStraightLineGraph { nodes, edges })
    }

    pub fn nodes(&self) -> &HashSet<Point> {
        &self.nodes
    }

    pub fn edges(&self) -> &HashSet<PslgEdge> {
        &self.edges
    }

    pub fn add_node(&mut self, node: Point) {
        self.nodes.insert(node);
    }

    /// Adds `edge`, auto-inserting its endpoints. A no-op if the
    /// reversed edge (hence, by unordered equality, this edge) is
    /// already present.
    pub fn add_edge(&mut self, edge: PslgEdge) {
        if !self.edges.contains(&edge) {
            self.nodes.insert(edge.first.clone());
            self.nodes.insert(edge.second.clone());
            self.edges.insert(edge);
        }
    }

    pub fn has_node(&self, node: &Point) -> bool {
        self.nodes.contains(node)
    }

    pub fn has_edge(&self, edge: &PslgEdge) -> bool {
        self.edges.contains(edge)
    }

    pub fn remove_node(&mut self, node: &Point) {
        self.nodes.remove(node);
        self.edges.retain(|e| e.first != *node && e.second != *node);
    }

    pub fn remove_edge(&mut self, edge: &PslgEdge) {
        self.edges.remove(edge);
    }

    pub fn edges_of(&self, node: &Point) -> Vec<PslgEdge> {
        self.edges.iter().filter(|e| e.first == *node || e.second == *node).cloned().collect()
    }

    /// Edges at `node` whose *upper* endpoint (by `(y, x)`) is `node`,
    /// sorted ascending by nonnegative polar angle of the other end.
    pub fn inward_edges(&self, node: &Point) -> Vec<PslgEdge> {
        let inward: Vec<PslgEdge> = self
            .edges_of(node)
            .into_iter()
            .filter(|e| {
                let upper = if by_y_then_x(&e.first) >= by_y_then_x(&e.second) { &e.first } else { &e.second };
                upper == node
            })
            .collect();
        sort_ascending_polar(node, inward)
    }

    /// Edges at `node` whose *lower* endpoint (by `(y, x)`) is `node`,
    /// sorted descending by (signed) polar angle of the other end.
    pub fn outward_edges(&self, node: &Point) -> Vec<PslgEdge> {
        let outward: Vec<PslgEdge> = self
            .edges_of(node)
            .into_iter()
            .filter(|e| {
                let lower = if by_y_then_x(&e.first) <= by_y_then_x(&e.second) { &e.first } else { &e.second };
                lower == node
            })
            .collect();
        sort_descending_polar(node, outward)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(x: f64, y: f64) -> Point {
        Point::new(vec![x, y])
    }

    #[test]
    fn edge_equality_is_symmetric() {
        let e1 = PslgEdge::new(p(1.0, 1.0), p(2.0, 2.0));
        let e2 = PslgEdge::new(p(2.0, 2.0), p(1.0, 1.0));
        assert_eq!(e1, e2);
    }

    #[test]
    fn graph_creation_rejects_dangling_edge() {
        let nodes: HashSet<Point> = [p(1.0, 1.0), p(2.0, 2.0)].into_iter().collect();
        let edges: HashSet<PslgEdge> = [PslgEdge::new(p(100.0, 100.0), p(2.0, 2.0))].into_iter().collect();
        assert!(PlanarStraightLineGraph::from_nodes_edges(nodes, edges).is_err());
    }

    #[test]
    fn add_edge_auto_inserts_endpoints() {
        let mut g = PlanarStraightLineGraph::new();
        g.add_edge(PslgEdge::new(p(1.0, 1.0), p(2.0, 2.0)));
        assert!(g.has_node(&p(1.0, 1.0)));
        assert!(g.has_node(&p(2.0, 2.0)));
    }

    #[test]
    fn remove_node_cascades_to_incident_edges() {
        let mut g = PlanarStraightLineGraph::new();
        g.add_edge(PslgEdge::new(p(1.0, 1.0), p(2.0, 2.0)));
        g.remove_node(&p(1.0, 1.0));
        assert!(g.edges().is_empty());
    }

    #[test]
    fn inward_and_outward_split_by_upper_lower_endpoint() {
        // A "diamond" node with four incident edges.
        let center = p(3.0, 3.0);
        let below = [p(1.0, 3.0), p(2.0, 1.0), p(3.0, 1.0), p(5.0, 2.0)];
        let above = [p(0.0, 4.0), p(3.0, 5.0), p(5.0, 5.0), p(5.0, 3.0)];
        let mut g = PlanarStraightLineGraph::new();
        for n in below.iter().chain(above.iter()) {
            g.add_edge(PslgEdge::new(center.clone(), n.clone()));
        }
        assert_eq!(g.inward_edges(&center).len(), 4);
        assert_eq!(g.outward_edges(&center).len(), 4);
    }
}
