//! Sweep-line regularization of an oriented PSLG: every node except the
//! global minimum gets an inward edge, every node except the global
//! maximum gets an outward edge, by inserting "regularizing" edges
//! where the sweep finds a gap (spec §4.C).
//!
//! Both sweeps maintain a `swept_edges` list ordered left-to-right by
//! where they currently cross the sweep line, and splice it at the
//! index where the current node's inward (bottom-up) or outward
//! (top-down) edges sit — mirroring the source's list-slice approach
//! instead of reaching for an interval tree, since the number of edges
//! crossing the sweep line at once is small for this crate's inputs.

use crate::geom::{by_y_then_x, orient, Orientation, Point};
use crate::graph::{EdgeLike, OrientedEdge, OrientedPlanarStraightLineGraph};

/// Runs both sweeps in place: bottom-up first (fills missing inward
/// edges), then top-down (fills missing outward edges).
pub fn regularize(graph: &mut OrientedPlanarStraightLineGraph) {
    let mut nodes_bottom_to_top: Vec<Point> = graph.nodes().iter().cloned().collect();
    nodes_bottom_to_top.sort_by(|a, b| by_y_then_x(a).partial_cmp(&by_y_then_x(b)).unwrap());
    regularize_bottom_to_top(graph, &nodes_bottom_to_top);

    let nodes_top_to_bottom: Vec<Point> = nodes_bottom_to_top.into_iter().rev().collect();
    regularize_top_to_bottom(graph, &nodes_top_to_bottom);
}

fn insertion_index_by_current_node(node: &Point, swept_edges: &[OrientedEdge]) -> usize {
    for (i, edge) in swept_edges.iter().enumerate() {
        let turn = orient(edge.first(), edge.second(), node);
        if turn == Orientation::Left || (turn == Orientation::Straight && *node < *edge.first()) {
            return i;
        }
    }
    swept_edges.len()
}

fn outward_insertion_index(node: &Point, swept_edges: &[OrientedEdge], inward_edges: &[OrientedEdge]) -> usize {
    match inward_edges.first() {
        Some(first) => swept_edges.iter().position(|e| e == first).unwrap_or_else(|| insertion_index_by_current_node(node, swept_edges)),
        None => insertion_index_by_current_node(node, swept_edges),
    }
}

fn inward_insertion_index(node: &Point, swept_edges: &[OrientedEdge], outward_edges: &[OrientedEdge]) -> usize {
    match outward_edges.first() {
        Some(first) => swept_edges.iter().position(|e| e == first).unwrap_or_else(|| insertion_index_by_current_node(node, swept_edges)),
        None => insertion_index_by_current_node(node, swept_edges),
    }
}

/// The lower endpoint, between `left`/`right`, vertically closest to
/// the sweep line (i.e. the uppermost one) — see
/// `add_regularizing_inward_edge` in the source.
fn uppermost_lower_node(left: Option<&OrientedEdge>, right: Option<&OrientedEdge>) -> Point {
    match (left, right) {
        (None, Some(r)) => r.first().clone(),
        (Some(l), None) => l.first().clone(),
        (Some(l), Some(r)) => {
            if by_y_then_x(l.first()) >= by_y_then_x(r.first()) {
                l.first().clone()
            } else {
                r.first().clone()
            }
        }
        (None, None) => unreachable!("regularizing edge requested with no bracketing edge"),
    }
}

fn lowermost_upper_node(left: Option<&OrientedEdge>, right: Option<&OrientedEdge>) -> Point {
    match (left, right) {
        (None, Some(r)) => r.second().clone(),
        (Some(l), None) => l.second().clone(),
        (Some(l), Some(r)) => {
            if by_y_then_x(l.second()) <= by_y_then_x(r.second()) {
                l.second().clone()
            } else {
                r.second().clone()
            }
        }
        (None, None) => unreachable!("regularizing edge requested with no bracketing edge"),
    }
}

fn regularize_bottom_to_top(graph: &mut OrientedPlanarStraightLineGraph, nodes: &[Point]) {
    let mut swept_edges: Vec<OrientedEdge> = Vec::new();

    for (i, node) in nodes.iter().enumerate() {
        let inward_edges = graph.inward_edges(node);
        let outward_edges = graph.outward_edges(node);

        let insert_at = outward_insertion_index(node, &swept_edges, &inward_edges);

        if i != 0 && inward_edges.is_empty() {
            let left = if insert_at != 0 { swept_edges.get(insert_at - 1) } else { None };
            let right = if insert_at != swept_edges.len() { swept_edges.get(insert_at) } else { None };
            let lower = uppermost_lower_node(left, right);
            graph.add_edge(OrientedEdge::new(lower, node.clone()));
        }

        swept_edges.splice(insert_at..insert_at + inward_edges.len(), outward_edges);
    }
}

fn regularize_top_to_bottom(graph: &mut OrientedPlanarStraightLineGraph, nodes: &[Point]) {
    let mut swept_edges: Vec<OrientedEdge> = Vec::new();

    for (i, node) in nodes.iter().enumerate() {
        let inward_edges = graph.inward_edges(node);
        let outward_edges = graph.outward_edges(node);

        let insert_at = inward_insertion_index(node, &swept_edges, &outward_edges);

        if i != 0 && outward_edges.is_empty() {
            let left = if insert_at != 0 { swept_edges.get(insert_at - 1) } else { None };
            let right = if insert_at != swept_edges.len() { swept_edges.get(insert_at) } else { None };
            let upper = lowermost_upper_node(left, right);
            graph.add_edge(OrientedEdge::new(node.clone(), upper));
        }

        swept_edges.splice(insert_at..insert_at + outward_edges.len(), inward_edges);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::{PlanarStraightLineGraph, PslgEdge};

    fn p(x: f64, y: f64) -> Point {
        Point::new(vec![x, y])
    }

    #[test]
    fn already_regular_graph_is_unchanged_by_regularization() {
        // A single upward diagonal edge: both endpoints are already
        // extremal, so regularization should add nothing.
        let mut pslg = PlanarStraightLineGraph::new();
        pslg.add_edge(PslgEdge::new(p(0.0, 0.0), p(1.0, 1.0)));
        let mut oriented = OrientedPlanarStraightLineGraph::from_planar_straight_line_graph(&pslg);
        let edge_count_before = oriented.edges().len();

        regularize(&mut oriented);

        assert_eq!(oriented.edges().len(), edge_count_before);
        assert!(oriented.is_regular());
    }

    #[test]
    fn empty_graph_regularizes_to_empty() {
        let mut oriented = OrientedPlanarStraightLineGraph::new();
        regularize(&mut oriented);
        assert!(oriented.nodes().is_empty());
        assert!(oriented.edges().is_empty());
    }

    #[test]
    fn regularization_makes_a_triangle_with_a_missing_middle_connection_regular() {
        // Three nodes at different heights with only the long edge
        // present: the middle node has neither inward nor outward
        // edges and needs both regularizing edges added.
        let bottom = p(0.0, 0.0);
        let middle = p(1.0, 1.0);
        let top = p(2.0, 2.0);

        let mut pslg = PlanarStraightLineGraph::new();
        pslg.add_edge(PslgEdge::new(bottom.clone(), top.clone()));
        pslg.add_node(middle.clone());

        let mut oriented = OrientedPlanarStraightLineGraph::from_planar_straight_line_graph(&pslg);
        assert!(!oriented.is_regular());

        regularize(&mut oriented);

        assert!(oriented.is_regular());
        assert!(!oriented.inward_edges(&middle).is_empty());
        assert!(!oriented.outward_edges(&middle).is_empty());
    }
}
