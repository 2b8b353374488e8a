//! Weight balancing: after regularization gives every non-extremal node
//! at least one inward and one outward edge, two sweeps make inflow and
//! outflow equal at every node by pushing any surplus onto that node's
//! first inward/outward edge (spec §4.D).

use crate::geom::Point;
use crate::graph::OrientedPlanarStraightLineGraph;

/// Pushes any inflow surplus at each node (bottom to top) onto its
/// first outward edge.
pub fn balance_bottom_to_top(graph: &OrientedPlanarStraightLineGraph, nodes: &[Point]) {
    for node in nodes {
        let inward_edges = graph.inward_edges(node);
        let outward_edges = graph.outward_edges(node);

        let weight_in: f64 = inward_edges.iter().map(|e| e.weight()).sum();
        let weight_out: f64 = outward_edges.iter().map(|e| e.weight()).sum();

        if let Some(first_outward) = outward_edges.first() {
            if weight_in > weight_out {
                first_outward.add_weight(weight_in - weight_out);
            }
        }
    }
}

/// Pushes any outflow surplus at each node (top to bottom) onto its
/// first inward edge.
pub fn balance_top_to_bottom(graph: &OrientedPlanarStraightLineGraph, nodes: &[Point]) {
    for node in nodes {
        let inward_edges = graph.inward_edges(node);
        let outward_edges = graph.outward_edges(node);

        let weight_in: f64 = inward_edges.iter().map(|e| e.weight()).sum();
        let weight_out: f64 = outward_edges.iter().map(|e| e.weight()).sum();

        if let Some(first_inward) = inward_edges.first() {
            if weight_out > weight_in {
                first_inward.add_weight(weight_out - weight_in);
            }
        }
    }
}
