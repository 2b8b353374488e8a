//! Monotone chain extraction: decomposing a balanced, regular oriented
//! PSLG into a left-to-right sequence of paths from the global minimum
//! to the global maximum, each carrying exactly the unit flow the
//! balancing pass assigned it (spec §4.D, §4.E).

use crate::error::{Error, Result};
use crate::geom::Point;
use crate::graph::{EdgeLike, OrientedEdge, OrientedPlanarStraightLineGraph};

/// A single monotone chain: an ordered sequence of edges from the
/// graph's global minimum node to its global maximum node.
pub type Chain = Vec<OrientedEdge>;

/// The first outward edge at `node`, in the outward sort order, whose
/// remaining weight (flow capacity) is still positive.
pub fn leftmost_available_outward_edge(node: &Point, graph: &OrientedPlanarStraightLineGraph) -> Option<OrientedEdge> {
    graph.outward_edges(node).into_iter().find(|edge| edge.weight() > 0.0)
}

/// Peels `graph`'s outward flow into monotone chains, left to right,
/// consuming one unit of weight per edge used (spec §4.D). `nodes` must
/// be sorted bottom-to-top by `(y, x)`; its first and last entries are
/// the graph's global minimum and maximum.
pub fn construct_monotone_chains(graph: &OrientedPlanarStraightLineGraph, nodes: &[Point]) -> Result<Vec<Chain>> {
    let first_node = nodes.first().ok_or_else(|| Error::validation_failure("cannot extract chains from an empty node list"))?;
    let last_node = nodes.last().expect("checked non-empty above");

    let mut chains = Vec::new();

    while let Some(starting_edge) = leftmost_available_outward_edge(first_node, graph) {
        let mut chain: Chain = vec![starting_edge.clone()];

        let mut node = starting_edge.second().clone();
        while node != *last_node {
            let edge = leftmost_available_outward_edge(&node, graph)
                .ok_or_else(|| Error::domain_failure(format!("no available outward edge at {node} while extracting a monotone chain")))?;
            chain.push(edge.clone());
            edge.add_weight(-1.0);
            node = edge.second().clone();
        }

        starting_edge.add_weight(-1.0);
        chains.push(chain);
    }

    Ok(chains)
}
