//! The point-location pipeline: orient, regularize, balance, extract
//! chains, search (spec §5). Exposed as a lazy, finite, non-restartable
//! iterator of [`Snapshot`]s rather than a single function returning
//! only the final answer, so callers can inspect every intermediate
//! stage the way the system this crate implements does via its own
//! generator (spec §5, §9) — Rust has no stable generators, so this is
//! a hand-written state machine instead.

use tracing::debug;

use crate::balance::{balance_bottom_to_top, balance_top_to_bottom};
use crate::chain::{construct_monotone_chains, Chain};
use crate::error::Result;
use crate::geom::{by_y_then_x, Point};
use crate::graph::{OrientedEdge, OrientedPlanarStraightLineGraph, PlanarStraightLineGraph};
use crate::regularize::regularize;
use crate::search::{build_search_tree, search, ChainsSearchTree, PathDirection};

/// One stage's output from the point-location pipeline, in the order
/// [`ChainPipeline`] yields them.
#[derive(Debug, Clone)]
pub enum Snapshot {
    NodesBottomToTop(Vec<Point>),
    OrientedGraph(OrientedPlanarStraightLineGraph),
    InwardEdgesByNode(Vec<Vec<OrientedEdge>>),
    OutwardEdgesByNode(Vec<Vec<OrientedEdge>>),
    RegularizedGraph(OrientedPlanarStraightLineGraph),
    UnitWeightedGraph(OrientedPlanarStraightLineGraph),
    BottomUpBalancedGraph(OrientedPlanarStraightLineGraph),
    TopDownBalancedGraph(OrientedPlanarStraightLineGraph),
    MonotoneChains(Vec<Chain>),
    ChainSearchTree(ChainsSearchTree),
    SearchResult(Vec<PathDirection>, (Option<Chain>, Option<Chain>)),
}

/// Entry point: locates `point` within the planar subdivision described
/// by `pslg`, returning the lazy snapshot sequence. Nothing runs until
/// the iterator is driven.
pub fn locate(pslg: PlanarStraightLineGraph, point: Point) -> ChainPipeline {
    ChainPipeline {
        pslg,
        point,
        step: 0,
        nodes_bottom_to_top: None,
        oriented: None,
        monotone_chains: None,
        search_tree: None,
        done: false,
    }
}

pub struct ChainPipeline {
    pslg: PlanarStraightLineGraph,
    point: Point,
    step: u8,
    nodes_bottom_to_top: Option<Vec<Point>>,
    oriented: Option<OrientedPlanarStraightLineGraph>,
    monotone_chains: Option<Vec<Chain>>,
    search_tree: Option<ChainsSearchTree>,
    done: bool,
}

impl ChainPipeline {
    fn sorted_nodes(nodes: impl Iterator<Item = Point>) -> Vec<Point> {
        let mut nodes: Vec<Point> = nodes.collect();
        nodes.sort_by(|a, b| by_y_then_x(a).partial_cmp(&by_y_then_x(b)).expect("finite coordinates"));
        nodes
    }
}

impl Iterator for ChainPipeline {
    type Item = Result<Snapshot>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        let snapshot = match self.step {
            0 => {
                debug!(stage = "sort_nodes", "sorting input nodes bottom to top");
                let nodes = Self::sorted_nodes(self.pslg.nodes().iter().cloned());
                self.nodes_bottom_to_top = Some(nodes.clone());
                Ok(Snapshot::NodesBottomToTop(nodes))
            }
            1 => {
                debug!(stage = "orient", "orienting every edge from its lower endpoint");
                let oriented = OrientedPlanarStraightLineGraph::from_planar_straight_line_graph(&self.pslg);
                let snapshot = Snapshot::OrientedGraph(oriented.deep_clone());
                self.oriented = Some(oriented);
                Ok(snapshot)
            }
            2 => {
                debug!(stage = "inward_edges", "collecting inward edges per node");
                let oriented = self.oriented.as_ref().expect("oriented graph computed at step 1");
                let nodes = self.nodes_bottom_to_top.as_ref().expect("nodes computed at step 0");
                Ok(Snapshot::InwardEdgesByNode(nodes.iter().map(|n| oriented.inward_edges(n)).collect()))
            }
            3 => {
                debug!(stage = "outward_edges", "collecting outward edges per node");
                let oriented = self.oriented.as_ref().expect("oriented graph computed at step 1");
                let nodes = self.nodes_bottom_to_top.as_ref().expect("nodes computed at step 0");
                Ok(Snapshot::OutwardEdgesByNode(nodes.iter().map(|n| oriented.outward_edges(n)).collect()))
            }
            4 => {
                debug!(stage = "regularize", "regularizing the oriented graph if needed");
                let oriented = self.oriented.as_mut().expect("oriented graph computed at step 1");
                if !oriented.is_regular() {
                    regularize(oriented);
                }
                Ok(Snapshot::RegularizedGraph(oriented.deep_clone()))
            }
            5 => {
                debug!(stage = "unit_weight", "resetting every edge weight to one");
                let oriented = self.oriented.as_mut().expect("oriented graph computed at step 1");
                for edge in oriented.edges().clone() {
                    edge.set_weight(1.0);
                }
                Ok(Snapshot::UnitWeightedGraph(oriented.deep_clone()))
            }
            6 => {
                debug!(stage = "balance_bottom_up", "balancing inflow against outflow, bottom to top");
                let oriented = self.oriented.as_ref().expect("oriented graph computed at step 1");
                let nodes = Self::sorted_nodes(oriented.nodes().iter().cloned());
                balance_bottom_to_top(oriented, &nodes);
                self.nodes_bottom_to_top = Some(nodes);
                Ok(Snapshot::BottomUpBalancedGraph(oriented.deep_clone()))
            }
            7 => {
                debug!(stage = "balance_top_down", "balancing outflow against inflow, top to bottom");
                let oriented = self.oriented.as_ref().expect("oriented graph computed at step 1");
                let nodes = self.nodes_bottom_to_top.as_ref().expect("nodes recomputed at step 6");
                let nodes_top_to_bottom: Vec<Point> = nodes.iter().rev().cloned().collect();
                balance_top_to_bottom(oriented, &nodes_top_to_bottom);
                Ok(Snapshot::TopDownBalancedGraph(oriented.deep_clone()))
            }
            8 => {
                debug!(stage = "extract_chains", "peeling the balanced flow into monotone chains");
                let oriented = self.oriented.as_ref().expect("oriented graph computed at step 1");
                let nodes = self.nodes_bottom_to_top.as_ref().expect("nodes recomputed at step 6");
                let chains = match construct_monotone_chains(oriented, nodes) {
                    Ok(chains) => chains,
                    Err(e) => {
                        self.done = true;
                        return Some(Err(e));
                    }
                };
                self.monotone_chains = Some(chains.clone());
                Ok(Snapshot::MonotoneChains(chains))
            }
            9 => {
                debug!(stage = "build_search_tree", "building the balanced chain search tree");
                let chains = self.monotone_chains.clone().expect("chains computed at step 8");
                let tree = build_search_tree(chains);
                let snapshot = Snapshot::ChainSearchTree(tree.clone());
                self.search_tree = Some(tree);
                Ok(snapshot)
            }
            10 => {
                debug!(stage = "search", "descending the chain search tree for the query point");
                let tree = self.search_tree.as_ref().expect("search tree built at step 9");
                let chain_count = self.monotone_chains.as_ref().expect("chains computed at step 8").len();
                self.done = true;
                match search(&self.point, tree, chain_count) {
                    Ok((path, bracket)) => Ok(Snapshot::SearchResult(path, bracket)),
                    Err(e) => return Some(Err(e)),
                }
            }
            _ => return None,
        };

        self.step += 1;
        Some(snapshot)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::{EdgeLike, PslgEdge};

    fn p(x: f64, y: f64) -> Point {
        Point::new(vec![x, y])
    }

    #[test]
    fn single_edge_graph_locates_point_on_either_side() {
        let mut pslg = PlanarStraightLineGraph::new();
        pslg.add_edge(PslgEdge::new(p(0.0, 0.0), p(0.0, 1.0)));

        let snapshots: Vec<Snapshot> = locate(pslg.clone(), p(-1.0, 0.5)).collect::<Result<Vec<_>>>().unwrap();
        let Snapshot::SearchResult(_, (left, right)) = snapshots.last().unwrap() else {
            panic!("last snapshot should be a search result");
        };
        assert!(left.is_none());
        assert!(right.is_some());

        let snapshots: Vec<Snapshot> = locate(pslg.clone(), p(1.0, 0.5)).collect::<Result<Vec<_>>>().unwrap();
        let Snapshot::SearchResult(_, (left, right)) = snapshots.last().unwrap() else {
            panic!("last snapshot should be a search result");
        };
        assert!(left.is_some());
        assert!(right.is_none());

        let snapshots: Vec<Snapshot> = locate(pslg, p(0.0, 0.5)).collect::<Result<Vec<_>>>().unwrap();
        let Snapshot::SearchResult(_, (left, right)) = snapshots.last().unwrap() else {
            panic!("last snapshot should be a search result");
        };
        assert!(left.is_some());
        assert!(right.is_some());
    }

    #[test]
    fn pipeline_yields_eleven_snapshots() {
        let mut pslg = PlanarStraightLineGraph::new();
        pslg.add_edge(PslgEdge::new(p(0.0, 0.0), p(0.0, 1.0)));
        let count = locate(pslg, p(0.0, 0.5)).count();
        assert_eq!(count, 11);
    }

    /// The canonical worked example from Preparata & Shamos, *Computational
    /// Geometry: An Introduction*, ported from
    /// `examples/original_source/tests/algorithms/test_chain.py`.
    #[test]
    fn preparata_shamos_canonical_scenario() {
        let n: Vec<Point> = vec![
            p(1.0, 1.0),
            p(7.0, 1.0),
            p(16.0, 1.0),
            p(4.0, 2.0),
            p(13.0, 3.0),
            p(5.0, 4.0),
            p(4.0, 6.0),
            p(18.0, 7.0),
            p(15.0, 8.0),
            p(10.0, 9.0),
            p(1.0, 10.0),
            p(14.0, 11.0),
            p(7.0, 12.0),
        ];

        let mut pslg = PlanarStraightLineGraph::new();
        let raw_edges: [(usize, usize, &str); 16] = [
            (0, 1, "e1"),
            (1, 4, "e2"),
            (2, 4, "e3"),
            (5, 6, "e4"),
            (2, 7, "e5"),
            (3, 8, "e6"),
            (1, 8, "e7"),
            (5, 9, "e8"),
            (8, 9, "e9"),
            (0, 10, "e10"),
            (3, 10, "e11"),
            (6, 10, "e12"),
            (8, 11, "e13"),
            (7, 11, "e14"),
            (6, 12, "e15"),
            (11, 12, "e16"),
        ];
        for (a, b, name) in raw_edges {
            pslg.add_edge(PslgEdge::named(n[a].clone(), n[b].clone(), name));
        }

        let target_point = p(16.0, 6.0);
        let snapshots: Vec<Snapshot> = locate(pslg, target_point).collect::<Result<Vec<_>>>().unwrap();
        assert_eq!(snapshots.len(), 11);

        let Snapshot::NodesBottomToTop(sorted) = &snapshots[0] else { panic!("step 0") };
        assert_eq!(sorted, &n);

        // Regularization adds exactly three upward and three downward edges.
        let upward_regularizing = [(1, 2), (1, 3), (3, 5)];
        let downward_regularizing = [(10, 12), (9, 11), (4, 7)];

        let Snapshot::RegularizedGraph(regularized) = &snapshots[4] else { panic!("step 4") };
        assert_eq!(regularized.edges().len(), 16 + 6);
        for (a, b) in upward_regularizing.iter().chain(downward_regularizing.iter()) {
            assert!(
                regularized.edges().iter().any(|e| *e.first() == n[*a] && *e.second() == n[*b]),
                "missing regularizing edge {a}->{b}"
            );
        }

        let weight_of = |graph: &crate::graph::OrientedPlanarStraightLineGraph, a: usize, b: usize| -> f64 {
            graph
                .edges()
                .iter()
                .find(|e| *e.first() == n[a] && *e.second() == n[b])
                .unwrap_or_else(|| panic!("edge {a}->{b} not found"))
                .weight()
        };

        let Snapshot::BottomUpBalancedGraph(bottom_up) = &snapshots[6] else { panic!("step 6") };
        assert_eq!(weight_of(bottom_up, 7, 11), 3.0); // e14
        assert_eq!(weight_of(bottom_up, 11, 12), 6.0); // e16
        assert_eq!(weight_of(bottom_up, 10, 12), 3.0); // e1**
        assert_eq!(weight_of(bottom_up, 9, 11), 2.0); // e2**
        assert_eq!(weight_of(bottom_up, 4, 7), 2.0); // e3**

        let Snapshot::TopDownBalancedGraph(top_down) = &snapshots[7] else { panic!("step 7") };
        assert_eq!(weight_of(top_down, 0, 1), 9.0); // e1
        assert_eq!(weight_of(top_down, 5, 6), 2.0); // e4
        assert_eq!(weight_of(top_down, 1, 2), 2.0); // e1*
        assert_eq!(weight_of(top_down, 1, 3), 5.0); // e2*
        assert_eq!(weight_of(top_down, 3, 5), 3.0); // e3*

        let Snapshot::MonotoneChains(chains) = &snapshots[8] else { panic!("step 8") };
        assert_eq!(chains.len(), 10);

        let expected_chains: Vec<Vec<(usize, usize)>> = vec![
            vec![(0, 10), (10, 12)],
            vec![(0, 1), (1, 3), (3, 10), (10, 12)],
            vec![(0, 1), (1, 3), (3, 5), (5, 6), (6, 10), (10, 12)],
            vec![(0, 1), (1, 3), (3, 5), (5, 6), (6, 12)],
            vec![(0, 1), (1, 3), (3, 5), (5, 9), (9, 11), (11, 12)],
            vec![(0, 1), (1, 3), (3, 8), (8, 9), (9, 11), (11, 12)],
            vec![(0, 1), (1, 8), (8, 11), (11, 12)],
            vec![(0, 1), (1, 4), (4, 7), (7, 11), (11, 12)],
            vec![(0, 1), (1, 2), (2, 4), (4, 7), (7, 11), (11, 12)],
            vec![(0, 1), (1, 2), (2, 7), (7, 11), (11, 12)],
        ];

        for (actual, expected) in chains.iter().zip(expected_chains.iter()) {
            let actual_pairs: Vec<(Point, Point)> = actual.iter().map(|e| (e.first().clone(), e.second().clone())).collect();
            let expected_pairs: Vec<(Point, Point)> = expected.iter().map(|(a, b)| (n[*a].clone(), n[*b].clone())).collect();
            assert_eq!(actual_pairs, expected_pairs);
        }

        let Snapshot::SearchResult(path, (left, right)) = &snapshots[10] else { panic!("step 10") };
        assert_eq!(
            path,
            &vec![PathDirection::Right, PathDirection::Left, PathDirection::Right, PathDirection::Next]
        );

        let left_pairs: Vec<(Point, Point)> = left.as_ref().unwrap().iter().map(|e| (e.first().clone(), e.second().clone())).collect();
        let right_pairs: Vec<(Point, Point)> = right.as_ref().unwrap().iter().map(|e| (e.first().clone(), e.second().clone())).collect();
        let expected_left: Vec<(Point, Point)> = expected_chains[6].iter().map(|(a, b)| (n[*a].clone(), n[*b].clone())).collect();
        let expected_right: Vec<(Point, Point)> = expected_chains[7].iter().map(|(a, b)| (n[*a].clone(), n[*b].clone())).collect();
        assert_eq!(left_pairs, expected_left);
        assert_eq!(right_pairs, expected_right);
    }
}
