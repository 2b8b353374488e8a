//! Graph entities: the undirected PSLG the pipeline takes as input, and
//! the oriented PSLG it's turned into (spec §4.B).
//!
//! Purpose
//! - One shared `EdgeLike` capability (endpoints, `other_node`, polar
//!   sort) backs both edge kinds instead of a class hierarchy — see
//!   `edge.rs`.

mod edge;
mod oriented;
mod pslg;

pub use edge::EdgeLike;
pub use oriented::{OrientedEdge, OrientedPlanarStraightLineGraph};
pub use pslg::{PlanarStraightLineGraph, PslgEdge};
