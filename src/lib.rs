//! Planar point location via the Lee-Preparata chain method.
//!
//! The entry point is [`pipeline::locate`]: given a [`graph::PlanarStraightLineGraph`]
//! and a query point, it orients the graph upward, regularizes it,
//! balances unit flow weights across it, peels the result into
//! left-to-right monotone chains, builds a balanced search tree over
//! them, and descends that tree to bracket the query point between two
//! consecutive chains. Every stage is exposed as a [`pipeline::Snapshot`]
//! so a caller can inspect the algorithm's progress, not just its final
//! answer.

pub mod balance;
pub mod chain;
pub mod error;
pub mod geom;
pub mod graph;
pub mod pipeline;
pub mod regularize;
pub mod search;
pub mod tree;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Common imports for callers driving the point-location pipeline.
pub mod prelude {
    pub use crate::chain::Chain;
    pub use crate::error::{Error, Result};
    pub use crate::geom::{orient, Orientation, Point, Vector};
    pub use crate::graph::{OrientedPlanarStraightLineGraph, PlanarStraightLineGraph, PslgEdge};
    pub use crate::pipeline::{locate, ChainPipeline, Snapshot};
    pub use crate::search::PathDirection;
}
