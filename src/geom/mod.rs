//! Geometric primitives: points, vectors, the orientation predicate,
//! polar angles, distances.
//!
//! Purpose
//! - Everything above this module (graph entities, regularization,
//!   chain search) is built on five small operations: tolerant point
//!   equality, the `orient` turn predicate, polar-angle sorting, and
//!   point/line distance. Keeping them in one place matches the
//!   teacher's `geom2` module, which plays the same role for its own
//!   algorithms.

mod angle;
mod line;
mod metric;
mod orientation;
mod point;
mod vector;

pub use angle::{angle, nonneg_polar_angle, polar_angle};
pub use line::Line2D;
pub use metric::Metric;
pub use orientation::{orient, Orientation};
pub use point::{by_y_then_x, Point, POINT_EQ_TOLERANCE};
pub use vector::Vector;
