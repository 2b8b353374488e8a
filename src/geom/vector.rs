//! `Vector`: same shape as [`Point`](crate::geom::Point) — an n-tuple of
//! reals — but carrying the algebraic operations points deliberately
//! don't (dot/cross product, norms, in-place normalization).

use nalgebra::DVector;

use crate::error::{Error, Result};
use crate::geom::metric::Metric;
use crate::geom::point::Point;

#[derive(Debug, Clone, PartialEq)]
pub struct Vector {
    coords: DVector<f64>,
}

impl Vector {
    pub fn new(coords: impl Into<Vec<f64>>) -> Self {
        Vector { coords: DVector::from_vec(coords.into()) }
    }

    pub fn from_points(from: &Point, to: &Point) -> Self {
        let diff = to - from;
        Vector::new(diff.coords().to_vec())
    }

    pub fn len(&self) -> usize {
        self.coords.len()
    }

    pub fn is_empty(&self) -> bool {
        self.coords.is_empty()
    }

    pub fn coords(&self) -> &[f64] {
        self.coords.as_slice()
    }

    pub fn x(&self) -> f64 {
        self.coords[0]
    }

    pub fn y(&self) -> f64 {
        self.coords[1]
    }

    pub fn dot(&self, other: &Vector) -> Result<f64> {
        if self.len() != other.len() {
            return Err(Error::validation_failure("dot product requires equal dimensions"));
        }
        Ok(self.coords.dot(&other.coords))
    }

    /// 2D cross product (scalar): `x1*y2 - y1*x2`. Requires both
    /// operands to be exactly 2D.
    pub fn cross_2d(&self, other: &Vector) -> Result<f64> {
        if self.len() != 2 || other.len() != 2 {
            return Err(Error::validation_failure("cross_2d requires 2D vectors"));
        }
        Ok(self.x() * other.y() - self.y() * other.x())
    }

    pub fn norm(&self, metric: Metric) -> f64 {
        match metric {
            Metric::L1 => self.coords.iter().map(|c| c.abs()).sum(),
            Metric::L2 => self.coords.iter().map(|c| c * c).sum::<f64>().sqrt(),
            Metric::Linf => self.coords.iter().fold(0.0_f64, |acc, c| acc.max(c.abs())),
        }
    }

    pub fn normalize(&mut self, metric: Metric) -> Result<()> {
        let n = self.norm(metric);
        if n == 0.0 {
            return Err(Error::domain_failure("cannot normalize the zero vector"));
        }
        self.coords /= n;
        Ok(())
    }
}
