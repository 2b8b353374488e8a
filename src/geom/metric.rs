//! Distance metrics shared by [`Vector::norm`](crate::geom::Vector::norm)
//! and [`Point::dist`].

use crate::error::{Error, Result};
use crate::geom::line::Line2D;
use crate::geom::point::Point;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Metric {
    L1,
    L2,
    Linf,
}

impl Metric {
    pub fn parse(name: &str) -> Result<Metric> {
        match name {
            "manhattan" | "octahedral" | "l1" => Ok(Metric::L1),
            "euclidean" | "l2" => Ok(Metric::L2),
            "chebyshev" | "cubic" | "linf" => Ok(Metric::Linf),
            other => Err(Error::validation_failure(format!("unknown metric \"{other}\""))),
        }
    }
}

impl Point {
    /// Distance between two points under the given metric.
    pub fn dist(&self, other: &Point, metric: Metric) -> Result<f64> {
        if self.len() != other.len() {
            return Err(Error::validation_failure("dist requires points of equal dimension"));
        }
        Ok(match metric {
            Metric::L1 => self
                .coords()
                .iter()
                .zip(other.coords())
                .map(|(a, b)| (a - b).abs())
                .sum(),
            Metric::L2 => self
                .coords()
                .iter()
                .zip(other.coords())
                .map(|(a, b)| (a - b).powi(2))
                .sum::<f64>()
                .sqrt(),
            Metric::Linf => self
                .coords()
                .iter()
                .zip(other.coords())
                .fold(0.0_f64, |acc, (a, b)| acc.max((a - b).abs())),
        })
    }

    /// Distance from this point to a 2D line. Only the Euclidean metric
    /// is supported: the Chebyshev branch in the system this crate
    /// implements references a nonexistent two-argument `max(abs(a,
    /// b))` form and is untested/likely inert upstream (spec §9's open
    /// question) — rather than guess the intended formula, this returns
    /// a domain failure for anything but Euclidean.
    pub fn dist_to_line(&self, line: &Line2D, metric: Metric) -> Result<f64> {
        if metric != Metric::L2 {
            return Err(Error::domain_failure(
                "point-to-line distance is only defined for the Euclidean metric",
            ));
        }
        let denom = (line.a().powi(2) + line.b().powi(2)).sqrt();
        Ok((line.a() * self.x() + line.b() * self.y() + line.c()).abs() / denom)
    }
}
