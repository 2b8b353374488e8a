//! Polar angle helpers used to order inward/outward edges around a node
//! (spec §3: inward ascending in `[0, 2π)`, outward descending in
//! `(-π, π]`).

use std::f64::consts::PI;

use crate::geom::point::Point;

/// `atan2(p.y - origin.y, p.x - origin.x) ∈ (-π, π]`.
pub fn polar_angle(point: &Point, origin: &Point) -> f64 {
    (point.y() - origin.y()).atan2(point.x() - origin.x())
}

/// `polar_angle` shifted into `[0, 2π)`.
pub fn nonneg_polar_angle(point: &Point, origin: &Point) -> f64 {
    let angle = polar_angle(point, origin);
    if angle < 0.0 {
        2.0 * PI + angle
    } else {
        angle
    }
}

/// Unsigned angle `∠p1 p2 p3` (vertex at `p2`), via the normalized dot
/// product of the two rays out of the vertex.
pub fn angle(p1: &Point, p2: &Point, p3: &Point) -> crate::error::Result<f64> {
    use crate::geom::metric::Metric;
    use crate::geom::vector::Vector;

    let mut v1 = Vector::from_points(p2, p1);
    let mut v2 = Vector::from_points(p2, p3);
    v1.normalize(Metric::L2)?;
    v2.normalize(Metric::L2)?;
    let cos_theta = v1.dot(&v2)? / (v1.norm(Metric::L2) * v2.norm(Metric::L2));
    Ok(cos_theta.clamp(-1.0, 1.0).acos())
}
