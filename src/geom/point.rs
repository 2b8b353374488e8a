//! `Point`: an n-tuple of real coordinates (n ≥ 2).
//!
//! Equality is tolerant (absolute tolerance [`POINT_EQ_TOLERANCE`]);
//! hashing and the derived `Eq` are exact-tuple. This is a documented
//! mismatch inherited from the system this crate implements (see the
//! module-level note below) rather than an oversight: algorithms
//! downstream rely on identical coordinate construction for nodes that
//! must collide in a `HashSet`, while comparisons against query points
//! or newly computed coordinates need the tolerance.

use std::cmp::Ordering;
use std::hash::{Hash, Hasher};

use nalgebra::DVector;

use crate::error::{Error, Result};

/// Fixed absolute tolerance for [`Point`] equality. Not user-tunable —
/// downstream algorithms (sweep bracketing, chain weight balancing)
/// assume this exact value.
pub const POINT_EQ_TOLERANCE: f64 = 1e-3;

/// An n-tuple of real coordinates, n ≥ 2. Immutable by convention: all
/// operations that "change" a point return a new one.
#[derive(Debug, Clone)]
pub struct Point {
    coords: DVector<f64>,
}

impl Point {
    /// Builds a point from explicit coordinates. Does not validate `n`;
    /// callers that need exactly 2D should check `len() == 2` (see
    /// [`crate::geom::Line2D`] for an example of a boundary that does).
    pub fn new(coords: impl Into<Vec<f64>>) -> Self {
        Point { coords: DVector::from_vec(coords.into()) }
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

    pub fn get(&self, i: usize) -> f64 {
        self.coords[i]
    }

    pub fn x(&self) -> f64 {
        self.coords[0]
    }

    pub fn y(&self) -> f64 {
        self.coords[1]
    }

    pub fn z(&self) -> f64 {
        self.coords[2]
    }

    /// Coordinate-wise mean of a non-empty set of points.
    pub fn centroid(points: &[Point]) -> Result<Point> {
        let first = points
            .first()
            .ok_or_else(|| Error::validation_failure("centroid requires at least one point"))?;
        let n = first.len();
        let mut sum = DVector::zeros(n);
        for p in points {
            if p.len() != n {
                return Err(Error::validation_failure("centroid requires points of equal dimension"));
            }
            sum += &p.coords;
        }
        sum /= points.len() as f64;
        Ok(Point { coords: sum })
    }
}

impl std::ops::Index<usize> for Point {
    type Output = f64;
    fn index(&self, i: usize) -> &f64 {
        &self.coords[i]
    }
}

impl std::ops::Add for &Point {
    type Output = Point;
    fn add(self, rhs: &Point) -> Point {
        Point { coords: &self.coords + &rhs.coords }
    }
}

impl std::ops::Sub for &Point {
    type Output = Point;
    fn sub(self, rhs: &Point) -> Point {
        Point { coords: &self.coords - &rhs.coords }
    }
}

/// Tolerant: `|a_i - b_i| <= POINT_EQ_TOLERANCE` for every coordinate.
impl PartialEq for Point {
    fn eq(&self, other: &Self) -> bool {
        self.coords.len() == other.coords.len()
            && self
                .coords
                .iter()
                .zip(other.coords.iter())
                .all(|(a, b)| (a - b).abs() <= POINT_EQ_TOLERANCE)
    }
}

/// Marker only. Combined with the tolerant [`PartialEq`] and the
/// exact-tuple [`Hash`] below, this reproduces the documented
/// mismatch: two points "equal" within tolerance are not guaranteed to
/// land in the same hash bucket unless their coordinate bits match
/// exactly. Do not "fix" this by rounding coordinates before hashing —
/// the mismatch is load-bearing for downstream node identity (spec §9,
/// "Approximate point equality vs. hashing").
impl Eq for Point {}

impl Hash for Point {
    fn hash<H: Hasher>(&self, state: &mut H) {
        for c in self.coords.iter() {
            c.to_bits().hash(state);
        }
    }
}

/// Coordinate-tuple lexicographic order (the "primitive comparator").
/// Sweep order (y, x) is a distinct key — see
/// [`crate::geom::by_y_then_x`].
impl PartialOrd for Point {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Point {
    fn cmp(&self, other: &Self) -> Ordering {
        for (a, b) in self.coords.iter().zip(other.coords.iter()) {
            match a.partial_cmp(b) {
                Some(Ordering::Equal) | None => continue,
                Some(ord) => return ord,
            }
        }
        self.coords.len().cmp(&other.coords.len())
    }
}

/// Sweep-line key: ascending by (y, x). Used by regularization and
/// weight balancing, which process nodes bottom-to-top / top-to-bottom.
pub fn by_y_then_x(p: &Point) -> (f64, f64) {
    (p.y(), p.x())
}

impl std::fmt::Display for Point {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "(")?;
        for (i, c) in self.coords.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{c}")?;
        }
        write!(f, ")")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn eq_is_tolerant() {
        let a = Point::new(vec![1.0, 2.0]);
        let b = Point::new(vec![1.0009, 2.0]);
        assert_eq!(a, b);
    }

    #[test]
    fn eq_rejects_beyond_tolerance() {
        let a = Point::new(vec![1.0, 2.0]);
        let b = Point::new(vec![1.01, 2.0]);
        assert_ne!(a, b);
    }

    #[test]
    fn hash_is_exact_not_tolerant() {
        use std::collections::hash_map::DefaultHasher;
        let a = Point::new(vec![1.0, 2.0]);
        let b = Point::new(vec![1.0009, 2.0]);
        assert_eq!(a, b); // equal within tolerance
        let mut ha = DefaultHasher::new();
        let mut hb = DefaultHasher::new();
        a.hash(&mut ha);
        b.hash(&mut hb);
        assert_ne!(ha.finish(), hb.finish()); // but hash differs (exact bits)
    }

    #[test]
    fn ord_is_coordinate_tuple_not_sweep_order() {
        let a = Point::new(vec![1.0, 5.0]); // x=1, y=5
        let b = Point::new(vec![2.0, 1.0]); // x=2, y=1
        assert!(a < b); // compares x first: 1 < 2
        assert!(by_y_then_x(&a) > by_y_then_x(&b)); // but by (y,x): 5 > 1
    }

    #[test]
    fn centroid_averages_coordinates() {
        let pts = vec![Point::new(vec![0.0, 0.0]), Point::new(vec![2.0, 4.0])];
        let c = Point::centroid(&pts).unwrap();
        assert_eq!(c, Point::new(vec![1.0, 2.0]));
    }
}
