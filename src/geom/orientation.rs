//! The turn/orientation predicate that drives every sweep decision in
//! this crate: bracketing edges during regularization, chain-node
//! `turn()` during search, and nothing else — it is the one primitive
//! both subsystems share.

use crate::geom::point::Point;
use crate::geom::vector::Vector;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    Left,
    Right,
    Straight,
}

/// `orient(a, b, c)` is the sign of `cross(c - a, b - a)`.
///
/// Convention: LEFT is where that cross product is *negative* — this
/// is the opposite of the usual "CCW is positive" textbook convention,
/// inherited deliberately from the system this predicate implements.
/// `orient(a, b, c) == Left` iff it is neither `Right` nor `Straight`
/// (the three cases are mutually exclusive and exhaustive).
pub fn orient(a: &Point, b: &Point, c: &Point) -> Orientation {
    let ac = Vector::from_points(a, c);
    let ab = Vector::from_points(a, b);
    let direction = ac.cross_2d(&ab).expect("orient requires 2D points");

    if direction < 0.0 {
        Orientation::Left
    } else if direction > 0.0 {
        Orientation::Right
    } else {
        Orientation::Straight
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collinear_is_straight() {
        let a = Point::new(vec![0.0, 0.0]);
        let b = Point::new(vec![1.0, 1.0]);
        let c = Point::new(vec![2.0, 2.0]);
        assert_eq!(orient(&a, &b, &c), Orientation::Straight);
    }

    #[test]
    fn left_right_are_opposite() {
        let a = Point::new(vec![0.0, 0.0]);
        let b = Point::new(vec![1.0, 0.0]);
        let c_left = Point::new(vec![1.0, 1.0]);
        let c_right = Point::new(vec![1.0, -1.0]);
        assert_eq!(orient(&a, &b, &c_left), Orientation::Left);
        assert_eq!(orient(&a, &b, &c_right), Orientation::Right);
    }
}
