use core::fmt::Debug;
use std::ops::Add;
use std::ops::Div;
use std::ops::Mul;
use std::ops::Neg;
use std::ops::Sub;

use crate::tree::Direction;

/// Integer length on the toolpath grid.
pub type Coord = i64;

/// x increases to the right, y increases downwards.
///
/// Arithmetic saturates at the edges of [`Coord`], so positions near the limits clamp instead
/// of wrapping.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Point {
    pub x: Coord,
    pub y: Coord,
}

impl Point {
    pub const fn new(x: Coord, y: Coord) -> Self {
        Point { x, y }
    }

    /// Diagonal offset of `dist` along both axes, signed to point into the quadrant `dir`.
    pub fn in_dir(dir: Direction, dist: Coord) -> Self {
        Point {
            x: if dir.is_left() { -dist } else { dist },
            y: if dir.is_up() { -dist } else { dist },
        }
    }

    /// Compute the midpoint of the current `Point` and some `other` `Point`. Truncates towards
    /// zero.
    pub fn mid(&self, other: &Self) -> Self {
        (*self + *other) / 2
    }

    /// The larger of the horizontal and vertical distances to `other`.
    pub fn chebyshev_distance(&self, other: &Self) -> Coord {
        let d = *self - *other;

        d.x.saturating_abs().max(d.y.saturating_abs())
    }
}

impl Add for Point {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Point {
            x: self.x.saturating_add(rhs.x),
            y: self.y.saturating_add(rhs.y),
        }
    }
}

impl Sub for Point {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Point {
            x: self.x.saturating_sub(rhs.x),
            y: self.y.saturating_sub(rhs.y),
        }
    }
}

impl Neg for Point {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Point {
            x: self.x.saturating_neg(),
            y: self.y.saturating_neg(),
        }
    }
}

impl Mul<Coord> for Point {
    type Output = Self;

    fn mul(self, rhs: Coord) -> Self::Output {
        Point {
            x: self.x.saturating_mul(rhs),
            y: self.y.saturating_mul(rhs),
        }
    }
}

impl Div<Coord> for Point {
    type Output = Self;

    fn div(self, rhs: Coord) -> Self::Output {
        Point {
            x: self.x / rhs,
            y: self.y / rhs,
        }
    }
}

impl Debug for Point {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

#[cfg(test)]
mod test {
    use super::Coord;
    use super::Point;
    use crate::tree::Direction;

    #[test]
    fn quadrant_offsets() {
        assert_eq!(Point::in_dir(Direction::UpLeft, 3), Point::new(-3, -3));
        assert_eq!(Point::in_dir(Direction::UpRight, 3), Point::new(3, -3));
        assert_eq!(Point::in_dir(Direction::DownRight, 3), Point::new(3, 3));
        assert_eq!(Point::in_dir(Direction::DownLeft, 3), Point::new(-3, 3));
    }

    #[test]
    fn mid_truncates() {
        let a = Point::new(0, 0);
        let b = Point::new(5, -5);

        assert_eq!(a.mid(&b), Point::new(2, -2));
    }

    #[test]
    fn chebyshev() {
        let a = Point::new(1, 1);
        let b = Point::new(-3, 4);

        assert_eq!(a.chebyshev_distance(&b), 4);
        assert_eq!(b.chebyshev_distance(&a), 4);
        assert_eq!(a.chebyshev_distance(&a), 0);
    }

    #[test]
    fn scale() {
        assert_eq!(Point::new(2, -3) * 4, Point::new(8, -12));
        assert_eq!(-Point::new(2, -3), Point::new(-2, 3));
    }

    #[test]
    fn saturates_at_the_edges() {
        let far = Point::new(Coord::MAX - 1, Coord::MIN + 1);

        assert_eq!(far + Point::new(5, -5), Point::new(Coord::MAX, Coord::MIN));
        assert_eq!(far - Point::new(-5, 5), Point::new(Coord::MAX, Coord::MIN));
        assert_eq!(-Point::new(Coord::MIN, 0), Point::new(Coord::MAX, 0));
        assert_eq!(far * 3, Point::new(Coord::MAX, Coord::MIN));
        assert_eq!(
            Point::new(Coord::MIN, 0).chebyshev_distance(&Point::new(Coord::MAX, 0)),
            Coord::MAX
        );
    }

    #[test]
    fn debug_format() {
        assert_eq!(format!("{:?}", Point::new(-50, 25)), "(-50, 25)");
    }
}
