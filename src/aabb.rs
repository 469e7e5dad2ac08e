use crate::point::Coord;
use crate::point::Point;

/// Axis-Aligned Bounding Box. Both corners are inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Aabb {
    pub min: Point,
    pub max: Point,
}

impl Default for Aabb {
    fn default() -> Self {
        Self::new()
    }
}

impl Aabb {
    /// An empty box. Adding any point makes it contain exactly that point.
    pub const fn new() -> Self {
        Aabb {
            min: Point {
                x: Coord::MAX,
                y: Coord::MAX,
            },
            max: Point {
                x: Coord::MIN,
                y: Coord::MIN,
            },
        }
    }

    /// Create an AABB from a list of `Point`s.
    pub fn from_points<'a>(points: impl IntoIterator<Item = &'a Point>) -> Self {
        let mut b = Aabb::new();

        for p in points {
            b.add(p);
        }

        b
    }

    /// Add a `Point` `p` to the current Axis-Aligned Bounding Box.
    pub fn add(&mut self, p: &Point) {
        self.min.x = self.min.x.min(p.x);
        self.min.y = self.min.y.min(p.y);
        self.max.x = self.max.x.max(p.x);
        self.max.y = self.max.y.max(p.y);
    }

    pub fn is_empty(&self) -> bool {
        self.max.x < self.min.x || self.max.y < self.min.y
    }

    pub fn center(&self) -> Point {
        self.min.mid(&self.max)
    }

    pub fn width(&self) -> Coord {
        if self.is_empty() { 0 } else { self.max.x - self.min.x }
    }

    pub fn height(&self) -> Coord {
        if self.is_empty() { 0 } else { self.max.y - self.min.y }
    }

    pub fn contains(&self, p: &Point) -> bool {
        self.min.x <= p.x && p.x <= self.max.x && self.min.y <= p.y && p.y <= self.max.y
    }

    /// Grow the box by `margin` on every side. Empty boxes stay empty.
    pub fn inflate(&self, margin: Coord) -> Self {
        if self.is_empty() {
            return *self;
        }

        Aabb {
            min: self.min - Point::new(margin, margin),
            max: self.max + Point::new(margin, margin),
        }
    }

    /// The four corners, clockwise starting at the top left.
    pub fn to_polygon(&self) -> [Point; 4] {
        [
            self.min,
            Point::new(self.max.x, self.min.y),
            self.max,
            Point::new(self.min.x, self.max.y),
        ]
    }
}

#[cfg(test)]
mod test {
    use super::Aabb;
    use crate::point::Point;

    #[test]
    fn extend_empty() {
        let mut b = Aabb::new();
        assert!(b.is_empty());

        b.add(&Point::new(3, -2));
        assert!(!b.is_empty());
        assert_eq!(b.min, Point::new(3, -2));
        assert_eq!(b.max, Point::new(3, -2));
        assert_eq!(b.width(), 0);
    }

    #[test]
    fn from_points() {
        let points = [Point::new(-4, 1), Point::new(6, -3), Point::new(0, 8)];
        let b = Aabb::from_points(&points);

        assert_eq!(b.min, Point::new(-4, -3));
        assert_eq!(b.max, Point::new(6, 8));
        assert_eq!(b.center(), Point::new(1, 2));
        assert_eq!(b.width(), 10);
        assert_eq!(b.height(), 11);
        assert!(points.iter().all(|p| b.contains(p)));
        assert!(!b.contains(&Point::new(7, 0)));
    }

    #[test]
    fn polygon_and_inflate() {
        let b = Aabb::from_points(&[Point::new(0, 0), Point::new(2, 4)]).inflate(1);

        assert_eq!(
            b.to_polygon(),
            [
                Point::new(-1, -1),
                Point::new(3, -1),
                Point::new(3, 5),
                Point::new(-1, 5)
            ]
        );
        assert!(Aabb::new().inflate(5).is_empty());
    }
}
