use serde::{Deserialize, Serialize};

/// Integer position on the drawing plane
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const ORIGIN: Point = Point { x: 0, y: 0 };

    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to `other`
    pub fn distance_to(&self, other: Point) -> f64 {
        let dx = f64::from(other.x) - f64::from(self.x);
        let dy = f64::from(other.y) - f64::from(self.y);
        dx.hypot(dy)
    }
}

impl std::fmt::Display for Point {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_distance_from_origin() {
        assert_eq!(Point::ORIGIN.distance_to(Point::new(3, 4)), 5.0);
    }

    #[test]
    fn test_distance_is_symmetric() {
        let a = Point::new(-2, 7);
        let b = Point::new(4, -1);
        assert_eq!(a.distance_to(b), b.distance_to(a));
        assert_eq!(a.distance_to(b), 10.0);
    }

    #[test]
    fn test_distance_does_not_overflow_at_extremes() {
        let a = Point::new(i32::MIN, 0);
        let b = Point::new(i32::MAX, 0);
        assert_eq!(a.distance_to(b), f64::from(i32::MAX) - f64::from(i32::MIN));
    }

    #[test]
    fn test_point_display() {
        assert_eq!(format!("{}", Point::new(3, -4)), "(3, -4)");
    }
}
