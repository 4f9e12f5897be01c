//! Planar geometry over arena coordinates.
//!
//! Everything here is a pure function of its inputs. Coordinates are `f64`
//! because predicted positions are fractional even though the host reports
//! integers.

use core::fmt;

use crate::config::ArenaConfig;

/// A point in arena coordinates. `(0, 0)` is one home corner and
/// `(MAX_X, MAX_Y)` the other.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

/// Half of the arena on either side of the line joining the two home corners.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum MapTriangle {
    /// `MAX_X * y - MAX_Y * x > 0`.
    Upper,
    /// Everything else, including points exactly on the line.
    Lower,
}

impl Point {
    pub const ORIGIN: Self = Self { x: 0.0, y: 0.0 };

    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Center of the arena, truncated to whole units like the host does.
    pub fn center() -> Self {
        Self::new(
            (ArenaConfig::MAX_X / 2.0).trunc(),
            (ArenaConfig::MAX_Y / 2.0).trunc(),
        )
    }

    /// Corner at `(MAX_X, 0)`.
    pub const fn top_right() -> Self {
        Self::new(ArenaConfig::MAX_X, 0.0)
    }

    /// Corner at `(0, MAX_Y)`.
    pub const fn bottom_left() -> Self {
        Self::new(0.0, ArenaConfig::MAX_Y)
    }

    /// Corner at `(MAX_X, MAX_Y)`.
    pub const fn bottom_right() -> Self {
        Self::new(ArenaConfig::MAX_X, ArenaConfig::MAX_Y)
    }

    /// Returns true if both coordinates lie inside the arena (inclusive).
    pub fn is_valid(&self) -> bool {
        (0.0..=ArenaConfig::MAX_X).contains(&self.x) && (0.0..=ArenaConfig::MAX_Y).contains(&self.y)
    }

    /// Euclidean distance.
    pub fn distance(&self, other: Point) -> f64 {
        let dx = other.x - self.x;
        let dy = other.y - self.y;
        (dx * dx + dy * dy).sqrt()
    }

    /// Distance from this point to the line through `start` and `end`.
    ///
    /// Computed as the height of triangle `(start, end, self)` over the base
    /// `start..end` using Heron's formula.
    pub fn distance_from_line(&self, start: Point, end: Point) -> f64 {
        let a = start.distance(end);
        let b = start.distance(*self);
        let c = end.distance(*self);
        let s = (a + b + c) / 2.0;
        // Rounding can push the product slightly below zero for collinear points.
        let area_sq = (s * (s - a) * (s - b) * (s - c)).max(0.0);
        2.0 * area_sq.sqrt() / a
    }

    /// Cosine of the angle at this point between the rays towards `left`
    /// and `right` (law of cosines).
    pub fn cosine_angle(&self, left: Point, right: Point) -> f64 {
        let b = left.distance(right);
        let a = self.distance(left);
        let c = self.distance(right);
        (b * b - a * a - c * c) / (-2.0 * a * c)
    }

    /// Which half of the arena this point lies in.
    pub fn map_triangle(&self) -> MapTriangle {
        let cross = ArenaConfig::MAX_X * self.y - ArenaConfig::MAX_Y * self.x;
        if cross > 0.0 {
            MapTriangle::Upper
        } else {
            MapTriangle::Lower
        }
    }

    /// Moves `distance` units from this point towards `target`.
    ///
    /// Returns `self` unchanged when `target` coincides with it, since the
    /// direction is undefined.
    pub fn step_towards(&self, target: Point, distance: f64) -> Point {
        let dx = target.x - self.x;
        let dy = target.y - self.y;
        let length = (dx * dx + dy * dy).sqrt();
        if length <= f64::EPSILON {
            return *self;
        }
        Point::new(
            self.x + dx / length * distance,
            self.y + dy / length * distance,
        )
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.0}, {:.0})", self.x, self.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const EPS: f64 = 1e-9;

    #[test]
    fn distance_is_euclidean() {
        assert_eq!(Point::new(0.0, 0.0).distance(Point::new(3.0, 4.0)), 5.0);
    }

    #[test]
    fn distance_from_line_matches_axis_offset() {
        let p = Point::new(5.0, 7.0);
        let height = p.distance_from_line(Point::new(0.0, 0.0), Point::new(10.0, 0.0));
        assert!((height - 7.0).abs() < EPS);
    }

    #[test]
    fn distance_from_line_is_zero_on_the_line() {
        let p = Point::new(5.0, 5.0);
        let height = p.distance_from_line(Point::ORIGIN, Point::new(10.0, 10.0));
        assert!(height.abs() < 1e-6);
    }

    #[test]
    fn cosine_angle_of_right_angle_is_zero() {
        let vertex = Point::ORIGIN;
        let cos = vertex.cosine_angle(Point::new(10.0, 0.0), Point::new(0.0, 10.0));
        assert!(cos.abs() < EPS);
    }

    #[test]
    fn cosine_angle_of_same_ray_is_one() {
        let vertex = Point::ORIGIN;
        let cos = vertex.cosine_angle(Point::new(10.0, 0.0), Point::new(20.0, 0.0));
        assert!((cos - 1.0).abs() < EPS);
    }

    #[test]
    fn validity_is_inclusive() {
        assert!(Point::ORIGIN.is_valid());
        assert!(Point::bottom_right().is_valid());
        assert!(!Point::new(-0.5, 10.0).is_valid());
        assert!(!Point::new(10.0, ArenaConfig::MAX_Y + 1.0).is_valid());
    }

    #[test]
    fn map_triangle_splits_on_home_diagonal() {
        assert_eq!(Point::bottom_left().map_triangle(), MapTriangle::Upper);
        assert_eq!(Point::top_right().map_triangle(), MapTriangle::Lower);
        assert_eq!(Point::center().map_triangle(), MapTriangle::Lower);
    }

    #[test]
    fn step_towards_coincident_target_stays_put() {
        let p = Point::new(100.0, 100.0);
        assert_eq!(p.step_towards(p, 400.0), p);
    }

    proptest! {
        #[test]
        fn prop_map_triangle_is_pure(
            x in 0.0f64..=ArenaConfig::MAX_X,
            y in 0.0f64..=ArenaConfig::MAX_Y
        ) {
            let p = Point::new(x, y);
            prop_assert_eq!(p.map_triangle(), p.map_triangle());
        }

        #[test]
        fn prop_map_triangle_sides_are_exclusive(
            x in 0.0f64..=ArenaConfig::MAX_X,
            y in 0.0f64..=ArenaConfig::MAX_Y
        ) {
            let cross = ArenaConfig::MAX_X * y - ArenaConfig::MAX_Y * x;
            prop_assume!(cross != 0.0);
            let upper = Point::new(x, y).map_triangle() == MapTriangle::Upper;
            prop_assert_eq!(upper, cross > 0.0);
        }
    }
}
