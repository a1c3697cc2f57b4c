//! 2D point and vector helpers used by the gesture math.

use serde::{Deserialize, Serialize};
use std::ops::{Add, Sub};

/// A point or a free vector in the caller's coordinate space.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const ZERO: Point = Point { x: 0.0, y: 0.0 };

    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn scale(self, factor: f64) -> Self {
        Self::new(self.x * factor, self.y * factor)
    }

    /// Clockwise rotation in a y-up frame. Pass a negated angle to rotate
    /// in the direction `atan2` angles grow.
    pub fn rotate_clockwise(self, radians: f64) -> Self {
        let (sin, cos) = radians.sin_cos();
        Self::new(
            self.x * cos + self.y * sin,
            -self.x * sin + self.y * cos,
        )
    }

    pub fn distance(self, other: Point) -> f64 {
        (self - other).length()
    }

    pub fn length(self) -> f64 {
        self.x.hypot(self.y)
    }

    /// Angle of the vector via `atan2(y, x)`.
    pub fn angle(self) -> f64 {
        self.y.atan2(self.x)
    }

    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl Add for Point {
    type Output = Point;

    fn add(self, rhs: Point) -> Point {
        Point::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Point {
    type Output = Point;

    fn sub(self, rhs: Point) -> Point {
        Point::new(self.x - rhs.x, self.y - rhs.y)
    }
}

/// Wraps an angle into `(-PI, PI]`.
pub fn normalize_angle(radians: f64) -> f64 {
    use std::f64::consts::{PI, TAU};
    let wrapped = (radians + PI).rem_euclid(TAU) - PI;
    if wrapped <= -PI { wrapped + TAU } else { wrapped }
}
