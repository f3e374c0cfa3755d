//! Plane geometry shared by the element model and the drag pipeline.
//!
//! Points serialize as two-element JSON arrays (`[x, y]`) so stored
//! collections stay compatible with files saved by earlier builds.

#[cfg(test)]
#[path = "geom_test.rs"]
mod geom_test;

use serde::{Deserialize, Serialize};

use crate::consts::GRAD_PER_HALF_TURN;

/// A point or offset in CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(from = "[f64; 2]", into = "[f64; 2]")]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Component-wise sum.
    #[must_use]
    pub fn offset(self, delta: Point) -> Self {
        Self::new(self.x + delta.x, self.y + delta.y)
    }

    /// Component-wise difference `self - other`.
    #[must_use]
    pub fn delta_from(self, other: Point) -> Self {
        Self::new(self.x - other.x, self.y - other.y)
    }

    /// Rotate this vector by `-angle`, where `angle` is in grad (400 per turn).
    ///
    /// Screen-space drag deltas go through this to land in the element's
    /// unrotated local frame, matching the `rotate(<angle>grad)` transform the
    /// element is painted with.
    #[must_use]
    pub fn unrotate_grad(self, angle: f64) -> Self {
        let radians = -angle * (std::f64::consts::PI / GRAD_PER_HALF_TURN);
        let (sin, cos) = radians.sin_cos();
        Self::new(self.x * cos - self.y * sin, self.x * sin + self.y * cos)
    }
}

impl From<[f64; 2]> for Point {
    fn from([x, y]: [f64; 2]) -> Self {
        Self { x, y }
    }
}

impl From<Point> for [f64; 2] {
    fn from(p: Point) -> Self {
        [p.x, p.y]
    }
}
