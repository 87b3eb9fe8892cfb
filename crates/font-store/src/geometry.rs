//! Glyph geometry: bounding boxes, outlines and stretch axes.

use std::fmt;

use kurbo::{Affine, Point};
use serde::{Deserialize, Serialize};

/// Direction in which a construction stretches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Axis {
    Horizontal,
    Vertical,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Axis::Horizontal => f.write_str("horizontal"),
            Axis::Vertical => f.write_str("vertical"),
        }
    }
}

/// Glyph bounding box in font design units.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoundingBox {
    pub x_min: i32,
    pub y_min: i32,
    pub x_max: i32,
    pub y_max: i32,
}

impl BoundingBox {
    pub const fn new(x_min: i32, y_min: i32, x_max: i32, y_max: i32) -> Self {
        Self { x_min, y_min, x_max, y_max }
    }

    /// Saturates on boxes too large for `i32`.
    pub const fn width(&self) -> i32 {
        self.x_max.saturating_sub(self.x_min)
    }

    pub const fn height(&self) -> i32 {
        self.y_max.saturating_sub(self.y_min)
    }

    /// Extent along a stretch axis: height for vertical, width for horizontal.
    pub const fn extent(&self, axis: Axis) -> i32 {
        match axis {
            Axis::Horizontal => self.width(),
            Axis::Vertical => self.height(),
        }
    }

    /// Vertical midpoint, `(y_min + y_max) / 2`.
    pub fn vertical_center(&self) -> f64 {
        (self.y_min as f64 + self.y_max as f64) / 2.0
    }

    /// Transform both corners and round the result to the grid.
    ///
    /// Only valid for transforms without rotation or skew; the box is
    /// re-normalized so a negative scale still yields `min <= max`.
    pub fn transform(&self, affine: Affine) -> Self {
        let a = affine * Point::new(self.x_min as f64, self.y_min as f64);
        let b = affine * Point::new(self.x_max as f64, self.y_max as f64);
        Self {
            x_min: a.x.min(b.x).round() as i32,
            y_min: a.y.min(b.y).round() as i32,
            x_max: a.x.max(b.x).round() as i32,
            y_max: a.y.max(b.y).round() as i32,
        }
    }
}

/// A single outline point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutlinePoint {
    pub x: i32,
    pub y: i32,
    pub on_curve: bool,
}

impl OutlinePoint {
    pub const fn new(x: i32, y: i32, on_curve: bool) -> Self {
        Self { x, y, on_curve }
    }

    fn transform(&self, affine: Affine) -> Self {
        let p = affine * Point::new(self.x as f64, self.y as f64);
        Self { x: p.x.round() as i32, y: p.y.round() as i32, on_curve: self.on_curve }
    }
}

/// A closed contour of outline points.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Contour(pub Vec<OutlinePoint>);

impl Contour {
    pub fn points(&self) -> &[OutlinePoint] {
        &self.0
    }

    pub fn transform(&self, affine: Affine) -> Self {
        Self(self.0.iter().map(|p| p.transform(affine)).collect())
    }
}

impl From<Vec<OutlinePoint>> for Contour {
    fn from(points: Vec<OutlinePoint>) -> Self {
        Self(points)
    }
}
