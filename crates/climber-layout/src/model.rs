use crate::geom::{Point, point};
use serde::{Deserialize, Serialize};

/// One laid-out node: top-left corner plus box dimensions, in canvas units.
/// Rebuilt wholesale on every layout pass, never mutated incrementally by
/// consumers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LayoutNode {
    pub id: String,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub is_center: bool,
}

impl LayoutNode {
    pub fn center_x(&self) -> f64 {
        self.x + self.width / 2.0
    }

    pub fn center_y(&self) -> f64 {
        self.y + self.height / 2.0
    }

    pub fn center(&self) -> Point {
        point(self.center_x(), self.center_y())
    }

    /// Axis-aligned bounding-box overlap test.
    pub fn intersects(&self, other: &LayoutNode) -> bool {
        self.x < other.x + other.width
            && other.x < self.x + self.width
            && self.y < other.y + other.height
            && other.y < self.y + self.height
    }

    /// Clamps the whole box into `[margin, canvas - margin]` on both axes.
    /// When the canvas is smaller than the box, the upper bound wins.
    pub fn clamp_into(&mut self, canvas_width: f64, canvas_height: f64, margin: f64) {
        self.x = self.x.max(margin).min(canvas_width - self.width - margin);
        self.y = self.y.max(margin).min(canvas_height - self.height - margin);
    }
}
