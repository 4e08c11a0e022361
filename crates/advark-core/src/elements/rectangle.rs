//! Rectangle element.

use super::{ElementId, ElementTrait};
use kurbo::{Point, Rect};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A filled rectangle.
///
/// `width` and `height` stay signed while the rectangle is dragged out: a
/// negative size extends left/up from `position`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Rectangle {
    pub(crate) id: ElementId,
    /// Corner where the drag started (top-left for positive sizes).
    pub position: Point,
    /// Signed width.
    pub width: f64,
    /// Signed height.
    pub height: f64,
    /// Fill color.
    pub fill: String,
}

impl Rectangle {
    /// Create a new rectangle.
    pub fn new(position: Point, width: f64, height: f64, fill: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            position,
            width,
            height,
            fill: fill.into(),
        }
    }

    /// Set the size from the drag start to the current pointer.
    pub(crate) fn set_size(&mut self, width: f64, height: f64) {
        self.width = width;
        self.height = height;
    }

    /// The opposite corner to `position`.
    pub fn far_corner(&self) -> Point {
        Point::new(self.position.x + self.width, self.position.y + self.height)
    }
}

impl ElementTrait for Rectangle {
    fn id(&self) -> ElementId {
        self.id
    }

    fn position(&self) -> Point {
        self.position
    }

    fn fill(&self) -> &str {
        &self.fill
    }

    fn bounds(&self) -> Rect {
        Rect::from_points(self.position, self.far_corner())
    }
}
