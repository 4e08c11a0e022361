//! Circle element.

use super::{ElementId, ElementTrait};
use kurbo::{Point, Rect};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A filled circle.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Circle {
    pub(crate) id: ElementId,
    /// Center point.
    pub center: Point,
    /// Radius, never negative.
    pub radius: f64,
    /// Fill color.
    pub fill: String,
}

impl Circle {
    /// Create a new circle. Negative radii are clamped to zero.
    pub fn new(center: Point, radius: f64, fill: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            center,
            radius: radius.max(0.0),
            fill: fill.into(),
        }
    }

    /// Set the radius from the distance between the center and `edge`.
    pub(crate) fn set_radius_to(&mut self, edge: Point) {
        self.radius = self.center.distance(edge);
    }
}

impl ElementTrait for Circle {
    fn id(&self) -> ElementId {
        self.id
    }

    fn position(&self) -> Point {
        self.center
    }

    fn fill(&self) -> &str {
        &self.fill
    }

    fn bounds(&self) -> Rect {
        Rect::new(
            self.center.x - self.radius,
            self.center.y - self.radius,
            self.center.x + self.radius,
            self.center.y + self.radius,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_circle_creation() {
        let circle = Circle::new(Point::new(50.0, 50.0), 30.0, "#123456");
        assert!((circle.center.x - 50.0).abs() < f64::EPSILON);
        assert!((circle.radius - 30.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_negative_radius_clamped() {
        let circle = Circle::new(Point::ZERO, -3.0, "#123456");
        assert!(circle.radius.abs() < f64::EPSILON);
    }

    #[test]
    fn test_radius_from_edge() {
        let mut circle = Circle::new(Point::new(10.0, 10.0), 0.0, "#123456");
        circle.set_radius_to(Point::new(13.0, 14.0));
        assert!((circle.radius - 5.0).abs() < f64::EPSILON);

        circle.set_radius_to(Point::new(7.0, 6.0));
        assert!((circle.radius - 5.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_bounds() {
        let circle = Circle::new(Point::new(50.0, 50.0), 30.0, "#123456");
        let bounds = circle.bounds();
        assert!((bounds.x0 - 20.0).abs() < f64::EPSILON);
        assert!((bounds.y0 - 20.0).abs() < f64::EPSILON);
        assert!((bounds.x1 - 80.0).abs() < f64::EPSILON);
        assert!((bounds.y1 - 80.0).abs() < f64::EPSILON);
    }
}
