//! Element definitions for the design surface.

mod circle;
mod color;
mod image;
mod rectangle;
mod text;

pub use circle::Circle;
pub use color::{Rgba, parse_color};
pub use self::image::{Bitmap, Image};
pub use rectangle::Rectangle;
pub use text::Text;

use kurbo::{Point, Rect};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for elements.
pub type ElementId = Uuid;

/// Tag naming the variant of an [`Element`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ElementKind {
    Rectangle,
    Circle,
    Text,
    Image,
}

/// Common read-only view over all element types.
pub trait ElementTrait {
    /// Get the unique identifier.
    fn id(&self) -> ElementId;

    /// Anchor point in logical coordinates.
    fn position(&self) -> Point;

    /// Fill color string, as captured at creation.
    fn fill(&self) -> &str;

    /// Axis-aligned bounding box in logical coordinates.
    fn bounds(&self) -> Rect;
}

/// A design element. Store order is paint order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum Element {
    Rectangle(Rectangle),
    Circle(Circle),
    Text(Text),
    Image(Image),
}

impl Element {
    pub fn id(&self) -> ElementId {
        match self {
            Element::Rectangle(e) => e.id(),
            Element::Circle(e) => e.id(),
            Element::Text(e) => e.id(),
            Element::Image(e) => e.id(),
        }
    }

    pub fn position(&self) -> Point {
        match self {
            Element::Rectangle(e) => e.position(),
            Element::Circle(e) => e.position(),
            Element::Text(e) => e.position(),
            Element::Image(e) => e.position(),
        }
    }

    pub fn fill(&self) -> &str {
        match self {
            Element::Rectangle(e) => e.fill(),
            Element::Circle(e) => e.fill(),
            Element::Text(e) => e.fill(),
            Element::Image(e) => e.fill(),
        }
    }

    pub fn bounds(&self) -> Rect {
        match self {
            Element::Rectangle(e) => e.bounds(),
            Element::Circle(e) => e.bounds(),
            Element::Text(e) => e.bounds(),
            Element::Image(e) => e.bounds(),
        }
    }

    pub fn kind(&self) -> ElementKind {
        match self {
            Element::Rectangle(_) => ElementKind::Rectangle,
            Element::Circle(_) => ElementKind::Circle,
            Element::Text(_) => ElementKind::Text,
            Element::Image(_) => ElementKind::Image,
        }
    }

    /// Parse the fill string into RGBA, if it is a known color form.
    pub fn fill_rgba(&self) -> Option<Rgba> {
        parse_color(self.fill())
    }

    /// Get the rectangle if this element is a rectangle.
    pub fn as_rectangle(&self) -> Option<&Rectangle> {
        match self {
            Element::Rectangle(r) => Some(r),
            _ => None,
        }
    }

    /// Get the circle if this element is a circle.
    pub fn as_circle(&self) -> Option<&Circle> {
        match self {
            Element::Circle(c) => Some(c),
            _ => None,
        }
    }

    /// Get the text if this element is a text.
    pub fn as_text(&self) -> Option<&Text> {
        match self {
            Element::Text(t) => Some(t),
            _ => None,
        }
    }

    /// Get the image if this element is an image.
    pub fn as_image(&self) -> Option<&Image> {
        match self {
            Element::Image(img) => Some(img),
            _ => None,
        }
    }
}
