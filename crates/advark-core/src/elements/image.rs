//! Image element for placing decoded raster images.

use super::{ElementId, ElementTrait};
use ::image::RgbaImage;
use kurbo::{Point, Rect};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;
use uuid::Uuid;

/// A decoded RGBA8 bitmap with known pixel dimensions.
///
/// Cloning shares the pixel buffer.
#[derive(Clone)]
pub struct Bitmap {
    width: u32,
    height: u32,
    pixels: Arc<RgbaImage>,
}

impl Bitmap {
    /// Wrap a decoded image.
    pub fn from_rgba(pixels: RgbaImage) -> Self {
        Self {
            width: pixels.width(),
            height: pixels.height(),
            pixels: Arc::new(pixels),
        }
    }

    /// Width in pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Height in pixels.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// `width / height`, or `None` for a degenerate bitmap.
    pub fn aspect_ratio(&self) -> Option<f64> {
        if self.width == 0 || self.height == 0 {
            return None;
        }
        Some(self.width as f64 / self.height as f64)
    }

    /// The decoded pixels.
    pub fn pixels(&self) -> &RgbaImage {
        &self.pixels
    }
}

impl Default for Bitmap {
    fn default() -> Self {
        Self::from_rgba(RgbaImage::new(0, 0))
    }
}

impl fmt::Debug for Bitmap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Bitmap")
            .field("width", &self.width)
            .field("height", &self.height)
            .finish_non_exhaustive()
    }
}

/// An image placed on the canvas.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Image {
    pub(crate) id: ElementId,
    /// Top-left corner position.
    pub position: Point,
    /// Display width.
    pub width: f64,
    /// Display height.
    pub height: f64,
    /// Fill color (images are not filled).
    pub fill: String,
    /// Decoded pixels.
    #[serde(skip)]
    pub bitmap: Bitmap,
}

impl Image {
    /// Fill string used for every image.
    pub const FILL: &'static str = "transparent";

    /// Place a bitmap at `target_width`, keeping its aspect ratio.
    ///
    /// Returns `None` if the bitmap has no pixels.
    pub fn fit_width(position: Point, bitmap: Bitmap, target_width: f64) -> Option<Self> {
        let aspect = bitmap.aspect_ratio()?;
        Some(Self {
            id: Uuid::new_v4(),
            position,
            width: target_width,
            height: target_width / aspect,
            fill: Self::FILL.to_string(),
            bitmap,
        })
    }

    /// Get the bounding rectangle.
    pub fn as_rect(&self) -> Rect {
        Rect::new(
            self.position.x,
            self.position.y,
            self.position.x + self.width,
            self.position.y + self.height,
        )
    }
}

impl ElementTrait for Image {
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
        self.as_rect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bitmap(width: u32, height: u32) -> Bitmap {
        Bitmap::from_rgba(RgbaImage::new(width, height))
    }

    #[test]
    fn test_fit_width_landscape() {
        let img = Image::fit_width(Point::new(5.0, 6.0), bitmap(400, 200), 200.0).unwrap();
        assert!((img.width - 200.0).abs() < f64::EPSILON);
        assert!((img.height - 100.0).abs() < f64::EPSILON);
        assert_eq!(img.fill, "transparent");
        assert_eq!(img.bitmap.width(), 400);
    }

    #[test]
    fn test_fit_width_portrait() {
        let img = Image::fit_width(Point::ZERO, bitmap(300, 600), 200.0).unwrap();
        assert!((img.height - 400.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_empty_bitmap_rejected() {
        assert!(Image::fit_width(Point::ZERO, bitmap(0, 10), 200.0).is_none());
        assert!(Image::fit_width(Point::ZERO, bitmap(10, 0), 200.0).is_none());
    }

    #[test]
    fn test_bitmap_clone_shares_pixels() {
        let a = bitmap(4, 4);
        let b = a.clone();
        assert!(std::ptr::eq(a.pixels(), b.pixels()));
    }

    #[test]
    fn test_bounds() {
        let img = Image::fit_width(Point::new(10.0, 20.0), bitmap(100, 50), 100.0).unwrap();
        let bounds = img.bounds();
        assert!((bounds.x0 - 10.0).abs() < f64::EPSILON);
        assert!((bounds.y0 - 20.0).abs() < f64::EPSILON);
        assert!((bounds.x1 - 110.0).abs() < f64::EPSILON);
        assert!((bounds.y1 - 70.0).abs() < f64::EPSILON);
    }
}
