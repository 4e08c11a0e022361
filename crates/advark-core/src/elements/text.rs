//! Text element.

use super::{ElementId, ElementTrait};
use kurbo::{Point, Rect};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A single run of text anchored at its baseline-left point.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Text {
    pub(crate) id: ElementId,
    /// Left end of the first line's baseline.
    pub position: Point,
    /// The text content (never empty when created by a tool).
    pub content: String,
    /// Font size in logical units.
    pub font_size: f64,
    /// Fill color.
    pub fill: String,
}

impl Text {
    /// Default font size.
    pub const DEFAULT_FONT_SIZE: f64 = 20.0;

    /// Fraction of the font size above the baseline.
    const ASCENT: f64 = 0.8;

    /// Average glyph advance as a fraction of the font size.
    const CHAR_WIDTH_FACTOR: f64 = 0.55;

    /// Line height as a multiple of the font size.
    const LINE_HEIGHT: f64 = 1.2;

    /// Create a new text element.
    pub fn new(position: Point, content: String, fill: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            position,
            content,
            font_size: Self::DEFAULT_FONT_SIZE,
            fill: fill.into(),
        }
    }

    /// Set the font size.
    pub fn with_font_size(mut self, size: f64) -> Self {
        self.font_size = size;
        self
    }

    /// Get the text content.
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Approximate width; the real width depends on the renderer's font.
    fn approximate_width(&self) -> f64 {
        let max_line_len = self
            .content
            .lines()
            .map(|line| line.chars().count())
            .max()
            .unwrap_or(0);
        max_line_len as f64 * self.font_size * Self::CHAR_WIDTH_FACTOR
    }

    fn line_count(&self) -> usize {
        self.content.lines().count().max(1)
    }
}

impl ElementTrait for Text {
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
        let top = self.position.y - self.font_size * Self::ASCENT;
        let height = self.line_count() as f64 * self.font_size * Self::LINE_HEIGHT;
        Rect::new(
            self.position.x,
            top,
            self.position.x + self.approximate_width(),
            top + height,
        )
    }
}
