//! Requests the canvas hands to its host for asynchronous input.
//!
//! A request is resolved by passing it back to the canvas by value, so each
//! request completes at most once. Dropping a request cancels it.

use kurbo::Point;
use std::sync::atomic::{AtomicU64, Ordering};

/// Identifier shared by text and image requests.
pub type RequestId = u64;

fn next_request_id() -> RequestId {
    static REQUEST_COUNTER: AtomicU64 = AtomicU64::new(1);
    REQUEST_COUNTER.fetch_add(1, Ordering::Relaxed)
}

/// Ask the host for text to place at a point.
#[derive(Debug, PartialEq)]
#[must_use = "dropping a text request cancels it"]
pub struct TextRequest {
    id: RequestId,
    position: Point,
    color: String,
}

impl TextRequest {
    pub(crate) fn new(position: Point, color: String) -> Self {
        Self {
            id: next_request_id(),
            position,
            color,
        }
    }

    pub fn id(&self) -> RequestId {
        self.id
    }

    /// Logical position the text will be anchored at.
    pub fn position(&self) -> Point {
        self.position
    }

    /// Fill color captured when the request was made.
    pub fn color(&self) -> &str {
        &self.color
    }

    pub(crate) fn into_parts(self) -> (Point, String) {
        (self.position, self.color)
    }
}

/// Ask the host to pick and load an image file.
#[derive(Debug, PartialEq, Eq)]
#[must_use = "dropping an image request cancels it"]
pub struct ImageRequest {
    id: RequestId,
}

impl ImageRequest {
    pub(crate) fn new() -> Self {
        Self {
            id: next_request_id(),
        }
    }

    pub fn id(&self) -> RequestId {
        self.id
    }
}

/// Work the host must do on behalf of the canvas.
#[derive(Debug, PartialEq)]
pub enum CanvasRequest {
    /// Prompt the user for text.
    Text(TextRequest),
    /// Open the file picker and load an image.
    Image(ImageRequest),
}
