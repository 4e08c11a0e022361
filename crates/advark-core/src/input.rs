//! Pointer input events and tracking.

use kurbo::{Point, Vec2};
use serde::{Deserialize, Serialize};

/// Pointer event in screen coordinates.
///
/// Positions are optional because some sources (synthetic events, pointers
/// leaving the surface) report none; such events are ignored.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum PointerEvent {
    Down { position: Option<Point> },
    Move { position: Option<Point> },
    Up { position: Option<Point> },
    Wheel { position: Option<Point>, delta_y: f64 },
}

impl PointerEvent {
    /// The reported screen position, if any.
    pub fn position(&self) -> Option<Point> {
        match *self {
            PointerEvent::Down { position }
            | PointerEvent::Move { position }
            | PointerEvent::Up { position }
            | PointerEvent::Wheel { position, .. } => position,
        }
    }
}

/// Tracks the pointer across events.
#[derive(Debug, Clone, Default)]
pub struct InputState {
    /// Last known pointer position in screen coordinates.
    pub pointer_position: Option<Point>,
    /// Previous pointer position for delta calculations.
    pub previous_pointer_position: Option<Point>,
    /// Screen position where the current pan drag started.
    pan_start: Option<Point>,
}

impl InputState {
    /// Create a new input state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Process a pointer event.
    pub fn handle_pointer_event(&mut self, event: PointerEvent) {
        if let Some(position) = event.position() {
            self.previous_pointer_position = self.pointer_position;
            self.pointer_position = Some(position);
        }
        if let PointerEvent::Up { .. } = event {
            self.pan_start = None;
        }
    }

    /// Start a pan drag at the given screen position.
    pub fn begin_pan(&mut self, position: Point) {
        self.pan_start = Some(position);
    }

    /// Stop panning.
    pub fn end_pan(&mut self) {
        self.pan_start = None;
    }

    /// Check if a pan drag is active.
    pub fn is_panning(&self) -> bool {
        self.pan_start.is_some()
    }

    /// Get the pointer movement delta since the previous event.
    pub fn pointer_delta(&self) -> Option<Vec2> {
        Some(self.pointer_position? - self.previous_pointer_position?)
    }
}
