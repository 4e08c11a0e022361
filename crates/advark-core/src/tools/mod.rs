//! Tool system: turns pointer gestures into element mutations.

use crate::elements::{Circle, Element, Rectangle};
use crate::requests::{CanvasRequest, ImageRequest, TextRequest};
use crate::store::{ElementRef, ElementStore, ShapeUpdate};
use kurbo::Point;
use serde::{Deserialize, Serialize};

/// Available tools.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum ToolKind {
    #[default]
    Select,
    Rectangle,
    Circle,
    Text,
    Image,
}

/// Inputs owned by the toolbar and color picker, passed in with every event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ViewState {
    /// Active tool.
    pub tool: ToolKind,
    /// Current color (e.g. `#RRGGBB`).
    pub color: String,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            tool: ToolKind::default(),
            color: "#000000".to_string(),
        }
    }
}

impl ViewState {
    pub fn new(tool: ToolKind, color: impl Into<String>) -> Self {
        Self {
            tool,
            color: color.into(),
        }
    }
}

/// State of a tool interaction.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum ToolState {
    /// Waiting for a pointer-down.
    #[default]
    Idle,
    /// An element is being sized by a drag.
    Drawing {
        /// Store index of the in-progress element.
        index: usize,
        /// Logical drag start.
        start: Point,
        /// Tool that started the drag.
        tool: ToolKind,
    },
}

/// What a pointer event did.
#[derive(Debug, PartialEq)]
pub enum ToolOutcome {
    /// Nothing changed.
    Ignored,
    /// The select tool saw the event; the caller handles panning.
    PassThrough,
    /// A new in-progress element was appended.
    Started(ElementRef),
    /// The in-progress element was resized.
    Resized(ElementRef),
    /// The in-progress element was finalized.
    Finalized(ElementRef),
    /// The host must fulfil a request.
    Requested(CanvasRequest),
}

/// Manages the current tool and its state.
#[derive(Debug, Clone, Default)]
pub struct ToolManager {
    /// Tool seen with the most recent event.
    pub current_tool: ToolKind,
    /// Current state of the tool.
    pub state: ToolState,
}

impl ToolManager {
    /// Create a new tool manager.
    pub fn new() -> Self {
        Self::default()
    }

    /// Switch tools, finalizing any drag in progress.
    pub fn set_tool(&mut self, tool: ToolKind, store: &mut ElementStore) -> Option<ElementRef> {
        if tool == self.current_tool {
            return None;
        }
        log::debug!("Tool changed: {:?} -> {:?}", self.current_tool, tool);
        self.current_tool = tool;
        self.finish(store)
    }

    /// Check if an element is being drawn.
    pub fn is_drawing(&self) -> bool {
        matches!(self.state, ToolState::Drawing { .. })
    }

    /// Handle a pointer-down at a logical position.
    pub fn pointer_down(
        &mut self,
        view: &ViewState,
        point: Point,
        store: &mut ElementStore,
    ) -> ToolOutcome {
        self.set_tool(view.tool, store);
        // A lost pointer-up leaves a drag open; close it before starting anew
        self.finish(store);

        match view.tool {
            ToolKind::Select => ToolOutcome::PassThrough,
            ToolKind::Rectangle => {
                let rect = Rectangle::new(point, 0.0, 0.0, view.color.clone());
                self.begin(Element::Rectangle(rect), point, view.tool, store)
            }
            ToolKind::Circle => {
                let circle = Circle::new(point, 0.0, view.color.clone());
                self.begin(Element::Circle(circle), point, view.tool, store)
            }
            ToolKind::Text => {
                let request = TextRequest::new(point, view.color.clone());
                log::debug!("Requesting text input at ({}, {})", point.x, point.y);
                ToolOutcome::Requested(CanvasRequest::Text(request))
            }
            ToolKind::Image => {
                log::debug!("Requesting image file");
                ToolOutcome::Requested(CanvasRequest::Image(ImageRequest::new()))
            }
        }
    }

    fn begin(
        &mut self,
        element: Element,
        start: Point,
        tool: ToolKind,
        store: &mut ElementStore,
    ) -> ToolOutcome {
        let element_ref = store.append_in_progress(element);
        self.state = ToolState::Drawing {
            index: element_ref.index,
            start,
            tool,
        };
        ToolOutcome::Started(element_ref)
    }

    /// Handle a pointer-move at a logical position.
    pub fn pointer_move(
        &mut self,
        view: &ViewState,
        point: Point,
        store: &mut ElementStore,
    ) -> ToolOutcome {
        if self.set_tool(view.tool, store).is_some() {
            return ToolOutcome::Ignored;
        }
        let ToolState::Drawing { index, start, tool } = self.state else {
            return ToolOutcome::Ignored;
        };
        // The store may have been driven directly since the drag began
        if store.in_progress().map(|r| r.index) != Some(index) {
            log::warn!("Drag element {} is no longer in progress", index);
            self.state = ToolState::Idle;
            return ToolOutcome::Ignored;
        }

        let update = match tool {
            ToolKind::Rectangle => ShapeUpdate::RectangleSize {
                width: point.x - start.x,
                height: point.y - start.y,
            },
            ToolKind::Circle => ShapeUpdate::CircleEdge(point),
            ToolKind::Select | ToolKind::Text | ToolKind::Image => return ToolOutcome::Ignored,
        };

        match store.update_last(update) {
            Ok(element_ref) => ToolOutcome::Resized(element_ref),
            Err(err) => {
                log::warn!("Dropping drag update: {}", err);
                self.state = ToolState::Idle;
                ToolOutcome::Ignored
            }
        }
    }

    /// Handle a pointer-up.
    pub fn pointer_up(&mut self, view: &ViewState, store: &mut ElementStore) -> ToolOutcome {
        if let Some(element_ref) = self.set_tool(view.tool, store) {
            return ToolOutcome::Finalized(element_ref);
        }
        match self.finish(store) {
            Some(element_ref) => ToolOutcome::Finalized(element_ref),
            None => ToolOutcome::Ignored,
        }
    }

    /// Finalize the drag in progress, if any, and return to idle.
    pub fn finish(&mut self, store: &mut ElementStore) -> Option<ElementRef> {
        if !self.is_drawing() {
            return None;
        }
        self.state = ToolState::Idle;
        store.finalize()
    }
}
