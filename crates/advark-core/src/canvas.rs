//! Canvas state and event routing.

use crate::camera::{Camera, WheelDirection};
use crate::config::{CanvasConfig, ConfigError};
use crate::elements::{Bitmap, Element, Image, Text};
use crate::image_loader::ImageLoadError;
use crate::input::{InputState, PointerEvent};
use crate::requests::{CanvasRequest, ImageRequest, TextRequest};
use crate::store::{ElementRef, ElementStore};
use crate::tools::{ToolKind, ToolManager, ToolOutcome, ToolState, ViewState};
use kurbo::Point;

/// Padding kept around content by [`Canvas::fit_to_content`], in screen units.
const FIT_PADDING: f64 = 50.0;

/// Runtime canvas state.
///
/// All mutation goes through `&mut self` on the UI thread. A render layer
/// reads [`elements`](Self::elements) and [`camera`](Self::camera) each frame.
#[derive(Debug, Clone)]
pub struct Canvas {
    /// The document being edited.
    store: ElementStore,
    /// Camera for view transform.
    camera: Camera,
    /// Tool state machine.
    tools: ToolManager,
    /// Pointer tracking.
    input: InputState,
    config: CanvasConfig,
    viewport_size: kurbo::Size,
}

impl Default for Canvas {
    fn default() -> Self {
        Self::new()
    }
}

impl Canvas {
    /// Create a new canvas with the default config.
    pub fn new() -> Self {
        Self::build(CanvasConfig::default())
    }

    /// Create a canvas with a validated config.
    pub fn with_config(config: CanvasConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::build(config))
    }

    fn build(config: CanvasConfig) -> Self {
        Self {
            store: ElementStore::new(),
            camera: Camera::with_bounds(&config),
            tools: ToolManager::new(),
            input: InputState::new(),
            config,
            viewport_size: kurbo::Size::new(900.0, 600.0),
        }
    }

    /// Elements in paint order.
    pub fn elements(&self) -> &[Element] {
        self.store.elements()
    }

    pub fn store(&self) -> &ElementStore {
        &self.store
    }

    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    /// Mutable camera access for hosts that drive panning themselves.
    pub fn camera_mut(&mut self) -> &mut Camera {
        &mut self.camera
    }

    pub fn config(&self) -> &CanvasConfig {
        &self.config
    }

    pub fn tool_state(&self) -> ToolState {
        self.tools.state
    }

    /// Last known pointer position in logical coordinates.
    pub fn last_pointer_world(&self) -> Option<Point> {
        self.input
            .pointer_position
            .map(|p| self.camera.screen_to_world(p))
    }

    pub fn viewport_size(&self) -> kurbo::Size {
        self.viewport_size
    }

    /// Set the viewport size.
    pub fn set_viewport_size(&mut self, width: f64, height: f64) {
        self.viewport_size = kurbo::Size::new(width, height);
    }

    /// Switch tools. Any element being drawn is finalized.
    pub fn set_tool(&mut self, tool: ToolKind) {
        if tool != ToolKind::Select {
            self.input.end_pan();
        }
        self.tools.set_tool(tool, &mut self.store);
    }

    /// Route a pointer event.
    ///
    /// Returns a request when the host must supply text or an image.
    pub fn handle_pointer(&mut self, event: PointerEvent, view: &ViewState) -> Option<CanvasRequest> {
        self.input.handle_pointer_event(event);
        if view.tool != ToolKind::Select {
            self.input.end_pan();
        }

        match event {
            PointerEvent::Wheel { position, delta_y } => {
                let Some(screen) = position else {
                    log::trace!("Wheel event without position ignored");
                    return None;
                };
                if let Some(direction) = WheelDirection::from_delta(delta_y) {
                    self.camera.zoom_at(screen, direction);
                }
                None
            }
            PointerEvent::Down { position } => {
                let Some(screen) = position else {
                    log::trace!("Pointer-down without position ignored");
                    return None;
                };
                let world = self.camera.screen_to_world(screen);
                match self.tools.pointer_down(view, world, &mut self.store) {
                    ToolOutcome::PassThrough => {
                        self.input.begin_pan(screen);
                        None
                    }
                    ToolOutcome::Requested(request) => Some(request),
                    _ => None,
                }
            }
            PointerEvent::Move { position } => {
                let Some(screen) = position else {
                    log::trace!("Pointer-move without position ignored");
                    return None;
                };
                if self.input.is_panning() {
                    if let Some(delta) = self.input.pointer_delta() {
                        self.camera.pan(delta);
                    }
                    return None;
                }
                let world = self.camera.screen_to_world(screen);
                self.tools.pointer_move(view, world, &mut self.store);
                None
            }
            PointerEvent::Up { .. } => {
                // Finalizing needs no geometry, so a missing position still ends the drag
                self.tools.pointer_up(view, &mut self.store);
                None
            }
        }
    }

    /// Complete a text request with the user's input.
    ///
    /// `None` (cancelled) or empty input appends nothing.
    pub fn resolve_text(&mut self, request: TextRequest, input: Option<String>) -> Option<ElementRef> {
        let request_id = request.id();
        let Some(content) = input.filter(|s| !s.is_empty()) else {
            log::debug!("Text request {} produced no input", request_id);
            return None;
        };

        let (position, color) = request.into_parts();
        let text = Text::new(position, content, color).with_font_size(self.config.text_font_size);
        Some(self.append_finished(Element::Text(text)))
    }

    /// Complete an image request with the loader's result.
    ///
    /// The image is anchored at the last known pointer position, or at the
    /// configured fallback. Failures are logged and append nothing.
    pub fn finish_image_load(
        &mut self,
        request: ImageRequest,
        result: Result<Bitmap, ImageLoadError>,
    ) -> Option<ElementRef> {
        let bitmap = match result {
            Ok(bitmap) => bitmap,
            Err(err) => {
                log::error!("Error loading image for request {}: {}", request.id(), err);
                return None;
            }
        };

        let (width, height) = (bitmap.width(), bitmap.height());
        let anchor = self
            .last_pointer_world()
            .unwrap_or(self.config.image_fallback_position);
        let Some(image) = Image::fit_width(anchor, bitmap, self.config.image_target_width) else {
            log::error!(
                "Error loading image for request {}: {}",
                request.id(),
                ImageLoadError::EmptyImage { width, height }
            );
            return None;
        };

        log::info!("Placed {}x{} image at ({}, {})", width, height, anchor.x, anchor.y);
        Some(self.append_finished(Element::Image(image)))
    }

    /// Append a finished element, closing any drag so the in-progress
    /// element stays last.
    fn append_finished(&mut self, element: Element) -> ElementRef {
        self.tools.finish(&mut self.store);
        self.store.append(element)
    }

    /// Fit the view to show all elements.
    pub fn fit_to_content(&mut self) {
        if let Some(bounds) = self.store.bounds() {
            self.camera.fit_to_bounds(bounds, self.viewport_size, FIT_PADDING);
        }
    }
}
