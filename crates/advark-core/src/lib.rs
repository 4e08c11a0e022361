//! Advark Core Library
//!
//! Canvas interaction engine for the Advark design surface: the element
//! model, the tool state machine that turns pointer gestures into elements,
//! and the pan/zoom view transform. Rendering, toolbars and file pickers live
//! with the host; it feeds events in and reads elements and the camera out.

pub mod camera;
pub mod canvas;
pub mod config;
pub mod elements;
pub mod image_loader;
pub mod input;
pub mod requests;
pub mod store;
pub mod tools;

pub use camera::{Camera, WheelDirection};
pub use canvas::Canvas;
pub use config::{CanvasConfig, ConfigError};
pub use elements::{Bitmap, Element, ElementId, ElementKind, ElementTrait};
pub use image_loader::{DecodingImageLoader, ImageLoadError, ImageLoader, ImageSource};
pub use input::{InputState, PointerEvent};
pub use requests::{CanvasRequest, ImageRequest, TextRequest};
pub use store::{ElementRef, ElementStore, ShapeUpdate, StoreError};
pub use tools::{ToolKind, ToolManager, ToolState, ViewState};
