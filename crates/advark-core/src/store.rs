//! Ordered, append-only element storage.

use crate::elements::{Element, ElementId, ElementKind};
use kurbo::{Point, Rect};
use thiserror::Error;

/// Store errors.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum StoreError {
    #[error("Element store is empty")]
    Empty,
    #[error("Last element is not in progress")]
    NotInProgress,
    #[error("Update for {update:?} does not apply to a {element:?}")]
    VariantMismatch {
        update: ElementKind,
        element: ElementKind,
    },
}

/// Reference to an element in the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ElementRef {
    /// Position in paint order.
    pub index: usize,
    /// Element identifier.
    pub id: ElementId,
}

/// Geometry change for the in-progress element.
///
/// Both variants carry absolute geometry derived from the drag start and the
/// current pointer, so applying the same update twice is idempotent.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ShapeUpdate {
    /// New signed size of a rectangle.
    RectangleSize { width: f64, height: f64 },
    /// New radius edge point of a circle.
    CircleEdge(Point),
}

impl ShapeUpdate {
    /// The element variant this update applies to.
    pub fn kind(&self) -> ElementKind {
        match self {
            ShapeUpdate::RectangleSize { .. } => ElementKind::Rectangle,
            ShapeUpdate::CircleEdge(_) => ElementKind::Circle,
        }
    }
}

/// The document model: elements in paint order (back to front).
///
/// At most one element is in progress, and it is always the last one.
#[derive(Debug, Clone, Default)]
pub struct ElementStore {
    elements: Vec<Element>,
    in_progress: Option<usize>,
}

impl ElementStore {
    /// Create a new empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a finalized element.
    ///
    /// Any element still in progress is finalized first.
    pub fn append(&mut self, element: Element) -> ElementRef {
        self.finalize();
        self.push(element)
    }

    /// Append an element that will keep changing until [`finalize`](Self::finalize).
    pub fn append_in_progress(&mut self, element: Element) -> ElementRef {
        self.finalize();
        let element_ref = self.push(element);
        self.in_progress = Some(element_ref.index);
        element_ref
    }

    fn push(&mut self, element: Element) -> ElementRef {
        let id = element.id();
        self.elements.push(element);
        let index = self.elements.len() - 1;
        log::debug!("Appended element {} at index {}", id, index);
        ElementRef { index, id }
    }

    /// Apply a geometry update to the last element, which must be in progress.
    pub fn update_last(&mut self, update: ShapeUpdate) -> Result<ElementRef, StoreError> {
        let last_index = self.elements.len().checked_sub(1).ok_or(StoreError::Empty)?;
        if self.in_progress != Some(last_index) {
            return Err(StoreError::NotInProgress);
        }

        let element = &mut self.elements[last_index];
        match (element, update) {
            (Element::Rectangle(rect), ShapeUpdate::RectangleSize { width, height }) => {
                rect.set_size(width, height);
            }
            (Element::Circle(circle), ShapeUpdate::CircleEdge(edge)) => {
                circle.set_radius_to(edge);
            }
            (element, update) => {
                let err = StoreError::VariantMismatch {
                    update: update.kind(),
                    element: element.kind(),
                };
                debug_assert_eq!(update.kind(), element.kind(), "{}", err);
                log::error!("{}", err);
                return Err(err);
            }
        }

        Ok(ElementRef {
            index: last_index,
            id: self.elements[last_index].id(),
        })
    }

    /// Finalize the in-progress element, if any.
    pub fn finalize(&mut self) -> Option<ElementRef> {
        let index = self.in_progress.take()?;
        let id = self.elements[index].id();
        log::debug!("Finalized element {}", id);
        Some(ElementRef { index, id })
    }

    /// The element currently being sized, if any.
    pub fn in_progress(&self) -> Option<ElementRef> {
        self.in_progress.map(|index| ElementRef {
            index,
            id: self.elements[index].id(),
        })
    }

    /// All elements in paint order.
    pub fn elements(&self) -> &[Element] {
        &self.elements
    }

    /// Iterate elements in paint order.
    pub fn iter(&self) -> impl Iterator<Item = &Element> {
        self.elements.iter()
    }

    pub fn get(&self, index: usize) -> Option<&Element> {
        self.elements.get(index)
    }

    pub fn get_by_id(&self, id: ElementId) -> Option<&Element> {
        self.elements.iter().find(|e| e.id() == id)
    }

    pub fn last(&self) -> Option<&Element> {
        self.elements.last()
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Union of all element bounds.
    pub fn bounds(&self) -> Option<Rect> {
        self.elements
            .iter()
            .map(Element::bounds)
            .reduce(|acc, b| acc.union(b))
    }
}
