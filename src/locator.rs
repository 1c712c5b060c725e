//! In-memory page model implementing [`ElementLocator`].
//!
//! The GUI host re-registers entry bounds every frame and reads the popup
//! node back to draw it; tests use it as a fake page.

use std::collections::HashMap;

use crate::geometry::{Point, Rect};
use crate::traits::{ElementHandle, ElementLocator};

/// A single element on the page.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PageElement {
    pub id: String,
    pub bounds: Rect,
    pub visible: bool,
    pub content: String,
    pub position: Point,
}

/// Element arena indexed by id.
///
/// Removed elements leave a hole in the arena so that handles given out
/// earlier never alias a different element.
#[derive(Debug, Default)]
pub struct PageModel {
    elements: Vec<Option<PageElement>>,
    by_id: HashMap<String, usize>,
}

impl PageModel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an element, or updates the bounds of an existing one.
    pub fn place(&mut self, id: &str, bounds: Rect) -> ElementHandle {
        if let Some(&index) = self.by_id.get(id) {
            if let Some(element) = self.elements[index].as_mut() {
                element.bounds = bounds;
            }
            return ElementHandle(index);
        }

        let index = self.elements.len();
        self.elements.push(Some(PageElement {
            id: id.to_string(),
            bounds,
            ..Default::default()
        }));
        self.by_id.insert(id.to_string(), index);
        ElementHandle(index)
    }

    /// Removes an element from the page. Returns false if it was not present.
    pub fn remove(&mut self, id: &str) -> bool {
        match self.by_id.remove(id) {
            Some(index) => {
                self.elements[index] = None;
                true
            }
            None => false,
        }
    }

    /// Looks up an element by id.
    pub fn element(&self, id: &str) -> Option<&PageElement> {
        let index = *self.by_id.get(id)?;
        self.elements.get(index)?.as_ref()
    }

    pub fn len(&self) -> usize {
        self.by_id.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_id.is_empty()
    }

    fn get_mut(&mut self, handle: ElementHandle) -> Option<&mut PageElement> {
        self.elements.get_mut(handle.0)?.as_mut()
    }
}

impl ElementLocator for PageModel {
    fn locate(&self, id: &str) -> Option<ElementHandle> {
        self.by_id.get(id).copied().map(ElementHandle)
    }

    fn geometry(&self, handle: ElementHandle) -> Rect {
        self.elements
            .get(handle.0)
            .and_then(|slot| slot.as_ref())
            .map(|element| element.bounds)
            .unwrap_or_default()
    }

    fn set_visible(&mut self, handle: ElementHandle, visible: bool) {
        if let Some(element) = self.get_mut(handle) {
            element.visible = visible;
        }
    }

    fn set_content(&mut self, handle: ElementHandle, content: &str) {
        if let Some(element) = self.get_mut(handle) {
            element.content.clear();
            element.content.push_str(content);
        }
    }

    fn move_to(&mut self, handle: ElementHandle, position: Point) {
        if let Some(element) = self.get_mut(handle) {
            element.position = position;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_place_and_locate() {
        let mut page = PageModel::new();
        let handle = page.place("e1", Rect::new(10.0, 10.0, 50.0, 12.0));

        assert_eq!(page.locate("e1"), Some(handle));
        assert_eq!(page.geometry(handle), Rect::new(10.0, 10.0, 50.0, 12.0));
        assert_eq!(page.locate("missing"), None);
    }

    #[test]
    fn test_place_updates_bounds_in_place() {
        let mut page = PageModel::new();
        let first = page.place("e1", Rect::new(0.0, 0.0, 1.0, 1.0));
        let second = page.place("e1", Rect::new(5.0, 5.0, 2.0, 2.0));

        assert_eq!(first, second);
        assert_eq!(page.len(), 1);
        assert_eq!(page.element("e1").map(|e| e.bounds.x), Some(5.0));
    }

    #[test]
    fn test_removed_handle_is_ignored() {
        let mut page = PageModel::new();
        let handle = page.place("popup", Rect::default());
        assert!(page.remove("popup"));

        // Mutating a stale handle must not panic
        page.set_visible(handle, true);
        page.set_content(handle, "x");
        assert_eq!(page.geometry(handle), Rect::default());
        assert_eq!(page.locate("popup"), None);

        // Re-adding gets a fresh slot
        let fresh = page.place("popup", Rect::default());
        assert_ne!(fresh, handle);
    }

    #[test]
    fn test_content_replaced_wholesale() {
        let mut page = PageModel::new();
        let handle = page.place("popup", Rect::default());
        page.set_content(handle, "Loading...");
        page.set_content(handle, "Hello");
        assert_eq!(page.element("popup").map(|e| e.content.as_str()), Some("Hello"));
    }
}
