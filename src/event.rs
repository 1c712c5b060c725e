//! Host events delivered to the tooltip controller.

use crate::geometry::Point;

/// Pointer information carried by mouse events.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PointerEvent {
    /// Pointer location in screen coordinates at the time of the event
    pub position: Point,
}

impl PointerEvent {
    pub fn at(x: f32, y: f32) -> Self {
        Self {
            position: Point::new(x, y),
        }
    }
}

/// Element a tooltip event is directed at.
///
/// `id` names the repository entry (and its element on the page). The
/// optional `anchor` names a secondary element, usually the visible link,
/// whose geometry is preferred when positioning the affordance.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TargetRef {
    pub id: String,
    pub anchor: Option<String>,
}

impl TargetRef {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            anchor: None,
        }
    }

    pub fn with_anchor(mut self, anchor: impl Into<String>) -> Self {
        self.anchor = Some(anchor.into());
        self
    }

    /// Id of the element whose geometry positions the affordance.
    pub fn placement_id(&self) -> &str {
        self.anchor.as_deref().unwrap_or(&self.id)
    }
}

impl From<&str> for TargetRef {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

/// Keyboard input as seen by the controller. Only Enter has a meaning.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Enter,
    Other,
}
