use std::time::Duration;

use crate::fetch::{FetchCompletion, FetchRequest};
use crate::geometry::{Point, Rect};
use crate::scheduler::TimerAction;

/// Opaque handle to an element resolved by an [`ElementLocator`].
///
/// Handles are only meaningful to the locator that produced them and only
/// until the page changes; callers re-locate elements on every operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ElementHandle(pub usize);

/// Capability for finding and mutating page elements.
///
/// This is the controller's only view of the page. Every method is best
/// effort: a handle that no longer resolves is ignored rather than reported.
pub trait ElementLocator {
    /// Resolves an element by id, or `None` if it is not on the page
    fn locate(&self, id: &str) -> Option<ElementHandle>;

    /// Returns the on-screen bounds of the element (empty if not laid out)
    fn geometry(&self, handle: ElementHandle) -> Rect;

    /// Shows or hides the element
    fn set_visible(&mut self, handle: ElementHandle, visible: bool);

    /// Replaces the element's content wholesale
    fn set_content(&mut self, handle: ElementHandle, content: &str);

    /// Moves the element's top-left corner to `position`
    fn move_to(&mut self, handle: ElementHandle, position: Point);
}

/// Capability for deferring a controller action.
///
/// There is no cancellation: superseded actions still fire and are
/// discarded by the controller's counter check.
pub trait Scheduler {
    /// Queues `action` to be delivered back after `delay`
    fn schedule(&mut self, delay: Duration, action: TimerAction);
}

/// Capability for fetching popup fragments from the repository server.
///
/// Completion is pull-based: the host polls once per frame (or loop turn)
/// and hands each completion to the controller.
pub trait XmlFetcher {
    /// Starts fetching `request`. Must not block the caller.
    fn fetch(&mut self, request: FetchRequest);

    /// Returns the next finished request, if any
    fn poll_completion(&mut self) -> Option<FetchCompletion>;

    /// True while at least one request has not completed
    fn has_pending(&self) -> bool;
}
