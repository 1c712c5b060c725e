//! Pointer hover tracking.
//!
//! egui reports which widget is hovered each frame; the tooltip controller
//! wants DOM-style over/move/out events. This module diffs consecutive
//! frames to produce them.

use hovertip::Point;

/// A DOM-style pointer event derived from two consecutive frames.
#[derive(Debug, Clone, PartialEq)]
pub enum HoverTransition {
    Entered { id: String, pointer: Point },
    Moved { id: String, pointer: Point },
    Left { id: String, pointer: Point },
}

/// What the pointer was over on the previous frame.
#[derive(Debug, Clone, Default)]
pub struct HoverState {
    hovered: Option<String>,
    last_pointer: Option<Point>,
}

impl HoverState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the id hovered on the previous frame, if any.
    pub fn hovered(&self) -> Option<&str> {
        self.hovered.as_deref()
    }

    /// Records this frame's hover and returns the transitions since the last one.
    ///
    /// Leaving one element for another yields `Left` before `Entered`.
    /// Staying on the same element yields `Moved` only if the pointer moved.
    pub fn update(&mut self, hovered: Option<&str>, pointer: Option<Point>) -> Vec<HoverTransition> {
        let mut transitions = Vec::new();
        let pointer_at = pointer.or(self.last_pointer).unwrap_or_default();

        match (self.hovered.as_deref(), hovered) {
            (Some(previous), Some(current)) if previous == current => {
                if pointer.is_some() && pointer != self.last_pointer {
                    transitions.push(HoverTransition::Moved {
                        id: current.to_string(),
                        pointer: pointer_at,
                    });
                }
            }
            (previous, current) => {
                if let Some(previous) = previous {
                    transitions.push(HoverTransition::Left {
                        id: previous.to_string(),
                        pointer: pointer_at,
                    });
                }
                if let Some(current) = current {
                    transitions.push(HoverTransition::Entered {
                        id: current.to_string(),
                        pointer: pointer_at,
                    });
                }
            }
        }

        self.hovered = hovered.map(str::to_string);
        if pointer.is_some() {
            self.last_pointer = pointer;
        }
        transitions
    }
}
