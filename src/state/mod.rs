//! State management modules for the hovertip host.
//!
//! State-only logic, no UI concerns:
//! - Entry listing (ids and labels of tooltip-eligible entries)
//! - Hover tracking (turns per-frame hover into over/move/out events)

mod entries;
mod hover;

pub use entries::{Entry, EntryState};
pub use hover::{HoverState, HoverTransition};
