//! Utility modules for the hovertip host.

pub mod formatting;
pub mod geometry;

// Re-export commonly used functions
pub use formatting::{format_memory_mb, get_current_memory_mb, strip_markup};
pub use geometry::{to_point, to_pos2, to_rect};
