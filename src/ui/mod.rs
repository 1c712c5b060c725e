//! UI panel rendering subsystem
//!
//! - Header panel (content source, tooltip settings)
//! - Entry panel (tooltip-eligible entry labels)
//! - Popup overlay (the shared popup node)
//! - Status bar (controller state)
//! - Panel manager (panel orchestration and layout)

pub mod entry_panel;
pub mod header;
pub mod panel_manager;
pub mod popup_overlay;
pub mod status_bar;
