//! Application-level modules for the hovertip host.
//!
//! This module contains the application coordinator, centralized state and
//! settings persistence.

mod app_state;
mod application_coordinator;
mod settings_coordinator;

pub use app_state::AppState;
pub use application_coordinator::ApplicationCoordinator;
pub use settings_coordinator::SettingsCoordinator;
