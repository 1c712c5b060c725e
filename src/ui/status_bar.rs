//! Status bar UI rendering
//!
//! Shows memory usage and the tooltip controller's internals: state,
//! current target, interaction counter and any outstanding fetch.

use eframe::egui;
use egui::RichText;
use hovertip::TooltipState;

use crate::app::AppState;
use crate::utils::{format_memory_mb, get_current_memory_mb};

/// Renders the status panel at the bottom of the window
///
/// # Arguments
/// * `ui` - The egui UI context for drawing
/// * `state` - Reference to application state
pub fn render_status_bar(ui: &mut egui::Ui, state: &AppState) {
    let controller = &state.controller;

    ui.horizontal(|ui| {
        let memory_text = format_memory_mb(get_current_memory_mb());
        ui.label(RichText::new(&memory_text).strong());
        ui.label(RichText::new("|").strong());

        let state_text = match controller.state() {
            TooltipState::Idle => "Idle",
            TooltipState::LinkShown => "Link shown",
            TooltipState::TipShown => "Tip shown",
        };
        ui.label(RichText::new(format!(
            "State: {} | Target: {} | Interactions: {}",
            state_text,
            controller.current_target().unwrap_or("-"),
            controller.counter().0
        )).strong());

        if let Some(generation) = controller.pending_request() {
            ui.label(RichText::new("|").strong());
            ui.label(RichText::new(format!("Fetching (request #{})", generation.0))
                .strong()
                .color(egui::Color32::YELLOW));
        }
    });
}
