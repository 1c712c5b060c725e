//! Entry listing UI rendering
//!
//! Lays out the tooltip-eligible entries and registers each label's bounds
//! with the page model so the controller can position the affordance.

use eframe::egui;
use egui::{RichText, ScrollArea};

use crate::app::AppState;
use crate::utils::to_rect;

/// Room left of each label for the info affordance.
const ENTRY_INDENT: f32 = 48.0;

/// Renders the entry list.
///
/// # Arguments
/// * `ui` - The egui UI context for drawing
/// * `state` - Mutable application state; entry bounds are written to the page model
///
/// # Returns
/// The id of the entry under the pointer, if any
pub fn render_entry_panel(ui: &mut egui::Ui, state: &mut AppState) -> Option<String> {
    let mut hovered = None;

    ScrollArea::vertical()
        .id_salt("entry_scroll_area")
        .auto_shrink([false, false])
        .show(ui, |ui| {
            for entry in state.entries.entries() {
                ui.horizontal(|ui| {
                    ui.add_space(ENTRY_INDENT);

                    let response = ui.add(
                        egui::Label::new(RichText::new(&entry.label).underline())
                            .sense(egui::Sense::hover()),
                    );
                    state
                        .controller
                        .locator_mut()
                        .place(&entry.id, to_rect(response.rect));
                    if response.hovered() {
                        hovered = Some(entry.id.clone());
                    }

                    ui.weak(&entry.id);
                });
                ui.add_space(4.0);
            }
        });

    hovered
}
