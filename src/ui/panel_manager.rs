//! Panel orchestration and layout management.
//!
//! Renders every panel, then converts what happened during the frame into
//! the interactions the application coordinator delivers to the controller.

use eframe::egui;
use hovertip::{Key, Point, TooltipConfig};

use crate::app::AppState;
use crate::state::HoverTransition;
use crate::ui::{entry_panel, header, popup_overlay, status_bar};
use crate::utils::to_point;

/// Result of panel interactions that need to be handled by the application coordinator.
pub enum PanelInteraction {
    /// Pointer entered, moved within, or left an entry
    Pointer(HoverTransition),
    /// The info link next to an entry was clicked
    LinkClicked { entry_id: String, pointer: Point },
    /// The open tip's close button was clicked
    CloseRequested,
    /// A key the controller may care about was pressed
    KeyPressed(Key),
    /// Tooltip settings were edited in the header
    ConfigChanged(TooltipConfig),
}

/// Manages the layout and rendering of all UI panels.
pub struct PanelManager;

impl PanelManager {
    /// Renders all panels in the application window.
    ///
    /// Returns interactions in the order the controller should see them:
    /// settings, pointer transitions, popup clicks, then keys.
    pub fn render_all_panels(ctx: &egui::Context, state: &mut AppState) -> Vec<PanelInteraction> {
        let mut interactions = Vec::new();

        egui::TopBottomPanel::top("header").show(ctx, |ui| {
            if let Some(header::HeaderInteraction::ConfigChanged(config)) =
                header::render_header(ui, state)
            {
                interactions.push(PanelInteraction::ConfigChanged(config));
            }
        });

        egui::TopBottomPanel::bottom("status_panel").show(ctx, |ui| {
            status_bar::render_status_bar(ui, state);
        });

        let mut hovered_entry = None;
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading("Entries");
            ui.separator();
            hovered_entry = entry_panel::render_entry_panel(ui, state);
        });

        let popup = popup_overlay::render_popup(ctx, state);

        // The popup belongs to its target: resting on it counts as resting on the entry
        let hovered = if popup.hovered {
            state.controller.current_target().map(str::to_string)
        } else {
            hovered_entry
        };
        let pointer = ctx.input(|i| i.pointer.hover_pos()).map(to_point);
        interactions.extend(
            state
                .hover
                .update(hovered.as_deref(), pointer)
                .into_iter()
                .map(PanelInteraction::Pointer),
        );

        match popup.interaction {
            Some(popup_overlay::PopupInteraction::LinkClicked { entry_id, pointer }) => {
                interactions.push(PanelInteraction::LinkClicked { entry_id, pointer });
            }
            Some(popup_overlay::PopupInteraction::CloseRequested) => {
                interactions.push(PanelInteraction::CloseRequested);
            }
            None => {}
        }

        if ctx.input(|i| i.key_pressed(egui::Key::Enter)) {
            interactions.push(PanelInteraction::KeyPressed(Key::Enter));
        }

        interactions
    }
}
