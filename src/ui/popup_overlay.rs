//! Popup node rendering
//!
//! Draws the shared popup node as a foreground area. What it shows depends
//! on the controller state: a single clickable link while `LinkShown`, the
//! fetched fragment with a close button while `TipShown`.

use eframe::egui;
use egui::{RichText, ScrollArea};
use hovertip::{Point, TooltipState};

use crate::app::AppState;
use crate::utils::{strip_markup, to_point, to_pos2};

const TIP_MAX_WIDTH: f32 = 360.0;
const TIP_MAX_HEIGHT: f32 = 280.0;

/// Result of user interaction with the popup
pub enum PopupInteraction {
    /// The info link was clicked
    LinkClicked { entry_id: String, pointer: Point },
    /// The close button of an open tip was clicked
    CloseRequested,
}

/// What happened to the popup this frame.
#[derive(Default)]
pub struct PopupFrame {
    /// Pointer is over the popup
    pub hovered: bool,
    pub interaction: Option<PopupInteraction>,
}

/// Renders the popup if the controller made it visible.
pub fn render_popup(ctx: &egui::Context, state: &AppState) -> PopupFrame {
    let mut frame = PopupFrame::default();

    let Some(popup) = state.popup() else {
        return frame;
    };
    if !popup.visible {
        return frame;
    }

    let target = state.controller.current_target().unwrap_or_default().to_string();

    let area = egui::Area::new(egui::Id::new(popup.id.as_str()))
        .order(egui::Order::Foreground)
        .fixed_pos(to_pos2(popup.position))
        .show(ctx, |ui| {
            egui::Frame::popup(ui.style()).show(ui, |ui| match state.controller.state() {
                TooltipState::LinkShown => {
                    if ui.small_button(popup.content.as_str()).clicked() {
                        let pointer = ctx
                            .input(|i| i.pointer.interact_pos())
                            .map(to_point)
                            .unwrap_or(popup.position);
                        frame.interaction = Some(PopupInteraction::LinkClicked {
                            entry_id: target.clone(),
                            pointer,
                        });
                    }
                }
                TooltipState::TipShown => {
                    ui.set_max_width(TIP_MAX_WIDTH);
                    ui.horizontal(|ui| {
                        let title = state
                            .entries
                            .find(&target)
                            .map(|entry| entry.label.as_str())
                            .unwrap_or(target.as_str());
                        ui.label(RichText::new(title).strong());
                        if ui.small_button("✖").clicked() {
                            frame.interaction = Some(PopupInteraction::CloseRequested);
                        }
                    });
                    ui.separator();
                    ScrollArea::vertical()
                        .id_salt("popup_scroll_area")
                        .max_height(TIP_MAX_HEIGHT)
                        .show(ui, |ui| {
                            ui.label(strip_markup(&popup.content));
                        });
                    ui.weak("Enter to close");
                }
                TooltipState::Idle => {}
            });
        });

    frame.hovered = area.response.contains_pointer();
    frame
}
