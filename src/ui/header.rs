//! Header panel UI rendering
//!
//! Shows where popup content comes from and lets the user tune the tooltip
//! delays and fetch behavior.

use eframe::egui;
use hovertip::{ContentKind, FetchPolicy, TooltipConfig};

use crate::app::AppState;

/// Result of user interaction with the header panel
pub enum HeaderInteraction {
    /// One of the tooltip settings was edited
    ConfigChanged(TooltipConfig),
}

/// Renders the header with the content source and tooltip settings
///
/// # Arguments
/// * `ui` - The egui UI context for drawing
/// * `state` - Reference to application state
///
/// # Returns
/// * `Option<HeaderInteraction>` - User interaction result
pub fn render_header(ui: &mut egui::Ui, state: &AppState) -> Option<HeaderInteraction> {
    let mut config = state.controller.config().clone();
    let mut changed = false;

    ui.horizontal(|ui| {
        let source = if config.base_url.is_empty() {
            format!("Source: {}", state.controller.fetcher().describe())
        } else {
            format!("Source: {} ({})", state.controller.fetcher().describe(), config.base_url)
        };
        ui.label(source);

        ui.separator();

        ui.label("Show after:");
        changed |= ui
            .add(egui::DragValue::new(&mut config.show_delay_ms).range(50..=5000).suffix(" ms"))
            .changed();

        ui.label("Hide after:");
        changed |= ui
            .add(egui::DragValue::new(&mut config.hide_delay_ms).range(50..=10000).suffix(" ms"))
            .changed();

        ui.separator();

        let previous_kind = config.content_kind;
        egui::ComboBox::from_id_salt("content_kind")
            .selected_text(match config.content_kind {
                ContentKind::Metadata => "Information",
                ContentKind::Links => "Links",
            })
            .show_ui(ui, |ui| {
                ui.selectable_value(&mut config.content_kind, ContentKind::Metadata, "Information");
                ui.selectable_value(&mut config.content_kind, ContentKind::Links, "Links");
            });
        changed |= previous_kind != config.content_kind;

        let previous_policy = config.fetch_policy;
        egui::ComboBox::from_id_salt("fetch_policy")
            .selected_text(match config.fetch_policy {
                FetchPolicy::ApplyAlways => "Apply every result",
                FetchPolicy::FenceByGeneration => "Latest result only",
            })
            .show_ui(ui, |ui| {
                ui.selectable_value(&mut config.fetch_policy, FetchPolicy::ApplyAlways, "Apply every result");
                ui.selectable_value(
                    &mut config.fetch_policy,
                    FetchPolicy::FenceByGeneration,
                    "Latest result only",
                );
            });
        changed |= previous_policy != config.fetch_policy;
    });

    changed.then_some(HeaderInteraction::ConfigChanged(config))
}
