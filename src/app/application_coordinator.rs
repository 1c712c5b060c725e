//! Application-level coordination.
//!
//! Turns panel interactions into tooltip controller calls and runs the
//! per-frame timer and fetch bookkeeping.

use std::time::Duration;

use hovertip::{PointerEvent, TargetRef, TooltipConfig};
use tracing::info;

use crate::app::AppState;
use crate::state::HoverTransition;
use crate::ui::panel_manager::PanelInteraction;

/// Coordinates the host and the tooltip controller.
///
/// This struct is responsible for:
/// - Firing due timers and applying fetch results every frame
/// - Routing pointer, click and key interactions
/// - Applying configuration edits
pub struct ApplicationCoordinator;

impl ApplicationCoordinator {
    /// Advances controller time and drains finished fetches.
    ///
    /// Called once per frame before any interaction is delivered.
    pub fn tick(state: &mut AppState, now: Duration) {
        state.controller.advance(now);
        state.controller.pump_fetches();
    }

    /// Delivers one interaction collected while rendering.
    pub fn handle_interaction(state: &mut AppState, interaction: PanelInteraction) {
        match interaction {
            PanelInteraction::Pointer(transition) => Self::handle_pointer(state, transition),
            PanelInteraction::LinkClicked { entry_id, pointer } => {
                state
                    .controller
                    .on_click(PointerEvent { position: pointer }, &TargetRef::new(entry_id));
            }
            PanelInteraction::CloseRequested => state.controller.do_hide(),
            PanelInteraction::KeyPressed(key) => state.controller.key_pressed(key),
            PanelInteraction::ConfigChanged(config) => Self::apply_config(state, config),
        }
    }

    fn handle_pointer(state: &mut AppState, transition: HoverTransition) {
        let controller = &mut state.controller;
        match transition {
            HoverTransition::Entered { id, pointer } => {
                controller.on_mouse_over(PointerEvent { position: pointer }, &TargetRef::new(id));
            }
            HoverTransition::Moved { id, pointer } => {
                controller.on_mouse_move(PointerEvent { position: pointer }, &TargetRef::new(id));
            }
            HoverTransition::Left { id, pointer } => {
                controller.on_mouse_out(PointerEvent { position: pointer }, &TargetRef::new(id));
            }
        }
    }

    /// Applies edited settings. The popup node id is fixed for the session.
    fn apply_config(state: &mut AppState, mut config: TooltipConfig) {
        if config.validate().is_err() {
            return;
        }
        config.popup_id = state.controller.config().popup_id.clone();
        if config.base_url != state.controller.config().base_url {
            info!("base URL changes take effect on next launch");
        }
        state.controller.set_config(config);
    }
}
