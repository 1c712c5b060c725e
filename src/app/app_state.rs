//! Centralized application state for the hovertip host.
//!
//! The tooltip controller owns the page model (and with it the popup node),
//! the timer queue and the fetcher. The remaining components hold what the
//! host itself needs to turn egui frames into controller events.

use eframe::egui;
use hovertip::{PageElement, PageModel, Rect, TimerQueue, TooltipConfig, TooltipController};

use crate::io::HostFetcher;
use crate::state::{Entry, EntryState, HoverState};

/// The controller as instantiated by the host.
pub type HostController = TooltipController<PageModel, TimerQueue, HostFetcher>;

/// Main application state composed of focused components.
pub struct AppState {
    /// Tooltip state machine and the page it drives
    pub controller: HostController,

    /// Entries listed on the page
    pub entries: EntryState,

    /// Previous frame's hover, for deriving over/move/out
    pub hover: HoverState,
}

impl AppState {
    /// Creates the state, choosing a fetcher from the configured base URL.
    pub fn new(config: TooltipConfig, entries: Vec<Entry>, ctx: &egui::Context) -> Self {
        let fetcher = HostFetcher::for_base_url(&config.base_url, ctx);
        Self::with_fetcher(config, entries, fetcher)
    }

    /// Creates the state with an explicit fetcher.
    pub fn with_fetcher(config: TooltipConfig, entries: Vec<Entry>, fetcher: HostFetcher) -> Self {
        // The popup node exists from the start; entries are placed as they are laid out
        let mut page = PageModel::new();
        page.place(&config.popup_id, Rect::default());

        Self {
            controller: TooltipController::new(config, page, TimerQueue::new(), fetcher),
            entries: EntryState::new(entries),
            hover: HoverState::new(),
        }
    }

    /// The shared popup node.
    pub fn popup(&self) -> Option<&PageElement> {
        let popup_id = &self.controller.config().popup_id;
        self.controller.locator().element(popup_id)
    }
}
