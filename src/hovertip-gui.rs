//! Hovertip desktop host
//!
//! Stands in for the repository's entry listing page: every entry label is
//! tooltip-eligible, and the single shared popup node is drawn as an egui
//! area on top of the list.
//! - Pointer hover, movement and exit are routed into the tooltip controller
//! - Timers are driven from wall-clock time once per frame

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]
//! - Popup content is fetched from a repository server, or generated
//!   offline when no base URL is configured
//! - Tooltip settings persist across sessions
//!
//! Module layout:
//! - `app/` - Application state and coordination
//! - `state/` - Entry list and hover tracking
//! - `io/` - Fetcher selection
//! - `ui/` - Panels, popup overlay and status bar
//! - `utils/` - Formatting and geometry conversion

use eframe::egui;
use std::time::{Duration, Instant};

mod app;
mod io;
mod state;
mod ui;
mod utils;

use app::{AppState, ApplicationCoordinator, SettingsCoordinator};
use hovertip::TooltipConfig;
use state::Entry;
use ui::panel_manager::PanelManager;

const CONFIG_KEY: &str = "tooltip_config";

/// Command-line options for the host.
struct LaunchOptions {
    /// Repository base URL; overrides the persisted one
    base_url: Option<String>,
    /// Ignore any base URL and fabricate responses
    force_virtual: bool,
    entries: Vec<Entry>,
}

fn parse_args() -> anyhow::Result<LaunchOptions> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let mut options = LaunchOptions {
        base_url: None,
        force_virtual: false,
        entries: Vec::new(),
    };

    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "--base" => {
                i += 1;
                if i >= args.len() {
                    anyhow::bail!("--base requires a URL argument");
                }
                options.base_url = Some(args[i].clone());
            }
            "--virtual" => options.force_virtual = true,
            "-h" | "--help" => {
                println!("Usage: hovertip-gui [--base <url>] [--virtual] [ENTRY_ID[=LABEL]...]");
                std::process::exit(0);
            }
            other => options.entries.push(Entry::parse(other)),
        }
        i += 1;
    }

    Ok(options)
}

fn main() -> anyhow::Result<()> {
    hovertip::init_logging();

    let launch = parse_args()?;

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([900.0, 600.0])
            .with_title("Hovertip"),
        ..Default::default()
    };

    eframe::run_native(
        "Hovertip",
        native_options,
        Box::new(move |cc| Ok(Box::new(HovertipApp::new(cc, launch)))),
    )
    .map_err(|err| anyhow::anyhow!("failed to start the GUI: {err}"))
}

/// The host application.
///
/// Like the controller it wraps, the app is a thin shell: the
/// `ApplicationCoordinator` turns panel interactions into controller calls and
/// `PanelManager` draws whatever state results.
struct HovertipApp {
    state: AppState,
    /// Origin of the timeline handed to the controller
    started: Instant,
}

impl HovertipApp {
    fn new(cc: &eframe::CreationContext, launch: LaunchOptions) -> Self {
        let mut config: TooltipConfig =
            SettingsCoordinator::load_setting_or(cc.storage, CONFIG_KEY, TooltipConfig::default());
        if let Some(base_url) = launch.base_url {
            config.base_url = base_url;
        }
        if launch.force_virtual {
            config.base_url.clear();
        }

        Self {
            state: AppState::new(config, launch.entries, &cc.egui_ctx),
            started: Instant::now(),
        }
    }
}

impl eframe::App for HovertipApp {
    /// Persists the tooltip configuration on shutdown.
    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        SettingsCoordinator::save_setting(storage, CONFIG_KEY, self.state.controller.config());
    }

    /// One host event-loop turn:
    /// 1. Fire due timers and apply finished fetches
    /// 2. Render panels, collecting pointer/key/click interactions
    /// 3. Deliver the interactions to the controller
    /// 4. Keep repainting while anything is outstanding
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let now = self.started.elapsed();
        ApplicationCoordinator::tick(&mut self.state, now);

        for interaction in PanelManager::render_all_panels(ctx, &mut self.state) {
            ApplicationCoordinator::handle_interaction(&mut self.state, interaction);
        }

        if self.state.controller.has_pending_work() {
            ctx.request_repaint_after(Duration::from_millis(16));
        }
    }
}
