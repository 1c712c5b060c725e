//! Fetcher selection for the host.
//!
//! Wraps the real HTTP fetcher and the offline generator behind one type so
//! the controller's type does not depend on how the host was launched.

use std::sync::Arc;
use std::time::Duration;

use eframe::egui;
use hovertip::{FetchCompletion, FetchRequest, HttpXmlFetcher, VirtualFetcher, XmlFetcher};
use tracing::{info, warn};

const REQUEST_TIMEOUT: Duration = Duration::from_secs(15);

/// The fetcher the host runs with.
pub enum HostFetcher {
    /// Talks to a repository server
    Http(HttpXmlFetcher),
    /// Fabricates responses locally
    Virtual(VirtualFetcher),
}

impl HostFetcher {
    /// Picks HTTP when a base URL is set, otherwise the offline generator.
    ///
    /// The HTTP fetcher wakes the UI through `ctx` whenever a response
    /// lands. If the HTTP client cannot be built the host degrades to
    /// offline mode rather than failing to start.
    pub fn for_base_url(base_url: &str, ctx: &egui::Context) -> Self {
        if base_url.is_empty() {
            info!("no repository base URL configured, using generated content");
            return HostFetcher::Virtual(VirtualFetcher::new());
        }

        match HttpXmlFetcher::new(REQUEST_TIMEOUT) {
            Ok(fetcher) => {
                let ctx = ctx.clone();
                info!(base_url, "fetching popup content from repository");
                HostFetcher::Http(fetcher.with_notifier(Arc::new(move || ctx.request_repaint())))
            }
            Err(err) => {
                warn!("HTTP client unavailable ({err}), using generated content");
                HostFetcher::Virtual(VirtualFetcher::new())
            }
        }
    }

    /// Short description for the status bar.
    pub fn describe(&self) -> &'static str {
        match self {
            HostFetcher::Http(_) => "Repository",
            HostFetcher::Virtual(_) => "Virtual",
        }
    }
}

impl XmlFetcher for HostFetcher {
    fn fetch(&mut self, request: FetchRequest) {
        match self {
            HostFetcher::Http(fetcher) => fetcher.fetch(request),
            HostFetcher::Virtual(fetcher) => fetcher.fetch(request),
        }
    }

    fn poll_completion(&mut self) -> Option<FetchCompletion> {
        match self {
            HostFetcher::Http(fetcher) => fetcher.poll_completion(),
            HostFetcher::Virtual(fetcher) => fetcher.poll_completion(),
        }
    }

    fn has_pending(&self) -> bool {
        match self {
            HostFetcher::Http(fetcher) => fetcher.has_pending(),
            HostFetcher::Virtual(fetcher) => fetcher.has_pending(),
        }
    }
}
