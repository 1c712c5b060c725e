//! HTTP fetcher running each request on a background thread.

use std::sync::mpsc::{channel, Receiver, Sender, TryRecvError};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

use reqwest::blocking::Client;
use tracing::{debug, warn};

use super::{extract_fragment, FetchCompletion, FetchRequest};
use crate::error::FetchError;
use crate::traits::XmlFetcher;

/// Callback run on the worker thread after a result is queued, typically
/// to wake the UI thread (`egui::Context::request_repaint`).
pub type CompletionNotifier = Arc<dyn Fn() + Send + Sync>;

/// Fetches popup fragments over HTTP without blocking the caller.
///
/// Each request runs on its own thread and reports through a channel,
/// so a slow server never stalls the UI. Completions are drained with
/// [`XmlFetcher::poll_completion`].
pub struct HttpXmlFetcher {
    client: Client,
    sender: Sender<FetchCompletion>,
    receiver: Receiver<FetchCompletion>,
    /// Requests started but not yet polled out
    in_flight: usize,
    notifier: Option<CompletionNotifier>,
}

impl HttpXmlFetcher {
    /// Creates a fetcher whose requests give up after `timeout`.
    pub fn new(timeout: Duration) -> Result<Self, FetchError> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|err| FetchError::Transport(err.to_string()))?;
        let (sender, receiver) = channel();

        Ok(Self {
            client,
            sender,
            receiver,
            in_flight: 0,
            notifier: None,
        })
    }

    /// Sets the callback invoked whenever a request finishes.
    pub fn with_notifier(mut self, notifier: CompletionNotifier) -> Self {
        self.notifier = Some(notifier);
        self
    }

    /// Performs `request` on the current thread.
    ///
    /// Used by the background workers and by the command-line probe.
    pub fn fetch_blocking(client: &Client, request: &FetchRequest) -> Result<String, FetchError> {
        let url = request.url();
        let response = client
            .get(&url)
            .send()
            .map_err(|err| FetchError::Transport(err.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status.as_u16()));
        }

        let body = response
            .text()
            .map_err(|err| FetchError::Transport(err.to_string()))?;
        extract_fragment(&body)
    }

    /// Returns the underlying client, for one-off blocking fetches.
    pub fn client(&self) -> &Client {
        &self.client
    }
}

/// Delivers exactly one completion for a request.
///
/// A worker that exits without sending (a panic in the HTTP stack) still
/// reports `FetchError::Disconnected` when this is dropped, so the
/// fetcher's in-flight count always drains.
struct CompletionReport {
    /// Taken once the completion has been sent
    request: Option<FetchRequest>,
    sender: Sender<FetchCompletion>,
    notifier: Option<CompletionNotifier>,
}

impl CompletionReport {
    fn send(mut self, result: Result<String, FetchError>) {
        self.deliver(result);
    }

    fn deliver(&mut self, result: Result<String, FetchError>) {
        let Some(request) = self.request.take() else {
            return;
        };

        // The receiver only goes away with the fetcher itself
        let _ = self.sender.send(FetchCompletion::for_request(&request, result));

        if let Some(notify) = &self.notifier {
            notify();
        }
    }
}

impl Drop for CompletionReport {
    fn drop(&mut self) {
        if self.request.is_some() {
            warn!("fetch worker exited without a result");
            self.deliver(Err(FetchError::Disconnected));
        }
    }
}

impl XmlFetcher for HttpXmlFetcher {
    fn fetch(&mut self, request: FetchRequest) {
        debug!(url = %request.url(), generation = request.generation.0, "starting fetch");

        let client = self.client.clone();
        let report = CompletionReport {
            request: Some(request.clone()),
            sender: self.sender.clone(),
            notifier: self.notifier.clone(),
        };
        self.in_flight += 1;

        thread::spawn(move || {
            let result = Self::fetch_blocking(&client, &request);
            if let Err(err) = &result {
                warn!(entry = %request.entry_id, "popup fetch failed: {err}");
            }
            report.send(result);
        });
    }

    fn poll_completion(&mut self) -> Option<FetchCompletion> {
        match self.receiver.try_recv() {
            Ok(completion) => {
                self.in_flight = self.in_flight.saturating_sub(1);
                Some(completion)
            }
            Err(TryRecvError::Empty) | Err(TryRecvError::Disconnected) => None,
        }
    }

    fn has_pending(&self) -> bool {
        self.in_flight > 0
    }
}
