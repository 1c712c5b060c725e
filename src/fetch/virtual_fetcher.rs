use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::debug;

use super::{extract_fragment, FetchCompletion, FetchRequest};
use crate::config::ContentKind;
use crate::traits::XmlFetcher;

const DEFAULT_MIN_POLLS: u32 = 3;
const DEFAULT_MAX_POLLS: u32 = 30;

const ENTRY_TYPES: &[&str] = &["File", "Folder", "Point Data", "Grid", "Radar Level II"];
const AUTHORS: &[&str] = &["jeffmc", "ldm", "admin", "anonymous"];

/// Offline fetcher that fabricates repository responses.
///
/// Latency is simulated in drain rounds rather than wall-clock time so the
/// demo stays deterministic for a given seed. A round is the run of
/// `poll_completion` calls up to and including the one returning `None`;
/// every pending request counts down once per round. Responses go through the same XML
/// extraction as real ones.
pub struct VirtualFetcher {
    rng: StdRng,
    min_polls: u32,
    max_polls: u32,
    /// (rounds remaining, completion)
    pending: Vec<(u32, FetchCompletion)>,
    /// Set when the previous poll ended a round
    round_started: bool,
}

impl VirtualFetcher {
    pub fn new() -> Self {
        Self::with_config(DEFAULT_MIN_POLLS, DEFAULT_MAX_POLLS, 42)
    }

    pub fn with_config(min_polls: u32, max_polls: u32, seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            min_polls,
            max_polls: max_polls.max(min_polls),
            pending: Vec::new(),
            round_started: true,
        }
    }

    fn generate_document(&mut self, request: &FetchRequest) -> String {
        let body = match request.kind {
            ContentKind::Metadata => {
                let entry_type = ENTRY_TYPES[self.rng.gen_range(0..ENTRY_TYPES.len())];
                let author = AUTHORS[self.rng.gen_range(0..AUTHORS.len())];
                let size_kb = self.rng.gen_range(1..50_000);
                format!(
                    "<table><tr><td><b>Name:</b></td><td>{id}</td></tr>\
                     <tr><td><b>Type:</b></td><td>{entry_type}</td></tr>\
                     <tr><td><b>Created by:</b></td><td>{author}</td></tr>\
                     <tr><td><b>Size:</b></td><td>{size_kb} KB</td></tr></table>",
                    id = request.entry_id
                )
            }
            ContentKind::Links => format!(
                "<a href=\"entry/show?entryid={id}\">View</a><br>\
                 <a href=\"entry/get?entryid={id}\">Download</a><br>\
                 <a href=\"entry/form?entryid={id}\">Edit</a>",
                id = request.entry_id
            ),
        };
        format!("<content>\n<![CDATA[{body}]]>\n</content>")
    }
}

impl Default for VirtualFetcher {
    fn default() -> Self {
        Self::new()
    }
}

impl XmlFetcher for VirtualFetcher {
    fn fetch(&mut self, request: FetchRequest) {
        let polls = self.rng.gen_range(self.min_polls..=self.max_polls);
        debug!(entry = %request.entry_id, polls, "virtual fetch queued");

        let document = self.generate_document(&request);
        let result = extract_fragment(&document).map(|fragment| fragment.trim().to_string());
        self.pending.push((polls, FetchCompletion::for_request(&request, result)));
    }

    fn poll_completion(&mut self) -> Option<FetchCompletion> {
        if self.round_started {
            self.round_started = false;
            for (remaining, _) in self.pending.iter_mut() {
                *remaining = remaining.saturating_sub(1);
            }
        }

        match self.pending.iter().position(|(remaining, _)| *remaining == 0) {
            Some(ready) => Some(self.pending.remove(ready).1),
            None => {
                self.round_started = true;
                None
            }
        }
    }

    fn has_pending(&self) -> bool {
        !self.pending.is_empty()
    }
}
