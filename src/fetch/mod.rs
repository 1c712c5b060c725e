//! Popup fragment fetching.
//!
//! The repository server answers `entry/show?...&output=metadataxml` with a
//! small XML document whose root element wraps an HTML fragment, normally in
//! a CDATA section:
//!
//! ```text
//! <content><![CDATA[<table>...</table>]]></content>
//! ```
//!
//! Fetchers perform the request off the UI thread and hand back a
//! [`FetchCompletion`] when polled.

mod http;
mod virtual_fetcher;

pub use http::HttpXmlFetcher;
pub use virtual_fetcher::VirtualFetcher;

use crate::config::ContentKind;
use crate::error::FetchError;

/// Monotonic id of an issued request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct RequestGeneration(pub u64);

impl RequestGeneration {
    pub fn next(self) -> Self {
        Self(self.0 + 1)
    }
}

/// A request for the popup fragment of one entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchRequest {
    pub generation: RequestGeneration,
    pub entry_id: String,
    pub base_url: String,
    pub kind: ContentKind,
}

impl FetchRequest {
    /// Builds `<base>/entry/show?entryid=<id>&output=<kind>`.
    pub fn url(&self) -> String {
        format!(
            "{}/entry/show?entryid={}&output={}",
            self.base_url.trim_end_matches('/'),
            urlencoding::encode(&self.entry_id),
            self.kind.output_param()
        )
    }
}

/// Outcome of a [`FetchRequest`], carrying enough to fence it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchCompletion {
    pub generation: RequestGeneration,
    pub entry_id: String,
    /// The extracted HTML fragment, or why there is none
    pub result: Result<String, FetchError>,
}

impl FetchCompletion {
    pub fn for_request(request: &FetchRequest, result: Result<String, FetchError>) -> Self {
        Self {
            generation: request.generation,
            entry_id: request.entry_id.clone(),
            result,
        }
    }
}

/// Extracts the popup fragment from a response document.
///
/// The fragment is the concatenation of the root element's direct text
/// children. CDATA sections count as text; text inside nested elements does
/// not.
pub fn extract_fragment(xml: &str) -> Result<String, FetchError> {
    let document =
        roxmltree::Document::parse(xml).map_err(|err| FetchError::Parse(err.to_string()))?;

    let fragment = document
        .root_element()
        .children()
        .filter(|node| node.is_text())
        .filter_map(|node| node.text())
        .collect();

    Ok(fragment)
}
