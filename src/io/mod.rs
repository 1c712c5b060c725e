//! I/O modules: choosing how popup content is fetched.

pub mod host_fetcher;

pub use host_fetcher::HostFetcher;
