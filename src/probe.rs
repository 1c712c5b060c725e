//! Fetches one entry's popup fragment and prints it.
//!
//! Useful for checking a repository server's `metadataxml`/`linksxml`
//! responses without starting the GUI.

use anyhow::{Context, Result};
use hovertip::{ContentKind, FetchRequest, HttpXmlFetcher, RequestGeneration};
use std::env;
use std::time::Duration;
use tracing::info;

struct Config {
    base_url: Option<String>,
    entry_id: Option<String>,
    kind: ContentKind,
    timeout_secs: u64,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            base_url: None,
            entry_id: None,
            kind: ContentKind::Metadata,
            timeout_secs: 15,
        }
    }
}

fn parse_args() -> Result<Config> {
    let args: Vec<String> = env::args().collect();
    let mut config = Config::default();

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "-base" => {
                i += 1;
                if i >= args.len() {
                    anyhow::bail!("-base requires a URL argument");
                }
                config.base_url = Some(args[i].clone());
            }
            "-id" => {
                i += 1;
                if i >= args.len() {
                    anyhow::bail!("-id requires an entry id argument");
                }
                config.entry_id = Some(args[i].clone());
            }
            "-links" => {
                config.kind = ContentKind::Links;
            }
            "-timeout" => {
                i += 1;
                if i >= args.len() {
                    anyhow::bail!("-timeout requires a number of seconds");
                }
                config.timeout_secs = args[i]
                    .parse()
                    .with_context(|| format!("invalid timeout '{}'", args[i]))?;
            }
            "-h" | "-help" | "--help" => {
                print_help();
                std::process::exit(0);
            }
            _ => {
                eprintln!("Warning: Unknown argument: {}", args[i]);
            }
        }
        i += 1;
    }

    Ok(config)
}

fn print_help() {
    println!("Repository popup probe");
    println!("Usage: hovertip-probe -base <URL> -id <ENTRY_ID> [OPTIONS]");
    println!();
    println!("OPTIONS:");
    println!("  -base <URL>            Repository base URL, e.g. http://host:8080/repository");
    println!("  -id <ENTRY_ID>         Entry whose popup content to fetch");
    println!("  -links                 Fetch the entry links fragment instead of metadata");
    println!("  -timeout <SECS>        Request timeout in seconds (default: 15)");
    println!("  -h, -help, --help      Show this help message");
}

fn main() -> Result<()> {
    hovertip::init_logging();

    let config = parse_args()?;
    let base_url = config.base_url.context("-base is required (see --help)")?;
    let entry_id = config.entry_id.context("-id is required (see --help)")?;

    let request = FetchRequest {
        generation: RequestGeneration(1),
        entry_id,
        base_url,
        kind: config.kind,
    };
    info!(url = %request.url(), "fetching");

    let fetcher = HttpXmlFetcher::new(Duration::from_secs(config.timeout_secs))?;
    let fragment = HttpXmlFetcher::fetch_blocking(fetcher.client(), &request)
        .with_context(|| format!("fetching {}", request.url()))?;

    println!("{}", fragment.trim());
    Ok(())
}
