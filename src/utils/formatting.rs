//! Text formatting utilities for the hovertip host.

use sysinfo::{Pid, ProcessRefreshKind, RefreshKind, System};

/// Gets the current process memory usage in megabytes.
///
/// Returns 0.0 if the process information cannot be retrieved.
pub fn get_current_memory_mb() -> f64 {
    let mut sys = System::new_with_specifics(
        RefreshKind::new().with_processes(ProcessRefreshKind::new().with_memory()),
    );
    sys.refresh_processes_specifics(ProcessRefreshKind::new().with_memory());

    if let Some(process) = sys.process(Pid::from_u32(std::process::id())) {
        process.memory() as f64 / (1024.0 * 1024.0)
    } else {
        0.0
    }
}

/// Formats memory usage in MB as a human-readable string.
pub fn format_memory_mb(memory_mb: f64) -> String {
    if memory_mb > 1024.0 {
        format!("Memory: {:.2} GB", memory_mb / 1024.0)
    } else {
        format!("Memory: {:.1} MB", memory_mb)
    }
}

/// Reduces an HTML fragment to readable plain text.
///
/// Tags are dropped; `<br>`, `</tr>`, `</p>` and `</div>` become line
/// breaks and `</td>` a space. The common character entities are decoded.
/// This is for display in a plain-text popup, not a sanitizer.
pub fn strip_markup(html: &str) -> String {
    let mut text = String::with_capacity(html.len());
    let mut rest = html;

    while let Some(start) = rest.find('<') {
        text.push_str(&rest[..start]);
        let Some(end) = rest[start..].find('>') else {
            // Unterminated tag: keep the remainder as text
            text.push_str(&rest[start..]);
            rest = "";
            break;
        };

        let tag = rest[start + 1..start + end].trim().to_ascii_lowercase();
        let name = tag.trim_end_matches('/').split_whitespace().next().unwrap_or("");
        match name {
            "br" | "/tr" | "/p" | "/div" => text.push('\n'),
            "/td" | "/th" => text.push(' '),
            _ => {}
        }
        rest = &rest[start + end + 1..];
    }
    text.push_str(rest);

    let decoded = text
        .replace("&nbsp;", " ")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&amp;", "&");

    decoded
        .lines()
        .map(str::trim_end)
        .filter(|line| !line.trim().is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_memory() {
        assert_eq!(format_memory_mb(512.5), "Memory: 512.5 MB");
        assert_eq!(format_memory_mb(2048.0), "Memory: 2.00 GB");
    }

    #[test]
    fn test_strip_table() {
        let html = "<table><tr><td><b>Name:</b></td><td>e1</td></tr>\
                    <tr><td><b>Type:</b></td><td>Grid</td></tr></table>";
        assert_eq!(strip_markup(html), "Name: e1\nType: Grid");
    }

    #[test]
    fn test_strip_breaks_and_entities() {
        assert_eq!(
            strip_markup("<a href=\"x\">View</a><br/>Size &lt; 5&nbsp;KB &amp; more"),
            "View\nSize < 5 KB & more"
        );
    }

    #[test]
    fn test_plain_text_untouched() {
        assert_eq!(strip_markup("Hello"), "Hello");
    }

    #[test]
    fn test_unterminated_tag_kept() {
        assert_eq!(strip_markup("a <b"), "a <b");
    }
}
