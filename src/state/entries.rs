//! Repository entries shown in the listing.

/// A tooltip-eligible entry: its id is both the element id and the
/// `entryid` sent to the server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub id: String,
    pub label: String,
}

impl Entry {
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
        }
    }

    /// Parses `ID` or `ID=LABEL` from the command line.
    pub fn parse(arg: &str) -> Self {
        match arg.split_once('=') {
            Some((id, label)) if !label.trim().is_empty() => Self::new(id.trim(), label.trim()),
            Some((id, _)) => Self::new(id.trim(), id.trim()),
            None => Self::new(arg.trim(), arg.trim()),
        }
    }
}

/// Ordered list of entries on the page.
#[derive(Debug, Clone, Default)]
pub struct EntryState {
    entries: Vec<Entry>,
}

impl EntryState {
    /// Uses `entries`, or a built-in sample listing when empty.
    pub fn new(entries: Vec<Entry>) -> Self {
        if entries.is_empty() {
            Self::sample()
        } else {
            Self { entries }
        }
    }

    fn sample() -> Self {
        let entries = [
            ("b8c5d6e1-0001", "Radar Level II - KFTG"),
            ("b8c5d6e1-0002", "GFS 0.5 degree forecast"),
            ("b8c5d6e1-0003", "Surface observations (METAR)"),
            ("b8c5d6e1-0004", "Upper air soundings"),
            ("b8c5d6e1-0005", "Satellite IR imagery"),
            ("b8c5d6e1-0006", "Case study: 2008 Windsor tornado"),
        ]
        .into_iter()
        .map(|(id, label)| Entry::new(id, label))
        .collect();

        Self { entries }
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn find(&self, id: &str) -> Option<&Entry> {
        self.entries.iter().find(|entry| entry.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_with_label() {
        assert_eq!(Entry::parse("abc=My entry"), Entry::new("abc", "My entry"));
    }

    #[test]
    fn test_parse_bare_id_uses_id_as_label() {
        assert_eq!(Entry::parse("abc"), Entry::new("abc", "abc"));
        assert_eq!(Entry::parse("abc="), Entry::new("abc", "abc"));
    }

    #[test]
    fn test_empty_list_falls_back_to_sample() {
        let state = EntryState::new(Vec::new());
        assert!(state.len() > 0);
        assert!(state.find("b8c5d6e1-0001").is_some());
    }

    #[test]
    fn test_given_entries_kept_in_order() {
        let state = EntryState::new(vec![Entry::parse("b"), Entry::parse("a")]);
        let ids: Vec<_> = state.entries().iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, vec!["b", "a"]);
    }
}
