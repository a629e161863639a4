/// Stable identifier of a history entry, assigned when the entry is recorded
/// and never reused within one history.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EntryId(u64);

/// A visited page. Immutable once recorded.
#[derive(Debug, Clone, PartialEq)]
pub struct HistoryEntry {
    id: EntryId,
    url: String,
    title: String,
}

impl HistoryEntry {
    pub fn id(&self) -> EntryId {
        self.id
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn title(&self) -> &str {
        &self.title
    }
}

/// Ordered list of visited entries plus a cursor for the one currently
/// displayed.
///
/// Completed main-frame loads append behind the cursor, discarding any
/// forward entries first. Loads triggered from the list itself only move the
/// cursor; the `loading_entry` flag keeps them from being recorded again.
#[derive(Debug)]
pub struct NavigationHistory {
    entries: Vec<HistoryEntry>,
    cursor: Option<usize>,
    enabled: bool,
    loading_entry: bool,
    next_id: u64,
}

impl NavigationHistory {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            cursor: None,
            enabled: true,
            loading_entry: false,
            next_id: 0,
        }
    }

    pub fn can_go_back(&self) -> bool {
        if !self.enabled {
            return false;
        }
        self.cursor.map(|i| i > 0).unwrap_or(false)
    }

    pub fn can_go_forward(&self) -> bool {
        if !self.enabled {
            return false;
        }
        self.cursor
            .map(|i| i + 1 < self.entries.len())
            .unwrap_or(false)
    }

    /// Record a finished main-frame load. Ignored while recording is disabled
    /// or the load came from the list itself.
    pub fn record_completed_load(&mut self, url: &str, title: &str) {
        if !self.enabled || self.loading_entry {
            return;
        }

        // Branching from the middle discards everything after the cursor.
        if let Some(index) = self.cursor {
            self.entries.truncate(index + 1);
        }

        let id = EntryId(self.next_id);
        self.next_id += 1;
        self.entries.push(HistoryEntry {
            id,
            url: url.to_string(),
            title: title.to_string(),
        });
        self.cursor = Some(self.entries.len() - 1);
    }

    /// Reset the suppress flag once the corresponding load has finished.
    pub fn clear_suppression(&mut self) {
        self.loading_entry = false;
    }

    /// Begin loading the entry one step back and return its URL. Callers must
    /// check [`can_go_back`](Self::can_go_back) first.
    pub fn go_back(&mut self) -> Option<String> {
        debug_assert!(self.can_go_back(), "go_back with no backward entry");
        if !self.can_go_back() {
            return None;
        }
        let target = self.entries[self.cursor? - 1].id;
        self.load_entry(target)
    }

    /// Begin loading the entry one step forward and return its URL. Callers
    /// must check [`can_go_forward`](Self::can_go_forward) first.
    pub fn go_forward(&mut self) -> Option<String> {
        debug_assert!(self.can_go_forward(), "go_forward with no forward entry");
        if !self.can_go_forward() {
            return None;
        }
        let target = self.entries[self.cursor? + 1].id;
        self.load_entry(target)
    }

    /// Begin loading `id`: moves the cursor there, suppresses recording for
    /// the duration of the load, and returns the URL the caller must navigate
    /// to. Passing an id that is not in the list is a caller bug.
    pub fn load_entry(&mut self, id: EntryId) -> Option<String> {
        let index = self.entries.iter().position(|entry| entry.id == id);
        debug_assert!(index.is_some(), "unknown history entry");
        let index = index?;
        self.loading_entry = true;
        self.cursor = Some(index);
        Some(self.entries[index].url.clone())
    }

    /// Entries strictly before the cursor, oldest first.
    pub fn backward_entries(&self) -> &[HistoryEntry] {
        match self.cursor {
            Some(index) => &self.entries[..index],
            None => &[],
        }
    }

    /// Entries strictly after the cursor, oldest first.
    pub fn forward_entries(&self) -> &[HistoryEntry] {
        match self.cursor {
            Some(index) => &self.entries[index + 1..],
            None => &[],
        }
    }

    pub fn current(&self) -> Option<&HistoryEntry> {
        self.cursor.map(|i| &self.entries[i])
    }

    /// Forget all entries. Recording stays in whatever state it was.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.cursor = None;
    }

    /// Toggle recording. Existing entries are kept either way.
    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for NavigationHistory {
    fn default() -> Self {
        Self::new()
    }
}
