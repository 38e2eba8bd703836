//! Pagination position for the dog search.
//!
//! The search endpoint pages with opaque `from` tokens embedded in the
//! `next`/`prev` links of each response, while the listing also shows a
//! page counter. Both are tracked here; the cursor decides what is fetched.

pub const PAGE_SIZE: u32 = 20;

/// Opaque position token from a search response link.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Cursor(String);

impl Cursor {
    /// Extracts the `from` token of a link such as
    /// `/dogs/search?size=25&from=25`. Links without a query string or
    /// with an empty token carry no cursor.
    pub fn from_link(link: &str) -> Option<Self> {
        let (_, query) = link.split_once('?')?;
        let pairs: Vec<(String, String)> = serde_urlencoded::from_str(query).ok()?;
        pairs
            .into_iter()
            .find(|(key, _)| key == "from")
            .map(|(_, value)| value)
            .filter(|value| !value.is_empty())
            .map(Cursor)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
enum TrackerState {
    #[default]
    Idle,
    Loaded {
        next: Option<Cursor>,
        prev: Option<Cursor>,
        total: u64,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchCursorTracker {
    page: u32,
    from: Option<Cursor>,
    state: TrackerState,
}

impl Default for SearchCursorTracker {
    fn default() -> Self {
        Self {
            page: 1,
            from: None,
            state: TrackerState::Idle,
        }
    }
}

impl SearchCursorTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Back to page 1 with no cursors. Called on every filter change.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn record_response(&mut self, next_link: Option<&str>, prev_link: Option<&str>, total: u64) {
        self.state = TrackerState::Loaded {
            next: next_link.and_then(Cursor::from_link),
            prev: prev_link.and_then(Cursor::from_link),
            total,
        };
    }

    /// Moves to the following page. Does nothing without a `next` cursor.
    pub fn advance(&mut self) -> bool {
        let TrackerState::Loaded { next, prev, .. } = &mut self.state else {
            return false;
        };
        let Some(cursor) = next.take() else {
            return false;
        };
        *prev = None;
        self.from = Some(cursor);
        self.page += 1;
        true
    }

    /// Moves to the preceding page. Does nothing without a `prev` cursor.
    pub fn retreat(&mut self) -> bool {
        let TrackerState::Loaded { next, prev, .. } = &mut self.state else {
            return false;
        };
        let Some(cursor) = prev.take() else {
            return false;
        };
        *next = None;
        self.from = Some(cursor);
        self.page = self.page.saturating_sub(1).max(1);
        true
    }

    pub fn is_loaded(&self) -> bool {
        matches!(self.state, TrackerState::Loaded { .. })
    }

    pub fn current_page(&self) -> u32 {
        self.page
    }

    /// Cursor the current page is (or is being) fetched with.
    pub fn active_cursor(&self) -> Option<&Cursor> {
        self.from.as_ref()
    }

    pub fn next(&self) -> Option<&Cursor> {
        match &self.state {
            TrackerState::Loaded { next, .. } => next.as_ref(),
            TrackerState::Idle => None,
        }
    }

    pub fn prev(&self) -> Option<&Cursor> {
        match &self.state {
            TrackerState::Loaded { prev, .. } => prev.as_ref(),
            TrackerState::Idle => None,
        }
    }

    pub fn can_advance(&self) -> bool {
        self.next().is_some()
    }

    pub fn can_retreat(&self) -> bool {
        self.prev().is_some()
    }

    pub fn total(&self) -> u64 {
        match self.state {
            TrackerState::Loaded { total, .. } => total,
            TrackerState::Idle => 0,
        }
    }

    pub fn total_pages(&self) -> u64 {
        total_pages(self.total(), PAGE_SIZE)
    }
}

/// Never zero, so an empty result still reads "page 1 of 1".
pub fn total_pages(total: u64, page_size: u32) -> u64 {
    let page_size = u64::from(page_size.max(1));
    total.div_ceil(page_size).max(1)
}
