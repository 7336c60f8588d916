//! List State
//!
//! Everything the widget shows is derived from one [`ListState`]:
//! the accumulated items, the selectable categories, the tag selection and
//! the page cursor. Every mutating method recomputes the visible subset
//! before returning, so readers never see a stale filter.

use std::cell::RefCell;

use crate::models::Item;

/// Most categories that can be selected at once
pub const MAX_SELECTED_TAGS: usize = 2;

/// Placeholder category the catalog uses for unclassified entries
pub const UNKNOWN_TAG: &str = "unknown";

/// Result of toggling a category checkbox
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleOutcome {
    Added,
    Removed,
    /// Selection already full; nothing changed
    Rejected,
}

/// Selected category names, oldest first
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    tags: Vec<String>,
}

impl Selection {
    pub fn contains(&self, name: &str) -> bool {
        self.tags.iter().any(|tag| tag == name)
    }

    pub fn len(&self) -> usize {
        self.tags.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.tags.len() >= MAX_SELECTED_TAGS
    }

    pub fn as_slice(&self) -> &[String] {
        &self.tags
    }

    pub fn toggle(&mut self, name: &str) -> ToggleOutcome {
        if let Some(pos) = self.tags.iter().position(|tag| tag == name) {
            self.tags.remove(pos);
            ToggleOutcome::Removed
        } else if self.is_full() {
            ToggleOutcome::Rejected
        } else {
            self.tags.push(name.to_string());
            ToggleOutcome::Added
        }
    }

    /// An item matches when it carries every selected tag
    pub fn matches(&self, item: &Item) -> bool {
        self.tags.iter().all(|tag| item.has_tag(tag))
    }

    pub fn clear(&mut self) {
        self.tags.clear();
    }
}

/// Items of `items` matching `selection`, in collection order
pub fn filter_items(items: &[Item], selection: &Selection) -> Vec<Item> {
    items.iter().filter(|item| selection.matches(item)).cloned().collect()
}

/// Position in the upstream listing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageCursor {
    pub offset: u32,
    pub page_size: u32,
    /// Taken from the upstream `next` link, not from the page length
    pub has_more: bool,
}

impl PageCursor {
    pub fn new(page_size: u32) -> Self {
        Self {
            offset: 0,
            page_size: page_size.max(1),
            has_more: true,
        }
    }

    /// Move past the current page. An offset that would overflow ends the listing.
    fn advance(&mut self, has_more: bool) {
        match self.offset.checked_add(self.page_size) {
            Some(offset) => {
                self.offset = offset;
                self.has_more = has_more;
            }
            None => {
                self.offset = u32::MAX;
                self.has_more = false;
            }
        }
    }
}

/// Page requested by a loader that won the single-flight check
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub offset: u32,
    pub limit: u32,
}

/// Why a page load could not start
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadBlocked {
    InFlight,
    Exhausted,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ListState {
    items: Vec<Item>,
    available_tags: Vec<String>,
    selection: Selection,
    cursor: PageCursor,
    loading: bool,
    visible: Vec<Item>,
}

impl ListState {
    pub fn new(page_size: u32) -> Self {
        Self {
            items: Vec::new(),
            available_tags: Vec::new(),
            selection: Selection::default(),
            cursor: PageCursor::new(page_size),
            loading: false,
            visible: Vec::new(),
        }
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn visible(&self) -> &[Item] {
        &self.visible
    }

    pub fn available_tags(&self) -> &[String] {
        &self.available_tags
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn cursor(&self) -> PageCursor {
        self.cursor
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn has_more(&self) -> bool {
        self.cursor.has_more
    }

    fn recompute(&mut self) {
        self.visible = filter_items(&self.items, &self.selection);
    }

    /// Replace the selectable categories, dropping the sentinel and duplicates
    pub fn set_available_tags<I>(&mut self, names: I)
    where
        I: IntoIterator<Item = String>,
    {
        let mut tags: Vec<String> = Vec::new();
        for name in names {
            if name != UNKNOWN_TAG && !tags.contains(&name) {
                tags.push(name);
            }
        }
        self.available_tags = tags;
        self.recompute();
    }

    pub fn toggle_tag(&mut self, name: &str) -> ToggleOutcome {
        let outcome = self.selection.toggle(name);
        self.recompute();
        outcome
    }

    /// Claim the loading flag and return the page to fetch
    pub fn begin_load(&mut self) -> Result<PageRequest, LoadBlocked> {
        if self.loading {
            return Err(LoadBlocked::InFlight);
        }
        if !self.cursor.has_more {
            return Err(LoadBlocked::Exhausted);
        }
        self.loading = true;
        Ok(PageRequest {
            offset: self.cursor.offset,
            limit: self.cursor.page_size,
        })
    }

    /// Append a fully resolved page and move the cursor past it
    pub fn commit_page(&mut self, page: Vec<Item>, has_more: bool) -> usize {
        let added = page.len();
        self.items.extend(page);
        self.cursor.advance(has_more);
        self.recompute();
        added
    }

    pub fn finish_load(&mut self) {
        self.loading = false;
    }

    /// Start the listing over from the first page.
    ///
    /// Refused while a page is in flight. Categories are kept.
    pub fn reset(&mut self) -> bool {
        if self.loading {
            return false;
        }
        self.items.clear();
        self.selection.clear();
        self.cursor = PageCursor::new(self.cursor.page_size);
        self.recompute();
        true
    }
}

/// Shared cell holding a [`ListState`].
///
/// Implementations must not hold a borrow past the closure, so loaders can
/// await between calls. `None` means the state is gone and `f` did not run.
pub trait StateCell {
    fn write_state<R>(&self, f: impl FnOnce(&mut ListState) -> R) -> Option<R>;
}

impl StateCell for RefCell<ListState> {
    fn write_state<R>(&self, f: impl FnOnce(&mut ListState) -> R) -> Option<R> {
        Some(f(&mut self.borrow_mut()))
    }
}
