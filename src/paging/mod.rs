//! Append-only paged item list with load-state tracking.
//!
//! [`PagedItems`] holds whatever pages have arrived so far. Each refresh
//! starts a new generation; results tagged with an older generation are
//! dropped so a slow response can never overwrite a newer list.

use std::fmt;

use crate::models::{PageInfo, ReleaseAsset};

/// Items prefetched ahead of the viewport.
pub const DEFAULT_PREFETCH_DISTANCE: usize = 3;

/// Indexed read access to a lazily filled sequence.
///
/// `get` returns `None` for indices that have no loaded item yet.
pub trait LazySequence<T> {
    fn item_count(&self) -> usize;
    fn get(&self, index: usize) -> Option<&T>;
}

impl<T> LazySequence<T> for [T] {
    fn item_count(&self) -> usize {
        self.len()
    }

    fn get(&self, index: usize) -> Option<&T> {
        <[T]>::get(self, index)
    }
}

impl<T> LazySequence<T> for Vec<T> {
    fn item_count(&self) -> usize {
        self.len()
    }

    fn get(&self, index: usize) -> Option<&T> {
        self.as_slice().get(index)
    }
}

/// Stable identity and recycling hint for a list item.
pub trait PagedItem {
    fn key(&self) -> &str;

    fn content_type(&self) -> &'static str {
        "item"
    }
}

impl PagedItem for ReleaseAsset {
    fn key(&self) -> &str {
        &self.id
    }

    fn content_type(&self) -> &'static str {
        "asset"
    }
}

/// State of one kind of load.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadState {
    Loading,
    Idle { end_of_pagination: bool },
    Error(String),
}

impl LoadState {
    pub fn is_loading(&self) -> bool {
        matches!(self, LoadState::Loading)
    }

    pub fn is_idle(&self) -> bool {
        matches!(self, LoadState::Idle { .. })
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            LoadState::Error(message) => Some(message),
            _ => None,
        }
    }
}

impl Default for LoadState {
    fn default() -> Self {
        LoadState::Idle {
            end_of_pagination: false,
        }
    }
}

impl fmt::Display for LoadState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoadState::Loading => write!(f, "loading"),
            LoadState::Idle {
                end_of_pagination: true,
            } => write!(f, "complete"),
            LoadState::Idle { .. } => write!(f, "idle"),
            LoadState::Error(message) => write!(f, "error: {}", message),
        }
    }
}

/// Refresh (first page) and append (later pages) states.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoadStates {
    pub refresh: LoadState,
    pub append: LoadState,
}

/// A page request the caller should now issue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageRequest {
    pub generation: u64,
    pub cursor: Option<String>,
}

/// Loaded items plus pagination bookkeeping.
#[derive(Debug, Clone)]
pub struct PagedItems<T> {
    items: Vec<T>,
    generation: u64,
    load_states: LoadStates,
    next_cursor: Option<String>,
}

impl<T> Default for PagedItems<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            generation: 0,
            load_states: LoadStates::default(),
            next_cursor: None,
        }
    }
}

impl<T: PagedItem> PagedItems<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    pub fn get(&self, index: usize) -> Option<&T> {
        self.items.get(index)
    }

    pub fn key(&self, index: usize) -> Option<&str> {
        self.items.get(index).map(PagedItem::key)
    }

    pub fn content_type(&self, index: usize) -> Option<&'static str> {
        self.items.get(index).map(PagedItem::content_type)
    }

    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.items.iter()
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn load_states(&self) -> &LoadStates {
        &self.load_states
    }

    pub fn end_of_pagination(&self) -> bool {
        matches!(
            self.load_states.append,
            LoadState::Idle {
                end_of_pagination: true
            }
        )
    }

    /// Start over: clear items, bump the generation, mark refresh loading.
    pub fn refresh(&mut self) -> PageRequest {
        self.items.clear();
        self.next_cursor = None;
        self.generation += 1;
        self.load_states = LoadStates {
            refresh: LoadState::Loading,
            append: LoadState::default(),
        };
        PageRequest {
            generation: self.generation,
            cursor: None,
        }
    }

    /// Whether an append may start right now.
    pub fn can_append(&self) -> bool {
        self.load_states.refresh.is_idle()
            && self.load_states.append == LoadState::default()
            && self.next_cursor.is_some()
    }

    /// Mark an append as in flight and return its request, if allowed.
    pub fn begin_append(&mut self) -> Option<PageRequest> {
        if !self.can_append() {
            return None;
        }
        self.load_states.append = LoadState::Loading;
        Some(PageRequest {
            generation: self.generation,
            cursor: self.next_cursor.clone(),
        })
    }

    /// Clear an append error so the next prefetch retries it.
    pub fn reset_append_error(&mut self) {
        if self.load_states.append.error().is_some() {
            self.load_states.append = LoadState::default();
        }
    }

    /// Apply a loaded page. Returns `false` when the result was stale.
    pub fn apply(
        &mut self,
        generation: u64,
        append: bool,
        result: Result<(Vec<T>, PageInfo), String>,
    ) -> bool {
        if generation != self.generation {
            tracing::debug!(
                stale = generation,
                current = self.generation,
                "Dropping stale page"
            );
            return false;
        }

        match result {
            Ok((items, page_info)) => {
                if append {
                    self.items.extend(items);
                } else {
                    self.items = items;
                }
                let end = !page_info.has_next_page || page_info.end_cursor.is_none();
                self.next_cursor = if end { None } else { page_info.end_cursor };
                self.load_states = LoadStates {
                    refresh: LoadState::Idle {
                        end_of_pagination: end,
                    },
                    append: LoadState::Idle {
                        end_of_pagination: end,
                    },
                };
            }
            Err(message) => {
                if append {
                    self.load_states.append = LoadState::Error(message);
                } else {
                    self.load_states.refresh = LoadState::Error(message);
                }
            }
        }
        true
    }

    /// Whether the viewport is close enough to the end to load more.
    ///
    /// `last_visible` is the index of the last item on screen.
    pub fn should_prefetch(&self, last_visible: usize, prefetch_distance: usize) -> bool {
        self.can_append() && last_visible + prefetch_distance + 1 >= self.items.len()
    }
}

impl<T: PagedItem> LazySequence<T> for PagedItems<T> {
    fn item_count(&self) -> usize {
        self.items.len()
    }

    fn get(&self, index: usize) -> Option<&T> {
        self.items.get(index)
    }
}
