//! Release view-model.
//!
//! Owns the `(details, assets, is_loading)` snapshot for one release and
//! issues page fetches on background tasks. Results come back as
//! [`AppMessage::PageLoaded`] and are folded in with [`ReleaseViewModel::apply_page`].

use std::sync::Arc;

use tokio::sync::mpsc;

use super::AppMessage;
use crate::error::GloomResult;
use crate::models::{ReleaseAsset, ReleaseDetails, ReleasePage, ReleaseTarget};
use crate::paging::{LoadState, PageRequest, PagedItems};
use crate::traits::ReleaseSource;

pub struct ReleaseViewModel {
    target: ReleaseTarget,
    source: Arc<dyn ReleaseSource>,
    tx: mpsc::UnboundedSender<AppMessage>,
    page_size: u32,
    details: Option<ReleaseDetails>,
    assets: PagedItems<ReleaseAsset>,
}

impl ReleaseViewModel {
    pub fn new(
        target: ReleaseTarget,
        source: Arc<dyn ReleaseSource>,
        tx: mpsc::UnboundedSender<AppMessage>,
        page_size: u32,
    ) -> Self {
        Self {
            target,
            source,
            tx,
            page_size,
            details: None,
            assets: PagedItems::new(),
        }
    }

    pub fn target(&self) -> &ReleaseTarget {
        &self.target
    }

    pub fn details(&self) -> Option<&ReleaseDetails> {
        self.details.as_ref()
    }

    pub fn assets(&self) -> &PagedItems<ReleaseAsset> {
        &self.assets
    }

    /// True while the first page of a load is in flight.
    pub fn is_loading(&self) -> bool {
        self.assets.load_states().refresh.is_loading()
    }

    /// True while a later page is in flight.
    pub fn is_appending(&self) -> bool {
        self.assets.load_states().append.is_loading()
    }

    /// Latest load error, refresh first.
    pub fn error(&self) -> Option<&str> {
        let states = self.assets.load_states();
        states.refresh.error().or_else(|| states.append.error())
    }

    /// Reload from the first page.
    ///
    /// Loaded assets are dropped immediately; details stay until the new
    /// first page arrives.
    pub fn refresh(&mut self) {
        let request = self.assets.refresh();
        tracing::info!(
            release = %self.target,
            generation = request.generation,
            "Refreshing release"
        );
        self.spawn_fetch(request, false);
    }

    /// Request the next page of assets. Returns `false` when no append was
    /// allowed (loading, errored, or at the end).
    pub fn load_more(&mut self) -> bool {
        match self.assets.begin_append() {
            Some(request) => {
                tracing::debug!(
                    release = %self.target,
                    generation = request.generation,
                    loaded = self.assets.item_count(),
                    "Loading more assets"
                );
                self.spawn_fetch(request, true);
                true
            }
            None => false,
        }
    }

    /// Append when the viewport is within `distance` items of the end.
    pub fn maybe_prefetch(&mut self, last_visible: usize, distance: usize) -> bool {
        if self.assets.should_prefetch(last_visible, distance) {
            self.load_more()
        } else {
            false
        }
    }

    /// Retry whichever load failed.
    pub fn retry(&mut self) {
        if self.assets.load_states().refresh.error().is_some() {
            self.refresh();
        } else if self.assets.load_states().append.error().is_some() {
            self.assets.reset_append_error();
            self.load_more();
        }
    }

    /// Fold a finished fetch into the snapshot. Returns `false` for stale
    /// results.
    pub fn apply_page(
        &mut self,
        generation: u64,
        append: bool,
        result: GloomResult<ReleasePage>,
    ) -> bool {
        match result {
            Ok(page) => {
                let ReleasePage {
                    details,
                    assets,
                    page_info,
                } = page;
                let count = assets.len();
                let applied = self.assets.apply(generation, append, Ok((assets, page_info)));
                if applied {
                    if let (false, Some(details)) = (append, details) {
                        self.details = Some(details);
                    }
                    tracing::debug!(
                        release = %self.target,
                        generation,
                        append,
                        count,
                        state = %self.assets.load_states().append,
                        "Applied page"
                    );
                }
                applied
            }
            Err(err) => {
                let applied = self.assets.apply(generation, append, Err(err.user_message()));
                if applied {
                    tracing::warn!(
                        release = %self.target,
                        generation,
                        append,
                        code = err.error_code(),
                        error = %err,
                        "Page load failed"
                    );
                }
                applied
            }
        }
    }

    fn spawn_fetch(&self, request: PageRequest, append: bool) {
        let source = Arc::clone(&self.source);
        let target = self.target.clone();
        let tx = self.tx.clone();
        let page_size = self.page_size;

        tokio::spawn(async move {
            let result = source
                .fetch_page(&target, request.cursor.as_deref(), page_size)
                .await;
            // The receiver is gone once the app has quit.
            let _ = tx.send(AppMessage::PageLoaded {
                generation: request.generation,
                append,
                result,
            });
        });
    }
}

impl std::fmt::Debug for ReleaseViewModel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ReleaseViewModel")
            .field("target", &self.target)
            .field("has_details", &self.details.is_some())
            .field("assets", &self.assets.item_count())
            .field("refresh", &self.assets.load_states().refresh)
            .field("append", &self.assets.load_states().append)
            .finish()
    }
}

/// Whether a load state reached the last page.
pub fn is_complete(state: &LoadState) -> bool {
    matches!(
        state,
        LoadState::Idle {
            end_of_pagination: true
        }
    )
}
