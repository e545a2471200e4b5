//! Memoization cache for release-note rendering
//!
//! The description is re-rendered every frame while the marquee and spinner
//! animate, so rendered lines are kept keyed by a hash of the markdown source.

use ratatui::text::Line;
use std::collections::{HashMap, VecDeque};
use std::hash::{DefaultHasher, Hash, Hasher};

use crate::markdown::{render_markdown, MARKDOWN_CACHE_MAX_ENTRIES};

/// Rendered markdown keyed by content hash, evicted oldest-first.
#[derive(Debug, Default)]
pub struct MarkdownCache {
    entries: HashMap<u64, Vec<Line<'static>>>,
    insertion_order: VecDeque<u64>,
}

impl MarkdownCache {
    pub fn new() -> Self {
        Self::default()
    }

    fn hash_content(content: &str) -> u64 {
        let mut hasher = DefaultHasher::new();
        content.hash(&mut hasher);
        hasher.finish()
    }

    /// Rendered lines for `content`, rendering it on a miss.
    pub fn render(&mut self, content: &str) -> Vec<Line<'static>> {
        let hash = Self::hash_content(content);

        if !self.entries.contains_key(&hash) {
            while self.entries.len() >= MARKDOWN_CACHE_MAX_ENTRIES {
                let Some(oldest) = self.insertion_order.pop_front() else {
                    break;
                };
                self.entries.remove(&oldest);
            }
            self.entries.insert(hash, render_markdown(content));
            self.insertion_order.push_back(hash);
        }

        self.entries[&hash].clone()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repeat_render_reuses_entry() {
        let mut cache = MarkdownCache::new();
        let first = cache.render("Fixes **everything**");
        let second = cache.render("Fixes **everything**");

        assert_eq!(cache.len(), 1);
        assert_eq!(first, second);
        assert_eq!(first, render_markdown("Fixes **everything**"));
    }

    #[test]
    fn test_whitespace_distinguishes_entries() {
        let mut cache = MarkdownCache::new();
        assert!(cache.is_empty());
        cache.render("notes");
        cache.render("notes ");
        assert_eq!(cache.len(), 2);
    }

    #[test]
    fn test_eviction_bounds_size() {
        let mut cache = MarkdownCache::new();
        for i in 0..(MARKDOWN_CACHE_MAX_ENTRIES + 10) {
            cache.render(&format!("release {}", i));
        }
        assert_eq!(cache.len(), MARKDOWN_CACHE_MAX_ENTRIES);

        // The oldest entry was evicted, so rendering it again pushes out another.
        let newest = format!("release {}", MARKDOWN_CACHE_MAX_ENTRIES + 9);
        let oldest_hash = MarkdownCache::hash_content("release 0");
        assert!(!cache.entries.contains_key(&oldest_hash));
        cache.render("release 0");
        assert_eq!(cache.len(), MARKDOWN_CACHE_MAX_ENTRIES);
        assert!(cache.entries.contains_key(&MarkdownCache::hash_content(&newest)));
    }
}
