//! Screen identity and the back stack.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

use crate::models::ReleaseTarget;

/// Identity of one opened release screen: `owner/name-tag#instance`.
///
/// Two screens opened for the same release get different instances.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ScreenKey {
    pub route: String,
    pub instance: u64,
}

impl fmt::Display for ScreenKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}#{}", self.route, self.instance)
    }
}

/// Session-scoped issuer of screen keys.
#[derive(Debug, Default)]
pub struct ScreenIdGenerator {
    next: AtomicU64,
}

impl ScreenIdGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn key_for(&self, target: &ReleaseTarget) -> ScreenKey {
        let instance = self.next.fetch_add(1, Ordering::Relaxed);
        ScreenKey {
            route: format!("{}/{}-{}", target.owner, target.name, target.tag),
            instance,
        }
    }
}

/// Stack of open screens.
#[derive(Debug, Default)]
pub struct Navigator {
    stack: Vec<ScreenKey>,
}

impl Navigator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, key: ScreenKey) {
        tracing::debug!(screen = %key, depth = self.stack.len() + 1, "Push screen");
        self.stack.push(key);
    }

    /// Pop the current screen.
    pub fn back(&mut self) -> Option<ScreenKey> {
        let popped = self.stack.pop();
        if let Some(key) = &popped {
            tracing::debug!(screen = %key, depth = self.stack.len(), "Pop screen");
        }
        popped
    }

    pub fn current(&self) -> Option<&ScreenKey> {
        self.stack.last()
    }

    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stack.is_empty()
    }
}
