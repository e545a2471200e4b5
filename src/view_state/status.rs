//! Transient status line messages.

/// How long a status message stays up, in 16ms ticks.
pub const STATUS_TTL_TICKS: u64 = 250;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    Info,
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusLine {
    pub text: String,
    pub kind: StatusKind,
    pub expires_at_tick: u64,
}

impl StatusLine {
    pub fn new(text: impl Into<String>, kind: StatusKind, now_tick: u64) -> Self {
        Self {
            text: text.into(),
            kind,
            expires_at_tick: now_tick + STATUS_TTL_TICKS,
        }
    }

    pub fn is_expired(&self, tick: u64) -> bool {
        tick >= self.expires_at_tick
    }
}
