//! View state module for decoupling UI rendering from application state.
//!
//! The UI draws from a [`ReleaseViewState`] that borrows from the app, and
//! reports what it measured back as a [`RenderLayout`]:
//!
//! ```text
//!  App ──view state──▶ ui::render ──RenderLayout──▶ App
//! ```

mod release_view;
mod scroll_state;
mod status;

pub use release_view::{ReleaseViewState, RenderLayout};
pub use scroll_state::{ScrollState, PULL_THRESHOLD};
pub use status::{StatusKind, StatusLine, STATUS_TTL_TICKS};
