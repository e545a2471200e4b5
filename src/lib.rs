//! Gloom - a terminal viewer for GitHub release details
//!
//! This library exposes modules for use in integration tests.

pub mod adapters;
pub mod app;
pub mod error;
pub mod github;
pub mod markdown;
pub mod models;
pub mod paging;
pub mod release;
pub mod startup;
pub mod terminal;
pub mod traits;
pub mod ui;
pub mod view_state;
