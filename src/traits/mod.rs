//! Trait abstractions for dependency injection and testability.
//!
//! - [`HttpClient`] - HTTP client operations (GET, POST)
//! - [`ReleaseSource`] - pages of release details and assets
//! - [`ShareTarget`] - hands the release URL to the platform
//! - [`DownloadHandler`] - receives asset download clicks

pub mod http;
pub mod share;
pub mod source;

pub use http::{Headers, HttpClient, HttpError, Response};
pub use share::{DownloadHandler, DownloadOutcome, ShareOutcome, ShareTarget};
pub use source::ReleaseSource;
