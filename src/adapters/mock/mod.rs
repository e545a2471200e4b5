//! Test doubles for the collaborator traits.
//!
//! - [`MockHttpClient`] - HTTP client with configurable and queued responses
//! - [`RecordingShare`] - records shared text
//! - [`RecordingDownloads`] - records download clicks

pub mod http;
pub mod share;

pub use http::{MockHttpClient, MockResponse, RecordedRequest};
pub use share::{RecordingDownloads, RecordingShare};
