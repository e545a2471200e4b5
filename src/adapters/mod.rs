//! Concrete implementations of the traits in `crate::traits`.
//!
//! - [`ReqwestHttpClient`] - HTTP client using reqwest
//! - [`SystemShare`] - clipboard share with a browser fallback
//! - [`UnsupportedDownloads`] - download handler that only logs
//!
//! The [`mock`] submodule provides test doubles for each of them.

pub mod mock;
pub mod reqwest_http;
pub mod system_share;

pub use mock::{MockHttpClient, MockResponse, RecordingDownloads, RecordingShare};
pub use reqwest_http::ReqwestHttpClient;
pub use system_share::{open_in_browser, SystemShare, UnsupportedDownloads};
