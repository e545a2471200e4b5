//! GitHub GraphQL data source.

pub mod client;
pub mod queries;

pub use client::{GithubClient, DEFAULT_API_URL};
