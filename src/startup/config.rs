//! Startup configuration.
//!
//! Built from command-line arguments plus environment variables, with
//! builder-style setters for tests and embedding.

use std::path::PathBuf;

use crate::error::ConfigError;
use crate::github::DEFAULT_API_URL;
use crate::models::ReleaseTarget;
use crate::paging::DEFAULT_PREFETCH_DISTANCE;

/// Default number of assets requested per page.
pub const DEFAULT_PAGE_SIZE: u32 = 30;

/// GitHub caps `first:` at 100.
pub const MAX_PAGE_SIZE: u32 = 100;

/// Default tracing filter.
pub const DEFAULT_LOG_FILTER: &str = "info";

pub const USAGE: &str = "\
Usage: gloom <owner>/<name> <tag>
       gloom https://github.com/<owner>/<name>/releases/tag/<tag>

Options:
  -h, --help       Print this help
  -V, --version    Print the version

Environment:
  GITHUB_TOKEN, GH_TOKEN   GitHub token (recommended; anonymous access is heavily rate limited)
  GLOOM_API_URL            API root (default https://api.github.com)
  GLOOM_PAGE_SIZE          Assets per page, 1-100 (default 30)
  GLOOM_LOG                Log filter (default info)
  GLOOM_LOG_FILE           Log file path (default <cache dir>/gloom/gloom.log)
";

/// Configuration for one run of the release screen.
///
/// # Example
///
/// ```ignore
/// use gloom::startup::AppConfig;
/// use gloom::models::ReleaseTarget;
///
/// let config = AppConfig::new(ReleaseTarget::new("acme", "widget", "v1.2.0"))
///     .with_token("ghp_...")
///     .with_page_size(50);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub target: ReleaseTarget,
    pub api_url: String,
    pub token: Option<String>,
    /// Assets per page, 1..=100
    pub page_size: u32,
    /// Items from the end of the list at which the next page is requested
    pub prefetch_distance: usize,
    /// `EnvFilter` directive string
    pub log_filter: String,
    /// Log file override; `None` uses the cache directory
    pub log_file: Option<PathBuf>,
}

impl AppConfig {
    pub fn new(target: ReleaseTarget) -> Self {
        Self {
            target,
            api_url: DEFAULT_API_URL.to_string(),
            token: None,
            page_size: DEFAULT_PAGE_SIZE,
            prefetch_distance: DEFAULT_PREFETCH_DISTANCE,
            log_filter: DEFAULT_LOG_FILTER.to_string(),
            log_file: None,
        }
    }

    pub fn with_api_url(mut self, url: impl Into<String>) -> Self {
        self.api_url = url.into();
        self
    }

    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// Set the page size, clamped to 1..=100.
    pub fn with_page_size(mut self, page_size: u32) -> Self {
        self.page_size = page_size.clamp(1, MAX_PAGE_SIZE);
        self
    }

    pub fn with_prefetch_distance(mut self, distance: usize) -> Self {
        self.prefetch_distance = distance;
        self
    }

    pub fn with_log_filter(mut self, filter: impl Into<String>) -> Self {
        self.log_filter = filter.into();
        self
    }

    pub fn with_log_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.log_file = Some(path.into());
        self
    }

    /// Apply environment overrides from the process environment.
    pub fn from_env(target: ReleaseTarget) -> Result<Self, ConfigError> {
        Self::from_lookup(target, |key| std::env::var(key).ok())
    }

    /// Apply environment overrides read through `lookup`.
    pub fn from_lookup<F>(target: ReleaseTarget, lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let mut config = Self::new(target);

        if let Some(token) = non_empty("GITHUB_TOKEN").or_else(|| non_empty("GH_TOKEN")) {
            config = config.with_token(token.trim());
        }
        if let Some(url) = non_empty("GLOOM_API_URL") {
            config = config.with_api_url(url.trim());
        }
        if let Some(raw) = non_empty("GLOOM_PAGE_SIZE") {
            let page_size = raw
                .trim()
                .parse::<u32>()
                .map_err(|err| ConfigError::InvalidValue {
                    variable: "GLOOM_PAGE_SIZE".to_string(),
                    message: err.to_string(),
                })?;
            config = config.with_page_size(page_size);
        }
        if let Some(filter) = non_empty("GLOOM_LOG") {
            config = config.with_log_filter(filter);
        }
        if let Some(path) = non_empty("GLOOM_LOG_FILE") {
            config = config.with_log_file(path);
        }

        Ok(config)
    }
}

/// What the command line asked for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CliCommand {
    Run { target: ReleaseTarget },
    Version,
    Help,
}

/// Parse arguments, excluding the program name.
pub fn parse_args<I, S>(args: I) -> Result<CliCommand, ConfigError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut positional: Vec<String> = Vec::new();

    for arg in args {
        let arg = arg.as_ref();
        match arg {
            "-h" | "--help" => return Ok(CliCommand::Help),
            "-V" | "--version" => return Ok(CliCommand::Version),
            flag if flag.starts_with('-') && flag.len() > 1 => {
                return Err(ConfigError::UnknownFlag(flag.to_string()));
            }
            value => positional.push(value.to_string()),
        }
    }

    let mut positional = positional.into_iter();
    let repo = positional
        .next()
        .ok_or(ConfigError::MissingArgument("<owner>/<name> or release URL"))?;
    let tag = positional.next();
    if let Some(extra) = positional.next() {
        return Err(ConfigError::InvalidValue {
            variable: "arguments".to_string(),
            message: format!("unexpected argument {:?}", extra),
        });
    }

    let target = ReleaseTarget::parse(&repo, tag.as_deref())?;
    Ok(CliCommand::Run { target })
}
