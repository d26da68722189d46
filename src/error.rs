// src/error.rs
use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

/// Why an index page was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IndexRejection {
    /// No `Kraj:` / `Okres:` heading.
    NoTerritory,
    /// Headings present, but no municipality row with a detail link.
    NoMunicipalities,
}

impl fmt::Display for IndexRejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            IndexRejection::NoTerritory => "no region or district heading found",
            IndexRejection::NoMunicipalities => "no municipalities found",
        })
    }
}

#[derive(Error, Debug)]
pub enum ScrapeError {
    #[error("invalid URL '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },

    #[error("HTTP {status} for {url}")]
    Http { url: String, status: u16 },

    #[error("network error while fetching {url}: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("cannot initialise HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    #[error("{url} is not a region/district page: {reason}")]
    InvalidIndexPage { url: String, reason: IndexRejection },

    #[error("interrupted by user")]
    Interrupted,

    #[error("cannot write {}: {source}", .path.display())]
    OutputWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl ScrapeError {
    /// Classify a reqwest failure: bad URL, HTTP status, or transport.
    pub fn from_reqwest(url: &str, e: reqwest::Error) -> Self {
        if e.is_builder() {
            ScrapeError::InvalidUrl { url: s!(url), reason: e.to_string() }
        } else if let Some(status) = e.status() {
            ScrapeError::Http { url: s!(url), status: status.as_u16() }
        } else {
            ScrapeError::Transport { url: s!(url), source: e }
        }
    }

    pub fn output(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ScrapeError::OutputWrite { path: path.into(), source }
    }
}

pub type Result<T> = std::result::Result<T, ScrapeError>;
