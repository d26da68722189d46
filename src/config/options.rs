// src/config/options.rs
use std::path::PathBuf;

use url::Url;

use crate::error::{Result, ScrapeError};

/// Everything one run needs; built by the CLI, consumed by `runner::run`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RunOptions {
    pub index_url: String,
    pub out: PathBuf,
}

impl RunOptions {
    pub fn new(index_url: impl Into<String>, out: impl Into<PathBuf>) -> Self {
        Self { index_url: index_url.into(), out: out.into() }
    }

    /// Directory of the index page, used as prefix for the site's relative links.
    /// `https://www.volby.cz/pls/ps2017nss/ps32?xkraj=1` → `https://www.volby.cz/pls/ps2017nss/`
    pub fn base_url(&self) -> Result<String> {
        base_url_of(&self.index_url)
    }
}

pub fn base_url_of(index_url: &str) -> Result<String> {
    let url = parse_http_url(index_url)?;
    let dir = url
        .join("./")
        .map_err(|e| ScrapeError::InvalidUrl { url: s!(index_url), reason: e.to_string() })?;
    Ok(dir.to_string())
}

/// Parse and require an http(s) scheme.
pub fn parse_http_url(raw: &str) -> Result<Url> {
    let url = Url::parse(raw)
        .map_err(|e| ScrapeError::InvalidUrl { url: s!(raw), reason: e.to_string() })?;
    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(ScrapeError::InvalidUrl {
            url: s!(raw),
            reason: format!("unsupported scheme '{other}'"),
        }),
    }
}
