// src/core/net.rs

// Blocking HTTP GET + HTML parse. One request at a time, no retries.

use std::time::Duration;

use reqwest::blocking::Client;
use scraper::Html;

use crate::config::consts::{REQUEST_TIMEOUT_SECS, USER_AGENT};
use crate::config::options::parse_http_url;
use crate::error::{Result, ScrapeError};

/// Where pages come from. The live site in production, fixtures in tests.
pub trait PageSource {
    /// Raw body of a 2xx response.
    fn get_text(&self, url: &str) -> Result<String>;

    fn fetch(&self, url: &str) -> Result<Html> {
        let body = self.get_text(url)?;
        Ok(super::html::parse(&body))
    }
}

pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    pub fn new() -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .user_agent(USER_AGENT)
            .build()
            .map_err(ScrapeError::Client)?;
        Ok(Self { client })
    }
}

impl PageSource for HttpFetcher {
    fn get_text(&self, url: &str) -> Result<String> {
        parse_http_url(url)?;
        logd!("GET {url}");

        let resp = self
            .client
            .get(url)
            .send()
            .map_err(|e| ScrapeError::from_reqwest(url, e))?;

        let status = resp.status();
        if !status.is_success() {
            return Err(ScrapeError::Http { url: s!(url), status: status.as_u16() });
        }

        resp.text().map_err(|e| ScrapeError::from_reqwest(url, e))
    }
}
