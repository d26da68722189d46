// src/runner.rs

use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};

use scraper::Html;

use crate::{
    config::options::RunOptions,
    core::net::{HttpFetcher, PageSource},
    data::{MunicipalitySummary, ResultRow, ResultTable},
    error::{Result, ScrapeError},
    file::write_export,
    specs::{extract_result, read_index},
};

/// Summary of what was produced.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RunSummary {
    pub file_written: PathBuf,
    pub municipalities: usize,
    pub parties: usize,
}

/// Top-level runner against the live site.
/// `stop` is raised by the interrupt handler; the run ends at the next page boundary.
pub fn run(opts: &RunOptions, stop: &AtomicBool) -> Result<RunSummary> {
    // Validate before opening any connection.
    opts.base_url()?;
    let fetcher = HttpFetcher::new()?;
    run_with(opts, &fetcher, stop)
}

/// Collect everything first, then write the file once.
/// Any failure before the write leaves no output behind.
pub fn run_with(opts: &RunOptions, source: &dyn PageSource, stop: &AtomicBool) -> Result<RunSummary> {
    let table = collect(opts, source, stop)?;
    let file_written = write_export(&opts.out, &table)?;
    logf!("wrote {} rows to {}", table.len(), file_written.display());

    Ok(RunSummary {
        file_written,
        municipalities: table.len(),
        parties: table.party_count(),
    })
}

/// Index page, then every detail page in index order.
pub fn collect(opts: &RunOptions, source: &dyn PageSource, stop: &AtomicBool) -> Result<ResultTable> {
    let base_url = opts.base_url()?;
    logf!("index {} (base {})", opts.index_url, base_url);

    let doc = fetch(source, &opts.index_url, stop)?;
    let index = read_index(&doc, &base_url).map_err(|reason| {
        logd!("rejected index page {}: {reason}", opts.index_url);
        ScrapeError::InvalidIndexPage { url: opts.index_url.clone(), reason }
    })?;

    for label in &index.territory {
        logf!("{label}");
    }
    logf!("{} municipalities", index.municipalities.len());

    let mut table = ResultTable::new();
    for m in &index.municipalities {
        logd!("{} {} <- {}", m.code, m.name, m.detail_url);
        let detail = fetch(source, &m.detail_url, stop)?;
        let (figures, votes) = extract_result(&detail);
        table.push(ResultRow { summary: MunicipalitySummary::new(m, figures), votes });
    }

    if stop.load(Ordering::SeqCst) {
        return Err(ScrapeError::Interrupted);
    }
    Ok(table)
}

fn fetch(source: &dyn PageSource, url: &str, stop: &AtomicBool) -> Result<Html> {
    if stop.load(Ordering::SeqCst) {
        return Err(ScrapeError::Interrupted);
    }
    match source.fetch(url) {
        // A request cut short by the interrupt reports as a transport failure.
        Err(_) if stop.load(Ordering::SeqCst) => Err(ScrapeError::Interrupted),
        other => other,
    }
}
