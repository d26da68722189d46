// src/specs/index.rs
//! Territorial index page → ordered municipality references.

use scraper::Html;

use crate::config::consts::{CODE_CELL_CLASS, NAME_CELL_CLASS, TERRITORY_HEADING, TERRITORY_PREFIXES};
use crate::core::html::{elements, find_with_class, text_of};
use crate::core::sanitize::normalize_ws;
use crate::data::MunicipalityRef;
use crate::error::IndexRejection;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct IndexPage {
    /// Heading labels as shown, e.g. "Kraj: Hlavní město Praha".
    pub territory: Vec<String>,
    pub municipalities: Vec<MunicipalityRef>,
}

/// Municipalities of a valid index page; empty when the page is not one.
/// Callers must treat empty as fatal.
pub fn extract_index(doc: &Html, base_url: &str) -> Vec<MunicipalityRef> {
    read_index(doc, base_url).map(|p| p.municipalities).unwrap_or_default()
}

/// Like `extract_index`, but says why a page was rejected.
pub fn read_index(doc: &Html, base_url: &str) -> Result<IndexPage, IndexRejection> {
    let territory = territory_labels(doc);
    if territory.is_empty() {
        return Err(IndexRejection::NoTerritory);
    }

    let municipalities = municipality_rows(doc, base_url);
    if municipalities.is_empty() {
        return Err(IndexRejection::NoMunicipalities);
    }

    Ok(IndexPage { territory, municipalities })
}

fn territory_labels(doc: &Html) -> Vec<String> {
    elements(doc.root_element(), TERRITORY_HEADING)
        .map(text_of)
        .filter(|t| TERRITORY_PREFIXES.iter().any(|p| t.starts_with(p)))
        .map(|t| normalize_ws(&t))
        .collect()
}

fn municipality_rows(doc: &Html, base_url: &str) -> Vec<MunicipalityRef> {
    let mut out = Vec::new();
    for tr in elements(doc.root_element(), "tr") {
        let (Some(td_code), Some(td_name)) = (
            find_with_class(tr, "td", CODE_CELL_CLASS),
            find_with_class(tr, "td", NAME_CELL_CLASS),
        ) else {
            continue;
        };

        // Links are always relative on this site; joined verbatim.
        let Some(href) = elements(td_code, "a")
            .next()
            .and_then(|a| a.value().attr("href"))
            .filter(|h| !h.is_empty())
        else {
            continue;
        };

        out.push(MunicipalityRef {
            code: text_of(td_code),
            name: text_of(td_name),
            detail_url: join!(base_url, href),
        });
    }
    out
}
