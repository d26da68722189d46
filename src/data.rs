// src/data.rs
//
// Row model for one run and the wide table built from it.
//
// - MunicipalityRef: one qualifying row of the index page.
// - MunicipalitySummary + PartyVotes: what one detail page yields.
// - ResultTable: rows in index order plus the union of party names in
//   first-seen order. That union fixes the party columns of the export.

use indexmap::{IndexMap, IndexSet};

use crate::config::consts::{FALLBACK, FIXED_COLUMNS};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MunicipalityRef {
    pub code: String,
    pub name: String,
    pub detail_url: String,
}

/// Turnout figures as printed on the detail page (no numeric parsing).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Figures {
    pub registered: String,
    pub envelopes: String,
    pub valid: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MunicipalitySummary {
    pub code: String,
    pub name: String,
    pub figures: Figures,
}

impl MunicipalitySummary {
    /// Identity comes from the index row, never from the detail page.
    pub fn new(r: &MunicipalityRef, figures: Figures) -> Self {
        Self { code: r.code.clone(), name: r.name.clone(), figures }
    }

    fn cells(&self) -> [&str; 5] {
        [
            &self.code,
            &self.name,
            &self.figures.registered,
            &self.figures.envelopes,
            &self.figures.valid,
        ]
    }
}

/// Party name → vote count text.
pub type PartyVotes = IndexMap<String, String>;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResultRow {
    pub summary: MunicipalitySummary,
    pub votes: PartyVotes,
}

#[derive(Clone, Debug, Default)]
pub struct ResultTable {
    parties: IndexSet<String>,
    rows: Vec<ResultRow>,
}

impl ResultTable {
    pub fn new() -> Self { Self::default() }

    /// Append a municipality; unseen parties get a column at the end.
    pub fn push(&mut self, row: ResultRow) {
        for party in row.votes.keys() {
            if !self.parties.contains(party) {
                self.parties.insert(party.clone());
            }
        }
        self.rows.push(row);
    }

    pub fn parties(&self) -> impl Iterator<Item = &str> { self.parties.iter().map(String::as_str) }
    pub fn rows(&self) -> &[ResultRow] { &self.rows }
    pub fn len(&self) -> usize { self.rows.len() }
    pub fn is_empty(&self) -> bool { self.rows.is_empty() }
    pub fn party_count(&self) -> usize { self.parties.len() }

    pub fn headers(&self) -> Vec<&str> {
        FIXED_COLUMNS.iter().copied().chain(self.parties()).collect()
    }

    /// One flat record per municipality, aligned with `headers()`.
    pub fn records(&self) -> impl Iterator<Item = Vec<&str>> {
        self.rows.iter().map(move |row| {
            let mut rec: Vec<&str> = Vec::with_capacity(FIXED_COLUMNS.len() + self.parties.len());
            rec.extend(row.summary.cells());
            rec.extend(
                self.parties
                    .iter()
                    .map(|p| row.votes.get(p).map(String::as_str).unwrap_or(FALLBACK)),
            );
            rec
        })
    }
}
