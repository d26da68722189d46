// src/specs/mod.rs
//! # Scraping “specs” module
//!
//! Page-specific extraction for the two page kinds of volby.cz:
//!
//! - `index`   – territorial page (`ps32?...`): region/district headings and
//!   the municipality table with links to detail pages.
//! - `results` – municipality page (`ps311?...`): turnout figures and the
//!   per-party vote tables.
//!
//! Specs are **pure**: they take an already parsed document and return plain
//! data. Fetching, ordering across pages and export live in `runner`.
//!
//! ## Site markers
//! - index: `h3` text starting with `Kraj:` / `Okres:`, `td.cislo > a[href]`,
//!   `td.overflow_name`.
//! - detail: `td[headers~=sa2|sa3|sa6]` for the figures; party rows pair
//!   `td.overflow_name` with the cell whose `headers` holds both `sa2` and
//!   `sb3` (the vote column; `sb4` next to it is the percentage).
//!
//! Any markup change on the site breaks these; tests run against saved
//! fixtures of the current layout.

pub mod index;
pub mod results;

pub use index::{extract_index, read_index, IndexPage};
pub use results::extract_result;
