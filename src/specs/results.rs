// src/specs/results.rs
//! Municipality detail page → turnout figures + party votes.

use scraper::{ElementRef, Html};

use crate::config::consts::{ENVELOPES_KEY, FALLBACK, NAME_CELL_CLASS, PARTY_VOTES_KEYS, REGISTERED_KEY, VALID_KEY};
use crate::core::html::{elements, figure_of, find_where, find_with_class, find_with_token, text_of};
use crate::data::{Figures, PartyVotes};

pub fn extract_result(doc: &Html) -> (Figures, PartyVotes) {
    let root = doc.root_element();
    let figures = Figures {
        registered: figure(root, REGISTERED_KEY),
        envelopes: figure(root, ENVELOPES_KEY),
        valid: figure(root, VALID_KEY),
    };
    (figures, party_votes(root))
}

fn figure(root: ElementRef<'_>, key: &str) -> String {
    find_with_token(root, "td", "headers", key)
        .map(figure_of)
        .unwrap_or_else(|| s!(FALLBACK))
}

fn is_votes_cell(headers: &str) -> bool {
    PARTY_VOTES_KEYS.iter().all(|k| headers.contains(k))
}

fn party_votes(root: ElementRef<'_>) -> PartyVotes {
    let mut votes = PartyVotes::new();
    for tr in elements(root, "tr") {
        let (Some(td_party), Some(td_votes)) = (
            find_with_class(tr, "td", NAME_CELL_CLASS),
            find_where(tr, "td", "headers", is_votes_cell),
        ) else {
            continue;
        };
        // Repeated name: last one wins, column keeps its first position.
        votes.insert(text_of(td_party), figure_of(td_votes));
    }
    votes
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::html::parse;

    fn detail(summary_cells: &str, party_rows: &str) -> Html {
        parse(&format!(
            r#"<html><body>
            <table id="ps311_t1"><tr>
              <td class="cislo" headers="sa1 sb1">12</td>
              {summary_cells}
            </tr></table>
            <table id="t1"><tr><th id="t1sa1">Strana</th></tr>{party_rows}</table>
            </body></html>"#
        ))
    }

    fn party(no: u32, name: &str, votes: &str) -> String {
        format!(
            r#"<tr>
              <td class="cislo" headers="t1sa1 t1sb1">{no}</td>
              <td class="overflow_name" headers="t1sa1 t1sb2">{name}</td>
              <td class="cislo" headers="t1sa2 t1sb3">{votes}</td>
              <td class="cislo" headers="t1sa2 t1sb4">9,99</td>
            </tr>"#
        )
    }

    const FULL_SUMMARY: &str = r#"
        <td class="cislo" headers="sa2">21&nbsp;556</td>
        <td class="cislo" headers="sa3">14&nbsp;167</td>
        <td class="cislo" headers="sa4">65,72</td>
        <td class="cislo" headers="sa6">14&nbsp;036</td>"#;

    #[test]
    fn figures_are_cleaned_text() {
        let (f, _) = extract_result(&detail(FULL_SUMMARY, ""));
        assert_eq!(f, Figures { registered: s!("21556"), envelopes: s!("14167"), valid: s!("14036") });
    }

    #[test]
    fn missing_envelopes_falls_back_alone() {
        let summary = r#"
            <td class="cislo" headers="sa2">21&nbsp;556</td>
            <td class="cislo" headers="sa6">14&nbsp;036</td>"#;
        let (f, _) = extract_result(&detail(summary, ""));
        assert_eq!(f.envelopes, FALLBACK);
        assert_eq!(f.registered, "21556");
        assert_eq!(f.valid, "14036");
    }

    #[test]
    fn votes_come_from_sb3_column_only() {
        let rows = [party(1, "Občanská demokratická strana", "2&nbsp;770"), party(7, "ANO 2011", "1 904")].concat();
        let (_, votes) = extract_result(&detail(FULL_SUMMARY, &rows));
        assert_eq!(votes.len(), 2);
        assert_eq!(votes["Občanská demokratická strana"], "2770");
        assert_eq!(votes["ANO 2011"], "1 904");
        assert_eq!(votes.keys().next().map(String::as_str), Some("Občanská demokratická strana"));
    }

    #[test]
    fn second_party_table_is_read_too() {
        let t2 = r#"<tr>
              <td class="overflow_name" headers="t2sa1 t2sb2">Strana zelených</td>
              <td class="cislo" headers="t2sa2 t2sb3">1&nbsp;007</td>
            </tr>"#;
        let rows = [party(1, "ODS", "10"), s!(t2)].concat();
        let (_, votes) = extract_result(&detail(FULL_SUMMARY, &rows));
        assert_eq!(votes["Strana zelených"], "1007");
    }

    #[test]
    fn duplicate_party_last_write_wins() {
        let rows = [party(1, "ODS", "10"), party(2, "ANO", "3"), party(3, "ODS", "12")].concat();
        let (_, votes) = extract_result(&detail(FULL_SUMMARY, &rows));
        assert_eq!(votes.len(), 2);
        assert_eq!(votes["ODS"], "12");
    }

    #[test]
    fn empty_page_gives_fallbacks() {
        let (f, votes) = extract_result(&parse("<html><body><p>Stránka nenalezena</p></body></html>"));
        assert_eq!(f, Figures { registered: s!(FALLBACK), envelopes: s!(FALLBACK), valid: s!(FALLBACK) });
        assert!(votes.is_empty());
    }
}
