// src/core/html.rs
//! Typed lookups over a parsed [`scraper::Html`] tree.
//!
//! The site marks cells with classes (`td.cislo`) and with the `headers`
//! attribute (`headers="t1sa2 t1sb3"`), so queries here are by tag plus either
//! class, whitespace-separated attribute token, or a predicate over the raw
//! attribute value. Every lookup returns `Option`; the callers decide what a
//! missing cell means.

use scraper::{ElementRef, Html};

use super::sanitize::strip_nbsp;

pub fn parse(body: &str) -> Html {
    Html::parse_document(body)
}

/// All elements named `tag` below (and including) `scope`, in document order.
pub fn elements<'a>(scope: ElementRef<'a>, tag: &str) -> impl Iterator<Item = ElementRef<'a>> {
    scope
        .descendants()
        .filter_map(ElementRef::wrap)
        .filter(move |e| e.value().name().eq_ignore_ascii_case(tag))
}

pub fn find_with_class<'a>(scope: ElementRef<'a>, tag: &str, class: &str) -> Option<ElementRef<'a>> {
    elements(scope, tag).find(|e| e.value().classes().any(|c| c == class))
}

/// Match one whitespace-separated token of `attr`, e.g. `headers="sa2"`.
pub fn find_with_token<'a>(
    scope: ElementRef<'a>,
    tag: &str,
    attr: &str,
    token: &str,
) -> Option<ElementRef<'a>> {
    find_where(scope, tag, attr, |v| v.split_ascii_whitespace().any(|t| t == token))
}

/// First `tag` whose `attr` is present and satisfies `pred`.
pub fn find_where<'a, P>(scope: ElementRef<'a>, tag: &str, attr: &str, pred: P) -> Option<ElementRef<'a>>
where
    P: Fn(&str) -> bool,
{
    elements(scope, tag).find(|e| e.value().attr(attr).is_some_and(&pred))
}

/// Concatenated text nodes, each trimmed; empty nodes dropped.
pub fn text_of(el: ElementRef<'_>) -> String {
    el.text().map(str::trim).filter(|t| !t.is_empty()).collect()
}

/// Text of a numeric cell with the thousands separators removed.
pub fn figure_of(el: ElementRef<'_>) -> String {
    strip_nbsp(&text_of(el))
}
