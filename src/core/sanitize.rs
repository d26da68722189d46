// src/core/sanitize.rs

pub const NBSP: char = '\u{a0}';

pub fn normalize_ws(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_space = false;
    for ch in s.chars() {
        if ch.is_whitespace() {
            if !prev_space { out.push(' '); prev_space = true; }
        } else { out.push(ch); prev_space = false; }
    }
    out.trim().to_string()
}

/// The site groups thousands with `&nbsp;` ("21&nbsp;556"); drop it.
pub fn strip_nbsp(s: &str) -> String {
    s.chars().filter(|&c| c != NBSP).collect()
}
