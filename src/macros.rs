// src/macros.rs

/// Owned `String` from anything `String::from` accepts; `s!()` is empty.
/// Used for error fields and test rows.
#[macro_export]
macro_rules! s {
    () => {
        ::std::string::String::new()
    };
    ($expr:expr) => {
        ::std::string::String::from($expr)
    };
}

/// Concatenate two or more `&str` pieces into a new `String`.
/// Detail URLs are built this way (base + href, no normalisation).
#[macro_export]
macro_rules! join {
    ($first:expr $(, $rest:expr)+ $(,)?) => {{
        let mut out = ::std::string::String::from($first);
        $(
            out.push_str($rest);
        )+
        out
    }};
}
