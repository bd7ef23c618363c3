// src/macros.rs

/// `s!()` is an empty `String`; `s!(x)` is `String::from(x)`.
/// Used for row cells, labels and anything else that must own its text.
#[macro_export]
macro_rules! s {
    () => { ::std::string::String::new() };
    ($text:expr) => { ::std::string::String::from($text) };
}

/// Concatenate string slices into one owned `String`.
/// `join!(prefix, "_", stamp, ".", ext)` builds output file names.
#[macro_export]
macro_rules! join {
    ($head:expr $(, $tail:expr)+ $(,)?) => {{
        let mut out = ::std::string::String::from($head);
        $( out.push_str($tail); )+
        out
    }};
}
