// src/core/sanitize.rs

/// Collapse every whitespace run to a single space and trim.
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

/// Header text as the resolver compares it: collapsed, lowercased, trimmed.
pub fn normalize_header(s: &str) -> String {
    normalize_ws(s).to_lowercase()
}

/// Uppercase, then keep only `A-Z` and `.`.
/// `"aapl "` → `"AAPL"`, `"BRK.B!"` → `"BRK.B"`, `"--"` → `""`.
pub fn clean_ticker(raw: &str) -> String {
    raw.to_uppercase()
        .chars()
        .filter(|c| c.is_ascii_uppercase() || *c == '.')
        .collect()
}

/// Split a comma list of tickers (config/CLI input), trimming and uppercasing.
/// Empty entries are dropped.
pub fn parse_ticker_list<I, S>(parts: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    parts
        .into_iter()
        .flat_map(|p| {
            p.as_ref()
                .split(',')
                .map(|t| t.trim().to_uppercase())
                .filter(|t| !t.is_empty())
                .collect::<Vec<_>>()
        })
        .collect()
}
