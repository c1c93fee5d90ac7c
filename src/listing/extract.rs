//! Symbol extraction from a ranked listing page.
//!
//! Symbols are read from anchor `href` attributes that follow a path convention such
//! as `/symbol/AAPL`. Order of first appearance is the ranking.

use std::collections::HashSet;

/// Longest symbol accepted; guards against swallowing an unrelated path segment.
const MAX_SYMBOL_LEN: usize = 10;

/// Extract up to `limit` unique symbols from `html`, in document order.
pub fn extract_symbols(html: &str, href_prefix: &str, limit: usize) -> Vec<String> {
    let mut out = Vec::new();
    let mut seen = HashSet::new();

    for value in iter_href_values(html) {
        if out.len() >= limit {
            break;
        }
        let Some(symbol) = symbol_from_href(value, href_prefix) else {
            continue;
        };
        if seen.insert(symbol.clone()) {
            out.push(symbol);
        }
    }
    out
}

/// All quoted `href` attribute values, in order.
fn iter_href_values(html: &str) -> impl Iterator<Item = &str> {
    let mut pos = 0usize;
    std::iter::from_fn(move || {
        loop {
            let rel = html[pos..].find("href=")?;
            let after = pos + rel + "href=".len();
            pos = after;

            let quote = match html[after..].chars().next() {
                Some(q @ ('"' | '\'')) => q,
                _ => continue,
            };
            let value_start = after + 1;
            let value_len = html[value_start..].find(quote)?;
            pos = value_start + value_len + 1;
            return Some(&html[value_start..value_start + value_len]);
        }
    })
}

/// The symbol an href points at, if it follows the prefix convention.
pub(crate) fn symbol_from_href(href: &str, prefix: &str) -> Option<String> {
    let idx = href.find(prefix)?;
    let rest = &href[idx + prefix.len()..];
    let end = rest.find(['?', '#', '/']).unwrap_or(rest.len());
    let candidate = &rest[..end];
    is_valid_symbol(candidate).then(|| candidate.to_ascii_uppercase())
}

/// Letters with at most one inner `.` or `-` (dual-class shares such as `BRK.B`).
pub(crate) fn is_valid_symbol(s: &str) -> bool {
    if s.is_empty() || s.len() > MAX_SYMBOL_LEN {
        return false;
    }
    let bytes = s.as_bytes();
    let is_sep = |b: u8| b == b'.' || b == b'-';
    if is_sep(bytes[0]) || is_sep(bytes[bytes.len() - 1]) {
        return false;
    }
    let mut separators = 0usize;
    for &b in bytes {
        if is_sep(b) {
            separators += 1;
        } else if !b.is_ascii_alphabetic() {
            return false;
        }
    }
    separators <= 1
}
