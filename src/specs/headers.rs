// src/specs/headers.rs
//! Header resolution: observed header texts → canonical column positions.
//!
//! Matching is substring-based against an ordered alias table. Headers are
//! scanned left to right; each header goes to the first still-unresolved field
//! (in [`Field::ALL`] order) with an alias it contains. A resolved field is
//! never reassigned and a claimed header is never claimed twice.

use crate::core::sanitize::normalize_header;
use crate::model::Field;

/// Field → aliases, in resolution order.
pub const ALIASES: [(Field, &[&str]); 6] = [
    (Field::Ticker, &["ticker", "symbol"]),
    (Field::Name, &["politician", "member", "representative", "senator", "name", "rep"]),
    (Field::Company, &["company", "asset", "asset description"]),
    (Field::Type, &["type", "transaction", "transaction type"]),
    (
        Field::FilingDate,
        &["filing", "disclosure", "filed", "filing date", "disclosure date", "date filed"],
    ),
    (
        Field::TransactionDate,
        &["transaction date", "trade date", "date of transaction"],
    ),
];

/// Canonical field → column index in one observed table.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct HeaderMap {
    cols: [Option<usize>; 6],
}

impl HeaderMap {
    #[inline]
    pub fn get(&self, field: Field) -> Option<usize> {
        self.cols[field.index()]
    }

    /// `ticker`, `name` and `type` all found.
    pub fn is_usable(&self) -> bool {
        Field::REQUIRED.iter().all(|f| self.get(*f).is_some())
    }

    pub fn missing_required(&self) -> Vec<Field> {
        Field::REQUIRED.iter().copied().filter(|f| self.get(*f).is_none()).collect()
    }

    /// Highest resolved column; rows must have more cells than this.
    pub fn max_index(&self) -> Option<usize> {
        self.cols.iter().flatten().copied().max()
    }
}

fn matching_field(header: &str, map: &HeaderMap) -> Option<Field> {
    ALIASES
        .iter()
        .filter(|(field, _)| map.get(*field).is_none())
        .find(|(_, aliases)| aliases.iter().any(|a| header.contains(a)))
        .map(|(field, _)| *field)
}

pub fn resolve<S: AsRef<str>>(headers: &[S]) -> HeaderMap {
    let mut map = HeaderMap::default();

    // One pass, one claim per header.
    for (i, raw) in headers.iter().enumerate() {
        let header = normalize_header(raw.as_ref());
        if header.is_empty() { continue; }

        if let Some(field) = matching_field(&header, &map) {
            map.cols[field.index()] = Some(i);
        }
    }
    map
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_plain_headers() {
        let m = resolve(&["Ticker", "Politician", "Type", "Filing Date"]);
        assert_eq!(m.get(Field::Ticker), Some(0));
        assert_eq!(m.get(Field::Name), Some(1));
        assert_eq!(m.get(Field::Type), Some(2));
        assert_eq!(m.get(Field::FilingDate), Some(3));
        assert_eq!(m.get(Field::Company), None);
        assert_eq!(m.get(Field::TransactionDate), None);
        assert!(m.is_usable());
        assert_eq!(m.max_index(), Some(3));
    }

    #[test]
    fn resolves_aliases_any_order_and_case() {
        let m = resolve(&["  TRANS   TYPE ", "rep", "\tSymbol\n"]);
        assert_eq!(m.get(Field::Ticker), Some(2));
        assert_eq!(m.get(Field::Name), Some(1));
        assert_eq!(m.get(Field::Type), Some(0));
        assert!(m.is_usable());
    }

    #[test]
    fn first_match_wins() {
        let m = resolve(&["Symbol", "Ticker", "Senator", "Member", "Transaction", "Type"]);
        assert_eq!(m.get(Field::Ticker), Some(0));
        assert_eq!(m.get(Field::Name), Some(2));
        assert_eq!(m.get(Field::Type), Some(4));
    }

    #[test]
    fn header_claimed_once_in_field_order() {
        // "Transaction Date" goes to `type` (earlier in field order); the
        // later "Trade Date" column then picks up `transaction_date`.
        let m = resolve(&["Ticker", "Name", "Transaction Date", "Trade Date"]);
        assert_eq!(m.get(Field::Type), Some(2));
        assert_eq!(m.get(Field::TransactionDate), Some(3));
    }

    #[test]
    fn full_site_layout() {
        let m = resolve(&[
            "Politician", "Ticker", "Company", "Transaction Type",
            "Transaction Date", "Filing Date",
        ]);
        assert_eq!(m.get(Field::Name), Some(0));
        assert_eq!(m.get(Field::Ticker), Some(1));
        assert_eq!(m.get(Field::Company), Some(2));
        assert_eq!(m.get(Field::Type), Some(3));
        assert_eq!(m.get(Field::TransactionDate), Some(4));
        assert_eq!(m.get(Field::FilingDate), Some(5));
    }

    #[test]
    fn missing_required_reported() {
        let m = resolve(&["Ticker", "Company", "Filed"]);
        assert!(!m.is_usable());
        assert_eq!(m.missing_required(), vec![Field::Name, Field::Type]);
    }

    #[test]
    fn empty_headers_resolve_nothing() {
        let m = resolve::<&str>(&[]);
        assert_eq!(m, HeaderMap::default());
        assert_eq!(m.max_index(), None);
    }
}
