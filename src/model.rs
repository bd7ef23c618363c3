// src/model.rs
//
// Record shapes shared by every stage:
//
// - RawTrade: string-typed candidate, straight out of an HTML table or a
//             mirror JSON object. Nothing is validated yet.
// - Trade:    canonical record after cleaning/typing (see `normalize`).
//             Only `normalize` builds these.

use chrono::NaiveDateTime;

/// Canonical columns, in the fixed order header resolution walks them.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Field {
    Ticker,
    Name,
    Company,
    Type,
    FilingDate,
    TransactionDate,
}

impl Field {
    pub const ALL: [Field; 6] = [
        Field::Ticker,
        Field::Name,
        Field::Company,
        Field::Type,
        Field::FilingDate,
        Field::TransactionDate,
    ];

    /// Fields a table must carry to be worth reading.
    pub const REQUIRED: [Field; 3] = [Field::Ticker, Field::Name, Field::Type];

    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Field::Ticker => "ticker",
            Field::Name => "name",
            Field::Company => "company",
            Field::Type => "type",
            Field::FilingDate => "filing_date",
            Field::TransactionDate => "transaction_date",
        }
    }
}

/// One candidate row before cleaning. Missing columns are empty strings.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RawTrade {
    pub ticker: String,
    pub name: String,
    pub company: String,
    pub kind: String,
    pub filing_date: String,
    pub transaction_date: String,
}

impl RawTrade {
    pub fn set(&mut self, field: Field, value: String) {
        match field {
            Field::Ticker => self.ticker = value,
            Field::Name => self.name = value,
            Field::Company => self.company = value,
            Field::Type => self.kind = value,
            Field::FilingDate => self.filing_date = value,
            Field::TransactionDate => self.transaction_date = value,
        }
    }
}

/// Canonical trade disclosure.
///
/// Invariants (upheld by `normalize`): `ticker` is non-empty and only `A-Z`/`.`;
/// `filing_date` is always known. `is_buy` and `is_sell` are independent
/// pattern matches on `kind`, so a record may carry neither, one, or both.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Trade {
    pub ticker: String,
    pub name: String,
    pub company: String,
    pub kind: String,
    pub filing_date: NaiveDateTime,
    pub transaction_date: Option<NaiveDateTime>,
    pub is_buy: bool,
    pub is_sell: bool,
}
