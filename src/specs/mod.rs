// src/specs/mod.rs
//! # Extraction "specs"
//!
//! Everything that knows how to *read* a source and turn it into
//! [`RawTrade`](crate::model::RawTrade) candidates lives here.
//!
//! ## What lives here
//! - **Header resolution** (`headers`): arbitrary header texts → canonical
//!   columns via an ordered alias table. First match wins, nothing is reassigned.
//! - **Table extraction** (`tables`): every `<table>` in a document, tolerant of
//!   column order, missing optional columns, short rows and repeated header rows.
//! - **Mirror mapping** (`mirror`): the public stock-watcher JSON datasets renamed
//!   onto the same candidate shape.
//!
//! ## What does **not** live here
//! - Fetching (`core::net`, `scrape`), cleaning/typing (`normalize`),
//!   aggregation, rendering, export.
//!
//! ## Conventions & invariants
//! - Pure functions of their input; no I/O, no errors. A table or object that
//!   can't be used is skipped (logged at `debug`) and the rest carries on.
//! - Output is string-typed and uncleaned; `normalize` owns every data-quality rule.
//! - Specs are testable offline against literal HTML/JSON.
pub mod headers;
pub mod mirror;
pub mod tables;
