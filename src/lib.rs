// src/lib.rs

#[macro_use]
pub mod macros;

pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod log;
pub mod model;
pub mod specs;

pub mod aggregate;
pub mod export;
pub mod file;
pub mod normalize;
pub mod progress;
pub mod publish;
pub mod report;
pub mod runner;
pub mod scrape;

pub use error::{Error, Result};
pub use model::{Field, RawTrade, Trade};
