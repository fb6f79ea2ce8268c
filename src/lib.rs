//! Analytics core for a mobile vs computer internet usage dashboard.
//!
//! A [`Dataset`] is loaded once per session and then only read. Statistics,
//! rankings and chart descriptions are always computed over the full dataset;
//! filtering only narrows the table view, and the CSV export ignores it.
pub mod charts;
pub mod config;
pub mod dashboard;
pub mod error;
pub mod export;
pub mod filter;
pub mod loader;
pub mod output;
pub mod ranking;
pub mod session;
pub mod stats;
pub mod types;
pub mod util;

pub use error::{Error, Result};
pub use filter::{filter, FilterQuery};
pub use ranking::{top_n, TopN};
pub use types::{Bucket, Dataset, Metric, RawRecord, Record};
