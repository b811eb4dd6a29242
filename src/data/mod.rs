//! Data loading: CSV point sets and JSON scenario catalog entries

pub mod csv;
pub mod scenario;

pub use self::csv::CsvDataset;
pub use self::scenario::{DisplayLabels, Scenario};
