pub mod doy_lookup;

pub use doy_lookup::{match_key, DayAverages, DoyLookup};
