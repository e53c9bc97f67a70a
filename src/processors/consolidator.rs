use crate::models::ClimateTable;
use crate::utils::constants::FINAL_SCHEMA;

/// Stack cleaned per-location tables into one table in the fixed column order
///
/// Tables are taken in the given order with their rows kept in order. Returns `None` when there
/// is nothing to consolidate.
pub fn consolidate(tables: &[ClimateTable]) -> Option<ClimateTable> {
    if tables.is_empty() {
        return None;
    }
    Some(ClimateTable::concat(tables, &FINAL_SCHEMA))
}
