use crate::utils::constants::{CLEAN_SUFFIX, RAW_EXTENSION};
use std::path::Path;

/// Raw response file name: `{name}_{start}_to_{end}.csv`
pub fn raw_file_name(location_name: &str, start_date: &str, end_date: &str) -> String {
    format!(
        "{}_{}_to_{}.{}",
        location_name, start_date, end_date, RAW_EXTENSION
    )
}

/// Derive a human-readable location label from a raw file name
///
/// The name is cut at the first `_{start_year}` (the start year being the first four
/// characters of `start_date`), and underscores become spaces. A change to the start date
/// changes the cut point with it. Names without the token fall back to the file stem.
pub fn location_label(file_name: &str, start_date: &str) -> String {
    let year = start_date.get(..4).unwrap_or(start_date);
    let token = format!("_{}", year);

    let base = match file_name.find(&token) {
        Some(pos) => &file_name[..pos],
        None => Path::new(file_name)
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or(file_name),
    };

    base.replace('_', " ")
}

/// Cleaned per-location file name: `{label_with_underscores}_LIMPIO.csv`
pub fn cleaned_file_name(label: &str) -> String {
    format!("{}{}", label.replace(' ', "_"), CLEAN_SUFFIX)
}

/// Consolidated output file name for a region
pub fn consolidated_file_name(region: &str) -> String {
    format!("Data_Climatica_{}_CONSOLIDADO.csv", region)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_raw_file_name() {
        assert_eq!(
            raw_file_name("Lima_Metropolitana", "20231001", "20241001"),
            "Lima_Metropolitana_20231001_to_20241001.csv"
        );
    }

    #[test]
    fn test_location_label() {
        assert_eq!(
            location_label("Lima_Metropolitana_20231001_to_20241001.csv", "20231001"),
            "Lima Metropolitana"
        );
        assert_eq!(
            location_label("Madre_de_Dios_Pto_Maldonado_20231001_to_20241001.csv", "20231001"),
            "Madre de Dios Pto Maldonado"
        );
    }

    #[test]
    fn test_location_label_follows_start_date() {
        let file = "Cusco_20220101_to_20221231.csv";
        assert_eq!(location_label(file, "20220101"), "Cusco");
        // A mismatched start year leaves the token in place, so only the stem is used
        assert_eq!(location_label(file, "20231001"), "Cusco 20220101 to 20221231");
    }

    #[test]
    fn test_cleaned_and_consolidated_names() {
        assert_eq!(
            cleaned_file_name("Lima Metropolitana"),
            "Lima_Metropolitana_LIMPIO.csv"
        );
        assert_eq!(
            consolidated_file_name("PERU"),
            "Data_Climatica_PERU_CONSOLIDADO.csv"
        );
    }
}
