use crate::error::{ClimateError, Result};
use crate::utils::constants::{COORDINATE_DECIMALS, LATITUDE_LABEL, LOCATION_MARKER};

/// Round a coordinate to the precision the provider matches on
///
/// Halves round away from zero.
///
/// # Examples
/// ```
/// use power_climate::utils::round_coordinate;
///
/// assert_eq!(round_coordinate(-77.0428), -77.04);
/// assert_eq!(round_coordinate(-12.0464), -12.05);
/// ```
pub fn round_coordinate(value: f64) -> f64 {
    let factor = 10f64.powi(COORDINATE_DECIMALS);
    (value * factor).round() / factor
}

/// Whether a raw header line carries the echoed request coordinates
pub fn is_location_marker(line: &str) -> bool {
    let lower = line.to_ascii_lowercase();
    lower.contains(LOCATION_MARKER) && lower.contains(LATITUDE_LABEL)
}

/// Extract the values following two labels on a single line
///
/// Labels are matched case-insensitively as whole whitespace-separated tokens (a trailing
/// `:` or `=` on the label is tolerated). Each value must parse as a number; it is returned
/// as written so downstream output carries the provider's own formatting.
///
/// # Examples
/// ```
/// use power_climate::utils::extract_labeled_pair;
///
/// let (lat, lon) =
///     extract_labeled_pair("Location: latitude -12.05 longitude -77.04", "latitude", "longitude")
///         .unwrap();
/// assert_eq!(lat, "-12.05");
/// assert_eq!(lon, "-77.04");
/// ```
pub fn extract_labeled_pair(
    line: &str,
    first_label: &str,
    second_label: &str,
) -> Result<(String, String)> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    let first = value_after_label(line, &tokens, first_label)?;
    let second = value_after_label(line, &tokens, second_label)?;
    Ok((first, second))
}

fn value_after_label(line: &str, tokens: &[&str], label: &str) -> Result<String> {
    let position = tokens
        .iter()
        .position(|t| t.trim_end_matches([':', '=']).eq_ignore_ascii_case(label))
        .ok_or_else(|| ClimateError::MalformedMetadata {
            line: line.trim().to_string(),
            reason: format!("label '{}' not found", label),
        })?;

    let value = tokens
        .get(position + 1)
        .ok_or_else(|| ClimateError::MalformedMetadata {
            line: line.trim().to_string(),
            reason: format!("no value after '{}'", label),
        })?;

    value
        .parse::<f64>()
        .map_err(|_| ClimateError::MalformedMetadata {
            line: line.trim().to_string(),
            reason: format!("value '{}' after '{}' is not numeric", value, label),
        })?;

    Ok(value.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::constants::LONGITUDE_LABEL;

    #[test]
    fn test_round_coordinate() {
        assert_eq!(round_coordinate(-77.0428), -77.04);
        assert_eq!(round_coordinate(-12.0464), -12.05);
        assert_eq!(round_coordinate(-6.2200), -6.22);
        assert_eq!(round_coordinate(-11.1000), -11.1);
        assert_eq!(round_coordinate(-80.4500), -80.45);
    }

    #[test]
    fn test_rounded_coordinate_display() {
        assert_eq!(round_coordinate(-77.0428).to_string(), "-77.04");
        assert_eq!(round_coordinate(-11.1).to_string(), "-11.1");
        assert_eq!(round_coordinate(-69.1966).to_string(), "-69.2");
    }

    #[test]
    fn test_extract_labeled_pair() {
        let (lat, lon) = extract_labeled_pair(
            "Location: latitude -12.05 longitude -77.04",
            LATITUDE_LABEL,
            LONGITUDE_LABEL,
        )
        .unwrap();
        assert_eq!(lat, "-12.05");
        assert_eq!(lon, "-77.04");
    }

    #[test]
    fn test_extract_labeled_pair_provider_casing() {
        // Provider output capitalises the labels and pads with extra spaces
        let (lat, lon) = extract_labeled_pair(
            "Location: Latitude  -12.0464   Longitude -77.0428 ",
            LATITUDE_LABEL,
            LONGITUDE_LABEL,
        )
        .unwrap();
        assert_eq!(lat, "-12.0464");
        assert_eq!(lon, "-77.0428");
    }

    #[test]
    fn test_extract_labeled_pair_failures() {
        let failing = [
            "Location: latitude -12.05",
            "Location: latitude north longitude -77.04",
            "Location: latitude -12.05 longitude",
        ];
        for line in failing {
            assert!(
                extract_labeled_pair(line, "latitude", "longitude").is_err(),
                "accepted {:?}",
                line
            );
        }
    }

    #[test]
    fn test_is_location_marker() {
        assert!(is_location_marker("Location: Latitude  -12.0464   Longitude -77.0428"));
        assert!(is_location_marker("Location: latitude -12.05 longitude -77.04"));
        assert!(!is_location_marker("Elevation from MERRA-2: Average for 0.5 x 0.625 degree"));
        assert!(!is_location_marker("YEAR,DOY,T2M_MAX"));
    }
}
