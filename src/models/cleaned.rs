use serde::{Deserialize, Serialize};

/// One row of a cleaned per-location file, as read back for lookups
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CleanedRecord {
    #[serde(rename = "Departamento")]
    pub location: String,

    #[serde(rename = "Latitud", default)]
    pub latitude: String,

    #[serde(rename = "Longitud", default)]
    pub longitude: String,

    #[serde(rename = "YEAR", default)]
    pub year: Option<f64>,

    #[serde(rename = "DOY", default)]
    pub doy: Option<f64>,

    #[serde(rename = "T2M_MAX", default)]
    pub t2m_max: Option<f64>,

    #[serde(rename = "T2M_MIN", default)]
    pub t2m_min: Option<f64>,

    #[serde(rename = "PRECIPITACION_MM", default)]
    pub precipitation_mm: Option<f64>,

    #[serde(rename = "RH2M", default)]
    pub rh2m: Option<f64>,

    #[serde(rename = "WS10M", default)]
    pub ws10m: Option<f64>,

    #[serde(rename = "RADIACION_SOLAR", default)]
    pub solar_radiation: Option<f64>,
}

impl CleanedRecord {
    /// Value of a numeric column by its output name
    pub fn value(&self, column: &str) -> Option<f64> {
        match column {
            "YEAR" => self.year,
            "DOY" => self.doy,
            "T2M_MAX" => self.t2m_max,
            "T2M_MIN" => self.t2m_min,
            "PRECIPITACION_MM" => self.precipitation_mm,
            "RH2M" => self.rh2m,
            "WS10M" => self.ws10m,
            "RADIACION_SOLAR" => self.solar_radiation,
            _ => None,
        }
    }

    pub fn day_of_year(&self) -> Option<u32> {
        self.doy
            .filter(|d| d.fract() == 0.0 && *d >= 1.0)
            .map(|d| d as u32)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_cleaned_rows() {
        let data = "\
Departamento,Latitud,Longitud,YEAR,DOY,T2M_MAX,T2M_MIN,PRECIPITACION_MM,RH2M,WS10M,RADIACION_SOLAR
Cusco,-13.53,-71.97,2023,274,18.5,3.2,,55.1,2.4,21.7
";
        let mut reader = csv::Reader::from_reader(data.as_bytes());
        let records: Vec<CleanedRecord> = reader.deserialize().collect::<Result<_, _>>().unwrap();

        assert_eq!(records.len(), 1);
        let record = &records[0];
        assert_eq!(record.location, "Cusco");
        assert_eq!(record.latitude, "-13.53");
        assert_eq!(record.day_of_year(), Some(274));
        assert_eq!(record.value("T2M_MAX"), Some(18.5));
        assert_eq!(record.value("PRECIPITACION_MM"), None);
        assert_eq!(record.value("Departamento"), None);
    }

    #[test]
    fn test_missing_columns_default() {
        let data = "Departamento,DOY,T2M_MAX\nPiura,12,31.0\n";
        let mut reader = csv::Reader::from_reader(data.as_bytes());
        let record: CleanedRecord = reader.deserialize().next().unwrap().unwrap();

        assert_eq!(record.latitude, "");
        assert_eq!(record.rh2m, None);
        assert_eq!(record.value("T2M_MAX"), Some(31.0));
    }
}
