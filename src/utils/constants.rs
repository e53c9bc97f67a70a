/// NASA POWER daily point endpoint
pub const POWER_BASE_URL: &str = "https://power.larc.nasa.gov/api/temporal/daily/point";
pub const POWER_COMMUNITY: &str = "AG";
pub const POWER_FORMAT: &str = "CSV";

/// Requested parameter codes, in request order
pub const POWER_PARAMETERS: [&str; 6] = [
    "T2M_MAX",
    "T2M_MIN",
    "PRECTOT",
    "RH2M",
    "WS10M",
    "ALLSKY_SFC_SW_DWN",
];

/// Default request window (YYYYMMDD)
pub const DEFAULT_START_DATE: &str = "20231001";
pub const DEFAULT_END_DATE: &str = "20241001";
/// Request window dates are `YYYYMMDD`
pub const REQUEST_DATE_FORMAT: &str = "%Y%m%d";

/// Request pacing
pub const DEFAULT_TIMEOUT_SECS: u64 = 60;
pub const DEFAULT_PAUSE_MS: u64 = 1000;
pub const DEFAULT_ERROR_PAUSE_MS: u64 = 2000;

/// Coordinates are sent with this many decimals
pub const COORDINATE_DECIMALS: i32 = 2;

/// Directory names
pub const DEFAULT_RAW_DIR: &str = "NASA_Data_Peru_Final_Exito";
pub const DEFAULT_CLEAN_DIR: &str = "Data_Limpia_Final";
pub const DEFAULT_REGION: &str = "PERU";

/// Raw file structure markers
pub const DATA_HEADER_PREFIX: &str = "YEAR,DOY";
pub const END_HEADER_SENTINEL: &str = "-END HEADER-";
pub const LOCATION_MARKER: &str = "location:";
pub const LATITUDE_LABEL: &str = "latitude";
pub const LONGITUDE_LABEL: &str = "longitude";
pub const UNKNOWN_COORDINATE: &str = "N/A";

/// Provider missing-data sentinel
pub const MISSING_SENTINEL: f64 = -999.0;

/// File name conventions
pub const RAW_EXTENSION: &str = "csv";
pub const CLEAN_SUFFIX: &str = "_LIMPIO.csv";

/// Provider column renames (provider name, cleaned name)
pub const COLUMN_RENAMES: [(&str, &str); 2] = [
    ("PRECTOT", "PRECIPITACION_MM"),
    ("ALLSKY_SFC_SW_DWN", "RADIACION_SOLAR"),
];

/// Columns coerced to numbers after renaming
pub const NUMERIC_COLUMNS: [&str; 8] = [
    "YEAR",
    "DOY",
    "T2M_MAX",
    "T2M_MIN",
    "PRECIPITACION_MM",
    "RH2M",
    "WS10M",
    "RADIACION_SOLAR",
];

/// Context columns prepended to every cleaned table
pub const COL_LOCATION: &str = "Departamento";
pub const COL_LATITUDE: &str = "Latitud";
pub const COL_LONGITUDE: &str = "Longitud";

/// Fixed output column order
pub const FINAL_SCHEMA: [&str; 11] = [
    COL_LOCATION,
    COL_LATITUDE,
    COL_LONGITUDE,
    "YEAR",
    "DOY",
    "T2M_MAX",
    "T2M_MIN",
    "PRECIPITACION_MM",
    "RH2M",
    "WS10M",
    "RADIACION_SOLAR",
];

/// Variables averaged by the day-of-year lookup
pub const LOOKUP_VARIABLES: [&str; 6] = [
    "T2M_MAX",
    "T2M_MIN",
    "PRECIPITACION_MM",
    "RH2M",
    "WS10M",
    "RADIACION_SOLAR",
];

/// Environment prefix for configuration overrides
pub const ENV_PREFIX: &str = "POWER_CLIMATE";
