use crate::models::Location;

/// Department capitals requested by default
const DEPARTMENTS: [(&str, f64, f64); 26] = [
    ("Amazonas_Chachapoyas", -6.2200, -77.8680),
    ("Ancash_Huaraz", -9.5290, -77.5278),
    ("Apurimac_Abancay", -13.6338, -72.8824),
    ("Arequipa", -16.4090, -71.5375),
    ("Ayacucho", -13.1587, -74.2230),
    ("Cajamarca", -7.1561, -78.5097),
    ("Callao_Provincia_Const", -12.0560, -77.1350),
    ("Cusco", -13.5320, -71.9675),
    ("Huancavelica", -12.7937, -74.9760),
    ("Huanuco", -9.9284, -76.2378),
    ("Ica", -14.0678, -75.7286),
    ("Junin_Huancayo", -12.0664, -75.2045),
    ("La_Libertad_Trujillo", -8.1150, -79.0290),
    ("Lambayeque_Chiclayo", -6.7710, -79.8402),
    ("Lima_Metropolitana", -12.0464, -77.0428),
    ("Lima_Provincias_Huacho", -11.1000, -77.6000),
    ("Loreto_Iquitos", -3.7491, -73.2538),
    ("Madre_de_Dios_Pto_Maldonado", -12.5933, -69.1966),
    ("Moquegua", -17.1996, -70.9352),
    ("Pasco_Cerro_de_Pasco", -10.6860, -76.2570),
    ("Piura", -5.1944, -80.6320),
    ("Puno", -15.8400, -70.0210),
    ("San_Martin_Moyobamba", -6.0336, -76.9740),
    ("Tacna", -18.0143, -70.2520),
    ("Tumbes", -3.5667, -80.4500),
    ("Ucayali_Pucallpa", -8.3800, -74.5500),
];

pub fn default_locations() -> Vec<Location> {
    DEPARTMENTS
        .iter()
        .map(|(name, lat, lon)| Location::new(*name, *lat, *lon))
        .collect()
}
