use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use power_climate::config::NormalizeSettings;
use power_climate::processors::{consolidate, Normalizer};
use power_climate::readers::RawReader;
use power_climate::utils::coordinates::round_coordinate;
use power_climate::writers::CsvTableWriter;

const FILE_NAME: &str = "Lima_Metropolitana_20231001_to_20241001.csv";

// Synthetic provider response: metadata header plus `days` data rows
fn create_raw_response(days: usize) -> String {
    let mut text = String::from(
        "-BEGIN HEADER-\n\
         NASA/POWER CERES/MERRA2 Native Resolution Daily Data\n\
         Location: latitude -12.05 longitude -77.04\n\
         -END HEADER-\n\
         YEAR,DOY,T2M_MAX,T2M_MIN,PRECTOT,RH2M,WS10M,ALLSKY_SFC_SW_DWN\n",
    );

    for day in 0..days {
        let doy = day % 365 + 1;
        let year = 2023 + day / 365;
        let base = 20.0 + (day % 30) as f64 * 0.1;
        if day % 17 == 0 {
            // Sprinkle sentinel values and space-separated rows
            text.push_str(&format!(
                "{} {}  {:.2} {:.2} -999.0 78.1 3.2 -999.0\n",
                year,
                doy,
                base + 4.0,
                base - 6.0
            ));
        } else {
            text.push_str(&format!(
                "{},{},{:.2},{:.2},{:.2},{:.2},{:.2},{:.2}\n",
                year,
                doy,
                base + 4.0,
                base - 6.0,
                (day % 7) as f64 * 0.3,
                70.0 + (day % 10) as f64,
                3.0 + (day % 5) as f64 * 0.2,
                18.0 + (day % 12) as f64 * 0.5
            ));
        }
    }

    text
}

fn benchmark_raw_parsing(c: &mut Criterion) {
    let settings = NormalizeSettings::default();
    let reader = RawReader::from_settings(&settings);
    let body = create_raw_response(366);

    c.bench_function("parse_raw_response", |b| {
        b.iter(|| {
            let document = reader.parse_text(FILE_NAME, black_box(&body));
            black_box(document.map(|d| d.table.row_count()).unwrap_or(0))
        })
    });
}

fn benchmark_cleaning(c: &mut Criterion) {
    let settings = NormalizeSettings::default();
    let reader = RawReader::from_settings(&settings);
    let normalizer = Normalizer::new(settings);
    let document = reader
        .parse_text(FILE_NAME, &create_raw_response(366))
        .unwrap();

    c.bench_function("clean_document", |b| {
        b.iter(|| {
            let cleaned = normalizer.clean_document(black_box(document.clone()));
            black_box(cleaned.table.row_count())
        })
    });
}

fn benchmark_coordinate_rounding(c: &mut Criterion) {
    let coordinates = vec![-12.0464, -77.0428, -13.5320, -71.9675, -3.7491, -73.2538];

    c.bench_function("coordinate_rounding", |b| {
        b.iter(|| {
            let total: f64 = coordinates.iter().map(|&c| round_coordinate(c)).sum();
            black_box(total)
        })
    });
}

fn benchmark_consolidation_by_size(c: &mut Criterion) {
    let mut group = c.benchmark_group("consolidate_and_serialize");
    let settings = NormalizeSettings::default();
    let reader = RawReader::from_settings(&settings);
    let normalizer = Normalizer::new(settings);
    let writer = CsvTableWriter::new();

    for &locations in &[1usize, 10, 26] {
        let tables: Vec<_> = (0..locations)
            .map(|_| {
                let document = reader
                    .parse_text(FILE_NAME, &create_raw_response(366))
                    .unwrap();
                normalizer.clean_document(document).table
            })
            .collect();

        group.bench_with_input(
            BenchmarkId::new("locations", locations),
            &tables,
            |b, tables| {
                b.iter(|| {
                    let merged = consolidate(black_box(tables)).unwrap();
                    black_box(writer.to_bytes(&merged).map(|bytes| bytes.len()).unwrap_or(0))
                })
            },
        );
    }

    group.finish();
}

criterion_group!(
    benches,
    benchmark_raw_parsing,
    benchmark_cleaning,
    benchmark_coordinate_rounding,
    benchmark_consolidation_by_size
);
criterion_main!(benches);
