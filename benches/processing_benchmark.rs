use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use weatherman::analyzers::WeatherAnalyzer;
use weatherman::models::ObservationRecord;
use weatherman::processors::{filter_by_month, filter_by_year, YearIndex};

// Synthetic daily observations, with a sprinkling of malformed readings
fn create_test_records(years: usize) -> Vec<ObservationRecord> {
    let mut records: Vec<ObservationRecord> = Vec::with_capacity(years * 360);

    for year in 0..years {
        for month in 1..=12 {
            for day in 1..=30 {
                let max_temp = 15.0 + (month as f64) * 1.5 + (day as f64) * 0.1;
                let max_temp = if day % 17 == 0 {
                    "n/a".to_string()
                } else {
                    format!("{:.0}", max_temp)
                };

                records.push(
                    [
                        ("PKT", format!("{}-{}-{}", 2000 + year, month, day)),
                        ("Max TemperatureC", max_temp),
                        ("Min TemperatureC", format!("{}", (month as i32) - 4)),
                        ("Max Humidity", format!("{}", 60 + (day % 30))),
                        ("Mean Humidity", format!("{}", 40 + (day % 20))),
                    ]
                    .into_iter()
                    .collect(),
                );
            }
        }
    }

    records
}

fn benchmark_filters(c: &mut Criterion) {
    let records = create_test_records(10);

    c.bench_function("filter_by_year", |b| {
        b.iter(|| filter_by_year(black_box(&records), black_box("2005")))
    });

    c.bench_function("filter_by_month", |b| {
        b.iter(|| filter_by_month(black_box(&records), black_box("2005-06")))
    });

    c.bench_function("year_index", |b| {
        b.iter(|| YearIndex::from_records(black_box(&records)))
    });
}

fn benchmark_aggregations(c: &mut Criterion) {
    let analyzer = WeatherAnalyzer::new();
    let mut group = c.benchmark_group("aggregations");

    for years in [1, 10, 50] {
        let records = create_test_records(years);
        let refs: Vec<&ObservationRecord> = records.iter().collect();

        group.bench_with_input(BenchmarkId::new("yearly_extremes", years), &refs, |b, refs| {
            b.iter(|| analyzer.compute_yearly_extremes(black_box(refs)))
        });

        group.bench_with_input(BenchmarkId::new("monthly_averages", years), &refs, |b, refs| {
            b.iter(|| analyzer.compute_monthly_averages(black_box(refs)))
        });

        group.bench_with_input(BenchmarkId::new("extreme_series", years), &refs, |b, refs| {
            b.iter(|| analyzer.compute_monthly_extreme_series(black_box(refs)))
        });
    }

    group.finish();
}

criterion_group!(benches, benchmark_filters, benchmark_aggregations);
criterion_main!(benches);
