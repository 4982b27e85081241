#![allow(non_snake_case)]

use cholbench::{harness::*, io::ConfigurablePrintTarget};
use std::io::{Read, Seek, SeekFrom};

fn small_settings() -> HarnessSettings<f64> {
    HarnessSettingsBuilder::default()
        .sizes(vec![4, 8, 16])
        .warmup_runs(1)
        .timed_runs(3)
        .verbose(false)
        .build()
        .unwrap()
}

#[test]
fn test_report_to_csv_file() {
    let report = run_benchmark(small_settings()).unwrap();
    assert_eq!(report.strategies, vec!["sequential", "vectorized", "parallel"]);

    let mut file = tempfile::tempfile().unwrap();
    report.write_delimited(&mut file, ',').unwrap();
    file.seek(SeekFrom::Start(0)).unwrap();

    let mut text = String::new();
    file.read_to_string(&mut text).unwrap();
    let lines: Vec<&str> = text.lines().collect();

    assert_eq!(lines.len(), 4);
    assert_eq!(lines[0], "Size,sequential,vectorized,parallel");
    for (line, size) in lines[1..].iter().zip([4, 8, 16]) {
        let fields: Vec<&str> = line.split(',').collect();
        assert_eq!(fields.len(), 4);
        assert_eq!(fields[0], size.to_string());
        for t in &fields[1..] {
            // milliseconds to ten decimal places
            assert_eq!(t.split('.').nth(1).map(str::len), Some(10));
            assert!(t.parse::<f64>().unwrap() >= 0.0);
        }
    }
}

#[test]
fn test_verbose_output_to_file() {
    let mut settings = small_settings();
    settings.verbose = true;
    settings.strategies = vec!["auto".to_string()];

    let file = tempfile::NamedTempFile::new().unwrap();
    let mut file2 = file.reopen().unwrap();

    let mut harness = Harness::new(settings).unwrap();
    harness.print_to_file(file.into_file());
    harness.run().unwrap();

    let mut text = String::new();
    file2.read_to_string(&mut text).unwrap();
    assert_eq!(text.lines().count(), 3);
    assert!(text.starts_with("Size = 4, auto Cholesky time"));
}

#[test]
fn test_quiet_run_prints_nothing() {
    let mut harness = Harness::new(small_settings()).unwrap();
    harness.print_to_buffer();
    harness.run().unwrap();
    assert!(harness.get_print_buffer().unwrap().is_empty());
}

#[test]
fn test_accuracy_failure_is_reported() {
    let mut settings = small_settings();
    settings.tolerance = -1.0;
    let err = run_benchmark(settings).unwrap_err();
    assert!(matches!(
        err,
        HarnessError::AccuracyCheckFailed { size: 3, .. }
    ));
}

#[test]
fn test_invalid_settings_are_rejected() {
    let mut settings = small_settings();
    settings.strategies = vec!["gpu".to_string()];
    assert!(matches!(
        Harness::new(settings),
        Err(cholbench::cholesky::SettingsError::BadFieldValue("strategies"))
    ));
}

#[cfg(feature = "serde")]
#[test]
fn test_report_json_file() {
    let report = run_benchmark(small_settings()).unwrap();

    let mut file = tempfile::tempfile().unwrap();
    report.write_json(&mut file).unwrap();
    file.seek(SeekFrom::Start(0)).unwrap();

    let back = BenchmarkReport::read_json(&mut file).unwrap();
    assert_eq!(back, report);
}

#[cfg(feature = "serde")]
#[test]
fn test_settings_json() {
    let settings = small_settings();
    let json = serde_json::to_string(&settings).unwrap();
    let back: HarnessSettings<f64> = serde_json::from_str(&json).unwrap();
    assert_eq!(back, settings);

    // missing fields take their defaults
    let partial: HarnessSettings<f64> = serde_json::from_str(r#"{"timed_runs": 9}"#).unwrap();
    assert_eq!(partial.timed_runs, 9);
    assert_eq!(partial.factor_settings.strategy, "auto");
}

#[test]
fn test_sequential_scaling_smoke() {
    let settings = HarnessSettingsBuilder::<f64>::default()
        .sizes(vec![100, 400])
        .strategies(vec!["sequential".to_string()])
        .warmup_runs(1)
        .timed_runs(5)
        .verbose(false)
        .build()
        .unwrap();
    let report = run_benchmark(settings).unwrap();

    // 4x the dimension is 64x the work, so the ratio of best
    // times is far above linear even on a noisy machine
    let t_small = report.rows[0].times_ms[0];
    let t_large = report.rows[1].times_ms[0];
    assert!(t_large > 4.0 * t_small);
}
