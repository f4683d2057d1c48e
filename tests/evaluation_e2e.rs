//! End-to-end validation: dataset text → records → evaluation → report.

use gemm_roofline::{
    breakdown, estimate, evaluate, evaluate_parallel, parse_records, report, BenchmarkRecord,
    HardwareProfile, PredictError, ProblemShape, RecordParseError,
};

const DATASET: &str = include_str!("../data/deepbench_gemm.txt");

// ── Full pipeline ───────────────────────────────────────────────────────

#[test]
fn full_pipeline_on_bundled_dataset() {
    let records = parse_records(DATASET).unwrap();
    assert_eq!(records.len(), 28);

    let profile = HardwareProfile::titan_v();
    let summary = evaluate(&records, &profile).unwrap();

    assert_eq!(summary.count, records.len());
    assert_eq!(summary.results.len(), records.len());
    assert!(summary.mean_squared_error >= 0.0);
    assert!(summary.mean_squared_error.is_finite());

    // Result order mirrors dataset order.
    for (result, record) in summary.results.iter().zip(&records) {
        assert_eq!(result.shape, record.shape);
        assert_eq!(result.measured_time_usec, record.measured_time_usec);
        // Every bundled row has a positive measured time.
        assert!(result.percent_error.is_some());
    }

    // MSE is reproducible from the per-record rows.
    let recomputed: f64 = summary
        .results
        .iter()
        .map(|r| (r.measured_time_usec - r.predicted_time_usec).powi(2))
        .sum::<f64>()
        / summary.count as f64;
    assert!((summary.mean_squared_error - recomputed).abs() <= 1e-9);

    let table = report::render_table(&summary);
    assert!(table.contains("total mean squared error"));
    assert_eq!(table.lines().count(), records.len() + 4);
    eprintln!("{table}");
}

#[test]
fn parallel_matches_serial_on_bundled_dataset() {
    let records = parse_records(DATASET).unwrap();
    let profile = HardwareProfile::titan_v();

    let serial = evaluate(&records, &profile).unwrap();
    let parallel = evaluate_parallel(&records, &profile).unwrap();
    assert_eq!(serial, parallel);
}

// ── Concrete scenario from the reference hardware ───────────────────────

#[test]
fn titan_v_unit_shape_scenario() {
    let profile = HardwareProfile::titan_v();
    let shape = ProblemShape::new(1, 1, 1).unwrap();

    let b = breakdown(shape, &profile).unwrap();
    // compute = 2 / 5120 / 1200; elements = 2, far under the 4.5M-element
    // L2, so latency = 2*8*8 / 1.7e11; bandwidth = 2*8 / 6.53e11.
    let compute = 2.0 / 5120.0 / 1200.0;
    let bandwidth = 2.0 * 8.0 / 6.53e11;
    let latency = 2.0 * (8.0 * 8.0) / 1.7e11;
    let close = |got: f64, want: f64| (got - want).abs() <= 1e-12 * want.abs().max(1e-300);
    assert!(close(b.compute_usec, compute), "{} vs {compute}", b.compute_usec);
    assert!(close(b.bandwidth_usec, bandwidth));
    assert!(close(b.latency_usec, latency));

    // Sanity against the derived magnitudes: the compute term (~3.255e-7)
    // dominates the latency term (~7.53e-10) and the bandwidth term.
    assert!((b.compute_usec - 3.255e-7).abs() < 1e-10);
    let predicted = estimate(shape, &profile).unwrap();
    assert!(close(predicted, compute));
}

// ── Error paths ─────────────────────────────────────────────────────────

#[test]
fn empty_dataset_is_fatal() {
    let profile = HardwareProfile::titan_v();
    assert_eq!(evaluate(&[], &profile).unwrap_err(), PredictError::EmptyDataset);
}

#[test]
fn zero_measured_record_degrades_softly() {
    let profile = HardwareProfile::titan_v();
    let shape = ProblemShape::new(512, 512, 512).unwrap();
    let records = [BenchmarkRecord { shape, measured_time_usec: 0.0 }];

    let summary = evaluate(&records, &profile).unwrap();
    assert_eq!(summary.results[0].percent_error, None);

    // The record still contributes predicted² to the aggregate.
    let predicted = summary.results[0].predicted_time_usec;
    assert!((summary.mean_squared_error - predicted * predicted).abs() <= 1e-12);

    // And renders as "-" in the table.
    let table = report::render_table(&summary);
    let row = table.lines().find(|l| l.contains("512")).unwrap();
    assert!(row.trim_end().ends_with('-'));
}

#[test]
fn malformed_dataset_fails_with_line_number() {
    let text = "M N K time\n64 64 64 12.5\n64 sixty-four 64 9.0\n";
    let err = parse_records(text).unwrap_err();
    match err {
        RecordParseError::InvalidField { line, field, token } => {
            assert_eq!(line, 3);
            assert_eq!(field, "N");
            assert_eq!(token, "sixty-four");
        }
        other => panic!("unexpected error: {other}"),
    }
}

// ── Profile round-trip ──────────────────────────────────────────────────

#[test]
fn profile_json_round_trip_preserves_predictions() {
    let profile = HardwareProfile::titan_v();
    let json = profile.to_json().unwrap();
    let restored: HardwareProfile = serde_json::from_str(&json).unwrap();

    let shape = ProblemShape::new(1760, 7000, 1760).unwrap();
    assert_eq!(
        estimate(shape, &profile).unwrap(),
        estimate(shape, &restored).unwrap()
    );
}
