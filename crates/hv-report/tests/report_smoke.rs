//! End-to-end smoke test: scenario file -> solver -> series -> report.

use std::fs;

use hv_model::compute_system_state;
use hv_report::{Scenario, build_report, input_fingerprint};
use hv_series::generate_chart_data;

#[test]
fn scenario_file_to_json_report() {
    let dir = std::env::temp_dir().join("hvacsim-report-smoke");
    fs::create_dir_all(&dir).unwrap();
    let path = dir.join("hot_idle.yaml");
    fs::write(
        &path,
        "\
name: hot idle
ambient_c: 45.0
target_c: 18.0
engine_rpm: 800
humidity_pct: 90
tech: fixed_displacement
",
    )
    .unwrap();

    let scenario = Scenario::load(&path).unwrap();
    let inputs = scenario.to_inputs().unwrap();
    let metrics = compute_system_state(&inputs);
    let charts = generate_chart_data(&inputs).unwrap();
    let report = build_report(&inputs, &metrics, &charts);

    assert_eq!(
        report.manifest.fingerprint,
        input_fingerprint(&inputs, hv_model::SOLVER_VERSION)
    );
    assert_eq!(report.charts.ambient_sweep.len(), 15);

    let mut buf = Vec::new();
    report.write_json(&mut buf).unwrap();
    let text = String::from_utf8(buf).unwrap();
    assert!(text.contains("\"fixed_displacement\""));
    assert!(text.contains("\"idle_status\""));

    fs::remove_file(&path).ok();
}
