// File: crates/chart-core/tests/decode.rs
// Purpose: Dump decoding end to end: report lines and the two sample files.

use base64::Engine;
use sensor_chart_core::decode::decode_to_dir;
use sensor_chart_core::flightlog::MIN_PAGE_LINE_LEN;
use sensor_chart_core::{load_samples, DumpOptions, FlightLog};

fn record(tag: u8, payload: &[u8]) -> Vec<u8> {
    let mut v = vec![tag, tag];
    v.extend_from_slice(payload);
    v
}

fn accel(x: i16, y: i16, z: i16) -> Vec<u8> {
    record(b'A', &[x.to_le_bytes(), y.to_le_bytes(), z.to_le_bytes()].concat())
}

fn baro(centi_c: i32, pa: i32) -> Vec<u8> {
    record(b'B', &[centi_c.to_le_bytes(), pa.to_le_bytes()].concat())
}

/// One page line, padded with zero gyro records until it is long enough.
fn page_line(records: &[Vec<u8>]) -> String {
    let mut page = b"NOVA".to_vec();
    for r in records { page.extend_from_slice(r); }
    while page.len() * 4 / 3 <= MIN_PAGE_LINE_LEN {
        page.extend_from_slice(&record(b'G', &[0u8; 6]));
    }
    base64::engine::general_purpose::STANDARD.encode(page)
}

fn decode(text: &str, dir: &std::path::Path) -> (Vec<std::path::PathBuf>, String) {
    let mut out = Vec::new();
    let written = decode_to_dir(text, dir, &DumpOptions::default(), &mut out).expect("decode succeeds");
    (written, String::from_utf8(out).unwrap())
}

#[test]
fn writes_both_files_and_reports_extremes() {
    let g = i16::MAX / 6;
    let text = format!(
        "banner\n{}\n{}\n",
        page_line(&[accel(0, 0, g), baro(2000, 101325)]),
        page_line(&[accel(0, g * 2, 0), baro(2000, 101300), accel(g / 2, 0, 0)]),
    );
    let dir = tempfile::tempdir().unwrap();
    let (written, printed) = decode(&text, dir.path());

    assert_eq!(written, vec![dir.path().join("g_load.json"), dir.path().join("pressures.json")]);

    let want = FlightLog::from_dump(&text, &DumpOptions::default()).unwrap().g_loads();
    let (min, max) = want.iter().fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &v| (lo.min(v), hi.max(v)));
    let want_lines = vec![
        format!("Max g load {max}"),
        format!("Min g load {min}"),
        "Min pressure 101300".to_string(),
        "Max pressure 101325".to_string(),
    ];
    assert_eq!(printed.lines().collect::<Vec<_>>(), want_lines);

    let g_loads = load_samples(&written[0]).unwrap();
    assert_eq!(g_loads.len(), 3);
    assert!(g_loads.iter().zip(&want).all(|(a, b)| (a - b).abs() < 1e-12));
    assert_eq!(load_samples(&written[1]).unwrap(), vec![101325.0, 101300.0]);
}

#[test]
fn missing_pressure_is_reported_and_written_empty() {
    let text = page_line(&[accel(0, 0, i16::MAX / 6)]);
    let dir = tempfile::tempdir().unwrap();
    let (written, printed) = decode(&text, &dir.path().join("out"));

    assert!(printed.ends_with("No pressure samples\n"), "got {printed:?}");
    assert!(printed.starts_with("Max g load "));
    assert_eq!(std::fs::read_to_string(&written[1]).unwrap(), "[]");
    assert!(load_samples(&written[1]).unwrap().is_empty());
}

#[test]
fn dump_without_pages_reports_nothing_found() {
    let dir = tempfile::tempdir().unwrap();
    let (_, printed) = decode("just a prompt\n", dir.path());
    assert_eq!(printed, "No g load samples\nNo pressure samples\n");
    assert!(load_samples(dir.path().join("g_load.json")).unwrap().is_empty());
}

#[test]
fn decode_failure_writes_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let text = "!".repeat(MIN_PAGE_LINE_LEN + 1);
    let err = decode_to_dir(&text, dir.path(), &DumpOptions::default(), &mut Vec::new()).unwrap_err();
    assert!(err.to_string().contains("decoding page dump"));
    assert!(!dir.path().join("g_load.json").exists());
}
