// File: crates/chart-core/tests/flightlog.rs
// Purpose: Decoding flight-log page dumps into readings and sample sequences.

use base64::Engine;
use sensor_chart_core::flightlog::{decode_page, MIN_PAGE_LINE_LEN};
use sensor_chart_core::{DecodeError, DumpOptions, FlightLog, Reading};

fn accel(x: i16, y: i16, z: i16) -> Vec<u8> {
    let mut v = b"AA".to_vec();
    for a in [x, y, z] { v.extend_from_slice(&a.to_le_bytes()); }
    v
}

fn gyro(x: i16, y: i16, z: i16) -> Vec<u8> {
    let mut v = b"GG".to_vec();
    for a in [x, y, z] { v.extend_from_slice(&a.to_le_bytes()); }
    v
}

fn baro(centi_c: i32, pa: i32) -> Vec<u8> {
    let mut v = b"BB".to_vec();
    v.extend_from_slice(&centi_c.to_le_bytes());
    v.extend_from_slice(&pa.to_le_bytes());
    v
}

fn page(records: &[Vec<u8>]) -> Vec<u8> {
    let mut p = b"NOVA".to_vec();
    for r in records { p.extend_from_slice(r); }
    p
}

/// Base64 line long enough to count as a page: pads with gyro records.
fn page_line(records: &[Vec<u8>]) -> String {
    let mut all = records.to_vec();
    while page(&all).len() * 4 / 3 <= MIN_PAGE_LINE_LEN {
        all.push(gyro(0, 0, 0));
    }
    base64::engine::general_purpose::STANDARD.encode(page(&all))
}

fn approx(a: f64, b: f64) -> bool { (a - b).abs() < 1e-9 }

#[test]
fn decodes_each_record_kind() {
    let mut out = Vec::new();
    let bytes = page(&[accel(i16::MAX, 0, -i16::MAX), baro(2150, 101325), gyro(0, i16::MAX, 0)]);
    decode_page(&bytes, &mut out).unwrap();
    assert_eq!(out.len(), 3);

    match out[0] {
        Reading::Accel { x, y, z } => assert!(approx(x, 6.0) && approx(y, 0.0) && approx(z, -6.0)),
        other => panic!("expected accel, got {other:?}"),
    }
    match out[1] {
        Reading::Baro { temperature_k, pressure_pa } => {
            assert!(approx(temperature_k, 21.5 + 273.15));
            assert_eq!(pressure_pa, 101325.0);
        }
        other => panic!("expected baro, got {other:?}"),
    }
    match out[2] {
        Reading::Gyro { y, .. } => assert!(approx(y, 2000.0)),
        other => panic!("expected gyro, got {other:?}"),
    }
}

#[test]
fn truncated_record_ends_page_quietly() {
    let mut bytes = page(&[accel(100, 200, 300), baro(0, 99000)]);
    bytes.truncate(bytes.len() - 3);
    let mut out = Vec::new();
    decode_page(&bytes, &mut out).unwrap();
    assert_eq!(out.len(), 1);

    // a page shorter than its magic is simply empty
    decode_page(b"NO", &mut out).unwrap();
    assert_eq!(out.len(), 1);
}

#[test]
fn bad_magic_is_an_error() {
    let mut out = Vec::new();
    let err = decode_page(b"NOPE....", &mut out).unwrap_err();
    assert!(matches!(err, DecodeError::Unexpected { expected: b'V', got: b'P', index: 2 }));
}

#[test]
fn mismatched_tag_pair_is_an_error() {
    let mut bytes = page(&[accel(1, 2, 3)]);
    bytes.extend_from_slice(b"AB");
    let mut out = Vec::new();
    let err = decode_page(&bytes, &mut out).unwrap_err();
    assert!(matches!(err, DecodeError::Misaligned { index: 12 }));
}

#[test]
fn unknown_tag_is_an_error() {
    let mut bytes = page(&[]);
    bytes.extend_from_slice(b"ZZ0000000000");
    let err = decode_page(&bytes, &mut Vec::new()).unwrap_err();
    assert!(matches!(err, DecodeError::UnknownTag { tag: b'Z', index: 4 }));
}

#[test]
fn dump_skips_short_lines_and_derives_sequences() {
    let g = i16::MAX / 6; // ~1 g
    let text = format!(
        "boot banner\n{}\n\n{}\nshort\n",
        page_line(&[accel(0, 0, g), baro(2000, 101325)]),
        page_line(&[accel(g, 0, 0), baro(2000, 101300), accel(0, g * 2, 0)]),
    );
    let log = FlightLog::from_dump(&text, &DumpOptions::default()).unwrap();
    assert_eq!(log.pages, 2);

    let g_loads = log.g_loads();
    assert_eq!(g_loads.len(), 3);
    assert!((g_loads[0] - 1.0).abs() < 1e-3);
    assert!((g_loads[2] - 2.0).abs() < 1e-3);
    assert_eq!(log.pressures(), vec![101325.0, 101300.0]);
}

#[test]
fn page_limit_is_honoured() {
    let line = page_line(&[baro(0, 1)]);
    let text = [line.clone(), line.clone(), line].join("\n");
    let log = FlightLog::from_dump(&text, &DumpOptions { max_pages: Some(2) }).unwrap();
    assert_eq!(log.pages, 2);
    assert_eq!(log.pressures(), vec![1.0, 1.0]);
}

#[test]
fn invalid_base64_reports_line() {
    let text = format!("header\n{}\n", "!".repeat(MIN_PAGE_LINE_LEN + 10));
    let err = FlightLog::from_dump(&text, &DumpOptions::default()).unwrap_err();
    assert!(matches!(err, DecodeError::Base64 { line: 2, .. }));
}
