//! 通过公开 API 扫描文件
use charhunter_core::{scan_and_write, ScanError, ScanOutcome, ScanStats};
use std::io::Write;
use tempfile::NamedTempFile;

#[test]
fn completed_scan_reports_stats() {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all("über\nok\n".as_bytes()).unwrap();

    let mut out = Vec::new();
    let outcome = scan_and_write(file.path(), &mut out).unwrap();

    assert_eq!(
        outcome,
        ScanOutcome::Completed(ScanStats { lines_scanned: 2, chars_scanned: 8, detections: 1 })
    );
    let text = String::from_utf8(out).unwrap();
    assert!(text.contains("U+00FC (LATIN SMALL LETTER U WITH DIAERESIS)"));
}

#[test]
fn missing_path_is_an_outcome_not_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("gone.txt");
    let mut out = Vec::new();
    assert_eq!(scan_and_write(&path, &mut out).unwrap(), ScanOutcome::Missing(path));
}

#[test]
fn decode_failure_is_an_error() {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(&[0xFE, b'\n']).unwrap();
    let mut out = Vec::new();
    let err = scan_and_write(file.path(), &mut out).unwrap_err();
    assert!(matches!(err, ScanError::Decode { .. }));
}
