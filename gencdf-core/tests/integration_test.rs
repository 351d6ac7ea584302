use gencdf_core::{apply_padding, build_report, ingest_file, write_report, CdfOptions};
use std::io::Write;
use tempfile::NamedTempFile;

fn write_fixture(content: &str) -> NamedTempFile {
    let mut tmp = NamedTempFile::new().unwrap();
    tmp.write_all(content.as_bytes()).unwrap();
    tmp.flush().unwrap();
    tmp
}

fn render(path: &std::path::Path, opts: &CdfOptions) -> String {
    let mut dist = ingest_file(path, opts).unwrap();
    let start = apply_padding(&mut dist, opts).unwrap();
    let points = build_report(&dist, start, opts).unwrap();
    let mut buf = Vec::new();
    write_report(&points, &mut buf).unwrap();
    String::from_utf8(buf).unwrap()
}

#[test]
fn end_to_end_unpadded() {
    let tmp = write_fixture("1\n2\n2\n3\n");
    let out = render(tmp.path(), &CdfOptions::default());
    assert_eq!(
        out,
        "1 1 1 4 0.25 0.25\n2 2 3 4 0.5 0.75\n3 1 4 4 0.25 1\n"
    );
}

#[test]
fn comments_and_blanks_do_not_count() {
    let tmp = write_fixture("# comment\n  \n7\n");
    let mut dist = ingest_file(tmp.path(), &CdfOptions::default()).unwrap();
    assert_eq!(dist.total(), 1);
    assert_eq!(dist.min(), Some(7.0));
    assert_eq!(dist.max(), Some(7.0));
    let start = apply_padding(&mut dist, &CdfOptions::default()).unwrap();
    let points = build_report(&dist, start, &CdfOptions::default()).unwrap();
    assert_eq!(points.len(), 1);
    assert_eq!(points[0].value, 7.0);
    assert_eq!(points[0].total, 1);
}

#[test]
fn padded_run_bridges_sparse_gap() {
    let tmp = write_fixture("5\n");
    let opts = CdfOptions {
        padding: true,
        pad_start: Some(3.0),
        ..CdfOptions::default()
    };
    let out = render(tmp.path(), &opts);
    assert_eq!(out, "3 0 0 1 0 0\n4 0 0 1\n5 1 1 1 1 1\n");
}

#[test]
fn second_column_with_mixed_tokens() {
    let tmp = write_fixture("alpha 10 x\nbeta 10 y\ngamma 30 z\n");
    let opts = CdfOptions {
        column: 1,
        padding: true,
        pad_increment: 10.0,
        ..CdfOptions::default()
    };
    let out = render(tmp.path(), &opts);
    assert_eq!(
        out,
        "10 2 2 3 0.6666666666666666 0.6666666666666666\n20 0 2 3\n30 1 3 3 0.3333333333333333 1\n"
    );
}

#[test]
fn output_is_byte_identical_across_runs() {
    let tmp = write_fixture("# trace\n0.5\n2\n2\n9.25\n\n0.5\n");
    let opts = CdfOptions {
        padding: true,
        pad_start: Some(0.0),
        pad_stop: Some(10.0),
        pad_increment: 0.25,
        ..CdfOptions::default()
    };
    let first = render(tmp.path(), &opts);
    let second = render(tmp.path(), &opts);
    assert_eq!(first, second);
    assert!(!first.is_empty());
}

#[test]
fn missing_column_fails_the_run() {
    let tmp = write_fixture("1 2\n3\n");
    let opts = CdfOptions {
        column: 1,
        ..CdfOptions::default()
    };
    let err = ingest_file(tmp.path(), &opts).unwrap_err();
    assert!(err.to_string().contains("line 2"));
}

#[test]
fn all_comment_input_reports_no_data() {
    let tmp = write_fixture("# only\n# comments\n");
    let mut dist = ingest_file(tmp.path(), &CdfOptions::default()).unwrap();
    assert!(dist.is_empty());
    assert!(apply_padding(&mut dist, &CdfOptions::default()).is_err());
}
