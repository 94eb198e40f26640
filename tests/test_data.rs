// Tests for the CSV loader, normalization and configuration files.

use std::io::Write;

use approx::assert_relative_eq;
use sigmanet::{data::normalize_pixels, load_csv, NetConfig, NetError};
use tempfile::NamedTempFile;

fn csv_file(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

#[test]
fn test_loads_requested_rows_in_order() {
    let file = csv_file("3,0,128,255\n1,10,20,30\n4,1,2,3\n");
    let data = load_csv(file.path(), 2, 3).unwrap();

    assert_eq!(data.len(), 2);
    assert_eq!(data.labels(), &[3, 1]);
    assert_eq!(data.features()[0], vec![0.0, 128.0, 255.0]);
    assert_eq!(data.features()[1], vec![10.0, 20.0, 30.0]);
}

#[test]
fn test_skips_header_and_blank_lines() {
    let file = csv_file("label,p1,p2\n\n7,1,2\n\n8,3,4\n");
    let data = load_csv(file.path(), 2, 2).unwrap();
    assert_eq!(data.labels(), &[7, 8]);
}

#[test]
fn test_zero_count_gives_empty_dataset() {
    let file = csv_file("1,2,3\n");
    let data = load_csv(file.path(), 0, 2).unwrap();
    assert!(data.is_empty());
}

#[test]
fn test_missing_file_is_distinct_from_empty() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("nope.csv");
    let err = load_csv(&missing, 10, 784).unwrap_err();
    assert!(matches!(err, NetError::SourceNotFound { .. }));

    let empty = csv_file("");
    let err = load_csv(empty.path(), 10, 784).unwrap_err();
    assert!(matches!(err, NetError::Truncated { requested: 10, found: 0, .. }));
}

#[test]
fn test_short_file_is_truncated_error() {
    let file = csv_file("0,1,1\n1,2,2\n");
    let err = load_csv(file.path(), 5, 2).unwrap_err();
    assert!(matches!(err, NetError::Truncated { requested: 5, found: 2, .. }));
}

#[test]
fn test_wrong_column_count_reports_file_and_line() {
    let file = csv_file("0,1,1\n1,2,2,2\n");
    match load_csv(file.path(), 2, 2).unwrap_err() {
        NetError::RowLength { path, line, index, expected, actual } => {
            assert_eq!(path, file.path());
            assert_eq!((line, index, expected, actual), (2, 1, 2, 3));
        }
        other => panic!("unexpected error: {}", other),
    }
}

#[test]
fn test_malformed_first_row_is_not_taken_for_header() {
    let file = csv_file("1,2,oops,4\n3,0,0,0\n4,1,1,1\n");
    match load_csv(file.path(), 2, 3).unwrap_err() {
        NetError::Parse { line, message, .. } => {
            assert_eq!(line, 1);
            assert!(message.contains("oops"));
        }
        other => panic!("unexpected error: {}", other),
    }
}

#[test]
fn test_header_needs_non_numeric_label_cell() {
    let file = csv_file("label,1x1,1x2\n5,0,255\n");
    let data = load_csv(file.path(), 1, 2).unwrap();
    assert_eq!(data.labels(), &[5]);
}

#[test]
fn test_non_numeric_cell_reports_line() {
    let file = csv_file("0,1,1\n1,2,x\n");
    match load_csv(file.path(), 2, 2).unwrap_err() {
        NetError::Parse { line, .. } => assert_eq!(line, 2),
        other => panic!("unexpected error: {}", other),
    }
}

#[test]
fn test_negative_label_is_parse_error() {
    let file = csv_file("-3,1,1\n");
    assert!(matches!(load_csv(file.path(), 1, 2), Err(NetError::Parse { .. })));
}

#[test]
fn test_normalize_maps_pixel_range_to_unit_interval() {
    let mut values = vec![0.0, 127.5, 255.0];
    normalize_pixels(&mut values);
    assert_relative_eq!(values[0], 0.0);
    assert_relative_eq!(values[1], 0.5);
    assert_relative_eq!(values[2], 1.0);
}

#[test]
fn test_dataset_normalize_after_load() {
    let file = csv_file("2,0,51,255\n");
    let mut data = load_csv(file.path(), 1, 3).unwrap();
    data.normalize();
    for &v in &data.features()[0] {
        assert!((0.0..=1.0).contains(&v));
    }
    assert_relative_eq!(data.features()[0][1], 0.2);
}

#[test]
fn test_config_file_overrides_defaults() {
    let file = csv_file(r#"{ "hidden_size": 32, "epochs": 2, "learning_rate": 0.1 }"#);
    let cfg = NetConfig::load_json(file.path()).unwrap();
    assert_eq!(cfg.hidden_size, 32);
    assert_eq!(cfg.epochs, 2);
    assert_relative_eq!(cfg.learning_rate, 0.1);
    assert_eq!(cfg.input_size, 784);
}

#[test]
fn test_config_file_validation() {
    let file = csv_file(r#"{ "epochs": 0 }"#);
    assert!(matches!(NetConfig::load_json(file.path()), Err(NetError::InvalidConfig(_))));

    let file = csv_file(r#"{ "learning_rat": 0.1 }"#);
    assert!(matches!(NetConfig::load_json(file.path()), Err(NetError::ConfigFormat(_))));

    let file = csv_file("{ not json");
    assert!(matches!(NetConfig::load_json(file.path()), Err(NetError::ConfigFormat(_))));
}
