//! Tests for CSV export to files.

use csv_convert::config::{Locale, DEFAULT_TABLE_NAME, UTF8_BOM};
use csv_convert::export::{export_to_file, ExportFormat, ExportOptions};
use tempfile::TempDir;

#[path = "helpers.rs"]
mod helpers;

use helpers::{create_empty_db, create_scenario_db, create_test_db};

fn csv_options(db_path: std::path::PathBuf, output: std::path::PathBuf) -> ExportOptions {
    ExportOptions {
        db_path,
        output: Some(output),
        format: ExportFormat::Csv,
        table: DEFAULT_TABLE_NAME.to_string(),
        locale: Locale::Ca,
    }
}

#[tokio::test]
async fn test_export_csv_scenario() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let db_path = create_scenario_db(&temp_dir).await;
    let output_path = temp_dir.path().join("out.csv");

    let count = export_to_file(&csv_options(db_path, output_path.clone()))
        .await
        .expect("Failed to export CSV");
    assert_eq!(count, 2);

    let bytes = std::fs::read(&output_path).expect("Failed to read CSV file");
    let mut expected = UTF8_BOM.to_vec();
    expected.extend_from_slice(b"id,code,name\r\n1,007,Alpha\r\n2,12,Beta\r\n");
    assert_eq!(bytes, expected);
}

#[tokio::test]
async fn test_export_csv_empty_table_is_bom_only() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let db_path = create_empty_db(&temp_dir).await;
    let output_path = temp_dir.path().join("out.csv");

    let count = export_to_file(&csv_options(db_path, output_path.clone()))
        .await
        .expect("Failed to export CSV");

    assert_eq!(count, 0);
    assert_eq!(
        std::fs::read(&output_path).expect("Failed to read CSV file"),
        UTF8_BOM
    );
}

#[tokio::test]
async fn test_export_csv_round_trip() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let db_path = temp_dir.path().join("mixed.db");
    create_test_db(
        &db_path,
        &[
            "CREATE TABLE equipaments (id INTEGER, name TEXT, ratio REAL, note TEXT)",
            "INSERT INTO equipaments VALUES (1, 'Pavelló \"Nou\"', 0.5, 'Carrer Major, 1')",
            "INSERT INTO equipaments VALUES (2, 'Piscina', 2.25, NULL)",
            "INSERT INTO equipaments VALUES (3, 'Biblioteca', NULL, 'line one\nline two')",
        ],
    )
    .await;
    let output_path = temp_dir.path().join("out.csv");
    let mut opts = csv_options(db_path, output_path.clone());
    opts.table = "equipaments".to_string();

    let count = export_to_file(&opts).await.expect("Failed to export CSV");
    assert_eq!(count, 3);

    let bytes = std::fs::read(&output_path).expect("Failed to read CSV file");
    assert!(bytes.starts_with(UTF8_BOM));
    let mut reader = csv::Reader::from_reader(&bytes[UTF8_BOM.len()..]);
    let headers = reader.headers().expect("header line").clone();
    assert_eq!(
        headers.iter().collect::<Vec<_>>(),
        vec!["id", "name", "ratio", "note"]
    );

    let records: Vec<csv::StringRecord> = reader
        .records()
        .collect::<Result<_, _>>()
        .expect("records should parse");
    assert_eq!(records.len(), 3);
    for record in &records {
        assert_eq!(record.len(), headers.len());
    }
    assert_eq!(
        records[0].iter().collect::<Vec<_>>(),
        vec!["1", "Pavelló \"Nou\"", "0.5", "Carrer Major, 1"]
    );
    assert_eq!(
        records[1].iter().collect::<Vec<_>>(),
        vec!["2", "Piscina", "2.25", ""]
    );
    assert_eq!(
        records[2].iter().collect::<Vec<_>>(),
        vec!["3", "Biblioteca", "", "line one\nline two"]
    );
}

#[tokio::test]
async fn test_export_csv_missing_table_fails() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let db_path = create_scenario_db(&temp_dir).await;
    let mut opts = csv_options(db_path, temp_dir.path().join("out.csv"));
    opts.table = "does_not_exist".to_string();

    let err = export_to_file(&opts).await.unwrap_err();
    assert!(format!("{:#}", err).contains("Export failed"));
}
