//! Integration tests
//!
//! Tests the full end-to-end flow: JSON input → projection → every encoder → files on disk

use clap::Parser;
use country_export::cli::{Cli, Runner};
use country_export::encode::{CsvEncoder, JsonEncoder, RecordEncoder};
use country_export::{load_records_from_str, ExportConfig, Exporter, FieldSpec, OutputFormat};
use pretty_assertions::assert_eq;
use serde_json::Value;
use std::fs;
use std::path::Path;
use tempfile::tempdir;

const COUNTRIES: &str = r#"[
  {
    "name": {"common": "Åland Islands", "official": "Åland Islands"},
    "tld": [".ax"],
    "cca2": "AX",
    "capital": ["Mariehamn"],
    "languages": {"swe": "Swedish"},
    "latlng": [60.116667, 19.9]
  },
  {
    "name": {"common": "Antarctica", "official": "Antarctica"},
    "tld": [".aq"],
    "cca2": "AQ",
    "capital": [],
    "languages": [],
    "latlng": [-90, 0]
  },
  {
    "name": {"common": "Côte d'Ivoire", "official": "Republic of Côte d'Ivoire"},
    "tld": [".ci"],
    "cca2": "CI",
    "capital": ["Yamoussoukro"],
    "languages": {"fra": "French"},
    "latlng": [8, -5]
  }
]"#;

fn read(dir: &Path, format: OutputFormat) -> String {
    fs::read_to_string(dir.join(format.default_file_name())).unwrap()
}

// ============================================================================
// Export Pipeline Tests
// ============================================================================

#[test]
fn test_export_all_formats() {
    let dir = tempdir().unwrap();
    let records = load_records_from_str(COUNTRIES).unwrap();
    let config = ExportConfig::new().with_output_dir(dir.path());

    let exporter = Exporter::new(&config.output_dir);
    let reports = exporter.export_all(&config.encoders(), &records);

    assert_eq!(reports.len(), 5);
    for report in &reports {
        let bytes = *report.result.as_ref().unwrap();
        assert_eq!(fs::metadata(&report.path).unwrap().len() as usize, bytes);
    }

    let json = read(dir.path(), OutputFormat::Json);
    assert!(json.contains("\\u00c5land Islands"));
    assert!(json.contains("\"languages\":{}"));
    assert_eq!(json.lines().count(), 3);

    let unescaped = read(dir.path(), OutputFormat::JsonUnescaped);
    assert!(unescaped.contains("Åland Islands"));
    assert!(unescaped.contains("Côte d'Ivoire"));

    // Both variants decode to the same document
    let a: Value = serde_json::from_str(&json).unwrap();
    let b: Value = serde_json::from_str(&unescaped).unwrap();
    assert_eq!(a, b);
    assert_eq!(a[1]["languages"], serde_json::json!({}));

    let csv = read(dir.path(), OutputFormat::Csv);
    let lines: Vec<&str> = csv.lines().collect();
    assert_eq!(
        lines[0],
        "\"name\";\"tld\";\"cca2\";\"capital\";\"languages\";\"latlng\""
    );
    assert_eq!(
        lines[2],
        "\"Antarctica\";\"Antarctica\";\".aq\";\"AQ\";\"\";\"\";\"-90\";\"0\""
    );

    let xml = read(dir.path(), OutputFormat::Xml);
    assert!(xml.starts_with("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n<countries>"));
    assert!(xml.contains("name=\"Åland Islands,Åland Islands\""));
    assert!(xml.contains("name=\"Côte d&apos;Ivoire,Republic of Côte d&apos;Ivoire\""));
    assert_eq!(xml.matches("<country ").count(), 3);

    let yaml = read(dir.path(), OutputFormat::Yaml);
    let parsed: Value = serde_yaml::from_str(&yaml).unwrap();
    let original: Value = serde_json::from_str(COUNTRIES).unwrap();
    assert_eq!(parsed, original);
}

#[test]
fn test_export_with_projection() {
    let dir = tempdir().unwrap();
    let records = load_records_from_str(COUNTRIES).unwrap();
    let config = ExportConfig::new()
        .with_output_dir(dir.path())
        .with_fields(FieldSpec::only(["cca2", "name"]))
        .with_formats(vec![OutputFormat::Csv, OutputFormat::JsonUnescaped]);

    let exporter = Exporter::new(&config.output_dir);
    let reports = exporter.export_all(&config.encoders(), &records);
    assert!(reports.iter().all(|r| r.is_ok()));

    let csv = read(dir.path(), OutputFormat::Csv);
    assert!(csv.starts_with("\"name\";\"cca2\"\n"));

    // languages was projected away, so it is not reintroduced
    let json = read(dir.path(), OutputFormat::JsonUnescaped);
    assert!(!json.contains("languages"));
    assert!(!dir.path().join("countries.xml").exists());
}

#[test]
fn test_save_explicit_path_and_projection() {
    let dir = tempdir().unwrap();
    let records = load_records_from_str(COUNTRIES).unwrap();
    let exporter = Exporter::new(dir.path());

    let encoder = JsonEncoder::unescaped().with_fields(FieldSpec::only(["cca2"]));
    let bytes = exporter
        .save(&encoder, &records, Some(Path::new("sub/codes.json")))
        .unwrap();

    let written = fs::read_to_string(dir.path().join("sub/codes.json")).unwrap();
    assert_eq!(written.len(), bytes);
    assert_eq!(
        written,
        "[{\"cca2\":\"AX\"},\n{\"cca2\":\"AQ\"},\n{\"cca2\":\"CI\"}]\n"
    );
}

#[test]
fn test_encoders_see_independent_copies() {
    let records = load_records_from_str(COUNTRIES).unwrap();
    let before = records.clone();

    let encoders: Vec<Box<dyn RecordEncoder>> =
        vec![Box::new(JsonEncoder::new()), Box::new(CsvEncoder::new())];
    for encoder in &encoders {
        encoder.encode(&records).unwrap();
    }
    assert_eq!(records, before);
}

// ============================================================================
// CLI Tests
// ============================================================================

#[test]
fn test_cli_export_command() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("countries.json");
    fs::write(&input, COUNTRIES).unwrap();
    let out = dir.path().join("dist");

    let cli = Cli::parse_from([
        "country-export",
        "export",
        input.to_str().unwrap(),
        "--output-dir",
        out.to_str().unwrap(),
        "--fields",
        "cca2,capital",
        "--format",
        "csv",
        "--format",
        "yaml",
    ]);
    Runner::new(cli).run().unwrap();

    assert_eq!(
        read(&out, OutputFormat::Csv),
        "\"cca2\";\"capital\"\n\"AX\";\"Mariehamn\"\n\"AQ\";\"\"\n\"CI\";\"Yamoussoukro\"\n"
    );
    assert!(out.join("countries.yml").is_file());
    assert!(!out.join("countries.json").exists());
}

#[test]
fn test_cli_export_with_config_file() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("countries.json");
    fs::write(&input, COUNTRIES).unwrap();
    let out = dir.path().join("out");
    let config = dir.path().join("export.yaml");
    fs::write(
        &config,
        format!(
            "output_dir: {}\nformats: [xml]\nxml:\n  format_output: false\n",
            out.display()
        ),
    )
    .unwrap();

    let cli = Cli::parse_from([
        "country-export",
        "--config",
        config.to_str().unwrap(),
        "export",
        input.to_str().unwrap(),
    ]);
    Runner::new(cli).run().unwrap();

    let xml = read(&out, OutputFormat::Xml);
    assert_eq!(xml.lines().count(), 2);
}

#[test]
fn test_cli_export_missing_input() {
    let dir = tempdir().unwrap();
    let cli = Cli::parse_from([
        "country-export",
        "export",
        dir.path().join("missing.json").to_str().unwrap(),
        "-o",
        dir.path().to_str().unwrap(),
    ]);
    let err = Runner::new(cli).run().unwrap_err();
    assert!(err.to_string().contains("Failed to load input: File not found"));
}
