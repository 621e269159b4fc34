//! End-to-end tests for provenance generation and validation.

use chrono::{TimeZone, Utc};
use fixture_core::{Category, GenerationParameters, OutputFormat, SizeClass, SizePalette};
use fixture_generator::FixedClock;
use fixture_provenance::{ProvenanceDocument, ProvenanceError};
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn generate(base: &Path, category: Category, size: SizeClass, format: OutputFormat) {
    let params = GenerationParameters {
        seed: 5,
        category,
        size,
        count: Some(10),
        format,
        output_dir: base.to_string_lossy().into_owned(),
        palette: SizePalette {
            string_lengths: vec![1, 10],
            array_sizes: vec![1, 10],
        },
        ..Default::default()
    };
    let clock = FixedClock(Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap());
    fixture_gen::run_generate(&params, clock).unwrap();
}

#[test]
fn test_provenance_for_generated_tree() {
    let dir = TempDir::new().unwrap();
    let base = dir.path();
    generate(base, Category::Integration, SizeClass::Small, OutputFormat::Ndjson);
    generate(base, Category::Performance, SizeClass::Large, OutputFormat::Json);

    let now = Utc.with_ymd_and_hms(2024, 5, 5, 5, 5, 5).unwrap();
    let written = fixture_gen::run_provenance(base, now).unwrap();
    assert_eq!(written.len(), 2);

    let doc_path = base
        .join("metadata/provenance")
        .join("test_data_integration_small_10.ndjson_provenance.json");
    assert!(written.contains(&doc_path));

    let doc: ProvenanceDocument =
        serde_json::from_str(&fs::read_to_string(&doc_path).unwrap()).unwrap();
    assert_eq!(doc.provenance.tags, vec!["integration", "small"]);
    assert_eq!(doc.provenance.created_at, "2024-05-05T05:05:05.000000Z");
    assert_eq!(doc.source.acquisition.parameters.seed, Some(5));
    assert_eq!(doc.source.acquisition.parameters.count, Some(10));
    assert_eq!(doc.source.acquisition.parameters.format.as_deref(), Some("ndjson"));
    assert_eq!(doc.quality.metrics.record_count, 10);

    let batch = fixture_gen::run_validate(base).unwrap();
    assert_eq!(batch.results.len(), 2);
    assert!(batch.is_valid());
    for (_, result) in &batch.results {
        assert!(result.as_ref().unwrap().warnings.is_empty());
    }
}

#[test]
fn test_validate_reports_malformed_and_continues() {
    let dir = TempDir::new().unwrap();
    let base = dir.path();
    generate(base, Category::Stress, SizeClass::Medium, OutputFormat::Jsonl);
    fixture_gen::run_provenance(base, Utc::now()).unwrap();

    let provenance_dir = base.join("metadata/provenance");
    fs::write(provenance_dir.join("broken_provenance.json"), "{\"provenance\":").unwrap();
    fs::write(
        provenance_dir.join("partial_provenance.json"),
        "{\"provenance\": {\"created_at\": \"soon\"}, \"source\": {}}",
    )
    .unwrap();

    let batch = fixture_gen::run_validate(base).unwrap();

    assert_eq!(batch.results.len(), 3);
    assert_eq!(batch.invalid_count(), 2);
    assert!(!batch.is_valid());
    for (path, result) in &batch.results {
        let name = path.file_name().unwrap().to_string_lossy();
        if name.starts_with("test_data") {
            assert!(result.is_ok(), "{name}");
        } else {
            assert!(
                matches!(result, Err(ProvenanceError::MalformedFixture { .. })),
                "{name}"
            );
        }
    }
}

#[test]
fn test_validate_empty_tree() {
    let dir = TempDir::new().unwrap();
    let batch = fixture_gen::run_validate(dir.path()).unwrap();
    assert!(batch.results.is_empty());
    assert!(batch.is_valid());
}

#[test]
fn test_one_document_per_format() {
    let dir = TempDir::new().unwrap();
    let base = dir.path();
    generate(base, Category::Integration, SizeClass::Small, OutputFormat::Ndjson);
    generate(base, Category::Integration, SizeClass::Small, OutputFormat::Json);

    let written = fixture_gen::run_provenance(base, Utc::now()).unwrap();
    assert_eq!(written.len(), 2);
    assert_ne!(written[0], written[1]);

    let on_disk = fs::read_dir(base.join("metadata/provenance")).unwrap().count();
    assert_eq!(on_disk, 2);
    assert_eq!(fixture_gen::run_validate(base).unwrap().results.len(), 2);
}
