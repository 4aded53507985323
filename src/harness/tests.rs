use super::*;
use crate::detector::ExtensionDetector;
use crate::handle::{Handle, VocabularyRecord, INSTRUMENT_KEY, PLATFORM_KEY};
use crate::validate::StaticVocabulary;
use chrono::{TimeZone, Utc};
use serde_json::json;

fn vocab() -> StaticVocabulary {
    let mut vocab = StaticVocabulary::new();
    vocab.add_platform(VocabularyRecord::new("SENTINEL-1A"));
    vocab.add_instrument(VocabularyRecord::new("SAR-C"));
    vocab
}

fn well_behaved(name: &str, extensions: &[&str]) -> impl crate::detector::Detector {
    ExtensionDetector::new(name, extensions, |_resource, _options| {
        let t0 = Utc.with_ymd_and_hms(2014, 6, 18, 0, 0, 0).unwrap();
        Ok(Handle::builder()
            .start_time(t0)
            .end_time(t0)
            .metadata(PLATFORM_KEY, json!({"Short_Name": "SENTINEL-1A"}).to_string())
            .metadata(INSTRUMENT_KEY, json!({"Short_Name": "SAR-C"}).to_string())
            .bands(["sigma0", "sigma0_complex"]))
    })
}

fn registry() -> DetectorRegistry {
    let mut registry = DetectorRegistry::new();
    registry.register(well_behaved("sar", &["tif"])).unwrap();
    registry.register(well_behaved("optical", &["nc"])).unwrap();
    registry
}

#[test]
fn test_all_fixtures_pass() {
    let registry = registry();
    let harness = Harness::new(&registry, vocab());

    let fixtures = vec![
        Fixture::new("scene_a.tif", "sar"),
        Fixture::new("scene_b.nc", "optical"),
    ];
    let report = harness.run(&fixtures);

    assert!(report.passed());
    assert_eq!(report.len(), 2);
    assert_eq!(report.failures().count(), 0);

    let first = &report.outcomes()[0];
    assert_eq!(first.auto_detected.as_deref(), Some("sar"));
    assert!(first.report.as_ref().unwrap().passed());
}

#[test]
fn test_bad_fixture_does_not_stop_the_run() {
    let registry = registry();
    let harness = Harness::new(&registry, vocab());

    let fixtures = vec![
        // No detector claims .csv: both opens fail
        Fixture::new("table.csv", "sar"),
        Fixture::new("scene.tif", "sar"),
    ];
    let report = harness.run(&fixtures);

    assert!(!report.passed());
    assert_eq!(report.len(), 2);
    assert_eq!(report.failures().count(), 1);

    let bad = &report.outcomes()[0];
    assert!(!bad.passed());
    assert_eq!(bad.open_errors.len(), 2);
    assert!(bad.report.is_none());

    // The later fixture still ran to completion
    assert!(report.outcomes()[1].passed());
}

#[test]
fn test_wrong_expected_detector_reported() {
    let registry = registry();
    let harness = Harness::new(&registry, vocab());

    // .tif belongs to 'sar'; forcing 'optical' is a probe mismatch
    let report = harness.run(&[Fixture::new("scene.tif", "optical")]);
    let outcome = &report.outcomes()[0];

    assert!(!outcome.passed());
    // Auto-detect still worked and recorded the actual claimant
    assert_eq!(outcome.auto_detected.as_deref(), Some("sar"));
    assert_eq!(outcome.open_errors.len(), 1);
    assert!(outcome.open_errors[0].contains("optical"));
}

#[test]
fn test_empty_batch() {
    let registry = registry();
    let harness = Harness::new(&registry, vocab());

    let report = harness.run(&[]);
    assert!(report.is_empty());
    assert!(report.passed());
}
