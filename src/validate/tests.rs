use super::*;
use crate::handle::{Handle, HandleBuilder};
use chrono::{TimeZone, Utc};
use serde_json::json;

fn t0() -> chrono::DateTime<Utc> {
    Utc.with_ymd_and_hms(2014, 6, 18, 0, 0, 0).unwrap()
}

fn vocab() -> StaticVocabulary {
    let mut vocab = StaticVocabulary::new();
    vocab.add_platform(
        VocabularyRecord::new("SENTINEL-1A").with_field("Series_Entity", "SENTINEL-1"),
    );
    vocab.add_instrument(
        VocabularyRecord::new("SAR-C").with_field("Class", "Active Remote Sensing"),
    );
    vocab
}

/// A handle that satisfies the entire checklist
fn good_builder() -> HandleBuilder {
    Handle::builder()
        .start_time(t0())
        .end_time(t0())
        .metadata(
            PLATFORM_KEY,
            json!({"Short_Name": "SENTINEL-1A", "Series_Entity": "SENTINEL-1"}).to_string(),
        )
        .metadata(
            INSTRUMENT_KEY,
            json!({"Short_Name": "SAR-C", "Class": "Active Remote Sensing"}).to_string(),
        )
        .bands(["sigma0", "sigma0_complex", "incidence"])
}

#[test]
fn test_timestamp_checks() {
    let with_times = good_builder().build("sar", "r");
    assert!(has_start_time(&with_times).is_ok());
    assert!(has_end_time(&with_times).is_ok());

    let bare = Handle::builder().build("sar", "r");
    assert_eq!(has_start_time(&bare).unwrap_err().check, Check::StartTime);
    assert_eq!(has_end_time(&bare).unwrap_err().check, Check::EndTime);
}

#[test]
fn test_matches_detector() {
    let handle = good_builder().build("sar", "r");
    assert!(matches_detector(&handle, "sar").is_ok());

    let failure = matches_detector(&handle, "optical").unwrap_err();
    assert_eq!(failure.check, Check::DetectorName);
    assert!(failure.message.contains("sar"));
    assert!(failure.message.contains("optical"));
}

#[test]
fn test_platform_record_valid() {
    let handle = good_builder().build("sar", "r");
    assert!(platform_record_valid(&handle, &vocab()).is_ok());
    assert!(instrument_record_valid(&handle, &vocab()).is_ok());
}

#[test]
fn test_platform_record_missing_metadata() {
    let handle = Handle::builder().build("sar", "r");
    let failure = platform_record_valid(&handle, &vocab()).unwrap_err();
    assert_eq!(failure.check, Check::PlatformRecord);
    assert!(failure.message.contains("platform"));
}

#[test]
fn test_platform_record_unresolvable_short_name() {
    let handle = Handle::builder()
        .metadata(PLATFORM_KEY, json!({"Short_Name": "VOYAGER-1"}).to_string())
        .build("sar", "r");

    let failure = platform_record_valid(&handle, &vocab()).unwrap_err();
    assert!(failure.message.contains("VOYAGER-1"));
}

#[test]
fn test_platform_record_field_mismatch() {
    // Short name resolves but an extra field disagrees with the vocabulary
    let handle = Handle::builder()
        .metadata(
            PLATFORM_KEY,
            json!({"Short_Name": "SENTINEL-1A", "Series_Entity": "LANDSAT"}).to_string(),
        )
        .build("sar", "r");

    let failure = platform_record_valid(&handle, &vocab()).unwrap_err();
    assert_eq!(failure.check, Check::PlatformRecord);
    assert!(failure.message.contains("differs"));
}

#[test]
fn test_intensity_bands_paired() {
    let paired = Handle::builder()
        .bands(["sigma0", "sigma0_complex", "incidence"])
        .build("sar", "r");
    assert!(intensity_bands_paired(&paired).is_ok());

    let unpaired = Handle::builder().bands(["sigma0_complex"]).build("sar", "r");
    let failure = intensity_bands_paired(&unpaired).unwrap_err();
    assert_eq!(failure.check, Check::IntensityBands);
    assert!(failure.message.contains("sigma0"));
}

#[test]
fn test_no_complex_bands_passes_trivially() {
    let handle = Handle::builder().bands(["incidence"]).build("sar", "r");
    assert!(intensity_bands_paired(&handle).is_ok());
}

#[test]
fn test_validator_runs_full_checklist() {
    let validator = Validator::new(vocab());
    let report = validator.validate_expecting(&good_builder().build("sar", "r"), Some("sar"));

    assert!(report.passed());
    assert_eq!(report.checks_run(), 6);
    assert_eq!(report.resource(), "r");
}

#[test]
fn test_validator_without_expected_detector() {
    let validator = Validator::new(vocab());
    let report = validator.validate(&good_builder().build("sar", "r"));

    assert!(report.passed());
    assert_eq!(report.checks_run(), 5);
}

#[test]
fn test_validator_collects_all_failures() {
    // Fails every check: no times, no records, unpaired complex band
    let handle = Handle::builder()
        .bands(["sigma0_complex"])
        .build("sar", "r");

    let validator = Validator::new(vocab());
    let report = validator.validate_expecting(&handle, Some("optical"));

    assert!(!report.passed());
    assert_eq!(report.checks_run(), 6);
    assert_eq!(report.failures().len(), 6);

    // One failure of each kind, none blocked by the others
    let checks: Vec<Check> = report.failures().iter().map(|f| f.check).collect();
    assert!(checks.contains(&Check::StartTime));
    assert!(checks.contains(&Check::EndTime));
    assert!(checks.contains(&Check::DetectorName));
    assert!(checks.contains(&Check::PlatformRecord));
    assert!(checks.contains(&Check::InstrumentRecord));
    assert!(checks.contains(&Check::IntensityBands));
}

#[test]
fn test_static_vocabulary_lookup() {
    let vocab = vocab();
    assert!(vocab.platform("SENTINEL-1A").is_some());
    assert!(vocab.platform("SAR-C").is_none());
    assert!(vocab.instrument("SAR-C").is_some());
}
