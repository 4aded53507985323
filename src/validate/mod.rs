mod report;
mod vocab;

#[cfg(test)]
mod tests;

pub use report::{Check, ValidationFailure, ValidationReport};
pub use vocab::{StaticVocabulary, VocabularyLookup};

use crate::handle::{Handle, VocabularyRecord, INSTRUMENT_KEY, PLATFORM_KEY};

/// The handle exposes a start timestamp
pub fn has_start_time(handle: &Handle) -> Result<(), ValidationFailure> {
    match handle.start_time() {
        Some(_) => Ok(()),
        None => Err(ValidationFailure::new(
            Check::StartTime,
            "start time is not set",
        )),
    }
}

/// The handle exposes an end timestamp
pub fn has_end_time(handle: &Handle) -> Result<(), ValidationFailure> {
    match handle.end_time() {
        Some(_) => Ok(()),
        None => Err(ValidationFailure::new(Check::EndTime, "end time is not set")),
    }
}

/// The handle was produced by the expected detector
pub fn matches_detector(handle: &Handle, expected: &str) -> Result<(), ValidationFailure> {
    if handle.detector() == expected {
        Ok(())
    } else {
        Err(ValidationFailure::new(
            Check::DetectorName,
            format!(
                "produced by '{}', expected '{}'",
                handle.detector(),
                expected
            ),
        ))
    }
}

/// The platform metadata record parses and matches the controlled vocabulary
pub fn platform_record_valid<V>(handle: &Handle, vocab: &V) -> Result<(), ValidationFailure>
where
    V: VocabularyLookup + ?Sized,
{
    record_valid(handle, PLATFORM_KEY, Check::PlatformRecord, |name| {
        vocab.platform(name)
    })
}

/// The instrument metadata record parses and matches the controlled vocabulary
pub fn instrument_record_valid<V>(handle: &Handle, vocab: &V) -> Result<(), ValidationFailure>
where
    V: VocabularyLookup + ?Sized,
{
    record_valid(handle, INSTRUMENT_KEY, Check::InstrumentRecord, |name| {
        vocab.instrument(name)
    })
}

fn record_valid(
    handle: &Handle,
    key: &str,
    check: Check,
    lookup: impl Fn(&str) -> Option<VocabularyRecord>,
) -> Result<(), ValidationFailure> {
    let parsed = handle
        .record(key)
        .map_err(|e| ValidationFailure::new(check, e.to_string()))?;

    let canonical = lookup(&parsed.short_name).ok_or_else(|| {
        ValidationFailure::new(
            check,
            format!(
                "short name '{}' does not resolve in the controlled vocabulary",
                parsed.short_name
            ),
        )
    })?;

    if parsed != canonical {
        return Err(ValidationFailure::new(
            check,
            format!(
                "record for '{}' differs from the controlled vocabulary",
                parsed.short_name
            ),
        ));
    }

    Ok(())
}

/// Every complex band has a derived intensity band with the suffix stripped
pub fn intensity_bands_paired(handle: &Handle) -> Result<(), ValidationFailure> {
    let missing: Vec<String> = handle
        .bands()
        .iter()
        .filter(|band| band.is_complex())
        .filter(|band| !handle.has_band(&band.base_name()))
        .map(|band| format!("'{}' lacks '{}'", band.name, band.base_name()))
        .collect();

    if missing.is_empty() {
        Ok(())
    } else {
        Err(ValidationFailure::new(
            Check::IntensityBands,
            missing.join(", "),
        ))
    }
}

/// Runs the full post-open checklist against a handle
///
/// Applied by the caller after open(), not forced inside it. All checks
/// run regardless of earlier failures; the report collects everything.
pub struct Validator<V> {
    vocab: V,
}

impl<V: VocabularyLookup> Validator<V> {
    pub fn new(vocab: V) -> Self {
        Self { vocab }
    }

    /// Run the checklist without a detector expectation
    pub fn validate(&self, handle: &Handle) -> ValidationReport {
        self.validate_expecting(handle, None)
    }

    /// Run the checklist, additionally checking the producing detector
    pub fn validate_expecting(
        &self,
        handle: &Handle,
        expected_detector: Option<&str>,
    ) -> ValidationReport {
        let mut report = ValidationReport::new(handle.resource());

        report.record(has_start_time(handle));
        report.record(has_end_time(handle));
        if let Some(expected) = expected_detector {
            report.record(matches_detector(handle, expected));
        }
        report.record(platform_record_valid(handle, &self.vocab));
        report.record(instrument_record_valid(handle, &self.vocab));
        report.record(intensity_bands_paired(handle));

        report
    }
}
