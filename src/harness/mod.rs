#[cfg(test)]
mod tests;

use crate::detector::DetectorRegistry;
use crate::opener::{OpenOptions, Opener};
use crate::validate::{ValidationReport, Validator, VocabularyLookup};

/// One resource paired with the detector expected to claim it
#[derive(Debug, Clone)]
pub struct Fixture {
    pub resource: String,
    pub detector: String,
}

impl Fixture {
    pub fn new(resource: impl Into<String>, detector: impl Into<String>) -> Self {
        Self {
            resource: resource.into(),
            detector: detector.into(),
        }
    }
}

/// Everything observed while exercising one fixture
#[derive(Debug)]
pub struct ResourceOutcome {
    pub fixture: Fixture,
    /// Detector selected by auto-detection, when that open succeeded
    pub auto_detected: Option<String>,
    /// Rendered open errors from the auto and forced opens
    pub open_errors: Vec<String>,
    /// Checklist report for the forced handle, when that open succeeded
    pub report: Option<ValidationReport>,
}

impl ResourceOutcome {
    pub fn passed(&self) -> bool {
        self.open_errors.is_empty() && self.report.as_ref().is_some_and(|r| r.passed())
    }
}

/// Aggregated outcomes of a batch run
#[derive(Debug, Default)]
pub struct BatchReport {
    outcomes: Vec<ResourceOutcome>,
}

impl BatchReport {
    pub fn outcomes(&self) -> &[ResourceOutcome] {
        &self.outcomes
    }

    pub fn failures(&self) -> impl Iterator<Item = &ResourceOutcome> {
        self.outcomes.iter().filter(|o| !o.passed())
    }

    pub fn len(&self) -> usize {
        self.outcomes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.outcomes.is_empty()
    }

    pub fn passed(&self) -> bool {
        self.outcomes.iter().all(|o| o.passed())
    }
}

/// Batch driver: opens every fixture both auto-detected and forced, then
/// runs the full checklist against the forced handle
///
/// A failing fixture never stops the run; every open error and failed
/// check across the batch ends up in the report.
pub struct Harness<'r, V> {
    opener: Opener<'r>,
    validator: Validator<V>,
    options: OpenOptions,
}

impl<'r, V: VocabularyLookup> Harness<'r, V> {
    pub fn new(registry: &'r DetectorRegistry, vocab: V) -> Self {
        Self {
            opener: Opener::new(registry),
            validator: Validator::new(vocab),
            options: OpenOptions::default(),
        }
    }

    pub fn with_options(mut self, options: OpenOptions) -> Self {
        self.options = options;
        self
    }

    pub fn run(&self, fixtures: &[Fixture]) -> BatchReport {
        BatchReport {
            outcomes: fixtures.iter().map(|f| self.run_one(f)).collect(),
        }
    }

    fn run_one(&self, fixture: &Fixture) -> ResourceOutcome {
        log::info!(
            "checking '{}' against detector '{}'",
            fixture.resource,
            fixture.detector
        );

        let mut outcome = ResourceOutcome {
            fixture: fixture.clone(),
            auto_detected: None,
            open_errors: Vec::new(),
            report: None,
        };

        // Open with no detector specified
        match self
            .opener
            .open_with(&fixture.resource, None, &self.options)
        {
            Ok(handle) => outcome.auto_detected = Some(handle.detector().to_string()),
            Err(e) => outcome.open_errors.push(e.to_string()),
        }

        // Open with the expected detector forced, then validate that handle
        match self
            .opener
            .open_with(&fixture.resource, Some(&fixture.detector), &self.options)
        {
            Ok(handle) => {
                let report = self
                    .validator
                    .validate_expecting(&handle, Some(&fixture.detector));
                outcome.report = Some(report);
            }
            Err(e) => outcome.open_errors.push(e.to_string()),
        }

        outcome
    }
}
