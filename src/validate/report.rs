use std::fmt;
use thiserror::Error;

/// The individual checks in the post-open checklist
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Check {
    StartTime,
    EndTime,
    DetectorName,
    PlatformRecord,
    InstrumentRecord,
    IntensityBands,
}

impl Check {
    pub fn label(&self) -> &'static str {
        match self {
            Check::StartTime => "start_time",
            Check::EndTime => "end_time",
            Check::DetectorName => "detector_name",
            Check::PlatformRecord => "platform_record",
            Check::InstrumentRecord => "instrument_record",
            Check::IntensityBands => "intensity_bands",
        }
    }
}

impl fmt::Display for Check {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One failed check; collected into a report, never raised
#[derive(Error, Debug, Clone)]
#[error("{check}: {message}")]
pub struct ValidationFailure {
    pub check: Check,
    pub message: String,
}

impl ValidationFailure {
    pub fn new(check: Check, message: impl Into<String>) -> Self {
        Self {
            check,
            message: message.into(),
        }
    }
}

/// Aggregated outcome of running the checklist against one handle
///
/// Checks are independent: a failure is recorded and evaluation moves on,
/// so a full run surfaces every failing check.
#[derive(Debug, Clone)]
pub struct ValidationReport {
    resource: String,
    checks_run: usize,
    failures: Vec<ValidationFailure>,
}

impl ValidationReport {
    pub fn new(resource: impl Into<String>) -> Self {
        Self {
            resource: resource.into(),
            checks_run: 0,
            failures: Vec::new(),
        }
    }

    /// Record the outcome of one check
    pub fn record(&mut self, outcome: Result<(), ValidationFailure>) {
        self.checks_run += 1;
        if let Err(failure) = outcome {
            log::debug!("'{}' failed {}", self.resource, failure);
            self.failures.push(failure);
        }
    }

    pub fn resource(&self) -> &str {
        &self.resource
    }

    pub fn checks_run(&self) -> usize {
        self.checks_run
    }

    pub fn failures(&self) -> &[ValidationFailure] {
        &self.failures
    }

    pub fn passed(&self) -> bool {
        self.failures.is_empty()
    }
}
