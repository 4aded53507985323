mod band;
mod metadata;


pub use band::{Band, COMPLEX_SUFFIX};
pub use metadata::{MetadataError, VocabularyRecord, INSTRUMENT_KEY, PLATFORM_KEY};

use chrono::{DateTime, Utc};
use std::collections::BTreeMap;

/// An opened resource: the product of a successful detector construction
///
/// A handle always carries exactly one producing detector name. This is
/// enforced structurally: detectors return a [`HandleBuilder`], and only
/// the opener finalizes it by tagging the selected detector.
#[derive(Debug, Clone)]
pub struct Handle {
    resource: String,
    detector: String,
    start_time: Option<DateTime<Utc>>,
    end_time: Option<DateTime<Utc>>,
    metadata: BTreeMap<String, String>,
    bands: Vec<Band>,
}

/// Mutable builder for a handle, returned by detector constructors
#[derive(Debug, Clone, Default)]
pub struct HandleBuilder {
    start_time: Option<DateTime<Utc>>,
    end_time: Option<DateTime<Utc>>,
    metadata: BTreeMap<String, String>,
    bands: Vec<Band>,
}

impl HandleBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start of the temporal coverage
    pub fn start_time(mut self, when: DateTime<Utc>) -> Self {
        self.start_time = Some(when);
        self
    }

    /// End of the temporal coverage
    pub fn end_time(mut self, when: DateTime<Utc>) -> Self {
        self.end_time = Some(when);
        self
    }

    /// Set a metadata entry. Platform and instrument records are stored
    /// under [`PLATFORM_KEY`] and [`INSTRUMENT_KEY`] as JSON text.
    pub fn metadata(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.metadata.insert(key.into(), value.into());
        self
    }

    /// Append a band
    pub fn band(mut self, name: impl Into<String>) -> Self {
        self.bands.push(Band::new(name));
        self
    }

    /// Append several bands in order
    pub fn bands<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.bands.extend(names.into_iter().map(Band::new));
        self
    }

    /// Finalize the handle, tagging it with the producing detector
    pub fn build(self, detector: impl Into<String>, resource: impl Into<String>) -> Handle {
        Handle {
            resource: resource.into(),
            detector: detector.into(),
            start_time: self.start_time,
            end_time: self.end_time,
            metadata: self.metadata,
            bands: self.bands,
        }
    }
}

impl Handle {
    pub fn builder() -> HandleBuilder {
        HandleBuilder::new()
    }

    /// Identifier of the opened resource
    pub fn resource(&self) -> &str {
        &self.resource
    }

    /// Name of the detector that produced this handle
    pub fn detector(&self) -> &str {
        &self.detector
    }

    pub fn start_time(&self) -> Option<DateTime<Utc>> {
        self.start_time
    }

    pub fn end_time(&self) -> Option<DateTime<Utc>> {
        self.end_time
    }

    /// Raw metadata value for a key
    pub fn metadata(&self, key: &str) -> Option<&str> {
        self.metadata.get(key).map(|s| s.as_str())
    }

    /// Metadata keys in sorted order
    pub fn metadata_keys(&self) -> impl Iterator<Item = &str> {
        self.metadata.keys().map(|s| s.as_str())
    }

    /// Parse the metadata value under `key` as a vocabulary record
    pub fn record(&self, key: &str) -> Result<VocabularyRecord, MetadataError> {
        let text = self
            .metadata(key)
            .ok_or_else(|| MetadataError::MissingKey(key.to_string()))?;
        VocabularyRecord::from_json(key, text)
    }

    /// The platform record from metadata
    pub fn platform_record(&self) -> Result<VocabularyRecord, MetadataError> {
        self.record(PLATFORM_KEY)
    }

    /// The instrument record from metadata
    pub fn instrument_record(&self) -> Result<VocabularyRecord, MetadataError> {
        self.record(INSTRUMENT_KEY)
    }

    /// All bands in detector order
    pub fn bands(&self) -> &[Band] {
        &self.bands
    }

    pub fn has_band(&self, name: &str) -> bool {
        self.bands.iter().any(|b| b.name == name)
    }
}
