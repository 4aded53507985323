use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use thiserror::Error;

/// Metadata key under which the platform record is stored
pub const PLATFORM_KEY: &str = "platform";
/// Metadata key under which the instrument record is stored
pub const INSTRUMENT_KEY: &str = "instrument";

#[derive(Error, Debug)]
pub enum MetadataError {
    #[error("metadata key '{0}' is not set")]
    MissingKey(String),

    #[error("metadata key '{key}' does not parse as a record: {source}")]
    Malformed {
        key: String,
        #[source]
        source: serde_json::Error,
    },
}

/// A controlled-vocabulary record, as stored in handle metadata and as
/// served by the vocabulary lookup
///
/// Platform and instrument records share this shape: a required short name
/// plus whatever other fields the vocabulary carries. Equality is
/// field-for-field, including the flattened extras.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VocabularyRecord {
    #[serde(rename = "Short_Name")]
    pub short_name: String,

    #[serde(flatten)]
    pub fields: BTreeMap<String, serde_json::Value>,
}

impl VocabularyRecord {
    pub fn new(short_name: impl Into<String>) -> Self {
        Self {
            short_name: short_name.into(),
            fields: BTreeMap::new(),
        }
    }

    /// Add an additional vocabulary field
    pub fn with_field(mut self, key: impl Into<String>, value: impl Into<serde_json::Value>) -> Self {
        self.fields.insert(key.into(), value.into());
        self
    }

    /// Parse a record from its JSON metadata representation
    pub fn from_json(key: &str, text: &str) -> Result<Self, MetadataError> {
        serde_json::from_str(text).map_err(|source| MetadataError::Malformed {
            key: key.to_string(),
            source,
        })
    }
}
