// Public API exports
pub mod detector;
pub mod handle;
pub mod harness;
pub mod opener;
pub mod validate;

// Re-export main types for convenience
pub use detector::{
    ConstructError, Detector, DetectorRegistry, ExtensionDetector, ProbeResult, RegistryError,
};

pub use handle::{
    Band, Handle, HandleBuilder, MetadataError, VocabularyRecord, COMPLEX_SUFFIX, INSTRUMENT_KEY,
    PLATFORM_KEY,
};

pub use opener::{OpenError, OpenOptions, Opener};

pub use validate::{
    Check, StaticVocabulary, ValidationFailure, ValidationReport, Validator, VocabularyLookup,
};

pub use harness::{BatchReport, Fixture, Harness, ResourceOutcome};
