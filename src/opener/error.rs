use crate::detector::{ConstructError, RegistryError};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum OpenError {
    #[error(transparent)]
    Registry(#[from] RegistryError),

    #[error("detector '{detector}' was requested for '{resource}' but its probe declined")]
    DetectorMismatch { detector: String, resource: String },

    #[error("no registered detector claims '{resource}' (tried: {tried:?})")]
    NoMatchingDetector { resource: String, tried: Vec<String> },

    #[error("'{resource}' is claimed by multiple detectors under strict mode: {claimants:?}")]
    AmbiguousClaim {
        resource: String,
        claimants: Vec<String>,
    },

    #[error("detector '{detector}' failed to construct a handle for '{resource}'")]
    Construction {
        detector: String,
        resource: String,
        #[source]
        source: ConstructError,
    },
}
