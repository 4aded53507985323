mod error;
mod extension;
mod registry;


pub use error::RegistryError;
pub use extension::ExtensionDetector;
pub use registry::DetectorRegistry;

use crate::handle::HandleBuilder;
use crate::opener::OpenOptions;

/// Error type detector constructors may surface for underlying I/O or
/// parse failures; the opener wraps it with detector and resource context.
pub type ConstructError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Outcome of probing a resource against one detector
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ProbeResult {
    /// Detector recognizes the resource. Confidence is informational only;
    /// selection always follows registry order.
    Claim { confidence: Option<f32> },
    /// Detector does not recognize the resource
    Decline,
}

impl ProbeResult {
    /// Claim without a confidence score
    pub fn claim() -> Self {
        ProbeResult::Claim { confidence: None }
    }

    /// Claim with a confidence score in [0.0, 1.0]
    pub fn claim_with_confidence(confidence: f32) -> Self {
        ProbeResult::Claim {
            confidence: Some(confidence),
        }
    }

    pub fn is_claim(&self) -> bool {
        matches!(self, ProbeResult::Claim { .. })
    }
}

/// Core trait that all format detectors must implement
///
/// A detector is a named strategy that can recognize one resource format
/// and build a handle for it. Detectors are immutable once registered.
pub trait Detector: Send + Sync {
    /// Unique name under which the detector is registered
    fn name(&self) -> &str;

    /// Claim or decline a candidate resource
    ///
    /// Probing should be cheap (extension match, magic bytes, header sniff)
    /// and must be deterministic for a given resource.
    fn probe(&self, resource: &str) -> ProbeResult;

    /// Build a handle for a claimed resource
    ///
    /// May perform blocking I/O. The returned builder is finalized by the
    /// opener, which tags it with this detector's name.
    fn construct(&self, resource: &str, options: &OpenOptions)
        -> Result<HandleBuilder, ConstructError>;
}

impl std::fmt::Debug for dyn Detector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Detector").field("name", &self.name()).finish()
    }
}
