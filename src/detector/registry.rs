use super::{Detector, RegistryError};
use std::collections::HashMap;
use std::sync::Arc;

/// Ordered collection of format detectors with unique names
///
/// Registration order is the trial order used for auto-detection. The
/// registry is not internally synchronized: populate it once at startup,
/// then share it read-only (detectors are `Arc`ed so a populated registry
/// can be consulted from multiple worker threads).
pub struct DetectorRegistry {
    /// Detectors in registration (= trial) order
    detectors: Vec<Arc<dyn Detector>>,
    /// Name -> position in `detectors`
    index: HashMap<String, usize>,
}

impl DetectorRegistry {
    pub fn new() -> Self {
        Self {
            detectors: Vec::new(),
            index: HashMap::new(),
        }
    }

    /// Register a detector, appending it to the trial order
    ///
    /// Fails with [`RegistryError::DuplicateDetector`] if a detector with
    /// the same name is already present; the registry is left unchanged.
    pub fn register(&mut self, detector: impl Detector + 'static) -> Result<(), RegistryError> {
        self.register_arc(Arc::new(detector))
    }

    /// Register an already shared detector
    pub fn register_arc(&mut self, detector: Arc<dyn Detector>) -> Result<(), RegistryError> {
        let name = detector.name().to_string();
        if self.index.contains_key(&name) {
            return Err(RegistryError::DuplicateDetector(name));
        }
        self.index.insert(name, self.detectors.len());
        self.detectors.push(detector);
        Ok(())
    }

    /// Look up a detector by name
    pub fn get(&self, name: &str) -> Result<&Arc<dyn Detector>, RegistryError> {
        self.index
            .get(name)
            .map(|&i| &self.detectors[i])
            .ok_or_else(|| RegistryError::UnknownDetector(name.to_string()))
    }

    /// All detectors in trial order (read-only view)
    pub fn all(&self) -> &[Arc<dyn Detector>] {
        &self.detectors
    }

    /// Registered detector names in trial order
    pub fn names(&self) -> Vec<&str> {
        self.detectors.iter().map(|d| d.name()).collect()
    }

    /// Number of registered detectors
    pub fn len(&self) -> usize {
        self.detectors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.detectors.is_empty()
    }
}

impl Default for DetectorRegistry {
    fn default() -> Self {
        Self::new()
    }
}
