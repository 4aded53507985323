use super::{ConstructError, Detector, ProbeResult};
use crate::handle::HandleBuilder;
use crate::opener::OpenOptions;
use std::path::Path;

/// Detector that claims resources by file extension
///
/// Extensions are matched case-insensitively and without the dot. An empty
/// extension list claims every resource, which makes the detector usable as
/// a registered-last fallback. Handle construction is delegated to a
/// caller-supplied factory.
///
/// # Example
/// ```ignore
/// let geotiff = ExtensionDetector::new("geotiff", &["tif", "tiff"], |resource, _options| {
///     Ok(Handle::builder().band("gray"))
/// });
/// registry.register(geotiff)?;
/// ```
pub struct ExtensionDetector<F> {
    name: String,
    extensions: Vec<String>,
    factory: F,
}

impl<F> ExtensionDetector<F>
where
    F: Fn(&str, &OpenOptions) -> Result<HandleBuilder, ConstructError> + Send + Sync,
{
    pub fn new(name: impl Into<String>, extensions: &[&str], factory: F) -> Self {
        Self {
            name: name.into(),
            extensions: extensions.iter().map(|e| e.to_lowercase()).collect(),
            factory,
        }
    }
}

impl<F> Detector for ExtensionDetector<F>
where
    F: Fn(&str, &OpenOptions) -> Result<HandleBuilder, ConstructError> + Send + Sync,
{
    fn name(&self) -> &str {
        &self.name
    }

    fn probe(&self, resource: &str) -> ProbeResult {
        if self.extensions.is_empty() {
            return ProbeResult::claim();
        }

        let ext = Path::new(resource)
            .extension()
            .and_then(|e| e.to_str())
            .map(|s| s.to_lowercase())
            .unwrap_or_default();

        if self.extensions.iter().any(|e| *e == ext) {
            ProbeResult::claim()
        } else {
            ProbeResult::Decline
        }
    }

    fn construct(
        &self,
        resource: &str,
        options: &OpenOptions,
    ) -> Result<HandleBuilder, ConstructError> {
        (self.factory)(resource, options)
    }
}
