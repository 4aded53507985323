mod error;


pub use error::OpenError;

use crate::detector::{Detector, DetectorRegistry, ProbeResult};
use crate::handle::Handle;
use std::sync::{mpsc, Arc};
use std::time::Duration;

/// Per-open configuration
#[derive(Debug, Clone, Default)]
pub struct OpenOptions {
    /// Reject resources claimed by more than one detector during
    /// auto-detection instead of taking the first in trial order
    pub strict: bool,
    /// Bound on each probe call; a probe that does not answer in time is
    /// treated as a decline. Disabled when `None`.
    pub probe_timeout: Option<Duration>,
}

/// Resolves which detector handles a resource and produces the handle
///
/// Holds a shared reference to an explicitly constructed registry; build
/// one registry at startup and pass it into openers. Opening is
/// deterministic: identical registry state and resource always select the
/// same detector.
pub struct Opener<'r> {
    registry: &'r DetectorRegistry,
}

impl<'r> Opener<'r> {
    pub fn new(registry: &'r DetectorRegistry) -> Self {
        Self { registry }
    }

    /// Auto-detect the format of `resource` and open it
    pub fn open(&self, resource: &str) -> Result<Handle, OpenError> {
        self.open_with(resource, None, &OpenOptions::default())
    }

    /// Open `resource` with an explicitly named detector
    pub fn open_as(&self, resource: &str, detector: &str) -> Result<Handle, OpenError> {
        self.open_with(resource, Some(detector), &OpenOptions::default())
    }

    /// Open `resource`, forcing `detector` when given, with full options
    ///
    /// A forced detector is still asked to confirm compatibility through
    /// its probe; a decline fails with [`OpenError::DetectorMismatch`]
    /// rather than risking a silent misparse.
    pub fn open_with(
        &self,
        resource: &str,
        detector: Option<&str>,
        options: &OpenOptions,
    ) -> Result<Handle, OpenError> {
        let selected = match detector {
            Some(name) => self.forced(resource, name, options)?,
            None => self.auto_detect(resource, options)?,
        };

        log::debug!("opening '{}' with detector '{}'", resource, selected.name());

        let builder = selected
            .construct(resource, options)
            .map_err(|source| OpenError::Construction {
                detector: selected.name().to_string(),
                resource: resource.to_string(),
                source,
            })?;

        Ok(builder.build(selected.name(), resource))
    }

    fn forced(
        &self,
        resource: &str,
        name: &str,
        options: &OpenOptions,
    ) -> Result<&'r Arc<dyn Detector>, OpenError> {
        let detector = self.registry.get(name)?;
        if !probe_with_timeout(detector, resource, options.probe_timeout).is_claim() {
            return Err(OpenError::DetectorMismatch {
                detector: name.to_string(),
                resource: resource.to_string(),
            });
        }
        Ok(detector)
    }

    fn auto_detect(
        &self,
        resource: &str,
        options: &OpenOptions,
    ) -> Result<&'r Arc<dyn Detector>, OpenError> {
        if options.strict {
            return self.auto_detect_strict(resource, options);
        }

        for detector in self.registry.all() {
            if probe_with_timeout(detector, resource, options.probe_timeout).is_claim() {
                return Ok(detector);
            }
            log::trace!("detector '{}' declined '{}'", detector.name(), resource);
        }

        Err(OpenError::NoMatchingDetector {
            resource: resource.to_string(),
            tried: self.registry.names().iter().map(|n| n.to_string()).collect(),
        })
    }

    /// Strict policy: probe everything, reject multi-claimed resources
    fn auto_detect_strict(
        &self,
        resource: &str,
        options: &OpenOptions,
    ) -> Result<&'r Arc<dyn Detector>, OpenError> {
        let claimants: Vec<&Arc<dyn Detector>> = self
            .registry
            .all()
            .iter()
            .filter(|d| probe_with_timeout(d, resource, options.probe_timeout).is_claim())
            .collect();

        match claimants.as_slice() {
            [] => Err(OpenError::NoMatchingDetector {
                resource: resource.to_string(),
                tried: self.registry.names().iter().map(|n| n.to_string()).collect(),
            }),
            [single] => Ok(*single),
            many => Err(OpenError::AmbiguousClaim {
                resource: resource.to_string(),
                claimants: many.iter().map(|d| d.name().to_string()).collect(),
            }),
        }
    }
}

/// Run a probe, optionally bounded by a timeout
///
/// With a timeout set the probe runs on a helper thread so a detector that
/// hangs while sniffing a large header cannot stall the open; the thread is
/// detached and its late answer discarded.
fn probe_with_timeout(
    detector: &Arc<dyn Detector>,
    resource: &str,
    timeout: Option<Duration>,
) -> ProbeResult {
    let Some(timeout) = timeout else {
        return detector.probe(resource);
    };

    let (tx, rx) = mpsc::channel();
    let worker = Arc::clone(detector);
    let target = resource.to_string();
    std::thread::spawn(move || {
        let _ = tx.send(worker.probe(&target));
    });

    match rx.recv_timeout(timeout) {
        Ok(result) => result,
        Err(_) => {
            log::warn!(
                "probe by '{}' on '{}' exceeded {:?}, treating as decline",
                detector.name(),
                resource,
                timeout
            );
            ProbeResult::Decline
        }
    }
}
