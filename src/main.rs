use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use clap::Parser;
use rasterprobe::{
    DetectorRegistry, ExtensionDetector, Handle, OpenOptions, Opener, StaticVocabulary,
    Validator, VocabularyRecord, INSTRUMENT_KEY, PLATFORM_KEY,
};
use std::path::PathBuf;
use std::time::{Duration, Instant};
use walkdir::WalkDir;

/// Detect the format of every file under a directory and run the
/// post-open validation checklist against each handle.
#[derive(Parser, Debug)]
#[command(name = "rasterprobe", version)]
struct Args {
    /// Directory to scan for resources
    root: PathBuf,

    /// Force a specific detector instead of auto-detecting
    #[arg(long)]
    detector: Option<String>,

    /// Reject resources claimed by more than one detector
    #[arg(long)]
    strict: bool,

    /// Bound each probe call, in milliseconds (0 = unbounded)
    #[arg(long, default_value_t = 0)]
    probe_timeout_ms: u64,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();
    let start_time = Instant::now();

    println!("=== rasterprobe: format detection and validation ===\n");

    // Step 1: Build vocabulary and registry
    println!("Step 1: Building detector registry...");
    let vocab = demo_vocabulary();
    let registry = demo_registry(&vocab)?;
    println!(
        "✓ Registered {} detectors: {:?}\n",
        registry.len(),
        registry.names()
    );

    let options = OpenOptions {
        strict: args.strict,
        probe_timeout: match args.probe_timeout_ms {
            0 => None,
            ms => Some(Duration::from_millis(ms)),
        },
    };
    let opener = Opener::new(&registry);
    let validator = Validator::new(&vocab);

    // Step 2: Open and validate every file under the root
    println!("Step 2: Scanning {}...\n", args.root.display());
    let mut opened = 0usize;
    let mut failed_open = 0usize;
    let mut failed_checks = 0usize;

    for entry in WalkDir::new(&args.root)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file())
    {
        let resource = entry.path().to_string_lossy().into_owned();

        let handle = match opener.open_with(&resource, args.detector.as_deref(), &options) {
            Ok(handle) => handle,
            Err(e) => {
                failed_open += 1;
                println!("  ✗ {}: {}", resource, e);
                continue;
            }
        };
        opened += 1;

        let report = validator.validate_expecting(&handle, args.detector.as_deref());
        if report.passed() {
            println!(
                "  ✓ {} [{}] - {} bands, {} checks",
                resource,
                handle.detector(),
                handle.bands().len(),
                report.checks_run()
            );
        } else {
            failed_checks += 1;
            println!("  ✗ {} [{}]", resource, handle.detector());
            for failure in report.failures() {
                println!("      {}", failure);
            }
        }
    }

    // Step 3: Summary
    println!(
        "\n✓ Done: {} opened, {} failed to open, {} failed checks [{:.2}s]",
        opened,
        failed_open,
        failed_checks,
        start_time.elapsed().as_secs_f64()
    );

    if failed_open + failed_checks > 0 {
        std::process::exit(1);
    }
    Ok(())
}

/// Small built-in vocabulary standing in for the real lookup service
fn demo_vocabulary() -> StaticVocabulary {
    let mut vocab = StaticVocabulary::new();
    vocab.add_platform(
        VocabularyRecord::new("SENTINEL-1A").with_field("Series_Entity", "SENTINEL-1"),
    );
    vocab.add_platform(VocabularyRecord::new("TERRA").with_field("Category", "Earth Observation"));
    vocab.add_instrument(VocabularyRecord::new("SAR-C").with_field("Class", "Active Remote Sensing"));
    vocab.add_instrument(VocabularyRecord::new("MODIS").with_field("Class", "Passive Remote Sensing"));
    vocab
}

/// Registry of extension-based demo detectors; the last one claims
/// everything and acts as the fallback
fn demo_registry(vocab: &StaticVocabulary) -> Result<DetectorRegistry> {
    let mut registry = DetectorRegistry::new();

    registry.register(ExtensionDetector::new(
        "sar_geotiff",
        &["tif", "tiff"],
        detector_factory(vocab, "SENTINEL-1A", "SAR-C", &["sigma0", "sigma0_complex"])?,
    ))?;
    registry.register(ExtensionDetector::new(
        "modis_netcdf",
        &["nc"],
        detector_factory(vocab, "TERRA", "MODIS", &["radiance"])?,
    ))?;
    registry.register(ExtensionDetector::new(
        "generic",
        &[],
        detector_factory(vocab, "TERRA", "MODIS", &["raw_counts"])?,
    ))?;

    Ok(registry)
}

type Factory = Box<
    dyn Fn(&str, &OpenOptions) -> Result<rasterprobe::HandleBuilder, rasterprobe::ConstructError>
        + Send
        + Sync,
>;

/// Build a handle factory that reads temporal bounds from the file's
/// modification time and fills metadata from the given vocabulary records
fn detector_factory(
    vocab: &StaticVocabulary,
    platform: &str,
    instrument: &str,
    bands: &[&str],
) -> Result<Factory> {
    use rasterprobe::VocabularyLookup;

    let platform_json = serde_json::to_string(
        &vocab
            .platform(platform)
            .with_context(|| format!("platform '{}' missing from vocabulary", platform))?,
    )?;
    let instrument_json = serde_json::to_string(
        &vocab
            .instrument(instrument)
            .with_context(|| format!("instrument '{}' missing from vocabulary", instrument))?,
    )?;
    let bands: Vec<String> = bands.iter().map(|b| b.to_string()).collect();

    Ok(Box::new(
        move |resource: &str,
              _options: &OpenOptions|
              -> Result<rasterprobe::HandleBuilder, rasterprobe::ConstructError> {
            let modified: DateTime<Utc> = std::fs::metadata(resource)?.modified()?.into();
            Ok(Handle::builder()
                .start_time(modified)
                .end_time(modified)
                .metadata(PLATFORM_KEY, platform_json.clone())
                .metadata(INSTRUMENT_KEY, instrument_json.clone())
                .bands(bands.clone()))
        },
    ))
}
