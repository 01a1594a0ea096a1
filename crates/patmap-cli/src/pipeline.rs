//! Conversion pipeline stages: ingest, map, output.
//!
//! Load failures abort before anything is printed. A failure to persist the
//! output file is reported after the document has already been printed.

use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result};
use tracing::{error, info, info_span, warn};

use patmap_ingest::{PatientRecord, load_mapping_config, load_patients, unknown_transforms};
use patmap_model::{FlatRecordMap, MappingConfig, OutputDocument};
use patmap_output::{emit_document, render_document, write_document};
use patmap_transform::{FieldResolver, ResolutionContext, TransformRegistry};

/// Both input artifacts, loaded and parsed.
#[derive(Debug, Clone)]
pub struct ConvertInputs {
    pub patients: Vec<PatientRecord>,
    pub config: MappingConfig,
}

/// Where and how the rendered document is emitted.
#[derive(Debug, Clone)]
pub struct OutputConfig {
    pub path: PathBuf,
    /// Print the document to the console before persisting it.
    pub print: bool,
}

/// Load the patient XML and the mapping config, in that order.
pub fn load_inputs(input: &Path, config: &Path) -> Result<ConvertInputs> {
    let span = info_span!("ingest", input = %input.display(), config = %config.display());
    let _guard = span.enter();
    let start = Instant::now();

    let patients = load_patients(input)
        .inspect_err(|e| error!(error = %e, "error loading patient XML"))
        .with_context(|| format!("load patients from {}", input.display()))?;
    let mapping = load_mapping_config(config)
        .inspect_err(|e| error!(error = %e, "error loading mapping config"))
        .with_context(|| format!("load mapping config from {}", config.display()))?;

    info!(
        record_count = patients.len(),
        rule_count = mapping.rule_count(),
        duration_ms = start.elapsed().as_millis(),
        "ingest complete"
    );
    Ok(ConvertInputs {
        patients,
        config: mapping,
    })
}

/// Warn about every rule whose transform tag is not registered.
pub fn check_transforms(config: &MappingConfig, registry: &TransformRegistry) -> Vec<String> {
    let known = registry.names();
    let unknown = unknown_transforms(config, &known);
    for path in &unknown {
        warn!(json_field = %path, "unknown transform, value passes through unchanged");
    }
    unknown
}

/// Map every patient record, preserving input order.
pub fn convert(
    inputs: &ConvertInputs,
    registry: &TransformRegistry,
    context: ResolutionContext,
) -> OutputDocument {
    let span = info_span!("map", today = %context.today);
    let _guard = span.enter();
    let start = Instant::now();

    let records: Vec<FlatRecordMap> = inputs
        .patients
        .iter()
        .map(PatientRecord::to_flat_record)
        .collect();
    let document =
        FieldResolver::new(registry, context).transform_all(&records, &inputs.config.mappings);

    info!(
        record_count = document.len(),
        duration_ms = start.elapsed().as_millis(),
        "mapping complete"
    );
    document
}

/// Render the document, optionally print it to `console`, then persist it.
pub fn output<W: Write>(
    document: &OutputDocument,
    config: &OutputConfig,
    console: &mut W,
) -> Result<()> {
    let span = info_span!("output", path = %config.path.display());
    let _guard = span.enter();

    let rendered = render_document(document).context("render output document")?;
    if config.print {
        emit_document(console, &rendered).context("print output document")?;
    }
    write_document(&config.path, &rendered)
        .inspect_err(|e| error!(error = %e, "error writing output"))
        .with_context(|| format!("write output to {}", config.path.display()))?;
    Ok(())
}
