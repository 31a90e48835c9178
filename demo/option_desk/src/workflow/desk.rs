//! Wiring of configured collaborators into a pricing batch.

use super::{BatchSummary, PricingBatch, ProgressCallback};
use crate::config::DeskConfig;
use crate::error::DeskError;
use demo_inputs::prelude::{FileSource, StaticSource};
use demo_outputs::prelude::{ConsoleSink, JsonLinesSink};
use pricer_core::types::OptionParameters;
use pricer_pipeline::{Sink, Source};
use tracing::info;

/// Source named by the configuration: the parameter file if set, otherwise
/// the inline `option` table, otherwise the textbook contract.
pub fn build_source(config: &DeskConfig) -> Box<dyn Source> {
    match (&config.parameters_file, config.option) {
        (Some(path), _) => {
            info!(path = %path.display(), "Reading parameters from file");
            Box::new(FileSource::new(path))
        }
        (None, Some(params)) => Box::new(StaticSource::new(params)),
        (None, None) => Box::new(StaticSource::new(OptionParameters::textbook())),
    }
}

/// Sink named by the configuration: a JSON Lines file if `output_file` is
/// set, otherwise the console.
///
/// # Errors
/// [`DeskError::Pricing`] if the output file cannot be opened.
pub fn build_sink(config: &DeskConfig) -> Result<Box<dyn Sink>, DeskError> {
    match &config.output_file {
        Some(path) => {
            info!(path = %path.display(), "Writing results to file");
            Ok(Box::new(JsonLinesSink::open(path)?))
        }
        None => Ok(Box::new(ConsoleSink::new())),
    }
}

/// Price every configured job with the configured collaborators.
///
/// # Errors
/// - [`DeskError::Pricing`] if a collaborator cannot be built
/// - [`DeskError::BatchFailed`] if any job failed
pub fn run_desk(
    config: &DeskConfig,
    progress: Option<ProgressCallback>,
) -> Result<BatchSummary, DeskError> {
    let source = build_source(config);
    let sink = build_sink(config)?;

    let mut batch = PricingBatch::from_config(config);
    if let Some(progress) = progress {
        batch = batch.with_progress(progress);
    }

    batch.run(&source, &sink).into_result()
}
