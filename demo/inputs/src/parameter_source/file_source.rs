//! JSON file parameter source.

use pricer_core::types::{OptionParameters, PricingError};
use pricer_pipeline::Source;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Source reading an [`OptionParameters`] JSON document on every fetch.
///
/// A missing, unreadable or malformed file surfaces as
/// [`PricingError::DataUnavailable`]. The file is re-read each time so
/// edits between runs are picked up.
///
/// Expected layout:
/// ```json
/// { "strike": 65.0, "expiry": 0.25, "rate": 0.08, "volatility": 0.3 }
/// ```
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    /// Create a source reading from `path`.
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Path of the parameter file.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Source for FileSource {
    fn fetch(&self) -> Result<OptionParameters, PricingError> {
        let content = fs::read_to_string(&self.path).map_err(|e| {
            PricingError::data_unavailable(format!("{}: {}", self.path.display(), e))
        })?;

        let params: OptionParameters = serde_json::from_str(&content).map_err(|e| {
            PricingError::data_unavailable(format!("{}: {}", self.path.display(), e))
        })?;

        debug!(path = %self.path.display(), strike = params.strike, "Parameters loaded from file");
        Ok(params)
    }
}
