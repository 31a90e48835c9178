//! JSON Lines file sink.

use pricer_core::types::{PricingError, PricingResult};
use pricer_pipeline::Sink;
use std::fs::{self, File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing::info;

/// Sink appending one JSON object per result to a file.
///
/// Output is buffered; `finish` flushes so a completed run is always on disk.
///
/// ```text
/// {"price":2.1333684449162043,"delta":0.37248279796197303,"gamma":0.04204275575378518}
/// ```
#[derive(Debug)]
pub struct JsonLinesSink {
    path: PathBuf,
    writer: Mutex<BufWriter<File>>,
}

impl JsonLinesSink {
    /// Open `path` for appending, creating it and its parent directory if
    /// needed.
    ///
    /// # Errors
    /// [`PricingError::SinkWriteFailed`] if the file cannot be opened.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, PricingError> {
        let path = path.as_ref().to_path_buf();

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| io_failure(&path, e))?;
        }

        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .map_err(|e| io_failure(&path, e))?;

        Ok(Self {
            path,
            writer: Mutex::new(BufWriter::new(file)),
        })
    }

    /// Path of the output file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn with_writer<F>(&self, f: F) -> Result<(), PricingError>
    where
        F: FnOnce(&mut BufWriter<File>) -> std::io::Result<()>,
    {
        let mut writer = self
            .writer
            .lock()
            .map_err(|_| PricingError::sink_write_failed("file writer poisoned"))?;
        f(&mut writer).map_err(|e| io_failure(&self.path, e))
    }
}

impl Sink for JsonLinesSink {
    fn accept(&self, result: PricingResult) -> Result<(), PricingError> {
        let line = serde_json::to_string(&result)
            .map_err(|e| PricingError::sink_write_failed(e.to_string()))?;
        self.with_writer(|w| writeln!(w, "{}", line))
    }

    fn finish(&self) -> Result<(), PricingError> {
        self.with_writer(|w| w.flush())?;
        info!(path = %self.path.display(), "Results flushed to file");
        Ok(())
    }
}

fn io_failure(path: &Path, err: std::io::Error) -> PricingError {
    PricingError::sink_write_failed(format!("{}: {}", path.display(), err))
}
