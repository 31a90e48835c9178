//! Standard output sink.

use pricer_core::types::{PricingError, PricingResult};
use pricer_pipeline::Sink;
use std::fmt::Display;
use std::io::{self, Write};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Mutex, PoisonError};
use tracing::debug;

/// Line written by [`ConsoleSink::finish`].
pub const END_MARKER: &str = "end";

/// Significant digits printed per field.
pub const SIGNIFICANT_DIGITS: usize = 6;

/// Serialises console emission across every `ConsoleSink` in the process.
static CONSOLE_GUARD: Mutex<()> = Mutex::new(());

/// Sink printing each result as `(price,delta,gamma)` and [`END_MARKER`] on
/// finish.
///
/// Fields use [`SIGNIFICANT_DIGITS`] significant digits, switching to
/// exponent notation for very large or small magnitudes:
/// `(2.13337,0.372483,0.0420428)`. Use a file sink for full precision.
///
/// Every line is written and flushed while holding a process-wide guard, so
/// pipelines running on different threads never interleave within a line.
#[derive(Debug, Default)]
pub struct ConsoleSink {
    lines: AtomicUsize,
}

impl ConsoleSink {
    /// Create a console sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of lines this sink has written.
    pub fn lines_written(&self) -> usize {
        self.lines.load(Ordering::Relaxed)
    }

    fn emit(&self, line: impl Display) -> Result<(), PricingError> {
        let _guard = CONSOLE_GUARD.lock().unwrap_or_else(PoisonError::into_inner);
        write_line(&mut io::stdout().lock(), line)?;
        self.lines.fetch_add(1, Ordering::Relaxed);
        Ok(())
    }
}

impl Sink for ConsoleSink {
    fn accept(&self, result: PricingResult) -> Result<(), PricingError> {
        debug!(price = result.price, "Printing result");
        self.emit(render(&result))
    }

    fn finish(&self) -> Result<(), PricingError> {
        self.emit(END_MARKER)
    }
}

/// Console line for one result.
pub fn render(result: &PricingResult) -> String {
    format!(
        "({},{},{})",
        significant(result.price),
        significant(result.delta),
        significant(result.gamma)
    )
}

/// Shortest rendering of `value` with [`SIGNIFICANT_DIGITS`] significant
/// digits, in the manner of printf `%g`.
fn significant(value: f64) -> String {
    if value.is_nan() {
        return "nan".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "inf" } else { "-inf" }.to_string();
    }
    if value == 0.0 {
        return if value.is_sign_negative() { "-0" } else { "0" }.to_string();
    }

    // Exponent after rounding, so 999999.5 switches to 1e+06
    let scientific = format!("{:.*e}", SIGNIFICANT_DIGITS - 1, value);
    let Some((mantissa, exponent)) = scientific.split_once('e') else {
        return scientific;
    };
    let exponent: i32 = match exponent.parse() {
        Ok(exponent) => exponent,
        Err(_) => return scientific,
    };

    if exponent < -4 || exponent >= SIGNIFICANT_DIGITS as i32 {
        let sign = if exponent < 0 { '-' } else { '+' };
        format!("{}e{}{:02}", trim_fraction(mantissa), sign, exponent.abs())
    } else {
        let decimals = (SIGNIFICANT_DIGITS as i32 - 1 - exponent) as usize;
        trim_fraction(&format!("{:.*}", decimals, value)).to_string()
    }
}

fn trim_fraction(digits: &str) -> &str {
    if digits.contains('.') {
        digits.trim_end_matches('0').trim_end_matches('.')
    } else {
        digits
    }
}

fn write_line<W: Write>(out: &mut W, line: impl Display) -> Result<(), PricingError> {
    writeln!(out, "{}", line)
        .and_then(|()| out.flush())
        .map_err(|e| PricingError::sink_write_failed(format!("stdout: {}", e)))
}
