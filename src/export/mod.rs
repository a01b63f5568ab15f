pub mod formats;

pub use formats::distance::DistanceExport;
pub use formats::fingerprint::{FingerprintExport, FingerprintParameters, FingerprintStatistics};

use anyhow::{Context, Result};
use serde::Serialize;
use std::io::Write;

/// Write `records` as pretty-printed JSON followed by a newline.
pub fn write_json<W: Write, T: Serialize + ?Sized>(writer: &mut W, records: &T) -> Result<()> {
    serde_json::to_writer_pretty(&mut *writer, records).context("Failed to serialize report")?;
    writeln!(writer)?;
    Ok(())
}
