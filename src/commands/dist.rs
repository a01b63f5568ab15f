use super::sketch::{sketch_files, SketchedFile};
use crate::config::Settings;
use crate::export::{write_json, DistanceExport};
use crate::sketch::{distance, symmetric_distance};
use anyhow::{bail, Context, Result};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

/// Distances between every pair of sketched files.
///
/// Asymmetric mode reports each ordered pair, since `distance(a, b)` and
/// `distance(b, a)` can differ. Symmetric mode reports each unordered pair
/// once with the mean of both directions.
pub fn distance_rows(files: &[SketchedFile], symmetric: bool) -> Result<Vec<DistanceExport>> {
    let mut rows = Vec::new();

    for (i, query) in files.iter().enumerate() {
        for (j, reference) in files.iter().enumerate() {
            if i == j || (symmetric && j < i) {
                continue;
            }

            let value = if symmetric {
                symmetric_distance(&query.fingerprint, &reference.fingerprint)
            } else {
                distance(&query.fingerprint, &reference.fingerprint)
            }
            .with_context(|| {
                format!(
                    "Cannot compare {} with {}",
                    query.label(),
                    reference.label()
                )
            })?;

            rows.push(DistanceExport {
                query: query.label(),
                reference: reference.label(),
                distance: value,
                symmetric,
            });
        }
    }

    Ok(rows)
}

pub fn run(
    files: Vec<PathBuf>,
    settings: Settings,
    symmetric: bool,
    json: bool,
    output_file: Option<PathBuf>,
) -> Result<()> {
    if files.len() < 2 {
        bail!("At least two input files are required to compute distances");
    }

    let sketched = sketch_files(&files, &settings)?;
    let rows = distance_rows(&sketched, symmetric)?;

    let mut writer: Box<dyn Write> = match &output_file {
        Some(path) => Box::new(BufWriter::new(
            File::create(path)
                .with_context(|| format!("Failed to create output file {}", path.display()))?,
        )),
        None => Box::new(BufWriter::new(io::stdout().lock())),
    };

    if json {
        write_json(&mut writer, &rows)?;
    } else {
        writeln!(writer, "#query\treference\tdistance")?;
        for row in &rows {
            writeln!(writer, "{}", row.to_tsv_row()).context("Failed to write distance")?;
        }
    }
    writer.flush()?;

    if let Some(path) = output_file {
        eprintln!("Wrote {} distances to {}", rows.len(), path.display());
    }
    Ok(())
}
