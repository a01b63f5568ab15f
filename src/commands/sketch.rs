use crate::config::Settings;
use crate::export::{write_json, FingerprintExport};
use crate::sequence_processor::{
    process_files, ProcessingStats, SequenceFile, SequenceReader, SketchCollector,
};
use crate::sketch::Fingerprint;
use crate::utils::progress_bar_builder::ProgressBarBuilder;
use anyhow::Result;
use indicatif::ProgressBar;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// A file reduced to its fingerprint.
#[derive(Debug, Clone)]
pub struct SketchedFile {
    pub path: PathBuf,
    pub fingerprint: Fingerprint,
    pub stats: ProcessingStats,
}

impl SketchedFile {
    pub fn label(&self) -> String {
        self.path.display().to_string()
    }
}

/// Sketch every record of one FASTA/FASTQ file into a fresh fingerprint.
pub fn sketch_file(path: &Path, settings: &Settings, progress: &ProgressBar) -> Result<SketchedFile> {
    let fingerprint = Fingerprint::new(settings.kmer_size, settings.sketch_size)?;
    let mut collector = SketchCollector::new(fingerprint);
    let mut reader = SequenceFile::open(path)?;

    let stats = reader.read_sequences(&mut collector, progress)?;

    if stats.processed == 0 {
        warn!(
            "No sequences of at least {} bp in {}",
            settings.kmer_size,
            path.display()
        );
    }
    info!(
        "{}: {} sequences, {}/{} sketch slots filled",
        path.display(),
        stats.processed,
        collector.fingerprint().filled(),
        settings.sketch_size
    );

    Ok(SketchedFile {
        path: path.to_path_buf(),
        fingerprint: collector.into_fingerprint(),
        stats,
    })
}

/// Sketch each file into its own fingerprint, `settings.threads` files at a time.
pub fn sketch_files(paths: &[PathBuf], settings: &Settings) -> Result<Vec<SketchedFile>> {
    let progress = ProgressBarBuilder::new(format!("Sketching {} files", paths.len()))
        .with_template("{spinner:.green} [{elapsed_precise}] {msg} ({pos} records)")
        .with_tick()
        .build()?;

    let files = process_files(paths, settings.threads, |path| {
        sketch_file(path, settings, &progress)
    })?;

    progress.finish_with_message(format!("Sketched {} files", files.len()));
    Ok(files)
}

pub fn run(files: Vec<PathBuf>, settings: Settings, json: bool, show_hashes: bool) -> Result<()> {
    let sketched = sketch_files(&files, &settings)?;

    let stdout = io::stdout();
    let mut writer = BufWriter::new(stdout.lock());

    if json {
        let exports: Vec<FingerprintExport> = sketched
            .iter()
            .map(|file| FingerprintExport::new(file.label(), &file.fingerprint, &file.stats, show_hashes))
            .collect();
        write_json(&mut writer, &exports)?;
    } else {
        for file in &sketched {
            write!(
                writer,
                "{}\t{}/{}\t{}",
                file.label(),
                file.fingerprint.filled(),
                file.fingerprint.sketch_size(),
                file.fingerprint.hexdigest()
            )?;
            if show_hashes {
                let hashes: Vec<String> = file.fingerprint.hashes().iter().map(u64::to_string).collect();
                write!(writer, "\t{}", hashes.join(","))?;
            }
            writeln!(writer)?;
        }
    }

    writer.flush()?;
    Ok(())
}
